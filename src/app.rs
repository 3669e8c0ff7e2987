mod about;
mod achievements;
mod contact;
mod education;
mod experience;
mod footer;
mod hero;
mod nav;
mod projects;
mod publications;
mod reveal;
mod skills;
mod stats;

use leptos::prelude::*;
use leptos_meta::*;
use leptos_router::{components::*, path};

use crate::content::SITE_NAME;
use crate::download::ResumeAsset;

use about::About;
use achievements::Achievements;
use contact::Contact;
use education::Education;
use experience::Experience;
use footer::Footer;
use hero::Hero;
use nav::Navigation;
use projects::Projects;
use publications::Publications;
use skills::Skills;

pub fn shell(options: LeptosOptions) -> impl IntoView {
    view! {
        <!DOCTYPE html>
        <html lang="en">
            <head>
                <meta charset="utf-8" />
                <meta name="viewport" content="width=device-width, initial-scale=1" />
                <AutoReload options=options.clone() />
                <HydrationScripts options />
                <meta name="color-scheme" content="light" />
                <link rel="shortcut icon" type="image/ico" href="/favicon.ico" />
                <link rel="stylesheet" id="leptos" href="/pkg/portfolio-site.css" />
                <MetaTags />
            </head>
            <body class="min-h-screen bg-white text-gray-900 overflow-x-hidden">
                <App />
            </body>
        </html>
    }
}

#[component]
pub fn App() -> impl IntoView {
    // Provides context that manages stylesheets, titles, meta tags, etc.
    provide_meta_context();

    // Single place the resume location is decided; everything that offers
    // the download receives this value.
    let resume = ResumeAsset::default();

    view! {
        // sets the document title
        <Title formatter=|title| format!("{SITE_NAME} - {title}") />

        <Router>
            <Navigation resume />
            <main>
                <Routes fallback=|| "Page not found.".into_view()>
                    <Route path=path!("/") view=move || view! { <HomePage resume /> } />
                </Routes>
            </main>
            <Footer />
        </Router>
    }
}

/// The one page: every section in fixed order. Sections own their data and
/// their scroll-reveal state; nothing flows between them.
#[component]
fn HomePage(resume: ResumeAsset) -> impl IntoView {
    view! {
        <Title text="Full Stack Developer" />
        <Hero resume />
        <About />
        <Skills />
        <Achievements />
        <Publications />
        <Projects />
        <Experience />
        <Education />
        <Contact resume />
    }
}
