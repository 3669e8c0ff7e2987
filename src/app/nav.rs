use leptos::prelude::*;
use leptos_use::use_window_scroll;

use crate::content::{Icon, NAV_LINKS};
use crate::download::ResumeAsset;

use super::reveal::scroll_to_section;

/// Fixed header: condenses and gains a backdrop once the page is scrolled
/// past 50px, collapses to an overlay menu on small screens.
#[component]
pub fn Navigation(resume: ResumeAsset) -> impl IntoView {
    let (_, scroll_y) = use_window_scroll();
    let scrolled = Signal::derive(move || scroll_y.get() > 50.0);
    let (menu_open, set_menu_open) = signal(false);

    let download = move |_| {
        set_menu_open(false);
        #[cfg(feature = "hydrate")]
        leptos::task::spawn_local(crate::download::download_resume(resume));
        #[cfg(not(feature = "hydrate"))]
        let _ = resume;
    };

    view! {
        <nav
            class=move || {
                format!(
                    "fixed top-0 left-0 right-0 z-50 transition-all duration-500 {}",
                    if scrolled() {
                        "bg-white/95 backdrop-blur-xl shadow-lg shadow-amber-100/50"
                    } else {
                        "bg-transparent"
                    },
                )
            }
            style=move || format!("height: {}", if scrolled() { "64px" } else { "80px" })
        >
            <div class="max-w-7xl mx-auto px-6 h-full flex items-center justify-between">
                <a
                    href="#home"
                    on:click=move |ev| {
                        ev.prevent_default();
                        scroll_to_section("home");
                    }
                    class="text-xl font-bold tracking-wider hover:text-amber-600 transition-colors duration-300 font-display"
                >
                    <span class="text-gradient-gold">"PORTFOLIO"</span>
                </a>

                <div class="hidden lg:flex items-center gap-8">
                    {NAV_LINKS
                        .into_iter()
                        .map(|link| {
                            view! {
                                <a
                                    href=format!("#{}", link.section)
                                    on:click=move |ev| {
                                        ev.prevent_default();
                                        scroll_to_section(link.section);
                                    }
                                    class="relative text-sm text-gray-600 hover:text-amber-600 transition-colors duration-300 group"
                                >
                                    {link.label}
                                    <span class="absolute -bottom-1 left-1/2 w-0 h-0.5 bg-gradient-to-r from-amber-400 to-amber-600 transition-all duration-300 group-hover:w-full group-hover:left-0"></span>
                                </a>
                            }
                        })
                        .collect_view()}
                </div>

                <div class="hidden lg:flex items-center gap-4">
                    <button
                        type="button"
                        on:click=download
                        class="flex items-center gap-2 px-4 py-2 text-sm font-medium text-amber-600 border border-amber-400/50 rounded-full hover:bg-amber-50 transition-all duration-300"
                    >
                        <i class=Icon::Download.class()></i>
                        "Resume"
                    </button>
                    <a
                        href="#contact"
                        on:click=move |ev| {
                            ev.prevent_default();
                            scroll_to_section("contact");
                        }
                        class="px-6 py-2.5 text-sm font-medium bg-gradient-to-r from-amber-500 to-amber-600 text-white rounded-full hover:from-amber-600 hover:to-amber-700 transition-all duration-300 glow-gold"
                    >
                        "Let's Talk"
                    </a>
                </div>

                <button
                    class="lg:hidden text-gray-800 p-2 text-2xl"
                    on:click=move |_| set_menu_open(!menu_open.get_untracked())
                    aria-label="Toggle menu"
                >
                    <i class=move || {
                        if menu_open() { Icon::Close.class() } else { Icon::Menu.class() }
                    }></i>
                </button>
            </div>
        </nav>

        // Mobile overlay menu
        <div class=move || {
            format!(
                "fixed inset-0 z-40 bg-white/98 backdrop-blur-xl transition-all duration-500 lg:hidden {}",
                if menu_open() { "opacity-100 visible" } else { "opacity-0 invisible" },
            )
        }>
            <div class="flex flex-col items-center justify-center h-full gap-6 pt-20">
                {NAV_LINKS
                    .into_iter()
                    .map(|link| {
                        view! {
                            <a
                                href=format!("#{}", link.section)
                                on:click=move |ev| {
                                    ev.prevent_default();
                                    scroll_to_section(link.section);
                                    set_menu_open(false);
                                }
                                class="text-xl text-gray-800 hover:text-amber-600 transition-colors duration-300"
                            >
                                {link.label}
                            </a>
                        }
                    })
                    .collect_view()}
                <div class="flex flex-col gap-4 mt-6">
                    <button
                        type="button"
                        on:click=download
                        class="flex items-center justify-center gap-2 px-8 py-3 text-amber-600 border border-amber-400 rounded-full"
                    >
                        <i class=Icon::Download.class()></i>
                        "Download Resume"
                    </button>
                    <a
                        href="#contact"
                        on:click=move |ev| {
                            ev.prevent_default();
                            scroll_to_section("contact");
                            set_menu_open(false);
                        }
                        class="px-8 py-3 text-lg font-medium bg-gradient-to-r from-amber-500 to-amber-600 text-white rounded-full text-center"
                    >
                        "Let's Talk"
                    </a>
                </div>
            </div>
        </div>
    }
}
