use leptos::{either::Either, html, prelude::*};

use crate::content::{featured_split, Icon, Project, GITHUB_URL, PROJECTS};

use super::reveal::{transition, use_section_reveal};

#[component]
pub fn Projects() -> impl IntoView {
    let section_ref = NodeRef::<html::Section>::new();
    let entered = use_section_reveal(section_ref, 0.1);

    let (featured, other) = featured_split(&PROJECTS);
    let featured_len = featured.len();

    view! {
        <section
            id="projects"
            node_ref=section_ref
            class="relative py-24 md:py-32 bg-gradient-to-b from-amber-50/30 to-white overflow-hidden"
        >
            <div class="absolute top-0 left-0 w-full h-px bg-gradient-to-r from-transparent via-amber-200 to-transparent"></div>
            <div class="absolute top-40 right-0 w-96 h-96 bg-amber-100/20 rounded-full blur-3xl"></div>
            <div class="absolute bottom-20 left-20 w-64 h-64 bg-yellow-100/20 rounded-full blur-3xl"></div>

            <div class="max-w-7xl mx-auto px-6">
                <div class="text-center mb-16">
                    <div class=transition(
                        entered,
                        "flex items-center justify-center gap-4 transition-all duration-700",
                        "opacity-100 translate-y-0",
                        "opacity-0 translate-y-8",
                    )>
                        <div class="w-12 h-px bg-gradient-to-r from-amber-400 to-amber-600"></div>
                        <span class="text-amber-600 text-sm font-medium tracking-widest uppercase">
                            "Featured Work"
                        </span>
                        <div class="w-12 h-px bg-gradient-to-r from-amber-600 to-amber-400"></div>
                    </div>

                    <h2
                        class=transition(
                            entered,
                            "mt-4 text-4xl md:text-5xl font-bold text-gray-900 font-display transition-all duration-700",
                            "opacity-100 translate-y-0",
                            "opacity-0 translate-y-8",
                        )
                        style="transition-delay: 100ms; transition-timing-function: cubic-bezier(0.16, 1, 0.3, 1)"
                    >
                        "Projects That Define " <span class="text-gradient-gold">"My Craft"</span>
                    </h2>

                    <p
                        class=transition(
                            entered,
                            "mt-4 text-gray-600 max-w-2xl mx-auto transition-all duration-700",
                            "opacity-100 translate-y-0",
                            "opacity-0 translate-y-8",
                        )
                        style="transition-delay: 200ms"
                    >
                        "A selection of full-stack applications, AI-driven tools, and innovative solutions built with modern technologies."
                    </p>
                </div>

                <div class="space-y-16 mb-16">
                    {featured
                        .into_iter()
                        .enumerate()
                        .map(|(index, project)| {
                            view! {
                                <FeaturedProject
                                    project
                                    index
                                    entered
                                    last={index + 1 == featured_len}
                                />
                            }
                        })
                        .collect_view()}
                </div>

                <div class="grid md:grid-cols-2 lg:grid-cols-3 gap-6">
                    {other
                        .into_iter()
                        .enumerate()
                        .map(|(index, project)| {
                            view! { <ProjectCard project index entered /> }
                        })
                        .collect_view()}
                </div>

                <div
                    class=transition(
                        entered,
                        "mt-16 text-center transition-all duration-700",
                        "opacity-100 translate-y-0",
                        "opacity-0 translate-y-8",
                    )
                    style="transition-delay: 800ms"
                >
                    <a
                        href=GITHUB_URL
                        target="_blank"
                        rel="noopener noreferrer"
                        class="inline-flex items-center gap-3 px-8 py-4 border-2 border-amber-400 rounded-full text-amber-600 hover:bg-amber-50 transition-all duration-300 group"
                    >
                        <i class=Icon::GitHub.class()></i>
                        <span>"View All Projects on GitHub"</span>
                        <i class=format!(
                            "{} group-hover:translate-x-1 group-hover:-translate-y-1 transition-transform",
                            Icon::ArrowUpRight.class(),
                        )></i>
                    </a>
                </div>
            </div>
        </section>
    }
}

/// Full-width highlighted row; image and copy swap sides on odd rows.
#[component]
fn FeaturedProject(
    project: &'static Project,
    index: usize,
    #[prop(into)] entered: Signal<bool>,
    last: bool,
) -> impl IntoView {
    let flipped = index % 2 == 1;

    let overlay_link = match (project.live_url, project.repo_url) {
        (Some(live), _) => Some(Either::Left(view! {
            <a
                href=live
                target="_blank"
                rel="noopener noreferrer"
                class="px-6 py-3 bg-white/90 backdrop-blur-md border border-amber-200 rounded-full text-gray-900 font-medium flex items-center gap-2 hover:bg-white transition-all duration-300"
            >
                "View Project"
                <i class=Icon::ArrowUpRight.class()></i>
            </a>
        })),
        (None, Some(repo)) => Some(Either::Right(view! {
            <a
                href=repo
                target="_blank"
                rel="noopener noreferrer"
                class="px-6 py-3 bg-white/90 backdrop-blur-md border border-amber-200 rounded-full text-gray-900 font-medium flex items-center gap-2 hover:bg-white transition-all duration-300"
            >
                "View on GitHub"
                <i class=Icon::GitHub.class()></i>
            </a>
        })),
        (None, None) => None,
    };

    view! {
        <div
            class=transition(
                entered,
                "group relative transition-all duration-1000",
                "opacity-100 translate-y-0",
                "opacity-0 translate-y-16",
            )
            style=format!(
                "transition-delay: {}ms; transition-timing-function: cubic-bezier(0.16, 1, 0.3, 1)",
                200 + index * 200,
            )
        >
            <div class="grid lg:grid-cols-2 gap-8 items-center">
                <div class=if flipped { "relative lg:order-2" } else { "relative" }>
                    <div class="relative aspect-[16/10] rounded-2xl overflow-hidden border-2 border-amber-100 group-hover:border-amber-300 transition-all duration-500 shadow-lg shadow-amber-100">
                        <div class="absolute inset-0 bg-gradient-to-r from-amber-500/10 to-yellow-500/10 opacity-0 group-hover:opacity-100 transition-opacity duration-500 z-10"></div>

                        <img
                            src=project.image
                            alt=project.title
                            class="w-full h-full object-cover"
                        />

                        <div class="absolute inset-0 bg-gradient-to-t from-black/40 via-transparent to-transparent"></div>

                        <div class="absolute inset-0 flex items-center justify-center z-20 opacity-0 group-hover:opacity-100 transition-all duration-500">
                            {overlay_link}
                        </div>
                    </div>
                </div>

                <div class=if flipped { "space-y-6 lg:order-1" } else { "space-y-6" }>
                    <div>
                        <div class="flex items-center gap-3 mb-3">
                            <h3 class="text-2xl md:text-3xl font-bold text-gray-900 group-hover:text-amber-600 transition-colors font-display">
                                {project.title}
                            </h3>
                            <span class="px-3 py-1 bg-gradient-to-r from-amber-400 to-amber-600 text-white text-xs font-medium rounded-full">
                                "Featured"
                            </span>
                        </div>
                        <p class="text-gray-600 leading-relaxed">{project.description}</p>
                    </div>

                    <div class="flex flex-wrap gap-2">
                        {project
                            .technologies
                            .iter()
                            .map(|tech| {
                                view! {
                                    <span class="px-3 py-1.5 bg-amber-50 border border-amber-200 rounded-lg text-sm text-amber-700">
                                        {*tech}
                                    </span>
                                }
                            })
                            .collect_view()}
                    </div>

                    <div class="flex gap-4">
                        {project
                            .live_url
                            .map(|live| {
                                view! {
                                    <a
                                        href=live
                                        target="_blank"
                                        rel="noopener noreferrer"
                                        class="flex items-center gap-2 text-gray-700 hover:text-amber-600 transition-colors"
                                    >
                                        <i class=Icon::External.class()></i>
                                        <span class="text-sm font-medium">"Live Demo"</span>
                                    </a>
                                }
                            })}
                        {project
                            .repo_url
                            .map(|repo| {
                                view! {
                                    <a
                                        href=repo
                                        target="_blank"
                                        rel="noopener noreferrer"
                                        class="flex items-center gap-2 text-gray-700 hover:text-amber-600 transition-colors"
                                    >
                                        <i class=Icon::GitHub.class()></i>
                                        <span class="text-sm font-medium">"GitHub"</span>
                                    </a>
                                }
                            })}
                    </div>
                </div>
            </div>

            {(!last)
                .then(|| {
                    view! {
                        <div class="mt-16 w-full h-px bg-gradient-to-r from-transparent via-amber-200 to-transparent"></div>
                    }
                })}
        </div>
    }
}

/// Compact card for the non-featured grid; shows at most four technology
/// chips with a spill counter.
#[component]
fn ProjectCard(
    project: &'static Project,
    index: usize,
    #[prop(into)] entered: Signal<bool>,
) -> impl IntoView {
    let tech_total = project.technologies.len();

    view! {
        <div
            class=transition(
                entered,
                "group relative transition-all duration-700",
                "opacity-100 translate-y-0",
                "opacity-0 translate-y-12",
            )
            style=format!(
                "transition-delay: {}ms; transition-timing-function: cubic-bezier(0.16, 1, 0.3, 1)",
                600 + index * 100,
            )
        >
            <div class="relative h-full p-6 bg-white rounded-2xl border border-amber-100 hover:border-amber-300 transition-all duration-500 hover:-translate-y-1 hover:shadow-xl hover:shadow-amber-100">
                <div class="flex items-start justify-between mb-4">
                    <div class="w-12 h-12 rounded-xl bg-gradient-to-r from-amber-400 to-amber-600 flex items-center justify-center">
                        <i class=format!("{} text-white text-xl", Icon::Folder.class())></i>
                    </div>
                    <div class="flex gap-2">
                        {project
                            .repo_url
                            .map(|repo| {
                                view! {
                                    <a
                                        href=repo
                                        target="_blank"
                                        rel="noopener noreferrer"
                                        class="p-2 text-gray-400 hover:text-amber-600 transition-colors"
                                    >
                                        <i class=Icon::GitHub.class()></i>
                                    </a>
                                }
                            })}
                        {project
                            .live_url
                            .map(|live| {
                                view! {
                                    <a
                                        href=live
                                        target="_blank"
                                        rel="noopener noreferrer"
                                        class="p-2 text-gray-400 hover:text-amber-600 transition-colors"
                                    >
                                        <i class=Icon::External.class()></i>
                                    </a>
                                }
                            })}
                    </div>
                </div>

                <h3 class="text-xl font-bold text-gray-900 mb-2 group-hover:text-amber-600 transition-colors font-display">
                    {project.title}
                </h3>
                <p class="text-gray-600 text-sm leading-relaxed mb-4">{project.description}</p>

                <div class="flex flex-wrap gap-2">
                    {project
                        .technologies
                        .iter()
                        .take(4)
                        .map(|tech| {
                            view! {
                                <span class="px-2 py-1 bg-amber-50 text-amber-700 text-xs rounded-md">
                                    {*tech}
                                </span>
                            }
                        })
                        .collect_view()}
                    {(tech_total > 4)
                        .then(|| {
                            view! {
                                <span class="px-2 py-1 bg-gray-100 text-gray-600 text-xs rounded-md">
                                    {format!("+{}", tech_total - 4)}
                                </span>
                            }
                        })}
                </div>
            </div>
        </div>
    }
}
