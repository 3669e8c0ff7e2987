use leptos::{html, prelude::*};

use crate::content::{Icon, EXPERIENCES};

use super::reveal::{transition, use_section_reveal};

/// Bullet lists are clamped to three lines until the card is clicked; only
/// one card is expanded at a time.
#[component]
pub fn Experience() -> impl IntoView {
    let section_ref = NodeRef::<html::Section>::new();
    let entered = use_section_reveal(section_ref, 0.15);
    let (expanded, set_expanded) = signal(None::<usize>);

    view! {
        <section
            id="experience"
            node_ref=section_ref
            class="relative py-24 md:py-32 bg-white overflow-hidden"
        >
            <div class="absolute top-0 left-0 w-full h-px bg-gradient-to-r from-transparent via-amber-200 to-transparent"></div>
            <div class="absolute top-1/2 left-1/2 -translate-x-1/2 -translate-y-1/2 w-[600px] h-[600px] bg-amber-100/10 rounded-full blur-3xl"></div>

            <div class="relative max-w-5xl mx-auto px-6">
                <div class="text-center mb-16">
                    <div class=transition(
                        entered,
                        "flex items-center justify-center gap-4 transition-all duration-700",
                        "opacity-100 translate-y-0",
                        "opacity-0 translate-y-8",
                    )>
                        <div class="w-12 h-px bg-gradient-to-r from-amber-400 to-amber-600"></div>
                        <span class="text-amber-600 text-sm font-medium tracking-widest uppercase">
                            "My Journey"
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
                        "Professional " <span class="text-gradient-gold">"Experience"</span>
                    </h2>
                </div>

                <div class="relative">
                    // Timeline spine
                    <div
                        class=transition(
                            entered,
                            "absolute left-4 md:left-1/2 top-0 bottom-0 w-px bg-gradient-to-b from-amber-400 via-amber-300 to-transparent transition-all duration-1000",
                            "opacity-100 scale-y-100",
                            "opacity-0 scale-y-0",
                        )
                        style="transform-origin: top; transition-delay: 200ms"
                    ></div>

                    <div class="space-y-12">
                        {EXPERIENCES
                            .into_iter()
                            .enumerate()
                            .map(|(index, exp)| {
                                let flipped = index % 2 == 1;
                                let is_expanded = move || expanded() == Some(index);
                                view! {
                                    <div
                                        class=transition(
                                            entered,
                                            "relative transition-all duration-700",
                                            "opacity-100 translate-y-0",
                                            "opacity-0 translate-y-12",
                                        )
                                        style=format!(
                                            "transition-delay: {}ms; transition-timing-function: cubic-bezier(0.16, 1, 0.3, 1)",
                                            300 + index * 200,
                                        )
                                    >
                                        <div class="grid md:grid-cols-2 gap-8 items-start">
                                            <div class=if flipped {
                                                "relative pl-12 md:pl-12 md:order-2"
                                            } else {
                                                "relative pl-12 md:pl-0 md:pr-12 md:text-right"
                                            }>
                                                // Timeline node
                                                <div class=format!(
                                                    "absolute left-0 {} top-2 w-4 h-4 rounded-full border-2 border-amber-400 bg-white z-10 transition-all duration-500 {}",
                                                    if flipped {
                                                        "md:left-0 md:-translate-x-1/2"
                                                    } else {
                                                        "md:left-auto md:right-0 md:translate-x-1/2"
                                                    },
                                                    if exp.is_current {
                                                        "animate-pulse shadow-[0_0_20px_rgba(212,175,55,0.5)]"
                                                    } else {
                                                        ""
                                                    },
                                                )>
                                                    {exp
                                                        .is_current
                                                        .then(|| {
                                                            view! {
                                                                <div class="absolute inset-0 rounded-full bg-amber-400 animate-ping opacity-30"></div>
                                                            }
                                                        })}
                                                </div>

                                                <div
                                                    class="group p-6 bg-white rounded-2xl border border-amber-100 hover:border-amber-300 transition-all duration-500 hover:-translate-y-1 hover:shadow-xl hover:shadow-amber-100 cursor-pointer"
                                                    on:click=move |_| {
                                                        set_expanded(
                                                            if expanded.get_untracked() == Some(index) {
                                                                None
                                                            } else {
                                                                Some(index)
                                                            },
                                                        )
                                                    }
                                                >
                                                    <div class=if flipped {
                                                        "flex items-center gap-2 mb-3"
                                                    } else {
                                                        "flex items-center gap-2 mb-3 md:justify-end"
                                                    }>
                                                        <i class=format!(
                                                            "{} text-amber-500",
                                                            Icon::Briefcase.class(),
                                                        )></i>
                                                        <span class="text-amber-600 text-sm font-medium">
                                                            {exp.title}
                                                        </span>
                                                        {exp
                                                            .is_current
                                                            .then(|| {
                                                                view! {
                                                                    <span class="px-2 py-0.5 bg-green-100 text-green-600 text-xs rounded-full">
                                                                        "Current"
                                                                    </span>
                                                                }
                                                            })}
                                                    </div>

                                                    <h3 class="text-xl font-bold text-gray-900 mb-1 group-hover:text-amber-600 transition-colors font-display">
                                                        {exp.company}
                                                    </h3>

                                                    <div class=if flipped {
                                                        "flex flex-wrap gap-3 mb-4 text-sm text-gray-500"
                                                    } else {
                                                        "flex flex-wrap gap-3 mb-4 text-sm text-gray-500 md:justify-end"
                                                    }>
                                                        <div class="flex items-center gap-1">
                                                            <i class=Icon::Calendar.class()></i>
                                                            <span>{exp.period}</span>
                                                        </div>
                                                        <div class="flex items-center gap-1">
                                                            <i class=Icon::Location.class()></i>
                                                            <span>{exp.location}</span>
                                                        </div>
                                                    </div>

                                                    <div class=move || {
                                                        if is_expanded() {
                                                            "space-y-2"
                                                        } else {
                                                            "space-y-2 line-clamp-3"
                                                        }
                                                    }>
                                                        {exp
                                                            .bullets
                                                            .iter()
                                                            .map(|bullet| {
                                                                view! {
                                                                    <p class="text-gray-600 text-sm leading-relaxed">
                                                                        "• " {*bullet}
                                                                    </p>
                                                                }
                                                            })
                                                            .collect_view()}
                                                    </div>

                                                    <div class=if flipped {
                                                        "flex flex-wrap gap-2 mt-4"
                                                    } else {
                                                        "flex flex-wrap gap-2 mt-4 md:justify-end"
                                                    }>
                                                        {exp
                                                            .tech_stack
                                                            .iter()
                                                            .map(|tech| {
                                                                view! {
                                                                    <span class="px-2 py-1 bg-amber-50 text-amber-700 text-xs rounded-md">
                                                                        {*tech}
                                                                    </span>
                                                                }
                                                            })
                                                            .collect_view()}
                                                    </div>

                                                    {(exp.bullets.len() > 3)
                                                        .then(|| {
                                                            view! {
                                                                <div class=if flipped {
                                                                    "mt-4 text-xs text-amber-500"
                                                                } else {
                                                                    "mt-4 text-xs text-amber-500 md:text-right"
                                                                }>
                                                                    {move || {
                                                                        if is_expanded() {
                                                                            "Click to collapse"
                                                                        } else {
                                                                            "Click to expand"
                                                                        }
                                                                    }}
                                                                </div>
                                                            }
                                                        })}
                                                </div>
                                            </div>

                                            // Empty half keeps the alternating layout
                                            <div class=if flipped {
                                                "hidden md:block md:order-1"
                                            } else {
                                                "hidden md:block"
                                            }></div>
                                        </div>
                                    </div>
                                }
                            })
                            .collect_view()}
                    </div>
                </div>
            </div>
        </section>
    }
}
