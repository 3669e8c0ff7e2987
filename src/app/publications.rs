use leptos::{html, prelude::*};

use crate::content::{Icon, PUBLICATIONS};

use super::reveal::{transition, use_section_reveal};

#[component]
pub fn Publications() -> impl IntoView {
    let section_ref = NodeRef::<html::Section>::new();
    let entered = use_section_reveal(section_ref, 0.15);
    let (hovered, set_hovered) = signal(None::<usize>);

    view! {
        <section
            id="publications"
            node_ref=section_ref
            class="relative py-24 md:py-32 bg-gradient-to-b from-white to-amber-50/30 overflow-hidden"
        >
            <div class="absolute top-0 left-0 w-full h-px bg-gradient-to-r from-transparent via-amber-200 to-transparent"></div>
            <div class="absolute top-40 right-0 w-64 h-64 bg-amber-100/20 rounded-full blur-3xl"></div>
            <div class="absolute bottom-20 left-0 w-48 h-48 bg-yellow-100/20 rounded-full blur-3xl"></div>

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
                            "Research"
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
                        "Publications & " <span class="text-gradient-gold">"Papers"</span>
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
                        "Academic papers published in peer-reviewed journals."
                    </p>
                </div>

                <div class="grid md:grid-cols-2 gap-6 max-w-5xl mx-auto">
                    {PUBLICATIONS
                        .into_iter()
                        .enumerate()
                        .map(|(index, publication)| {
                            let is_hovered = move || hovered() == Some(index);
                            view! {
                                <div
                                    class=transition(
                                        entered,
                                        "relative group transition-all duration-700",
                                        "opacity-100 translate-y-0",
                                        "opacity-0 translate-y-12",
                                    )
                                    style=format!(
                                        "transition-delay: {}ms; transition-timing-function: cubic-bezier(0.16, 1, 0.3, 1)",
                                        200 + index * 100,
                                    )
                                    on:mouseenter=move |_| set_hovered(Some(index))
                                    on:mouseleave=move |_| set_hovered(None)
                                >
                                    <div class=move || {
                                        format!(
                                            "relative h-full p-6 bg-white rounded-2xl border border-amber-100 transition-all duration-500 shadow-sm {}",
                                            if is_hovered() {
                                                "border-amber-400/50 -translate-y-2 shadow-xl shadow-amber-100"
                                            } else {
                                                ""
                                            },
                                        )
                                    }>
                                        <div class="flex items-start justify-between mb-4">
                                            <div class=move || {
                                                format!(
                                                    "w-14 h-14 rounded-2xl bg-gradient-to-r from-amber-400 to-amber-600 flex items-center justify-center transition-all duration-500 {}",
                                                    if is_hovered() {
                                                        "scale-110 shadow-lg shadow-amber-200"
                                                    } else {
                                                        ""
                                                    },
                                                )
                                            }>
                                                <i class=format!(
                                                    "{} text-white text-2xl",
                                                    Icon::Book.class(),
                                                )></i>
                                            </div>
                                        </div>

                                        <p class="text-gray-900 font-medium mb-2 leading-snug">
                                            "Published a paper on \"" {publication.title} "\""
                                        </p>
                                        <p class="text-gray-600 text-sm mb-3">
                                            "in " {publication.journal}
                                        </p>
                                        <p class="text-red-600 font-semibold text-sm mb-4">
                                            "Impact Factor = " {publication.impact_factor}
                                        </p>

                                        {publication
                                            .link
                                            .map(|link| {
                                                view! {
                                                    <a
                                                        href=link
                                                        target="_blank"
                                                        rel="noopener noreferrer"
                                                        class="inline-flex items-center gap-1 text-amber-600 hover:text-amber-700 text-sm font-medium transition-colors"
                                                    >
                                                        "Link"
                                                        <i class=Icon::External.class()></i>
                                                    </a>
                                                }
                                            })}

                                        <div class="absolute top-0 right-0 w-20 h-20 bg-gradient-to-bl from-amber-50 to-transparent rounded-tr-2xl opacity-50"></div>
                                    </div>
                                </div>
                            }
                        })
                        .collect_view()}
                </div>
            </div>
        </section>
    }
}
