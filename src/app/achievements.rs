use leptos::{html, prelude::*};

use crate::content::{Icon, ACHIEVEMENTS};

use super::reveal::{transition, use_section_reveal};

#[component]
pub fn Achievements() -> impl IntoView {
    let section_ref = NodeRef::<html::Section>::new();
    let entered = use_section_reveal(section_ref, 0.15);
    let (hovered, set_hovered) = signal(None::<usize>);

    view! {
        <section
            id="achievements"
            node_ref=section_ref
            class="relative py-24 md:py-32 bg-white overflow-hidden"
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
                            "Achievements"
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
                        "Milestones & " <span class="text-gradient-gold">"Recognition"</span>
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
                        "A collection of certifications, academic achievements, and professional milestones that mark my journey in tech."
                    </p>
                </div>

                <div class="grid md:grid-cols-2 lg:grid-cols-3 gap-6">
                    {ACHIEVEMENTS
                        .into_iter()
                        .enumerate()
                        .map(|(index, achievement)| {
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
                                            "relative h-full p-6 bg-white rounded-2xl border border-amber-100 transition-all duration-500 {}",
                                            if is_hovered() {
                                                "border-amber-400/50 -translate-y-2 shadow-xl shadow-amber-100"
                                            } else {
                                                "shadow-sm"
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
                                                    achievement.icon.class(),
                                                )></i>
                                            </div>
                                            {achievement
                                                .date
                                                .map(|date| {
                                                    view! {
                                                        <span class="px-3 py-1 bg-amber-50 text-amber-600 text-xs font-medium rounded-full">
                                                            {date}
                                                        </span>
                                                    }
                                                })}
                                        </div>

                                        <h3 class="text-lg font-bold text-gray-900 mb-2 font-display">
                                            {achievement.title}
                                        </h3>
                                        <p class="text-gray-600 text-sm leading-relaxed">
                                            {achievement.description}
                                        </p>

                                        {achievement
                                            .link
                                            .map(|link| {
                                                view! {
                                                    <a
                                                        href=link
                                                        class="inline-flex items-center gap-1 mt-4 text-amber-600 text-sm font-medium hover:text-amber-700 transition-colors"
                                                    >
                                                        "View Certificate"
                                                        <i class=Icon::ArrowUpRight.class()></i>
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
