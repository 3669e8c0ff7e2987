use leptos::{html, prelude::*};

use crate::content::SKILL_CATEGORIES;

use super::reveal::{transition, use_section_reveal};

#[component]
pub fn Skills() -> impl IntoView {
    let section_ref = NodeRef::<html::Section>::new();
    let entered = use_section_reveal(section_ref, 0.15);
    let (hovered, set_hovered) = signal(None::<usize>);

    view! {
        <section
            id="skills"
            node_ref=section_ref
            class="relative py-24 md:py-32 bg-amber-50/30 overflow-hidden"
        >
            // Faint grid backdrop
            <div
                class="absolute inset-0 opacity-[0.02]"
                style="background-image: linear-gradient(rgba(212,175,55,0.3) 1px, transparent 1px), linear-gradient(90deg, rgba(212,175,55,0.3) 1px, transparent 1px); background-size: 50px 50px"
            ></div>

            <div class="absolute top-20 left-20 w-32 h-32 bg-amber-200/10 rounded-full blur-3xl"></div>
            <div class="absolute bottom-20 right-20 w-48 h-48 bg-yellow-200/10 rounded-full blur-3xl"></div>

            <div class="relative max-w-7xl mx-auto px-6">
                <div class="text-center mb-16">
                    <div class=transition(
                        entered,
                        "flex items-center justify-center gap-4 transition-all duration-700",
                        "opacity-100 translate-y-0",
                        "opacity-0 translate-y-8",
                    )>
                        <div class="w-12 h-px bg-gradient-to-r from-amber-400 to-amber-600"></div>
                        <span class="text-amber-600 text-sm font-medium tracking-widest uppercase">
                            "My Expertise"
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
                        "Skills & " <span class="text-gradient-gold">"Technologies"</span>
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
                        "A comprehensive toolkit built over years of hands-on experience, constantly evolving with the latest technologies."
                    </p>
                </div>

                <div class="grid md:grid-cols-2 lg:grid-cols-3 gap-6">
                    {SKILL_CATEGORIES
                        .into_iter()
                        .enumerate()
                        .map(|(category_index, category)| {
                            let is_hovered = move || hovered() == Some(category_index);
                            view! {
                                <div
                                    class=transition(
                                        entered,
                                        "relative group transition-all duration-700",
                                        "opacity-100 translate-y-0 rotate-0",
                                        "opacity-0 translate-y-12 rotate-2",
                                    )
                                    style=format!(
                                        "transition-delay: {}ms; transition-timing-function: cubic-bezier(0.16, 1, 0.3, 1)",
                                        200 + category_index * 100,
                                    )
                                    on:mouseenter=move |_| set_hovered(Some(category_index))
                                    on:mouseleave=move |_| set_hovered(None)
                                >
                                    <div class=move || {
                                        format!(
                                            "relative p-6 rounded-3xl border border-amber-100 bg-gradient-to-b {} backdrop-blur-sm transition-all duration-500 {}",
                                            category.color,
                                            if is_hovered() {
                                                "border-amber-400/50 -translate-y-2 shadow-xl shadow-amber-100"
                                            } else {
                                                ""
                                            },
                                        )
                                    }>
                                        <div class=move || {
                                            format!(
                                                "w-14 h-14 rounded-2xl bg-white flex items-center justify-center mb-5 transition-all duration-500 shadow-sm {}",
                                                if is_hovered() { "scale-110 shadow-md" } else { "" },
                                            )
                                        }>
                                            <i class=move || {
                                                format!(
                                                    "{} text-2xl transition-colors duration-500 {}",
                                                    category.icon.class(),
                                                    if is_hovered() {
                                                        "text-amber-600"
                                                    } else {
                                                        "text-amber-500"
                                                    },
                                                )
                                            }></i>
                                        </div>

                                        <h3 class="text-lg font-bold text-gray-900 mb-4 font-display">
                                            {category.title}
                                        </h3>

                                        <div class="flex flex-wrap gap-2">
                                            {category
                                                .skills
                                                .iter()
                                                .enumerate()
                                                .map(|(skill_index, skill)| {
                                                    view! {
                                                        <span
                                                            class=transition(
                                                                entered,
                                                                "px-3 py-1.5 bg-white border border-amber-100 rounded-full text-sm text-gray-600 transition-all duration-300 hover:bg-amber-500 hover:text-white hover:border-amber-500 hover:scale-105",
                                                                "opacity-100 scale-100",
                                                                "opacity-0 scale-75",
                                                            )
                                                            style=format!(
                                                                "transition-delay: {}ms; transition-timing-function: cubic-bezier(0.68, -0.55, 0.265, 1.55)",
                                                                400 + category_index * 100 + skill_index * 30,
                                                            )
                                                        >
                                                            {*skill}
                                                        </span>
                                                    }
                                                })
                                                .collect_view()}
                                        </div>
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
