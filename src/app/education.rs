use leptos::{html, prelude::*};

use crate::content::{Icon, CERTIFICATIONS, EDUCATION};

use super::reveal::{transition, use_section_reveal};

#[component]
pub fn Education() -> impl IntoView {
    let section_ref = NodeRef::<html::Section>::new();
    let entered = use_section_reveal(section_ref, 0.15);

    view! {
        <section
            id="education"
            node_ref=section_ref
            class="relative py-24 md:py-32 bg-gradient-to-b from-white to-amber-50/30 overflow-hidden"
        >
            <div class="absolute top-0 left-0 w-full h-px bg-gradient-to-r from-transparent via-amber-200 to-transparent"></div>
            <div class="absolute top-20 right-0 w-64 h-64 bg-amber-100/20 rounded-full blur-3xl"></div>
            <div class="absolute bottom-20 left-0 w-48 h-48 bg-yellow-100/20 rounded-full blur-3xl"></div>

            <div class="max-w-5xl mx-auto px-6">
                <div class="text-center mb-16">
                    <div class=transition(
                        entered,
                        "flex items-center justify-center gap-4 transition-all duration-700",
                        "opacity-100 translate-y-0",
                        "opacity-0 translate-y-8",
                    )>
                        <div class="w-12 h-px bg-gradient-to-r from-amber-400 to-amber-600"></div>
                        <span class="text-amber-600 text-sm font-medium tracking-widest uppercase">
                            "Education"
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
                        "Academic " <span class="text-gradient-gold">"Background"</span>
                    </h2>
                </div>

                <div class="space-y-8">
                    {EDUCATION
                        .into_iter()
                        .enumerate()
                        .map(|(index, edu)| {
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
                                        200 + index * 200,
                                    )
                                >
                                    <div class="group p-8 bg-white rounded-3xl border border-amber-100 hover:border-amber-300 transition-all duration-500 hover:-translate-y-1 hover:shadow-xl hover:shadow-amber-100">
                                        <div class="grid md:grid-cols-4 gap-6">
                                            <div class="md:col-span-1">
                                                <div class="w-16 h-16 rounded-2xl bg-gradient-to-r from-amber-400 to-amber-600 flex items-center justify-center mb-4">
                                                    <i class=format!(
                                                        "{} text-white text-3xl",
                                                        Icon::Graduation.class(),
                                                    )></i>
                                                </div>
                                                {edu
                                                    .is_current
                                                    .then(|| {
                                                        view! {
                                                            <span class="inline-flex items-center gap-1 px-3 py-1 bg-green-100 text-green-600 text-xs font-medium rounded-full">
                                                                <span class="w-1.5 h-1.5 bg-green-500 rounded-full animate-pulse"></span>
                                                                "Currently Studying"
                                                            </span>
                                                        }
                                                    })}
                                            </div>

                                            <div class="md:col-span-3">
                                                <h3 class="text-2xl font-bold text-gray-900 mb-1 group-hover:text-amber-600 transition-colors font-display">
                                                    {edu.degree}
                                                </h3>

                                                <div class="flex items-center gap-2 text-amber-600 font-medium mb-4">
                                                    <i class=Icon::Book.class()></i>
                                                    {edu.school}
                                                </div>

                                                <div class="flex flex-wrap gap-4 mb-4 text-sm text-gray-500">
                                                    <div class="flex items-center gap-1">
                                                        <i class=Icon::Calendar.class()></i>
                                                        <span>{edu.period}</span>
                                                    </div>
                                                    <div class="flex items-center gap-1">
                                                        <i class=Icon::Location.class()></i>
                                                        <span>{edu.location}</span>
                                                    </div>
                                                    {edu
                                                        .gpa
                                                        .map(|gpa| {
                                                            view! {
                                                                <div class="flex items-center gap-1 px-3 py-0.5 bg-amber-50 text-amber-700 rounded-full">
                                                                    <i class=Icon::Award.class()></i>
                                                                    <span>"GPA: " {gpa}</span>
                                                                </div>
                                                            }
                                                        })}
                                                </div>

                                                {(!edu.description.is_empty())
                                                    .then(|| {
                                                        view! {
                                                            <div class="space-y-1 mb-4">
                                                                {edu
                                                                    .description
                                                                    .iter()
                                                                    .map(|line| {
                                                                        view! {
                                                                            <p class="text-gray-600 text-sm">"• " {*line}</p>
                                                                        }
                                                                    })
                                                                    .collect_view()}
                                                            </div>
                                                        }
                                                    })}

                                                {(!edu.achievements.is_empty())
                                                    .then(|| {
                                                        view! {
                                                            <div class="flex flex-wrap gap-2">
                                                                {edu
                                                                    .achievements
                                                                    .iter()
                                                                    .map(|achievement| {
                                                                        view! {
                                                                            <span class="px-3 py-1 bg-gradient-to-r from-amber-400 to-amber-600 text-white text-xs font-medium rounded-full">
                                                                                {*achievement}
                                                                            </span>
                                                                        }
                                                                    })
                                                                    .collect_view()}
                                                            </div>
                                                        }
                                                    })}
                                            </div>
                                        </div>
                                    </div>
                                </div>
                            }
                        })
                        .collect_view()}
                </div>

                <div
                    class=transition(
                        entered,
                        "mt-16 transition-all duration-700",
                        "opacity-100 translate-y-0",
                        "opacity-0 translate-y-8",
                    )
                    style="transition-delay: 600ms"
                >
                    <h3 class="text-2xl font-bold text-gray-900 mb-6 text-center font-display">
                        "Professional " <span class="text-gradient-gold">"Certifications"</span>
                    </h3>

                    <div class="grid md:grid-cols-2 gap-4">
                        {CERTIFICATIONS
                            .into_iter()
                            .enumerate()
                            .map(|(index, cert)| {
                                view! {
                                    <div
                                        class=transition(
                                            entered,
                                            "flex items-center gap-4 p-5 bg-white rounded-xl border border-amber-100 hover:border-amber-300 transition-all duration-300 hover:-translate-y-0.5 hover:shadow-lg",
                                            "opacity-100 translate-y-0",
                                            "opacity-0 translate-y-8",
                                        )
                                        style=format!("transition-delay: {}ms", 700 + index * 100)
                                    >
                                        <div class="w-12 h-12 rounded-xl bg-gradient-to-r from-amber-400 to-amber-600 flex items-center justify-center flex-shrink-0">
                                            <i class=format!(
                                                "{} text-white text-xl",
                                                Icon::Award.class(),
                                            )></i>
                                        </div>
                                        <div>
                                            <div class="font-semibold text-gray-900">{cert.name}</div>
                                            <div class="text-sm text-gray-500">
                                                {cert.issuer} " • " {cert.year}
                                            </div>
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
