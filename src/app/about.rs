use leptos::{html, prelude::*};

use crate::content::{Icon, HIGHLIGHTS, STATS};

use super::reveal::{transition, use_section_reveal};
use super::stats::AnimatedStat;

#[component]
pub fn About() -> impl IntoView {
    let section_ref = NodeRef::<html::Section>::new();
    let entered = use_section_reveal(section_ref, 0.15);

    view! {
        <section
            id="about"
            node_ref=section_ref
            class="relative py-24 md:py-32 bg-gradient-to-b from-white to-amber-50/30 overflow-hidden"
        >
            <div class="absolute top-0 left-0 w-full h-px bg-gradient-to-r from-transparent via-amber-200 to-transparent"></div>
            <div class="absolute top-40 right-0 w-64 h-64 bg-amber-200/10 rounded-full blur-3xl"></div>
            <div class="absolute bottom-20 left-0 w-48 h-48 bg-yellow-200/10 rounded-full blur-3xl"></div>

            <div class="max-w-7xl mx-auto px-6">
                <div class="mb-16">
                    <div class=transition(
                        entered,
                        "flex items-center gap-4 transition-all duration-700",
                        "opacity-100 translate-x-0",
                        "opacity-0 -translate-x-8",
                    )>
                        <div class="w-12 h-px bg-gradient-to-r from-amber-400 to-amber-600"></div>
                        <span class="text-amber-600 text-sm font-medium tracking-widest uppercase">
                            "About Me"
                        </span>
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
                        "Crafting Digital Solutions with "
                        <span class="text-gradient-gold">"Passion"</span>
                    </h2>
                </div>

                <div class="grid lg:grid-cols-2 gap-12 lg:gap-20 items-center">
                    <div
                        class=transition(
                            entered,
                            "relative transition-all duration-1000",
                            "opacity-100 scale-100 rotate-0",
                            "opacity-0 scale-95 -rotate-2",
                        )
                        style="transition-delay: 200ms; transition-timing-function: cubic-bezier(0.16, 1, 0.3, 1)"
                    >
                        <div class="relative">
                            <div class="absolute -inset-4 border border-amber-200/50 rounded-3xl rotate-3 transition-transform duration-700 hover:rotate-6"></div>
                            <div class="absolute -inset-8 border border-amber-100/30 rounded-3xl -rotate-2"></div>

                            <div class="relative aspect-[3/4] rounded-2xl overflow-hidden border-2 border-amber-100 group shadow-xl shadow-amber-100">
                                <img
                                    src="/about-portrait.jpg"
                                    alt="Aditya Kini working"
                                    class="w-full h-full object-cover transition-transform duration-700 group-hover:scale-105"
                                />
                                <div class="absolute inset-0 bg-gradient-to-t from-amber-900/30 via-transparent to-transparent"></div>
                            </div>

                            <div
                                class=transition(
                                    entered,
                                    "absolute -bottom-6 -right-6 p-6 bg-white rounded-2xl shadow-xl shadow-amber-100 border border-amber-100 max-w-xs transition-all duration-700",
                                    "opacity-100 translate-y-0",
                                    "opacity-0 translate-y-8",
                                )
                                style="transition-delay: 600ms; transition-timing-function: cubic-bezier(0.68, -0.55, 0.265, 1.55)"
                            >
                                <div class="flex items-center gap-3">
                                    <div class="w-12 h-12 rounded-full bg-gradient-to-r from-amber-400 to-amber-600 flex items-center justify-center text-white">
                                        <i class=Icon::Award.class()></i>
                                    </div>
                                    <div>
                                        <div class="text-gray-900 font-semibold">"AWS Certified"</div>
                                        <div class="text-gray-500 text-sm">"Developer - Associate"</div>
                                    </div>
                                </div>
                            </div>
                        </div>
                    </div>

                    <div class="space-y-6">
                        <p
                            class=transition(
                                entered,
                                "text-lg text-gray-700 leading-relaxed transition-all duration-700",
                                "opacity-100 translate-y-0",
                                "opacity-0 translate-y-6",
                            )
                            style="transition-delay: 300ms"
                        >
                            "I'm Aditya Kini, a passionate Full Stack Developer currently pursuing my Master's in Computer Science at Syracuse University. With a strong foundation in Computer Engineering from the University of Mumbai and hands-on experience in the industry, I specialize in building scalable web applications and cloud-based solutions."
                        </p>

                        <p
                            class=transition(
                                entered,
                                "text-gray-600 leading-relaxed transition-all duration-700",
                                "opacity-100 translate-y-0",
                                "opacity-0 translate-y-6",
                            )
                            style="transition-delay: 400ms"
                        >
                            "My expertise spans across the entire development stack - from crafting responsive frontends with React.js to building robust backends with Node.js and Express. I'm particularly passionate about cloud technologies and hold AWS Certified Developer - Associate certification. I love solving complex problems and creating applications that make a real impact."
                        </p>

                        <p
                            class=transition(
                                entered,
                                "text-gray-600 leading-relaxed transition-all duration-700",
                                "opacity-100 translate-y-0",
                                "opacity-0 translate-y-6",
                            )
                            style="transition-delay: 500ms"
                        >
                            "When I'm not coding, you'll find me exploring new technologies, contributing to open-source projects, or diving into AI/ML research. I believe in continuous learning and staying updated with the latest industry trends."
                        </p>

                        <div
                            class=transition(
                                entered,
                                "grid grid-cols-2 gap-4 pt-4 transition-all duration-700",
                                "opacity-100 translate-y-0",
                                "opacity-0 translate-y-6",
                            )
                            style="transition-delay: 600ms"
                        >
                            {HIGHLIGHTS
                                .into_iter()
                                .map(|item| {
                                    view! {
                                        <div class="p-4 bg-white rounded-xl border border-amber-100 shadow-sm hover:shadow-md hover:border-amber-200 transition-all duration-300">
                                            <i class=format!(
                                                "{} text-amber-500 text-xl",
                                                item.icon.class(),
                                            )></i>
                                            <div class="mt-2 text-gray-900 font-medium text-sm">
                                                {item.title}
                                            </div>
                                            <div class="text-gray-500 text-xs">{item.description}</div>
                                        </div>
                                    }
                                })
                                .collect_view()}
                        </div>
                    </div>
                </div>

                <div class="mt-24 grid grid-cols-2 md:grid-cols-4 gap-8">
                    {STATS
                        .into_iter()
                        .enumerate()
                        .map(|(index, stat)| {
                            view! {
                                <AnimatedStat
                                    value=stat.value
                                    label=stat.label
                                    delay_ms={800.0 + 150.0 * index as f64}
                                    entered
                                />
                            }
                        })
                        .collect_view()}
                </div>
            </div>
        </section>
    }
}
