use leptos::{html, prelude::*};

use crate::content::{Icon, FOOTER_LINKS, FOOTER_SOCIALS, SITE_TAGLINE};

use super::reveal::{scroll_to_section, transition, use_section_reveal};

// Stamped by build.rs; the copyright year is a build-time fact.
const BUILD_TIME: &str = env!("BUILD_TIME");

#[component]
pub fn Footer() -> impl IntoView {
    let footer_ref = NodeRef::<html::Footer>::new();
    let entered = use_section_reveal(footer_ref, 0.2);

    let year = &BUILD_TIME[..4];

    view! {
        <footer
            node_ref=footer_ref
            class="relative py-16 bg-gradient-to-b from-amber-50/30 to-white overflow-hidden"
        >
            <div
                class=transition(
                    entered,
                    "absolute top-0 left-0 right-0 h-px transition-all duration-1000",
                    "opacity-100",
                    "opacity-0",
                )
                style="background: linear-gradient(90deg, transparent, #D4AF37, transparent)"
            ></div>

            <div class="absolute bottom-0 left-1/4 w-64 h-64 bg-amber-100/20 rounded-full blur-3xl"></div>
            <div class="absolute top-0 right-1/4 w-48 h-48 bg-yellow-100/20 rounded-full blur-3xl"></div>

            <div class="relative max-w-7xl mx-auto px-6">
                <div class="flex flex-col items-center">
                    <div
                        class=transition(
                            entered,
                            "transition-all duration-700",
                            "opacity-100 scale-100",
                            "opacity-0 scale-90",
                        )
                        style="transition-delay: 200ms; transition-timing-function: cubic-bezier(0.16, 1, 0.3, 1)"
                    >
                        <a
                            href="#home"
                            on:click=move |ev| {
                                ev.prevent_default();
                                scroll_to_section("home");
                            }
                            class="text-2xl font-bold tracking-wider hover:text-amber-600 transition-colors duration-300 font-display"
                        >
                            <span class="text-gradient-gold">"ADITYA "</span>
                            "KINI"
                        </a>
                    </div>

                    <p
                        class=transition(
                            entered,
                            "mt-4 text-gray-500 text-center transition-all duration-700",
                            "opacity-100 translate-y-0",
                            "opacity-0 translate-y-4",
                        )
                        style="transition-delay: 300ms"
                    >
                        {SITE_TAGLINE}
                    </p>

                    <nav class=transition(
                        entered,
                        "mt-8 flex flex-wrap justify-center gap-6 md:gap-8 transition-all duration-700",
                        "opacity-100 translate-y-0",
                        "opacity-0 translate-y-4",
                    )
                        style="transition-delay: 400ms">
                        {FOOTER_LINKS
                            .into_iter()
                            .map(|link| {
                                view! {
                                    <a
                                        href=format!("#{}", link.section)
                                        on:click=move |ev| {
                                            ev.prevent_default();
                                            scroll_to_section(link.section);
                                        }
                                        class="relative text-gray-600 hover:text-amber-600 transition-colors duration-300 group text-sm"
                                    >
                                        {link.label}
                                        <span class="absolute -bottom-1 left-1/2 w-0 h-px bg-gradient-to-r from-amber-400 to-amber-600 transition-all duration-300 group-hover:w-full group-hover:left-0"></span>
                                    </a>
                                }
                            })
                            .collect_view()}
                    </nav>

                    <div
                        class=transition(
                            entered,
                            "mt-8 flex gap-3 transition-all duration-700",
                            "opacity-100 translate-y-0",
                            "opacity-0 translate-y-4",
                        )
                        style="transition-delay: 600ms"
                    >
                        {FOOTER_SOCIALS
                            .into_iter()
                            .map(|social| {
                                view! {
                                    <a
                                        href=social.href
                                        target="_blank"
                                        rel="noopener noreferrer"
                                        class="w-10 h-10 flex items-center justify-center rounded-xl bg-white border border-amber-200 text-gray-600 hover:text-white hover:bg-gradient-to-r hover:from-amber-400 hover:to-amber-600 hover:border-transparent transition-all duration-300 hover:scale-110 shadow-sm"
                                        aria-label=social.label
                                    >
                                        <i class=social.icon.class()></i>
                                    </a>
                                }
                            })
                            .collect_view()}
                    </div>

                    <div class="mt-12 w-full max-w-md h-px bg-gradient-to-r from-transparent via-amber-200 to-transparent"></div>

                    <div
                        class=transition(
                            entered,
                            "mt-8 flex flex-col md:flex-row items-center gap-2 text-gray-500 text-sm transition-all duration-700",
                            "opacity-100 translate-y-0",
                            "opacity-0 translate-y-4",
                        )
                        style="transition-delay: 800ms"
                    >
                        <span>"© " {year.to_string()} " Aditya Kini. All rights reserved."</span>
                        <span class="hidden md:inline text-amber-300">"•"</span>
                        <span class="flex items-center gap-1">
                            "Made with " <i class=format!("{} text-red-500", Icon::Heart.class())></i>
                            " and lots of coffee"
                        </span>
                    </div>
                </div>
            </div>
        </footer>
    }
}
