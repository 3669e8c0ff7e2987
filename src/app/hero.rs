use leptos::{html, prelude::*};
use leptos_use::{use_raf_fn, use_window_size, UseWindowSizeReturn};
use wasm_bindgen::{JsCast, JsValue};
use web_sys::CanvasRenderingContext2d;

use crate::bubbles::{Bubble, BubbleField, GLINT_CHANCE};
use crate::content::{Icon, HERO_SOCIALS};
use crate::download::ResumeAsset;

use super::reveal::{scroll_to_section, transition};

fn js_random() -> f64 {
    js_sys::Math::random()
}

#[component]
pub fn Hero(resume: ResumeAsset) -> impl IntoView {
    // The hero owns the initial viewport, so its reveal flag flips on mount
    // instead of waiting on an observer.
    let (visible, set_visible) = signal(false);
    Effect::new(move |_| set_visible(true));
    let visible: Signal<bool> = visible.into();

    let canvas_ref = NodeRef::<html::Canvas>::new();
    let field = StoredValue::new(None::<BubbleField>);

    // Keep the backdrop canvas sized to the viewport.
    let UseWindowSizeReturn { width, height } = use_window_size();
    Effect::new(move |_| {
        let (w, h) = (width.get(), height.get());
        if let Some(canvas) = canvas_ref.get() {
            canvas.set_width(w as u32);
            canvas.set_height(h as u32);
        }
    });

    // Frame loop for the bubble field; released with the component scope.
    use_raf_fn(move |_| {
        let Some(canvas) = canvas_ref.get_untracked() else {
            return;
        };
        let Ok(Some(ctx)) = canvas.get_context("2d") else {
            return;
        };
        let Ok(ctx) = ctx.dyn_into::<CanvasRenderingContext2d>() else {
            return;
        };
        let (w, h) = (f64::from(canvas.width()), f64::from(canvas.height()));
        ctx.clear_rect(0.0, 0.0, w, h);
        field.update_value(|field| {
            let field = field.get_or_insert_with(|| BubbleField::new(w, h, &mut js_random));
            field.advance(w, h, &mut js_random);
            for bubble in field.bubbles() {
                if let Err(err) = paint_bubble(&ctx, bubble) {
                    log::error!("hero backdrop paint failed: {err:?}");
                }
            }
        });
    });

    let download = move |_| {
        #[cfg(feature = "hydrate")]
        leptos::task::spawn_local(crate::download::download_resume(resume));
        #[cfg(not(feature = "hydrate"))]
        let _ = resume;
    };

    view! {
        <section
            id="home"
            class="relative min-h-screen flex items-center overflow-hidden bg-gradient-to-br from-white via-amber-50/30 to-white"
        >
            <canvas node_ref=canvas_ref class="absolute inset-0 z-0" style="opacity: 0.7"></canvas>

            // Dotted pattern overlay
            <div
                class="absolute inset-0 z-5 opacity-[0.03]"
                style="background-image: radial-gradient(circle at 1px 1px, #D4AF37 1px, transparent 0); background-size: 40px 40px"
            ></div>

            // Floating glow blobs
            <div class="absolute top-20 left-10 w-32 h-32 bg-amber-200/20 rounded-full blur-3xl animate-float-slow"></div>
            <div
                class="absolute bottom-40 right-20 w-48 h-48 bg-amber-300/15 rounded-full blur-3xl animate-float"
                style="animation-delay: 2s"
            ></div>
            <div
                class="absolute top-1/3 right-1/4 w-24 h-24 bg-yellow-200/10 rounded-full blur-2xl animate-float-slow"
                style="animation-delay: 4s"
            ></div>

            <div class="relative z-20 w-full max-w-7xl mx-auto px-6 py-20">
                <div class="grid lg:grid-cols-2 gap-12 items-center">
                    <div class="order-2 lg:order-1">
                        <div
                            class=transition(
                                visible,
                                "transition-all duration-700",
                                "opacity-100 translate-y-0",
                                "opacity-0 translate-y-8",
                            )
                            style="transition-delay: 300ms"
                        >
                            <span class="text-amber-600 text-lg font-medium tracking-wide">
                                "Hello, I'm"
                            </span>
                        </div>

                        <h1
                            class=transition(
                                visible,
                                "mt-2 text-5xl md:text-6xl lg:text-7xl font-bold text-gray-900 font-display transition-all duration-1000",
                                "opacity-100 translate-y-0",
                                "opacity-0 translate-y-12",
                            )
                            style="transition-delay: 500ms; transition-timing-function: cubic-bezier(0.16, 1, 0.3, 1)"
                        >
                            "Aditya " <span class="text-gradient-gold">"Kini"</span>
                        </h1>

                        <div
                            class=transition(
                                visible,
                                "mt-4 transition-all duration-700",
                                "opacity-100 translate-x-0",
                                "opacity-0 -translate-x-8",
                            )
                            style="transition-delay: 800ms"
                        >
                            <span class="text-2xl md:text-3xl text-amber-600 font-light">
                                "Full Stack Developer"
                            </span>
                        </div>

                        <p
                            class=transition(
                                visible,
                                "mt-6 text-lg text-gray-600 max-w-lg leading-relaxed transition-all duration-700",
                                "opacity-100 translate-y-0",
                                "opacity-0 translate-y-8",
                            )
                            style="transition-delay: 1000ms"
                        >
                            "MS in Computer Science at Syracuse University. I build scalable web applications and create innovative digital solutions. Passionate about clean code, cloud technologies, and AI-driven applications."
                        </p>

                        <div
                            class=transition(
                                visible,
                                "mt-10 flex flex-wrap gap-4 transition-all duration-700",
                                "opacity-100 scale-100",
                                "opacity-0 scale-90",
                            )
                            style="transition-delay: 1200ms; transition-timing-function: cubic-bezier(0.68, -0.55, 0.265, 1.55)"
                        >
                            <button
                                on:click=move |_| scroll_to_section("projects")
                                class="group px-8 py-4 bg-gradient-to-r from-amber-500 to-amber-600 text-white font-semibold rounded-full hover:from-amber-600 hover:to-amber-700 transition-all duration-300 flex items-center gap-2 hover:scale-105 glow-gold"
                            >
                                "View My Work"
                                <i class=format!(
                                    "{} group-hover:translate-x-1 transition-transform",
                                    Icon::ArrowRight.class(),
                                )></i>
                            </button>
                            <button
                                type="button"
                                on:click=download
                                class="px-8 py-4 border-2 border-amber-400 text-amber-600 font-semibold rounded-full hover:bg-amber-50 transition-all duration-300 flex items-center gap-2"
                            >
                                <i class=Icon::Download.class()></i>
                                "Download CV"
                            </button>
                        </div>

                        <div
                            class=transition(
                                visible,
                                "mt-12 flex gap-4 transition-all duration-700",
                                "opacity-100 translate-y-0",
                                "opacity-0 translate-y-8",
                            )
                            style="transition-delay: 1400ms"
                        >
                            {HERO_SOCIALS
                                .into_iter()
                                .map(|social| {
                                    view! {
                                        <a
                                            href=social.href
                                            target="_blank"
                                            rel="noopener noreferrer"
                                            class="w-12 h-12 flex items-center justify-center rounded-full bg-white border border-amber-200 text-amber-600 hover:text-white hover:bg-gradient-to-r hover:from-amber-500 hover:to-amber-600 hover:border-transparent transition-all duration-300 hover:scale-110 shadow-lg shadow-amber-100"
                                            aria-label=social.label
                                        >
                                            <i class=social.icon.class()></i>
                                        </a>
                                    }
                                })
                                .collect_view()}
                        </div>
                    </div>

                    <div
                        class=transition(
                            visible,
                            "order-1 lg:order-2 flex justify-center lg:justify-end transition-all duration-1000",
                            "opacity-100 translate-x-0 rotate-0",
                            "opacity-0 translate-x-24 rotate-3",
                        )
                        style="transition-delay: 600ms; transition-timing-function: cubic-bezier(0.16, 1, 0.3, 1)"
                    >
                        <div class="relative">
                            <div class="absolute inset-0 bg-gradient-to-r from-amber-300/30 to-yellow-400/20 rounded-3xl blur-3xl scale-110"></div>

                            <div class="relative w-72 h-96 md:w-80 md:h-[28rem] lg:w-96 lg:h-[32rem] rounded-3xl overflow-hidden border-2 border-amber-200 group shadow-2xl shadow-amber-100">
                                <img
                                    src="/hero-portrait.jpg"
                                    alt="Aditya Kini"
                                    class="w-full h-full object-cover transition-transform duration-700 group-hover:scale-105"
                                />
                                <div class="absolute inset-0 bg-gradient-to-t from-amber-900/20 via-transparent to-transparent"></div>
                            </div>

                            <div
                                class=transition(
                                    visible,
                                    "absolute -bottom-4 -left-4 px-6 py-3 bg-white rounded-2xl shadow-xl shadow-amber-100 border border-amber-100 transition-all duration-700",
                                    "opacity-100 translate-y-0",
                                    "opacity-0 translate-y-8",
                                )
                                style="transition-delay: 1500ms; transition-timing-function: cubic-bezier(0.68, -0.55, 0.265, 1.55)"
                            >
                                <span class="text-gradient-gold font-bold text-xl">"3+ Years"</span>
                                <span class="text-gray-600 text-sm ml-2">"Experience"</span>
                            </div>

                            <div
                                class=transition(
                                    visible,
                                    "absolute -top-4 -right-4 px-4 py-2 bg-white rounded-full shadow-lg shadow-amber-100 border border-amber-100 transition-all duration-700",
                                    "opacity-100 scale-100",
                                    "opacity-0 scale-75",
                                )
                                style="transition-delay: 1600ms; transition-timing-function: cubic-bezier(0.68, -0.55, 0.265, 1.55)"
                            >
                                <div class="flex items-center gap-2">
                                    <div class="w-2 h-2 bg-green-500 rounded-full animate-pulse"></div>
                                    <span class="text-sm text-gray-700">"Open to opportunities"</span>
                                </div>
                            </div>
                        </div>
                    </div>
                </div>
            </div>

            <div
                class=transition(
                    visible,
                    "absolute bottom-8 left-1/2 -translate-x-1/2 z-20 transition-all duration-700",
                    "opacity-100 translate-y-0",
                    "opacity-0 translate-y-4",
                )
                style="transition-delay: 1800ms"
            >
                <button
                    on:click=move |_| scroll_to_section("about")
                    class="flex flex-col items-center gap-2 text-amber-400 hover:text-amber-600 transition-colors duration-300"
                >
                    <span class="text-xs tracking-widest uppercase">"Scroll"</span>
                    <i class=format!("{} animate-bounce", Icon::ChevronDown.class())></i>
                </button>
            </div>
        </section>
    }
}

/// Paints one bubble as a soft radial gradient, occasionally adding a
/// 1px white glint somewhere on its face.
fn paint_bubble(ctx: &CanvasRenderingContext2d, bubble: &Bubble) -> Result<(), JsValue> {
    let gradient = ctx.create_radial_gradient(
        bubble.x - bubble.size * 0.3,
        bubble.y - bubble.size * 0.3,
        0.0,
        bubble.x,
        bubble.y,
        bubble.size,
    )?;
    gradient.add_color_stop(0.0, &format!("{}{})", bubble.color, bubble.opacity + 0.2))?;
    gradient.add_color_stop(0.5, &format!("{}{})", bubble.color, bubble.opacity))?;
    gradient.add_color_stop(1.0, &format!("{}0)", bubble.color))?;

    ctx.begin_path();
    ctx.arc(bubble.x, bubble.y, bubble.size, 0.0, std::f64::consts::TAU)?;
    ctx.set_fill_style_canvas_gradient(&gradient);
    ctx.fill();

    if js_random() > 1.0 - GLINT_CHANCE {
        ctx.begin_path();
        ctx.arc(
            bubble.x + js_random() * bubble.size - bubble.size / 2.0,
            bubble.y + js_random() * bubble.size - bubble.size / 2.0,
            1.0,
            0.0,
            std::f64::consts::TAU,
        )?;
        ctx.set_fill_style_str("rgba(255, 255, 255, 0.8)");
        ctx.fill();
    }
    Ok(())
}
