use leptos::prelude::*;
use leptos_use::utils::Pausable;
use leptos_use::{
    use_raf_fn_with_options, use_timeout_fn, UseRafFnCallbackArgs, UseRafFnOptions,
    UseTimeoutFnReturn,
};

use crate::anim::{StatValue, COUNT_UP_DURATION_MS};

use super::reveal::transition;

/// One stat tile. Inert until the hosting section scrolls into view, then
/// counts from 0 to the parsed target on the display's frame clock after
/// `delay_ms`. Literals that don't parse render verbatim, unanimated.
#[component]
pub fn AnimatedStat(
    value: &'static str,
    label: &'static str,
    delay_ms: f64,
    #[prop(into)] entered: Signal<bool>,
) -> impl IntoView {
    let stat = StatValue::parse(value);
    if stat.is_none() {
        log::warn!("stat value {value:?} is not animatable; rendering as-is");
    }
    let animatable = stat.is_some();
    let initial = stat
        .as_ref()
        .map_or_else(|| value.to_string(), |s| s.render_at(0.0));

    let (display, set_display) = signal(initial);
    let (done, set_done) = signal(false);
    let elapsed = StoredValue::new(0.0_f64);

    let raf_stat = stat.clone();
    let Pausable { pause, resume, .. } = use_raf_fn_with_options(
        move |args: UseRafFnCallbackArgs| {
            let Some(stat) = raf_stat.as_ref() else {
                return;
            };
            let now = elapsed.get_value() + args.delta;
            elapsed.set_value(now);
            set_display(stat.render_at(now));
            if now >= COUNT_UP_DURATION_MS {
                set_done(true);
            }
        },
        UseRafFnOptions::default().immediate(false),
    );

    // delay_ms after the section reveals, hand control to the frame loop
    let UseTimeoutFnReturn { start, .. } = use_timeout_fn(move |_: ()| resume(), delay_ms);

    let (started, set_started) = signal(false);
    Effect::new(move |_| {
        if animatable && entered.get() && !started.get_untracked() {
            set_started(true);
            start(());
        }
    });
    Effect::new(move |_| {
        if done.get() {
            pause();
        }
    });

    view! {
        <div
            class=transition(
                entered,
                "text-center transition-all duration-700",
                "opacity-100 translate-y-0 scale-100",
                "opacity-0 translate-y-8 scale-90",
            )
            style=format!(
                "transition-delay: {delay_ms}ms; transition-timing-function: cubic-bezier(0.16, 1, 0.3, 1)",
            )
        >
            <div class="text-4xl md:text-5xl font-bold text-gradient-gold">{display}</div>
            <div class="mt-2 text-sm text-gray-500">{label}</div>
        </div>
    }
}
