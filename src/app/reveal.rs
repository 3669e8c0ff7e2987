use leptos::prelude::*;
use leptos_use::{
    core::IntoElementsMaybeSignal, use_intersection_observer_with_options,
    UseIntersectionObserverOptions, UseIntersectionObserverReturn,
};

/// One-shot viewport watcher shared by every section: the returned signal
/// flips to `true` the first time the target's visible fraction crosses
/// `threshold` and never reverts. Observation stops after the flip, so a
/// section costs nothing once revealed; the observer is also released on
/// unmount. An element already past the threshold flips on the observer's
/// initial callback.
pub fn use_section_reveal<Els, M: 'static>(target: Els, threshold: f64) -> Signal<bool>
where
    Els: IntoElementsMaybeSignal<web_sys::Element, M> + 'static,
{
    let (entered, set_entered) = signal(false);

    let UseIntersectionObserverReturn { stop, .. } = use_intersection_observer_with_options(
        target,
        move |entries, _| {
            if entries.iter().any(|entry| entry.is_intersecting()) && !entered.get_untracked() {
                set_entered(true);
            }
        },
        UseIntersectionObserverOptions::default().thresholds(vec![threshold]),
    );

    Effect::new(move |_| {
        if entered.get() {
            stop();
        }
    });

    entered.into()
}

/// Reactive class for reveal transitions: `base` always applies, `shown`
/// once the section has entered the viewport, `hidden` before that.
pub fn transition(
    entered: Signal<bool>,
    base: &'static str,
    shown: &'static str,
    hidden: &'static str,
) -> impl Fn() -> String {
    move || format!("{} {}", base, if entered.get() { shown } else { hidden })
}

/// Smoothly scrolls the page to the section with the given anchor id.
/// Unknown ids are ignored.
pub fn scroll_to_section(id: &str) {
    let Some(document) = web_sys::window().and_then(|w| w.document()) else {
        return;
    };
    let Some(element) = document.get_element_by_id(id) else {
        return;
    };
    let options = web_sys::ScrollIntoViewOptions::new();
    options.set_behavior(web_sys::ScrollBehavior::Smooth);
    element.scroll_into_view_with_scroll_into_view_options(&options);
}
