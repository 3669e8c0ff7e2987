use leptos::{ev::SubmitEvent, html, prelude::*};
use leptos_use::{use_timeout_fn, UseTimeoutFnReturn};

use crate::content::{
    ContactFormState, Icon, SubmitStatus, CONTACT_DETAILS, CONTACT_SOCIALS, SUBMITTED_DISPLAY_MS,
    SUBMIT_LATENCY_MS,
};
use crate::download::ResumeAsset;

use super::reveal::{transition, use_section_reveal};

#[component]
pub fn Contact(resume: ResumeAsset) -> impl IntoView {
    let section_ref = NodeRef::<html::Section>::new();
    let entered = use_section_reveal(section_ref, 0.15);

    let form = RwSignal::new(ContactFormState::default());
    let (status, set_status) = signal(SubmitStatus::Idle);
    let (focused, set_focused) = signal(None::<&'static str>);

    // Submission is a timed no-op: nothing is sent anywhere. The success
    // indicator shows for a fixed window, then the form resets.
    let UseTimeoutFnReturn { start: start_reset, .. } = use_timeout_fn(
        move |_: ()| {
            set_status(SubmitStatus::Idle);
            form.update(|f| f.clear());
        },
        SUBMITTED_DISPLAY_MS,
    );
    let UseTimeoutFnReturn { start: start_submit, .. } = use_timeout_fn(
        move |_: ()| {
            set_status(SubmitStatus::Submitted);
            start_reset(());
        },
        SUBMIT_LATENCY_MS,
    );

    let on_submit = move |ev: SubmitEvent| {
        ev.prevent_default();
        if status.get_untracked().is_busy() {
            return;
        }
        set_status(SubmitStatus::Submitting);
        start_submit(());
    };

    let download = move |_| {
        #[cfg(feature = "hydrate")]
        leptos::task::spawn_local(crate::download::download_resume(resume));
        #[cfg(not(feature = "hydrate"))]
        let _ = resume;
    };

    // Floating label: raised while its field is focused or holds text.
    let label_class = move |field: &'static str, has_text: Signal<bool>| {
        move || {
            format!(
                "absolute left-4 transition-all duration-300 pointer-events-none {}",
                if focused() == Some(field) || has_text.get() {
                    "-top-2.5 text-xs text-amber-600 bg-white px-2"
                } else {
                    "top-4 text-gray-500"
                },
            )
        }
    };

    let name_filled = Signal::derive(move || form.with(|f| !f.name.is_empty()));
    let email_filled = Signal::derive(move || form.with(|f| !f.email.is_empty()));
    let subject_filled = Signal::derive(move || form.with(|f| !f.subject.is_empty()));
    let message_filled = Signal::derive(move || form.with(|f| !f.message.is_empty()));

    const FIELD_CLASS: &str = "w-full px-4 py-4 bg-gray-50 border border-amber-100 rounded-xl text-gray-900 focus:border-amber-400 focus:outline-none focus:ring-1 focus:ring-amber-400/50 transition-all duration-300";

    view! {
        <section
            id="contact"
            node_ref=section_ref
            class="relative py-24 md:py-32 bg-white overflow-hidden"
        >
            <div class="absolute top-0 left-0 w-full h-px bg-gradient-to-r from-transparent via-amber-200 to-transparent"></div>
            <div class="absolute top-20 right-0 w-96 h-96 bg-amber-100/20 rounded-full blur-3xl"></div>
            <div class="absolute bottom-20 left-0 w-64 h-64 bg-yellow-100/20 rounded-full blur-3xl"></div>

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
                            "Get In Touch"
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
                        "Let's Build Something " <span class="text-gradient-gold">"Amazing"</span>
                        " Together"
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
                        "Have a project in mind or want to collaborate? I'd love to hear from you. Reach out and let's create something extraordinary."
                    </p>
                </div>

                <div class="grid lg:grid-cols-5 gap-12">
                    <div class="lg:col-span-2 space-y-8">
                        {CONTACT_DETAILS
                            .into_iter()
                            .enumerate()
                            .map(|(index, item)| {
                                view! {
                                    <div
                                        class=transition(
                                            entered,
                                            "flex items-center gap-4 transition-all duration-700",
                                            "opacity-100 translate-x-0",
                                            "opacity-0 -translate-x-8",
                                        )
                                        style=format!(
                                            "transition-delay: {}ms; transition-timing-function: cubic-bezier(0.16, 1, 0.3, 1)",
                                            300 + index * 100,
                                        )
                                    >
                                        <div class="w-14 h-14 rounded-2xl bg-gradient-to-r from-amber-400 to-amber-600 flex items-center justify-center flex-shrink-0">
                                            <i class=format!(
                                                "{} text-white text-xl",
                                                item.icon.class(),
                                            )></i>
                                        </div>
                                        <div>
                                            <div class="text-gray-500 text-sm">{item.label}</div>
                                            {match item.href {
                                                Some(href) => {
                                                    leptos::either::Either::Left(
                                                        view! {
                                                            <a
                                                                href=href
                                                                class="text-gray-900 font-medium hover:text-amber-600 transition-colors"
                                                            >
                                                                {item.value}
                                                            </a>
                                                        },
                                                    )
                                                }
                                                None => {
                                                    leptos::either::Either::Right(
                                                        view! {
                                                            <div class="text-gray-900 font-medium">{item.value}</div>
                                                        },
                                                    )
                                                }
                                            }}
                                        </div>
                                    </div>
                                }
                            })
                            .collect_view()}

                        <div
                            class=transition(
                                entered,
                                "pt-6 transition-all duration-700",
                                "opacity-100 translate-y-0",
                                "opacity-0 translate-y-8",
                            )
                            style="transition-delay: 600ms"
                        >
                            <div class="text-gray-500 text-sm mb-4">"Connect with me"</div>
                            <div class="flex gap-3">
                                {CONTACT_SOCIALS
                                    .into_iter()
                                    .map(|social| {
                                        view! {
                                            <a
                                                href=social.href
                                                target="_blank"
                                                rel="noopener noreferrer"
                                                class="w-12 h-12 flex items-center justify-center rounded-xl bg-white border border-amber-200 text-gray-600 hover:text-white hover:bg-amber-500 transition-all duration-300 hover:scale-110 hover:shadow-lg"
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
                                entered,
                                "pt-4 transition-all duration-700",
                                "opacity-100 translate-y-0",
                                "opacity-0 translate-y-8",
                            )
                            style="transition-delay: 700ms"
                        >
                            <button
                                type="button"
                                on:click=download
                                class="inline-flex items-center gap-3 px-6 py-3 bg-gradient-to-r from-amber-400 to-amber-600 text-white rounded-xl hover:from-amber-500 hover:to-amber-700 transition-all duration-300 shadow-lg shadow-amber-200"
                            >
                                <i class=Icon::Download.class()></i>
                                <span class="font-medium">"Download Resume"</span>
                            </button>
                        </div>

                        <div
                            class=transition(
                                entered,
                                "p-6 bg-gradient-to-r from-amber-50 to-yellow-50 rounded-2xl border border-amber-100 transition-all duration-700",
                                "opacity-100 translate-y-0",
                                "opacity-0 translate-y-8",
                            )
                            style="transition-delay: 800ms"
                        >
                            <div class="flex items-center gap-3">
                                <div class="w-3 h-3 bg-green-500 rounded-full animate-pulse"></div>
                                <div>
                                    <div class="text-gray-900 font-medium">"Open to Opportunities"</div>
                                    <div class="text-gray-500 text-sm">"Available for full-time roles"</div>
                                </div>
                            </div>
                        </div>
                    </div>

                    <div
                        class=transition(
                            entered,
                            "lg:col-span-3 transition-all duration-700",
                            "opacity-100 translate-y-0 rotate-0",
                            "opacity-0 translate-y-12 rotate-1",
                        )
                        style="transition-delay: 400ms; transition-timing-function: cubic-bezier(0.16, 1, 0.3, 1)"
                    >
                        <form
                            on:submit=on_submit
                            class="p-8 bg-white rounded-3xl border border-amber-100 shadow-xl shadow-amber-100"
                        >
                            <div class="grid md:grid-cols-2 gap-6">
                                <div class="relative">
                                    <label for="name" class=label_class("name", name_filled)>
                                        "Your Name"
                                    </label>
                                    <input
                                        type="text"
                                        id="name"
                                        name="name"
                                        prop:value=move || form.with(|f| f.name.clone())
                                        on:input=move |ev| {
                                            form.update(|f| f.name = event_target_value(&ev))
                                        }
                                        on:focus=move |_| set_focused(Some("name"))
                                        on:blur=move |_| set_focused(None)
                                        required
                                        class=FIELD_CLASS
                                    />
                                </div>

                                <div class="relative">
                                    <label for="email" class=label_class("email", email_filled)>
                                        "Email Address"
                                    </label>
                                    <input
                                        type="email"
                                        id="email"
                                        name="email"
                                        prop:value=move || form.with(|f| f.email.clone())
                                        on:input=move |ev| {
                                            form.update(|f| f.email = event_target_value(&ev))
                                        }
                                        on:focus=move |_| set_focused(Some("email"))
                                        on:blur=move |_| set_focused(None)
                                        required
                                        class=FIELD_CLASS
                                    />
                                </div>

                                <div class="relative md:col-span-2">
                                    <label for="subject" class=label_class("subject", subject_filled)>
                                        "Subject"
                                    </label>
                                    <input
                                        type="text"
                                        id="subject"
                                        name="subject"
                                        prop:value=move || form.with(|f| f.subject.clone())
                                        on:input=move |ev| {
                                            form.update(|f| f.subject = event_target_value(&ev))
                                        }
                                        on:focus=move |_| set_focused(Some("subject"))
                                        on:blur=move |_| set_focused(None)
                                        required
                                        class=FIELD_CLASS
                                    />
                                </div>

                                <div class="relative md:col-span-2">
                                    <label for="message" class=label_class("message", message_filled)>
                                        "Your Message"
                                    </label>
                                    <textarea
                                        id="message"
                                        name="message"
                                        prop:value=move || form.with(|f| f.message.clone())
                                        on:input=move |ev| {
                                            form.update(|f| f.message = event_target_value(&ev))
                                        }
                                        on:focus=move |_| set_focused(Some("message"))
                                        on:blur=move |_| set_focused(None)
                                        required
                                        rows=5
                                        class=format!("{FIELD_CLASS} resize-none")
                                    ></textarea>
                                </div>
                            </div>

                            <button
                                type="submit"
                                disabled=move || status().is_busy()
                                class=move || {
                                    format!(
                                        "mt-8 w-full py-4 rounded-xl font-semibold flex items-center justify-center gap-2 transition-all duration-500 {} disabled:cursor-not-allowed shadow-lg shadow-amber-200",
                                        if status() == SubmitStatus::Submitted {
                                            "bg-green-500 text-white"
                                        } else {
                                            "bg-gradient-to-r from-amber-500 to-amber-600 text-white hover:from-amber-600 hover:to-amber-700 hover:scale-[1.02]"
                                        },
                                    )
                                }
                            >
                                <i class=move || status().button_icon().class()></i>
                                {move || status().button_label()}
                            </button>
                        </form>
                    </div>
                </div>
            </div>
        </section>
    }
}
