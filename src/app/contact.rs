use leptos::{html, prelude::*, server_fn::codec::Json};

#[cfg(feature = "hydrate")]
use crate::contact::ChallengeEnd;
use crate::contact::{ContactError, ContactSession, ContactSubmission, Field, FormStatus};
#[cfg(feature = "ssr")]
use crate::relay::RelayClient;

#[cfg(feature = "hydrate")]
use super::captcha::{self, Widget};
use super::footer::{EMAIL, PHONE_DISPLAY, PHONE_HREF};
use super::icons::{Glyph, Icon};

#[server(input = Json)]
pub async fn submit_contact(submission: ContactSubmission) -> Result<(), ServerFnError> {
    let Some(relay) = use_context::<RelayClient>() else {
        tracing::error!("contact submission dropped: {}", ContactError::NotConfigured);
        return Err(ServerFnError::new(ContactError::NotConfigured));
    };
    relay.send(&submission).await.map_err(|e| {
        tracing::warn!("contact submission failed: {e}");
        ServerFnError::new(e)
    })?;
    tracing::info!("contact submission relayed");
    Ok(())
}

const INPUT_CLASS: &str = "w-full px-4 py-3 rounded-lg bg-background border border-card-border text-foreground placeholder:text-text/50 focus:outline-none focus:border-blue focus:ring-1 focus:ring-blue transition-all duration-300";

#[component]
pub fn Contact() -> impl IntoView {
    view! {
        <section id="contact" class="py-20 px-6">
            <div class="max-w-7xl mx-auto">
                <div class="grid lg:grid-cols-2 gap-12 items-start">
                    <ContactForm />
                    <div>
                        <h2 class="text-3xl md:text-4xl font-black text-foreground mb-4">
                            <span class="text-blue">"Contact"</span>
                            " Me"
                        </h2>
                        <p class="text-text mb-8">
                            "I'm currently open to full-time front-end development and design roles. With 4+ years of agency experience, I bring a balance of clean, scalable code and creative, user-focused design. If you're looking to add someone who can bridge design and development, I'd love to connect."
                        </p>
                        <div class="space-y-6">
                            <ContactLine
                                heading="Email"
                                glyph=Glyph::Mail
                                href=format!("mailto:{EMAIL}")
                                label=EMAIL
                            />
                            <ContactLine
                                heading="Phone"
                                glyph=Glyph::Phone
                                href=PHONE_HREF
                                label=PHONE_DISPLAY
                            />
                        </div>
                    </div>
                </div>
            </div>
        </section>
    }
}

#[component]
fn ContactLine(
    heading: &'static str,
    glyph: Glyph,
    #[prop(into)] href: String,
    label: &'static str,
) -> impl IntoView {
    view! {
        <div>
            <h3 class="text-lg font-semibold text-foreground mb-3">{heading}</h3>
            <a
                href=href
                class="flex items-center gap-3 text-text hover:text-blue transition-colors duration-300"
            >
                <span class="flex h-10 w-10 items-center justify-center rounded-full bg-blue/10">
                    <Icon glyph class="h-5 w-5 text-blue" />
                </span>
                {label}
            </a>
        </div>
    }
}

#[component]
fn ContactForm() -> impl IntoView {
    let session = RwSignal::new(ContactSession::new());
    let status = Memo::new(move |_| session.with(|s| s.status()));
    let captcha_box = NodeRef::<html::Div>::new();

    #[cfg(feature = "hydrate")]
    let widget = {
        use std::time::Duration;

        use crate::contact::STATUS_RESET_MS;

        let widget = StoredValue::new(None::<Widget>);

        let fail = move |e: ContactError| {
            log::warn!("contact form: {e}");
            session.try_update(|s| s.finish(Err(e)));
        };

        let on_token = move |token: String| {
            let Some(submission) = session.try_with_untracked(|s| s.submission(token)) else {
                return;
            };
            leptos::task::spawn_local(async move {
                let outcome = submit_contact(submission)
                    .await
                    .map_err(|e| ContactError::Transport(e.to_string()));
                if let Err(e) = &outcome {
                    log::warn!("contact form: {e}");
                }
                session.try_update(|s| s.finish(outcome));
                widget.with_value(|w| {
                    if let Some(w) = w {
                        w.reset();
                    }
                });
            });
        };

        let mount = move || {
            let Some(el) = captcha_box.get_untracked() else {
                return;
            };
            // a closed or timed-out challenge must settle the submission too
            let on_end = move |end: ChallengeEnd, detail: Option<String>| {
                fail(end.into_error(detail));
                widget.with_value(|w| {
                    if let Some(w) = w {
                        w.reset();
                    }
                });
            };
            match Widget::render(&el, on_token, on_end) {
                Ok(w) => widget.set_value(Some(w)),
                Err(e) => log::error!("captcha unavailable: {e}"),
            }
        };
        Effect::watch(
            move || captcha_box.get().is_some(),
            move |mounted, _, _| {
                if *mounted && widget.with_value(Option::is_none) {
                    captcha::load(mount, |e| log::error!("captcha unavailable: {e}"));
                }
            },
            true,
        );

        // success and error messages clear themselves
        let pending = StoredValue::new(None::<TimeoutHandle>);
        Effect::watch(
            move || status.get(),
            move |status, _, _| {
                if let Some(handle) = pending.get_value() {
                    handle.clear();
                }
                if matches!(status, FormStatus::Success | FormStatus::Error) {
                    let handle = set_timeout_with_handle(
                        move || {
                            session.try_update(|s| s.expire());
                        },
                        Duration::from_millis(STATUS_RESET_MS),
                    );
                    pending.set_value(handle.ok());
                }
            },
            false,
        );
        on_cleanup(move || {
            if let Some(handle) = pending.get_value() {
                handle.clear();
            }
        });

        widget
    };

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        #[cfg(feature = "hydrate")]
        {
            let ready = widget.with_value(Option::is_some);
            let begun = session
                .try_update(|s| s.begin_submit(ready))
                .unwrap_or(Err(ContactError::InFlight));
            match begun {
                Ok(()) => {
                    let started = widget.with_value(|w| match w {
                        Some(w) => w.execute(),
                        None => Err(captcha::CaptchaError::ScriptLoad),
                    });
                    if let Err(e) = started {
                        log::warn!("contact form: {e}");
                        session.update(|s| s.finish(Err(ContactError::Captcha(e.to_string()))));
                    }
                }
                Err(e) => log::debug!("contact form not sent: {e}"),
            }
        }
    };

    let field_value = move |field: Field| session.with(|s| s.form().get(field).to_string());
    let set_field = move |field: Field, ev: leptos::ev::Event| {
        let value = event_target_value(&ev);
        session.update(|s| s.set_field(field, value));
    };

    view! {
        <form
            on:submit=on_submit
            class="p-8 rounded-2xl bg-card-bg border border-card-border shadow-lg"
        >
            <div class="mb-6">
                <h3 class="text-xl font-semibold text-foreground mb-1">"Connect With Me"</h3>
                <p class="text-sm text-text">"Have a project in mind? Let's talk."</p>
            </div>

            <div class="space-y-4">
                <div>
                    <label for="name" class="sr-only">
                        {Field::Name.label()}
                    </label>
                    <input
                        type="text"
                        id="name"
                        name="name"
                        placeholder="Name"
                        required
                        class=INPUT_CLASS
                        prop:value=move || field_value(Field::Name)
                        on:input=move |ev| set_field(Field::Name, ev)
                    />
                </div>
                <div>
                    <label for="email" class="sr-only">
                        {Field::Email.label()}
                    </label>
                    <input
                        type="email"
                        id="email"
                        name="email"
                        placeholder="Email"
                        required
                        class=INPUT_CLASS
                        prop:value=move || field_value(Field::Email)
                        on:input=move |ev| set_field(Field::Email, ev)
                    />
                </div>
                <div>
                    <label for="message" class="sr-only">
                        {Field::Message.label()}
                    </label>
                    <textarea
                        id="message"
                        name="message"
                        placeholder="Message"
                        required
                        rows="5"
                        class=format!("{INPUT_CLASS} resize-none")
                        prop:value=move || field_value(Field::Message)
                        on:input=move |ev| set_field(Field::Message, ev)
                    />
                </div>

                <div node_ref=captcha_box />

                <button
                    type="submit"
                    disabled=move || status.get() == FormStatus::Loading
                    class="w-full flex items-center justify-center gap-2 px-6 py-3 rounded-lg bg-blue text-white font-medium hover:bg-blue-hover hover:scale-[1.02] active:scale-[0.98] transition-all duration-300 disabled:opacity-50 disabled:cursor-not-allowed"
                >
                    <Show
                        when=move || status.get() == FormStatus::Loading
                        fallback=|| {
                            view! {
                                <Icon glyph=Glyph::Send class="w-4 h-4" />
                                "Send Message"
                            }
                        }
                    >
                        <div class="w-5 h-5 border-2 border-white/30 border-t-white rounded-full animate-spin" />
                        "Sending..."
                    </Show>
                </button>

                <StatusMessage status />
            </div>
        </form>
    }
}

#[component]
fn StatusMessage(status: Memo<FormStatus>) -> impl IntoView {
    move || match status.get() {
        FormStatus::Success => Some(
            view! {
                <div class="flex items-center gap-2 text-green-500 animate-rise" role="status">
                    <Icon glyph=Glyph::CheckCircle class="w-5 h-5" />
                    <span>"Message sent successfully!"</span>
                </div>
            }
            .into_any(),
        ),
        FormStatus::Error => Some(
            view! {
                <div class="flex items-center gap-2 text-red-500 animate-rise" role="alert">
                    <Icon glyph=Glyph::AlertCircle class="w-5 h-5" />
                    <span>"Something went wrong. Please try again."</span>
                </div>
            }
            .into_any(),
        ),
        FormStatus::Idle | FormStatus::Loading => None,
    }
}
