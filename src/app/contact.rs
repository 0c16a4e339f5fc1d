use leptos::{either::*, ev, prelude::*, task::spawn_local};
use std::time::Duration;

#[cfg(feature = "ssr")]
use std::sync::LazyLock;

#[cfg(feature = "ssr")]
use crate::config::InboxConfig;
#[cfg(feature = "ssr")]
use crate::contact::{validate, FormFields};
#[cfg(feature = "ssr")]
use crate::inbox::{Inbox, InboxService};

use super::reveal::Reveal;
use crate::contact::{
    submit, BannerTimer, ContactForm, ContactMessage, FieldName, FormCell, FormStatus,
    MessageSender, SendError,
};
use crate::inbox::DeliveryStatus;

// spawned lazily from inside the first request, on the server's runtime
#[cfg(feature = "ssr")]
static GLOBAL_INBOX: LazyLock<InboxService> = LazyLock::new(|| {
    let config = InboxConfig::from_env();
    InboxService::spawn(Inbox::new(config.inbox_capacity), config.delivery_timeout())
});

#[server]
pub async fn send_contact_message(
    name: String,
    email: String,
    message: String,
) -> Result<DeliveryStatus, ServerFnError> {
    let fields = FormFields {
        name,
        email,
        message,
    };
    let message = match validate(&fields) {
        Ok(message) => message,
        Err(errors) => {
            tracing::warn!("rejected contact message: {errors}");
            return Ok(DeliveryStatus::Rejected {
                reason: errors.to_string(),
            });
        }
    };

    let status = GLOBAL_INBOX.deliver(message).await.map_err(|e| {
        tracing::error!("couldn't deliver contact message: {e}");
        ServerFnError::new(e)
    })?;
    match &status {
        DeliveryStatus::Delivered { id } => tracing::info!("delivered contact message {id}"),
        DeliveryStatus::TimedOut => tracing::error!("contact message delivery timed out"),
        DeliveryStatus::Rejected { .. } => {}
    }
    Ok(status)
}

/// Sends through the `send_contact_message` server function.
#[derive(Debug, Clone, Copy, Default)]
pub struct ServerSender;

impl MessageSender for ServerSender {
    async fn send(&self, message: ContactMessage) -> Result<(), SendError> {
        let res = send_contact_message(message.name, message.email, message.message).await;
        match res {
            Ok(DeliveryStatus::Delivered { id }) => {
                log::info!("contact message {id} delivered");
                Ok(())
            }
            Ok(DeliveryStatus::Rejected { reason }) => Err(SendError::Rejected(reason)),
            Ok(DeliveryStatus::TimedOut) => Err(SendError::TimedOut),
            Err(e) => Err(SendError::Transport(e.to_string())),
        }
    }
}

impl FormCell for RwSignal<ContactForm> {
    fn try_update<R>(&self, f: impl FnOnce(&mut ContactForm) -> R) -> Option<R> {
        Update::try_update(self, f)
    }
}

/// Success banner timer backed by a browser timeout.
#[derive(Clone, Copy)]
struct BrowserTimer(StoredValue<Option<TimeoutHandle>>);

impl BrowserTimer {
    fn new() -> Self {
        Self(StoredValue::new(None))
    }
}

impl BannerTimer for BrowserTimer {
    fn schedule(&self, delay: Duration, f: impl FnOnce() + 'static) {
        self.cancel();
        match set_timeout_with_handle(f, delay) {
            Ok(handle) => {
                self.0.try_update_value(|t| *t = Some(handle));
            }
            Err(e) => log::error!("couldn't schedule success banner timeout: {e:?}"),
        }
    }

    fn cancel(&self) {
        self.0.try_update_value(|t| {
            if let Some(handle) = t.take() {
                handle.clear();
            }
        });
    }
}

fn send(form: RwSignal<ContactForm>, timer: BrowserTimer) {
    if let Some(fut) = submit(form, timer, ServerSender) {
        spawn_local(fut);
    }
}

#[component]
pub fn Contact(email: String) -> impl IntoView {
    let form = RwSignal::new(ContactForm::new());
    let timer = BrowserTimer::new();
    on_cleanup(move || timer.cancel());

    let submitting = move || form.with(ContactForm::is_submitting);

    view! {
        <section
            id="contact"
            class="pt-2 py-10 bg-gradient-to-b from-gray-50 to-white dark:from-gray-900 dark:to-gray-800"
        >
            <div class="max-w-4xl mx-auto px-4 sm:px-6 lg:px-8">
                <Reveal class="text-center mb-12">
                    <h2 class="text-4xl md:text-5xl font-bold text-gray-900 dark:text-white mb-4">
                        "Get In " <span class="text-blue-600 dark:text-blue-400">"Touch"</span>
                    </h2>
                    <p class="text-lg text-gray-600 dark:text-gray-300 max-w-2xl mx-auto">
                        "Have a project in mind or want to collaborate? Send me a message!"
                    </p>
                </Reveal>
                <Reveal>
                    <form
                        class="space-y-6 bg-white dark:bg-gray-800 p-8 rounded-2xl shadow-xl"
                        on:submit=move |ev| {
                            ev.prevent_default();
                            send(form, timer);
                        }
                    >
                        // locked while sending so nothing typed is lost when the fields reset
                        <fieldset disabled=submitting class="space-y-6">
                            <Field form field=FieldName::Name label="Name" placeholder="Your name" />
                            <Field
                                form
                                field=FieldName::Email
                                label="Email"
                                placeholder="your.email@example.com"
                            />
                            <Field
                                form
                                field=FieldName::Message
                                label="Message"
                                placeholder="Tell me about your project..."
                            />
                        </fieldset>
                        <div class="pt-2">
                            <button
                                type="submit"
                                disabled=submitting
                                class="flex items-center justify-center gap-2 w-full bg-blue-600 hover:bg-blue-700 text-white px-6 py-3 rounded-lg transition-all duration-300 disabled:opacity-80 disabled:cursor-not-allowed"
                            >
                                {move || {
                                    if submitting() {
                                        Either::Left(
                                            view! {
                                                <span class="animate-spin h-5 w-5 rounded-full border-2 border-white border-t-transparent" />
                                                "Sending..."
                                            },
                                        )
                                    } else {
                                        Either::Right(view! { "Send Message" })
                                    }
                                }}
                            </button>
                        </div>
                        <StatusBanner form timer />
                    </form>
                </Reveal>
                <Reveal class="text-center mt-12 text-gray-600 dark:text-gray-400">
                    <p>
                        "Prefer email? Reach me directly at "
                        <a href=format!("mailto:{email}") class="text-blue-600 dark:text-blue-400">
                            {email.clone()}
                        </a>
                    </p>
                </Reveal>
            </div>
        </section>
    }
}

#[component]
fn Field(
    form: RwSignal<ContactForm>,
    field: FieldName,
    label: &'static str,
    placeholder: &'static str,
) -> impl IntoView {
    let id = field.as_str();
    let value = move || form.with(|f| f.fields().get(field).to_string());
    let on_input = move |ev: ev::Event| form.update(|f| f.set_field(field, event_target_value(&ev)));
    let error = move || form.with(|f| f.error(field).map(|e| e.to_string()));
    let input_class = "w-full px-4 py-3 rounded-lg border border-gray-300 dark:border-gray-600 bg-white dark:bg-gray-700 text-gray-800 dark:text-white focus:outline-none focus:ring-2 focus:ring-blue-500 focus:border-transparent transition-all";

    let input = match field {
        FieldName::Message => EitherOf3::A(view! {
            <textarea
                id=id
                name=id
                rows=5
                required
                placeholder=placeholder
                class=input_class
                prop:value=value
                on:input=on_input
            ></textarea>
        }),
        FieldName::Email => EitherOf3::B(view! {
            <input
                id=id
                type="email"
                name=id
                required
                placeholder=placeholder
                class=input_class
                prop:value=value
                on:input=on_input
            />
        }),
        FieldName::Name => EitherOf3::C(view! {
            <input
                id=id
                type="text"
                name=id
                required
                placeholder=placeholder
                class=input_class
                prop:value=value
                on:input=on_input
            />
        }),
    };

    view! {
        <div class="space-y-1">
            <label for=id class="flex items-center gap-2 text-gray-700 dark:text-gray-200">
                {label}
            </label>
            {input}
            {move || {
                error().map(|e| view! { <p class="text-sm text-red-600 dark:text-red-400">{e}</p> })
            }}
        </div>
    }
}

#[component]
fn StatusBanner(
    form: RwSignal<ContactForm>,
    timer: BrowserTimer,
) -> impl IntoView {
    move || match form.with(|f| f.status().clone()) {
        FormStatus::Idle | FormStatus::Submitting => EitherOf3::A(()),
        FormStatus::Succeeded => EitherOf3::B(view! {
            <div class="p-4 bg-green-100 dark:bg-green-900 text-green-800 dark:text-green-200 rounded-lg">
                "Message sent successfully! I'll get back to you soon."
            </div>
        }),
        FormStatus::Failed(e) => EitherOf3::C(view! {
            <div
                role="alert"
                class="p-4 bg-red-100 dark:bg-red-900 text-red-800 dark:text-red-200 rounded-lg flex items-center justify-between gap-4"
            >
                <span>"Couldn't send your message: " {e.to_string()}</span>
                <div class="flex gap-2">
                    <button
                        type="button"
                        class="px-3 py-1 rounded-md bg-red-600 text-white"
                        on:click=move |_| send(form, timer)
                    >
                        "Retry"
                    </button>
                    <button
                        type="button"
                        class="px-3 py-1 rounded-md border border-red-600"
                        aria-label="Dismiss"
                        on:click=move |_| form.update(ContactForm::dismiss)
                    >
                        "✕"
                    </button>
                </div>
            </div>
        }),
    }
}
