//! Site footer with the newsletter signup

use chrono::Datelike;
use dioxus::prelude::*;
use tracing::debug;

use super::{use_toasts, LoadingDots};
use crate::api::ApiClient;
use crate::state::{RequestTracker, SubscriptionForm};

/// Page footer
#[component]
pub fn Footer() -> Element {
    let year = chrono::Local::now().year();

    rsx! {
        footer {
            class: "bg-slate-100 w-full text-slate-600 py-10 px-4 md:px-10",
            div {
                class: "container mx-auto grid grid-cols-1 md:grid-cols-3 gap-10 text-center md:text-left",

                // Brand
                div {
                    class: "flex flex-col items-center md:items-start",
                    img { src: "/assets/logo.svg", alt: "Logo", width: "150", height: "150" }
                    p {
                        class: "text-sm text-slate-500 mt-4 font-semibold max-w-xs",
                        "Your trusted healthcare partner. Empowering you to make informed decisions. Together, we navigate your health journey."
                    }
                }

                // Newsletter
                div {
                    class: "flex flex-col items-center",
                    h2 { class: "text-lg font-bold text-gray-700", "Subscribe for updates" }
                    SubscribeForm {}
                    div {
                        class: "mt-4 flex space-x-4",
                        a { href: "#", aria_label: "Facebook", class: "text-blue-600 hover:text-blue-700", "Facebook" }
                        a { href: "#", aria_label: "Twitter", class: "text-blue-400 hover:text-blue-500", "Twitter" }
                        a { href: "#", aria_label: "Instagram", class: "text-pink-600 hover:text-pink-700", "Instagram" }
                        a { href: "#", aria_label: "LinkedIn", class: "text-blue-800 hover:text-blue-900", "LinkedIn" }
                    }
                }

                // Contact
                ContactDetails {}
            }

            div {
                class: "mt-8 text-center text-sm border-t pt-4",
                p { "\u{00A9} {year} Healthcare. All Rights Reserved." }
            }
        }
    }
}

/// Address, phone and email block, also used on the contact page
#[component]
pub fn ContactDetails() -> Element {
    rsx! {
        div {
            class: "flex flex-col items-center md:items-start text-sm space-y-3",
            h2 { class: "font-bold text-gray-700", "Contact Us" }
            div {
                class: "flex items-center",
                span { class: "mr-2", "\u{1F4CD}" }
                p { "123 Healthcare St, City, Country" }
            }
            div {
                class: "flex items-center",
                span { class: "mr-2", "\u{1F4DE}" }
                a { href: "tel:+1234567890", class: "hover:text-blue-400", "(+123) 456-7890" }
            }
            div {
                class: "flex items-center",
                span { class: "mr-2", "\u{2709}" }
                a { href: "mailto:info@healthcare.com", class: "hover:text-blue-400", "info@healthcare.com" }
            }
        }
    }
}

/// Email input plus subscribe button
#[component]
fn SubscribeForm() -> Element {
    let client = use_context::<ApiClient>();
    let toasts = use_toasts();

    let tracker = use_hook(RequestTracker::new);
    let mut form = use_signal({
        let tracker = tracker.clone();
        move || SubscriptionForm::new(tracker)
    });

    // Responses that arrive after the footer unmounts are dropped
    use_drop({
        let tracker = tracker.clone();
        move || tracker.invalidate()
    });

    let handle_submit = move |e: FormEvent| {
        e.prevent_default();

        let ticket = match form.write().begin_submit() {
            Ok(ticket) => ticket,
            Err(e) => {
                toasts.error(e.to_string());
                return;
            }
        };

        let client = client.clone();
        let tracker = tracker.clone();
        spawn(async move {
            let result = client.subscribe(&ticket.email).await;

            if !ticket.is_current(&tracker) {
                debug!("Footer gone before subscription finished");
                return;
            }

            if let Some(notice) = form.write().finish(&ticket, result) {
                toasts.show(notice.kind(), notice.message());
            }
        });
    };

    let is_submitting = form.read().is_submitting();
    let disabled = form.read().is_submit_disabled();
    let email = form.read().email().to_string();

    rsx! {
        form {
            class: "flex items-center mt-3 w-full max-w-sm",
            onsubmit: handle_submit,
            input {
                r#type: "email",
                placeholder: "Enter your email",
                value: "{email}",
                oninput: move |e| form.write().set_email(e.value()),
                class: "flex-grow p-2 rounded border border-gray-300 focus:ring-2 focus:ring-blue-500 focus:outline-none"
            }
            button {
                r#type: "submit",
                class: "bg-green-600 text-white font-bold py-2 px-4 ml-2 rounded disabled:opacity-50 disabled:cursor-not-allowed",
                disabled: disabled,
                if is_submitting {
                    LoadingDots {}
                } else {
                    "Subscribe"
                }
            }
        }
    }
}
