//! Lead-capture form component
//!
//! Thin reactive wiring around [`builtelo_core::LeadForm`]: keystrokes
//! and blurs drive the state machine, a valid submit POSTs the payload,
//! and a single-shot timer retires the success banner.

use std::time::Duration;

use leptos::leptos_dom::helpers::{set_timeout_with_handle, TimeoutHandle};
use leptos::*;

use builtelo_core::{Field, FormConfig, LeadForm, SubmitError};

use crate::components::{NotifyButton, TextInput};
use crate::net;

/// How long the success banner stays up before it clears itself.
const SUCCESS_BANNER: Duration = Duration::from_millis(5_000);

#[component]
pub fn LeadCaptureForm(config: FormConfig) -> impl IntoView {
    let form = create_rw_signal(LeadForm::new());

    // At most one banner-expiry timer is armed at a time; a fresh
    // success replaces the old one instead of stacking.
    let pending_expiry = store_value(None::<TimeoutHandle>);

    on_cleanup(move || {
        if let Some(handle) = pending_expiry.get_value() {
            handle.clear();
        }
    });

    let arm_banner_expiry = move || {
        if let Some(prior) = pending_expiry.get_value() {
            prior.clear();
        }
        let handle = set_timeout_with_handle(
            move || form.update(|f| f.clear_success()),
            SUCCESS_BANNER,
        );
        pending_expiry.set_value(handle.ok());
    };

    let on_submit = move |ev: ev::SubmitEvent| {
        ev.prevent_default();

        let Some(lead) = form.try_update(|f| f.begin_submit()).flatten() else {
            return;
        };

        let Some(endpoint) = config.endpoint.clone() else {
            logging::error!(
                "Form endpoint is not configured; set NOTIFY_FORM_ENDPOINT for this build."
            );
            form.update(|f| f.finish_failure());
            return;
        };

        spawn_local(async move {
            match net::post_lead(&endpoint, &lead).await {
                Ok(()) => {
                    form.update(|f| f.finish_success());
                    arm_banner_expiry();
                }
                Err(err) => {
                    logging::error!("Lead submission failed: {err}");
                    let message = match err {
                        SubmitError::Rejected(_) => "Something went wrong. Please try again.",
                        _ => "Error submitting form. Please try again.",
                    };
                    let _ = window().alert_with_message(message);
                    form.update(|f| f.finish_failure());
                }
            }
        });
    };

    let name_value = Signal::derive(move || form.with(|f| f.fields.name.clone()));
    let name_error = Signal::derive(move || form.with(|f| f.errors.name));
    let email_value = Signal::derive(move || form.with(|f| f.fields.email.clone()));
    let email_error = Signal::derive(move || form.with(|f| f.errors.email));
    let submitting = Signal::derive(move || form.with(|f| f.submitting));
    let label = Signal::derive(move || if submitting.get() { "Submitting" } else { "Notify Me" });

    view! {
        <form on:submit=on_submit class="w-full max-w-md space-y-4">
            <TextInput
                placeholder="Name"
                input_type="text"
                name="name"
                value=name_value
                error=name_error
                on_edit=move |value| form.update(|f| f.input(Field::Name, value))
                on_leave=move |_: ()| form.update(|f| f.blur(Field::Name))
            />
            <TextInput
                placeholder="Email Address"
                input_type="email"
                name="email"
                value=email_value
                error=email_error
                on_edit=move |value| form.update(|f| f.input(Field::Email, value))
                on_leave=move |_: ()| form.update(|f| f.blur(Field::Email))
            />
            <div class="flex items-center justify-center pt-4">
                <NotifyButton label=label disabled=submitting/>
            </div>
        </form>

        <Show when=move || form.with(|f| f.success)>
            <div class="mt-4 rounded-lg border border-green-500 bg-green-900/50 p-4">
                <p class="text-green-400">
                    "You're on the list! We'll notify you when we launch."
                </p>
            </div>
        </Show>
    }
}
