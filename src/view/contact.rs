//! Contact call-to-action and enquiry form.

use crate::model::contact::{
    submit_contact_form, BudgetRange, ContactField, ContactFormData, Country, DiscardingSubmitter,
    Interest,
};
use crate::model::content::{ContactLinkKind, CONTACT_DESCRIPTION, CONTACT_LINKS};
use crate::model::error::SubmitError;
use crate::shell::CONTACT_ANCHOR_ID;
use chrono::Utc;
use leptos::ev::SubmitEvent;
use leptos::prelude::*;
use tracing::{info, warn};

/// Outcome of the last submit.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum FormStatus {
    /// Nothing sent yet.
    #[default]
    Editing,
    /// Last submit was acknowledged.
    Sent,
    /// Last submit failed with this reason.
    Failed(String),
}

impl FormStatus {
    /// Status for a submit outcome.
    pub fn from_result<T>(result: &Result<T, SubmitError>) -> Self {
        match result {
            Ok(_) => FormStatus::Sent,
            Err(e) => FormStatus::Failed(e.to_string()),
        }
    }

    /// Text shown under the form, if any.
    pub fn message(&self) -> Option<String> {
        match self {
            FormStatus::Editing => None,
            FormStatus::Sent => Some("Thanks! We'll get back to you soon.".to_string()),
            FormStatus::Failed(reason) => Some(reason.clone()),
        }
    }
}

fn required_label(field: ContactField) -> String {
    format!("{}*", field.label())
}

/// Contact section with the enquiry form.
#[component]
pub fn ContactSection() -> impl IntoView {
    let form = RwSignal::new(ContactFormData::default());
    let status = RwSignal::new(FormStatus::default());

    let on_submit = move |ev: SubmitEvent| {
        ev.prevent_default();
        let result = submit_contact_form(form.get_untracked(), &DiscardingSubmitter, Utc::now());
        match &result {
            Ok(ack) => {
                info!(received_at = %ack.received_at, "Contact form acknowledged");
                form.set(ContactFormData::default());
            }
            Err(e) => warn!(error = %e, "Contact form not submitted"),
        }
        status.set(FormStatus::from_result(&result));
    };

    view! {
        <section id=CONTACT_ANCHOR_ID class="contact-cta-section scroll-animate">
            <div class="contact-cta-container">
                <div class="contact-cta-left">
                    <div class="contact-cta-subtitle reveal-header">
                        <span class="subtitle-line"></span>
                        <span>"Contact Us"</span>
                    </div>
                    <h2 class="contact-cta-title reveal-header">
                        "Let's talk For " <i>"Your"</i> <br /> <i>"Next Projects"</i>
                    </h2>
                    <p class="contact-cta-desc reveal-item">{CONTACT_DESCRIPTION}</p>

                    <ul class="contact-cta-list">
                        {CONTACT_LINKS
                            .iter()
                            .map(|link| {
                                let icon = match link.kind {
                                    ContactLinkKind::Email => "/icon-mail.svg",
                                    ContactLinkKind::Website => "/icon-globe.svg",
                                    ContactLinkKind::Instagram => "/icon-instagram.svg",
                                };
                                let target = link.opens_new_tab().then_some("_blank");
                                view! {
                                    <li class="reveal-item">
                                        <span class="contact-cta-icon">
                                            <img src=icon alt="" aria-hidden="true" />
                                        </span>
                                        <a href=link.href target=target rel="noreferrer">
                                            {link.label}
                                        </a>
                                    </li>
                                }
                            })
                            .collect_view()}
                    </ul>
                </div>

                <div class="contact-cta-right reveal-card">
                    <form class="contact-cta-form" on:submit=on_submit>
                        <div class="form-grid-two">
                            <div class="form-field">
                                <label>{required_label(ContactField::Name)}</label>
                                <input
                                    type="text"
                                    placeholder="Ex. Darshil Patel"
                                    required
                                    prop:value=move || form.with(|f| f.name.clone())
                                    on:input=move |ev| form.update(|f| f.name = event_target_value(&ev))
                                />
                            </div>
                            <div class="form-field">
                                <label>{required_label(ContactField::Email)}</label>
                                <input
                                    type="email"
                                    placeholder="Example@gmail.com"
                                    required
                                    prop:value=move || form.with(|f| f.email.clone())
                                    on:input=move |ev| form.update(|f| f.email = event_target_value(&ev))
                                />
                            </div>
                            <div class="form-field">
                                <label>{required_label(ContactField::Phone)}</label>
                                <input
                                    type="tel"
                                    placeholder="Enter Phone Number"
                                    required
                                    prop:value=move || form.with(|f| f.phone.clone())
                                    on:input=move |ev| form.update(|f| f.phone = event_target_value(&ev))
                                />
                            </div>
                            <div class="form-field">
                                <label>{required_label(ContactField::Interest)}</label>
                                <select
                                    prop:value=move || form.with(|f| f.interest.map_or("", Interest::label).to_string())
                                    on:change=move |ev| {
                                        form.update(|f| f.interest = Interest::from_label(&event_target_value(&ev)))
                                    }
                                >
                                    <option value="" disabled>"Select"</option>
                                    {Interest::ALL
                                        .into_iter()
                                        .map(|option| view! { <option value=option.label()>{option.label()}</option> })
                                        .collect_view()}
                                </select>
                            </div>
                            <div class="form-field">
                                <label>{required_label(ContactField::Budget)}</label>
                                <select
                                    prop:value=move || form.with(|f| f.budget.map_or("", BudgetRange::label).to_string())
                                    on:change=move |ev| {
                                        form.update(|f| f.budget = BudgetRange::from_label(&event_target_value(&ev)))
                                    }
                                >
                                    <option value="" disabled>"Select Range"</option>
                                    {BudgetRange::ALL
                                        .into_iter()
                                        .map(|option| view! { <option value=option.label()>{option.label()}</option> })
                                        .collect_view()}
                                </select>
                            </div>
                            <div class="form-field">
                                <label>{required_label(ContactField::Country)}</label>
                                <select
                                    prop:value=move || form.with(|f| f.country.map_or("", Country::label).to_string())
                                    on:change=move |ev| {
                                        form.update(|f| f.country = Country::from_label(&event_target_value(&ev)))
                                    }
                                >
                                    <option value="" disabled>"Select Country"</option>
                                    {Country::ALL
                                        .into_iter()
                                        .map(|option| view! { <option value=option.label()>{option.label()}</option> })
                                        .collect_view()}
                                </select>
                            </div>
                        </div>

                        <div class="form-field form-field-full">
                            <label>{required_label(ContactField::Message)}</label>
                            <textarea
                                placeholder="Enter here..."
                                required
                                prop:value=move || form.with(|f| f.message.clone())
                                on:input=move |ev| form.update(|f| f.message = event_target_value(&ev))
                            ></textarea>
                        </div>

                        <div class="contact-cta-actions">
                            <button class="btn-submit-contact" type="submit">
                                <span>"Submit"</span>
                                <div class="btn-submit-icon">
                                    <img src="/bullet-point.gif" alt="Submit" class="btn-submit-bullet" />
                                </div>
                            </button>
                        </div>

                        {move || {
                            let status = status.get();
                            status
                                .message()
                                .map(|message| {
                                    view! {
                                        <p
                                            class="form-status"
                                            class:form-status-error=matches!(status, FormStatus::Failed(_))
                                        >
                                            {message}
                                        </p>
                                    }
                                })
                        }}
                    </form>
                </div>
            </div>
        </section>
    }
}
