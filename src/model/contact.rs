//! Contact form data and the submission extension point.
//!
//! The form collects enquiry details client-side. Nothing is sent anywhere by
//! default: [`submit_contact_form`] checks the fields the markup marks
//! `required` and hands the submission to a [`ContactSubmitter`]. The bundled
//! [`DiscardingSubmitter`] only logs and acknowledges. A real backend plugs in
//! by implementing the trait.

use crate::model::error::SubmitError;
use chrono::{DateTime, Utc};
use serde::Serialize;

/// Service a visitor is interested in.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Interest {
    /// Brand identity work.
    Branding,
    /// Marketing or portfolio sites.
    WebsiteDesign,
    /// App interfaces.
    ApplicationDesign,
    /// Logos only.
    LogoDesign,
    /// Anything else.
    Other,
}

impl Interest {
    /// All options in the order the select lists them.
    pub const ALL: [Interest; 5] = [
        Interest::Branding,
        Interest::WebsiteDesign,
        Interest::ApplicationDesign,
        Interest::LogoDesign,
        Interest::Other,
    ];

    /// Option text and `value`.
    pub fn label(self) -> &'static str {
        match self {
            Interest::Branding => "Branding",
            Interest::WebsiteDesign => "Website Design",
            Interest::ApplicationDesign => "Application Design",
            Interest::LogoDesign => "Logo Design",
            Interest::Other => "Other",
        }
    }

    /// Parse the `value` of a select option. Unknown or empty values yield `None`.
    pub fn from_label(label: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|option| option.label() == label)
    }
}

/// Project budget bracket.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum BudgetRange {
    /// $200 to $500.
    From200To500,
    /// $500 to $1000.
    From500To1000,
    /// $1000 to $2500.
    From1000To2500,
    /// Over $2500.
    Above2500,
}

impl BudgetRange {
    /// All options in the order the select lists them.
    pub const ALL: [BudgetRange; 4] = [
        BudgetRange::From200To500,
        BudgetRange::From500To1000,
        BudgetRange::From1000To2500,
        BudgetRange::Above2500,
    ];

    /// Option text and `value`.
    pub fn label(self) -> &'static str {
        match self {
            BudgetRange::From200To500 => "$200 - $500",
            BudgetRange::From500To1000 => "$500 - $1000",
            BudgetRange::From1000To2500 => "$1000 - $2500",
            BudgetRange::Above2500 => "$2500+",
        }
    }

    /// Parse the `value` of a select option. Unknown or empty values yield `None`.
    pub fn from_label(label: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|option| option.label() == label)
    }
}

/// Visitor's country.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Country {
    /// India.
    India,
    /// United States.
    UnitedStates,
    /// United Kingdom.
    UnitedKingdom,
    /// Canada.
    Canada,
    /// Anywhere else.
    Other,
}

impl Country {
    /// All options in the order the select lists them.
    pub const ALL: [Country; 5] = [
        Country::India,
        Country::UnitedStates,
        Country::UnitedKingdom,
        Country::Canada,
        Country::Other,
    ];

    /// Option text and `value`.
    pub fn label(self) -> &'static str {
        match self {
            Country::India => "India",
            Country::UnitedStates => "United States",
            Country::UnitedKingdom => "United Kingdom",
            Country::Canada => "Canada",
            Country::Other => "Other",
        }
    }

    /// Parse the `value` of a select option. Unknown or empty values yield `None`.
    pub fn from_label(label: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|option| option.label() == label)
    }
}

/// Identifies a single form field, for error reporting.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ContactField {
    /// Visitor's name.
    Name,
    /// Reply address.
    Email,
    /// Phone number.
    Phone,
    /// Service select.
    Interest,
    /// Budget select.
    Budget,
    /// Country select.
    Country,
    /// Free-text enquiry.
    Message,
}

impl ContactField {
    /// Fields carrying the HTML `required` attribute, in form order.
    pub const REQUIRED: [ContactField; 4] = [
        ContactField::Name,
        ContactField::Email,
        ContactField::Phone,
        ContactField::Message,
    ];

    /// Label shown above the input (without the trailing asterisk).
    pub fn label(self) -> &'static str {
        match self {
            ContactField::Name => "Your Name",
            ContactField::Email => "Email",
            ContactField::Phone => "Phone",
            ContactField::Interest => "I'm Interested in",
            ContactField::Budget => "Budget Range",
            ContactField::Country => "Country",
            ContactField::Message => "Your Message",
        }
    }
}

/// Raw values collected from the form.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct ContactFormData {
    /// Visitor's name.
    pub name: String,
    /// Reply address.
    pub email: String,
    /// Phone number.
    pub phone: String,
    /// Selected service, if any.
    pub interest: Option<Interest>,
    /// Selected budget, if any.
    pub budget: Option<BudgetRange>,
    /// Selected country, if any.
    pub country: Option<Country>,
    /// Free-text enquiry.
    pub message: String,
}

impl ContactFormData {
    /// Required fields that are empty or whitespace-only, in form order.
    pub fn missing_required(&self) -> Vec<ContactField> {
        ContactField::REQUIRED
            .into_iter()
            .filter(|field| {
                let value = match field {
                    ContactField::Name => &self.name,
                    ContactField::Email => &self.email,
                    ContactField::Phone => &self.phone,
                    ContactField::Message => &self.message,
                    _ => return false,
                };
                value.trim().is_empty()
            })
            .collect()
    }
}

/// A form snapshot stamped with the time it was submitted.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ContactSubmission {
    /// The submitted values.
    #[serde(flatten)]
    pub form: ContactFormData,
    /// When the visitor pressed send.
    pub submitted_at: DateTime<Utc>,
}

impl ContactSubmission {
    /// JSON payload for a transport-backed submitter.
    pub fn to_json(&self) -> Result<String, SubmitError> {
        serde_json::to_string(self).map_err(|e| SubmitError::Encode(e.to_string()))
    }
}

/// Acknowledgement returned by a submitter.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Ack {
    /// When the submitter accepted the submission.
    pub received_at: DateTime<Utc>,
}

/// Destination for contact submissions.
pub trait ContactSubmitter {
    /// Deliver `submission`, returning when it was accepted.
    fn submit(&self, submission: &ContactSubmission) -> Result<Ack, SubmitError>;
}

/// Submitter that accepts everything and sends nothing.
#[derive(Debug, Clone, Copy, Default)]
pub struct DiscardingSubmitter;

impl ContactSubmitter for DiscardingSubmitter {
    fn submit(&self, submission: &ContactSubmission) -> Result<Ack, SubmitError> {
        tracing::info!(
            interest = ?submission.form.interest,
            budget = ?submission.form.budget,
            country = ?submission.form.country,
            message_len = submission.form.message.len(),
            "Contact submission discarded (no backend configured)"
        );
        Ok(Ack {
            received_at: submission.submitted_at,
        })
    }
}

/// Check the required fields and hand the form to `submitter`.
///
/// # Errors
///
/// Returns [`SubmitError::MissingFields`] without calling the submitter when a
/// required field is blank; otherwise whatever the submitter returns.
pub fn submit_contact_form(
    data: ContactFormData,
    submitter: &dyn ContactSubmitter,
    now: DateTime<Utc>,
) -> Result<Ack, SubmitError> {
    let missing = data.missing_required();
    if !missing.is_empty() {
        return Err(SubmitError::MissingFields(missing));
    }

    let submission = ContactSubmission {
        form: data,
        submitted_at: now,
    };
    submitter.submit(&submission)
}

// ===== Tests =====

#[cfg(test)]
#[path = "contact_tests.rs"]
mod tests;
