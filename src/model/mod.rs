//! Domain model: page content, routes, contact data and error types.

pub mod contact;
pub mod content;
pub mod error;
pub mod route;

pub use contact::{
    submit_contact_form, Ack, BudgetRange, ContactField, ContactFormData, ContactSubmission,
    ContactSubmitter, Country, DiscardingSubmitter, Interest,
};
pub use error::{ConfigError, DomError, LoggingError, SiteError, SubmitError};
pub use route::{NavItem, Page, Route};
