//! builtelo launch-site core
//!
//! Framework-free logic behind the lead-capture flow: field validation,
//! the form state machine, submission outcome mapping, and endpoint
//! configuration. The web crate wires these into the browser; everything
//! here runs and tests natively.

pub mod config;
pub mod form;
pub mod submit;
pub mod validate;

pub use config::FormConfig;
pub use form::{Field, FieldErrors, LeadFields, LeadForm, Touched};
pub use submit::{response_outcome, SubmitError};
