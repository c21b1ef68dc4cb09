//! Launch page components

mod buttons;
mod form;
mod input;

pub use buttons::{ArrowButton, NotifyButton};
pub use form::LeadCaptureForm;
pub use input::TextInput;
