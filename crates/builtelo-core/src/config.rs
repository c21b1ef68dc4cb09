//! Endpoint configuration
//!
//! The form endpoint is baked in when the crate is compiled, the same
//! way the hosting pipeline injects secrets into a static bundle. It is
//! carried as a plain value so the form component can be handed a
//! substitute under test.

/// Where submitted leads are POSTed.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FormConfig {
    pub endpoint: Option<String>,
}

impl FormConfig {
    /// Read `NOTIFY_FORM_ENDPOINT` as it was set when this crate was
    /// compiled. Absent means submission stays disabled until the build
    /// is configured; the page itself still renders.
    pub fn from_build_env() -> Self {
        Self {
            endpoint: option_env!("NOTIFY_FORM_ENDPOINT").map(str::to_owned),
        }
    }

    pub fn new(endpoint: impl Into<String>) -> Self {
        Self {
            endpoint: Some(endpoint.into()),
        }
    }

    pub fn is_configured(&self) -> bool {
        self.endpoint.is_some()
    }
}
