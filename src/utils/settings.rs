/*---------- Imports ----------*/
use std::env;

/*---------- Constants ----------*/
pub const ENDPOINT_NAME_VAR: &str = "ENDPOINT_NAME";
pub const STRICT_ERRORS_VAR: &str = "STRICT_ERRORS";

/*---------- Enums ----------*/
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorMode {
    /// Failures fail the whole invocation.
    Propagate,
    /// Failures become 4xx/5xx responses with a message body.
    Strict,
}

impl Default for ErrorMode {
    fn default() -> Self {
        Self::Propagate
    }
}

#[derive(Debug, PartialEq, Eq)]
pub enum SettingsError {
    MissingVariable(&'static str),
}

impl std::fmt::Display for SettingsError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            SettingsError::MissingVariable(name) => write!(f, "{} must be set", name),
        }
    }
}

impl std::error::Error for SettingsError {}

/*---------- Structs ----------*/
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Settings {
    pub endpoint_name: String,
    pub error_mode: ErrorMode,
}

impl Settings {
    pub fn from_env() -> Result<Self, SettingsError> {
        Self::from_lookup(|name| env::var(name).ok())
    }

    pub fn from_lookup<F>(lookup: F) -> Result<Self, SettingsError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let endpoint_name = match lookup(ENDPOINT_NAME_VAR) {
            Some(name) if !name.trim().is_empty() => name,
            _ => return Err(SettingsError::MissingVariable(ENDPOINT_NAME_VAR)),
        };

        let error_mode = match lookup(STRICT_ERRORS_VAR) {
            Some(flag) if is_enabled(&flag) => ErrorMode::Strict,
            _ => ErrorMode::default(),
        };

        Ok(Settings {
            endpoint_name,
            error_mode,
        })
    }
}

fn is_enabled(flag: &str) -> bool {
    matches!(
        flag.trim().to_ascii_lowercase().as_str(),
        "true" | "1" | "yes"
    )
}
