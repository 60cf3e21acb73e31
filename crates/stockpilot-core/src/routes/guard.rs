use std::fmt;

use serde::{Deserialize, Serialize};

/// Routes reachable without a session.
pub const PUBLIC_PATHS: &[&str] = &[
    "/",
    "/welcome",
    "/login",
    "/register",
    "/register/finance",
    "/terms",
    "/reset-password",
];

/// Where signed-out navigation to a protected route ends up
pub const WELCOME_PATH: &str = "/welcome";

/// Login entry point, used when the server rejects the session
pub const LOGIN_PATH: &str = "/login";

/// Build flavour the client runs as.
///
/// `Development` turns the session check off entirely. It is never the
/// default and has to be switched on explicitly.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum BuildMode {
    #[default]
    Production,
    Development,
}

impl BuildMode {
    pub fn is_development(self) -> bool {
        self == BuildMode::Development
    }
}

impl fmt::Display for BuildMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            BuildMode::Production => write!(f, "production"),
            BuildMode::Development => write!(f, "development"),
        }
    }
}

/// Outcome of a navigation check
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Decision {
    Proceed,
    Redirect(String),
}

/// Strip query string and fragment from a navigation target.
pub(crate) fn path_only(target: &str) -> &str {
    let end = target.find(|c: char| c == '?' || c == '#').unwrap_or(target.len());
    &target[..end]
}

/// Check whether a path is in the public allow-list (exact match).
pub fn is_public_path(path: &str) -> bool {
    PUBLIC_PATHS.contains(&path_only(path))
}

/// Decide whether a navigation to `target_path` may proceed.
///
/// Pure function of its inputs; it never touches the session itself.
pub fn authorize(target_path: &str, session_present: bool, mode: BuildMode) -> Decision {
    if is_public_path(target_path) {
        return Decision::Proceed;
    }
    if mode.is_development() {
        return Decision::Proceed;
    }
    if !session_present {
        return Decision::Redirect(WELCOME_PATH.to_string());
    }
    Decision::Proceed
}
