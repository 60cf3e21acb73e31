use thiserror::Error;
use tracing::{debug, warn};

use crate::auth::Session;

use super::guard::{authorize, path_only, BuildMode, Decision};
use super::table::{RouteMatch, RouteTable};

#[derive(Error, Debug, PartialEq, Eq)]
pub enum NavigationError {
    #[error("No route matches {0}")]
    NotFound(String),

    #[error("Redirect from {from} to {to} was itself redirected")]
    RedirectLoop { from: String, to: String },
}

/// A completed navigation: the route that will be shown and how we got there.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Navigation {
    pub target: RouteMatch,
    /// Original path when the guard redirected the navigation
    pub redirected_from: Option<String>,
}

impl Navigation {
    pub fn path(&self) -> &'static str {
        self.target.route.pattern
    }

    pub fn was_redirected(&self) -> bool {
        self.redirected_from.is_some()
    }
}

/// Resolves navigation targets through the access guard.
///
/// The guard decision is made before the route is resolved; a protected
/// view is never returned for a denied navigation.
#[derive(Debug, Clone)]
pub struct Navigator {
    table: RouteTable,
    session: Session,
    mode: BuildMode,
}

impl Navigator {
    pub fn new(session: Session, mode: BuildMode) -> Self {
        Self::with_table(RouteTable::default(), session, mode)
    }

    pub fn with_table(table: RouteTable, session: Session, mode: BuildMode) -> Self {
        if mode.is_development() {
            warn!("Development build mode: route access checks are DISABLED");
        }
        Self {
            table,
            session,
            mode,
        }
    }

    pub fn mode(&self) -> BuildMode {
        self.mode
    }

    pub fn table(&self) -> &RouteTable {
        &self.table
    }

    /// Guard decision for `path` given the current session.
    pub fn check(&self, path: &str) -> Decision {
        let present = self.session.is_authenticated();
        let decision = authorize(path, present, self.mode);
        if self.mode.is_development() && !present && decision == Decision::Proceed {
            debug!(path, "Route guard bypassed in development mode");
        }
        decision
    }

    /// Navigate to `target`, following at most one guard redirect.
    pub fn navigate(&self, target: &str) -> Result<Navigation, NavigationError> {
        let path = path_only(target);
        match self.check(path) {
            Decision::Proceed => {
                let target = self.resolve(path)?;
                debug!(path, route = target.route.name, "Navigation allowed");
                Ok(Navigation {
                    target,
                    redirected_from: None,
                })
            }
            Decision::Redirect(to) => {
                debug!(from = path, to = %to, "Navigation redirected");
                if self.check(&to) != Decision::Proceed {
                    return Err(NavigationError::RedirectLoop {
                        from: path.to_string(),
                        to,
                    });
                }
                let target = self.resolve(&to)?;
                Ok(Navigation {
                    target,
                    redirected_from: Some(path.to_string()),
                })
            }
        }
    }

    fn resolve(&self, path: &str) -> Result<RouteMatch, NavigationError> {
        self.table
            .resolve(path)
            .ok_or_else(|| NavigationError::NotFound(path.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use super::*;
    use crate::auth::MemoryStore;
    use crate::routes::View;

    fn navigator(token: Option<&str>, mode: BuildMode) -> Navigator {
        let store = match token {
            Some(t) => MemoryStore::with_token(t),
            None => MemoryStore::new(),
        };
        Navigator::new(Session::new(Arc::new(store)), mode)
    }

    #[test]
    fn test_signed_out_protected_route_lands_on_welcome() {
        let nav = navigator(None, BuildMode::Production)
            .navigate("/home")
            .unwrap();
        assert_eq!(nav.target.route.view, View::Welcome);
        assert_eq!(nav.redirected_from.as_deref(), Some("/home"));
    }

    #[test]
    fn test_signed_in_reaches_protected_route_with_params() {
        let nav = navigator(Some("abc"), BuildMode::Production)
            .navigate("/company/TSLA?tab=financials")
            .unwrap();
        assert_eq!(nav.target.route.view, View::CompanyDetail);
        assert_eq!(nav.target.param("symbol"), Some("TSLA"));
        assert!(!nav.was_redirected());
    }

    #[test]
    fn test_public_route_with_session() {
        let nav = navigator(Some("abc"), BuildMode::Production)
            .navigate("/login")
            .unwrap();
        assert_eq!(nav.target.route.view, View::Login);
        assert!(!nav.was_redirected());
    }

    #[test]
    fn test_development_mode_skips_guard() {
        let nav = navigator(None, BuildMode::Development)
            .navigate("/bot")
            .unwrap();
        assert_eq!(nav.target.route.view, View::Bot);
        assert!(!nav.was_redirected());
    }

    #[test]
    fn test_unknown_route() {
        let err = navigator(Some("abc"), BuildMode::Production)
            .navigate("/nowhere")
            .unwrap_err();
        assert_eq!(err, NavigationError::NotFound("/nowhere".to_string()));
    }

    #[test]
    fn test_unknown_route_signed_out_is_redirected_first() {
        // Unknown paths are not public, so the guard runs before lookup
        let nav = navigator(None, BuildMode::Production)
            .navigate("/nowhere")
            .unwrap();
        assert_eq!(nav.target.route.view, View::Welcome);
    }

    #[test]
    fn test_navigation_sees_session_changes() {
        let store = Arc::new(MemoryStore::with_token("abc"));
        let session = Session::new(store);
        let navigator = Navigator::new(session.clone(), BuildMode::Production);

        assert_eq!(navigator.check("/home"), Decision::Proceed);
        session.clear().unwrap();
        assert_eq!(
            navigator.check("/home"),
            Decision::Redirect("/welcome".to_string())
        );
    }
}
