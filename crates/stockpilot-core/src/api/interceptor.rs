//! Pluggable stages of the request pipeline.
//!
//! Request interceptors run before a request is dispatched and may only
//! decorate it; they cannot fail. Response interceptors observe failures
//! after the transport returns and before the caller sees them; they cannot
//! swallow or replace the error.

use std::sync::Arc;

use reqwest::header::{HeaderValue, AUTHORIZATION};
use tracing::{error, warn};

use crate::auth::Session;
use crate::routes::LOGIN_PATH;

use super::{ApiError, RequestDescriptor};

pub trait RequestInterceptor: Send + Sync {
    fn on_request(&self, request: &mut RequestDescriptor);
}

pub trait ResponseInterceptor: Send + Sync {
    fn on_error(&self, request: &RequestDescriptor, error: &ApiError);
}

/// Full client-side navigation, triggered from outside the router.
pub trait Redirect: Send + Sync {
    fn redirect(&self, path: &str);
}

impl<F> Redirect for F
where
    F: Fn(&str) + Send + Sync,
{
    fn redirect(&self, path: &str) {
        self(path)
    }
}

/// Attaches `Authorization: Bearer <token>` while a session token exists.
pub struct BearerAuth {
    session: Session,
}

impl BearerAuth {
    pub fn new(session: Session) -> Self {
        Self { session }
    }
}

impl RequestInterceptor for BearerAuth {
    fn on_request(&self, request: &mut RequestDescriptor) {
        let Some(token) = self.session.token() else {
            request.headers.remove(AUTHORIZATION);
            return;
        };
        match HeaderValue::from_str(&format!("Bearer {}", token)) {
            Ok(mut value) => {
                value.set_sensitive(true);
                request.headers.insert(AUTHORIZATION, value);
            }
            Err(_) => {
                warn!(path = %request.path, "Session token is not a valid header value, sending request without it");
                request.headers.remove(AUTHORIZATION);
            }
        }
    }
}

/// Ends the session when the server rejects it.
///
/// On a 401 the stored token is removed and the client is sent to the login
/// screen. The error itself still reaches the caller.
pub struct SessionExpiry {
    session: Session,
    redirect: Arc<dyn Redirect>,
}

impl SessionExpiry {
    pub fn new(session: Session, redirect: Arc<dyn Redirect>) -> Self {
        Self { session, redirect }
    }
}

impl ResponseInterceptor for SessionExpiry {
    fn on_error(&self, request: &RequestDescriptor, err: &ApiError) {
        if !err.is_unauthorized() {
            return;
        }
        warn!(method = %request.method, path = %request.path, "Session rejected by server, signing out");
        if let Err(e) = self.session.clear() {
            error!(error = %e, "Failed to remove session token");
        }
        self.redirect.redirect(LOGIN_PATH);
    }
}
