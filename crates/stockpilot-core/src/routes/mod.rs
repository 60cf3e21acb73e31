//! Client routing: the route table and the access guard in front of it.
//!
//! Every navigation goes through [`Navigator::navigate`], which asks
//! [`authorize`] for a decision before it resolves the target view. Public
//! routes (splash, welcome, login, register, terms, reset-password) are
//! always reachable; everything else needs a session token.

pub mod guard;
pub mod navigator;
pub mod table;

pub use guard::{authorize, is_public_path, BuildMode, Decision, LOGIN_PATH, PUBLIC_PATHS, WELCOME_PATH};
pub use navigator::{Navigation, NavigationError, Navigator};
pub use table::{RouteDescriptor, RouteMatch, RouteTable, View, ROUTES};
