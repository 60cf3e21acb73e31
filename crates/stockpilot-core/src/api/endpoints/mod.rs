//! Typed wrappers for every backend endpoint, grouped by domain.
//!
//! Each method is a single pipeline call; none of them retry or cache.

mod assets;
mod auth;
mod bot;
mod companies;
mod market;
mod news;
mod stocks;
mod trading;
mod user;
