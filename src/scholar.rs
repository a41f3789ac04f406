//! Scrape the daily digest of recommended papers from Scholar Inbox.
//!
//! Scholar Inbox has no public API. We log in with a password exactly as the
//! web app does, then read the digest from the same JSON endpoint the web app
//! renders from, reusing the session cookie set by the login.
//!
//! See [session::ScholarClient::fetch_papers].

pub mod auth;
mod digest;
pub mod error;
pub mod paper;
pub mod session;
