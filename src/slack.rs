//! Posts the digest as a single structured message to a Slack channel.
//!
//! The layout is fixed: a dated header, then per paper a linked title, an
//! authors and date line, and an abstract preview. See
//! [message::build_blocks].

pub mod api;
pub mod auth;
mod block;
pub mod channel;
pub mod error;
pub mod message;
