//! Client contact helpers: phone normalization and dial/mail/chat links.
//!
//! Everything here is pure; the raw user-entered strings stored on client
//! records are never rewritten, only derived from.

pub mod links;
pub mod phone;

pub use links::*;
pub use phone::*;
