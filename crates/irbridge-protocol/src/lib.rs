//! IR Bridge Chat Command Protocol
//!
//! This crate provides types and utilities for translating inbound chat
//! messages into remote-control actions. The protocol is a simple line-based
//! text interface: a message is either a slash command or one exact keyword
//! from the fixed remote-key vocabulary.
//!
//! # Command Types
//!
//! - **`/start`**: Returns the welcome banner and the reply keyboard.
//! - **`/help`**: Returns the command reference text.
//! - **`/send <hex>`**: Transmits an arbitrary 16-bit NEC code supplied by
//!   the user (e.g. `/send 0x10EF`).
//! - **Key presses**: An exact, case-sensitive key label such as `Power`,
//!   `Vol+` or `7` transmits the pre-bound code for that key.
//!
//! Anything else is silently ignored: no reply, no transmission.
//!
//! # Example
//!
//! ```rust,ignore
//! use irbridge_protocol::{route, Action, RemoteKey};
//!
//! assert_eq!(route("Power"), Some(Action::Key(RemoteKey::Power)));
//! assert_eq!(route("/send 0x10EF"), Some(Action::Send(Ok(0x10EF))));
//! assert_eq!(route("banana"), None);
//! ```

mod error;
mod keys;
mod replies;
mod router;
mod text;

pub use error::*;
pub use keys::*;
pub use replies::*;
pub use router::*;
pub use text::*;
