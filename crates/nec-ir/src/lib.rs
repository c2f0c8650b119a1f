//! NEC Infrared Protocol
//!
//! This crate provides types and utilities for building NEC infrared frames
//! and turning them into the timed pulse trains a hardware emitter consumes.
//! It targets the "extended" 32-bit form of the protocol used by LG TV
//! remotes, where a fixed 16-bit address prefix occupies the upper half of
//! the frame and the 16-bit command code the lower half.
//!
//! # Protocol Overview
//!
//! A transmission is a sequence of alternating mark/space durations:
//!
//! - **Leader**: 9000 µs mark + 4500 µs space
//! - **Data**: 32 bits, MSB first; each bit is a 560 µs mark followed by a
//!   1690 µs space for `1` or a 560 µs space for `0`
//! - **Stop**: a final 560 µs mark
//!
//! modulated onto a 38 kHz carrier. The carrier and the timing table live in
//! [`constants`]; hardware is abstracted behind the [`PulseTransmitter`]
//! trait so encoding stays testable without real timing.
//!
//! # Example
//!
//! ```rust,ignore
//! use nec_ir::{NecFrame, NecSender, PulseTransmitter};
//!
//! let frame = NecFrame::for_code(0x10EF);
//! assert_eq!(frame.raw(), 0x20DF10EF);
//! let pulses = frame.pulses();
//! ```

mod constants;
mod error;
mod frame;
mod sender;

pub use constants::*;
pub use error::*;
pub use frame::*;
pub use sender::*;
