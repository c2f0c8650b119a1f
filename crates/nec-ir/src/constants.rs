//! Protocol constants
//!
//! Timing values follow the NEC transmission standard; the address prefix is
//! the fixed upper half of every extended frame sent to the target TV.

// ============================================================================
// Frame Layout
// ============================================================================

/// Fixed 16-bit address prefix occupying the upper half of every frame.
pub const ADDRESS_PREFIX: u16 = 0x20DF;

/// Number of data bits in a frame.
pub const FRAME_BITS: usize = 32;

/// Reserved command code: all-ones is the protocol repeat/overflow sentinel
/// and must never be bound to a named action.
pub const CODE_RESERVED: u16 = 0xFFFF;

// ============================================================================
// Pulse Timing (microseconds)
// ============================================================================

/// Leader mark duration.
pub const LEADER_MARK_US: u32 = 9000;
/// Leader space duration.
pub const LEADER_SPACE_US: u32 = 4500;
/// Mark duration for every data bit and the stop pulse.
pub const BIT_MARK_US: u32 = 560;
/// Space duration following a `1` bit.
pub const ONE_SPACE_US: u32 = 1690;
/// Space duration following a `0` bit.
pub const ZERO_SPACE_US: u32 = 560;

/// Carrier modulation frequency in Hz.
pub const CARRIER_HZ: u32 = 38_000;

/// Total number of mark/space durations in an encoded frame:
/// leader (2) + 32 bits x 2 + stop mark (1).
pub const PULSES_PER_FRAME: usize = 2 + FRAME_BITS * 2 + 1;
