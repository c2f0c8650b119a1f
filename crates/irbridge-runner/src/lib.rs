//! IR bridge runtime: collaborator traits, the polling dispatch loop, and a
//! console harness for exercising the bridge without hardware or a chat
//! backend.

pub mod bridge;
pub mod config;
pub mod console;
pub mod traits;

pub use bridge::{Bridge, BridgeConfig, StepOutcome};
pub use config::RunnerConfig;
pub use traits::{ChatId, InboundMessage, MessageTransport, NetworkLink, TransportError};
