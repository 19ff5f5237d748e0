//! # Host Bridge Traits
//!
//! Platform abstraction traits that must be implemented by each embedding
//! host.
//!
//! ## Overview
//!
//! This crate defines the contract between the capability layer and the
//! platform services it queries. Each trait represents something the host
//! must supply: the telephony service handle, a time source, and a sink for
//! forwarding logs into the host's own logging pipeline.
//!
//! ## Traits
//!
//! - [`TelephonyProvider`](telephony::TelephonyProvider) - Read-only access
//!   to the cellular radio state (visible cell records)
//! - [`Clock`](clock::Clock) - Time source for deterministic testing
//! - [`LoggerSink`](log::LoggerSink) - Forward structured logs to host
//!   logging (Logcat, OSLog, console)
//!
//! ## Error Handling
//!
//! All bridge traits use the [`BridgeError`](error::BridgeError) type.
//! Platform implementations should convert platform-specific failures
//! (missing service handle, denied permission, query throw) into the
//! matching variant and keep the original message text; the capability
//! layer forwards that text verbatim to the caller.
//!
//! ## Thread Safety
//!
//! All bridge traits require `Send + Sync` bounds so implementations can be
//! shared across async tasks behind `Arc`. The host owns thread selection;
//! implementations must not assume a particular dispatch thread.

pub mod clock;
pub mod error;
pub mod log;
pub mod telephony;

pub use error::BridgeError;

// Re-export commonly used types
pub use clock::{Clock, SystemClock};
pub use log::{ConsoleLogger, LogEntry, LogLevel, LoggerSink};
pub use telephony::{format_cell_records, CellInfo, RadioTechnology, TelephonyProvider};
