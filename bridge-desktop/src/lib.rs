//! # Desktop Bridge Implementations
//!
//! Default implementations of bridge traits for desktop development hosts
//! (macOS, Windows, Linux).
//!
//! ## Overview
//!
//! Desktop machines have no cellular radio, so the telephony bridge here is
//! a deterministic simulation: a fixed snapshot of plausible cell records,
//! the same role the demo fixtures play in the host shell when it runs in a
//! browser. This keeps the full capability path exercisable on a developer
//! machine without a device attached.
//!
//! A mobile host ships its own `TelephonyProvider` backed by the real
//! platform service and injects it through the core configuration instead.
//!
//! ## Usage
//!
//! ```ignore
//! use bridge_desktop::SimulatedTelephonyProvider;
//! use bridge_traits::TelephonyProvider;
//!
//! #[tokio::main]
//! async fn main() {
//!     let provider = SimulatedTelephonyProvider::new();
//!     let records = provider.all_cell_info().await.unwrap();
//!     println!("{} visible cells", records.len());
//! }
//! ```

mod sim;

pub use sim::SimulatedTelephonyProvider;
