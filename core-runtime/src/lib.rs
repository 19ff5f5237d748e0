//! # Core Runtime Module
//!
//! Foundational runtime infrastructure for the native bridge core:
//! - Logging and tracing infrastructure
//! - Configuration management with fail-fast capability validation
//!
//! ## Overview
//!
//! This crate contains the runtime utilities the host-facing layer depends
//! on. It establishes the logging conventions and the configuration pattern
//! through which the embedding host injects its platform bridges.

pub mod config;
pub mod error;
pub mod logging;

pub use config::{CoreConfig, CoreConfigBuilder};
pub use error::{Error, Result};
