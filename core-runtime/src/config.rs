//! # Core Configuration Module
//!
//! Configuration management for the native bridge core.
//!
//! ## Overview
//!
//! The configuration system uses a builder pattern to construct a
//! [`CoreConfig`] holding the platform bridges the capability layer needs.
//! It enforces fail-fast validation: a required bridge that is neither
//! injected nor covered by a platform default produces an actionable error
//! at build time, not a panic at first use.
//!
//! ## Required Dependencies
//!
//! - `TelephonyProvider` - the platform telephony service handle
//!
//! ## Optional Dependencies (with defaults)
//!
//! - `Clock` - time source (default: `SystemClock`)
//! - `LoggerSink` - host log forwarding (default: none)
//!
//! When the `desktop-shims` feature is enabled, the simulated desktop
//! telephony provider is injected automatically if none is provided.
//!
//! ## Usage
//!
//! ```ignore
//! use core_runtime::config::CoreConfig;
//! use std::sync::Arc;
//!
//! // Mobile host: inject the platform-native provider.
//! let config = CoreConfig::builder()
//!     .telephony_provider(Arc::new(AndroidTelephonyProvider::new(service_handle)))
//!     .build()?;
//!
//! // Desktop/dev host with the `desktop-shims` feature: defaults suffice.
//! let config = CoreConfig::builder().build()?;
//! ```

use crate::error::Result;
use bridge_traits::{Clock, LoggerSink, SystemClock, TelephonyProvider};
use std::sync::Arc;

/// Core configuration for the native bridge.
///
/// Holds the platform bridges required to stand up the capability layer.
/// Use [`CoreConfigBuilder`] to construct instances.
#[derive(Clone)]
pub struct CoreConfig {
    /// Platform telephony service handle (required)
    pub telephony: Arc<dyn TelephonyProvider>,

    /// Time source used for invocation timing
    pub clock: Arc<dyn Clock>,

    /// Optional sink forwarding structured logs to the host
    pub logger_sink: Option<Arc<dyn LoggerSink>>,
}

impl std::fmt::Debug for CoreConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("CoreConfig")
            .field("telephony", &"TelephonyProvider { ... }")
            .field("clock", &"Clock { ... }")
            .field(
                "logger_sink",
                &self.logger_sink.as_ref().map(|_| "LoggerSink { ... }"),
            )
            .finish()
    }
}

impl CoreConfig {
    /// Creates a new builder for constructing a `CoreConfig`.
    pub fn builder() -> CoreConfigBuilder {
        CoreConfigBuilder::default()
    }
}

#[cfg(not(feature = "desktop-shims"))]
fn telephony_missing_error() -> crate::error::Error {
    crate::error::Error::CapabilityMissing {
        capability: "TelephonyProvider".to_string(),
        message: "TelephonyProvider implementation is required to serve cell info. \
                 Desktop: enable the 'desktop-shims' feature to use the simulated provider. \
                 Mobile: inject an adapter over the platform telephony service \
                 (TelephonyManager on Android, CoreTelephony on iOS)."
            .to_string(),
    }
}

#[cfg(feature = "desktop-shims")]
fn provide_default_telephony() -> Result<Arc<dyn TelephonyProvider>> {
    use bridge_desktop::SimulatedTelephonyProvider;

    let provider: Arc<dyn TelephonyProvider> = Arc::new(SimulatedTelephonyProvider::new());
    Ok(provider)
}

#[cfg(not(feature = "desktop-shims"))]
fn provide_default_telephony() -> Result<Arc<dyn TelephonyProvider>> {
    Err(telephony_missing_error())
}

/// Builder for constructing [`CoreConfig`] instances.
///
/// Validates required dependencies at [`build()`](CoreConfigBuilder::build)
/// and reports missing capabilities with actionable messages.
#[derive(Default)]
pub struct CoreConfigBuilder {
    telephony: Option<Arc<dyn TelephonyProvider>>,
    clock: Option<Arc<dyn Clock>>,
    logger_sink: Option<Arc<dyn LoggerSink>>,
}

impl CoreConfigBuilder {
    /// Sets the telephony provider implementation (required).
    ///
    /// Mobile hosts inject the adapter wrapping the platform telephony
    /// service here. If not provided, the simulated desktop provider is
    /// used when the `desktop-shims` feature is enabled; otherwise `build`
    /// fails with `CapabilityMissing`.
    pub fn telephony_provider(mut self, provider: Arc<dyn TelephonyProvider>) -> Self {
        self.telephony = Some(provider);
        self
    }

    /// Sets the time source. Defaults to [`SystemClock`].
    pub fn clock(mut self, clock: Arc<dyn Clock>) -> Self {
        self.clock = Some(clock);
        self
    }

    /// Sets the host logger sink (optional).
    pub fn logger_sink(mut self, sink: Arc<dyn LoggerSink>) -> Self {
        self.logger_sink = Some(sink);
        self
    }

    /// Builds the final `CoreConfig` instance.
    ///
    /// # Errors
    ///
    /// Returns `Error::CapabilityMissing` when no telephony provider was
    /// injected and no platform default is available.
    pub fn build(self) -> Result<CoreConfig> {
        let telephony = match self.telephony {
            Some(provider) => provider,
            None => provide_default_telephony()?,
        };

        Ok(CoreConfig {
            telephony,
            clock: self.clock.unwrap_or_else(|| Arc::new(SystemClock)),
            logger_sink: self.logger_sink,
        })
    }
}
