//! Host-facing capability layer.
//!
//! This crate is the native side of the host shell boundary: it owns the
//! registration table of named capabilities, dispatches the shell's
//! invocations to them, and delivers each result through a single-shot
//! completion that maps onto the shell's promise convention.
//!
//! A host embeds the core by building a [`CoreConfig`] with its platform
//! bridges, constructing a [`HostService`] once at startup, and routing
//! every native call through [`HostService::dispatch`]:
//!
//! ```ignore
//! use core_host::{HostService, InvocationRequest, CELL_MODULE, GET_CELL_INFO};
//! use core_runtime::config::CoreConfig;
//!
//! # async fn example() -> Result<(), Box<dyn std::error::Error>> {
//! let config = CoreConfig::builder().build()?;
//! let service = HostService::new(config)?;
//!
//! let handle = service
//!     .dispatch(InvocationRequest::new(CELL_MODULE, GET_CELL_INFO))
//!     .await?;
//! let payload = handle.wait().await?;
//! # Ok(())
//! # }
//! ```

pub mod cell;
pub mod invocation;
pub mod registry;

pub use cell::{CellModule, CELL_MODULE, GET_CELL_INFO};
pub use invocation::{
    CapabilityResult, Completion, CompletionHandle, InvocationRequest, Rejection, FAILURE_CODE,
};
pub use registry::CapabilityRegistry;

use std::sync::Arc;

use async_trait::async_trait;
use bridge_traits::Clock;
use core_runtime::config::CoreConfig;
use thiserror::Error;
use tracing::{debug, trace};

/// A named native capability the host shell can invoke.
///
/// Implementations are stateless across invocations apart from the
/// platform handles they hold; the host may dispatch concurrent
/// invocations on any threads it likes.
#[async_trait]
pub trait Capability: Send + Sync {
    /// Registration name the host resolves this handler under.
    fn name(&self) -> &'static str;

    /// Method names this handler answers.
    fn methods(&self) -> &'static [&'static str];

    /// Handle one invocation, delivering exactly one result through
    /// `completion`.
    async fn invoke(&self, request: InvocationRequest, completion: Completion);
}

#[derive(Error, Debug)]
pub enum HostError {
    #[error("unknown capability: {0}")]
    UnknownCapability(String),

    #[error("capability {capability} has no method {method}")]
    UnknownMethod { capability: String, method: String },

    #[error("capability {0} is already registered")]
    DuplicateCapability(String),

    #[error(transparent)]
    Runtime(#[from] core_runtime::Error),
}

/// Build the fixed capability collection for a configured core.
///
/// This is the startup registration point: it returns every handler the
/// host shell should expose, each constructed with the platform bridges it
/// needs. The collection is consumed by [`CapabilityRegistry::new`] and
/// never modified afterwards.
pub fn register_capabilities(config: &CoreConfig) -> Vec<Arc<dyn Capability>> {
    vec![Arc::new(CellModule::new(Arc::clone(&config.telephony)))]
}

/// Primary façade exposed to host applications.
///
/// Constructed once at startup; lives for the process lifetime.
pub struct HostService {
    registry: CapabilityRegistry,
    clock: Arc<dyn Clock>,
}

impl HostService {
    /// Stand up the service with the standard capability set.
    pub fn new(config: CoreConfig) -> Result<Self, HostError> {
        let handlers = register_capabilities(&config);
        Self::with_capabilities(handlers, Arc::clone(&config.clock))
    }

    /// Stand up the service with an explicit handler collection.
    pub fn with_capabilities(
        handlers: Vec<Arc<dyn Capability>>,
        clock: Arc<dyn Clock>,
    ) -> Result<Self, HostError> {
        Ok(Self {
            registry: CapabilityRegistry::new(handlers)?,
            clock,
        })
    }

    /// The registration table backing this service.
    pub fn registry(&self) -> &CapabilityRegistry {
        &self.registry
    }

    /// Route one invocation to its capability.
    ///
    /// The handler runs to completion before this returns; the handle then
    /// yields the one result it delivered. Unknown capability or method
    /// names are dispatch errors and never reach a handler.
    pub async fn dispatch(
        &self,
        request: InvocationRequest,
    ) -> Result<CompletionHandle, HostError> {
        let handler = self
            .registry
            .get(&request.capability)
            .ok_or_else(|| HostError::UnknownCapability(request.capability.clone()))?;

        if !handler.methods().contains(&request.method.as_str()) {
            return Err(HostError::UnknownMethod {
                capability: request.capability.clone(),
                method: request.method.clone(),
            });
        }

        let id = request.id;
        debug!(
            id = %id,
            capability = %request.capability,
            method = %request.method,
            "dispatching invocation"
        );

        let started = self.clock.now();
        let (completion, handle) = Completion::channel();
        handler.invoke(request, completion).await;

        let elapsed_ms = (self.clock.now() - started).num_milliseconds();
        trace!(id = %id, elapsed_ms, "invocation handler returned");

        Ok(handle)
    }
}
