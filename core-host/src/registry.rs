//! Capability registration table.

use std::collections::HashMap;
use std::sync::Arc;

use crate::{Capability, HostError};

/// Process-wide mapping from capability name to handler.
///
/// Built once at startup from the fixed collection the registration
/// function returns and immutable thereafter. There is no unregistration;
/// the table lives for the process lifetime.
pub struct CapabilityRegistry {
    handlers: HashMap<&'static str, Arc<dyn Capability>>,
}

impl CapabilityRegistry {
    /// Build the table, rejecting duplicate names.
    pub fn new(handlers: Vec<Arc<dyn Capability>>) -> Result<Self, HostError> {
        let mut table = HashMap::with_capacity(handlers.len());

        for handler in handlers {
            let name = handler.name();
            if table.insert(name, handler).is_some() {
                return Err(HostError::DuplicateCapability(name.to_string()));
            }
        }

        Ok(Self { handlers: table })
    }

    /// Resolve a capability by its registration name.
    pub fn get(&self, name: &str) -> Option<Arc<dyn Capability>> {
        self.handlers.get(name).map(Arc::clone)
    }

    /// Registered capability names, sorted for stable output.
    pub fn names(&self) -> Vec<&'static str> {
        let mut names: Vec<_> = self.handlers.keys().copied().collect();
        names.sort_unstable();
        names
    }

    pub fn len(&self) -> usize {
        self.handlers.len()
    }

    pub fn is_empty(&self) -> bool {
        self.handlers.is_empty()
    }
}
