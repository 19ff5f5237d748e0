//! Simulated Telephony Implementation

use async_trait::async_trait;
use bridge_traits::{
    error::{BridgeError, Result},
    telephony::{CellInfo, RadioTechnology, TelephonyProvider},
};
use tracing::debug;

/// Simulated telephony provider for development and desktop hosts.
///
/// Serves a fixed snapshot of cell records. The snapshot never changes over
/// the provider's lifetime, so repeated queries return identical results.
/// Construct with [`failing`](SimulatedTelephonyProvider::failing) to
/// exercise the capability error path end to end.
pub struct SimulatedTelephonyProvider {
    snapshot: Vec<CellInfo>,
    failure: Option<BridgeError>,
}

impl SimulatedTelephonyProvider {
    /// Create a provider serving the default fixture snapshot: one
    /// registered LTE serving cell plus two neighbors.
    pub fn new() -> Self {
        Self::with_snapshot(default_snapshot())
    }

    /// Create a provider serving a caller-supplied snapshot.
    pub fn with_snapshot(snapshot: Vec<CellInfo>) -> Self {
        Self {
            snapshot,
            failure: None,
        }
    }

    /// Create a provider whose every query fails with `error`.
    pub fn failing(error: BridgeError) -> Self {
        Self {
            snapshot: Vec::new(),
            failure: Some(error),
        }
    }
}

impl Default for SimulatedTelephonyProvider {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl TelephonyProvider for SimulatedTelephonyProvider {
    async fn all_cell_info(&self) -> Result<Vec<CellInfo>> {
        if let Some(failure) = &self.failure {
            return Err(failure.clone());
        }

        debug!(cells = self.snapshot.len(), "serving simulated cell snapshot");
        Ok(self.snapshot.clone())
    }
}

fn default_snapshot() -> Vec<CellInfo> {
    vec![
        CellInfo {
            radio: RadioTechnology::Lte,
            registered: true,
            mcc: 242,
            mnc: 1,
            cell_id: 104_223_003,
            area_code: 21405,
            physical_cell_id: Some(101),
            channel: Some(6300),
            dbm: -89,
            level: 3,
        },
        CellInfo {
            radio: RadioTechnology::Lte,
            registered: false,
            mcc: 242,
            mnc: 1,
            cell_id: 104_223_011,
            area_code: 21405,
            physical_cell_id: Some(176),
            channel: Some(6300),
            dbm: -102,
            level: 2,
        },
        CellInfo {
            radio: RadioTechnology::Wcdma,
            registered: false,
            mcc: 242,
            mnc: 2,
            cell_id: 9_115_338,
            area_code: 3402,
            physical_cell_id: None,
            channel: Some(10562),
            dbm: -110,
            level: 1,
        },
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn default_snapshot_has_registered_serving_cell() {
        let provider = SimulatedTelephonyProvider::new();
        let serving = provider.registered_cell().await.unwrap().unwrap();
        assert_eq!(serving.radio, RadioTechnology::Lte);
        assert_eq!(serving.cell_id, 104_223_003);
    }

    #[tokio::test]
    async fn repeated_queries_return_identical_snapshots() {
        let provider = SimulatedTelephonyProvider::new();
        let first = provider.all_cell_info().await.unwrap();
        let second = provider.all_cell_info().await.unwrap();
        assert_eq!(first, second);
    }

    #[tokio::test]
    async fn custom_snapshot_is_served_verbatim() {
        let provider = SimulatedTelephonyProvider::with_snapshot(Vec::new());
        assert!(provider.all_cell_info().await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn failing_provider_returns_configured_error() {
        let provider = SimulatedTelephonyProvider::failing(BridgeError::PermissionDenied(
            "no permission".into(),
        ));
        let err = provider.all_cell_info().await.unwrap_err();
        assert_eq!(
            err,
            BridgeError::PermissionDenied("no permission".into())
        );
    }
}
