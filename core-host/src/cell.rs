//! The `CellModule` capability.
//!
//! Exposes the platform telephony snapshot to the host shell: one method,
//! `getCellInfo`, returning the string serialization of all currently
//! visible cell records. The query is read-only and single-shot; whatever
//! the platform returns (or the error it raises) is forwarded immediately,
//! with no retry and no timeout.

use std::sync::Arc;

use async_trait::async_trait;
use bridge_traits::{format_cell_records, TelephonyProvider};
use tracing::{debug, warn};

use crate::invocation::{Completion, InvocationRequest, FAILURE_CODE};
use crate::Capability;

/// Registration name the host shell resolves this capability under.
pub const CELL_MODULE: &str = "CellModule";

/// The one invocable method.
pub const GET_CELL_INFO: &str = "getCellInfo";

/// Capability handler for cell tower/signal info.
///
/// The telephony handle is acquired once at construction and shared
/// read-only across invocations; the handler itself holds no other state.
pub struct CellModule {
    telephony: Arc<dyn TelephonyProvider>,
}

impl CellModule {
    pub fn new(telephony: Arc<dyn TelephonyProvider>) -> Self {
        Self { telephony }
    }
}

#[async_trait]
impl Capability for CellModule {
    fn name(&self) -> &'static str {
        CELL_MODULE
    }

    fn methods(&self) -> &'static [&'static str] {
        &[GET_CELL_INFO]
    }

    /// `getCellInfo` takes no parameters; any arguments the host passes are
    /// ignored.
    async fn invoke(&self, request: InvocationRequest, completion: Completion) {
        match request.method.as_str() {
            GET_CELL_INFO => match self.telephony.all_cell_info().await {
                Ok(records) => {
                    debug!(id = %request.id, cells = records.len(), "cell info query succeeded");
                    completion.resolve(format_cell_records(&records));
                }
                Err(err) => {
                    warn!(id = %request.id, error = %err, "cell info query failed");
                    completion.reject(FAILURE_CODE, err.to_string());
                }
            },
            other => {
                // Dispatch validates methods up front; this arm only fires
                // when the handler is invoked directly.
                completion.reject(FAILURE_CODE, format!("unsupported method: {}", other));
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use bridge_traits::{
        error::{BridgeError, Result as BridgeResult},
        telephony::{CellInfo, RadioTechnology},
    };
    use mockall::mock;
    use serde_json::json;

    mock! {
        Telephony {}

        #[async_trait]
        impl TelephonyProvider for Telephony {
            async fn all_cell_info(&self) -> BridgeResult<Vec<CellInfo>>;
        }
    }

    fn sample_cell(cell_id: u64) -> CellInfo {
        CellInfo {
            radio: RadioTechnology::Lte,
            registered: cell_id == 1,
            mcc: 242,
            mnc: 1,
            cell_id,
            area_code: 21405,
            physical_cell_id: None,
            channel: None,
            dbm: -97,
            level: 2,
        }
    }

    fn cell_module(provider: MockTelephony) -> CellModule {
        CellModule::new(Arc::new(provider))
    }

    #[tokio::test]
    async fn resolves_with_snapshot_serialization() {
        let mut provider = MockTelephony::new();
        provider
            .expect_all_cell_info()
            .returning(|| Ok(vec![sample_cell(1), sample_cell(2)]));

        let module = cell_module(provider);
        let (completion, handle) = Completion::channel();
        module
            .invoke(InvocationRequest::new(CELL_MODULE, GET_CELL_INFO), completion)
            .await;

        let payload = handle.wait().await.unwrap();
        assert_eq!(
            payload,
            format_cell_records(&[sample_cell(1), sample_cell(2)])
        );
    }

    #[tokio::test]
    async fn rejects_with_error_code_and_message() {
        let mut provider = MockTelephony::new();
        provider.expect_all_cell_info().returning(|| {
            Err(BridgeError::PermissionDenied("no permission".into()))
        });

        let module = cell_module(provider);
        let (completion, handle) = Completion::channel();
        module
            .invoke(InvocationRequest::new(CELL_MODULE, GET_CELL_INFO), completion)
            .await;

        let rejection = handle.wait().await.unwrap_err();
        assert_eq!(rejection.code, "ERROR");
        assert_eq!(
            rejection.message,
            BridgeError::PermissionDenied("no permission".into()).to_string()
        );
    }

    #[tokio::test]
    async fn arguments_are_ignored() {
        let mut provider = MockTelephony::new();
        provider
            .expect_all_cell_info()
            .returning(|| Ok(Vec::new()));

        let module = cell_module(provider);
        let (completion, handle) = Completion::channel();
        let request = InvocationRequest::with_args(
            CELL_MODULE,
            GET_CELL_INFO,
            vec![json!("extra"), json!(42)],
        );
        module.invoke(request, completion).await;

        assert_eq!(handle.wait().await.unwrap(), "[]");
    }

    #[tokio::test]
    async fn direct_invoke_of_unknown_method_rejects() {
        let mut provider = MockTelephony::new();
        provider.expect_all_cell_info().never();

        let module = cell_module(provider);
        let (completion, handle) = Completion::channel();
        module
            .invoke(InvocationRequest::new(CELL_MODULE, "getSignalDump"), completion)
            .await;

        let rejection = handle.wait().await.unwrap_err();
        assert_eq!(rejection.code, "ERROR");
        assert!(rejection.message.contains("getSignalDump"));
    }
}
