//! Invocation model and single-shot completion.
//!
//! An [`InvocationRequest`] is the host shell's call, addressed by
//! capability and method name. Its answer travels through a
//! [`Completion`]/[`CompletionHandle`] pair: the handler side is consumed
//! by value on first use, so a capability can never deliver two results,
//! and dropping an unused handler side delivers a fallback rejection so a
//! caller is never left waiting.

use serde_json::Value;
use tokio::sync::oneshot;
use uuid::Uuid;

/// Failure code carried by every rejection the bridge produces.
pub const FAILURE_CODE: &str = "ERROR";

/// One call from the host shell. Ephemeral; created per call and discarded
/// after the response is delivered.
#[derive(Debug, Clone)]
pub struct InvocationRequest {
    /// Correlation id for logs
    pub id: Uuid,
    /// Registration name of the target capability
    pub capability: String,
    /// Method name on the capability
    pub method: String,
    /// Primitive arguments, as the host serialized them
    pub args: Vec<Value>,
}

impl InvocationRequest {
    pub fn new(capability: impl Into<String>, method: impl Into<String>) -> Self {
        Self::with_args(capability, method, Vec::new())
    }

    pub fn with_args(
        capability: impl Into<String>,
        method: impl Into<String>,
        args: Vec<Value>,
    ) -> Self {
        Self {
            id: Uuid::new_v4(),
            capability: capability.into(),
            method: method.into(),
            args,
        }
    }
}

/// Failure descriptor delivered through the completion's failure channel.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Rejection {
    pub code: String,
    pub message: String,
}

impl Rejection {
    pub fn new(code: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            code: code.into(),
            message: message.into(),
        }
    }
}

impl std::fmt::Display for Rejection {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}: {}", self.code, self.message)
    }
}

impl std::error::Error for Rejection {}

/// The one result of an invocation: a string payload or a rejection.
pub type CapabilityResult = std::result::Result<String, Rejection>;

/// Handler-side half of the single-shot callback.
///
/// `resolve` and `reject` take `self` by value; whichever runs first is the
/// invocation's result and no second outcome is expressible. If a handler
/// returns without calling either, the `Drop` impl delivers a fallback
/// rejection, so the caller always observes exactly one result.
pub struct Completion {
    tx: Option<oneshot::Sender<CapabilityResult>>,
}

impl Completion {
    /// Create a connected completion pair.
    pub fn channel() -> (Completion, CompletionHandle) {
        let (tx, rx) = oneshot::channel();
        (Completion { tx: Some(tx) }, CompletionHandle { rx })
    }

    /// Deliver the success payload.
    pub fn resolve(mut self, payload: impl Into<String>) {
        self.send(Ok(payload.into()));
    }

    /// Deliver a failure descriptor.
    pub fn reject(mut self, code: impl Into<String>, message: impl Into<String>) {
        self.send(Err(Rejection::new(code, message)));
    }

    fn send(&mut self, result: CapabilityResult) {
        if let Some(tx) = self.tx.take() {
            // The caller may have dropped its handle; that only discards
            // the result and is not an error for the handler.
            let _ = tx.send(result);
        }
    }
}

impl Drop for Completion {
    fn drop(&mut self) {
        if self.tx.is_some() {
            self.send(Err(Rejection::new(
                FAILURE_CODE,
                "capability completed without producing a result",
            )));
        }
    }
}

/// Caller-side half of the single-shot callback.
pub struct CompletionHandle {
    rx: oneshot::Receiver<CapabilityResult>,
}

impl CompletionHandle {
    /// Wait for the invocation's result.
    pub async fn wait(self) -> CapabilityResult {
        // The sender's Drop backstop makes a closed channel unreachable in
        // practice; map it to a rejection rather than panicking.
        self.rx.await.unwrap_or_else(|_| {
            Err(Rejection::new(FAILURE_CODE, "completion channel closed"))
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn request_constructors() {
        let plain = InvocationRequest::new("CellModule", "getCellInfo");
        assert_eq!(plain.capability, "CellModule");
        assert_eq!(plain.method, "getCellInfo");
        assert!(plain.args.is_empty());

        let with_args =
            InvocationRequest::with_args("CellModule", "getCellInfo", vec![json!(true)]);
        assert_eq!(with_args.args.len(), 1);
        assert_ne!(plain.id, with_args.id);
    }

    #[test]
    fn rejection_display_includes_code() {
        let rejection = Rejection::new(FAILURE_CODE, "no permission");
        assert_eq!(rejection.to_string(), "ERROR: no permission");
    }

    #[tokio::test]
    async fn resolve_delivers_payload() {
        let (completion, handle) = Completion::channel();
        completion.resolve("[CellInfo(A)]");
        assert_eq!(handle.wait().await, Ok("[CellInfo(A)]".to_string()));
    }

    #[tokio::test]
    async fn reject_delivers_failure() {
        let (completion, handle) = Completion::channel();
        completion.reject(FAILURE_CODE, "no permission");
        assert_eq!(
            handle.wait().await,
            Err(Rejection::new("ERROR", "no permission"))
        );
    }

    #[tokio::test]
    async fn dropped_completion_yields_fallback_rejection() {
        let (completion, handle) = Completion::channel();
        drop(completion);

        let result = handle.wait().await;
        let rejection = result.unwrap_err();
        assert_eq!(rejection.code, FAILURE_CODE);
        assert!(rejection.message.contains("without producing a result"));
    }

    #[tokio::test]
    async fn dropped_handle_does_not_panic_handler() {
        let (completion, handle) = Completion::channel();
        drop(handle);
        completion.resolve("ignored");
    }
}
