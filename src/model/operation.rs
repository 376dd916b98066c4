// Long-running operation descriptor
//
// Mutating RPCs on authorities, pools and templates answer with an operation
// handle. Polling it to completion is the caller's concern (via whatever
// operations surface their stack provides); this crate only carries the
// descriptor.

use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Remote error status carried inside a failed operation.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Default)]
#[serde(rename_all = "camelCase")]
pub struct Status {
    #[serde(default)]
    pub code: i32,
    #[serde(default)]
    pub message: String,
}

/// A server-side task handle returned by long-running RPCs.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Default)]
#[serde(rename_all = "camelCase")]
pub struct Operation {
    #[serde(default)]
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub metadata: Option<Value>,
    #[serde(default)]
    pub done: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub error: Option<Status>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub response: Option<Value>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_pending_operation_deserializes() {
        let op: Operation = serde_json::from_value(json!({
            "name": "projects/p/locations/l/operations/op-1",
        }))
        .unwrap();
        assert!(!op.done);
        assert!(op.error.is_none());
        assert!(op.response.is_none());
    }

    #[test]
    fn test_failed_operation_carries_status() {
        let op: Operation = serde_json::from_value(json!({
            "name": "projects/p/locations/l/operations/op-2",
            "done": true,
            "error": {"code": 9, "message": "precondition failed"},
        }))
        .unwrap();
        assert!(op.done);
        assert_eq!(op.error.unwrap().message, "precondition failed");
    }
}
