//! Data transfer objects for tools HTTP endpoints.

use serde::{Deserialize, Serialize};

// ═══════════════════════════════════════════════════════════════════════════
// Request DTOs
// ═══════════════════════════════════════════════════════════════════════════

/// Query parameters for reading a user's tools.
#[derive(Debug, Clone, Deserialize)]
pub struct GetToolsParams {
    #[serde(default)]
    pub username: String,
}

/// Request to replace a user's tools.
///
/// `tools` may be absent or `null`; both clear the set.
#[derive(Debug, Clone, Deserialize)]
pub struct SaveToolsRequest {
    #[serde(default)]
    pub username: Option<String>,
    #[serde(default)]
    pub tools: Option<Vec<String>>,
}

// ═══════════════════════════════════════════════════════════════════════════
// Response DTOs
// ═══════════════════════════════════════════════════════════════════════════

/// Response carrying a tool list. `tools` is `[]`, never omitted, on success.
#[derive(Debug, Clone, Serialize)]
pub struct ToolsResponse {
    pub success: bool,
    pub message: String,
    pub tools: Vec<String>,
}

impl ToolsResponse {
    pub fn retrieved(tools: Vec<String>) -> Self {
        Self {
            success: true,
            message: "Tools retrieved successfully".to_string(),
            tools,
        }
    }

    pub fn saved(tools: Vec<String>) -> Self {
        Self {
            success: true,
            message: "Tools saved successfully".to_string(),
            tools,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn save_request_accepts_null_tools() {
        let request: SaveToolsRequest =
            serde_json::from_str(r#"{"username":"u","tools":null}"#).unwrap();
        assert!(request.tools.is_none());

        let request: SaveToolsRequest = serde_json::from_str(r#"{"username":"u"}"#).unwrap();
        assert!(request.tools.is_none());
    }

    #[test]
    fn empty_tools_serialize_as_array() {
        let json = serde_json::to_value(ToolsResponse::retrieved(vec![])).unwrap();
        assert_eq!(json["tools"], serde_json::json!([]));
        assert_eq!(json["message"], "Tools retrieved successfully");
    }
}
