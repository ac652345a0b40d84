use serde::{Deserialize, Serialize};

/// `/justify_field` response
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct JustifyResponse {
    #[serde(default)]
    pub passage: String,
}
