use serde::{Deserialize, Serialize};

#[derive(Deserialize, Debug, Clone)]
pub struct UpdateListRequest {
    #[serde(default)]
    pub domains: Vec<String>,
}

#[derive(Serialize, Debug, Clone)]
pub struct UpdateListResponse {
    pub status: &'static str,
    pub message: String,
}

impl UpdateListResponse {
    pub fn success(message: impl Into<String>) -> Self {
        Self {
            status: "success",
            message: message.into(),
        }
    }
}
