use serde::Serialize;

#[derive(Serialize, Debug, Clone)]
pub struct LogsResponse {
    pub logs: Vec<String>,
}
