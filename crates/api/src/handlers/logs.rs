use crate::{dto::LogsResponse, state::AppState};
use axum::{extract::State, Json};
use tracing::{debug, instrument};

#[instrument(skip(state), name = "api_get_logs")]
pub async fn get_logs(State(state): State<AppState>) -> Json<LogsResponse> {
    let logs = state.get_logs.execute();
    debug!(count = logs.len(), "Logs retrieved");
    Json(LogsResponse { logs })
}
