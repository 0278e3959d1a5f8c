use crate::{dto::StatsResponse, state::AppState};
use axum::{extract::State, Json};
use tracing::{debug, instrument};

#[instrument(skip(state), name = "api_get_stats")]
pub async fn get_stats(State(state): State<AppState>) -> Json<StatsResponse> {
    let view = state.get_stats.execute();
    debug!(
        total_queries = view.total_queries,
        blocked_queries = view.blocked_queries,
        "Stats retrieved"
    );
    Json(view.into())
}
