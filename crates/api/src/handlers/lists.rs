use crate::{
    dto::{UpdateListRequest, UpdateListResponse},
    state::AppState,
};
use axum::{extract::State, Json};
use palisade_dns_application::EditableList;
use tracing::{debug, instrument};

#[instrument(skip(state, payload), name = "api_update_allowlist")]
pub async fn update_allowlist(
    State(state): State<AppState>,
    Json(payload): Json<UpdateListRequest>,
) -> Json<UpdateListResponse> {
    update_list(state, EditableList::Allowlist, "Allowlist", payload)
}

#[instrument(skip(state, payload), name = "api_update_denylist")]
pub async fn update_denylist(
    State(state): State<AppState>,
    Json(payload): Json<UpdateListRequest>,
) -> Json<UpdateListResponse> {
    update_list(state, EditableList::Denylist, "Denylist", payload)
}

fn update_list(
    state: AppState,
    which: EditableList,
    label: &str,
    payload: UpdateListRequest,
) -> Json<UpdateListResponse> {
    let count = state.update_list.execute(which, payload.domains);
    debug!(count, ?which, "List updated");
    Json(UpdateListResponse::success(format!(
        "{label} updated with {count} domains."
    )))
}
