use palisade_dns_application::{GetLogsUseCase, GetStatsUseCase, UpdateListUseCase};
use std::sync::Arc;

#[derive(Clone)]
pub struct AppState {
    pub get_stats: Arc<GetStatsUseCase>,
    pub get_logs: Arc<GetLogsUseCase>,
    pub update_list: Arc<UpdateListUseCase>,
}
