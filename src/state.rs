use axum::extract::FromRef;

use crate::service::QueryService;

#[derive(Clone)]
pub struct AppState {
    pub service: QueryService,
}

impl FromRef<AppState> for QueryService {
    fn from_ref(state: &AppState) -> Self {
        state.service.clone()
    }
}
