//! `GET /status` handler.

use axum::Json;
use axum::extract::State;
use axum::response::{IntoResponse, Response};

use z407_app::ports::SpeakerRemote;
use z407_domain::status::StatusSnapshot;

use crate::state::AppState;

/// Possible responses from the status endpoint.
pub enum StatusResponse {
    Ok(Json<StatusSnapshot>),
}

impl IntoResponse for StatusResponse {
    fn into_response(self) -> Response {
        match self {
            Self::Ok(json) => json.into_response(),
        }
    }
}

/// `GET /status`
pub async fn get<R>(State(state): State<AppState<R>>) -> StatusResponse
where
    R: SpeakerRemote + 'static,
{
    let snapshot = state.remote_service.status().await;
    StatusResponse::Ok(Json(snapshot))
}
