//! `POST /<action>` handlers.

use axum::Json;
use axum::response::{IntoResponse, Response};
use serde::Serialize;

use z407_app::ports::SpeakerRemote;
use z407_domain::action::Action;

use crate::error::ApiError;
use crate::state::AppState;

/// Body returned once the speaker accepted a command.
#[derive(Debug, Serialize)]
pub struct Confirmation {
    pub status: &'static str,
}

/// Possible responses from an action endpoint.
pub enum ActionResponse {
    Ok(Json<Confirmation>),
}

impl IntoResponse for ActionResponse {
    fn into_response(self) -> Response {
        match self {
            Self::Ok(json) => json.into_response(),
        }
    }
}

/// `POST /<action>`
///
/// Bound once per [`Action`] by [`super::routes`].
pub async fn perform<R>(state: AppState<R>, action: Action) -> Result<ActionResponse, ApiError>
where
    R: SpeakerRemote + 'static,
{
    let status = state.remote_service.perform(action).await?;
    Ok(ActionResponse::Ok(Json(Confirmation { status })))
}
