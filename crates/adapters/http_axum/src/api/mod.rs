//! JSON API handler modules.

#[allow(clippy::missing_errors_doc)]
pub mod actions;
pub mod status;

use axum::Router;
use axum::extract::State;
use axum::routing::{get, post};

use z407_app::ports::SpeakerRemote;
use z407_domain::action::Action;

use crate::state::AppState;

/// Build the API routes: `GET /status` plus one `POST` route per [`Action`].
pub fn routes<R>() -> Router<AppState<R>>
where
    R: SpeakerRemote + 'static,
{
    let router = Router::new().route("/status", get(status::get::<R>));

    Action::ALL.into_iter().fold(router, |router, action| {
        router.route(
            &format!("/{}", action.endpoint()),
            post(move |State(state): State<AppState<R>>| actions::perform(state, action)),
        )
    })
}
