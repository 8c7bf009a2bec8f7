pub mod error;
pub mod state;
pub mod user;

use crate::auth::require_api_key;
use axum::{
    middleware,
    response::Redirect,
    routing::get,
    Router,
};

pub use error::{ApiError, ErrorBody};
pub use state::AppState;

/// Build the application router. Everything under `/api` requires the
/// API key; `/` only redirects to the user listing.
pub fn router(state: AppState) -> Router {
    let users = Router::new()
        .route("/users", get(user::list_users).post(user::create_user))
        .route("/users/", get(user::list_users).post(user::create_user))
        .route(
            "/users/{id}",
            get(user::get_user).put(user::update_user).delete(user::delete_user),
        )
        .route_layer(middleware::from_fn_with_state(state.clone(), require_api_key));

    Router::new()
        .route("/", get(|| async { Redirect::temporary("/api/users/") }))
        .nest("/api", users)
        .with_state(state)
}
