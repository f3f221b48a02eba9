use axum::http::HeaderValue;
use axum::{
    middleware,
    routing::{get, post, put},
    Router,
};
use tower_http::cors::{AllowOrigin, CorsLayer};
use tower_http::trace::TraceLayer;

use crate::{auth::AuthenticatedUser, state::AppState};

pub mod auth;
pub mod dockets;
pub mod filers;
pub mod health;
pub mod lookups;

pub fn create_router(state: AppState) -> Router<()> {
    let allow_origin = match state.config.cors_allowed_origin.as_ref() {
        Some(origins) => {
            let headers: Vec<HeaderValue> = origins
                .split(',')
                .map(str::trim)
                .filter(|value| !value.is_empty())
                .filter_map(|value| match value.parse::<HeaderValue>() {
                    Ok(header) => Some(header),
                    Err(_) => {
                        tracing::warn!(origin = value, "ignoring invalid CORS allowed origin");
                        None
                    }
                })
                .collect();
            AllowOrigin::list(headers)
        }
        None => AllowOrigin::mirror_request(),
    };

    let cors = CorsLayer::new()
        .allow_origin(allow_origin)
        .allow_methods(tower_http::cors::AllowMethods::mirror_request())
        .allow_headers(tower_http::cors::AllowHeaders::mirror_request())
        .allow_credentials(true);

    let auth_routes = Router::new()
        .route("/login", post(auth::login))
        .route("/me", get(auth::me));

    let dockets_routes = Router::new()
        .route("/", get(dockets::list_dockets))
        .route("/:id", get(dockets::get_docket))
        .route("/:id/close", put(dockets::close_docket))
        .route("/:id/assignManager", put(dockets::assign_manager))
        .route("/:id/unassignManager", put(dockets::unassign_manager))
        .route("/:id/assignParty", put(dockets::assign_party))
        .route("/:id/unassignParty", put(dockets::unassign_party));

    let filers_routes = Router::new()
        .route("/", get(filers::list_filers))
        .route("/:id", get(filers::get_filer));

    let protected_state = state.clone();
    let protected_routes = Router::new()
        .nest("/api/dockets", dockets_routes)
        .nest("/api/filers", filers_routes)
        .route("/api/party-types", get(lookups::list_party_types))
        .route("/api/case-statuses", get(lookups::list_case_statuses))
        .layer(middleware::from_extractor_with_state::<AuthenticatedUser, _>(protected_state));

    Router::new()
        .merge(protected_routes)
        .nest("/api/auth", auth_routes)
        .route("/api/health", get(health::health_check))
        .with_state(state)
        .layer(TraceLayer::new_for_http())
        .layer(cors)
}
