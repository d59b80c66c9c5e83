//! REST API Module
//!
//! Contains HTTP handlers, DTOs, and middleware for the REST API.

pub mod dto;
pub mod handlers;
pub mod middleware;

use std::sync::Arc;

use axum::Router;
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;

use crate::application::use_cases::contracts::{GetContractUseCase, ListContractsUseCase};

/// Application state shared across all handlers
#[derive(Clone)]
pub struct AppState {
    pub get_contract_use_case: Arc<GetContractUseCase>,
    pub list_contracts_use_case: Arc<ListContractsUseCase>,
}

/// Build the full application router
pub fn router(state: AppState) -> Router {
    Router::new()
        .nest("/contracts", handlers::contracts::router())
        .layer(axum::middleware::from_fn(middleware::request_id_middleware))
        .layer(TraceLayer::new_for_http())
        .layer(
            CorsLayer::new()
                .allow_origin(Any)
                .allow_methods(Any)
                .allow_headers(Any),
        )
        .with_state(state)
}
