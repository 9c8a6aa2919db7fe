//! # Backend Module
//!
//! Contains all non-UI logic for the pediatric care schedule backend.
//!
//! This module serves as the orchestration layer that brings together:
//! - **Domain**: Age computation, catalogs and schedule resolvers
//! - **Storage**: Per-user document persistence
//! - **IO**: REST interface exposed to the mobile app
//!
//! ## Architecture
//!
//! The backend follows a layered architecture:
//! ```text
//! App (mobile client)
//!     ↓
//! IO Layer (REST API, handlers, mappers)
//!     ↓
//! Domain Layer (Resolvers, services)
//!     ↓
//! Storage Layer (YAML documents)
//! ```
//!
//! ## Key Responsibilities
//!
//! - Initialize and configure the application state
//! - Set up the REST API router with CORS and request tracing

pub mod domain;
pub mod io;
pub mod storage;

use anyhow::Result;
use axum::{
    http::{HeaderValue, Method},
    routing::{get, post, put},
    Router,
};
use log::info;
use std::path::Path;
use std::sync::Arc;
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;

use crate::backend::domain::{
    Clock, GrowthService, HomeService, RecordStore, SystemClock, UserService, VaccineService,
};
use crate::backend::storage::{UserRecordRepository, UserRecordStorage, YamlConnection};

/// Main application state that holds all services
#[derive(Clone)]
pub struct AppState {
    pub user_service: UserService,
    pub growth_service: GrowthService,
    pub vaccine_service: VaccineService,
    pub home_service: HomeService,
}

/// Initialize the backend on top of the YAML store in `data_dir`
pub async fn initialize_backend(data_dir: &Path) -> Result<AppState> {
    info!("📁 Setting up storage in {}", data_dir.display());
    let connection = YamlConnection::new(data_dir)?;
    let storage: Arc<dyn UserRecordStorage> = Arc::new(UserRecordRepository::new(connection));

    Ok(initialize_backend_with(storage, Arc::new(SystemClock)))
}

/// Wire the services around an arbitrary storage backend and clock
pub fn initialize_backend_with(storage: Arc<dyn UserRecordStorage>, clock: Arc<dyn Clock>) -> AppState {
    info!("Setting up domain services");
    let store = RecordStore::new(storage);

    let user_service = UserService::new(store.clone(), clock.clone());
    let growth_service = GrowthService::new(store.clone(), clock.clone());
    let vaccine_service = VaccineService::new(store.clone(), clock);
    let home_service = HomeService::new(store, growth_service.clone(), vaccine_service.clone());

    info!("Setting up application state");
    AppState {
        user_service,
        growth_service,
        vaccine_service,
        home_service,
    }
}

/// Create the Axum router with all routes configured
pub fn create_router(app_state: AppState, allowed_origin: HeaderValue) -> Router {
    // CORS setup to allow the app's web build to make requests
    let cors = CorsLayer::new()
        .allow_origin(allowed_origin)
        .allow_methods([Method::GET, Method::POST, Method::PUT])
        .allow_headers(Any);

    let api_routes = Router::new()
        .route("/health", get(io::health))
        .route("/catalog/growth-visits", get(io::list_growth_visits))
        .route("/catalog/growth-checkpoints", get(io::list_growth_checkpoints))
        .route("/catalog/vaccine-doses", get(io::list_vaccine_doses))
        .route("/users/:user_id", get(io::get_user).post(io::register_user))
        .route("/users/:user_id/child", put(io::update_child_info))
        .route("/users/:user_id/parent", put(io::update_parent_info))
        .route("/users/:user_id/home", get(io::get_home_dashboard))
        .route("/users/:user_id/growth", get(io::get_growth_calendar))
        .route("/users/:user_id/growth/current", get(io::get_current_growth_visit))
        .route(
            "/users/:user_id/growth/current/toggle",
            post(io::toggle_current_growth_visit),
        )
        .route("/users/:user_id/growth/:visit_id/toggle", post(io::toggle_growth_visit))
        .route("/users/:user_id/vaccines", get(io::get_vaccine_calendar))
        .route("/users/:user_id/vaccines/summary", get(io::get_vaccine_summary))
        .route("/users/:user_id/vaccines/:dose_id/toggle", post(io::toggle_vaccine_dose));

    Router::new()
        .nest("/api", api_routes)
        .layer(TraceLayer::new_for_http())
        .layer(cors)
        .with_state(app_state)
}
