pub mod config;
pub mod logging;
pub mod response;
pub mod routes;
pub mod seed;
pub mod services;
pub mod state;

use tower_http::{cors::CorsLayer, trace::TraceLayer};

use crate::config::Config;
use crate::services::reference::{ReferenceData, ReferenceDataError};
use crate::state::AppState;

pub fn create_app(config: &Config) -> Result<axum::Router, ReferenceDataError> {
    let reference = ReferenceData::load(config.reference_data_path.as_deref())?;
    let state = AppState::new(config, reference);

    Ok(routes::router(state)
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive()))
}
