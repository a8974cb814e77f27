use std::sync::Arc;

use axum::{
    extract::{Path, State},
    Json,
};
use tredumo_core::validate::{validate_nap, NapReport};

use crate::error::ApiError;
use crate::handlers::parse_key;
use crate::state::AppState;

pub async fn get_nap_report(
    State(state): State<Arc<AppState>>,
    Path(key): Path<String>,
) -> Result<Json<NapReport>, ApiError> {
    let key = parse_key(&key)?;
    tracing::info!(tenant = %key, "Running NAP check");

    let config = state.resolver.school_config(Some(&key)).await?;
    Ok(Json(validate_nap(&config)))
}
