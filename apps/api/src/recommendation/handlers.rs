//! Axum route handlers for the Recommendation API.
//!
//! Handlers only validate, call the engine and serialize. No rule lives here.

use axum::{extract::rejection::JsonRejection, extract::State, Json};
use tracing::{info, warn};

use crate::errors::AppError;
use crate::intake::validation::{validate_profile, RawProfile};
use crate::models::profile::UserProfile;
use crate::models::recommendation::Recommendation;
use crate::recommendation::engine::generate_recommendation;
use crate::recommendation::legacy::{generate_legacy_recommendation, LegacyRecommendation};
use crate::state::AppState;

/// POST /api/v1/recommendation
///
/// Validates the submitted profile and returns the canonical recommendation.
pub async fn handle_recommend(
    payload: Result<Json<RawProfile>, JsonRejection>,
) -> Result<Json<Recommendation>, AppError> {
    let profile = accept_profile(payload)?;

    let recommendation = generate_recommendation(&profile);
    info!(
        "Recommendation generated: product={:?} term={} confidence={:?}",
        recommendation.product_type, recommendation.term, recommendation.confidence_level
    );

    Ok(Json(recommendation))
}

/// POST /api/v1/recommendation/legacy
///
/// Alternate age-band rule set. 404 unless `ENABLE_LEGACY_RULES` is set.
pub async fn handle_recommend_legacy(
    State(state): State<AppState>,
    payload: Result<Json<RawProfile>, JsonRejection>,
) -> Result<Json<LegacyRecommendation>, AppError> {
    if !state.config.enable_legacy_rules {
        return Err(AppError::NotFound(
            "Legacy rule set is not enabled".to_string(),
        ));
    }

    let profile = accept_profile(payload)?;

    let recommendation = generate_legacy_recommendation(&profile);
    info!("Legacy recommendation generated: {}", recommendation.headline);

    Ok(Json(recommendation))
}

fn accept_profile(payload: Result<Json<RawProfile>, JsonRejection>) -> Result<UserProfile, AppError> {
    let Json(raw) = payload.map_err(|rejection| {
        warn!("Rejected request body: {rejection}");
        AppError::BadRequest(rejection.body_text())
    })?;

    validate_profile(&raw).map_err(|errors| {
        let fields: Vec<&str> = errors.iter().map(|e| e.field.as_str()).collect();
        warn!("Profile validation failed: fields={}", fields.join(","));
        AppError::InvalidProfile(errors)
    })
}
