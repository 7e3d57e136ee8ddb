// src/api/handlers.rs
// HTTP handlers for the liveness check and vibe recommendation

use axum::{
    extract::{rejection::JsonRejection, State},
    Json,
};
use serde::{Deserialize, Serialize};
use serde_json::{json, Value};

use super::error::ApiResult;
use crate::recommend::RecommendError;
use crate::state::AppState;
use crate::vibes::ClassificationResult;

/// Shown when the model's answer matches no known vibe
pub const NOT_UNDERSTOOD_MESSAGE: &str = "Não entendi a vibe.";

#[derive(Debug, Deserialize)]
pub struct RecommendRequest {
    pub text: Option<String>,
}

/// Wire shape of a recommendation. `found` is derived from the outcome, never set by hand.
#[derive(Debug, Serialize)]
pub struct RecommendResponse {
    found: bool,
    #[serde(flatten)]
    outcome: RecommendOutcome,
}

#[derive(Debug, Serialize)]
#[serde(untagged)]
enum RecommendOutcome {
    Found {
        vibe: String,
        message: String,
        title: String,
        spotify_id: Option<String>,
    },
    NotFound {
        message: String,
    },
}

impl RecommendResponse {
    pub fn found(&self) -> bool {
        self.found
    }
}

impl From<ClassificationResult> for RecommendResponse {
    fn from(result: ClassificationResult) -> Self {
        let outcome = match result {
            ClassificationResult::Found { key, message, title, media_id } => RecommendOutcome::Found {
                vibe: key,
                message,
                title,
                spotify_id: media_id,
            },
            ClassificationResult::NotFound => RecommendOutcome::NotFound {
                message: NOT_UNDERSTOOD_MESSAGE.to_string(),
            },
        };

        Self {
            found: matches!(outcome, RecommendOutcome::Found { .. }),
            outcome,
        }
    }
}

/// GET /
pub async fn health_handler() -> Json<Value> {
    Json(json!({ "status": "online" }))
}

/// POST /api/recommend
pub async fn recommend_handler(
    State(state): State<AppState>,
    payload: Result<Json<RecommendRequest>, JsonRejection>,
) -> ApiResult<Json<RecommendResponse>> {
    let Json(request) = payload?;
    let text = request.text.ok_or(RecommendError::EmptyInput)?;

    let result = state.recommender.recommend(&text).await?;
    Ok(Json(result.into()))
}
