use axum::Json;
use axum::extract::Path;
use serde::Serialize;

use saba_scales::scoring::{ScaleId, ScoreRange};
use saba_scales::{all_scales, get_scale};

use crate::error::ApiError;

#[derive(Serialize)]
pub struct ScaleSummary {
    id: ScaleId,
    name: String,
}

#[derive(Serialize)]
pub struct ScaleDetail {
    id: ScaleId,
    name: String,
    range: ScoreRange,
}

pub async fn list_scales() -> Json<Vec<ScaleSummary>> {
    let scales: Vec<ScaleSummary> = all_scales()
        .iter()
        .map(|s| ScaleSummary {
            id: s.id(),
            name: s.name().to_string(),
        })
        .collect();
    Json(scales)
}

pub async fn get_scale_detail(Path(id): Path<String>) -> Result<Json<ScaleDetail>, ApiError> {
    let scale_id: ScaleId = id.parse()?;
    let scale = get_scale(scale_id);

    Ok(Json(ScaleDetail {
        id: scale.id(),
        name: scale.name().to_string(),
        range: scale.range(),
    }))
}
