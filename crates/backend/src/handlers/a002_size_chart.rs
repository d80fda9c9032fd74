use axum::extract::{Path, Query, State};
use axum::http::header;
use axum::response::{IntoResponse, Response};
use axum::Json;
use contracts::domain::a002_size_chart::SizeChart;
use contracts::shared::record_store::InMemoryStore;
use serde::Deserialize;
use std::sync::Arc;

use crate::domain::a002_size_chart;
use crate::shared::data::crud;
use crate::shared::error::ApiError;

/// GET /api/size_chart/:id/export
pub async fn export(
    State(store): State<Arc<InMemoryStore<SizeChart>>>,
    Path(id): Path<String>,
) -> Result<Response, ApiError> {
    let id = crud::parse_id::<SizeChart>(&id)?;
    let (file_name, csv) = a002_size_chart::service::export_csv(&store, id)?;

    Ok((
        [
            (header::CONTENT_TYPE, "text/csv; charset=utf-8".to_string()),
            (
                header::CONTENT_DISPOSITION,
                format!("attachment; filename=\"{file_name}\""),
            ),
        ],
        csv,
    )
        .into_response())
}

#[derive(Debug, Deserialize)]
pub struct ImportParams {
    #[serde(default)]
    pub name: String,
    pub unit: Option<String>,
}

/// POST /api/size_chart/import?name=&unit=
///
/// Возвращает несохранённый черновик; сохранение через обычный POST /api/size_chart.
pub async fn import(
    Query(params): Query<ImportParams>,
    body: String,
) -> Result<Json<SizeChart>, ApiError> {
    let draft = a002_size_chart::service::draft_from_csv(&params.name, params.unit.as_deref(), &body)?;
    Ok(Json(draft))
}
