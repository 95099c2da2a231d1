//! REST API endpoints.

use crate::error::ApiError;
use crate::state::{AppState, ModeView, PlaceResult};
use axum::{
    extract::{Path, State},
    Json,
};
use garden::prelude::*;
use serde::{Deserialize, Serialize};

type ApiResult<T> = Result<Json<T>, ApiError>;

/// Full board under the current mode.
pub async fn get_board(State(state): State<AppState>) -> ApiResult<BoardSnapshot> {
    Ok(Json(state.snapshot().await?))
}

pub async fn get_plants(State(state): State<AppState>) -> ApiResult<Vec<PlantDefinition>> {
    Ok(Json(state.plants().await?))
}

pub async fn get_cell(
    State(state): State<AppState>,
    Path((row, col)): Path<(usize, usize)>,
) -> ApiResult<CellView> {
    Ok(Json(state.cell(row, col).await?))
}

/// Place request body.
#[derive(Debug, Deserialize)]
pub struct PlaceRequest {
    pub plant: String,
    pub row: usize,
    pub col: usize,
}

pub async fn place(
    State(state): State<AppState>,
    Json(req): Json<PlaceRequest>,
) -> ApiResult<PlaceResult> {
    Ok(Json(state.place(req.plant, req.row, req.col).await?))
}

/// Tag placement request body. `uid` is written `04:53:45:3B`.
#[derive(Debug, Deserialize)]
pub struct TagPlaceRequest {
    pub uid: TagUid,
    pub row: usize,
    pub col: usize,
}

pub async fn place_tag(
    State(state): State<AppState>,
    Json(req): Json<TagPlaceRequest>,
) -> ApiResult<PlaceResult> {
    Ok(Json(state.place_tag(req.uid, req.row, req.col).await?))
}

#[derive(Debug, Deserialize)]
pub struct RemoveRequest {
    pub plant: String,
}

#[derive(Debug, Serialize)]
pub struct RemoveResponse {
    pub removed: bool,
}

pub async fn remove(
    State(state): State<AppState>,
    Json(req): Json<RemoveRequest>,
) -> ApiResult<RemoveResponse> {
    let removed = state.remove(req.plant).await?;
    Ok(Json(RemoveResponse { removed }))
}

/// Unknown or unplaced plants come back with the `error` status, not a 404.
pub async fn evaluate(
    State(state): State<AppState>,
    Path(plant): Path<String>,
) -> ApiResult<Evaluation> {
    Ok(Json(state.evaluate(plant).await?))
}

pub async fn evaluations(State(state): State<AppState>) -> ApiResult<Vec<PlantReport>> {
    Ok(Json(state.evaluate_all().await?))
}

pub async fn get_mode(State(state): State<AppState>) -> ApiResult<ModeView> {
    Ok(Json(state.mode().await?))
}

pub async fn cycle_mode(State(state): State<AppState>) -> ApiResult<ModeView> {
    Ok(Json(state.cycle_mode().await?))
}

#[derive(Debug, Serialize)]
pub struct LayoutResponse {
    pub rows: usize,
    pub cols: usize,
}

/// Replace every cell environment. Clears the board.
pub async fn load_layout(
    State(state): State<AppState>,
    Json(layout): Json<Layout>,
) -> ApiResult<LayoutResponse> {
    let (rows, cols) = layout.dimensions();
    state.load_layout(layout).await?;
    Ok(Json(LayoutResponse { rows, cols }))
}
