use axum::extract::rejection::{JsonRejection, PathRejection, QueryRejection};
use axum::extract::{Path, Query, State};
use axum::http::StatusCode;
use axum::Json;
use serde::Deserialize;
use tracing::info;

use service::pagination::PageRequest;
use service::ship::{Ship, ShipFilter, ShipOrder, ShipPatch, ShipType};

use crate::{errors::JsonApiError, state::ServerState};

/// Query string of the list and count endpoints. Count ignores the order and
/// paging parameters.
#[derive(Debug, Default, Deserialize, utoipa::IntoParams)]
#[serde(rename_all = "camelCase")]
#[into_params(parameter_in = Query)]
pub struct ShipListQuery {
    /// Case-insensitive substring of the name.
    pub name: Option<String>,
    /// Case-insensitive substring of the planet.
    pub planet: Option<String>,
    #[param(value_type = Option<String>, example = "MILITARY")]
    pub ship_type: Option<ShipType>,
    /// Epoch millis, exclusive.
    pub after: Option<i64>,
    /// Epoch millis, exclusive.
    pub before: Option<i64>,
    pub is_used: Option<bool>,
    pub min_speed: Option<f64>,
    pub max_speed: Option<f64>,
    pub min_crew_size: Option<i32>,
    pub max_crew_size: Option<i32>,
    pub min_rating: Option<f64>,
    pub max_rating: Option<f64>,
    /// One of ID, SPEED, DATE, RATING.
    #[param(value_type = Option<String>, example = "SPEED")]
    pub order: Option<ShipOrder>,
    /// Zero-based, defaults to 0.
    pub page_number: Option<u32>,
    /// Defaults to 3.
    pub page_size: Option<u32>,
}

impl ShipListQuery {
    pub fn into_parts(self) -> (ShipFilter, Option<ShipOrder>, PageRequest) {
        let filter = ShipFilter {
            name: self.name,
            planet: self.planet,
            ship_type: self.ship_type,
            after: self.after,
            before: self.before,
            is_used: self.is_used,
            min_speed: self.min_speed,
            max_speed: self.max_speed,
            min_crew_size: self.min_crew_size,
            max_crew_size: self.max_crew_size,
            min_rating: self.min_rating,
            max_rating: self.max_rating,
        };
        let page = PageRequest { page_number: self.page_number, page_size: self.page_size };
        (filter, self.order, page)
    }
}

#[utoipa::path(
    get, path = "/ships", tag = "ships",
    params(ShipListQuery),
    responses(
        (status = 200, description = "Matching ships, one page", body = [crate::openapi::ShipDoc]),
        (status = 400, description = "Malformed query")
    )
)]
pub async fn list(
    State(state): State<ServerState>,
    query: Result<Query<ShipListQuery>, QueryRejection>,
) -> Result<Json<Vec<Ship>>, JsonApiError> {
    let Query(query) = query?;
    let (filter, order, page) = query.into_parts();
    let ships = state.ships.list(&filter, order, page).await?;
    info!(count = ships.len(), ?order, "list ships");
    Ok(Json(ships))
}

#[utoipa::path(
    get, path = "/ships/count", tag = "ships",
    params(ShipListQuery),
    responses(
        (status = 200, description = "Number of matching ships", body = usize),
        (status = 400, description = "Malformed query")
    )
)]
pub async fn count(
    State(state): State<ServerState>,
    query: Result<Query<ShipListQuery>, QueryRejection>,
) -> Result<Json<usize>, JsonApiError> {
    let Query(query) = query?;
    let (filter, _, _) = query.into_parts();
    Ok(Json(state.ships.count(&filter).await?))
}

#[utoipa::path(
    post, path = "/ships", tag = "ships",
    request_body = crate::openapi::ShipPatchDoc,
    responses(
        (status = 200, description = "Created", body = crate::openapi::ShipDoc),
        (status = 400, description = "Validation Error")
    )
)]
pub async fn create(
    State(state): State<ServerState>,
    body: Result<Json<ShipPatch>, JsonRejection>,
) -> Result<Json<Ship>, JsonApiError> {
    let Json(patch) = body?;
    let ship = state.ships.create(patch).await?;
    info!(id = ship.id, name = %ship.name, "created ship");
    Ok(Json(ship))
}

#[utoipa::path(
    get, path = "/ships/{id}", tag = "ships",
    params(("id" = i64, Path, description = "Ship id, at least 1")),
    responses(
        (status = 200, description = "OK", body = crate::openapi::ShipDoc),
        (status = 400, description = "Invalid Identifier"),
        (status = 404, description = "Not Found")
    )
)]
pub async fn get(
    State(state): State<ServerState>,
    id: Result<Path<i64>, PathRejection>,
) -> Result<Json<Ship>, JsonApiError> {
    let Path(id) = id?;
    Ok(Json(state.ships.get(id).await?))
}

#[utoipa::path(
    post, path = "/ships/{id}", tag = "ships",
    params(("id" = i64, Path, description = "Ship id, at least 1")),
    request_body = crate::openapi::ShipPatchDoc,
    responses(
        (status = 200, description = "Updated", body = crate::openapi::ShipDoc),
        (status = 400, description = "Invalid Identifier or Validation Error"),
        (status = 404, description = "Not Found")
    )
)]
pub async fn update(
    State(state): State<ServerState>,
    id: Result<Path<i64>, PathRejection>,
    body: Result<Json<ShipPatch>, JsonRejection>,
) -> Result<Json<Ship>, JsonApiError> {
    let Path(id) = id?;
    let Json(patch) = body?;
    let ship = state.ships.update(id, patch).await?;
    info!(id = ship.id, "updated ship");
    Ok(Json(ship))
}

#[utoipa::path(
    delete, path = "/ships/{id}", tag = "ships",
    params(("id" = i64, Path, description = "Ship id, at least 1")),
    responses(
        (status = 200, description = "Deleted"),
        (status = 400, description = "Invalid Identifier"),
        (status = 404, description = "Not Found")
    )
)]
pub async fn delete(
    State(state): State<ServerState>,
    id: Result<Path<i64>, PathRejection>,
) -> Result<StatusCode, JsonApiError> {
    let Path(id) = id?;
    state.ships.delete(id).await?;
    info!(id, "deleted ship");
    Ok(StatusCode::OK)
}
