//! Driver API handlers using repository pattern
//!
//! `teamId` is carried through as given; it is never checked against the team store.

use axum::{
    Json,
    extract::{Path, State},
    http::{StatusCode, header},
    response::IntoResponse,
};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::api::error::store_error;
use crate::domain::{DomainError, Driver, DriverInput};
use crate::infrastructure::AppState;

/// Wire representation of a driver
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct DriverDto {
    /// Must be null on creation
    pub id: Option<i64>,
    pub name: String,
    pub country: String,
    pub team_id: Option<i64>,
}

impl From<Driver> for DriverDto {
    fn from(driver: Driver) -> Self {
        Self {
            id: Some(driver.id),
            name: driver.name,
            country: driver.country,
            team_id: driver.team_id,
        }
    }
}

impl From<DriverDto> for DriverInput {
    fn from(dto: DriverDto) -> Self {
        Self {
            name: dto.name,
            country: dto.country,
            team_id: dto.team_id,
        }
    }
}

#[utoipa::path(
    get,
    path = "/api/driver/all",
    tag = "driver",
    responses(
        (status = 200, description = "All drivers in insertion order", body = [DriverDto])
    )
)]
pub async fn list_drivers(State(state): State<AppState>) -> impl IntoResponse {
    match state.driver_repo.find_all().await {
        Ok(drivers) => {
            tracing::debug!("Listing {} drivers", drivers.len());
            let dtos: Vec<DriverDto> = drivers.into_iter().map(DriverDto::from).collect();
            (StatusCode::OK, Json(dtos)).into_response()
        }
        Err(e) => store_error(e),
    }
}

#[utoipa::path(
    get,
    path = "/api/driver/{id}",
    tag = "driver",
    params(("id" = i64, Path, description = "Driver ID")),
    responses(
        (status = 200, description = "Driver found", body = DriverDto),
        (status = 404, description = "No driver with this ID")
    )
)]
pub async fn get_driver(State(state): State<AppState>, Path(id): Path<i64>) -> impl IntoResponse {
    match state.driver_repo.find_by_id(id).await {
        Ok(Some(driver)) => (StatusCode::OK, Json(DriverDto::from(driver))).into_response(),
        Ok(None) => StatusCode::NOT_FOUND.into_response(),
        Err(e) => store_error(e),
    }
}

#[utoipa::path(
    post,
    path = "/api/driver",
    tag = "driver",
    request_body = DriverDto,
    responses(
        (status = 201, description = "Driver created", body = DriverDto),
        (status = 400, description = "Driver ID must be null")
    )
)]
pub async fn create_driver(
    State(state): State<AppState>,
    Json(payload): Json<DriverDto>,
) -> impl IntoResponse {
    if payload.id.is_some() {
        return (StatusCode::BAD_REQUEST, "Driver ID must be null").into_response();
    }

    match state.driver_repo.create(payload.into()).await {
        Ok(driver) => (
            StatusCode::CREATED,
            [(header::LOCATION, format!("/api/driver/{}", driver.id))],
            Json(DriverDto::from(driver)),
        )
            .into_response(),
        Err(e) => store_error(e),
    }
}

#[utoipa::path(
    put,
    path = "/api/driver/{id}",
    tag = "driver",
    params(("id" = i64, Path, description = "Driver ID")),
    request_body = DriverDto,
    responses(
        (status = 200, description = "Driver updated", body = DriverDto),
        (status = 404, description = "No driver with this ID"),
        (status = 418, description = "Body ID differs from path ID")
    )
)]
pub async fn update_driver(
    State(state): State<AppState>,
    Path(id): Path<i64>,
    Json(payload): Json<DriverDto>,
) -> impl IntoResponse {
    if let Some(body_id) = payload.id
        && body_id != id
    {
        return (
            StatusCode::IM_A_TEAPOT,
            "Path Variable of id not equal to Driver ID",
        )
            .into_response();
    }

    match state.driver_repo.update(id, payload.into()).await {
        Ok(driver) => (StatusCode::OK, Json(DriverDto::from(driver))).into_response(),
        Err(DomainError::NotFound) => (
            StatusCode::NOT_FOUND,
            format!("Driver of ID {} not found", id),
        )
            .into_response(),
        Err(e) => store_error(e),
    }
}

#[utoipa::path(
    delete,
    path = "/api/driver/{id}",
    tag = "driver",
    params(("id" = i64, Path, description = "Driver ID")),
    responses(
        (status = 200, description = "Driver deleted"),
        (status = 404, description = "No driver with this ID")
    )
)]
pub async fn delete_driver(
    State(state): State<AppState>,
    Path(id): Path<i64>,
) -> impl IntoResponse {
    match state.driver_repo.exists(id).await {
        Ok(true) => {}
        Ok(false) => return StatusCode::NOT_FOUND.into_response(),
        Err(e) => return store_error(e),
    }

    match state.driver_repo.delete(id).await {
        Ok(()) => {
            tracing::info!("Deleted Resource {}", id);
            StatusCode::OK.into_response()
        }
        Err(DomainError::NotFound) => StatusCode::NOT_FOUND.into_response(),
        Err(e) => store_error(e),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_dto_uses_camel_case_team_id() {
        let dto = DriverDto {
            id: Some(3),
            name: "Max Verstappen".to_string(),
            country: "NL".to_string(),
            team_id: Some(1),
        };
        let value = serde_json::to_value(&dto).unwrap();
        assert_eq!(value["teamId"], 1);
        assert!(value.get("team_id").is_none());
    }

    #[test]
    fn test_missing_optional_fields_deserialize_as_none() {
        let dto: DriverDto =
            serde_json::from_str(r#"{"name":"Yuki Tsunoda","country":"JP"}"#).unwrap();
        assert_eq!(dto.id, None);
        assert_eq!(dto.team_id, None);
    }
}
