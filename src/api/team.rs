//! Team API handlers using repository pattern

use axum::{
    Json,
    extract::{Path, State},
    http::{StatusCode, header},
    response::IntoResponse,
};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::api::error::store_error;
use crate::domain::{DomainError, Team, TeamInput};
use crate::infrastructure::AppState;

/// Wire representation of a team
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct TeamDto {
    /// Must be null on creation
    pub id: Option<i64>,
    pub name: String,
    pub country: String,
}

impl From<Team> for TeamDto {
    fn from(team: Team) -> Self {
        Self {
            id: Some(team.id),
            name: team.name,
            country: team.country,
        }
    }
}

impl From<TeamDto> for TeamInput {
    fn from(dto: TeamDto) -> Self {
        Self {
            name: dto.name,
            country: dto.country,
        }
    }
}

#[utoipa::path(
    get,
    path = "/api/team/all",
    tag = "team",
    responses(
        (status = 200, description = "All teams in insertion order", body = [TeamDto])
    )
)]
pub async fn list_teams(State(state): State<AppState>) -> impl IntoResponse {
    match state.team_repo.find_all().await {
        Ok(teams) => {
            let dtos: Vec<TeamDto> = teams.into_iter().map(TeamDto::from).collect();
            (StatusCode::OK, Json(dtos)).into_response()
        }
        Err(e) => store_error(e),
    }
}

#[utoipa::path(
    get,
    path = "/api/team/{id}",
    tag = "team",
    params(("id" = i64, Path, description = "Team ID")),
    responses(
        (status = 200, description = "Team found", body = TeamDto),
        (status = 404, description = "No team with this ID")
    )
)]
pub async fn get_team(State(state): State<AppState>, Path(id): Path<i64>) -> impl IntoResponse {
    match state.team_repo.find_by_id(id).await {
        Ok(Some(team)) => (StatusCode::OK, Json(TeamDto::from(team))).into_response(),
        Ok(None) => StatusCode::NOT_FOUND.into_response(),
        Err(e) => store_error(e),
    }
}

#[utoipa::path(
    post,
    path = "/api/team",
    tag = "team",
    request_body = TeamDto,
    responses(
        (status = 201, description = "Team created", body = TeamDto),
        (status = 400, description = "Team ID must be null")
    )
)]
pub async fn create_team(
    State(state): State<AppState>,
    Json(payload): Json<TeamDto>,
) -> impl IntoResponse {
    if payload.id.is_some() {
        return (StatusCode::BAD_REQUEST, "Team ID must be null").into_response();
    }

    match state.team_repo.create(payload.into()).await {
        Ok(team) => (
            StatusCode::CREATED,
            [(header::LOCATION, format!("/api/team/{}", team.id))],
            Json(TeamDto::from(team)),
        )
            .into_response(),
        Err(e) => store_error(e),
    }
}

#[utoipa::path(
    put,
    path = "/api/team/{id}",
    tag = "team",
    params(("id" = i64, Path, description = "Team ID")),
    request_body = TeamDto,
    responses(
        (status = 200, description = "Team updated", body = TeamDto),
        (status = 404, description = "No team with this ID"),
        (status = 418, description = "Body ID differs from path ID")
    )
)]
pub async fn update_team(
    State(state): State<AppState>,
    Path(id): Path<i64>,
    Json(payload): Json<TeamDto>,
) -> impl IntoResponse {
    if let Some(body_id) = payload.id
        && body_id != id
    {
        return (
            StatusCode::IM_A_TEAPOT,
            "Path Variable of id not equal to Team ID",
        )
            .into_response();
    }

    match state.team_repo.update(id, payload.into()).await {
        Ok(team) => (StatusCode::OK, Json(TeamDto::from(team))).into_response(),
        Err(DomainError::NotFound) => (
            StatusCode::NOT_FOUND,
            format!("Team of ID {} not found", id),
        )
            .into_response(),
        Err(e) => store_error(e),
    }
}

#[utoipa::path(
    delete,
    path = "/api/team/{id}",
    tag = "team",
    params(("id" = i64, Path, description = "Team ID")),
    responses(
        (status = 200, description = "Team deleted"),
        (status = 404, description = "No team with this ID")
    )
)]
pub async fn delete_team(State(state): State<AppState>, Path(id): Path<i64>) -> impl IntoResponse {
    match state.team_repo.exists(id).await {
        Ok(true) => {}
        Ok(false) => return StatusCode::NOT_FOUND.into_response(),
        Err(e) => return store_error(e),
    }

    // Drivers referencing this team are left as they are
    match state.team_repo.delete(id).await {
        Ok(()) => {
            tracing::info!("Deleted Resource {}", id);
            StatusCode::OK.into_response()
        }
        Err(DomainError::NotFound) => StatusCode::NOT_FOUND.into_response(),
        Err(e) => store_error(e),
    }
}
