pub mod driver;
pub mod error;
pub mod health;
pub mod team;

use axum::{
    Router,
    routing::{get, post},
};

use crate::infrastructure::AppState;

/// Route table for everything mounted under `/api`
pub fn api_router_with_state(state: AppState) -> Router {
    Router::new()
        // Health check
        .route("/health", get(health::health_check))
        // Teams
        .route("/team/all", get(team::list_teams))
        .route("/team", post(team::create_team))
        .route(
            "/team/:id",
            get(team::get_team)
                .put(team::update_team)
                .delete(team::delete_team),
        )
        // Drivers
        .route("/driver/all", get(driver::list_drivers))
        .route("/driver", post(driver::create_driver))
        .route(
            "/driver/:id",
            get(driver::get_driver)
                .put(driver::update_driver)
                .delete(driver::delete_driver),
        )
        .with_state(state)
}
