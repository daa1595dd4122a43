//! Application state containing repositories and shared resources

use sea_orm::DatabaseConnection;
use std::sync::Arc;

use crate::domain::{DriverRepository, TeamRepository};
use crate::infrastructure::{SeaOrmDriverRepository, SeaOrmTeamRepository};

/// Application state shared across all handlers
#[derive(Clone)]
pub struct AppState {
    /// Database connection (health checks)
    db: DatabaseConnection,
    /// Team repository
    pub team_repo: Arc<dyn TeamRepository>,
    /// Driver repository
    pub driver_repo: Arc<dyn DriverRepository>,
}

impl AppState {
    /// Create a new AppState with all repositories initialized
    pub fn new(db: DatabaseConnection) -> Self {
        let team_repo = Arc::new(SeaOrmTeamRepository::new(db.clone()));
        let driver_repo = Arc::new(SeaOrmDriverRepository::new(db.clone()));

        Self::with_repositories(db, team_repo, driver_repo)
    }

    /// Create an AppState from explicitly provided stores
    pub fn with_repositories(
        db: DatabaseConnection,
        team_repo: Arc<dyn TeamRepository>,
        driver_repo: Arc<dyn DriverRepository>,
    ) -> Self {
        Self {
            db,
            team_repo,
            driver_repo,
        }
    }

    /// Get the database connection
    pub fn db(&self) -> &DatabaseConnection {
        &self.db
    }
}
