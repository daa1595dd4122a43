//! Repository trait definitions
//!
//! These traits define the contract for data access.
//! Implementations live in the infrastructure layer.

use async_trait::async_trait;

use super::DomainError;

/// A racing team
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Team {
    pub id: i64,
    pub name: String,
    pub country: String,
}

/// Mutable fields of a team
#[derive(Debug, Clone)]
pub struct TeamInput {
    pub name: String,
    pub country: String,
}

/// A driver, optionally attached to a team.
///
/// `team_id` is a plain reference: nothing checks that the team exists.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Driver {
    pub id: i64,
    pub name: String,
    pub country: String,
    pub team_id: Option<i64>,
}

/// Mutable fields of a driver
#[derive(Debug, Clone)]
pub struct DriverInput {
    pub name: String,
    pub country: String,
    pub team_id: Option<i64>,
}

/// Repository trait for Team entity
#[async_trait]
pub trait TeamRepository: Send + Sync {
    /// Find all teams in insertion order
    async fn find_all(&self) -> Result<Vec<Team>, DomainError>;

    /// Find a team by ID
    async fn find_by_id(&self, id: i64) -> Result<Option<Team>, DomainError>;

    /// Check whether a team exists
    async fn exists(&self, id: i64) -> Result<bool, DomainError>;

    /// Create a new team with a generated ID
    async fn create(&self, input: TeamInput) -> Result<Team, DomainError>;

    /// Overwrite name and country of an existing team
    async fn update(&self, id: i64, input: TeamInput) -> Result<Team, DomainError>;

    /// Delete a team by ID
    async fn delete(&self, id: i64) -> Result<(), DomainError>;
}

/// Repository trait for Driver entity
#[async_trait]
pub trait DriverRepository: Send + Sync {
    /// Find all drivers in insertion order
    async fn find_all(&self) -> Result<Vec<Driver>, DomainError>;

    /// Find a driver by ID
    async fn find_by_id(&self, id: i64) -> Result<Option<Driver>, DomainError>;

    /// Check whether a driver exists
    async fn exists(&self, id: i64) -> Result<bool, DomainError>;

    /// Create a new driver with a generated ID
    async fn create(&self, input: DriverInput) -> Result<Driver, DomainError>;

    /// Overwrite name, country and team reference of an existing driver
    async fn update(&self, id: i64, input: DriverInput) -> Result<Driver, DomainError>;

    /// Delete a driver by ID
    async fn delete(&self, id: i64) -> Result<(), DomainError>;
}
