//! Repository implementations using SeaORM

pub mod driver_repository;
pub mod team_repository;

pub use driver_repository::SeaOrmDriverRepository;
pub use team_repository::SeaOrmTeamRepository;
