pub mod driver;
pub mod team;
