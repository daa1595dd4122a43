//! SeaORM implementation of DriverRepository

use async_trait::async_trait;
use sea_orm::{
    ActiveModelTrait, DatabaseConnection, EntityTrait, PaginatorTrait, QueryOrder, Set,
};

use crate::domain::{DomainError, Driver, DriverInput, DriverRepository};
use crate::models::driver::{self, ActiveModel, Entity as DriverEntity};

/// SeaORM-based implementation of DriverRepository
pub struct SeaOrmDriverRepository {
    db: DatabaseConnection,
}

impl SeaOrmDriverRepository {
    pub fn new(db: DatabaseConnection) -> Self {
        Self { db }
    }
}

fn to_domain(model: driver::Model) -> Driver {
    Driver {
        id: model.id,
        name: model.name,
        country: model.country,
        team_id: model.team_id,
    }
}

#[async_trait]
impl DriverRepository for SeaOrmDriverRepository {
    async fn find_all(&self) -> Result<Vec<Driver>, DomainError> {
        let drivers = DriverEntity::find()
            .order_by_asc(driver::Column::Id)
            .all(&self.db)
            .await?;

        Ok(drivers.into_iter().map(to_domain).collect())
    }

    async fn find_by_id(&self, id: i64) -> Result<Option<Driver>, DomainError> {
        let driver = DriverEntity::find_by_id(id).one(&self.db).await?;
        Ok(driver.map(to_domain))
    }

    async fn exists(&self, id: i64) -> Result<bool, DomainError> {
        let count = DriverEntity::find_by_id(id).count(&self.db).await?;
        Ok(count > 0)
    }

    async fn create(&self, input: DriverInput) -> Result<Driver, DomainError> {
        let driver = ActiveModel {
            name: Set(input.name),
            country: Set(input.country),
            team_id: Set(input.team_id),
            ..Default::default()
        };

        let result = driver.insert(&self.db).await?;
        Ok(to_domain(result))
    }

    async fn update(&self, id: i64, input: DriverInput) -> Result<Driver, DomainError> {
        let existing = DriverEntity::find_by_id(id)
            .one(&self.db)
            .await?
            .ok_or(DomainError::NotFound)?;

        let mut driver: ActiveModel = existing.into();
        driver.name = Set(input.name);
        driver.country = Set(input.country);
        driver.team_id = Set(input.team_id);

        let result = driver.update(&self.db).await?;
        Ok(to_domain(result))
    }

    async fn delete(&self, id: i64) -> Result<(), DomainError> {
        let result = DriverEntity::delete_by_id(id).exec(&self.db).await?;

        if result.rows_affected == 0 {
            return Err(DomainError::NotFound);
        }

        Ok(())
    }
}
