//! SeaORM implementation of TeamRepository

use async_trait::async_trait;
use sea_orm::{
    ActiveModelTrait, DatabaseConnection, EntityTrait, PaginatorTrait, QueryOrder, Set,
};

use crate::domain::{DomainError, Team, TeamInput, TeamRepository};
use crate::models::team::{self, ActiveModel, Entity as TeamEntity};

/// SeaORM-based implementation of TeamRepository
pub struct SeaOrmTeamRepository {
    db: DatabaseConnection,
}

impl SeaOrmTeamRepository {
    pub fn new(db: DatabaseConnection) -> Self {
        Self { db }
    }
}

fn to_domain(model: team::Model) -> Team {
    Team {
        id: model.id,
        name: model.name,
        country: model.country,
    }
}

#[async_trait]
impl TeamRepository for SeaOrmTeamRepository {
    async fn find_all(&self) -> Result<Vec<Team>, DomainError> {
        let teams = TeamEntity::find()
            .order_by_asc(team::Column::Id)
            .all(&self.db)
            .await?;

        Ok(teams.into_iter().map(to_domain).collect())
    }

    async fn find_by_id(&self, id: i64) -> Result<Option<Team>, DomainError> {
        let team = TeamEntity::find_by_id(id).one(&self.db).await?;
        Ok(team.map(to_domain))
    }

    async fn exists(&self, id: i64) -> Result<bool, DomainError> {
        let count = TeamEntity::find_by_id(id).count(&self.db).await?;
        Ok(count > 0)
    }

    async fn create(&self, input: TeamInput) -> Result<Team, DomainError> {
        let team = ActiveModel {
            name: Set(input.name),
            country: Set(input.country),
            ..Default::default()
        };

        let result = team.insert(&self.db).await?;
        Ok(to_domain(result))
    }

    async fn update(&self, id: i64, input: TeamInput) -> Result<Team, DomainError> {
        let existing = TeamEntity::find_by_id(id)
            .one(&self.db)
            .await?
            .ok_or(DomainError::NotFound)?;

        let mut team: ActiveModel = existing.into();
        team.name = Set(input.name);
        team.country = Set(input.country);

        let result = team.update(&self.db).await?;
        Ok(to_domain(result))
    }

    async fn delete(&self, id: i64) -> Result<(), DomainError> {
        let result = TeamEntity::delete_by_id(id).exec(&self.db).await?;

        if result.rows_affected == 0 {
            return Err(DomainError::NotFound);
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::infrastructure::db::init_db;

    async fn setup_repo() -> SeaOrmTeamRepository {
        let db = init_db("sqlite::memory:").await.expect("Failed to init db");
        SeaOrmTeamRepository::new(db)
    }

    fn input(name: &str, country: &str) -> TeamInput {
        TeamInput {
            name: name.to_string(),
            country: country.to_string(),
        }
    }

    #[tokio::test]
    async fn test_create_assigns_sequential_ids() {
        let repo = setup_repo().await;

        let first = repo.create(input("Red Bull", "Austria")).await.unwrap();
        let second = repo.create(input("Ferrari", "Italy")).await.unwrap();

        assert_eq!(first.id, 1);
        assert_eq!(second.id, 2);
        assert_eq!(second.name, "Ferrari");
    }

    #[tokio::test]
    async fn test_find_all_keeps_insertion_order() {
        let repo = setup_repo().await;
        assert!(repo.find_all().await.unwrap().is_empty());

        repo.create(input("McLaren", "United Kingdom")).await.unwrap();
        repo.create(input("Alpine", "France")).await.unwrap();

        let names: Vec<String> = repo
            .find_all()
            .await
            .unwrap()
            .into_iter()
            .map(|t| t.name)
            .collect();
        assert_eq!(names, vec!["McLaren", "Alpine"]);
    }

    #[tokio::test]
    async fn test_update_overwrites_fields() {
        let repo = setup_repo().await;
        let team = repo.create(input("Sauber", "Switzerland")).await.unwrap();

        let updated = repo
            .update(team.id, input("Kick Sauber", "Switzerland"))
            .await
            .unwrap();
        assert_eq!(updated.id, team.id);
        assert_eq!(updated.name, "Kick Sauber");

        let stored = repo.find_by_id(team.id).await.unwrap().unwrap();
        assert_eq!(stored, updated);
    }

    #[tokio::test]
    async fn test_update_missing_is_not_found() {
        let repo = setup_repo().await;
        let result = repo.update(42, input("Haas", "USA")).await;
        assert!(matches!(result, Err(DomainError::NotFound)));
    }

    #[tokio::test]
    async fn test_delete_and_exists() {
        let repo = setup_repo().await;
        let team = repo.create(input("Williams", "United Kingdom")).await.unwrap();
        assert!(repo.exists(team.id).await.unwrap());

        repo.delete(team.id).await.unwrap();
        assert!(!repo.exists(team.id).await.unwrap());
        assert!(repo.find_by_id(team.id).await.unwrap().is_none());

        let again = repo.delete(team.id).await;
        assert!(matches!(again, Err(DomainError::NotFound)));
    }

    #[tokio::test]
    async fn test_ids_are_not_reused_after_delete() {
        let repo = setup_repo().await;
        let first = repo.create(input("Aston Martin", "United Kingdom")).await.unwrap();
        repo.delete(first.id).await.unwrap();

        let second = repo.create(input("Racing Bulls", "Italy")).await.unwrap();
        assert!(second.id > first.id);
    }
}
