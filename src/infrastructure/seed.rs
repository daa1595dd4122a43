use crate::models::{driver, team};
use sea_orm::*;

/// Demo grid inserted on an empty database: (team, country, [(driver, country)])
const DEMO_GRID: &[(&str, &str, &[(&str, &str)])] = &[
    ("Red Bull", "Austria", &[("Max Verstappen", "NL"), ("Sergio Perez", "MX")]),
    ("Ferrari", "Italy", &[("Charles Leclerc", "MC"), ("Carlos Sainz", "ES")]),
    ("Mercedes", "Germany", &[("Lewis Hamilton", "GB"), ("George Russell", "GB")]),
    ("McLaren", "United Kingdom", &[("Lando Norris", "GB"), ("Oscar Piastri", "AU")]),
];

pub async fn seed_demo_data(db: &DatabaseConnection) -> Result<(), DbErr> {
    if team::Entity::find().count(db).await? > 0 {
        tracing::info!("Teams already present, skipping demo seed");
        return Ok(());
    }

    for (team_name, team_country, drivers) in DEMO_GRID {
        let team = team::ActiveModel {
            name: Set(team_name.to_string()),
            country: Set(team_country.to_string()),
            ..Default::default()
        }
        .insert(db)
        .await?;

        for (driver_name, driver_country) in drivers.iter() {
            driver::ActiveModel {
                name: Set(driver_name.to_string()),
                country: Set(driver_country.to_string()),
                team_id: Set(Some(team.id)),
                ..Default::default()
            }
            .insert(db)
            .await?;
        }
    }

    tracing::info!("Seeded {} demo teams", DEMO_GRID.len());
    Ok(())
}
