pub use sea_orm_migration::prelude::*;

mod m20260301_000001_team;
mod m20260301_000002_season;
mod m20260301_000003_season_group;
mod m20260301_000004_team_group;
mod m20260301_000005_league_match;

pub struct Migrator;

#[async_trait::async_trait]
impl MigratorTrait for Migrator {
    fn migrations() -> Vec<Box<dyn MigrationTrait>> {
        vec![
            Box::new(m20260301_000001_team::Migration),
            Box::new(m20260301_000002_season::Migration),
            Box::new(m20260301_000003_season_group::Migration),
            Box::new(m20260301_000004_team_group::Migration),
            Box::new(m20260301_000005_league_match::Migration),
        ]
    }
}
