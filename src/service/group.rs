use sea_orm::DatabaseConnection;

use crate::{
    data::{
        group::GroupRepository, season::SeasonRepository, team::TeamRepository,
        team_group::TeamGroupRepository,
    },
    error::{league::LeagueError, Error},
    model::{
        api::{GroupWithTeamsDto, TeamDto},
        db::TeamGroupModel,
    },
    service::retry::RetryContext,
};

pub struct GroupService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> GroupService<'a> {
    /// Creates a new instance of [`GroupService`]
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Places a team in a season's group, creating the group if needed.
    ///
    /// Any membership the team held in another group of the season is dropped.
    ///
    /// # Arguments
    /// - `season_id` - ID of the season
    /// - `group_name` - Group letter, stored upper case
    /// - `team_id` - ID of the team
    ///
    /// # Returns
    /// - `Ok(TeamGroupModel)` - The new membership
    /// - `Err(Error::LeagueError)` - Season or team does not exist
    pub async fn assign_team(
        &self,
        season_id: i32,
        group_name: &str,
        team_id: i32,
    ) -> Result<TeamGroupModel, Error> {
        let season = SeasonRepository::new(self.db)
            .get(season_id)
            .await?
            .ok_or_else(|| LeagueError::SeasonNotFound(season_id.to_string()))?;
        let team = TeamRepository::new(self.db)
            .get(team_id)
            .await?
            .ok_or_else(|| LeagueError::TeamNotFound(team_id.to_string()))?;

        let group = GroupRepository::new(self.db)
            .get_or_create(&season, group_name)
            .await?;
        let membership = TeamGroupRepository::new(self.db)
            .assign(team.id, &group)
            .await?;

        tracing::info!(
            season_id,
            group = %group.name,
            team = %team.name,
            "Assigned team to group"
        );

        Ok(membership)
    }

    /// Removes a team from its group in a season.
    ///
    /// Returns whether a membership existed.
    pub async fn remove_team(&self, season_id: i32, team_id: i32) -> Result<bool, Error> {
        let result = TeamGroupRepository::new(self.db)
            .remove(team_id, season_id)
            .await?;

        Ok(result.rows_affected > 0)
    }

    /// Groups of a season with their non-archived teams, ordered by group name.
    pub async fn groups_with_teams(&self, season_id: i32) -> Result<Vec<GroupWithTeamsDto>, Error> {
        let mut ctx: RetryContext<()> = RetryContext::new();

        let db = self.db.clone();

        ctx.execute_with_retry(&format!("season ID {} groups", season_id), |_| {
            let db = db.clone();

            Box::pin(async move {
                let groups = GroupRepository::new(&db).list_for_season(season_id).await?;
                let membership_repo = TeamGroupRepository::new(&db);

                let mut dtos = Vec::with_capacity(groups.len());
                for group in groups {
                    let teams = membership_repo
                        .members(group.id)
                        .await?
                        .into_iter()
                        .filter(|team| !team.archived)
                        .map(TeamDto::from)
                        .collect();

                    dtos.push(GroupWithTeamsDto {
                        group_id: group.id,
                        name: group.name,
                        teams,
                    });
                }

                Ok(dtos)
            })
        })
        .await
    }
}

#[cfg(test)]
mod tests;
