use sea_orm::{
    ActiveModelTrait, ActiveValue, ColumnTrait, ConnectionTrait, DbErr, DeleteResult, EntityTrait,
    PaginatorTrait, QueryFilter, QueryOrder,
};

use crate::model::db::{GroupModel, TeamGroupModel, TeamModel};

pub struct TeamGroupRepository<'a, C: ConnectionTrait> {
    db: &'a C,
}

impl<'a, C: ConnectionTrait> TeamGroupRepository<'a, C> {
    /// Creates a new instance of [`TeamGroupRepository`]
    pub fn new(db: &'a C) -> Self {
        Self { db }
    }

    /// Places a team in a group, dropping any prior membership it held that season
    pub async fn assign(&self, team_id: i32, group: &GroupModel) -> Result<TeamGroupModel, DbErr> {
        self.remove(team_id, group.season_id).await?;

        let membership = entity::team_group::ActiveModel {
            team_id: ActiveValue::Set(team_id),
            group_id: ActiveValue::Set(group.id),
            season_id: ActiveValue::Set(group.season_id),
            ..Default::default()
        };

        membership.insert(self.db).await
    }

    /// Removes the team's membership for a season
    ///
    /// Returns OK regardless of a membership existing, to confirm the deletion result
    /// check the [`DeleteResult::rows_affected`] field.
    pub async fn remove(&self, team_id: i32, season_id: i32) -> Result<DeleteResult, DbErr> {
        entity::prelude::TeamGroup::delete_many()
            .filter(entity::team_group::Column::TeamId.eq(team_id))
            .filter(entity::team_group::Column::SeasonId.eq(season_id))
            .exec(self.db)
            .await
    }

    /// Teams of a group ordered by name
    pub async fn members(&self, group_id: i32) -> Result<Vec<TeamModel>, DbErr> {
        let rows = entity::prelude::TeamGroup::find()
            .filter(entity::team_group::Column::GroupId.eq(group_id))
            .find_also_related(entity::team::Entity)
            .all(self.db)
            .await?;

        let mut teams: Vec<TeamModel> = rows.into_iter().filter_map(|(_, team)| team).collect();
        teams.sort_by(|a, b| a.name.cmp(&b.name));

        Ok(teams)
    }

    pub async fn list_for_season(&self, season_id: i32) -> Result<Vec<TeamGroupModel>, DbErr> {
        entity::prelude::TeamGroup::find()
            .filter(entity::team_group::Column::SeasonId.eq(season_id))
            .order_by_asc(entity::team_group::Column::Id)
            .all(self.db)
            .await
    }

    pub async fn is_member(&self, team_id: i32, season_id: i32) -> Result<bool, DbErr> {
        let count = entity::prelude::TeamGroup::find()
            .filter(entity::team_group::Column::TeamId.eq(team_id))
            .filter(entity::team_group::Column::SeasonId.eq(season_id))
            .count(self.db)
            .await?;

        Ok(count > 0)
    }
}
