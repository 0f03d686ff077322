use sea_orm::{
    ActiveModelTrait, ActiveValue, ColumnTrait, ConnectionTrait, DbErr, EntityTrait, QueryFilter,
    QueryOrder,
};

use crate::model::db::{GroupModel, SeasonModel};

pub struct GroupRepository<'a, C: ConnectionTrait> {
    db: &'a C,
}

impl<'a, C: ConnectionTrait> GroupRepository<'a, C> {
    /// Creates a new instance of [`GroupRepository`]
    pub fn new(db: &'a C) -> Self {
        Self { db }
    }

    pub async fn get(&self, group_id: i32) -> Result<Option<GroupModel>, DbErr> {
        entity::prelude::SeasonGroup::find_by_id(group_id)
            .one(self.db)
            .await
    }

    /// Finds a season's group by its letter, ignoring case
    pub async fn find_by_name(
        &self,
        season_id: i32,
        name: &str,
    ) -> Result<Option<GroupModel>, DbErr> {
        entity::prelude::SeasonGroup::find()
            .filter(entity::season_group::Column::SeasonId.eq(season_id))
            .filter(entity::season_group::Column::Name.eq(name.trim().to_uppercase()))
            .one(self.db)
            .await
    }

    /// Gets a season's group by letter, creating it with the season's category if absent
    pub async fn get_or_create(
        &self,
        season: &SeasonModel,
        name: &str,
    ) -> Result<GroupModel, DbErr> {
        if let Some(group) = self.find_by_name(season.id, name).await? {
            return Ok(group);
        }

        let group = entity::season_group::ActiveModel {
            season_id: ActiveValue::Set(season.id),
            name: ActiveValue::Set(name.trim().to_uppercase()),
            category: ActiveValue::Set(season.category),
            ..Default::default()
        };

        group.insert(self.db).await
    }

    pub async fn list_for_season(&self, season_id: i32) -> Result<Vec<GroupModel>, DbErr> {
        entity::prelude::SeasonGroup::find()
            .filter(entity::season_group::Column::SeasonId.eq(season_id))
            .order_by_asc(entity::season_group::Column::Name)
            .all(self.db)
            .await
    }
}
