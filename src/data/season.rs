use chrono::NaiveDate;
use entity::sea_orm_active_enums::SeasonCategory;
use sea_orm::{
    sea_query::{Expr, Func},
    ActiveModelTrait, ActiveValue, ColumnTrait, ConnectionTrait, DbErr, EntityTrait, ExprTrait,
    QueryFilter, QueryOrder,
};

use crate::model::db::SeasonModel;

pub struct SeasonRepository<'a, C: ConnectionTrait> {
    db: &'a C,
}

impl<'a, C: ConnectionTrait> SeasonRepository<'a, C> {
    /// Creates a new instance of [`SeasonRepository`]
    pub fn new(db: &'a C) -> Self {
        Self { db }
    }

    pub async fn create(
        &self,
        name: &str,
        category: SeasonCategory,
        start_date: NaiveDate,
        end_date: Option<NaiveDate>,
    ) -> Result<SeasonModel, DbErr> {
        let season = entity::season::ActiveModel {
            name: ActiveValue::Set(name.to_string()),
            category: ActiveValue::Set(category),
            start_date: ActiveValue::Set(start_date),
            end_date: ActiveValue::Set(end_date),
            ..Default::default()
        };

        season.insert(self.db).await
    }

    pub async fn get(&self, season_id: i32) -> Result<Option<SeasonModel>, DbErr> {
        entity::prelude::Season::find_by_id(season_id)
            .one(self.db)
            .await
    }

    /// Finds a season by name, ignoring case
    pub async fn find_by_name(&self, name: &str) -> Result<Option<SeasonModel>, DbErr> {
        entity::prelude::Season::find()
            .filter(
                Expr::expr(Func::lower(Expr::col(entity::season::Column::Name)))
                    .eq(name.trim().to_lowercase()),
            )
            .order_by_asc(entity::season::Column::Id)
            .one(self.db)
            .await
    }

    /// Finds a season by numeric ID when the identifier parses as one, falling
    /// back to case-insensitive name
    pub async fn find_by_id_or_name(
        &self,
        identifier: &str,
    ) -> Result<Option<SeasonModel>, DbErr> {
        if let Ok(season_id) = identifier.trim().parse::<i32>() {
            if let Some(season) = self.get(season_id).await? {
                return Ok(Some(season));
            }
        }

        self.find_by_name(identifier).await
    }

    /// Most recently started season, optionally restricted to a category
    pub async fn latest(
        &self,
        category: Option<SeasonCategory>,
    ) -> Result<Option<SeasonModel>, DbErr> {
        let mut query = entity::prelude::Season::find();
        if let Some(category) = category {
            query = query.filter(entity::season::Column::Category.eq(category));
        }

        query
            .order_by_desc(entity::season::Column::StartDate)
            .order_by_desc(entity::season::Column::Id)
            .one(self.db)
            .await
    }

    pub async fn list_by_category(
        &self,
        category: SeasonCategory,
    ) -> Result<Vec<SeasonModel>, DbErr> {
        entity::prelude::Season::find()
            .filter(entity::season::Column::Category.eq(category))
            .order_by_asc(entity::season::Column::StartDate)
            .all(self.db)
            .await
    }
}
