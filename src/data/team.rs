use chrono::Utc;
use sea_orm::{
    sea_query::{Expr, Func},
    ActiveModelTrait, ActiveValue, ColumnTrait, Condition, ConnectionTrait, DbErr, EntityTrait,
    ExprTrait, PaginatorTrait, QueryFilter, QueryOrder, QuerySelect,
};

use crate::model::{
    bracket::{PlaceholderSlot, SHORT_NAME_LEN},
    db::TeamModel,
};

pub struct TeamRepository<'a, C: ConnectionTrait> {
    db: &'a C,
}

impl<'a, C: ConnectionTrait> TeamRepository<'a, C> {
    /// Creates a new instance of [`TeamRepository`]
    pub fn new(db: &'a C) -> Self {
        Self { db }
    }

    /// Creates a new, non-archived team
    pub async fn create(&self, name: &str) -> Result<TeamModel, DbErr> {
        let team = entity::team::ActiveModel {
            name: ActiveValue::Set(name.to_string()),
            short_name: ActiveValue::Set(short_name(name)),
            archived: ActiveValue::Set(false),
            slot_kind: ActiveValue::Set(None),
            slot_matchday: ActiveValue::Set(None),
            slot_group: ActiveValue::Set(None),
            slot_position: ActiveValue::Set(None),
            created_at: ActiveValue::Set(Utc::now().naive_utc()),
            ..Default::default()
        };

        team.insert(self.db).await
    }

    pub async fn get(&self, team_id: i32) -> Result<Option<TeamModel>, DbErr> {
        entity::prelude::Team::find_by_id(team_id).one(self.db).await
    }

    pub async fn get_many(&self, team_ids: &[i32]) -> Result<Vec<TeamModel>, DbErr> {
        if team_ids.is_empty() {
            return Ok(Vec::new());
        }

        entity::prelude::Team::find()
            .filter(entity::team::Column::Id.is_in(team_ids.to_vec()))
            .all(self.db)
            .await
    }

    /// Finds a team by name, ignoring case and surrounding whitespace
    pub async fn find_by_name(&self, name: &str) -> Result<Option<TeamModel>, DbErr> {
        entity::prelude::Team::find()
            .filter(lower_name().eq(name.trim().to_lowercase()))
            .order_by_asc(entity::team::Column::Id)
            .one(self.db)
            .await
    }

    /// Lists teams visible in public listings, ordered by name
    pub async fn list_active(&self) -> Result<Vec<TeamModel>, DbErr> {
        entity::prelude::Team::find()
            .filter(entity::team::Column::Archived.eq(false))
            .order_by_asc(entity::team::Column::Name)
            .all(self.db)
            .await
    }

    /// Names of every team, placeholders included
    pub async fn list_names(&self) -> Result<Vec<String>, DbErr> {
        entity::prelude::Team::find()
            .select_only()
            .column(entity::team::Column::Name)
            .order_by_asc(entity::team::Column::Name)
            .into_tuple::<String>()
            .all(self.db)
            .await
    }

    /// Finds the placeholder team for a slot by its structured columns or,
    /// failing that, by its conventional name
    pub async fn find_placeholder(
        &self,
        slot: &PlaceholderSlot,
    ) -> Result<Option<TeamModel>, DbErr> {
        entity::prelude::Team::find()
            .filter(
                Condition::any()
                    .add(slot_condition(slot))
                    .add(lower_name().eq(slot.team_name().to_lowercase())),
            )
            .order_by_asc(entity::team::Column::Id)
            .one(self.db)
            .await
    }

    /// Gets the placeholder team for a slot, creating an archived one if absent
    pub async fn get_or_create_placeholder(
        &self,
        slot: &PlaceholderSlot,
    ) -> Result<TeamModel, DbErr> {
        if let Some(team) = self.find_placeholder(slot).await? {
            return Ok(team);
        }

        let name = slot.team_name();
        let team = entity::team::ActiveModel {
            short_name: ActiveValue::Set(short_name(&name)),
            name: ActiveValue::Set(name),
            archived: ActiveValue::Set(true),
            slot_kind: ActiveValue::Set(Some(slot.kind())),
            slot_matchday: ActiveValue::Set(slot.matchday()),
            slot_group: ActiveValue::Set(slot.group().map(str::to_string)),
            slot_position: ActiveValue::Set(slot.position()),
            created_at: ActiveValue::Set(Utc::now().naive_utc()),
            ..Default::default()
        };

        team.insert(self.db).await
    }

    /// Every team standing in for a slot: structured match or case-insensitive
    /// name containment of the conventional placeholder name
    pub async fn find_slot_candidates(
        &self,
        slot: &PlaceholderSlot,
    ) -> Result<Vec<TeamModel>, DbErr> {
        let pattern = format!("%{}%", slot.team_name().to_lowercase());

        entity::prelude::Team::find()
            .filter(
                Condition::any()
                    .add(slot_condition(slot))
                    .add(lower_name().like(pattern)),
            )
            .order_by_asc(entity::team::Column::Id)
            .all(self.db)
            .await
    }

    /// Number of matches, in any season, with the team as home or away side
    pub async fn reference_count(&self, team_id: i32) -> Result<u64, DbErr> {
        entity::prelude::LeagueMatch::find()
            .filter(
                Condition::any()
                    .add(entity::league_match::Column::HomeTeamId.eq(team_id))
                    .add(entity::league_match::Column::AwayTeamId.eq(team_id)),
            )
            .count(self.db)
            .await
    }

    /// Deletes the placeholder teams of a slot that no match references anymore
    ///
    /// Returns the IDs of the deleted teams.
    pub async fn delete_unreferenced_placeholders(
        &self,
        slot: &PlaceholderSlot,
    ) -> Result<Vec<i32>, DbErr> {
        let mut deleted = Vec::new();

        for team in self.find_slot_candidates(slot).await? {
            if self.reference_count(team.id).await? > 0 {
                continue;
            }

            entity::prelude::TeamGroup::delete_many()
                .filter(entity::team_group::Column::TeamId.eq(team.id))
                .exec(self.db)
                .await?;
            entity::prelude::Team::delete_by_id(team.id)
                .exec(self.db)
                .await?;

            deleted.push(team.id);
        }

        Ok(deleted)
    }
}

fn short_name(name: &str) -> String {
    name.chars().take(SHORT_NAME_LEN).collect()
}

fn lower_name() -> Expr {
    Expr::expr(Func::lower(Expr::col(entity::team::Column::Name)))
}

fn slot_condition(slot: &PlaceholderSlot) -> Condition {
    let condition = Condition::all().add(entity::team::Column::SlotKind.eq(slot.kind()));

    match slot {
        PlaceholderSlot::Winner(matchday) | PlaceholderSlot::Loser(matchday) => {
            condition.add(entity::team::Column::SlotMatchday.eq(*matchday))
        }
        PlaceholderSlot::GroupPosition { position, group } => condition
            .add(entity::team::Column::SlotPosition.eq(*position as i32))
            .add(entity::team::Column::SlotGroup.eq(group.clone())),
    }
}
