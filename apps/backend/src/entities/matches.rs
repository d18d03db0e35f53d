use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};
use time::OffsetDateTime;
use uuid::Uuid;

#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "matches")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub id: Uuid,
    #[sea_orm(column_name = "team_id")]
    pub team_id: Uuid,
    pub opponent: String,
    #[sea_orm(column_name = "kickoff_at")]
    pub kickoff_at: OffsetDateTime,
    #[sea_orm(column_name = "ended_at")]
    pub ended_at: Option<OffsetDateTime>,
    #[sea_orm(column_name = "created_at")]
    pub created_at: OffsetDateTime,
    #[sea_orm(column_name = "updated_at")]
    pub updated_at: OffsetDateTime,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(has_many = "super::ballots::Entity")]
    Ballots,
    #[sea_orm(has_one = "super::voting_sessions::Entity")]
    VotingSession,
    #[sea_orm(has_many = "super::pom_standings::Entity")]
    PomStandings,
}

impl Related<super::ballots::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Ballots.def()
    }
}

impl Related<super::voting_sessions::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::VotingSession.def()
    }
}

impl Related<super::pom_standings::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::PomStandings.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
