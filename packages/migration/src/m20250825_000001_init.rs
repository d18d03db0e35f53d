use sea_orm::Statement;
use sea_orm_migration::prelude::*;
use sea_orm_migration::sea_query::extension::postgres::Type as PgType;
use sea_orm_migration::sea_query::{ColumnDef, ForeignKeyAction, Index, Table};

#[derive(DeriveMigrationName)]
pub struct Migration;

// ----- Iden enums for tables & columns -----
#[derive(Iden)]
enum Matches {
    Table,
    Id,
    TeamId,
    Opponent,
    KickoffAt,
    EndedAt,
    CreatedAt,
    UpdatedAt,
}

#[derive(Iden)]
enum Players {
    Table,
    Id,
    TeamId,
    DisplayName,
    CreatedAt,
    UpdatedAt,
}

#[derive(Iden)]
enum TeamMembers {
    Table,
    Id,
    TeamId,
    UserId,
    Role,
    CreatedAt,
}

#[derive(Iden)]
enum Ballots {
    Table,
    Id,
    MatchId,
    VoterId,
    FirstPlacePlayerId,
    SecondPlacePlayerId,
    ThirdPlacePlayerId,
    SubmittedAt,
}

#[derive(Iden)]
enum VotingSessions {
    Table,
    MatchId,
    Status,
    ClosedBy,
    ClosedAt,
    CreatedAt,
}

#[derive(Iden)]
enum PomStandings {
    Table,
    Id,
    MatchId,
    PlayerId,
    FirstPlaceVotes,
    SecondPlaceVotes,
    ThirdPlaceVotes,
    TotalPoints,
    FinalPosition,
    CreatedAt,
}

#[derive(Iden)]
enum MemberRoleEnum {
    #[iden = "member_role"]
    Type,
}

#[derive(Iden)]
enum VotingStatusEnum {
    #[iden = "voting_status"]
    Type,
}

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        // Create Postgres enums (PostgreSQL only)
        match manager.get_database_backend() {
            sea_orm::DatabaseBackend::Postgres => {
                // Helper function to check if enum exists
                async fn enum_exists(
                    manager: &SchemaManager<'_>,
                    enum_name: &str,
                ) -> Result<bool, DbErr> {
                    let result = manager
                        .get_connection()
                        .query_one(Statement::from_string(
                            sea_orm::DatabaseBackend::Postgres,
                            format!("SELECT 1 FROM pg_type WHERE typname = '{}'", enum_name),
                        ))
                        .await?;
                    Ok(result.is_some())
                }

                if !enum_exists(manager, "member_role").await? {
                    manager
                        .create_type(
                            PgType::create()
                                .as_enum(MemberRoleEnum::Type)
                                .values(["PLAYER", "COACH", "ADMIN"])
                                .to_owned(),
                        )
                        .await?;
                }

                if !enum_exists(manager, "voting_status").await? {
                    manager
                        .create_type(
                            PgType::create()
                                .as_enum(VotingStatusEnum::Type)
                                .values(["OPEN", "CLOSED"])
                                .to_owned(),
                        )
                        .await?;
                }
            }
            sea_orm::DatabaseBackend::Sqlite => {
                // SQLite doesn't need enum types - they're stored as TEXT
            }
            _ => {
                return Err(DbErr::Custom("Unsupported database backend".into()));
            }
        }

        // matches
        manager
            .create_table(
                Table::create()
                    .table(Matches::Table)
                    .if_not_exists()
                    .col(ColumnDef::new(Matches::Id).uuid().not_null().primary_key())
                    .col(ColumnDef::new(Matches::TeamId).uuid().not_null())
                    .col(ColumnDef::new(Matches::Opponent).string().not_null())
                    .col(
                        ColumnDef::new(Matches::KickoffAt)
                            .timestamp_with_time_zone()
                            .not_null(),
                    )
                    .col(
                        ColumnDef::new(Matches::EndedAt)
                            .timestamp_with_time_zone()
                            .null(),
                    )
                    .col(
                        ColumnDef::new(Matches::CreatedAt)
                            .timestamp_with_time_zone()
                            .not_null(),
                    )
                    .col(
                        ColumnDef::new(Matches::UpdatedAt)
                            .timestamp_with_time_zone()
                            .not_null(),
                    )
                    .to_owned(),
            )
            .await?;

        // eligibility listing filters by team and orders by end time
        manager
            .create_index(
                Index::create()
                    .name("idx_matches_team_ended")
                    .table(Matches::Table)
                    .col(Matches::TeamId)
                    .col(Matches::EndedAt)
                    .to_owned(),
            )
            .await?;

        // players
        manager
            .create_table(
                Table::create()
                    .table(Players::Table)
                    .if_not_exists()
                    .col(ColumnDef::new(Players::Id).uuid().not_null().primary_key())
                    .col(ColumnDef::new(Players::TeamId).uuid().not_null())
                    .col(ColumnDef::new(Players::DisplayName).string().not_null())
                    .col(
                        ColumnDef::new(Players::CreatedAt)
                            .timestamp_with_time_zone()
                            .not_null(),
                    )
                    .col(
                        ColumnDef::new(Players::UpdatedAt)
                            .timestamp_with_time_zone()
                            .not_null(),
                    )
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name("idx_players_team")
                    .table(Players::Table)
                    .col(Players::TeamId)
                    .to_owned(),
            )
            .await?;

        // team_members
        manager
            .create_table(
                Table::create()
                    .table(TeamMembers::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(TeamMembers::Id)
                            .big_integer()
                            .not_null()
                            .primary_key()
                            .auto_increment(),
                    )
                    .col(ColumnDef::new(TeamMembers::TeamId).uuid().not_null())
                    .col(ColumnDef::new(TeamMembers::UserId).uuid().not_null())
                    .col(
                        ColumnDef::new(TeamMembers::Role)
                            .custom(MemberRoleEnum::Type)
                            .not_null(),
                    )
                    .col(
                        ColumnDef::new(TeamMembers::CreatedAt)
                            .timestamp_with_time_zone()
                            .not_null(),
                    )
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name("ux_team_members_team_user")
                    .table(TeamMembers::Table)
                    .col(TeamMembers::TeamId)
                    .col(TeamMembers::UserId)
                    .unique()
                    .to_owned(),
            )
            .await?;

        // ballots
        manager
            .create_table(
                Table::create()
                    .table(Ballots::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(Ballots::Id)
                            .big_integer()
                            .not_null()
                            .primary_key()
                            .auto_increment(),
                    )
                    .col(ColumnDef::new(Ballots::MatchId).uuid().not_null())
                    .col(ColumnDef::new(Ballots::VoterId).uuid().not_null())
                    .col(
                        ColumnDef::new(Ballots::FirstPlacePlayerId)
                            .uuid()
                            .not_null(),
                    )
                    .col(ColumnDef::new(Ballots::SecondPlacePlayerId).uuid().null())
                    .col(ColumnDef::new(Ballots::ThirdPlacePlayerId).uuid().null())
                    .col(
                        ColumnDef::new(Ballots::SubmittedAt)
                            .timestamp_with_time_zone()
                            .not_null(),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_ballots_match_id")
                            .from(Ballots::Table, Ballots::MatchId)
                            .to(Matches::Table, Matches::Id)
                            .on_delete(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await?;

        // at-most-one ballot per (match, voter); closes the check-then-insert race
        manager
            .create_index(
                Index::create()
                    .name("ux_ballots_match_voter")
                    .table(Ballots::Table)
                    .col(Ballots::MatchId)
                    .col(Ballots::VoterId)
                    .unique()
                    .to_owned(),
            )
            .await?;

        // voting_sessions (absence of a row means the session is still open)
        manager
            .create_table(
                Table::create()
                    .table(VotingSessions::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(VotingSessions::MatchId)
                            .uuid()
                            .not_null()
                            .primary_key(),
                    )
                    .col(
                        ColumnDef::new(VotingSessions::Status)
                            .custom(VotingStatusEnum::Type)
                            .not_null(),
                    )
                    .col(ColumnDef::new(VotingSessions::ClosedBy).uuid().null())
                    .col(
                        ColumnDef::new(VotingSessions::ClosedAt)
                            .timestamp_with_time_zone()
                            .null(),
                    )
                    .col(
                        ColumnDef::new(VotingSessions::CreatedAt)
                            .timestamp_with_time_zone()
                            .not_null(),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_voting_sessions_match_id")
                            .from(VotingSessions::Table, VotingSessions::MatchId)
                            .to(Matches::Table, Matches::Id)
                            .on_delete(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await?;

        // pom_standings (materialized by close_voting)
        manager
            .create_table(
                Table::create()
                    .table(PomStandings::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(PomStandings::Id)
                            .big_integer()
                            .not_null()
                            .primary_key()
                            .auto_increment(),
                    )
                    .col(ColumnDef::new(PomStandings::MatchId).uuid().not_null())
                    .col(ColumnDef::new(PomStandings::PlayerId).uuid().not_null())
                    .col(
                        ColumnDef::new(PomStandings::FirstPlaceVotes)
                            .integer()
                            .not_null(),
                    )
                    .col(
                        ColumnDef::new(PomStandings::SecondPlaceVotes)
                            .integer()
                            .not_null(),
                    )
                    .col(
                        ColumnDef::new(PomStandings::ThirdPlaceVotes)
                            .integer()
                            .not_null(),
                    )
                    .col(
                        ColumnDef::new(PomStandings::TotalPoints)
                            .integer()
                            .not_null(),
                    )
                    .col(
                        ColumnDef::new(PomStandings::FinalPosition)
                            .integer()
                            .not_null(),
                    )
                    .col(
                        ColumnDef::new(PomStandings::CreatedAt)
                            .timestamp_with_time_zone()
                            .not_null(),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_pom_standings_match_id")
                            .from(PomStandings::Table, PomStandings::MatchId)
                            .to(Matches::Table, Matches::Id)
                            .on_delete(ForeignKeyAction::Cascade),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_pom_standings_player_id")
                            .from(PomStandings::Table, PomStandings::PlayerId)
                            .to(Players::Table, Players::Id)
                            .on_delete(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name("ux_pom_standings_match_player")
                    .table(PomStandings::Table)
                    .col(PomStandings::MatchId)
                    .col(PomStandings::PlayerId)
                    .unique()
                    .to_owned(),
            )
            .await?;

        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(PomStandings::Table).if_exists().to_owned())
            .await?;
        manager
            .drop_table(
                Table::drop()
                    .table(VotingSessions::Table)
                    .if_exists()
                    .to_owned(),
            )
            .await?;
        manager
            .drop_table(Table::drop().table(Ballots::Table).if_exists().to_owned())
            .await?;
        manager
            .drop_table(
                Table::drop()
                    .table(TeamMembers::Table)
                    .if_exists()
                    .to_owned(),
            )
            .await?;
        manager
            .drop_table(Table::drop().table(Players::Table).if_exists().to_owned())
            .await?;
        manager
            .drop_table(Table::drop().table(Matches::Table).if_exists().to_owned())
            .await?;

        if manager.get_database_backend() == sea_orm::DatabaseBackend::Postgres {
            manager
                .drop_type(PgType::drop().name(VotingStatusEnum::Type).if_exists().to_owned())
                .await?;
            manager
                .drop_type(PgType::drop().name(MemberRoleEnum::Type).if_exists().to_owned())
                .await?;
        }

        Ok(())
    }
}
