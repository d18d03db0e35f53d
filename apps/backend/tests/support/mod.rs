//! Shared fixtures for DB-backed tests.
//!
//! Tests run against in-memory SQLite with the full migration set applied.
//! The pool is pinned to a single connection so every transaction sees the
//! same database.

use clubhub_backend::entities::team_members::MemberRole;
use clubhub_backend::entities::voting_sessions::{self, VotingStatus};
use clubhub_backend::entities::{matches, players, team_members};
use clubhub_backend::state::app_state::AppState;
use migration::{Migrator, MigratorTrait};
use sea_orm::{ActiveModelTrait, ConnectOptions, ConnectionTrait, Database, NotSet, Set};
use time::OffsetDateTime;
use uuid::Uuid;

pub async fn test_state() -> AppState {
    let mut opts = ConnectOptions::new("sqlite::memory:".to_owned());
    opts.max_connections(1);
    let db = Database::connect(opts)
        .await
        .expect("connect to in-memory sqlite");
    Migrator::up(&db, None).await.expect("apply migrations");
    AppState::new(db)
}

pub async fn seed_match<C: ConnectionTrait>(
    conn: &C,
    team_id: Uuid,
    kickoff_at: OffsetDateTime,
    ended_at: Option<OffsetDateTime>,
) -> Uuid {
    let now = OffsetDateTime::now_utc();
    let id = Uuid::new_v4();
    let m = matches::ActiveModel {
        id: Set(id),
        team_id: Set(team_id),
        opponent: Set("Rovers".to_string()),
        kickoff_at: Set(kickoff_at),
        ended_at: Set(ended_at),
        created_at: Set(now),
        updated_at: Set(now),
    };
    m.insert(conn).await.expect("seed match");
    id
}

pub async fn seed_player<C: ConnectionTrait>(conn: &C, team_id: Uuid, name: &str) -> Uuid {
    let now = OffsetDateTime::now_utc();
    let id = Uuid::new_v4();
    let p = players::ActiveModel {
        id: Set(id),
        team_id: Set(team_id),
        display_name: Set(name.to_string()),
        created_at: Set(now),
        updated_at: Set(now),
    };
    p.insert(conn).await.expect("seed player");
    id
}

pub async fn seed_open_session<C: ConnectionTrait>(conn: &C, match_id: Uuid) {
    let now = OffsetDateTime::now_utc();
    let s = voting_sessions::ActiveModel {
        match_id: Set(match_id),
        status: Set(VotingStatus::Open),
        closed_by: Set(None),
        closed_at: Set(None),
        created_at: Set(now),
    };
    s.insert(conn).await.expect("seed open session");
}

pub async fn seed_member<C: ConnectionTrait>(
    conn: &C,
    team_id: Uuid,
    user_id: Uuid,
    role: MemberRole,
) {
    let now = OffsetDateTime::now_utc();
    let m = team_members::ActiveModel {
        id: NotSet,
        team_id: Set(team_id),
        user_id: Set(user_id),
        role: Set(role),
        created_at: Set(now),
    };
    m.insert(conn).await.expect("seed team member");
}
