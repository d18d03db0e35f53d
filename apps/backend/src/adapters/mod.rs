//! Database adapters - generic over ConnectionTrait, return DbErr.

pub mod ballots_sea;
pub mod directory_sea;
pub mod sessions_sea;
pub mod standings_sea;
