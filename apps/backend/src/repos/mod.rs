//! Repository layer - domain models over the SeaORM adapters.

pub mod ballots;
pub mod directory;
pub mod sessions;
pub mod standings;
