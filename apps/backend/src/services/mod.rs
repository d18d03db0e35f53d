//! Service layer - transaction-scoped orchestration over repos and domain.

pub mod voting;
