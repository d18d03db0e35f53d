//! Infrastructure layer - database connectivity and error translation.

pub mod db;
pub mod db_errors;
