//! Domain layer: pure voting logic, no DB and no async.

pub mod ballot;
pub mod eligibility;
pub mod tally;

#[cfg(test)]
mod test_prelude;
#[cfg(test)]
mod tests_ballot;
#[cfg(test)]
mod tests_eligibility;
#[cfg(test)]
mod tests_props_tally;
#[cfg(test)]
mod tests_tally;

// Re-exports for ergonomics
pub use ballot::{validate_nominees, NomineeDraft, Nominees};
pub use eligibility::{is_window_open, voting_reference_end, window_closes_at, VOTING_WINDOW};
pub use tally::{points, tally, Standing};
