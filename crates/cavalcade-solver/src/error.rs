//! Solver error type.

/// Failure to produce a complete tour.
///
/// Timeout expiry and algorithmic dead ends surface identically; the cause
/// cannot be distinguished from the value. Only complete 64-square tours are
/// ever reported as success, so this error also covers searches that made
/// partial progress.
#[derive(Debug, Clone, Copy, PartialEq, Eq, derive_more::Display, derive_more::Error)]
#[display("no complete knight's tour found within the search budget")]
pub struct SolveError;
