// Moderation domain models - the warning ledger's vocabulary.
//
// Pure domain types with no Discord dependencies.

use thiserror::Error;

/// Placeholder used whenever a moderator leaves the reason out.
pub const DEFAULT_REASON: &str = "No reason provided";

/// Normalizes a free-text reason argument.
///
/// Missing or blank reasons fall back to [`DEFAULT_REASON`]; anything else is
/// trimmed and kept as typed.
pub fn reason_or_default(raw: Option<&str>) -> String {
    raw.map(str::trim)
        .filter(|reason| !reason.is_empty())
        .unwrap_or(DEFAULT_REASON)
        .to_string()
}

#[derive(Debug, Error)]
pub enum WarningError {
    #[error("Warning reason must not be empty")]
    EmptyReason,
}
