//! Input validation for rosters and conflict declarations.
//!
//! Checks structural integrity before grouping. Detects:
//! - Duplicate participant IDs
//! - Conflict pairs naming the same participant twice
//! - The same pair declared more than once
//! - Pairs naming participants missing from the roster
//!
//! None of these stop the engine from running: duplicates and reflexive
//! pairs collapse or are skipped when the conflict model is built, and
//! unknown members are inert. Validation reports them so the caller can
//! fix the data.

use crate::models::{ConflictPair, Participant};
use std::collections::HashSet;

/// Validation result.
pub type ValidationResult = Result<(), Vec<ValidationError>>;

/// A validation error.
#[derive(Debug, Clone, PartialEq)]
pub struct ValidationError {
    /// Error category.
    pub kind: ValidationErrorKind,
    /// Human-readable description.
    pub message: String,
}

/// Categories of validation errors.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ValidationErrorKind {
    /// Two participants share the same ID.
    DuplicateId,
    /// A conflict pair references one participant twice.
    SelfConflict,
    /// The same unordered pair is declared more than once.
    DuplicateConflict,
    /// A conflict pair references an ID not on the roster.
    UnknownConflictMember,
}

impl ValidationError {
    fn new(kind: ValidationErrorKind, message: impl Into<String>) -> Self {
        Self {
            kind,
            message: message.into(),
        }
    }
}

/// Validates a roster and its conflict declarations.
///
/// Checks:
/// 1. No duplicate participant IDs
/// 2. No reflexive conflict pairs
/// 3. No duplicate conflict pairs (in either order)
/// 4. Every conflict member is on the roster
///
/// # Returns
/// `Ok(())` if all checks pass, `Err(errors)` with all detected issues.
pub fn validate_roster(roster: &[Participant], pairs: &[ConflictPair]) -> ValidationResult {
    let mut errors = Vec::new();

    let mut ids = HashSet::new();
    for p in roster {
        if !ids.insert(p.id.as_str()) {
            errors.push(ValidationError::new(
                ValidationErrorKind::DuplicateId,
                format!("Duplicate participant ID: {}", p.id),
            ));
        }
    }

    let mut seen_pairs = HashSet::new();
    for pair in pairs {
        if pair.is_reflexive() {
            errors.push(ValidationError::new(
                ValidationErrorKind::SelfConflict,
                format!("Participant '{}' is in conflict with itself", pair.members[0]),
            ));
            continue;
        }

        let (a, b) = pair.key();
        if !seen_pairs.insert((a, b)) {
            errors.push(ValidationError::new(
                ValidationErrorKind::DuplicateConflict,
                format!("Conflict between '{a}' and '{b}' is declared more than once"),
            ));
        }

        for member in &pair.members {
            if !ids.contains(member.as_str()) {
                errors.push(ValidationError::new(
                    ValidationErrorKind::UnknownConflictMember,
                    format!("Conflict references unknown participant '{member}'"),
                ));
            }
        }
    }

    if errors.is_empty() {
        Ok(())
    } else {
        tracing::debug!(count = errors.len(), "roster validation found issues");
        Err(errors)
    }
}
