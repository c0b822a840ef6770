//! Roster filtering.
//!
//! Derives the eligible participant set from a full roster and the
//! current session's attendance flags.

use crate::models::{AttendanceMap, Participant};

/// Returns the participants eligible for grouping and selection.
///
/// With `include_absent` every participant is returned. Otherwise only
/// participants marked present are kept; participants missing from
/// `attendance` count as present. Roster order is preserved.
///
/// # Example
/// ```
/// use u_grouping::models::{AttendanceMap, Participant};
/// use u_grouping::roster::filter_eligible;
///
/// let roster = vec![Participant::new("S1"), Participant::new("S2")];
/// let attendance = AttendanceMap::from([("S2".to_string(), false)]);
///
/// let eligible = filter_eligible(&roster, &attendance, false);
/// assert_eq!(eligible.len(), 1);
/// assert_eq!(eligible[0].id, "S1");
/// ```
pub fn filter_eligible(
    roster: &[Participant],
    attendance: &AttendanceMap,
    include_absent: bool,
) -> Vec<Participant> {
    if include_absent {
        return roster.to_vec();
    }
    let eligible: Vec<Participant> = roster
        .iter()
        .filter(|p| is_present(attendance, &p.id))
        .cloned()
        .collect();
    tracing::debug!(
        roster = roster.len(),
        eligible = eligible.len(),
        "filtered roster by attendance"
    );
    eligible
}

/// Attendance flag for `id`, defaulting to present.
pub fn is_present(attendance: &AttendanceMap, id: &str) -> bool {
    attendance.get(id).copied().unwrap_or(true)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn roster() -> Vec<Participant> {
        ["A", "B", "C", "D"]
            .into_iter()
            .map(|id| Participant::new(id).with_name(format!("Student {id}")))
            .collect()
    }

    #[test]
    fn test_absent_filtered_out() {
        let attendance =
            AttendanceMap::from([("B".to_string(), false), ("C".to_string(), true)]);
        let eligible = filter_eligible(&roster(), &attendance, false);
        let ids: Vec<&str> = eligible.iter().map(|p| p.id.as_str()).collect();
        assert_eq!(ids, vec!["A", "C", "D"]);
    }

    #[test]
    fn test_include_absent_returns_all() {
        let attendance = AttendanceMap::from([("B".to_string(), false)]);
        assert_eq!(filter_eligible(&roster(), &attendance, true), roster());
    }

    #[test]
    fn test_missing_entries_count_as_present() {
        let eligible = filter_eligible(&roster(), &AttendanceMap::new(), false);
        assert_eq!(eligible, roster());
    }

    #[test]
    fn test_order_preserved() {
        let reversed: Vec<Participant> = roster().into_iter().rev().collect();
        let attendance = AttendanceMap::from([("A".to_string(), false)]);
        let ids: Vec<String> = filter_eligible(&reversed, &attendance, false)
            .into_iter()
            .map(|p| p.id)
            .collect();
        assert_eq!(ids, vec!["D", "C", "B"]);
    }

    #[test]
    fn test_empty_roster() {
        assert!(filter_eligible(&[], &AttendanceMap::new(), false).is_empty());
    }
}
