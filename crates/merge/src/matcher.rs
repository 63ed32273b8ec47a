use std::collections::HashMap;

use chrono::NaiveDate;

use crate::config::PassRule;
use crate::model::{DuplicateKey, LookupKey, PassedCandidate, ReportRow, RosterRow};

/// Roster lookups by key. Later rows overwrite earlier ones with the same key.
#[derive(Debug, Default)]
pub struct RosterIndex {
    roles: HashMap<LookupKey, Option<String>>,
    join_dates: HashMap<LookupKey, Option<NaiveDate>>,
}

impl RosterIndex {
    pub fn build(roster: &[RosterRow]) -> Self {
        let mut index = Self::default();
        for row in roster {
            let Some(key) = row.lookup_key() else {
                continue;
            };
            index.roles.insert(key.clone(), row.role.clone());
            index.join_dates.insert(key, row.join_date);
        }
        index
    }

    pub fn role(&self, key: &LookupKey) -> Option<&str> {
        self.roles.get(key).and_then(|r| r.as_deref())
    }

    pub fn join_date(&self, key: &LookupKey) -> Option<NaiveDate> {
        self.join_dates.get(key).copied().flatten()
    }

    /// The key is on the roster, whatever its role and join date hold.
    pub fn contains(&self, key: &LookupKey) -> bool {
        self.roles.contains_key(key)
    }

    pub fn len(&self) -> usize {
        self.roles.len()
    }

    pub fn is_empty(&self) -> bool {
        self.roles.is_empty()
    }
}

/// Interview outcome and status both match the rule. Non-text values never pass.
pub fn passes(row: &ReportRow, rule: &PassRule) -> bool {
    let interview_ok = row.interview.as_deref().is_some_and(|v| rule.interview_matches(v));
    let status_ok = row.status.as_deref().is_some_and(|v| rule.status_matches(v));
    interview_ok && status_ok
}

/// Filter report rows to passed interviews and left-join them to the roster.
///
/// Output keeps input order, one entry per passing row; rows without a
/// roster match keep their name and team member with role and join date
/// absent.
pub fn match_passed_candidates(
    reports: &[ReportRow],
    roster: &[RosterRow],
    rule: &PassRule,
) -> Vec<PassedCandidate> {
    let index = RosterIndex::build(roster);

    reports
        .iter()
        .filter(|row| passes(row, rule))
        .map(|row| {
            let key = row.lookup_key();
            PassedCandidate {
                employee_name: row.candidate_name.clone(),
                join_date: key.as_ref().and_then(|k| index.join_date(k)),
                role: key.as_ref().and_then(|k| index.role(k)).map(str::to_string),
                team_member: row.team_member.clone(),
                matched: key.as_ref().is_some_and(|k| index.contains(k)),
            }
        })
        .collect()
}

/// Roster keys that occur on more than one row, in first-seen order.
pub fn roster_duplicates(roster: &[RosterRow]) -> Vec<DuplicateKey> {
    let mut order: Vec<LookupKey> = Vec::new();
    let mut seen: HashMap<LookupKey, DuplicateKey> = HashMap::new();

    for row in roster {
        let Some(key) = row.lookup_key() else {
            continue;
        };
        seen.entry(key.clone())
            .and_modify(|d| d.occurrences += 1)
            .or_insert_with(|| {
                order.push(key);
                DuplicateKey {
                    employee_name: row.employee_name.clone(),
                    occurrences: 1,
                }
            });
    }

    order
        .into_iter()
        .filter_map(|key| seen.remove(&key))
        .filter(|d| d.occurrences > 1)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn report(name: &str, interview: &str, status: &str, team: &str) -> ReportRow {
        ReportRow {
            candidate_name: name.trim().into(),
            interview: Some(interview.into()),
            status: Some(status.into()),
            team_member: team.into(),
            raw_fields: HashMap::new(),
        }
    }

    fn roster(name: &str, role: &str, date: Option<(i32, u32, u32)>) -> RosterRow {
        RosterRow {
            employee_name: name.trim().into(),
            role: Some(role.into()),
            join_date: date.and_then(|(y, m, d)| NaiveDate::from_ymd_opt(y, m, d)),
            raw_fields: HashMap::new(),
        }
    }

    #[test]
    fn filter_is_case_and_whitespace_insensitive() {
        let rule = PassRule::default();
        assert!(passes(&report("A", "Yes ", " PASS", "t"), &rule));
        assert!(!passes(&report("A", "no", "pass", "t"), &rule));
        assert!(!passes(&report("A", "yes", "fail", "t"), &rule));
        assert!(!passes(&report("A", "yess", "pass", "t"), &rule));
    }

    #[test]
    fn non_text_outcome_never_passes() {
        let mut row = report("A", "yes", "pass", "t");
        row.interview = None;
        assert!(!passes(&row, &PassRule::default()));
    }

    #[test]
    fn joins_by_case_insensitive_name() {
        let reports = vec![report("Alice Smith", "yes", "Pass", "John Doe")];
        let roster = vec![roster("alice smith", "Engineer", Some((2024, 1, 15)))];

        let out = match_passed_candidates(&reports, &roster, &PassRule::default());
        assert_eq!(out.len(), 1);
        assert_eq!(out[0].employee_name, "Alice Smith");
        assert_eq!(out[0].role.as_deref(), Some("Engineer"));
        assert_eq!(out[0].join_date, NaiveDate::from_ymd_opt(2024, 1, 15));
        assert_eq!(out[0].team_member, "John Doe");
    }

    #[test]
    fn unmatched_candidate_is_kept() {
        let reports = vec![report("Carol", "yes", "pass", "Jane Roe")];
        let out = match_passed_candidates(&reports, &[], &PassRule::default());
        assert_eq!(out.len(), 1);
        assert_eq!(out[0].employee_name, "Carol");
        assert_eq!(out[0].team_member, "Jane Roe");
        assert!(out[0].role.is_none());
        assert!(out[0].join_date.is_none());
        assert!(!out[0].is_matched());
    }

    #[test]
    fn roster_row_with_blank_fields_still_counts_as_matched() {
        let reports = vec![report("Gus", "yes", "pass", "t")];
        let mut row = roster("Gus", "", None);
        row.role = None;

        let out = match_passed_candidates(&reports, &[row], &PassRule::default());
        assert!(out[0].role.is_none());
        assert!(out[0].join_date.is_none());
        assert!(out[0].is_matched());
    }

    #[test]
    fn duplicates_resolve_last_write_wins() {
        let reports = vec![report("Dan", "yes", "pass", "t")];
        let roster = vec![
            roster("Dan", "Intern", Some((2024, 1, 1))),
            roster(" DAN ", "Analyst", None),
        ];
        let out = match_passed_candidates(&reports, &roster, &PassRule::default());
        assert_eq!(out[0].role.as_deref(), Some("Analyst"));
        assert_eq!(out[0].join_date, None);
    }

    #[test]
    fn order_follows_input_and_no_dedup() {
        let reports = vec![
            report("Zed", "yes", "pass", "a"),
            report("Amy", "no", "pass", "a"),
            report("Amy", "yes", "pass", "b"),
            report("Zed", "yes", "pass", "b"),
        ];
        let out = match_passed_candidates(&reports, &[], &PassRule::default());
        let names: Vec<_> = out.iter().map(|c| (c.employee_name.as_str(), c.team_member.as_str())).collect();
        assert_eq!(names, [("Zed", "a"), ("Amy", "b"), ("Zed", "b")]);
    }

    #[test]
    fn blank_names_never_match() {
        let reports = vec![report("", "yes", "pass", "t")];
        let roster = vec![roster("", "Ghost", Some((2024, 1, 1)))];
        let out = match_passed_candidates(&reports, &roster, &PassRule::default());
        assert_eq!(out.len(), 1);
        assert!(out[0].role.is_none());
    }

    #[test]
    fn duplicate_keys_are_reported_in_first_seen_order() {
        let roster = vec![
            roster("Dan", "Intern", None),
            roster("Eve", "Ops", None),
            roster("dan", "Analyst", None),
            roster("Fay", "HR", None),
            roster("EVE ", "Ops", None),
            roster("DAN", "Lead", None),
        ];
        let dups = roster_duplicates(&roster);
        assert_eq!(
            dups,
            vec![
                DuplicateKey { employee_name: "Dan".into(), occurrences: 3 },
                DuplicateKey { employee_name: "Eve".into(), occurrences: 2 },
            ]
        );
    }
}
