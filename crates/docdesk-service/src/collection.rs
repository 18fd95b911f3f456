//! Pure search and sort operations over an ordered record sequence.
//!
//! None of these mutate their input. Sorts are stable: records with equal
//! keys keep their relative input order in either direction.

use std::cmp::Ordering;

use chrono::NaiveDate;
use feruca::Collator;
use tracing::warn;

use docdesk_core::types::{SortDirection, SortKey};
use docdesk_entity::{DateParseError, Record};

/// Case-insensitive substring match on `name`.
///
/// A blank term returns every record in its original order.
pub fn search(records: &[Record], term: &str) -> Vec<Record> {
    let term = term.trim();
    if term.is_empty() {
        return records.to_vec();
    }
    let needle = term.to_lowercase();
    records
        .iter()
        .filter(|record| record.name.to_lowercase().contains(&needle))
        .cloned()
        .collect()
}

/// Sort by name, ignoring case.
///
/// Names are compared with the Unicode Collation Algorithm (CLDR root
/// order), so accented letters sort beside their base letters.
pub fn sort_by_name(records: &[Record], direction: SortDirection) -> Vec<Record> {
    let mut collator = Collator::default();
    let mut keyed: Vec<(String, &Record)> = records.iter().map(|r| (r.name_key(), r)).collect();
    keyed.sort_by(|(a, _), (b, _)| direction.apply(collator.collate(a.as_str(), b.as_str())));
    keyed.into_iter().map(|(_, r)| r.clone()).collect()
}

/// Sort by parsed creation date.
///
/// Records whose date does not parse are placed after every dated record,
/// in input order, whichever the direction. Each one is reported with a
/// warning.
pub fn sort_by_date(records: &[Record], direction: SortDirection) -> Vec<Record> {
    let mut keyed: Vec<(Option<NaiveDate>, &Record)> = records
        .iter()
        .map(|record| match record.created_on() {
            Ok(date) => (Some(date), record),
            Err(err) => {
                warn!(record_id = %record.id, error = %err, "Sorting undated record last");
                (None, record)
            }
        })
        .collect();

    keyed.sort_by(|(a, _), (b, _)| match (a, b) {
        (Some(a), Some(b)) => direction.apply(a.cmp(b)),
        (Some(_), None) => Ordering::Less,
        (None, Some(_)) => Ordering::Greater,
        (None, None) => Ordering::Equal,
    });
    keyed.into_iter().map(|(_, r)| r.clone()).collect()
}

/// Sort by the given key.
pub fn sort_by(records: &[Record], key: SortKey, direction: SortDirection) -> Vec<Record> {
    match key {
        SortKey::Name => sort_by_name(records, direction),
        SortKey::Date => sort_by_date(records, direction),
    }
}

/// Every record date that fails to parse, in input order.
pub fn unparseable_dates(records: &[Record]) -> Vec<DateParseError> {
    records
        .iter()
        .filter_map(|record| record.created_on().err())
        .collect()
}

#[cfg(test)]
mod tests {
    use docdesk_core::types::RecordId;
    use docdesk_entity::RecordKind;

    use super::*;

    fn record(id: i64, name: &str, date: &str) -> Record {
        Record {
            id: RecordId(id),
            name: name.to_string(),
            kind: RecordKind::File,
            created_by: "John Green".to_string(),
            created_date: date.to_string(),
            size: "1.0 KB".to_string(),
        }
    }

    fn ids(records: &[Record]) -> Vec<i64> {
        records.iter().map(|r| r.id.get()).collect()
    }

    #[test]
    fn test_search_blank_term_is_identity() {
        let records = vec![record(2, "b", "01 Jan 2024"), record(1, "a", "01 Jan 2024")];
        assert_eq!(search(&records, ""), records);
        assert_eq!(search(&records, "   "), records);
    }

    #[test]
    fn test_search_case_insensitive_substring() {
        let records = vec![
            record(1, "Board Meetings", "25 Dec 2023"),
            record(2, "2023_12_25_Board_Meeting_Notes.pdf", "25 Dec 2023"),
            record(3, "Finance", "01 Apr 2024"),
        ];
        assert_eq!(ids(&search(&records, "board")), vec![1, 2]);
        assert_eq!(ids(&search(&records, "  FIN ")), vec![3]);
        assert!(search(&records, "zzz").is_empty());
    }

    #[test]
    fn test_sort_by_date_desc_scenario() {
        let records = vec![
            record(1, "a", "01 Jan 2024"),
            record(2, "b", "15 Jun 2023"),
            record(3, "c", "03 Mar 2025"),
        ];
        let sorted = sort_by_date(&records, SortDirection::Desc);
        let dates: Vec<&str> = sorted.iter().map(|r| r.created_date.as_str()).collect();
        assert_eq!(dates, vec!["03 Mar 2025", "01 Jan 2024", "15 Jun 2023"]);
    }

    #[test]
    fn test_sort_by_name_ignores_case() {
        let records = vec![
            record(1, "beta", "01 Jan 2024"),
            record(2, "Alpha", "01 Jan 2024"),
            record(3, "Gamma", "01 Jan 2024"),
        ];
        assert_eq!(ids(&sort_by_name(&records, SortDirection::Asc)), vec![2, 1, 3]);
        assert_eq!(ids(&sort_by_name(&records, SortDirection::Desc)), vec![3, 1, 2]);
    }

    #[test]
    fn test_sort_by_name_collates_accented_letters() {
        let records = vec![
            record(1, "zebra", "01 Jan 2024"),
            record(2, "Éclair", "01 Jan 2024"),
            record(3, "apple", "01 Jan 2024"),
            record(4, "Ödeme", "01 Jan 2024"),
        ];
        let names = |sorted: Vec<Record>| -> Vec<String> {
            sorted.into_iter().map(|r| r.name).collect()
        };
        assert_eq!(
            names(sort_by_name(&records, SortDirection::Asc)),
            vec!["apple", "Éclair", "Ödeme", "zebra"]
        );
        assert_eq!(
            names(sort_by_name(&records, SortDirection::Desc)),
            vec!["zebra", "Ödeme", "Éclair", "apple"]
        );
    }

    #[test]
    fn test_sort_is_stable_for_ties_in_both_directions() {
        let records = vec![
            record(1, "same", "01 Jan 2024"),
            record(2, "other", "02 Jan 2024"),
            record(3, "SAME", "01 Jan 2024"),
        ];
        assert_eq!(ids(&sort_by_name(&records, SortDirection::Asc)), vec![2, 1, 3]);
        assert_eq!(ids(&sort_by_name(&records, SortDirection::Desc)), vec![1, 3, 2]);
        assert_eq!(ids(&sort_by_date(&records, SortDirection::Asc)), vec![1, 3, 2]);
        assert_eq!(ids(&sort_by_date(&records, SortDirection::Desc)), vec![2, 1, 3]);
    }

    #[test]
    fn test_sort_is_idempotent() {
        let records = vec![
            record(1, "c", "03 Mar 2025"),
            record(2, "a", "01 Jan 2024"),
            record(3, "b", "15 Jun 2023"),
        ];
        for key in [SortKey::Name, SortKey::Date] {
            for direction in [SortDirection::Asc, SortDirection::Desc] {
                let once = sort_by(&records, key, direction);
                let twice = sort_by(&once, key, direction);
                assert_eq!(once, twice);
            }
        }
    }

    #[test]
    fn test_unparseable_dates_sort_last_in_input_order() {
        let records = vec![
            record(1, "a", "not a date"),
            record(2, "b", "01 Jan 2024"),
            record(3, "c", ""),
            record(4, "d", "03 Mar 2025"),
        ];
        assert_eq!(ids(&sort_by_date(&records, SortDirection::Asc)), vec![2, 4, 1, 3]);
        assert_eq!(ids(&sort_by_date(&records, SortDirection::Desc)), vec![4, 2, 1, 3]);

        let failures = unparseable_dates(&records);
        assert_eq!(failures.len(), 2);
        assert_eq!(failures[0].value, "not a date");
    }

    #[test]
    fn test_sort_does_not_mutate_input() {
        let records = vec![record(1, "b", "01 Jan 2024"), record(2, "a", "02 Jan 2024")];
        let before = records.clone();
        let _ = sort_by_name(&records, SortDirection::Asc);
        let _ = sort_by_date(&records, SortDirection::Desc);
        assert_eq!(records, before);
    }
}
