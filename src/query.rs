//! In-memory filter and sort applied to the full record set on each read.

use crate::models::InspectionRecord;

/// Sort order for the list endpoint.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum SortBy {
    DateAsc,
    DateDesc,
    UnitNoAsc,
}

impl SortBy {
    /// Parses a `sort_by` query parameter. Missing or unrecognized values
    /// fall back to `date_desc`.
    pub fn parse(raw: Option<&str>) -> Self {
        match raw {
            Some("date_asc") => SortBy::DateAsc,
            Some("unit_no_asc") => SortBy::UnitNoAsc,
            _ => SortBy::DateDesc,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            SortBy::DateAsc => "date_asc",
            SortBy::DateDesc => "date_desc",
            SortBy::UnitNoAsc => "unit_no_asc",
        }
    }
}

impl Default for SortBy {
    fn default() -> Self {
        SortBy::DateDesc
    }
}

/// Filters then sorts the full record set.
///
/// The filter is a case-insensitive substring match on `unit_no`; an empty
/// (or all-whitespace) filter selects everything and relative order is
/// preserved. Sorting is stable. Date ordering is lexicographic on the raw
/// ISO string, which is correct for well-formed dates; malformed dates sort
/// by raw value.
pub fn apply(
    records: Vec<InspectionRecord>,
    filter_unit_no: &str,
    sort_by: SortBy,
) -> Vec<InspectionRecord> {
    let mut records = filter_by_unit_no(records, filter_unit_no);
    sort_records(&mut records, sort_by);
    records
}

fn filter_by_unit_no(records: Vec<InspectionRecord>, needle: &str) -> Vec<InspectionRecord> {
    let needle = needle.trim().to_lowercase();
    if needle.is_empty() {
        return records;
    }

    records
        .into_iter()
        .filter(|record| record.unit_no.to_lowercase().contains(&needle))
        .collect()
}

fn sort_records(records: &mut [InspectionRecord], sort_by: SortBy) {
    match sort_by {
        SortBy::DateAsc => records.sort_by(|a, b| a.date.cmp(&b.date)),
        SortBy::DateDesc => records.sort_by(|a, b| b.date.cmp(&a.date)),
        SortBy::UnitNoAsc => {
            records.sort_by(|a, b| a.unit_no.to_lowercase().cmp(&b.unit_no.to_lowercase()))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn record(id: i64, date: &str, unit_no: &str) -> InspectionRecord {
        InspectionRecord {
            id,
            date: date.to_string(),
            location: "Yard".to_string(),
            unit_no: unit_no.to_string(),
            serial_no: format!("SN-{id}"),
            manufacture_date: "2020-01-01".to_string(),
            condition: "Good".to_string(),
            inspector: "J. Smith".to_string(),
            weight: "10".parse().unwrap(),
            notes: String::new(),
            r#type: "Shackle".to_string(),
        }
    }

    fn sample() -> Vec<InspectionRecord> {
        vec![
            record(0, "2024-01-10", "A1"),
            record(1, "2024-03-05", "B2"),
            record(2, "2023-11-30", "a10"),
        ]
    }

    #[test]
    fn empty_filter_returns_everything() {
        let out = apply(sample(), "", SortBy::DateAsc);
        assert_eq!(out.len(), 3);
        let out = apply(sample(), "   ", SortBy::DateAsc);
        assert_eq!(out.len(), 3);
    }

    #[test]
    fn filter_is_case_insensitive_substring() {
        let out = apply(sample(), "a1", SortBy::DateAsc);
        let units: Vec<_> = out.iter().map(|r| r.unit_no.as_str()).collect();
        assert_eq!(units, vec!["a10", "A1"]);

        let out = apply(sample(), "B2", SortBy::DateAsc);
        assert_eq!(out.len(), 1);
        assert_eq!(out[0].unit_no, "B2");

        let out = apply(sample(), "zzz", SortBy::DateAsc);
        assert!(out.is_empty());
    }

    #[test]
    fn date_sorts_are_monotonic() {
        let asc = apply(sample(), "", SortBy::DateAsc);
        assert!(asc.windows(2).all(|w| w[0].date <= w[1].date));

        let desc = apply(sample(), "", SortBy::DateDesc);
        assert!(desc.windows(2).all(|w| w[0].date >= w[1].date));
    }

    #[test]
    fn unit_no_sort_ignores_case() {
        let out = apply(sample(), "", SortBy::UnitNoAsc);
        let units: Vec<_> = out.iter().map(|r| r.unit_no.as_str()).collect();
        assert_eq!(units, vec!["A1", "a10", "B2"]);
    }

    #[test]
    fn equal_keys_keep_original_order() {
        let records = vec![
            record(0, "2024-01-01", "C3"),
            record(1, "2024-01-01", "A1"),
            record(2, "2024-01-01", "B2"),
        ];
        let out = apply(records, "", SortBy::DateDesc);
        let ids: Vec<_> = out.iter().map(|r| r.id).collect();
        assert_eq!(ids, vec![0, 1, 2]);
    }

    #[test]
    fn unknown_sort_falls_back_to_date_desc() {
        assert_eq!(SortBy::parse(Some("date_asc")), SortBy::DateAsc);
        assert_eq!(SortBy::parse(Some("unit_no_asc")), SortBy::UnitNoAsc);
        assert_eq!(SortBy::parse(Some("date_desc")), SortBy::DateDesc);
        assert_eq!(SortBy::parse(Some("bogus")), SortBy::DateDesc);
        assert_eq!(SortBy::parse(None), SortBy::DateDesc);
    }

    #[test]
    fn newest_first_scenario() {
        let out = apply(sample(), "", SortBy::DateDesc);
        let units: Vec<_> = out.iter().map(|r| r.unit_no.as_str()).collect();
        assert_eq!(units, vec!["B2", "A1", "a10"]);
    }
}
