use crate::core::{Dataset, OutputRow, RawRecord};
use crate::domain::model::cell_text;
use chrono::{DateTime, SecondsFormat, Utc};

/// Splits a full name into `(first, last)`.
///
/// The first whitespace-delimited token is the first name; the remaining
/// tokens are rejoined with single spaces. Blank or missing names give two
/// empty strings.
pub fn split_name(full_name: Option<&str>) -> (String, String) {
    let mut parts = full_name
        .unwrap_or_default()
        .split(is_name_separator)
        .filter(|part| !part.is_empty());

    match parts.next() {
        Some(first) => (first.to_string(), parts.collect::<Vec<_>>().join(" ")),
        None => (String::new(), String::new()),
    }
}

/// Unicode whitespace plus the ASCII information separators `\x1c`..=`\x1f`.
fn is_name_separator(c: char) -> bool {
    c.is_whitespace() || ('\x1c'..='\x1f').contains(&c)
}

/// `2024-03-01T12:00:00Z`: UTC, whole seconds, `Z` designator.
pub fn refresh_timestamp(now: DateTime<Utc>) -> String {
    now.to_rfc3339_opts(SecondsFormat::Secs, true)
}

pub fn transform_record(record: &RawRecord, refreshed_at: &str) -> OutputRow {
    let (first_name, last_name) = split_name(record.full_name());

    OutputRow {
        customer_id: cell_text(record.id.as_ref()),
        first_name,
        last_name,
        email: cell_text(record.email.as_ref()),
        company: cell_text(record.company_name()),
        city: cell_text(record.city()),
        last_refreshed_utc: refreshed_at.to_string(),
    }
}

/// Maps every record to exactly one row, in order, all sharing one refresh stamp.
pub fn transform(records: &[RawRecord], now: DateTime<Utc>) -> Dataset {
    let refreshed_at = refresh_timestamp(now);

    records
        .iter()
        .map(|record| transform_record(record, &refreshed_at))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;
    use serde_json::json;

    fn fixed_now() -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2024, 3, 1, 12, 30, 45).unwrap()
    }

    #[test]
    fn test_split_name_scenarios() {
        assert_eq!(
            split_name(Some("Leanne Graham")),
            ("Leanne".to_string(), "Graham".to_string())
        );
        assert_eq!(split_name(Some("Cher")), ("Cher".to_string(), String::new()));
        assert_eq!(split_name(Some("")), (String::new(), String::new()));
        assert_eq!(split_name(None), (String::new(), String::new()));
        assert_eq!(
            split_name(Some("Mary Jane Watson")),
            ("Mary".to_string(), "Jane Watson".to_string())
        );
    }

    #[test]
    fn test_split_name_collapses_whitespace() {
        assert_eq!(
            split_name(Some("  Mrs.   Dennis\tSchulist ")),
            ("Mrs.".to_string(), "Dennis Schulist".to_string())
        );
        assert_eq!(split_name(Some("   ")), (String::new(), String::new()));
    }

    #[test]
    fn test_split_name_on_separator_controls_and_unicode_spaces() {
        assert_eq!(
            split_name(Some("Ann\x1fLee")),
            ("Ann".to_string(), "Lee".to_string())
        );
        assert_eq!(
            split_name(Some("\x1cKurtis\x1dWeissnat\x1e")),
            ("Kurtis".to_string(), "Weissnat".to_string())
        );
        assert_eq!(
            split_name(Some("Chelsey\u{00a0}Dietrich\u{3000}Jr.")),
            ("Chelsey".to_string(), "Dietrich Jr.".to_string())
        );
    }

    #[test]
    fn test_refresh_timestamp_format() {
        assert_eq!(refresh_timestamp(fixed_now()), "2024-03-01T12:30:45Z");

        let with_millis = fixed_now() + chrono::Duration::milliseconds(987);
        assert_eq!(refresh_timestamp(with_millis), "2024-03-01T12:30:45Z");
    }

    #[test]
    fn test_transform_full_record() {
        let records = vec![RawRecord::from_value(json!({
            "id": 1,
            "name": "Leanne Graham",
            "email": "Sincere@april.biz",
            "company": {"name": "Romaguera-Crona"},
            "address": {"city": "Gwenborough"}
        }))];

        let rows = transform(&records, fixed_now());

        assert_eq!(
            rows,
            vec![OutputRow {
                customer_id: Some("1".to_string()),
                first_name: "Leanne".to_string(),
                last_name: "Graham".to_string(),
                email: Some("Sincere@april.biz".to_string()),
                company: Some("Romaguera-Crona".to_string()),
                city: Some("Gwenborough".to_string()),
                last_refreshed_utc: "2024-03-01T12:30:45Z".to_string(),
            }]
        );
    }

    #[test]
    fn test_transform_missing_fields_degrade_to_empty() {
        let records = vec![
            RawRecord::from_value(json!({})),
            RawRecord::from_value(json!({"company": null, "address": {}})),
            RawRecord::from_value(json!({"company": "Acme", "address": ["Gwenborough"]})),
            RawRecord::from_value(json!({"name": 12345})),
            RawRecord::from_value(json!("not a record")),
        ];

        let rows = transform(&records, fixed_now());

        assert_eq!(rows.len(), records.len());
        for row in &rows {
            assert_eq!(row.customer_id, None);
            assert_eq!(row.first_name, "");
            assert_eq!(row.last_name, "");
            assert_eq!(row.email, None);
            assert_eq!(row.company, None);
            assert_eq!(row.city, None);
            assert_eq!(row.last_refreshed_utc, "2024-03-01T12:30:45Z");
        }
    }

    #[test]
    fn test_transform_passes_id_through_verbatim() {
        let records = vec![
            RawRecord::from_value(json!({"id": "cust-0042"})),
            RawRecord::from_value(json!({"id": 42})),
        ];

        let rows = transform(&records, fixed_now());

        assert_eq!(rows[0].customer_id.as_deref(), Some("cust-0042"));
        assert_eq!(rows[1].customer_id.as_deref(), Some("42"));
    }

    #[test]
    fn test_transform_shares_one_timestamp_and_keeps_order() {
        let records: Vec<RawRecord> = (1..=50)
            .map(|i| RawRecord::from_value(json!({"id": i, "name": format!("User {}", i)})))
            .collect();

        let rows = transform(&records, fixed_now());

        assert_eq!(rows.len(), 50);
        assert!(rows
            .iter()
            .all(|r| r.last_refreshed_utc == rows[0].last_refreshed_utc));
        for (i, row) in rows.iter().enumerate() {
            assert_eq!(row.customer_id, Some((i + 1).to_string()));
            assert_eq!(row.last_name, (i + 1).to_string());
        }
    }

    #[test]
    fn test_transform_is_deterministic() {
        let records = vec![
            RawRecord::from_value(json!({"id": 1, "name": "Ervin Howell", "email": "Shanna@melissa.tv"})),
            RawRecord::from_value(json!({"id": 2, "company": {"name": "Deckow-Crist"}})),
        ];

        assert_eq!(transform(&records, fixed_now()), transform(&records, fixed_now()));
    }

    #[test]
    fn test_transform_empty_input() {
        assert!(transform(&[], fixed_now()).is_empty());
    }
}
