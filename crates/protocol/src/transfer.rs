//! Export and import of the card collection.
//!
//! An exported document is a pretty-printed JSON array of [`Card`] records.
//! Import only insists on the top level being an array. Records are read
//! leniently so hand-edited files still load; missing or unreadable fields
//! fall back to defaults. Accepted documents replace the whole board, so the
//! caller must ask for confirmation first (see [`import_prompt`]).

use chrono::{DateTime, NaiveDate, Utc};
use serde_json::{Map, Value};
use thiserror::Error;

use crate::card::{Card, CardId, Status};
use crate::error::{ProtocolError, Result};

/// Notice shown when an import file is rejected.
pub const INVALID_IMPORT_NOTICE: &str = "Invalid file format. Expected a JSON array of cards.";

/// Why an import document was rejected.
#[derive(Debug, Error)]
pub enum ImportError {
    /// The text is not valid JSON.
    #[error("import file is not valid JSON: {0}")]
    Malformed(#[source] serde_json::Error),

    /// The document parsed, but its top level is not an array.
    #[error("import file must contain a JSON array, found {found}")]
    NotAnArray {
        /// The JSON kind that was found instead.
        found: &'static str,
    },

    /// An element of the array cannot be represented as a card.
    #[error("import file contains an unreadable card at position {index}: {reason}")]
    InvalidCard {
        /// Position of the element in the array.
        index: usize,
        /// What is wrong with it.
        reason: String,
    },
}

/// Serializes cards as a human-readable export document.
///
/// # Errors
///
/// Returns [`ProtocolError::SerializationFailed`] if serialization fails.
pub fn export_document(cards: &[Card]) -> Result<String> {
    serde_json::to_string_pretty(cards).map_err(ProtocolError::SerializationFailed)
}

/// File name suggested for an export made on `date`.
///
/// # Examples
///
/// ```
/// use chrono::NaiveDate;
/// use tracker_protocol::export_file_name;
///
/// let date = NaiveDate::from_ymd_opt(2024, 1, 10).unwrap();
/// assert_eq!(export_file_name(date), "project-tracker-2024-01-10.json");
/// ```
#[must_use]
pub fn export_file_name(date: NaiveDate) -> String {
    format!("project-tracker-{}.json", date.format("%Y-%m-%d"))
}

/// Parses an import document.
///
/// Cards are taken as-is: there is no de-duplication and no merge with the
/// current board. Each record only has to be an object whose `status`, if
/// present, names a column. Everything else is filled in:
///
/// - a missing or unparsable `id` gets a fresh one;
/// - a missing `status` means backlog;
/// - missing text fields are empty and an unreadable `deadline` is dropped;
/// - missing or unreadable timestamps become `now`.
///
/// # Errors
///
/// Returns an [`ImportError`] if the text is not JSON, is not an array, or
/// holds an element that is not an object or has an unknown status.
///
/// # Examples
///
/// ```
/// use chrono::Utc;
/// use tracker_protocol::{parse_import, ImportError};
///
/// let now = Utc::now();
/// assert!(parse_import("[]", now).unwrap().is_empty());
/// assert!(matches!(parse_import("{}", now), Err(ImportError::NotAnArray { .. })));
/// assert!(matches!(parse_import("nope", now), Err(ImportError::Malformed(_))));
///
/// let cards = parse_import(r#"[{"title": "hand written"}]"#, now).unwrap();
/// assert_eq!(cards[0].title, "hand written");
/// assert_eq!(cards[0].created_at, now);
/// ```
pub fn parse_import(
    text: &str,
    now: DateTime<Utc>,
) -> std::result::Result<Vec<Card>, ImportError> {
    let value: Value = serde_json::from_str(text).map_err(ImportError::Malformed)?;
    let records = match value {
        Value::Array(records) => records,
        other => {
            return Err(ImportError::NotAnArray {
                found: json_kind(&other),
            });
        }
    };
    records
        .into_iter()
        .enumerate()
        .map(|(index, record)| card_from_record(index, record, now))
        .collect()
}

fn card_from_record(
    index: usize,
    record: Value,
    now: DateTime<Utc>,
) -> std::result::Result<Card, ImportError> {
    let fields = match record {
        Value::Object(fields) => fields,
        other => {
            return Err(ImportError::InvalidCard {
                index,
                reason: format!("expected an object, found {}", json_kind(&other)),
            });
        }
    };

    let status = match text_field(&fields, "status") {
        Some(status) => status.parse::<Status>().map_err(|e| ImportError::InvalidCard {
            index,
            reason: e.to_string(),
        })?,
        None => Status::Backlog,
    };
    let created_at = timestamp_field(&fields, "createdAt").unwrap_or(now);
    let updated_at = timestamp_field(&fields, "updatedAt")
        .unwrap_or(now)
        .max(created_at);

    Ok(Card {
        id: text_field(&fields, "id")
            .and_then(|id| CardId::parse_str(id).ok())
            .unwrap_or_else(CardId::new_v4),
        title: text_field(&fields, "title").unwrap_or_default().to_string(),
        description: text_field(&fields, "description")
            .unwrap_or_default()
            .to_string(),
        project: text_field(&fields, "project").unwrap_or_default().to_string(),
        deadline: text_field(&fields, "deadline")
            .and_then(|date| NaiveDate::parse_from_str(date, "%Y-%m-%d").ok()),
        status,
        created_at,
        updated_at,
    })
}

fn text_field<'a>(fields: &'a Map<String, Value>, key: &str) -> Option<&'a str> {
    fields.get(key).and_then(Value::as_str)
}

fn timestamp_field(fields: &Map<String, Value>, key: &str) -> Option<DateTime<Utc>> {
    let text = text_field(fields, key)?;
    DateTime::parse_from_rfc3339(text)
        .ok()
        .map(|stamp| stamp.with_timezone(&Utc))
}

/// Confirmation text shown before an import replaces the board.
#[must_use]
pub fn import_prompt(count: usize) -> String {
    format!("Import {count} cards? This will replace all current data.")
}

fn json_kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Array(_) => "an array",
        Value::Object(_) => "an object",
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::card::CardDraft;
    use chrono::TimeZone;

    fn import_time() -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2024, 2, 1, 12, 0, 0).unwrap()
    }

    fn fixed_card() -> Card {
        let now = Utc.with_ymd_and_hms(2024, 1, 10, 9, 30, 0).unwrap();
        Card::with_id(
            CardId::from_u128(1),
            CardDraft::new("Write docs")
                .unwrap()
                .with_project("web")
                .with_deadline(NaiveDate::from_ymd_opt(2024, 1, 12))
                .with_status(Status::InProgress),
            now,
        )
    }

    #[test]
    fn export_document_format() {
        let doc = export_document(&[fixed_card()]).unwrap();
        insta::assert_snapshot!(doc, @r#"
        [
          {
            "id": "00000000-0000-0000-0000-000000000001",
            "title": "Write docs",
            "description": "",
            "project": "web",
            "deadline": "2024-01-12",
            "status": "in-progress",
            "createdAt": "2024-01-10T09:30:00Z",
            "updatedAt": "2024-01-10T09:30:00Z"
          }
        ]
        "#);
    }

    #[test]
    fn export_of_empty_board_is_empty_array() {
        assert_eq!(export_document(&[]).unwrap(), "[]");
    }

    #[test]
    fn export_then_import_roundtrips() {
        let mut other = fixed_card();
        other.id = CardId::from_u128(2);
        other.deadline = None;
        other.project.clear();
        let cards = vec![fixed_card(), other];

        let doc = export_document(&cards).unwrap();
        assert_eq!(parse_import(&doc, import_time()).unwrap(), cards);
    }

    #[test]
    fn import_rejects_object_and_string() {
        assert!(matches!(
            parse_import(r#"{"id": "x"}"#, import_time()),
            Err(ImportError::NotAnArray {
                found: "an object"
            })
        ));
        assert!(matches!(
            parse_import(r#""cards""#, import_time()),
            Err(ImportError::NotAnArray { found: "a string" })
        ));
    }

    #[test]
    fn import_rejects_truncated_json() {
        assert!(matches!(
            parse_import(r#"[{"id": "#, import_time()),
            Err(ImportError::Malformed(_))
        ));
    }

    #[test]
    fn import_rejects_elements_that_are_not_objects() {
        assert!(matches!(
            parse_import("[1, 2, 3]", import_time()),
            Err(ImportError::InvalidCard { index: 0, .. })
        ));
    }

    #[test]
    fn import_rejects_unknown_status() {
        let doc = r#"[{"title": "a"}, {"title": "b", "status": "archived"}]"#;
        let err = parse_import(doc, import_time()).unwrap_err();
        assert!(matches!(err, ImportError::InvalidCard { index: 1, .. }));
        assert!(err.to_string().contains("archived"));
    }

    #[test]
    fn import_fills_in_missing_timestamps() {
        let doc = r#"[{
            "id": "0b6f3c2e-8a1d-4c5e-9f7a-2d4b6e8f0a1c",
            "title": "hand edited",
            "status": "backlog"
        }]"#;
        let cards = parse_import(doc, import_time()).unwrap();

        assert_eq!(cards.len(), 1);
        let card = &cards[0];
        assert_eq!(
            card.id,
            CardId::parse_str("0b6f3c2e-8a1d-4c5e-9f7a-2d4b6e8f0a1c").unwrap()
        );
        assert_eq!(card.title, "hand edited");
        assert_eq!(card.status, Status::Backlog);
        assert_eq!(card.created_at, import_time());
        assert_eq!(card.updated_at, import_time());
        assert_eq!(card.description, "");
        assert_eq!(card.deadline, None);
    }

    #[test]
    fn import_replaces_unreadable_ids() {
        let doc = r#"[
            {"id": "abc", "title": "short id", "status": "done"},
            {"title": "no id"}
        ]"#;
        let cards = parse_import(doc, import_time()).unwrap();

        assert_eq!(cards.len(), 2);
        assert_ne!(cards[0].id, cards[1].id);
        assert_eq!(cards[0].status, Status::Done);
        assert_eq!(cards[1].status, Status::Backlog);
    }

    #[test]
    fn import_drops_unreadable_deadline_and_orders_timestamps() {
        let doc = r#"[{
            "title": "odd",
            "deadline": "next week",
            "createdAt": "2024-01-05T08:00:00Z",
            "updatedAt": "2024-01-01T08:00:00Z"
        }]"#;
        let card = &parse_import(doc, import_time()).unwrap()[0];

        assert_eq!(card.deadline, None);
        let created = Utc.with_ymd_and_hms(2024, 1, 5, 8, 0, 0).unwrap();
        assert_eq!(card.created_at, created);
        assert_eq!(card.updated_at, created);
    }

    #[test]
    fn import_keeps_duplicates() {
        let doc = export_document(&[fixed_card(), fixed_card()]).unwrap();
        assert_eq!(parse_import(&doc, import_time()).unwrap().len(), 2);
    }

    #[test]
    fn prompt_mentions_count() {
        assert_eq!(
            import_prompt(3),
            "Import 3 cards? This will replace all current data."
        );
    }
}
