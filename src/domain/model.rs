use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Output header, in file order. Stable across runs so downstream seeds don't break.
pub const CSV_COLUMNS: [&str; 7] = [
    "customer_id",
    "first_name",
    "last_name",
    "email",
    "company",
    "city",
    "last_refreshed_utc",
];

/// One unvalidated record from the source.
///
/// Every field is optional and kept as raw JSON; nothing about the record's
/// shape is checked beyond it being an element of the fetched array.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct RawRecord {
    pub id: Option<Value>,
    pub name: Option<Value>,
    pub email: Option<Value>,
    pub company: Option<Value>,
    pub address: Option<Value>,
}

impl RawRecord {
    /// Total conversion: objects map field-by-field, anything else becomes an
    /// empty record.
    pub fn from_value(value: Value) -> Self {
        match value {
            Value::Object(_) => serde_json::from_value(value).unwrap_or_default(),
            _ => Self::default(),
        }
    }

    /// `name` as text, if it is a string.
    pub fn full_name(&self) -> Option<&str> {
        self.name.as_ref().and_then(Value::as_str)
    }

    /// `company.name`
    pub fn company_name(&self) -> Option<&Value> {
        nested(self.company.as_ref(), "name")
    }

    /// `address.city`
    pub fn city(&self) -> Option<&Value> {
        nested(self.address.as_ref(), "city")
    }
}

/// Reads `key` from `parent` only when `parent` is a JSON object.
pub fn nested<'a>(parent: Option<&'a Value>, key: &str) -> Option<&'a Value> {
    parent?.as_object()?.get(key)
}

/// Text form of a pass-through cell. `None` for absent or `null`.
pub fn cell_text(value: Option<&Value>) -> Option<String> {
    match value? {
        Value::Null => None,
        Value::String(s) => Some(s.clone()),
        other => Some(other.to_string()),
    }
}

/// A fixed-shape row. Field order matches [`CSV_COLUMNS`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct OutputRow {
    pub customer_id: Option<String>,
    pub first_name: String,
    pub last_name: String,
    pub email: Option<String>,
    pub company: Option<String>,
    pub city: Option<String>,
    pub last_refreshed_utc: String,
}

pub type Dataset = Vec<OutputRow>;
