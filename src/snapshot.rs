//! The immutable set of field values consumed by one render.
//!
//! A snapshot is parsed from the flat key/value bag the host form keeps.
//! Parsing never fails on missing or oddly typed fields: anything absent
//! becomes blank, scalars of any JSON type are stringified.

use crate::error::PipelineError;
use chrono::{DateTime, NaiveDate, NaiveDateTime};
use serde::Deserialize;
use serde_json::{Map, Value};

/// Rows in the issued-equipment table.
pub const ISSUED_SLOTS: usize = 10;
/// Rows in the returned-equipment table.
pub const RETURNED_SLOTS: usize = 8;

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct IssuedItem {
    pub description: String,
    pub condition: String,
    pub serial: String,
    pub asset: String,
}

impl IssuedItem {
    /// Cell values in column order.
    pub fn cells(&self) -> Vec<String> {
        vec![
            self.description.clone(),
            self.condition.clone(),
            self.serial.clone(),
            self.asset.clone(),
        ]
    }

    pub fn is_blank(&self) -> bool {
        self.cells().iter().all(|c| c.trim().is_empty())
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ReturnedItem {
    pub description: String,
    pub condition: String,
    pub serial: String,
    pub asset: String,
}

impl ReturnedItem {
    /// Cell values in column order. The narrow "No" column between serial
    /// and asset has no backing field and is always blank.
    pub fn cells(&self) -> Vec<String> {
        vec![
            self.description.clone(),
            self.condition.clone(),
            self.serial.clone(),
            String::new(),
            self.asset.clone(),
        ]
    }
}

/// Names for one signoff grid. Signature cells have no field at all.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SignoffPair {
    pub issuer_name: String,
    pub receiver_name: String,
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct StarterCredentials {
    pub full_name: String,
    pub role: String,
    pub instructions: String,
    pub laptop_username: String,
    pub laptop_password: String,
    /// A pre-composed address; used verbatim when it contains `@`.
    pub m365_username: String,
    pub m365_user_base: String,
    pub m365_domain: String,
    pub m365_password: String,
    pub m365_2fa: bool,
    /// `None` when the key was absent, so the configured default applies.
    pub sharepoint_url: Option<String>,
    pub helpdesk_email: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ExtraAccount {
    pub software: String,
    pub account: String,
    pub password: String,
}

impl ExtraAccount {
    pub fn cells(&self) -> Vec<String> {
        vec![
            self.software.trim().to_string(),
            self.account.trim().to_string(),
            self.password.trim().to_string(),
        ]
    }

    pub fn is_blank(&self) -> bool {
        self.software.trim().is_empty()
            && self.account.trim().is_empty()
            && self.password.trim().is_empty()
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(try_from = "serde_json::Value")]
pub struct FormSnapshot {
    pub name: String,
    pub date: String,
    pub work_location: String,
    pub return_date: String,
    pub issued: [IssuedItem; ISSUED_SLOTS],
    pub returned: [ReturnedItem; RETURNED_SLOTS],
    pub issue_signoff: SignoffPair,
    pub return_signoff: SignoffPair,
    pub credentials: StarterCredentials,
    pub extra_accounts: Vec<ExtraAccount>,
    /// File name of the chosen logo, blank for the configured default.
    pub selected_logo: String,
}

impl FormSnapshot {
    pub fn from_json_str(json: &str) -> Result<Self, PipelineError> {
        let value: Value = serde_json::from_str(json)?;
        Self::try_from(value)
    }
}

impl TryFrom<Value> for FormSnapshot {
    type Error = PipelineError;

    fn try_from(value: Value) -> Result<Self, Self::Error> {
        let Value::Object(map) = value else {
            return Err(PipelineError::InvalidSnapshot(format!(
                "expected a JSON object at the top level, found {}",
                json_kind(&value)
            )));
        };
        let fields = Fields(&map);

        let snapshot = FormSnapshot {
            name: fields.text("name"),
            date: fields.date("date"),
            work_location: fields.text("work_location"),
            return_date: fields.date("return_date"),
            issued: issued_slots(&fields),
            returned: returned_slots(&fields),
            issue_signoff: SignoffPair {
                issuer_name: fields.text("issuer_name"),
                receiver_name: fields.text("receiver_name"),
            },
            return_signoff: SignoffPair {
                issuer_name: fields.text("return_issuer"),
                receiver_name: fields.text("return_receiver"),
            },
            credentials: StarterCredentials {
                full_name: fields.text("starter_full_name"),
                role: fields.text("starter_role"),
                instructions: fields.text("starter_instructions"),
                laptop_username: fields.text("laptop_username"),
                laptop_password: fields.text("laptop_password"),
                m365_username: fields.text("m365_username"),
                m365_user_base: fields.text("m365_user_base"),
                m365_domain: fields.text("m365_domain"),
                m365_password: fields.text("m365_password"),
                m365_2fa: fields.flag("m365_2fa"),
                sharepoint_url: fields.optional_text("sharepoint_url"),
                helpdesk_email: fields.optional_text("helpdesk_email"),
            },
            extra_accounts: fields
                .records("extra_accounts")
                .iter()
                .map(|record| ExtraAccount {
                    software: record_text(record, "Software"),
                    account: record_text(record, "Account"),
                    password: record_text(record, "Password"),
                })
                .collect(),
            selected_logo: fields.text("selected_logo"),
        };

        log::debug!(
            "Parsed snapshot: {} issued, {} returned, {} extra account row(s)",
            snapshot.issued.iter().filter(|i| !i.is_blank()).count(),
            snapshot
                .returned
                .iter()
                .filter(|r| r.cells().iter().any(|c| !c.trim().is_empty()))
                .count(),
            snapshot.extra_accounts.len()
        );
        Ok(snapshot)
    }
}

fn issued_slots(fields: &Fields<'_>) -> [IssuedItem; ISSUED_SLOTS] {
    let records = fields.records("equipment");
    std::array::from_fn(|i| {
        let record = records.get(i);
        IssuedItem {
            description: fields.slot(&format!("eq_desc_{i}"), record, "DESCRIPTION"),
            condition: fields.slot(&format!("eq_condition_{i}"), record, "CONDITION AT ISSUE"),
            serial: fields.slot(&format!("eq_serial_{i}"), record, "SERIAL No"),
            asset: fields.slot(&format!("eq_asset_{i}"), record, "ASSET No"),
        }
    })
}

fn returned_slots(fields: &Fields<'_>) -> [ReturnedItem; RETURNED_SLOTS] {
    let records = fields.records("returned_equipment");
    std::array::from_fn(|i| {
        let record = records.get(i);
        ReturnedItem {
            description: fields.slot(&format!("ret_desc_{i}"), record, "DESCRIPTION"),
            condition: fields.slot(&format!("ret_condition_{i}"), record, "RETURNED CONDITION"),
            serial: fields.slot(&format!("ret_serial_{i}"), record, "SERIAL No"),
            asset: fields.slot(&format!("ret_asset_{i}"), record, "ASSET No"),
        }
    })
}

/// Read-only view over the top-level snapshot object.
struct Fields<'a>(&'a Map<String, Value>);

impl Fields<'_> {
    fn text(&self, key: &str) -> String {
        self.0.get(key).map(scalar_text).unwrap_or_default()
    }

    fn optional_text(&self, key: &str) -> Option<String> {
        self.0.get(key).map(scalar_text)
    }

    fn date(&self, key: &str) -> String {
        normalize_date(&self.text(key))
    }

    fn flag(&self, key: &str) -> bool {
        match self.0.get(key) {
            Some(Value::Bool(b)) => *b,
            Some(Value::Number(n)) => n.as_f64().is_some_and(|v| v != 0.0),
            Some(Value::String(s)) => matches!(
                s.trim().to_ascii_lowercase().as_str(),
                "true" | "yes" | "y" | "1" | "on"
            ),
            _ => false,
        }
    }

    /// The array under `key`; anything that is not an array reads as empty.
    fn records(&self, key: &str) -> &[Value] {
        match self.0.get(key) {
            Some(Value::Array(items)) => items,
            Some(other) => {
                log::warn!("Ignoring '{}': expected an array, found {}", key, json_kind(other));
                &[]
            }
            None => &[],
        }
    }

    /// A per-slot flat key wins over the same field of the slot's record.
    fn slot(&self, flat_key: &str, record: Option<&Value>, field: &str) -> String {
        match self.0.get(flat_key) {
            Some(value) => scalar_text(value),
            None => record.map(|r| record_text(r, field)).unwrap_or_default(),
        }
    }
}

/// A field of a record object. Null or non-object records read as blank.
fn record_text(record: &Value, field: &str) -> String {
    record.get(field).map(scalar_text).unwrap_or_default()
}

fn scalar_text(value: &Value) -> String {
    match value {
        Value::Null => String::new(),
        Value::String(s) => s.clone(),
        Value::Bool(b) => b.to_string(),
        Value::Number(n) => n.to_string(),
        other => other.to_string(),
    }
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

/// ISO dates and date-times are printed as `%Y-%m-%d`; anything else is
/// kept verbatim.
pub fn normalize_date(raw: &str) -> String {
    let trimmed = raw.trim();
    if let Ok(date) = NaiveDate::parse_from_str(trimmed, "%Y-%m-%d") {
        return date.format("%Y-%m-%d").to_string();
    }
    if let Ok(dt) = DateTime::parse_from_rfc3339(trimmed) {
        return dt.date_naive().format("%Y-%m-%d").to_string();
    }
    if let Ok(dt) = NaiveDateTime::parse_from_str(trimmed, "%Y-%m-%dT%H:%M:%S%.f") {
        return dt.date().format("%Y-%m-%d").to_string();
    }
    raw.to_string()
}
