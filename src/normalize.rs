use crate::error::{ReclassifyError, Result};
use crate::schema::{BalanceSheet, Category, LineItem, Section, SectionKind};
use log::{debug, warn};
use serde_json::Value;

/// Coerces the extracted JSON value into a validated [`BalanceSheet`].
///
/// The only hard failure is a top-level value that is not a mapping at all.
/// Everything below that degrades gracefully: a missing label becomes an
/// empty string, a missing or non-numeric amount becomes zero, and empty
/// categories are dropped. The goal is always a complete, reviewable report
/// rather than a rejection over one malformed field.
///
/// Section and category ordering is preserved exactly as given.
pub fn normalize(raw: &Value) -> Result<BalanceSheet> {
    let map = raw.as_object().ok_or_else(|| {
        ReclassifyError::Schema(format!(
            "expected a JSON object with section keys, got {}",
            value_kind(raw)
        ))
    })?;

    let mut doc = BalanceSheet::default();
    for (key, value) in map {
        match SectionKind::from_key(key) {
            Some(kind) => {
                let section = normalize_section(kind, value);
                debug!(
                    "normalized section '{}' into {} categories",
                    key,
                    section.categories.len()
                );
                match kind {
                    SectionKind::Assets => doc.assets = Some(section),
                    SectionKind::LiabilitiesEquity => doc.liabilities_equity = Some(section),
                }
            }
            None => debug!("ignoring unrecognized top-level key '{}'", key),
        }
    }

    Ok(doc)
}

fn value_kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Array(_) => "an array",
        Value::Object(_) => "an object",
    }
}

fn normalize_section(kind: SectionKind, value: &Value) -> Section {
    let mut categories = Vec::new();

    match value.as_object() {
        Some(map) => {
            for (name, records) in map {
                match records.as_array() {
                    Some(list) if !list.is_empty() => categories.push(Category {
                        name: name.clone(),
                        items: list.iter().map(normalize_item).collect(),
                    }),
                    Some(_) => debug!("dropping empty category '{}'", name),
                    None => warn!(
                        "category '{}' is not a list of items, dropping it",
                        name
                    ),
                }
            }
        }
        None => warn!(
            "section value for {:?} is not a mapping, treating it as empty",
            kind
        ),
    }

    Section { kind, categories }
}

fn normalize_item(record: &Value) -> LineItem {
    match record {
        Value::Object(map) => LineItem {
            label: map
                .get("label")
                .or_else(|| map.get("name"))
                .or_else(|| map.get("description"))
                .and_then(Value::as_str)
                .unwrap_or("")
                .to_string(),
            amount: map
                .get("amount")
                .or_else(|| map.get("value"))
                .map(coerce_amount)
                .unwrap_or(0.0),
        },
        // A bare string is taken as a label-only line.
        Value::String(s) => LineItem {
            label: s.clone(),
            amount: 0.0,
        },
        _ => LineItem {
            label: String::new(),
            amount: 0.0,
        },
    }
}

/// Leaf defaulting rule: numbers pass through, numeric strings are parsed
/// (tolerating thousands separators), everything else becomes zero. Amounts
/// are always finite.
fn coerce_amount(value: &Value) -> f64 {
    let amount = match value {
        Value::Number(n) => n.as_f64().unwrap_or(0.0),
        Value::String(s) => s.replace(',', "").trim().parse().unwrap_or(0.0),
        _ => 0.0,
    };
    if amount.is_finite() {
        amount
    } else {
        0.0
    }
}
