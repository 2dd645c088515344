//! Normalization of loosely typed lecture records.
//!
//! Imports accept a flat JSON array of records. Field values may arrive as
//! numbers or strings and some fields have alternate names, so every record
//! passes through this module once, at ingestion. The scheduler only ever
//! sees normalized [`NewLecture`] values.
//!
//! | field       | aliases       | accepted values                           | missing/null |
//! |-------------|---------------|-------------------------------------------|--------------|
//! | `module`    |               | integer, or string holding an integer     | error        |
//! | `submodule` |               | integer, or string holding an integer     | error        |
//! | `topic`     | `title`       | string or number                          | `"Untitled"` |
//! | `size`      | `size_mb`     | number, or numeric string                 | `0`          |
//! | `duration`  | `duration_hr` | non-negative number, or numeric string    | `0`          |
//! | `completed` |               | bool, number (non-zero is true), or one of `true/false/yes/no/1/0` | `false` |
//!
//! For aliased fields the first name holding a non-null, non-blank value
//! wins. A payload that is not an array, or any record that cannot be
//! coerced, rejects the whole import.

use serde_json::{Map, Value};

use crate::{
    error::{PlannerError, Result},
    models::NewLecture,
};

/// Topic used when a record carries neither `topic` nor `title`.
pub const UNTITLED_TOPIC: &str = "Untitled";

/// Parses a JSON payload into normalized lectures.
///
/// # Errors
///
/// Returns `PlannerError::Import` if the payload is not valid JSON, is not an
/// array, or contains a record that cannot be normalized.
///
/// # Examples
///
/// ```rust
/// use lectern_core::import::parse_lecture_records;
///
/// let lectures = parse_lecture_records(
///     r#"[{"module": "2", "submodule": 1, "title": "Traits", "duration_hr": "0.5"}]"#,
/// )?;
/// assert_eq!(lectures[0].module, 2);
/// assert_eq!(lectures[0].topic, "Traits");
/// assert_eq!(lectures[0].duration, 0.5);
/// assert!(!lectures[0].completed);
/// # Ok::<(), lectern_core::PlannerError>(())
/// ```
pub fn parse_lecture_records(payload: &str) -> Result<Vec<NewLecture>> {
    let value: Value = serde_json::from_str(payload).map_err(|e| PlannerError::Import {
        reason: format!("payload is not valid JSON: {e}"),
    })?;

    let Value::Array(records) = value else {
        return Err(PlannerError::Import {
            reason: "payload must be a JSON array of lecture records".to_string(),
        });
    };

    records
        .iter()
        .enumerate()
        .map(|(index, record)| {
            normalize_record(record).map_err(|e| PlannerError::import_record(index, e))
        })
        .collect()
}

/// Normalizes one record, returning a human-readable reason on failure.
fn normalize_record(record: &Value) -> std::result::Result<NewLecture, String> {
    let Value::Object(fields) = record else {
        return Err(format!("expected an object, found {}", type_name(record)));
    };

    let module = required_integer(fields, "module")?;
    let submodule = required_integer(fields, "submodule")?;

    let topic = match first_present(fields, &["topic", "title"]) {
        Some(Value::String(s)) => s.trim().to_string(),
        Some(Value::Number(n)) => n.to_string(),
        Some(other) => return Err(format!("topic must be a string, found {}", type_name(other))),
        None => UNTITLED_TOPIC.to_string(),
    };

    let size = match first_present(fields, &["size", "size_mb"]) {
        Some(value) => coerce_number(value).map_err(|e| format!("size {e}"))?,
        None => 0.0,
    };

    let duration = match first_present(fields, &["duration", "duration_hr"]) {
        Some(value) => coerce_number(value).map_err(|e| format!("duration {e}"))?,
        None => 0.0,
    };
    if duration < 0.0 {
        return Err(format!("duration must not be negative, found {duration}"));
    }

    let completed = match first_present(fields, &["completed"]) {
        Some(value) => coerce_bool(value)?,
        None => false,
    };

    Ok(NewLecture {
        module,
        submodule,
        topic,
        size,
        duration,
        completed,
    })
}

/// The first of `names` holding a non-null, non-blank value.
fn first_present<'a>(fields: &'a Map<String, Value>, names: &[&str]) -> Option<&'a Value> {
    names
        .iter()
        .filter_map(|name| fields.get(*name))
        .find(|value| match value {
            Value::Null => false,
            Value::String(s) => !s.trim().is_empty(),
            _ => true,
        })
}

fn required_integer(fields: &Map<String, Value>, name: &str) -> std::result::Result<i64, String> {
    let value = first_present(fields, &[name]).ok_or_else(|| format!("missing {name}"))?;
    coerce_integer(value).map_err(|e| format!("{name} {e}"))
}

fn coerce_number(value: &Value) -> std::result::Result<f64, String> {
    let number = match value {
        Value::Number(n) => n.as_f64(),
        Value::String(s) => s.trim().parse::<f64>().ok(),
        _ => None,
    };

    match number {
        Some(n) if n.is_finite() => Ok(n),
        _ => Err(format!("must be a number, found {value}")),
    }
}

fn coerce_integer(value: &Value) -> std::result::Result<i64, String> {
    if let Value::Number(n) = value
        && let Some(i) = n.as_i64()
    {
        return Ok(i);
    }
    if let Value::String(s) = value
        && let Ok(i) = s.trim().parse::<i64>()
    {
        return Ok(i);
    }

    let n = coerce_number(value).map_err(|_| format!("must be an integer, found {value}"))?;
    if n.fract() == 0.0 && n >= i64::MIN as f64 && n <= i64::MAX as f64 {
        Ok(n as i64)
    } else {
        Err(format!("must be an integer, found {value}"))
    }
}

fn coerce_bool(value: &Value) -> std::result::Result<bool, String> {
    match value {
        Value::Bool(b) => Ok(*b),
        Value::Number(n) => Ok(n.as_f64().is_some_and(|f| f != 0.0)),
        Value::String(s) => match s.trim().to_lowercase().as_str() {
            "true" | "yes" | "1" => Ok(true),
            "false" | "no" | "0" => Ok(false),
            other => Err(format!("completed must be a boolean, found \"{other}\"")),
        },
        other => Err(format!("completed must be a boolean, found {}", type_name(other))),
    }
}

fn type_name(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Array(_) => "an array",
        Value::Object(_) => "an object",
    }
}
