//! Request validation.
//!
//! Request DTOs derive [`validator::Validate`]; the `custom` rules below cover
//! what the built-in ones do not. Rule messages are phrased without a subject
//! and [`check`] prefixes them with the JSON key, producing the
//! `{field, message}` list returned in 400 responses. Nothing here touches
//! storage.

use std::borrow::Cow;
use std::str::FromStr;

use bigdecimal::BigDecimal;
use chrono::{DateTime, NaiveDate, NaiveDateTime};
use serde::Serialize;
use serde_json::Value;
use utoipa::ToSchema;
use validator::{Validate, ValidationError, ValidationErrors};

/// Digits allowed left of the point in a `NUMERIC(12,2)` column.
pub const AMOUNT_INTEGER_DIGITS: u32 = 10;
/// Digits allowed right of the point in a `NUMERIC(12,2)` column.
pub const AMOUNT_SCALE: i64 = 2;

#[derive(Debug, Clone, PartialEq, Serialize, ToSchema)]
pub struct FieldError {
    pub field: String,
    pub message: String,
}

impl FieldError {
    pub fn new(field: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            field: field.into(),
            message: message.into(),
        }
    }
}

/// Run `input`'s rules and return every violation, ordered by field name.
pub fn check<T: Validate>(input: &T) -> Result<(), Vec<FieldError>> {
    input.validate().map_err(|errors| field_errors(&errors))
}

/// Flatten `errors`, naming each field by its JSON key. Request bodies use
/// upper-case column names, so the struct field name is upper-cased.
pub fn field_errors(errors: &ValidationErrors) -> Vec<FieldError> {
    let mut out: Vec<FieldError> = errors
        .field_errors()
        .into_iter()
        .flat_map(|(field, errs)| {
            let field = field.to_ascii_uppercase();
            errs.iter().map(move |e| {
                let detail = e
                    .message
                    .as_ref()
                    .map(|m| m.to_string())
                    .unwrap_or_else(|| e.code.to_string());
                FieldError {
                    message: format!("{} {}", field, detail),
                    field: field.clone(),
                }
            })
        })
        .collect();
    out.sort_by(|a, b| a.field.cmp(&b.field));
    out
}

fn rule_error(code: &'static str, message: &'static str) -> ValidationError {
    let mut err = ValidationError::new(code);
    err.message = Some(Cow::from(message));
    err
}

// ── Custom rules ─────────────────────────────────────────────────────────────

pub fn not_blank(value: &str) -> Result<(), ValidationError> {
    if value.trim().is_empty() {
        return Err(rule_error("blank", "must not be empty"));
    }
    Ok(())
}

/// A JSON number or numeric string that fits a `NUMERIC(12,2)` column.
pub fn amount(value: &Value) -> Result<(), ValidationError> {
    match to_decimal(value) {
        None => Err(rule_error("numeric", "must be numeric")),
        Some(d) if !fits_amount(&d) => Err(rule_error(
            "precision",
            "must have at most 10 integer digits and 2 decimal places",
        )),
        Some(_) => Ok(()),
    }
}

pub fn integer(value: &Value) -> Result<(), ValidationError> {
    match to_integer(value) {
        Some(_) => Ok(()),
        None => Err(rule_error("integer", "must be an integer")),
    }
}

pub fn iso_date(value: &str) -> Result<(), ValidationError> {
    match parse_iso_date(value) {
        Some(_) => Ok(()),
        None => Err(rule_error("iso_date", "must be an ISO-8601 date")),
    }
}

// ── Parsing ──────────────────────────────────────────────────────────────────

/// A JSON number or a numeric string.
pub fn to_decimal(value: &Value) -> Option<BigDecimal> {
    match value {
        Value::Number(n) => BigDecimal::from_str(&n.to_string()).ok(),
        Value::String(s) => BigDecimal::from_str(s.trim()).ok(),
        _ => None,
    }
}

fn fits_amount(d: &BigDecimal) -> bool {
    let (_, scale) = d.normalized().as_bigint_and_exponent();
    let limit = BigDecimal::from(10u64.pow(AMOUNT_INTEGER_DIGITS));
    scale <= AMOUNT_SCALE && d.abs() < limit
}

pub fn to_integer(value: &Value) -> Option<i64> {
    match value {
        Value::Number(n) => n.as_i64(),
        Value::String(s) => s.trim().parse().ok(),
        _ => None,
    }
}

/// Accepts `YYYY-MM-DD`, `YYYY-MM-DDTHH:MM:SS[.fff]` and RFC 3339 timestamps.
pub fn parse_iso_date(value: &str) -> Option<NaiveDate> {
    let value = value.trim();
    NaiveDate::parse_from_str(value, "%Y-%m-%d")
        .ok()
        .or_else(|| {
            DateTime::parse_from_rfc3339(value)
                .ok()
                .map(|dt| dt.date_naive())
        })
        .or_else(|| {
            NaiveDateTime::parse_from_str(value, "%Y-%m-%dT%H:%M:%S%.f")
                .ok()
                .map(|dt| dt.date())
        })
}
