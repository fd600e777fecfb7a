use lazy_static::lazy_static;
use regex::Regex;
use validator::{Validate, ValidationErrors};

use crate::core::error::{AppError, Result};

lazy_static! {
    /// Regex for record names: any text without ASCII digits
    /// - Valid: "Fire Hazard", "Électrique", ""
    /// - Invalid: "Fire 2", "9", "Zone-B7"
    pub static ref NO_DIGITS_REGEX: Regex = Regex::new(r"^[^0-9]*$").unwrap();
}

/// Run the derived validator and turn failures into `AppError::Validation`
pub fn validate_dto<T: Validate>(dto: &T) -> Result<()> {
    dto.validate()
        .map_err(|e| AppError::Validation(validation_messages(&e)))
}

/// Flatten validation errors into their messages, ordered by field name.
/// Each field reports its first failing rule only.
pub fn validation_messages(errors: &ValidationErrors) -> Vec<String> {
    let mut fields: Vec<_> = errors.field_errors().into_iter().collect();
    fields.sort_by(|a, b| a.0.cmp(&b.0));

    fields
        .into_iter()
        .filter_map(|(field, errs)| {
            errs.first().map(|err| {
                err.message
                    .as_ref()
                    .map(|m| m.to_string())
                    .unwrap_or_else(|| format!("{} is invalid", field))
            })
        })
        .collect()
}

/// Build an ILIKE pattern matching `term` as a literal substring
pub fn like_pattern(term: &str) -> String {
    let mut escaped = String::with_capacity(term.len() + 2);
    escaped.push('%');
    for c in term.chars() {
        if matches!(c, '%' | '_' | '\\') {
            escaped.push('\\');
        }
        escaped.push(c);
    }
    escaped.push('%');
    escaped
}
