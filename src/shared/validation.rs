//! Validation Utilities

use validator::ValidationErrors;

use super::error::{AppError, FieldError};

/// Convert validation errors to AppError
///
/// Field names are reported the way clients send them (camelCase) and the
/// list is sorted so responses are stable.
pub fn validation_error(errors: ValidationErrors) -> AppError {
    let mut field_errors: Vec<FieldError> = errors
        .field_errors()
        .iter()
        .flat_map(|(field, errs)| {
            let field = to_camel_case(field);
            errs.iter().map(move |e| FieldError {
                field: field.clone(),
                message: e
                    .message
                    .clone()
                    .map(|m| m.to_string())
                    .unwrap_or_else(|| format!("{} failed rule '{}'", field, e.code)),
            })
        })
        .collect();

    field_errors.sort_by(|a, b| a.field.cmp(&b.field).then_with(|| a.message.cmp(&b.message)));

    AppError::Validation(field_errors)
}

/// Single violation for a request body that could not be decoded at all.
pub fn body_error(message: impl Into<String>) -> AppError {
    AppError::Validation(vec![FieldError {
        field: "body".into(),
        message: message.into(),
    }])
}

fn to_camel_case(field: &str) -> String {
    let mut out = String::with_capacity(field.len());
    let mut upper_next = false;
    for ch in field.chars() {
        if ch == '_' {
            upper_next = true;
        } else if upper_next {
            out.extend(ch.to_uppercase());
            upper_next = false;
        } else {
            out.push(ch);
        }
    }
    out
}
