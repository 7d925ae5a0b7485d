mod repository;
mod service;

pub use self::repository::RepositoryError;
pub use self::service::ServiceError;

use validator::{ValidationErrors, ValidationErrorsKind};

/// Flattens validator output into `field: message` lines. Nested fields are reported as
/// `parent.child` and list entries as `items[0].quantity`.
pub fn validation_messages(errors: &ValidationErrors) -> Vec<String> {
    let mut messages = Vec::new();
    collect_messages("", errors, &mut messages);
    messages.sort();
    messages
}

fn collect_messages(prefix: &str, errors: &ValidationErrors, out: &mut Vec<String>) {
    for (field, kind) in errors.errors() {
        let path = if prefix.is_empty() {
            field.to_string()
        } else {
            format!("{prefix}.{field}")
        };

        match kind {
            ValidationErrorsKind::Field(errs) => {
                out.extend(errs.iter().map(|e| match &e.message {
                    Some(msg) => format!("{path}: {msg}"),
                    None => format!("{path}: {}", e.code),
                }));
            }
            ValidationErrorsKind::Struct(inner) => collect_messages(&path, inner, out),
            ValidationErrorsKind::List(entries) => {
                for (idx, inner) in entries {
                    collect_messages(&format!("{path}[{idx}]"), inner, out);
                }
            }
        }
    }
}
