//! Helper checks for building validators.
//!
//! Each helper records at most one error per field into a shared
//! [`FieldErrors`] map. A validator composes them over the whole
//! working copy:
//!
//! ```
//! use backoffice_form::{rules, FieldErrors};
//!
//! struct MenuDraft {
//!     name: String,
//!     description: String,
//! }
//!
//! let validator = |draft: &MenuDraft| {
//!     let mut errors = FieldErrors::new();
//!     rules::required(&mut errors, "name", &draft.name, "Ce champ est requis");
//!     rules::required(&mut errors, "description", &draft.description, "Ce champ est requis");
//!     errors
//! };
//! # let _ = validator(&MenuDraft { name: "Plat du jour".into(), description: String::new() });
//! ```

use crate::FieldErrors;

/// Fails `field` when `value` is empty or whitespace-only.
pub fn required(errors: &mut FieldErrors, field: &str, value: &str, message: &str) {
    if value.trim().is_empty() {
        errors.insert(field, message);
    }
}

/// Fails `field` when `value` is shorter than `min` characters.
pub fn min_len(errors: &mut FieldErrors, field: &str, value: &str, min: usize, message: &str) {
    if value.chars().count() < min {
        errors.insert(field, message);
    }
}

/// Fails `field` when `value` falls outside `[min, max]`.
pub fn in_range(
    errors: &mut FieldErrors,
    field: &str,
    value: f64,
    min: f64,
    max: f64,
    message: &str,
) {
    if value < min || value > max {
        errors.insert(field, message);
    }
}

/// Runs `check` only when `condition` holds. Used for cross-field
/// constraints ("delivery price required only when delivery is on").
pub fn when(condition: bool, errors: &mut FieldErrors, check: impl FnOnce(&mut FieldErrors)) {
    if condition {
        check(errors);
    }
}
