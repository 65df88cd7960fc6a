//! The form-state container.

use crate::{FieldErrors, Validator};

/// Holds one record's editable working copy, tracks per-field errors,
/// and gates submission on validity.
///
/// Owned by exactly one open form for its lifetime; dropped when the
/// form closes. Field writes are snapshot transitions: each write maps
/// the current working copy to a fresh value rather than mutating it in
/// place, so a queued transition can never observe a half-applied
/// predecessor.
pub struct FormState<T: Clone> {
    initial: T,
    values: T,
    errors: FieldErrors,
    validate_on_change: bool,
    validator: Validator<T>,
}

impl<T: Clone> FormState<T> {
    /// Creates a form over a fully populated initial value.
    ///
    /// The caller is responsible for defaulting every field of
    /// `initial`; no defaulting happens here. With `validate_on_change`
    /// the full error map is recomputed after every field write;
    /// without it, errors change only on [`validate`](Self::validate).
    pub fn new(initial: T, validate_on_change: bool, validator: Validator<T>) -> Self {
        Self {
            values: initial.clone(),
            initial,
            errors: FieldErrors::new(),
            validate_on_change,
            validator,
        }
    }

    /// Applies a single-field transition to the working copy.
    ///
    /// When live validation is on, the stored error map is replaced by
    /// a full validation pass over the new working copy.
    pub fn set_field(&mut self, write: impl FnOnce(&T) -> T) {
        self.values = write(&self.values);
        if self.validate_on_change {
            self.errors = (self.validator)(&self.values);
        }
    }

    /// Applies a bulk transition (composite or nested fields) to the
    /// working copy. Never triggers validation.
    pub fn update(&mut self, write: impl FnOnce(&T) -> T) {
        self.values = write(&self.values);
    }

    /// Recomputes and stores the full error map; true iff it is empty.
    ///
    /// This is the single submission gate: call it immediately before
    /// handing the working copy to a save operation and abort the save
    /// when it returns false.
    pub fn validate(&mut self) -> bool {
        self.errors = (self.validator)(&self.values);
        self.errors.is_empty()
    }

    /// Restores the construction-time snapshot and clears all errors.
    pub fn reset(&mut self) {
        self.values = self.initial.clone();
        self.errors.clear();
    }

    /// The current working copy.
    pub fn values(&self) -> &T {
        &self.values
    }

    /// The current error map.
    pub fn errors(&self) -> &FieldErrors {
        &self.errors
    }

    /// Consumes the form, yielding the working copy for a save call.
    pub fn into_values(self) -> T {
        self.values
    }
}

impl<T: Clone + PartialEq> FormState<T> {
    /// True when the working copy differs from the initial snapshot.
    /// Callers use this to warn before discarding edits on close.
    pub fn is_dirty(&self) -> bool {
        self.values != self.initial
    }
}

impl<T: Clone + std::fmt::Debug> std::fmt::Debug for FormState<T> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("FormState")
            .field("values", &self.values)
            .field("errors", &self.errors)
            .field("validate_on_change", &self.validate_on_change)
            .finish_non_exhaustive()
    }
}
