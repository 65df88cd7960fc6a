//! Form-state container for the Backoffice dashboard engine.
//!
//! One `FormState` owns the working copy of one record being created or
//! edited in an open form. Validation is deferred and explicit: errors
//! change only when `validate()` runs, unless the form was constructed
//! with live validation enabled. There is no I/O here; persistence of
//! a validated working copy is the caller's job.

mod errors;
mod state;

pub mod rules;

pub use errors::FieldErrors;
pub use state::FormState;

/// A pure validation pass over a complete working copy.
///
/// Returns the full error map for the value; an empty map means valid.
/// Validators must not panic; a panicking validator is a caller bug
/// the form state does not recover from.
pub type Validator<T> = Box<dyn Fn(&T) -> FieldErrors + Send + Sync>;
