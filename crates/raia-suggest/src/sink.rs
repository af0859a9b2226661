//! Form-facing callback seam

use raia_core::{Classification, Department};

/// Callbacks through which the controller hands results to the form.
///
/// The form owns all rendering and the department field itself; the
/// controller only ever pushes data through this seam. Callbacks are invoked
/// without any controller lock held, so an implementation may safely call
/// back into the controller (a form typically echoes an auto-applied value
/// through [`SuggestionController::department_changed`]).
///
/// [`SuggestionController::department_changed`]: crate::SuggestionController::department_changed
pub trait SuggestionSink: Send + Sync {
    /// A classification result is ready for display
    fn suggestion_available(&self, classification: &Classification);

    /// The controller wrote `department` into the form's department field.
    /// The form must treat this write exactly like a manual selection when
    /// detecting later user overrides.
    fn auto_apply(&self, department: &Department);
}
