//! Generator source port
//!
//! Contract between the host application and one barcode content form.

use crate::error::ApplicationError;

/// A form that produces text to be encoded in a barcode
///
/// Field handles are generator specific, hence the associated type.
pub trait GeneratorSource {
    /// Identifies one input field of the form
    type Field: Copy;

    /// Name shown in the host's generator list
    fn name(&self) -> &'static str;

    /// Produce the encodable payload from the current field values
    ///
    /// May update fields, e.g. to fill in defaults.
    fn text(&mut self) -> Result<String, ApplicationError>;

    /// Validate a single field, typically after the user edited it
    fn validate(&self, field: Self::Field) -> Result<(), ApplicationError>;

    /// The field that should receive focus when the form is shown
    fn focus_field(&self) -> Self::Field;
}
