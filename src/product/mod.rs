// Product Entry - form state, field updates and validation
//
// Edits flow through `FieldUpdate` into a pure reducer; `FormState` owns the
// record and its `ErrorMap` for the lifetime of an entry session.

pub mod errors;
pub mod form;
pub mod types;
pub mod update;
pub mod validation;

pub use errors::{FieldPathError, SubmitError, ValidationError};
pub use form::{Accepted, FormSection, FormState, SectionState};
pub use types::{Category, DimensionRecord, LengthUnit, ProductRecord, WeightUnit};
pub use update::{coerce_number, reduce, DimensionField, FieldUpdate, TopField};
pub use validation::{validate, ErrorMap};
