//! # oxide-crud-forms
//!
//! Field schema and form rendering for the CRUD admin pages.
//!
//! Widgets are Bootstrap 5 markup bound to a client-side Vue model
//! (`entityModel`), so the same fragments serve the create dialog and the
//! edit page.
//!
//! ## Quick Start
//!
//! ```rust
//! use oxide_crud_forms::{FieldType, FormField, FormRenderer};
//!
//! let fields = vec![
//!     FormField::new("first_name", "First Name").required(),
//!     FormField::new("status", "Status")
//!         .field_type(FieldType::Select)
//!         .option("active", "Active")
//!         .option("inactive", "Inactive"),
//!     FormField::new("bio", "Biography")
//!         .field_type(FieldType::Textarea)
//!         .help("Shown on the public profile"),
//! ];
//!
//! let fragments = FormRenderer::new().render(&fields);
//! assert_eq!(fragments.len(), 3);
//! assert!(fragments[0].contains("v-model=\"entityModel.first_name\""));
//! ```
//!
//! ## Validation
//!
//! ```rust
//! use std::collections::HashMap;
//! use oxide_crud_forms::{collect_values, validate_required, FormField};
//!
//! let fields = vec![FormField::new("email", "Email").required()];
//! let posted: HashMap<&str, &str> = HashMap::new();
//! let values = collect_values(&fields, |k| posted.get(k).copied());
//!
//! let err = validate_required(&fields, &values).unwrap_err();
//! assert_eq!(err.to_string(), "Email is required field");
//! ```

mod error;
mod escape;
mod field;
mod render;
pub mod validation;

pub use error::{FormError, Result};
pub use escape::{html_escape, is_raw, render_text, unwrap_raw};
pub use field::{FieldOption, FieldType, FormField, OptionsProvider};
pub use render::{js_member, random_field_id, FormRenderer, MODEL};
pub use validation::{collect_values, validate_required};
