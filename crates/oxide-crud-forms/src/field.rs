//! Field schema.

use std::sync::Arc;

/// Widget kind of a form field.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub enum FieldType {
    /// Single-line text input.
    #[default]
    String,
    /// Numeric input.
    Number,
    /// Masked input.
    Password,
    /// Multi-line text.
    Textarea,
    /// Textarea upgraded client-side into a block editor.
    Blockarea,
    /// Dropdown fed by static and computed options.
    Select,
    /// Date-time picker.
    Datetime,
    /// WYSIWYG HTML editor.
    Htmlarea,
    /// Image URL with preview.
    Image,
    /// Image uploaded and inlined as a data URL.
    ImageInline,
    /// The field value injected as markup, no label.
    Raw,
}

impl FieldType {
    /// Maps a textual type key. Unknown keys become [`FieldType::String`].
    pub fn from_key(key: &str) -> Self {
        match key {
            "number" => Self::Number,
            "password" => Self::Password,
            "textarea" => Self::Textarea,
            "blockarea" => Self::Blockarea,
            "select" => Self::Select,
            "datetime" => Self::Datetime,
            "htmlarea" => Self::Htmlarea,
            "image" => Self::Image,
            "image_inline" => Self::ImageInline,
            "raw" => Self::Raw,
            _ => Self::String,
        }
    }

    /// The textual key of this type.
    pub fn key(self) -> &'static str {
        match self {
            Self::String => "string",
            Self::Number => "number",
            Self::Password => "password",
            Self::Textarea => "textarea",
            Self::Blockarea => "blockarea",
            Self::Select => "select",
            Self::Datetime => "datetime",
            Self::Htmlarea => "htmlarea",
            Self::Image => "image",
            Self::ImageInline => "image_inline",
            Self::Raw => "raw",
        }
    }
}

/// One `<option>` of a select field.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FieldOption {
    /// Submitted value.
    pub key: String,
    /// Displayed text.
    pub value: String,
}

impl FieldOption {
    /// Creates an option.
    pub fn new(key: impl Into<String>, value: impl Into<String>) -> Self {
        Self {
            key: key.into(),
            value: value.into(),
        }
    }
}

/// Computes select options at render time.
pub type OptionsProvider = Arc<dyn Fn() -> Vec<FieldOption> + Send + Sync>;

/// Definition of one form field.
#[derive(Clone, Default)]
pub struct FormField {
    /// DOM id. Empty means a random id is generated at render time.
    pub id: String,
    /// Widget kind.
    pub field_type: FieldType,
    /// Posted-form key and client model key.
    pub name: String,
    /// Default value (create forms) or markup (raw fields).
    pub value: String,
    /// Label. Empty means the name is shown.
    pub label: String,
    /// Help text shown under the widget.
    pub help: String,
    /// Static select options.
    pub options: Vec<FieldOption>,
    /// Computed select options, appended after the static ones.
    pub options_provider: Option<OptionsProvider>,
    /// Whether the field must be non-empty on submit.
    pub required: bool,
}

impl std::fmt::Debug for FormField {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("FormField")
            .field("id", &self.id)
            .field("field_type", &self.field_type)
            .field("name", &self.name)
            .field("label", &self.label)
            .field("required", &self.required)
            .field("options", &self.options)
            .finish_non_exhaustive()
    }
}

impl FormField {
    /// Creates a string field.
    pub fn new(name: impl Into<String>, label: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            label: label.into(),
            ..Self::default()
        }
    }

    /// Creates a raw markup field.
    pub fn raw(markup: impl Into<String>) -> Self {
        Self {
            field_type: FieldType::Raw,
            value: markup.into(),
            ..Self::default()
        }
    }

    /// Sets the widget kind.
    #[must_use]
    pub fn field_type(mut self, field_type: FieldType) -> Self {
        self.field_type = field_type;
        self
    }

    /// Sets the DOM id.
    #[must_use]
    pub fn id(mut self, id: impl Into<String>) -> Self {
        self.id = id.into();
        self
    }

    /// Sets the default value.
    #[must_use]
    pub fn value(mut self, value: impl Into<String>) -> Self {
        self.value = value.into();
        self
    }

    /// Sets help text.
    #[must_use]
    pub fn help(mut self, help: impl Into<String>) -> Self {
        self.help = help.into();
        self
    }

    /// Adds a static select option.
    #[must_use]
    pub fn option(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.options.push(FieldOption::new(key, value));
        self
    }

    /// Sets the computed select options.
    #[must_use]
    pub fn options_provider<F>(mut self, provider: F) -> Self
    where
        F: Fn() -> Vec<FieldOption> + Send + Sync + 'static,
    {
        self.options_provider = Some(Arc::new(provider));
        self
    }

    /// Makes the field required.
    #[must_use]
    pub fn required(mut self) -> Self {
        self.required = true;
        self
    }

    /// The label to display: the label, or the name when no label is set.
    pub fn display_label(&self) -> &str {
        if self.label.is_empty() {
            &self.name
        } else {
            &self.label
        }
    }

    /// Static options followed by computed ones.
    pub fn all_options(&self) -> Vec<FieldOption> {
        let mut options = self.options.clone();
        if let Some(provider) = &self.options_provider {
            options.extend(provider());
        }
        options
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_type_keys() {
        for key in [
            "string",
            "number",
            "password",
            "textarea",
            "blockarea",
            "select",
            "datetime",
            "htmlarea",
            "image",
            "image_inline",
            "raw",
        ] {
            assert_eq!(FieldType::from_key(key).key(), key);
        }
        assert_eq!(FieldType::from_key("color"), FieldType::String);
        assert_eq!(FieldType::from_key(""), FieldType::String);
    }

    #[test]
    fn test_builder() {
        let field = FormField::new("status", "Status")
            .field_type(FieldType::Select)
            .option("active", "Active")
            .options_provider(|| vec![FieldOption::new("deleted", "Deleted")])
            .help("Current status")
            .required();

        assert_eq!(field.name, "status");
        assert!(field.required);
        let keys: Vec<_> = field.all_options().into_iter().map(|o| o.key).collect();
        assert_eq!(keys, ["active", "deleted"]);
    }

    #[test]
    fn test_display_label_falls_back_to_name() {
        assert_eq!(FormField::new("email", "").display_label(), "email");
        assert_eq!(FormField::new("email", "E-mail").display_label(), "E-mail");
    }
}
