//! Form rendering.
//!
//! Widgets are emitted as Bootstrap 5 markup bound to a Vue model named
//! `entityModel`; the page script owns that model and posts it back.

use ironhtml::html;
use rand::RngExt;

use crate::escape::{html_escape, render_text};
use crate::field::{FieldType, FormField};

/// Client-side model object every widget binds to.
pub const MODEL: &str = "entityModel";

/// Client-side scratch object for UI toggles.
const SCRATCH: &str = "tmp";

const NO_IMAGE_URL: &str = "https://www.freeiconspng.com/uploads/no-image-icon-11.PNG";

const ID_ALPHABET: &[u8] = b"abcdefghijklmnopqrstuvwxyz1234567890";
const ID_LENGTH: usize = 32;

/// Generates a DOM id of the form `id_` + 32 random `[a-z0-9]` characters.
pub fn random_field_id() -> String {
    let mut rng = rand::rng();
    let suffix: String = (0..ID_LENGTH)
        .map(|_| char::from(ID_ALPHABET[rng.random_range(0..ID_ALPHABET.len())]))
        .collect();
    format!("id_{suffix}")
}

/// A JavaScript member expression for `key` on `object`.
///
/// Plain identifiers use dot access, anything else is bracket-quoted with a
/// JSON string literal.
pub fn js_member(object: &str, key: &str) -> String {
    let mut chars = key.chars();
    let is_ident = chars
        .next()
        .is_some_and(|c| c.is_ascii_alphabetic() || c == '_' || c == '$')
        && chars.all(|c| c.is_ascii_alphanumeric() || c == '_' || c == '$');
    if is_ident {
        format!("{object}.{key}")
    } else {
        let quoted = serde_json::Value::String(key.to_string()).to_string();
        format!("{object}[{quoted}]")
    }
}

/// Renders field lists into form-group fragments.
#[derive(Debug, Clone, Default)]
pub struct FormRenderer {
    file_manager_url: Option<String>,
}

impl FormRenderer {
    /// Creates a renderer without a file manager.
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the file manager linked from image fields. Empty disables it.
    #[must_use]
    pub fn file_manager_url(mut self, url: impl Into<String>) -> Self {
        let url = url.into();
        self.file_manager_url = (!url.is_empty()).then_some(url);
        self
    }

    /// Renders every field in order.
    ///
    /// Each field yields one `form-group` fragment. Block editors add a
    /// second fragment holding their start-up script.
    pub fn render(&self, fields: &[FormField]) -> Vec<String> {
        fields
            .iter()
            .flat_map(|field| self.render_field(field))
            .collect()
    }

    /// Renders one field.
    pub fn render_field(&self, field: &FormField) -> Vec<String> {
        let id = if field.id.is_empty() {
            random_field_id()
        } else {
            field.id.clone()
        };

        if field.field_type == FieldType::Raw {
            let group = html! { div.class("form-group mb-3") }
                .raw(&field.value)
                .render();
            return vec![group];
        }

        let label = render_label(field, &id);
        let widget = self.render_widget(field, &id);
        let mut group = html! { div.class("form-group mb-3") }
            .raw(label)
            .raw(&widget);
        if !field.help.is_empty() {
            let help = format!(r#"<p class="text-info">{}</p>"#, render_text(&field.help));
            group = group.raw(help);
        }

        let mut fragments = vec![group.render()];
        if field.field_type == FieldType::Blockarea {
            fragments.push(blockarea_script(&id));
        }
        fragments
    }

    fn render_widget(&self, field: &FormField, id: &str) -> String {
        let id = html_escape(id);
        let name = html_escape(&field.name);
        let model = html_escape(&js_member(MODEL, &field.name));

        match field.field_type {
            FieldType::String | FieldType::Number | FieldType::Password => {
                let input_type = match field.field_type {
                    FieldType::Number => "number",
                    FieldType::Password => "password",
                    _ => "text",
                };
                format!(
                    r#"<input type="{input_type}" class="form-control" id="{id}" name="{name}" v-model="{model}">"#
                )
            }
            FieldType::Textarea | FieldType::Blockarea => format!(
                r#"<textarea class="form-control" id="{id}" name="{name}" v-model="{model}"></textarea>"#
            ),
            FieldType::Select => {
                let options: String = field
                    .all_options()
                    .iter()
                    .map(|opt| {
                        format!(
                            r#"<option value="{}">{}</option>"#,
                            html_escape(&opt.key),
                            html_escape(&opt.value)
                        )
                    })
                    .collect();
                format!(
                    r#"<select class="form-select" id="{id}" name="{name}" v-model="{model}">{options}</select>"#
                )
            }
            FieldType::Datetime => format!(
                r#"<el-date-picker type="datetime" id="{id}" v-model="{model}"></el-date-picker>"#
            ),
            FieldType::Htmlarea => format!(
                r#"<trumbowyg class="form-control" id="{id}" v-model="{model}" :config="trumbowygConfig"></trumbowyg>"#
            ),
            FieldType::Image => {
                let browse = self
                    .file_manager_url
                    .as_ref()
                    .map(|url| {
                        format!(
                            r#"<span class="input-group-text"><a href="{}" target="_blank">Browse</a></span>"#,
                            html_escape(url)
                        )
                    })
                    .unwrap_or_default();
                format!(
                    r#"<div id="{id}">{preview}<div class="input-group"><input type="url" class="form-control" name="{name}" v-model="{model}">{browse}</div></div>"#,
                    preview = image_preview(&field.name),
                )
            }
            FieldType::ImageInline => {
                let toggle = html_escape(&js_member(SCRATCH, &format!("show_url_{}", field.name)));
                let field_arg =
                    html_escape(&serde_json::Value::String(field.name.clone()).to_string());
                format!(
                    concat!(
                        r#"<div id="{id}">{preview}"#,
                        r#"<input type="file" accept="image/*" v-on:change="uploadImage($event, {arg})">"#,
                        r#"<button type="button" class="btn btn-sm btn-outline-secondary" v-on:click="{toggle} = !{toggle}">See Image Data</button>"#,
                        r#"<textarea class="form-control" name="{name}" v-if="{toggle}" v-model="{model}"></textarea>"#,
                        "</div>"
                    ),
                    id = id,
                    preview = image_preview(&field.name),
                    arg = field_arg,
                    toggle = toggle,
                    name = name,
                    model = model,
                )
            }
            FieldType::Raw => field.value.clone(),
        }
    }
}

fn render_label(field: &FormField, id: &str) -> String {
    let marker = if field.required {
        r#"<sup class="text-danger ml-1">*</sup>"#
    } else {
        ""
    };
    format!(
        r#"<label class="form-label" for="{}">{}{marker}</label>"#,
        html_escape(id),
        html_escape(field.display_label())
    )
}

fn image_preview(name: &str) -> String {
    let src = html_escape(&format!("{}||'{NO_IMAGE_URL}'", js_member(MODEL, name)));
    format!(r#"<img v-bind:src="{src}" style="width:200px;" alt="">"#)
}

fn blockarea_script(id: &str) -> String {
    let id_literal = serde_json::Value::String(id.to_string()).to_string();
    let script = format!(
        "setTimeout(() => {{ const blockArea = new BlockArea({id_literal}); \
         blockArea.registerBlock(BlockAreaHeading); \
         blockArea.registerBlock(BlockAreaText); \
         blockArea.registerBlock(BlockAreaImage); \
         blockArea.registerBlock(BlockAreaCode); \
         blockArea.registerBlock(BlockAreaRawHtml); \
         blockArea.init(); }}, 2000)"
    );
    format!(
        r#"<component :is="'script'">{}</component>"#,
        html_escape(&script)
    )
}
