//! Handler configuration.

use std::collections::HashMap;
use std::sync::Arc;

use oxide_crud_forms::FormField;
use oxide_crud_router::Request;

use crate::error::BoxError;
use crate::templates::Page;

/// Outcome of a caller-supplied callback.
pub type CallbackResult<T> = std::result::Result<T, BoxError>;

/// Lists the manager rows.
pub type RowsFn = Arc<dyn Fn() -> CallbackResult<Vec<Row>> + Send + Sync>;
/// Loads the current values shown on the edit page, keyed by field name.
pub type FetchUpdateDataFn =
    Arc<dyn Fn(&str) -> CallbackResult<HashMap<String, String>> + Send + Sync>;
/// Loads the ordered (label, value) pairs shown on the detail page.
pub type FetchReadDataFn = Arc<dyn Fn(&str) -> CallbackResult<Vec<(String, String)>> + Send + Sync>;
/// Creates an entity from posted values and returns its id.
pub type CreateFn = Arc<dyn Fn(&HashMap<String, String>) -> CallbackResult<String> + Send + Sync>;
/// Saves posted values onto an entity.
pub type UpdateFn = Arc<dyn Fn(&str, &HashMap<String, String>) -> CallbackResult<()> + Send + Sync>;
/// Moves an entity to the trash bin.
pub type TrashFn = Arc<dyn Fn(&str) -> CallbackResult<()> + Send + Sync>;
/// Extra markup fragments appended below the detail table.
pub type ReadExtrasFn = Arc<dyn Fn(&str) -> Vec<String> + Send + Sync>;
/// Wraps page content into a full document.
pub type LayoutFn = Arc<dyn Fn(&Request, &Page) -> String + Send + Sync>;

/// One manager table row.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Row {
    /// Entity id used in row action links.
    pub id: String,
    /// Cell values, one per column.
    pub data: Vec<String>,
}

impl Row {
    /// Creates a row.
    pub fn new<I, S>(id: impl Into<String>, data: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            id: id.into(),
            data: data.into_iter().map(Into::into).collect(),
        }
    }
}

/// Everything a [`crate::Crud`] handler is built from.
///
/// Only the row listing and the update fields are mandatory; every other
/// callback switches on the matching screen or row action.
#[derive(Clone, Default)]
pub struct Config {
    pub(crate) endpoint: String,
    pub(crate) home_url: String,
    pub(crate) entity_name_singular: String,
    pub(crate) entity_name_plural: String,
    pub(crate) file_manager_url: String,
    pub(crate) column_names: Vec<String>,
    pub(crate) create_fields: Vec<FormField>,
    pub(crate) read_fields: Vec<FormField>,
    pub(crate) update_fields: Vec<FormField>,
    pub(crate) rows: Option<RowsFn>,
    pub(crate) fetch_update_data: Option<FetchUpdateDataFn>,
    pub(crate) fetch_read_data: Option<FetchReadDataFn>,
    pub(crate) create: Option<CreateFn>,
    pub(crate) update: Option<UpdateFn>,
    pub(crate) trash: Option<TrashFn>,
    pub(crate) read_extras: Option<ReadExtrasFn>,
    pub(crate) layout: Option<LayoutFn>,
}

impl std::fmt::Debug for Config {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Config")
            .field("endpoint", &self.endpoint)
            .field("home_url", &self.home_url)
            .field("entity_name_singular", &self.entity_name_singular)
            .field("entity_name_plural", &self.entity_name_plural)
            .field("column_names", &self.column_names)
            .field("create_fields", &self.create_fields.len())
            .field("update_fields", &self.update_fields.len())
            .finish_non_exhaustive()
    }
}

impl Config {
    /// Starts a configuration for a handler mounted at `endpoint`.
    ///
    /// The endpoint may already carry a query string; generated links then
    /// append with `&`.
    pub fn new(endpoint: impl Into<String>) -> Self {
        Self {
            endpoint: endpoint.into(),
            ..Self::default()
        }
    }

    /// Link target of the first breadcrumb.
    #[must_use]
    pub fn home_url(mut self, url: impl Into<String>) -> Self {
        self.home_url = url.into();
        self
    }

    /// Display names, e.g. `("User", "Users")`.
    #[must_use]
    pub fn entity_names(mut self, singular: impl Into<String>, plural: impl Into<String>) -> Self {
        self.entity_name_singular = singular.into();
        self.entity_name_plural = plural.into();
        self
    }

    /// File manager linked from image fields.
    #[must_use]
    pub fn file_manager_url(mut self, url: impl Into<String>) -> Self {
        self.file_manager_url = url.into();
        self
    }

    /// Manager table headers. A header wrapped in `{!! !!}` renders its
    /// column unescaped.
    #[must_use]
    pub fn column_names<I, S>(mut self, names: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.column_names = names.into_iter().map(Into::into).collect();
        self
    }

    /// Fields of the create dialog.
    #[must_use]
    pub fn create_fields(mut self, fields: Vec<FormField>) -> Self {
        self.create_fields = fields;
        self
    }

    /// Field schema of the detail page, kept for embedding applications.
    #[must_use]
    pub fn read_fields(mut self, fields: Vec<FormField>) -> Self {
        self.read_fields = fields;
        self
    }

    /// Fields of the edit page.
    #[must_use]
    pub fn update_fields(mut self, fields: Vec<FormField>) -> Self {
        self.update_fields = fields;
        self
    }

    /// Row listing callback.
    #[must_use]
    pub fn rows<F>(mut self, f: F) -> Self
    where
        F: Fn() -> CallbackResult<Vec<Row>> + Send + Sync + 'static,
    {
        self.rows = Some(Arc::new(f));
        self
    }

    /// Loads edit page values.
    #[must_use]
    pub fn fetch_update_data<F>(mut self, f: F) -> Self
    where
        F: Fn(&str) -> CallbackResult<HashMap<String, String>> + Send + Sync + 'static,
    {
        self.fetch_update_data = Some(Arc::new(f));
        self
    }

    /// Loads detail page pairs.
    #[must_use]
    pub fn fetch_read_data<F>(mut self, f: F) -> Self
    where
        F: Fn(&str) -> CallbackResult<Vec<(String, String)>> + Send + Sync + 'static,
    {
        self.fetch_read_data = Some(Arc::new(f));
        self
    }

    /// Creates entities.
    #[must_use]
    pub fn create<F>(mut self, f: F) -> Self
    where
        F: Fn(&HashMap<String, String>) -> CallbackResult<String> + Send + Sync + 'static,
    {
        self.create = Some(Arc::new(f));
        self
    }

    /// Saves entities.
    #[must_use]
    pub fn update<F>(mut self, f: F) -> Self
    where
        F: Fn(&str, &HashMap<String, String>) -> CallbackResult<()> + Send + Sync + 'static,
    {
        self.update = Some(Arc::new(f));
        self
    }

    /// Trashes entities.
    #[must_use]
    pub fn trash<F>(mut self, f: F) -> Self
    where
        F: Fn(&str) -> CallbackResult<()> + Send + Sync + 'static,
    {
        self.trash = Some(Arc::new(f));
        self
    }

    /// Extra detail page markup.
    #[must_use]
    pub fn read_extras<F>(mut self, f: F) -> Self
    where
        F: Fn(&str) -> Vec<String> + Send + Sync + 'static,
    {
        self.read_extras = Some(Arc::new(f));
        self
    }

    /// Replaces the built-in page shell.
    #[must_use]
    pub fn layout<F>(mut self, f: F) -> Self
    where
        F: Fn(&Request, &Page) -> String + Send + Sync + 'static,
    {
        self.layout = Some(Arc::new(f));
        self
    }
}

/// Which optional screens and row actions are switched on.
///
/// Computed once when the handler is built; the UI and the endpoint guards
/// both read these flags.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Capabilities {
    /// Create dialog and "New" button.
    pub create: bool,
    /// Detail page and "view" row action.
    pub read: bool,
    /// Edit page and "edit" row action.
    pub update: bool,
    /// Trash dialog and "trash" row action.
    pub trash: bool,
}

impl Capabilities {
    pub(crate) fn of(config: &Config) -> Self {
        Self {
            create: config.create.is_some(),
            read: config.fetch_read_data.is_some(),
            update: config.fetch_update_data.is_some()
                && config.update.is_some()
                && !config.update_fields.is_empty(),
            trash: config.trash.is_some(),
        }
    }
}
