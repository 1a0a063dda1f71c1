//! The request handler.

use std::sync::Arc;

use futures::future::{ready, Ready};
use oxide_crud_forms::{FormField, FormRenderer};
use oxide_crud_router::{url_encode, Request, Response};

use crate::config::{Capabilities, Config};
use crate::controllers;
use crate::error::{CrudError, Result};
use crate::routes::{CrudRoute, ROUTE_PARAM};

/// Name of the request parameter carrying the entity id.
pub const ENTITY_ID_PARAM: &str = "entity_id";

/// A configured CRUD handler.
///
/// Cheap to clone; all clones share the same configuration.
#[derive(Clone, Debug)]
pub struct Crud {
    config: Arc<Config>,
    capabilities: Capabilities,
    renderer: FormRenderer,
}

impl Crud {
    /// Validates the configuration and builds the handler.
    ///
    /// # Errors
    ///
    /// Fails when the row listing callback or the update fields are missing,
    /// or when edit page data can be fetched but not saved.
    pub fn new(config: Config) -> Result<Self> {
        if config.rows.is_none() {
            return Err(CrudError::FuncRowsRequired);
        }
        if config.update_fields.is_empty() {
            return Err(CrudError::UpdateFieldsRequired);
        }
        if config.fetch_update_data.is_some() && config.update.is_none() {
            return Err(CrudError::FuncUpdateRequired);
        }

        let capabilities = Capabilities::of(&config);
        let renderer = FormRenderer::new().file_manager_url(config.file_manager_url.clone());
        tracing::debug!(
            endpoint = %config.endpoint,
            entity = %config.entity_name_singular,
            ?capabilities,
            "crud handler configured"
        );

        Ok(Self {
            config: Arc::new(config),
            capabilities,
            renderer,
        })
    }

    /// Dispatches a request on the `path` query string parameter.
    ///
    /// A posted form field with the same name never selects the route.
    pub fn handle(&self, req: &Request) -> Response {
        let route = CrudRoute::from_key(req.query_value(ROUTE_PARAM).unwrap_or(""));
        tracing::debug!(route = route.key(), "dispatching crud request");

        match route {
            CrudRoute::Manager => controllers::manager::page(self, req),
            CrudRoute::CreateModal => controllers::create::modal(self),
            CrudRoute::CreateAjax => controllers::create::submit(self, req),
            CrudRoute::Read => controllers::read::page(self, req),
            CrudRoute::Update => controllers::update::page(self, req),
            CrudRoute::UpdateAjax => controllers::update::submit(self, req),
            CrudRoute::TrashAjax => controllers::trash::submit(self, req),
        }
    }

    /// Turns the handler into an async route handler for
    /// [`oxide_crud_router::Router`].
    pub fn into_handler(self) -> impl Fn(Request) -> Ready<Response> + Send + Sync + 'static {
        move |req| ready(self.handle(&req))
    }

    /// Link to a route: the endpoint plus `path=<key>`.
    pub fn url(&self, route: CrudRoute) -> String {
        let endpoint = &self.config.endpoint;
        let separator = if endpoint.contains('?') { '&' } else { '?' };
        format!("{endpoint}{separator}{ROUTE_PARAM}={}", route.key())
    }

    /// Link to a route for one entity.
    pub fn entity_url(&self, route: CrudRoute, entity_id: &str) -> String {
        format!(
            "{}&{ENTITY_ID_PARAM}={}",
            self.url(route),
            url_encode(entity_id)
        )
    }

    /// Enabled screens and row actions.
    pub fn capabilities(&self) -> Capabilities {
        self.capabilities
    }

    /// The configuration the handler was built from.
    pub fn config(&self) -> &Config {
        &self.config
    }

    /// Field schema of the detail page.
    pub fn read_fields(&self) -> &[FormField] {
        &self.config.read_fields
    }

    pub(crate) fn renderer(&self) -> &FormRenderer {
        &self.renderer
    }

    pub(crate) fn singular(&self) -> &str {
        &self.config.entity_name_singular
    }
}

/// The trimmed `entity_id` input, if present and non-blank.
pub(crate) fn entity_id(req: &Request) -> Option<String> {
    let id = req.input(ENTITY_ID_PARAM)?.trim();
    (!id.is_empty()).then(|| id.to_string())
}
