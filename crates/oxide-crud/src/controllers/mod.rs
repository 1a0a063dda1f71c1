//! Screen and endpoint handlers.
//!
//! - `manager` - list page with row actions
//! - `create` - create dialog and its submission
//! - `read` - detail page
//! - `update` - edit page and its submission
//! - `trash` - trash confirmation dialog and its submission

pub(crate) mod create;
mod form_app;
pub(crate) mod manager;
pub(crate) mod read;
pub(crate) mod trash;
pub(crate) mod update;

use oxide_crud_router::{Request, Response};

use crate::crud::Crud;
use crate::templates::{render_layout, Breadcrumb, Page};

/// Wraps a page with the configured layout.
fn render_page(crud: &Crud, req: &Request, page: Page) -> Response {
    Response::html(render_layout(crud.config().layout.as_ref(), req, page))
}

/// "Home" followed by the manager page.
fn base_breadcrumbs(crud: &Crud) -> Vec<Breadcrumb> {
    vec![
        Breadcrumb::new("Home", crud.config().home_url.as_str()),
        Breadcrumb::new(
            format!("{} Manager", crud.singular()),
            crud.url(crate::routes::CrudRoute::Manager),
        ),
    ]
}
