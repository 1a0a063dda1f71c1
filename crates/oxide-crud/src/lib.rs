//! # oxide-crud
//!
//! Callback-driven CRUD admin screens.
//!
//! A [`Crud`] handler is mounted on a single endpoint and serves every
//! screen from it, selected by the `path` query string parameter:
//!
//! | `path`                | Serves                                   |
//! |-----------------------|------------------------------------------|
//! | *(none)*, `home`, `entity-manager` | Entity table with row actions |
//! | `entity-create-modal` | Create dialog fragment                   |
//! | `entity-create-ajax`  | Create submission (JSON)                 |
//! | `entity-read`         | Detail page                              |
//! | `entity-update`       | Edit page                                |
//! | `entity-update-ajax`  | Edit submission (JSON)                   |
//! | `entity-trash-ajax`   | Trash submission (JSON)                  |
//!
//! The handler owns no data. Listing, fetching and persistence go through
//! callbacks, and which of them are configured decides which screens and
//! row actions are offered.
//!
//! ## Quick Start
//!
//! ```rust
//! use oxide_crud::{Config, Crud, FormField, Row};
//! use oxide_crud_router::Request;
//!
//! let config = Config::new("/users")
//!     .entity_names("User", "Users")
//!     .column_names(["First Name", "Last Name"])
//!     .rows(|| Ok(vec![Row::new("ID1", ["Jon", "Doe"])]))
//!     .create_fields(vec![FormField::new("name", "Name").required()])
//!     .update_fields(vec![FormField::new("first_name", "First Name")])
//!     .create(|values| Ok(format!("user-{}", values["name"].len())));
//!
//! let crud = Crud::new(config).unwrap();
//! assert!(crud.capabilities().create);
//!
//! let page = crud.handle(&Request::get("/users"));
//! assert!(page.body_string().unwrap().contains("User Manager"));
//! ```
//!
//! ## Mounting on a router
//!
//! ```rust
//! use oxide_crud::{Config, Crud, FormField, Row};
//! use oxide_crud_router::Router;
//!
//! let crud = Crud::new(
//!     Config::new("/users")
//!         .rows(|| Ok(vec![Row::new("ID1", ["Jon"])]))
//!         .update_fields(vec![FormField::new("first_name", "First Name")]),
//! )
//! .unwrap();
//!
//! let router = Router::new()
//!     .get("/users", crud.clone().into_handler())
//!     .unwrap()
//!     .post("/users", crud.into_handler())
//!     .unwrap();
//! # let _ = router;
//! ```

mod api;
mod assets;
mod bootstrap;
mod config;
mod controllers;
mod crud;
mod error;
mod routes;
pub mod templates;

pub use api::{ApiResponse, ApiStatus};
pub use config::{
    CallbackResult, Capabilities, Config, CreateFn, FetchReadDataFn, FetchUpdateDataFn,
    LayoutFn, ReadExtrasFn, Row, RowsFn, TrashFn, UpdateFn,
};
pub use crud::{Crud, ENTITY_ID_PARAM};
pub use error::{BoxError, CrudError, Result};
pub use routes::{CrudRoute, ROUTE_PARAM};
pub use templates::{Breadcrumb, Page};

pub use oxide_crud_forms::{FieldOption, FieldType, FormField};
