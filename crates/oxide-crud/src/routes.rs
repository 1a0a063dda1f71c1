//! Route keys carried in the `path` request parameter.

/// Name of the request parameter selecting the route.
pub const ROUTE_PARAM: &str = "path";

/// Every screen and endpoint served by a [`crate::Crud`] handler.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CrudRoute {
    /// List page.
    Manager,
    /// Create dialog markup.
    CreateModal,
    /// Create submission.
    CreateAjax,
    /// Detail page.
    Read,
    /// Edit page.
    Update,
    /// Edit submission.
    UpdateAjax,
    /// Trash submission.
    TrashAjax,
}

impl CrudRoute {
    /// Resolves a route key. Empty and unknown keys land on the manager.
    pub fn from_key(key: &str) -> Self {
        match key {
            "entity-create-modal" => Self::CreateModal,
            "entity-create-ajax" => Self::CreateAjax,
            "entity-read" => Self::Read,
            "entity-update" => Self::Update,
            "entity-update-ajax" => Self::UpdateAjax,
            "entity-trash-ajax" => Self::TrashAjax,
            _ => Self::Manager,
        }
    }

    /// Canonical key used when building links.
    pub fn key(self) -> &'static str {
        match self {
            Self::Manager => "entity-manager",
            Self::CreateModal => "entity-create-modal",
            Self::CreateAjax => "entity-create-ajax",
            Self::Read => "entity-read",
            Self::Update => "entity-update",
            Self::UpdateAjax => "entity-update-ajax",
            Self::TrashAjax => "entity-trash-ajax",
        }
    }
}
