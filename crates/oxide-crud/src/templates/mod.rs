//! Page shell and shared Bootstrap 5 components.

mod components;
mod layout;

pub use components::{
    danger_alert, icon_link, render_breadcrumbs, Breadcrumb, DATA_ERROR_MESSAGE,
};
pub use layout::{render_layout, render_shell, Page};
