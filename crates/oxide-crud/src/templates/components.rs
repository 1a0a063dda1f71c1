//! Shared page components.

use ironhtml::html;
use ironhtml::typed::Element;
use ironhtml_elements::{Div, Li, Nav, Ol};

/// Shown in place of a table when a data callback fails.
pub const DATA_ERROR_MESSAGE: &str =
    "There was an error retrieving the data. Please try again later";

/// One breadcrumb link.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Breadcrumb {
    /// Link text.
    pub name: String,
    /// Link target.
    pub url: String,
}

impl Breadcrumb {
    /// Creates a breadcrumb.
    pub fn new(name: impl Into<String>, url: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            url: url.into(),
        }
    }
}

/// Renders a Bootstrap breadcrumb trail. Every item is a link.
pub fn render_breadcrumbs(breadcrumbs: &[Breadcrumb]) -> String {
    Element::<Nav>::new()
        .attr("aria-label", "breadcrumb")
        .child::<Ol, _>(|ol| {
            ol.class("breadcrumb")
                .children(breadcrumbs, |crumb, li: Element<Li>| {
                    let url = &crumb.url;
                    let name = &crumb.name;
                    let link = html! {
                        a.href(#url) { #name }
                    };
                    li.class("breadcrumb-item").raw(link.render())
                })
        })
        .render()
}

/// A red alert box with a plain-text message.
pub fn danger_alert(message: &str) -> String {
    Element::<Div>::new()
        .class("alert alert-danger")
        .attr("role", "alert")
        .text(message)
        .render()
}

/// A link styled as a button, with a leading Bootstrap icon.
pub fn icon_link(class: &str, icon: &str, text: &str, url: &str) -> String {
    let icon_class = format!("bi {icon} me-2");
    let link = html! {
        a.class(#class).href(#url) {
            i.class(#icon_class)
            #text
        }
    };
    link.render()
}
