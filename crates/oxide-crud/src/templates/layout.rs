//! Page layout.

use ironhtml::typed::Document;
use ironhtml_elements::{Body, Div, Head, Html, Link, Meta, Script, Style, Title};
use oxide_crud_router::Request;

use crate::assets;
use crate::config::LayoutFn;

const RESET_CSS: &str = "\
html,body{height:100%;font-family:Ubuntu,sans-serif;}\n\
body{font-family:\"Nunito\",sans-serif;font-size:0.9rem;font-weight:400;\
line-height:1.6;color:#212529;text-align:left;background-color:#f8fafc;}\n\
.form-select{display:block;width:100%;padding:.375rem 2.25rem .375rem .75rem;\
font-size:1rem;font-weight:400;line-height:1.5;color:#212529;background-color:#fff;\
background-image:url(\"data:image/svg+xml,%3csvg xmlns='http://www.w3.org/2000/svg' \
viewBox='0 0 16 16'%3e%3cpath fill='none' stroke='%23343a40' stroke-linecap='round' \
stroke-linejoin='round' stroke-width='2' d='M2 5l6 6 6-6'/%3e%3c/svg%3e\");\
background-repeat:no-repeat;background-position:right .75rem center;\
background-size:16px 12px;border:1px solid #ced4da;border-radius:.25rem;\
-webkit-appearance:none;-moz-appearance:none;appearance:none;}";

/// A page before it is wrapped into a document.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Page {
    /// Document title.
    pub title: String,
    /// Body markup.
    pub content: String,
    /// Extra stylesheets, in load order.
    pub style_urls: Vec<String>,
    /// Inline CSS.
    pub style: String,
    /// Extra scripts, in load order.
    pub script_urls: Vec<String>,
    /// Inline script, run after all scripts are loaded.
    pub script: String,
}

impl Page {
    /// Creates a page with a title and body.
    pub fn new(title: impl Into<String>, content: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            content: content.into(),
            ..Self::default()
        }
    }

    /// Adds stylesheets.
    #[must_use]
    pub fn style_urls(mut self, urls: &[&str]) -> Self {
        self.style_urls.extend(urls.iter().map(|u| (*u).to_string()));
        self
    }

    /// Sets inline CSS.
    #[must_use]
    pub fn style(mut self, css: impl Into<String>) -> Self {
        self.style = css.into();
        self
    }

    /// Adds scripts.
    #[must_use]
    pub fn script_urls(mut self, urls: &[&str]) -> Self {
        self.script_urls.extend(urls.iter().map(|u| (*u).to_string()));
        self
    }

    /// Sets the inline script.
    #[must_use]
    pub fn script(mut self, js: impl Into<String>) -> Self {
        self.script = js.into();
        self
    }
}

/// Wraps a page into a full document.
///
/// A custom layout receives the page with the framework assets it needs
/// placed ahead of the page's own. Without one, the built-in shell is used.
pub fn render_layout(layout: Option<&LayoutFn>, req: &Request, page: Page) -> String {
    match layout {
        Some(layout) => {
            let page = Page {
                style_urls: merge_urls(&assets::CUSTOM_LAYOUT_STYLES, &page.style_urls),
                script_urls: merge_urls(&assets::CUSTOM_LAYOUT_SCRIPTS, &page.script_urls),
                ..page
            };
            layout(req, &page)
        }
        None => render_shell(&page),
    }
}

/// Renders the built-in minimal document.
pub fn render_shell(page: &Page) -> String {
    let styles = merge_urls(&assets::SHELL_STYLES, &page.style_urls);
    let scripts = merge_urls(&assets::SHELL_SCRIPTS, &page.script_urls);

    Document::new()
        .doctype()
        .root::<Html, _>(|html_el| {
            html_el
                .attr("lang", "en")
                .child::<Head, _>(|head| {
                    let mut head = head
                        .child::<Meta, _>(|m| m.attr("charset", "UTF-8"))
                        .child::<Meta, _>(|m| {
                            m.attr("name", "viewport")
                                .attr("content", "width=device-width, initial-scale=1.0")
                        })
                        .child::<Title, _>(|t| t.text(&page.title))
                        .child::<Link, _>(|l| l.attr("rel", "icon").attr("href", assets::FAVICON));
                    for url in &styles {
                        head = head.child::<Link, _>(|l| {
                            l.attr("href", url.as_str()).attr("rel", "stylesheet")
                        });
                    }
                    head.child::<Style, _>(|s| s.raw(RESET_CSS))
                        .when(!page.style.is_empty(), |h| {
                            h.child::<Style, _>(|s| s.raw(&page.style))
                        })
                })
                .child::<Body, _>(|body| {
                    let mut body = body.child::<Div, _>(|d| d.raw(&page.content));
                    for url in &scripts {
                        body = body.child::<Script, _>(|s| s.attr("src", url.as_str()));
                    }
                    body.when(!page.script.is_empty(), |b| {
                        b.child::<Script, _>(|s| s.raw(&page.script))
                    })
                })
        })
        .build()
}

/// `first` followed by `then`, dropping repeated URLs.
fn merge_urls(first: &[&str], then: &[String]) -> Vec<String> {
    let mut merged: Vec<String> = Vec::with_capacity(first.len() + then.len());
    for url in first.iter().copied().chain(then.iter().map(String::as_str)) {
        if !merged.iter().any(|u| u == url) {
            merged.push(url.to_string());
        }
    }
    merged
}
