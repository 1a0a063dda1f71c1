//! CDN locations of the client-side libraries the pages rely on.

pub const BOOTSTRAP_CSS: &str =
    "https://cdn.jsdelivr.net/npm/bootstrap@5.3.3/dist/css/bootstrap.min.css";
pub const BOOTSTRAP_JS: &str =
    "https://cdn.jsdelivr.net/npm/bootstrap@5.3.3/dist/js/bootstrap.bundle.min.js";
pub const BOOTSTRAP_ICONS_CSS: &str =
    "https://cdn.jsdelivr.net/npm/bootstrap-icons@1.11.1/font/bootstrap-icons.css";
pub const JQUERY_JS: &str = "https://code.jquery.com/jquery-3.7.1.min.js";
pub const VUE_JS: &str = "https://unpkg.com/vue@3/dist/vue.global.js";
pub const SWEETALERT2_JS: &str = "https://cdn.jsdelivr.net/npm/sweetalert2@11";
pub const HTMX_JS: &str = "https://unpkg.com/htmx.org@2.0.0";
pub const ELEMENT_PLUS_JS: &str =
    "https://cdn.jsdelivr.net/npm/element-plus@2.3.8/dist/index.full.min.js";
pub const ELEMENT_PLUS_CSS: &str =
    "https://cdn.jsdelivr.net/npm/element-plus@2.3.8/dist/index.min.css";
pub const DATATABLES_CSS: &str = "https://cdn.datatables.net/1.13.4/css/jquery.dataTables.min.css";
pub const DATATABLES_JS: &str = "https://cdn.datatables.net/1.13.4/js/jquery.dataTables.min.js";
pub const TRUMBOWYG_CSS: &str =
    "https://cdnjs.cloudflare.com/ajax/libs/Trumbowyg/2.27.3/ui/trumbowyg.min.css";
pub const TRUMBOWYG_JS: &str =
    "https://cdnjs.cloudflare.com/ajax/libs/Trumbowyg/2.27.3/trumbowyg.min.js";
pub const VUE_TRUMBOWYG_JS: &str = "https://cdn.jsdelivr.net/npm/vue-trumbowyg@4";

/// Favicon of the built-in page shell.
pub const FAVICON: &str = "data:image/x-icon;base64,AAABAAEAEBAQAAEABAAoAQAAFgAAACgAAAAQAAAAIAAAAAEABAAAAAAAgAAAAAAAAAAAAAAAEAAAAAAAAAAAAAAAmzKzAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAABEQEAAQERAAEAAQABAAEAAQABAQEBEQABAAEREQEAAAERARARAREAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAD//wAA//8AAP//AAD//wAA//8AAP//AAD//wAAi6MAALu7AAC6owAAuC8AAIkjAAD//wAA//8AAP//AAD//wAA";

/// Scripts placed ahead of a page's own when a custom layout is used.
pub const CUSTOM_LAYOUT_SCRIPTS: [&str; 4] = [HTMX_JS, SWEETALERT2_JS, VUE_JS, ELEMENT_PLUS_JS];

/// Stylesheets placed ahead of a page's own when a custom layout is used.
pub const CUSTOM_LAYOUT_STYLES: [&str; 1] = [ELEMENT_PLUS_CSS];

/// Stylesheets of the built-in shell.
pub const SHELL_STYLES: [&str; 2] = [BOOTSTRAP_CSS, BOOTSTRAP_ICONS_CSS];

/// Scripts of the built-in shell.
pub const SHELL_SCRIPTS: [&str; 4] = [BOOTSTRAP_JS, JQUERY_JS, VUE_JS, SWEETALERT2_JS];
