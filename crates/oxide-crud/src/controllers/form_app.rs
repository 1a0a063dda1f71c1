//! Vue plumbing shared by the pages that host form widgets.
//!
//! The manager's create dialog and the edit page render the same widget
//! set, so both mount their app through [`script`]. The `formWidgets`
//! mixin carries the scratch `tmp` object, the Trumbowyg options and
//! `uploadImage`. `mountFormApp` installs Element Plus and registers the
//! `Trumbowyg` component before mounting.

use crate::assets;

/// Stylesheets for pages carrying the entity table and form widgets.
pub(crate) const FORM_STYLES: [&str; 3] = [
    assets::DATATABLES_CSS,
    assets::TRUMBOWYG_CSS,
    assets::ELEMENT_PLUS_CSS,
];

/// Scripts for pages carrying the entity table and form widgets.
pub(crate) const FORM_SCRIPTS: [&str; 4] = [
    assets::DATATABLES_JS,
    assets::TRUMBOWYG_JS,
    assets::VUE_TRUMBOWYG_JS,
    assets::ELEMENT_PLUS_JS,
];

const FORM_WIDGETS: &str = r#"
const formWidgets = {
    data() {
        return {
            tmp: {},
            trumbowygConfig: {
                btns: [
                    ['undo', 'redo'],
                    ['formatting'],
                    ['strong', 'em', 'del', 'superscript', 'subscript'],
                    ['link', 'justifyLeft', 'justifyRight', 'justifyCenter', 'justifyFull'],
                    ['unorderedList', 'orderedList'],
                    ['horizontalRule'],
                    ['removeformat'],
                    ['fullscreen'],
                ],
                autogrow: true,
                removeformatPasted: true,
                tagsToRemove: ['script', 'link', 'embed', 'iframe', 'input'],
                tagsToKeep: ['hr', 'img', 'i'],
                autogrowOnEnter: true,
                linkTargets: ['_blank'],
            },
        };
    },
    methods: {
        uploadImage(event, fieldName) {
            const file = event.target.files[0];
            if (!file) {
                return;
            }
            const reader = new FileReader();
            reader.onload = () => {
                this.entityModel[fieldName] = reader.result;
            };
            reader.readAsDataURL(file);
        },
    },
};
const mountFormApp = (component, selector) => Vue.createApp(component)
    .use(ElementPlus)
    .component('Trumbowyg', VueTrumbowyg.default)
    .mount(selector);
"#;

/// Prepends the widget mixin and mount helper to a page script.
///
/// The page script declares a component with `mixins: [formWidgets]`
/// and mounts it with `mountFormApp`.
pub(crate) fn script(page_script: &str) -> String {
    format!("{FORM_WIDGETS}{page_script}")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_script_defines_shared_widgets_first() {
        let script = script("mountFormApp({ mixins: [formWidgets] }, '#app');");
        let widgets = script.find("const formWidgets").unwrap();
        let mount = script.find("mountFormApp({").unwrap();
        assert!(widgets < mount);
        assert!(script.contains("tmp: {}"));
        assert!(script.contains("uploadImage(event, fieldName)"));
        assert!(script.contains(".use(ElementPlus)"));
        assert!(script.contains(".component('Trumbowyg', VueTrumbowyg.default)"));
    }

    #[test]
    fn test_assets_cover_widgets() {
        assert!(FORM_SCRIPTS.contains(&assets::ELEMENT_PLUS_JS));
        assert!(FORM_SCRIPTS.contains(&assets::VUE_TRUMBOWYG_JS));
        assert!(FORM_STYLES.contains(&assets::TRUMBOWYG_CSS));
    }
}
