//! Manager page: the entity table with its row actions.

use std::collections::BTreeMap;
use std::fmt::Write;

use ironhtml::html;
use ironhtml::typed::Element;
use ironhtml_elements::{Button, Div, A, I};
use oxide_crud_forms::{html_escape, render_text, unwrap_raw};
use oxide_crud_router::{Request, Response};

use super::{base_breadcrumbs, create, form_app, render_page, trash};
use crate::bootstrap::{page_constant, ManagerBootstrap};
use crate::config::Row;
use crate::crud::Crud;
use crate::routes::CrudRoute;
use crate::templates::{danger_alert, render_breadcrumbs, DATA_ERROR_MESSAGE};

const TABLE_ID: &str = "TableEntities";

const MANAGER_SCRIPT: &str = r#"
const entityModal = (id) => bootstrap.Modal.getOrCreateInstance(document.getElementById(id));
const EntityManager = {
    mixins: [formWidgets],
    data() {
        return {
            entityModel: { ...page.defaults },
            entityTrashModel: { entityId: null },
        };
    },
    mounted() {
        this.initDataTable();
    },
    methods: {
        initDataTable() {
            $(() => {
                $('#TableEntities').DataTable({ order: [[0, 'asc']] });
            });
        },
        showEntityCreateModal() {
            entityModal('ModalEntityCreate').show();
        },
        showEntityTrashModal(entityId) {
            this.entityTrashModel.entityId = entityId;
            entityModal('ModalEntityTrash').show();
        },
        entityCreate() {
            $.post(page.createUrl, this.entityModel).done((response) => {
                if (response.status !== 'success') {
                    return Swal.fire({ icon: 'error', title: 'Oops...', text: response.message });
                }
                entityModal('ModalEntityCreate').hide();
                if (page.updateUrl === null) {
                    return location.reload();
                }
                location.href = page.updateUrl + '&entity_id=' + encodeURIComponent(response.data.entity_id);
            }).fail((xhr) => {
                Swal.fire({ icon: 'error', title: 'Oops...', text: xhr.statusText });
            });
        },
        entityTrash() {
            const data = { entity_id: this.entityTrashModel.entityId };
            $.post(page.trashUrl, data).done((response) => {
                if (response.status !== 'success') {
                    return Swal.fire({ icon: 'error', title: 'Oops...', text: response.message });
                }
                entityModal('ModalEntityTrash').hide();
                Swal.fire({ icon: 'success', title: response.message });
                setTimeout(() => location.reload(), 3000);
            }).fail((xhr) => {
                Swal.fire({ icon: 'error', title: 'Oops...', text: xhr.statusText });
            });
        },
    },
};
const entityManager = mountFormApp(EntityManager, '#entity-manager');
document.addEventListener('click', (event) => {
    const button = event.target.closest('[data-entity-trash]');
    if (button !== null) {
        entityManager.showEntityTrashModal(button.getAttribute('data-entity-trash'));
    }
});
"#;

/// Renders the manager page.
pub(crate) fn page(crud: &Crud, req: &Request) -> Response {
    let caps = crud.capabilities();
    let title = format!("{} Manager", crud.singular());

    let rows = match crud.config().rows.as_ref() {
        Some(rows) => rows(),
        None => Ok(Vec::new()),
    };
    let listing = match rows {
        Ok(rows) => render_table(crud, &rows),
        Err(err) => {
            tracing::error!(error = %err, "failed to list entities");
            danger_alert(DATA_ERROR_MESSAGE)
        }
    };

    let mut app = String::new();
    app.push_str(&heading(&title, caps.create));
    app.push_str(&render_breadcrumbs(&base_breadcrumbs(crud)));
    if caps.create {
        app.push_str(&create::modal_markup(crud));
    }
    if caps.trash {
        app.push_str(&trash::modal());
    }

    let content = Element::<Div>::new()
        .class("container")
        .child::<Div, _>(|d| d.id("entity-manager").raw(&app))
        .raw(&listing)
        .render();

    let data = ManagerBootstrap {
        create_url: crud.url(CrudRoute::CreateAjax),
        update_url: caps.update.then(|| crud.url(CrudRoute::Update)),
        trash_url: crud.url(CrudRoute::TrashAjax),
        defaults: crud
            .config()
            .create_fields
            .iter()
            .filter(|field| !field.name.is_empty())
            .map(|field| (field.name.clone(), field.value.clone()))
            .collect::<BTreeMap<_, _>>(),
    };

    let page = crate::templates::Page::new(title, content)
        .style_urls(&form_app::FORM_STYLES)
        .style("html{width:100%;}")
        .script_urls(&form_app::FORM_SCRIPTS)
        .script(format!(
            "{}{}",
            page_constant(&data),
            form_app::script(MANAGER_SCRIPT)
        ));
    render_page(crud, req, page)
}

fn heading(title: &str, with_create: bool) -> String {
    let mut button = String::new();
    if with_create {
        let label = format!("New {}", title.trim_end_matches(" Manager"));
        button = html! {
            button.type_("button").class("btn btn-success float-end") {
                i.class("bi bi-plus-circle me-2")
                #label
            }
        }
        .attr("v-on:click", "showEntityCreateModal")
        .render();
    }
    format!("<h1>{}{button}</h1>", html_escape(title))
}

/// Renders the entity table.
///
/// Column names wrapped in `{!! !!}` mark raw columns: their header and
/// cells are emitted without escaping.
fn render_table(crud: &Crud, rows: &[Row]) -> String {
    let columns = &crud.config().column_names;
    let raw_columns: Vec<bool> = columns.iter().map(|c| unwrap_raw(c).is_some()).collect();

    let mut html = format!(
        r#"<table id="{TABLE_ID}" class="table table-responsive table-striped mt-3"><thead><tr>"#
    );
    for column in columns {
        let header = match unwrap_raw(column) {
            Some(inner) => inner.to_string(),
            None => html_escape(column),
        };
        let _ = write!(html, "<th>{header}</th>");
    }
    html.push_str(r#"<th style="width:120px;">Actions</th></tr></thead><tbody>"#);

    for row in rows {
        if row.data.len() != columns.len() {
            tracing::warn!(
                entity_id = %row.id,
                cells = row.data.len(),
                columns = columns.len(),
                "row length does not match column count"
            );
        }

        html.push_str("<tr>");
        for (i, cell) in row.data.iter().enumerate() {
            let cell = if raw_columns.get(i).copied().unwrap_or(false) {
                unwrap_raw(cell).unwrap_or_else(|| cell.trim()).to_string()
            } else {
                render_text(cell)
            };
            let _ = write!(html, "<td>{cell}</td>");
        }
        for _ in row.data.len()..columns.len() {
            html.push_str("<td></td>");
        }
        let _ = write!(
            html,
            r#"<td style="white-space:nowrap;">{}</td></tr>"#,
            row_actions(crud, &row.id)
        );
    }

    html.push_str("</tbody></table>");
    html
}

fn row_actions(crud: &Crud, id: &str) -> String {
    let caps = crud.capabilities();
    let mut actions = String::new();

    if caps.read {
        actions.push_str(&action_link(
            "btn btn-sm btn-outline-info",
            "Show",
            "bi bi-eye",
            &crud.entity_url(CrudRoute::Read, id),
        ));
    }
    if caps.update {
        actions.push_str(&action_link(
            "btn btn-sm btn-outline-warning",
            "Edit",
            "bi bi-pencil-square",
            &crud.entity_url(CrudRoute::Update, id),
        ));
    }
    if caps.trash {
        let button = Element::<Button>::new()
            .attr("type", "button")
            .class("btn btn-sm btn-outline-danger")
            .attr("title", "Trash")
            .data("entity-trash", id)
            .child::<I, _>(|i| i.class("bi bi-trash"))
            .render();
        actions.push_str(&button);
    }
    actions
}

fn action_link(class: &str, title: &str, icon: &str, url: &str) -> String {
    Element::<A>::new()
        .class(class)
        .attr("href", url)
        .attr("title", title)
        .attr("style", "margin-right:5px;")
        .child::<I, _>(|i| i.class(icon))
        .render()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::assets;
    use crate::config::Config;
    use oxide_crud_forms::{FieldType, FormField};

    fn config() -> Config {
        Config::new("/crud")
            .entity_names("User", "Users")
            .column_names(["First Name", "Last Name"])
            .rows(|| {
                Ok(vec![
                    Row::new("ID1", ["Jon", "Doe"]),
                    Row::new("ID2", ["Sarah", "Smith"]),
                ])
            })
            .update_fields(vec![FormField::new("first_name", "First Name")])
    }

    fn render(config: Config) -> String {
        let crud = Crud::new(config).unwrap();
        page(&crud, &Request::get("/crud")).body_string().unwrap()
    }

    #[test]
    fn test_table() {
        let html = render(config());
        assert!(html.contains(r#"id="TableEntities""#));
        assert!(html.contains("<th>First Name</th>"));
        assert!(html.contains("Actions</th>"));
        assert!(html.contains("<td>Sarah</td>"));
        assert!(html.contains("User Manager"));
        assert!(!html.contains("ModalEntityCreate\""));
    }

    #[test]
    fn test_cells_are_escaped() {
        let html = render(
            config().rows(|| Ok(vec![Row::new("ID1", ["<b>Jon</b>", "{!!<b>Doe</b>!!}"])])),
        );
        assert!(html.contains("<td>&lt;b&gt;Jon&lt;/b&gt;</td>"));
        assert!(html.contains("<td><b>Doe</b></td>"));
    }

    #[test]
    fn test_raw_column() {
        let html = render(
            config()
                .column_names(["Name", "{!!<i>Avatar</i>!!}"])
                .rows(|| Ok(vec![Row::new("ID1", ["Jon", " <img src=\"a.png\"> "])])),
        );
        assert!(html.contains("<th><i>Avatar</i></th>"));
        assert!(html.contains(r#"<td><img src="a.png"></td>"#));
    }

    #[test]
    fn test_short_row_is_padded() {
        let html = render(config().rows(|| Ok(vec![Row::new("ID1", ["Jon"])])));
        assert!(html.contains("<td>Jon</td><td></td>"));
    }

    #[test]
    fn test_rows_error_shows_alert() {
        let html = render(config().rows(|| Err("db down".into())));
        assert!(html.contains(DATA_ERROR_MESSAGE));
        assert!(!html.contains("TableEntities\""));
        assert!(!html.contains("db down"));
    }

    #[test]
    fn test_create_button_and_modal() {
        let html = render(
            config()
                .create_fields(vec![FormField::new("name", "Name").value("anon")])
                .create(|_| Ok("ID4".into())),
        );
        assert!(html.contains("New User"));
        assert!(html.contains(r#"v-on:click="showEntityCreateModal""#));
        assert!(html.contains(r#"id="ModalEntityCreate""#));
        assert!(html.contains(r#""defaults":{"name":"anon"}"#));
        assert!(html.contains(r#""updateUrl":null"#));
    }

    #[test]
    fn test_create_dialog_widgets_are_wired() {
        let html = render(
            config()
                .create_fields(vec![
                    FormField::new("avatar", "Avatar").field_type(FieldType::ImageInline),
                    FormField::new("bio", "Bio").field_type(FieldType::Htmlarea),
                    FormField::new("born_at", "Born At").field_type(FieldType::Datetime),
                ])
                .create(|_| Ok("ID4".into())),
        );

        assert!(html.contains(r#"v-if="tmp.show_url_avatar""#));
        assert!(html.contains(r#":config="trumbowygConfig""#));
        assert!(html.contains("<el-date-picker"));

        assert!(html.contains("mixins: [formWidgets]"));
        assert!(html.contains("tmp: {}"));
        assert!(html.contains("trumbowygConfig: {"));
        assert!(html.contains("uploadImage(event, fieldName)"));
        assert!(html.contains(".use(ElementPlus)"));
        assert!(html.contains(".component('Trumbowyg', VueTrumbowyg.default)"));
        assert!(html.contains("const entityManager = mountFormApp(EntityManager, '#entity-manager')"));

        for url in [
            assets::TRUMBOWYG_CSS,
            assets::ELEMENT_PLUS_CSS,
            assets::TRUMBOWYG_JS,
            assets::VUE_TRUMBOWYG_JS,
            assets::ELEMENT_PLUS_JS,
        ] {
            assert!(html.contains(url), "missing asset {url}");
        }
    }

    #[test]
    fn test_trash_button_carries_id() {
        let html = render(config().trash(|_| Ok(())));
        assert!(html.contains(r#"data-entity-trash="ID2""#));
        assert!(html.contains(r#"id="ModalEntityTrash""#));
    }
}
