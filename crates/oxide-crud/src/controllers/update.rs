//! Edit page and submission.

use std::collections::BTreeMap;

use ironhtml::html;
use ironhtml::typed::Element;
use ironhtml_elements::Div;
use oxide_crud_forms::{collect_values, html_escape, validate_required};
use oxide_crud_router::{Request, Response};

use super::{base_breadcrumbs, form_app, render_page};
use crate::api::ApiResponse;
use crate::bootstrap::{page_constant, UpdateBootstrap};
use crate::crud::{entity_id, Crud};
use crate::routes::CrudRoute;
use crate::templates::{render_breadcrumbs, Breadcrumb, Page};

const UPDATE_SCRIPT: &str = r#"
const EntityUpdate = {
    mixins: [formWidgets],
    data() {
        return {
            entityModel: { ...page.values },
        };
    },
    methods: {
        entitySave(redirect) {
            const data = { ...this.entityModel, entity_id: page.entityId };
            $.post(page.updateUrl, data).done((response) => {
                if (response.status !== 'success') {
                    return Swal.fire({ icon: 'error', title: 'Oops...', text: response.message });
                }
                Swal.fire({ icon: 'success', title: response.message });
                if (redirect === true) {
                    setTimeout(() => { location.href = page.managerUrl; }, 3000);
                }
            }).fail((xhr) => {
                Swal.fire({ icon: 'error', title: 'Oops...', text: xhr.statusText });
            });
        },
    },
};
mountFormApp(EntityUpdate, '#entity-update');
"#;

/// Renders the edit page for the requested entity.
pub(crate) fn page(crud: &Crud, req: &Request) -> Response {
    let Some(id) = entity_id(req) else {
        return ApiResponse::error("Entity ID is required").into_response();
    };
    let Some(fetch) = crud
        .config()
        .fetch_update_data
        .as_ref()
        .filter(|_| crud.capabilities().update)
    else {
        return ApiResponse::error("FuncFetchUpdateData is required").into_response();
    };

    let fetched = match fetch(&id) {
        Ok(values) => values,
        Err(err) => {
            tracing::error!(entity_id = %id, error = %err, "failed to fetch entity for edit");
            return ApiResponse::error("Fetch data failed").into_response();
        }
    };

    let fields = &crud.config().update_fields;
    let mut values: BTreeMap<String, String> = fields
        .iter()
        .filter(|field| !field.name.is_empty())
        .map(|field| (field.name.clone(), field.value.clone()))
        .collect();
    values.extend(fetched);

    let title = format!("Edit {}", crud.singular());
    let mut breadcrumbs = base_breadcrumbs(crud);
    breadcrumbs.push(Breadcrumb::new(
        title.as_str(),
        crud.entity_url(CrudRoute::Update, &id),
    ));

    let content = Element::<Div>::new()
        .id("entity-update")
        .class("container")
        .raw(heading(&title))
        .raw(render_breadcrumbs(&breadcrumbs))
        .raw(crud.renderer().render(fields).concat())
        .render();

    let data = UpdateBootstrap {
        manager_url: crud.url(CrudRoute::Manager),
        update_url: crud.url(CrudRoute::UpdateAjax),
        trash_url: crud.url(CrudRoute::TrashAjax),
        entity_id: id,
        values,
    };

    let page = Page::new(title, content)
        .style_urls(&form_app::FORM_STYLES)
        .script_urls(&form_app::FORM_SCRIPTS)
        .script(format!(
            "{}{}",
            page_constant(&data),
            form_app::script(UPDATE_SCRIPT)
        ));
    render_page(crud, req, page)
}

/// Validates the posted update fields and calls the update callback.
pub(crate) fn submit(crud: &Crud, req: &Request) -> Response {
    let Some(id) = entity_id(req) else {
        return ApiResponse::error("Entity ID is required").into_response();
    };
    let Some(update) = crud.config().update.as_ref() else {
        return ApiResponse::error("FuncUpdate is required").into_response();
    };

    let fields = &crud.config().update_fields;
    let values = collect_values(fields, |key| req.input(key));
    if let Err(err) = validate_required(fields, &values) {
        return ApiResponse::error(err.to_string()).into_response();
    }

    match update(&id, &values) {
        Ok(()) => {
            tracing::info!(entity_id = %id, "entity updated");
            ApiResponse::success_with_entity("Saved successfully", &id)
        }
        Err(err) => {
            tracing::error!(entity_id = %id, error = %err, "update failed");
            ApiResponse::error(format!("Save failed: {err}"))
        }
    }
    .into_response()
}

fn heading(title: &str) -> String {
    let save = html! {
        button.type_("button").class("btn btn-success float-end") {
            i.class("bi bi-check-all me-2")
            "Save"
        }
    }
    .attr("v-on:click", "entitySave(true)");
    let apply = html! {
        button.type_("button").class("btn btn-success float-end") {
            i.class("bi bi-check me-2")
            "Apply"
        }
    }
    .attr("style", "margin-right:10px;")
    .attr("v-on:click", "entitySave(false)");

    format!(
        "<h1>{}{}{}</h1>",
        html_escape(title),
        save.render(),
        apply.render()
    )
}
