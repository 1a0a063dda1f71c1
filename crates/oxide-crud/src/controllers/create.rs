//! Create dialog and submission.

use ironhtml::html;
use ironhtml::typed::Element;
use ironhtml_elements::{Button, Div, H5};
use oxide_crud_forms::{collect_values, validate_required};
use oxide_crud_router::{Request, Response};

use crate::api::ApiResponse;
use crate::crud::Crud;

/// DOM id of the create dialog.
pub(crate) const MODAL_ID: &str = "ModalEntityCreate";

/// Returns the create dialog as a standalone fragment.
pub(crate) fn modal(crud: &Crud) -> Response {
    if !crud.capabilities().create {
        return ApiResponse::error("FuncCreate is required").into_response();
    }
    Response::html(modal_markup(crud))
}

/// Validates the posted create fields and calls the create callback.
pub(crate) fn submit(crud: &Crud, req: &Request) -> Response {
    let Some(create) = crud.config().create.as_ref() else {
        return ApiResponse::error("FuncCreate is required").into_response();
    };

    let fields = &crud.config().create_fields;
    let values = collect_values(fields, |key| req.input(key));
    if let Err(err) = validate_required(fields, &values) {
        return ApiResponse::error(err.to_string()).into_response();
    }

    match create(&values) {
        Ok(id) => {
            tracing::info!(entity_id = %id, "entity created");
            ApiResponse::success_with_entity("Saved successfully", &id)
        }
        Err(err) => {
            tracing::error!(error = %err, "create failed");
            ApiResponse::error(format!("Save failed: {err}"))
        }
    }
    .into_response()
}

/// The create dialog. Its inputs bind to the manager page model.
pub(crate) fn modal_markup(crud: &Crud) -> String {
    let title = format!("New {}", crud.singular());
    let fields = crud
        .renderer()
        .render(&crud.config().create_fields)
        .concat();
    let submit_label = if crud.capabilities().update {
        "Create & Edit"
    } else {
        "Create"
    };

    let close = html! {
        button.type_("button").class("btn btn-secondary").data_bs_dismiss("modal") {
            i.class("bi bi-chevron-left me-2")
            "Close"
        }
    };
    let submit = html! {
        button.type_("button").class("btn btn-primary") {
            i.class("bi bi-check me-2")
            #submit_label
        }
    }
    .attr("v-on:click", "entityCreate");

    Element::<Div>::new()
        .id(MODAL_ID)
        .class("modal fade")
        .attr("tabindex", "-1")
        .child::<Div, _>(|dialog| {
            dialog.class("modal-dialog modal-lg").child::<Div, _>(|content| {
                content
                    .class("modal-content")
                    .child::<Div, _>(|header| {
                        header
                            .class("modal-header")
                            .child::<H5, _>(|h| h.class("modal-title").text(&title))
                            .child::<Button, _>(|b| {
                                b.attr("type", "button")
                                    .class("btn-close")
                                    .data("bs-dismiss", "modal")
                                    .attr("aria-label", "Close")
                            })
                    })
                    .child::<Div, _>(|body| body.class("modal-body").raw(&fields))
                    .child::<Div, _>(|footer| {
                        footer
                            .class("modal-footer")
                            .attr("style", "display:flex;justify-content:space-between;")
                            .raw(close.render())
                            .raw(submit.render())
                    })
            })
        })
        .render()
}
