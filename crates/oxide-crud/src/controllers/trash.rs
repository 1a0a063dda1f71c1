//! Trash confirmation dialog and submission.

use ironhtml::typed::Element;
use ironhtml_elements::{Button, Div, P, H5};
use oxide_crud_router::{Request, Response};

use crate::api::ApiResponse;
use crate::crud::{entity_id, Crud};

/// DOM id of the confirmation dialog.
pub(crate) const MODAL_ID: &str = "ModalEntityTrash";

/// Trashes the posted `entity_id`.
pub(crate) fn submit(crud: &Crud, req: &Request) -> Response {
    let Some(id) = entity_id(req) else {
        return ApiResponse::error("Entity ID is required").into_response();
    };
    let Some(trash) = crud.config().trash.as_ref() else {
        return ApiResponse::error("FuncTrash is required").into_response();
    };

    match trash(&id) {
        Ok(()) => {
            tracing::info!(entity_id = %id, "entity trashed");
            ApiResponse::success_with_entity("Entity trashed successfully", &id)
        }
        Err(err) => {
            tracing::error!(entity_id = %id, error = %err, "trash failed");
            ApiResponse::error(format!("Entity failed to be trashed: {err}"))
        }
    }
    .into_response()
}

/// The confirmation dialog, driven by the manager page script.
pub(crate) fn modal() -> String {
    Element::<Div>::new()
        .id(MODAL_ID)
        .class("modal fade")
        .attr("tabindex", "-1")
        .child::<Div, _>(|dialog| {
            dialog.class("modal-dialog").child::<Div, _>(|content| {
                content
                    .class("modal-content")
                    .child::<Div, _>(|header| {
                        header
                            .class("modal-header")
                            .child::<H5, _>(|h| h.class("modal-title").text("Trash Entity"))
                    })
                    .child::<Div, _>(|body| {
                        body.class("modal-body").child::<P, _>(|p| {
                            p.text("Are you sure you want to move this entity to trash bin?")
                        })
                    })
                    .child::<Div, _>(|footer| {
                        footer
                            .class("modal-footer")
                            .child::<Button, _>(|b| {
                                b.attr("type", "button")
                                    .class("btn btn-secondary")
                                    .data("bs-dismiss", "modal")
                                    .text("Close")
                            })
                            .child::<Button, _>(|b| {
                                b.attr("type", "button")
                                    .class("btn btn-danger")
                                    .attr("v-on:click", "entityTrash")
                                    .text("Move to trash bin")
                            })
                    })
            })
        })
        .render()
}
