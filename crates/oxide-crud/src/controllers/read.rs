//! Detail page.

use std::fmt::Write;

use ironhtml::typed::Element;
use ironhtml_elements::{Div, H4};
use oxide_crud_forms::{html_escape, render_text};
use oxide_crud_router::{Request, Response};

use super::{base_breadcrumbs, render_page};
use crate::api::ApiResponse;
use crate::crud::{entity_id, Crud};
use crate::routes::CrudRoute;
use crate::templates::{
    danger_alert, icon_link, render_breadcrumbs, Breadcrumb, Page, DATA_ERROR_MESSAGE,
};

/// Renders the detail page for the requested entity.
pub(crate) fn page(crud: &Crud, req: &Request) -> Response {
    let Some(id) = entity_id(req) else {
        return ApiResponse::error("Entity ID is required").into_response();
    };
    let Some(fetch) = crud.config().fetch_read_data.as_ref() else {
        return ApiResponse::error("FuncFetchReadData is required").into_response();
    };

    let entity = crud.singular();
    let details = match fetch(&id) {
        Ok(pairs) => details_table(&pairs),
        Err(err) => {
            tracing::error!(entity_id = %id, error = %err, "failed to fetch entity details");
            danger_alert(DATA_ERROR_MESSAGE)
        }
    };

    let title = format!("View {entity}");
    let back = icon_link(
        "btn btn-secondary float-end",
        "bi-chevron-left",
        "Back",
        &crud.url(CrudRoute::Manager),
    );

    let mut breadcrumbs = base_breadcrumbs(crud);
    breadcrumbs.push(Breadcrumb::new(
        title.as_str(),
        crud.entity_url(CrudRoute::Read, &id),
    ));

    let edit = crud.capabilities().update.then(|| {
        icon_link(
            "btn btn-primary",
            "bi-pencil-square",
            "Edit",
            &crud.entity_url(CrudRoute::Update, &id),
        )
    });
    let card_title = format!("{entity} Details");
    let card = Element::<Div>::new()
        .class("card")
        .child::<Div, _>(|header| {
            let header = header
                .class("card-header")
                .attr(
                    "style",
                    "display:flex;justify-content:space-between;align-items:center;",
                )
                .child::<H4, _>(|h| h.class("card-title").text(&card_title));
            match &edit {
                Some(edit) => header.raw(edit),
                None => header,
            }
        })
        .child::<Div, _>(|body| body.class("card-body").raw(&details))
        .render();

    let extras = crud
        .config()
        .read_extras
        .as_ref()
        .map(|extras| extras(&id).concat())
        .unwrap_or_default();

    let content = Element::<Div>::new()
        .id("entity-read")
        .class("container")
        .raw(format!("<h1>{}{back}</h1>", html_escape(&title)))
        .raw(render_breadcrumbs(&breadcrumbs))
        .raw(&card)
        .raw(&extras)
        .render();

    render_page(crud, req, Page::new(title, content))
}

/// One row per label and value pair, in the order given.
fn details_table(pairs: &[(String, String)]) -> String {
    let mut html = String::from(r#"<table class="table table-hover table-striped"><tbody>"#);
    for (label, value) in pairs {
        let _ = write!(
            html,
            "<tr><th>{}</th><td>{}</td></tr>",
            render_text(label),
            render_text(value)
        );
    }
    html.push_str("</tbody></table>");
    html
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::{Config, Row};
    use oxide_crud_forms::FormField;

    fn config() -> Config {
        Config::new("/crud")
            .entity_names("User", "Users")
            .rows(|| Ok(vec![Row::new("ID1", ["Jon", "Doe"])]))
            .update_fields(vec![FormField::new("first_name", "First Name")])
            .fetch_read_data(|id| {
                Ok(vec![
                    ("ID".to_string(), id.to_string()),
                    ("Name".to_string(), "<Jon>".to_string()),
                    ("Bio".to_string(), "{!!<em>writer</em>!!}".to_string()),
                ])
            })
    }

    fn render(config: Config, id: &str) -> String {
        let crud = Crud::new(config).unwrap();
        let req = Request::get("/crud").query_param("entity_id", id);
        page(&crud, &req).body_string().unwrap()
    }

    #[test]
    fn test_details() {
        let html = render(config(), "ID1");
        assert!(html.contains("View User"));
        assert!(html.contains("User Details"));
        assert!(html.contains("<tr><th>ID</th><td>ID1</td></tr>"));
        assert!(html.contains("<td>&lt;Jon&gt;</td>"));
        assert!(html.contains("<td><em>writer</em></td>"));
        assert!(html.contains("path=entity-read"));
        assert!(!html.contains("bi-pencil-square"));
    }

    #[test]
    fn test_pairs_keep_order() {
        let html = render(config(), "ID1");
        let id = html.find("<th>ID</th>").unwrap();
        let name = html.find("<th>Name</th>").unwrap();
        let bio = html.find("<th>Bio</th>").unwrap();
        assert!(id < name && name < bio);
    }

    #[test]
    fn test_edit_button_when_editable() {
        let html = render(
            config()
                .fetch_update_data(|_| Ok(Default::default()))
                .update(|_, _| Ok(())),
            "ID1",
        );
        assert!(html.contains("bi-pencil-square"));
    }

    #[test]
    fn test_fetch_error_shows_alert() {
        let html = render(config().fetch_read_data(|_| Err("gone".into())), "ID1");
        assert!(html.contains(DATA_ERROR_MESSAGE));
        assert!(html.contains("User Details"));
        assert!(!html.contains("<table"));
    }

    #[test]
    fn test_extras_are_appended() {
        let html = render(
            config().read_extras(|id| vec![format!("<section>orders of {id}</section>")]),
            "ID2",
        );
        let card = html.find("User Details").unwrap();
        let extra = html.find("<section>orders of ID2</section>").unwrap();
        assert!(card < extra);
    }

    #[test]
    fn test_missing_id() {
        let crud = Crud::new(config()).unwrap();
        let api: ApiResponse = page(&crud, &Request::get("/crud")).json_body().unwrap();
        assert_eq!(api.message, "Entity ID is required");
    }

    #[test]
    fn test_missing_fetch_callback() {
        let mut config = config();
        config.fetch_read_data = None;
        let crud = Crud::new(config).unwrap();
        let req = Request::get("/crud").query_param("entity_id", "ID1");
        let api: ApiResponse = page(&crud, &req).json_body().unwrap();
        assert_eq!(api.message, "FuncFetchReadData is required");
    }
}
