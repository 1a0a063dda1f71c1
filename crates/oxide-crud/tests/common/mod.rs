#![allow(dead_code)]

use std::collections::HashMap;

use oxide_crud::{ApiResponse, Config, Crud, FormField, Row};
use oxide_crud_router::Request;

/// A users screen with only the mandatory callbacks.
pub fn base_config() -> Config {
    Config::new("/crud")
        .home_url("/")
        .entity_names("User", "Users")
        .column_names(["First Name", "Last Name"])
        .rows(|| {
            Ok(vec![
                Row::new("ID1", ["Jon", "Doe"]),
                Row::new("ID2", ["Sarah", "Smith"]),
                Row::new("ID3", ["Tom", "Sawyer"]),
            ])
        })
        .create_fields(vec![FormField::new("name", "Name").required()])
        .update_fields(vec![
            FormField::new("first_name", "First Name").required(),
            FormField::new("last_name", "Last Name").required(),
        ])
}

/// Every callback configured.
pub fn full_config() -> Config {
    base_config()
        .create(|_| Ok("ID4".to_string()))
        .fetch_read_data(|id| Ok(vec![("ID".to_string(), id.to_string())]))
        .fetch_update_data(|_| {
            Ok(HashMap::from([
                ("first_name".to_string(), "Jon".to_string()),
                ("last_name".to_string(), "Doe".to_string()),
            ]))
        })
        .update(|_, _| Ok(()))
        .trash(|_| Ok(()))
}

pub fn crud(config: Config) -> Crud {
    Crud::new(config).unwrap_or_else(|e| panic!("Invalid config: {e}"))
}

/// GETs a route and returns the body.
pub fn get_page(crud: &Crud, path: Option<&str>, entity_id: Option<&str>) -> String {
    let mut req = Request::get("/crud");
    if let Some(path) = path {
        req = req.query_param("path", path);
    }
    if let Some(id) = entity_id {
        req = req.query_param("entity_id", id);
    }
    crud.handle(&req)
        .body_string()
        .unwrap_or_else(|| panic!("Non UTF-8 body for {path:?}"))
}

/// POSTs form parameters to a route and decodes the JSON payload.
pub fn post_ajax(crud: &Crud, path: &str, params: &[(&str, &str)]) -> ApiResponse {
    let mut req = Request::post("/crud").query_param("path", path);
    for (key, value) in params {
        req = req.form_param(*key, *value);
    }
    let response = crud.handle(&req);
    assert_eq!(response.status, 200);
    response
        .json_body()
        .unwrap_or_else(|e| panic!("Expected JSON payload from {path}: {e}"))
}
