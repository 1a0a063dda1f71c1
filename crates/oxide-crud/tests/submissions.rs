//! Tests for the JSON submission endpoints.

mod common;
use common::*;

use std::collections::HashMap;
use std::sync::{Arc, Mutex};

use oxide_crud::{ApiStatus, FormField};

#[test]
fn create_returns_new_id() {
    let api = post_ajax(&crud(full_config()), "entity-create-ajax", &[("name", "Ada")]);
    assert_eq!(api.status, ApiStatus::Success);
    assert_eq!(api.message, "Saved successfully");
    assert_eq!(api.entity_id(), Some("ID4"));
}

#[test]
fn create_reports_callback_error() {
    let crud = crud(full_config().create(|_| Err("db down".into())));
    let api = post_ajax(&crud, "entity-create-ajax", &[("name", "Ada")]);
    assert_eq!(api.status, ApiStatus::Error);
    assert_eq!(api.message, "Save failed: db down");
    assert!(api.data.is_none());
}

#[test]
fn create_validation_is_fail_fast() {
    let calls = Arc::new(Mutex::new(0));
    let counter = Arc::clone(&calls);
    let crud = crud(
        full_config()
            .create_fields(vec![
                FormField::new("first", "First").required(),
                FormField::new("second", "Second").required(),
            ])
            .create(move |_| {
                *counter.lock().unwrap() += 1;
                Ok("ID4".into())
            }),
    );

    let api = post_ajax(&crud, "entity-create-ajax", &[]);
    assert_eq!(api.message, "First is required field");

    let api = post_ajax(&crud, "entity-create-ajax", &[("first", "a")]);
    assert_eq!(api.message, "Second is required field");

    let api = post_ajax(&crud, "entity-create-ajax", &[("first", "a"), ("second", " ")]);
    assert!(api.is_success());
    assert_eq!(*calls.lock().unwrap(), 1);
}

#[test]
fn create_receives_only_declared_fields() {
    let received = Arc::new(Mutex::new(HashMap::new()));
    let sink = Arc::clone(&received);
    let crud = crud(full_config().create(move |values| {
        *sink.lock().unwrap() = values.clone();
        Ok("ID4".into())
    }));

    post_ajax(&crud, "entity-create-ajax", &[("name", "Ada"), ("role", "admin")]);
    let received = received.lock().unwrap();
    assert_eq!(received.len(), 1);
    assert_eq!(received["name"], "Ada");
}

#[test]
fn create_field_named_path_does_not_select_route() {
    let received = Arc::new(Mutex::new(HashMap::new()));
    let sink = Arc::clone(&received);
    let crud = crud(
        full_config()
            .create_fields(vec![FormField::new("path", "Path").required()])
            .create(move |values| {
                *sink.lock().unwrap() = values.clone();
                Ok("ID4".into())
            }),
    );

    let api = post_ajax(&crud, "entity-create-ajax", &[("path", "entity-trash-ajax")]);
    assert!(api.is_success());
    assert_eq!(api.entity_id(), Some("ID4"));
    assert_eq!(received.lock().unwrap()["path"], "entity-trash-ajax");
}

#[test]
fn update_saves_trimmed_id() {
    let ids = Arc::new(Mutex::new(Vec::new()));
    let sink = Arc::clone(&ids);
    let crud = crud(full_config().update(move |id, _| {
        sink.lock().unwrap().push(id.to_string());
        Ok(())
    }));

    let api = post_ajax(
        &crud,
        "entity-update-ajax",
        &[("entity_id", "  ID2  "), ("first_name", "Sarah"), ("last_name", "Smith")],
    );
    assert!(api.is_success());
    assert_eq!(api.entity_id(), Some("ID2"));
    assert_eq!(*ids.lock().unwrap(), ["ID2"]);
}

#[test]
fn update_requires_id() {
    let api = post_ajax(
        &crud(full_config()),
        "entity-update-ajax",
        &[("entity_id", "   "), ("first_name", "Sarah")],
    );
    assert_eq!(api.message, "Entity ID is required");
}

#[test]
fn update_reports_callback_error() {
    let crud = crud(full_config().update(|_, _| Err("locked".into())));
    let api = post_ajax(
        &crud,
        "entity-update-ajax",
        &[("entity_id", "ID1"), ("first_name", "A"), ("last_name", "B")],
    );
    assert_eq!(api.message, "Save failed: locked");
}

#[test]
fn trash_success_and_failure() {
    let api = post_ajax(&crud(full_config()), "entity-trash-ajax", &[("entity_id", "ID3")]);
    assert!(api.is_success());
    assert_eq!(api.message, "Entity trashed successfully");
    assert_eq!(api.entity_id(), Some("ID3"));

    let crud = crud(full_config().trash(|_| Err("in use".into())));
    let api = post_ajax(&crud, "entity-trash-ajax", &[("entity_id", "ID3")]);
    assert_eq!(api.message, "Entity failed to be trashed: in use");

    let api = post_ajax(&crud, "entity-trash-ajax", &[]);
    assert_eq!(api.message, "Entity ID is required");
}

#[test]
fn entity_id_read_from_query_string() {
    let crud = crud(full_config());
    let req = oxide_crud_router::Request::post("/crud")
        .query_param("path", "entity-trash-ajax")
        .query_param("entity_id", "ID1");
    let api: oxide_crud::ApiResponse = crud.handle(&req).json_body().unwrap();
    assert!(api.is_success());
}
