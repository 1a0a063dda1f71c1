//! Tests for row actions and screens gated by configured callbacks.

mod common;
use common::*;

use oxide_crud::{ApiStatus, Config};

const VIEW: &str = "btn-outline-info";
const EDIT: &str = "btn-outline-warning";
const TRASH: &str = "btn-outline-danger";

fn configure(read: bool, update: bool, trash: bool) -> Config {
    let mut config = base_config();
    if read {
        config = config.fetch_read_data(|id| Ok(vec![("ID".to_string(), id.to_string())]));
    }
    if update {
        config = config
            .fetch_update_data(|_| Ok(Default::default()))
            .update(|_, _| Ok(()));
    }
    if trash {
        config = config.trash(|_| Ok(()));
    }
    config
}

#[test]
fn row_actions_follow_callbacks() {
    for mask in 0..8u8 {
        let (read, update, trash) = (mask & 1 != 0, mask & 2 != 0, mask & 4 != 0);
        let html = get_page(&crud(configure(read, update, trash)), None, None);

        assert_eq!(html.matches(VIEW).count(), if read { 3 } else { 0 }, "mask {mask}");
        assert_eq!(html.matches(EDIT).count(), if update { 3 } else { 0 }, "mask {mask}");
        assert_eq!(html.matches(TRASH).count(), if trash { 3 } else { 0 }, "mask {mask}");
    }
}

#[test]
fn create_button_needs_create_callback() {
    let html = get_page(&crud(base_config()), None, None);
    assert!(!html.contains("showEntityCreateModal\""));

    let html = get_page(&crud(base_config().create(|_| Ok("ID4".into()))), None, None);
    assert!(html.contains(r#"v-on:click="showEntityCreateModal""#));
}

#[test]
fn update_without_fetch_hides_edit() {
    let crud = crud(base_config().update(|_, _| Ok(())));
    assert!(!crud.capabilities().update);
    let html = get_page(&crud, None, None);
    assert_eq!(html.matches(EDIT).count(), 0);
}

#[test]
fn disabled_screens_answer_with_errors() {
    let crud = crud(base_config());

    let api = post_ajax(&crud, "entity-create-ajax", &[("name", "Ada")]);
    assert_eq!(api.status, ApiStatus::Error);
    assert_eq!(api.message, "FuncCreate is required");

    let api = post_ajax(&crud, "entity-trash-ajax", &[("entity_id", "ID1")]);
    assert_eq!(api.message, "FuncTrash is required");

    let api = post_ajax(&crud, "entity-update", &[("entity_id", "ID1")]);
    assert_eq!(api.message, "FuncFetchUpdateData is required");

    let api = post_ajax(&crud, "entity-read", &[("entity_id", "ID1")]);
    assert_eq!(api.message, "FuncFetchReadData is required");
}
