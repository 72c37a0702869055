use crate::{ItemStateBlob, IterationPayload, MovePayload};

use googletest::prelude::*;
use uuid::Uuid;

#[test]
fn given_move_metadata_when_parsed_then_reads_both_columns() {
    let from = Uuid::new_v4();
    let to = Uuid::new_v4();
    let metadata = format!(r#"{{"from_column_id":"{from}","to_column_id":"{to}","by":"bot"}}"#);

    let payload = MovePayload::parse(&metadata);

    assert_that!(
        payload,
        some(eq(MovePayload {
            from_column_id: from,
            to_column_id: to,
        }))
    );
}

#[test]
fn given_garbage_metadata_when_parsed_then_none() {
    assert_that!(MovePayload::parse("not json"), none());
    assert_that!(MovePayload::parse(r#"{"from_column_id":"nope"}"#), none());
    assert_that!(IterationPayload::parse("{}"), none());
}

#[test]
fn given_legacy_sprint_key_when_parsed_then_maps_to_iteration() {
    let iteration_id = Uuid::new_v4();
    let metadata = format!(r#"{{"sprint_id":"{iteration_id}"}}"#);

    let payload = IterationPayload::parse(&metadata);

    assert_that!(payload, some(eq(IterationPayload { iteration_id })));
}

#[test]
fn given_full_work_item_state_when_parsed_then_ignores_extra_fields() {
    let column_id = Uuid::new_v4();
    let state = format!(
        r#"{{"id":"{}","title":"Fix login","column_id":"{column_id}","story_points":3}}"#,
        Uuid::new_v4()
    );

    let blob = ItemStateBlob::parse(&state).unwrap();

    assert_that!(blob.column_id, eq(column_id));
    assert_that!(blob.story_points, some(eq(3)));
    assert_that!(blob.iteration_id, none());
}

#[test]
fn given_blob_when_serialized_then_parses_back() {
    let blob = ItemStateBlob {
        column_id: Uuid::new_v4(),
        story_points: None,
        iteration_id: Some(Uuid::new_v4()),
    };

    assert_that!(ItemStateBlob::parse(&blob.to_json()), some(eq(blob)));
}
