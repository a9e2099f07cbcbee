use super::*;
use crate::test_fixtures::{EXAMPLE, GAPPED, NO_PATHS, OBJECTS, RELATIONAL};
use proptest::prelude::*;

fn full_example() -> PathState {
    PathState::new(
        &EXAMPLE,
        [
            ("field_1", "some_field_1"),
            ("field_2", "some_field_2"),
            ("field_3", "some_field_3"),
            ("field_4", "some_field_4"),
            ("field_5_1", "some_field_5_1"),
            ("field_5_2", "some_field_5_2"),
        ],
    )
    .unwrap()
}

#[test]
fn new_rejects_unknown_key() {
    let err = PathState::new(
        &EXAMPLE,
        [
            ("field_1", "a"),
            ("field_2", "b"),
            ("extra_filed", "some_extra_field"),
        ],
    )
    .unwrap_err();

    assert!(matches!(err, PathError::UnknownField { ref field, .. } if field == "extra_filed"));
}

#[test]
fn new_requires_required_fields() {
    let err = PathState::new(&EXAMPLE, [("field_1", "a")]).unwrap_err();

    assert_eq!(err, PathError::RequiredFieldMissing { field: "field_2" });
}

#[test]
fn empty_string_counts_as_missing() {
    let err = PathState::new(&EXAMPLE, [("field_1", "a"), ("field_2", "")]).unwrap_err();

    assert_eq!(err, PathError::RequiredFieldMissing { field: "field_2" });
}

#[test]
fn new_validates_ancestor_chain() {
    let err = PathState::new(&RELATIONAL, [("databases", "db"), ("tables", "tbl")]).unwrap_err();

    assert_eq!(
        err,
        PathError::WrongPathOrder {
            field: "tables",
            missing_ancestor: "schemas",
        }
    );
}

#[test]
fn first_violation_follows_declaration_order() {
    // both `tables` and `views` are broken; `tables` is declared first
    let err = PathState::new(
        &RELATIONAL,
        [("databases", "db"), ("views", "v"), ("tables", "t")],
    )
    .unwrap_err();

    assert_eq!(
        err,
        PathError::WrongPathOrder {
            field: "tables",
            missing_ancestor: "schemas",
        }
    );
}

#[test]
fn nullable_ancestor_stops_the_walk() {
    let state = PathState::new(
        &GAPPED,
        [("sites", "site"), ("databases", "db"), ("tables", "tbl")],
    )
    .unwrap();

    assert_eq!(state.get("tables").unwrap(), Some("tbl"));
    assert_eq!(state.get("schemas").unwrap(), None);
}

#[test]
fn nullable_gap_short_circuits_remaining_ancestors() {
    // the walk stops at `schemas`, so the missing `databases` is not reached
    let state = PathState::new(&GAPPED, [("sites", "site"), ("tables", "tbl")]).unwrap();

    assert!(state.is_set("tables"));
}

#[test]
fn values_are_escaped_on_entry() {
    let state = PathState::new(&OBJECTS, [("buckets", "b1"), ("keys", "a/b")]).unwrap();

    assert_eq!(state.get("keys").unwrap(), Some("a\\\\b"));
}

#[test]
fn set_value_checks_only_its_chain() {
    let mut state = PathState::new(&RELATIONAL, [("databases", "db")]).unwrap();

    state.set_value("schemas", "sch").unwrap();
    state.set_value("tables", "tbl").unwrap();

    assert_eq!(state.get("tables").unwrap(), Some("tbl"));
}

#[test]
fn set_value_rolls_back_on_wrong_order() {
    let mut state = PathState::new(&RELATIONAL, [("databases", "db")]).unwrap();

    let err = state.set_value("tables", "tbl").unwrap_err();

    assert_eq!(
        err,
        PathError::WrongPathOrder {
            field: "tables",
            missing_ancestor: "schemas",
        }
    );
    assert!(!state.is_set("tables"));
}

#[test]
fn set_value_rejects_unknown_field() {
    let mut state = full_example();

    let err = state.set_value("wrong_path", "x").unwrap_err();
    assert!(matches!(err, PathError::UnknownField { .. }));
}

#[test]
fn check_is_set_reports_empty_value() {
    let state = PathState::new(&EXAMPLE, [("field_1", "a"), ("field_2", "b")]).unwrap();

    assert_eq!(
        state.check_is_set("field_4"),
        Err(PathError::EmptyPathValue { field: "field_4" })
    );
    assert!(state.check_is_set("field_2").is_ok());
}

#[test]
fn merge_overrides_and_keeps_the_rest() {
    let state = full_example();
    let merged = state.merge([("field_1", "another_field_1")]).unwrap();

    assert_eq!(merged.get("field_1").unwrap(), Some("another_field_1"));
    assert_eq!(merged.get("field_3").unwrap(), Some("some_field_3"));
    // the source state is untouched
    assert_eq!(state.get("field_1").unwrap(), Some("some_field_1"));
}

#[test]
fn merge_does_not_escape_carried_values_twice() {
    let state = PathState::new(&OBJECTS, [("buckets", "b1"), ("keys", "a/b")]).unwrap();
    let merged = state.merge([("columns", "age")]).unwrap();

    assert_eq!(merged.get("keys").unwrap(), Some("a\\\\b"));
}

#[test]
fn merge_revalidates_everything() {
    let state = PathState::new(&EXAMPLE, [("field_1", "a"), ("field_2", "b")]).unwrap();

    let err = state.merge([("field_5_1", "new_field_5_1")]).unwrap_err();
    assert_eq!(
        err,
        PathError::WrongPathOrder {
            field: "field_5_1",
            missing_ancestor: "field_4",
        }
    );
}

#[test]
fn merge_accepts_unique_alias_and_rejects_shared_one() {
    let state = PathState::new(&OBJECTS, NO_PATHS).unwrap();
    assert!(state.merge([("buckets", "b")]).is_ok());

    let state = PathState::new(&EXAMPLE, [("field_1", "a"), ("field_2", "b")]).unwrap();
    let err = state.merge([("field_5", "x")]).unwrap_err();
    assert!(matches!(err, PathError::AmbiguousAlias { .. }));
}

#[test]
fn active_variant_infers_the_set_sibling() {
    let state = PathState::new(
        &RELATIONAL,
        [
            ("databases", "db"),
            ("schemas", "sch"),
            ("views", "v"),
            ("views_columns", "c"),
        ],
    )
    .unwrap();

    assert_eq!(state.active_variant("columns").unwrap().ident, "views_columns");
}

#[test]
fn active_variant_rejects_both_siblings_set() {
    let state = full_example();

    let err = state.active_variant("field_5").unwrap_err();
    assert_eq!(
        err,
        PathError::AmbiguousAlias {
            alias: "field_5".to_string(),
            fields: vec!["field_5_1", "field_5_2"],
        }
    );
}

#[test]
fn active_variant_with_nothing_set() {
    let state = PathState::new(&RELATIONAL, [("databases", "db")]).unwrap();

    assert_eq!(
        state.active_variant("columns"),
        Err(PathError::EmptyPathValue { field: "columns" })
    );
    assert!(matches!(
        state.active_variant("nope"),
        Err(PathError::UnknownField { .. })
    ));
}

#[test]
fn chain_skips_nullable_gap() {
    let state = PathState::new(
        &GAPPED,
        [("sites", "site"), ("databases", "db"), ("tables", "tbl")],
    )
    .unwrap();

    assert_eq!(
        state.chain("tables").unwrap(),
        [("sites", "site"), ("databases", "db"), ("tables", "tbl")]
    );
}

proptest! {
    // values from the second map win, everything else is carried over
    #[test]
    fn merge_overlay_semantics(
        first in proptest::collection::vec("[a-z]{1,8}", 4),
        overlay in proptest::collection::vec(proptest::option::of("[a-z]{1,8}"), 4),
    ) {
        let names = ["buckets", "keys", "columns"];
        let state = PathState::new(&OBJECTS, names.iter().zip(&first)).unwrap();

        let updates: Vec<_> = names
            .iter()
            .zip(&overlay)
            .filter_map(|(name, value)| value.as_ref().map(|value| (*name, value.clone())))
            .collect();
        let merged = state.merge(updates).unwrap();

        for (idx, name) in names.iter().enumerate() {
            let expected = overlay[idx].as_ref().unwrap_or(&first[idx]);
            prop_assert_eq!(merged.get(name).unwrap(), Some(expected.as_str()));
        }
    }

    // the leaf reports the nearest unset ancestor and the state is unchanged
    #[test]
    fn leaf_needs_its_whole_chain(depth in 1usize..=3) {
        let chain = ["databases", "schemas", "tables"];
        let values: Vec<_> = chain[..depth].iter().map(|name| (*name, "v")).collect();
        let mut state = PathState::new(&RELATIONAL, values).unwrap();

        let result = state.set_value("tables_columns", "col");

        if depth == chain.len() {
            prop_assert!(result.is_ok());
            prop_assert!(state.is_set("tables_columns"));
        } else {
            prop_assert_eq!(
                result,
                Err(PathError::WrongPathOrder {
                    field: "tables_columns",
                    missing_ancestor: "tables",
                })
            );
            prop_assert!(!state.is_set("tables_columns"));
        }
    }
}
