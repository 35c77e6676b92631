// Author: Dustin Pilgrim
// License: MIT

#[cfg(test)]
use super::*;

fn simple() -> OrderedDict {
    OrderedDict::new()
        .with("a", Value::scalar("1"))
        .with(
            "b",
            OrderedDict::new()
                .with("ba", Value::scalar("21"))
                .with("bb", Value::scalar("22")),
        )
        .with("c", Value::scalar("3"))
}

fn keys_of(d: &OrderedDict, path: &[&str]) -> Vec<String> {
    d.keys(path).expect("path should resolve")
}

#[test]
fn test_get_nested_value() {
    let d = simple();
    assert_eq!(d.get(&["b", "ba"]).unwrap(), &Value::scalar("21"));
    assert!(d.get_dict(&["b"]).is_ok());
    assert_eq!(d.get_dict::<&str>(&[]).unwrap(), &d);
}

#[test]
fn test_get_missing_segment() {
    let d = simple();
    let err = d.get(&["b", "bc"]).unwrap_err();
    assert_eq!(
        err,
        FoamError::KeyNotFound {
            key: "bc".into(),
            path: vec!["b".into()]
        }
    );
    assert!(matches!(d.get(&["x", "y"]), Err(FoamError::KeyNotFound { .. })));
}

#[test]
fn test_get_through_leaf_fails() {
    let d = simple();
    let err = d.get(&["a", "x"]).unwrap_err();
    assert_eq!(err, FoamError::NotADictionary { path: vec!["a".into()] });
}

#[test]
fn test_put_appends_and_rejects_duplicates() {
    let mut d = simple();
    let row = d.put(&["b"], "bc", Value::scalar("23")).unwrap();
    assert_eq!(row, 2);
    assert_eq!(keys_of(&d, &["b"]), vec!["ba", "bb", "bc"]);

    let err = d.put(&["b"], "ba", Value::scalar("0")).unwrap_err();
    assert!(matches!(err, FoamError::DuplicateKey { ref key, .. } if key == "ba"));
    assert_eq!(d.get(&["b", "ba"]).unwrap(), &Value::scalar("21"));
}

#[test]
fn test_insert_before_anchor() {
    let mut d = simple();
    let row = d.insert::<&str>(&[], "x", Value::scalar("9"), Position::before("c")).unwrap();
    assert_eq!(row, 2);
    assert_eq!(keys_of(&d, &[]), vec!["a", "b", "x", "c"]);
}

#[test]
fn test_insert_after_anchor() {
    let mut d = simple();
    d.insert::<&str>(&[], "x", Value::scalar("9"), Position::after("a")).unwrap();
    assert_eq!(keys_of(&d, &[]), vec!["a", "x", "b", "c"]);

    d.insert::<&str>(&[], "y", Value::scalar("9"), Position::after("c")).unwrap();
    assert_eq!(keys_of(&d, &[]), vec!["a", "x", "b", "c", "y"]);
}

#[test]
fn test_insert_without_anchor_appends() {
    let mut d = simple();
    d.insert(&["b"], "bz", Value::Flag, Position::End).unwrap();
    assert_eq!(keys_of(&d, &["b"]), vec!["ba", "bb", "bz"]);
}

#[test]
fn test_insert_missing_anchor_leaves_dict_unchanged() {
    let mut d = simple();
    let before = d.clone();
    let err = d
        .insert::<&str>(&[], "x", Value::scalar("9"), Position::before("nope"))
        .unwrap_err();
    assert!(matches!(err, FoamError::KeyNotFound { ref key, .. } if key == "nope"));
    assert_eq!(d, before);
}

#[test]
fn test_insert_duplicate_is_error() {
    let mut d = simple();
    let err = d
        .insert::<&str>(&[], "a", Value::scalar("9"), Position::before("c"))
        .unwrap_err();
    assert!(matches!(err, FoamError::DuplicateKey { .. }));
    assert_eq!(d, simple());
}

#[test]
fn test_insert_or_replace_moves_existing_entry() {
    let mut d = simple();
    let (row, replaced) = d
        .insert_or_replace::<&str>(&[], "a", Value::scalar("100"), Position::after("c"))
        .unwrap();
    assert_eq!(row, 2);
    assert_eq!(replaced, Some((0, Value::scalar("1"))));
    assert_eq!(keys_of(&d, &[]), vec!["b", "c", "a"]);
}

#[test]
fn test_insert_or_replace_self_anchor_keeps_row() {
    let mut d = simple();
    let (row, replaced) = d
        .insert_or_replace::<&str>(&[], "b", Value::Flag, Position::before("b"))
        .unwrap();
    assert_eq!(row, 1);
    assert!(replaced.is_some());
    assert_eq!(keys_of(&d, &[]), vec!["a", "b", "c"]);
    assert_eq!(d.get(&["b"]).unwrap(), &Value::Flag);
}

#[test]
fn test_rename_preserves_position() {
    let mut d = simple();
    let row = d.rename::<&str>(&[], "b", "renamed").unwrap();
    assert_eq!(row, 1);
    assert_eq!(keys_of(&d, &[]), vec!["a", "renamed", "c"]);
    assert_eq!(keys_of(&d, &["renamed"]), vec!["ba", "bb"]);
}

#[test]
fn test_rename_same_key_is_noop() {
    let mut d = simple();
    assert_eq!(d.rename::<&str>(&[], "c", "c").unwrap(), 2);
    assert_eq!(d, simple());
}

#[test]
fn test_rename_to_existing_key_fails() {
    let mut d = simple();
    let err = d.rename::<&str>(&[], "a", "c").unwrap_err();
    assert!(matches!(err, FoamError::DuplicateKey { ref key, .. } if key == "c"));
    assert_eq!(d, simple());
}

#[test]
fn test_rename_missing_key_fails() {
    let mut d = simple();
    let err = d.rename(&["b"], "zz", "yy").unwrap_err();
    assert!(matches!(err, FoamError::KeyNotFound { .. }));
}

#[test]
fn test_update_value_returns_previous() {
    let mut d = simple();
    let old = d.update_value(&["b"], "ba", Value::str("updated")).unwrap();
    assert_eq!(old, Value::scalar("21"));
    assert_eq!(d.get(&["b", "ba"]).unwrap(), &Value::str("updated"));
    assert_eq!(keys_of(&d, &["b"]), vec!["ba", "bb"]);

    assert!(d.update_value(&["b"], "bc", Value::Flag).is_err());
    assert!(d.update_value::<&str>(&[], "d", Value::Flag).is_err());
}

#[test]
fn test_remove_returns_row_and_value() {
    let mut d = simple();
    let (row, value) = d.remove::<&str>(&[], "b").unwrap();
    assert_eq!(row, 1);
    assert!(value.is_dict());
    assert_eq!(keys_of(&d, &[]), vec!["a", "c"]);
    assert!(matches!(d.remove::<&str>(&[], "b"), Err(FoamError::KeyNotFound { .. })));
}

#[test]
fn test_clear_returns_removed_content() {
    let mut d = simple();
    let removed = d.clear(&["b"]).unwrap();
    assert_eq!(removed.len(), 2);
    assert!(d.get_dict(&["b"]).unwrap().is_empty());
    assert!(matches!(d.clear(&["a"]), Err(FoamError::NotADictionary { .. })));
}

#[test]
fn test_order_sensitive_equality() {
    let x = OrderedDict::new().with("a", Value::Flag).with("b", Value::Flag);
    let y = OrderedDict::new().with("b", Value::Flag).with("a", Value::Flag);
    assert_ne!(x, y);
}

#[test]
fn test_map_keys_onto() {
    let template = OrderedDict::new()
        .with("a", Value::scalar("1"))
        .with("b", Value::scalar("2"));
    let target = OrderedDict::new()
        .with("b", Value::scalar("9"))
        .with("c", Value::scalar("3"));

    let merged = map_keys_onto(&template, &target);
    let expected = OrderedDict::new()
        .with("a", Value::scalar("1"))
        .with("b", Value::scalar("9"));
    assert_eq!(merged, expected);
    assert_eq!(target.len(), 2);
}

#[test]
fn test_map_keys_onto_empty_template() {
    let target = OrderedDict::new().with("b", Value::scalar("9"));
    assert!(map_keys_onto(&OrderedDict::new(), &target).is_empty());
}

#[test]
fn test_key_at_and_index_of() {
    let d = simple();
    assert_eq!(d.index_of::<&str>(&[], "c").unwrap(), 2);
    assert_eq!(d.key_at::<&str>(&[], 1).unwrap().map(String::as_str), Some("b"));
    assert_eq!(d.key_at::<&str>(&[], 7).unwrap(), None);
}
