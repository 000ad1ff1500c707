// src/store/tree.rs
use serde_json::{Map, Value};

/// `null` and `{}` both mean "nothing stored here".
pub(crate) fn is_empty_node(value: &Value) -> bool {
    match value {
        Value::Null => true,
        Value::Object(map) => map.is_empty(),
        _ => false,
    }
}

pub(crate) fn get_at<'a>(root: &'a Value, segments: &[String]) -> Option<&'a Value> {
    let mut node = root;
    for segment in segments {
        node = node.as_object()?.get(segment)?;
    }

    if is_empty_node(node) {
        None
    } else {
        Some(node)
    }
}

/// Replaces the value at `segments`, creating parents as needed. Parents left
/// empty by the write are removed.
pub(crate) fn set_at(node: &mut Value, segments: &[String], value: Value) {
    let Some((head, rest)) = segments.split_first() else {
        *node = value;
        return;
    };

    if !node.is_object() {
        *node = Value::Object(Map::new());
    }

    if let Value::Object(map) = node {
        let child = map.entry(head.clone()).or_insert(Value::Null);
        set_at(child, rest, value);

        if is_empty_node(child) {
            map.remove(head);
        }
    }
}
