//! Property tests over generated documents

use jsonmd_core::{transcribe, JsonValue};
use proptest::prelude::*;
use serde_json::{Map, Value};

fn key() -> impl Strategy<Value = String> {
    "[a-z]{1,8}"
}

fn scalar() -> impl Strategy<Value = Value> {
    prop_oneof![
        "[A-Za-z0-9 ]{0,12}".prop_map(Value::String),
        any::<i64>().prop_map(Value::from),
        any::<bool>().prop_map(Value::Bool),
        Just(Value::Null),
    ]
}

fn document() -> impl Strategy<Value = Value> {
    scalar().prop_recursive(4, 48, 6, |inner| {
        prop_oneof![
            prop::collection::vec(inner.clone(), 0..4).prop_map(Value::Array),
            prop::collection::btree_map(key(), inner, 0..5)
                .prop_map(|entries| Value::Object(entries.into_iter().collect())),
        ]
    })
}

fn object_document() -> impl Strategy<Value = Value> {
    prop::collection::btree_map(key(), document(), 0..6)
        .prop_map(|entries| Value::Object(entries.into_iter().collect()))
}

/// Keys reachable through object values only; array contents are flattened to text
fn heading_count(value: &Value) -> usize {
    match value {
        Value::Object(entries) => entries.values().map(|v| 1 + heading_count(v)).sum(),
        _ => 0,
    }
}

fn heading_lines(md: &str) -> Vec<&str> {
    md.lines().filter(|line| line.starts_with('#')).collect()
}

proptest! {
    #[test]
    fn flat_object_has_one_depth_one_heading_per_key(
        entries in prop::collection::btree_map(key(), scalar(), 0..10)
    ) {
        let len = entries.len();
        let object: Map<String, Value> = entries.into_iter().collect();
        let md = transcribe(&JsonValue::from(Value::Object(object.clone()))).unwrap();

        let headings = heading_lines(&md);
        prop_assert_eq!(headings.len(), len);
        prop_assert!(headings.iter().all(|h| h.starts_with("# ")));

        let mut expected = String::new();
        for (k, v) in &object {
            let text = match v {
                Value::String(s) => s.clone(),
                other => other.to_string(),
            };
            expected.push_str(&format!("# {k}\n\n{text}\n\n"));
        }
        prop_assert_eq!(md, expected);
    }

    #[test]
    fn innermost_heading_depth_matches_nesting(
        keys in prop::collection::vec(key(), 1..8),
        leaf in scalar()
    ) {
        let mut value = leaf;
        for k in keys.iter().rev() {
            let mut entries = Map::new();
            entries.insert(k.clone(), value);
            value = Value::Object(entries);
        }
        let md = transcribe(&JsonValue::from(value)).unwrap();

        let depth = keys.len();
        let innermost = format!("{} {}", "#".repeat(depth), keys[depth - 1]);
        let headings = heading_lines(&md);
        prop_assert_eq!(headings.len(), depth);
        prop_assert_eq!(headings[depth - 1], innermost.as_str());
    }

    #[test]
    fn heading_count_matches_object_keys(doc in object_document()) {
        let md = transcribe(&JsonValue::from(doc.clone())).unwrap();
        prop_assert_eq!(heading_lines(&md).len(), heading_count(&doc));
    }

    #[test]
    fn transcription_is_deterministic(doc in object_document()) {
        let value = JsonValue::from(doc);
        prop_assert_eq!(transcribe(&value).unwrap(), transcribe(&value).unwrap());
    }
}
