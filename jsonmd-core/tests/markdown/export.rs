//! Export tests for whole documents (JSON → Markdown)
//!
//! These tests check exact output for fixture documents and verify that the
//! result parses back as the intended CommonMark structure with comrak.

use comrak::nodes::{AstNode, NodeValue};
use comrak::{parse_document, Arena, ComrakOptions};
use insta::assert_snapshot;
use jsonmd_core::{
    transcribe, transcribe_str, JsonValue, RootPolicy, TranscribeError, TranscribeOptions,
};
use serde_json::json;

const KITCHENSINK_JSON: &str = include_str!("../fixtures/kitchensink.json");
const KITCHENSINK_MD: &str = include_str!("../fixtures/kitchensink.md");

fn to_markdown(value: serde_json::Value) -> String {
    transcribe(&JsonValue::from(value)).unwrap()
}

/// Collect (level, text) for every heading in document order
fn headings<'a>(node: &'a AstNode<'a>, out: &mut Vec<(u8, String)>) {
    if let NodeValue::Heading(heading) = &node.data.borrow().value {
        out.push((heading.level, collect_text(node)));
        return;
    }
    for child in node.children() {
        headings(child, out);
    }
}

/// Collect the text of every list item in document order
fn list_items<'a>(node: &'a AstNode<'a>, out: &mut Vec<String>) {
    if matches!(node.data.borrow().value, NodeValue::Item(_)) {
        out.push(collect_text(node));
        return;
    }
    for child in node.children() {
        list_items(child, out);
    }
}

fn collect_text<'a>(node: &'a AstNode<'a>) -> String {
    let mut text = String::new();
    for descendant in node.descendants() {
        if let NodeValue::Text(t) = &descendant.data.borrow().value {
            text.push_str(t);
        }
    }
    text
}

#[test]
fn test_kitchensink_exact_output() {
    let value = JsonValue::from_json_str(KITCHENSINK_JSON).unwrap();
    let md = transcribe(&value).unwrap();
    assert_eq!(md, KITCHENSINK_MD);
}

#[test]
fn test_kitchensink_heading_structure() {
    let value = JsonValue::from_json_str(KITCHENSINK_JSON).unwrap();
    let md = transcribe(&value).unwrap();

    let arena = Arena::new();
    let root = parse_document(&arena, &md, &ComrakOptions::default());
    let mut found = Vec::new();
    headings(root, &mut found);

    let expected: Vec<(u8, String)> = vec![
        (1, "title"),
        (1, "version"),
        (1, "published"),
        (1, "owner"),
        (2, "name"),
        (2, "contact"),
        (3, "email"),
        (3, "phone"),
        (1, "tags"),
        (1, "sections"),
        (1, "matrix"),
        (1, "notes"),
    ]
    .into_iter()
    .map(|(level, text)| (level, text.to_string()))
    .collect();
    assert_eq!(found, expected);
}

#[test]
fn test_kitchensink_list_items() {
    let value = JsonValue::from_json_str(KITCHENSINK_JSON).unwrap();
    let md = transcribe(&value).unwrap();

    let arena = Arena::new();
    let root = parse_document(&arena, &md, &ComrakOptions::default());
    let mut items = Vec::new();
    list_items(root, &mut items);

    assert_eq!(
        items,
        vec!["tools", "hardware", "42", "[1,2]", r#"{"k":"v"}"#]
    );
}

#[test]
fn test_flat_object_renders_paragraphs() {
    let md = to_markdown(json!({"first": "one", "second": 2}));

    let arena = Arena::new();
    let root = parse_document(&arena, &md, &ComrakOptions::default());
    let paragraphs: Vec<String> = root
        .children()
        .filter(|n| matches!(n.data.borrow().value, NodeValue::Paragraph))
        .map(collect_text)
        .collect();
    assert_eq!(paragraphs, vec!["one", "2"]);
}

#[test]
fn test_nested_configuration_document() {
    let md = to_markdown(json!({
        "server": {
            "host": "localhost",
            "ports": [8080, 8443],
            "tls": {"enabled": false}
        }
    }));

    assert_snapshot!(md, @r"
    # server

    ## host

    localhost

    ## ports

    - 8080
    - 8443

    ## tls

    ### enabled

    false
    ");
}

#[test]
fn test_wrapped_array_root() {
    let options = TranscribeOptions {
        root: RootPolicy::Wrap {
            title: "releases".to_string(),
        },
    };

    assert_eq!(
        transcribe_str(r#"["0.1.0", "0.2.0"]"#, options).unwrap(),
        "# releases\n\n- 0.1.0\n- 0.2.0\n\n"
    );
}

#[test]
fn test_text_entry_point_reports_parse_errors() {
    let err =
        transcribe_str("{\"unterminated\": [1, 2", TranscribeOptions::default()).unwrap_err();
    assert!(matches!(err, TranscribeError::Parse(_)));
}

#[test]
fn test_repeated_runs_are_identical() {
    let value = JsonValue::from_json_str(KITCHENSINK_JSON).unwrap();
    let first = transcribe(&value).unwrap();
    let second = transcribe(&value).unwrap();
    assert_eq!(first, second);
}
