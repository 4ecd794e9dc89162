//! Outline payload ingestion.
//!
//! Backend payloads are tolerated in two field-name casings (camelCase and
//! PascalCase) and ids may arrive as JSON strings or numbers. Everything is
//! normalized into the canonical [`Outline`] here, at the boundary; no
//! downstream code ever branches on casing or id representation.
//!
//! A payload document is either a bare JSON array of nodes or a wrapper object
//! `{ "title": ..., "lectures": [...] }`. A document whose node list is
//! missing or not an array normalizes to zero roots; only I/O and JSON syntax
//! failures are reported as errors.

use crate::outline::{Outline, OutlineNode};
use anyhow::{Context, Result};
use brotli::Decompressor;
use serde::Deserialize;
use std::fs::File;
use std::io::{BufReader, Read};

/// Node id as it appears on the wire: string or number.
#[derive(Debug, Clone, Deserialize)]
#[serde(untagged)]
enum RawId {
    Text(String),
    Number(i64),
}

impl RawId {
    fn into_string(self) -> String {
        match self {
            RawId::Text(text) => text,
            RawId::Number(number) => number.to_string(),
        }
    }
}

/// A node as it appears on the wire, in either casing convention.
#[derive(Debug, Clone, Deserialize)]
struct RawNode {
    #[serde(alias = "Id")]
    id: RawId,
    #[serde(alias = "Title", default)]
    title: Option<String>,
    #[serde(rename = "numberingLabel", alias = "NumberingLabel", default)]
    numbering_label: Option<String>,
    #[serde(rename = "orderIndex", alias = "OrderIndex", default)]
    order_index: Option<i64>,
    #[serde(alias = "Children", default)]
    children: Vec<RawNode>,
}

/// Wrapper document form: `{ "title": ..., "lectures": [...] }`.
#[derive(Debug, Clone, Deserialize)]
struct RawDocument {
    #[serde(alias = "Title", default)]
    title: Option<String>,
    #[serde(alias = "Lectures", default)]
    lectures: Option<Vec<RawNode>>,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(untagged)]
enum RawPayload {
    Nodes(Vec<RawNode>),
    Wrapped(RawDocument),
    // Anything else (scalar, null, array of non-nodes) is a zero-root payload
    Other(serde_json::Value),
}

fn normalize_node(raw: RawNode) -> OutlineNode {
    OutlineNode {
        id: raw.id.into_string(),
        title: raw.title.unwrap_or_default(),
        numbering_label: raw.numbering_label,
        order_index: raw.order_index,
        children: raw.children.into_iter().map(normalize_node).collect(),
    }
}

fn normalize_payload(payload: RawPayload) -> Outline {
    match payload {
        RawPayload::Nodes(nodes) => Outline {
            title: None,
            roots: nodes.into_iter().map(normalize_node).collect(),
        },
        RawPayload::Wrapped(document) => Outline {
            title: document.title,
            roots: document
                .lectures
                .unwrap_or_default()
                .into_iter()
                .map(normalize_node)
                .collect(),
        },
        RawPayload::Other(_) => Outline::new(),
    }
}

/// Parses an outline payload from a JSON string.
pub fn outline_from_str(payload: &str) -> Result<Outline> {
    let raw: RawPayload =
        serde_json::from_str(payload).context("Failed to parse outline payload JSON")?;
    Ok(normalize_payload(raw))
}

/// Normalizes an already-decoded JSON value into an outline.
pub fn outline_from_value(value: serde_json::Value) -> Result<Outline> {
    let raw: RawPayload =
        serde_json::from_value(value).context("Failed to decode outline payload value")?;
    Ok(normalize_payload(raw))
}

/// Loads an outline payload from disk.
///
/// Automatically decompresses Brotli payloads based on file extension (`.br`).
///
/// # Supported Formats
///
/// - `.json` — Uncompressed payload
/// - `.json.br` — Brotli-compressed payload
///
/// # Examples
///
/// ```no_run
/// # use lectree::load_outline;
/// # fn main() -> anyhow::Result<()> {
/// // Load uncompressed outline
/// let outline = load_outline("outline.json")?;
///
/// // Load compressed outline (automatic decompression)
/// let outline = load_outline("outline.json.br")?;
/// # Ok(())
/// # }
/// ```
pub fn load_outline(file_path: &str) -> Result<Outline> {
    let file = File::open(file_path)
        .with_context(|| format!("Failed to open file: {}", file_path))?;

    let mut reader: Box<dyn Read> = if file_path.ends_with(".br") {
        // Brotli decompression enabled
        let decompressor = Decompressor::new(file, 4096);
        Box::new(BufReader::new(decompressor))
    } else {
        // No decompression
        Box::new(BufReader::new(file))
    };

    let mut payload = String::new();
    reader
        .read_to_string(&mut payload)
        .with_context(|| format!("Failed to read file: {}", file_path))?;

    outline_from_str(&payload)
        .with_context(|| format!("Failed to parse outline payload: {}", file_path))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_camel_case_payload() {
        let payload = r#"[
            {
                "id": "u1",
                "title": "Unit 1",
                "numberingLabel": "1",
                "orderIndex": 1,
                "children": [
                    {"id": "l1", "title": "Lecture 1", "children": []}
                ]
            }
        ]"#;

        let outline = outline_from_str(payload).unwrap();
        assert_eq!(outline.roots.len(), 1);
        assert_eq!(outline.roots[0].id, "u1");
        assert_eq!(outline.roots[0].numbering_label.as_deref(), Some("1"));
        assert_eq!(outline.roots[0].order_index, Some(1));
        assert_eq!(outline.roots[0].children[0].id, "l1");
    }

    #[test]
    fn test_pascal_case_payload() {
        let payload = r#"[
            {
                "Id": "u1",
                "Title": "Unit 1",
                "NumberingLabel": "1",
                "OrderIndex": 1,
                "Children": [
                    {"Id": "l1", "Title": "Lecture 1", "Children": []}
                ]
            }
        ]"#;

        let outline = outline_from_str(payload).unwrap();
        assert_eq!(outline.roots[0].title, "Unit 1");
        assert_eq!(outline.roots[0].children[0].title, "Lecture 1");
    }

    #[test]
    fn test_mixed_casing_across_nodes() {
        let payload = r#"[
            {"id": "a", "Title": "A", "children": [
                {"Id": "a1", "title": "A1", "Children": []}
            ]}
        ]"#;

        let outline = outline_from_str(payload).unwrap();
        assert_eq!(outline.roots[0].title, "A");
        assert_eq!(outline.roots[0].children[0].id, "a1");
    }

    #[test]
    fn test_numeric_ids_are_stringified() {
        let payload = r#"[
            {"id": 42, "title": "Unit", "children": [
                {"id": "43", "title": "Lecture", "children": []}
            ]}
        ]"#;

        let outline = outline_from_str(payload).unwrap();
        assert_eq!(outline.roots[0].id, "42");
        assert_eq!(outline.roots[0].children[0].id, "43");

        // Route parameters compare as strings regardless of source type
        assert!(crate::outline::find_node(&outline.roots, "42").is_some());
    }

    #[test]
    fn test_wrapper_document() {
        let payload = r#"{
            "title": "English B2",
            "lectures": [
                {"id": "l1", "title": "Lecture 1", "children": []}
            ]
        }"#;

        let outline = outline_from_str(payload).unwrap();
        assert_eq!(outline.title.as_deref(), Some("English B2"));
        assert_eq!(outline.roots.len(), 1);
    }

    #[test]
    fn test_wrapper_document_pascal_case() {
        let payload = r#"{"Title": "English B2", "Lectures": []}"#;
        let outline = outline_from_str(payload).unwrap();
        assert_eq!(outline.title.as_deref(), Some("English B2"));
        assert!(outline.roots.is_empty());
    }

    #[test]
    fn test_non_array_payload_is_zero_roots() {
        for payload in ["42", "null", "\"nope\"", "{}", "{\"unrelated\": true}"] {
            let outline = outline_from_str(payload).unwrap();
            assert!(outline.roots.is_empty(), "payload {:?} should yield zero roots", payload);
        }
    }

    #[test]
    fn test_empty_array_is_zero_roots() {
        let outline = outline_from_str("[]").unwrap();
        assert!(outline.roots.is_empty());
        assert_eq!(outline.leaf_count(), 0);
    }

    #[test]
    fn test_json_syntax_error_is_reported() {
        assert!(outline_from_str("{not json").is_err());
    }

    #[test]
    fn test_missing_optional_fields() {
        let payload = r#"[{"id": "x"}]"#;
        let outline = outline_from_str(payload).unwrap();
        assert_eq!(outline.roots[0].title, "");
        assert_eq!(outline.roots[0].numbering_label, None);
        assert_eq!(outline.roots[0].order_index, None);
        assert!(outline.roots[0].is_leaf());
    }

    #[test]
    fn test_outline_from_value() {
        let value = serde_json::json!([
            {"id": "a", "title": "A", "children": []}
        ]);
        let outline = outline_from_value(value).unwrap();
        assert_eq!(outline.roots[0].id, "a");
    }
}
