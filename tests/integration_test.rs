use anyhow::Result;
use lectree::{
    build_rows, compute_progress, load_outline, resolve_ancestors, save_outline,
    DemoOutlineBuilder, Outline, OutlineNode, Progress,
};
use std::collections::HashSet;
use std::env;
use std::fs;

fn leaf(id: &str, title: &str) -> OutlineNode {
    OutlineNode {
        id: id.to_string(),
        title: title.to_string(),
        numbering_label: None,
        order_index: None,
        children: Vec::new(),
    }
}

fn group(id: &str, title: &str, children: Vec<OutlineNode>) -> OutlineNode {
    OutlineNode {
        id: id.to_string(),
        title: title.to_string(),
        numbering_label: None,
        order_index: None,
        children,
    }
}

fn sample_outline() -> Outline {
    Outline {
        title: Some("English B1".to_string()),
        roots: vec![
            group(
                "u1",
                "Unit 1: Tenses",
                vec![
                    group(
                        "c1",
                        "Chapter 1: Present",
                        vec![leaf("l1", "Present Simple"), leaf("l2", "Present Continuous")],
                    ),
                    leaf("l3", "Unit Review"),
                ],
            ),
            group("u2", "Unit 2: Vocabulary", vec![leaf("l4", "Travel Words")]),
        ],
    }
}

#[test]
fn test_write_and_read_basic_outline() -> Result<()> {
    let test_file = env::temp_dir().join("test_outline.json");
    let test_file = test_file.to_str().unwrap();

    // Clean up any existing file
    let _ = fs::remove_file(test_file);

    let original = sample_outline();
    save_outline(&original, test_file)?;

    let loaded = load_outline(test_file)?;

    // Structure survives the round trip
    assert_eq!(loaded, original);
    assert_eq!(loaded.title.as_deref(), Some("English B1"));
    assert_eq!(loaded.leaf_count(), 4);
    assert_eq!(loaded.node_count(), 7);
    assert_eq!(loaded.max_depth(), 3);

    // Progress over the loaded tree
    assert_eq!(
        compute_progress(&loaded.roots, Some("l2")),
        Progress { current: 2, total: 4 }
    );
    assert_eq!(
        compute_progress(&loaded.roots, Some("l4")),
        Progress { current: 4, total: 4 }
    );

    // Ancestor chain of the deepest lecture, outermost first
    assert_eq!(
        resolve_ancestors(&loaded.roots, "l1"),
        Some(vec!["u1".to_string(), "c1".to_string()])
    );

    fs::remove_file(test_file)?;
    Ok(())
}

#[test]
fn test_brotli_round_trip() -> Result<()> {
    let test_file = env::temp_dir().join("test_outline.json.br");
    let test_file = test_file.to_str().unwrap();

    let _ = fs::remove_file(test_file);

    let original = sample_outline();
    save_outline(&original, test_file)?;

    let loaded = load_outline(test_file)?;
    assert_eq!(loaded, original);

    fs::remove_file(test_file)?;
    Ok(())
}

#[test]
fn test_load_pascal_case_payload_file() -> Result<()> {
    let test_file = env::temp_dir().join("test_outline_pascal.json");
    let test_file = test_file.to_str().unwrap();

    let _ = fs::remove_file(test_file);

    // Backend variant with PascalCase fields and numeric ids
    fs::write(
        test_file,
        r#"{
            "Title": "English A2",
            "Lectures": [
                {
                    "Id": 10,
                    "Title": "Unit 1",
                    "NumberingLabel": "1",
                    "OrderIndex": 1,
                    "Children": [
                        {"Id": 11, "Title": "Greetings", "Children": []},
                        {"Id": "12", "Title": "Numbers", "Children": []}
                    ]
                }
            ]
        }"#,
    )?;

    let loaded = load_outline(test_file)?;
    assert_eq!(loaded.title.as_deref(), Some("English A2"));
    assert_eq!(loaded.roots[0].id, "10");
    assert_eq!(loaded.roots[0].numbering_label.as_deref(), Some("1"));

    // Numeric and string ids from the payload compare identically as strings
    assert_eq!(
        compute_progress(&loaded.roots, Some("11")),
        Progress { current: 1, total: 2 }
    );
    assert_eq!(resolve_ancestors(&loaded.roots, "12"), Some(vec!["10".to_string()]));

    fs::remove_file(test_file)?;
    Ok(())
}

#[test]
fn test_load_non_array_payload_is_empty_outline() -> Result<()> {
    let test_file = env::temp_dir().join("test_outline_scalar.json");
    let test_file = test_file.to_str().unwrap();

    let _ = fs::remove_file(test_file);
    fs::write(test_file, "42")?;

    let loaded = load_outline(test_file)?;
    assert!(loaded.roots.is_empty());
    assert_eq!(
        compute_progress(&loaded.roots, Some("anything")),
        Progress { current: 0, total: 0 }
    );

    fs::remove_file(test_file)?;
    Ok(())
}

#[test]
fn test_demo_outline_round_trip() -> Result<()> {
    let test_file = env::temp_dir().join("test_outline_demo.json");
    let test_file = test_file.to_str().unwrap();

    let _ = fs::remove_file(test_file);

    let demo = DemoOutlineBuilder::with_config(3, 4, 7).build();
    save_outline(&demo, test_file)?;

    let loaded = load_outline(test_file)?;
    assert_eq!(loaded, demo);

    fs::remove_file(test_file)?;
    Ok(())
}

#[test]
fn test_ancestor_seeding_reveals_active_lecture() -> Result<()> {
    let outline = sample_outline();

    // With nothing expanded, only the roots are visible
    let rows = build_rows(&outline.roots, &HashSet::new(), Some("l1"));
    assert_eq!(rows.len(), 2);
    assert!(rows.iter().all(|row| !row.is_active));

    // Seeding expansion from the ancestor chain makes the lecture visible
    let expanded: HashSet<String> = resolve_ancestors(&outline.roots, "l1")
        .expect("l1 is in the outline")
        .into_iter()
        .collect();

    let rows = build_rows(&outline.roots, &expanded, Some("l1"));
    let active: Vec<&str> = rows
        .iter()
        .filter(|row| row.is_active)
        .map(|row| row.id.as_str())
        .collect();
    assert_eq!(active, vec!["l1"]);

    // Document order holds: the lecture follows its chapter which follows its unit
    let ids: Vec<&str> = rows.iter().map(|row| row.id.as_str()).collect();
    assert_eq!(ids, vec!["u1", "c1", "l1", "l2", "l3", "u2"]);

    Ok(())
}
