use coolc_ast::ClassDecl;

use crate::env::ClassEnvironment;
use crate::error::SemantError;
use crate::test_utils::built_env;

#[test]
fn graph_links_every_class_to_its_parent() {
    let env = built_env(vec![
        ClassDecl::new("A", "Top", vec![]),
        ClassDecl::new("Top", "Object", vec![]),
    ]);

    assert!(env.inheritance_graph["Top"].contains("A"));
    assert!(env.inheritance_graph["Object"].contains("Top"));
}

#[test]
fn every_non_root_class_is_a_child_of_its_parent() {
    let env = built_env(vec![
        ClassDecl::new("A", "Object", vec![]),
        ClassDecl::new("B", "A", vec![]),
    ]);

    for (name, class) in &env.class_table {
        if let Some(parent) = &class.parent {
            assert!(
                env.inheritance_graph[parent].contains(name),
                "{name} missing from children of {parent}"
            );
        }
    }
}

#[test]
fn duplicate_class_rejected() {
    let err = ClassEnvironment::build(vec![
        ClassDecl::new("A", "B", vec![]),
        ClassDecl::new("A", "Object", vec![]),
        ClassDecl::new("B", "Object", vec![]),
    ])
    .unwrap_err();

    assert_eq!(err, SemantError::DuplicateClass("A".into()));
    insta::assert_snapshot!(err, @"class A already defined");
}

#[test]
fn class_table_preserves_insertion_order() {
    let env = built_env(vec![
        ClassDecl::new("Zed", "Object", vec![]),
        ClassDecl::new("Alpha", "Object", vec![]),
    ]);

    let names: Vec<&str> = env.class_table.keys().map(String::as_str).collect();
    assert_eq!(
        names,
        ["Zed", "Alpha", "Object", "IO", "Int", "Bool", "String"]
    );
}

#[test]
fn accessors_resolve_names() {
    let env = built_env(vec![ClassDecl::new("A", "Object", vec![])]);

    assert!(env.contains("A"));
    assert!(!env.contains("Missing"));
    assert_eq!(env.parent_of("A"), Some("Object"));
    assert_eq!(env.parent_of("Object"), None);
    assert!(env.children_of("Object").any(|c| c == "A"));
}
