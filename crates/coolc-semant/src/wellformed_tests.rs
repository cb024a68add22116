use coolc_ast::ClassDecl;

use crate::error::{SemantError, SemantWarning};
use crate::test_utils::built_env;
use crate::wellformed::check_well_formed;

#[test]
fn well_formed_hierarchy_passes() {
    let mut env = built_env(vec![
        ClassDecl::new("A", "B", vec![]),
        ClassDecl::new("B", "Object", vec![]),
    ]);

    let warnings = check_well_formed(&mut env).unwrap();
    assert!(warnings.is_empty());
}

#[test]
fn undefined_parent_rewires_child_under_object() {
    let mut env = built_env(vec![ClassDecl::new("A", "Top", vec![])]);

    let warnings = check_well_formed(&mut env).unwrap();

    assert!(env.inheritance_graph["Object"].contains("A"));
    assert!(!env.inheritance_graph.contains_key("Top"));
    assert_eq!(env.parent_of("A"), Some("Object"));

    assert_eq!(warnings.len(), 1);
    insta::assert_snapshot!(
        warnings[0],
        @"classes A inherit from undefined parent Top; re-parented under Object"
    );
}

#[test]
fn undefined_parent_warning_names_all_children() {
    let mut env = built_env(vec![
        ClassDecl::new("A", "Top", vec![]),
        ClassDecl::new("B", "Top", vec![]),
    ]);

    let warnings = check_well_formed(&mut env).unwrap();
    assert_eq!(
        warnings,
        vec![SemantWarning::UndefinedParent {
            parent: "Top".into(),
            children: vec!["A".into(), "B".into()],
        }]
    );
}

#[test]
fn inheriting_from_string_rejected() {
    let mut env = built_env(vec![ClassDecl::new("A", "String", vec![])]);

    let err = check_well_formed(&mut env).unwrap_err();
    assert_eq!(
        err,
        SemantError::IllegalBaseInheritance {
            child: "A".into(),
            parent: "String".into(),
        }
    );
    insta::assert_snapshot!(err, @"class A cannot inherit from base class String");
}

#[test]
fn inheriting_from_int_and_bool_rejected() {
    for base in ["Int", "Bool"] {
        let mut env = built_env(vec![ClassDecl::new("A", base, vec![])]);
        let err = check_well_formed(&mut env).unwrap_err();
        assert!(matches!(err, SemantError::IllegalBaseInheritance { .. }));
    }
}

#[test]
fn mutual_inheritance_reported_as_cycle() {
    let mut env = built_env(vec![
        ClassDecl::new("A", "B", vec![]),
        ClassDecl::new("B", "A", vec![]),
        ClassDecl::new("C", "Object", vec![]),
    ]);

    let err = check_well_formed(&mut env).unwrap_err();
    let SemantError::InheritanceCycle(name) = err else {
        panic!("expected InheritanceCycle, got {err:?}");
    };
    assert!(name == "A" || name == "B");
}

#[test]
fn self_inheritance_reported_as_cycle() {
    let mut env = built_env(vec![ClassDecl::new("A", "A", vec![])]);

    let err = check_well_formed(&mut env).unwrap_err();
    assert_eq!(err, SemantError::InheritanceCycle("A".into()));
}

#[test]
fn classes_off_the_cycle_stay_unaffected() {
    let mut env = built_env(vec![ClassDecl::new("C", "Object", vec![])]);

    check_well_formed(&mut env).unwrap();
    assert!(env.inheritance_graph["Object"].contains("C"));
}
