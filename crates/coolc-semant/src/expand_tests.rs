use coolc_ast::{AttrDecl, ClassDecl, Expr, Feature, Formal, MethodDecl};

use crate::error::SemantError;
use crate::expand::expand_inheritance;
use crate::test_utils::{built_env, expanded_env};
use crate::wellformed::check_well_formed;

fn expand_err(user_classes: Vec<ClassDecl>) -> SemantError {
    let mut env = built_env(user_classes);
    check_well_formed(&mut env).unwrap();
    expand_inheritance(&mut env).unwrap_err()
}

#[test]
fn inherited_attribute_cannot_be_redefined() {
    let err = expand_err(vec![
        ClassDecl::new(
            "A",
            "Object",
            vec![Feature::Attr(AttrDecl::new("attr1", "Int", None))],
        ),
        ClassDecl::new(
            "B",
            "A",
            vec![Feature::Attr(AttrDecl::new("attr1", "String", None))],
        ),
    ]);

    assert_eq!(err, SemantError::AttributeRedefined("B".into()));
    insta::assert_snapshot!(err, @"attribute cannot be redefined in child class B");
}

#[test]
fn override_cannot_change_return_type() {
    let err = expand_err(vec![
        ClassDecl::new(
            "A",
            "Object",
            vec![Feature::Method(MethodDecl::new(
                "returnarg",
                vec![Formal::new("arg", "Int")],
                "Int",
                Expr::object("arg"),
            ))],
        ),
        ClassDecl::new(
            "B",
            "A",
            vec![Feature::Method(MethodDecl::new(
                "returnarg",
                vec![Formal::new("arg", "Int")],
                "String",
                Expr::string("abc"),
            ))],
        ),
    ]);

    assert_eq!(err, SemantError::MethodSignatureMismatch("returnarg".into()));
}

#[test]
fn override_cannot_change_formal_types() {
    let err = expand_err(vec![
        ClassDecl::new(
            "A",
            "Object",
            vec![Feature::Method(MethodDecl::new(
                "returnarg",
                vec![Formal::new("arg", "Int")],
                "Int",
                Expr::object("arg"),
            ))],
        ),
        ClassDecl::new(
            "B",
            "A",
            vec![Feature::Method(MethodDecl::new(
                "returnarg",
                vec![Formal::new("arg", "String")],
                "Int",
                Expr::int(0),
            ))],
        ),
    ]);

    assert_eq!(err, SemantError::MethodSignatureMismatch("returnarg".into()));
}

#[test]
fn expansion_copies_parent_features_into_child() {
    let env = expanded_env(vec![
        ClassDecl::new("B", "A", vec![]),
        ClassDecl::new(
            "A",
            "Object",
            vec![
                Feature::Attr(AttrDecl::new("attr1", "Int", None)),
                Feature::Method(MethodDecl::new("returnattr", vec![], "Int", Expr::object("attr1"))),
            ],
        ),
    ]);

    let child = &env.class_table["B"];
    assert_eq!(child.features[0].name(), "attr1");
    assert_eq!(child.features[1].name(), "returnattr");
}

#[test]
fn expanded_child_keeps_every_parent_feature() {
    let env = expanded_env(vec![
        ClassDecl::new(
            "A",
            "Object",
            vec![
                Feature::Attr(AttrDecl::new("attr1", "Int", None)),
                Feature::Method(MethodDecl::new("get", vec![], "Int", Expr::object("attr1"))),
            ],
        ),
        ClassDecl::new("B", "A", vec![]),
    ]);

    let parent_names: Vec<&str> = env.class_table["A"]
        .features
        .iter()
        .map(Feature::name)
        .collect();
    let child_names: Vec<&str> = env.class_table["B"]
        .features
        .iter()
        .map(Feature::name)
        .collect();
    for name in parent_names {
        assert!(child_names.contains(&name), "{name} missing from child");
    }
}

#[test]
fn materialized_view_puts_attributes_before_methods() {
    let env = expanded_env(vec![
        ClassDecl::new(
            "P",
            "Object",
            vec![Feature::Attr(AttrDecl::new("x", "Int", None))],
        ),
        ClassDecl::new(
            "C",
            "P",
            vec![
                Feature::Method(MethodDecl::new("m", vec![], "Int", Expr::int(1))),
                Feature::Attr(AttrDecl::new("y", "Int", None)),
            ],
        ),
    ]);

    let child = &env.class_table["C"];
    let first_method = child
        .features
        .iter()
        .position(|f| f.as_method().is_some())
        .unwrap();
    assert!(
        child.features[first_method..]
            .iter()
            .all(|f| f.as_method().is_some()),
        "attribute found after a method"
    );

    // inherited attributes come first
    let attr_names: Vec<&str> = child.attributes().map(|a| a.name.as_str()).collect();
    assert_eq!(attr_names, ["x", "y"]);
}

#[test]
fn overriding_method_is_not_duplicated() {
    let env = expanded_env(vec![
        ClassDecl::new(
            "A",
            "Object",
            vec![Feature::Method(MethodDecl::new(
                "get",
                vec![],
                "Int",
                Expr::int(1),
            ))],
        ),
        ClassDecl::new(
            "B",
            "A",
            vec![Feature::Method(MethodDecl::new(
                "get",
                vec![],
                "Int",
                Expr::int(2),
            ))],
        ),
    ]);

    let child = &env.class_table["B"];
    assert_eq!(child.methods().filter(|m| m.name == "get").count(), 1);

    // the override body stayed in place
    let get = child.methods().find(|m| m.name == "get").unwrap();
    assert_eq!(get.body, Some(Expr::int(2)));
}

#[test]
fn every_class_inherits_the_object_protocol() {
    let env = expanded_env(vec![ClassDecl::new("A", "Object", vec![])]);

    for class in env.class_table.values() {
        for method in ["abort", "type_name", "copy"] {
            assert!(
                class.methods().any(|m| m.name == method),
                "{} missing {method}",
                class.name
            );
        }
    }
}
