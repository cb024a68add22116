use coolc_ast::{ClassDecl, SELF_TYPE};

use crate::install::install_base_classes;

#[test]
fn base_classes_are_appended_after_user_classes() {
    let mut classes = vec![ClassDecl::new("A", "Object", vec![])];
    install_base_classes(&mut classes);

    let names: Vec<&str> = classes.iter().map(|c| c.name.as_str()).collect();
    assert_eq!(names, ["A", "Object", "IO", "Int", "Bool", "String"]);
}

#[test]
fn object_is_the_only_root() {
    let mut classes = vec![];
    install_base_classes(&mut classes);

    for class in &classes {
        if class.name == "Object" {
            assert_eq!(class.parent, None);
        } else {
            assert_eq!(class.parent.as_deref(), Some("Object"));
        }
    }
}

#[test]
fn built_in_methods_have_no_bodies() {
    let mut classes = vec![];
    install_base_classes(&mut classes);

    for class in &classes {
        for method in class.methods() {
            assert!(method.body.is_none(), "{}.{} has a body", class.name, method.name);
        }
    }
}

#[test]
fn string_declares_the_expected_protocol() {
    let mut classes = vec![];
    install_base_classes(&mut classes);

    let string = classes.iter().find(|c| c.name == "String").unwrap();
    let methods: Vec<&str> = string.methods().map(|m| m.name.as_str()).collect();
    assert_eq!(methods, ["length", "concat", "substr"]);
    assert_eq!(string.attributes().count(), 2);

    let substr = string.methods().find(|m| m.name == "substr").unwrap();
    assert_eq!(substr.formals.len(), 2);
    assert_eq!(substr.return_type, "String");
}

#[test]
fn copy_returns_self_type() {
    let mut classes = vec![];
    install_base_classes(&mut classes);

    let object = classes.iter().find(|c| c.name == "Object").unwrap();
    let copy = object.methods().find(|m| m.name == "copy").unwrap();
    assert_eq!(copy.return_type, SELF_TYPE);
}
