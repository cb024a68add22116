//! Installation of the built-in classes.
//!
//! Appends `Object`, `IO`, `Int`, `Bool`, and `String` to the parsed
//! program. Built-in methods carry no body; later phases treat an
//! absent body as trusting the declared signature.

use coolc_ast::{
    AttrDecl, BOOL, ClassDecl, Feature, Formal, INT, IO, MethodDecl, OBJECT, PRIM_SLOT, SELF_TYPE,
    STRING,
};

/// Append the five built-in classes, after any user classes.
pub fn install_base_classes(classes: &mut Vec<ClassDecl>) {
    classes.push(object_class());
    classes.push(io_class());
    classes.push(int_class());
    classes.push(bool_class());
    classes.push(string_class());
}

fn object_class() -> ClassDecl {
    ClassDecl::root(
        OBJECT,
        vec![
            Feature::Method(MethodDecl::builtin("abort", vec![], OBJECT)),
            Feature::Method(MethodDecl::builtin("type_name", vec![], STRING)),
            Feature::Method(MethodDecl::builtin("copy", vec![], SELF_TYPE)),
        ],
    )
}

fn io_class() -> ClassDecl {
    ClassDecl::new(
        IO,
        OBJECT,
        vec![
            Feature::Method(MethodDecl::builtin(
                "out_string",
                vec![Formal::new("arg", STRING)],
                SELF_TYPE,
            )),
            Feature::Method(MethodDecl::builtin(
                "out_int",
                vec![Formal::new("arg", INT)],
                SELF_TYPE,
            )),
            Feature::Method(MethodDecl::builtin("in_string", vec![], STRING)),
            Feature::Method(MethodDecl::builtin("in_int", vec![], INT)),
        ],
    )
}

fn int_class() -> ClassDecl {
    ClassDecl::new(
        INT,
        OBJECT,
        vec![Feature::Attr(AttrDecl::new("_val", PRIM_SLOT, None))],
    )
}

fn bool_class() -> ClassDecl {
    ClassDecl::new(
        BOOL,
        OBJECT,
        vec![Feature::Attr(AttrDecl::new("_val", PRIM_SLOT, None))],
    )
}

fn string_class() -> ClassDecl {
    ClassDecl::new(
        STRING,
        OBJECT,
        vec![
            // string length, then the opaque character storage
            Feature::Attr(AttrDecl::new("_val", INT, None)),
            Feature::Attr(AttrDecl::new("_str_field", PRIM_SLOT, None)),
            Feature::Method(MethodDecl::builtin("length", vec![], INT)),
            Feature::Method(MethodDecl::builtin(
                "concat",
                vec![Formal::new("arg", STRING)],
                STRING,
            )),
            Feature::Method(MethodDecl::builtin(
                "substr",
                vec![Formal::new("arg1", INT), Formal::new("arg2", INT)],
                STRING,
            )),
        ],
    )
}
