//! Test helpers for driving individual phases.

use coolc_ast::ClassDecl;

use crate::env::ClassEnvironment;
use crate::typectx::TypeContext;
use crate::{expand, install, wellformed};

/// Run base installation through graph construction (P1-P2).
pub fn built_env(user_classes: Vec<ClassDecl>) -> ClassEnvironment {
    let mut classes = user_classes;
    install::install_base_classes(&mut classes);
    ClassEnvironment::build(classes).expect("graph construction")
}

/// Run base installation through inheritance expansion (P1-P4).
pub fn expanded_env(user_classes: Vec<ClassDecl>) -> ClassEnvironment {
    let mut env = built_env(user_classes);
    wellformed::check_well_formed(&mut env).expect("well-formedness");
    expand::expand_inheritance(&mut env).expect("inheritance expansion");
    env
}

/// Expanded environment plus the type context built from it.
pub fn expanded_env_with_ctx(user_classes: Vec<ClassDecl>) -> (ClassEnvironment, TypeContext) {
    let env = expanded_env(user_classes);
    let ctx = TypeContext::build(&env);
    (env, ctx)
}
