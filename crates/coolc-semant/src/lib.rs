#![cfg_attr(coverage_nightly, feature(coverage_attribute))]

//! Semantic analyzer for the Cool compiler front-end.
//!
//! Starting from a parsed class list, the analyzer runs six phases in
//! strict order over a shared [`ClassEnvironment`]:
//! - `install` - injects the built-in classes
//! - `env` - builds the class table and inheritance graph
//! - `wellformed` - repairs undefined parents, rejects base-class
//!   inheritance and cycles
//! - `expand` - copies inherited attributes and methods into descendants
//! - `infer` - scope-checks features and writes every expression's
//!   inferred type
//! - `conform` - verifies inferred types against declared types
//!
//! [`analyze`] is the single entry point. On success the environment
//! holds the fully expanded, typed classes the code generator
//! consults to lay out prototype objects and dispatch tables.

pub mod conform;
pub mod env;
pub mod error;
pub mod expand;
pub mod infer;
pub mod install;
pub mod scope;
pub mod typectx;
pub mod wellformed;

#[cfg(test)]
pub mod test_utils;

#[cfg(test)]
mod env_tests;
#[cfg(test)]
mod expand_tests;
#[cfg(test)]
mod install_tests;
#[cfg(test)]
mod wellformed_tests;

use coolc_ast::ClassDecl;

pub use env::ClassEnvironment;
pub use error::{SemantError, SemantWarning};
pub use scope::VariableScope;
pub use typectx::{MethodSig, TypeContext};

/// Result type for passes that produce output alongside any warnings
/// they collected. Fatal errors use the outer `Result`.
pub type PassResult<T> = Result<(T, Vec<SemantWarning>), SemantError>;

/// Run the full semantic pipeline over a parsed program.
///
/// The first detected error aborts analysis; undefined parents are
/// repaired and reported as warnings instead.
pub fn analyze(mut classes: Vec<ClassDecl>) -> PassResult<ClassEnvironment> {
    install::install_base_classes(&mut classes);
    let mut env = ClassEnvironment::build(classes)?;
    let warnings = wellformed::check_well_formed(&mut env)?;
    expand::expand_inheritance(&mut env)?;

    let ctx = TypeContext::build(&env);
    for class in env.class_table.values_mut() {
        infer::infer_class(class, &ctx)?;
    }
    for class in env.class_table.values() {
        conform::check_class(class, &ctx)?;
    }
    Ok((env, warnings))
}
