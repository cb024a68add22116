#![cfg_attr(coverage_nightly, feature(coverage_attribute))]

//! AST data model for the Cool compiler front-end.
//!
//! The parser produces these types, the semantic analyzer decorates
//! them, and the code generator consumes them:
//! - `class` - class declarations, features, and formals
//! - `expr` - the tagged expression variants with their inferred-type slot
//!
//! Every expression node carries an `inferred_type` slot that is left
//! empty by the parser and written exactly once during type inference.

pub mod class;
pub mod expr;


pub use class::{AttrDecl, ClassDecl, Feature, Formal, MethodDecl};
pub use expr::{CaseBranch, Expr, ExprKind};

/// The root of every inheritance hierarchy.
pub const OBJECT: &str = "Object";
/// Built-in input/output class.
pub const IO: &str = "IO";
/// Built-in integer class.
pub const INT: &str = "Int";
/// Built-in boolean class.
pub const BOOL: &str = "Bool";
/// Built-in string class.
pub const STRING: &str = "String";

/// Pseudo-type standing for the dynamic type of the enclosing class.
/// Resolved to a concrete class name wherever one is required.
pub const SELF_TYPE: &str = "SELF_TYPE";

/// The implicit receiver identifier.
pub const SELF: &str = "self";

/// Marker type of the opaque value slots carried by the built-in
/// value classes. Never a valid user-declared type.
pub const PRIM_SLOT: &str = "_prim_slot";
