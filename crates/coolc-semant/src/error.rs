//! Error and warning types for semantic analysis.
//!
//! Analysis is fail-fast: the first [`SemantError`] aborts the
//! pipeline and is surfaced to the caller. An undefined parent class
//! is the one repairable condition and is reported as a
//! [`SemantWarning`] instead.

use thiserror::Error;

/// Fatal semantic analysis errors.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SemantError {
    #[error("class {0} already defined")]
    DuplicateClass(String),

    #[error("class {child} cannot inherit from base class {parent}")]
    IllegalBaseInheritance { child: String, parent: String },

    #[error("class {0} is involved in an inheritance cycle")]
    InheritanceCycle(String),

    #[error("attribute cannot be redefined in child class {0}")]
    AttributeRedefined(String),

    #[error("redefined method {0} cannot change the arguments or return type of the parent method")]
    MethodSignatureMismatch(String),

    #[error("attribute {attr} in class {class} is already defined")]
    DuplicateAttribute { class: String, attr: String },

    #[error("method {method} in class {class} is already defined")]
    DuplicateMethod { class: String, method: String },

    #[error("formal {formal} in method {method} is already defined")]
    DuplicateFormal { method: String, formal: String },

    #[error("variable {0} not in scope")]
    VariableNotInScope(String),

    #[error("tried to call undefined method {method} in class {class}")]
    MethodNotFound { class: String, method: String },

    #[error(
        "inferred type {inferred} for attribute {attr} does not conform to declared type {declared}"
    )]
    AttributeTypeMismatch {
        attr: String,
        inferred: String,
        declared: String,
    },

    #[error(
        "inferred type {inferred} for method {method} does not conform to declared return type {declared}"
    )]
    MethodReturnMismatch {
        method: String,
        inferred: String,
        declared: String,
    },

    #[error("formal {formal} in method {method} cannot have type SELF_TYPE")]
    FormalSelfType { method: String, formal: String },

    #[error("formal {formal} in method {method} has undefined type {declared}")]
    FormalUnknownType {
        method: String,
        formal: String,
        declared: String,
    },

    #[error("if predicate must have type Bool, found {0}")]
    IfPredicateNotBool(String),

    #[error("while predicate must have type Bool, found {0}")]
    WhilePredicateNotBool(String),

    #[error("not requires a Bool operand, found {0}")]
    NotOperandNotBool(String),

    #[error("negation requires an Int operand, found {0}")]
    NegOperandNotInt(String),

    #[error("arithmetic requires Int operands, found {lhs} and {rhs}")]
    ArithOperandNotInt { lhs: String, rhs: String },

    #[error("comparison requires Int operands, found {lhs} and {rhs}")]
    ComparisonOperandNotInt { lhs: String, rhs: String },

    #[error("illegal equality comparison between {lhs} and {rhs}")]
    EqComparisonBasicMismatch { lhs: String, rhs: String },

    #[error("static dispatch receiver of type {receiver} does not conform to {target}")]
    StaticDispatchNonConformant { receiver: String, target: String },

    #[error("method {method} in class {class} called with {found} arguments, expected {expected}")]
    ArityMismatch {
        class: String,
        method: String,
        expected: usize,
        found: usize,
    },

    #[error(
        "argument of type {found} passed to method {method} in class {class} does not conform to declared type {declared}"
    )]
    ArgumentNonConformant {
        class: String,
        method: String,
        declared: String,
        found: String,
    },

    #[error(
        "inferred type {inferred} for assignment to {target} does not conform to declared type {declared}"
    )]
    AssignNonConformant {
        target: String,
        inferred: String,
        declared: String,
    },

    #[error(
        "inferred type {inferred} for let binding {name} does not conform to declared type {declared}"
    )]
    LetInitNonConformant {
        name: String,
        inferred: String,
        declared: String,
    },
}

/// Non-fatal conditions reported alongside a successful analysis.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SemantWarning {
    #[error(
        "classes {} inherit from undefined parent {}; re-parented under Object",
        .children.join(", "),
        .parent
    )]
    UndefinedParent {
        parent: String,
        children: Vec<String>,
    },
}
