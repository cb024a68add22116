//! Class declarations and their features.

use serde::{Deserialize, Serialize};

use crate::expr::Expr;

/// A class declaration.
///
/// `parent` is `None` only for `Object`; the parser defaults every
/// other class without an `inherits` clause to `Object`. After
/// inheritance expansion, `features` holds the full materialized
/// inherited view with child overrides in place.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ClassDecl {
    pub name: String,
    pub parent: Option<String>,
    pub features: Vec<Feature>,
}

impl ClassDecl {
    pub fn new(
        name: impl Into<String>,
        parent: impl Into<String>,
        features: Vec<Feature>,
    ) -> Self {
        Self {
            name: name.into(),
            parent: Some(parent.into()),
            features,
        }
    }

    /// A class with no parent. Only `Object` is declared this way.
    pub fn root(name: impl Into<String>, features: Vec<Feature>) -> Self {
        Self {
            name: name.into(),
            parent: None,
            features,
        }
    }

    /// Attributes in declaration order.
    pub fn attributes(&self) -> impl Iterator<Item = &AttrDecl> {
        self.features.iter().filter_map(Feature::as_attr)
    }

    /// Methods in declaration order.
    pub fn methods(&self) -> impl Iterator<Item = &MethodDecl> {
        self.features.iter().filter_map(Feature::as_method)
    }
}

/// A single class feature: attribute or method.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum Feature {
    Attr(AttrDecl),
    Method(MethodDecl),
}

impl Feature {
    pub fn name(&self) -> &str {
        match self {
            Feature::Attr(attr) => &attr.name,
            Feature::Method(method) => &method.name,
        }
    }

    pub fn as_attr(&self) -> Option<&AttrDecl> {
        match self {
            Feature::Attr(attr) => Some(attr),
            Feature::Method(_) => None,
        }
    }

    pub fn as_method(&self) -> Option<&MethodDecl> {
        match self {
            Feature::Method(method) => Some(method),
            Feature::Attr(_) => None,
        }
    }
}

/// An attribute declaration, with an optional initializer.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AttrDecl {
    pub name: String,
    pub declared_type: String,
    pub init: Option<Expr>,
}

impl AttrDecl {
    pub fn new(
        name: impl Into<String>,
        declared_type: impl Into<String>,
        init: Option<Expr>,
    ) -> Self {
        Self {
            name: name.into(),
            declared_type: declared_type.into(),
            init,
        }
    }
}

/// A method declaration.
///
/// Built-in methods have no body; an absent body means "trust the
/// declared signature".
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MethodDecl {
    pub name: String,
    pub formals: Vec<Formal>,
    pub return_type: String,
    pub body: Option<Expr>,
}

impl MethodDecl {
    pub fn new(
        name: impl Into<String>,
        formals: Vec<Formal>,
        return_type: impl Into<String>,
        body: Expr,
    ) -> Self {
        Self {
            name: name.into(),
            formals,
            return_type: return_type.into(),
            body: Some(body),
        }
    }

    /// A bodiless built-in method.
    pub fn builtin(
        name: impl Into<String>,
        formals: Vec<Formal>,
        return_type: impl Into<String>,
    ) -> Self {
        Self {
            name: name.into(),
            formals,
            return_type: return_type.into(),
            body: None,
        }
    }
}

/// A formal parameter: name and declared type.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Formal {
    pub name: String,
    pub declared_type: String,
}

impl Formal {
    pub fn new(name: impl Into<String>, declared_type: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            declared_type: declared_type.into(),
        }
    }
}
