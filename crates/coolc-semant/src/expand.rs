//! Inheritance expansion.
//!
//! Pre-order descent from `Object` copying each parent's already
//! materialized feature list into its children. Attribute
//! redefinitions and override signature changes are rejected before
//! any copying happens; child overrides stay in place. The resulting
//! view lists every attribute before any method.

use coolc_ast::{Feature, MethodDecl};
use indexmap::IndexSet;

use crate::env::ClassEnvironment;
use crate::error::SemantError;

/// Materialize every class's inherited features, starting at the root.
pub fn expand_inheritance(env: &mut ClassEnvironment) -> Result<(), SemantError> {
    expand_class(env, coolc_ast::OBJECT)
}

fn expand_class(env: &mut ClassEnvironment, name: &str) -> Result<(), SemantError> {
    if let Some(parent) = env.parent_of(name).map(String::from) {
        // The parent is fully expanded by the time its child is
        // visited, so one level of copying is transitive.
        let parent_features = env.class_table[parent.as_str()].features.clone();
        let class = &env.class_table[name];

        for attr in class.attributes() {
            if parent_features
                .iter()
                .filter_map(Feature::as_attr)
                .any(|p| p.name == attr.name)
            {
                return Err(SemantError::AttributeRedefined(name.to_string()));
            }
        }

        for method in class.methods() {
            if let Some(parent_method) = parent_features
                .iter()
                .filter_map(Feature::as_method)
                .find(|p| p.name == method.name)
                && !same_signature(method, parent_method)
            {
                return Err(SemantError::MethodSignatureMismatch(method.name.clone()));
            }
        }

        // Materialize the inherited view: all attributes first, then
        // all methods. Inherited attributes precede the child's own
        // (they were defined first in the hierarchy), inherited
        // methods the child does not override go last.
        let overridden: IndexSet<String> = class.methods().map(|m| m.name.clone()).collect();
        let (parent_attrs, parent_methods): (Vec<Feature>, Vec<Feature>) = parent_features
            .into_iter()
            .partition(|f| f.as_attr().is_some());
        let class = &mut env.class_table[name];
        let (own_attrs, own_methods): (Vec<Feature>, Vec<Feature>) =
            std::mem::take(&mut class.features)
                .into_iter()
                .partition(|f| f.as_attr().is_some());

        let mut features = parent_attrs;
        features.extend(own_attrs);
        features.extend(own_methods);
        features.extend(
            parent_methods
                .into_iter()
                .filter(|m| !overridden.contains(m.name())),
        );
        class.features = features;
    }

    let children: Vec<String> = env.children_of(name).map(String::from).collect();
    for child in children {
        expand_class(env, &child)?;
    }
    Ok(())
}

/// Overrides must keep the ordered formal-type sequence and the
/// return type exactly.
fn same_signature(child: &MethodDecl, parent: &MethodDecl) -> bool {
    child.return_type == parent.return_type
        && child.formals.len() == parent.formals.len()
        && child
            .formals
            .iter()
            .zip(&parent.formals)
            .all(|(c, p)| c.declared_type == p.declared_type)
}
