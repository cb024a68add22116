//! The class environment: name-keyed class table and inheritance graph.

use coolc_ast::ClassDecl;
use indexmap::{IndexMap, IndexSet};
use serde::Serialize;

use crate::error::SemantError;

/// Global class environment shared by every analysis phase.
///
/// Built by graph construction, repaired by the well-formedness pass,
/// enriched in place by inheritance expansion, then read-only for
/// inference and conformance checking. All inter-class references are
/// class names resolved against `class_table`; both tables iterate in
/// insertion order so error reports are deterministic.
#[derive(Debug, Clone, Serialize)]
pub struct ClassEnvironment {
    /// Class name to declaration, in source order. User classes come
    /// first, the built-ins appended by base installation after them.
    pub class_table: IndexMap<String, ClassDecl>,
    /// Parent name to immediate child names.
    pub inheritance_graph: IndexMap<String, IndexSet<String>>,
}

impl ClassEnvironment {
    /// Build the class table and inheritance graph from the parsed
    /// program (base classes already installed).
    pub fn build(classes: Vec<ClassDecl>) -> Result<Self, SemantError> {
        let mut env = Self {
            class_table: IndexMap::new(),
            inheritance_graph: IndexMap::new(),
        };
        for class in classes {
            if env.class_table.contains_key(&class.name) {
                return Err(SemantError::DuplicateClass(class.name));
            }
            if let Some(parent) = &class.parent {
                env.inheritance_graph
                    .entry(parent.clone())
                    .or_default()
                    .insert(class.name.clone());
            }
            env.class_table.insert(class.name.clone(), class);
        }
        Ok(env)
    }

    pub fn class(&self, name: &str) -> Option<&ClassDecl> {
        self.class_table.get(name)
    }

    pub fn contains(&self, name: &str) -> bool {
        self.class_table.contains_key(name)
    }

    pub fn parent_of(&self, name: &str) -> Option<&str> {
        self.class_table.get(name).and_then(|c| c.parent.as_deref())
    }

    /// Immediate children of `name`, in insertion order.
    pub fn children_of(&self, name: &str) -> impl Iterator<Item = &str> {
        self.inheritance_graph
            .get(name)
            .into_iter()
            .flatten()
            .map(String::as_str)
    }
}
