//! Owned type-level snapshot of the expanded class environment.
//!
//! Built once after inheritance expansion and consulted by inference
//! and conformance checking. Carrying parent links and method
//! signatures by value lets inference mutate class bodies inside the
//! class table while lookups stay available.

use coolc_ast::{OBJECT, SELF_TYPE};
use indexmap::IndexMap;

use crate::env::ClassEnvironment;

/// A method signature as seen by dispatch checking.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MethodSig {
    pub formal_types: Vec<String>,
    pub return_type: String,
}

/// Parent links and expanded method signatures for every known class.
#[derive(Debug, Clone)]
pub struct TypeContext {
    /// Class name to parent name; `None` for `Object`.
    parents: IndexMap<String, Option<String>>,
    /// Class name to method name to signature, post-expansion.
    methods: IndexMap<String, IndexMap<String, MethodSig>>,
}

impl TypeContext {
    pub fn build(env: &ClassEnvironment) -> Self {
        let mut parents = IndexMap::new();
        let mut methods = IndexMap::new();
        for (name, class) in &env.class_table {
            parents.insert(name.clone(), class.parent.clone());
            let sigs: IndexMap<String, MethodSig> = class
                .methods()
                .map(|m| {
                    (
                        m.name.clone(),
                        MethodSig {
                            formal_types: m
                                .formals
                                .iter()
                                .map(|f| f.declared_type.clone())
                                .collect(),
                            return_type: m.return_type.clone(),
                        },
                    )
                })
                .collect();
            methods.insert(name.clone(), sigs);
        }
        Self { parents, methods }
    }

    pub fn contains(&self, class: &str) -> bool {
        self.parents.contains_key(class)
    }

    /// Signature of `method` on `class`, if the expanded class has it.
    pub fn method(&self, class: &str, method: &str) -> Option<&MethodSig> {
        self.methods.get(class)?.get(method)
    }

    /// Reflexive-transitive subtype check induced by single
    /// inheritance: `child` conforms to `parent` iff `parent` lies on
    /// `child`'s path to the root.
    pub fn conforms(&self, child: &str, parent: &str) -> bool {
        if child == parent {
            return true;
        }
        let mut current = self.parent_of(child);
        while let Some(name) = current {
            if name == parent {
                return true;
            }
            current = self.parent_of(name);
        }
        false
    }

    /// Lowest common ancestor of two classes in the inheritance tree.
    ///
    /// Single inheritance gives each class a unique root-to-class
    /// path; walking both paths in lock step, the last agreeing
    /// position is the answer. A name unknown to the class table
    /// shares no path and degrades to `Object`.
    pub fn lca(&self, a: &str, b: &str) -> String {
        let path_a = self.path_from_root(a);
        let path_b = self.path_from_root(b);

        let mut result = OBJECT;
        for (x, y) in path_a.iter().zip(&path_b) {
            if x != y {
                break;
            }
            result = *x;
        }
        result.to_string()
    }

    /// Resolve `SELF_TYPE` to the enclosing class at a use site.
    pub fn resolve_self_type<'a>(declared: &'a str, enclosing: &'a str) -> &'a str {
        if declared == SELF_TYPE {
            enclosing
        } else {
            declared
        }
    }

    fn parent_of(&self, class: &str) -> Option<&str> {
        self.parents.get(class)?.as_deref()
    }

    fn path_from_root<'a>(&'a self, class: &'a str) -> Vec<&'a str> {
        let mut path = vec![class];
        let mut current = self.parent_of(class);
        while let Some(name) = current {
            path.push(name);
            current = self.parent_of(name);
        }
        path.reverse();
        path
    }
}
