//! Well-formedness checks over the inheritance graph.
//!
//! Three sub-checks, in order:
//! - undefined parents are repaired by re-parenting under `Object`,
//!   reported as a warning
//! - inheritance from `String`, `Int`, or `Bool` is rejected
//! - classes unreachable from `Object` are reported as cycle members

use coolc_ast::{BOOL, INT, OBJECT, STRING};
use indexmap::IndexSet;

use crate::env::ClassEnvironment;
use crate::error::{SemantError, SemantWarning};

/// Run all well-formedness checks, repairing what is repairable.
pub fn check_well_formed(env: &mut ClassEnvironment) -> Result<Vec<SemantWarning>, SemantError> {
    let warnings = rewire_undefined_parents(env);
    forbid_base_inheritance(env)?;
    check_inheritance_cycles(env)?;
    Ok(warnings)
}

/// Re-parent children of never-defined classes under `Object`.
///
/// Both the graph and each orphan's `parent` field are rewritten, so
/// the expansion descent never chases a dangling parent name.
fn rewire_undefined_parents(env: &mut ClassEnvironment) -> Vec<SemantWarning> {
    let undefined: Vec<String> = env
        .inheritance_graph
        .keys()
        .filter(|parent| *parent != OBJECT && !env.class_table.contains_key(*parent))
        .cloned()
        .collect();

    let mut warnings = Vec::new();
    for parent in undefined {
        let Some(children) = env.inheritance_graph.shift_remove(&parent) else {
            continue;
        };
        for child in &children {
            if let Some(decl) = env.class_table.get_mut(child) {
                decl.parent = Some(OBJECT.to_string());
            }
        }
        env.inheritance_graph
            .entry(OBJECT.to_string())
            .or_default()
            .extend(children.iter().cloned());
        warnings.push(SemantWarning::UndefinedParent {
            parent,
            children: children.into_iter().collect(),
        });
    }
    warnings
}

/// The value base classes admit no subclasses.
fn forbid_base_inheritance(env: &ClassEnvironment) -> Result<(), SemantError> {
    for parent in [STRING, INT, BOOL] {
        if let Some(children) = env.inheritance_graph.get(parent)
            && let Some(child) = children.first()
        {
            return Err(SemantError::IllegalBaseInheritance {
                child: child.clone(),
                parent: parent.to_string(),
            });
        }
    }
    Ok(())
}

/// Mark everything reachable from `Object`; whatever the graph knows
/// but the sweep never visits sits on a cycle.
fn check_inheritance_cycles(env: &ClassEnvironment) -> Result<(), SemantError> {
    let mut visited: IndexSet<&str> = IndexSet::new();
    let mut stack = vec![OBJECT];
    while let Some(name) = stack.pop() {
        if !visited.insert(name) {
            continue;
        }
        if let Some(children) = env.inheritance_graph.get(name) {
            stack.extend(children.iter().map(String::as_str));
        }
    }

    for (parent, children) in &env.inheritance_graph {
        if !visited.contains(parent.as_str()) {
            return Err(SemantError::InheritanceCycle(parent.clone()));
        }
        for child in children {
            if !visited.contains(child.as_str()) {
                return Err(SemantError::InheritanceCycle(child.clone()));
            }
        }
    }
    Ok(())
}
