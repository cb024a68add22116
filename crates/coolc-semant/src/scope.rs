//! Scoped variable bindings.

use indexmap::IndexMap;

/// A stack of name-to-declared-type frames.
///
/// Class attributes live in the base frame; each method body, `let`,
/// and `case` branch pushes its own frame. `lookup` searches
/// innermost-first and never mutates the stack.
#[derive(Debug)]
pub struct VariableScope {
    frames: Vec<IndexMap<String, String>>,
}

impl VariableScope {
    pub fn new() -> Self {
        Self {
            frames: vec![IndexMap::new()],
        }
    }

    pub fn push_frame(&mut self) {
        self.frames.push(IndexMap::new());
    }

    pub fn pop_frame(&mut self) {
        self.frames.pop();
    }

    /// Bind `name` in the innermost frame, shadowing outer bindings.
    pub fn insert(&mut self, name: &str, declared_type: String) {
        if let Some(frame) = self.frames.last_mut() {
            frame.insert(name.to_string(), declared_type);
        }
    }

    /// Innermost binding for `name`, if any.
    pub fn lookup(&self, name: &str) -> Option<&str> {
        self.frames
            .iter()
            .rev()
            .find_map(|frame| frame.get(name))
            .map(String::as_str)
    }
}
