use std::collections::HashMap;

use crate::interpreter::value::core::Value;

/// What kind of construct opened a frame.
#[derive(Debug, Clone, PartialEq)]
pub enum FrameKind {
    /// The root frame, or a frame opened by `If`/`Loop`.
    Block,
    /// A function call frame, holding the pending return value.
    Function {
        /// Set by `Return`; `Null` until then.
        return_value: Value,
    },
}

/// One binding context: its names, its parent and its kind.
#[derive(Debug, Clone)]
pub struct Frame {
    /// Names bound directly in this frame.
    pub vars:   HashMap<String, Value>,
    /// Index of the enclosing frame; `None` only for the root.
    pub parent: Option<usize>,
    /// Block or function frame.
    pub kind:   FrameKind,
}

/// The scope chain, stored as an arena of frames addressed by index.
///
/// Frames are pushed and popped in stack order, and the active frame is
/// always the most recently pushed one. Index `0` is the root frame, which
/// lives as long as the arena.
#[derive(Debug, Clone)]
pub struct ScopeArena {
    frames:  Vec<Frame>,
    current: usize,
}

impl Default for ScopeArena {
    fn default() -> Self {
        Self::new()
    }
}

impl ScopeArena {
    /// Creates an arena holding only the root frame.
    #[must_use]
    pub fn new() -> Self {
        Self { frames:  vec![Frame { vars:   HashMap::new(),
                                     parent: None,
                                     kind:   FrameKind::Block, }],
               current: 0, }
    }

    /// Opens a child of the current frame and makes it current.
    pub fn push(&mut self, kind: FrameKind) {
        let parent = self.current;
        self.frames.push(Frame { vars: HashMap::new(),
                                 parent: Some(parent),
                                 kind });
        self.current = self.frames.len() - 1;
        tracing::trace!(depth = self.frames.len(), "pushed scope");
    }

    /// Closes the current frame and returns it. The root is never popped.
    pub fn pop(&mut self) -> Option<Frame> {
        if self.current == 0 {
            return None;
        }
        let frame = self.frames.pop()?;
        self.current = frame.parent.unwrap_or(0);
        tracing::trace!(depth = self.frames.len(), "popped scope");
        Some(frame)
    }

    /// Resolves `name`, walking from the current frame to the root.
    #[must_use]
    pub fn lookup(&self, name: &str) -> Option<&Value> {
        let mut index = Some(self.current);
        while let Some(i) = index {
            let frame = &self.frames[i];
            if let Some(value) = frame.vars.get(name) {
                return Some(value);
            }
            index = frame.parent;
        }
        None
    }

    /// Binds `name` in the current frame, shadowing any outer binding.
    pub fn define(&mut self, name: &str, value: Value) {
        self.frames[self.current].vars.insert(name.to_string(), value);
    }

    /// Overwrites an existing binding of `name`, searching from the parent
    /// of the current frame outwards. The current frame is never written.
    ///
    /// Returns `false` when no ancestor binds `name`.
    pub fn assign_in_ancestor(&mut self, name: &str, value: Value) -> bool {
        let mut index = self.frames[self.current].parent;
        while let Some(i) = index {
            let frame = &mut self.frames[i];
            if let Some(slot) = frame.vars.get_mut(name) {
                *slot = value;
                return true;
            }
            index = frame.parent;
        }
        false
    }

    /// Stores the return value in the current function frame.
    ///
    /// Returns `false` if the current frame is not a function frame.
    pub fn set_return_value(&mut self, value: Value) -> bool {
        match &mut self.frames[self.current].kind {
            FrameKind::Function { return_value } => {
                *return_value = value;
                true
            },
            FrameKind::Block => false,
        }
    }

    /// The pending return value of the current frame, if it is a function
    /// frame.
    #[must_use]
    pub fn return_value(&self) -> Option<&Value> {
        match &self.frames[self.current].kind {
            FrameKind::Function { return_value } => Some(return_value),
            FrameKind::Block => None,
        }
    }

    /// Number of live frames, root included.
    #[must_use]
    pub fn depth(&self) -> usize {
        self.frames.len()
    }

    /// The bindings of the root frame.
    #[must_use]
    pub fn root(&self) -> &HashMap<String, Value> {
        &self.frames[0].vars
    }
}
