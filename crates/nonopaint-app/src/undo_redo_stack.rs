use std::{collections::VecDeque, num::NonZero};

/// Bounded linear history with a cursor pointing at the current entry.
///
/// Pushing after an undo discards the redo branch. When full, the oldest entry
/// is dropped.
#[derive(Debug, Clone)]
pub(crate) struct UndoRedoStack<T> {
    stack: VecDeque<T>,
    capacity: NonZero<usize>,
    cursor: usize,
}

impl<T> UndoRedoStack<T> {
    #[must_use]
    pub(crate) fn new(capacity: NonZero<usize>) -> Self {
        Self {
            stack: VecDeque::new(),
            capacity,
            cursor: 0,
        }
    }

    pub(crate) fn push(&mut self, item: T) {
        if !self.stack.is_empty() {
            self.stack.truncate(self.cursor + 1);
        }
        if self.stack.len() == self.capacity.get() {
            self.stack.pop_front();
        }
        self.stack.push_back(item);
        self.cursor = self.stack.len() - 1;
    }

    #[must_use]
    pub(crate) fn can_undo(&self) -> bool {
        self.cursor > 0
    }

    /// Moves the cursor back and returns the entry it now points at.
    pub(crate) fn undo(&mut self) -> Option<&T> {
        if !self.can_undo() {
            return None;
        }
        self.cursor -= 1;
        self.current()
    }

    #[must_use]
    pub(crate) fn can_redo(&self) -> bool {
        self.cursor + 1 < self.stack.len()
    }

    /// Moves the cursor forward and returns the entry it now points at.
    pub(crate) fn redo(&mut self) -> Option<&T> {
        if !self.can_redo() {
            return None;
        }
        self.cursor += 1;
        self.current()
    }

    pub(crate) fn clear(&mut self) {
        self.stack.clear();
        self.cursor = 0;
    }

    #[must_use]
    pub(crate) fn current(&self) -> Option<&T> {
        self.stack.get(self.cursor)
    }
}

#[cfg(test)]
mod tests {
    use std::num::NonZero;

    use super::UndoRedoStack;

    fn stack_of(capacity: usize, items: &[&'static str]) -> UndoRedoStack<&'static str> {
        let mut stack = UndoRedoStack::new(NonZero::new(capacity).unwrap());
        for item in items {
            stack.push(*item);
        }
        stack
    }

    #[test]
    fn undo_then_redo_walks_the_cursor() {
        let mut stack = stack_of(10, &["empty", "stroke", "clear"]);

        assert_eq!(stack.current(), Some(&"clear"));
        assert_eq!(stack.undo(), Some(&"stroke"));
        assert_eq!(stack.undo(), Some(&"empty"));
        assert_eq!(stack.undo(), None);
        assert_eq!(stack.redo(), Some(&"stroke"));
        assert_eq!(stack.redo(), Some(&"clear"));
        assert_eq!(stack.redo(), None);
    }

    #[test]
    fn push_after_undo_discards_redo_branch() {
        let mut stack = stack_of(10, &["empty", "stroke", "clear"]);

        stack.undo();
        stack.push("import");

        assert!(!stack.can_redo());
        assert_eq!(stack.undo(), Some(&"stroke"));
        assert_eq!(stack.redo(), Some(&"import"));
        assert_eq!(stack.redo(), None);
    }

    #[test]
    fn full_stack_drops_oldest() {
        let mut stack = stack_of(2, &["a", "b", "c"]);

        assert_eq!(stack.undo(), Some(&"b"));
        assert!(!stack.can_undo());
    }

    #[test]
    fn clear_forgets_everything() {
        let mut stack = stack_of(5, &["a", "b"]);
        stack.clear();

        assert_eq!(stack.current(), None);
        assert!(!stack.can_undo());
        assert!(!stack.can_redo());

        stack.push("c");
        assert_eq!(stack.current(), Some(&"c"));
        assert!(!stack.can_undo());
    }
}
