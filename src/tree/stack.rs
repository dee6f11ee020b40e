//! Stack of open ancestor directories

use tracing::trace;

/// Directory names from the root down to the most recently opened directory.
///
/// For well-formed input the length is always the current open depth plus
/// one, with the root name at index 0.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DirectoryStack {
    entries: Vec<String>,
}

impl DirectoryStack {
    pub fn new() -> Self {
        Self::default()
    }

    /// Start a new tree rooted at `name`, discarding any previous state.
    pub fn reset(&mut self, name: impl Into<String>) {
        self.entries.clear();
        self.entries.push(name.into());
        trace!(stack = ?self.entries, "reset directory stack");
    }

    /// Open a directory at `depth`: close everything at that depth or
    /// deeper, then push the new name.
    pub fn enter(&mut self, depth: usize, name: impl Into<String>) {
        self.entries.truncate(depth);
        self.entries.push(name.into());
        trace!(depth, stack = ?self.entries, "entered directory");
    }

    /// Full path of an entry named `name` sitting at `depth`.
    ///
    /// The containing directory is at `depth - 1`, so the path is built from
    /// the first `depth` stack entries. Deeper entries left over from an
    /// earlier branch are ignored. The result is an owned copy.
    pub fn path_for(&self, depth: usize, name: &str, separator: char) -> String {
        let ancestors = &self.entries[..depth.min(self.entries.len())];
        let mut path = String::new();
        for dir in ancestors {
            path.push_str(dir);
            path.push(separator);
        }
        if ancestors.is_empty() {
            path.push(separator);
        }
        path.push_str(name);
        path
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn as_slice(&self) -> &[String] {
        &self.entries
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_reset_discards_previous_tree() {
        let mut stack = DirectoryStack::new();
        stack.reset("A");
        stack.enter(1, "x");
        stack.reset("B");
        assert_eq!(stack.as_slice(), ["B"]);
    }

    #[test]
    fn test_enter_sets_length_to_depth_plus_one() {
        let mut stack = DirectoryStack::new();
        stack.reset("R");
        stack.enter(1, "a");
        assert_eq!(stack.len(), 2);
        stack.enter(2, "b");
        assert_eq!(stack.len(), 3);
        stack.enter(3, "c");
        assert_eq!(stack.len(), 4);
        stack.enter(1, "d");
        assert_eq!(stack.as_slice(), ["R", "d"]);
    }

    #[test]
    fn test_sibling_replaces_previous() {
        let mut stack = DirectoryStack::new();
        stack.reset("R");
        stack.enter(1, "A");
        stack.enter(1, "B");
        assert_eq!(stack.as_slice(), ["R", "B"]);
    }

    #[test]
    fn test_path_for_uses_only_ancestors() {
        let mut stack = DirectoryStack::new();
        stack.reset("C:");
        stack.enter(1, "A");
        stack.enter(2, "B");
        assert_eq!(stack.path_for(3, "in_b.txt", '\\'), "C:\\A\\B\\in_b.txt");
        // A file back in A after B was opened.
        assert_eq!(stack.path_for(2, "in_a.txt", '\\'), "C:\\A\\in_a.txt");
        assert_eq!(stack.path_for(1, "top.txt", '\\'), "C:\\top.txt");
    }

    #[test]
    fn test_path_for_without_root() {
        let stack = DirectoryStack::new();
        assert!(stack.is_empty());
        assert_eq!(stack.path_for(1, "orphan.txt", '\\'), "\\orphan.txt");
    }

    #[test]
    fn test_path_is_a_snapshot() {
        let mut stack = DirectoryStack::new();
        stack.reset("R");
        stack.enter(1, "A");
        let path = stack.path_for(2, "f", '\\');
        stack.enter(1, "B");
        assert_eq!(path, "R\\A\\f");
    }
}
