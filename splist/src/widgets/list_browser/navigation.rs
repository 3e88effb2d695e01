use super::model::{BreadcrumbItem, BreadcrumbTarget};

/// Position inside a library's folder tree.
///
/// `current_path` is relative to the library root and uses `/` separators;
/// the empty string is the root. `history` holds the ancestors visited on the
/// way down, excluding the root, so its last element (or the root) joined
/// with the last path segment always yields `current_path`.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub(crate) struct NavigationState {
    current_path: String,
    history: Vec<String>,
}

impl NavigationState {
    pub(crate) fn current_path(&self) -> &str {
        &self.current_path
    }

    #[cfg(test)]
    pub(crate) fn history(&self) -> &[String] {
        &self.history
    }

    /// Descend into the child folder `name` of the current folder.
    pub(crate) fn enter(&mut self, name: &str) {
        let next = join_path(&self.current_path, name);
        if !self.current_path.is_empty() {
            self.history.push(std::mem::take(&mut self.current_path));
        }
        self.current_path = next;
    }

    pub(crate) fn go_to_root(&mut self) {
        self.current_path.clear();
        self.history.clear();
    }

    /// Jump to the ancestor at `index` in the current path's segments.
    ///
    /// Returns `false` and leaves the state untouched when `index` is not a
    /// segment of the current path.
    pub(crate) fn go_to_segment(&mut self, index: usize) -> bool {
        let segments: Vec<&str> = self.segments().collect();
        if index >= segments.len() {
            return false;
        }
        let target = segments[..=index].join("/");
        self.history.truncate(index);
        self.current_path = target;
        true
    }

    /// Root item followed by one item per segment of the current path.
    pub(crate) fn breadcrumb(&self, root_label: &str) -> Vec<BreadcrumbItem> {
        std::iter::once(BreadcrumbItem {
            label: root_label.to_string(),
            target: BreadcrumbTarget::Root,
        })
        .chain(self.segments().enumerate().map(|(index, segment)| {
            BreadcrumbItem {
                label: segment.to_string(),
                target: BreadcrumbTarget::Segment(index),
            }
        }))
        .collect()
    }

    fn segments(&self) -> impl Iterator<Item = &str> {
        self.current_path
            .split('/')
            .filter(|segment| !segment.is_empty())
    }
}

/// Join a folder path and a child name, collapsing repeated separators.
pub(crate) fn join_path(base: &str, name: &str) -> String {
    base.split('/')
        .chain(name.split('/'))
        .filter(|segment| !segment.is_empty())
        .collect::<Vec<_>>()
        .join("/")
}
