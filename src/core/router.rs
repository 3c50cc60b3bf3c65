use crate::models::view::ViewName;

/// Tracks the single active view. Every view can reach every other one.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ViewRouter {
    active: ViewName,
}

impl Default for ViewRouter {
    fn default() -> Self {
        Self {
            active: ViewName::Dashboard,
        }
    }
}

impl ViewRouter {
    pub fn new() -> Self {
        Self::default()
    }

    /// Make `view` the active one. Returns false when it already was.
    pub fn activate(&mut self, view: ViewName) -> bool {
        let changed = self.active != view;
        self.active = view;
        changed
    }

    pub fn current(&self) -> ViewName {
        self.active
    }
}
