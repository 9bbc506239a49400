use serde::{Deserialize, Serialize};

/// Pointer input relevant to the production chart.
///
/// `x` is the horizontal offset in plot units, relative to the plot origin.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum PointerEvent {
    Move { x: f64 },
    Down { x: f64 },
    Up,
    Leave,
}

impl PointerEvent {
    /// Pointer x for events that resolve a hover index; `None` for events
    /// that clear it.
    #[must_use]
    pub fn resolving_x(self) -> Option<f64> {
        match self {
            PointerEvent::Move { x } | PointerEvent::Down { x } => Some(x),
            PointerEvent::Up | PointerEvent::Leave => None,
        }
    }
}

/// Transient hover selection: at most one data index.
///
/// The most recent pointer event wins; nothing is kept across leave/up.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct HoverState {
    index: Option<usize>,
}

impl HoverState {
    #[must_use]
    pub fn index(self) -> Option<usize> {
        self.index
    }

    #[must_use]
    pub fn is_active(self) -> bool {
        self.index.is_some()
    }

    /// Stores `index`; returns `true` when the selection changed.
    pub fn set(&mut self, index: Option<usize>) -> bool {
        let changed = self.index != index;
        self.index = index;
        changed
    }

    /// Clears the selection; returns `true` when something was selected.
    pub fn clear(&mut self) -> bool {
        self.set(None)
    }

    /// Applies `event`, using `resolve` to map a pointer x to a data index.
    ///
    /// Returns `true` when the selection changed.
    pub fn apply<F>(&mut self, event: PointerEvent, resolve: F) -> bool
    where
        F: FnOnce(f64) -> Option<usize>,
    {
        match event.resolving_x() {
            Some(x) => self.set(resolve(x)),
            None => self.clear(),
        }
    }
}
