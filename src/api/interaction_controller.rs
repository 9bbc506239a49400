use tracing::trace;

use crate::interaction::{HoverState, PointerEvent};
use crate::render::Renderer;

use super::ProductionChart;

impl<R: Renderer> ProductionChart<R> {
    /// Data index nearest to `pointer_x`, without touching hover state.
    #[must_use]
    pub fn nearest_index(&self, pointer_x: f64) -> Option<usize> {
        self.scale().nearest_index(pointer_x)
    }

    /// Applies one pointer event; returns `true` when the hover index changed.
    pub fn handle_pointer(&mut self, event: PointerEvent) -> bool {
        let scale = self.scale();
        let changed = self
            .hover
            .apply(event, |pointer_x| scale.nearest_index(pointer_x));
        if changed {
            trace!(?event, index = ?self.hover.index(), "hover index changed");
        }
        changed
    }

    pub fn pointer_move(&mut self, x: f64) -> bool {
        self.handle_pointer(PointerEvent::Move { x })
    }

    pub fn pointer_down(&mut self, x: f64) -> bool {
        self.handle_pointer(PointerEvent::Down { x })
    }

    pub fn pointer_up(&mut self) -> bool {
        self.handle_pointer(PointerEvent::Up)
    }

    pub fn pointer_leave(&mut self) -> bool {
        self.handle_pointer(PointerEvent::Leave)
    }

    #[must_use]
    pub fn hover_state(&self) -> HoverState {
        self.hover
    }

    #[must_use]
    pub fn hover_index(&self) -> Option<usize> {
        self.hover.index()
    }
}
