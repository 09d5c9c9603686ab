use serde::{Deserialize, Serialize};

use crate::interaction::EntityVisualState;

use super::SeriesLabel;

/// Render-side markers for one drawn line.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct LineHandle {
    pub highlighted: bool,
    pub pinned: bool,
    /// Draw order within the layer; higher draws later. Zero keeps data order.
    pub raise_rank: u64,
}

/// Interaction state plus the handles of everything drawn for an entity.
///
/// The line handles are `None` only for entities that were never drawn; the
/// engine attaches both when it builds its initial records.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct EntityRecord {
    pub state: EntityVisualState,
    pub pointer_over: bool,
    pub focus_line: Option<LineHandle>,
    pub context_line: Option<LineHandle>,
    pub label: Option<SeriesLabel>,
}

impl EntityRecord {
    #[must_use]
    pub fn attached() -> Self {
        Self {
            focus_line: Some(LineHandle::default()),
            context_line: Some(LineHandle::default()),
            ..Self::default()
        }
    }

    pub(super) fn lines_mut(&mut self) -> impl Iterator<Item = &mut LineHandle> {
        self.focus_line.iter_mut().chain(self.context_line.iter_mut())
    }

    #[must_use]
    pub fn raise_rank(&self) -> u64 {
        self.focus_line
            .or(self.context_line)
            .map_or(0, |line| line.raise_rank)
    }

    #[must_use]
    pub fn is_highlighted(&self) -> bool {
        self.focus_line.is_some_and(|line| line.highlighted)
    }
}
