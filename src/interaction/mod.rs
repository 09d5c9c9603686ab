//! Per-entity highlight/pin state machine.
//!
//! Decisions live in [`transition`], a pure function returning the next state
//! and the visual effects the engine must apply. The engine owns the records
//! and performs the effects; nothing here touches rendering.

use serde::{Deserialize, Serialize};
use smallvec::{SmallVec, smallvec};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum EntityVisualState {
    #[default]
    Idle,
    Hovered,
    Pinned,
}

impl EntityVisualState {
    /// Hovered and pinned entities are highlighted and labeled.
    #[must_use]
    pub fn is_active(self) -> bool {
        !matches!(self, Self::Idle)
    }

    #[must_use]
    pub fn is_pinned(self) -> bool {
        matches!(self, Self::Pinned)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum PointerEvent {
    Enter,
    Leave,
    Click,
}

/// What happens when a pinned entity is clicked while the pointer is over it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum UnpinPolicy {
    /// Settle to idle; only a new pointer-enter highlights it again.
    #[default]
    RequireFreshEnter,
    /// Drop back to hovered while the pointer is still over the line.
    KeepPointerHover,
}

/// Render-side command emitted by a transition.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum VisualEffect {
    /// Marks both the focus line and its context twin highlighted.
    Highlight { pinned: bool },
    /// Clears highlight and pinned markers on both lines.
    Unhighlight,
    /// Moves both lines to the top of their layer.
    RaiseToTop,
    /// Creates the label if needed and positions it.
    PlaceLabel,
    /// Tears the label down.
    DestroyLabel,
}

pub type VisualEffects = SmallVec<[VisualEffect; 4]>;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Transition {
    pub next: EntityVisualState,
    pub pointer_over: bool,
    pub effects: VisualEffects,
}

/// Computes the next state for one pointer event on one entity.
///
/// `pointer_over` is whether the pointer is currently known to be over the
/// entity's line.
#[must_use]
pub fn transition(
    state: EntityVisualState,
    pointer_over: bool,
    event: PointerEvent,
    policy: UnpinPolicy,
) -> Transition {
    use EntityVisualState::{Hovered, Idle, Pinned};
    use VisualEffect::{DestroyLabel, Highlight, PlaceLabel, RaiseToTop, Unhighlight};

    match (state, event) {
        (Idle | Hovered, PointerEvent::Enter) => Transition {
            next: Hovered,
            pointer_over: true,
            effects: smallvec![Highlight { pinned: false }, RaiseToTop, PlaceLabel],
        },
        (Pinned, PointerEvent::Enter) => Transition {
            next: Pinned,
            pointer_over: true,
            effects: smallvec![RaiseToTop, PlaceLabel],
        },
        (Hovered, PointerEvent::Leave) => Transition {
            next: Idle,
            pointer_over: false,
            effects: smallvec![Unhighlight, DestroyLabel],
        },
        (Idle | Pinned, PointerEvent::Leave) => Transition {
            next: state,
            pointer_over: false,
            effects: SmallVec::new(),
        },
        (Idle | Hovered, PointerEvent::Click) => Transition {
            next: Pinned,
            pointer_over,
            effects: smallvec![Highlight { pinned: true }, RaiseToTop, PlaceLabel],
        },
        (Pinned, PointerEvent::Click) => {
            if policy == UnpinPolicy::KeepPointerHover && pointer_over {
                Transition {
                    next: Hovered,
                    pointer_over: true,
                    effects: smallvec![Highlight { pinned: false }, PlaceLabel],
                }
            } else {
                Transition {
                    next: Idle,
                    pointer_over: false,
                    effects: smallvec![Unhighlight, DestroyLabel],
                }
            }
        }
    }
}
