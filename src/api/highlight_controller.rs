use tracing::{debug, trace};

use crate::error::{ChartError, ChartResult};
use crate::interaction::{EntityVisualState, PointerEvent, VisualEffect, transition};
use crate::render::Renderer;

use super::{ChartEngine, SeriesLabel, resolve_label_placement};

impl<R: Renderer> ChartEngine<R> {
    pub fn pointer_enter(&mut self, name: &str) -> ChartResult<EntityVisualState> {
        let state = self.dispatch_pointer_event(name, PointerEvent::Enter)?;
        self.render()?;
        Ok(state)
    }

    pub fn pointer_leave(&mut self, name: &str) -> ChartResult<EntityVisualState> {
        let state = self.dispatch_pointer_event(name, PointerEvent::Leave)?;
        self.render()?;
        Ok(state)
    }

    /// Toggles the pin on `name`.
    pub fn click(&mut self, name: &str) -> ChartResult<EntityVisualState> {
        let state = self.dispatch_pointer_event(name, PointerEvent::Click)?;
        self.render()?;
        Ok(state)
    }

    /// Runs one state-machine step and applies its effects, without rendering.
    pub(super) fn dispatch_pointer_event(
        &mut self,
        name: &str,
        event: PointerEvent,
    ) -> ChartResult<EntityVisualState> {
        let policy = self.config.unpin_policy;
        let record = self
            .entities
            .get_mut(name)
            .ok_or_else(|| ChartError::UnknownSeries(name.to_owned()))?;

        let step = transition(record.state, record.pointer_over, event, policy);
        let previous = record.state;
        record.state = step.next;
        record.pointer_over = step.pointer_over;
        if previous != step.next {
            debug!(entity = name, ?event, from = ?previous, to = ?step.next, "entity state changed");
        }

        for effect in step.effects {
            self.apply_visual_effect(name, effect);
        }
        if event == PointerEvent::Click {
            self.raise_pinned_entities();
        }
        Ok(step.next)
    }

    fn apply_visual_effect(&mut self, name: &str, effect: VisualEffect) {
        trace!(entity = name, ?effect, "apply visual effect");
        match effect {
            VisualEffect::Highlight { pinned } => {
                if let Some(record) = self.entities.get_mut(name) {
                    for line in record.lines_mut() {
                        line.highlighted = true;
                        line.pinned = pinned;
                    }
                }
            }
            VisualEffect::Unhighlight => {
                if let Some(record) = self.entities.get_mut(name) {
                    for line in record.lines_mut() {
                        line.highlighted = false;
                        line.pinned = false;
                    }
                }
            }
            VisualEffect::RaiseToTop => {
                self.raise_counter += 1;
                let rank = self.raise_counter;
                if let Some(record) = self.entities.get_mut(name) {
                    for line in record.lines_mut() {
                        line.raise_rank = rank;
                    }
                }
            }
            VisualEffect::PlaceLabel => self.place_label(name),
            VisualEffect::DestroyLabel => {
                if let Some(record) = self.entities.get_mut(name) {
                    record.label = None;
                }
            }
        }
    }

    /// Creates the label on first use, then positions it for the current
    /// focus domain.
    pub(super) fn place_label(&mut self, name: &str) {
        let Some(series) = self.store.get(name) else {
            return;
        };
        let placement = resolve_label_placement(
            series,
            self.scales.focus_x(),
            self.scales.focus_y(),
            self.focus_dims.width,
            self.config.label,
        );
        let Some(record) = self.entities.get_mut(name) else {
            return;
        };
        let pinned = record.state.is_pinned();
        trace!(
            entity = name,
            visible = placement.is_some(),
            pinned,
            "label placed"
        );
        record
            .label
            .get_or_insert_with(|| SeriesLabel::new(name))
            .apply(placement, pinned);
    }

    /// Lifts every pinned entity above the rest, keeping their relative order.
    pub(super) fn raise_pinned_entities(&mut self) {
        let mut pinned: Vec<(u64, String)> = self
            .entities
            .iter()
            .filter(|(_, record)| record.state.is_pinned())
            .map(|(name, record)| (record.raise_rank(), name.clone()))
            .collect();
        pinned.sort_unstable();
        for (_, name) in &pinned {
            self.apply_visual_effect(name, VisualEffect::RaiseToTop);
        }
    }

    pub(super) fn relabel_active_entities(&mut self) {
        let active: Vec<String> = self
            .entities
            .iter()
            .filter(|(_, record)| record.state.is_active())
            .map(|(name, _)| name.clone())
            .collect();
        for name in &active {
            self.place_label(name);
        }
    }
}
