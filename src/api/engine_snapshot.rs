use serde::{Deserialize, Serialize};

use crate::error::{ChartError, ChartResult};
use crate::interaction::EntityVisualState;
use crate::render::Renderer;

use super::{BrushSelection, ChartEngine, SeriesLabel};

/// Interaction state of one non-idle entity.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EntitySnapshot {
    pub name: String,
    pub state: EntityVisualState,
    pub highlighted: bool,
    pub raise_rank: u64,
    pub label: Option<SeriesLabel>,
}

/// Serializable deterministic state snapshot used by regression tests and
/// debugging tooling.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ChartSnapshot {
    pub plot_width: f64,
    pub context_domain: (f64, f64),
    pub focus_domain: (f64, f64),
    pub value_domain: (f64, f64),
    pub selection: BrushSelection,
    pub focus_ticks: Vec<i32>,
    pub context_ticks: Vec<i32>,
    pub entity_count: usize,
    pub active_entities: Vec<EntitySnapshot>,
}

impl ChartSnapshot {
    pub fn to_json_pretty(&self) -> ChartResult<String> {
        serde_json::to_string_pretty(self)
            .map_err(|e| ChartError::InvalidData(format!("failed to serialize snapshot: {e}")))
    }

    pub fn from_json_str(input: &str) -> ChartResult<Self> {
        serde_json::from_str(input)
            .map_err(|e| ChartError::InvalidData(format!("failed to parse snapshot: {e}")))
    }
}

impl<R: Renderer> ChartEngine<R> {
    #[must_use]
    pub fn snapshot(&self) -> ChartSnapshot {
        ChartSnapshot {
            plot_width: self.focus_dims.width,
            context_domain: self.scales.context_domain(),
            focus_domain: self.scales.focus_domain(),
            value_domain: self.scales.value_domain(),
            selection: self.selection,
            focus_ticks: self.focus_ticks.clone(),
            context_ticks: self.context_ticks.clone(),
            entity_count: self.entities.len(),
            active_entities: self
                .entities
                .iter()
                .filter(|(_, record)| record.state.is_active())
                .map(|(name, record)| EntitySnapshot {
                    name: name.clone(),
                    state: record.state,
                    highlighted: record.is_highlighted(),
                    raise_rank: record.raise_rank(),
                    label: record.label.clone(),
                })
                .collect(),
        }
    }

    pub fn snapshot_json_pretty(&self) -> ChartResult<String> {
        self.snapshot().to_json_pretty()
    }
}
