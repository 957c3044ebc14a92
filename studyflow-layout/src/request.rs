//! JSON request/response documents for hosts that drive layout out of process.
//!
//! A request lists items by id, either with a fixed size or as a chip label
//! to be measured:
//!
//! ```json
//! {
//!   "width": 320,
//!   "spacing": 6,
//!   "items": [
//!     { "id": "avatar", "width": 48, "height": 48 },
//!     { "id": "math", "label": "Linear Algebra" }
//!   ]
//! }
//! ```

use std::collections::HashSet;
use std::io::Read;

use serde::{Deserialize, Serialize};

use crate::config::FlowConfig;
use crate::error::LayoutError;
use crate::layout::{Chip, FlowLayout, FlowLayoutResult, Measure, Padding, ProposedSize};
use crate::primitives::{Point, Size};

// =========================================================================
// Request
// =========================================================================

/// One layout pass requested by a host.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LayoutRequest {
    /// Container width budget. Absent means unbounded.
    #[serde(default)]
    pub width: Option<f32>,
    /// Accepted for completeness; layout depends on width only.
    #[serde(default)]
    pub height: Option<f32>,
    /// Overrides the configured spacing.
    #[serde(default)]
    pub spacing: Option<f32>,
    /// Overrides the configured origin.
    #[serde(default)]
    pub origin: Option<Point>,
    pub items: Vec<ItemSpec>,
}

/// An item in a request.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ItemSpec {
    pub id: String,
    #[serde(flatten)]
    pub kind: ItemKind,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum ItemKind {
    /// Already measured by the host.
    Fixed { width: f32, height: f32 },
    /// A text chip measured by the engine.
    Chip {
        label: String,
        #[serde(default, skip_serializing_if = "Option::is_none")]
        font_size: Option<f32>,
        #[serde(default, skip_serializing_if = "Option::is_none")]
        padding: Option<Padding>,
    },
}

impl ItemSpec {
    pub fn fixed(id: impl Into<String>, width: f32, height: f32) -> Self {
        Self {
            id: id.into(),
            kind: ItemKind::Fixed { width, height },
        }
    }

    pub fn chip(id: impl Into<String>, label: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            kind: ItemKind::Chip {
                label: label.into(),
                font_size: None,
                padding: None,
            },
        }
    }
}

impl Measure for ItemSpec {
    fn measure(&self, proposal: ProposedSize) -> Size {
        match &self.kind {
            ItemKind::Fixed { width, height } => Size::new(*width, *height),
            ItemKind::Chip {
                label,
                font_size,
                padding,
            } => {
                let mut chip = Chip::new(label.as_str());
                if let Some(size) = font_size {
                    chip = chip.font_size(*size);
                }
                if let Some(padding) = padding {
                    chip = chip.padding(*padding);
                }
                chip.measure(proposal)
            }
        }
    }
}

impl LayoutRequest {
    pub fn new(width: Option<f32>, items: Vec<ItemSpec>) -> Self {
        Self {
            width,
            height: None,
            spacing: None,
            origin: None,
            items,
        }
    }

    pub fn from_json_str(json: &str) -> Result<Self, LayoutError> {
        Ok(serde_json::from_str(json)?)
    }

    pub fn from_reader(reader: impl Read) -> Result<Self, LayoutError> {
        Ok(serde_json::from_reader(reader)?)
    }

    /// Check that item ids are unique.
    pub fn validate(&self) -> Result<(), LayoutError> {
        let mut seen = HashSet::with_capacity(self.items.len());
        for item in &self.items {
            if !seen.insert(item.id.as_str()) {
                return Err(LayoutError::DuplicateItem(item.id.clone()));
            }
        }
        Ok(())
    }

    pub fn proposal(&self) -> ProposedSize {
        ProposedSize::new(self.width, self.height)
    }

    /// Validate and run one pass, falling back to `config` for unset values.
    pub fn run(&self, config: &FlowConfig) -> Result<LayoutResponse, LayoutError> {
        self.validate()?;

        let layout = match self.spacing {
            Some(spacing) => FlowLayout::new(spacing),
            None => config.layout(),
        };
        let origin = self.origin.unwrap_or(config.origin);
        let result = layout.layout(&self.items, self.proposal(), origin);

        Ok(LayoutResponse::from_result(&self.items, &result))
    }
}

// =========================================================================
// Response
// =========================================================================

/// Layout result keyed by item id.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LayoutResponse {
    pub width: f32,
    pub height: f32,
    /// Item ids per row, top to bottom.
    pub rows: Vec<Vec<String>>,
    pub placements: Vec<Placement>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Placement {
    pub id: String,
    pub x: f32,
    pub y: f32,
    pub width: f32,
    pub height: f32,
}

impl LayoutResponse {
    fn from_result(items: &[ItemSpec], result: &FlowLayoutResult) -> Self {
        let rows = result
            .rows
            .iter()
            .map(|row| row.indices().map(|i| items[i].id.clone()).collect())
            .collect();

        let placements = result
            .placements
            .iter()
            .zip(items)
            .map(|(rect, item)| Placement {
                id: item.id.clone(),
                x: rect.x,
                y: rect.y,
                width: rect.width,
                height: rect.height,
            })
            .collect();

        Self {
            width: result.total_size.width,
            height: result.total_size.height,
            rows,
            placements,
        }
    }
}
