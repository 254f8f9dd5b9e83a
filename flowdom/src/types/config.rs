use super::HorizontalAlignment;
use crate::layout::rect::non_negative;

pub const DEFAULT_SPACING: f64 = 8.0;

/// Alignment and spacing shared by every pass of a flow layout.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FlowConfig {
    pub alignment: HorizontalAlignment,
    /// Gap between items in a row and between consecutive rows.
    pub spacing: f64,
}

impl Default for FlowConfig {
    fn default() -> Self {
        Self {
            alignment: HorizontalAlignment::default(),
            spacing: DEFAULT_SPACING,
        }
    }
}

impl FlowConfig {
    pub fn new(alignment: HorizontalAlignment, spacing: f64) -> Self {
        Self::default().alignment(alignment).spacing(spacing)
    }

    pub fn alignment(mut self, alignment: HorizontalAlignment) -> Self {
        self.alignment = alignment;
        self
    }

    /// Negative and NaN spacing is clamped to zero.
    pub fn spacing(mut self, spacing: f64) -> Self {
        self.spacing = non_negative(spacing);
        self
    }
}
