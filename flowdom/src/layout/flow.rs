use std::ops::Range;

use super::rect::non_negative;
use super::{Rect, Size};
use crate::types::{FlowConfig, HorizontalAlignment};

/// Placement of a sequence of items packed into wrapped rows.
///
/// `frames` is index-aligned with the packed items. `rows` holds the item
/// span of each row, in order, covering every item exactly once.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct PackedLayout {
    pub frames: Vec<Rect>,
    pub size: Size,
    pub rows: Vec<Range<usize>>,
}

impl PackedLayout {
    pub fn is_empty(&self) -> bool {
        self.frames.is_empty()
    }

    pub fn row_count(&self) -> usize {
        self.rows.len()
    }

    /// Frames of the items in row `row`, if it exists.
    pub fn row_frames(&self, row: usize) -> Option<&[Rect]> {
        self.rows.get(row).map(|span| &self.frames[span.clone()])
    }
}

#[derive(Debug)]
struct Row {
    span: Range<usize>,
    width: f64,
    height: f64,
}

impl Row {
    fn start(index: usize, size: Size) -> Self {
        Self {
            span: index..index + 1,
            width: size.width,
            height: size.height,
        }
    }

    fn push(&mut self, size: Size, spacing: f64) {
        self.span.end += 1;
        self.width += spacing + size.width;
        self.height = self.height.max(size.height);
    }
}

pub fn pack_with(items: &[Size], available_width: f64, config: &FlowConfig) -> PackedLayout {
    pack(items, available_width, config.alignment, config.spacing)
}

/// Pack `items` left to right into rows no wider than `available_width`.
///
/// Order is preserved. An item that does not fit on its own still gets a
/// row, so the result can be wider than `available_width`.
pub fn pack(
    items: &[Size],
    available_width: f64,
    alignment: HorizontalAlignment,
    spacing: f64,
) -> PackedLayout {
    if items.is_empty() {
        return PackedLayout::default();
    }

    let available_width = sanitize_scalar("available width", available_width);
    let spacing = sanitize_scalar("spacing", spacing);
    let sizes = sanitize_sizes(items);

    let rows = assign_rows(&sizes, available_width, spacing);

    // Bounding width is the widest row, not the proposal
    let overall_width = rows.iter().map(|row| row.width).fold(0.0, f64::max);

    let mut frames = Vec::with_capacity(sizes.len());
    let mut y = 0.0;

    for (index, row) in rows.iter().enumerate() {
        if index > 0 {
            y += spacing;
        }

        let mut x = alignment.row_origin(overall_width, row.width);
        for size in &sizes[row.span.clone()] {
            frames.push(Rect::new(x, y, size.width, size.height));
            x += size.width + spacing;
        }

        y += row.height;
    }

    log::trace!(
        "flow: packed {} items into {} rows ({}x{})",
        sizes.len(),
        rows.len(),
        overall_width,
        y
    );

    PackedLayout {
        frames,
        size: Size::new(overall_width, y),
        rows: rows.into_iter().map(|row| row.span).collect(),
    }
}

fn assign_rows(sizes: &[Size], available_width: f64, spacing: f64) -> Vec<Row> {
    let mut rows = Vec::new();

    // The first item always opens a row, even when it overflows
    let mut current = Row::start(0, sizes[0]);
    let mut remaining = available_width - (sizes[0].width + spacing);

    for (index, &size) in sizes.iter().enumerate().skip(1) {
        let advance = size.width + spacing;
        if remaining - advance >= 0.0 {
            current.push(size, spacing);
            remaining -= advance;
        } else {
            rows.push(current);
            current = Row::start(index, size);
            remaining = available_width - advance;
        }
    }

    rows.push(current);
    rows
}

fn sanitize_scalar(what: &str, value: f64) -> f64 {
    let clamped = non_negative(value);
    if clamped != value {
        log::warn!("flow: {} {} clamped to {}", what, value, clamped);
    }
    clamped
}

fn sanitize_sizes(items: &[Size]) -> Vec<Size> {
    let mut clamped = 0usize;
    let sizes = items
        .iter()
        .map(|size| {
            if size.is_sane() {
                *size
            } else {
                clamped += 1;
                size.sanitized()
            }
        })
        .collect();

    if clamped > 0 {
        log::warn!("flow: clamped {} item sizes with negative or NaN components", clamped);
    }
    sizes
}
