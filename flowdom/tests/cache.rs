use std::cell::Cell;

use flowdom::{FlowConfig, FlowLayout, HorizontalAlignment, Measure, Rect, Size};

/// Item that counts how often the layout measures it.
struct Chip {
    size: Size,
    measured: Cell<usize>,
}

impl Chip {
    fn new(width: f64, height: f64) -> Self {
        Self {
            size: Size::new(width, height),
            measured: Cell::new(0),
        }
    }
}

impl Measure for Chip {
    fn natural_size(&self) -> Size {
        self.measured.set(self.measured.get() + 1);
        self.size
    }
}

fn chips() -> Vec<Chip> {
    vec![
        Chip::new(50.0, 30.0),
        Chip::new(70.0, 40.0),
        Chip::new(60.0, 35.0),
        Chip::new(55.0, 45.0),
    ]
}

#[test]
fn test_measure_then_place_agree() {
    let items = chips();
    let mut layout = FlowLayout::new(FlowConfig::new(HorizontalAlignment::Trailing, 8.0));

    let size = layout.size_that_fits(200.0, &items);
    assert_eq!(size, Size::new(128.0, 93.0));

    let frames = layout.place(Rect::from_size(size), 200.0, &items);
    assert_eq!(frames.len(), 4);
    assert_eq!(frames[2].x, 5.0);
    assert_eq!(frames[3].x, 73.0);
}

#[test]
fn test_place_offsets_by_bounds_origin() {
    let items = chips();
    let mut layout = FlowLayout::new(FlowConfig::new(HorizontalAlignment::Leading, 8.0));

    let frames = layout.place(Rect::new(10.0, 20.0, 128.0, 93.0), 200.0, &items);

    assert_eq!(frames[0], Rect::new(10.0, 20.0, 50.0, 30.0));
    assert_eq!(frames[3], Rect::new(78.0, 68.0, 55.0, 45.0));
}

#[test]
fn test_place_uses_proposed_width_not_bounds() {
    let items = chips();
    let mut layout = FlowLayout::new(FlowConfig::new(HorizontalAlignment::Leading, 8.0));

    let size = layout.size_that_fits(200.0, &items);
    // Repacking at 128 would wrap the first row (128 + trailing 8 > 128)
    let frames = layout.place(Rect::from_size(size), 200.0, &items);

    assert_eq!(frames[1].y, 0.0);
}

#[test]
fn test_cache_reused_between_passes() {
    let items = chips();
    let mut layout = FlowLayout::default();

    assert!(!layout.is_cached());
    let first = layout.packed(200.0, &items).clone();
    assert!(layout.is_cached());

    let second = layout.packed(200.0, &items).clone();
    assert_eq!(first, second);

    // Each pass measures every item once to compare against the cache key
    assert!(items.iter().all(|chip| chip.measured.get() == 2));
}

#[test]
fn test_cache_refreshed_on_width_change() {
    let items = chips();
    let mut layout = FlowLayout::new(FlowConfig::new(HorizontalAlignment::Leading, 8.0));

    assert_eq!(layout.packed(200.0, &items).row_count(), 2);
    assert_eq!(layout.packed(1000.0, &items).row_count(), 1);
}

#[test]
fn test_cache_refreshed_on_size_change() {
    let mut items = vec![Size::new(50.0, 10.0), Size::new(50.0, 10.0)];
    let mut layout = FlowLayout::new(FlowConfig::new(HorizontalAlignment::Leading, 0.0));

    assert_eq!(layout.packed(100.0, &items).row_count(), 1);

    items[1].width = 60.0;
    assert_eq!(layout.packed(100.0, &items).row_count(), 2);
}

#[test]
fn test_set_config_invalidates() {
    let items = chips();
    let mut layout = FlowLayout::new(FlowConfig::new(HorizontalAlignment::Leading, 8.0));

    layout.size_that_fits(200.0, &items);
    layout.set_config(FlowConfig::new(HorizontalAlignment::Leading, 8.0));
    assert!(layout.is_cached(), "same config keeps the cache");

    layout.set_config(FlowConfig::new(HorizontalAlignment::Trailing, 8.0));
    assert!(!layout.is_cached());

    let frames = layout.place(Rect::default(), 200.0, &items);
    assert_eq!(frames[2].x, 5.0);
}

#[test]
fn test_measure_through_references() {
    let items = chips();
    let refs: Vec<&Chip> = items.iter().collect();
    let mut layout = FlowLayout::default();

    assert_eq!(layout.size_that_fits(f64::INFINITY, &refs).height, 45.0);
}
