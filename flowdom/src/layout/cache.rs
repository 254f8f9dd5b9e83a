use super::flow::{pack_with, PackedLayout};
use super::{Point, Rect, Size};
use crate::types::FlowConfig;

/// Anything the host can ask for a natural size.
pub trait Measure {
    fn natural_size(&self) -> Size;
}

impl Measure for Size {
    fn natural_size(&self) -> Size {
        *self
    }
}

impl<T: Measure + ?Sized> Measure for &T {
    fn natural_size(&self) -> Size {
        (**self).natural_size()
    }
}

#[derive(Debug, Clone)]
struct CacheEntry {
    proposed_width: f64,
    sizes: Vec<Size>,
    packed: PackedLayout,
}

impl CacheEntry {
    fn matches(&self, proposed_width: f64, sizes: &[Size]) -> bool {
        // Bitwise comparison so a NaN proposal still hits its own entry
        self.proposed_width.to_bits() == proposed_width.to_bits()
            && self.sizes.len() == sizes.len()
            && self.sizes.iter().zip(sizes).all(|(a, b)| {
                a.width.to_bits() == b.width.to_bits() && a.height.to_bits() == b.height.to_bits()
            })
    }
}

/// Flow layout driven by a host's measure and place passes.
///
/// The host measures with [`FlowLayout::size_that_fits`] and later positions
/// items with [`FlowLayout::place`]. Both passes read the same cached packing
/// as long as the proposed width and item sizes are unchanged, so placement
/// always agrees with measurement.
///
/// Placement packs against the proposed width, never against the bounds the
/// host hands back: a row only fits when its trailing spacing fits too, so
/// repacking at the measured width could wrap differently.
#[derive(Debug, Clone, Default)]
pub struct FlowLayout {
    config: FlowConfig,
    cache: Option<CacheEntry>,
}

impl FlowLayout {
    pub fn new(config: FlowConfig) -> Self {
        Self {
            config,
            cache: None,
        }
    }

    pub fn config(&self) -> &FlowConfig {
        &self.config
    }

    pub fn set_config(&mut self, config: FlowConfig) {
        if self.config != config {
            self.config = config;
            self.invalidate();
        }
    }

    pub fn invalidate(&mut self) {
        self.cache = None;
    }

    pub fn is_cached(&self) -> bool {
        self.cache.is_some()
    }

    /// Measurement pass.
    pub fn size_that_fits<M: Measure>(&mut self, proposed_width: f64, items: &[M]) -> Size {
        self.packed(proposed_width, items).size
    }

    /// Placement pass. Frames come back in item order, offset by the origin
    /// of `bounds`.
    pub fn place<M: Measure>(&mut self, bounds: Rect, proposed_width: f64, items: &[M]) -> Vec<Rect> {
        let origin: Point = bounds.origin();
        self.packed(proposed_width, items)
            .frames
            .iter()
            .map(|frame| frame.offset(origin))
            .collect()
    }

    /// The packing for these inputs, computed only when they changed.
    pub fn packed<M: Measure>(&mut self, proposed_width: f64, items: &[M]) -> &PackedLayout {
        let sizes: Vec<Size> = items.iter().map(M::natural_size).collect();

        let entry = match self.cache.take() {
            Some(entry) if entry.matches(proposed_width, &sizes) => {
                log::trace!("flow cache hit (width {})", proposed_width);
                entry
            }
            _ => {
                log::debug!(
                    "flow cache miss (width {}, {} items)",
                    proposed_width,
                    sizes.len()
                );
                let packed = pack_with(&sizes, proposed_width, &self.config);
                CacheEntry {
                    proposed_width,
                    sizes,
                    packed,
                }
            }
        };

        &self.cache.insert(entry).packed
    }
}
