pub mod layout;
pub mod types;

pub use layout::{pack, pack_with, FlowLayout, Measure, PackedLayout, Point, Rect, Size};
pub use types::*;
