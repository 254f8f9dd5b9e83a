mod cache;
mod flow;
pub(crate) mod rect;

pub use cache::{FlowLayout, Measure};
pub use flow::{pack, pack_with, PackedLayout};
pub use rect::{Point, Rect, Size};
