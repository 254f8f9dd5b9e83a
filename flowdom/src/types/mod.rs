mod config;
mod enums;

pub use config::{FlowConfig, DEFAULT_SPACING};
pub use enums::HorizontalAlignment;
