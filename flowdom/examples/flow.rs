use std::fs::File;

use flowdom::{FlowConfig, FlowLayout, HorizontalAlignment, Rect, Size};
use simplelog::{Config, LevelFilter, WriteLogger};

fn main() -> std::io::Result<()> {
    // Set up file logging
    let log_file = File::create("flow.log")?;
    WriteLogger::init(LevelFilter::Trace, Config::default(), log_file)
        .expect("Failed to initialize logger");

    // Tag chips of varying width
    let chips: Vec<Size> = ["rust", "layout", "flow", "wrapping", "ui", "async", "buttons"]
        .iter()
        .map(|label| Size::new(label.len() as f64 * 9.0 + 16.0, 28.0))
        .collect();

    for alignment in [
        HorizontalAlignment::Leading,
        HorizontalAlignment::Center,
        HorizontalAlignment::Trailing,
    ] {
        let mut layout = FlowLayout::new(FlowConfig::default().alignment(alignment));

        let size = layout.size_that_fits(200.0, &chips);
        let frames = layout.place(Rect::new(10.0, 10.0, size.width, size.height), 200.0, &chips);

        println!("{:?}: {}x{}", alignment, size.width, size.height);
        for (chip, frame) in chips.iter().zip(&frames) {
            println!(
                "  {:>5} wide at ({:>5}, {:>5})",
                chip.width, frame.x, frame.y
            );
        }
    }

    Ok(())
}
