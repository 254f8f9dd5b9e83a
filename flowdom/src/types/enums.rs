/// Where a row sits inside the packed bounding width.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum HorizontalAlignment {
    Leading,
    #[default]
    Center,
    Trailing,
}

impl HorizontalAlignment {
    /// X origin of a row of `row_width` inside `overall_width`.
    ///
    /// An infinitely wide item makes the bounding width infinite; rows then
    /// start at 0 rather than at a NaN or infinite offset.
    pub fn row_origin(self, overall_width: f64, row_width: f64) -> f64 {
        let origin = match self {
            HorizontalAlignment::Leading => 0.0,
            HorizontalAlignment::Center => (overall_width - row_width) / 2.0,
            HorizontalAlignment::Trailing => overall_width - row_width,
        };
        if origin.is_finite() {
            origin
        } else {
            0.0
        }
    }
}
