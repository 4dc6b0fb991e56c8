//! Data label settings (`c:dLbls`)

/// Which parts of a data point label are shown
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct DataLabels {
    pub show_value: bool,
    pub show_category_name: bool,
    pub show_series_name: bool,
    pub show_percent: bool,
    pub show_legend_key: bool,
}

impl DataLabels {
    /// Labels with every part hidden
    pub fn hidden() -> Self {
        Self::default()
    }

    /// Labels showing only the value
    pub fn values() -> Self {
        Self {
            show_value: true,
            ..Self::default()
        }
    }
}
