//! Fixed page copy: feature cards, model panels, steps and the sample table.
//!
//! Everything here is `&'static` and rendered as given. Sales figures are
//! display strings copied from the published dataset; nothing parses them.

use crate::accent::Accent;
use crate::icons::{
    ICON_CALENDAR, ICON_CHART_BAR, ICON_CLOCK, ICON_DOWNLOAD_SIMPLE, ICON_LIGHTNING, ICON_SLIDERS,
    ICON_TARGET, ICON_TREND_UP, ICON_UPLOAD_SIMPLE,
};

/// Product name shown in the hero and the document title.
pub const PRODUCT_NAME: &str = "R-Studio Replica";

/// Number of monthly records in the complete downloadable dataset.
pub const DATASET_RECORDS: usize = 276;

/// Marker used by the elision row between the first and last sample months.
pub const ELISION: &str = "...";

/// One card of the "What This Tool Does" grid.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Feature {
    pub icon: &'static str,
    pub title: &'static str,
    pub description: &'static str,
}

/// One side of the ARIMA / Prophet comparison.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ModelPanel {
    pub name: &'static str,
    pub icon: &'static str,
    pub tagline: &'static str,
    /// Glyph repeated in front of every point.
    pub bullet_icon: &'static str,
    pub points: [&'static str; 3],
    pub accent: Accent,
}

/// One numbered step of "How It Works".
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Step {
    pub icon: &'static str,
    pub title: &'static str,
    pub description: &'static str,
    pub accent: Accent,
}

/// A row of the illustrative vehicle sales table.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SampleRow {
    pub year: &'static str,
    pub month: &'static str,
    pub new_sales: &'static str,
    pub used_sales: &'static str,
}

impl SampleRow {
    /// The "..." row standing in for the months not shown.
    pub fn is_elided(&self) -> bool {
        self.year == ELISION
    }
}

pub const FEATURES: [Feature; 4] = [
    Feature {
        icon: ICON_CHART_BAR,
        title: "Accurate Time-Series Forecasts",
        description: "Generate precise predictions using state-of-the-art ARIMA & Prophet algorithms with automated parameter optimization",
    },
    Feature {
        icon: ICON_TARGET,
        title: "Auto-Model Selection",
        description: "Intelligent model selection based on AIC, RMSE, and cross-validation metrics to ensure optimal forecasting performance",
    },
    Feature {
        icon: ICON_CALENDAR,
        title: "Advanced Pattern Recognition",
        description: "Automatically handles complex trends, seasonal patterns, holidays, and promotional impacts in your data",
    },
    Feature {
        icon: ICON_DOWNLOAD_SIMPLE,
        title: "Complete Output Package",
        description: "Get interactive forecast graphs, detailed error metrics, confidence intervals, and downloadable CSV results",
    },
];

pub const MODEL_PANELS: [ModelPanel; 2] = [
    ModelPanel {
        name: "ARIMA Model",
        icon: ICON_CLOCK,
        tagline: "Best for short-term, stationary trends",
        bullet_icon: ICON_LIGHTNING,
        points: [
            "Excellent for linear trend analysis and short-term predictions",
            "Fast computation with minimal data preprocessing requirements",
            "Ideal for stationary time series with consistent patterns",
        ],
        accent: Accent::Blue,
    },
    ModelPanel {
        name: "Prophet Model",
        icon: ICON_CALENDAR,
        tagline: "Handles seasonal, holiday-impacted long-term trends",
        bullet_icon: ICON_TREND_UP,
        points: [
            "Advanced seasonality detection with holiday effect modeling",
            "Robust handling of missing data and outliers",
            "Perfect for long-term forecasts with complex patterns",
        ],
        accent: Accent::Teal,
    },
];

pub const STEPS: [Step; 3] = [
    Step {
        icon: ICON_UPLOAD_SIMPLE,
        title: "Upload Historical Data",
        description: "Import your time-series data in CSV format with date and value columns. Our system automatically validates and preprocesses your data.",
        accent: Accent::Blue,
    },
    Step {
        icon: ICON_SLIDERS,
        title: "Configure Parameters",
        description: "Choose your forecast period, select additional variables, and let our AI determine the optimal model settings for your specific dataset.",
        accent: Accent::Teal,
    },
    Step {
        icon: ICON_CHART_BAR,
        title: "Get Results",
        description: "Receive comprehensive forecast graphs, accuracy metrics, confidence intervals, and downloadable results ready for presentation.",
        accent: Accent::Purple,
    },
];

/// Sample table column headings, each with its accent.
pub const SAMPLE_COLUMNS: [(&str, Accent); 4] = [
    ("Year", Accent::Blue),
    ("Month", Accent::Teal),
    ("New Sales", Accent::Purple),
    ("Used Sales", Accent::Orange),
];

pub const SAMPLE_ROWS: [SampleRow; 6] = [
    SampleRow { year: "2002", month: "JAN", new_sales: "31,106", used_sales: "49,927" },
    SampleRow { year: "2002", month: "FEB", new_sales: "27,520", used_sales: "50,982" },
    SampleRow { year: "2002", month: "MAR", new_sales: "34,225", used_sales: "58,794" },
    SampleRow { year: ELISION, month: ELISION, new_sales: ELISION, used_sales: ELISION },
    SampleRow { year: "2024", month: "SEP", new_sales: "23,738", used_sales: "45,657" },
    SampleRow { year: "2024", month: "OCT", new_sales: "24,190", used_sales: "47,760" },
];
