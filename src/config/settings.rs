/// Starting rating assumed when the ledger records none.
pub const DEFAULT_RATING: f64 = 1000.0;

pub struct RatingSettings {
    pub default_rating: f64,
}

impl Default for RatingSettings {
    fn default() -> Self {
        Self {
            default_rating: DEFAULT_RATING,
        }
    }
}

pub struct ChartSettings {
    pub width: u32,
    pub height: u32,
    pub legend_width: u32,
    pub marker_size: u32,
    pub line_width: u32,
    pub title: &'static str,
    pub x_label: &'static str,
    pub y_label: &'static str,
}

impl Default for ChartSettings {
    fn default() -> Self {
        Self {
            width: 1500,
            height: 800,
            legend_width: 260,
            marker_size: 3,
            line_width: 2,
            title: "Player ELO Rating Over Global Game Sequence",
            x_label: "Global Game Sequence Number",
            y_label: "ELO Rating",
        }
    }
}

pub struct AppConfig {
    pub rating: RatingSettings,
    pub chart: ChartSettings,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self::new()
    }
}

impl AppConfig {
    pub fn new() -> Self {
        Self {
            rating: RatingSettings::default(),
            chart: ChartSettings::default(),
        }
    }
}
