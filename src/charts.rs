//! Chart variant registry.
//!
//! Charts are the one slide ingredient that cannot travel through the JSON
//! wire format: the renderable lives in the viewer script, not in the data.
//! Each variant therefore has a stable symbolic name that is written out on
//! export and resolved back on import. Unknown names resolve to "no chart"
//! rather than an error, so a file exported by a newer build still loads.

/// The fixed set of chart variants the viewer knows how to draw.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ChartKind {
    PlatformGrowth,
    TimeSpent,
    MentalHealth,
    GlobalUsage,
    CreatorEconomy,
}

/// All registered variants, in registration order.
pub const CHART_VARIANTS: [ChartKind; 5] = [
    ChartKind::PlatformGrowth,
    ChartKind::TimeSpent,
    ChartKind::MentalHealth,
    ChartKind::GlobalUsage,
    ChartKind::CreatorEconomy,
];

impl ChartKind {
    /// Symbolic name used in the export wire format (`chartName`).
    pub fn name(self) -> &'static str {
        match self {
            ChartKind::PlatformGrowth => "PlatformGrowthChart",
            ChartKind::TimeSpent => "TimeSpentChart",
            ChartKind::MentalHealth => "MentalHealthChart",
            ChartKind::GlobalUsage => "GlobalUsageChart",
            ChartKind::CreatorEconomy => "CreatorEconomyChart",
        }
    }

    /// Resolve a symbolic name back into a live variant.
    pub fn from_name(name: &str) -> Option<ChartKind> {
        CHART_VARIANTS.iter().copied().find(|c| c.name() == name)
    }

    /// Human-readable chart heading, shown above the drawing.
    pub fn title(self) -> &'static str {
        match self {
            ChartKind::PlatformGrowth => "Peak Active Users (in Millions)",
            ChartKind::TimeSpent => "Average Daily Time Spent by Users",
            ChartKind::MentalHealth => "Perceived Impact on Mental Health",
            ChartKind::GlobalUsage => "Global Social Media Users",
            ChartKind::CreatorEconomy => "Creator Economy Market Size (Projected)",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn names_round_trip() {
        for kind in CHART_VARIANTS {
            assert_eq!(ChartKind::from_name(kind.name()), Some(kind));
        }
    }

    #[test]
    fn unknown_name_is_no_chart() {
        assert_eq!(ChartKind::from_name("SparklineChart"), None);
        assert_eq!(ChartKind::from_name(""), None);
    }
}
