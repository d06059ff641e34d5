//! Analytics Fixtures
//!
//! Chart series, stat cards and tables for the dashboard. All values are
//! literal inputs; the dashboard never derives them.

/// A labelled, color-mapped series for pie and bar charts
#[derive(Clone, Debug, PartialEq, serde::Serialize)]
pub struct ChartSeries {
    pub labels: Vec<&'static str>,
    pub values: Vec<f64>,
    pub colors: Vec<&'static str>,
}

/// A single line in a multi-series trend chart
#[derive(Clone, Debug, PartialEq, serde::Serialize)]
pub struct TrendSeries {
    pub label: &'static str,
    pub values: Vec<f64>,
    pub color: &'static str,
}

/// Headline numbers shown at the top of the dashboard
#[derive(Clone, Debug, PartialEq)]
pub struct StatCard {
    pub title: &'static str,
    pub value: &'static str,
    pub change: &'static str,
    pub positive: bool,
    pub icon: &'static str,
    pub description: &'static str,
}

/// A row in the recent-logs table
#[derive(Clone, Debug, PartialEq)]
pub struct FoodLog {
    pub id: u32,
    pub name: &'static str,
    pub quantity: &'static str,
    pub date: &'static str,
    pub status: &'static str,
    pub badge_class: &'static str,
}

/// An "AI-generated" waste reduction tip
#[derive(Clone, Debug, PartialEq)]
pub struct WasteTip {
    pub title: &'static str,
    pub description: &'static str,
    pub category: &'static str,
}

/// Average time-to-spoilage bar for one food category
#[derive(Clone, Debug, PartialEq)]
pub struct SpoilageRow {
    pub category: &'static str,
    pub days: u8,
    /// Bar width as a CSS percentage
    pub percent: &'static str,
    pub color_class: &'static str,
}

pub fn waste_by_type() -> ChartSeries {
    ChartSeries {
        labels: vec!["Bread", "Vegetables", "Fruits", "Dairy", "Cooked Meals", "Other"],
        values: vec![15.0, 25.0, 20.0, 10.0, 25.0, 5.0],
        colors: vec![
            "rgba(255, 99, 132, 0.7)",
            "rgba(54, 162, 235, 0.7)",
            "rgba(255, 206, 86, 0.7)",
            "rgba(75, 192, 192, 0.7)",
            "rgba(153, 102, 255, 0.7)",
            "rgba(255, 159, 64, 0.7)",
        ],
    }
}

pub fn spoilage_reasons() -> ChartSeries {
    ChartSeries {
        labels: vec!["Expired", "Over-purchased", "Leftovers", "Poor Storage", "Changed Plans"],
        values: vec![30.0, 25.0, 20.0, 15.0, 10.0],
        colors: vec![
            "rgba(34, 197, 94, 0.7)",
            "rgba(14, 165, 233, 0.7)",
            "rgba(249, 115, 22, 0.7)",
            "rgba(99, 102, 241, 0.7)",
            "rgba(236, 72, 153, 0.7)",
        ],
    }
}

pub fn trend_labels() -> Vec<&'static str> {
    vec!["Mon", "Tue", "Wed", "Thu", "Fri", "Sat", "Sun"]
}

pub fn waste_trend() -> Vec<TrendSeries> {
    vec![
        TrendSeries {
            label: "Food Waste (kg)",
            values: vec![2.3, 1.8, 3.5, 2.7, 1.5, 4.2, 2.1],
            color: "rgba(75, 192, 192, 1)",
        },
        TrendSeries {
            label: "Food Saved (kg)",
            values: vec![0.5, 1.2, 0.8, 1.5, 2.0, 1.0, 2.5],
            color: "rgba(54, 162, 235, 1)",
        },
    ]
}

pub fn stat_cards() -> Vec<StatCard> {
    vec![
        StatCard {
            title: "Total Waste",
            value: "24.5 kg",
            change: "-12%",
            positive: true,
            icon: "📉",
            description: "vs. last month",
        },
        StatCard {
            title: "Food Saved",
            value: "18.2 kg",
            change: "+23%",
            positive: true,
            icon: "📈",
            description: "vs. last month",
        },
        StatCard {
            title: "Spoilage Rate",
            value: "15%",
            change: "-8%",
            positive: true,
            icon: "⚠️",
            description: "vs. last month",
        },
        StatCard {
            title: "NGO Donations",
            value: "12",
            change: "+4",
            positive: true,
            icon: "✅",
            description: "successful pickups",
        },
    ]
}

pub fn recent_logs() -> Vec<FoodLog> {
    vec![
        FoodLog {
            id: 1,
            name: "Vegetable Biryani",
            quantity: "2.5 kg",
            date: "2023-09-15",
            status: "Redistributed",
            badge_class: "bg-green-100 text-green-800",
        },
        FoodLog {
            id: 2,
            name: "Fresh Apples",
            quantity: "1.2 kg",
            date: "2023-09-14",
            status: "Pending",
            badge_class: "bg-yellow-100 text-yellow-800",
        },
        FoodLog {
            id: 3,
            name: "Milk",
            quantity: "1 liter",
            date: "2023-09-13",
            status: "Expired",
            badge_class: "bg-red-100 text-red-800",
        },
    ]
}

pub fn waste_tips() -> Vec<WasteTip> {
    vec![
        WasteTip {
            title: "Store bread in a cloth bag",
            description: "You waste bread 3x/week. Try storing it in a cloth bag in a cool, \
                          dry place to extend freshness.",
            category: "Storage",
        },
        WasteTip {
            title: "Plan meals around leftovers",
            description: "Your cooked meals often go to waste. Try planning your next day's \
                          meals to incorporate leftovers.",
            category: "Planning",
        },
        WasteTip {
            title: "Freeze extra vegetables",
            description: "Vegetables are your most wasted item. Blanch and freeze extras \
                          before they spoil.",
            category: "Preservation",
        },
    ]
}

pub fn spoilage_rows() -> Vec<SpoilageRow> {
    vec![
        SpoilageRow { category: "Bread", days: 4, percent: "40%", color_class: "bg-primary-500" },
        SpoilageRow {
            category: "Vegetables",
            days: 6,
            percent: "60%",
            color_class: "bg-secondary-500",
        },
        SpoilageRow { category: "Dairy", days: 7, percent: "70%", color_class: "bg-accent-500" },
        SpoilageRow { category: "Cooked Meals", days: 3, percent: "30%", color_class: "bg-red-500" },
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_series_shapes_are_consistent() {
        for series in [waste_by_type(), spoilage_reasons()] {
            assert_eq!(series.labels.len(), series.values.len());
            assert_eq!(series.labels.len(), series.colors.len());
        }
    }

    #[test]
    fn test_trend_series_match_weekday_labels() {
        let days = trend_labels().len();
        for series in waste_trend() {
            assert_eq!(series.values.len(), days);
        }
    }
}
