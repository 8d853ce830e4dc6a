//! Derived chart data: pure transformation from fetched JSON into
//! chart-ready series. No aggregation happens here; the backend owns
//! the numbers, this module only shapes and colors them.

use shared::{CategoryReport, MonthComparison, TrendPoint};

/// Fixed 12-color palette; categories map into it by name hash so the
/// same category keeps the same color across renders and reloads.
pub const PALETTE: [&str; 12] = [
    "#60a5fa", "#a78bfa", "#34d399", "#f59e0b", "#ef4444", "#06b6d4", "#f472b6", "#22c55e",
    "#eab308", "#f97316", "#8b5cf6", "#0ea5e9",
];

const PIE_BORDER: &str = "#0f172a";
const LINE_COLOR: &str = "#58a6ff";
const COMPARE_LAST: &str = "#a78bfa";
const COMPARE_THIS: &str = "#60a5fa";

/// Polynomial string hash over UTF-16 code units (`acc * 31 + c`,
/// wrapping u32), matching the palette index assignment users already
/// have colors under.
pub fn hash_category(name: &str) -> u32 {
    name.encode_utf16()
        .fold(0u32, |acc, c| acc.wrapping_mul(31).wrapping_add(u32::from(c)))
}

/// Deterministic palette color for a category name.
pub fn color_for(category: &str) -> &'static str {
    PALETTE[(hash_category(category) % PALETTE.len() as u32) as usize]
}

/// Reformats a `#rrggbb` triplet as an `rgba(...)` string at the given
/// opacity. Inputs that are not hex triplets pass through unchanged.
pub fn with_alpha(hex: &str, alpha: f64) -> String {
    let n = hex.trim_start_matches('#');
    if n.len() != 6 {
        return hex.to_string();
    }
    let parse = |range: std::ops::Range<usize>| u8::from_str_radix(&n[range], 16);
    match (parse(0..2), parse(2..4), parse(4..6)) {
        (Ok(r), Ok(g), Ok(b)) => format!("rgba({}, {}, {}, {})", r, g, b, alpha),
        _ => hex.to_string(),
    }
}

/// One chart-ready dataset: parallel labels/values/colors.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Dataset {
    pub label: String,
    pub labels: Vec<String>,
    pub values: Vec<f64>,
    pub fill_colors: Vec<String>,
    pub border_colors: Vec<String>,
}

/// The four datasets the dashboard charts render from.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct ChartBundle {
    pub pie: Dataset,
    pub bar: Dataset,
    pub line: Dataset,
    pub month_compare: Dataset,
}

/// Builds all chart datasets from the fetched month data. Pure: same
/// inputs always produce the same datasets, colors included.
pub fn build_chart_data(
    report: &CategoryReport,
    trend: &[TrendPoint],
    comparison: &MonthComparison,
) -> ChartBundle {
    let categories: Vec<String> = report.keys().cloned().collect();
    let values: Vec<f64> = report.values().copied().collect();
    let colors: Vec<String> = categories.iter().map(|c| color_for(c).to_string()).collect();
    let colors_alpha: Vec<String> = colors.iter().map(|c| with_alpha(c, 0.7)).collect();

    let pie = Dataset {
        label: "Expenses by Category".to_string(),
        labels: categories.clone(),
        values: values.clone(),
        fill_colors: colors.clone(),
        border_colors: vec![PIE_BORDER.to_string(); categories.len()],
    };

    let bar = Dataset {
        label: "Spending by Category".to_string(),
        labels: categories,
        values,
        fill_colors: colors_alpha,
        border_colors: colors,
    };

    let line = Dataset {
        label: "Daily Spending".to_string(),
        labels: trend.iter().map(|t| t.date.clone()).collect(),
        values: trend.iter().map(|t| t.amount).collect(),
        fill_colors: Vec::new(),
        border_colors: vec![LINE_COLOR.to_string()],
    };

    let month_compare = Dataset {
        label: "Monthly Spend".to_string(),
        labels: vec!["Last Month".to_string(), "This Month".to_string()],
        values: vec![comparison.last_month, comparison.this_month],
        fill_colors: vec![with_alpha(COMPARE_LAST, 0.7), with_alpha(COMPARE_THIS, 0.7)],
        border_colors: vec![COMPARE_LAST.to_string(), COMPARE_THIS.to_string()],
    };

    ChartBundle {
        pie,
        bar,
        line,
        month_compare,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use shared::CategoryReport;

    #[test]
    fn category_colors_are_deterministic() {
        for name in ["Food", "Transport", "Groceries", "Entertainment", "日用品"] {
            let first = color_for(name);
            for _ in 0..10 {
                assert_eq!(color_for(name), first);
            }
            assert!(PALETTE.contains(&first));
        }
    }

    #[test]
    fn with_alpha_formats_rgba() {
        assert_eq!(with_alpha("#60a5fa", 0.7), "rgba(96, 165, 250, 0.7)");
        assert_eq!(with_alpha("#000000", 1.0), "rgba(0, 0, 0, 1)");
        // Not a hex triplet: pass through untouched
        assert_eq!(with_alpha("tomato", 0.7), "tomato");
    }

    #[test]
    fn pie_dataset_keeps_report_order_and_colors() {
        let mut report = CategoryReport::new();
        report.insert("Food".to_string(), 500.0);
        report.insert("Transport".to_string(), 200.0);

        let bundle = build_chart_data(&report, &[], &Default::default());
        assert_eq!(bundle.pie.labels, vec!["Food", "Transport"]);
        assert_eq!(bundle.pie.values, vec![500.0, 200.0]);
        assert_eq!(bundle.pie.fill_colors[0], color_for("Food"));
        assert_eq!(bundle.pie.fill_colors[1], color_for("Transport"));

        // Rebuilding yields the identical datasets
        let again = build_chart_data(&report, &[], &Default::default());
        assert_eq!(bundle, again);
    }

    #[test]
    fn bar_dataset_applies_alpha_fill_over_solid_border() {
        let mut report = CategoryReport::new();
        report.insert("Bills".to_string(), 120.0);

        let bundle = build_chart_data(&report, &[], &Default::default());
        assert_eq!(bundle.bar.border_colors[0], color_for("Bills"));
        assert_eq!(bundle.bar.fill_colors[0], with_alpha(color_for("Bills"), 0.7));
    }

    #[test]
    fn month_compare_orders_last_then_this() {
        let comparison = MonthComparison {
            this_month: 900.0,
            last_month: 600.0,
            difference: 300.0,
        };
        let bundle = build_chart_data(&CategoryReport::new(), &[], &comparison);
        assert_eq!(bundle.month_compare.labels, vec!["Last Month", "This Month"]);
        assert_eq!(bundle.month_compare.values, vec![600.0, 900.0]);
    }

    #[test]
    fn line_dataset_follows_trend_points() {
        let trend = vec![
            TrendPoint {
                date: "2026-08-01".to_string(),
                amount: 40.0,
            },
            TrendPoint {
                date: "2026-08-02".to_string(),
                amount: 0.0,
            },
        ];
        let bundle = build_chart_data(&CategoryReport::new(), &trend, &Default::default());
        assert_eq!(bundle.line.labels, vec!["2026-08-01", "2026-08-02"]);
        assert_eq!(bundle.line.values, vec![40.0, 0.0]);
    }
}
