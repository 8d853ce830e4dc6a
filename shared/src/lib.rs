use chrono::{Datelike, Local};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// A single logged expense as returned by the backend.
///
/// The client never owns this data: the in-memory list is replaced
/// wholesale after every mutation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Expense {
    pub id: i64,
    /// ISO 8601 date (YYYY-MM-DD)
    pub date: String,
    pub description: String,
    pub category: String,
    pub amount: f64,
    /// Backend-flagged statistical outlier; opaque to the client
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub is_anomaly: Option<bool>,
}

/// Request body for creating or updating an expense.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ExpensePayload {
    pub date: String,
    pub description: String,
    pub category: String,
    pub amount: f64,
}

/// A monthly budget, keyed by its `YYYY-MM` month string.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Budget {
    /// Month key in `YYYY-MM` form, unique per user
    pub month: String,
    pub amount: f64,
}

/// One point of the server-computed daily spending trend.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TrendPoint {
    /// ISO 8601 date (YYYY-MM-DD)
    pub date: String,
    pub amount: f64,
}

/// This-month-vs-last-month totals, computed server-side.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
pub struct MonthComparison {
    #[serde(default)]
    pub this_month: f64,
    #[serde(default)]
    pub last_month: f64,
    #[serde(default)]
    pub difference: f64,
}

/// Server-derived aggregate for the selected month. Read-only and
/// disposable: the client recomputes nothing from it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Summary {
    pub total: f64,
    #[serde(default)]
    pub percent_used: f64,
    /// Absent when no budget is set for the month
    #[serde(default)]
    pub budget: Option<f64>,
    #[serde(default)]
    pub top_category: Option<String>,
    #[serde(default)]
    pub daily_trend: Vec<TrendPoint>,
    #[serde(default)]
    pub month_comparison: MonthComparison,
}

impl Summary {
    /// Budget minus total, or `None` when no budget is set.
    pub fn remaining_budget(&self) -> Option<f64> {
        self.budget.map(|b| b - self.total)
    }
}

/// Category name -> aggregate amount for the selected month.
///
/// A `BTreeMap` keeps category iteration order deterministic across
/// renders without any client-side sorting step.
pub type CategoryReport = BTreeMap<String, f64>;

/// A server-computed spending insight, passed through to display
/// components unmodified.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Insight {
    /// Insight classification (e.g. "increase", "concentration")
    #[serde(rename = "type", default)]
    pub kind: Option<String>,
    pub text: String,
    #[serde(default)]
    pub icon: Option<String>,
}

/// Day count that the backend reports either as a number or as a
/// capped label such as `">30"`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum DaysLeft {
    Days(i64),
    Label(String),
}

impl std::fmt::Display for DaysLeft {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            DaysLeft::Days(d) => write!(f, "{}", d),
            DaysLeft::Label(s) => write!(f, "{}", s),
        }
    }
}

/// Budget burn prediction from `GET /budget/risk`.
///
/// When no budget is set the backend answers with only `status` and
/// `message`, so everything else is optional.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BudgetRisk {
    #[serde(default)]
    pub projected_overrun: bool,
    #[serde(default)]
    pub days_to_exhaustion: Option<DaysLeft>,
    #[serde(default)]
    pub warning_level: Option<String>,
    #[serde(default)]
    pub projected_total_spend: Option<f64>,
    #[serde(default)]
    pub budget_limit: Option<f64>,
    #[serde(default)]
    pub status: Option<String>,
    #[serde(default)]
    pub message: Option<String>,
}

/// One row of the month-over-month category comparison.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MonthlyDiff {
    pub category: String,
    pub current: f64,
    pub previous: f64,
    pub diff: f64,
}

/// An expense the backend flagged as statistically unusual.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Anomaly {
    pub id: i64,
    #[serde(default)]
    pub date: Option<String>,
    pub description: String,
    pub category: String,
    pub amount: f64,
}

/// Backend-computed spending personality label.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SpendingProfile {
    pub profile: String,
    pub description: String,
    #[serde(default)]
    pub icon: Option<String>,
}

/// Personality block of the wrapped story payload.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WrappedPersonality {
    pub label: String,
    pub description: String,
}

/// Risk block of the wrapped story payload.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WrappedRisk {
    pub days_left: DaysLeft,
    pub buffer: f64,
    #[serde(default)]
    pub status: String,
}

/// The one shared payload every Money Wrapped screen renders from,
/// fetched once from `GET /wrapped`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WrappedStory {
    /// Human-readable period, e.g. "November 2026"
    pub period: String,
    pub total_spent: f64,
    pub patterns: Vec<String>,
    pub personality: WrappedPersonality,
    pub risk: WrappedRisk,
    pub recommendation: String,
}

/// User preferences persisted via `PUT /user/preferences`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct UserPreferences {
    pub reminder_enabled: bool,
    /// Reminder time in `HH:MM` (24h)
    pub reminder_time: String,
}

impl Default for UserPreferences {
    fn default() -> Self {
        Self {
            reminder_enabled: false,
            reminder_time: "20:00".to_string(),
        }
    }
}

/// Builds a `YYYY-MM` month key from year and month strings, padding
/// the month to two digits. A month that does not parse as a number is
/// passed through untouched.
pub fn month_key(year: &str, month: &str) -> String {
    match month.trim().parse::<u32>() {
        Ok(m) => format!("{}-{:02}", year, m),
        Err(_) => format!("{}-{}", year, month),
    }
}

/// Current local year and 1-based month as strings, ready to feed
/// [`month_key`]. Defines "this month" for the default filter and for
/// resets after cancelling a budget edit.
pub fn current_year_month() -> (String, String) {
    let now = Local::now();
    (now.year().to_string(), now.month().to_string())
}

/// Splits a `YYYY-MM` month key back into its year and month parts.
pub fn split_month_key(key: &str) -> Option<(&str, &str)> {
    let (year, month) = key.split_once('-')?;
    if year.is_empty() || month.is_empty() {
        return None;
    }
    Some((year, month))
}

/// Validation errors for the expense entry form.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum ExpenseFormError {
    EmptyDate,
    EmptyDescription,
    EmptyAmount,
    InvalidAmount(String),
}

/// Validates raw expense form input and returns the parsed amount.
///
/// The submit callback must not run when any of date, description, or
/// amount is empty, so all three are checked before parsing.
pub fn validate_expense_input(
    date: &str,
    description: &str,
    amount_input: &str,
) -> Result<f64, ExpenseFormError> {
    if date.trim().is_empty() {
        return Err(ExpenseFormError::EmptyDate);
    }
    if description.trim().is_empty() {
        return Err(ExpenseFormError::EmptyDescription);
    }
    let amount_input = amount_input.trim();
    if amount_input.is_empty() {
        return Err(ExpenseFormError::EmptyAmount);
    }
    amount_input
        .parse::<f64>()
        .map_err(|_| ExpenseFormError::InvalidAmount(amount_input.to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn month_key_pads_single_digit_months() {
        for m in 1..=9u32 {
            assert_eq!(month_key("2026", &m.to_string()), format!("2026-0{}", m));
        }
        assert_eq!(month_key("2026", "10"), "2026-10");
        assert_eq!(month_key("2026", "12"), "2026-12");
    }

    #[test]
    fn month_key_keeps_already_padded_months() {
        assert_eq!(month_key("2025", "03"), "2025-03");
    }

    #[test]
    fn current_year_month_feeds_month_key() {
        let (year, month) = current_year_month();
        assert_eq!(year.len(), 4);
        let m: u32 = month.parse().unwrap();
        assert!((1..=12).contains(&m));

        let key = month_key(&year, &month);
        let (y, m) = split_month_key(&key).unwrap();
        assert_eq!(y, year);
        assert_eq!(m.len(), 2);
    }

    #[test]
    fn split_month_key_round_trips() {
        let key = month_key("2026", "7");
        let (y, m) = split_month_key(&key).unwrap();
        assert_eq!((y, m), ("2026", "07"));
        assert!(split_month_key("2026").is_none());
    }

    #[test]
    fn expense_validation_rejects_empty_fields() {
        assert_eq!(
            validate_expense_input("", "Lunch", "12.50"),
            Err(ExpenseFormError::EmptyDate)
        );
        assert_eq!(
            validate_expense_input("2026-08-30", "  ", "12.50"),
            Err(ExpenseFormError::EmptyDescription)
        );
        assert_eq!(
            validate_expense_input("2026-08-30", "Lunch", ""),
            Err(ExpenseFormError::EmptyAmount)
        );
    }

    #[test]
    fn expense_validation_parses_amount() {
        assert_eq!(
            validate_expense_input("2026-08-30", "Lunch", " 12.50 "),
            Ok(12.5)
        );
        assert!(matches!(
            validate_expense_input("2026-08-30", "Lunch", "abc"),
            Err(ExpenseFormError::InvalidAmount(_))
        ));
    }

    #[test]
    fn budget_risk_parses_no_budget_answer() {
        let risk: BudgetRisk = serde_json::from_str(
            r#"{"status":"no_budget","message":"No budget set for this month."}"#,
        )
        .unwrap();
        assert!(!risk.projected_overrun);
        assert_eq!(risk.status.as_deref(), Some("no_budget"));
    }

    #[test]
    fn days_left_parses_numbers_and_labels() {
        let d: DaysLeft = serde_json::from_str("12").unwrap();
        assert_eq!(d.to_string(), "12");
        let d: DaysLeft = serde_json::from_str(r#"">30""#).unwrap();
        assert_eq!(d.to_string(), ">30");
    }

    #[test]
    fn summary_reports_remaining_budget_only_when_set() {
        let summary: Summary = serde_json::from_str(
            r#"{"total":700.0,"percent_used":70.0,"budget":1000.0,"top_category":"Food"}"#,
        )
        .unwrap();
        assert_eq!(summary.remaining_budget(), Some(300.0));

        let summary: Summary = serde_json::from_str(r#"{"total":700.0}"#).unwrap();
        assert_eq!(summary.remaining_budget(), None);
    }
}
