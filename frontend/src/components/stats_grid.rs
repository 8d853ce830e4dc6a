use crate::format::format_currency;
use shared::Summary;
use yew::prelude::*;

#[derive(Properties, PartialEq)]
pub struct StatsGridProps {
    pub summary: Option<Summary>,
    pub currency: String,
}

#[function_component(StatsGrid)]
pub fn stats_grid(props: &StatsGridProps) -> Html {
    let summary = props.summary.as_ref();
    let total = summary
        .map(|s| format_currency(s.total, &props.currency))
        .unwrap_or_else(|| "--".to_string());
    let percent_used = summary
        .map(|s| format!("{}%", s.percent_used))
        .unwrap_or_else(|| "--".to_string());
    let remaining = summary
        .and_then(|s| s.remaining_budget())
        .map(|r| format_currency(r, &props.currency))
        .unwrap_or_else(|| "--".to_string());
    let top_category = summary
        .and_then(|s| s.top_category.clone())
        .unwrap_or_else(|| "N/A".to_string());

    html! {
        <div class="stats-grid">
            <div class="stat-card pink"><h3>{"Total Spent"}</h3><p>{total}</p></div>
            <div class="stat-card blue"><h3>{"Budget Used"}</h3><p>{percent_used}</p></div>
            <div class="stat-card green"><h3>{"Remaining Budget"}</h3><p>{remaining}</p></div>
            <div class="stat-card purple"><h3>{"Top Category"}</h3><p>{top_category}</p></div>
        </div>
    }
}
