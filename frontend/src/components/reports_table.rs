use crate::format::format_currency;
use shared::MonthlyDiff;
use yew::prelude::*;

#[derive(Properties, PartialEq)]
pub struct ReportsTableProps {
    pub diffs: Vec<MonthlyDiff>,
    pub currency: String,
}

/// Month-over-month category comparison table.
#[function_component(ReportsTable)]
pub fn reports_table(props: &ReportsTableProps) -> Html {
    if props.diffs.is_empty() {
        return html! { <p>{"No data available for comparison."}</p> };
    }

    html! {
        <table class="comparison-table">
            <thead>
                <tr>
                    <th>{"Category"}</th>
                    <th>{"This Month"}</th>
                    <th>{"Last Month"}</th>
                    <th>{"Difference"}</th>
                </tr>
            </thead>
            <tbody>
                {for props.diffs.iter().map(|row| {
                    let direction = if row.diff > 0.0 {
                        "↑"
                    } else if row.diff < 0.0 {
                        "↓"
                    } else {
                        "-"
                    };
                    let diff_class = if row.diff > 0.0 { "diff-up" } else { "diff-down" };
                    html! {
                        <tr>
                            <td>{&row.category}</td>
                            <td>{format_currency(row.current, &props.currency)}</td>
                            <td>{format_currency(row.previous, &props.currency)}</td>
                            <td class={diff_class}>
                                {format!("{} {}", direction, format_currency(row.diff.abs(), &props.currency))}
                            </td>
                        </tr>
                    }
                })}
            </tbody>
        </table>
    }
}
