use crate::format::month_name;
use chrono::{Datelike, Local};
use web_sys::HtmlSelectElement;
use yew::prelude::*;

#[derive(Properties, PartialEq)]
pub struct MonthPickerProps {
    pub selected_year: String,
    /// Two-digit month string
    pub selected_month: String,
    pub on_year_change: Callback<String>,
    pub on_month_change: Callback<String>,
}

/// Year and month selects driving the `YYYY-MM` filter. Years span the
/// current year ± 10.
#[function_component(MonthPicker)]
pub fn month_picker(props: &MonthPickerProps) -> Html {
    let current_year = Local::now().year();
    let years: Vec<String> = (current_year - 10..=current_year + 10)
        .map(|y| y.to_string())
        .collect();

    let on_year = {
        let on_year_change = props.on_year_change.clone();
        Callback::from(move |e: Event| {
            let select: HtmlSelectElement = e.target_unchecked_into();
            on_year_change.emit(select.value());
        })
    };
    let on_month = {
        let on_month_change = props.on_month_change.clone();
        Callback::from(move |e: Event| {
            let select: HtmlSelectElement = e.target_unchecked_into();
            on_month_change.emit(select.value());
        })
    };

    html! {
        <>
            <select class="budget-year-select" value={props.selected_year.clone()} onchange={on_year}>
                {for years.iter().map(|y| {
                    html! { <option value={y.clone()} selected={*y == props.selected_year}>{y}</option> }
                })}
            </select>
            <select class="budget-month-select" value={props.selected_month.clone()} onchange={on_month}>
                {for (1..=12u32).map(|m| {
                    let value = format!("{:02}", m);
                    html! {
                        <option value={value.clone()} selected={value == props.selected_month}>
                            {month_name(m)}
                        </option>
                    }
                })}
            </select>
        </>
    }
}
