use crate::components::MonthPicker;
use crate::format::{format_currency, month_year_label};
use shared::Budget;
use web_sys::HtmlInputElement;
use yew::prelude::*;

#[derive(Properties, PartialEq)]
pub struct BudgetPanelProps {
    pub budgets: Vec<Budget>,
    pub editing_month: Option<String>,
    pub budget_input: String,
    pub selected_year: String,
    pub selected_month: String,
    pub currency: String,
    pub on_year_change: Callback<String>,
    pub on_month_change: Callback<String>,
    pub on_input_change: Callback<String>,
    pub on_save: Callback<()>,
    pub on_cancel_edit: Callback<()>,
    pub on_edit: Callback<Budget>,
    pub on_delete: Callback<String>,
}

#[function_component(BudgetPanel)]
pub fn budget_panel(props: &BudgetPanelProps) -> Html {
    let on_input = {
        let on_input_change = props.on_input_change.clone();
        Callback::from(move |e: Event| {
            let input: HtmlInputElement = e.target_unchecked_into();
            on_input_change.emit(input.value());
        })
    };
    let on_save = {
        let on_save = props.on_save.clone();
        Callback::from(move |_: MouseEvent| on_save.emit(()))
    };
    let on_cancel = {
        let on_cancel_edit = props.on_cancel_edit.clone();
        Callback::from(move |_: MouseEvent| on_cancel_edit.emit(()))
    };
    let editing = props.editing_month.is_some();

    html! {
        <div class="budget-page">
            <h2>{"Monthly Budget"}</h2>
            <div class="budget-box">
                <MonthPicker
                    selected_year={props.selected_year.clone()}
                    selected_month={props.selected_month.clone()}
                    on_year_change={props.on_year_change.clone()}
                    on_month_change={props.on_month_change.clone()}
                />
                <input
                    type="number"
                    placeholder="Enter budget"
                    value={props.budget_input.clone()}
                    onchange={on_input}
                />
                <button onclick={on_save}>{if editing { "Update" } else { "Save" }}</button>
                {if editing {
                    html! { <button class="cancel-btn action-btn" onclick={on_cancel}>{"Cancel"}</button> }
                } else {
                    html! {}
                }}
            </div>

            <div class="budget-list">
                <h3>{"Budgets Set"}</h3>
                {if props.budgets.is_empty() {
                    html! { <p>{"No budgets yet."}</p> }
                } else {
                    html! {
                        <ul>
                            {for props.budgets.iter().map(|budget| {
                                let on_edit = {
                                    let on_edit = props.on_edit.clone();
                                    let budget = budget.clone();
                                    Callback::from(move |_: MouseEvent| on_edit.emit(budget.clone()))
                                };
                                let on_delete = {
                                    let on_delete = props.on_delete.clone();
                                    let month = budget.month.clone();
                                    Callback::from(move |_: MouseEvent| on_delete.emit(month.clone()))
                                };
                                html! {
                                    <li class="budget-item">
                                        <span>
                                            {month_year_label(&budget.month)}{": "}
                                            <strong>{format_currency(budget.amount, &props.currency)}</strong>
                                        </span>
                                        <div class="budget-actions">
                                            <button class="action-btn edit-btn" onclick={on_edit}>{"✏️ Edit"}</button>
                                            <button class="action-btn delete-btn" onclick={on_delete}>{"🗑 Delete"}</button>
                                        </div>
                                    </li>
                                }
                            })}
                        </ul>
                    }
                }}
            </div>
        </div>
    }
}
