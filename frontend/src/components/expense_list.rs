use crate::format::format_currency;
use shared::Expense;
use yew::prelude::*;

#[derive(Properties, PartialEq)]
pub struct ExpenseListProps {
    pub expenses: Vec<Expense>,
    pub currency: String,
    pub on_edit: Callback<Expense>,
    pub on_delete: Callback<i64>,
}

#[function_component(ExpenseList)]
pub fn expense_list(props: &ExpenseListProps) -> Html {
    html! {
        <table class="expense-table">
            <thead>
                <tr>
                    <th>{"Date"}</th>
                    <th>{"Description"}</th>
                    <th>{"Category"}</th>
                    <th>{"Amount"}</th>
                    <th>{"Actions"}</th>
                </tr>
            </thead>
            <tbody>
                {for props.expenses.iter().map(|expense| {
                    let on_edit = {
                        let on_edit = props.on_edit.clone();
                        let expense = expense.clone();
                        Callback::from(move |_: MouseEvent| on_edit.emit(expense.clone()))
                    };
                    let on_delete = {
                        let on_delete = props.on_delete.clone();
                        let id = expense.id;
                        Callback::from(move |_: MouseEvent| on_delete.emit(id))
                    };
                    html! {
                        <tr>
                            <td>{&expense.date}</td>
                            <td>
                                {&expense.description}
                                {if expense.is_anomaly.unwrap_or(false) {
                                    html! { <span class="anomaly-flag" title="Flagged as unusual">{" ⚠️"}</span> }
                                } else {
                                    html! {}
                                }}
                            </td>
                            <td>{&expense.category}</td>
                            <td>{format_currency(expense.amount, &props.currency)}</td>
                            <td>
                                <button onclick={on_edit}>{"Edit"}</button>
                                <button onclick={on_delete}>{"Delete"}</button>
                            </td>
                        </tr>
                    }
                })}
            </tbody>
        </table>
    }
}
