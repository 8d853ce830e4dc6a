use shared::{validate_expense_input, Expense, ExpensePayload};
use web_sys::{HtmlInputElement, HtmlSelectElement};
use yew::prelude::*;

pub const DEFAULT_CATEGORIES: [&str; 7] = [
    "Food",
    "Transport",
    "Groceries",
    "Health",
    "Bills",
    "Entertainment",
    "Other",
];

#[derive(Properties, PartialEq)]
pub struct ExpenseFormProps {
    /// When set, the form is prefilled and submits as an update
    pub editing_expense: Option<Expense>,
    pub on_submit: Callback<ExpensePayload>,
    pub on_cancel: Callback<()>,
}

#[function_component(ExpenseForm)]
pub fn expense_form(props: &ExpenseFormProps) -> Html {
    let date = use_state(String::new);
    let description = use_state(String::new);
    let category = use_state(|| DEFAULT_CATEGORIES[0].to_string());
    let amount = use_state(String::new);

    // Sync fields with the edit selection
    {
        let date = date.clone();
        let description = description.clone();
        let category = category.clone();
        let amount = amount.clone();
        use_effect_with(props.editing_expense.clone(), move |editing| {
            match editing {
                Some(expense) => {
                    date.set(expense.date.clone());
                    description.set(expense.description.clone());
                    category.set(expense.category.clone());
                    amount.set(expense.amount.to_string());
                }
                None => {
                    date.set(String::new());
                    description.set(String::new());
                    category.set(DEFAULT_CATEGORIES[0].to_string());
                    amount.set(String::new());
                }
            }
            || ()
        });
    }

    let on_submit = {
        let date = date.clone();
        let description = description.clone();
        let category = category.clone();
        let amount = amount.clone();
        let submit = props.on_submit.clone();
        Callback::from(move |e: SubmitEvent| {
            e.prevent_default();
            // Empty date/description/amount never reach the callback
            let parsed = match validate_expense_input(&date, &description, &amount) {
                Ok(value) => value,
                Err(_) => return,
            };
            submit.emit(ExpensePayload {
                date: (*date).clone(),
                description: (*description).clone(),
                category: (*category).clone(),
                amount: parsed,
            });
            date.set(String::new());
            description.set(String::new());
            category.set(DEFAULT_CATEGORIES[0].to_string());
            amount.set(String::new());
        })
    };

    let on_date_change = {
        let date = date.clone();
        Callback::from(move |e: Event| {
            let input: HtmlInputElement = e.target_unchecked_into();
            date.set(input.value());
        })
    };
    let on_description_change = {
        let description = description.clone();
        Callback::from(move |e: Event| {
            let input: HtmlInputElement = e.target_unchecked_into();
            description.set(input.value());
        })
    };
    let on_category_change = {
        let category = category.clone();
        Callback::from(move |e: Event| {
            let select: HtmlSelectElement = e.target_unchecked_into();
            category.set(select.value());
        })
    };
    let on_amount_change = {
        let amount = amount.clone();
        Callback::from(move |e: Event| {
            let input: HtmlInputElement = e.target_unchecked_into();
            amount.set(input.value());
        })
    };

    let editing = props.editing_expense.is_some();
    let on_cancel = {
        let cancel = props.on_cancel.clone();
        Callback::from(move |_: MouseEvent| cancel.emit(()))
    };

    html! {
        <form class="expense-form" onsubmit={on_submit}>
            <input type="date" name="date" value={(*date).clone()} onchange={on_date_change} required=true />
            <input
                type="text"
                name="description"
                placeholder="Description"
                value={(*description).clone()}
                onchange={on_description_change}
                required=true
            />
            <select name="category" value={(*category).clone()} onchange={on_category_change}>
                {for DEFAULT_CATEGORIES.iter().map(|cat| {
                    html! { <option value={*cat} selected={*cat == *category}>{cat}</option> }
                })}
            </select>
            <input
                type="number"
                name="amount"
                placeholder="Amount"
                min="0"
                step="0.01"
                value={(*amount).clone()}
                onchange={on_amount_change}
                required=true
            />
            <button type="submit">{if editing { "Update" } else { "Add" }}</button>
            {if editing {
                html! { <button type="button" onclick={on_cancel}>{"Cancel"}</button> }
            } else {
                html! {}
            }}
        </form>
    }
}
