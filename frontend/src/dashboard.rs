//! The signed-in application shell: sidebar navigation, month filter,
//! and every data panel. All state transitions go through the
//! [`AppState`] reducer; this module owns the network side effects.

use crate::charts::build_chart_data;
use crate::components::{
    AnomalyAlert, BudgetPanel, ChartCanvas, ChartKind, ExpenseForm, ExpenseList, ExportPanel,
    InsightCard, MonthPicker, ReportsTable, SpendingProfileCard, StatsGrid, WrappedContainer,
};
use crate::format::format_currency;
use crate::services::api::ApiClient;
use crate::services::auth::AuthSession;
use crate::services::download;
use crate::services::logging::Logger;
use crate::services::reminder::{self, ReminderScheduler};
use crate::state::{Action, AppState, View};
use futures::join;
use shared::{current_year_month, Budget, Expense, ExpensePayload};
use wasm_bindgen_futures::spawn_local;
use web_sys::{HtmlInputElement, HtmlSelectElement};
use yew::prelude::*;

const CURRENCIES: [&str; 5] = ["INR", "USD", "EUR", "GBP", "JPY"];

#[derive(Properties, PartialEq)]
pub struct DashboardProps {
    pub session: AuthSession,
}

fn refresh_expenses(api: ApiClient, state: UseReducerHandle<AppState>) {
    spawn_local(async move {
        match api.get_expenses().await {
            Ok(expenses) => state.dispatch(Action::ExpensesLoaded(expenses)),
            Err(e) => {
                Logger::error_with_component("dashboard", &format!("expense fetch failed: {}", e));
                state.dispatch(Action::SetError(Some("Could not load expenses.".to_string())));
            }
        }
    });
}

/// Fetches the month-scoped aggregates for the currently selected
/// month. The generation captured here lets the reducer drop the
/// responses if the user has switched months in the meantime.
fn refresh_month_scope(api: ApiClient, state: UseReducerHandle<AppState>) {
    let generation = state.fetch_generation;
    let month = state.month_key();
    spawn_local(async move {
        let (summary, report) = join!(api.get_summary(&month), api.get_category_report(&month));
        match summary {
            Ok(summary) => state.dispatch(Action::SummaryLoaded {
                generation,
                summary,
            }),
            Err(e) => {
                Logger::error_with_component("dashboard", &format!("summary fetch failed: {}", e));
            }
        }
        match report {
            Ok(report) => state.dispatch(Action::CategoryReportLoaded { generation, report }),
            Err(e) => {
                Logger::error_with_component("dashboard", &format!("report fetch failed: {}", e));
            }
        }
        state.dispatch(Action::SetLoading(false));
    });
}

fn refresh_budgets(api: ApiClient, state: UseReducerHandle<AppState>) {
    spawn_local(async move {
        match api.get_budgets().await {
            Ok(budgets) => state.dispatch(Action::BudgetsLoaded(budgets)),
            Err(e) => {
                Logger::error_with_component("dashboard", &format!("budget fetch failed: {}", e));
            }
        }
    });
}

/// Fetches the five analysis endpoints concurrently. Each one degrades
/// independently: a failed call logs and leaves its slice untouched.
fn refresh_insights(api: ApiClient, state: UseReducerHandle<AppState>) {
    spawn_local(async move {
        let (insights, risk, diffs, anomalies, profile) = join!(
            api.get_insights(),
            api.get_budget_risk(),
            api.get_monthly_diffs(),
            api.get_anomalies(),
            api.get_spending_profile(),
        );
        match insights {
            Ok(insights) => state.dispatch(Action::InsightsLoaded(insights)),
            Err(e) => Logger::warn_with_component("dashboard", &format!("insights: {}", e)),
        }
        match risk {
            Ok(risk) => state.dispatch(Action::BudgetRiskLoaded(risk)),
            Err(e) => Logger::warn_with_component("dashboard", &format!("budget risk: {}", e)),
        }
        match diffs {
            Ok(diffs) => state.dispatch(Action::MonthlyDiffsLoaded(diffs)),
            Err(e) => Logger::warn_with_component("dashboard", &format!("monthly diff: {}", e)),
        }
        match anomalies {
            Ok(anomalies) => state.dispatch(Action::AnomaliesLoaded(anomalies)),
            Err(e) => Logger::warn_with_component("dashboard", &format!("anomalies: {}", e)),
        }
        match profile {
            Ok(profile) => state.dispatch(Action::SpendingProfileLoaded(profile)),
            Err(e) => Logger::warn_with_component("dashboard", &format!("spending profile: {}", e)),
        }
    });
}

#[function_component(Dashboard)]
pub fn dashboard(props: &DashboardProps) -> Html {
    let state = use_reducer(|| {
        let (year, month) = current_year_month();
        AppState::new(year, month)
    });
    let api = use_memo(props.session.token.clone(), |token| {
        ApiClient::new(token.clone())
    });
    let api = (*api).clone();

    // One-time loads that are not month-scoped.
    {
        let api = api.clone();
        let state = state.clone();
        use_effect_with((), move |_| {
            refresh_expenses(api.clone(), state.clone());
            refresh_budgets(api.clone(), state.clone());
            refresh_insights(api, state);
        });
    }

    // Month-scoped aggregates follow the filter.
    {
        let api = api.clone();
        let state = state.clone();
        use_effect_with(state.month_key(), move |_| {
            refresh_month_scope(api, state);
        });
    }

    // The reminder task lives exactly as long as reminders are enabled
    // with the current time. Dropping the handle cancels the poll.
    {
        use_effect_with(state.preferences.clone(), move |prefs| {
            let scheduler = prefs
                .reminder_enabled
                .then(|| ReminderScheduler::start(prefs.reminder_time.clone()));
            move || drop(scheduler)
        });
    }

    let on_select_view = {
        let state = state.clone();
        Callback::from(move |view: View| state.dispatch(Action::SelectView(view)))
    };
    let on_year_change = {
        let state = state.clone();
        Callback::from(move |year: String| state.dispatch(Action::SelectYear(year)))
    };
    let on_month_change = {
        let state = state.clone();
        Callback::from(move |month: String| state.dispatch(Action::SelectMonth(month)))
    };

    let on_submit_expense = {
        let api = api.clone();
        let state = state.clone();
        Callback::from(move |payload: ExpensePayload| {
            let api = api.clone();
            let state = state.clone();
            let editing = state.editing_expense.clone();
            spawn_local(async move {
                let result = match &editing {
                    Some(expense) => api.update_expense(expense.id, &payload).await,
                    None => api.create_expense(&payload).await,
                };
                match result {
                    Ok(()) => state.dispatch(Action::SetError(None)),
                    Err(e) => {
                        Logger::error_with_component(
                            "dashboard",
                            &format!("expense save failed: {}", e),
                        );
                        state.dispatch(Action::SetError(Some(
                            "Could not save the expense. Please try again.".to_string(),
                        )));
                    }
                }
                state.dispatch(Action::CancelEditExpense);
                // Re-fetch even after a failure so the view never
                // drifts from what the backend actually holds.
                refresh_expenses(api.clone(), state.clone());
                refresh_month_scope(api.clone(), state.clone());
                refresh_insights(api, state);
            });
        })
    };
    let on_edit_expense = {
        let state = state.clone();
        Callback::from(move |expense: Expense| state.dispatch(Action::StartEditExpense(expense)))
    };
    let on_cancel_edit_expense = {
        let state = state.clone();
        Callback::from(move |_| state.dispatch(Action::CancelEditExpense))
    };
    let on_delete_expense = {
        let api = api.clone();
        let state = state.clone();
        Callback::from(move |id: i64| {
            let api = api.clone();
            let state = state.clone();
            spawn_local(async move {
                if let Err(e) = api.delete_expense(id).await {
                    Logger::error_with_component(
                        "dashboard",
                        &format!("expense delete failed: {}", e),
                    );
                    state.dispatch(Action::SetError(Some(
                        "Could not delete the expense.".to_string(),
                    )));
                }
                refresh_expenses(api.clone(), state.clone());
                refresh_month_scope(api.clone(), state.clone());
                refresh_insights(api, state);
            });
        })
    };

    let on_budget_input = {
        let state = state.clone();
        Callback::from(move |input: String| state.dispatch(Action::SetBudgetInput(input)))
    };
    let on_save_budget = {
        let api = api.clone();
        let state = state.clone();
        Callback::from(move |_| {
            let Ok(amount) = state.budget_input.trim().parse::<f64>() else {
                download::alert("Please enter a valid budget amount");
                return;
            };
            let budget = Budget {
                month: state.month_key(),
                amount,
            };
            let api = api.clone();
            let state = state.clone();
            spawn_local(async move {
                match api.save_budget(&budget).await {
                    Ok(()) => match api.get_budgets().await {
                        Ok(budgets) => state.dispatch(Action::BudgetSaved(budgets)),
                        Err(e) => {
                            Logger::error_with_component(
                                "dashboard",
                                &format!("budget refresh failed: {}", e),
                            );
                            // The save went through, so edit mode still
                            // ends; keep the known list and flag that it
                            // may be stale.
                            state.dispatch(Action::BudgetSaved(state.budgets.clone()));
                            state.dispatch(Action::SetError(Some(
                                "Budget saved, but refreshing the list failed.".to_string(),
                            )));
                        }
                    },
                    Err(e) => {
                        Logger::error_with_component(
                            "dashboard",
                            &format!("budget save failed: {}", e),
                        );
                        state.dispatch(Action::SetError(Some(
                            "Could not save the budget.".to_string(),
                        )));
                    }
                }
                refresh_month_scope(api.clone(), state.clone());
                refresh_insights(api, state);
            });
        })
    };
    let on_edit_budget = {
        let state = state.clone();
        Callback::from(move |budget: Budget| state.dispatch(Action::StartEditBudget(budget)))
    };
    let on_cancel_edit_budget = {
        let state = state.clone();
        Callback::from(move |_| {
            let (reset_year, reset_month) = current_year_month();
            state.dispatch(Action::CancelEditBudget {
                reset_year,
                reset_month,
            });
        })
    };
    let on_delete_budget = {
        let api = api.clone();
        let state = state.clone();
        Callback::from(move |month: String| {
            let api = api.clone();
            let state = state.clone();
            spawn_local(async move {
                if let Err(e) = api.delete_budget(&month).await {
                    Logger::error_with_component(
                        "dashboard",
                        &format!("budget delete failed: {}", e),
                    );
                    state.dispatch(Action::SetError(Some(
                        "Could not delete the budget.".to_string(),
                    )));
                }
                if state.editing_budget_month.as_deref() == Some(month.as_str()) {
                    let (reset_year, reset_month) = current_year_month();
                    state.dispatch(Action::CancelEditBudget {
                        reset_year,
                        reset_month,
                    });
                }
                refresh_budgets(api.clone(), state.clone());
                refresh_month_scope(api.clone(), state.clone());
                refresh_insights(api, state);
            });
        })
    };

    let on_currency_change = {
        let state = state.clone();
        Callback::from(move |e: Event| {
            let select: HtmlSelectElement = e.target_unchecked_into();
            state.dispatch(Action::SetCurrency(select.value()));
        })
    };
    let on_reminder_toggle = {
        let state = state.clone();
        Callback::from(move |e: Event| {
            let input: HtmlInputElement = e.target_unchecked_into();
            let mut prefs = state.preferences.clone();
            prefs.reminder_enabled = input.checked();
            state.dispatch(Action::PreferencesChanged(prefs));
        })
    };
    let on_reminder_time = {
        let state = state.clone();
        Callback::from(move |e: Event| {
            let input: HtmlInputElement = e.target_unchecked_into();
            let mut prefs = state.preferences.clone();
            prefs.reminder_time = input.value();
            state.dispatch(Action::PreferencesChanged(prefs));
        })
    };
    let on_save_reminder = {
        let api = api.clone();
        let state = state.clone();
        Callback::from(move |_: MouseEvent| {
            let api = api.clone();
            let prefs = state.preferences.clone();
            spawn_local(async move {
                if prefs.reminder_enabled && !reminder::ensure_permission().await {
                    download::alert("We need permission to show notifications!");
                    return;
                }
                match api.save_preferences(&prefs).await {
                    Ok(()) => download::alert("Reminder preferences saved! 🔔"),
                    Err(e) => {
                        Logger::error_with_component(
                            "dashboard",
                            &format!("preference save failed: {}", e),
                        );
                        download::alert("Failed to save preferences.");
                    }
                }
            });
        })
    };

    let open_wrapped = {
        let state = state.clone();
        Callback::from(move |_: MouseEvent| state.dispatch(Action::ShowWrapped(true)))
    };
    let close_wrapped = {
        let state = state.clone();
        Callback::from(move |_| state.dispatch(Action::ShowWrapped(false)))
    };
    let dismiss_error = {
        let state = state.clone();
        Callback::from(move |_: MouseEvent| state.dispatch(Action::SetError(None)))
    };
    let sign_out = {
        let session = props.session.clone();
        Callback::from(move |_: MouseEvent| session.sign_out())
    };

    let empty_trend = Vec::new();
    let charts = build_chart_data(
        &state.category_report,
        state
            .summary
            .as_ref()
            .map(|s| s.daily_trend.as_slice())
            .unwrap_or(&empty_trend),
        &state
            .summary
            .as_ref()
            .map(|s| s.month_comparison.clone())
            .unwrap_or_default(),
    );

    let sidebar = html! {
        <nav class="sidebar">
            <h1 class="app-title">{"💸 Expense Dashboard"}</h1>
            {for View::ALL.iter().map(|view| {
                let on_select_view = on_select_view.clone();
                let view = *view;
                let class = if state.view == view { "nav-item active" } else { "nav-item" };
                html! {
                    <button class={class} onclick={Callback::from(move |_| on_select_view.emit(view))}>
                        {view.icon()}{" "}{view.title()}
                    </button>
                }
            })}
        </nav>
    };

    let risk_banner = state
        .budget_risk
        .as_ref()
        .filter(|risk| risk.projected_overrun)
        .map(|risk| {
            let days = risk
                .days_to_exhaustion
                .as_ref()
                .map(|d| d.to_string())
                .unwrap_or_else(|| "a few".to_string());
            html! {
                <div class="risk-warning">
                    {format!("⚠️ At this pace your budget runs out in {} days.", days)}
                </div>
            }
        })
        .unwrap_or_default();

    let month_picker = html! {
        <MonthPicker
            selected_year={state.selected_year.clone()}
            selected_month={state.selected_month_only.clone()}
            on_year_change={on_year_change.clone()}
            on_month_change={on_month_change.clone()}
        />
    };

    let content = match state.view {
        View::Dashboard => html! {
            <>
                <header class="dashboard-header">
                    <h2>{format!("Hi, {} 👋", props.session.display_name())}</h2>
                    <div class="header-controls">
                        {month_picker}
                        <button class="wrapped-btn" onclick={open_wrapped}>{"🎁 Your Money Wrapped"}</button>
                    </div>
                </header>
                {state.spending_profile.clone().map(|profile| html! {
                    <SpendingProfileCard profile={profile} />
                }).unwrap_or_default()}
                {risk_banner}
                {if state.insights.is_empty() {
                    html! {}
                } else {
                    html! {
                        <section class="insights">
                            {for state.insights.iter().cloned().map(|insight| html! {
                                <InsightCard insight={insight} />
                            })}
                        </section>
                    }
                }}
                {for state.anomalies.iter().cloned().map(|anomaly| html! {
                    <AnomalyAlert anomaly={anomaly} currency={state.currency.clone()} />
                })}
                <StatsGrid summary={state.summary.clone()} currency={state.currency.clone()} />
                <ExpenseForm
                    editing_expense={state.editing_expense.clone()}
                    on_submit={on_submit_expense}
                    on_cancel={on_cancel_edit_expense}
                />
                <ExpenseList
                    expenses={state.expenses.clone()}
                    currency={state.currency.clone()}
                    on_edit={on_edit_expense}
                    on_delete={on_delete_expense}
                />
                <ExportPanel api={api.clone()} />
            </>
        },
        View::Trends => html! {
            <>
                <h2>{"Trends"}</h2>
                <ChartCanvas dataset={charts.line.clone()} kind={ChartKind::Line} />
                <ChartCanvas dataset={charts.month_compare.clone()} kind={ChartKind::Bar} />
            </>
        },
        View::Categories => html! {
            <>
                <h2>{"Categories"}</h2>
                <ChartCanvas dataset={charts.pie.clone()} kind={ChartKind::Pie} />
                <ChartCanvas dataset={charts.bar.clone()} kind={ChartKind::Bar} />
            </>
        },
        View::Reports => html! {
            <>
                <h2>{"Reports"}</h2>
                <div class="report-charts">
                    <ChartCanvas dataset={charts.pie.clone()} kind={ChartKind::Pie} />
                    <ChartCanvas dataset={charts.bar.clone()} kind={ChartKind::Bar} />
                    <ChartCanvas dataset={charts.line.clone()} kind={ChartKind::Line} />
                    <ChartCanvas dataset={charts.month_compare.clone()} kind={ChartKind::Bar} />
                </div>
                <h3>{"This month vs last month"}</h3>
                <ReportsTable diffs={state.monthly_diffs.clone()} currency={state.currency.clone()} />
            </>
        },
        View::Budget => html! {
            <BudgetPanel
                budgets={state.budgets.clone()}
                editing_month={state.editing_budget_month.clone()}
                budget_input={state.budget_input.clone()}
                selected_year={state.selected_year.clone()}
                selected_month={state.selected_month_only.clone()}
                currency={state.currency.clone()}
                on_year_change={on_year_change}
                on_month_change={on_month_change}
                on_input_change={on_budget_input}
                on_save={on_save_budget}
                on_cancel_edit={on_cancel_edit_budget}
                on_edit={on_edit_budget}
                on_delete={on_delete_budget}
            />
        },
        View::Profile => html! {
            <div class="profile-page">
                <h2>{"Profile"}</h2>
                <p><strong>{props.session.display_name()}</strong></p>
                {props.session.user.email.clone().map(|email| html! { <p>{email}</p> }).unwrap_or_default()}

                <div class="profile-setting">
                    <label>{"Currency"}</label>
                    <select onchange={on_currency_change}>
                        {for CURRENCIES.iter().map(|code| html! {
                            <option value={*code} selected={*code == state.currency}>{code}</option>
                        })}
                    </select>
                </div>

                <div class="profile-setting reminder-box">
                    <label>
                        <input
                            type="checkbox"
                            checked={state.preferences.reminder_enabled}
                            onchange={on_reminder_toggle}
                        />
                        {" Daily expense reminder"}
                    </label>
                    <input
                        type="time"
                        value={state.preferences.reminder_time.clone()}
                        onchange={on_reminder_time}
                        disabled={!state.preferences.reminder_enabled}
                    />
                    <button onclick={on_save_reminder}>{"Save"}</button>
                </div>

                {state.summary.as_ref().map(|s| html! {
                    <p class="profile-total">
                        {format!("Spent this month: {}", format_currency(s.total, &state.currency))}
                    </p>
                }).unwrap_or_default()}

                <button class="signout-btn" onclick={sign_out}>{"Sign out"}</button>
            </div>
        },
    };

    html! {
        <div class="app-shell">
            {sidebar}
            <main class="main-panel">
                {state.error_banner.clone().map(|message| html! {
                    <div class="error-banner">
                        {message}
                        <button onclick={dismiss_error.clone()}>{"✕"}</button>
                    </div>
                }).unwrap_or_default()}
                {if state.loading {
                    html! { <div class="loading-bar">{"Loading..."}</div> }
                } else {
                    html! {}
                }}
                {content}
            </main>
            {if state.show_wrapped {
                html! {
                    <WrappedContainer
                        api={api.clone()}
                        currency={state.currency.clone()}
                        on_close={close_wrapped}
                    />
                }
            } else {
                html! {}
            }}
        </div>
    }
}
