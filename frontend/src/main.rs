mod charts;
mod components;
mod dashboard;
mod format;
mod services;
mod state;

use dashboard::Dashboard;
use services::auth::AuthSession;
use services::logging::Logger;
use yew::prelude::*;

/// Signed-out landing page. Sign-in happens on the hosted auth
/// provider's pages; this only links out to them.
#[function_component(Landing)]
fn landing() -> Html {
    html! {
        <div class="landing">
            <h1>{"💸 Expense Dashboard"}</h1>
            <p>{"Track spending, set budgets, and get a monthly Money Wrapped."}</p>
            <a class="signin-btn" href="/sign-in">{"Sign in to continue"}</a>
        </div>
    }
}

/// Auth gate: nothing below this renders, fetches, or schedules until
/// a session exists.
#[function_component(App)]
fn app() -> Html {
    match AuthSession::load() {
        Some(session) => html! { <Dashboard session={session} /> },
        None => html! { <Landing /> },
    }
}

fn main() {
    Logger::info_with_component("app", "starting expense dashboard");
    yew::Renderer::<App>::new().render();
}
