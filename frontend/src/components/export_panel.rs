use crate::services::api::ApiClient;
use crate::services::download;
use crate::services::logging::Logger;
use wasm_bindgen_futures::spawn_local;
use web_sys::HtmlInputElement;
use yew::prelude::*;

#[derive(Properties, PartialEq)]
pub struct ExportPanelProps {
    pub api: ApiClient,
}

/// CSV export over a date range. Both bounds are required before any
/// network call is made.
#[function_component(ExportPanel)]
pub fn export_panel(props: &ExportPanelProps) -> Html {
    let from_date = use_state(String::new);
    let to_date = use_state(String::new);
    let exporting = use_state(|| false);

    let on_from_change = {
        let from_date = from_date.clone();
        Callback::from(move |e: Event| {
            let input: HtmlInputElement = e.target_unchecked_into();
            from_date.set(input.value());
        })
    };
    let on_to_change = {
        let to_date = to_date.clone();
        Callback::from(move |e: Event| {
            let input: HtmlInputElement = e.target_unchecked_into();
            to_date.set(input.value());
        })
    };

    let on_export = {
        let api = props.api.clone();
        let from_date = from_date.clone();
        let to_date = to_date.clone();
        let exporting = exporting.clone();
        Callback::from(move |_: MouseEvent| {
            let from = (*from_date).clone();
            let to = (*to_date).clone();
            if !download::export_range_ready(&from, &to) {
                download::alert("Please select both From and To dates");
                return;
            }

            let api = api.clone();
            let exporting = exporting.clone();
            exporting.set(true);
            spawn_local(async move {
                match api.export_expenses_csv(&from, &to).await {
                    Ok(bytes) => {
                        let filename = download::csv_export_filename(&from, &to);
                        if download::save_bytes(&filename, &bytes, "text/csv").is_err() {
                            download::alert("Error exporting CSV");
                        }
                    }
                    Err(e) => {
                        Logger::error_with_component("export", &format!("CSV export failed: {}", e));
                        download::alert("Error exporting CSV");
                    }
                }
                exporting.set(false);
            });
        })
    };

    html! {
        <section class="export-section">
            <div class="export-header">
                <h3>{"📤 Export Expenses"}</h3>
                <p>{"Download all your expense data for a selected date range"}</p>
            </div>
            <div class="export-body">
                <div class="export-field">
                    <label>{"From"}</label>
                    <input type="date" value={(*from_date).clone()} onchange={on_from_change} />
                </div>
                <div class="export-field">
                    <label>{"To"}</label>
                    <input type="date" value={(*to_date).clone()} onchange={on_to_change} />
                </div>
                <button class="export-btn" onclick={on_export} disabled={*exporting}>
                    {if *exporting { "Preparing CSV..." } else { "Download CSV" }}
                </button>
            </div>
        </section>
    }
}
