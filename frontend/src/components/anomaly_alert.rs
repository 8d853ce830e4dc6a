use crate::format::format_currency;
use shared::Anomaly;
use yew::prelude::*;

#[derive(Properties, PartialEq)]
pub struct AnomalyAlertProps {
    pub anomaly: Anomaly,
    pub currency: String,
}

#[function_component(AnomalyAlert)]
pub fn anomaly_alert(props: &AnomalyAlertProps) -> Html {
    let anomaly = &props.anomaly;
    html! {
        <div class="anomaly-alert">
            <span class="anomaly-icon">{"⚠️"}</span>
            <div>
                <strong>{"Unusual Expense: "}</strong>
                {format!(
                    "{} ({}) - {}",
                    anomaly.description,
                    format_currency(anomaly.amount, &props.currency),
                    anomaly.category
                )}
            </div>
        </div>
    }
}
