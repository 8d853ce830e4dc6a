use shared::Insight;
use yew::prelude::*;

#[derive(Properties, PartialEq)]
pub struct InsightCardProps {
    pub insight: Insight,
}

/// Pass-through renderer for one server-computed insight.
#[function_component(InsightCard)]
pub fn insight_card(props: &InsightCardProps) -> Html {
    let kind_class = match props.insight.kind.as_deref() {
        Some("increase") => "insight-card increase",
        Some("concentration") => "insight-card concentration",
        Some("weekend") => "insight-card weekend",
        Some("habit") => "insight-card habit",
        _ => "insight-card",
    };
    let icon = props.insight.icon.clone().unwrap_or_else(|| "💡".to_string());

    html! {
        <div class={kind_class}>
            <span class="insight-icon">{icon}</span>
            <span>{&props.insight.text}</span>
        </div>
    }
}
