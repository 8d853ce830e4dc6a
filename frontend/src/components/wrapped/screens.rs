//! The six Money Wrapped screens. Each renders one slice of the
//! already-fetched story payload; none of them fetches anything.

use crate::format::format_currency;
use shared::{WrappedPersonality, WrappedRisk};
use yew::prelude::*;

/// Icon matching the backend's personality label.
pub fn personality_icon(label: &str) -> &'static str {
    if label.contains("Entertainment") {
        "🎬"
    } else if label.contains("Food") {
        "🍜"
    } else if label.contains("Saver") {
        "🏦"
    } else if label.contains("Shopper") {
        "🛍️"
    } else if label.contains("Travel") {
        "✈️"
    } else {
        "✨"
    }
}

/// Greedy word wrap used by the export canvases, where the 2D context
/// has no multi-line text primitive.
pub fn wrap_text(text: &str, max_chars: usize) -> Vec<String> {
    let mut lines = Vec::new();
    let mut current = String::new();
    for word in text.split_whitespace() {
        if !current.is_empty() && current.len() + 1 + word.len() > max_chars {
            lines.push(std::mem::take(&mut current));
        }
        if !current.is_empty() {
            current.push(' ');
        }
        current.push_str(word);
    }
    if !current.is_empty() {
        lines.push(current);
    }
    lines
}

#[derive(Properties, PartialEq)]
pub struct IntroProps {
    pub period: String,
}

#[function_component(IntroScreen)]
pub fn intro_screen(props: &IntroProps) -> Html {
    html! {
        <div class="story-content">
            <div class="story-emoji">{"🎁"}</div>
            <h1>{"Your Money Wrapped"}</h1>
            <p class="story-subtitle">{&props.period}</p>
            <p>{"Let's look back at your spending story."}</p>
        </div>
    }
}

#[derive(Properties, PartialEq)]
pub struct BigNumberProps {
    pub total_spent: f64,
    pub period: String,
    pub currency: String,
}

#[function_component(BigNumberScreen)]
pub fn big_number_screen(props: &BigNumberProps) -> Html {
    html! {
        <div class="story-content">
            <p class="story-subtitle">{"You spent"}</p>
            <h1 class="story-big-number">{format_currency(props.total_spent, &props.currency)}</h1>
            <p>{format!("in {}", props.period)}</p>
        </div>
    }
}

#[derive(Properties, PartialEq)]
pub struct PatternsProps {
    pub patterns: Vec<String>,
}

#[function_component(PatternsScreen)]
pub fn patterns_screen(props: &PatternsProps) -> Html {
    html! {
        <div class="story-content">
            <h1>{"Your patterns"}</h1>
            {if props.patterns.is_empty() {
                html! { <p>{"Nothing stood out this month. Quiet one!"}</p> }
            } else {
                html! {
                    <ul class="story-patterns">
                        {for props.patterns.iter().map(|p| html! { <li>{p}</li> })}
                    </ul>
                }
            }}
        </div>
    }
}

#[derive(Properties, PartialEq)]
pub struct PersonalityProps {
    pub personality: WrappedPersonality,
}

#[function_component(PersonalityScreen)]
pub fn personality_screen(props: &PersonalityProps) -> Html {
    html! {
        <div class="story-content">
            <div class="story-emoji">{personality_icon(&props.personality.label)}</div>
            <p class="story-subtitle">{"Your spending personality"}</p>
            <h1>{&props.personality.label}</h1>
            <p>{&props.personality.description}</p>
        </div>
    }
}

#[derive(Properties, PartialEq)]
pub struct ConsequenceProps {
    pub risk: WrappedRisk,
    pub currency: String,
}

#[function_component(ConsequenceScreen)]
pub fn consequence_screen(props: &ConsequenceProps) -> Html {
    html! {
        <div class="story-content">
            <h1>{"If this continues..."}</h1>
            <p class="story-big-line">
                {format!("Budget breaks in {} days", props.risk.days_left)}
            </p>
            <p>
                {format!(
                    "Buffer left: {}",
                    format_currency(props.risk.buffer, &props.currency)
                )}
            </p>
            {if props.risk.status.is_empty() {
                html! {}
            } else {
                html! { <p class="story-status">{&props.risk.status}</p> }
            }}
        </div>
    }
}

#[derive(Properties, PartialEq)]
pub struct RecommendationProps {
    pub recommendation: String,
    pub exporting: bool,
    pub on_replay: Callback<()>,
    pub on_export_png: Callback<()>,
    pub on_export_pdf: Callback<()>,
}

#[function_component(RecommendationScreen)]
pub fn recommendation_screen(props: &RecommendationProps) -> Html {
    let on_replay = {
        let cb = props.on_replay.clone();
        Callback::from(move |_: MouseEvent| cb.emit(()))
    };
    let on_png = {
        let cb = props.on_export_png.clone();
        Callback::from(move |_: MouseEvent| cb.emit(()))
    };
    let on_pdf = {
        let cb = props.on_export_pdf.clone();
        Callback::from(move |_: MouseEvent| cb.emit(()))
    };

    html! {
        <div class="story-content">
            <div class="story-emoji">{"💡"}</div>
            <h1>{"One thing to try"}</h1>
            <p>{&props.recommendation}</p>
            <div class="story-actions">
                <button onclick={on_replay}>{"↺ Replay"}</button>
                <button onclick={on_png} disabled={props.exporting}>{"📸 Save Story"}</button>
                <button onclick={on_pdf} disabled={props.exporting}>
                    {if props.exporting { "Preparing..." } else { "📄 Download Report" }}
                </button>
            </div>
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn personality_icons_cover_known_labels() {
        assert_eq!(personality_icon("The Entertainment Enthusiast"), "🎬");
        assert_eq!(personality_icon("The Food Explorer"), "🍜");
        assert_eq!(personality_icon("The Steady Saver"), "🏦");
        assert_eq!(personality_icon("The Impulse Shopper"), "🛍️");
        assert_eq!(personality_icon("The Travel Bug"), "✈️");
        assert_eq!(personality_icon("Something Else"), "✨");
    }

    #[test]
    fn wrap_text_breaks_on_word_boundaries() {
        let lines = wrap_text("keep your food budget under control next month", 20);
        assert!(lines.iter().all(|l| l.len() <= 20));
        assert_eq!(
            lines.join(" "),
            "keep your food budget under control next month"
        );
    }

    #[test]
    fn wrap_text_handles_empty_input() {
        assert!(wrap_text("", 20).is_empty());
        assert_eq!(wrap_text("one", 20), vec!["one"]);
    }
}
