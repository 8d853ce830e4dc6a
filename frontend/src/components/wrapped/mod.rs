//! Money Wrapped: a full-screen, story-style recap of the current
//! spending period. Fetched once, then played as six timed screens.

pub mod export;
pub mod progress_bar;
pub mod screens;

use crate::services::api::ApiClient;
use crate::services::download;
use crate::services::logging::Logger;
use gloo::timers::callback::Timeout;
use progress_bar::ProgressBar;
use screens::{
    BigNumberScreen, ConsequenceScreen, IntroScreen, PatternsScreen, PersonalityScreen,
    RecommendationScreen,
};
use shared::WrappedStory;
use wasm_bindgen_futures::spawn_local;
use yew::prelude::*;

struct StoryScreen {
    /// `None` means the screen waits for user input instead of
    /// auto-advancing.
    duration_ms: Option<u32>,
    gradient: &'static str,
}

const SCREENS: [StoryScreen; 6] = [
    StoryScreen { duration_ms: Some(5_000), gradient: "gradient-blue" },
    StoryScreen { duration_ms: Some(5_000), gradient: "gradient-dark" },
    StoryScreen { duration_ms: Some(6_000), gradient: "gradient-green" },
    StoryScreen { duration_ms: Some(7_000), gradient: "gradient-purple" },
    StoryScreen { duration_ms: Some(7_000), gradient: "gradient-red" },
    StoryScreen { duration_ms: None, gradient: "gradient-blue" },
];

#[derive(Properties, PartialEq)]
pub struct WrappedContainerProps {
    pub api: ApiClient,
    pub currency: String,
    pub on_close: Callback<()>,
}

#[function_component(WrappedContainer)]
pub fn wrapped_container(props: &WrappedContainerProps) -> Html {
    let step = use_state(|| 0usize);
    let story = use_state(|| Option::<WrappedStory>::None);
    let loading = use_state(|| true);
    let exporting = use_state(|| false);

    {
        let api = props.api.clone();
        let story = story.clone();
        let loading = loading.clone();
        use_effect_with((), move |_| {
            spawn_local(async move {
                match api.get_wrapped().await {
                    Ok(payload) => story.set(Some(payload)),
                    Err(e) => {
                        Logger::error_with_component("wrapped", &format!("story fetch failed: {}", e));
                    }
                }
                loading.set(false);
            });
        });
    }

    // Auto-advance. Recreated whenever the step changes; dropping the
    // handle on cleanup cancels the pending timer so a manual tap never
    // races a stale one.
    {
        let step_state = step.clone();
        use_effect_with((*step, story.is_some()), move |(current, loaded)| {
            let current = *current;
            let timeout = if *loaded {
                SCREENS
                    .get(current)
                    .and_then(|s| s.duration_ms)
                    .map(|ms| Timeout::new(ms, move || step_state.set(current + 1)))
            } else {
                None
            };
            move || drop(timeout)
        });
    }

    let go_next = {
        let step = step.clone();
        let on_close = props.on_close.clone();
        Callback::from(move |_: MouseEvent| {
            if *step + 1 >= SCREENS.len() {
                on_close.emit(());
            } else {
                step.set(*step + 1);
            }
        })
    };
    let go_prev = {
        let step = step.clone();
        Callback::from(move |_: MouseEvent| {
            if *step > 0 {
                step.set(*step - 1);
            }
        })
    };
    let close = {
        let on_close = props.on_close.clone();
        Callback::from(move |_: MouseEvent| on_close.emit(()))
    };
    let replay = {
        let step = step.clone();
        Callback::from(move |_| step.set(0))
    };

    let export_png = {
        let story = story.clone();
        let currency = props.currency.clone();
        Callback::from(move |_| {
            if let Some(payload) = (*story).clone() {
                if let Err(e) = export::export_story_png(&payload, &currency) {
                    Logger::error_with_component("wrapped", &format!("PNG export failed: {}", e));
                    download::alert("Could not save the story image.");
                }
            }
        })
    };
    let export_pdf = {
        let story = story.clone();
        let currency = props.currency.clone();
        let exporting = exporting.clone();
        Callback::from(move |_| {
            if let Some(payload) = (*story).clone() {
                exporting.set(true);
                let result = export::export_report_pdf(&payload, &currency);
                exporting.set(false);
                if let Err(e) = result {
                    Logger::error_with_component("wrapped", &format!("PDF export failed: {}", e));
                    download::alert("Could not build the PDF report.");
                }
            }
        })
    };

    if *loading {
        return html! {
            <div class="wrapped-overlay gradient-dark">
                <div class="story-content">
                    <p>{"Crunching your numbers..."}</p>
                </div>
            </div>
        };
    }

    let Some(payload) = (*story).clone() else {
        return html! {
            <div class="wrapped-overlay gradient-dark">
                <div class="story-content">
                    <p>{"No wrapped story yet. Log a few expenses first!"}</p>
                    <button onclick={close}>{"Close"}</button>
                </div>
            </div>
        };
    };

    let current = (*step).min(SCREENS.len() - 1);
    let timing = &SCREENS[current];
    let screen = match current {
        0 => html! { <IntroScreen period={payload.period.clone()} /> },
        1 => html! {
            <BigNumberScreen
                total_spent={payload.total_spent}
                period={payload.period.clone()}
                currency={props.currency.clone()}
            />
        },
        2 => html! { <PatternsScreen patterns={payload.patterns.clone()} /> },
        3 => html! { <PersonalityScreen personality={payload.personality.clone()} /> },
        4 => html! {
            <ConsequenceScreen risk={payload.risk.clone()} currency={props.currency.clone()} />
        },
        _ => html! {
            <RecommendationScreen
                recommendation={payload.recommendation.clone()}
                exporting={*exporting}
                on_replay={replay}
                on_export_png={export_png}
                on_export_pdf={export_pdf}
            />
        },
    };

    html! {
        <div class={classes!("wrapped-overlay", timing.gradient)}>
            <div class="story-progress-row">
                {for SCREENS.iter().enumerate().map(|(i, s)| html! {
                    <ProgressBar
                        active={i == current}
                        completed={i < current}
                        duration_ms={s.duration_ms}
                    />
                })}
            </div>
            <button class="story-close" onclick={close}>{"✕"}</button>
            <div class="tap-zone tap-left" onclick={go_prev} />
            <div class="tap-zone tap-right" onclick={go_next} />
            {screen}
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn screen_schedule_matches_story_flow() {
        assert_eq!(SCREENS.len(), 6);
        let durations: Vec<Option<u32>> = SCREENS.iter().map(|s| s.duration_ms).collect();
        assert_eq!(
            durations,
            vec![
                Some(5_000),
                Some(5_000),
                Some(6_000),
                Some(7_000),
                Some(7_000),
                None
            ]
        );
        // Only the final screen waits for user input
        assert!(SCREENS[..5].iter().all(|s| s.duration_ms.is_some()));
    }
}
