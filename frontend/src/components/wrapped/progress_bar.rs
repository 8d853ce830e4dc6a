use yew::prelude::*;

#[derive(Properties, PartialEq)]
pub struct ProgressBarProps {
    pub active: bool,
    pub completed: bool,
    pub duration_ms: Option<u32>,
}

/// One segment of the story progress row. Completed segments render
/// full, the active one animates over its screen's duration, and
/// upcoming ones stay empty.
#[function_component(ProgressBar)]
pub fn progress_bar(props: &ProgressBarProps) -> Html {
    let fill_style = if props.completed {
        "width: 100%;".to_string()
    } else if props.active {
        match props.duration_ms {
            Some(ms) => format!("animation: story-fill {}ms linear forwards;", ms),
            None => "width: 100%;".to_string(),
        }
    } else {
        "width: 0;".to_string()
    };

    html! {
        <div class="story-progress-track">
            <div class="story-progress-fill" style={fill_style} />
        </div>
    }
}
