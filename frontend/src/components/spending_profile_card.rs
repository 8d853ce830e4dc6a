use shared::SpendingProfile;
use yew::prelude::*;

#[derive(Properties, PartialEq)]
pub struct SpendingProfileCardProps {
    pub profile: SpendingProfile,
}

#[function_component(SpendingProfileCard)]
pub fn spending_profile_card(props: &SpendingProfileCardProps) -> Html {
    let icon = props.profile.icon.clone().unwrap_or_else(|| "👤".to_string());
    html! {
        <div class="spending-profile-card">
            <div class="profile-icon">{icon}</div>
            <div>
                <h3>{&props.profile.profile}</h3>
                <p>{&props.profile.description}</p>
            </div>
        </div>
    }
}
