use yew::prelude::*;

use crate::components::{BackButton, WeightedSpinner};
use crate::hooks::use_telegram;
use crate::models::mock_spinner_players;
use crate::styles;

#[function_component(Game)]
pub fn game() -> Html {
    let telegram = use_telegram();

    let user_label = telegram
        .user
        .as_ref()
        .map(|u| u.display_name())
        .unwrap_or_else(|| "…".to_string());

    html! {
        <div class={styles::PAGE}>
            <div class={styles::GLOW_OVERLAY}></div>

            <header class={styles::HEADER}>
                <BackButton />
                <h1 class={styles::HEADER_TITLE}>{ "TONgue" }</h1>
                <span class={styles::USER_BADGE}>{ user_label }</span>
            </header>

            <main class="relative z-10 flex flex-col gap-4 px-4 pt-6 max-w-2xl mx-auto">
                <WeightedSpinner entrants={mock_spinner_players()} />
            </main>
        </div>
    }
}
