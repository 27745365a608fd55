use yew::prelude::*;

use crate::hooks::use_coins;
use crate::styles;

/// Coin balance pill for the page header. Click to refetch.
#[function_component(CoinsBadge)]
pub fn coins_badge() -> Html {
    let coins = use_coins();

    let onclick = {
        let refresh = coins.refresh.clone();
        Callback::from(move |_| refresh.emit(()))
    };

    let label = if coins.loading {
        "…".to_string()
    } else {
        match coins.coins {
            Some(amount) => format!("🪙 {}", amount),
            None => "🪙 —".to_string(),
        }
    };

    html! {
        <button class={styles::USER_BADGE} {onclick} title="Tap to refresh">
            { label }
        </button>
    }
}
