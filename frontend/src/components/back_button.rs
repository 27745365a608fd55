use yew::prelude::*;
use yew_router::prelude::*;

use crate::styles;
use crate::Route;

#[function_component(BackButton)]
pub fn back_button() -> Html {
    let navigator = use_navigator();

    let onclick = Callback::from(move |_| {
        if let Some(navigator) = &navigator {
            navigator.push(&Route::Home);
        }
    });

    html! {
        <button class={styles::BUTTON_SMALL} {onclick}>
            { "← Back" }
        </button>
    }
}
