use yew::prelude::*;
use yew_router::prelude::*;

use crate::styles;
use crate::Route;

#[function_component(NotFound)]
pub fn not_found() -> Html {
    let navigator = use_navigator();

    let onclick = Callback::from(move |_| {
        if let Some(navigator) = &navigator {
            navigator.push(&Route::Home);
        }
    });

    html! {
        <div class={styles::PAGE}>
            <div class={styles::GLOW_OVERLAY}></div>
            <main class="relative z-10 flex flex-col items-center gap-6 pt-32">
                <h1 class="text-4xl font-bold">{ "404" }</h1>
                <p class="text-sm text-white/60">{ "This page spun off the track." }</p>
                <button class={styles::BUTTON_PRIMARY} {onclick}>
                    { "Back Home" }
                </button>
            </main>
        </div>
    }
}
