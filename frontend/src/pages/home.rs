use web_sys::HtmlInputElement;
use yew::prelude::*;
use yew_router::prelude::*;

use crate::components::CoinsBadge;
use crate::hooks::use_telegram;
use crate::styles;
use crate::Route;

#[function_component(Home)]
pub fn home() -> Html {
    let telegram = use_telegram();
    let navigator = use_navigator();
    let show_join = use_state(|| false);
    let join_code = use_state(String::new);

    let user_label = telegram
        .user
        .as_ref()
        .map(|u| u.display_name())
        .unwrap_or_else(|| "…".to_string());

    let on_find_match = {
        let navigator = navigator.clone();
        Callback::from(move |_| {
            if let Some(navigator) = &navigator {
                navigator.push(&Route::Game);
            }
        })
    };

    let on_create_lobby = {
        let navigator = navigator.clone();
        Callback::from(move |_| {
            if let Some(navigator) = &navigator {
                navigator.push(&Route::Lobby);
            }
        })
    };

    let on_toggle_join = {
        let show_join = show_join.clone();
        Callback::from(move |_| show_join.set(!*show_join))
    };

    let on_code_input = {
        let join_code = join_code.clone();
        Callback::from(move |e: InputEvent| {
            let input: HtmlInputElement = e.target_unchecked_into();
            join_code.set(input.value());
        })
    };

    let on_join = {
        let navigator = navigator.clone();
        let join_code = join_code.clone();
        Callback::from(move |_| {
            let code = join_code.trim().to_string();
            if code.is_empty() {
                return;
            }
            if let Some(navigator) = &navigator {
                let _ = navigator.push_with_query(&Route::Lobby, &[("code", code.as_str())]);
            }
        })
    };

    html! {
        <div class={styles::PAGE}>
            <div class={styles::GLOW_OVERLAY}></div>

            <header class={styles::HEADER}>
                <h1 class={styles::HEADER_TITLE}>{ "TONgue" }</h1>
                <div class="flex items-center gap-2">
                    <CoinsBadge />
                    <span class={styles::USER_BADGE}>{ user_label }</span>
                </div>
            </header>

            <main class="relative z-10 flex flex-col items-center gap-4 px-6 pt-16 max-w-sm mx-auto">
                <button class={styles::MENU_BUTTON} onclick={on_find_match}>
                    { "Find Match" }
                </button>
                <button class={styles::MENU_BUTTON} onclick={on_create_lobby}>
                    { "Create Lobby" }
                </button>
                <button class={styles::MENU_BUTTON} onclick={on_toggle_join}>
                    { "Join Lobby" }
                </button>

                if *show_join {
                    <div class="w-full flex items-center gap-2">
                        <input
                            class="flex-1 rounded-lg bg-white/10 border border-white/15 px-3 py-2 text-sm tracking-widest placeholder-white/40 outline-none"
                            type="text"
                            placeholder="Lobby code"
                            value={(*join_code).clone()}
                            oninput={on_code_input}
                        />
                        <button class={styles::BUTTON_SMALL} onclick={on_join}>
                            { "Join" }
                        </button>
                    </div>
                }

                <button class={styles::MENU_BUTTON} disabled=true>
                    { "My Stats" }
                </button>
                <p class={styles::TEXT_HINT}>{ "Stats are coming soon" }</p>

                if !telegram.loading && !telegram.is_in_telegram {
                    <p class={styles::TEXT_HINT}>{ "Running outside Telegram — using a test account" }</p>
                }
            </main>
        </div>
    }
}
