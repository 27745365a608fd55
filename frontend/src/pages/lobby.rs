use web_sys::{window, UrlSearchParams};
use yew::prelude::*;
use yew_router::prelude::*;

use crate::components::BackButton;
use crate::hooks::use_telegram;
use crate::models::{initial_lobby_players, LobbyPlayer};
use crate::styles;
use crate::Route;

const FALLBACK_LOBBY_CODE: &str = "834219";

fn lobby_code_from_url() -> String {
    window()
        .and_then(|w| w.location().search().ok())
        .and_then(|search| UrlSearchParams::new_with_str(&search).ok())
        .and_then(|params| params.get("code"))
        .filter(|code| !code.is_empty())
        .unwrap_or_else(|| FALLBACK_LOBBY_CODE.to_string())
}

#[derive(Properties, PartialEq)]
struct PlayerCardProps {
    player: LobbyPlayer,
    is_self: bool,
    on_toggle_ready: Callback<()>,
}

#[function_component(PlayerCard)]
fn player_card(props: &PlayerCardProps) -> Html {
    let ready_badge = if props.player.is_ready {
        html! { <span class="text-xs font-semibold text-green-400">{ "READY" }</span> }
    } else {
        html! { <span class="text-xs font-semibold text-white/40">{ "WAITING" }</span> }
    };

    let on_toggle = {
        let on_toggle_ready = props.on_toggle_ready.clone();
        Callback::from(move |_| on_toggle_ready.emit(()))
    };

    html! {
        <div class="flex items-center justify-between gap-3 px-4 py-3 rounded-xl bg-white/5 border border-white/10">
            <div class="flex flex-col">
                <span class="text-sm font-medium">{ &props.player.display_name }</span>
                <span class="text-xs text-white/50">{ format!("@{}", props.player.username) }</span>
            </div>
            <div class="flex items-center gap-3">
                { ready_badge }
                if props.is_self {
                    <button class={styles::BUTTON_SMALL} onclick={on_toggle}>
                        { if props.player.is_ready { "Unready" } else { "Ready" } }
                    </button>
                }
            </div>
        </div>
    }
}

#[function_component(Lobby)]
pub fn lobby() -> Html {
    let telegram = use_telegram();
    let navigator = use_navigator();
    let players = use_state(initial_lobby_players);
    let code = use_state(lobby_code_from_url);

    // Seat the current user once the Telegram bridge resolves
    {
        let players = players.clone();
        use_effect_with(telegram.user.clone(), move |user| {
            if let Some(user) = user {
                let mut current = (*players).clone();
                if !current.iter().any(|p| p.id == user.id) {
                    current.push(LobbyPlayer {
                        id: user.id,
                        username: user.username.clone().unwrap_or_else(|| "guest".to_string()),
                        display_name: user.display_name(),
                        is_ready: false,
                        color: "indigo".to_string(),
                    });
                    players.set(current);
                }
            }
            || ()
        });
    }

    let self_id = telegram.user.as_ref().map(|u| u.id);

    let on_toggle_ready = {
        let players = players.clone();
        Callback::from(move |id: u64| {
            let current = (*players)
                .iter()
                .cloned()
                .map(|mut p| {
                    if p.id == id {
                        p.is_ready = !p.is_ready;
                    }
                    p
                })
                .collect();
            players.set(current);
        })
    };

    let on_copy_code = {
        let code = code.clone();
        Callback::from(move |_| {
            if let Some(window) = window() {
                let _ = window.navigator().clipboard().write_text(&code);
            }
        })
    };

    // A lobby of one never starts, even if that one player is ready
    let can_start = players.len() > 1 && players.iter().all(|p| p.is_ready);

    let on_start = {
        let navigator = navigator.clone();
        Callback::from(move |_| {
            if let Some(navigator) = &navigator {
                navigator.push(&Route::Game);
            }
        })
    };

    html! {
        <div class={styles::PAGE}>
            <div class={styles::GLOW_OVERLAY}></div>

            <header class={styles::HEADER}>
                <BackButton />
                <h1 class={styles::HEADER_TITLE}>{ "Lobby" }</h1>
                <button class={styles::BUTTON_SMALL} onclick={on_copy_code} title="Copy lobby code">
                    { format!("#{} 📋", *code) }
                </button>
            </header>

            <main class="relative z-10 flex flex-col gap-3 px-6 pt-8 max-w-sm mx-auto">
                {
                    for players.iter().map(|player| {
                        let is_self = self_id == Some(player.id);
                        let on_toggle_ready = {
                            let on_toggle_ready = on_toggle_ready.clone();
                            let id = player.id;
                            Callback::from(move |_| on_toggle_ready.emit(id))
                        };
                        html! {
                            <PlayerCard
                                key={player.id}
                                player={player.clone()}
                                {is_self}
                                {on_toggle_ready}
                            />
                        }
                    })
                }

                <button
                    class={if can_start { styles::BUTTON_PRIMARY } else { styles::BUTTON_DISABLED }}
                    onclick={on_start}
                    disabled={!can_start}
                >
                    { "START GAME" }
                </button>
                if !can_start {
                    <p class={styles::TEXT_HINT}>{ "Everyone must be ready to start" }</p>
                }
            </main>
        </div>
    }
}
