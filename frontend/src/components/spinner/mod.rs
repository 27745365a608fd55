pub mod spinner_utils;

use gloo_timers::callback::Timeout;
use web_sys::HtmlInputElement;
use yew::prelude::*;

use shared::constants::{PRE_ROLL_DELAY_MS, SETTLE_DELAY_MS, STRIP_REPEATS};
use shared::shared_spinner_game::{Entrant, SpinPhase, SpinSession, SpinnerError};

use crate::styles;
use spinner_utils::{slot_classes, OccupancyCard};

#[derive(Properties, PartialEq)]
pub struct WeightedSpinnerProps {
    pub entrants: Vec<Entrant>,
}

/// The horizontal weighted-random spinner. The shared core owns the slot
/// sequence and the landing math; this component only schedules the CSS
/// transition and the phase timers around it.
#[function_component(WeightedSpinner)]
pub fn weighted_spinner(props: &WeightedSpinnerProps) -> Html {
    let session = {
        let entrants = props.entrants.clone();
        use_mut_ref(move || SpinSession::new(&entrants))
    };

    let phase = use_state(|| SpinPhase::Idle);
    let offset = use_state(|| 0.0_f64);
    let duration_ms = use_state(|| 0_u32);
    let winner = use_state(|| None::<Entrant>);
    let error = use_state(|| None::<String>);
    let winner_input = use_state(String::new);
    let container_ref = use_node_ref();

    // Rebuild the sequence whenever the entrant set changes
    {
        let session = session.clone();
        let phase = phase.clone();
        let offset = offset.clone();
        let duration_ms = duration_ms.clone();
        let winner = winner.clone();
        let error = error.clone();
        use_effect_with(props.entrants.clone(), move |entrants| {
            if let Ok(active) = session.borrow_mut().as_mut() {
                if let Err(e) = active.set_entrants(entrants) {
                    error.set(Some(e.to_string()));
                }
            }
            duration_ms.set(0);
            offset.set(0.0);
            winner.set(None);
            phase.set(SpinPhase::Idle);
            || ()
        });
    }

    let slots = match session.borrow().as_ref() {
        Ok(active) => active.slots.clone(),
        Err(e) => {
            return html! {
                <div class={styles::CARD}>
                    <p class="text-sm text-red-400">{ format!("Cannot build spinner: {}", e) }</p>
                </div>
            };
        }
    };

    let oninput = {
        let winner_input = winner_input.clone();
        Callback::from(move |e: InputEvent| {
            let input: HtmlInputElement = e.target_unchecked_into();
            winner_input.set(input.value());
        })
    };

    let on_spin = {
        let session = session.clone();
        let phase = phase.clone();
        let offset = offset.clone();
        let duration_ms = duration_ms.clone();
        let winner = winner.clone();
        let error = error.clone();
        let winner_input = winner_input.clone();
        let container_ref = container_ref.clone();
        let entrants = props.entrants.clone();
        Callback::from(move |_| {
            error.set(None);

            let id = match winner_input.trim().parse::<u32>() {
                Ok(id) => id,
                Err(_) => {
                    error.set(Some("Enter a numeric player id".to_string()));
                    return;
                }
            };

            if let Ok(active) = session.borrow().as_ref() {
                if active.is_spinning() {
                    return;
                }
            }

            let width = container_ref
                .cast::<web_sys::Element>()
                .map(|el| el.get_bounding_client_rect().width())
                .filter(|w| *w > 0.0);

            // Snap the strip back to the start before the roll
            duration_ms.set(0);
            offset.set(0.0);
            winner.set(None);

            let session = session.clone();
            let phase = phase.clone();
            let offset = offset.clone();
            let duration_ms = duration_ms.clone();
            let winner = winner.clone();
            let error = error.clone();
            let entrants = entrants.clone();
            Timeout::new(PRE_ROLL_DELAY_MS, move || {
                let plan = match session.borrow_mut().as_mut() {
                    Ok(active) => active.start_spin(id, width),
                    Err(_) => return,
                };

                match plan {
                    Ok(plan) => {
                        duration_ms.set(plan.duration_ms);
                        offset.set(plan.offset);
                        phase.set(SpinPhase::Spinning);

                        let session = session.clone();
                        let phase = phase.clone();
                        let winner = winner.clone();
                        Timeout::new(plan.duration_ms, move || {
                            if let Ok(active) = session.borrow_mut().as_mut() {
                                active.settle();
                            }
                            phase.set(SpinPhase::Settling);

                            let session = session.clone();
                            let phase = phase.clone();
                            let winner = winner.clone();
                            let entrants = entrants.clone();
                            Timeout::new(SETTLE_DELAY_MS, move || {
                                let revealed = session
                                    .borrow_mut()
                                    .as_mut()
                                    .ok()
                                    .and_then(|active| active.reveal_winner());
                                match revealed {
                                    Some(id) => {
                                        winner.set(
                                            entrants.iter().find(|e| e.id == id).cloned(),
                                        );
                                        phase.set(SpinPhase::ShowingWinner);
                                    }
                                    None => phase.set(SpinPhase::Idle),
                                }
                            })
                            .forget();
                        })
                        .forget();
                    }
                    Err(SpinnerError::NoSlotsForEntrant(id)) => {
                        error.set(Some(format!("Player {} has no slots on the track", id)));
                    }
                    Err(e) => error.set(Some(e.to_string())),
                }
            })
            .forget();
        })
    };

    let on_try_again = {
        let session = session.clone();
        let phase = phase.clone();
        let offset = offset.clone();
        let duration_ms = duration_ms.clone();
        let winner = winner.clone();
        let error = error.clone();
        Callback::from(move |_| {
            if let Ok(active) = session.borrow_mut().as_mut() {
                active.reset();
            }
            duration_ms.set(0);
            offset.set(0.0);
            winner.set(None);
            error.set(None);
            phase.set(SpinPhase::Idle);
        })
    };

    let strip_style = if *duration_ms == 0 {
        format!("transform: translateX({}px); transition: none;", *offset)
    } else {
        format!(
            "transform: translateX({}px); transition: transform {}ms cubic-bezier(0.12, 0.45, 0.12, 1);",
            *offset, *duration_ms
        )
    };

    let is_spinning = matches!(*phase, SpinPhase::Spinning | SpinPhase::Settling);
    let no_slots = slots.is_empty();

    html! {
        <div class={styles::CARD}>
            if let Some(message) = (*error).clone() {
                <p class="text-sm text-red-400 text-center">{ message }</p>
            }

            <div ref={container_ref} class="relative w-full overflow-hidden rounded-xl border border-white/10 bg-black/30">
                <div class="absolute left-1/2 top-0 bottom-0 w-0.5 bg-white z-10 shadow-[0_0_8px_rgba(255,255,255,0.9)]"></div>
                <div class="flex" style={strip_style}>
                    {
                        for (0..STRIP_REPEATS).flat_map(|rep| {
                            slots.iter().map(move |slot| {
                                html! {
                                    <div
                                        key={format!("{}-{}", rep, slot.slot_index)}
                                        class={classes!(
                                            "shrink-0", "w-16", "h-20",
                                            "flex", "items-center", "justify-center",
                                            "border", "border-white/10",
                                            "text-xs", "font-bold",
                                            slot_classes(&slot.color)
                                        )}
                                    >
                                        { slot.entrant_id }
                                    </div>
                                }
                            }).collect::<Vec<Html>>()
                        })
                    }
                </div>
                if no_slots {
                    <p class="py-8 text-center text-sm text-white/50">{ "No eligible players" }</p>
                }
            </div>

            if *phase == SpinPhase::ShowingWinner {
                if let Some(entrant) = (*winner).clone() {
                    <p class="text-center text-lg font-bold drop-shadow-[0_0_8px_rgba(255,255,255,0.5)]">
                        { format!("🏆 {} wins!", entrant.name) }
                    </p>
                }
                <button class={styles::BUTTON_PRIMARY} onclick={on_try_again}>
                    { "TRY AGAIN" }
                </button>
            } else {
                <div class="flex items-center gap-3">
                    <input
                        class="flex-1 rounded-lg bg-white/10 border border-white/15 px-3 py-2 text-sm placeholder-white/40 outline-none"
                        type="text"
                        placeholder="Winning player id"
                        value={(*winner_input).clone()}
                        {oninput}
                        disabled={is_spinning}
                    />
                    <button
                        class={if is_spinning || no_slots { styles::BUTTON_DISABLED } else { styles::BUTTON_PRIMARY }}
                        onclick={on_spin}
                        disabled={is_spinning || no_slots}
                    >
                        { if is_spinning { "SPINNING…" } else { "SPIN" } }
                    </button>
                </div>
            }

            <div class="flex flex-col gap-2">
                {
                    for props.entrants.iter().map(|entrant| html! {
                        <OccupancyCard
                            key={entrant.id}
                            entrant={entrant.clone()}
                            slots={slots.clone()}
                        />
                    })
                }
            </div>
        </div>
    }
}
