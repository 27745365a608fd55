use js_sys::Reflect;
use wasm_bindgen::{JsCast, JsValue};
use web_sys::window;
use yew::prelude::*;

use crate::models::TelegramUser;

#[derive(Clone, PartialEq)]
pub struct TelegramState {
    pub user: Option<TelegramUser>,
    pub is_in_telegram: bool,
    pub loading: bool,
}

fn get_path(value: &JsValue, path: &[&str]) -> Option<JsValue> {
    let mut current = value.clone();
    for key in path {
        current = Reflect::get(&current, &JsValue::from_str(key)).ok()?;
        if current.is_undefined() || current.is_null() {
            return None;
        }
    }
    Some(current)
}

fn call_method(target: &JsValue, name: &str) {
    if let Some(method) = get_path(target, &[name]) {
        if let Some(function) = method.dyn_ref::<js_sys::Function>() {
            let _ = function.call0(target);
        }
    }
}

fn parse_user(user: &JsValue) -> Option<TelegramUser> {
    let id = get_path(user, &["id"])?.as_f64()? as u64;
    let first_name = get_path(user, &["first_name"])
        .and_then(|v| v.as_string())
        .unwrap_or_default();
    let last_name = get_path(user, &["last_name"]).and_then(|v| v.as_string());
    let username = get_path(user, &["username"]).and_then(|v| v.as_string());

    Some(TelegramUser {
        id,
        first_name,
        last_name,
        username,
    })
}

/// Bridge to the host Telegram client: resolves the current user and expands
/// the viewport to full height. Outside Telegram (plain browser, tests) it
/// reports a mock user so every page keeps working.
#[hook]
pub fn use_telegram() -> TelegramState {
    let state = use_state(|| TelegramState {
        user: None,
        is_in_telegram: false,
        loading: true,
    });

    {
        let state = state.clone();
        use_effect_with((), move |_| {
            // Give the Telegram script a moment to attach to window
            let timeout = gloo_timers::callback::Timeout::new(100, move || {
                let webapp = window()
                    .map(JsValue::from)
                    .and_then(|w| get_path(&w, &["Telegram", "WebApp"]));

                match webapp {
                    Some(webapp) => {
                        call_method(&webapp, "ready");
                        call_method(&webapp, "expand");

                        let user = get_path(&webapp, &["initDataUnsafe", "user"])
                            .and_then(|u| parse_user(&u))
                            .unwrap_or_else(TelegramUser::mock);
                        log::info!("Telegram WebApp initialized for {}", user.display_name());

                        state.set(TelegramState {
                            user: Some(user),
                            is_in_telegram: true,
                            loading: false,
                        });
                    }
                    None => {
                        log::info!("Running outside Telegram WebApp - using mock user");
                        state.set(TelegramState {
                            user: Some(TelegramUser::mock()),
                            is_in_telegram: false,
                            loading: false,
                        });
                    }
                }
            });

            move || drop(timeout)
        });
    }

    (*state).clone()
}
