use gloo_net::http::Request;
use wasm_bindgen_futures::spawn_local;
use yew::prelude::*;

use crate::config::proxy_url;

#[derive(Clone, PartialEq)]
pub struct CoinsState {
    pub coins: Option<i64>,
    pub loading: bool,
    pub refresh: Callback<()>,
}

// Backends disagree on the shape; accept a bare number or the common keys
fn parse_coins(data: &serde_json::Value) -> Option<i64> {
    if let Some(n) = data.as_i64() {
        return Some(n);
    }
    for key in ["coins", "amount", "value"] {
        if let Some(n) = data.get(key).and_then(|v| v.as_i64()) {
            return Some(n);
        }
    }
    None
}

async fn fetch_coins() -> Option<i64> {
    let response = Request::get(&proxy_url("User/GetCurrentCoins"))
        .send()
        .await
        .ok()?;
    if !response.ok() {
        log::warn!("coins fetch failed with status {}", response.status());
        return None;
    }
    let data = response.json::<serde_json::Value>().await.ok()?;
    parse_coins(&data)
}

/// Current coin balance fetched through the backend proxy; `None` when the
/// relay or backend is unavailable.
#[hook]
pub fn use_coins() -> CoinsState {
    let coins = use_state(|| None::<i64>);
    let loading = use_state(|| true);

    {
        let coins = coins.clone();
        let loading = loading.clone();
        use_effect_with((), move |_| {
            spawn_local(async move {
                coins.set(fetch_coins().await);
                loading.set(false);
            });
            || ()
        });
    }

    let refresh = {
        let coins = coins.clone();
        let loading = loading.clone();
        Callback::from(move |_| {
            let coins = coins.clone();
            let loading = loading.clone();
            loading.set(true);
            spawn_local(async move {
                coins.set(fetch_coins().await);
                loading.set(false);
            });
        })
    };

    CoinsState {
        coins: *coins,
        loading: *loading,
        refresh,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_parse_coins_accepts_bare_number() {
        assert_eq!(parse_coins(&json!(42)), Some(42));
    }

    #[test]
    fn test_parse_coins_accepts_common_keys() {
        assert_eq!(parse_coins(&json!({ "coins": 7 })), Some(7));
        assert_eq!(parse_coins(&json!({ "amount": 9 })), Some(9));
        assert_eq!(parse_coins(&json!({ "value": 3 })), Some(3));
    }

    #[test]
    fn test_parse_coins_rejects_unknown_shapes() {
        assert_eq!(parse_coins(&json!({ "balance": 1 })), None);
        assert_eq!(parse_coins(&json!("12")), None);
    }
}
