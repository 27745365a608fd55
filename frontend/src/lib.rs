pub mod components;
pub mod config;
pub mod hooks;
pub mod models;
pub mod pages;
pub mod styles;

use yew::prelude::*;
use yew_router::prelude::*;

use crate::pages::{game::Game, home::Home, lobby::Lobby, not_found::NotFound};

#[derive(Clone, Routable, PartialEq)]
pub enum Route {
    #[at("/")]
    Home,
    #[at("/lobby")]
    Lobby,
    #[at("/game")]
    Game,
    #[not_found]
    #[at("/404")]
    NotFound,
}

#[function_component(App)]
pub fn app() -> Html {
    html! {
        <BrowserRouter>
            <div class="min-h-screen w-full">
                <Switch<Route> render={switch} />
            </div>
        </BrowserRouter>
    }
}

pub fn switch(route: Route) -> Html {
    match route {
        Route::Home => html! { <Home /> },
        Route::Lobby => html! { <Lobby /> },
        Route::Game => html! { <Game /> },
        Route::NotFound => html! { <NotFound /> },
    }
}
