pub mod base;
pub mod styles;
pub mod hooks;
pub mod components;
pub mod pages;
pub mod config;

use yew::prelude::*;
use yew_router::prelude::*;
use crate::pages::{
    auth::{Auth, AuthMode},
    dashboard::Dashboard,
    home::Home,
    wordle::WordGamePage,
};

#[derive(Clone, Routable, PartialEq)]
pub enum Route {
    #[at("/")] Home,
    #[at("/login")] Login,
    #[at("/register")] Register,
    #[at("/dashboard")] Dashboard,
    #[at("/word-game")] WordGame,
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
        Route::Login => html! { <Auth mode={AuthMode::Login} /> },
        Route::Register => html! { <Auth mode={AuthMode::Register} /> },
        Route::Dashboard => html! { <Dashboard /> },
        Route::WordGame => html! { <WordGamePage /> },
    }
}
