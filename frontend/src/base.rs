use web_sys::{window, MouseEvent};
use yew::prelude::*;
use yew_router::prelude::*;

use crate::hooks::{clear_session, use_auth_state};
use crate::{styles, Route};

#[derive(Properties, PartialEq)]
pub struct BaseProps {
    pub children: Html,
}

fn apply_theme(dark_mode: bool) {
    if let Some(document) = window().and_then(|w| w.document()) {
        if let Some(html) = document.document_element() {
            html.set_class_name(if dark_mode { "dark" } else { "light" });
        }
    }
    if let Some(storage) = window().and_then(|w| w.local_storage().ok().flatten()) {
        let _ = storage.set_item("theme", if dark_mode { "dark" } else { "light" });
    }
}

/// Page chrome: nav bar with auth-aware links, theme toggle, and logout.
#[function_component(Base)]
pub fn base(props: &BaseProps) -> Html {
    let dark_mode = use_state(|| {
        window()
            .and_then(|w| w.local_storage().ok().flatten())
            .and_then(|s| s.get_item("theme").ok().flatten())
            .map_or(true, |theme| theme == "dark")
    });
    let navigator = use_navigator().expect("navigator not available");
    let user = use_auth_state();

    let toggle_theme = {
        let dark_mode = dark_mode.clone();
        Callback::from(move |e: MouseEvent| {
            e.prevent_default();
            let next = !*dark_mode;
            apply_theme(next);
            dark_mode.set(next);
        })
    };

    // Logging out clears the stored credentials and leaves for the login
    // page; any open game panel is torn down with the page it lived on.
    let handle_logout = {
        let navigator = navigator.clone();
        Callback::from(move |e: MouseEvent| {
            e.prevent_default();
            clear_session();
            navigator.push(&Route::Login);
        })
    };

    let theme_icon = if *dark_mode { "☀️" } else { "🌙" };

    html! {
        <div class={if *dark_mode { "dark min-h-screen bg-gray-900" } else { "min-h-screen bg-gray-50" }}>
            <nav class={styles::NAV}>
                <div class="w-full mx-auto px-4 sm:px-6 lg:px-8">
                    <div class="h-16 flex items-center justify-between">
                        <Link<Route> to={Route::Home} classes={styles::NAV_BRAND}>{"FuncLab"}</Link<Route>>
                        <div class={styles::NAV_ITEMS}>
                            {
                                if let Some(username) = &user {
                                    html! {
                                        <>
                                            <Link<Route> to={Route::Dashboard} classes={styles::NAV_LINK}>{"Dashboard"}</Link<Route>>
                                            <Link<Route> to={Route::WordGame} classes={styles::NAV_LINK}>{"Word Game"}</Link<Route>>
                                            <span class="text-sm font-medium text-gray-700 dark:text-gray-300">{username}</span>
                                            <button onclick={handle_logout} class={styles::BUTTON_DANGER}>{"Logout"}</button>
                                        </>
                                    }
                                } else {
                                    html! {
                                        <>
                                            <Link<Route> to={Route::Login} classes={styles::NAV_LINK}>{"Login"}</Link<Route>>
                                            <Link<Route> to={Route::Register} classes={styles::NAV_LINK}>{"Register"}</Link<Route>>
                                        </>
                                    }
                                }
                            }
                            <button onclick={toggle_theme} class={styles::BUTTON_ICON}>{theme_icon}</button>
                        </div>
                    </div>
                </div>
            </nav>
            <main class="pt-16">{props.children.clone()}</main>
        </div>
    }
}
