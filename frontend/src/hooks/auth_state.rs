use shared::auth::AuthResponse;
use web_sys::window;
use yew::prelude::*;
use yew_router::prelude::*;

use crate::Route;

pub fn get_token() -> Option<String> {
    window()
        .and_then(|w| w.local_storage().ok().flatten())
        .and_then(|s| s.get_item("token").ok().flatten())
}

pub fn get_username() -> Option<String> {
    window()
        .and_then(|w| w.local_storage().ok().flatten())
        .and_then(|s| s.get_item("username").ok().flatten())
}

/// Persists a successful login/register answer.
pub fn store_session(auth: &AuthResponse) {
    if let Some(storage) = window().and_then(|w| w.local_storage().ok().flatten()) {
        let _ = storage.set_item("token", &auth.token);
        let _ = storage.set_item("username", &auth.username);
        let _ = storage.set_item("role", &auth.role);
        let _ = storage.set_item("user_id", &auth.user_id.to_string());
    }
}

/// Drops every stored credential. Pages that require a token (the dashboard
/// and the word game) bounce back to the login page on their next check, so
/// logging out also closes an open game.
pub fn clear_session() {
    if let Some(storage) = window().and_then(|w| w.local_storage().ok().flatten()) {
        for key in ["token", "username", "role", "user_id"] {
            let _ = storage.remove_item(key);
        }
    }
}

/// The logged-in username, or `None` without a stored token.
#[hook]
pub fn use_auth_state() -> Option<String> {
    let user = use_state(|| get_token().and(get_username()));

    {
        let user = user.clone();
        use_effect_with((), move |_| {
            user.set(get_token().and(get_username()));
            || ()
        });
    }

    (*user).clone()
}

/// Redirects to the login page when no token is stored, and keeps checking
/// periodically so an expired or externally cleared session ejects the user.
#[hook]
pub fn use_auth_check() {
    let navigator = use_navigator().expect("navigator not available");

    let check_auth = move || {
        if get_token().is_none() {
            navigator.push(&Route::Login);
        }
    };

    use_effect_with((), move |_| {
        check_auth();
        let interval = gloo_timers::callback::Interval::new(30_000, move || {
            check_auth();
        });
        move || drop(interval)
    });
}
