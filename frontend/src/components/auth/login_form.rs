use gloo_net::http::Request;
use shared::auth::{ApiError, AuthResponse, LoginRequest};
use shared::validation::first_error_message;
use validator::Validate;
use wasm_bindgen_futures::spawn_local;
use web_sys::{InputEvent, SubmitEvent};
use yew::prelude::*;

use crate::config::get_api_base_url;
use crate::hooks::{store_session, use_form_state};
use crate::styles;

#[derive(Properties, PartialEq)]
pub struct LoginFormProps {
    pub on_success: Callback<()>,
}

#[function_component(LoginForm)]
pub fn login_form(props: &LoginFormProps) -> Html {
    let username = use_state(String::new);
    let password = use_state(String::new);
    let form = use_form_state();

    let on_username = {
        let username = username.clone();
        Callback::from(move |e: InputEvent| {
            let input: web_sys::HtmlInputElement = e.target_unchecked_into();
            username.set(input.value());
        })
    };

    let on_password = {
        let password = password.clone();
        Callback::from(move |e: InputEvent| {
            let input: web_sys::HtmlInputElement = e.target_unchecked_into();
            password.set(input.value());
        })
    };

    let onsubmit = {
        let username = username.clone();
        let password = password.clone();
        let form = form.clone();
        let on_success = props.on_success.clone();

        Callback::from(move |e: SubmitEvent| {
            e.prevent_default();

            let request = LoginRequest {
                username: (*username).clone(),
                password: (*password).clone(),
            };
            if let Err(errors) = request.validate() {
                form.handle_error.emit(first_error_message(&errors));
                return;
            }

            form.set_busy.emit(true);
            let handle_success = form.handle_success.clone();
            let handle_error = form.handle_error.clone();
            let on_success = on_success.clone();

            spawn_local(async move {
                let built = Request::post(&format!("{}/api/auth/login", get_api_base_url()))
                    .json(&request);
                let request = match built {
                    Ok(request) => request,
                    Err(err) => {
                        handle_error.emit(format!("Failed to encode request: {}", err));
                        return;
                    }
                };
                match request.send().await {
                    Ok(response) if response.ok() => match response.json::<AuthResponse>().await {
                        Ok(auth) => {
                            store_session(&auth);
                            handle_success.emit(format!("Welcome, {}!", auth.username));
                            on_success.emit(());
                        }
                        Err(_) => handle_error.emit("Failed to parse login response".to_string()),
                    },
                    Ok(response) => {
                        let message = response
                            .json::<ApiError>()
                            .await
                            .map(|e| e.text("Login failed"))
                            .unwrap_or_else(|_| "Login failed".to_string());
                        handle_error.emit(message);
                    }
                    Err(_) => {
                        handle_error.emit("Network error. Please check your connection.".to_string())
                    }
                }
            });
        })
    };

    html! {
        <form {onsubmit} class={styles::FORM}>
            <h2 class={styles::TEXT_H2}>{"Login"}</h2>
            if !form.error.is_empty() {
                <div class={styles::ALERT_ERROR}>{&form.error}</div>
            }
            if !form.success.is_empty() {
                <div class={styles::ALERT_SUCCESS}>{&form.success}</div>
            }
            <div>
                <label class={styles::TEXT_LABEL}>{"Username"}</label>
                <input
                    class={styles::INPUT}
                    type="text"
                    value={(*username).clone()}
                    oninput={on_username}
                    placeholder="username"
                />
            </div>
            <div>
                <label class={styles::TEXT_LABEL}>{"Password"}</label>
                <input
                    class={styles::INPUT}
                    type="password"
                    value={(*password).clone()}
                    oninput={on_password}
                />
            </div>
            <button type="submit" class={classes!(styles::BUTTON_PRIMARY, "w-full")} disabled={form.busy}>
                { if form.busy { "Logging in..." } else { "Login" } }
            </button>
        </form>
    }
}
