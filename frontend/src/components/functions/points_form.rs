use gloo_net::http::Request;
use shared::auth::ApiError;
use shared::tabulated::{parse_number_list, validate_points, CreateByPointsRequest};
use shared::validation::first_error_message;
use validator::Validate;
use wasm_bindgen_futures::spawn_local;
use web_sys::{InputEvent, SubmitEvent};
use yew::prelude::*;

use crate::config::get_api_base_url;
use crate::hooks::{get_token, use_form_state};
use crate::styles;

fn input_value(e: &InputEvent) -> String {
    let input: web_sys::HtmlInputElement = e.target_unchecked_into();
    input.value()
}

/// Creates a tabulated function from explicit point lists. The X/Y fields
/// take comma-separated numbers; everything is checked client-side before
/// the request leaves the browser.
#[function_component(PointsFunctionForm)]
pub fn points_function_form() -> Html {
    let name = use_state(String::new);
    let x_text = use_state(String::new);
    let y_text = use_state(String::new);
    let form = use_form_state();

    let on_name = {
        let name = name.clone();
        Callback::from(move |e: InputEvent| name.set(input_value(&e)))
    };
    let on_x = {
        let x_text = x_text.clone();
        Callback::from(move |e: InputEvent| x_text.set(input_value(&e)))
    };
    let on_y = {
        let y_text = y_text.clone();
        Callback::from(move |e: InputEvent| y_text.set(input_value(&e)))
    };

    let onsubmit = {
        let name = name.clone();
        let x_text = x_text.clone();
        let y_text = y_text.clone();
        let form = form.clone();

        Callback::from(move |e: SubmitEvent| {
            e.prevent_default();

            let token = match get_token() {
                Some(token) => token,
                None => {
                    form.handle_error.emit("Please log in first".to_string());
                    return;
                }
            };

            let x_values = match parse_number_list(&x_text) {
                Ok(values) => values,
                Err(msg) => {
                    form.handle_error.emit(msg);
                    return;
                }
            };
            let y_values = match parse_number_list(&y_text) {
                Ok(values) => values,
                Err(msg) => {
                    form.handle_error.emit(msg);
                    return;
                }
            };
            if let Err(msg) = validate_points(&x_values, &y_values) {
                form.handle_error.emit(msg);
                return;
            }

            let request = CreateByPointsRequest {
                name: (*name).trim().to_string(),
                x_values,
                y_values,
            };
            if let Err(errors) = request.validate() {
                form.handle_error.emit(first_error_message(&errors));
                return;
            }

            form.set_busy.emit(true);
            let handle_success = form.handle_success.clone();
            let handle_error = form.handle_error.clone();
            let name = name.clone();
            let x_text = x_text.clone();
            let y_text = y_text.clone();

            spawn_local(async move {
                let url = format!("{}/api/v1/functions/tabulated/by-points", get_api_base_url());
                let built = Request::post(&url)
                    .header("Authorization", &format!("Bearer {}", token))
                    .json(&request);
                let request = match built {
                    Ok(request) => request,
                    Err(err) => {
                        handle_error.emit(format!("Failed to encode request: {}", err));
                        return;
                    }
                };
                match request.send().await {
                    Ok(response) if response.ok() => {
                        handle_success.emit("Function created".to_string());
                        name.set(String::new());
                        x_text.set(String::new());
                        y_text.set(String::new());
                    }
                    Ok(response) => {
                        let message = response
                            .json::<ApiError>()
                            .await
                            .map(|e| e.text("Could not create the function"))
                            .unwrap_or_else(|_| "Could not create the function".to_string());
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
            <h3 class={styles::CARD_TITLE}>{"Function from points"}</h3>
            if !form.error.is_empty() {
                <div class={styles::ALERT_ERROR}>{&form.error}</div>
            }
            if !form.success.is_empty() {
                <div class={styles::ALERT_SUCCESS}>{&form.success}</div>
            }
            <div>
                <label class={styles::TEXT_LABEL}>{"Name"}</label>
                <input class={styles::INPUT} type="text" value={(*name).clone()} oninput={on_name} />
            </div>
            <div>
                <label class={styles::TEXT_LABEL}>{"X values"}</label>
                <input class={styles::INPUT} type="text" value={(*x_text).clone()} oninput={on_x}
                    placeholder="1, 2, 3" />
                <p class={styles::TEXT_HINT}>{"Comma-separated, strictly increasing"}</p>
            </div>
            <div>
                <label class={styles::TEXT_LABEL}>{"Y values"}</label>
                <input class={styles::INPUT} type="text" value={(*y_text).clone()} oninput={on_y}
                    placeholder="1, 4, 9" />
                <p class={styles::TEXT_HINT}>{"Same number of values as X"}</p>
            </div>
            <button type="submit" class={styles::BUTTON_PRIMARY} disabled={form.busy}>
                { if form.busy { "Creating..." } else { "Create" } }
            </button>
        </form>
    }
}
