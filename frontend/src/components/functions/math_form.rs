use gloo_net::http::Request;
use shared::auth::ApiError;
use shared::tabulated::{validate_range, CreateByMathRequest, MathFunctionInfo};
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

/// Creates a tabulated function by sampling one of the math functions the
/// service knows about. The catalog is fetched once on mount.
#[function_component(MathFunctionForm)]
pub fn math_function_form() -> Html {
    let catalog = use_state(Vec::<MathFunctionInfo>::new);
    let name = use_state(String::new);
    let selected = use_state(String::new);
    let from_x = use_state(String::new);
    let to_x = use_state(String::new);
    let points_count = use_state(|| "100".to_string());
    let form = use_form_state();

    {
        let catalog = catalog.clone();
        let form = form.clone();
        use_effect_with((), move |_| {
            spawn_local(async move {
                let url = format!(
                    "{}/api/v1/functions/tabulated/math-functions",
                    get_api_base_url()
                );
                match Request::get(&url).send().await {
                    Ok(response) if response.ok() => {
                        match response.json::<Vec<MathFunctionInfo>>().await {
                            Ok(functions) => catalog.set(functions),
                            Err(_) => form
                                .handle_error
                                .emit("Failed to parse the function catalog".to_string()),
                        }
                    }
                    Ok(_) | Err(_) => form
                        .handle_error
                        .emit("Could not load the function catalog".to_string()),
                }
            });
            || ()
        });
    }

    let on_name = {
        let name = name.clone();
        Callback::from(move |e: InputEvent| name.set(input_value(&e)))
    };
    let on_from = {
        let from_x = from_x.clone();
        Callback::from(move |e: InputEvent| from_x.set(input_value(&e)))
    };
    let on_to = {
        let to_x = to_x.clone();
        Callback::from(move |e: InputEvent| to_x.set(input_value(&e)))
    };
    let on_count = {
        let points_count = points_count.clone();
        Callback::from(move |e: InputEvent| points_count.set(input_value(&e)))
    };
    let on_select = {
        let selected = selected.clone();
        Callback::from(move |e: Event| {
            let select: web_sys::HtmlSelectElement = e.target_unchecked_into();
            selected.set(select.value());
        })
    };

    let onsubmit = {
        let name = name.clone();
        let selected = selected.clone();
        let from_x = from_x.clone();
        let to_x = to_x.clone();
        let points_count = points_count.clone();
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
            if selected.is_empty() {
                form.handle_error.emit("Choose a function type".to_string());
                return;
            }
            let from = match from_x.parse::<f64>() {
                Ok(v) => v,
                Err(_) => {
                    form.handle_error.emit("fromX must be a number".to_string());
                    return;
                }
            };
            let to = match to_x.parse::<f64>() {
                Ok(v) => v,
                Err(_) => {
                    form.handle_error.emit("toX must be a number".to_string());
                    return;
                }
            };
            let count = match points_count.parse::<usize>() {
                Ok(v) => v,
                Err(_) => {
                    form.handle_error
                        .emit("Point count must be a whole number".to_string());
                    return;
                }
            };
            if let Err(msg) = validate_range(from, to, count) {
                form.handle_error.emit(msg);
                return;
            }

            let request = CreateByMathRequest {
                name: (*name).trim().to_string(),
                math_function_type: (*selected).clone(),
                from_x: from,
                to_x: to,
                points_count: count,
            };
            if let Err(errors) = request.validate() {
                form.handle_error.emit(first_error_message(&errors));
                return;
            }

            form.set_busy.emit(true);
            let handle_success = form.handle_success.clone();
            let handle_error = form.handle_error.clone();
            let name = name.clone();

            spawn_local(async move {
                let url = format!(
                    "{}/api/v1/functions/tabulated/by-math-function",
                    get_api_base_url()
                );
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
            <h3 class={styles::CARD_TITLE}>{"Function from a formula"}</h3>
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
                <label class={styles::TEXT_LABEL}>{"Function type"}</label>
                <select class={styles::INPUT} onchange={on_select}>
                    <option value="" selected={selected.is_empty()}>{"-- choose --"}</option>
                    {
                        for catalog.iter().map(|info| html! {
                            <option value={info.key.clone()} selected={*selected == info.key}>
                                { format!("{}: {}", info.key, info.description) }
                            </option>
                        })
                    }
                </select>
            </div>
            <div class="grid grid-cols-3 gap-3">
                <div>
                    <label class={styles::TEXT_LABEL}>{"From X"}</label>
                    <input class={styles::INPUT} type="text" value={(*from_x).clone()} oninput={on_from} />
                </div>
                <div>
                    <label class={styles::TEXT_LABEL}>{"To X"}</label>
                    <input class={styles::INPUT} type="text" value={(*to_x).clone()} oninput={on_to} />
                </div>
                <div>
                    <label class={styles::TEXT_LABEL}>{"Points"}</label>
                    <input class={styles::INPUT} type="text" value={(*points_count).clone()} oninput={on_count} />
                </div>
            </div>
            <button type="submit" class={styles::BUTTON_PRIMARY} disabled={form.busy}>
                { if form.busy { "Creating..." } else { "Create" } }
            </button>
        </form>
    }
}
