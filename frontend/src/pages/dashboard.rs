use gloo_net::http::Request;
use shared::auth::UserProfile;
use wasm_bindgen_futures::spawn_local;
use yew::prelude::*;
use yew_router::prelude::*;

use crate::base::Base;
use crate::components::functions::{MathFunctionForm, PointsFunctionForm};
use crate::config::get_api_base_url;
use crate::hooks::{get_token, use_auth_check};
use crate::{styles, Route};

/// The signed-in landing page: account info, the two function creation
/// forms, and the entry card for the word game.
#[function_component(Dashboard)]
pub fn dashboard() -> Html {
    use_auth_check();

    let profile = use_state(|| None::<UserProfile>);
    let profile_error = use_state(|| None::<String>);

    {
        let profile = profile.clone();
        let profile_error = profile_error.clone();
        use_effect_with((), move |_| {
            let Some(token) = get_token() else {
                return;
            };
            spawn_local(async move {
                let url = format!("{}/api/v1/users/me", get_api_base_url());
                match Request::get(&url)
                    .header("Authorization", &format!("Bearer {}", token))
                    .send()
                    .await
                {
                    Ok(response) if response.ok() => match response.json::<UserProfile>().await {
                        Ok(user) => profile.set(Some(user)),
                        Err(_) => profile_error.set(Some("Failed to parse profile".to_string())),
                    },
                    Ok(response) => profile_error.set(Some(format!(
                        "Could not load profile (status {})",
                        response.status()
                    ))),
                    Err(_) => profile_error.set(Some("Network error loading profile".to_string())),
                }
            });
        });
    }

    html! {
        <Base>
            <div class={styles::CONTAINER}>
                <div class={styles::CONTAINER_LG}>
                    <h1 class={styles::TEXT_H1}>{"Dashboard"}</h1>

                    <div class="grid grid-cols-1 md:grid-cols-2 gap-6 mt-6">
                        <div class={styles::CARD}>
                            <h3 class={styles::CARD_TITLE}>{"Account"}</h3>
                            {
                                if let Some(user) = &*profile {
                                    html! {
                                        <dl class={classes!(styles::CARD_TEXT, "mt-3", "space-y-1")}>
                                            <div>{"ID: "}{user.id}</div>
                                            <div>{"Username: "}{&user.username}</div>
                                            <div>{"Role: "}{&user.role}</div>
                                        </dl>
                                    }
                                } else if let Some(err) = &*profile_error {
                                    html! { <div class={classes!(styles::ALERT_ERROR, "mt-3")}>{err}</div> }
                                } else {
                                    html! {
                                        <div class="flex justify-center py-4">
                                            <div class={styles::LOADING_SPINNER}></div>
                                        </div>
                                    }
                                }
                            }
                        </div>

                        <div class={styles::CARD}>
                            <h3 class={styles::CARD_TITLE}>{"Word game"}</h3>
                            <p class={classes!(styles::CARD_TEXT, "mt-3")}>
                                {"Guess a 5-letter word in 6 tries. Your puzzle waits for you on the server."}
                            </p>
                            <Link<Route> to={Route::WordGame} classes={classes!(styles::BUTTON_PRIMARY, "mt-4")}>
                                {"Play"}
                            </Link<Route>>
                        </div>

                        <div class={styles::CARD}>
                            <PointsFunctionForm />
                        </div>

                        <div class={styles::CARD}>
                            <MathFunctionForm />
                        </div>
                    </div>
                </div>
            </div>
        </Base>
    }
}
