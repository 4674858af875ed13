use yew::prelude::*;
use yew_router::prelude::*;

use crate::base::Base;
use crate::components::auth::{LoginForm, RegisterForm};
use crate::hooks::get_token;
use crate::{styles, Route};

#[derive(Clone, PartialEq)]
pub enum AuthMode {
    Login,
    Register,
}

#[derive(Properties, PartialEq)]
pub struct Props {
    pub mode: AuthMode,
}

#[function_component(Auth)]
pub fn auth(props: &Props) -> Html {
    let navigator = use_navigator().expect("navigator not available");

    if get_token().is_some() {
        navigator.push(&Route::Dashboard);
        return html! {};
    }

    let on_success = {
        let navigator = navigator.clone();
        Callback::from(move |_| {
            navigator.push(&Route::Dashboard);
        })
    };

    html! {
        <Base>
            <div class={styles::CONTAINER}>
                <div class={styles::CONTAINER_SM}>
                    <div class={styles::CARD}>
                        {
                            match props.mode {
                                AuthMode::Login => html! {
                                    <>
                                        <LoginForm on_success={on_success} />
                                        <p class={classes!(styles::CARD_TEXT, "mt-4", "text-center")}>
                                            {"Don't have an account? "}
                                            <Link<Route> to={Route::Register} classes={styles::LINK}>
                                                {"Register"}
                                            </Link<Route>>
                                        </p>
                                    </>
                                },
                                AuthMode::Register => html! {
                                    <>
                                        <RegisterForm on_success={on_success} />
                                        <p class={classes!(styles::CARD_TEXT, "mt-4", "text-center")}>
                                            {"Already have an account? "}
                                            <Link<Route> to={Route::Login} classes={styles::LINK}>
                                                {"Login"}
                                            </Link<Route>>
                                        </p>
                                    </>
                                },
                            }
                        }
                    </div>
                </div>
            </div>
        </Base>
    }
}
