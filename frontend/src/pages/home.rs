use yew::prelude::*;
use yew_router::prelude::*;

use crate::base::Base;
use crate::hooks::use_auth_state;
use crate::{styles, Route};

#[function_component(Home)]
pub fn home() -> Html {
    let user = use_auth_state();

    html! {
        <Base>
            <div class={styles::CONTAINER}>
                <div class="max-w-3xl mx-auto py-16 text-center">
                    <h1 class={styles::TEXT_H1}>{"FuncLab"}</h1>
                    <p class={classes!(styles::TEXT_BODY, "mt-4")}>
                        {"Build tabulated math functions from points or formulas, \
                          and take a break with the word-guessing game."}
                    </p>
                    <div class="mt-8 flex justify-center space-x-4">
                        {
                            if user.is_some() {
                                html! {
                                    <>
                                        <Link<Route> to={Route::Dashboard} classes={styles::BUTTON_PRIMARY}>
                                            {"Open dashboard"}
                                        </Link<Route>>
                                        <Link<Route> to={Route::WordGame} classes={styles::BUTTON_SECONDARY}>
                                            {"Play the word game"}
                                        </Link<Route>>
                                    </>
                                }
                            } else {
                                html! {
                                    <>
                                        <Link<Route> to={Route::Login} classes={styles::BUTTON_PRIMARY}>
                                            {"Login"}
                                        </Link<Route>>
                                        <Link<Route> to={Route::Register} classes={styles::BUTTON_SECONDARY}>
                                            {"Register"}
                                        </Link<Route>>
                                    </>
                                }
                            }
                        }
                    </div>
                </div>
            </div>
        </Base>
    }
}
