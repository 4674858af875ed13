mod game_board;
mod keyboard;

use std::cell::RefCell;
use std::rc::Rc;

use gloo::events::{EventListener, EventListenerOptions};
use gloo_net::http::Request;
use shared::wordle::{
    GameError, GamePhase, GuessOutcome, GuessRequest, GuessResponse, Key, KeyOutcome,
    WordleGame, WordleSession,
};
use wasm_bindgen::JsCast;
use wasm_bindgen_futures::spawn_local;
use web_sys::KeyboardEvent;
use yew::prelude::*;
use yew_router::prelude::*;

use crate::base::Base;
use crate::config::get_api_base_url;
use crate::hooks::{get_token, MessageKind, TransientMessage};
use crate::{styles, Route};

use game_board::GameBoard;
use keyboard::Keyboard;

fn bearer(token: &str) -> String {
    format!("Bearer {}", token)
}

fn status_error(status: u16) -> GameError {
    match status {
        401 | 403 => GameError::NotAuthenticated,
        _ => GameError::NetworkFailure(format!("The game service answered with status {}", status)),
    }
}

fn network_error() -> GameError {
    GameError::NetworkFailure("Could not reach the game service".to_string())
}

/// `GET /state`: `Ok(Some)` for an open session, `Ok(None)` when the service
/// has none (204 or 404).
async fn fetch_session(token: &str) -> Result<Option<WordleSession>, GameError> {
    let url = format!("{}/api/v1/wordle/state", get_api_base_url());
    let response = Request::get(&url)
        .header("Authorization", &bearer(token))
        .send()
        .await
        .map_err(|_| network_error())?;
    match response.status() {
        200 => {
            let session = response
                .json::<WordleSession>()
                .await
                .map_err(|_| network_error())?;
            Ok(Some(session))
        }
        204 | 404 => Ok(None),
        status => Err(status_error(status)),
    }
}

async fn start_new_game(token: &str) -> Result<WordleSession, GameError> {
    let url = format!("{}/api/v1/wordle/new-game", get_api_base_url());
    let response = Request::post(&url)
        .header("Authorization", &bearer(token))
        .send()
        .await
        .map_err(|_| network_error())?;
    if !response.ok() {
        return Err(status_error(response.status()));
    }
    response.json::<WordleSession>().await.map_err(|_| network_error())
}

async fn send_guess(token: &str, word: &str) -> Result<GuessResponse, GameError> {
    let url = format!("{}/api/v1/wordle/guess", get_api_base_url());
    let request = Request::post(&url)
        .header("Authorization", &bearer(token))
        .json(&GuessRequest {
            word: word.to_string(),
        })
        .map_err(|_| network_error())?;
    let response = request.send().await.map_err(|_| network_error())?;
    if !response.ok() {
        return Err(status_error(response.status()));
    }
    response.json::<GuessResponse>().await.map_err(|_| network_error())
}

/// Resumes the open session, or asks the service for a fresh one.
async fn open_session(token: &str) -> Result<WordleSession, GameError> {
    match fetch_session(token).await? {
        Some(session) => Ok(session),
        None => start_new_game(token).await,
    }
}

type Engine = Rc<RefCell<Option<WordleGame>>>;

/// Re-reads the server-side session and adopts its attempt count.
async fn refresh_session(token: &str, engine: &Engine) -> Result<(), GameError> {
    if let Some(session) = fetch_session(token).await? {
        if let Some(game) = engine.borrow_mut().as_mut() {
            game.reconcile(session.attempts_remaining);
        }
    }
    Ok(())
}

/// Sends one guess, feeds the answer back into the game and then re-reads
/// the server-side attempt count so the local one can never drift.
async fn run_guess(
    word: String,
    engine: Engine,
    redraw: UseForceUpdateHandle,
    messages: TransientMessage,
) {
    let Some(token) = get_token() else {
        if let Some(game) = engine.borrow_mut().as_mut() {
            game.submission_failed();
        }
        messages.show(GameError::NotAuthenticated.to_string(), MessageKind::Error);
        redraw.force_update();
        return;
    };

    match send_guess(&token, &word).await {
        Ok(response) => {
            let outcome = engine
                .borrow_mut()
                .as_mut()
                .map(|game| game.apply_guess_response(&word, &response));
            match outcome {
                Some(GuessOutcome::Won { message }) => {
                    let text = message.unwrap_or_else(|| "You won!".to_string());
                    messages.show(text, MessageKind::Success);
                }
                Some(GuessOutcome::Scored { message }) => {
                    if let Some(text) = message {
                        messages.show(text, MessageKind::Info);
                    }
                }
                Some(GuessOutcome::Rejected(err)) => {
                    messages.show(err.to_string(), MessageKind::Error);
                }
                None => {}
            }
            if let Err(err) = refresh_session(&token, &engine).await {
                log::warn!("state refresh after guess failed: {}", err);
                messages.show(
                    "Could not re-read the game state; the attempt count may be stale"
                        .to_string(),
                    MessageKind::Warning,
                );
            }
        }
        Err(err) => {
            if let Some(game) = engine.borrow_mut().as_mut() {
                game.submission_failed();
            }
            messages.show(err.to_string(), MessageKind::Error);
            // The request may have reached the service even though the
            // answer was lost, so the server count is re-read here too.
            if let Err(refresh_err) = refresh_session(&token, &engine).await {
                log::warn!("state refresh after failed guess failed: {}", refresh_err);
                messages.show(
                    "Could not re-read the game state; the attempt count may be stale"
                        .to_string(),
                    MessageKind::Warning,
                );
            }
        }
    }
    redraw.force_update();
}

fn dispatch_key(
    key: Key,
    engine: &Engine,
    redraw: &UseForceUpdateHandle,
    messages: &TransientMessage,
) {
    let outcome = match engine.borrow_mut().as_mut() {
        Some(game) => game.handle_key(key),
        None => return,
    };
    match outcome {
        KeyOutcome::Edited => redraw.force_update(),
        KeyOutcome::Ignored => {}
        KeyOutcome::Rejected(err) => messages.show(err.to_string(), MessageKind::Error),
        KeyOutcome::Submit(word) => {
            redraw.force_update();
            spawn_local(run_guess(
                word,
                engine.clone(),
                redraw.clone(),
                messages.clone(),
            ));
        }
    }
}

#[function_component(WordGamePage)]
pub fn word_game_page() -> Html {
    let engine: Engine = use_mut_ref(|| None);
    let redraw = use_force_update();
    let messages = crate::hooks::use_transient_message();
    let load_error = use_state(|| None::<GameError>);

    {
        let engine = engine.clone();
        let redraw = redraw.clone();
        let load_error = load_error.clone();
        use_effect_with((), move |_| {
            match get_token() {
                None => load_error.set(Some(GameError::NotAuthenticated)),
                Some(token) => spawn_local(async move {
                    match open_session(&token).await {
                        Ok(session) => {
                            *engine.borrow_mut() =
                                Some(WordleGame::resume(session.attempts_remaining));
                            redraw.force_update();
                        }
                        Err(err) => load_error.set(Some(err)),
                    }
                }),
            }
            || ()
        });
    }

    let on_key = {
        let engine = engine.clone();
        let redraw = redraw.clone();
        let messages = messages.clone();
        Callback::from(move |key: Key| dispatch_key(key, &engine, &redraw, &messages))
    };

    // Physical keyboard input mirrors the on-screen one.
    {
        let engine = engine.clone();
        let redraw = redraw.clone();
        let messages = messages.clone();
        use_effect_with((), move |_| {
            let window = gloo::utils::window();
            let options = EventListenerOptions::enable_prevent_default();
            let listener = EventListener::new_with_options(&window, "keydown", options, move |event| {
                let Some(event) = event.dyn_ref::<KeyboardEvent>() else {
                    return;
                };
                if event.ctrl_key() || event.meta_key() || event.alt_key() {
                    return;
                }
                let pressed = event.key();
                let key = match pressed.as_str() {
                    "Enter" => Some(Key::Submit),
                    "Backspace" => Some(Key::Backspace),
                    _ => {
                        let mut chars = pressed.chars();
                        match (chars.next(), chars.next()) {
                            (Some(ch), None) if ch.is_alphabetic() => Some(Key::Letter(ch)),
                            _ => None,
                        }
                    }
                };
                if let Some(key) = key {
                    // Keeps Backspace from navigating and Enter from
                    // submitting any ambient form.
                    event.prevent_default();
                    dispatch_key(key, &engine, &redraw, &messages);
                }
            });
            move || drop(listener)
        });
    }

    let on_new_game = {
        let engine = engine.clone();
        let redraw = redraw.clone();
        let messages = messages.clone();
        Callback::from(move |_: MouseEvent| {
            let engine = engine.clone();
            let redraw = redraw.clone();
            let messages = messages.clone();
            spawn_local(async move {
                let Some(token) = get_token() else {
                    messages.show(GameError::NotAuthenticated.to_string(), MessageKind::Error);
                    return;
                };
                match start_new_game(&token).await {
                    Ok(session) => {
                        *engine.borrow_mut() =
                            Some(WordleGame::resume(session.attempts_remaining));
                        redraw.force_update();
                    }
                    Err(err) => messages.show(err.to_string(), MessageKind::Error),
                }
            });
        })
    };

    if let Some(err) = &*load_error {
        let body = match err {
            GameError::NotAuthenticated => html! {
                <>
                    <div class={styles::ALERT_WARNING}>{ err.to_string() }</div>
                    <Link<Route> to={Route::Login} classes={classes!(styles::BUTTON_PRIMARY, "mt-4")}>
                        {"Log in"}
                    </Link<Route>>
                </>
            },
            _ => html! { <div class={styles::ALERT_ERROR}>{ err.to_string() }</div> },
        };
        return html! {
            <Base>
                <div class={styles::CONTAINER}>
                    <div class={styles::CONTAINER_SM}>
                        <div class={styles::CARD}>{ body }</div>
                    </div>
                </div>
            </Base>
        };
    }

    // Snapshot the game so no borrow is held while rendering.
    let snapshot = engine.borrow().clone();

    let content = match snapshot {
        None => html! {
            <div class="flex justify-center py-12">
                <div class={styles::LOADING_SPINNER}></div>
            </div>
        },
        Some(game) => {
            let phase_banner = match game.phase() {
                GamePhase::Playing => html! {},
                GamePhase::Won => html! {
                    <div class={classes!(styles::ALERT_SUCCESS, "mb-4")}>{"You guessed it!"}</div>
                },
                GamePhase::Lost => html! {
                    <div class={classes!(styles::ALERT_ERROR, "mb-4")}>{"Out of attempts."}</div>
                },
            };
            html! {
                <>
                    <p class={classes!(styles::CARD_TEXT, "text-center", "mb-4")}>
                        { format!("Attempts remaining: {}", game.attempts_remaining()) }
                    </p>
                    { phase_banner }
                    <GameBoard board={game.board()} />
                    {
                        if game.is_submitting() {
                            html! {
                                <div class="flex justify-center mt-3">
                                    <div class={styles::LOADING_SPINNER}></div>
                                </div>
                            }
                        } else {
                            html! {}
                        }
                    }
                    <Keyboard letter_marks={game.letter_marks()} on_key={on_key} />
                    <div class="flex justify-center mt-6">
                        <button type="button" class={styles::BUTTON_SECONDARY} onclick={on_new_game}>
                            {"New game"}
                        </button>
                    </div>
                </>
            }
        }
    };

    let banner = messages.current.as_ref().map(|(text, kind)| {
        html! {
            <div class={classes!(TransientMessage::alert_class(*kind), "mb-4")}>{ text }</div>
        }
    });

    html! {
        <Base>
            <div class={styles::CONTAINER}>
                <div class={styles::CONTAINER_LG}>
                    <h1 class={classes!(styles::TEXT_H1, "text-center", "mb-6")}>{"Word game"}</h1>
                    { for banner }
                    { content }
                </div>
            </div>
        </Base>
    }
}
