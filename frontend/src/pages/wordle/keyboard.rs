use std::collections::HashMap;

use shared::wordle::{FeedbackMark, Key};
use yew::prelude::*;

use crate::styles;

const ROWS: [&str; 3] = ["йцукенгшщзхъ", "фывапролджэ", "ячсмитьбю"];

#[derive(Properties, PartialEq)]
pub struct KeyboardProps {
    pub letter_marks: HashMap<char, FeedbackMark>,
    pub on_key: Callback<Key>,
}

fn key_class(mark: Option<&FeedbackMark>) -> Classes {
    let fill = match mark {
        Some(FeedbackMark::Correct) => styles::TILE_CORRECT,
        Some(FeedbackMark::Present) => styles::TILE_PRESENT,
        Some(FeedbackMark::Absent) => styles::TILE_ABSENT,
        None => styles::KEY_UNUSED,
    };
    classes!(styles::KEY_BUTTON, fill)
}

/// On-screen Cyrillic keyboard, colored by the best feedback seen per letter.
#[function_component(Keyboard)]
pub fn keyboard(props: &KeyboardProps) -> Html {
    let letter_button = |ch: char| {
        let on_key = props.on_key.clone();
        let upper = ch.to_uppercase().next().unwrap_or(ch);
        let onclick = Callback::from(move |_| on_key.emit(Key::Letter(upper)));
        html! {
            <button type="button" class={key_class(props.letter_marks.get(&upper))} {onclick}>
                { upper }
            </button>
        }
    };

    let enter = {
        let on_key = props.on_key.clone();
        let onclick = Callback::from(move |_| on_key.emit(Key::Submit));
        html! {
            <button type="button" class={key_class(None)} {onclick}>{"Enter"}</button>
        }
    };

    let backspace = {
        let on_key = props.on_key.clone();
        let onclick = Callback::from(move |_| on_key.emit(Key::Backspace));
        html! {
            <button type="button" class={key_class(None)} {onclick}>{"⌫"}</button>
        }
    };

    html! {
        <div class="flex flex-col items-center gap-1 mt-6">
            <div class="flex">{ for ROWS[0].chars().map(letter_button) }</div>
            <div class="flex">{ for ROWS[1].chars().map(letter_button) }</div>
            <div class="flex">
                { enter }
                { for ROWS[2].chars().map(letter_button) }
                { backspace }
            </div>
        </div>
    }
}
