use shared::wordle::{Cell, FeedbackMark};
use yew::prelude::*;

use crate::styles;

#[derive(Properties, PartialEq)]
pub struct GameBoardProps {
    pub board: Vec<Vec<Cell>>,
}

fn tile_class(cell: &Cell) -> Classes {
    let fill = match cell {
        Cell::Empty => styles::TILE_EMPTY,
        Cell::Pending(_) => styles::TILE_PENDING,
        Cell::Scored(_, FeedbackMark::Correct) => styles::TILE_CORRECT,
        Cell::Scored(_, FeedbackMark::Present) => styles::TILE_PRESENT,
        Cell::Scored(_, FeedbackMark::Absent) => styles::TILE_ABSENT,
    };
    classes!(styles::TILE, fill)
}

fn tile_text(cell: &Cell) -> String {
    match cell {
        Cell::Empty => String::new(),
        Cell::Pending(ch) | Cell::Scored(ch, _) => ch.to_string(),
    }
}

/// The 6x5 letter grid. Purely presentational; every cell comes from the
/// game's `board()` projection.
#[function_component(GameBoard)]
pub fn game_board(props: &GameBoardProps) -> Html {
    html! {
        <div class="flex flex-col items-center gap-1 sm:gap-2">
            { for props.board.iter().map(|row| html! {
                <div class="flex">
                    { for row.iter().map(|cell| html! {
                        <div class={tile_class(cell)}>{ tile_text(cell) }</div>
                    }) }
                </div>
            }) }
        </div>
    }
}
