use serde::{Serialize, Deserialize};
use std::collections::HashMap;
use std::fmt;

/// Every puzzle word is exactly five letters long.
pub const WORD_LENGTH: usize = 5;
/// A fresh puzzle allows six guesses.
pub const MAX_ATTEMPTS: u32 = 6;

pub const MSG_ENTER_FIVE_LETTERS: &str = "Enter 5 letters";
pub const MSG_GUESS_IN_FLIGHT: &str = "Still checking your previous guess";
pub const MSG_WORD_REJECTED: &str = "The service did not accept that word";

/// Per-letter judgment for one guess position. Wire tags follow the
/// service's JSON ("green" / "yellow" / "gray").
#[derive(Debug, Serialize, Deserialize, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FeedbackMark {
    #[serde(rename = "green")]
    Correct,
    #[serde(rename = "yellow")]
    Present,
    #[serde(rename = "gray")]
    Absent,
}

impl FeedbackMark {
    // Keyboard coloring keeps the strongest mark seen for a letter.
    fn priority(self) -> u8 {
        match self {
            FeedbackMark::Correct => 2,
            FeedbackMark::Present => 1,
            FeedbackMark::Absent => 0,
        }
    }
}

/// Body of `POST /api/v1/wordle/new-game` and `GET /api/v1/wordle/state`.
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
pub struct WordleSession {
    #[serde(rename = "attemptsRemaining")]
    pub attempts_remaining: u32,
}

#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
pub struct GuessRequest {
    pub word: String,
}

/// Body of `POST /api/v1/wordle/guess`. A missing `status` means the
/// service rejected the word (not in its dictionary) and consumed no attempt.
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
pub struct GuessResponse {
    #[serde(default)]
    pub won: bool,
    #[serde(default)]
    pub message: Option<String>,
    #[serde(default)]
    pub status: Option<Vec<FeedbackMark>>,
}

/// One submitted word with its positional feedback. Immutable once appended
/// to the guess history.
#[derive(Debug, Clone, PartialEq)]
pub struct Guess {
    word: String,
    feedback: Vec<FeedbackMark>,
}

impl Guess {
    pub fn word(&self) -> &str {
        &self.word
    }

    pub fn feedback(&self) -> &[FeedbackMark] {
        &self.feedback
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GamePhase {
    Playing,
    Won,
    Lost,
}

/// Everything that can go wrong in the game subsystem. None of these are
/// fatal; each carries the message shown to the user.
#[derive(Debug, Clone, PartialEq)]
pub enum GameError {
    NotAuthenticated,
    Validation(String),
    ServiceRejected(String),
    NetworkFailure(String),
}

impl fmt::Display for GameError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            GameError::NotAuthenticated => write!(f, "Please log in to play the word game"),
            GameError::Validation(msg)
            | GameError::ServiceRejected(msg)
            | GameError::NetworkFailure(msg) => write!(f, "{}", msg),
        }
    }
}

impl std::error::Error for GameError {}

/// Logical key presses fed to the game, from the on-screen keyboard or a
/// physical keydown listener.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Key {
    Letter(char),
    Backspace,
    Submit,
}

/// What a key press did to the game.
#[derive(Debug, Clone, PartialEq)]
pub enum KeyOutcome {
    /// Pending input changed; re-render.
    Edited,
    /// Nothing happened (unknown key, full row, game over).
    Ignored,
    /// This word should be sent to the service.
    Submit(String),
    /// Local validation failed; no network call was made.
    Rejected(GameError),
}

/// Result of applying a guess response from the service.
#[derive(Debug, Clone, PartialEq)]
pub enum GuessOutcome {
    Won { message: Option<String> },
    Scored { message: Option<String> },
    Rejected(GameError),
}

/// One cell of the 6x5 board projection.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Cell {
    Empty,
    Pending(char),
    Scored(char, FeedbackMark),
}

/// Client-side state machine for one word-guessing session.
///
/// The engine never talks to the network itself: `handle_key` hands back the
/// word to submit, and the caller feeds the service's answer into
/// `apply_guess_response` / `reconcile`. That keeps every transition
/// observable in plain unit tests. The service stays authoritative for the
/// attempt count; the local value is overwritten after every round trip.
#[derive(Debug, Clone, PartialEq)]
pub struct WordleGame {
    guesses: Vec<Guess>,
    pending: Vec<char>,
    attempts_remaining: u32,
    phase: GamePhase,
    in_flight: bool,
}

impl WordleGame {
    /// A fresh puzzle with all six attempts available.
    pub fn new() -> Self {
        Self::resume(MAX_ATTEMPTS)
    }

    /// Reopens a session the service already knows about. The guess grid is
    /// client-side only, so a resumed game starts with an empty grid but the
    /// service-reported attempt count.
    pub fn resume(attempts_remaining: u32) -> Self {
        Self {
            guesses: Vec::new(),
            pending: Vec::new(),
            attempts_remaining,
            phase: if attempts_remaining == 0 { GamePhase::Lost } else { GamePhase::Playing },
            in_flight: false,
        }
    }

    pub fn guesses(&self) -> &[Guess] {
        &self.guesses
    }

    pub fn pending(&self) -> &[char] {
        &self.pending
    }

    pub fn attempts_remaining(&self) -> u32 {
        self.attempts_remaining
    }

    pub fn phase(&self) -> GamePhase {
        self.phase
    }

    pub fn is_over(&self) -> bool {
        self.phase != GamePhase::Playing
    }

    /// True while a submission is waiting for the service to answer.
    pub fn is_submitting(&self) -> bool {
        self.in_flight
    }

    /// Applies one key press. No-op once the game is over. Letters are still
    /// accepted while a submission is in flight, but only one submission may
    /// be in flight at a time.
    pub fn handle_key(&mut self, key: Key) -> KeyOutcome {
        if self.is_over() {
            return KeyOutcome::Ignored;
        }
        match key {
            Key::Backspace => {
                if self.pending.pop().is_some() {
                    KeyOutcome::Edited
                } else {
                    KeyOutcome::Ignored
                }
            }
            Key::Letter(ch) => {
                if !ch.is_alphabetic() || self.pending.len() >= WORD_LENGTH {
                    return KeyOutcome::Ignored;
                }
                let upper = ch.to_uppercase().next().unwrap_or(ch);
                self.pending.push(upper);
                KeyOutcome::Edited
            }
            Key::Submit => {
                if self.in_flight {
                    return KeyOutcome::Rejected(GameError::Validation(
                        MSG_GUESS_IN_FLIGHT.to_string(),
                    ));
                }
                if self.pending.len() != WORD_LENGTH {
                    return KeyOutcome::Rejected(GameError::Validation(
                        MSG_ENTER_FIVE_LETTERS.to_string(),
                    ));
                }
                let word: String = self.pending.iter().collect();
                // Resubmitting a word the service already scored would only
                // burn an attempt; catch it before the round trip.
                if self.guesses.iter().any(|g| g.word == word) {
                    return KeyOutcome::Rejected(GameError::Validation(format!(
                        "You already tried \"{}\"",
                        word
                    )));
                }
                self.in_flight = true;
                KeyOutcome::Submit(word)
            }
        }
    }

    /// Folds the service's answer for `word` into the game. The caller should
    /// re-fetch the session state afterwards and call [`reconcile`](Self::reconcile)
    /// regardless of the outcome.
    pub fn apply_guess_response(&mut self, word: &str, response: &GuessResponse) -> GuessOutcome {
        self.in_flight = false;
        let status = match &response.status {
            Some(status) => status.clone(),
            None => {
                // Word rejected by the service: no attempt consumed, the
                // typed word stays in place for the user to fix.
                let msg = response
                    .message
                    .clone()
                    .unwrap_or_else(|| MSG_WORD_REJECTED.to_string());
                return GuessOutcome::Rejected(GameError::ServiceRejected(msg));
            }
        };
        self.guesses.push(Guess {
            word: word.to_string(),
            feedback: status,
        });
        self.attempts_remaining = self.attempts_remaining.saturating_sub(1);
        self.pending.clear();
        let message = response.message.clone().filter(|m| !m.is_empty());
        if response.won {
            self.phase = GamePhase::Won;
            GuessOutcome::Won { message }
        } else {
            if self.attempts_remaining == 0 {
                self.phase = GamePhase::Lost;
            }
            GuessOutcome::Scored { message }
        }
    }

    /// Adopts the attempt count the service reports. The service is the
    /// source of truth; a disagreement is logged and overwritten.
    pub fn reconcile(&mut self, attempts_remaining: u32) {
        if attempts_remaining != self.attempts_remaining {
            log::debug!(
                "attempt count desync: client {}, service {}",
                self.attempts_remaining,
                attempts_remaining
            );
            self.attempts_remaining = attempts_remaining;
        }
        if self.attempts_remaining == 0 && self.phase == GamePhase::Playing {
            self.phase = GamePhase::Lost;
        }
    }

    /// Releases the submission guard after a network failure. Pending input
    /// is kept so the user can simply resubmit.
    pub fn submission_failed(&mut self) {
        self.in_flight = false;
    }

    /// Pure projection of the game onto a 6x5 grid: scored rows first, then
    /// the row being typed, then empty cells.
    pub fn board(&self) -> Vec<Vec<Cell>> {
        (0..MAX_ATTEMPTS as usize)
            .map(|row| {
                (0..WORD_LENGTH)
                    .map(|col| {
                        if let Some(guess) = self.guesses.get(row) {
                            let ch = guess.word.chars().nth(col).unwrap_or(' ');
                            let mark =
                                guess.feedback.get(col).copied().unwrap_or(FeedbackMark::Absent);
                            Cell::Scored(ch, mark)
                        } else if row == self.guesses.len() {
                            match self.pending.get(col) {
                                Some(&ch) => Cell::Pending(ch),
                                None => Cell::Empty,
                            }
                        } else {
                            Cell::Empty
                        }
                    })
                    .collect()
            })
            .collect()
    }

    /// Best mark seen so far for each guessed letter, for keyboard coloring.
    pub fn letter_marks(&self) -> HashMap<char, FeedbackMark> {
        let mut marks: HashMap<char, FeedbackMark> = HashMap::new();
        for guess in &self.guesses {
            for (ch, &mark) in guess.word.chars().zip(guess.feedback.iter()) {
                let entry = marks.entry(ch).or_insert(mark);
                if mark.priority() > entry.priority() {
                    *entry = mark;
                }
            }
        }
        marks
    }
}

impl Default for WordleGame {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn type_word(game: &mut WordleGame, word: &str) {
        for ch in word.chars() {
            game.handle_key(Key::Letter(ch));
        }
    }

    fn submit(game: &mut WordleGame, word: &str) -> String {
        type_word(game, word);
        match game.handle_key(Key::Submit) {
            KeyOutcome::Submit(w) => w,
            other => panic!("expected submission, got {:?}", other),
        }
    }

    fn wrong_response() -> GuessResponse {
        GuessResponse {
            won: false,
            message: Some(String::new()),
            status: Some(vec![FeedbackMark::Absent; WORD_LENGTH]),
        }
    }

    #[test]
    fn letters_are_uppercased_and_capped_at_five() {
        let mut game = WordleGame::new();
        type_word(&mut game, "слово");
        assert_eq!(game.pending(), &['С', 'Л', 'О', 'В', 'О']);
        assert_eq!(game.handle_key(Key::Letter('а')), KeyOutcome::Ignored);
        assert_eq!(game.pending().len(), WORD_LENGTH);
    }

    #[test]
    fn non_alphabetic_keys_never_change_pending() {
        let mut game = WordleGame::new();
        type_word(&mut game, "КО");
        for ch in ['1', ' ', '!', '.', '-'] {
            assert_eq!(game.handle_key(Key::Letter(ch)), KeyOutcome::Ignored);
        }
        assert_eq!(game.pending(), &['К', 'О']);
    }

    #[test]
    fn backspace_pops_last_letter() {
        let mut game = WordleGame::new();
        type_word(&mut game, "КОТ");
        assert_eq!(game.handle_key(Key::Backspace), KeyOutcome::Edited);
        assert_eq!(game.pending(), &['К', 'О']);
        game.handle_key(Key::Backspace);
        game.handle_key(Key::Backspace);
        assert_eq!(game.handle_key(Key::Backspace), KeyOutcome::Ignored);
    }

    #[test]
    fn short_submit_is_rejected_without_touching_pending() {
        let mut game = WordleGame::new();
        type_word(&mut game, "КОТ");
        let outcome = game.handle_key(Key::Submit);
        assert_eq!(
            outcome,
            KeyOutcome::Rejected(GameError::Validation(MSG_ENTER_FIVE_LETTERS.to_string()))
        );
        assert_eq!(game.pending(), &['К', 'О', 'Т']);
        assert!(!game.is_submitting());
    }

    #[test]
    fn duplicate_word_is_rejected_locally() {
        let mut game = WordleGame::new();
        let word = submit(&mut game, "МЕТРО");
        game.apply_guess_response(&word, &wrong_response());
        assert_eq!(game.guesses().len(), 1);

        type_word(&mut game, "метро");
        match game.handle_key(Key::Submit) {
            KeyOutcome::Rejected(GameError::Validation(msg)) => {
                assert!(msg.contains("МЕТРО"));
            }
            other => panic!("expected local rejection, got {:?}", other),
        }
        // No submission started, no second guess recorded.
        assert!(!game.is_submitting());
        assert_eq!(game.guesses().len(), 1);
    }

    #[test]
    fn second_submit_while_in_flight_is_rejected() {
        let mut game = WordleGame::new();
        submit(&mut game, "МЕТРО");
        assert!(game.is_submitting());
        // Letters still land in pending while the request is out.
        assert_eq!(game.handle_key(Key::Letter('а')), KeyOutcome::Edited);
        assert_eq!(
            game.handle_key(Key::Submit),
            KeyOutcome::Rejected(GameError::Validation(MSG_GUESS_IN_FLIGHT.to_string()))
        );
    }

    #[test]
    fn network_failure_keeps_pending_and_allows_retry() {
        let mut game = WordleGame::new();
        let word = submit(&mut game, "МЕТРО");
        game.submission_failed();
        assert!(!game.is_submitting());
        assert_eq!(game.guesses().len(), 0);
        // The same word may be resubmitted as-is.
        match game.handle_key(Key::Submit) {
            KeyOutcome::Submit(w) => assert_eq!(w, word),
            other => panic!("expected resubmission, got {:?}", other),
        }
    }

    #[test]
    fn refresh_after_failed_submission_recovers_a_lost_decrement() {
        let mut game = WordleGame::new();
        submit(&mut game, "МЕТРО");
        // The request reached the service but the answer was lost: the
        // server has decremented, the client has not.
        game.submission_failed();
        game.reconcile(MAX_ATTEMPTS - 1);
        assert_eq!(game.attempts_remaining(), MAX_ATTEMPTS - 1);
        assert_eq!(game.pending(), &['М', 'Е', 'Т', 'Р', 'О']);
        assert!(!game.is_submitting());
        assert_eq!(game.phase(), GamePhase::Playing);
    }

    #[test]
    fn win_scenario_with_cyrillic_word() {
        let mut game = WordleGame::new();
        let word = submit(&mut game, "СЛОВО");
        let response = GuessResponse {
            won: true,
            message: Some("Победа!".to_string()),
            status: Some(vec![FeedbackMark::Correct; WORD_LENGTH]),
        };
        let outcome = game.apply_guess_response(&word, &response);
        assert_eq!(
            outcome,
            GuessOutcome::Won { message: Some("Победа!".to_string()) }
        );
        assert!(game.is_over());
        assert_eq!(game.phase(), GamePhase::Won);
        assert_eq!(game.guesses().len(), 1);
        assert_eq!(game.guesses()[0].word(), "СЛОВО");
    }

    #[test]
    fn keys_are_ignored_after_game_over() {
        let mut game = WordleGame::new();
        let word = submit(&mut game, "СЛОВО");
        let response = GuessResponse {
            won: true,
            message: None,
            status: Some(vec![FeedbackMark::Correct; WORD_LENGTH]),
        };
        game.apply_guess_response(&word, &response);
        assert_eq!(game.handle_key(Key::Letter('а')), KeyOutcome::Ignored);
        assert_eq!(game.handle_key(Key::Backspace), KeyOutcome::Ignored);
        assert_eq!(game.handle_key(Key::Submit), KeyOutcome::Ignored);
    }

    #[test]
    fn attempts_plus_guesses_stay_at_six_after_each_round_trip() {
        let mut game = WordleGame::new();
        let words = ["МЕТРО", "ШКОЛА", "ТОЧКА", "ЗЕМЛЯ", "РУЧКА"];
        for (i, w) in words.iter().enumerate() {
            let word = submit(&mut game, w);
            game.apply_guess_response(&word, &wrong_response());
            game.reconcile(MAX_ATTEMPTS - (i as u32 + 1));
            assert_eq!(
                game.guesses().len() as u32 + game.attempts_remaining(),
                MAX_ATTEMPTS
            );
        }
        assert_eq!(game.phase(), GamePhase::Playing);
    }

    #[test]
    fn sixth_losing_guess_ends_the_game_with_the_target_disclosed() {
        let mut game = WordleGame::new();
        for w in ["МЕТРО", "ШКОЛА", "ТОЧКА", "ЗЕМЛЯ", "РУЧКА"] {
            let word = submit(&mut game, w);
            game.apply_guess_response(&word, &wrong_response());
        }
        let word = submit(&mut game, "ГОРОД");
        let response = GuessResponse {
            won: false,
            message: Some("Игра окончена! Слово: СЛОВО".to_string()),
            status: Some(vec![FeedbackMark::Absent; WORD_LENGTH]),
        };
        let outcome = game.apply_guess_response(&word, &response);
        match outcome {
            GuessOutcome::Scored { message: Some(msg) } => assert!(msg.contains("СЛОВО")),
            other => panic!("expected scored outcome with message, got {:?}", other),
        }
        game.reconcile(0);
        assert_eq!(game.phase(), GamePhase::Lost);
        assert_eq!(game.attempts_remaining(), 0);
    }

    #[test]
    fn service_rejection_preserves_pending_and_guesses() {
        let mut game = WordleGame::new();
        let word = submit(&mut game, "ЙЙЙЙЙ");
        let response = GuessResponse {
            won: false,
            message: Some("Слово не в словаре!".to_string()),
            status: None,
        };
        let outcome = game.apply_guess_response(&word, &response);
        assert_eq!(
            outcome,
            GuessOutcome::Rejected(GameError::ServiceRejected(
                "Слово не в словаре!".to_string()
            ))
        );
        assert_eq!(game.guesses().len(), 0);
        assert_eq!(game.pending(), &['Й', 'Й', 'Й', 'Й', 'Й']);
        assert_eq!(game.attempts_remaining(), MAX_ATTEMPTS);
        assert!(!game.is_submitting());
    }

    #[test]
    fn resume_adopts_the_service_attempt_count() {
        let game = WordleGame::resume(4);
        assert_eq!(game.attempts_remaining(), 4);
        assert_eq!(game.phase(), GamePhase::Playing);
        assert!(game.guesses().is_empty());

        let exhausted = WordleGame::resume(0);
        assert!(exhausted.is_over());
    }

    #[test]
    fn reconcile_flips_to_lost_at_zero() {
        let mut game = WordleGame::new();
        game.reconcile(0);
        assert_eq!(game.phase(), GamePhase::Lost);
    }

    #[test]
    fn board_projects_scored_pending_and_empty_rows() {
        let mut game = WordleGame::new();
        let word = submit(&mut game, "МЕТРО");
        let response = GuessResponse {
            won: false,
            message: None,
            status: Some(vec![
                FeedbackMark::Absent,
                FeedbackMark::Present,
                FeedbackMark::Absent,
                FeedbackMark::Correct,
                FeedbackMark::Absent,
            ]),
        };
        game.apply_guess_response(&word, &response);
        type_word(&mut game, "КО");

        let board = game.board();
        assert_eq!(board.len(), MAX_ATTEMPTS as usize);
        assert_eq!(board[0][1], Cell::Scored('Е', FeedbackMark::Present));
        assert_eq!(board[0][3], Cell::Scored('Р', FeedbackMark::Correct));
        assert_eq!(board[1][0], Cell::Pending('К'));
        assert_eq!(board[1][1], Cell::Pending('О'));
        assert_eq!(board[1][2], Cell::Empty);
        assert_eq!(board[2][0], Cell::Empty);
    }

    #[test]
    fn letter_marks_keep_the_strongest_judgment() {
        let mut game = WordleGame::new();
        let word = submit(&mut game, "ООООО");
        let response = GuessResponse {
            won: false,
            message: None,
            status: Some(vec![
                FeedbackMark::Absent,
                FeedbackMark::Present,
                FeedbackMark::Correct,
                FeedbackMark::Absent,
                FeedbackMark::Present,
            ]),
        };
        game.apply_guess_response(&word, &response);
        assert_eq!(game.letter_marks().get(&'О'), Some(&FeedbackMark::Correct));
    }

    #[test]
    fn feedback_marks_use_the_service_wire_tags() {
        let json = serde_json::to_string(&vec![
            FeedbackMark::Correct,
            FeedbackMark::Present,
            FeedbackMark::Absent,
        ])
        .unwrap();
        assert_eq!(json, r#"["green","yellow","gray"]"#);

        let parsed: GuessResponse =
            serde_json::from_str(r#"{"won":false,"message":"","status":["gray","green","yellow","gray","gray"]}"#)
                .unwrap();
        assert_eq!(parsed.status.unwrap()[1], FeedbackMark::Correct);
    }
}
