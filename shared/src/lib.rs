pub mod auth;
pub mod tabulated;
pub mod validation;
pub mod wordle;
