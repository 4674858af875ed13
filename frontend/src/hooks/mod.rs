pub mod auth_state;
pub mod form_state;
pub mod transient_message;

pub use auth_state::*;
pub use form_state::*;
pub use transient_message::*;
