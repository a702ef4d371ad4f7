mod controller;
mod state;

pub use crate::error::SessionError;
pub use controller::SessionController;
pub use state::{GamePhase, SessionId, SessionState};
