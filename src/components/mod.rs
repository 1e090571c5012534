//! UI components for the valentine greeting.
//!
//! Regency parchment aesthetic components.

mod celebration;
mod fleeing_button;
mod flourish;
mod scatter_button;

pub use celebration::Celebration;
pub use fleeing_button::FleeingButton;
pub use flourish::{CornerFlourish, ParchmentFrame};
pub use scatter_button::ScatterButton;
