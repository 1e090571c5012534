//! Page components for the valentine greeting.

mod gazette;
mod invitation;

pub use gazette::Gazette;
pub use invitation::Invitation;
