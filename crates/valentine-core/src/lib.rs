//! Core logic for the valentine greeting.
//!
//! Everything in this crate is pure and synchronous: the geometry
//! primitives, the evasion controller that decides where the decline
//! button jumps when the pointer closes in, and the two-state page
//! machine. Rendering and animation live in the desktop crate; this
//! crate only emits target offsets.
//!
//! Randomness is injected (`&mut impl Rng`) so tests can seed a
//! deterministic source while the UI wires in `rand::rng()`.

pub mod evasion;
pub mod geometry;
pub mod page;

pub use evasion::{scatter, EvasionConfig, EvasionController, EvasionOutcome};
pub use geometry::{Bounds, Offset, Point, Rect};
pub use page::PageState;
