//! Deterministic simulation module
//!
//! All gameplay logic lives here. This module must be pure and deterministic:
//! - Fixed timestep only
//! - Seeded RNG only
//! - No rendering or platform dependencies
//!
//! The frame driver owns input polling and rendering; it hands each fixed
//! step a `TickInput` and reads whatever state it wants to draw afterwards.

pub mod collision;
pub mod pipes;
pub mod state;
pub mod tick;

pub use collision::{Aabb, scan};
pub use pipes::{PipePair, PipePool};
pub use state::{Banner, Bird, CollisionFlags, GameState, RngState, RunPhase};
pub use tick::{TickInput, tick};
