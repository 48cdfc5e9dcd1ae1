//! Gym-style trading environment over a live order book.
//!
//! - **Environment**: the reset/step/render/close/seed contract
//! - **Market**: environment backed by any [`Exchange`](crate::gateway_in::Exchange)
//! - **Observation**: order book reshaped into a signed `3 x N` matrix
//! - **OrderSpace**: action space of order placements

mod action_space;
mod error;
mod market;
mod observation;
mod render;
mod seeding;
mod traits;

pub use action_space::{OrderAction, OrderSpace};
pub use error::EnvError;
pub use market::{Market, MarketSettings};
pub use observation::{
    Observation, ObservationSpace, PRICE_ROW, QUANTITY_ROW, ROWS, SIGN_ROW,
};
pub use render::render_ansi;
pub use seeding::seeded_rng;
pub use traits::{Environment, Metadata, RenderMode, StepResult};
