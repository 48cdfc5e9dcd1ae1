//! Deep recurrent Q-network agent.
//!
//! Only the model slot and the train/play entry points exist; no network
//! or learning procedure ships with the crate.

mod agent;
mod model;

pub use agent::{AgentError, Drqn, DrqnConfig};
pub use model::QNetwork;
