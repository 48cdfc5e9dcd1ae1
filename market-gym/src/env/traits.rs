use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use super::error::EnvError;

/// Result of one environment transition
#[derive(Debug, Clone)]
pub struct StepResult<O> {
    /// Observation after the action
    pub observation: O,
    /// Reward for the previous action
    pub reward: f64,
    /// Episode ended; further steps need a reset
    pub done: bool,
    /// Auxiliary diagnostics
    pub info: serde_json::Map<String, serde_json::Value>,
}

/// Output modes for [`Environment::render`]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RenderMode {
    /// Write to the terminal, return nothing
    Human,
    /// Return a terminal-style text representation
    Ansi,
    /// Return an RGB frame
    RgbArray,
}

impl fmt::Display for RenderMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RenderMode::Human => write!(f, "human"),
            RenderMode::Ansi => write!(f, "ansi"),
            RenderMode::RgbArray => write!(f, "rgb_array"),
        }
    }
}

impl FromStr for RenderMode {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "human" => Ok(RenderMode::Human),
            "ansi" => Ok(RenderMode::Ansi),
            "rgb_array" => Ok(RenderMode::RgbArray),
            other => Err(format!("unknown render mode '{}'", other)),
        }
    }
}

/// Static description of an environment
#[derive(Debug)]
pub struct Metadata {
    pub render_modes: &'static [RenderMode],
}

impl Metadata {
    pub fn supports(&self, mode: RenderMode) -> bool {
        self.render_modes.contains(&mode)
    }
}

/// Gym-style environment contract
///
/// `reset` is async because observations come from an exchange.
#[async_trait]
pub trait Environment: Send {
    type Action: Send + Sync;
    type Observation: Send;

    /// Reset the environment and return the initial observation
    async fn reset(&mut self) -> Result<Self::Observation, EnvError>;

    /// Run one timestep of the environment's dynamics
    fn step(&mut self, action: &Self::Action) -> Result<StepResult<Self::Observation>, EnvError>;

    /// Render the current state. `Ansi` returns the text, `Human` prints it.
    fn render(&self, mode: RenderMode) -> Result<Option<String>, EnvError>;

    /// Release resources; the environment can no longer be reset
    fn close(&mut self);

    /// Reseed the environment rng and return the seeds used, main seed first
    fn seed(&mut self, seed: Option<u64>) -> Vec<u64>;

    fn metadata(&self) -> &'static Metadata;

    fn reward_range(&self) -> (f64, f64) {
        (f64::NEG_INFINITY, f64::INFINITY)
    }
}
