use crate::env::Observation;

/// Recurrent Q-value model plugged into [`super::Drqn`]
pub trait QNetwork: Send {
    /// Number of Q-values produced per observation
    fn output_size(&self) -> usize;

    /// Q-values for one observation, advancing the recurrent state
    fn forward(&mut self, observation: &Observation) -> Vec<f64>;

    /// Clear the recurrent state between episodes
    fn reset_state(&mut self);
}
