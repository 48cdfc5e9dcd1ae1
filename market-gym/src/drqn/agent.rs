use thiserror::Error;

use super::model::QNetwork;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum AgentError {
    #[error("No model set; call set_model first")]
    ModelNotSet,

    #[error("Invalid argument: {0}")]
    InvalidArgument(String),

    #[error("{0} is not implemented")]
    NotImplemented(&'static str),
}

/// Training defaults
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DrqnConfig {
    pub n_epochs: u32,
    pub batch_size: usize,
}

impl Default for DrqnConfig {
    fn default() -> Self {
        DrqnConfig {
            n_epochs: 500,
            batch_size: 32,
        }
    }
}

/// Deep recurrent Q-network agent
pub struct Drqn<M: QNetwork> {
    config: DrqnConfig,
    model: Option<M>,
}

impl<M: QNetwork> Drqn<M> {
    pub fn new() -> Self {
        Self::with_config(DrqnConfig::default())
    }

    pub fn with_config(config: DrqnConfig) -> Self {
        Drqn {
            config,
            model: None,
        }
    }

    pub fn config(&self) -> &DrqnConfig {
        &self.config
    }

    /// Install the Q-network, replacing any previous one
    pub fn set_model(&mut self, model: M) {
        tracing::info!(outputs = model.output_size(), "DRQN model set");
        self.model = Some(model);
    }

    pub fn model(&self) -> Option<&M> {
        self.model.as_ref()
    }

    pub fn has_model(&self) -> bool {
        self.model.is_some()
    }

    /// Train with the configured epochs and batch size
    pub fn train_default(&mut self) -> Result<(), AgentError> {
        let DrqnConfig {
            n_epochs,
            batch_size,
        } = self.config;
        self.train(n_epochs, batch_size)
    }

    pub fn train(&mut self, n_epochs: u32, batch_size: usize) -> Result<(), AgentError> {
        if n_epochs == 0 || batch_size == 0 {
            return Err(AgentError::InvalidArgument(format!(
                "n_epochs ({}) and batch_size ({}) must be non-zero",
                n_epochs, batch_size
            )));
        }
        self.require_model()?;
        Err(AgentError::NotImplemented("train"))
    }

    pub fn play(&mut self, n_epochs: u32) -> Result<(), AgentError> {
        if n_epochs == 0 {
            return Err(AgentError::InvalidArgument(
                "n_epochs must be non-zero".to_string(),
            ));
        }
        self.require_model()?;
        Err(AgentError::NotImplemented("play"))
    }

    fn require_model(&self) -> Result<&M, AgentError> {
        self.model.as_ref().ok_or(AgentError::ModelNotSet)
    }
}

impl<M: QNetwork> Default for Drqn<M> {
    fn default() -> Self {
        Self::new()
    }
}
