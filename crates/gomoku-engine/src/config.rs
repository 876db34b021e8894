//! Search configuration.

/// Errors from an invalid [`SearchConfig`].
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ConfigError {
    /// A branching width was set to zero.
    #[error("{which} width must be at least 1")]
    ZeroWidth {
        /// Which width ("root" or "node").
        which: &'static str,
    },
    /// The depth cap was set to zero.
    #[error("depth cap must be at least 1")]
    ZeroDepth,
}

/// Knobs for the minimax search.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SearchConfig {
    /// Candidates explored at the root.
    pub root_width: usize,
    /// Candidates explored at every other node.
    pub node_width: usize,
    /// Upper bound on the depth picked from the candidate count.
    pub depth_cap: Option<u8>,
}

impl SearchConfig {
    /// Return a copy with the depth capped at `cap` plies.
    pub fn with_depth_cap(self, cap: u8) -> Result<Self, ConfigError> {
        let config = Self {
            depth_cap: Some(cap),
            ..self
        };
        config.validate()?;
        Ok(config)
    }

    /// Check that every knob is usable.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.root_width == 0 {
            return Err(ConfigError::ZeroWidth { which: "root" });
        }
        if self.node_width == 0 {
            return Err(ConfigError::ZeroWidth { which: "node" });
        }
        if self.depth_cap == Some(0) {
            return Err(ConfigError::ZeroDepth);
        }
        Ok(())
    }
}

impl Default for SearchConfig {
    fn default() -> Self {
        Self {
            root_width: 20,
            node_width: 15,
            depth_cap: None,
        }
    }
}
