use std::path::Path;

use log::debug;
use serde::{Deserialize, Serialize};

use crate::{
    magic::{DEFAULT_MAX_LIST_LEN, DEFAULT_STACK_SIZE, ENV_EVAL_CONFIG_PATH},
    utils::error::{LambdaError, LambdaResult},
};

/// Limits applied at evaluation boundaries.
///
/// Every field has a default, so a configuration file only needs to name the
/// values it overrides:
///
/// ```toml
/// stack_size = 268435456
/// max_list_len = 1024
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct EvalConfig {
    /// Stack size in bytes of the thread used by [`run_with_stack`].
    ///
    /// [`run_with_stack`]: crate::runner::run_with_stack
    pub stack_size: usize,

    /// Maximum number of nodes [`to_vec`] walks before giving up.
    ///
    /// [`to_vec`]: crate::list::to_vec
    pub max_list_len: usize,
}

impl Default for EvalConfig {
    fn default() -> Self {
        Self {
            stack_size: DEFAULT_STACK_SIZE,
            max_list_len: DEFAULT_MAX_LIST_LEN,
        }
    }
}

impl EvalConfig {
    /// Parse a configuration from TOML source.
    pub fn from_toml_str(source: &str) -> LambdaResult<Self> {
        toml::from_str(source).map_err(|e| LambdaError::ConfigParseError {
            source: e,
            file: "<inline>".to_string(),
        })
    }

    /// Load a configuration from a TOML file.
    pub fn load_from_toml(path: &Path) -> LambdaResult<Self> {
        let toml_str = std::fs::read_to_string(path)?;

        let config: Self = toml::from_str(&toml_str).map_err(|e| LambdaError::ConfigParseError {
            source: e,
            file: path.display().to_string(),
        })?;
        debug!("Loaded evaluation config from {}: {:?}", path.display(), config);
        Ok(config)
    }

    /// Load from the file named by `HYLAMBDA_CONFIG_PATH`, or use the defaults when
    /// the variable is not set.
    pub fn from_env() -> LambdaResult<Self> {
        match std::env::var_os(ENV_EVAL_CONFIG_PATH) {
            Some(path) => Self::load_from_toml(Path::new(&path)),
            None => Ok(Self::default()),
        }
    }
}
