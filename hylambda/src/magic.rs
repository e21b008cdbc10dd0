/// Name of the environment variable containing the path to the evaluation
/// configuration file. When unset, [`EvalConfig::from_env`] falls back to defaults.
///
/// [`EvalConfig::from_env`]: crate::utils::conf::EvalConfig::from_env
pub const ENV_EVAL_CONFIG_PATH: &str = "HYLAMBDA_CONFIG_PATH";

/// Default stack size of the evaluation thread (64 MiB).
pub const DEFAULT_STACK_SIZE: usize = 64 * 1024 * 1024;

/// Default upper bound on the number of nodes walked by [`to_vec`].
///
/// [`to_vec`]: crate::list::to_vec
pub const DEFAULT_MAX_LIST_LEN: usize = 1 << 16;

/// Name given to the evaluation thread.
pub const EVAL_THREAD_NAME: &str = "hylambda-eval";
