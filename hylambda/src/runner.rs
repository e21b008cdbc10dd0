//! Evaluation on a thread with a configured stack.
//!
//! Numeral and list operations recurse as deep as their inputs are large, and no
//! tail-call elimination is assumed. [`run_with_stack`] moves a computation onto a
//! scoped thread whose stack size comes from [`EvalConfig::stack_size`].
//!
//! A panic inside the computation is reported as
//! [`LambdaError::EvaluationPanicked`]. Exhausting even the enlarged stack is still
//! a fatal fault of the host process.
//!
//! [`Value`](crate::value::Value) is not `Send`: build values inside the closure and
//! return host data (for instance a decoded integer).
use std::any::Any;

use log::debug;

use crate::{
    magic::EVAL_THREAD_NAME,
    utils::{
        conf::EvalConfig,
        error::{LambdaError, LambdaResult},
    },
};

fn panic_message(payload: Box<dyn Any + Send + 'static>) -> String {
    if let Some(s) = payload.downcast_ref::<&str>() {
        s.to_string()
    } else if let Some(s) = payload.downcast_ref::<String>() {
        s.clone()
    } else {
        "<non-string panic payload>".to_string()
    }
}

/// Run `f` on a thread with `config.stack_size` bytes of stack and return its result.
pub fn run_with_stack<T, F>(config: &EvalConfig, f: F) -> LambdaResult<T>
where
    F: FnOnce() -> T + Send,
    T: Send,
{
    debug!(
        "Spawning evaluation thread '{}' with a {} byte stack",
        EVAL_THREAD_NAME, config.stack_size
    );

    let outcome = crossbeam::thread::scope(|scope| -> LambdaResult<T> {
        let handle = scope
            .builder()
            .name(EVAL_THREAD_NAME.to_string())
            .stack_size(config.stack_size)
            .spawn(move |_| f())?;

        handle
            .join()
            .map_err(|payload| LambdaError::EvaluationPanicked(panic_message(payload)))
    });

    match outcome {
        Ok(result) => result,
        Err(payload) => Err(LambdaError::EvaluationPanicked(panic_message(payload))),
    }
}
