//! Native (host-provided) callables installed into the globals environment.

use std::time::{SystemTime, UNIX_EPOCH};

use super::{Interpreter, RuntimeError};
use crate::value::{Callable, Value};

/// `clock()` — arity 0, returns elapsed wall-clock seconds as a double.
#[derive(Debug)]
pub struct Clock;

impl Callable for Clock {
    fn arity(&self) -> usize {
        0
    }

    fn call(&self, _interpreter: &mut Interpreter, _args: Vec<Value>) -> Result<Value, RuntimeError> {
        let elapsed = SystemTime::now()
            .duration_since(UNIX_EPOCH)
            .expect("system clock is after the Unix epoch");
        Ok(Value::Number(elapsed.as_secs_f64()))
    }

    fn name(&self) -> &str {
        "clock"
    }
}
