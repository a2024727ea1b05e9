use std::fmt::{Debug, Formatter};
use std::sync::Arc;

use serde_json::Value;

use crate::models::{CoreError, CoreErrorKind, CoreResult};

pub type TaskFunctionError = Box<dyn std::error::Error + Send + Sync>;

type TaskBody = dyn Fn(Value) -> Result<Value, TaskFunctionError> + Send + Sync;

/// The user-supplied body of a task. Inputs and outputs are JSON documents.
#[derive(Clone)]
pub struct TaskFunction {
    name: String,
    body: Arc<TaskBody>,
}

impl TaskFunction {
    pub fn new<F>(name: impl Into<String>, body: F) -> Self
    where
        F: Fn(Value) -> Result<Value, TaskFunctionError> + Send + Sync + 'static,
    {
        Self {
            name: name.into(),
            body: Arc::new(body),
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn call(&self, inputs: Value) -> CoreResult<Value> {
        (self.body)(inputs).map_err(|error| CoreError {
            entity: None,
            field: None,
            configuration: None,
            kind: CoreErrorKind::Execution,
            message: format!("task '{}' failed: {error}", self.name),
        })
    }
}

impl Debug for TaskFunction {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("TaskFunction")
            .field("name", &self.name)
            .finish_non_exhaustive()
    }
}

#[derive(Clone, Debug)]
pub struct FunctionTask<C> {
    task_type: &'static str,
    config: C,
    function: TaskFunction,
}

impl<C> FunctionTask<C> {
    pub fn new(task_type: &'static str, config: C, function: TaskFunction) -> Self {
        Self {
            task_type,
            config,
            function,
        }
    }

    pub fn task_type(&self) -> &'static str {
        self.task_type
    }

    pub fn config(&self) -> &C {
        &self.config
    }

    pub fn function(&self) -> &TaskFunction {
        &self.function
    }

    pub fn name(&self) -> &str {
        self.function.name()
    }

    pub fn execute(&self, inputs: Value) -> CoreResult<Value> {
        tracing::debug!(task = self.name(), task_type = self.task_type, "executing task locally");
        self.function.call(inputs)
    }
}
