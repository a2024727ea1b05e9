pub mod function;
pub(crate) mod identity;
pub mod settings;

pub use function::{FunctionTask, TaskFunction, TaskFunctionError};
pub use settings::SerializationSettings;

use std::collections::BTreeMap;
use std::fmt::Debug;

use serde::Serialize;
use serde_json::Value;

use crate::models::CoreResult;
use crate::task::identity::ConfigurationIdentity;

pub trait TaskConfiguration: ConfigurationIdentity + Debug + Send + Sync + 'static {}

// backend_settings and custom must be pure.
pub trait ExecutableTask: Send + Sync {
    fn name(&self) -> &str;

    fn task_type(&self) -> &str;

    fn backend_settings(&self, settings: &SerializationSettings) -> BTreeMap<String, String>;

    fn custom(&self, _settings: &SerializationSettings) -> Option<Vec<u8>> {
        None
    }

    fn execute(&self, inputs: Value) -> CoreResult<Value>;

    fn to_template(&self, settings: &SerializationSettings) -> TaskTemplate {
        TaskTemplate {
            name: self.name().to_string(),
            task_type: self.task_type().to_string(),
            config: self.backend_settings(settings),
            custom: self.custom(settings),
            image: settings.image.clone(),
            env: settings.env.clone(),
        }
    }
}

#[derive(Clone, Debug, Eq, PartialEq, Serialize)]
pub struct TaskTemplate {
    pub name: String,
    pub task_type: String,
    pub config: BTreeMap<String, String>,
    pub custom: Option<Vec<u8>>,
    pub image: Option<String>,
    pub env: BTreeMap<String, String>,
}
