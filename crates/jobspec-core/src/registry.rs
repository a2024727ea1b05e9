use std::any::{Any, TypeId};
use std::collections::HashMap;
use std::fmt::{Debug, Formatter};
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::{Arc, RwLock, RwLockReadGuard, RwLockWriteGuard};

use lazy_static::lazy_static;

use crate::models::{CoreError, CoreErrorKind, CoreResult};
use crate::task::identity::ConfigurationIdentity;
use crate::task::{ExecutableTask, TaskConfiguration, TaskFunction};

type BuildFn = dyn Fn(Box<dyn Any + Send>, TaskFunction) -> CoreResult<Box<dyn ExecutableTask>>
    + Send
    + Sync;

#[derive(Clone)]
pub struct ExecutorFactory {
    configuration_type: &'static str,
    build: Arc<BuildFn>,
}

impl ExecutorFactory {
    pub fn configuration_type(&self) -> &'static str {
        self.configuration_type
    }

    pub fn build<C: TaskConfiguration>(
        &self,
        configuration: C,
        function: TaskFunction,
    ) -> CoreResult<Box<dyn ExecutableTask>> {
        let configuration: Box<dyn Any + Send> = Box::new(configuration);
        (self.build)(configuration, function)
    }
}

impl Debug for ExecutorFactory {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ExecutorFactory")
            .field("configuration_type", &self.configuration_type)
            .finish_non_exhaustive()
    }
}

#[derive(Clone, Debug)]
pub struct ConfigurationBinding {
    configuration_type_id: TypeId,
    factory: ExecutorFactory,
}

impl ConfigurationBinding {
    pub fn configuration_type(&self) -> &'static str {
        self.factory.configuration_type
    }

    pub fn configuration_type_id(&self) -> TypeId {
        self.configuration_type_id
    }

    pub fn factory(&self) -> &ExecutorFactory {
        &self.factory
    }
}

#[derive(Default)]
pub struct ConfigurationRegistry {
    bindings: RwLock<HashMap<TypeId, ConfigurationBinding>>,
    resolved: AtomicBool,
}

lazy_static! {
    static ref GLOBAL_REGISTRY: ConfigurationRegistry = ConfigurationRegistry::new();
}

pub fn global() -> &'static ConfigurationRegistry {
    &GLOBAL_REGISTRY
}

impl ConfigurationRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn register<C, T, F>(&self, factory: F) -> CoreResult<()>
    where
        C: TaskConfiguration,
        T: ExecutableTask + 'static,
        F: Fn(C, TaskFunction) -> CoreResult<T> + Send + Sync + 'static,
    {
        let configuration_type = std::any::type_name::<C>();
        let configuration_type_id = TypeId::of::<C>();

        let build = move |configuration: Box<dyn Any + Send>,
                          function: TaskFunction|
              -> CoreResult<Box<dyn ExecutableTask>> {
            let configuration = configuration.downcast::<C>().map_err(|_| CoreError {
                entity: None,
                field: None,
                configuration: Some(configuration_type),
                kind: CoreErrorKind::Internal,
                message: format!(
                    "configuration handed to the '{configuration_type}' factory has another type"
                ),
            })?;
            let task = factory(*configuration, function)?;
            Ok(Box::new(task) as Box<dyn ExecutableTask>)
        };

        let binding = ConfigurationBinding {
            configuration_type_id,
            factory: ExecutorFactory {
                configuration_type,
                build: Arc::new(build),
            },
        };

        let mut bindings = self.write_bindings()?;
        if bindings.contains_key(&configuration_type_id) {
            tracing::warn!(
                configuration = configuration_type,
                "rejected duplicate configuration registration"
            );
            return Err(CoreError {
                entity: None,
                field: None,
                configuration: Some(configuration_type),
                kind: CoreErrorKind::RegistrationConflict,
                message: format!(
                    "configuration type '{configuration_type}' is already bound to a task factory"
                ),
            });
        }

        if self.is_frozen() {
            tracing::warn!(
                configuration = configuration_type,
                "configuration registered after task construction began"
            );
        }

        bindings.insert(configuration_type_id, binding);
        tracing::info!(configuration = configuration_type, "registered task configuration");

        Ok(())
    }

    pub fn resolve(&self, configuration: &dyn TaskConfiguration) -> CoreResult<ExecutorFactory> {
        self.resolved.store(true, Ordering::Release);

        let bindings = self.read_bindings()?;
        match bindings.get(&ConfigurationIdentity::exact_type_id(configuration)) {
            Some(binding) => Ok(binding.factory.clone()),
            None => {
                let configuration_type = ConfigurationIdentity::exact_type_name(configuration);
                tracing::debug!(
                    configuration = configuration_type,
                    "no task factory bound for configuration"
                );
                Err(CoreError {
                    entity: None,
                    field: None,
                    configuration: Some(configuration_type),
                    kind: CoreErrorKind::UnresolvedConfiguration,
                    message: format!(
                        "no task factory is registered for configuration type '{configuration_type}'"
                    ),
                })
            }
        }
    }

    pub fn construct_task<C: TaskConfiguration>(
        &self,
        configuration: C,
        function: TaskFunction,
    ) -> CoreResult<Box<dyn ExecutableTask>> {
        let factory = self.resolve(&configuration)?;
        factory.build(configuration, function)
    }

    pub fn is_registered<C: TaskConfiguration>(&self) -> CoreResult<bool> {
        let bindings = self.read_bindings()?;
        Ok(bindings.contains_key(&TypeId::of::<C>()))
    }

    pub fn bindings(&self) -> CoreResult<Vec<ConfigurationBinding>> {
        let bindings = self.read_bindings()?;
        let mut listed: Vec<ConfigurationBinding> = bindings.values().cloned().collect();
        listed.sort_by_key(|binding| binding.configuration_type());
        Ok(listed)
    }

    // Set by the first resolve, successful or not.
    pub fn is_frozen(&self) -> bool {
        self.resolved.load(Ordering::Acquire)
    }

    fn read_bindings(
        &self,
    ) -> CoreResult<RwLockReadGuard<'_, HashMap<TypeId, ConfigurationBinding>>> {
        self.bindings
            .read()
            .map_err(|_| CoreError::internal("configuration registry lock poisoned"))
    }

    fn write_bindings(
        &self,
    ) -> CoreResult<RwLockWriteGuard<'_, HashMap<TypeId, ConfigurationBinding>>> {
        self.bindings
            .write()
            .map_err(|_| CoreError::internal("configuration registry lock poisoned"))
    }
}
