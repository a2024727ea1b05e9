use serde::{Deserialize, Serialize};

use crate::models::{CoreError, CoreResult};

/// Compute sizing for a managed training job. Every field is required.
#[derive(Clone, Debug, Eq, PartialEq, Hash, Serialize, Deserialize)]
#[serde(try_from = "ResourceConfigFields")]
pub struct ResourceConfig {
    instance_count: u32,
    instance_type: String,
    volume_size_gb: u32,
}

#[derive(Deserialize)]
struct ResourceConfigFields {
    instance_count: u32,
    instance_type: String,
    volume_size_gb: u32,
}

impl TryFrom<ResourceConfigFields> for ResourceConfig {
    type Error = CoreError;

    fn try_from(fields: ResourceConfigFields) -> Result<Self, Self::Error> {
        Self::new(
            fields.instance_count,
            fields.instance_type,
            fields.volume_size_gb,
        )
    }
}

impl ResourceConfig {
    pub const ENTITY: &'static str = "ResourceConfig";

    pub fn new(
        instance_count: u32,
        instance_type: impl Into<String>,
        volume_size_gb: u32,
    ) -> CoreResult<Self> {
        let instance_type = instance_type.into();
        if instance_count == 0 {
            return Err(CoreError::construction(
                Self::ENTITY,
                "instance_count",
                "instance count must be positive".to_string(),
            ));
        }
        if instance_type.is_empty() {
            return Err(CoreError::construction(
                Self::ENTITY,
                "instance_type",
                "instance type must not be empty".to_string(),
            ));
        }
        if volume_size_gb == 0 {
            return Err(CoreError::construction(
                Self::ENTITY,
                "volume_size_gb",
                "volume size must be positive".to_string(),
            ));
        }

        Ok(Self {
            instance_count,
            instance_type,
            volume_size_gb,
        })
    }

    pub fn instance_count(&self) -> u32 {
        self.instance_count
    }

    pub fn instance_type(&self) -> &str {
        &self.instance_type
    }

    pub fn volume_size_gb(&self) -> u32 {
        self.volume_size_gb
    }
}

/// A named log-scraping rule. The regex is handed to the engine unchecked.
#[derive(Clone, Debug, Eq, PartialEq, Hash, Serialize, Deserialize)]
#[serde(try_from = "MetricDefinitionFields")]
pub struct MetricDefinition {
    name: String,
    regex: String,
}

#[derive(Deserialize)]
struct MetricDefinitionFields {
    name: String,
    regex: String,
}

impl TryFrom<MetricDefinitionFields> for MetricDefinition {
    type Error = CoreError;

    fn try_from(fields: MetricDefinitionFields) -> Result<Self, Self::Error> {
        Self::new(fields.name, fields.regex)
    }
}

impl MetricDefinition {
    pub const ENTITY: &'static str = "MetricDefinition";

    pub fn new(name: impl Into<String>, regex: impl Into<String>) -> CoreResult<Self> {
        let name = name.into();
        if name.is_empty() {
            return Err(CoreError::construction(
                Self::ENTITY,
                "name",
                "metric name must not be empty".to_string(),
            ));
        }

        Ok(Self {
            name,
            regex: regex.into(),
        })
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn regex(&self) -> &str {
        &self.regex
    }
}

#[derive(Clone, Copy, Debug, Eq, PartialEq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum InputMode {
    Pipe,
    File,
}

impl InputMode {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Pipe => "pipe",
            Self::File => "file",
        }
    }
}

impl std::str::FromStr for InputMode {
    type Err = ();

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        match value {
            "pipe" => Ok(Self::Pipe),
            "file" => Ok(Self::File),
            _ => Err(()),
        }
    }
}

#[derive(Clone, Copy, Debug, Eq, PartialEq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AlgorithmName {
    Xgboost,
    Custom,
}

impl AlgorithmName {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Xgboost => "xgboost",
            Self::Custom => "custom",
        }
    }

    pub fn is_builtin(self) -> bool {
        !matches!(self, Self::Custom)
    }
}

impl std::str::FromStr for AlgorithmName {
    type Err = ();

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        match value {
            "xgboost" => Ok(Self::Xgboost),
            "custom" => Ok(Self::Custom),
            _ => Err(()),
        }
    }
}

/// Algorithm selection for a training job. Metric definitions are kept in
/// declaration order; the engine scrapes logs in that order.
#[derive(Clone, Debug, Eq, PartialEq, Hash, Serialize, Deserialize)]
pub struct AlgorithmSpecification {
    input_mode: InputMode,
    algorithm_name: AlgorithmName,
    algorithm_version: String,
    metric_definitions: Vec<MetricDefinition>,
}

impl AlgorithmSpecification {
    pub const ENTITY: &'static str = "AlgorithmSpecification";

    pub fn new(
        input_mode: InputMode,
        algorithm_name: AlgorithmName,
        algorithm_version: impl Into<String>,
        metric_definitions: Vec<MetricDefinition>,
    ) -> Self {
        Self {
            input_mode,
            algorithm_name,
            algorithm_version: algorithm_version.into(),
            metric_definitions,
        }
    }

    pub fn input_mode(&self) -> InputMode {
        self.input_mode
    }

    pub fn algorithm_name(&self) -> AlgorithmName {
        self.algorithm_name
    }

    pub fn algorithm_version(&self) -> &str {
        &self.algorithm_version
    }

    pub fn metric_definitions(&self) -> &[MetricDefinition] {
        &self.metric_definitions
    }
}

#[derive(Clone, Debug, Eq, PartialEq, Hash, Serialize, Deserialize)]
pub struct TrainingJobSpec {
    algorithm_specification: AlgorithmSpecification,
    resource_config: ResourceConfig,
}

impl TrainingJobSpec {
    pub const ENTITY: &'static str = "TrainingJobSpec";

    pub fn new(
        algorithm_specification: AlgorithmSpecification,
        resource_config: ResourceConfig,
    ) -> Self {
        Self {
            algorithm_specification,
            resource_config,
        }
    }

    pub fn algorithm_specification(&self) -> &AlgorithmSpecification {
        &self.algorithm_specification
    }

    pub fn resource_config(&self) -> &ResourceConfig {
        &self.resource_config
    }
}
