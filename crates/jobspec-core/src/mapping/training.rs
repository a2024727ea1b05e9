use crate::mapping::{WireMapped, map_sequence, unmap_sequence};
use crate::models::{
    AlgorithmName, AlgorithmSpecification, CoreError, CoreResult, InputMode, MetricDefinition,
    ResourceConfig, TrainingJobSpec,
};
use crate::wire;

pub(crate) fn input_mode_to_wire(mode: InputMode) -> wire::training::InputMode {
    match mode {
        InputMode::Pipe => wire::training::InputMode::Pipe,
        InputMode::File => wire::training::InputMode::File,
    }
}

pub(crate) fn input_mode_from_wire(value: i32) -> CoreResult<InputMode> {
    match wire::training::InputMode::try_from(value) {
        Ok(wire::training::InputMode::Pipe) => Ok(InputMode::Pipe),
        Ok(wire::training::InputMode::File) => Ok(InputMode::File),
        Err(_) => Err(CoreError::unrecognized_wire_value(
            AlgorithmSpecification::ENTITY,
            "input_mode",
            value,
        )),
    }
}

pub(crate) fn algorithm_name_to_wire(name: AlgorithmName) -> wire::training::AlgorithmName {
    match name {
        AlgorithmName::Custom => wire::training::AlgorithmName::Custom,
        AlgorithmName::Xgboost => wire::training::AlgorithmName::Xgboost,
    }
}

pub(crate) fn algorithm_name_from_wire(value: i32) -> CoreResult<AlgorithmName> {
    match wire::training::AlgorithmName::try_from(value) {
        Ok(wire::training::AlgorithmName::Custom) => Ok(AlgorithmName::Custom),
        Ok(wire::training::AlgorithmName::Xgboost) => Ok(AlgorithmName::Xgboost),
        Err(_) => Err(CoreError::unrecognized_wire_value(
            AlgorithmSpecification::ENTITY,
            "algorithm_name",
            value,
        )),
    }
}

fn positive_from_wire(value: i64, field: &'static str) -> CoreResult<u32> {
    u32::try_from(value).map_err(|_| {
        CoreError::construction(
            ResourceConfig::ENTITY,
            field,
            format!("wire value {value} does not fit a positive 32-bit count"),
        )
    })
}

impl WireMapped for ResourceConfig {
    type Wire = wire::training::TrainingJobResourceConfig;

    fn to_wire(&self) -> Self::Wire {
        wire::training::TrainingJobResourceConfig {
            instance_count: i64::from(self.instance_count()),
            instance_type: self.instance_type().to_string(),
            volume_size_in_gb: i64::from(self.volume_size_gb()),
        }
    }

    fn from_wire(message: Self::Wire) -> CoreResult<Self> {
        ResourceConfig::new(
            positive_from_wire(message.instance_count, "instance_count")?,
            message.instance_type,
            positive_from_wire(message.volume_size_in_gb, "volume_size_gb")?,
        )
    }
}

impl WireMapped for MetricDefinition {
    type Wire = wire::training::MetricDefinition;

    fn to_wire(&self) -> Self::Wire {
        wire::training::MetricDefinition {
            name: self.name().to_string(),
            regex: self.regex().to_string(),
        }
    }

    fn from_wire(message: Self::Wire) -> CoreResult<Self> {
        MetricDefinition::new(message.name, message.regex)
    }
}

impl WireMapped for AlgorithmSpecification {
    type Wire = wire::training::AlgorithmSpecification;

    fn to_wire(&self) -> Self::Wire {
        wire::training::AlgorithmSpecification {
            input_mode: input_mode_to_wire(self.input_mode()) as i32,
            algorithm_name: algorithm_name_to_wire(self.algorithm_name()) as i32,
            algorithm_version: self.algorithm_version().to_string(),
            metric_definitions: map_sequence(self.metric_definitions()),
        }
    }

    fn from_wire(message: Self::Wire) -> CoreResult<Self> {
        Ok(AlgorithmSpecification::new(
            input_mode_from_wire(message.input_mode)?,
            algorithm_name_from_wire(message.algorithm_name)?,
            message.algorithm_version,
            unmap_sequence(message.metric_definitions)?,
        ))
    }
}

impl WireMapped for TrainingJobSpec {
    type Wire = wire::training::TrainingJob;

    fn to_wire(&self) -> Self::Wire {
        wire::training::TrainingJob {
            algorithm_specification: Some(self.algorithm_specification().to_wire()),
            training_job_resource_config: Some(self.resource_config().to_wire()),
        }
    }

    fn from_wire(message: Self::Wire) -> CoreResult<Self> {
        let algorithm_specification = message.algorithm_specification.ok_or_else(|| {
            CoreError::missing_wire_field(TrainingJobSpec::ENTITY, "algorithm_specification")
        })?;
        let resource_config = message.training_job_resource_config.ok_or_else(|| {
            CoreError::missing_wire_field(TrainingJobSpec::ENTITY, "training_job_resource_config")
        })?;

        Ok(TrainingJobSpec::new(
            AlgorithmSpecification::from_wire(algorithm_specification)?,
            ResourceConfig::from_wire(resource_config)?,
        ))
    }
}
