#[derive(Clone, Copy, Debug, Eq, PartialEq, Hash)]
pub enum CoreErrorKind {
    Construction,
    MissingWireField,
    UnrecognizedWireValue,
    WireDecode,
    RegistrationConflict,
    UnresolvedConfiguration,
    Execution,
    Internal,
}

#[derive(Clone, Debug, Eq, PartialEq, thiserror::Error)]
#[error("{kind:?}: {message}")]
pub struct CoreError {
    pub entity: Option<&'static str>,
    pub field: Option<&'static str>,
    pub configuration: Option<&'static str>,
    pub kind: CoreErrorKind,
    pub message: String,
}

pub type CoreResult<T> = Result<T, CoreError>;

impl CoreError {
    pub fn construction(entity: &'static str, field: &'static str, message: String) -> Self {
        Self {
            entity: Some(entity),
            field: Some(field),
            configuration: None,
            kind: CoreErrorKind::Construction,
            message,
        }
    }

    pub fn missing_wire_field(entity: &'static str, field: &'static str) -> Self {
        Self {
            entity: Some(entity),
            field: Some(field),
            configuration: None,
            kind: CoreErrorKind::MissingWireField,
            message: format!("wire message for '{entity}' is missing required field '{field}'"),
        }
    }

    pub fn unrecognized_wire_value(entity: &'static str, field: &'static str, value: i32) -> Self {
        Self {
            entity: Some(entity),
            field: Some(field),
            configuration: None,
            kind: CoreErrorKind::UnrecognizedWireValue,
            message: format!("unrecognized wire value {value} for '{entity}.{field}'"),
        }
    }

    pub fn internal(message: impl Into<String>) -> Self {
        Self {
            entity: None,
            field: None,
            configuration: None,
            kind: CoreErrorKind::Internal,
            message: message.into(),
        }
    }
}

impl From<prost::DecodeError> for CoreError {
    fn from(error: prost::DecodeError) -> Self {
        Self {
            entity: None,
            field: None,
            configuration: None,
            kind: CoreErrorKind::WireDecode,
            message: error.to_string(),
        }
    }
}
