//! Interface Model Extraction Module
//!
//! This module turns `.msg`, `.srv`, and `.action` interface files into
//! lightweight structural models: a record name plus field-name to
//! type-name mappings per section. Malformed lines are skipped rather than
//! reported; only filesystem failures surface as errors.

/// Action model extraction
pub mod action;
/// Error types and handling
pub mod errors;
/// Line tokenizer
pub mod line;
/// Message model extraction
pub mod message;
/// Directory aggregation
pub mod scan;
/// Service model extraction
pub mod service;

pub use action::{Action, parse_action_file, parse_action_string};
pub use errors::{ModelError, ModelResult};
pub use line::{FieldEntry, split_field_line};
pub use message::{FieldMap, Message, parse_message_file, parse_message_string};
pub use scan::{
    InterfaceKind, prepare_output_dir, scan_action_dir, scan_dir, scan_message_dir,
    scan_service_dir, spec_files,
};
pub use service::{Service, parse_service_file, parse_service_string};

use std::path::Path;

/// Interface model that can be either a Message, Service, or Action
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum InterfaceModel {
    /// A message model
    Message(Message),
    /// A service model
    Service(Service),
    /// An action model
    Action(Action),
}

impl InterfaceModel {
    /// Get the interface name
    #[must_use]
    pub fn name(&self) -> &str {
        match self {
            InterfaceModel::Message(model) => &model.name,
            InterfaceModel::Service(model) => &model.name,
            InterfaceModel::Action(model) => &model.name,
        }
    }

    /// Check if this is a message model
    #[must_use]
    pub fn is_message(&self) -> bool {
        matches!(self, InterfaceModel::Message(_))
    }

    /// Check if this is a service model
    #[must_use]
    pub fn is_service(&self) -> bool {
        matches!(self, InterfaceModel::Service(_))
    }

    /// Check if this is an action model
    #[must_use]
    pub fn is_action(&self) -> bool {
        matches!(self, InterfaceModel::Action(_))
    }

    /// Get as message model if it is one
    #[must_use]
    pub fn as_message(&self) -> Option<&Message> {
        match self {
            InterfaceModel::Message(model) => Some(model),
            _ => None,
        }
    }

    /// Get as service model if it is one
    #[must_use]
    pub fn as_service(&self) -> Option<&Service> {
        match self {
            InterfaceModel::Service(model) => Some(model),
            _ => None,
        }
    }

    /// Get as action model if it is one
    #[must_use]
    pub fn as_action(&self) -> Option<&Action> {
        match self {
            InterfaceModel::Action(model) => Some(model),
            _ => None,
        }
    }
}

impl std::fmt::Display for InterfaceModel {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            InterfaceModel::Message(model) => write!(f, "{model}"),
            InterfaceModel::Service(model) => write!(f, "{model}"),
            InterfaceModel::Action(model) => write!(f, "{model}"),
        }
    }
}

/// Parse any interface file based on its extension
///
/// - `.msg` files are parsed as messages
/// - `.srv` files are parsed as services
/// - `.action` files are parsed as actions
///
/// # Errors
///
/// Returns an error if:
/// - The file has no extension or an extension other than the three above
/// - The file cannot be read
pub fn parse_interface_file<P: AsRef<Path>>(path: P) -> ModelResult<InterfaceModel> {
    let path = path.as_ref();
    let extension = path
        .extension()
        .and_then(|ext| ext.to_str())
        .ok_or_else(|| ModelError::InvalidFileName {
            path: path.display().to_string(),
        })?;

    match extension {
        "msg" => Ok(InterfaceModel::Message(parse_message_file(path)?)),
        "srv" => Ok(InterfaceModel::Service(parse_service_file(path)?)),
        "action" => Ok(InterfaceModel::Action(parse_action_file(path)?)),
        _ => Err(ModelError::UnsupportedExtension {
            extension: extension.to_string(),
        }),
    }
}

/// Interface name for a spec file: the base name with the extension stripped.
pub(crate) fn interface_name(path: &Path) -> ModelResult<String> {
    path.file_stem()
        .and_then(|stem| stem.to_str())
        .map(ToString::to_string)
        .ok_or_else(|| ModelError::InvalidFileName {
            path: path.display().to_string(),
        })
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;

    #[test]
    fn test_interface_model_message_methods() {
        let msg = parse_message_string("TestMsg", "int32 x\n");
        let model = InterfaceModel::Message(msg);

        assert_eq!(model.name(), "TestMsg");
        assert!(model.is_message());
        assert!(!model.is_service());
        assert!(!model.is_action());
        assert!(model.as_message().is_some());
        assert!(model.as_service().is_none());
        assert!(model.as_action().is_none());
    }

    #[test]
    fn test_interface_model_service_methods() {
        let srv = parse_service_string("TestSrv", "int32 a\n---\nint32 b\n");
        let model = InterfaceModel::Service(srv);

        assert_eq!(model.name(), "TestSrv");
        assert!(!model.is_message());
        assert!(model.is_service());
        assert!(model.as_service().is_some());
    }

    #[test]
    fn test_interface_model_action_methods() {
        let action = parse_action_string("TestAction", "int32 x\n---\nint32 y\n---\nint32 z\n");
        let model = InterfaceModel::Action(action);

        assert_eq!(model.name(), "TestAction");
        assert!(model.is_action());
        assert!(model.as_action().is_some());
        assert!(model.as_message().is_none());
    }

    #[test]
    fn test_interface_model_display() {
        let model = InterfaceModel::Message(parse_message_string("Msg", "int32 x\n"));
        assert!(model.to_string().contains("Msg"));
    }

    #[test]
    fn test_parse_interface_file_dispatch() {
        let dir = tempfile::tempdir().unwrap();

        let msg_path = dir.path().join("Test.msg");
        fs::write(&msg_path, "int32 value\n").unwrap();
        assert!(parse_interface_file(&msg_path).unwrap().is_message());

        let srv_path = dir.path().join("Test.srv");
        fs::write(&srv_path, "int32 a\n---\nint32 b\n").unwrap();
        assert!(parse_interface_file(&srv_path).unwrap().is_service());

        let action_path = dir.path().join("Test.action");
        fs::write(&action_path, "int32 x\n---\nint32 y\n---\nint32 z\n").unwrap();
        assert!(parse_interface_file(&action_path).unwrap().is_action());
    }

    #[test]
    fn test_parse_interface_file_unknown_extension() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("test.txt");
        fs::write(&path, "int32 x\n").unwrap();

        let result = parse_interface_file(&path);
        assert!(matches!(
            result,
            Err(ModelError::UnsupportedExtension { .. })
        ));
    }

    #[test]
    fn test_parse_interface_file_no_extension() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("test");
        fs::write(&path, "int32 x\n").unwrap();

        let result = parse_interface_file(&path);
        assert!(matches!(result, Err(ModelError::InvalidFileName { .. })));
    }

    #[test]
    fn test_interface_name_strips_extension() {
        assert_eq!(
            interface_name(Path::new("/tmp/msgs/Pose.msg")).unwrap(),
            "Pose"
        );
        assert_eq!(
            interface_name(Path::new("Fibonacci.action")).unwrap(),
            "Fibonacci"
        );
    }
}
