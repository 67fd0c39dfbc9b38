#![deny(
    unsafe_code,
    unused_must_use,
    unreachable_pub,
    rust_2018_idioms,
    missing_docs,
    clippy::pedantic
)]

//! # ROS2 Interface Model Extractor
//!
//! A Rust library that extracts structural models from ROS2 message,
//! service, and action files. The models - a record name plus field-name
//! to type-name mappings per section - are meant as input for downstream
//! code and documentation generation.
//!
//! ## Features
//!
//! - **Message extraction**: `.msg` files become a single field mapping
//! - **Service extraction**: `.srv` files split on `---` into request and
//!   response mappings
//! - **Action extraction**: `.action` files split on `---` into goal,
//!   result, and feedback mappings
//! - **Directory aggregation**: scan a directory for all files of one kind
//! - **Lenient by design**: comments, constants, and malformed lines are
//!   skipped, never reported; only filesystem failures surface as errors
//! - **Serde support**: optional serialization with the `serde` feature
//!
//! ## Quick Start
//!
//! ```rust
//! use ros2model::{parse_action_string, parse_message_string, parse_service_string};
//!
//! // Parse a message
//! let msg = parse_message_string("Point", "int32 x\nint32 y\nstring name\n");
//! assert_eq!(msg.fields["x"], "int32");
//!
//! // Parse a service
//! let srv = parse_service_string("AddTwoInts", "int32 a\nint32 b\n---\nint32 sum\n");
//! assert_eq!(srv.request.len(), 2);
//! assert_eq!(srv.response["sum"], "int32");
//!
//! // Parse an action
//! let action = parse_action_string(
//!     "Fibonacci",
//!     "int32 order\n---\nint32 sequence\n---\nint32 partial_sequence\n",
//! );
//! assert_eq!(action.goal["order"], "int32");
//! assert_eq!(action.feedback["partial_sequence"], "int32");
//! ```
//!
//! Type names are normalized from the on-disk slash form to the dotted
//! form (`pkg_name/Msg` becomes `pkg_name.Msg`).
//!
//! ## Modules
//!
//! - [`model`]: line tokenizer, the three file parsers, and directory
//!   aggregation
//! - [`runtime`]: helpers for pre-fetched topic and parameter
//!   introspection data

/// Interface model extraction
///
/// This module handles `.msg`, `.srv`, and `.action` files: tokenizing
/// declaration lines, tracking section boundaries, and assembling the
/// structured records.
pub mod model;

/// Runtime introspection glue
///
/// This module normalizes pre-fetched topic type names and maps parameter
/// type ids to display strings.
pub mod runtime;

// Re-export commonly used types and functions
pub use model::{
    Action, FieldEntry, FieldMap, InterfaceKind, InterfaceModel, Message, ModelError, ModelResult,
    Service, parse_action_file, parse_action_string, parse_interface_file, parse_message_file,
    parse_message_string, parse_service_file, parse_service_string, prepare_output_dir,
    scan_action_dir, scan_dir, scan_message_dir, scan_service_dir, spec_files, split_field_line,
};
pub use runtime::{ParameterKind, TopicInfo, normalize_topic_types, normalize_type_name};

/// Version information
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_version() {
        assert!(VERSION.chars().any(|c| c.is_ascii_digit()));
    }

    #[test]
    fn test_reexported_parsers() {
        let msg = parse_message_string("TestMsg", "int32 x\n");
        assert_eq!(msg.name, "TestMsg");

        let srv = parse_service_string("TestSrv", "int32 a\n---\nint32 b\n");
        assert_eq!(srv.request.len(), 1);
        assert_eq!(srv.response.len(), 1);

        let action = parse_action_string("TestAction", "int32 x\n---\nint32 y\n---\nint32 z\n");
        assert_eq!(action.goal.len(), 1);
        assert_eq!(action.result.len(), 1);
        assert_eq!(action.feedback.len(), 1);
    }
}
