//! Glue for pre-fetched runtime introspection data.
//!
//! Nothing here talks to a running graph; callers hand in the topic and
//! parameter records they already fetched, and these helpers put them in
//! the same dot-namespaced display form the file models use.

use std::fmt;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::model::{ModelError, ModelResult};

/// A topic observed on a running graph, with the type names advertised for it
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct TopicInfo {
    /// Topic name
    pub name: String,
    /// Advertised type names; only the first entry is used downstream
    pub types: Vec<String>,
}

/// Rewrite an advertised type name into the dot-namespaced display form.
///
/// `pkg/msg/Type`, `pkg/srv/Type`, and `pkg/action/Type` all become
/// `pkg.Type`, matching the normalization the line tokenizer applies to
/// types read from spec files.
#[must_use]
pub fn normalize_type_name(type_name: &str) -> String {
    type_name
        .replace("/msg/", ".")
        .replace("/srv/", ".")
        .replace("/action/", ".")
}

/// Normalize the first advertised type of every topic record.
///
/// Produces a new sequence rather than mutating shared records; order is
/// preserved. Records with an empty type list pass through unchanged.
#[must_use]
pub fn normalize_topic_types(topics: Vec<TopicInfo>) -> Vec<TopicInfo> {
    topics
        .into_iter()
        .map(|mut topic| {
            if let Some(first) = topic.types.first_mut() {
                *first = normalize_type_name(first);
            }
            topic
        })
        .collect()
}

/// Parameter kinds reported by the middleware
///
/// A closed set; converting an id outside the known range is a lookup
/// failure, never a silent default.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum ParameterKind {
    /// Parameter value not set
    NotSet,
    /// Boolean value
    Bool,
    /// 64-bit signed integer value
    Integer,
    /// 64-bit floating point value
    Double,
    /// String value
    String,
    /// Array of bytes
    ByteArray,
    /// Array of boolean values
    BoolArray,
    /// Array of 64-bit signed integer values
    IntegerArray,
    /// Array of 64-bit floating point values
    DoubleArray,
    /// Array of string values
    StringArray,
}

impl ParameterKind {
    /// Display string used when rendering parameter tables
    #[must_use]
    pub const fn type_string(self) -> &'static str {
        match self {
            ParameterKind::NotSet => "not set",
            ParameterKind::Bool => "bool",
            ParameterKind::Integer => "int",
            ParameterKind::Double => "double",
            ParameterKind::String => "string",
            ParameterKind::ByteArray => "byte[]",
            ParameterKind::BoolArray => "bool[]",
            ParameterKind::IntegerArray => "int[]",
            ParameterKind::DoubleArray => "double[]",
            ParameterKind::StringArray => "string[]",
        }
    }
}

impl TryFrom<u8> for ParameterKind {
    type Error = ModelError;

    /// Convert a wire-level parameter type id to its kind.
    ///
    /// The ids follow the `rcl_interfaces` `ParameterType` constants.
    fn try_from(id: u8) -> ModelResult<Self> {
        match id {
            0 => Ok(ParameterKind::NotSet),
            1 => Ok(ParameterKind::Bool),
            2 => Ok(ParameterKind::Integer),
            3 => Ok(ParameterKind::Double),
            4 => Ok(ParameterKind::String),
            5 => Ok(ParameterKind::ByteArray),
            6 => Ok(ParameterKind::BoolArray),
            7 => Ok(ParameterKind::IntegerArray),
            8 => Ok(ParameterKind::DoubleArray),
            9 => Ok(ParameterKind::StringArray),
            other => Err(ModelError::UnknownParameterType(other)),
        }
    }
}

impl fmt::Display for ParameterKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.type_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_normalize_type_name_per_kind() {
        assert_eq!(normalize_type_name("std_msgs/msg/String"), "std_msgs.String");
        assert_eq!(
            normalize_type_name("example_srvs/srv/AddTwoInts"),
            "example_srvs.AddTwoInts"
        );
        assert_eq!(
            normalize_type_name("example_actions/action/Fibonacci"),
            "example_actions.Fibonacci"
        );
        // already-normalized names pass through
        assert_eq!(normalize_type_name("std_msgs.String"), "std_msgs.String");
    }

    #[test]
    fn test_normalize_topic_types_first_entry_only() {
        let topics = vec![
            TopicInfo {
                name: "/chatter".to_string(),
                types: vec![
                    "std_msgs/msg/String".to_string(),
                    "std_msgs/msg/Header".to_string(),
                ],
            },
            TopicInfo {
                name: "/cmd_vel".to_string(),
                types: vec!["geometry_msgs/msg/Twist".to_string()],
            },
        ];

        let normalized = normalize_topic_types(topics);
        assert_eq!(normalized.len(), 2);
        assert_eq!(normalized[0].name, "/chatter");
        assert_eq!(normalized[0].types[0], "std_msgs.String");
        assert_eq!(normalized[0].types[1], "std_msgs/msg/Header");
        assert_eq!(normalized[1].types[0], "geometry_msgs.Twist");
    }

    #[test]
    fn test_normalize_topic_types_empty_type_list() {
        let topics = vec![TopicInfo {
            name: "/empty".to_string(),
            types: Vec::new(),
        }];
        let normalized = normalize_topic_types(topics);
        assert!(normalized[0].types.is_empty());
    }

    #[test]
    fn test_parameter_kind_known_ids() {
        let expected = [
            (0, "not set"),
            (1, "bool"),
            (2, "int"),
            (3, "double"),
            (4, "string"),
            (5, "byte[]"),
            (6, "bool[]"),
            (7, "int[]"),
            (8, "double[]"),
            (9, "string[]"),
        ];
        for (id, display) in expected {
            let kind = ParameterKind::try_from(id).unwrap();
            assert_eq!(kind.type_string(), display);
            assert_eq!(kind.to_string(), display);
        }
    }

    #[test]
    fn test_parameter_kind_unknown_id_fails() {
        let result = ParameterKind::try_from(10);
        assert!(matches!(result, Err(ModelError::UnknownParameterType(10))));
        assert!(ParameterKind::try_from(u8::MAX).is_err());
    }
}
