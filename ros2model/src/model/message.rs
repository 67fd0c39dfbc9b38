/// Message model extraction
use std::collections::BTreeMap;
use std::fs;
use std::path::Path;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use super::errors::ModelResult;
use super::interface_name;
use super::line::{CONSTANT_SEPARATOR, split_field_line};

/// Mapping of field name to dot-namespaced type name.
///
/// Keys are unique; a field redeclared later in the file overwrites the
/// earlier entry (last write wins, not an error).
pub type FieldMap = BTreeMap<String, String>;

/// Structural model of one message file
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Message {
    /// Message name, derived from the file stem
    pub name: String,
    /// Declared fields
    pub fields: FieldMap,
}

impl Message {
    /// Get the type of a field by name
    #[must_use]
    pub fn get_field(&self, name: &str) -> Option<&str> {
        self.fields.get(name).map(String::as_str)
    }

    /// Check if the message has any fields
    #[must_use]
    pub fn has_fields(&self) -> bool {
        !self.fields.is_empty()
    }
}

impl std::fmt::Display for Message {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        writeln!(f, "# {}", self.name)?;
        for (field_name, type_name) in &self.fields {
            writeln!(f, "{type_name} {field_name}")?;
        }
        Ok(())
    }
}

/// Parse a message file
///
/// The message name is the file's base name with the extension stripped.
///
/// # Errors
///
/// Returns [`super::ModelError`] if the file name cannot be interpreted or
/// the file cannot be read. Malformed content never errors; bad lines are
/// skipped.
pub fn parse_message_file<P: AsRef<Path>>(path: P) -> ModelResult<Message> {
    let path = path.as_ref();
    let name = interface_name(path)?;
    let content = fs::read_to_string(path)?;
    Ok(parse_message_string(&name, &content))
}

/// Parse a message from string content
#[must_use]
pub fn parse_message_string(msg_name: &str, content: &str) -> Message {
    let mut fields = FieldMap::new();
    for line in content.lines() {
        // constant and blank lines are dropped before tokenizing
        if line.contains(CONSTANT_SEPARATOR) || line.is_empty() {
            continue;
        }
        if let Some(entry) = split_field_line(line) {
            fields.insert(entry.field_name, entry.type_name);
        }
    }

    Message {
        name: msg_name.to_string(),
        fields,
    }
}
