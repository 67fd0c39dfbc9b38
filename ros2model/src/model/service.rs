/// Service model extraction
use std::fs;
use std::path::Path;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use super::errors::ModelResult;
use super::interface_name;
use super::line::{SECTION_SEPARATOR, split_field_line};
use super::message::FieldMap;

/// Structural model of one service file
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Service {
    /// Service name, derived from the file stem
    pub name: String,
    /// Fields declared before the separator line
    pub request: FieldMap,
    /// Fields declared after the separator line
    pub response: FieldMap,
}

impl Service {
    /// Get the type of a request field by name
    #[must_use]
    pub fn get_request_field(&self, name: &str) -> Option<&str> {
        self.request.get(name).map(String::as_str)
    }

    /// Get the type of a response field by name
    #[must_use]
    pub fn get_response_field(&self, name: &str) -> Option<&str> {
        self.response.get(name).map(String::as_str)
    }

    /// Check if the service has any request fields
    #[must_use]
    pub fn has_request_fields(&self) -> bool {
        !self.request.is_empty()
    }

    /// Check if the service has any response fields
    #[must_use]
    pub fn has_response_fields(&self) -> bool {
        !self.response.is_empty()
    }
}

impl std::fmt::Display for Service {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        writeln!(f, "# {}", self.name)?;
        for (field_name, type_name) in &self.request {
            writeln!(f, "{type_name} {field_name}")?;
        }
        writeln!(f, "{SECTION_SEPARATOR}")?;
        for (field_name, type_name) in &self.response {
            writeln!(f, "{type_name} {field_name}")?;
        }
        Ok(())
    }
}

/// Request/response section tracker
#[derive(Clone, Copy)]
enum ServiceSection {
    Request,
    Response,
}

/// Parse a service file
///
/// The service name is the file's base name with the extension stripped.
///
/// # Errors
///
/// Returns [`super::ModelError`] if the file name cannot be interpreted or
/// the file cannot be read. Separator-count oddities never error; see
/// [`parse_service_string`].
pub fn parse_service_file<P: AsRef<Path>>(path: P) -> ModelResult<Service> {
    let path = path.as_ref();
    let name = interface_name(path)?;
    let content = fs::read_to_string(path)?;
    Ok(parse_service_string(&name, &content))
}

/// Parse a service from string content
///
/// A line containing `---` switches field collection from the request to
/// the response section; the switch is permanent, so a missing separator
/// leaves the response empty and any further separators fold their fields
/// into the response.
#[must_use]
pub fn parse_service_string(srv_name: &str, content: &str) -> Service {
    let mut request = FieldMap::new();
    let mut response = FieldMap::new();
    let mut section = ServiceSection::Request;

    for line in content.lines() {
        if line.contains(SECTION_SEPARATOR) {
            section = ServiceSection::Response;
            continue;
        }
        let Some(entry) = split_field_line(line) else {
            continue;
        };
        let fields = match section {
            ServiceSection::Request => &mut request,
            ServiceSection::Response => &mut response,
        };
        fields.insert(entry.field_name, entry.type_name);
    }

    Service {
        name: srv_name.to_string(),
        request,
        response,
    }
}
