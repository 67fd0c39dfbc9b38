/// Directory aggregation for interface spec files
use std::ffi::OsStr;
use std::fs;
use std::path::{Path, PathBuf};

use super::errors::ModelResult;
use super::{
    Action, InterfaceModel, Message, Service, parse_action_file, parse_message_file,
    parse_service_file,
};

/// Kind of interface file, keyed by its canonical extension
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InterfaceKind {
    /// Message file (`.msg`)
    Message,
    /// Service file (`.srv`)
    Service,
    /// Action file (`.action`)
    Action,
}

impl InterfaceKind {
    /// Canonical file extension for this kind, without the dot
    #[must_use]
    pub const fn extension(self) -> &'static str {
        match self {
            InterfaceKind::Message => "msg",
            InterfaceKind::Service => "srv",
            InterfaceKind::Action => "action",
        }
    }
}

impl std::fmt::Display for InterfaceKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.extension())
    }
}

/// Enumerate the regular files in `dir` with the given extension.
///
/// Not recursive; subdirectories and non-matching files are ignored. Files
/// come back in whatever order the filesystem yields them - callers that
/// need a stable order must sort. An empty directory is not an error.
///
/// # Errors
///
/// Returns [`super::ModelError::Io`] if the directory cannot be read.
pub fn spec_files<P: AsRef<Path>>(dir: P, extension: &str) -> ModelResult<Vec<PathBuf>> {
    let dir = dir.as_ref();
    let mut files = Vec::new();
    for entry in fs::read_dir(dir)? {
        let path = entry?.path();
        if path.is_file() && path.extension().and_then(OsStr::to_str) == Some(extension) {
            files.push(path);
        }
    }
    log::debug!(
        "found {} .{} files in {}",
        files.len(),
        extension,
        dir.display()
    );
    Ok(files)
}

/// Parse every message file in a directory
///
/// # Errors
///
/// Returns [`super::ModelError`] if the directory or any matching file
/// cannot be read.
pub fn scan_message_dir<P: AsRef<Path>>(dir: P) -> ModelResult<Vec<Message>> {
    spec_files(dir, InterfaceKind::Message.extension())?
        .iter()
        .map(parse_message_file)
        .collect()
}

/// Parse every service file in a directory
///
/// # Errors
///
/// Returns [`super::ModelError`] if the directory or any matching file
/// cannot be read.
pub fn scan_service_dir<P: AsRef<Path>>(dir: P) -> ModelResult<Vec<Service>> {
    spec_files(dir, InterfaceKind::Service.extension())?
        .iter()
        .map(parse_service_file)
        .collect()
}

/// Parse every action file in a directory
///
/// # Errors
///
/// Returns [`super::ModelError`] if the directory or any matching file
/// cannot be read.
pub fn scan_action_dir<P: AsRef<Path>>(dir: P) -> ModelResult<Vec<Action>> {
    spec_files(dir, InterfaceKind::Action.extension())?
        .iter()
        .map(parse_action_file)
        .collect()
}

/// Parse every file of the given kind in a directory
///
/// # Errors
///
/// Returns [`super::ModelError`] if the directory or any matching file
/// cannot be read.
pub fn scan_dir<P: AsRef<Path>>(kind: InterfaceKind, dir: P) -> ModelResult<Vec<InterfaceModel>> {
    let models = match kind {
        InterfaceKind::Message => scan_message_dir(dir)?
            .into_iter()
            .map(InterfaceModel::Message)
            .collect(),
        InterfaceKind::Service => scan_service_dir(dir)?
            .into_iter()
            .map(InterfaceModel::Service)
            .collect(),
        InterfaceKind::Action => scan_action_dir(dir)?
            .into_iter()
            .map(InterfaceModel::Action)
            .collect(),
    };
    Ok(models)
}

/// Ensure an output directory exists, creating parents as needed.
///
/// An already existing directory is not an error.
///
/// # Errors
///
/// Returns [`super::ModelError::Io`] if the directory cannot be created.
pub fn prepare_output_dir<P: AsRef<Path>>(dir: P) -> ModelResult<()> {
    fs::create_dir_all(dir)?;
    Ok(())
}
