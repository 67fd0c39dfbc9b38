/// Action model extraction
use std::fs;
use std::path::Path;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use super::errors::ModelResult;
use super::interface_name;
use super::line::{SECTION_SEPARATOR, split_field_line};
use super::message::FieldMap;

/// Structural model of one action file
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Action {
    /// Action name, derived from the file stem
    pub name: String,
    /// Fields declared before the first separator line
    pub goal: FieldMap,
    /// Fields declared between the first and second separator lines
    pub result: FieldMap,
    /// Fields declared after the second separator line
    pub feedback: FieldMap,
}

impl Action {
    /// Get the type of a goal field by name
    #[must_use]
    pub fn get_goal_field(&self, name: &str) -> Option<&str> {
        self.goal.get(name).map(String::as_str)
    }

    /// Get the type of a result field by name
    #[must_use]
    pub fn get_result_field(&self, name: &str) -> Option<&str> {
        self.result.get(name).map(String::as_str)
    }

    /// Get the type of a feedback field by name
    #[must_use]
    pub fn get_feedback_field(&self, name: &str) -> Option<&str> {
        self.feedback.get(name).map(String::as_str)
    }

    /// Check if the action has any goal fields
    #[must_use]
    pub fn has_goal_fields(&self) -> bool {
        !self.goal.is_empty()
    }

    /// Check if the action has any result fields
    #[must_use]
    pub fn has_result_fields(&self) -> bool {
        !self.result.is_empty()
    }

    /// Check if the action has any feedback fields
    #[must_use]
    pub fn has_feedback_fields(&self) -> bool {
        !self.feedback.is_empty()
    }
}

impl std::fmt::Display for Action {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        writeln!(f, "# {}", self.name)?;
        for (field_name, type_name) in &self.goal {
            writeln!(f, "{type_name} {field_name}")?;
        }
        writeln!(f, "{SECTION_SEPARATOR}")?;
        for (field_name, type_name) in &self.result {
            writeln!(f, "{type_name} {field_name}")?;
        }
        writeln!(f, "{SECTION_SEPARATOR}")?;
        for (field_name, type_name) in &self.feedback {
            writeln!(f, "{type_name} {field_name}")?;
        }
        Ok(())
    }
}

/// Goal/result/feedback section tracker
#[derive(Clone, Copy)]
enum ActionSection {
    Goal,
    Result,
    Feedback,
}

impl ActionSection {
    /// Advance clamps at `Feedback`, so fields after a third or later
    /// separator still land in the feedback section.
    fn advance(self) -> Self {
        match self {
            ActionSection::Goal => ActionSection::Result,
            ActionSection::Result | ActionSection::Feedback => ActionSection::Feedback,
        }
    }
}

/// Parse an action file
///
/// The action name is the file's base name with the extension stripped.
///
/// # Errors
///
/// Returns [`super::ModelError`] if the file name cannot be interpreted or
/// the file cannot be read. Separator-count oddities never error; see
/// [`parse_action_string`].
pub fn parse_action_file<P: AsRef<Path>>(path: P) -> ModelResult<Action> {
    let path = path.as_ref();
    let name = interface_name(path)?;
    let content = fs::read_to_string(path)?;
    Ok(parse_action_string(&name, &content))
}

/// Parse an action from string content
///
/// Each line containing `---` advances the section: goal, then result,
/// then feedback. With no separator everything is goal; past the second
/// separator everything folds into feedback.
#[must_use]
pub fn parse_action_string(action_name: &str, content: &str) -> Action {
    let mut goal = FieldMap::new();
    let mut result = FieldMap::new();
    let mut feedback = FieldMap::new();
    let mut section = ActionSection::Goal;

    for line in content.lines() {
        if line.contains(SECTION_SEPARATOR) {
            section = section.advance();
            continue;
        }
        let Some(entry) = split_field_line(line) else {
            continue;
        };
        let fields = match section {
            ActionSection::Goal => &mut goal,
            ActionSection::Result => &mut result,
            ActionSection::Feedback => &mut feedback,
        };
        fields.insert(entry.field_name, entry.type_name);
    }

    Action {
        name: action_name.to_string(),
        goal,
        result,
        feedback,
    }
}
