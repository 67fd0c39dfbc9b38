// Constants for the interface file format
#[allow(missing_docs)]
pub const COMMENT_DELIMITER: char = '#';
#[allow(missing_docs)]
pub const CONSTANT_SEPARATOR: char = '=';
#[allow(missing_docs)]
pub const SECTION_SEPARATOR: &str = "---";

const NAMESPACE_SEPARATOR: char = '/';
const NORMALIZED_NAMESPACE_SEPARATOR: &str = ".";

/// A (type, field-name) pair split out of one declaration line.
///
/// The type name is already in the dot-namespaced form
/// (`pkg_name.Msg`, not `pkg_name/Msg`).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FieldEntry {
    /// Dot-namespaced type name
    pub type_name: String,
    /// Field name
    pub field_name: String,
}

/// Split one raw line of a spec file into a [`FieldEntry`].
///
/// Returns `None` for comment lines, constant assignment lines (anything
/// containing `=`, checked before the trailing comment is stripped), blank
/// lines, and lines that do not split into at least two tokens. A trailing
/// comment after a declaration is discarded. The split is on single space
/// characters with no whitespace normalization; runs of spaces produce
/// empty tokens and only the first two tokens are used.
#[must_use]
pub fn split_field_line(line: &str) -> Option<FieldEntry> {
    let line = line.strip_suffix('\n').unwrap_or(line);
    if line.starts_with(COMMENT_DELIMITER) || line.contains(CONSTANT_SEPARATOR) || line.is_empty()
    {
        return None;
    }

    let line = match line.find(COMMENT_DELIMITER) {
        Some(index) => &line[..index],
        None => line,
    };

    let mut tokens = line.split(' ');
    let type_token = tokens.next()?;
    let field_name = tokens.next()?;

    Some(FieldEntry {
        type_name: type_token.replace(NAMESPACE_SEPARATOR, NORMALIZED_NAMESPACE_SEPARATOR),
        field_name: field_name.to_string(),
    })
}
