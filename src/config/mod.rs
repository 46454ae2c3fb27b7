mod document;

use std::path::{Path, PathBuf};

use document::{ConfigDocument, ParseNode};

use crate::hook::template::{
    HookTemplate, DEFAULT_CHECK_COMMAND, DEFAULT_EXTENSION, DEFAULT_LANGUAGE,
};

/// Optional configuration for the `quickhooks` binary, loaded from KDL.
///
/// ```kdl
/// check {
///     command "python -m py_compile"
///     extension "py"
///     language "Python"
/// }
/// ```
///
/// The library entry point [`crate::setup()`] never reads a config; it always
/// uses the defaults.
#[derive(Debug, Default, PartialEq, Eq)]
pub struct Config {
    pub check: CheckConfig,
}

/// The syntax check the rendered pre-commit hook runs.
#[derive(Debug, PartialEq, Eq)]
pub struct CheckConfig {
    pub command: String,
    pub extension: String,
    /// Name shown in the hook's comments.
    pub language: String,
}

impl Default for CheckConfig {
    fn default() -> Self {
        CheckConfig {
            command: DEFAULT_CHECK_COMMAND.to_string(),
            extension: DEFAULT_EXTENSION.to_string(),
            language: DEFAULT_LANGUAGE.to_string(),
        }
    }
}

/// Errors that can occur when loading or parsing a config file.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("config file not found: {0}")]
    NotFound(PathBuf),
    #[error("failed to read config: {0}")]
    ReadError(#[from] std::io::Error),
    #[error("invalid KDL syntax: {0}")]
    ParseError(String),
    #[error("invalid config: {0}")]
    ValidationError(String),
}

impl Config {
    /// Load a config from a KDL file at the given path.
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        Self::from_document(&ConfigDocument::load(path)?)
    }

    /// Parse a KDL string into a Config.
    pub fn parse(content: &str) -> Result<Self, ConfigError> {
        Self::from_document(&ConfigDocument::parse(content)?)
    }

    /// The hook script this config renders.
    pub fn hook_template(&self) -> HookTemplate {
        HookTemplate {
            command: self.check.command.clone(),
            extension: self.check.extension.clone(),
            language: self.check.language.clone(),
        }
    }

    fn from_document(doc: &ConfigDocument) -> Result<Self, ConfigError> {
        for node in doc.top_level() {
            if node.name() != "check" {
                return Err(invalid(&node, format!("unknown section '{}'", node.name())));
            }
        }

        let mut check = CheckConfig::default();
        for node in doc.section("check").unwrap_or_default() {
            match node.name() {
                "command" => check.command = string_arg(&node)?.to_string(),
                "extension" => check.extension = parse_extension(&node)?,
                "language" => check.language = parse_language(&node)?,
                other => return Err(invalid(&node, format!("unknown setting '{other}'"))),
            }
        }
        Ok(Config { check })
    }
}

fn invalid(node: &ParseNode<'_>, message: String) -> ConfigError {
    ConfigError::ValidationError(format!("line {}: {message}", node.line()))
}

/// The node's one non-blank string argument.
fn string_arg<'a>(node: &ParseNode<'a>) -> Result<&'a str, ConfigError> {
    match node.single_string() {
        Some(value) if !value.trim().is_empty() => Ok(value),
        _ => Err(invalid(
            node,
            format!("'{}' takes exactly one non-empty string", node.name()),
        )),
    }
}

/// Extensions are interpolated into a `grep -E` pattern, so only plain
/// word characters are accepted. A leading dot is stripped.
fn parse_extension(node: &ParseNode<'_>) -> Result<String, ConfigError> {
    let raw = string_arg(node)?;
    let ext = raw.strip_prefix('.').unwrap_or(raw);
    if ext.is_empty()
        || !ext
            .chars()
            .all(|c| c.is_ascii_alphanumeric() || matches!(c, '_' | '-'))
    {
        return Err(invalid(node, format!("invalid extension '{raw}'")));
    }
    Ok(ext.to_string())
}

/// The language name lands in a shell comment, so it must stay on one line.
fn parse_language(node: &ParseNode<'_>) -> Result<String, ConfigError> {
    let raw = string_arg(node)?;
    if raw.contains(['\n', '\r']) {
        return Err(invalid(node, "'language' must be a single line".to_string()));
    }
    Ok(raw.trim().to_string())
}
