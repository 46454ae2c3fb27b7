//! Pre-commit hook script rendering.

/// Second line of every rendered hook; identifies a hook this tool wrote.
pub const MARKER: &str = "# QuickHooks - Auto-generated pre-commit hook";

pub const DEFAULT_CHECK_COMMAND: &str = "python -m py_compile";
pub const DEFAULT_EXTENSION: &str = "py";
pub const DEFAULT_LANGUAGE: &str = "Python";

/// The pre-commit script written by the installer.
///
/// The rendered script runs a syntax-only check over staged files with the
/// given extension, discards all diagnostics, and always exits 0. It never
/// blocks a commit.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HookTemplate {
    /// Checker invoked with the staged file names as arguments.
    pub command: String,
    /// File extension to select, without the leading dot.
    pub extension: String,
    /// Language name used in the script's comments.
    pub language: String,
}

impl Default for HookTemplate {
    fn default() -> Self {
        HookTemplate {
            command: DEFAULT_CHECK_COMMAND.to_string(),
            extension: DEFAULT_EXTENSION.to_string(),
            language: DEFAULT_LANGUAGE.to_string(),
        }
    }
}

impl HookTemplate {
    pub fn render(&self) -> String {
        let HookTemplate {
            command,
            extension,
            language,
        } = self;
        format!(
            "#!/bin/sh\n\
             {MARKER}\n\
             # Runs basic {language} code quality checks\n\
             \n\
             # Run {language} syntax check on staged files\n\
             {command} $(git diff --cached --name-only --diff-filter=ACM | grep -E '\\.{extension}$') 2>/dev/null\n\
             \n\
             exit 0\n"
        )
    }
}

/// Whether hook content was written by this tool.
pub fn is_managed(content: &str) -> bool {
    content.lines().nth(1) == Some(MARKER)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_script_is_the_stock_hook() {
        let expected = r#"#!/bin/sh
# QuickHooks - Auto-generated pre-commit hook
# Runs basic Python code quality checks

# Run Python syntax check on staged files
python -m py_compile $(git diff --cached --name-only --diff-filter=ACM | grep -E '\.py$') 2>/dev/null

exit 0
"#;
        assert_eq!(HookTemplate::default().render(), expected);
    }

    #[test]
    fn default_script_starts_with_shebang() {
        let script = HookTemplate::default().render();
        assert_eq!(script.lines().next(), Some("#!/bin/sh"));
    }

    #[test]
    fn default_script_checks_staged_python_files() {
        let script = HookTemplate::default().render();
        assert!(script.contains(
            "python -m py_compile $(git diff --cached --name-only --diff-filter=ACM | grep -E '\\.py$') 2>/dev/null"
        ));
    }

    #[test]
    fn script_always_exits_zero() {
        let script = HookTemplate::default().render();
        assert_eq!(script.trim_end().lines().last(), Some("exit 0"));
        assert!(script.ends_with('\n'));
    }

    #[test]
    fn render_is_deterministic() {
        assert_eq!(
            HookTemplate::default().render(),
            HookTemplate::default().render()
        );
    }

    #[test]
    fn custom_command_and_extension() {
        let template = HookTemplate {
            command: "ruby -c".into(),
            extension: "rb".into(),
            language: "Ruby".into(),
        };
        let script = template.render();
        assert!(script.contains("ruby -c $(git diff"));
        assert!(script.contains("grep -E '\\.rb$'"));
        assert!(script.contains("# Runs basic Ruby code quality checks\n"));
        assert!(script.contains("# Run Ruby syntax check on staged files\n"));
    }

    #[test]
    fn rendered_script_is_managed() {
        assert!(is_managed(&HookTemplate::default().render()));
    }

    #[test]
    fn foreign_script_is_not_managed() {
        assert!(!is_managed("#!/bin/sh\nnpx lint-staged\n"));
        assert!(!is_managed(""));
    }
}
