use colored::Colorize;

/// Rendering strategy for report lines.
///
/// `Plain` is the identity strategy: it never emits escape codes, so it is
/// the one used for file output and `--no-color` terminals. Color changes
/// presentation only, never information content.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ColorMode {
    Ansi,
    #[default]
    Plain,
}

impl ColorMode {
    /// The audited URL.
    pub fn target(&self, s: &str) -> String {
        match self {
            ColorMode::Ansi => s.bright_cyan().bold().to_string(),
            ColorMode::Plain => s.to_string(),
        }
    }

    /// The checked-link count.
    pub fn count(&self, s: &str) -> String {
        match self {
            ColorMode::Ansi => s.cyan().to_string(),
            ColorMode::Plain => s.to_string(),
        }
    }

    /// The no-risks verdict line.
    pub fn clean(&self, s: &str) -> String {
        match self {
            ColorMode::Ansi => s.green().bold().to_string(),
            ColorMode::Plain => s.to_string(),
        }
    }

    /// The risks-found heading.
    pub fn risk(&self, s: &str) -> String {
        match self {
            ColorMode::Ansi => s.yellow().bold().to_string(),
            ColorMode::Plain => s.to_string(),
        }
    }

    /// A failed-audit line.
    pub fn error(&self, s: &str) -> String {
        match self {
            ColorMode::Ansi => s.red().bold().to_string(),
            ColorMode::Plain => s.to_string(),
        }
    }
}
