use std::fmt;

/// Outcome of one check
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CheckStatus {
    /// Check passed
    Ok,
    /// Check passed with warnings
    Warning(String),
    /// Check failed
    Failed(String),
}

impl CheckStatus {
    fn is_ok(&self) -> bool {
        matches!(self, CheckStatus::Ok)
    }

    fn is_warning(&self) -> bool {
        matches!(self, CheckStatus::Warning(_))
    }

    fn is_failed(&self) -> bool {
        matches!(self, CheckStatus::Failed(_))
    }

    /// The warning or failure message
    pub fn message(&self) -> Option<&str> {
        match self {
            CheckStatus::Ok => None,
            CheckStatus::Warning(msg) | CheckStatus::Failed(msg) => Some(msg),
        }
    }

    fn tone(&self) -> Tone {
        match self {
            CheckStatus::Ok => Tone::Good,
            CheckStatus::Warning(_) => Tone::Caution,
            CheckStatus::Failed(_) => Tone::Bad,
        }
    }
}

/// A named check and its outcome
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValidationCheck {
    /// What was checked
    pub name: String,
    /// Outcome of the check
    pub status: CheckStatus,
}

impl ValidationCheck {
    fn new(name: impl Into<String>, status: CheckStatus) -> Self {
        Self {
            name: name.into(),
            status,
        }
    }

    pub(crate) fn ok(name: impl Into<String>) -> Self {
        Self::new(name, CheckStatus::Ok)
    }

    pub(crate) fn warning(name: impl Into<String>, message: impl Into<String>) -> Self {
        Self::new(name, CheckStatus::Warning(message.into()))
    }

    pub(crate) fn failed(name: impl Into<String>, message: impl Into<String>) -> Self {
        Self::new(name, CheckStatus::Failed(message.into()))
    }
}

/// How a piece of the report is highlighted
#[derive(Clone, Copy)]
enum Tone {
    Title,
    Label,
    Good,
    Caution,
    Bad,
}

/// Styles report text; the plain painter returns it unchanged
trait Painter {
    fn paint(&self, tone: Tone, text: &str) -> String;
    fn symbol(&self, tone: Tone) -> String;
}

struct Plain;

impl Painter for Plain {
    fn paint(&self, _tone: Tone, text: &str) -> String {
        text.to_string()
    }

    fn symbol(&self, tone: Tone) -> String {
        let symbol = match tone {
            Tone::Caution => "⚠",
            Tone::Bad => "✗",
            _ => "✓",
        };
        symbol.to_string()
    }
}

#[cfg(feature = "colorized_output")]
struct Colored;

#[cfg(feature = "colorized_output")]
impl Painter for Colored {
    fn paint(&self, tone: Tone, text: &str) -> String {
        use console::style;

        let styled = style(text);
        let styled = match tone {
            Tone::Title => styled.bold().cyan(),
            Tone::Label => styled.bold(),
            Tone::Good => styled.green(),
            Tone::Caution => styled.yellow(),
            Tone::Bad => styled.red(),
        };
        styled.to_string()
    }

    fn symbol(&self, tone: Tone) -> String {
        use console::Emoji;

        static OK: Emoji<'_, '_> = Emoji("✓", "[OK]");
        static WARN: Emoji<'_, '_> = Emoji("⚠", "[WARN]");
        static FAIL: Emoji<'_, '_> = Emoji("✗", "[FAIL]");

        let emoji = match tone {
            Tone::Caution => &WARN,
            Tone::Bad => &FAIL,
            _ => &OK,
        };
        emoji.to_string()
    }
}

/// Every check run against one metadata document
#[derive(Debug, Clone)]
pub struct ValidationReport {
    /// Checks in the order they were run
    pub checks: Vec<ValidationCheck>,
    /// Where the metadata came from (usually a file path)
    pub source: String,
}

impl ValidationReport {
    /// Create an empty report for metadata read from `source`
    pub fn new(source: impl Into<String>) -> Self {
        Self {
            checks: Vec::new(),
            source: source.into(),
        }
    }

    /// Add a check result
    pub fn add_check(&mut self, check: ValidationCheck) {
        self.checks.push(check);
    }

    /// True if any check failed
    pub fn has_failures(&self) -> bool {
        self.checks.iter().any(|c| c.status.is_failed())
    }

    /// True if any check produced a warning
    pub fn has_warnings(&self) -> bool {
        self.checks.iter().any(|c| c.status.is_warning())
    }

    /// Number of passed checks
    pub fn success_count(&self) -> usize {
        self.checks.iter().filter(|c| c.status.is_ok()).count()
    }

    /// Number of warnings
    pub fn warning_count(&self) -> usize {
        self.checks.iter().filter(|c| c.status.is_warning()).count()
    }

    /// Number of failed checks
    pub fn failure_count(&self) -> usize {
        self.checks.iter().filter(|c| c.status.is_failed()).count()
    }

    fn verdict(&self) -> (Tone, &'static str) {
        if self.has_failures() {
            (Tone::Bad, "Validation FAILED")
        } else if self.has_warnings() {
            (Tone::Caution, "Validation PASSED with warnings")
        } else {
            (Tone::Good, "Validation PASSED")
        }
    }

    fn render(&self, painter: &dyn Painter) -> String {
        const TITLE: &str = "SOCAT Metadata Validation Report";

        let mut lines = vec![
            painter.paint(Tone::Title, TITLE),
            painter.paint(Tone::Title, &"=".repeat(TITLE.len())),
            format!("{}: {}", painter.paint(Tone::Label, "Source"), self.source),
            String::new(),
        ];

        for check in &self.checks {
            let tone = check.status.tone();
            let mut line = format!(
                "[{}] {}",
                painter.symbol(tone),
                painter.paint(tone, &check.name)
            );
            if let Some(msg) = check.status.message() {
                let label = if check.status.is_failed() { "FAILED" } else { "WARNING" };
                line.push_str(&format!(" - {}: {}", painter.paint(tone, label), msg));
            }
            lines.push(line);
        }

        let (tone, verdict) = self.verdict();
        lines.extend([
            String::new(),
            format!(
                "{}: {} passed, {} warnings, {} failed",
                painter.paint(Tone::Label, "Summary"),
                painter.paint(Tone::Good, &self.success_count().to_string()),
                painter.paint(Tone::Caution, &self.warning_count().to_string()),
                painter.paint(Tone::Bad, &self.failure_count().to_string())
            ),
            String::new(),
            painter.paint(tone, verdict),
        ]);

        let mut output = lines.join("\n");
        output.push('\n');
        output
    }

    /// The report with colors and symbols for a terminal.
    ///
    /// Without the `colorized_output` feature this is the plain
    /// [`Display`](fmt::Display) form.
    pub fn format_colored(&self) -> String {
        #[cfg(feature = "colorized_output")]
        {
            self.render(&Colored)
        }

        #[cfg(not(feature = "colorized_output"))]
        {
            self.render(&Plain)
        }
    }
}

impl fmt::Display for ValidationReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.render(&Plain))
    }
}
