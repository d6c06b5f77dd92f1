//! Colored terminal output
//!
//! Everything, including fatal errors, goes to stdout.

use std::io::{IsTerminal, Write};
use termcolor::{BufferWriter, Color, ColorChoice, ColorSpec, WriteColor};

/// Output manager for consistent colored terminal output
#[derive(Debug)]
pub struct OutputManager {
    bufwtr: BufferWriter,
}

impl Clone for OutputManager {
    fn clone(&self) -> Self {
        Self::new()
    }
}

impl Default for OutputManager {
    fn default() -> Self {
        Self::new()
    }
}

impl OutputManager {
    /// Create a new output manager writing to stdout
    ///
    /// Colors are disabled when stdout is not a terminal.
    pub fn new() -> Self {
        let choice = if std::io::stdout().is_terminal() {
            ColorChoice::Auto
        } else {
            ColorChoice::Never
        };
        Self {
            bufwtr: BufferWriter::stdout(choice),
        }
    }

    fn tagged(
        &self,
        tag: &str,
        tag_spec: ColorSpec,
        body_spec: Option<ColorSpec>,
        message: &str,
    ) -> std::io::Result<()> {
        let mut buffer = self.bufwtr.buffer();
        let _ = buffer.set_color(&tag_spec);
        let _ = write!(&mut buffer, "{}", tag);
        let _ = buffer.reset();
        if let Some(body_spec) = &body_spec {
            let _ = buffer.set_color(body_spec);
        }
        let _ = writeln!(&mut buffer, " {}", message);
        let _ = buffer.reset();
        self.bufwtr.print(&buffer)
    }

    /// Print an info message
    pub fn info(&self, message: &str) -> std::io::Result<()> {
        self.tagged("ℹ", color(Color::Cyan, false), None, message)
    }

    /// Print a success message
    pub fn success(&self, message: &str) -> std::io::Result<()> {
        self.tagged(
            "✓",
            color(Color::Green, true),
            Some(color(Color::Green, true)),
            message,
        )
    }

    /// Print a warning message
    pub fn warn(&self, message: &str) -> std::io::Result<()> {
        self.tagged(
            "⚠",
            color(Color::Yellow, true),
            Some(color(Color::Yellow, false)),
            message,
        )
    }

    /// Print an error message (always shown)
    pub fn error(&self, message: &str) {
        if self
            .tagged(
                "✗",
                color(Color::Red, true),
                Some(color(Color::Red, false)),
                message,
            )
            .is_err()
        {
            // Colored write failed - plain println as last resort
            println!("✗ {}", message);
        }
    }

    /// Print a section header
    pub fn section(&self, title: &str) -> std::io::Result<()> {
        let mut buffer = self.bufwtr.buffer();
        let _ = writeln!(&mut buffer);
        let _ = buffer.set_color(&color(Color::Cyan, true));
        let _ = writeln!(&mut buffer, "═══ {} ═══", title);
        let _ = buffer.reset();
        self.bufwtr.print(&buffer)
    }

    /// Print indented text (for sub-items)
    pub fn indent(&self, message: &str) -> std::io::Result<()> {
        let mut buffer = self.bufwtr.buffer();
        let _ = writeln!(&mut buffer, "    {}", message);
        self.bufwtr.print(&buffer)
    }

    /// Print a plain message
    pub fn println(&self, message: &str) -> std::io::Result<()> {
        let mut buffer = self.bufwtr.buffer();
        let _ = writeln!(&mut buffer, "{}", message);
        self.bufwtr.print(&buffer)
    }

    /// Print a prompt without a trailing newline and flush it
    pub fn prompt(&self, message: &str) -> std::io::Result<()> {
        let mut buffer = self.bufwtr.buffer();
        let _ = buffer.set_color(ColorSpec::new().set_bold(true));
        let _ = write!(&mut buffer, "{}", message);
        let _ = buffer.reset();
        self.bufwtr.print(&buffer)?;
        std::io::stdout().flush()
    }
}

fn color(fg: Color, bold: bool) -> ColorSpec {
    let mut spec = ColorSpec::new();
    spec.set_fg(Some(fg)).set_bold(bold);
    spec
}
