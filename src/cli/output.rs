//! Colored terminal output for user-facing messages.
//!
//! Diagnostics go through `log`; everything the user asked to see goes
//! through [`OutputManager`].

use std::io::{self, IsTerminal, Write};
use termcolor::{Color, ColorChoice, ColorSpec, StandardStream, WriteColor};

/// Writes status lines to stdout and errors to stderr.
#[derive(Debug, Clone)]
pub struct OutputManager {
    verbose: bool,
    quiet: bool,
    stdout_color: ColorChoice,
    stderr_color: ColorChoice,
}

impl OutputManager {
    /// Creates an output manager. `quiet` suppresses everything except
    /// errors and requested data.
    pub fn new(verbose: bool, quiet: bool) -> Self {
        Self {
            verbose,
            quiet,
            stdout_color: color_choice(io::stdout().is_terminal()),
            stderr_color: color_choice(io::stderr().is_terminal()),
        }
    }

    /// Prints a detail line in verbose mode.
    pub fn verbose(&self, message: &str) -> io::Result<()> {
        if !self.verbose || self.quiet {
            return Ok(());
        }
        self.styled_stdout(ColorSpec::new().set_dimmed(true), "", message)
    }

    /// Prints a success line.
    pub fn success(&self, message: &str) -> io::Result<()> {
        if self.quiet {
            return Ok(());
        }
        self.styled_stdout(
            ColorSpec::new().set_fg(Some(Color::Green)).set_bold(true),
            "✓ ",
            message,
        )
    }

    /// Prints a warning line.
    pub fn warn(&self, message: &str) -> io::Result<()> {
        if self.quiet {
            return Ok(());
        }
        self.styled_stdout(
            ColorSpec::new().set_fg(Some(Color::Yellow)).set_bold(true),
            "! ",
            message,
        )
    }

    /// Prints a progress line.
    pub fn progress(&self, message: &str) -> io::Result<()> {
        if self.quiet {
            return Ok(());
        }
        self.styled_stdout(ColorSpec::new().set_fg(Some(Color::Cyan)), "→ ", message)
    }

    /// Prints a section header.
    pub fn section(&self, title: &str) -> io::Result<()> {
        self.styled_stdout(ColorSpec::new().set_bold(true).set_underline(true), "", title)
    }

    /// Prints an indented line.
    pub fn indent(&self, message: &str) -> io::Result<()> {
        self.styled_stdout(&ColorSpec::new(), "  ", message)
    }

    /// Prints a line of data. Not affected by quiet mode.
    pub fn data(&self, message: &str) -> io::Result<()> {
        let mut stdout = io::stdout().lock();
        writeln!(stdout, "{message}")
    }

    /// Prints an error, plus an optional hint, to stderr.
    pub fn error(&self, message: &str, hint: Option<&str>) -> io::Result<()> {
        let mut stderr = StandardStream::stderr(self.stderr_color);
        stderr.set_color(ColorSpec::new().set_fg(Some(Color::Red)).set_bold(true))?;
        write!(stderr, "Error:")?;
        stderr.reset()?;
        writeln!(stderr, " {message}")?;
        if let Some(hint) = hint {
            stderr.set_color(ColorSpec::new().set_dimmed(true))?;
            write!(stderr, "  hint: {hint}")?;
            stderr.reset()?;
            writeln!(stderr)?;
        }
        Ok(())
    }

    fn styled_stdout(&self, spec: &ColorSpec, prefix: &str, message: &str) -> io::Result<()> {
        let mut stdout = StandardStream::stdout(self.stdout_color);
        stdout.set_color(spec)?;
        write!(stdout, "{prefix}{message}")?;
        stdout.reset()?;
        writeln!(stdout)
    }
}

fn color_choice(is_terminal: bool) -> ColorChoice {
    if is_terminal {
        ColorChoice::Auto
    } else {
        ColorChoice::Never
    }
}
