//! Colored terminal output.
//!
//! Progress and results go to stdout, warnings and errors to stderr.
//! `--quiet` silences everything but final results; `--verbose` enables
//! detail lines.

use termcolor::{Color, ColorChoice, ColorSpec, StandardStream, WriteColor};
use std::io::{self, IsTerminal, Write};

/// Terminal printer honoring the verbosity flags.
#[derive(Debug, Clone)]
pub struct OutputManager {
    verbose: bool,
    quiet: bool,
}

impl OutputManager {
    /// Creates a printer.
    pub fn new(verbose: bool, quiet: bool) -> Self {
        Self { verbose, quiet }
    }

    fn stdout() -> StandardStream {
        StandardStream::stdout(if io::stdout().is_terminal() {
            ColorChoice::Auto
        } else {
            ColorChoice::Never
        })
    }

    fn stderr() -> StandardStream {
        StandardStream::stderr(if io::stderr().is_terminal() {
            ColorChoice::Auto
        } else {
            ColorChoice::Never
        })
    }

    fn write_tagged(
        stream: &mut StandardStream,
        tag: &str,
        color: Color,
        message: &str,
    ) -> io::Result<()> {
        stream.set_color(ColorSpec::new().set_fg(Some(color)).set_bold(true))?;
        write!(stream, "{}", tag)?;
        stream.reset()?;
        writeln!(stream, " {}", message)
    }

    /// Detail line, shown with `--verbose` only.
    pub fn verbose(&self, message: &str) -> io::Result<()> {
        if !self.verbose || self.quiet {
            return Ok(());
        }
        let mut stdout = Self::stdout();
        stdout.set_color(ColorSpec::new().set_dimmed(true))?;
        writeln!(stdout, "  {}", message)?;
        stdout.reset()
    }

    /// Warning on stderr.
    pub fn warn(&self, message: &str) -> io::Result<()> {
        if self.quiet {
            return Ok(());
        }
        Self::write_tagged(&mut Self::stderr(), "warning:", Color::Yellow, message)
    }

    /// Completed step.
    pub fn success(&self, message: &str) -> io::Result<()> {
        if self.quiet {
            return Ok(());
        }
        Self::write_tagged(&mut Self::stdout(), "✓", Color::Green, message)
    }

    /// Step in progress.
    pub fn progress(&self, message: &str) -> io::Result<()> {
        if self.quiet {
            return Ok(());
        }
        Self::write_tagged(&mut Self::stdout(), "→", Color::Cyan, message)
    }

    /// Section header.
    pub fn section(&self, title: &str) -> io::Result<()> {
        if self.quiet {
            return Ok(());
        }
        let mut stdout = Self::stdout();
        stdout.set_color(ColorSpec::new().set_bold(true))?;
        writeln!(stdout, "\n{}", title)?;
        stdout.reset()?;
        writeln!(stdout, "{}", "─".repeat(title.chars().count()))
    }

    /// Indented detail under a section.
    pub fn indent(&self, message: &str) -> io::Result<()> {
        if self.quiet {
            return Ok(());
        }
        writeln!(Self::stdout(), "  {}", message)
    }

    /// Plain result line, printed even with `--quiet`.
    pub fn result(&self, message: &str) -> io::Result<()> {
        writeln!(Self::stdout(), "{}", message)
    }
}
