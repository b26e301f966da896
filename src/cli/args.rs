//! Command line argument parsing and validation.

use clap::{Parser, Subcommand};
use std::path::{Path, PathBuf};

/// Freeze a Python GUI application and package it for hand-off
#[derive(Parser, Debug)]
#[command(
    name = "pyship",
    version,
    about = "Freeze a Python GUI application and package it for hand-off",
    long_about = "Builds a standalone executable with PyInstaller and assembles a zip \
distribution with the executable, its data files and user documents.

Settings come from pyship.toml in the project directory, or built-in defaults.

Usage:
  pyship build
  pyship distribute
  pyship release --keep-intermediates
  pyship --project-dir ../app spec

Exit code 0 = every requested step succeeded."
)]
pub struct Args {
    /// Project directory holding the entry script and data files
    #[arg(short = 'C', long, value_name = "DIR", default_value = ".", global = true)]
    pub project_dir: PathBuf,

    /// Project manifest (defaults to pyship.toml in the project directory)
    #[arg(short, long, value_name = "FILE", env = "PYSHIP_CONFIG", global = true)]
    pub config: Option<PathBuf>,

    /// Show detailed output
    #[arg(short, long, global = true, conflicts_with = "quiet")]
    pub verbose: bool,

    /// Only print errors and final results
    #[arg(short, long, global = true)]
    pub quiet: bool,

    #[command(subcommand)]
    pub command: Command,
}

/// Pipeline stage to run.
#[derive(Subcommand, Debug, Clone, PartialEq, Eq)]
pub enum Command {
    /// Build the executable with PyInstaller
    Build {
        /// Keep the generated spec file and build directory
        #[arg(long)]
        keep_intermediates: bool,
    },
    /// Assemble the distribution archive from an existing build
    Distribute,
    /// Build, then assemble the distribution
    Release {
        /// Keep the generated spec file and build directory
        #[arg(long)]
        keep_intermediates: bool,
    },
    /// Write the PyInstaller spec file only
    Spec,
}

impl Command {
    /// Whether intermediates should survive the run.
    pub fn keep_intermediates(&self) -> bool {
        match self {
            Self::Build { keep_intermediates } | Self::Release { keep_intermediates } => {
                *keep_intermediates
            }
            // `spec` exists to produce the intermediate
            Self::Spec => true,
            Self::Distribute => false,
        }
    }
}

impl Args {
    /// Parse command line arguments
    pub fn parse_args() -> Self {
        Self::parse()
    }

    /// Validate arguments for consistency
    pub fn validate(&self) -> Result<(), String> {
        if !self.project_dir.is_dir() {
            return Err(format!(
                "Project directory does not exist: {}",
                self.project_dir.display()
            ));
        }

        if let Some(config) = &self.config
            && !self.resolve(config).is_file()
        {
            return Err(format!("Config file not found: {}", config.display()));
        }

        Ok(())
    }

    /// Resolve a path given on the command line against the project directory.
    ///
    /// Relative paths always name a file in the project, even when the same
    /// relative path exists in the working directory.
    pub fn resolve(&self, path: &Path) -> PathBuf {
        if path.is_absolute() {
            path.to_path_buf()
        } else {
            self.project_dir.join(path)
        }
    }

    /// Default log filter implied by the verbosity flags.
    pub fn log_level(&self) -> &'static str {
        if self.verbose {
            "debug"
        } else if self.quiet {
            "error"
        } else {
            "warn"
        }
    }
}

/// Per-run state derived from the arguments.
///
/// Commands print through this rather than through [`super::OutputManager`]
/// directly, so the verbosity flags apply everywhere.
#[derive(Debug, Clone)]
pub struct RuntimeConfig {
    output: super::OutputManager,
}

impl From<&Args> for RuntimeConfig {
    fn from(args: &Args) -> Self {
        Self {
            output: super::OutputManager::new(args.verbose, args.quiet),
        }
    }
}

impl RuntimeConfig {
    /// Detail line, `--verbose` only.
    pub fn verbose_println(&self, message: &str) -> std::io::Result<()> {
        self.output.verbose(message)
    }

    pub fn success(&self, message: &str) -> std::io::Result<()> {
        self.output.success(message)
    }

    pub fn warn(&self, message: &str) -> std::io::Result<()> {
        self.output.warn(message)
    }

    pub fn progress(&self, message: &str) -> std::io::Result<()> {
        self.output.progress(message)
    }

    pub fn section(&self, title: &str) -> std::io::Result<()> {
        self.output.section(title)
    }

    pub fn indent(&self, message: &str) -> std::io::Result<()> {
        self.output.indent(message)
    }

    /// Result line, printed even with `--quiet`.
    pub fn result(&self, message: &str) -> std::io::Result<()> {
        self.output.result(message)
    }
}
