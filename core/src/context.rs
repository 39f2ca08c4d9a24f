//! # Run context
//!
//! [`NmapContext`] owns exactly one invocation of the nmap binary: the
//! executable path, the report output path, the option set and the
//! target expression. It runs nmap synchronously, blocking until the
//! process exits, and reads the XML report back.
//!
//! The exit code is deliberately ignored. nmap returns non-zero on
//! benign conditions, so the only failure signal trusted here is the
//! report file never appearing.

use std::path::PathBuf;
use std::process::Command;

use tempfile::TempDir;
use tracing::debug;

use crate::env::{Environment, NMAP_BINARY};
use crate::error::{Error, Result};
use crate::options::{NmapFlag, NmapOptions};
use crate::report::{self, NmapRun};

const REPORT_FILENAME: &str = "report.xml";

pub struct NmapContext {
    pub nmap_path: PathBuf,
    pub output_path: PathBuf,
    pub options: NmapOptions,
    pub target: String,
    // Owns the default output directory so the report is cleaned up when
    // the context is dropped. None when the caller supplied the paths.
    _temp: Option<TempDir>,
}

impl NmapContext {
    /// A context with nmap located on PATH and a private temporary
    /// report path. The report file does not exist until nmap writes
    /// it, which is what makes the post-run existence check meaningful.
    pub fn new(env: &dyn Environment) -> Result<Self> {
        let nmap_path = env
            .locate_executable(NMAP_BINARY)
            .ok_or(Error::NmapNotFound)?;
        let temp = TempDir::with_prefix("brine-")?;
        Ok(NmapContext {
            nmap_path,
            output_path: temp.path().join(REPORT_FILENAME),
            options: NmapOptions::new(),
            target: String::new(),
            _temp: Some(temp),
        })
    }

    /// A context with explicit executable and report paths.
    pub fn with_paths(nmap_path: impl Into<PathBuf>, output_path: impl Into<PathBuf>) -> Self {
        NmapContext {
            nmap_path: nmap_path.into(),
            output_path: output_path.into(),
            options: NmapOptions::new(),
            target: String::new(),
            _temp: None,
        }
    }

    /// Execute the run and parse the report it produced.
    ///
    /// The XML output option is forced to this context's output path,
    /// overwriting any caller-supplied value; the projection depends on
    /// knowing where and in which format the report lands.
    pub fn run(&mut self) -> Result<NmapRun> {
        if self.output_path.as_os_str().is_empty() {
            return Err(Error::EmptyOutputPath);
        }
        if self.nmap_path.as_os_str().is_empty() || !self.nmap_path.is_file() {
            return Err(Error::InvalidNmapPath(self.nmap_path.clone()));
        }
        if self.target.is_empty() {
            return Err(Error::EmptyTarget);
        }

        self.options
            .set(NmapFlag::XmlOutput, &self.output_path.to_string_lossy());

        // One whitespace-tokenized argument string, exactly as serialized.
        // Option values are not quoted; see NmapOptions::fmt.
        let args = format!("{} {}", self.options, self.target);
        debug!(nmap = %self.nmap_path.display(), %args, "invoking nmap");

        Command::new(&self.nmap_path)
            .args(args.split_whitespace())
            .output()?;

        if !self.output_path.is_file() {
            return Err(Error::ToolInvocation { args });
        }

        report::parse_file(&self.output_path)
    }
}
