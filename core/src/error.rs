//! Error types for the wrapper.
//!
//! Every failure is terminal to the operation that raised it: there is no
//! retry and no partial result. The variants split into configuration
//! errors (caught before nmap is ever spawned), environment errors,
//! tool-invocation errors and report-parse errors.

use thiserror::Error;

/// Result type used throughout the library.
pub type Result<T> = std::result::Result<T, Error>;

#[derive(Error, Debug)]
pub enum Error {
    /// The context has no output file path to hand to `-oX`.
    #[error("nmap output file path is empty")]
    EmptyOutputPath,

    /// The nmap path is empty or does not point at an existing file.
    #[error("path to nmap is invalid: {0:?}")]
    InvalidNmapPath(std::path::PathBuf),

    /// Attempted a run with an empty target expression.
    #[error("attempted run on empty target")]
    EmptyTarget,

    /// The nmap binary could not be located on the search path.
    #[error("nmap executable not found on PATH")]
    NmapNotFound,

    /// No usable network interface is up.
    #[error("no network reachable")]
    NoNetwork,

    /// nmap ran but never produced the expected report file. Carries the
    /// exact argument string for diagnosis. A non-zero exit code alone is
    /// not treated as failure; nmap returns non-zero on benign conditions.
    #[error("nmap produced no report (args: {args})")]
    ToolInvocation { args: String },

    /// Failed to spawn the nmap process or to read back its report file.
    #[error("i/o failure during nmap run: {0}")]
    Io(#[from] std::io::Error),

    /// The report existed but could not be understood: malformed XML or a
    /// non-numeric field where the schema promises digits. Malformed input
    /// is surfaced loudly, never defaulted.
    #[error("malformed nmap report: {0}")]
    ReportParse(String),
}

impl From<quick_xml::DeError> for Error {
    fn from(err: quick_xml::DeError) -> Self {
        Error::ReportParse(err.to_string())
    }
}
