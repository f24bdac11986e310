use std::process::ExitCode;

/// Exit status for CLI commands, following common conventions for CLI tools.
///
/// - `Success` (0): Command completed, including runs where inputs were
///   absent and the corresponding operation was skipped
/// - `Failure` (1): Command refused to act (e.g. config file already exists)
/// - `Error` (2): Command failed due to an internal error (malformed
///   catalog, unreadable key list, config error, etc.)
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum ExitStatus {
    Success,
    Failure,
    Error,
}

impl From<ExitStatus> for ExitCode {
    fn from(status: ExitStatus) -> Self {
        match status {
            ExitStatus::Success => ExitCode::from(0),
            ExitStatus::Failure => ExitCode::from(1),
            ExitStatus::Error => ExitCode::from(2),
        }
    }
}
