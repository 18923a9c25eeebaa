// SPDX-License-Identifier: MIT
//
// Errors that end the program. `main` prints them as `huewheel: <message>`.

use std::io;
use std::path::PathBuf;

use hue_gen::CountError;

#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("terminal I/O failed: {0}")]
    Io(#[from] io::Error),

    #[error("cannot create log file {}: {source}", .path.display())]
    LogFile {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("invalid --count: {0}")]
    Count(#[from] CountError),
}

// ─── Tests ───────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn count_error_message() {
        let err = Error::from(CountError::OutOfRange { value: 500 });
        assert_eq!(err.to_string(), "invalid --count: Number of colors cannot exceed 100");
    }

    #[test]
    fn log_file_message_names_path() {
        let err = Error::LogFile {
            path: PathBuf::from("/nope/huewheel.log"),
            source: io::Error::new(io::ErrorKind::NotFound, "not found"),
        };
        assert_eq!(
            err.to_string(),
            "cannot create log file /nope/huewheel.log: not found"
        );
    }

    #[test]
    fn io_error_converts() {
        let err: Error = io::Error::other("broken pipe").into();
        assert!(matches!(err, Error::Io(_)));
        assert_eq!(err.to_string(), "terminal I/O failed: broken pipe");
    }
}
