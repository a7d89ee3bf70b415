//! CLI command implementations.

use std::process::ExitCode;

use dialog_synth_audio::AudioError;
use dialog_synth_spec::SpecError;

use crate::input::InputError;

pub mod demo;
pub mod json_output;
pub mod synth;

/// Exit status for unusable input or configuration.
pub const EXIT_USER_ERROR: u8 = 1;

/// Exit status for failed file reads or writes.
pub const EXIT_IO_ERROR: u8 = 2;

/// Returns true if any cause of `err` is an I/O error.
pub fn is_io_error(err: &anyhow::Error) -> bool {
    err.chain().any(|cause| cause.is::<std::io::Error>())
}

/// Maps a failed run to its exit status.
pub fn exit_code_for(err: &anyhow::Error) -> ExitCode {
    if is_io_error(err) {
        ExitCode::from(EXIT_IO_ERROR)
    } else {
        ExitCode::from(EXIT_USER_ERROR)
    }
}

/// Stable report code for a failed run.
pub fn error_code(err: &anyhow::Error) -> &'static str {
    for cause in err.chain() {
        if let Some(e) = cause.downcast_ref::<InputError>() {
            return e.code();
        }
        if let Some(e) = cause.downcast_ref::<SpecError>() {
            return e.code();
        }
        if let Some(e) = cause.downcast_ref::<AudioError>() {
            return e.code();
        }
    }

    if is_io_error(err) {
        json_output::error_codes::FILE_WRITE
    } else {
        json_output::error_codes::INTERNAL
    }
}
