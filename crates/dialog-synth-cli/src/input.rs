//! Resolves what to synthesize: the character, the text, and the voice.
//!
//! Everything here runs before synthesis, so a failure never leaves partial
//! output behind.

use std::fs;
use std::path::{Path, PathBuf};

use dialog_synth_spec::{validate_params, Character, SpecError, VoiceParams};

use crate::cli_args::Cli;

/// Errors that can occur while resolving input.
#[derive(Debug)]
pub enum InputError {
    /// File could not be read.
    FileRead {
        path: PathBuf,
        source: std::io::Error,
    },

    /// Input is present but unusable.
    Config(SpecError),
}

impl InputError {
    /// Returns a stable error code for reports.
    pub fn code(&self) -> &'static str {
        match self {
            InputError::FileRead { .. } => crate::commands::json_output::error_codes::FILE_READ,
            InputError::Config(e) => e.code(),
        }
    }

    /// Returns true for I/O failures as opposed to bad input.
    pub fn is_io(&self) -> bool {
        matches!(self, InputError::FileRead { .. })
    }
}

impl std::fmt::Display for InputError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            InputError::FileRead { path, .. } => write!(f, "failed to read '{}'", path.display()),
            InputError::Config(e) => write!(f, "{}", e),
        }
    }
}

impl std::error::Error for InputError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            InputError::FileRead { source, .. } => Some(source),
            InputError::Config(_) => None,
        }
    }
}

impl From<SpecError> for InputError {
    fn from(e: SpecError) -> Self {
        InputError::Config(e)
    }
}

/// Everything needed for one synthesis run.
#[derive(Debug, Clone, PartialEq)]
pub struct Request {
    /// Speaking character; its name is the output folder.
    pub character: Character,
    /// Document text.
    pub text: String,
    /// Resolved, validated voice parameters.
    pub params: VoiceParams,
}

fn read_file(path: &Path) -> Result<String, InputError> {
    fs::read_to_string(path).map_err(|source| InputError::FileRead {
        path: path.to_path_buf(),
        source,
    })
}

/// Resolves the speaking character.
///
/// A name wins, and then the preset is not read at all. Otherwise the preset
/// must contain a non-empty `name`.
pub fn resolve_character(
    name: Option<&str>,
    preset: Option<&Path>,
) -> Result<Character, InputError> {
    let character = match (name, preset) {
        (Some(name), _) => Character::named(name),
        (None, Some(path)) => {
            let json = read_file(path)?;
            Character::from_preset_json(&json)?.ok_or(SpecError::MissingCharacter)?
        }
        (None, None) => return Err(SpecError::MissingCharacter.into()),
    };

    character.validate_name()?;
    Ok(character)
}

/// Resolves the document text. Non-empty direct text wins over the file.
pub fn resolve_text(text: Option<&str>, file: Option<&Path>) -> Result<String, InputError> {
    let text = match (text, file) {
        (Some(text), _) if !text.is_empty() => text.to_string(),
        (_, Some(path)) => read_file(path)?,
        _ => return Err(SpecError::MissingText.into()),
    };

    if text.trim().is_empty() {
        return Err(SpecError::MissingText.into());
    }
    Ok(text)
}

/// Resolves a full request from parsed arguments.
///
/// Flags take priority over the preset, which takes priority over defaults.
pub fn resolve_request(args: &Cli) -> Result<Request, InputError> {
    let character = resolve_character(args.character.as_deref(), args.character_preset.as_deref())?;
    let text = resolve_text(args.text.as_deref(), args.file.as_deref())?;

    let params = VoiceParams::resolve(&[&args.voice.overrides(), &character.overrides]);
    validate_params(&params)?;

    Ok(Request {
        character,
        text,
        params,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::Parser;
    use pretty_assertions::assert_eq;

    fn write_preset(dir: &Path, json: &str) -> PathBuf {
        let path = dir.join("preset.json");
        std::fs::write(&path, json).unwrap();
        path
    }

    #[test]
    fn test_name_wins_over_preset() {
        let tmp = tempfile::tempdir().unwrap();
        let preset = write_preset(tmp.path(), r#"{"name": "Guard", "speedMultiplier": 2}"#);

        let character = resolve_character(Some("Merchant"), Some(&preset)).unwrap();
        assert_eq!(character, Character::named("Merchant"));
    }

    #[test]
    fn test_name_skips_unreadable_preset() {
        let character =
            resolve_character(Some("Merchant"), Some(Path::new("/nonexistent/p.json"))).unwrap();
        assert_eq!(character.name, "Merchant");
    }

    #[test]
    fn test_preset_supplies_character() {
        let tmp = tempfile::tempdir().unwrap();
        let preset = write_preset(tmp.path(), r#"{"name": "Guard", "speedMultiplier": 2}"#);

        let character = resolve_character(None, Some(&preset)).unwrap();
        assert_eq!(character.name, "Guard");
        assert_eq!(character.overrides.speed_multiplier, Some(2.0));
    }

    #[test]
    fn test_preset_without_name_is_missing_character() {
        let tmp = tempfile::tempdir().unwrap();
        let preset = write_preset(tmp.path(), r#"{"speedMultiplier": 2}"#);

        let err = resolve_character(None, Some(&preset)).unwrap_err();
        assert!(matches!(err, InputError::Config(SpecError::MissingCharacter)));
        assert!(!err.is_io());
    }

    #[test]
    fn test_no_character_source() {
        let err = resolve_character(None, None).unwrap_err();
        assert_eq!(err.code(), "E001");
    }

    #[test]
    fn test_missing_preset_file_is_io() {
        let err = resolve_character(None, Some(Path::new("/nonexistent/p.json"))).unwrap_err();
        assert!(err.is_io());
        assert_eq!(err.code(), "CLI_001");
    }

    #[test]
    fn test_malformed_preset() {
        let tmp = tempfile::tempdir().unwrap();
        let preset = write_preset(tmp.path(), "{ not json");

        let err = resolve_character(None, Some(&preset)).unwrap_err();
        assert!(matches!(err, InputError::Config(SpecError::Preset(_))));
    }

    #[test]
    fn test_unsafe_name_rejected() {
        let err = resolve_character(Some("../evil"), None).unwrap_err();
        assert!(matches!(
            err,
            InputError::Config(SpecError::UnsafeCharacterName { .. })
        ));
    }

    #[test]
    fn test_text_wins_over_file() {
        let text = resolve_text(Some("Hello."), Some(Path::new("/nonexistent/t.txt"))).unwrap();
        assert_eq!(text, "Hello.");
    }

    #[test]
    fn test_text_from_file() {
        let tmp = tempfile::tempdir().unwrap();
        let path = tmp.path().join("lines.txt");
        std::fs::write(&path, "One. Two.").unwrap();

        assert_eq!(resolve_text(None, Some(&path)).unwrap(), "One. Two.");
        assert_eq!(resolve_text(Some(""), Some(&path)).unwrap(), "One. Two.");
    }

    #[test]
    fn test_missing_text() {
        assert!(matches!(
            resolve_text(None, None),
            Err(InputError::Config(SpecError::MissingText))
        ));
        assert!(matches!(
            resolve_text(Some("   "), None),
            Err(InputError::Config(SpecError::MissingText))
        ));
    }

    #[test]
    fn test_resolve_request_layers_flags_over_preset() {
        let tmp = tempfile::tempdir().unwrap();
        let preset = write_preset(
            tmp.path(),
            r#"{"name": "Guard", "speedMultiplier": 0.8, "characterLength": 70}"#,
        );
        let preset_arg = preset.to_string_lossy().to_string();

        let cli = Cli::try_parse_from([
            "dialog-synth",
            "-p",
            preset_arg.as_str(),
            "-t",
            "Halt!",
            "--character-length",
            "40",
        ])
        .unwrap();

        let request = resolve_request(&cli).unwrap();
        assert_eq!(request.character.name, "Guard");
        assert_eq!(request.params.character_length, 40.0);
        assert_eq!(request.params.speed_multiplier, 0.8);
        assert_eq!(request.params.space_length, 20.0);
    }

    #[test]
    fn test_resolve_request_validates_params() {
        let cli = Cli::try_parse_from([
            "dialog-synth",
            "-c",
            "Guard",
            "-t",
            "Halt!",
            "--speed-multiplier",
            "0",
        ])
        .unwrap();

        let err = resolve_request(&cli).unwrap_err();
        assert!(matches!(
            err,
            InputError::Config(SpecError::InvalidParameter { .. })
        ));
    }
}
