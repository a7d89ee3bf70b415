//! Synthesis command implementation
//!
//! Resolves the character, text, and voice, writes one WAV file per voiced
//! sentence under `{out_root}/{character}/`, reports what was written, and
//! then runs the demo unless it is turned off.

use std::fs;
use std::io;
use std::path::{Path, PathBuf};
use std::process::ExitCode;

use anyhow::{Context, Result};
use colored::Colorize;
use dialog_synth_audio::{create_rng, synthesize, Sentence};

use super::demo::{self, SleepPacer, SystemPlayer};
use super::json_output::{ClipReport, JsonError, SkippedSentence, SynthOutput};
use super::{error_code, exit_code_for};
use crate::cli_args::Cli;
use crate::input::{resolve_request, Request};

/// A clip that has been written to disk.
#[derive(Debug, Clone, PartialEq)]
pub struct WrittenClip {
    /// Path of the WAV file.
    pub path: PathBuf,
    /// Number of samples.
    pub samples: usize,
    /// Length in seconds.
    pub duration_seconds: f64,
    /// BLAKE3 hash of the PCM payload.
    pub pcm_hash: String,
}

/// A sentence and the file written for it, if any.
#[derive(Debug, Clone, PartialEq)]
pub struct RenderedSentence {
    pub sentence: Sentence,
    pub clip: Option<WrittenClip>,
}

/// Everything a run wrote.
#[derive(Debug, Clone, PartialEq)]
pub struct Rendered {
    /// Character directory under the output root.
    pub out_dir: PathBuf,
    /// Non-blank sentences in document order.
    pub sentences: Vec<RenderedSentence>,
}

impl Rendered {
    /// Sentences that were written, with their files.
    pub fn written(&self) -> impl Iterator<Item = (&Sentence, &WrittenClip)> {
        self.sentences
            .iter()
            .filter_map(|s| s.clip.as_ref().map(|clip| (&s.sentence, clip)))
    }

    /// Sentences that produced no audio.
    pub fn skipped(&self) -> impl Iterator<Item = &Sentence> {
        self.sentences
            .iter()
            .filter(|s| s.clip.is_none())
            .map(|s| &s.sentence)
    }
}

/// Synthesizes a request and writes its clips.
///
/// Each file is fully written before the next sentence is handled, and the
/// character directory is only created when there is something to put in it.
/// Existing files with the same name are overwritten.
///
/// # Arguments
/// * `request` - Resolved character, text, and voice
/// * `seed` - Seed for the pitch walk
/// * `out_root` - Output root; clips go to `{out_root}/{character}/`
pub fn render(request: &Request, seed: u32, out_root: &Path) -> Result<Rendered> {
    let mut rng = create_rng(seed);
    let synthesis =
        synthesize(&request.text, &request.params, &mut rng).context("Synthesis failed")?;

    let out_dir = out_root.join(&request.character.name);
    if synthesis.clips().next().is_some() {
        fs::create_dir_all(&out_dir).with_context(|| {
            format!("Failed to create output directory: {}", out_dir.display())
        })?;
    }

    let mut sentences = Vec::with_capacity(synthesis.sentences.len());
    for output in synthesis.sentences {
        let clip = match output.clip {
            Some(clip) => {
                let path = out_dir.join(clip.file_name());
                fs::write(&path, clip.to_wav())
                    .with_context(|| format!("Failed to write clip: {}", path.display()))?;

                Some(WrittenClip {
                    path,
                    samples: clip.samples.len(),
                    duration_seconds: clip.duration_seconds(),
                    pcm_hash: clip.pcm_hash(),
                })
            }
            None => None,
        };

        sentences.push(RenderedSentence {
            sentence: output.sentence,
            clip,
        });
    }

    Ok(Rendered { out_dir, sentences })
}

/// Run the synthesis command
///
/// # Arguments
/// * `args` - Parsed command-line arguments
///
/// # Returns
/// Exit code: 0 on success; failures with `--json` are reported in the JSON
/// output and mapped to 1 (bad input) or 2 (I/O)
pub fn run(args: &Cli) -> Result<ExitCode> {
    let seed = args.seed.unwrap_or_else(rand::random);

    if args.json {
        run_json(args, seed)
    } else {
        run_human(args, seed)
    }
}

/// Run with human-readable (colored) output
fn run_human(args: &Cli, seed: u32) -> Result<ExitCode> {
    let request = resolve_request(args)?;

    println!(
        "{} {}",
        "Synthesizing:".cyan().bold(),
        request.character.name
    );
    println!("  {} {}", "Seed:".dimmed(), seed);

    let rendered = render(&request, seed, &args.out_root)?;

    for sentence in &rendered.sentences {
        match &sentence.clip {
            Some(clip) => println!(
                "  {} {} {}",
                "Wrote".green(),
                clip.path.display(),
                format!("({:.2}s)", clip.duration_seconds).dimmed()
            ),
            None => println!(
                "  {} Skipped sentence {} (no vowels): {}",
                "!".yellow(),
                sentence.sentence.index,
                sentence.sentence.text
            ),
        }
    }

    println!(
        "{} {} file(s) in {}",
        "Done:".green().bold(),
        rendered.written().count(),
        rendered.out_dir.display()
    );

    if !args.no_demo {
        demo::run(
            &mut io::stdout(),
            &mut SleepPacer,
            &mut SystemPlayer,
            &request.character.name,
            &rendered,
            &request.params,
        )
        .context("Demo failed")?;
    }

    Ok(ExitCode::SUCCESS)
}

/// Run with machine-readable JSON output
fn run_json(args: &Cli, seed: u32) -> Result<ExitCode> {
    let result = resolve_request(args)
        .map_err(anyhow::Error::from)
        .and_then(|request| {
            let rendered = render(&request, seed, &args.out_root)?;
            Ok((request, rendered))
        });

    let (output, code) = match result {
        Ok((request, rendered)) => (
            success_output(&request, seed, &rendered),
            ExitCode::SUCCESS,
        ),
        Err(e) => (
            SynthOutput::failure(vec![JsonError::new(error_code(&e), format!("{:#}", e))]),
            exit_code_for(&e),
        ),
    };

    let json = serde_json::to_string_pretty(&output).context("Failed to serialize output")?;
    println!("{}", json);

    Ok(code)
}

/// Builds the JSON report of a successful run.
pub fn success_output(request: &Request, seed: u32, rendered: &Rendered) -> SynthOutput {
    SynthOutput {
        success: true,
        character: Some(request.character.name.clone()),
        seed: Some(seed),
        params: Some(request.params.clone()),
        out_dir: Some(rendered.out_dir.to_string_lossy().to_string()),
        clips: rendered
            .written()
            .map(|(sentence, clip)| ClipReport {
                index: sentence.index,
                text: sentence.text.clone(),
                path: clip.path.to_string_lossy().to_string(),
                samples: clip.samples,
                duration_seconds: clip.duration_seconds,
                pcm_hash: clip.pcm_hash.clone(),
            })
            .collect(),
        skipped: rendered
            .skipped()
            .map(|sentence| SkippedSentence {
                index: sentence.index,
                text: sentence.text.clone(),
            })
            .collect(),
        errors: Vec::new(),
    }
}
