//! Demo: plays each sentence's clip while revealing its text.
//!
//! Playback is handed to the system's default player and never awaited, so
//! audio and text run side by side. The reveal paces itself with the
//! narration schedule from the audio crate.

use std::io::{self, Write};
use std::path::Path;
use std::thread;
use std::time::Duration;

use colored::Colorize;
use dialog_synth_audio::{narrate, NarrationStep};
use dialog_synth_spec::VoiceParams;

use super::synth::Rendered;

/// Waits between narration steps.
pub trait Pacer {
    fn pause(&mut self, duration: Duration);
}

/// Pacer that blocks the current thread.
#[derive(Debug, Default, Clone, Copy)]
pub struct SleepPacer;

impl Pacer for SleepPacer {
    fn pause(&mut self, duration: Duration) {
        if !duration.is_zero() {
            thread::sleep(duration);
        }
    }
}

/// Starts playback of a clip without waiting for it to finish.
pub trait Player {
    fn play(&mut self, path: &Path) -> io::Result<()>;
}

/// Player that opens files with the system's default application.
#[derive(Debug, Default, Clone, Copy)]
pub struct SystemPlayer;

impl Player for SystemPlayer {
    fn play(&mut self, path: &Path) -> io::Result<()> {
        open::that_detached(path)
    }
}

/// Runs the demo over everything a run wrote.
///
/// Prints `*NAME: ` and then, per sentence, starts its clip and reveals its
/// text. A clip that fails to play is reported and the text still runs.
pub fn run<W, P, L>(
    out: &mut W,
    pacer: &mut P,
    player: &mut L,
    character_name: &str,
    rendered: &Rendered,
    params: &VoiceParams,
) -> io::Result<()>
where
    W: Write + ?Sized,
    P: Pacer + ?Sized,
    L: Player + ?Sized,
{
    writeln!(out)?;
    write!(out, "*{}: ", character_name.to_uppercase())?;
    out.flush()?;

    for rendered_sentence in &rendered.sentences {
        if let Some(clip) = &rendered_sentence.clip {
            if let Err(e) = player.play(&clip.path) {
                eprintln!(
                    "  {} Could not play {}: {}",
                    "!".yellow(),
                    clip.path.display(),
                    e
                );
            }
        }

        for step in narrate(&rendered_sentence.sentence.text, params) {
            match step {
                NarrationStep::Print(c) => {
                    write!(out, "{}", c)?;
                    out.flush()?;
                }
                NarrationStep::Pause(duration) => pacer.pause(duration),
            }
        }
    }

    writeln!(out)?;
    Ok(())
}
