//! dialog-synth CLI library.
//!
//! This crate provides the command-line front end for dialog-synth: argument
//! parsing, input resolution, writing clips to disk, and the playback demo.

pub mod cli_args;
pub mod commands;
pub mod input;
