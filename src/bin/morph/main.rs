//! morph - render one note of the morphing oscillator offline
//!
//! Run with: cargo run --bin morph -- [note] [morph] [seconds]
//!
//!   note     MIDI note number, default 69 (A4)
//!   morph    0.0 sine, 1.0 square, 2.0 triangle, 3.0 sawtooth; default 0.0
//!   seconds  render length, default 1.0

mod bounce;

use std::{fmt::Display, str::FromStr};

use bounce::Bounce;
use color_eyre::eyre::{eyre, Result as EyreResult};
use morph_osc::EngineConfig;

fn main() -> color_eyre::Result<()> {
    color_eyre::install()?;

    let args: Vec<String> = std::env::args().skip(1).collect();
    let note: u8 = parse_arg(&args, 0, "note", 69)?;
    let morph: f64 = parse_arg(&args, 1, "morph", 0.0)?;
    let seconds: f64 = parse_arg(&args, 2, "seconds", 1.0)?;

    let config = EngineConfig::default().with_initial_morph(morph);

    println!("=== morph ===");
    println!("Sample rate: {} Hz", config.sample_rate);
    println!("Channels: {}", config.channels);
    println!("Block size: {}", config.block_size);
    println!("Note: {note}  Morph: {morph}  Duration: {seconds}s");
    println!();

    let summary = Bounce::new(config).note(note).seconds(seconds).run()?;

    println!(
        "Rendered {} frames x {} channels",
        summary.frames, summary.channels
    );
    println!("Peak: {:.3}", summary.peak);
    println!("RMS:  {:.3}", summary.rms);
    println!(
        "Frequency: {:.2} Hz (expected {:.2} Hz)",
        summary.estimated_hz, summary.expected_hz
    );

    Ok(())
}

fn parse_arg<T>(args: &[String], index: usize, name: &str, default: T) -> EyreResult<T>
where
    T: FromStr,
    T::Err: Display,
{
    match args.get(index) {
        None => Ok(default),
        Some(raw) => raw
            .parse()
            .map_err(|e| eyre!("invalid {name} {raw:?}: {e}")),
    }
}
