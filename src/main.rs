use std::io::Write;
use std::path::{Path, PathBuf};
use std::time::Duration;

use anyhow::{anyhow, Context, Result};
use clap::{Parser, Subcommand};

use tunex::{frequency_table, tone, tuning, EqualTemperament, ScaleStructure, TABLE_SIZE};

fn parse_duration(s: &str) -> Result<Duration, std::num::ParseIntError> {
    let ms: u64 = s.parse()?;
    Ok(Duration::from_millis(ms))
}

/// Inspect microtonal tuning tables and extend them past 128 notes
#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
struct Args {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Infer the scale size and period of a tuning table
    Infer {
        /// Path to a table file: one frequency in Hz per line, 128 lines
        table_file: PathBuf,
    },
    /// Extend a tuning table to a given number of notes
    Extend {
        /// Path to the 128-entry table file
        table_file: PathBuf,

        /// Number of notes in the extended table
        #[arg(long, default_value_t = 256)]
        length: usize,
    },
    /// Print an equal-temperament table
    Generate {
        /// Number of notes in the table
        #[arg(long, default_value_t = 128)]
        length: usize,

        /// Reference frequency in Hz
        #[arg(long, default_value_t = 440.0)]
        reference_freq: f64,

        /// MIDI number of the reference note
        #[arg(long, default_value_t = 69)]
        reference_note: u8,
    },
    /// Render a sine test tone at a table entry
    Render {
        /// Path to the 128-entry table file
        table_file: PathBuf,

        /// Note number; notes past 127 come from the extended table
        note: usize,

        /// Tone duration in milliseconds
        #[arg(long, default_value = "1000", value_parser = parse_duration)]
        duration: Duration,

        /// Output sample rate in Hz
        #[arg(long, default_value_t = 44100)]
        sample_rate: u32,

        /// Output WAV path (default: note-<NOTE>.wav)
        #[arg(long)]
        output: Option<PathBuf>,
    },
}

/// Read a plain-text tuning table: one frequency per line, blank lines and
/// `#` comments ignored, exactly 128 entries.
fn read_table(path: &Path) -> Result<[f64; TABLE_SIZE]> {
    let text = std::fs::read_to_string(path)
        .with_context(|| format!("reading table file '{}'", path.display()))?;

    let mut values = Vec::with_capacity(TABLE_SIZE);
    for (line_no, line) in text.lines().enumerate() {
        let line = line.trim();
        if line.is_empty() || line.starts_with('#') {
            continue;
        }
        let value: f64 = line
            .parse()
            .with_context(|| format!("line {}: invalid frequency '{}'", line_no + 1, line))?;
        values.push(value);
    }

    if values.len() != TABLE_SIZE {
        return Err(anyhow!(
            "table file '{}' has {} frequencies, expected {}",
            path.display(),
            values.len(),
            TABLE_SIZE
        ));
    }

    let mut table = [0.0; TABLE_SIZE];
    table.copy_from_slice(&values);
    Ok(table)
}

fn read_table_or_exit(path: &Path) -> [f64; TABLE_SIZE] {
    read_table(path).unwrap_or_else(|e| {
        eprintln!("Error: {:#}", e);
        std::process::exit(1);
    })
}

fn main() {
    env_logger::init();

    let args = Args::parse();

    match args.command {
        Commands::Infer { table_file } => {
            let table = read_table_or_exit(&table_file);

            match tuning::infer_scale(&table) {
                ScaleStructure::Found { scale_size, period } => {
                    println!("scale size {}, period {}", scale_size, period);
                }
                ScaleStructure::Unknown => {
                    println!("no periodic structure found");
                }
            }
        }
        Commands::Extend { table_file, length } => {
            if length < TABLE_SIZE {
                eprintln!(
                    "Error: length must be >= {} (got {})",
                    TABLE_SIZE, length
                );
                std::process::exit(1);
            }

            let table = read_table_or_exit(&table_file);

            for frequency in tuning::extend_table(&table, length) {
                println!("{}", frequency);
            }
        }
        Commands::Generate {
            length,
            reference_freq,
            reference_note,
        } => {
            if length < TABLE_SIZE {
                eprintln!(
                    "Error: length must be >= {} (got {})",
                    TABLE_SIZE, length
                );
                std::process::exit(1);
            }

            if reference_note > 127 {
                eprintln!(
                    "Error: reference_note must be <= 127 (got {})",
                    reference_note
                );
                std::process::exit(1);
            }

            if reference_freq <= 0.0 {
                eprintln!(
                    "Error: reference_freq must be positive (got {})",
                    reference_freq
                );
                std::process::exit(1);
            }

            let mut source = EqualTemperament {
                reference_freq,
                reference_note,
            };

            for frequency in frequency_table(&mut source, length) {
                println!("{}", frequency);
            }
        }
        Commands::Render {
            table_file,
            note,
            duration,
            sample_rate,
            output,
        } => {
            let table = read_table_or_exit(&table_file);

            let length = TABLE_SIZE.max(note + 1);
            let extended = tuning::extend_table(&table, length);
            let freq = extended[note];

            if freq * 2.0 > sample_rate as f64 {
                eprintln!(
                    "Error: note {} is {} Hz, above the Nyquist limit for sample rate {}",
                    note, freq, sample_rate
                );
                std::process::exit(1);
            }

            let samples = tone::render_tone(freq, sample_rate, duration);
            let wav_data = tone::tone_wav(&samples, sample_rate);

            let wav_path = output.unwrap_or_else(|| PathBuf::from(format!("note-{}.wav", note)));
            let mut wav_file =
                std::fs::File::create(&wav_path).expect("unable to create wav file");
            wav_file.write_all(&wav_data).unwrap();
            wav_file.sync_all().unwrap();

            println!("note {} = {} Hz -> {}", note, freq, wav_path.display());
        }
    }
}
