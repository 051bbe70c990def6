//! CLI command definitions and argument parsing.

use clap::{ArgAction, Parser, Subcommand};
use harmonia_domain::AccidentalGlyphs;

/// Harmonia CLI - Work with frequencies, intervals, notes, and pitches.
#[derive(Debug, Parser)]
#[command(name = "harmonia")]
#[command(version, about, long_about = None)]
pub struct Cli {
    /// Output format
    #[arg(short, long, value_enum, global = true)]
    pub format: Option<CliFormat>,

    /// Disable colored output
    #[arg(long, global = true)]
    pub no_color: bool,

    /// Configuration file path
    #[arg(short, long, global = true, env = "HARMONIA_CONFIG")]
    pub config: Option<String>,

    /// Accidental symbols for note output
    #[arg(short, long, value_enum, global = true)]
    pub glyphs: Option<GlyphArg>,

    /// Increase log verbosity (-v debug, -vv trace)
    #[arg(short, long, action = ArgAction::Count, global = true)]
    pub verbose: u8,

    #[command(subcommand)]
    pub command: Command,
}

/// Output format options.
#[derive(Debug, Clone, Copy, clap::ValueEnum)]
pub enum CliFormat {
    /// Table format (default)
    Table,
    /// JSON format
    Json,
    /// Quiet format (values only)
    Quiet,
}

/// Accidental glyph options.
#[derive(Debug, Clone, Copy, clap::ValueEnum)]
pub enum GlyphArg {
    /// `#` and `b`
    Ascii,
    /// `♯` and `♭`
    Unicode,
}

/// CLI commands.
#[derive(Debug, Subcommand)]
pub enum Command {
    /// Parse a note and optionally derive sharps or flats from it
    Note(NoteArgs),

    /// List the seven natural notes
    Naturals,

    /// Frequency arithmetic and comparison
    Freq(FreqArgs),

    /// Describe an interval given in cents
    Interval(IntervalArgs),

    /// Build a pitch from a frequency in hertz
    Pitch(PitchArgs),

    /// Manage the configuration file
    Config(ConfigArgs),
}

/// Arguments for the note command.
#[derive(Debug, Parser)]
pub struct NoteArgs {
    /// Note to start from (e.g. C, F#, Bbb)
    pub note: String,

    /// Sharps to add (negative values apply flats)
    #[arg(short, long, default_value_t = 0, allow_negative_numbers = true)]
    pub sharps: i16,

    /// Flats to add (negative values apply sharps)
    #[arg(short = 'b', long, default_value_t = 0, allow_negative_numbers = true)]
    pub flats: i16,
}

/// Arguments for frequency operations.
#[derive(Debug, Parser)]
pub struct FreqArgs {
    #[command(subcommand)]
    pub action: FreqAction,
}

/// Frequency operations.
#[derive(Debug, Subcommand)]
pub enum FreqAction {
    /// Add two frequencies
    Add {
        /// First frequency in hertz
        #[arg(allow_negative_numbers = true)]
        left: f64,
        /// Second frequency in hertz
        #[arg(allow_negative_numbers = true)]
        right: f64,
    },

    /// Subtract the second frequency from the first
    Sub {
        /// First frequency in hertz
        #[arg(allow_negative_numbers = true)]
        left: f64,
        /// Second frequency in hertz
        #[arg(allow_negative_numbers = true)]
        right: f64,
    },

    /// Compare two frequencies
    Compare {
        /// First frequency in hertz
        #[arg(allow_negative_numbers = true)]
        left: f64,
        /// Second frequency in hertz
        #[arg(allow_negative_numbers = true)]
        right: f64,
    },
}

/// Arguments for the interval command.
#[derive(Debug, Parser)]
pub struct IntervalArgs {
    /// Interval size in cents
    #[arg(allow_negative_numbers = true)]
    pub cents: i32,
}

/// Arguments for the pitch command.
#[derive(Debug, Parser)]
pub struct PitchArgs {
    /// Frequency in hertz
    #[arg(allow_negative_numbers = true)]
    pub hertz: f64,
}

/// Arguments for configuration management.
#[derive(Debug, Parser)]
pub struct ConfigArgs {
    #[command(subcommand)]
    pub action: ConfigAction,
}

/// Configuration actions.
#[derive(Debug, Subcommand)]
pub enum ConfigAction {
    /// Show the effective configuration
    Show,

    /// Write a default configuration file
    Init {
        /// Overwrite an existing file
        #[arg(long)]
        force: bool,
    },
}

impl From<CliFormat> for crate::config::OutputFormat {
    fn from(format: CliFormat) -> Self {
        match format {
            CliFormat::Table => crate::config::OutputFormat::Table,
            CliFormat::Json => crate::config::OutputFormat::Json,
            CliFormat::Quiet => crate::config::OutputFormat::Quiet,
        }
    }
}

impl From<GlyphArg> for AccidentalGlyphs {
    fn from(glyphs: GlyphArg) -> Self {
        match glyphs {
            GlyphArg::Ascii => AccidentalGlyphs::Ascii,
            GlyphArg::Unicode => AccidentalGlyphs::Unicode,
        }
    }
}
