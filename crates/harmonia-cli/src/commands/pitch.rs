//! Pitch command implementation.

use crate::cli::PitchArgs;
use crate::error::Result;
use crate::output::Formatter;
use harmonia_domain::{Frequency, Pitch};

/// Execute the pitch command.
pub fn execute_pitch(args: PitchArgs, formatter: &Formatter) -> Result<()> {
    let pitch = Pitch::from_frequency(Frequency::try_from(args.hertz)?)?;
    println!("{}", formatter.format_pitch(&pitch)?);
    Ok(())
}
