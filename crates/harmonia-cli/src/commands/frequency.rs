//! Frequency command implementation.

use crate::cli::{FreqAction, FreqArgs};
use crate::error::Result;
use crate::output::Formatter;
use harmonia_domain::Frequency;

/// Execute the freq command.
pub fn execute_freq(args: FreqArgs, formatter: &Formatter) -> Result<()> {
    let output = match args.action {
        FreqAction::Add { left, right } => {
            let (left, right) = parse_pair(left, right)?;
            let sum = (left + right)?;
            formatter.format_frequency_result("+", left, right, sum)?
        }
        FreqAction::Sub { left, right } => {
            let (left, right) = parse_pair(left, right)?;
            let difference = (left - right)?;
            formatter.format_frequency_result("-", left, right, difference)?
        }
        FreqAction::Compare { left, right } => {
            let (left, right) = parse_pair(left, right)?;
            formatter.format_comparison(left, right)?
        }
    };

    println!("{}", output);
    Ok(())
}

/// Validate both operands as frequencies.
fn parse_pair(left: f64, right: f64) -> Result<(Frequency, Frequency)> {
    Ok((Frequency::try_from(left)?, Frequency::try_from(right)?))
}
