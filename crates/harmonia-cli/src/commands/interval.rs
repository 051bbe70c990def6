//! Interval command implementation.

use crate::cli::IntervalArgs;
use crate::error::Result;
use crate::output::Formatter;
use harmonia_domain::Interval;

/// Execute the interval command.
pub fn execute_interval(args: IntervalArgs, formatter: &Formatter) -> Result<()> {
    let interval = Interval::from_cents(args.cents);
    println!("{}", formatter.format_interval(interval)?);
    Ok(())
}
