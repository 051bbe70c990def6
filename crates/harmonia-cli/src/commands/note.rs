//! Note command implementation.

use crate::cli::NoteArgs;
use crate::error::Result;
use crate::output::Formatter;
use harmonia_domain::Note;

/// Execute the note command.
pub fn execute_note(args: NoteArgs, formatter: &Formatter) -> Result<()> {
    let note = derive_note(&args)?;
    println!("{}", formatter.format_note(&note)?);
    Ok(())
}

/// Execute the naturals command.
pub fn execute_naturals(formatter: &Formatter) -> Result<()> {
    println!("{}", formatter.format_notes(&Note::naturals())?);
    Ok(())
}

/// Parse the starting note and apply the net of the requested sharps and flats.
fn derive_note(args: &NoteArgs) -> Result<Note> {
    let start: Note = args.note.parse()?;
    let net = i32::from(args.sharps) - i32::from(args.flats);
    tracing::debug!(
        "Deriving from {} with {} sharp(s) and {} flat(s) (net {})",
        start,
        args.sharps,
        args.flats,
        net
    );

    Ok(start.adjust_by(net)?)
}
