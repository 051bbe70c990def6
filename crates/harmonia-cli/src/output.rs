//! Output formatting for the CLI.

use crate::config::OutputFormat;
use crate::error::Result;
use colored::*;
use harmonia_domain::{AccidentalGlyphs, Frequency, Interval, Note, Pitch, CENTS_PER_OCTAVE};
use std::cmp::Ordering;
use tabled::{
    builder::Builder,
    settings::{object::Rows, Alignment, Modify, Style},
};

/// Output formatter.
pub struct Formatter {
    format: OutputFormat,
    color_enabled: bool,
    glyphs: AccidentalGlyphs,
}

impl Formatter {
    /// Create a new formatter.
    pub fn new(format: OutputFormat, color_enabled: bool, glyphs: AccidentalGlyphs) -> Self {
        Self {
            format,
            color_enabled,
            glyphs,
        }
    }

    /// Format notes output.
    pub fn format_notes(&self, notes: &[Note]) -> Result<String> {
        match self.format {
            OutputFormat::Json => {
                let json_notes: Vec<serde_json::Value> = notes
                    .iter()
                    .map(|n| {
                        serde_json::json!({
                            "note": n.to_display_string_with(self.glyphs),
                            "letter": n.letter().as_str(),
                            "accidentals": n.accidentals(),
                        })
                    })
                    .collect();
                Ok(serde_json::to_string_pretty(&json_notes)?)
            }
            OutputFormat::Table => {
                let mut builder = Builder::default();
                builder.push_record(["Note", "Letter", "Accidentals"]);
                for note in notes {
                    builder.push_record([
                        note.to_display_string_with(self.glyphs),
                        note.letter().to_string(),
                        note.accidentals().to_string(),
                    ]);
                }
                Ok(self.render_table(builder))
            }
            OutputFormat::Quiet => Ok(notes
                .iter()
                .map(|n| n.to_display_string_with(self.glyphs))
                .collect::<Vec<_>>()
                .join("\n")),
        }
    }

    /// Format a single note.
    pub fn format_note(&self, note: &Note) -> Result<String> {
        self.format_notes(std::slice::from_ref(note))
    }

    /// Format the result of a frequency operation (`+` or `-`).
    pub fn format_frequency_result(
        &self,
        operation: &str,
        left: Frequency,
        right: Frequency,
        result: Frequency,
    ) -> Result<String> {
        match self.format {
            OutputFormat::Json => Ok(serde_json::to_string_pretty(&serde_json::json!({
                "operation": operation,
                "left": left,
                "right": right,
                "result": result,
            }))?),
            OutputFormat::Table => {
                let mut builder = Builder::default();
                builder.push_record(["Left", "Op", "Right", "Result"]);
                builder.push_record([
                    left.to_string(),
                    operation.to_string(),
                    right.to_string(),
                    result.to_string(),
                ]);
                Ok(self.render_table(builder))
            }
            OutputFormat::Quiet => Ok(result.hertz().to_string()),
        }
    }

    /// Format a comparison between two frequencies.
    pub fn format_comparison(&self, left: Frequency, right: Frequency) -> Result<String> {
        let symbol = match left.cmp(&right) {
            Ordering::Less => "<",
            Ordering::Equal => "==",
            Ordering::Greater => ">",
        };

        match self.format {
            OutputFormat::Json => Ok(serde_json::to_string_pretty(&serde_json::json!({
                "left": left,
                "right": right,
                "ordering": symbol,
            }))?),
            OutputFormat::Table => Ok(format!("{} {} {}", left, symbol, right)),
            OutputFormat::Quiet => Ok(symbol.to_string()),
        }
    }

    /// Format an interval.
    pub fn format_interval(&self, interval: Interval) -> Result<String> {
        match self.format {
            OutputFormat::Json => Ok(serde_json::to_string_pretty(&serde_json::json!({
                "cents": interval,
                "cents_per_octave": CENTS_PER_OCTAVE,
            }))?),
            OutputFormat::Table => {
                let mut builder = Builder::default();
                builder.push_record(["Cents", "Cents per octave"]);
                builder.push_record([interval.cents().to_string(), CENTS_PER_OCTAVE.to_string()]);
                Ok(self.render_table(builder))
            }
            OutputFormat::Quiet => Ok(interval.cents().to_string()),
        }
    }

    /// Format a pitch.
    pub fn format_pitch(&self, pitch: &Pitch) -> Result<String> {
        match self.format {
            OutputFormat::Json => Ok(serde_json::to_string_pretty(pitch)?),
            OutputFormat::Table => Ok(format!("Pitch at {}", pitch.frequency())),
            OutputFormat::Quiet => Ok(pitch.frequency().hertz().to_string()),
        }
    }

    /// Format a success message.
    pub fn success(&self, message: &str) -> String {
        self.colorize(&format!("✓ {}", message), "green")
    }

    /// Format a warning message.
    pub fn warning(&self, message: &str) -> String {
        self.colorize(&format!("⚠ {}", message), "yellow")
    }

    fn render_table(&self, builder: Builder) -> String {
        let mut table = builder.build();
        table
            .with(Style::rounded())
            .with(Modify::new(Rows::first()).with(Alignment::center()));
        table.to_string()
    }

    /// Colorize text if color is enabled.
    fn colorize(&self, text: &str, color: &str) -> String {
        if !self.color_enabled {
            return text.to_string();
        }

        match color {
            "green" => text.green().to_string(),
            "yellow" => text.yellow().to_string(),
            _ => text.to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn formatter(format: OutputFormat) -> Formatter {
        Formatter::new(format, false, AccidentalGlyphs::Ascii)
    }

    fn hz(value: f64) -> Frequency {
        Frequency::new(value).unwrap()
    }

    #[test]
    fn test_notes_table() {
        let output = formatter(OutputFormat::Table)
            .format_notes(&Note::naturals())
            .unwrap();
        assert!(output.contains("Accidentals"));
        assert!(output.contains("G"));
    }

    #[test]
    fn test_note_json() {
        let note = Note::A.flats(2).unwrap();
        let output = formatter(OutputFormat::Json).format_note(&note).unwrap();
        let value: serde_json::Value = serde_json::from_str(&output).unwrap();
        assert_eq!(value[0]["note"], "Abb");
        assert_eq!(value[0]["accidentals"], -2);
    }

    #[test]
    fn test_note_quiet_unicode() {
        let f = Formatter::new(OutputFormat::Quiet, false, AccidentalGlyphs::Unicode);
        let output = f.format_note(&Note::C.sharps(2).unwrap()).unwrap();
        assert_eq!(output, "C♯♯");
    }

    #[test]
    fn test_frequency_result_quiet() {
        let output = formatter(OutputFormat::Quiet)
            .format_frequency_result("+", hz(300.0), hz(700.0), hz(1000.0))
            .unwrap();
        assert_eq!(output, "1000");
    }

    #[test]
    fn test_frequency_result_json() {
        let output = formatter(OutputFormat::Json)
            .format_frequency_result("-", hz(50.0), hz(20.0), hz(30.0))
            .unwrap();
        let value: serde_json::Value = serde_json::from_str(&output).unwrap();
        assert_eq!(value["result"], 30.0);
        assert_eq!(value["operation"], "-");
    }

    #[test]
    fn test_comparison() {
        let f = formatter(OutputFormat::Quiet);
        assert_eq!(f.format_comparison(hz(5.0), hz(10.0)).unwrap(), "<");
        assert_eq!(f.format_comparison(hz(5.0), hz(5.0)).unwrap(), "==");
        assert_eq!(f.format_comparison(hz(10.0), hz(5.0)).unwrap(), ">");
    }

    #[test]
    fn test_interval_table() {
        let output = formatter(OutputFormat::Table)
            .format_interval(Interval::from_cents(-700))
            .unwrap();
        assert!(output.contains("-700"));
        assert!(output.contains("1200"));
    }

    #[test]
    fn test_pitch_json() {
        let pitch = Pitch::from_frequency(hz(440.0)).unwrap();
        let output = formatter(OutputFormat::Json).format_pitch(&pitch).unwrap();
        let value: serde_json::Value = serde_json::from_str(&output).unwrap();
        assert_eq!(value["frequency"], 440.0);
    }

    #[test]
    fn test_colorize_disabled() {
        let f = formatter(OutputFormat::Table);
        assert_eq!(f.success("test"), "✓ test");
        assert_eq!(f.warning("careful"), "⚠ careful");
    }
}
