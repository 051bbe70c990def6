//! End-to-end scenarios across the domain value types

use harmonia_domain::{Frequency, Interval, Letter, Note, Pitch, TheoryError, CENTS_PER_OCTAVE};

#[test]
fn test_frequency_sum_scenario() {
    let sum = (Frequency::new(300.0).unwrap() + Frequency::new(700.0).unwrap()).unwrap();
    assert_eq!(sum.hertz(), 1000.0);
}

#[test]
fn test_note_derivation_scenarios() {
    assert_eq!(Note::C.sharps(2).unwrap().to_string(), "C##");

    let chained = Note::D.flat().unwrap().flat().unwrap();
    assert_eq!(chained.to_string(), "Dbb");
    assert_eq!(chained.to_string(), Note::D.flats(2).unwrap().to_string());
}

#[test]
fn test_singletons_survive_many_derivations() {
    for natural in Note::naturals() {
        for n in -3..=3 {
            let _ = natural.sharps(n).unwrap();
            let _ = natural.flats(n).unwrap();
        }
    }

    let rendered: Vec<String> = Note::naturals().iter().map(|n| n.to_string()).collect();
    assert_eq!(rendered, vec!["A", "B", "C", "D", "E", "F", "G"]);
    assert!(Note::naturals().iter().all(|n| n.accidentals() == 0));
}

#[test]
fn test_naturals_shared_across_threads() {
    let handles: Vec<_> = (0..4)
        .map(|i| std::thread::spawn(move || Note::G.sharps(i).unwrap()))
        .collect();

    for (i, handle) in handles.into_iter().enumerate() {
        let note = handle.join().unwrap();
        assert_eq!(note.accidentals(), i as i16);
    }
    assert_eq!(Note::G.to_string(), "G");
}

#[test]
fn test_pitch_from_number() {
    let pitch = Pitch::from_frequency(Frequency::from_hertz(440).unwrap()).unwrap();
    assert_eq!(pitch.frequency().hertz(), 440.0);

    let missing: Option<Frequency> = Frequency::new(-440.0).ok();
    assert!(matches!(
        Pitch::from_frequency(missing),
        Err(TheoryError::NullArgument { .. })
    ));
}

#[test]
fn test_sorting_optional_frequencies() {
    let mut values = vec![
        Frequency::new(880.0).ok(),
        None,
        Frequency::new(110.0).ok(),
        None,
    ];
    values.sort();

    assert_eq!(values[0], None);
    assert_eq!(values[1], None);
    assert_eq!(values[2].map(|f| f.hertz()), Some(110.0));
    assert_eq!(values[3].map(|f| f.hertz()), Some(880.0));
}

#[test]
fn test_interval_octave() {
    let octave = Interval::from_cents(CENTS_PER_OCTAVE);
    assert_eq!(octave.cents(), 1200);
    assert_eq!(Interval::from_cents(-CENTS_PER_OCTAVE).cents(), -1200);
}

#[test]
fn test_note_letters_match_singletons() {
    let letters: Vec<Letter> = Note::naturals().iter().map(Note::letter).collect();
    assert_eq!(letters, Letter::ALL.to_vec());
}

#[test]
fn test_errors_are_displayable() {
    let errors = [
        Frequency::new(-1.0).unwrap_err(),
        "".parse::<Note>().unwrap_err(),
        Note::A.sharps(i16::MAX).unwrap().sharp().unwrap_err(),
        Pitch::from_frequency(None).unwrap_err(),
    ];

    for err in errors {
        assert!(!err.to_string().is_empty());
    }
}
