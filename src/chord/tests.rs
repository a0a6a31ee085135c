use super::*;
use crate::note::{FrettedPosition, ResolvedNote};
use crate::pitch::Accidental;
use pretty_assertions::assert_eq;

const C3: i32 = 48;

fn at(string: usize, absolute: i32, accidental: Option<Accidental>) -> ResolvedNote {
    ResolvedNote::from_absolute(FrettedPosition::new(string, 0), absolute)
        .with_accidental(accidental)
}

/// Name a chord rooted on C3 with notes at the given semitone offsets.
fn name_with(offsets: &[(i32, Option<Accidental>)], use_flats: bool) -> String {
    let root = at(0, C3, None);
    let mut notes = vec![root.clone()];
    for (i, &(offset, accidental)) in offsets.iter().enumerate() {
        notes.push(at(i + 1, C3 + offset, accidental));
    }
    name_chord(&root, &notes, use_flats).unwrap()
}

fn name(offsets: &[i32]) -> String {
    let plain: Vec<(i32, Option<Accidental>)> = offsets.iter().map(|&o| (o, None)).collect();
    name_with(&plain, false)
}

#[test]
fn test_empty_and_single_note() {
    let root = at(0, C3, None);
    assert_eq!(name_chord(&root, &[], false), None);
    assert_eq!(name_chord(&root, &[root.clone()], false).as_deref(), Some("C"));

    let d_sharp = at(0, 51, None);
    assert_eq!(name_chord(&d_sharp, &[d_sharp.clone()], true).as_deref(), Some("Eb"));
    assert_eq!(name_chord(&d_sharp, &[d_sharp.clone()], false).as_deref(), Some("D#"));

    // A lone note that isn't the root still names just the root.
    assert_eq!(name_chord(&root, &[at(1, 55, None)], false).as_deref(), Some("C"));
}

#[test]
fn test_root_is_excluded_even_when_not_first() {
    let root = at(3, C3, None);
    let notes = vec![at(0, 52, None), root.clone(), at(5, 55, None)];
    assert_eq!(name_chord(&root, &notes, false).as_deref(), Some("C"));
}

#[test]
fn test_root_doubled_at_octave_adds_nothing() {
    assert_eq!(name(&[12]), "C");
    assert_eq!(name(&[4, 7, 12, 24]), "C");
}

#[test]
fn test_triads() {
    assert_eq!(name(&[4, 7]), "C");
    assert_eq!(name(&[3, 7]), "Cm");
    assert_eq!(name(&[4, 8]), "Caug");
    assert_eq!(name(&[3, 6]), "Cdim");
    assert_eq!(name(&[5, 7]), "Csus4");
    assert_eq!(name(&[2, 7]), "Csus2");
}

#[test]
fn test_power_chord_skips_everything_else() {
    assert_eq!(name(&[7]), "C5");
    assert_eq!(name(&[7, 12]), "C5");
    assert_eq!(name(&[7, 10]), "C5");
    assert_eq!(name(&[7, 9, 13]), "C5");
}

#[test]
fn test_sevenths() {
    assert_eq!(name(&[4, 7, 10]), "C7");
    assert_eq!(name(&[3, 7, 10]), "Cm7");
    assert_eq!(name(&[4, 7, 11]), "CMaj7");
    assert_eq!(name(&[3, 7, 11]), "CmMaj7");
    assert_eq!(name(&[4, 8, 11]), "CaugMaj7");
    assert_eq!(name(&[5, 7, 11]), "Csus4Maj7");
    assert_eq!(name(&[5, 7, 10]), "C7sus4");
    assert_eq!(name(&[4, 8, 10]), "C+7");
}

#[test]
fn test_diminished_family() {
    assert_eq!(name(&[3, 6, 9]), "Cdim7");
    assert_eq!(name(&[3, 6, 10]), "Cm7b5");
    assert_eq!(name(&[3, 6, 9, 10]), "Cdim7");
}

#[test]
fn test_sixths() {
    assert_eq!(name(&[4, 7, 9]), "C6");
    assert_eq!(name(&[3, 7, 9]), "Cm6");
    assert_eq!(name(&[4, 7, 9, 14]), "C6/9");
    assert_eq!(name(&[4, 7, 9, 2]), "C6/9");
}

#[test]
fn test_ninths() {
    assert_eq!(name(&[4, 7, 10, 14]), "C9");
    assert_eq!(name(&[3, 7, 10, 14]), "Cm9");
    assert_eq!(name(&[4, 7, 11, 14]), "CMaj9");
    assert_eq!(name(&[4, 7, 14]), "Cadd9");
    assert_eq!(name(&[3, 7, 14]), "Cm(add9)");
}

#[test]
fn test_ninth_is_consumed_by_sus() {
    assert_eq!(name(&[2, 7]), "Csus2");
    assert_eq!(name(&[2, 5, 7]), "Csus4");
}

#[test]
fn test_elevenths() {
    assert_eq!(name(&[4, 7, 10, 14, 17]), "C11");
    assert_eq!(name(&[4, 7, 10, 17]), "C11");
    assert_eq!(name(&[3, 7, 10, 17]), "Cm11");
    assert_eq!(name(&[3, 7, 10, 14, 17]), "Cm11");
    assert_eq!(name(&[4, 7, 11, 17]), "CMaj11");
    assert_eq!(name(&[4, 7, 17]), "Cadd11");
}

#[test]
fn test_thirteenths() {
    assert_eq!(name(&[4, 7, 10, 21]), "C13");
    assert_eq!(name(&[4, 10, 14, 21]), "C13");
    assert_eq!(name(&[3, 7, 10, 21]), "Cm13");
    assert_eq!(name(&[4, 7, 11, 21]), "CMaj13");
    assert_eq!(name(&[4, 7, 11, 14, 21]), "CMaj13");
}

#[test]
fn test_flat_fifth() {
    assert_eq!(name(&[4, 6]), "Cb5");
    assert_eq!(name(&[4, 6, 7]), "Cb5");
    assert_eq!(name(&[4, 6, 10]), "C7#11");
    assert_eq!(name(&[4, 7, 10, 14, 18]), "C9#11");
    assert_eq!(name(&[4, 7, 9, 6]), "C6b5");
    assert_eq!(name(&[4, 7, 9, 14, 18]), "C6/9#11");
    // 11th and 13th extensions keep the b5 spelling.
    assert_eq!(name(&[4, 6, 10, 14, 17]), "C11b5");
    assert_eq!(name(&[4, 6, 10, 21]), "C13b5");
}

#[test]
fn test_flat_ninth_and_sharp_ninth() {
    assert_eq!(name(&[4, 7, 10, 13]), "C7b9");
    assert_eq!(name(&[4, 7, 10, 15]), "C7#9");
    assert_eq!(name(&[4, 7, 10, 13, 15]), "C7b9#9");
    // Both thirds without a seventh read as a plain major chord.
    assert_eq!(name(&[3, 4, 7]), "C");
}

#[test]
fn test_sharp_fifth_against_a_fifth() {
    assert_eq!(name(&[4, 7, 8, 10]), "C7#5");
    assert_eq!(
        name_with(&[(4, None), (7, None), (8, Some(Accidental::Flat)), (10, None)], false),
        "C7(b13)"
    );
}

#[test]
fn test_sharp_fifth_needs_an_extension_without_b7() {
    assert_eq!(name(&[4, 7, 8, 11]), "CMaj7#5");
    assert_eq!(name(&[4, 7, 8, 9]), "C6#5");
    assert_eq!(name(&[4, 7, 8, 10, 21]), "C13#5");
    // No extension, no #5.
    assert_eq!(name(&[4, 7, 8]), "C");
    // A flat-spelled #5 is never appended as #5.
    assert_eq!(
        name_with(&[(4, None), (7, None), (8, Some(Accidental::Flat)), (11, None)], false),
        "CMaj7"
    );
}

#[test]
fn test_augmented_versus_altered_dominant() {
    assert_eq!(name(&[4, 8, 10]), "C+7");
    assert_eq!(
        name_with(&[(4, None), (8, Some(Accidental::Flat)), (10, None)], false),
        "C7(b13)"
    );
    assert_eq!(name_with(&[(4, None), (8, None), (10, None)], true), "C7(b13)");
    assert_eq!(
        name_with(&[(4, None), (8, Some(Accidental::Sharp)), (10, None)], true),
        "C+7"
    );
    // Without a b7 the flat spelling doesn't matter.
    assert_eq!(name_with(&[(4, None), (8, Some(Accidental::Flat))], false), "Caug");
}

#[test]
fn test_altered_dominant_with_extensions() {
    let flat13 = Some(Accidental::Flat);
    assert_eq!(
        name_with(&[(4, None), (8, flat13), (10, None), (13, None)], false),
        "C7b9(b13)"
    );
    assert_eq!(
        name_with(&[(4, None), (8, flat13), (10, None), (14, None)], false),
        "C7add9(b13)"
    );
}

#[test]
fn test_first_note_of_a_class_decides_its_spelling() {
    let name = name_with(
        &[
            (4, None),
            (8, Some(Accidental::Flat)),
            (10, None),
            (20, Some(Accidental::Sharp)),
        ],
        false,
    );
    assert_eq!(name, "C7(b13)");
}

#[test]
fn test_root_spelling() {
    let root = at(1, 46, None);
    let notes = vec![root.clone(), at(2, 50, None), at(3, 53, None)];
    assert_eq!(name_chord(&root, &notes, false).as_deref(), Some("A#"));
    assert_eq!(name_chord(&root, &notes, true).as_deref(), Some("Bb"));

    let spelled = root.clone().with_accidental(Some(Accidental::Flat));
    assert_eq!(name_chord(&spelled, &notes, false).as_deref(), Some("Bb"));
}

#[test]
fn test_voicing_and_order_do_not_matter() {
    let root = at(0, C3, None);
    let forward = vec![root.clone(), at(1, 51, None), at(2, 55, None), at(3, 58, None)];
    let shuffled = vec![at(3, 70, None), at(1, 63, None), root.clone(), at(2, 43, None)];
    assert_eq!(name_chord(&root, &forward, false), name_chord(&root, &shuffled, false));
    assert_eq!(name_chord(&root, &forward, false).as_deref(), Some("Cm7"));
}

#[test]
fn test_naming_is_repeatable() {
    let root = at(0, C3, None);
    let notes = vec![root.clone(), at(1, 52, None), at(2, 58, None), at(3, 62, None)];
    let first = name_chord(&root, &notes, false);
    assert_eq!(first, name_chord(&root, &notes, false));
    assert_eq!(first.as_deref(), Some("C9"));
}

#[test]
fn test_symbol_parts() {
    let root = at(0, C3, None);
    let notes = vec![root.clone(), at(1, 51, None), at(2, 54, None), at(3, 58, None)];
    let symbol = derive_symbol(&root, &notes, false).unwrap();
    assert_eq!(symbol.quality, Quality::HalfDiminished);
    assert_eq!(symbol.extension, Extension::None);
    assert!(symbol.alterations.is_empty());
}

#[test]
fn test_interval_set() {
    let set: IntervalSet = [0u8, 3, 7, 10, 12].into_iter().collect();
    assert_eq!(set.classes().collect::<Vec<_>>(), vec![3, 7, 10]);
    assert!(!set.is_empty());
    assert!(IntervalSet::default().is_empty());
}
