use super::named::*;
use super::*;
use crate::pitch::named::*;

#[test]
fn test_create_accepts_good_pairings() {
    for size in [size::SECOND, size::THIRD, size::SIXTH, size::SEVENTH] {
        for quality in [
            Quality::Major,
            Quality::Minor,
            Quality::Diminished,
            Quality::Augmented,
        ] {
            assert!(Interval::create(quality, size).is_ok());
        }
    }
    for size in [size::UNISON, size::FOURTH, size::FIFTH, size::OCTAVE] {
        for quality in [Quality::Perfect, Quality::Diminished, Quality::Augmented] {
            assert!(Interval::create(quality, size).is_ok());
        }
    }
}

#[test]
fn test_create_rejects_bad_pairings() {
    for size in [size::SECOND, size::THIRD, size::SIXTH, size::SEVENTH] {
        assert!(matches!(
            Interval::create(Quality::Perfect, size),
            Err(crate::Error::InvalidQuality { .. })
        ));
    }
    for size in [size::UNISON, size::FOURTH, size::FIFTH, size::OCTAVE] {
        for quality in [Quality::Major, Quality::Minor] {
            assert!(Interval::create(quality, size).is_err());
        }
    }
}

#[test]
fn test_create_rejects_nonpositive_size() {
    assert!(matches!(
        Interval::create(Quality::Minor, -1),
        Err(crate::Error::NonpositiveSize { size: -1 })
    ));
    assert!(Interval::create(Quality::Perfect, 0).is_err());
}

#[test]
fn test_builder_error_order() {
    assert_eq!(Interval::builder().build(), Err(crate::Error::NullSize));
    assert_eq!(
        Interval::builder().quality(Quality::Minor).build(),
        Err(crate::Error::NullSize)
    );
    for bad in [1.5, f64::NAN, f64::INFINITY, f64::NEG_INFINITY] {
        assert!(matches!(
            Interval::builder()
                .quality(Quality::Minor)
                .size_value(bad)
                .build(),
            Err(crate::Error::NonintegerSize { .. })
        ));
    }
    assert_eq!(
        Interval::builder().quality(Quality::Minor).size(-1).build(),
        Err(crate::Error::NonpositiveSize { size: -1 })
    );
    assert_eq!(
        Interval::builder().size(3).build(),
        Err(crate::Error::NullQuality)
    );
    assert_eq!(
        Interval::builder().quality(Quality::Perfect).size(3).build(),
        Err(crate::Error::InvalidQuality {
            quality: Quality::Perfect,
            size: 3
        })
    );
    assert_eq!(
        Interval::builder()
            .quality(Quality::Major)
            .size_value(6.0)
            .build(),
        Ok(MAJOR_6)
    );
}

#[test]
fn test_create_round_trips_quality_and_size() {
    for quality in Quality::ALL {
        for size in 1..=30 {
            if quality.is_allowed(size) {
                let interval = Interval::create(quality, size).unwrap();
                assert_eq!(interval.quality().unwrap(), quality);
                assert_eq!(interval.size(), size);
            }
        }
    }
}

#[test]
fn test_equality() {
    assert_eq!(MAJOR_6, MAJOR_6);
    assert_eq!(Interval::create(Quality::Major, size::SIXTH).unwrap(), MAJOR_6);
    assert_ne!(AUGMENTED_4, DIMINISHED_5);
    assert_ne!(DIMINISHED_5, AUGMENTED_4);
}

#[test]
fn test_is_enharmonic_to() {
    assert!(MAJOR_6.is_enharmonic_to(&MAJOR_6));
    assert!(AUGMENTED_4.is_enharmonic_to(&DIMINISHED_5));
    assert!(DIMINISHED_5.is_enharmonic_to(&AUGMENTED_4));
    assert!(!AUGMENTED_4.is_enharmonic_to(&PERFECT_5));
    assert!(!PERFECT_5.is_enharmonic_to(&AUGMENTED_4));
}

#[test]
fn test_between() {
    assert_eq!(Interval::between(&C_NATURAL_4, &C_NATURAL_4), PERFECT_1);
    assert_eq!(Interval::between(&C_NATURAL_4, &C_NATURAL_5), PERFECT_8);
    assert_eq!(Interval::between(&C_NATURAL_4, &F_SHARP_4), AUGMENTED_4);
    assert_eq!(
        Interval::between(&F_SHARP_1, &A_NATURAL_4),
        Interval::create(Quality::Minor, 24).unwrap()
    );
}

#[test]
fn test_between_is_symmetric() {
    assert_eq!(
        Interval::between(&A_NATURAL_4, &F_SHARP_1),
        Interval::between(&F_SHARP_1, &A_NATURAL_4)
    );
    assert_eq!(C_NATURAL_5 - C_NATURAL_4, PERFECT_8);
}

#[test]
fn test_between_enharmonic_spellings() {
    // Same sound, letter a step lower: neither is below the other
    let interval = Interval::between(&B_SHARP_3, &C_NATURAL_4);
    assert_eq!(interval.chromatic_offset(), 0);
    assert_eq!(interval.scalar_offset(), -1);
    assert_eq!(interval.size(), 0);
    assert_eq!(
        interval.quality(),
        Err(crate::Error::InvalidOffset { size: 0, offset: 0 })
    );
    assert_eq!(interval.to_string(), "Interval(-1, 0)");

    // Reversed, C4 sits a letter above B#3 and reads as a diminished second
    let reversed = Interval::between(&C_NATURAL_4, &B_SHARP_3);
    assert_eq!(reversed.quality().unwrap(), Quality::Diminished);
    assert_eq!(reversed.to_string(), "Diminished2");
    assert_eq!(reversed.to_string().parse::<Interval>().unwrap(), reversed);
}

#[test]
fn test_quality_rejects_sizes_below_unison() {
    for interval in [Interval::new(-1, 0), Interval::new(-1, -1), Interval::new(-8, -12)] {
        assert!(matches!(
            interval.quality(),
            Err(crate::Error::InvalidOffset { .. })
        ));
    }
}

#[test]
fn test_above() {
    assert_eq!(PERFECT_1.above(&C_NATURAL_4), C_NATURAL_4);
    assert_eq!(AUGMENTED_4.above(&C_NATURAL_4), F_SHARP_4);
    assert_eq!(PERFECT_8.above(&C_NATURAL_4), C_NATURAL_5);
    assert_eq!(PERFECT_5.above(&B_NATURAL_4), F_SHARP_5);
    assert_eq!(C_NATURAL_4 + MAJOR_3, E_NATURAL_4);
}

#[test]
fn test_below() {
    assert_eq!(PERFECT_1.below(&C_NATURAL_4), C_NATURAL_4);
    assert_eq!(AUGMENTED_4.below(&F_SHARP_4), C_NATURAL_4);
    assert_eq!(PERFECT_8.below(&C_NATURAL_5), C_NATURAL_4);
    assert_eq!(PERFECT_5.below(&F_SHARP_5), B_NATURAL_4);
    assert_eq!(C_NATURAL_4 - MINOR_2, B_NATURAL_3);
}

#[test]
fn test_transposition_keeps_spelling() {
    assert_eq!(MINOR_3.above(&A_NATURAL_4), C_NATURAL_5);
    assert_eq!(AUGMENTED_2.above(&A_NATURAL_4), B_SHARP_4);
    assert_eq!(DIMINISHED_4.above(&A_NATURAL_4), D_FLAT_5);
    assert_eq!(MAJOR_2.above(&E_SHARP_3), F_DOUBLE_SHARP_3);
}

#[test]
fn test_quality_rejects_absurd_offsets() {
    let doubly_augmented_fifth = Interval::new(4, 9);
    assert!(matches!(
        doubly_augmented_fifth.quality(),
        Err(crate::Error::InvalidOffset { size: 5, offset: 2 })
    ));
    assert!(Interval::new(0, 12).quality().is_err());
}

#[test]
fn test_compound_and_simple() {
    let major_ninth = Interval::create(Quality::Major, size::NINTH).unwrap();
    assert!(major_ninth.is_compound());
    assert_eq!(major_ninth.simple(), MAJOR_2);

    let double_octave = Interval::create(Quality::Perfect, 15).unwrap();
    assert_eq!(double_octave.simple(), PERFECT_8);

    assert!(!PERFECT_8.is_compound());
    assert_eq!(PERFECT_8.simple(), PERFECT_8);
    assert_eq!(PERFECT_1.simple(), PERFECT_1);
}

#[test]
fn test_display() {
    assert_eq!(MAJOR_6.to_string(), "Major6");
    assert_eq!(PERFECT_5.to_string(), "Perfect5");
    assert_eq!(format!("{:#}", AUGMENTED_4), "A4");
    assert_eq!(format!("{:#}", MINOR_10), "m10");
    assert_eq!(Interval::new(4, 9).to_string(), "Interval(4, 9)");
}

#[test]
fn test_parse() {
    assert_eq!("M6".parse::<Interval>().unwrap(), MAJOR_6);
    assert_eq!("P5".parse::<Interval>().unwrap(), PERFECT_5);
    assert_eq!("d5".parse::<Interval>().unwrap(), DIMINISHED_5);
    assert_eq!("m3".parse::<Interval>().unwrap(), MINOR_3);
    assert_eq!("Augmented4".parse::<Interval>().unwrap(), AUGMENTED_4);
    assert_eq!(" Major6 ".parse::<Interval>().unwrap(), MAJOR_6);
}

#[test]
fn test_parse_errors() {
    assert_eq!("M".parse::<Interval>(), Err(crate::Error::NullSize));
    assert_eq!("6".parse::<Interval>(), Err(crate::Error::NullQuality));
    assert!(matches!(
        "M6.5".parse::<Interval>(),
        Err(crate::Error::NonintegerSize { .. })
    ));
    assert_eq!(
        "m-1".parse::<Interval>(),
        Err(crate::Error::NonpositiveSize { size: -1 })
    );
    assert!(matches!(
        "P2".parse::<Interval>(),
        Err(crate::Error::InvalidQuality { .. })
    ));
    assert!(matches!(
        "X4".parse::<Interval>(),
        Err(crate::Error::IllegalConstruction { .. })
    ));
    assert!(matches!("M6?".parse::<Interval>(), Err(crate::Error::Parse { .. })));
}

#[test]
fn test_named_registry() {
    // 6 perfect, 6 major, 6 minor, 12 augmented, 12 diminished
    assert_eq!(named::all().count(), 42);
    assert!(named::all().all(|interval| interval.quality().is_ok()));
    assert_eq!(PERFECT_12.chromatic_offset(), 19);
    assert_eq!(MAJOR_7.chromatic_offset(), 11);
    assert_eq!(DIMINISHED_1.chromatic_offset(), -1);
}

#[test]
fn test_display_parse_agree_for_named_intervals() {
    for interval in named::all() {
        assert_eq!(interval.to_string().parse::<Interval>().unwrap(), interval);
        assert_eq!(format!("{:#}", interval).parse::<Interval>().unwrap(), interval);
    }
}
