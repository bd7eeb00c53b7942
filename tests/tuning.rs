use pitchcraft::pitch::Pitch;
use pitchcraft::pitch::named::*;
use pitchcraft::tuning::{
    self, EQUAL_TEMPERAMENT_A440, PYTHAGOREAN_D288, QUARTER_COMMA_MEANTONE_D288, Tuning,
    TuningConfig, TuningSystem,
};

fn assert_rounded(tuning: &dyn TuningSystem, cases: &[(Pitch, f64)]) {
    for &(pitch, hz) in cases {
        assert_eq!(
            tuning.to_frequency(&pitch).round(),
            hz,
            "{} should round to {} Hz",
            pitch,
            hz
        );
    }
}

#[test]
fn equal_temperament_converts_to_frequency() {
    assert_rounded(
        &EQUAL_TEMPERAMENT_A440,
        &[
            (A_NATURAL_4, 440.0),
            (A_NATURAL_3, 220.0),
            (A_NATURAL_5, 880.0),
            (C_NATURAL_4, 262.0),
            (D_NATURAL_4, 294.0),
            (F_SHARP_1, 46.0),
        ],
    );
}

#[test]
fn pythagorean_tuning_converts_to_frequency() {
    assert_rounded(
        &PYTHAGOREAN_D288,
        &[
            (A_NATURAL_3, 216.0),
            (A_SHARP_3, 231.0),
            (B_NATURAL_3, 243.0),
            (C_NATURAL_4, 256.0),
            (C_SHARP_4, 273.0),
            (D_NATURAL_4, 288.0),
            (E_FLAT_4, 303.0),
            (D_SHARP_4, 308.0),
            (E_NATURAL_4, 324.0),
            (F_NATURAL_4, 341.0),
            (F_SHARP_4, 365.0),
            (G_NATURAL_4, 384.0),
            (A_FLAT_4, 405.0),
            (G_SHARP_4, 410.0),
            (A_NATURAL_4, 432.0),
            (B_FLAT_4, 455.0),
        ],
    );
}

#[test]
fn quarter_comma_meantone_converts_to_frequency() {
    assert_rounded(
        &QUARTER_COMMA_MEANTONE_D288,
        &[
            (A_NATURAL_3, 215.0),
            (A_SHARP_3, 225.0),
            (B_NATURAL_3, 241.0),
            (C_NATURAL_4, 258.0),
            (C_SHARP_4, 269.0),
            (D_NATURAL_4, 288.0),
            (E_FLAT_4, 308.0),
            (D_SHARP_4, 301.0),
            (E_NATURAL_4, 322.0),
            (F_NATURAL_4, 345.0),
            (F_SHARP_4, 360.0),
            (G_NATURAL_4, 385.0),
            (A_FLAT_4, 412.0),
            (G_SHARP_4, 402.0),
            (A_NATURAL_4, 431.0),
            (B_FLAT_4, 461.0),
        ],
    );
}

#[test]
fn pitch_frequency_defaults_to_a440() {
    assert_eq!(A_NATURAL_4.frequency(), 440.0);
    assert_eq!(C_NATURAL_4.frequency().round(), 262.0);
    assert_eq!(
        F_SHARP_4.to_frequency(&PYTHAGOREAN_D288).round(),
        365.0
    );
}

#[test]
fn factories_match_presets() {
    let et = tuning::make_equal_temperament(A_NATURAL_4, 440.0).unwrap();
    let pythagorean = tuning::make_pythagorean_tuning(D_NATURAL_4, 288.0).unwrap();
    let meantone = tuning::make_quarter_comma_meantone(D_NATURAL_4, 288.0).unwrap();
    let chain = tuning::make_fifth_chain_tuning(D_NATURAL_4, 288.0, 1.5).unwrap();

    assert_eq!(et, EQUAL_TEMPERAMENT_A440);
    assert_eq!(pythagorean, PYTHAGOREAN_D288);
    assert_eq!(meantone, QUARTER_COMMA_MEANTONE_D288);
    assert_eq!(chain, PYTHAGOREAN_D288);
}

#[test]
fn tunings_work_as_trait_objects() {
    let tunings: Vec<Box<dyn TuningSystem>> = vec![
        Box::new(EQUAL_TEMPERAMENT_A440),
        Box::new(PYTHAGOREAN_D288),
        Box::new(QUARTER_COMMA_MEANTONE_D288),
        Box::new(TuningConfig::default().build().unwrap()),
    ];
    for tuning in &tunings {
        let frequency = C_NATURAL_4.to_frequency(tuning);
        assert!(frequency > 250.0 && frequency < 265.0);
    }
}

#[test]
fn fifth_chain_tunings_are_octave_consistent() {
    for tuning in [PYTHAGOREAN_D288, QUARTER_COMMA_MEANTONE_D288] {
        for pitch in [C_NATURAL_2, F_SHARP_3, B_FLAT_5, G_DOUBLE_SHARP_1] {
            let octave_up = pitchcraft::interval::named::PERFECT_8.above(&pitch);
            let ratio = tuning.to_frequency(&octave_up) / tuning.to_frequency(&pitch);
            assert!((ratio - 2.0).abs() < 1e-9, "{} in {:?}", pitch, tuning);
        }
    }
}

#[test]
fn runtime_selected_tuning() {
    let tuning: Tuning = "meantone"
        .parse::<tuning::TuningKind>()
        .map(|kind| TuningConfig {
            kind,
            ..TuningConfig::pythagorean()
        })
        .unwrap()
        .build()
        .unwrap();
    assert_eq!(tuning, Tuning::FifthChain(QUARTER_COMMA_MEANTONE_D288));
    assert_eq!(tuning.to_frequency(&A_NATURAL_4).round(), 431.0);
}
