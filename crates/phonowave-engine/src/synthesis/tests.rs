//! Spectrogram synthesizer unit tests.

use super::*;
use crate::rng::create_rng;
use phonowave_spec::hz_to_bin;

fn synth() -> Synthesizer {
    Synthesizer::new(30.0)
}

#[test]
fn test_frames_are_normalized() {
    let s = synth();
    for kind in PhoneticType::ALL {
        let mut rng = create_rng(42);
        for frame in s.synthesize_wave(kind, &mut rng) {
            assert_eq!(frame.bins.len(), BIN_COUNT);
            assert!(frame.bins.iter().all(|b| (0.0..=1.0).contains(b)));
            if !frame.is_silent() {
                assert!(
                    frame.bins.iter().any(|&b| b == 1.0),
                    "{kind} frame {} has no unit bin",
                    frame.time_index
                );
                assert!(frame.peak > 0.0);
            }
        }
    }
}

#[test]
fn test_wave_frame_count_and_silent_edges() {
    let s = synth();
    let mut rng = create_rng(1);
    let frames = s.synthesize_wave(PhoneticType::Vowel, &mut rng);
    assert_eq!(frames.len(), 61);
    for (i, frame) in frames.iter().enumerate() {
        assert_eq!(frame.time_index, i);
    }
    // Envelope is zero at both ends of the timeline
    assert!(frames[0].is_silent());
    assert_eq!(frames[0].peak, 0.0);
    assert!(frames[60].is_silent());
}

#[test]
fn test_vowel_peak_energy_follows_envelope() {
    let s = synth();
    let profile = profile_for(PhoneticType::Vowel);
    let mut rng = create_rng(0);
    let frames = s.synthesize_wave(PhoneticType::Vowel, &mut rng);
    let peak_bin = hz_to_bin(profile.primary_frequency()).round() as usize;
    let energy: Vec<f64> = frames.iter().map(|f| f.raw_energy(peak_bin)).collect();

    let attack = profile.attack as usize;
    for t in 1..attack {
        assert!(energy[t] > energy[t - 1], "attack not rising at {t}");
    }
    for t in attack..energy.len() {
        assert!(energy[t] <= energy[t - 1] + 1e-12, "rising after attack at {t}");
    }
}

#[test]
fn test_peaks_land_on_profile_frequencies() {
    let s = synth();
    let profile = profile_for(PhoneticType::Plosive);
    let mut rng = create_rng(0);
    let frame = s.synthesize_frame(PhoneticType::Plosive, 3, profile, &mut rng);
    for &hz in profile.peak_frequencies {
        let bin = hz_to_bin(hz).round() as usize;
        assert!(frame.bin(bin) > 0.5, "no energy near {hz} Hz");
    }
}

#[test]
fn test_non_fricatives_do_not_consume_rng() {
    let s = synth();
    let profile = profile_for(PhoneticType::Vowel);
    let mut rng1 = create_rng(5);
    let mut rng2 = create_rng(99);
    let a = s.synthesize_frame(PhoneticType::Vowel, 20, profile, &mut rng1);
    let b = s.synthesize_frame(PhoneticType::Vowel, 20, profile, &mut rng2);
    assert_eq!(a, b);
    assert_eq!(rng1.gen::<u32>(), create_rng(5).gen::<u32>());
}

#[test]
fn test_fricative_noise_is_additive_and_bounded() {
    let s = synth();
    let kind = PhoneticType::Fricative;
    let profile = profile_for(kind);
    let t = 10;
    let gain = s.envelope(kind, t, profile);

    let a = s.raw_energies(kind, t, profile, &mut create_rng(1));
    let b = s.raw_energies(kind, t, profile, &mut create_rng(2));

    let mut clean = vec![0.0; BIN_COUNT];
    for &hz in profile.peak_frequencies {
        add_gaussian_peak(&mut clean, hz, profile.bandwidth, profile.amplitude * gain);
    }

    let bound = NOISE_SCALE * gain;
    for i in 0..BIN_COUNT {
        assert!((a[i] - b[i]).abs() <= bound + 1e-12);
        let noise = a[i] - clean[i];
        assert!((-1e-12..=bound + 1e-12).contains(&noise));
    }
    assert_ne!(a, b);
}

#[test]
fn test_fricative_noise_is_seeded() {
    let s = synth();
    let a = s.synthesize_wave(PhoneticType::Fricative, &mut create_rng(77));
    let b = s.synthesize_wave(PhoneticType::Fricative, &mut create_rng(77));
    assert_eq!(a, b);
}

#[test]
fn test_trill_is_modulated() {
    let s = synth();
    let kind = PhoneticType::Trill;
    let profile = profile_for(kind);
    // Inside the sustain window the plain envelope is flat; the trill is not.
    let gains: Vec<f64> = (10..20).map(|t| s.envelope(kind, t, profile)).collect();
    let min = gains.iter().copied().fold(f64::INFINITY, f64::min);
    let max = gains.iter().copied().fold(0.0, f64::max);
    assert!(max - min > 0.1);
    assert!(max <= profile.sustain_level + 1e-12);
    assert!(min >= profile.sustain_level * 0.4 - 1e-12);
}

#[test]
fn test_modulation_only_applies_to_trill_type() {
    let s = synth();
    let trill_profile = profile_for(PhoneticType::Trill);
    let gain = s.envelope(PhoneticType::Vowel, 12, trill_profile);
    assert_eq!(gain, trill_profile.sustain_level);
}

#[test]
fn test_normalize_silence() {
    let mut bins = vec![0.0; 8];
    assert_eq!(normalize(&mut bins), 0.0);
    assert!(bins.iter().all(|&b| b == 0.0));
}

#[test]
fn test_normalize_scales_to_unit_peak() {
    let mut bins = vec![0.5, 2.0, 1.0, 0.0];
    assert_eq!(normalize(&mut bins), 2.0);
    assert_eq!(bins, vec![0.25, 1.0, 0.5, 0.0]);
}

#[test]
fn test_normalize_clamps_negative() {
    let mut bins = vec![-1.0, 4.0];
    normalize(&mut bins);
    assert_eq!(bins, vec![0.0, 1.0]);
}
