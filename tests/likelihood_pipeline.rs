//! End-to-end checks: load a profile from disk, evaluate through the
//! host-facing interface, and scan.

use std::io::Write;
use std::path::PathBuf;

use approx::assert_relative_eq;
use desy3_bao::domain::{EvaluationRequest, LikelihoodConfig};
use desy3_bao::error::LikelihoodError;
use desy3_bao::io::curve::DistanceCurve;
use desy3_bao::likelihood::{AlphaLikelihood, Likelihood, TabulatedTheory};
use desy3_bao::scan::{best_point, scan_rdrag};

fn synthetic_profile() -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR"))
        .join("demos")
        .join("synthetic_profile.csv")
}

fn load(column: usize) -> AlphaLikelihood {
    let config = LikelihoodConfig {
        data_path: synthetic_profile(),
        chi2_column: column,
        ..LikelihoodConfig::default()
    };
    AlphaLikelihood::initialize(config).expect("synthetic profile loads")
}

fn theory(dm: f64, rdrag: f64) -> TabulatedTheory {
    TabulatedTheory::new(DistanceCurve::constant(dm, 0.0, 2.0)).with_param("rdrag", rdrag)
}

#[test]
fn loads_bundled_synthetic_profile() {
    let like = load(1);
    assert_eq!(like.table().len(), 41);
    assert_eq!(like.table().method(), "chi2_sigma03");
    assert_eq!(like.table().alpha_range(), (0.8, 1.2));
}

#[test]
fn fiducial_cosmology_sits_at_profile_minimum() {
    let like = load(1);
    let rs = like.config().fiducial.rs;
    assert_eq!(like.logp(&theory(like.fiducial_dm(), rs)).unwrap(), 0.0);
}

#[test]
fn shifted_sound_horizon_moves_alpha() {
    let like = load(1);
    let rs = like.config().fiducial.rs;
    let logp = like.logp(&theory(like.fiducial_dm(), rs / 1.02)).unwrap();
    assert_relative_eq!(logp, -0.444444 / 2.0, epsilon = 1e-6);
}

#[test]
fn column_selection_changes_profile() {
    let like = load(2);
    let rs = like.config().fiducial.rs;
    // alpha = 0.5 is below the tabulated range: flat clamp to chi2 = 16.
    assert_eq!(like.logp(&theory(like.fiducial_dm(), 2.0 * rs)).unwrap(), -8.0);
}

#[test]
fn zero_sound_horizon_is_not_masked() {
    let like = load(1);
    let logp = like.logp(&theory(like.fiducial_dm(), 0.0)).unwrap();
    assert!(logp.is_nan());
}

#[test]
fn three_node_profile_scenarios() {
    let mut file = tempfile::NamedTempFile::new().unwrap();
    writeln!(file, "alpha,chi2_a,chi2_b\n0.8,10,1\n1.0,0,1\n1.2,10,1").unwrap();
    let like = AlphaLikelihood::initialize(LikelihoodConfig {
        data_path: file.path().to_path_buf(),
        ..LikelihoodConfig::default()
    })
    .unwrap();

    let rs = like.config().fiducial.rs;
    let dm = like.fiducial_dm();
    let flat = |scale: f64, rdrag: f64| EvaluationRequest::new(vec![dm * scale; 150], rdrag);

    assert_eq!(like.logp_request(&flat(1.0, rs)), 0.0);
    assert_eq!(like.logp_request(&flat(1.0, 2.0 * rs)), -5.0);
    assert_relative_eq!(like.logp_request(&flat(1.1, rs)), -2.5, epsilon = 1e-9);
}

#[test]
fn missing_profile_is_fatal() {
    let config = LikelihoodConfig {
        data_path: PathBuf::from("/nonexistent/chi2profile.csv"),
        ..LikelihoodConfig::default()
    };
    let err = AlphaLikelihood::initialize(config).unwrap_err();
    assert!(matches!(err, LikelihoodError::DataLoad { .. }));
}

#[test]
fn requirements_json_matches_provider_contract() {
    let like = load(1);
    let json = serde_json::to_value(like.get_requirements()).unwrap();
    assert!(json["rdrag"].is_null());
    let z = json["angular_diameter_distance"]["z"].as_array().unwrap();
    assert_eq!(z.len(), 150);
    assert_eq!(z[0].as_f64(), Some(0.0));
    assert_eq!(z[149].as_f64(), Some(2.0));
}

#[test]
fn shared_evaluator_across_threads() {
    let like = load(1);
    let rs = like.config().fiducial.rs;
    let dm = like.fiducial_dm();

    let results: Vec<f64> = std::thread::scope(|s| {
        let handles: Vec<_> = (0..4)
            .map(|i| {
                let like = &like;
                s.spawn(move || like.logp(&theory(dm, rs * (1.0 + 0.01 * i as f64))).unwrap())
            })
            .collect();
        handles.into_iter().map(|h| h.join().unwrap()).collect()
    });

    assert_eq!(results[0], 0.0);
    assert!(results.windows(2).all(|w| w[1] < w[0]));
}

#[test]
fn scan_finds_fiducial_sound_horizon() {
    let like = load(1);
    let points = scan_rdrag(&like, like.fiducial_dm(), 140.0, 155.0, 151).unwrap();
    let best = best_point(&points).unwrap();
    assert!((best.rdrag - 147.6).abs() < 0.15, "best rdrag {}", best.rdrag);
}
