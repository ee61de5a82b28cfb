use std::collections::HashSet;

use grover_sim::core::readout::{most_likely, probabilities};
use grover_sim::core::{
    grover_elements, grover_qubits, EngineConfig, GroverEngine, GroverError, InitStrategy,
    IterationCount, MarkedPolicy, Phase,
};

fn set<T: std::hash::Hash + Eq>(items: impl IntoIterator<Item = T>) -> HashSet<T> {
    items.into_iter().collect()
}

#[test]
fn three_qubits_finds_index_five() {
    let v = grover_qubits(3, 5).expect("run ok");
    assert_eq!(v.len(), 8);
    let (i, p) = most_likely(&v).unwrap();
    assert_eq!(i, 5);
    assert!(p > 0.78, "p = {p}");
}

#[test]
fn element_list_single_marked() {
    let elements: Vec<u32> = (0..8).collect();
    let v = grover_elements(&elements, &set([0u32])).unwrap();
    assert_eq!(most_likely(&v).map(|(i, _)| i), Some(0));
}

#[test]
fn element_list_two_marked_standard_count() {
    // N = 8, M = 2 overshoots with floor(pi/4 * sqrt(8)) = 2 iterations and
    // lands every index on |a| = 1/sqrt(8); marked never fall below unmarked.
    let elements: Vec<u32> = (0..8).collect();
    let v = grover_elements(&elements, &set([3u32, 5])).unwrap();
    let a = v.as_slice();
    for u in (0..8).filter(|i| *i != 3 && *i != 5) {
        assert!(a[3].abs() + 1e-9 >= a[u].abs());
        assert!(a[5].abs() + 1e-9 >= a[u].abs());
    }
}

#[test]
fn element_list_two_marked_marked_aware_count() {
    let elements: Vec<u32> = (0..8).collect();
    let cfg = EngineConfig {
        iterations: IterationCount::MarkedAware,
        ..EngineConfig::element_model()
    };
    let mut e = GroverEngine::for_elements(&elements, &set([3u32, 5]), cfg).unwrap();
    let v = e.run().unwrap().clone();
    assert_eq!(e.iterations(), 1);
    let a = v.as_slice();
    for u in (0..8).filter(|i| *i != 3 && *i != 5) {
        assert!(a[3].abs() > a[u].abs());
        assert!(a[5].abs() > a[u].abs());
    }
    let p = probabilities(&v);
    assert!((p[3] + p[5] - 1.0).abs() < 1e-9);
}

#[test]
fn single_element_domain_runs_zero_iterations() {
    let mut e =
        GroverEngine::for_elements(&["x"], &set(["x"]), EngineConfig::element_model()).unwrap();
    let v = e.run().unwrap();
    assert_eq!(v.as_slice(), &[1.0]);
    assert_eq!(e.iterations(), 0);
    assert_eq!(e.phase(), Phase::Done);
}

#[test]
fn marked_probability_never_drops_before_optimum() {
    for n in 2..=6 {
        let size = 1usize << n;
        let cfg = EngineConfig { record_trace: true, ..EngineConfig::qubit_model() };
        let mut e = GroverEngine::for_qubits(n, size - 1, cfg).unwrap();
        e.run().unwrap();
        let trace = e.trace();
        assert_eq!(trace.len(), e.iterations() + 1);
        for w in trace.windows(2) {
            assert!(w[1] + 1e-12 >= w[0], "n = {n}: {trace:?}");
        }
    }
}

#[test]
fn renormalize_toggle_is_numerically_equivalent() {
    let elements: Vec<u16> = (0..32).collect();
    let marked = set([9u16, 17, 30]);
    let with = GroverEngine::for_elements(&elements, &marked, EngineConfig::element_model())
        .and_then(|mut e| e.run().cloned())
        .unwrap();
    let cfg = EngineConfig { renormalize_after_oracle: false, ..EngineConfig::element_model() };
    let without = GroverEngine::for_elements(&elements, &marked, cfg)
        .and_then(|mut e| e.run().cloned())
        .unwrap();
    for (a, b) in with.as_slice().iter().zip(without.as_slice()) {
        assert!((a - b).abs() < 1e-12);
    }
}

#[test]
fn hadamard_and_uniform_starts_agree() {
    for n in 1..=5 {
        let target = (1usize << n) / 2;
        let run = |init| {
            let cfg = EngineConfig { init, ..EngineConfig::qubit_model() };
            let mut e = GroverEngine::for_qubits(n, target, cfg).unwrap();
            e.run().cloned().unwrap()
        };
        let h = run(InitStrategy::Hadamard);
        let u = run(InitStrategy::Uniform);
        for (a, b) in h.as_slice().iter().zip(u.as_slice()) {
            assert!((a - b).abs() < 1e-12);
        }
    }
}

#[test]
fn strict_mode_rejects_absent_marked() {
    let elements = ["red", "green", "blue"];
    let marked = set(["green", "purple"]);
    let cfg = EngineConfig { marked_policy: MarkedPolicy::Strict, ..EngineConfig::element_model() };
    let err = GroverEngine::for_elements(&elements, &marked, cfg).unwrap_err();
    assert_eq!(err, GroverError::UnknownMarked { missing: 1 });

    // permissive: only "green" is flipped
    let v = grover_elements(&elements, &marked).unwrap();
    assert_eq!(most_likely(&v).map(|(i, _)| i), Some(1));
}

#[test]
fn invalid_inputs_fail_fast() {
    assert!(matches!(grover_qubits(0, 0), Err(GroverError::InvalidDimension(_))));
    assert_eq!(
        grover_qubits(2, 7).unwrap_err(),
        GroverError::InvalidIndex { index: 7, size: 4 }
    );
    let empty: [u8; 0] = [];
    assert!(matches!(grover_elements(&empty, &set([1u8])), Err(GroverError::InvalidDimension(_))));
}

#[test]
fn engine_can_pause_between_iterations() {
    let mut e = GroverEngine::for_qubits(4, 3, EngineConfig::qubit_model()).unwrap();
    e.step().unwrap();
    let k = e.iterations();
    assert_eq!(k, 3);
    e.step().unwrap();
    let paused = e.state().clone();
    assert_eq!(e.phase(), Phase::Amplifying { remaining: k - 1 });
    assert!(e.final_amplitudes().is_none());

    let mut straight = GroverEngine::for_qubits(4, 3, EngineConfig::qubit_model()).unwrap();
    straight.run().unwrap();
    e.run().unwrap();
    assert_ne!(&paused, e.state());
    assert_eq!(e.state(), straight.state());
}
