use std::collections::HashSet;

use grover_sim::core::types::{Amplitudes, CHECK_TOL};
use grover_sim::core::{diffuser, gates, oracle, state, MarkedPolicy};

fn approx_eq(a: f64, b: f64, eps: f64) -> bool {
    (a - b).abs() <= eps
}

#[test]
fn hadamard_is_orthogonal_up_to_six_qubits() {
    for n in 1..=6 {
        let h = gates::hadamard_n(n).expect("hadamard ok");
        assert_eq!(h.dim(), 1 << n);
        assert!(h.is_orthogonal(CHECK_TOL), "H⊗{n} not orthogonal");
    }
}

#[test]
fn index_oracles_are_involutions() {
    for n in 1..=4 {
        for i in 0..(1usize << n) {
            let o = oracle::from_index(n, i).expect("oracle ok");
            let oo = o.compose(&o).expect("same size");
            assert!(oo.is_orthogonal(CHECK_TOL));
            assert!(o.is_involution(CHECK_TOL), "oracle({n}, {i})");
        }
    }
}

#[test]
fn element_oracles_are_involutions() {
    let domain: Vec<char> = "abcdefg".chars().collect();
    for marked in [vec![], vec!['a'], vec!['b', 'g'], vec!['z', 'c', 'd']] {
        let marked: HashSet<char> = marked.into_iter().collect();
        let o = oracle::from_elements(&domain, &marked, MarkedPolicy::Permissive).unwrap();
        assert!(o.is_involution(CHECK_TOL));
    }
}

#[test]
fn diffusers_are_involutions() {
    for size in 1..=20 {
        let d = diffuser::diffuser(size).expect("diffuser ok");
        assert!(d.is_involution(CHECK_TOL), "diffuser({size})");
    }
}

#[test]
fn diffuser_fixes_the_uniform_vector() {
    let s = state::uniform(6).unwrap();
    let out = diffuser::diffuser(6).unwrap().apply(&s).unwrap();
    for (a, b) in out.as_slice().iter().zip(s.as_slice()) {
        assert!(approx_eq(*a, *b, 1e-12));
    }
}

#[test]
fn normalize_twice_equals_once() {
    let samples = [
        vec![1.0, 1.0],
        vec![0.2, -0.7, 3.1, 0.0],
        vec![1e-3, 2e-3, -5e-3],
        vec![42.0],
    ];
    for v in samples {
        let v = Amplitudes::from_vec(v);
        let once = state::normalize(&v).unwrap();
        let twice = state::normalize(&once).unwrap();
        assert!(approx_eq(state::norm(&once), 1.0, 1e-12));
        for (a, b) in once.as_slice().iter().zip(twice.as_slice()) {
            assert!(approx_eq(*a, *b, 1e-12));
        }
    }
}

#[test]
fn hadamard_on_zero_is_uniform() {
    for n in 1..=5 {
        let size = 1 << n;
        let psi = gates::hadamard_n(n)
            .unwrap()
            .apply(&state::basis_zero(size).unwrap())
            .unwrap();
        let u = state::uniform(size).unwrap();
        for (a, b) in psi.as_slice().iter().zip(u.as_slice()) {
            assert!(approx_eq(*a, *b, 1e-12));
        }
    }
}
