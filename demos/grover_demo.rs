//! Classic demo: 3 qubits searching for index 5, then the element-list form.
//!
//!   cargo run --example grover_demo
use std::collections::HashSet;

use grover_sim::core::readout::Readout;
use grover_sim::core::{grover_elements, grover_qubits};

fn main() -> anyhow::Result<()> {
    let (n, solution_index) = (3, 5);
    let result = grover_qubits(n, solution_index)?;
    println!("final state (n = {n}, solution = {solution_index}):");
    println!("{}", Readout::from_amplitudes(&result));

    let elements: Vec<u32> = (0..8).collect();
    let marked: HashSet<u32> = [3, 5].into_iter().collect();
    let result = grover_elements(&elements, &marked)?;
    println!();
    println!("final state (elements 0..8, marked {{3, 5}}):");
    println!("{}", Readout::from_amplitudes(&result));
    Ok(())
}
