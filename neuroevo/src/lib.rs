//! A multithreaded evolution engine for neural network-driven
//! simulations, using the fixed-topology networks of the
//! [`neuroevo-nn`](https://crates.io/crates/neuroevo-nn) crate.
//!
//! A population of user-defined [`Simulation`]s is stepped in
//! parallel until every member has died. The two fittest members
//! are then bred by a user-defined [`SimulationFactory`] into the
//! next generation, and the fittest parent ever seen is kept as
//! the champion.
//!
//! # Example usage: Evolution of an XOR function approximator
//! ```
//! use neuroevo::{Evolution, EvolutionConfig, Simulation, SimulationFactory};
//! use neuroevo_nn::{data::column_vector, genetics, networks::Network, NetworkError};
//! use std::num::NonZeroUsize;
//!
//! const CASES: [([f64; 2], f64); 4] = [
//!     ([0.0, 0.0], 0.0),
//!     ([0.0, 1.0], 1.0),
//!     ([1.0, 0.0], 1.0),
//!     ([1.0, 1.0], 0.0),
//! ];
//!
//! // Scores one XOR case per step.
//! struct XorTrial {
//!     network: Network,
//!     step: usize,
//!     fitness: f64,
//! }
//!
//! impl Simulation for XorTrial {
//!     fn do_step(&mut self) {
//!         let (input, expected) = CASES[self.step];
//!         if let Ok(output) = self.network.feed_forward(&column_vector(&input)) {
//!             self.fitness += 1.0 - (output[[0, 0]] - expected).abs();
//!         }
//!         self.step += 1;
//!     }
//!     fn is_alive(&self) -> bool { self.step < CASES.len() }
//!     fn kill(&mut self) { self.step = CASES.len(); }
//!     fn fitness(&self) -> f64 { self.fitness }
//!     fn age(&self) -> f64 { self.step as f64 }
//!     fn network(&self) -> &Network { &self.network }
//!     fn set_network(&mut self, network: Network) { self.network = network; }
//! }
//!
//! struct XorFactory;
//!
//! impl XorFactory {
//!     fn trial(network: Network) -> XorTrial {
//!         XorTrial { network, step: 0, fitness: 0.0 }
//!     }
//! }
//!
//! impl SimulationFactory for XorFactory {
//!     type Simulation = XorTrial;
//!
//!     fn create_random_simulation(&self) -> XorTrial {
//!         Self::trial(Network::new(&[2, 3, 1]).unwrap())
//!     }
//!
//!     fn create_crossover(
//!         &self,
//!         first: &XorTrial,
//!         second: &XorTrial,
//!         mutation_rate: f64,
//!     ) -> Result<XorTrial, NetworkError> {
//!         let network = genetics::crossover(
//!             &first.network,
//!             &second.network,
//!             mutation_rate,
//!             &mut rand::thread_rng(),
//!         )?;
//!         Ok(Self::trial(network))
//!     }
//!
//!     fn copy(&self, simulation: &XorTrial) -> XorTrial {
//!         Self::trial(simulation.network.clone())
//!     }
//! }
//!
//! fn main() {
//!     let config = EvolutionConfig {
//!         initial_count: NonZeroUsize::new(50).unwrap(),
//!         offspring_count: NonZeroUsize::new(48).unwrap(),
//!         thread_count: NonZeroUsize::new(4).unwrap(),
//!         mutation_rate: 0.05,
//!         keep_parents: true,
//!     };
//!
//!     let evolution = Evolution::new(config, XorFactory).unwrap();
//!     for _ in 0..20 {
//!         evolution.do_epoch();
//!         if let Err(e) = evolution.breed() {
//!             eprintln!("{}", e);
//!             break;
//!         }
//!     }
//!     println!("Champion fitness: {:?}", evolution.fittest_fitness());
//! }
//! ```

mod evolution;
mod simulation;

pub use evolution::*;
pub use simulation::*;
