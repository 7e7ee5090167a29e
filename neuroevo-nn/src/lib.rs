//! # neuroevo-nn
//! Fixed-topology feedforward neural networks of sigmoid neurons,
//! trainable by backpropagation and breedable by the
//! [`neuroevo` crate](https://crates.io/crates/neuroevo)'s evolution engine.
//!
//! Provides:
//! - [`Network`] and [`Layer`]: column-per-sample feedforward, gradient
//!   descent and mini-batch stochastic gradient descent, with a pluggable
//!   [`CostFunction`] (cross-entropy by default).
//! - JSON persistence of networks via [`Network::save`] and [`Network::load`].
//! - [`genetics`]: parameter-wise crossover and mutation operators.
//! - [`data`]: labelled data sets with one-hot output generation.
//!
//! [`Network`]: crate::networks::Network
//! [`Layer`]: crate::networks::Layer
//! [`CostFunction`]: crate::networks::CostFunction
//! [`Network::save`]: crate::networks::Network::save
//! [`Network::load`]: crate::networks::Network::load
//!
//! # Example usage: Learning XOR by stochastic gradient descent
//! ```
//! use neuroevo_nn::{data::column_vector, networks::Network};
//!
//! fn main() {
//!     let mut network = Network::new(&[2, 4, 1]).unwrap();
//!
//!     let samples = vec![
//!         column_vector(&[0.0, 0.0]),
//!         column_vector(&[0.0, 1.0]),
//!         column_vector(&[1.0, 0.0]),
//!         column_vector(&[1.0, 1.0]),
//!     ];
//!     let labels = vec![
//!         column_vector(&[0.0]),
//!         column_vector(&[1.0]),
//!         column_vector(&[1.0]),
//!         column_vector(&[0.0]),
//!     ];
//!
//!     for _ in 0..1000 {
//!         network
//!             .stochastic_gradient_descent(&samples, &labels, 4, 0.5)
//!             .unwrap();
//!     }
//!
//!     for (x, y) in samples.iter().zip(&labels) {
//!         let output = network.feed_forward(x).unwrap();
//!         println!("{} -> {:.3} (expected {})", x.t(), output[[0, 0]], y[[0, 0]]);
//!     }
//! }
//! ```

pub mod data;
mod errors;
pub mod genetics;
pub mod networks;

pub use errors::{NetworkError, Shape};
