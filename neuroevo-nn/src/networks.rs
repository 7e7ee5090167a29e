//! Layered feedforward networks of sigmoid neurons,
//! trained by backpropagation.
//!
//! A [`Network`] is an ordered stack of fully-connected
//! [`Layer`]s, the first of which is a pass-through input
//! layer. Inputs and outputs are column matrices, and
//! several samples can be passed at once as separate columns.
//!
//! The output layer error is always computed by the network's
//! [`CostFunction`], which defaults to [`CrossEntropyCost`].
mod cost;
mod layer;
mod persistence;

pub use cost::{CostFunction, CrossEntropyCost, QuadraticCost};
pub use layer::{sigmoid, sigmoid_prime, Layer};

use crate::errors::NetworkError;

use log::warn;
use ndarray::Array2;
use rand::Rng;

use std::fmt;
use std::sync::Arc;

/// A feedforward neural network with a fixed topology.
#[derive(Clone)]
pub struct Network {
    structure: Vec<usize>,
    layers: Vec<Layer>,
    output_activation: Array2<f64>,
    cost: Arc<dyn CostFunction + Send + Sync>,
}

impl Network {
    /// Creates a network with randomly initialized parameters.
    /// `structure` lists the number of neurons of every layer,
    /// starting with the input layer.
    ///
    /// # Errors
    /// Fails if `structure` is empty or contains a zero.
    ///
    /// # Examples
    /// ```
    /// use neuroevo_nn::networks::Network;
    ///
    /// let network = Network::new(&[2, 3, 1]).unwrap();
    /// assert_eq!(network.number_of_layers(), 3);
    /// assert_eq!(network.output_layer().weights().dim(), (1, 3));
    /// ```
    pub fn new(structure: &[usize]) -> Result<Network, NetworkError> {
        Network::with_rng(structure, &mut rand::thread_rng())
    }

    /// Creates a network whose parameters are drawn from `rng`.
    pub fn with_rng<R>(structure: &[usize], rng: &mut R) -> Result<Network, NetworkError>
    where
        R: Rng + ?Sized,
    {
        if structure.is_empty() || structure.contains(&0) {
            warn!("invalid network structure {:?}", structure);
            return Err(NetworkError::EmptyStructure);
        }

        let layers = std::iter::once(Layer::input(structure[0]))
            .chain(
                structure
                    .windows(2)
                    .map(|pair| Layer::new(pair[1], pair[0], rng)),
            )
            .collect();

        Ok(Network::from_layers(structure.to_vec(), layers))
    }

    /// Assembles a network from already consistent layers.
    fn from_layers(structure: Vec<usize>, layers: Vec<Layer>) -> Network {
        let output_count = structure[structure.len() - 1];
        Network {
            structure,
            layers,
            output_activation: Array2::zeros((output_count, 1)),
            cost: Arc::new(CrossEntropyCost),
        }
    }

    /// Replaces the cost function used for backpropagation.
    pub fn set_cost_function<C>(&mut self, cost: C)
    where
        C: CostFunction + Send + Sync + 'static,
    {
        self.cost = Arc::new(cost);
    }

    /// Returns the cost function used for backpropagation.
    pub fn cost_function(&self) -> &(dyn CostFunction + Send + Sync) {
        self.cost.as_ref()
    }

    /// Propagates `input` through every layer and returns
    /// the output activation.
    ///
    /// # Errors
    /// Fails if `input` does not have as many rows as the input
    /// layer has neurons. The network's output activation is
    /// left at its last successful value.
    ///
    /// # Examples
    /// ```
    /// use neuroevo_nn::networks::Network;
    /// use ndarray::array;
    ///
    /// let mut network = Network::new(&[2, 4, 3]).unwrap();
    /// let output = network.feed_forward(&array![[0.5], [1.0]]).unwrap();
    /// assert_eq!(output.dim(), (3, 1));
    ///
    /// assert!(network.feed_forward(&array![[0.5]]).is_err());
    /// ```
    pub fn feed_forward(&mut self, input: &Array2<f64>) -> Result<&Array2<f64>, NetworkError> {
        self.layers[0].set_output_activation(input)?;

        for k in 1..self.layers.len() {
            let (before, after) = self.layers.split_at_mut(k);
            if let Err(e) = after[0].feed_forward(before[k - 1].output_activation()) {
                warn!("output-input signal size mismatch at layer {}", k);
                return Err(e);
            }
        }

        self.output_activation = self.output_layer().output_activation().clone();
        Ok(&self.output_activation)
    }

    /// Runs one feedforward pass followed by a full backward pass,
    /// leaving errors and partial derivatives in every layer
    /// but the input layer.
    fn feed_forward_and_backpropagate(
        &mut self,
        input: &Array2<f64>,
        expected: &Array2<f64>,
    ) -> Result<(), NetworkError> {
        self.feed_forward(input)?;

        if self.output_activation.dim() != expected.dim() {
            warn!("desired output signal mismatching dimension");
            return Err(NetworkError::shape_mismatch(
                "backpropagation",
                self.output_activation.dim(),
                expected.dim(),
            ));
        }

        let last = self.layers.len() - 1;
        if last == 0 {
            return Ok(());
        }

        let output_layer = &mut self.layers[last];
        let delta = self.cost.delta(
            output_layer.weighted_input(),
            output_layer.output_activation(),
            expected,
        );
        output_layer.set_backpropagation_error(delta)?;
        output_layer.compute_partial_derivatives();

        for k in (1..last).rev() {
            let (head, tail) = self.layers.split_at_mut(k + 1);
            let next = &tail[0];
            head[k].compute_backpropagation_error(next.backpropagation_error(), next.weights())?;
            head[k].compute_partial_derivatives();
        }

        Ok(())
    }

    /// Performs a single gradient descent step on one sample,
    /// with learning rate `eta`.
    ///
    /// # Errors
    /// Fails if `input` or `expected` are mis-shaped.
    pub fn gradient_descent(
        &mut self,
        input: &Array2<f64>,
        expected: &Array2<f64>,
        eta: f64,
    ) -> Result<(), NetworkError> {
        self.feed_forward_and_backpropagate(input, expected)?;

        for layer in self.layers.iter_mut().skip(1) {
            layer.update_with_partial_derivatives(eta, 0)?;
        }
        Ok(())
    }

    /// Performs one step of mini-batch stochastic gradient descent.
    ///
    /// `batch_size` samples are drawn uniformly *with replacement*,
    /// and their gradients are averaged into a single update.
    ///
    /// # Errors
    /// Fails if `samples` and `labels` differ in length, if
    /// `batch_size` is zero or larger than the number of samples,
    /// or if a drawn sample is mis-shaped. No parameter is
    /// modified on failure.
    ///
    /// # Examples
    /// ```
    /// use neuroevo_nn::networks::Network;
    /// use ndarray::array;
    ///
    /// let mut network = Network::new(&[1, 2, 1]).unwrap();
    /// let samples = [array![[0.0]], array![[1.0]]];
    /// let labels = [array![[1.0]], array![[0.0]]];
    ///
    /// for _ in 0..10 {
    ///     network.stochastic_gradient_descent(&samples, &labels, 2, 0.5).unwrap();
    /// }
    /// assert!(network.stochastic_gradient_descent(&samples, &labels, 3, 0.5).is_err());
    /// ```
    pub fn stochastic_gradient_descent(
        &mut self,
        samples: &[Array2<f64>],
        labels: &[Array2<f64>],
        batch_size: usize,
        eta: f64,
    ) -> Result<(), NetworkError> {
        self.stochastic_gradient_descent_with_rng(
            samples,
            labels,
            batch_size,
            eta,
            &mut rand::thread_rng(),
        )
    }

    /// Same as [`stochastic_gradient_descent`], drawing the
    /// batch from `rng`.
    ///
    /// [`stochastic_gradient_descent`]: Network::stochastic_gradient_descent
    pub fn stochastic_gradient_descent_with_rng<R>(
        &mut self,
        samples: &[Array2<f64>],
        labels: &[Array2<f64>],
        batch_size: usize,
        eta: f64,
        rng: &mut R,
    ) -> Result<(), NetworkError>
    where
        R: Rng + ?Sized,
    {
        if samples.len() != labels.len() {
            warn!("number of samples and labels mismatch");
            return Err(NetworkError::SampleLabelCountMismatch {
                samples: samples.len(),
                labels: labels.len(),
            });
        }
        if batch_size == 0 || batch_size > samples.len() {
            warn!("batch size exceeds number of available samples");
            return Err(NetworkError::InvalidBatchSize {
                batch_size,
                samples: samples.len(),
            });
        }

        let mut bias_sums: Vec<Array2<f64>> = self.layers[1..]
            .iter()
            .map(|l| Array2::zeros(l.biases().dim()))
            .collect();
        let mut weight_sums: Vec<Array2<f64>> = self.layers[1..]
            .iter()
            .map(|l| Array2::zeros(l.weights().dim()))
            .collect();

        for _ in 0..batch_size {
            let index = rng.gen_range(0..samples.len());
            self.feed_forward_and_backpropagate(&samples[index], &labels[index])?;

            for ((layer, bias_sum), weight_sum) in self.layers[1..]
                .iter()
                .zip(&mut bias_sums)
                .zip(&mut weight_sums)
            {
                for pd in layer.bias_partial_derivatives() {
                    *bias_sum += pd;
                }
                for pd in layer.weight_partial_derivatives() {
                    *weight_sum += pd;
                }
            }
        }

        let scale = eta / batch_size as f64;
        for ((layer, bias_sum), weight_sum) in self.layers[1..]
            .iter_mut()
            .zip(bias_sums)
            .zip(weight_sums)
        {
            layer.update_weights_and_biases(&(bias_sum * scale), &(weight_sum * scale))?;
        }
        Ok(())
    }

    /// Feeds `input` forward and returns the cost of the
    /// output activation with respect to `expected`.
    pub fn evaluate_cost(
        &mut self,
        input: &Array2<f64>,
        expected: &Array2<f64>,
    ) -> Result<f64, NetworkError> {
        self.feed_forward(input)?;
        if self.output_activation.dim() != expected.dim() {
            return Err(NetworkError::shape_mismatch(
                "cost evaluation",
                self.output_activation.dim(),
                expected.dim(),
            ));
        }
        Ok(self.cost.cost(&self.output_activation, expected))
    }

    /// Returns the Euclidean norm of the output layer's last error.
    /// Useful as a convergence signal, not as an exact loss.
    pub fn network_error_magnitude(&self) -> f64 {
        self.output_layer()
            .backpropagation_error()
            .iter()
            .map(|e| e * e)
            .sum::<f64>()
            .sqrt()
    }

    pub fn number_of_layers(&self) -> usize {
        self.layers.len()
    }

    /// Returns the layer at `index`, where 0 is the input layer.
    pub fn layer(&self, index: usize) -> Option<&Layer> {
        let layer = self.layers.get(index);
        if layer.is_none() {
            warn!("layer index {} out of range", index);
        }
        layer
    }

    /// Mutable access to the layer at `index`.
    pub fn layer_mut(&mut self, index: usize) -> Option<&mut Layer> {
        self.layers.get_mut(index)
    }

    pub fn layers(&self) -> &[Layer] {
        &self.layers
    }

    pub(crate) fn layers_mut(&mut self) -> &mut [Layer] {
        &mut self.layers
    }

    pub fn output_layer(&self) -> &Layer {
        &self.layers[self.layers.len() - 1]
    }

    /// Number of neurons of every layer, input layer first.
    pub fn structure(&self) -> &[usize] {
        &self.structure
    }

    /// Output activation of the last successful feedforward pass.
    pub fn output_activation(&self) -> &Array2<f64> {
        &self.output_activation
    }

    /// Returns whether both networks have the same
    /// structure, weights and biases.
    pub fn same_parameters(&self, other: &Network) -> bool {
        self.structure == other.structure
            && self
                .layers
                .iter()
                .zip(&other.layers)
                .all(|(a, b)| a.weights() == b.weights() && a.biases() == b.biases())
    }

    /// Dumps every non-input layer to stdout.
    pub fn print(&self) {
        println!("{}", self);
    }
}

impl fmt::Display for Network {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, layer) in self.layers.iter().enumerate().skip(1) {
            writeln!(f, "Layer {}:\n{}\n", i, layer)?;
        }
        Ok(())
    }
}

impl fmt::Debug for Network {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Network")
            .field("structure", &self.structure)
            .field("layers", &self.layers)
            .finish_non_exhaustive()
    }
}
