use crate::errors::NetworkError;

use log::warn;
use ndarray::{Array2, Axis};
use rand::Rng;
use rand_distr::StandardNormal;

use std::fmt;

/// Logistic activation function.
pub fn sigmoid(z: f64) -> f64 {
    1.0 / (1.0 + (-z).exp())
}

/// Derivative of the [`sigmoid`] function.
pub fn sigmoid_prime(z: f64) -> f64 {
    let s = sigmoid(z);
    s * (1.0 - s)
}

/// A fully-connected layer of sigmoid neurons.
///
/// Parameters are a `neuron_count × input_count` weight
/// matrix and a `neuron_count × 1` bias vector. Activations,
/// errors and derivatives are kept from the last forward
/// and backward passes, with one column per sample of the
/// batch that was passed through.
#[derive(Clone, Debug)]
pub struct Layer {
    neuron_count: usize,
    input_count: usize,
    weights: Array2<f64>,
    biases: Array2<f64>,
    input_activation: Array2<f64>,
    weighted_input: Array2<f64>,
    output_activation: Array2<f64>,
    backpropagation_error: Array2<f64>,
    bias_partial_derivatives: Vec<Array2<f64>>,
    weight_partial_derivatives: Vec<Array2<f64>>,
}

impl Layer {
    /// Creates a new layer with weights and biases
    /// drawn from a standard normal distribution.
    ///
    /// # Examples
    /// ```
    /// use neuroevo_nn::networks::Layer;
    /// use rand::{rngs::StdRng, SeedableRng};
    ///
    /// let layer = Layer::new(3, 2, &mut StdRng::seed_from_u64(7));
    /// assert_eq!(layer.weights().dim(), (3, 2));
    /// assert_eq!(layer.biases().dim(), (3, 1));
    /// ```
    pub fn new<R>(neuron_count: usize, input_count: usize, rng: &mut R) -> Layer
    where
        R: Rng + ?Sized,
    {
        let mut layer = Layer::zeroed(neuron_count, input_count);
        layer.reset_randomly(rng);
        layer
    }

    /// Creates a pass-through input layer. It has no inputs,
    /// and its biases are never used, so they are all zero.
    pub(crate) fn input(neuron_count: usize) -> Layer {
        Layer::zeroed(neuron_count, 0)
    }

    fn zeroed(neuron_count: usize, input_count: usize) -> Layer {
        Layer {
            neuron_count,
            input_count,
            weights: Array2::zeros((neuron_count, input_count)),
            biases: Array2::zeros((neuron_count, 1)),
            input_activation: Array2::zeros((input_count, 1)),
            weighted_input: Array2::zeros((neuron_count, 1)),
            output_activation: Array2::zeros((neuron_count, 1)),
            backpropagation_error: Array2::zeros((neuron_count, 1)),
            bias_partial_derivatives: vec![],
            weight_partial_derivatives: vec![],
        }
    }

    /// Creates a layer from per-neuron weight rows and biases.
    ///
    /// # Errors
    /// Fails if `biases` and `weights` differ in length, or if any
    /// weight row does not have `input_count` entries.
    pub fn from_parameters(
        input_count: usize,
        weights: &[Vec<f64>],
        biases: &[f64],
    ) -> Result<Layer, NetworkError> {
        let mut layer = Layer::zeroed(weights.len(), input_count);
        layer.set_weight_rows(weights)?;
        layer.set_bias_values(biases)?;
        Ok(layer)
    }

    /// Redraws every weight and bias from a standard normal distribution.
    pub fn reset_randomly<R>(&mut self, rng: &mut R)
    where
        R: Rng + ?Sized,
    {
        self.biases = Array2::from_shape_fn((self.neuron_count, 1), |_| {
            rng.sample::<f64, _>(StandardNormal)
        });
        self.weights = Array2::from_shape_fn((self.neuron_count, self.input_count), |_| {
            rng.sample::<f64, _>(StandardNormal)
        });
    }

    /// Computes `σ(W·input + b)` for every column of `input`.
    ///
    /// # Errors
    /// Fails if `input` does not have `input_count` rows.
    /// The layer's state is left untouched in that case.
    ///
    /// # Examples
    /// ```
    /// use neuroevo_nn::networks::Layer;
    /// use ndarray::array;
    ///
    /// let mut layer = Layer::from_parameters(2, &[vec![1.0, -1.0]], &[0.0]).unwrap();
    /// layer.feed_forward(&array![[2.0], [2.0]]).unwrap();
    /// assert_eq!(layer.output_activation()[[0, 0]], 0.5);
    ///
    /// assert!(layer.feed_forward(&array![[1.0]]).is_err());
    /// ```
    pub fn feed_forward(&mut self, input: &Array2<f64>) -> Result<(), NetworkError> {
        if input.nrows() != self.input_count {
            warn!(
                "layer input size mismatch: expected {} rows, got {}",
                self.input_count,
                input.nrows()
            );
            return Err(NetworkError::shape_mismatch(
                "layer feedforward",
                (self.input_count, input.ncols()),
                input.dim(),
            ));
        }

        let mut weighted_input = self.weights.dot(input);
        weighted_input += &self.biases;
        self.output_activation = weighted_input.mapv(sigmoid);
        self.weighted_input = weighted_input;
        self.input_activation = input.clone();
        Ok(())
    }

    /// Replaces the weight matrix.
    pub fn set_weights(&mut self, weights: &Array2<f64>) -> Result<(), NetworkError> {
        if weights.dim() != self.weights.dim() {
            warn!("weight matrix size mismatch");
            return Err(NetworkError::shape_mismatch(
                "set weights",
                self.weights.dim(),
                weights.dim(),
            ));
        }
        self.weights.assign(weights);
        Ok(())
    }

    /// Replaces the weights, one row per neuron.
    pub fn set_weight_rows(&mut self, rows: &[Vec<f64>]) -> Result<(), NetworkError> {
        if rows.len() != self.neuron_count {
            warn!("weights vector size mismatches number of neurons");
            return Err(NetworkError::shape_mismatch(
                "set weight rows",
                self.weights.dim(),
                (rows.len(), self.input_count),
            ));
        }
        if let Some(row) = rows.iter().find(|r| r.len() != self.input_count) {
            warn!("weights vector size mismatches number of inputs");
            return Err(NetworkError::shape_mismatch(
                "set weight rows",
                self.weights.dim(),
                (rows.len(), row.len()),
            ));
        }
        for (mut target, row) in self.weights.rows_mut().into_iter().zip(rows) {
            for (t, w) in target.iter_mut().zip(row) {
                *t = *w;
            }
        }
        Ok(())
    }

    /// Replaces the bias vector.
    pub fn set_biases(&mut self, biases: &Array2<f64>) -> Result<(), NetworkError> {
        if biases.dim() != self.biases.dim() {
            warn!("bias vector size mismatch");
            return Err(NetworkError::shape_mismatch(
                "set biases",
                self.biases.dim(),
                biases.dim(),
            ));
        }
        self.biases.assign(biases);
        Ok(())
    }

    /// Replaces the biases, one value per neuron.
    pub fn set_bias_values(&mut self, biases: &[f64]) -> Result<(), NetworkError> {
        if biases.len() != self.neuron_count {
            warn!("bias vector size mismatches number of neurons");
            return Err(NetworkError::shape_mismatch(
                "set bias values",
                self.biases.dim(),
                (biases.len(), 1),
            ));
        }
        for (b, v) in self.biases.iter_mut().zip(biases) {
            *b = *v;
        }
        Ok(())
    }

    /// Sets every weight to `weight`.
    pub fn set_uniform_weight(&mut self, weight: f64) {
        self.weights.fill(weight);
    }

    /// Sets every bias to `bias`.
    pub fn set_uniform_bias(&mut self, bias: f64) {
        self.biases.fill(bias);
    }

    /// Sets the output activation directly, bypassing
    /// the layer's transform. Used by input layers.
    pub fn set_output_activation(&mut self, activation: &Array2<f64>) -> Result<(), NetworkError> {
        if activation.nrows() != self.neuron_count {
            warn!("activation output signal mismatch");
            return Err(NetworkError::shape_mismatch(
                "set output activation",
                (self.neuron_count, activation.ncols()),
                activation.dim(),
            ));
        }
        self.output_activation = activation.clone();
        Ok(())
    }

    /// Computes the output layer error `(a - y) ⊙ σ'(z)`.
    ///
    /// # Errors
    /// Fails if `expected` is not shaped like the last output activation.
    pub fn compute_output_layer_error(&mut self, expected: &Array2<f64>) -> Result<(), NetworkError> {
        if self.output_activation.dim() != expected.dim() {
            warn!("layer activation output to label mismatch");
            return Err(NetworkError::shape_mismatch(
                "output layer error",
                self.output_activation.dim(),
                expected.dim(),
            ));
        }
        self.backpropagation_error =
            (&self.output_activation - expected) * self.weighted_input.mapv(sigmoid_prime);
        Ok(())
    }

    /// Computes the error `(Wᵀ_next · δ_next) ⊙ σ'(z)` from
    /// the error and weights of the layer after this one.
    ///
    /// # Errors
    /// Fails, without modifying the layer, if `next_weights` does not
    /// connect to this layer, or if `next_error` is not shaped like the
    /// next layer's output for the last batch fed through this one.
    pub fn compute_backpropagation_error(
        &mut self,
        next_error: &Array2<f64>,
        next_weights: &Array2<f64>,
    ) -> Result<(), NetworkError> {
        if self.weighted_input.nrows() != next_weights.ncols()
            || next_error.nrows() != next_weights.nrows()
        {
            warn!("backpropagation error layer dimension mismatch");
            return Err(NetworkError::shape_mismatch(
                "backpropagation error",
                (next_weights.nrows(), self.weighted_input.nrows()),
                next_weights.dim(),
            ));
        }
        if next_error.ncols() != self.weighted_input.ncols() {
            warn!("backpropagation error batch size mismatch");
            return Err(NetworkError::shape_mismatch(
                "backpropagation error",
                (next_weights.nrows(), self.weighted_input.ncols()),
                next_error.dim(),
            ));
        }
        self.backpropagation_error =
            next_weights.t().dot(next_error) * self.weighted_input.mapv(sigmoid_prime);
        Ok(())
    }

    /// Stores an error computed elsewhere, e.g. by a cost function.
    pub fn set_backpropagation_error(&mut self, error: Array2<f64>) -> Result<(), NetworkError> {
        if error.dim() != self.weighted_input.dim() {
            warn!("backpropagation error size mismatch");
            return Err(NetworkError::shape_mismatch(
                "set backpropagation error",
                self.weighted_input.dim(),
                error.dim(),
            ));
        }
        self.backpropagation_error = error;
        Ok(())
    }

    /// Derives the bias and weight gradients of every sample
    /// in the last backward pass. Samples without a matching
    /// input activation are skipped.
    pub fn compute_partial_derivatives(&mut self) {
        self.bias_partial_derivatives.clear();
        self.weight_partial_derivatives.clear();

        let samples = self
            .backpropagation_error
            .ncols()
            .min(self.input_activation.ncols());
        for k in 0..samples {
            let delta = self.backpropagation_error.column(k).insert_axis(Axis(1));
            let input = self.input_activation.column(k).insert_axis(Axis(0));
            self.weight_partial_derivatives.push(delta.dot(&input));
            self.bias_partial_derivatives.push(delta.to_owned());
        }
    }

    /// Subtracts the passed deltas from the biases and weights.
    ///
    /// # Errors
    /// Fails, without modifying the layer, if either delta
    /// is mis-shaped.
    pub fn update_weights_and_biases(
        &mut self,
        delta_bias: &Array2<f64>,
        delta_weight: &Array2<f64>,
    ) -> Result<(), NetworkError> {
        if delta_bias.dim() != self.biases.dim() {
            return Err(NetworkError::shape_mismatch(
                "bias update",
                self.biases.dim(),
                delta_bias.dim(),
            ));
        }
        if delta_weight.dim() != self.weights.dim() {
            return Err(NetworkError::shape_mismatch(
                "weight update",
                self.weights.dim(),
                delta_weight.dim(),
            ));
        }
        self.biases -= delta_bias;
        self.weights -= delta_weight;
        Ok(())
    }

    /// Applies one gradient descent step with the
    /// derivatives of the given sample.
    pub fn update_with_partial_derivatives(
        &mut self,
        eta: f64,
        sample: usize,
    ) -> Result<(), NetworkError> {
        let count = self.bias_partial_derivatives.len();
        if sample >= count {
            return Err(NetworkError::SampleIndexOutOfRange {
                index: sample,
                count,
            });
        }
        let delta_bias = &self.bias_partial_derivatives[sample] * eta;
        let delta_weight = &self.weight_partial_derivatives[sample] * eta;
        self.update_weights_and_biases(&delta_bias, &delta_weight)
    }

    pub fn neuron_count(&self) -> usize {
        self.neuron_count
    }

    pub fn input_count(&self) -> usize {
        self.input_count
    }

    pub fn weights(&self) -> &Array2<f64> {
        &self.weights
    }

    pub fn biases(&self) -> &Array2<f64> {
        &self.biases
    }

    /// Mutable access to the parameters. Shapes are fixed,
    /// so only values can be changed through these views.
    pub(crate) fn parameters_mut(&mut self) -> (&mut Array2<f64>, &mut Array2<f64>) {
        (&mut self.weights, &mut self.biases)
    }

    pub fn input_activation(&self) -> &Array2<f64> {
        &self.input_activation
    }

    pub fn weighted_input(&self) -> &Array2<f64> {
        &self.weighted_input
    }

    pub fn output_activation(&self) -> &Array2<f64> {
        &self.output_activation
    }

    pub fn backpropagation_error(&self) -> &Array2<f64> {
        &self.backpropagation_error
    }

    /// Bias gradients of the last backward pass, one per sample.
    pub fn bias_partial_derivatives(&self) -> &[Array2<f64>] {
        &self.bias_partial_derivatives
    }

    /// Weight gradients of the last backward pass, one per sample.
    pub fn weight_partial_derivatives(&self) -> &[Array2<f64>] {
        &self.weight_partial_derivatives
    }
}

impl fmt::Display for Layer {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Biases:\n{:.4}", self.biases)?;
        writeln!(f, "Weights:\n{:.4}", self.weights)?;
        write!(f, "Error:\n{:.4}", self.backpropagation_error)
    }
}
