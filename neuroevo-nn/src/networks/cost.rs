use super::layer::sigmoid_prime;

use ndarray::Array2;

/// A cost function measuring how far a network's output
/// activation is from the expected output, together with
/// the output layer error it induces.
///
/// All matrices hold one sample per column.
pub trait CostFunction {
    /// Returns the cost averaged over all samples.
    fn cost(&self, activation: &Array2<f64>, expected: &Array2<f64>) -> f64;

    /// Returns the output layer error `∂C/∂z`.
    fn delta(
        &self,
        weighted_input: &Array2<f64>,
        activation: &Array2<f64>,
        expected: &Array2<f64>,
    ) -> Array2<f64>;
}

/// The cross-entropy cost `-Σ[y·ln(a) + (1-y)·ln(1-a)]`.
///
/// Combined with sigmoid output neurons the `σ'(z)` term
/// cancels out, so the output error is simply `a - y`.
///
/// The cost is NaN when an activation saturates at exactly
/// 0 or 1.
#[derive(Clone, Copy, Debug, Default)]
pub struct CrossEntropyCost;

impl CostFunction for CrossEntropyCost {
    fn cost(&self, activation: &Array2<f64>, expected: &Array2<f64>) -> f64 {
        let total: f64 = activation
            .iter()
            .zip(expected)
            .map(|(a, y)| -(y * a.ln() + (1.0 - y) * (1.0 - a).ln()))
            .sum();
        total / activation.ncols() as f64
    }

    fn delta(
        &self,
        _weighted_input: &Array2<f64>,
        activation: &Array2<f64>,
        expected: &Array2<f64>,
    ) -> Array2<f64> {
        activation - expected
    }
}

/// The quadratic cost `½‖a - y‖²`, whose output error is
/// `(a - y) ⊙ σ'(z)`.
#[derive(Clone, Copy, Debug, Default)]
pub struct QuadraticCost;

impl CostFunction for QuadraticCost {
    fn cost(&self, activation: &Array2<f64>, expected: &Array2<f64>) -> f64 {
        let total: f64 = activation
            .iter()
            .zip(expected)
            .map(|(a, y)| (a - y).powi(2))
            .sum();
        0.5 * total / activation.ncols() as f64
    }

    fn delta(
        &self,
        weighted_input: &Array2<f64>,
        activation: &Array2<f64>,
        expected: &Array2<f64>,
    ) -> Array2<f64> {
        (activation - expected) * weighted_input.mapv(sigmoid_prime)
    }
}

#[cfg(test)]
mod test {
    use super::*;
    use ndarray::array;

    #[test]
    fn cross_entropy_cost() {
        let a = array![[0.5], [0.5]];
        let y = array![[1.0], [0.0]];
        let cost = CrossEntropyCost.cost(&a, &y);
        assert!((cost - 2.0 * 2f64.ln()).abs() < 1e-12);
    }

    #[test]
    fn cross_entropy_cost_is_averaged_over_samples() {
        let a = array![[0.5, 0.5]];
        let y = array![[1.0, 1.0]];
        assert!((CrossEntropyCost.cost(&a, &y) - 2f64.ln()).abs() < 1e-12);
    }

    #[test]
    fn cross_entropy_saturation_is_nan() {
        let cost = CrossEntropyCost.cost(&array![[1.0]], &array![[1.0]]);
        assert!(cost.is_nan());
    }

    #[test]
    fn cross_entropy_delta() {
        let delta = CrossEntropyCost.delta(&array![[9.0]], &array![[0.25]], &array![[1.0]]);
        assert_eq!(delta, array![[-0.75]]);
    }

    #[test]
    fn quadratic_cost_and_delta() {
        let a = array![[0.5, 1.0]];
        let y = array![[1.0, 1.0]];
        assert_eq!(QuadraticCost.cost(&a, &y), 0.0625);
        let delta = QuadraticCost.delta(&array![[0.0, 0.0]], &a, &y);
        assert_eq!(delta, array![[-0.125, 0.0]]);
    }
}
