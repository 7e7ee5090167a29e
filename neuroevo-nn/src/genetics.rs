//! Genetic operators over fixed-topology networks.
//!
//! Networks are treated as flat genomes of weights and biases:
//! [`crossover`] mixes two parents parameter by parameter, and
//! [`mutate`] redraws a random subset of a network's parameters.
use crate::errors::NetworkError;
use crate::networks::Network;

use log::warn;
use rand::Rng;
use rand_distr::StandardNormal;

/// Breeds a child from two networks of identical structure.
///
/// Every weight and bias is inherited from either parent with
/// equal probability, and the child is then [`mutate`]d with
/// `mutation_rate`.
///
/// # Errors
/// Fails if the parents' structures differ.
///
/// # Examples
/// ```
/// use neuroevo_nn::{genetics, networks::Network};
///
/// let mut rng = rand::thread_rng();
/// let a = Network::new(&[2, 2, 1]).unwrap();
/// let b = Network::new(&[2, 2, 1]).unwrap();
/// let child = genetics::crossover(&a, &b, 0.1, &mut rng).unwrap();
/// assert_eq!(child.structure(), a.structure());
///
/// let c = Network::new(&[2, 3, 1]).unwrap();
/// assert!(genetics::crossover(&a, &c, 0.1, &mut rng).is_err());
/// ```
pub fn crossover<R>(
    first: &Network,
    second: &Network,
    mutation_rate: f64,
    rng: &mut R,
) -> Result<Network, NetworkError>
where
    R: Rng + ?Sized,
{
    if first.structure() != second.structure() {
        warn!(
            "cannot cross networks of structure {:?} and {:?}",
            first.structure(),
            second.structure()
        );
        return Err(NetworkError::StructureMismatch(
            first.structure().to_vec(),
            second.structure().to_vec(),
        ));
    }

    let mut child = first.clone();
    for (layer, other) in child.layers_mut().iter_mut().zip(second.layers()).skip(1) {
        let (weights, biases) = layer.parameters_mut();
        for (w, o) in weights.iter_mut().zip(other.weights()) {
            if rng.gen::<bool>() {
                *w = *o;
            }
        }
        for (b, o) in biases.iter_mut().zip(other.biases()) {
            if rng.gen::<bool>() {
                *b = *o;
            }
        }
    }

    mutate(&mut child, mutation_rate, rng);
    Ok(child)
}

/// Redraws each weight and bias of `network` from a standard
/// normal distribution with probability `mutation_rate`.
///
/// Rates above 1 are treated as 1; non-positive or NaN
/// rates leave the network unchanged.
pub fn mutate<R>(network: &mut Network, mutation_rate: f64, rng: &mut R)
where
    R: Rng + ?Sized,
{
    if mutation_rate.is_nan() || mutation_rate <= 0.0 {
        return;
    }
    let rate = mutation_rate.min(1.0);

    for layer in network.layers_mut().iter_mut().skip(1) {
        let (weights, biases) = layer.parameters_mut();
        for p in weights.iter_mut().chain(biases.iter_mut()) {
            if rng.gen_bool(rate) {
                *p = rng.sample::<f64, _>(StandardNormal);
            }
        }
    }
}

#[cfg(test)]
mod test {
    use super::*;
    use rand::{rngs::StdRng, SeedableRng};

    fn parents(rng: &mut StdRng) -> (Network, Network) {
        let mut a = Network::with_rng(&[2, 3, 2], rng).unwrap();
        let mut b = Network::with_rng(&[2, 3, 2], rng).unwrap();
        for layer in a.layers_mut().iter_mut().skip(1) {
            layer.set_uniform_weight(1.0);
            layer.set_uniform_bias(1.0);
        }
        for layer in b.layers_mut().iter_mut().skip(1) {
            layer.set_uniform_weight(-1.0);
            layer.set_uniform_bias(-1.0);
        }
        (a, b)
    }

    #[test]
    fn crossover_without_mutation_picks_parent_values() {
        let mut rng = StdRng::seed_from_u64(42);
        let (a, b) = parents(&mut rng);
        let child = crossover(&a, &b, 0.0, &mut rng).unwrap();

        let values: Vec<f64> = child
            .layers()
            .iter()
            .skip(1)
            .flat_map(|l| l.weights().iter().chain(l.biases().iter()).copied().collect::<Vec<_>>())
            .collect();
        assert!(values.iter().all(|v| *v == 1.0 || *v == -1.0));
        assert!(values.iter().any(|v| *v == 1.0));
        assert!(values.iter().any(|v| *v == -1.0));
    }

    #[test]
    fn crossover_of_identical_parents_without_mutation_is_a_copy() {
        let mut rng = StdRng::seed_from_u64(1);
        let (a, _) = parents(&mut rng);
        let child = crossover(&a, &a, 0.0, &mut rng).unwrap();
        assert!(child.same_parameters(&a));
    }

    #[test]
    fn crossover_rejects_different_structures() {
        let mut rng = StdRng::seed_from_u64(0);
        let a = Network::with_rng(&[2, 3, 2], &mut rng).unwrap();
        let b = Network::with_rng(&[2, 2, 2], &mut rng).unwrap();
        assert!(matches!(
            crossover(&a, &b, 0.5, &mut rng),
            Err(NetworkError::StructureMismatch(_, _))
        ));
    }

    #[test]
    fn full_mutation_redraws_everything() {
        let mut rng = StdRng::seed_from_u64(9);
        let (mut a, _) = parents(&mut rng);
        mutate(&mut a, 2.0, &mut rng);
        for layer in a.layers().iter().skip(1) {
            assert!(layer.weights().iter().all(|w| *w != 1.0));
            assert!(layer.biases().iter().all(|b| *b != 1.0));
        }
    }

    #[test]
    fn degenerate_rates_leave_network_unchanged() {
        let mut rng = StdRng::seed_from_u64(9);
        let (a, _) = parents(&mut rng);
        for rate in [0.0, -1.0, f64::NAN] {
            let mut mutated = a.clone();
            mutate(&mut mutated, rate, &mut rng);
            assert!(mutated.same_parameters(&a));
        }
    }
}
