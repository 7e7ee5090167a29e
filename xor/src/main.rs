use neuroevo::logging::{EvolutionLogger, Stats};
use neuroevo::{Evolution, EvolutionConfig, Simulation, SimulationFactory};
use neuroevo_nn::data::column_vector;
use neuroevo_nn::genetics;
use neuroevo_nn::networks::Network;
use neuroevo_nn::NetworkError;

use log::{error, info};
use rayon::prelude::*;

use std::num::NonZeroUsize;

const ERROR_MARGIN: f64 = 0.3;
const STRUCTURE: [usize; 3] = [2, 3, 1];
const CASES: [([f64; 2], f64); 4] = [
    ([0.0, 0.0], 0.0),
    ([0.0, 1.0], 1.0),
    ([1.0, 0.0], 1.0),
    ([1.0, 1.0], 0.0),
];

/// Whether every XOR case is answered within the error margin.
fn solves_xor(network: &mut Network) -> bool {
    CASES.iter().all(|(input, expected)| {
        network
            .feed_forward(&column_vector(input))
            .map(|output| (output[[0, 0]] - expected).abs() < ERROR_MARGIN)
            .unwrap_or(false)
    })
}

/// Presents one XOR case per step, scoring how close
/// the network's answer is.
struct XorTrial {
    network: Network,
    step: usize,
    fitness: f64,
}

impl XorTrial {
    fn new(network: Network) -> XorTrial {
        XorTrial {
            network,
            step: 0,
            fitness: 0.0,
        }
    }
}

impl Simulation for XorTrial {
    fn do_step(&mut self) {
        let (input, expected) = CASES[self.step];
        match self.network.feed_forward(&column_vector(&input)) {
            Ok(output) => {
                let error = (output[[0, 0]] - expected).abs();
                self.fitness += if error < ERROR_MARGIN { 1.0 } else { 1.0 - error };
            }
            Err(e) => error!("{}", e),
        }
        self.step += 1;
    }

    fn is_alive(&self) -> bool {
        self.step < CASES.len()
    }

    fn kill(&mut self) {
        self.step = CASES.len();
    }

    fn fitness(&self) -> f64 {
        self.fitness.powi(2)
    }

    fn age(&self) -> f64 {
        self.step as f64
    }

    fn network(&self) -> &Network {
        &self.network
    }

    fn set_network(&mut self, network: Network) {
        self.network = network;
    }
}

/// Breeds trials whose networks share the template's structure.
struct XorFactory {
    template: Network,
}

impl SimulationFactory for XorFactory {
    type Simulation = XorTrial;

    fn create_random_simulation(&self) -> XorTrial {
        let mut network = self.template.clone();
        let mut rng = rand::thread_rng();
        for i in 1..network.number_of_layers() {
            if let Some(layer) = network.layer_mut(i) {
                layer.reset_randomly(&mut rng);
            }
        }
        XorTrial::new(network)
    }

    fn create_crossover(
        &self,
        first: &XorTrial,
        second: &XorTrial,
        mutation_rate: f64,
    ) -> Result<XorTrial, NetworkError> {
        let network = genetics::crossover(
            &first.network,
            &second.network,
            mutation_rate,
            &mut rand::thread_rng(),
        )?;
        Ok(XorTrial::new(network))
    }

    fn copy(&self, simulation: &XorTrial) -> XorTrial {
        XorTrial::new(simulation.network.clone())
    }
}

fn main() {
    env_logger::init();

    let evolution_config = EvolutionConfig {
        initial_count: NonZeroUsize::new(150).unwrap(),
        offspring_count: NonZeroUsize::new(148).unwrap(),
        thread_count: NonZeroUsize::new(4).unwrap(),
        mutation_rate: 0.05,
        keep_parents: true,
    };

    backpropagation_stress_test();
    evolution_test(evolution_config);
}

/// Trains many networks by stochastic gradient descent in parallel,
/// and reports how many epochs they took to solve XOR.
fn backpropagation_stress_test() {
    const ITERATIONS: usize = 200;
    const MAX_EPOCHS: usize = 5000;

    let samples: Vec<_> = CASES.iter().map(|(x, _)| column_vector(x)).collect();
    let labels: Vec<_> = CASES.iter().map(|(_, y)| column_vector(&[*y])).collect();

    let epochs: Vec<Option<usize>> = (0..ITERATIONS)
        .into_par_iter()
        .map(|_| {
            let mut network = Network::new(&STRUCTURE).ok()?;
            for epoch in 0..MAX_EPOCHS {
                if solves_xor(&mut network) {
                    return Some(epoch);
                }
                if let Err(e) = network.stochastic_gradient_descent(&samples, &labels, 4, 0.5) {
                    error!("{}", e);
                    return None;
                }
            }
            None
        })
        .collect();

    println!(
        "Successful run epoch count {:?}, {}% failure rate over {} iterations",
        Stats::from(epochs.iter().filter_map(|e| e.map(|e| e as f64))),
        epochs.iter().filter(|e| e.is_none()).count() as f64 * 100.0 / ITERATIONS as f64,
        ITERATIONS
    );
}

/// Evolves XOR trials until the champion solves every case,
/// then saves the two fittest networks of the last epoch.
fn evolution_test(config: EvolutionConfig) {
    const MAX_EPOCHS: usize = 300;
    // Squared count of cases answered within the margin.
    const PERFECT_FITNESS: f64 = 16.0;

    let factory = match Network::new(&STRUCTURE) {
        Ok(template) => XorFactory { template },
        Err(e) => {
            error!("{}", e);
            return;
        }
    };
    let evolution = match Evolution::new(config, factory) {
        Ok(evolution) => evolution,
        Err(e) => {
            error!("{}", e);
            return;
        }
    };
    let mut logger = EvolutionLogger::new();

    for _ in 0..MAX_EPOCHS {
        evolution.do_epoch();
        logger.log(&evolution);
        if evolution
            .simulations_ordered_by_fitness()
            .first()
            .map_or(false, |s| s.fitness() >= PERFECT_FITNESS)
        {
            break;
        }
        if let Err(e) = evolution.breed() {
            error!("{}", e);
            break;
        }
    }

    if let Some(log) = logger.iter().last() {
        println!("{}", log);
    }
    println!(
        "Evolution ran {} epochs at {:.0} steps/s, champion fitness {:?}",
        evolution.number_of_epochs(),
        evolution.simulation_steps_per_second(),
        evolution.fittest_fitness()
    );

    let directory = std::env::temp_dir();
    let first = directory.join("xor-fittest-1.json");
    let second = directory.join("xor-fittest-2.json");
    match evolution.save(&first, &second) {
        Ok(()) => info!("saved fittest networks to {}", directory.display()),
        Err(e) => error!("{}", e),
    }
}
