//! An Evolution is a population of simulations,
//! stepped concurrently until every member has died,
//! then replaced by the offspring of its two fittest members.
mod config;
mod errors;
pub mod logging;

pub use config::EvolutionConfig;
pub use errors::EvolutionError;

use crate::{Simulation, SimulationFactory};

use neuroevo_nn::networks::Network;

use log::{debug, info, warn};
use parking_lot::{MappedMutexGuard, Mutex, MutexGuard, RwLock};
use rayon::{ThreadPool, ThreadPoolBuilder};

use std::cmp::Ordering;
use std::num::NonZeroUsize;
use std::path::Path;
use std::sync::atomic::{self, AtomicBool, AtomicUsize};
use std::time::Instant;

/// Number of steps between throughput measurements.
const THROUGHPUT_INTERVAL: u64 = 20;

/// Parameters that can be changed between epochs.
#[derive(Clone, Copy, Debug)]
struct BreedingParameters {
    offspring_count: NonZeroUsize,
    mutation_rate: f64,
    keep_parents: bool,
}

/// The fittest parent ever selected for breeding.
struct Champion<S> {
    simulation: S,
    fitness: f64,
}

struct Throughput {
    steps: u64,
    last_measurement: Instant,
    steps_per_second: f64,
}

/// A population of simulations evolving epoch by epoch.
///
/// Every method takes `&self`, so an evolution can be shared
/// between a thread driving it and threads observing it.
///
/// Methods that read or change the population wait for its lock,
/// including while a guard returned by
/// [`simulations_ordered_by_fitness`](Evolution::simulations_ordered_by_fitness)
/// is alive.
pub struct Evolution<F: SimulationFactory> {
    population: Mutex<Vec<F::Simulation>>,
    factory: RwLock<F>,
    breeding: RwLock<BreedingParameters>,
    champion: Mutex<Option<Champion<F::Simulation>>>,
    epoch_over: AtomicBool,
    epochs: AtomicUsize,
    throughput: Mutex<Throughput>,
    thread_count: NonZeroUsize,
    pool: ThreadPool,
}

impl<F> Evolution<F>
where
    F: SimulationFactory,
{
    /// Creates a population of `config.initial_count` random
    /// simulations, together with a pool of `config.thread_count`
    /// worker threads used to step it.
    ///
    /// # Errors
    /// Fails if the worker threads cannot be spawned.
    pub fn new(config: EvolutionConfig, factory: F) -> Result<Evolution<F>, EvolutionError> {
        let pool = ThreadPoolBuilder::new()
            .num_threads(config.thread_count.get())
            .thread_name(|i| format!("evolution-worker-{}", i))
            .build()?;

        let population = (0..config.initial_count.get())
            .map(|_| factory.create_random_simulation())
            .collect();

        debug!(
            "created population of {} simulations on {} threads",
            config.initial_count, config.thread_count
        );

        Ok(Evolution {
            population: Mutex::new(population),
            factory: RwLock::new(factory),
            breeding: RwLock::new(BreedingParameters {
                offspring_count: config.offspring_count,
                mutation_rate: config.mutation_rate,
                keep_parents: config.keep_parents,
            }),
            champion: Mutex::new(None),
            epoch_over: AtomicBool::new(false),
            epochs: AtomicUsize::new(0),
            throughput: Mutex::new(Throughput {
                steps: 0,
                last_measurement: Instant::now(),
                steps_per_second: 0.0,
            }),
            thread_count: config.thread_count,
            pool,
        })
    }

    /// Steps every alive simulation once.
    ///
    /// The population is split into `thread_count` contiguous
    /// partitions, each stepped by its own worker. The call
    /// returns once every partition is done. If no simulation
    /// was alive, the epoch is over.
    pub fn do_step(&self) {
        let any_alive = AtomicBool::new(false);
        {
            let mut population = self.population.lock();
            let partitions = partition(population.as_mut_slice(), self.thread_count.get());
            self.pool.scope(|scope| {
                for simulations in partitions {
                    let any_alive = &any_alive;
                    scope.spawn(move |_| {
                        for simulation in simulations.iter_mut().filter(|s| s.is_alive()) {
                            simulation.do_step();
                            any_alive.store(true, atomic::Ordering::Relaxed);
                        }
                    });
                }
            });
        }

        if !any_alive.load(atomic::Ordering::Relaxed)
            && !self.epoch_over.swap(true, atomic::Ordering::SeqCst)
        {
            let epoch = self.epochs.fetch_add(1, atomic::Ordering::SeqCst) + 1;
            debug!("epoch {} over", epoch);
        }

        self.record_step();
    }

    fn record_step(&self) {
        let mut throughput = self.throughput.lock();
        throughput.steps += 1;
        if throughput.steps % THROUGHPUT_INTERVAL == 0 {
            let now = Instant::now();
            let elapsed = now.duration_since(throughput.last_measurement).as_secs_f64();
            if elapsed > 0.0 {
                throughput.steps_per_second = THROUGHPUT_INTERVAL as f64 / elapsed;
                debug!(
                    "{:.1} simulation steps per second",
                    throughput.steps_per_second
                );
            }
            throughput.last_measurement = now;
        }
    }

    /// Steps the population until the epoch is over,
    /// and returns the number of steps taken.
    ///
    /// Does not return while any simulation stays alive.
    pub fn do_epoch(&self) -> usize {
        let mut steps = 0;
        loop {
            self.do_step();
            steps += 1;
            if self.is_epoch_over() {
                return steps;
            }
        }
    }

    /// Returns whether the last step found no simulation alive.
    pub fn is_epoch_over(&self) -> bool {
        self.epoch_over.load(atomic::Ordering::SeqCst)
    }

    /// Sorts the population from fittest to least fit and
    /// returns it. Simulations reporting a NaN fitness rank last.
    ///
    /// # Deadlocks
    /// The population stays locked until the guard is dropped.
    /// Calling any other method that reads or changes the
    /// population (stepping, breeding, summaries, kill, save,
    /// load, logging) on the same thread while the guard is
    /// alive deadlocks.
    pub fn simulations_ordered_by_fitness(&self) -> MappedMutexGuard<'_, [F::Simulation]> {
        let mut population = self.population.lock();
        rank(population.as_mut_slice());
        MutexGuard::map(population, |p| p.as_mut_slice())
    }

    /// Replaces the population with the offspring of its two
    /// fittest simulations, and starts a new epoch.
    ///
    /// `offspring_count` children are bred; both parents are
    /// carried over as well when keep-parents is set. The fittest
    /// parent becomes the champion if it beats the current one.
    ///
    /// # Errors
    /// Fails, leaving the population in place, if it holds fewer
    /// than two simulations or the factory fails to breed a child.
    ///
    /// # Deadlocks
    /// Deadlocks if the calling thread holds a ranking guard.
    pub fn breed(&self) -> Result<(), EvolutionError> {
        let mut population = self.population.lock();
        if population.len() < 2 {
            warn!("cannot breed a population of {}", population.len());
            return Err(EvolutionError::TooFewSimulations {
                found: population.len(),
            });
        }
        rank(population.as_mut_slice());

        let factory = self.factory.read();
        let parameters = *self.breeding.read();
        let (first, second) = (&population[0], &population[1]);

        let mut offspring = Vec::with_capacity(parameters.offspring_count.get() + 2);
        for _ in 0..parameters.offspring_count.get() {
            offspring.push(factory.create_crossover(first, second, parameters.mutation_rate)?);
        }
        if parameters.keep_parents {
            offspring.push(factory.copy(first));
            offspring.push(factory.copy(second));
        }

        let fitness = first.fitness();
        let mut champion = self.champion.lock();
        let improved = match champion.as_ref() {
            Some(current) => fitness > current.fitness,
            None => !fitness.is_nan(),
        };
        if improved {
            debug!("new champion with fitness {}", fitness);
            *champion = Some(Champion {
                simulation: factory.copy(first),
                fitness,
            });
        }

        debug!(
            "bred {} simulations from parents of fitness {} and {}",
            offspring.len(),
            fitness,
            second.fitness()
        );
        *population = offspring;
        self.epoch_over.store(false, atomic::Ordering::SeqCst);
        Ok(())
    }

    /// Returns the number of alive and dead simulations.
    /// Waits for the population lock, like [`average_age`](Evolution::average_age).
    pub fn number_alive_and_dead(&self) -> (usize, usize) {
        let population = self.population.lock();
        let alive = population.iter().filter(|s| s.is_alive()).count();
        (alive, population.len() - alive)
    }

    /// Returns the mean age of the population, or 0
    /// if the population is empty.
    pub fn average_age(&self) -> f64 {
        let population = self.population.lock();
        if population.is_empty() {
            return 0.0;
        }
        population.iter().map(Simulation::age).sum::<f64>() / population.len() as f64
    }

    /// Kills every simulation. The epoch ends on the next step.
    pub fn kill_all_simulations(&self) {
        for simulation in self.population.lock().iter_mut() {
            simulation.kill();
        }
    }

    /// Saves the networks of the two fittest simulations.
    ///
    /// # Errors
    /// Fails if the population holds fewer than two
    /// simulations, or if either network cannot be written.
    ///
    /// # Deadlocks
    /// Deadlocks if the calling thread holds a ranking guard.
    pub fn save<P, Q>(&self, first_path: P, second_path: Q) -> Result<(), EvolutionError>
    where
        P: AsRef<Path>,
        Q: AsRef<Path>,
    {
        let ranked = self.simulations_ordered_by_fitness();
        if ranked.len() < 2 {
            warn!("cannot save the two fittest of {} simulations", ranked.len());
            return Err(EvolutionError::TooFewSimulations {
                found: ranked.len(),
            });
        }
        ranked[0].network().save(first_path.as_ref())?;
        ranked[1].network().save(second_path.as_ref())?;
        info!(
            "saved networks to {} and {}",
            first_path.as_ref().display(),
            second_path.as_ref().display()
        );
        Ok(())
    }

    /// Kills the population and replaces it with two fresh
    /// simulations driven by the networks stored at the given paths.
    ///
    /// # Errors
    /// Fails if either network cannot be read. The population
    /// is left killed, but not replaced.
    pub fn load<P, Q>(&self, first_path: P, second_path: Q) -> Result<(), EvolutionError>
    where
        P: AsRef<Path>,
        Q: AsRef<Path>,
    {
        self.kill_all_simulations();
        let first_network = Network::load(first_path.as_ref())?;
        let second_network = Network::load(second_path.as_ref())?;

        let seeded = {
            let factory = self.factory.read();
            let mut first = factory.create_random_simulation();
            let mut second = factory.create_random_simulation();
            first.set_network(first_network);
            second.set_network(second_network);
            vec![first, second]
        };
        *self.population.lock() = seeded;
        self.epoch_over.store(false, atomic::Ordering::SeqCst);

        info!(
            "loaded networks from {} and {}",
            first_path.as_ref().display(),
            second_path.as_ref().display()
        );
        Ok(())
    }

    /// Number of epochs that have ended so far.
    pub fn number_of_epochs(&self) -> usize {
        self.epochs.load(atomic::Ordering::SeqCst)
    }

    pub fn mutation_rate(&self) -> f64 {
        self.breeding.read().mutation_rate
    }

    pub fn set_mutation_rate(&self, mutation_rate: f64) {
        self.breeding.write().mutation_rate = mutation_rate;
    }

    pub fn is_keep_parents(&self) -> bool {
        self.breeding.read().keep_parents
    }

    pub fn set_keep_parents(&self, keep_parents: bool) {
        self.breeding.write().keep_parents = keep_parents;
    }

    pub fn offspring_count(&self) -> NonZeroUsize {
        self.breeding.read().offspring_count
    }

    pub fn set_offspring_count(&self, offspring_count: NonZeroUsize) {
        self.breeding.write().offspring_count = offspring_count;
    }

    /// Steps per second, measured over the last 20 steps.
    /// 0 until the first measurement.
    pub fn simulation_steps_per_second(&self) -> f64 {
        self.throughput.lock().steps_per_second
    }

    /// Replaces the factory used for every later breeding and load.
    pub fn reset_factory(&self, factory: F) {
        *self.factory.write() = factory;
    }

    pub fn population_size(&self) -> usize {
        self.population.lock().len()
    }

    pub fn thread_count(&self) -> NonZeroUsize {
        self.thread_count
    }

    /// Fitness of the fittest parent bred from so far.
    pub fn fittest_fitness(&self) -> Option<f64> {
        self.champion.lock().as_ref().map(|c| c.fitness)
    }

    /// A copy of the network of the fittest parent bred from so far.
    pub fn fittest_network(&self) -> Option<Network> {
        self.champion
            .lock()
            .as_ref()
            .map(|c| c.simulation.network().clone())
    }

    /// Runs `f` on the population while holding its lock.
    pub(crate) fn with_population<R>(&self, f: impl FnOnce(&[F::Simulation]) -> R) -> R {
        f(&self.population.lock())
    }
}

/// Sorts descending by fitness, with NaN fitnesses last.
fn rank<S: Simulation>(population: &mut [S]) {
    population.sort_unstable_by(|a, b| match (a.fitness(), b.fitness()) {
        (x, y) if x.is_nan() && y.is_nan() => Ordering::Equal,
        (x, _) if x.is_nan() => Ordering::Greater,
        (_, y) if y.is_nan() => Ordering::Less,
        (x, y) => y.total_cmp(&x),
    });
}

/// Splits `items` into `parts` contiguous slices of
/// `items.len() / parts` elements. The last slice also
/// takes the remainder.
fn partition<T>(items: &mut [T], parts: usize) -> Vec<&mut [T]> {
    let size = items.len() / parts;
    let mut rest = items;
    let mut partitions = Vec::with_capacity(parts);
    for _ in 1..parts {
        let (head, tail) = std::mem::take(&mut rest).split_at_mut(size);
        partitions.push(head);
        rest = tail;
    }
    partitions.push(rest);
    partitions
}

#[cfg(test)]
mod test {
    use super::*;
    use neuroevo_nn::{genetics, NetworkError};
    use rand::thread_rng;

    use std::sync::Arc;
    use std::thread;

    /// Lives for a fixed number of steps,
    /// gaining one fitness point per step.
    struct Countdown {
        steps_left: usize,
        age: f64,
        fitness: f64,
        network: Network,
    }

    impl Simulation for Countdown {
        fn do_step(&mut self) {
            self.steps_left -= 1;
            self.age += 1.0;
            self.fitness += 1.0;
        }

        fn is_alive(&self) -> bool {
            self.steps_left > 0
        }

        fn kill(&mut self) {
            self.steps_left = 0;
        }

        fn fitness(&self) -> f64 {
            self.fitness
        }

        fn age(&self) -> f64 {
            self.age
        }

        fn network(&self) -> &Network {
            &self.network
        }

        fn set_network(&mut self, network: Network) {
            self.network = network;
        }
    }

    /// Hands out lifetimes 1, 2, ..., `max_lifetime`, 1, 2, ...
    struct CountdownFactory {
        created: AtomicUsize,
        max_lifetime: usize,
    }

    impl CountdownFactory {
        fn new(max_lifetime: usize) -> CountdownFactory {
            CountdownFactory {
                created: AtomicUsize::new(0),
                max_lifetime,
            }
        }

        fn spawn(&self, network: Network) -> Countdown {
            let n = self.created.fetch_add(1, atomic::Ordering::SeqCst);
            Countdown {
                steps_left: n % self.max_lifetime + 1,
                age: 0.0,
                fitness: 0.0,
                network,
            }
        }
    }

    impl SimulationFactory for CountdownFactory {
        type Simulation = Countdown;

        fn create_random_simulation(&self) -> Countdown {
            self.spawn(Network::new(&[2, 3, 1]).unwrap())
        }

        fn create_crossover(
            &self,
            first: &Countdown,
            second: &Countdown,
            mutation_rate: f64,
        ) -> Result<Countdown, NetworkError> {
            let network = genetics::crossover(
                first.network(),
                second.network(),
                mutation_rate,
                &mut thread_rng(),
            )?;
            Ok(self.spawn(network))
        }

        fn copy(&self, simulation: &Countdown) -> Countdown {
            self.spawn(simulation.network().clone())
        }
    }

    fn config(initial: usize, offspring: usize, threads: usize) -> EvolutionConfig {
        EvolutionConfig {
            initial_count: NonZeroUsize::new(initial).unwrap(),
            offspring_count: NonZeroUsize::new(offspring).unwrap(),
            thread_count: NonZeroUsize::new(threads).unwrap(),
            mutation_rate: 0.1,
            keep_parents: true,
        }
    }

    fn evolution(initial: usize, threads: usize) -> Evolution<CountdownFactory> {
        Evolution::new(config(initial, 6, threads), CountdownFactory::new(5)).unwrap()
    }

    #[test]
    fn partitions_are_disjoint_and_cover_everything() {
        let mut items: Vec<usize> = (0..10).collect();
        let lengths: Vec<usize> = partition(&mut items, 3).iter().map(|p| p.len()).collect();
        assert_eq!(lengths, vec![3, 3, 4]);

        let lengths: Vec<usize> = partition(&mut items, 10).iter().map(|p| p.len()).collect();
        assert_eq!(lengths, vec![1; 10]);

        let lengths: Vec<usize> = partition(&mut items[..2], 4).iter().map(|p| p.len()).collect();
        assert_eq!(lengths, vec![0, 0, 0, 2]);

        for part in partition(&mut items, 4) {
            for item in part.iter_mut() {
                *item += 100;
            }
        }
        assert!(items.iter().all(|i| *i >= 100));
    }

    #[test]
    fn dead_population_is_over_after_one_step() {
        let evolution = evolution(8, 2);
        evolution.kill_all_simulations();
        assert!(!evolution.is_epoch_over());

        assert_eq!(evolution.do_epoch(), 1);
        assert!(evolution.is_epoch_over());
        assert_eq!(evolution.number_of_epochs(), 1);
    }

    #[test]
    fn epoch_is_counted_once() {
        let evolution = evolution(8, 2);
        evolution.kill_all_simulations();
        evolution.do_step();
        evolution.do_step();
        evolution.do_step();
        assert_eq!(evolution.number_of_epochs(), 1);
    }

    #[test]
    fn epoch_lasts_until_longest_lifetime() {
        let evolution = evolution(10, 3);
        // Lifetimes range from 1 to 5, plus the step finding none alive.
        assert_eq!(evolution.do_epoch(), 6);
        assert_eq!(evolution.number_alive_and_dead(), (0, 10));
        assert_eq!(evolution.average_age(), 3.0);
    }

    #[test]
    fn throughput_is_measured_every_twenty_steps() {
        let evolution = evolution(4, 2);
        evolution.kill_all_simulations();
        for _ in 0..19 {
            evolution.do_step();
        }
        assert_eq!(evolution.simulation_steps_per_second(), 0.0);

        evolution.do_step();
        let measured = evolution.simulation_steps_per_second();
        assert!(measured > 0.0 && measured.is_finite());
    }

    #[test]
    fn ranking_is_descending() {
        let evolution = evolution(10, 2);
        evolution.do_epoch();
        let ranked = evolution.simulations_ordered_by_fitness();
        assert!(ranked.windows(2).all(|w| w[0].fitness() >= w[1].fitness()));
        assert_eq!(ranked[0].fitness(), 5.0);
    }

    #[test]
    fn nan_fitness_ranks_last() {
        let evolution = evolution(4, 1);
        evolution.do_epoch();
        evolution.population.lock()[0].fitness = f64::NAN;
        let ranked = evolution.simulations_ordered_by_fitness();
        assert!(ranked[3].fitness().is_nan());
        assert!(!ranked[0].fitness().is_nan());
    }

    #[test]
    fn breeding_with_and_without_parents() {
        let evolution = evolution(10, 2);
        evolution.do_epoch();
        evolution.breed().unwrap();
        assert_eq!(evolution.population_size(), 8);
        assert!(!evolution.is_epoch_over());

        evolution.set_keep_parents(false);
        evolution.do_epoch();
        evolution.breed().unwrap();
        assert_eq!(evolution.population_size(), 6);
        assert_eq!(evolution.number_of_epochs(), 2);
    }

    #[test]
    fn breeding_needs_two_simulations() {
        let evolution = evolution(1, 1);
        assert!(matches!(
            evolution.breed(),
            Err(EvolutionError::TooFewSimulations { found: 1 })
        ));
        assert_eq!(evolution.population_size(), 1);
        assert!(evolution.fittest_fitness().is_none());
    }

    #[test]
    fn champion_never_gets_worse() {
        let evolution = evolution(10, 4);
        let mut best = f64::MIN;
        for _ in 0..6 {
            evolution.do_epoch();
            evolution.breed().unwrap();
            let champion = evolution.fittest_fitness().unwrap();
            assert!(champion >= best);
            best = champion;
        }
        assert_eq!(best, 5.0);
        assert!(evolution.fittest_network().is_some());
    }

    #[test]
    fn thread_count_does_not_change_outcome() {
        let states = |evolution: &Evolution<CountdownFactory>| -> Vec<(bool, f64, f64)> {
            evolution.with_population(|p| {
                p.iter()
                    .map(|s| (s.is_alive(), s.fitness(), s.age()))
                    .collect()
            })
        };
        let outcome = |threads: usize| {
            let evolution = evolution(9, threads);
            evolution.do_step();
            evolution.do_step();
            evolution.do_step();
            let midway = states(&evolution);
            let steps = evolution.do_epoch() + 3;
            (steps, midway, states(&evolution), evolution.number_of_epochs())
        };
        let single = outcome(1);
        assert_eq!(outcome(4), single);
        assert_eq!(outcome(9), single);
        assert_eq!(outcome(20), single);
    }

    #[test]
    fn save_and_load_two_fittest() {
        let directory = std::env::temp_dir();
        let first_path = directory.join(format!("neuroevo-first-{}.json", std::process::id()));
        let second_path = directory.join(format!("neuroevo-second-{}.json", std::process::id()));

        let source = evolution(6, 2);
        source.do_epoch();
        source.save(&first_path, &second_path).unwrap();
        let saved: Vec<Network> = source
            .simulations_ordered_by_fitness()
            .iter()
            .take(2)
            .map(|s| s.network().clone())
            .collect();

        let target = evolution(4, 2);
        target.do_epoch();
        target.load(&first_path, &second_path).unwrap();
        std::fs::remove_file(&first_path).unwrap();
        std::fs::remove_file(&second_path).unwrap();

        assert_eq!(target.population_size(), 2);
        assert!(!target.is_epoch_over());
        target.with_population(|p| {
            assert!(p[0].network().same_parameters(&saved[0]));
            assert!(p[1].network().same_parameters(&saved[1]));
        });
    }

    #[test]
    fn failed_load_leaves_population_killed() {
        let evolution = evolution(4, 1);
        let missing = std::env::temp_dir().join("neuroevo-missing-network.json");
        assert!(matches!(
            evolution.load(&missing, &missing),
            Err(EvolutionError::Network(NetworkError::Io(_)))
        ));
        assert_eq!(evolution.number_alive_and_dead(), (0, 4));
    }

    #[test]
    fn save_needs_two_simulations() {
        let evolution = evolution(1, 1);
        let path = std::env::temp_dir().join("neuroevo-never-written.json");
        assert!(evolution.save(&path, &path).is_err());
        assert!(!path.exists());
    }

    #[test]
    fn observers_can_read_while_stepping() {
        let evolution = Arc::new(
            Evolution::new(config(50, 48, 4), CountdownFactory::new(5)).unwrap(),
        );
        let observer = {
            let evolution = Arc::clone(&evolution);
            thread::spawn(move || {
                for _ in 0..100 {
                    let (alive, dead) = evolution.number_alive_and_dead();
                    assert_eq!(alive + dead, 50);
                    assert!(evolution.average_age() <= 5.0);
                }
            })
        };
        for _ in 0..3 {
            evolution.do_epoch();
            evolution.breed().unwrap();
        }
        observer.join().unwrap();
    }

    #[test]
    fn breeding_parameters_are_adjustable() {
        let evolution = evolution(4, 1);
        evolution.set_mutation_rate(0.5);
        assert_eq!(evolution.mutation_rate(), 0.5);
        evolution.set_offspring_count(NonZeroUsize::new(3).unwrap());
        evolution.reset_factory(CountdownFactory::new(1));
        evolution.do_epoch();
        evolution.breed().unwrap();
        // Children of the new factory live for exactly one step.
        assert_eq!(evolution.population_size(), 5);
        assert_eq!(evolution.do_epoch(), 2);
    }

    #[test]
    fn logger_records_snapshots() {
        let evolution = evolution(6, 2);
        let mut logger = logging::EvolutionLogger::new();
        logger.log(&evolution);
        evolution.do_epoch();
        evolution.breed().unwrap();
        logger.log(&evolution);

        let logs: Vec<_> = logger.iter().collect();
        assert_eq!(logs.len(), 2);
        assert_eq!(logs[0].epoch_number, 0);
        assert_eq!(logs[0].alive_count, 6);
        assert!(logs[0].champion_fitness.is_none());
        assert_eq!(logs[1].epoch_number, 1);
        assert_eq!(logs[1].population_size, 8);
        assert_eq!(logs[1].champion_fitness, Some(5.0));
    }
}
