use super::Evolution;

use crate::{Simulation, SimulationFactory};

use std::fmt;

/// A snapshot of an evolving population.
#[derive(Clone, Debug, PartialEq)]
pub struct EpochLog {
    pub epoch_number: usize,
    pub population_size: usize,
    pub alive_count: usize,
    pub fitness: Option<Stats>,
    pub age: Option<Stats>,
    pub champion_fitness: Option<f64>,
}

impl fmt::Display for EpochLog {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "EpochLog {{")?;
        writeln!(f, "\tepoch_number: {}", self.epoch_number)?;
        writeln!(
            f,
            "\tpopulation: {} ({} alive)",
            self.population_size, self.alive_count
        )?;
        writeln!(f, "\tfitness: {:?}", self.fitness)?;
        writeln!(f, "\tage: {:?}", self.age)?;
        writeln!(f, "\tchampion_fitness: {:?}", self.champion_fitness)?;
        write!(f, "}}")
    }
}

/// A struct for reporting basic statistical data.
#[derive(Clone, Debug, PartialEq)]
pub struct Stats {
    pub maximum: f64,
    pub minimum: f64,
    pub mean: f64,
    pub median: f64,
}

impl Stats {
    /// Returns statistics about numbers in a sequence,
    /// or `None` if it is empty.
    ///
    /// # Examples
    /// ```
    /// use neuroevo::logging::Stats;
    ///
    /// let stats = Stats::from([-2.0, -1.0, 0.5, 1.0, 1.5].iter().copied()).unwrap();
    /// assert_eq!(stats.maximum, 1.5);
    /// assert_eq!(stats.minimum, -2.0);
    /// assert_eq!(stats.mean, 0.0);
    /// assert_eq!(stats.median, 0.5);
    ///
    /// assert!(Stats::from(std::iter::empty()).is_none());
    /// ```
    pub fn from(data: impl Iterator<Item = f64>) -> Option<Stats> {
        let mut data: Vec<f64> = data.collect();
        if data.is_empty() {
            return None;
        }
        data.sort_unstable_by(f64::total_cmp);

        let mid = data.len() / 2;
        let median = if data.len() % 2 == 0 {
            (data[mid - 1] + data[mid]) / 2.0
        } else {
            data[mid]
        };
        Some(Stats {
            maximum: data[data.len() - 1],
            minimum: data[0],
            mean: data.iter().sum::<f64>() / data.len() as f64,
            median,
        })
    }
}

/// A log of the evolution of a population over time.
#[derive(Clone, Debug, Default)]
pub struct EvolutionLogger {
    logs: Vec<EpochLog>,
}

impl EvolutionLogger {
    pub fn new() -> EvolutionLogger {
        EvolutionLogger::default()
    }

    /// Stores a snapshot of `evolution`'s current population.
    pub fn log<F>(&mut self, evolution: &Evolution<F>)
    where
        F: SimulationFactory,
    {
        let (population_size, alive_count, fitness, age) = evolution.with_population(|p| {
            (
                p.len(),
                p.iter().filter(|s| s.is_alive()).count(),
                Stats::from(p.iter().map(Simulation::fitness)),
                Stats::from(p.iter().map(Simulation::age)),
            )
        });
        self.logs.push(EpochLog {
            epoch_number: evolution.number_of_epochs(),
            population_size,
            alive_count,
            fitness,
            age,
            champion_fitness: evolution.fittest_fitness(),
        });
    }

    /// Iterate over all logged snapshots.
    pub fn iter(&self) -> impl Iterator<Item = &EpochLog> {
        self.logs.iter()
    }
}
