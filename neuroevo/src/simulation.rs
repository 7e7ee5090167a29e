use neuroevo_nn::{networks::Network, NetworkError};

/// An interface for agents that can be evolved.
///
/// A simulation is driven by its [`Network`], advances one
/// tick per [`do_step`](Simulation::do_step), and accumulates
/// a fitness used to select the parents of the next epoch.
///
/// Simulations are stepped from the evolution's worker threads,
/// each by exactly one worker at a time.
pub trait Simulation: Send {
    /// Advances the simulation by one tick.
    fn do_step(&mut self);

    /// Returns whether the simulation should still be stepped.
    fn is_alive(&self) -> bool;

    /// Ends the simulation. Afterwards, `is_alive` must return `false`.
    fn kill(&mut self);

    /// Returns the simulation's fitness score. Higher is better.
    fn fitness(&self) -> f64;

    /// Returns how long the simulation has been running.
    fn age(&self) -> f64;

    /// Returns the network controlling the simulation.
    fn network(&self) -> &Network;

    /// Replaces the network controlling the simulation.
    fn set_network(&mut self, network: Network);
}

/// Creates the simulations of an evolving population.
pub trait SimulationFactory {
    type Simulation: Simulation;

    /// Returns a new simulation with a randomly initialized network.
    fn create_random_simulation(&self) -> Self::Simulation;

    /// Returns a new simulation whose network is bred from
    /// both parents' networks.
    ///
    /// Implementations will usually delegate to
    /// [`neuroevo_nn::genetics::crossover`].
    fn create_crossover(
        &self,
        first: &Self::Simulation,
        second: &Self::Simulation,
        mutation_rate: f64,
    ) -> Result<Self::Simulation, NetworkError>;

    /// Returns a fresh simulation driven by a copy of
    /// `simulation`'s network.
    fn copy(&self, simulation: &Self::Simulation) -> Self::Simulation;
}
