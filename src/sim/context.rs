use rand::RngCore;

/// The random source and tick number a model sees during `initialize` and
/// `update`.
pub struct TickContext<'a> {
    /// The simulation's single random source.
    pub rng: &'a mut dyn RngCore,
    /// 1-based index of the tick being computed; 0 during `initialize`.
    pub tick: u64,
}
