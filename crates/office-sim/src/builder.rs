//! Fluent builder for constructing an [`Office`].

use log::debug;
use office_core::{OfficeConfig, RunRng};
use office_random::ProfileTable;

use crate::{Office, SimError, SimResult};

/// Fluent builder for [`Office`].
///
/// # Required inputs
///
/// - [`OfficeConfig`]: hours, room capacity, worker list, seed, …
/// - [`ProfileTable`]: per-class arrival, ticketing, service and patience laws
///
/// # Optional inputs (have defaults)
///
/// | Method            | Default                                          |
/// |-------------------|--------------------------------------------------|
/// | `.run_index(i)`   | `0`                                              |
/// | `.seed(s)`        | `RunRng::run_seed(config.seed, run_index)`       |
///
/// # Example
///
/// ```rust,ignore
/// let mut office = OfficeBuilder::new(config, ProfileTable::standard()?)
///     .run_index(3)
///     .build()?;
/// office.run(&mut NoopObserver)?;
/// ```
pub struct OfficeBuilder {
    config:    OfficeConfig,
    profiles:  ProfileTable,
    run_index: u64,
    seed:      Option<u64>,
}

impl OfficeBuilder {
    pub fn new(config: OfficeConfig, profiles: ProfileTable) -> Self {
        Self { config, profiles, run_index: 0, seed: None }
    }

    /// Replication index.  Stamped on every record and mixed into the seed.
    pub fn run_index(mut self, run_index: u64) -> Self {
        self.run_index = run_index;
        self
    }

    /// Use `seed` verbatim instead of deriving it from the config seed.
    pub fn seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    /// Validate inputs, schedule the first arrival of every profiled class,
    /// and return a ready-to-run [`Office`].
    pub fn build(self) -> SimResult<Office> {
        // ── Validate ──────────────────────────────────────────────────────
        self.config.validate()?;
        self.profiles.validate()?;

        for (class, requirement) in self.profiles.reachable() {
            let servable = self
                .config
                .workers
                .iter()
                .any(|w| w.capability.can_serve(requirement));
            if !servable {
                return Err(SimError::Unservable { class, requirement });
            }
        }

        // ── Seed the RNG and the event queue ──────────────────────────────
        let seed = self
            .seed
            .unwrap_or_else(|| RunRng::run_seed(self.config.seed, self.run_index));
        debug!("run {} seeded with {seed:#018x}", self.run_index);

        let classes: Vec<_> = self.profiles.active_classes().collect();
        let mut office = Office::new(self.config, self.profiles, self.run_index, RunRng::new(seed));
        for class in classes {
            office.schedule_arrival(class)?;
        }
        Ok(office)
    }
}
