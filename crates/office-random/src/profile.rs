//! Per-class client profiles.
//!
//! A [`ClientProfile`] bundles every random quantity a client of one class
//! needs over its visit.  [`ProfileTable::standard`] holds the reference
//! office parameters:
//!
//! | Class | Arrivals/h (morning, noon, evening) | Requirement weights | Service rate/h (1, 2, 3) | Abandon cost |
//! |-------|-------------------------------------|---------------------|--------------------------|--------------|
//! | A     | 25, 30, 27                          | 0.2, 0.3, 0.5       | 10, 16, 15               | −100 000     |
//! | B     | 15, 20, 10                          | 0.4, 0.1, 0.5       | 14, 20, 10               | −300 000     |
//! | C     | 8, 15, 15                           | always 1            | 12                       | −100 000     |

use office_core::{ClientClass, DaySegment, Requirement, RunRng, SimTime};

use crate::{RandomError, RandomResult, RequirementChooser, Sampler, Survival};

/// Kiosk issuance takes 12 to 25 seconds.
const TICKETING_SECS: (f64, f64) = (12.0, 25.0);

/// Per-minute leave probability while queueing for the kiosk.
const KIOSK_LEAVE_P: f64 = 0.03;

/// Per-minute leave probability while in the waiting room.
const ROOM_LEAVE_P: f64 = 0.01;

// ── ArrivalRates ──────────────────────────────────────────────────────────────

/// Inter-arrival gap samplers, one per [`DaySegment`].
#[derive(Clone, Debug)]
pub struct ArrivalRates {
    pub morning: Sampler,
    pub noon:    Sampler,
    pub evening: Sampler,
}

impl ArrivalRates {
    /// Poisson arrivals with the given hourly rates.
    pub fn poisson(morning: f64, noon: f64, evening: f64) -> RandomResult<Self> {
        Ok(Self {
            morning: Sampler::exponential(morning)?,
            noon:    Sampler::exponential(noon)?,
            evening: Sampler::exponential(evening)?,
        })
    }

    /// The same gap sampler all day.
    pub fn uniform_day(gap: Sampler) -> Self {
        Self { morning: gap.clone(), noon: gap.clone(), evening: gap }
    }

    /// The sampler in force at `now`.
    pub fn at(&self, now: SimTime) -> &Sampler {
        match now.segment() {
            DaySegment::Morning => &self.morning,
            DaySegment::Noon    => &self.noon,
            DaySegment::Evening => &self.evening,
        }
    }
}

// ── ServiceProfile ────────────────────────────────────────────────────────────

/// Service duration (hours) and monetary outcome for one requirement class.
#[derive(Clone, Debug)]
pub struct ServiceProfile {
    pub duration: Sampler,
    pub price:    Sampler,
}

// ── ClientProfile ─────────────────────────────────────────────────────────────

#[derive(Clone, Debug)]
pub struct ClientProfile {
    pub arrivals:         ArrivalRates,
    /// Kiosk issuance delay, in hours.
    pub ticketing:        Sampler,
    pub requirement:      RequirementChooser,
    /// Indexed by [`Requirement::index`].  `None` for requirements the
    /// chooser never produces.
    pub services:         [Option<ServiceProfile>; 3],
    pub kiosk_patience:   Survival,
    pub room_patience:    Survival,
    /// Price recorded for a client who abandons.
    pub abandonment_cost: Sampler,
}

impl ClientProfile {
    /// Gap until the next arrival of this class, drawn at `now`.
    #[inline]
    pub fn next_arrival_gap(&self, now: SimTime, rng: &mut RunRng) -> f64 {
        self.arrivals.at(now).sample(rng)
    }

    #[inline]
    pub fn ticketing_delay(&self, rng: &mut RunRng) -> f64 {
        self.ticketing.sample(rng)
    }

    #[inline]
    pub fn classify(&self, rng: &mut RunRng) -> Requirement {
        self.requirement.choose(rng)
    }

    #[inline]
    pub fn service(&self, requirement: Requirement) -> Option<&ServiceProfile> {
        self.services[requirement.index()].as_ref()
    }

    #[inline]
    pub fn abandonment_price(&self, rng: &mut RunRng) -> f64 {
        self.abandonment_cost.sample(rng)
    }

    /// Requirements the chooser can produce.
    pub fn reachable(&self) -> impl Iterator<Item = Requirement> + '_ {
        Requirement::ALL
            .into_iter()
            .filter(|&r| self.requirement.can_produce(r))
    }

    fn validate(&self, class: ClientClass) -> RandomResult<()> {
        for requirement in self.reachable() {
            if self.service(requirement).is_none() {
                return Err(RandomError::MissingService { class, requirement });
            }
        }
        let delays = [
            ("morning arrival gap", &self.arrivals.morning),
            ("noon arrival gap", &self.arrivals.noon),
            ("evening arrival gap", &self.arrivals.evening),
            ("ticketing delay", &self.ticketing),
        ];
        for (what, sampler) in delays {
            if !sampler.is_positive_delay() {
                return Err(RandomError::NonPositiveDelay { class, what });
            }
        }
        for service in self.services.iter().flatten() {
            if !service.duration.is_positive_delay() {
                return Err(RandomError::NonPositiveDelay { class, what: "service duration" });
            }
        }
        Ok(())
    }
}

// ── ProfileTable ──────────────────────────────────────────────────────────────

/// Profiles by class.  A class without a profile has no arrival stream.
#[derive(Clone, Debug, Default)]
pub struct ProfileTable {
    profiles: [Option<ClientProfile>; 3],
}

impl ProfileTable {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with(mut self, class: ClientClass, profile: ClientProfile) -> Self {
        self.profiles[class.index()] = Some(profile);
        self
    }

    #[inline]
    pub fn get(&self, class: ClientClass) -> Option<&ClientProfile> {
        self.profiles[class.index()].as_ref()
    }

    /// Classes with a profile, in `A, B, C` order.
    pub fn active_classes(&self) -> impl Iterator<Item = ClientClass> + '_ {
        ClientClass::ALL
            .into_iter()
            .filter(|&c| self.profiles[c.index()].is_some())
    }

    /// `(class, requirement)` pairs that can occur in a run.
    pub fn reachable(&self) -> Vec<(ClientClass, Requirement)> {
        self.active_classes()
            .filter_map(|c| self.get(c).map(|p| (c, p)))
            .flat_map(|(c, p)| p.reachable().map(move |r| (c, r)).collect::<Vec<_>>())
            .collect()
    }

    /// Every reachable requirement must have a service profile.
    pub fn validate(&self) -> RandomResult<()> {
        for class in self.active_classes() {
            if let Some(profile) = self.get(class) {
                profile.validate(class)?;
            }
        }
        Ok(())
    }

    /// The reference office parameters (see module docs).
    pub fn standard() -> RandomResult<Self> {
        let ticketing = Sampler::uniform(TICKETING_SECS.0 / 3_600.0, TICKETING_SECS.1 / 3_600.0)?;
        let kiosk_patience = Survival::geometric(KIOSK_LEAVE_P)?;
        let room_patience = Survival::geometric(ROOM_LEAVE_P)?;

        let a = ClientProfile {
            arrivals:    ArrivalRates::poisson(25.0, 30.0, 27.0)?,
            ticketing:   ticketing.clone(),
            requirement: RequirementChooser::weighted([0.20, 0.30, 0.50])?,
            services: [
                Some(ServiceProfile {
                    duration: Sampler::exponential(10.0)?,
                    price:    Sampler::log_normal(11.35, 0.47)?,
                }),
                Some(ServiceProfile {
                    duration: Sampler::exponential(16.0)?,
                    price:    Sampler::log_normal(11.35, 0.20)?.negated(),
                }),
                Some(ServiceProfile {
                    duration: Sampler::exponential(15.0)?,
                    price:    Sampler::constant(0.0)?,
                }),
            ],
            kiosk_patience,
            room_patience,
            abandonment_cost: Sampler::constant(-100_000.0)?,
        };

        let b = ClientProfile {
            arrivals:    ArrivalRates::poisson(15.0, 20.0, 10.0)?,
            ticketing:   ticketing.clone(),
            requirement: RequirementChooser::weighted([0.40, 0.10, 0.50])?,
            services: [
                Some(ServiceProfile {
                    duration: Sampler::exponential(14.0)?,
                    price:    Sampler::log_normal(11.92, 0.33)?,
                }),
                Some(ServiceProfile {
                    duration: Sampler::exponential(20.0)?,
                    price:    Sampler::log_normal(11.92, 0.10)?.negated(),
                }),
                Some(ServiceProfile {
                    duration: Sampler::exponential(10.0)?,
                    price:    Sampler::constant(0.0)?,
                }),
            ],
            kiosk_patience,
            room_patience,
            abandonment_cost: Sampler::constant(-300_000.0)?,
        };

        let c = ClientProfile {
            arrivals:    ArrivalRates::poisson(8.0, 15.0, 15.0)?,
            ticketing,
            requirement: RequirementChooser::fixed(Requirement::Sale),
            services: [
                Some(ServiceProfile {
                    duration: Sampler::exponential(12.0)?,
                    price:    Sampler::log_normal(11.51, 0.20)?,
                }),
                None,
                None,
            ],
            kiosk_patience,
            room_patience,
            abandonment_cost: Sampler::constant(-100_000.0)?,
        };

        Ok(Self::new()
            .with(ClientClass::A, a)
            .with(ClientClass::B, b)
            .with(ClientClass::C, c))
    }
}
