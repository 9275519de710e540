//! Unit tests for office-random.

use office_core::RunRng;

fn rng() -> RunRng {
    RunRng::new(7)
}

#[cfg(test)]
mod sampler {
    use super::*;
    use crate::{RandomError, Sampler};

    #[test]
    fn constant_consumes_nothing() {
        let s = Sampler::constant(2.5).unwrap();
        let mut r1 = rng();
        let mut r2 = rng();
        assert_eq!(s.sample(&mut r1), 2.5);
        assert!(s.is_constant());
        let a: u64 = r1.random();
        let b: u64 = r2.random();
        assert_eq!(a, b, "constant sampler must not advance the stream");
    }

    #[test]
    fn exponential_mean_close_to_inverse_rate() {
        let s = Sampler::exponential(10.0).unwrap();
        let mut r = rng();
        let n = 20_000;
        let mean: f64 = (0..n).map(|_| s.sample(&mut r)).sum::<f64>() / n as f64;
        assert!((mean - 0.1).abs() < 0.005, "got {mean}");
    }

    #[test]
    fn uniform_in_bounds() {
        let s = Sampler::uniform(12.0 / 3600.0, 25.0 / 3600.0).unwrap();
        let mut r = rng();
        for _ in 0..1000 {
            let v = s.sample(&mut r);
            assert!((12.0 / 3600.0..25.0 / 3600.0).contains(&v));
        }
    }

    #[test]
    fn negated_log_normal_is_negative() {
        let s = Sampler::log_normal(11.35, 0.2).unwrap().negated();
        let mut r = rng();
        for _ in 0..100 {
            assert!(s.sample(&mut r) < 0.0);
        }
    }

    #[test]
    fn log_normal_median_near_exp_mu() {
        let s = Sampler::log_normal(2.0, 0.3).unwrap();
        let mut r = rng();
        let mut draws: Vec<f64> = (0..10_001).map(|_| s.sample(&mut r)).collect();
        draws.sort_by(f64::total_cmp);
        let median = draws[5_000];
        assert!((median - 2.0f64.exp()).abs() < 0.2, "got {median}");
    }

    #[test]
    fn scaled_multiplies() {
        let s = Sampler::constant(3.0).unwrap().scaled(-2.0).unwrap();
        assert_eq!(s.sample(&mut rng()), -6.0);
    }

    #[test]
    fn bad_parameters_rejected_at_construction() {
        assert!(matches!(Sampler::exponential(0.0), Err(RandomError::BadRate(_))));
        assert!(matches!(Sampler::exponential(-1.0), Err(RandomError::BadRate(_))));
        assert!(matches!(Sampler::exponential(f64::NAN), Err(RandomError::BadRate(_))));
        assert!(matches!(Sampler::uniform(2.0, 1.0), Err(RandomError::BadRange { .. })));
        assert!(matches!(Sampler::uniform(1.0, 1.0), Err(RandomError::BadRange { .. })));
        assert!(Sampler::log_normal(0.0, -1.0).is_err());
        assert!(Sampler::log_normal(f64::INFINITY, 1.0).is_err());
        assert!(Sampler::constant(f64::NAN).is_err());
        assert!(Sampler::constant(1.0).unwrap().scaled(f64::INFINITY).is_err());
    }

    #[test]
    fn positive_delay_classification() {
        assert!(Sampler::exponential(3.0).unwrap().is_positive_delay());
        assert!(Sampler::log_normal(0.0, 1.0).unwrap().is_positive_delay());
        assert!(Sampler::uniform(0.5, 1.0).unwrap().is_positive_delay());
        assert!(Sampler::constant(0.25).unwrap().is_positive_delay());

        assert!(!Sampler::uniform(0.0, 1.0).unwrap().is_positive_delay());
        assert!(!Sampler::uniform(-1.0, 1.0).unwrap().is_positive_delay());
        assert!(!Sampler::constant(0.0).unwrap().is_positive_delay());
        assert!(!Sampler::constant(-0.5).unwrap().is_positive_delay());
        assert!(!Sampler::exponential(3.0).unwrap().negated().is_positive_delay());
        assert!(!Sampler::log_normal(0.0, 1.0).unwrap().scaled(-2.0).unwrap().is_positive_delay());
        assert!(!Sampler::constant(1.0).unwrap().scaled(0.0).unwrap().is_positive_delay());
        assert!(Sampler::constant(-1.0).unwrap().negated().is_positive_delay());
    }
}

#[cfg(test)]
mod choice {
    use super::*;
    use crate::RequirementChooser;
    use office_core::Requirement;

    #[test]
    fn fixed_always_same() {
        let c = RequirementChooser::fixed(Requirement::Sale);
        let mut r = rng();
        for _ in 0..100 {
            assert_eq!(c.choose(&mut r), Requirement::Sale);
        }
        assert!(c.can_produce(Requirement::Sale));
        assert!(!c.can_produce(Requirement::Claim));
    }

    #[test]
    fn zero_weight_never_chosen() {
        let c = RequirementChooser::weighted([0.0, 1.0, 1.0]).unwrap();
        let mut r = rng();
        for _ in 0..1000 {
            assert_ne!(c.choose(&mut r), Requirement::Sale);
        }
        assert!(!c.can_produce(Requirement::Sale));
        assert!(c.can_produce(Requirement::Inquiry));
    }

    #[test]
    fn weights_respected_roughly() {
        let c = RequirementChooser::weighted([0.2, 0.3, 0.5]).unwrap();
        let mut r = rng();
        let n = 20_000;
        let mut counts = [0usize; 3];
        for _ in 0..n {
            counts[c.choose(&mut r).index()] += 1;
        }
        let share = |i: usize| counts[i] as f64 / n as f64;
        assert!((share(0) - 0.2).abs() < 0.02);
        assert!((share(1) - 0.3).abs() < 0.02);
        assert!((share(2) - 0.5).abs() < 0.02);
    }

    #[test]
    fn invalid_weights_rejected() {
        assert!(RequirementChooser::weighted([0.0, 0.0, 0.0]).is_err());
        assert!(RequirementChooser::weighted([-1.0, 1.0, 1.0]).is_err());
        assert!(RequirementChooser::weighted([f64::NAN, 1.0, 1.0]).is_err());
    }
}

#[cfg(test)]
mod survival {
    use super::*;
    use crate::Survival;

    #[test]
    fn survival_curve() {
        let s = Survival::geometric(0.1).unwrap();
        assert_eq!(s.survival(0), 1.0);
        assert!((s.survival(1) - 0.9).abs() < 1e-12);
        assert!((s.survival(10) - 0.9f64.powi(10)).abs() < 1e-12);
        assert!(s.survival(30) < s.survival(10));
    }

    #[test]
    fn stay_polarity_matches_draw() {
        // Replay the same stream: the test must consume exactly one open
        // draw and keep the client iff that draw exceeds 1 - survival(t).
        let s = Survival::geometric(0.03).unwrap();
        for minutes in [0u32, 1, 5, 20, 60, 200] {
            let mut probe = RunRng::new(1000 + minutes as u64);
            let mut live = RunRng::new(1000 + minutes as u64);
            for _ in 0..200 {
                let u = probe.open01();
                let expected = u > 1.0 - s.survival(minutes);
                assert_eq!(s.stays(minutes, &mut live), expected, "t={minutes} u={u}");
            }
        }
    }

    #[test]
    fn stay_rate_tracks_survival() {
        let s = Survival::geometric(0.03).unwrap();
        let mut r = rng();
        let n = 20_000;
        let stayed = (0..n).filter(|_| s.stays(20, &mut r)).count();
        let rate = stayed as f64 / n as f64;
        assert!((rate - s.survival(20)).abs() < 0.02, "got {rate}");
    }

    #[test]
    fn extremes_are_certain() {
        let mut r = rng();
        let never = Survival::never();
        let always = Survival::geometric(1.0).unwrap();
        for t in [0u32, 1, 1_000] {
            assert!(never.stays(t, &mut r));
        }
        assert!(always.stays(0, &mut r), "no time has elapsed yet");
        assert!(!always.stays(1, &mut r));
    }

    #[test]
    fn probability_bounds() {
        assert!(Survival::geometric(-0.1).is_err());
        assert!(Survival::geometric(1.1).is_err());
        assert!(Survival::geometric(f64::NAN).is_err());
    }
}

#[cfg(test)]
mod profile {
    use super::*;
    use crate::{
        ArrivalRates, ClientProfile, ProfileTable, RandomError, RequirementChooser, Sampler,
        Survival,
    };
    use office_core::{ClientClass, Requirement, SimTime};

    fn constant_profile(requirement: RequirementChooser) -> ClientProfile {
        let service = crate::ServiceProfile {
            duration: Sampler::constant(0.1).unwrap(),
            price:    Sampler::constant(10.0).unwrap(),
        };
        ClientProfile {
            arrivals:         ArrivalRates::uniform_day(Sampler::constant(0.5).unwrap()),
            ticketing:        Sampler::constant(0.01).unwrap(),
            requirement,
            services:         [Some(service), None, None],
            kiosk_patience:   Survival::never(),
            room_patience:    Survival::never(),
            abandonment_cost: Sampler::constant(-1.0).unwrap(),
        }
    }

    #[test]
    fn standard_table_is_valid() {
        let table = ProfileTable::standard().unwrap();
        table.validate().unwrap();
        assert_eq!(table.active_classes().count(), 3);
        let c = table.get(ClientClass::C).unwrap();
        assert_eq!(c.reachable().collect::<Vec<_>>(), vec![Requirement::Sale]);
        assert!(c.service(Requirement::Claim).is_none());
    }

    #[test]
    fn standard_prices_have_expected_signs() {
        let table = ProfileTable::standard().unwrap();
        let mut r = rng();
        for class in [ClientClass::A, ClientClass::B] {
            let p = table.get(class).unwrap();
            assert!(p.service(Requirement::Sale).unwrap().price.sample(&mut r) > 0.0);
            assert!(p.service(Requirement::Claim).unwrap().price.sample(&mut r) < 0.0);
            assert_eq!(p.service(Requirement::Inquiry).unwrap().price.sample(&mut r), 0.0);
            assert!(p.abandonment_price(&mut r) < 0.0);
        }
    }

    #[test]
    fn standard_ticketing_within_seconds_window() {
        let table = ProfileTable::standard().unwrap();
        let p = table.get(ClientClass::A).unwrap();
        let mut r = rng();
        for _ in 0..200 {
            let secs = p.ticketing_delay(&mut r) * 3600.0;
            assert!((12.0..25.0).contains(&secs), "got {secs}");
        }
    }

    #[test]
    fn arrival_rate_follows_segment() {
        let rates = ArrivalRates {
            morning: Sampler::constant(1.0).unwrap(),
            noon:    Sampler::constant(2.0).unwrap(),
            evening: Sampler::constant(3.0).unwrap(),
        };
        let mut r = rng();
        assert_eq!(rates.at(SimTime(9.0)).sample(&mut r), 1.0);
        assert_eq!(rates.at(SimTime(12.5)).sample(&mut r), 2.0);
        assert_eq!(rates.at(SimTime(15.0)).sample(&mut r), 3.0);
    }

    #[test]
    fn missing_service_detected() {
        let p = constant_profile(RequirementChooser::weighted([1.0, 1.0, 0.0]).unwrap());
        let table = ProfileTable::new().with(ClientClass::B, p);
        assert!(matches!(
            table.validate(),
            Err(RandomError::MissingService { class: ClientClass::B, requirement: Requirement::Claim })
        ));
    }

    #[test]
    fn zero_arrival_gap_rejected() {
        let mut p = constant_profile(RequirementChooser::fixed(Requirement::Sale));
        p.arrivals.noon = Sampler::constant(0.0).unwrap();
        let table = ProfileTable::new().with(ClientClass::A, p);
        assert!(matches!(
            table.validate(),
            Err(RandomError::NonPositiveDelay { class: ClientClass::A, what: "noon arrival gap" })
        ));
    }

    #[test]
    fn negative_ticketing_rejected() {
        let mut p = constant_profile(RequirementChooser::fixed(Requirement::Sale));
        p.ticketing = Sampler::exponential(60.0).unwrap().negated();
        let table = ProfileTable::new().with(ClientClass::C, p);
        assert!(matches!(
            table.validate(),
            Err(RandomError::NonPositiveDelay { class: ClientClass::C, what: "ticketing delay" })
        ));
    }

    #[test]
    fn negative_service_duration_rejected() {
        let mut p = constant_profile(RequirementChooser::fixed(Requirement::Sale));
        // An unreachable service still has to be well-formed.
        p.services[1] = Some(crate::ServiceProfile {
            duration: Sampler::constant(-0.5).unwrap(),
            price:    Sampler::constant(0.0).unwrap(),
        });
        let table = ProfileTable::new().with(ClientClass::B, p);
        assert!(matches!(
            table.validate(),
            Err(RandomError::NonPositiveDelay { class: ClientClass::B, what: "service duration" })
        ));
    }

    #[test]
    fn partial_table() {
        let table = ProfileTable::new()
            .with(ClientClass::B, constant_profile(RequirementChooser::fixed(Requirement::Sale)));
        assert!(table.validate().is_ok());
        assert_eq!(table.active_classes().collect::<Vec<_>>(), vec![ClientClass::B]);
        assert!(table.get(ClientClass::A).is_none());
        assert_eq!(table.reachable(), vec![(ClientClass::B, Requirement::Sale)]);
    }
}
