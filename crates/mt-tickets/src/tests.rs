//! Unit tests for ticket generation.

#[cfg(test)]
mod transit {
    use crate::transit_days;

    const MARS_KM: u64 = 62_100_100;

    #[test]
    fn reference_fast_crossing() {
        // 62,100,100 / 30 = 2,070,003 s -> 34,500 min -> 575 h -> 23 d
        assert_eq!(transit_days(MARS_KM, 30.0).unwrap(), 23);
    }

    #[test]
    fn reference_slow_crossing() {
        // 62,100,100 / 16 = 3,881,256 s -> 64,687 min -> 1,078 h -> 44 d
        assert_eq!(transit_days(MARS_KM, 16.0).unwrap(), 44);
    }

    #[test]
    fn matches_stepwise_truncation() {
        for speed in [16.0, 17.3, 21.9, 25.0, 29.999] {
            let seconds = (MARS_KM as f64 / speed) as u64;
            let expected = seconds / 60 / 60 / 24;
            assert_eq!(transit_days(MARS_KM, speed).unwrap(), expected, "speed {speed}");
        }
    }

    #[test]
    fn short_hop_rounds_down_to_zero() {
        // Under a day of travel truncates to 0, not 1.
        assert_eq!(transit_days(86_399, 1.0).unwrap(), 0);
        assert_eq!(transit_days(86_400, 1.0).unwrap(), 1);
    }

    #[test]
    fn non_positive_speed_is_an_error() {
        assert!(transit_days(MARS_KM, 0.0).is_err());
        assert!(transit_days(MARS_KM, -16.0).is_err());
    }

    #[test]
    fn non_finite_speed_is_an_error() {
        assert!(transit_days(MARS_KM, f64::NAN).is_err());
        assert!(transit_days(MARS_KM, f64::INFINITY).is_err());
    }
}

#[cfg(test)]
mod quote {
    use mt_core::{BoardConfig, TicketRng};

    use crate::FareQuote;

    #[test]
    fn stays_inside_both_bands() {
        let cfg = BoardConfig::default();
        let mut rng = TicketRng::new(99);
        for _ in 0..10_000 {
            let q = FareQuote::draw(&cfg, &mut rng);
            assert!((16.0..30.0).contains(&q.speed_kms), "speed {}", q.speed_kms);
            assert!((36.0..50.0).contains(&q.cost_millions), "cost {}", q.cost_millions);
        }
    }

    #[test]
    fn speed_and_cost_share_one_factor() {
        let cfg = BoardConfig::default();
        let mut rng = TicketRng::new(4);
        for _ in 0..1_000 {
            let q = FareQuote::draw(&cfg, &mut rng);
            let delta = (q.speed_fraction(&cfg) - q.cost_fraction(&cfg)).abs();
            assert!(delta < 1e-9, "fractions diverged by {delta}");
        }
    }

    #[test]
    fn faster_is_never_cheaper() {
        let cfg = BoardConfig::default();
        let mut rng = TicketRng::new(11);
        let mut quotes: Vec<FareQuote> = (0..100).map(|_| FareQuote::draw(&cfg, &mut rng)).collect();
        quotes.sort_by(|a, b| a.speed_kms.total_cmp(&b.speed_kms));
        for pair in quotes.windows(2) {
            assert!(pair[0].cost_millions <= pair[1].cost_millions);
        }
    }
}

#[cfg(test)]
mod catalog {
    use mt_core::TicketRng;

    use crate::{Spaceline, TripType};

    #[test]
    fn spaceline_display_names() {
        assert_eq!(Spaceline::VirginGalactic.to_string(), "Virgin Galactic");
        assert_eq!(Spaceline::SpaceX.to_string(), "SpaceX");
        assert_eq!(Spaceline::SpaceAdventures.to_string(), "Space Adventures");
    }

    #[test]
    fn pick_covers_whole_catalog() {
        let mut rng = TicketRng::new(3);
        let mut seen = [false; 3];
        for _ in 0..300 {
            let line = Spaceline::pick(&Spaceline::CATALOG, &mut rng).unwrap();
            let i = Spaceline::CATALOG.iter().position(|&s| s == line).unwrap();
            seen[i] = true;
        }
        assert!(seen.iter().all(|&s| s), "not all carriers drawn: {seen:?}");
    }

    #[test]
    fn pick_respects_restricted_catalog() {
        let mut rng = TicketRng::new(3);
        let only = [Spaceline::SpaceX];
        for _ in 0..50 {
            assert_eq!(Spaceline::pick(&only, &mut rng), Some(Spaceline::SpaceX));
        }
    }

    #[test]
    fn pick_from_empty_catalog_is_none() {
        let mut rng = TicketRng::new(3);
        assert_eq!(Spaceline::pick(&[], &mut rng), None);
    }

    #[test]
    fn trip_type_is_always_one_of_two() {
        let mut rng = TicketRng::new(8);
        let (mut round, mut one_way) = (0, 0);
        for _ in 0..500 {
            match TripType::pick(&mut rng) {
                TripType::RoundTrip => round += 1,
                TripType::OneWay => one_way += 1,
            }
        }
        assert!(round > 0 && one_way > 0, "round {round}, one-way {one_way}");
    }

    #[test]
    fn trip_type_display_names() {
        assert_eq!(TripType::RoundTrip.to_string(), "Round-trip");
        assert_eq!(TripType::OneWay.to_string(), "One-way");
    }
}

#[cfg(test)]
mod generation {
    use mt_core::{BoardConfig, MtError, TicketRng};

    use crate::{Spaceline, generate_tickets, transit_days};

    fn cfg_with_count(n: usize) -> BoardConfig {
        BoardConfig { ticket_count: n, ..Default::default() }
    }

    #[test]
    fn exact_ticket_count() {
        for n in [0, 1, 10, 57] {
            let cfg = cfg_with_count(n);
            let mut rng = TicketRng::new(42);
            let tickets = generate_tickets(&cfg, &Spaceline::CATALOG, &mut rng).unwrap();
            assert_eq!(tickets.len(), n);
        }
    }

    #[test]
    fn empty_catalog_fails_fast() {
        let cfg = BoardConfig::default();
        let mut rng = TicketRng::new(42);
        let err = generate_tickets(&cfg, &[], &mut rng).unwrap_err();
        assert!(matches!(err, MtError::Config(_)));
    }

    #[test]
    fn tickets_stay_inside_bands() {
        let cfg = cfg_with_count(500);
        let mut rng = TicketRng::new(6);
        for t in generate_tickets(&cfg, &Spaceline::CATALOG, &mut rng).unwrap() {
            assert!((16.0..30.0).contains(&t.speed_kms));
            assert!((36.0..50.0).contains(&t.cost_millions));
        }
    }

    #[test]
    fn days_follow_quoted_speed() {
        let cfg = cfg_with_count(100);
        let mut rng = TicketRng::new(13);
        for t in generate_tickets(&cfg, &Spaceline::CATALOG, &mut rng).unwrap() {
            assert_eq!(t.days, transit_days(cfg.mars_distance_km, t.speed_kms).unwrap());
            // Band endpoints pin the day count between the extremes.
            assert!((23..=44).contains(&t.days), "days {}", t.days);
        }
    }

    #[test]
    fn same_seed_same_board() {
        let cfg = BoardConfig::default();
        let a = generate_tickets(&cfg, &Spaceline::CATALOG, &mut TicketRng::new(2024)).unwrap();
        let b = generate_tickets(&cfg, &Spaceline::CATALOG, &mut TicketRng::new(2024)).unwrap();
        assert_eq!(a, b);
    }

    #[test]
    fn different_seeds_differ() {
        let cfg = BoardConfig::default();
        let a = generate_tickets(&cfg, &Spaceline::CATALOG, &mut TicketRng::new(1)).unwrap();
        let b = generate_tickets(&cfg, &Spaceline::CATALOG, &mut TicketRng::new(2)).unwrap();
        assert_ne!(a, b);
    }
}
