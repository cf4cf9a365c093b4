//! Unit tests for tf-core primitives.

#[cfg(test)]
mod ids {
    use crate::{CustomerId, TellerId};

    #[test]
    fn slot_roundtrip() {
        let id = TellerId(3);
        assert_eq!(id.slot(), 2);
        assert_eq!(TellerId::from_slot(2), id);
        assert_eq!(id.slot_checked(), Some(2));
        assert_eq!(TellerId(0).slot_checked(), None);
    }

    #[test]
    fn first_and_next() {
        assert_eq!(CustomerId::FIRST, CustomerId(1));
        assert_eq!(CustomerId::FIRST.next(), CustomerId(2));
    }

    #[test]
    fn ordering() {
        assert!(TellerId(1) < TellerId(2));
        assert!(CustomerId(100) > CustomerId(99));
    }

    #[test]
    fn display() {
        assert_eq!(TellerId(7).to_string(), "#7");
        assert_eq!(CustomerId(12).to_string(), "#12");
    }
}

#[cfg(test)]
mod time {
    use crate::Tick;

    #[test]
    fn tick_arithmetic() {
        let t = Tick(10);
        assert_eq!(t + 5, Tick(15));
        assert_eq!(t.next(), Tick(11));
        assert_eq!(Tick(15).since(t), 5);
    }

    #[test]
    fn since_saturates() {
        assert_eq!(Tick(4).since(Tick(1)), 3);
        assert_eq!(Tick(1).since(Tick(4)), 0);
    }

    #[test]
    fn display() {
        assert_eq!(Tick(42).to_string(), "T42");
    }
}

#[cfg(test)]
mod config {
    use crate::{CoreError, DataSource, SimConfig, Tick};

    #[test]
    fn default_is_valid() {
        let cfg = SimConfig::default();
        assert!(cfg.validate().is_ok());
        assert_eq!(cfg.end_tick(), Tick(100));
        assert_eq!(cfg.data_source, DataSource::Random);
    }

    #[test]
    fn boundary_values_accepted() {
        let cfg = SimConfig {
            total_ticks:            10_000,
            max_service_time:       500,
            arrival_chance_percent: 100,
            teller_count:           10,
            queue_capacity:         50,
            ..SimConfig::default()
        };
        assert!(cfg.validate().is_ok());

        let zeros = SimConfig {
            total_ticks:            0,
            max_service_time:       0,
            arrival_chance_percent: 1,
            teller_count:           0,
            queue_capacity:         0,
            ..SimConfig::default()
        };
        assert!(zeros.validate().is_ok());
    }

    #[test]
    fn chance_zero_rejected() {
        let cfg = SimConfig { arrival_chance_percent: 0, ..SimConfig::default() };
        match cfg.validate() {
            Err(CoreError::OutOfRange { field, value, .. }) => {
                assert_eq!(field, "arrival_chance_percent");
                assert_eq!(value, 0);
            }
            other => panic!("expected OutOfRange, got {other:?}"),
        }
    }

    #[test]
    fn each_upper_bound_enforced() {
        let cases = [
            SimConfig { total_ticks: 10_001, ..SimConfig::default() },
            SimConfig { max_service_time: 501, ..SimConfig::default() },
            SimConfig { arrival_chance_percent: 101, ..SimConfig::default() },
            SimConfig { teller_count: 11, ..SimConfig::default() },
            SimConfig { queue_capacity: 51, ..SimConfig::default() },
        ];
        for cfg in cases {
            assert!(cfg.validate().is_err(), "{cfg:?} should be rejected");
        }
    }

    #[test]
    fn zero_max_service_behaves_like_one() {
        let cfg = SimConfig { max_service_time: 0, ..SimConfig::default() };
        assert_eq!(cfg.effective_max_service(), 1);
    }

    #[test]
    fn error_message_names_field() {
        let cfg = SimConfig { teller_count: 12, ..SimConfig::default() };
        let msg = cfg.validate().unwrap_err().to_string();
        assert_eq!(msg, "teller_count = 12 is out of range (expected 0..=10)");
    }
}

#[cfg(test)]
mod rng {
    use crate::SimRng;

    #[test]
    fn deterministic_same_seed() {
        let mut r1 = SimRng::new(12345);
        let mut r2 = SimRng::new(12345);
        for _ in 0..100 {
            let a: u32 = r1.gen_range(1..=100);
            let b: u32 = r2.gen_range(1..=100);
            assert_eq!(a, b);
        }
    }

    #[test]
    fn clone_continues_identically() {
        let mut r1 = SimRng::new(7);
        let _: u64 = r1.gen_range(0..10);
        let mut r2 = r1.clone();
        for _ in 0..50 {
            assert_eq!(r1.gen_range(0u64..1_000), r2.gen_range(0u64..1_000));
        }
    }

    #[test]
    fn gen_range_in_bounds() {
        let mut rng = SimRng::new(0);
        for _ in 0..1000 {
            let v: u64 = rng.gen_range(1..=20);
            assert!((1..=20).contains(&v));
        }
    }
}

#[cfg(test)]
#[cfg(feature = "serde")]
mod config_json {
    use std::path::PathBuf;

    use crate::{DataSource, SimConfig};

    #[test]
    fn partial_config_fills_defaults() {
        let config: SimConfig = serde_json::from_str(r#"{ "teller_count": 5, "seed": 9 }"#).unwrap();
        assert_eq!(config.teller_count, 5);
        assert_eq!(config.seed, Some(9));
        assert_eq!(config.total_ticks, SimConfig::default().total_ticks);
        assert_eq!(config.queue_capacity, SimConfig::default().queue_capacity);
        assert_eq!(config.data_source, DataSource::Random);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn replay_source_is_tagged_by_kind() {
        let config: SimConfig = serde_json::from_str(
            r#"{ "total_ticks": 20, "data_source": { "kind": "replay", "path": "data/trace.txt" } }"#,
        )
        .unwrap();
        assert_eq!(config.total_ticks, 20);
        assert_eq!(config.data_source, DataSource::Replay { path: PathBuf::from("data/trace.txt") });

        let random: SimConfig = serde_json::from_str(r#"{ "data_source": { "kind": "random" } }"#).unwrap();
        assert_eq!(random.data_source, DataSource::Random);
    }

    #[test]
    fn out_of_range_json_is_rejected_by_validate() {
        let config: SimConfig = serde_json::from_str(r#"{ "arrival_chance_percent": 0 }"#).unwrap();
        assert!(config.validate().is_err());
    }
}
