//! Tests for comparison, scoreboard, text, CSV output and advice parsing.

#[cfg(test)]
mod helpers {
    use tf_arrival::ArrivalFeed;
    use tf_core::SimConfig;
    use tf_sim::{AlgorithmResult, Policy};

    pub fn result(policy: Policy, wait: f64, utilization: f64, efficiency: f64) -> AlgorithmResult {
        AlgorithmResult {
            policy,
            avg_wait:           wait,
            max_wait:           wait.ceil() as u64,
            avg_utilization:    utilization,
            queue_efficiency:   efficiency,
            avg_service_time:   3.0,
            peak_queue_length:  4,
            min_queue_length:   Some(0),
            avg_queue_length:   1.25,
            customers_arrived:  10,
            customers_served:   8,
            customers_balked:   1,
            customers_unserved: 1,
        }
    }

    pub fn seeded(ticks: u64, seed: u64) -> (SimConfig, ArrivalFeed) {
        let config = SimConfig {
            total_ticks:            ticks,
            max_service_time:       12,
            arrival_chance_percent: 70,
            teller_count:           3,
            queue_capacity:         6,
            seed:                   Some(seed),
            ..SimConfig::default()
        };
        let feed = ArrivalFeed::from_config(&config).unwrap();
        (config, feed)
    }
}

#[cfg(test)]
mod scoreboard {
    use tf_sim::Policy;

    use super::helpers::result;
    use crate::Scoreboard;

    #[test]
    fn needs_two_results() {
        assert!(Scoreboard::new(std::iter::empty()).is_none());
        let one = [result(Policy::RoundRobin, 1.0, 50.0, 90.0)];
        assert!(Scoreboard::new(&one).is_none());
    }

    #[test]
    fn ranked_by_wait_with_stable_ties() {
        let results = [
            result(Policy::LeastFinishTime, 2.0, 60.0, 80.0),
            result(Policy::RoundRobin, 1.0, 60.0, 80.0),
            result(Policy::LeastWorkLeft, 2.0, 60.0, 80.0),
        ];
        let board = Scoreboard::new(&results).unwrap();
        let order: Vec<_> = board.ranking.iter().map(|r| r.policy).collect();
        assert_eq!(order, vec![Policy::RoundRobin, Policy::LeastFinishTime, Policy::LeastWorkLeft]);
    }

    #[test]
    fn picks_first_on_ties() {
        let results = [
            result(Policy::LeastFinishTime, 1.0, 70.0, 90.0),
            result(Policy::RoundRobin, 1.0, 75.0, 90.0),
            result(Policy::LeastWorkLeft, 0.5, 75.0, 95.0),
        ];
        let board = Scoreboard::new(&results).unwrap();
        assert_eq!(board.lowest_wait, Policy::LeastWorkLeft);
        assert_eq!(board.highest_utilization, Policy::RoundRobin);
        assert_eq!(board.best_efficiency, Policy::LeastWorkLeft);
    }

    #[test]
    fn display_lists_every_policy_and_picks() {
        let results = [
            result(Policy::LeastFinishTime, 1.0, 70.0, 90.0),
            result(Policy::RoundRobin, 2.0, 75.0, 90.0),
        ];
        let text = Scoreboard::new(&results).unwrap().to_string();
        assert!(text.contains("ALGORITHM COMPARISON"));
        assert!(text.contains("Greedy (Least Finish Time)"));
        assert!(text.contains("Round Robin"));
        assert!(text.contains("Lowest avg wait time  : Greedy (Least Finish Time)"));
        assert!(text.contains("Highest utilization   : Round Robin"));
    }
}

#[cfg(test)]
mod compare {
    use tf_arrival::{ArrivalFeed, ReplayFallback, ReplayTrace};
    use tf_core::SimConfig;
    use tf_sim::Policy;

    use super::helpers::seeded;
    use crate::{compare, compare_policies};

    #[test]
    fn runs_every_policy_in_order() {
        let (config, feed) = seeded(300, 17);
        let cmp = compare(&config, &feed).unwrap();

        let order: Vec<_> = cmp.results().map(|r| r.policy).collect();
        assert_eq!(order, Policy::ALL.to_vec());
        assert!(cmp.scoreboard.is_some());
        assert!(cmp.run(Policy::RoundRobin).is_some());
    }

    #[test]
    fn every_policy_sees_the_same_arrivals() {
        let (config, feed) = seeded(300, 23);
        let cmp = compare(&config, &feed).unwrap();
        let arrived: Vec<_> = cmp.results().map(|r| r.customers_arrived).collect();
        assert!(arrived.windows(2).all(|w| w[0] == w[1]), "{arrived:?}");
        assert!(cmp.results().all(|r| r.is_conserved()));
    }

    #[test]
    fn replay_feed_is_reopened_per_policy() {
        let config = SimConfig { total_ticks: 6, teller_count: 1, queue_capacity: 2, ..SimConfig::default() };
        let feed = ArrivalFeed::Replay {
            trace:    ReplayTrace::from_pairs(vec![(0, 3), (0, 3), (99, 0), (0, 0)]),
            fallback: ReplayFallback::NoArrival,
        };
        let cmp = compare(&config, &feed).unwrap();
        for r in cmp.results() {
            assert_eq!(r.customers_arrived, 3, "{}", r.policy);
        }
    }

    #[test]
    fn single_policy_has_no_scoreboard() {
        let (config, feed) = seeded(50, 1);
        let cmp = compare_policies(&config, &feed, &[Policy::LeastWorkLeft]).unwrap();
        assert_eq!(cmp.runs.len(), 1);
        assert!(cmp.scoreboard.is_none());
    }

    #[test]
    fn invalid_config_is_reported() {
        let (mut config, feed) = seeded(50, 1);
        config.queue_capacity = 99;
        assert!(compare(&config, &feed).is_err());
    }
}

#[cfg(test)]
mod text {
    use tf_core::SimConfig;
    use tf_sim::{run_policy, NoopObserver, Policy, SimBuilder};

    use super::helpers::seeded;
    use crate::RunReport;

    #[test]
    fn report_has_totals_tellers_and_queue_spread() {
        let (config, feed) = seeded(200, 4);
        let out = run_policy(&config, Policy::LeastWorkLeft, feed.open(&config)).unwrap();
        let text = RunReport(&out).to_string();

        assert!(text.contains("Least Work Left"));
        assert!(text.contains(&format!("Customers arrived       : {}", out.result.customers_arrived)));
        assert!(text.contains("#1"));
        assert!(text.contains("#3"));
        assert!(text.contains("Queue length (min/avg/max)"));
    }

    #[test]
    fn queue_spread_survives_without_log() {
        let (config, feed) = seeded(60, 11);
        let out = SimBuilder::new(config.clone(), Policy::LeastFinishTime, feed.open(&config))
            .keep_log(false)
            .build()
            .unwrap()
            .run(&mut NoopObserver)
            .unwrap();
        assert!(out.log.is_empty());

        let r = &out.result;
        let min = r.min_queue_length.unwrap();
        assert!(min <= r.peak_queue_length);
        let text = RunReport(&out).to_string();
        assert!(text.contains(&format!(
            "Queue length (min/avg/max): {min} / {:.2} / {}",
            r.avg_queue_length, r.peak_queue_length
        )));
    }

    #[test]
    fn report_without_tellers() {
        let config = SimConfig { total_ticks: 0, teller_count: 0, seed: Some(1), ..SimConfig::default() };
        let feed = tf_arrival::ArrivalFeed::from_config(&config).unwrap();
        let out = run_policy(&config, Policy::RoundRobin, feed.open(&config)).unwrap();
        let text = RunReport(&out).to_string();
        assert!(text.contains("No teller data available."));
        assert!(!text.contains("Queue length"));
    }
}

#[cfg(test)]
mod csv_output {
    use std::fs;

    use tf_sim::{NoopObserver, Policy, SimBuilder};

    use super::helpers::seeded;
    use crate::{compare, CsvWriter, OutputObserver, OutputWriter};

    #[test]
    fn comparison_export_writes_three_files() {
        let dir = tempfile::tempdir().unwrap();
        let (config, feed) = seeded(40, 9);
        let cmp = compare(&config, &feed).unwrap();

        let mut writer = CsvWriter::new(dir.path()).unwrap();
        for run in &cmp.runs {
            writer.write_run(run).unwrap();
        }
        writer.finish().unwrap();
        writer.finish().unwrap();

        let ticks = fs::read_to_string(dir.path().join("ticks.csv")).unwrap();
        let tellers = fs::read_to_string(dir.path().join("tellers.csv")).unwrap();
        let results = fs::read_to_string(dir.path().join("results.csv")).unwrap();

        assert_eq!(ticks.lines().count(), 1 + 3 * 40);
        assert_eq!(tellers.lines().count(), 1 + 3 * 3);
        assert_eq!(results.lines().count(), 1 + 3);
        assert!(ticks.starts_with("policy,tick,queued,busy,free,"));
        assert!(results.lines().nth(1).unwrap().starts_with("LFT,"));
        assert!(results.lines().nth(3).unwrap().starts_with("LeastWorkLeft,"));
    }

    #[test]
    fn creates_missing_directory() {
        let dir = tempfile::tempdir().unwrap();
        let nested = dir.path().join("a").join("b");
        let mut writer = CsvWriter::new(&nested).unwrap();
        writer.finish().unwrap();
        assert!(nested.join("results.csv").exists());
    }

    #[test]
    fn observer_streams_a_run() {
        let dir = tempfile::tempdir().unwrap();
        let (config, feed) = seeded(25, 2);

        let mut obs = OutputObserver::new(CsvWriter::new(dir.path()).unwrap());
        SimBuilder::new(config.clone(), Policy::RoundRobin, feed.open(&config))
            .keep_log(false)
            .build()
            .unwrap()
            .run(&mut obs)
            .unwrap();
        obs.finish().unwrap();

        let ticks = fs::read_to_string(dir.path().join("ticks.csv")).unwrap();
        assert_eq!(ticks.lines().count(), 1 + 25);
        assert!(ticks.lines().skip(1).all(|l| l.starts_with("RoundRobin,")));
        let results = fs::read_to_string(dir.path().join("results.csv")).unwrap();
        assert_eq!(results.lines().count(), 2);
    }

    #[test]
    fn stepped_run_keeps_its_policy_label() {
        let dir = tempfile::tempdir().unwrap();
        let (config, feed) = seeded(10, 5);

        let mut sim = SimBuilder::new(config.clone(), Policy::RoundRobin, feed.open(&config))
            .build()
            .unwrap();
        sim.run_ticks(2, &mut NoopObserver).unwrap();

        let mut obs = OutputObserver::new(CsvWriter::new(dir.path()).unwrap());
        sim.run(&mut obs).unwrap();
        obs.finish().unwrap();

        let ticks = fs::read_to_string(dir.path().join("ticks.csv")).unwrap();
        assert_eq!(ticks.lines().count(), 1 + 8);
        assert!(ticks.lines().skip(1).all(|l| l.starts_with("RoundRobin,")));
        assert!(ticks.lines().nth(1).unwrap().starts_with("RoundRobin,2,"));

        let tellers = fs::read_to_string(dir.path().join("tellers.csv")).unwrap();
        assert!(tellers.lines().skip(1).all(|l| l.starts_with("RoundRobin,")));
        let results = fs::read_to_string(dir.path().join("results.csv")).unwrap();
        assert!(results.lines().nth(1).unwrap().starts_with("RoundRobin,"));
    }
}

#[cfg(test)]
mod observer {
    use std::io;

    use tf_sim::{Policy, SimBuilder};

    use super::helpers::seeded;
    use crate::{OutputObserver, OutputWriter, ReportError, ReportResult, ResultRow, TellerRow, TickRow};

    #[derive(Default)]
    struct Flaky {
        tick_rows: usize,
        results:   usize,
        finished:  usize,
    }

    impl OutputWriter for Flaky {
        fn write_ticks(&mut self, rows: &[TickRow]) -> ReportResult<()> {
            self.tick_rows += rows.len();
            if self.tick_rows == 3 {
                return Err(ReportError::Io(io::Error::other("disk full")));
            }
            Ok(())
        }

        fn write_tellers(&mut self, _rows: &[TellerRow]) -> ReportResult<()> {
            Err(ReportError::Io(io::Error::other("second failure")))
        }

        fn write_result(&mut self, _row: &ResultRow) -> ReportResult<()> {
            self.results += 1;
            Ok(())
        }

        fn finish(&mut self) -> ReportResult<()> {
            self.finished += 1;
            Ok(())
        }
    }

    #[test]
    fn first_error_is_kept_and_run_continues() {
        let (config, feed) = seeded(10, 3);
        let mut obs = OutputObserver::new(Flaky::default());
        SimBuilder::new(config.clone(), Policy::LeastFinishTime, feed.open(&config))
            .build()
            .unwrap()
            .run(&mut obs)
            .unwrap();

        let err = obs.finish().unwrap_err();
        assert!(err.to_string().contains("disk full"), "{err}");
        assert!(obs.take_error().is_none());

        let writer = obs.into_writer();
        assert_eq!(writer.tick_rows, 10);
        assert_eq!(writer.results, 1);
        assert_eq!(writer.finished, 1);
    }
}

#[cfg(test)]
mod advice {
    use std::fs;

    use tf_core::SimConfig;
    use tf_sim::Policy;

    use crate::{
        build_prompt, describe_scenario, parse_chat_response, parse_recommendation, recommend_or_default,
        AdviceError, Recommendation, Recommender, SavedResponse, DEFAULT_POLICY,
    };

    #[test]
    fn plain_json() {
        let rec = parse_recommendation(r#"{"algorithm": "Least Work Left", "explanation": "bursty"}"#).unwrap();
        assert_eq!(rec.policy, Policy::LeastWorkLeft);
        assert_eq!(rec.explanation, "bursty");
        assert!(rec.succeeded);
    }

    #[test]
    fn fenced_json_with_prose() {
        let text = "Here you go:\n```json\n{\"algorithm\": \"Round Robin\", \"explanation\": \"fair\"}\n```\n";
        assert_eq!(parse_recommendation(text).unwrap().policy, Policy::RoundRobin);

        let fenced = "```json\n{\"algorithm\": \"Greedy\"}\n```";
        let rec = parse_recommendation(fenced).unwrap();
        assert_eq!(rec.policy, Policy::LeastFinishTime);
        assert_eq!(rec.explanation, "");
    }

    #[test]
    fn rejects_unknown_algorithm() {
        let err = parse_recommendation(r#"{"algorithm": "Shortest Job First"}"#).unwrap_err();
        assert!(matches!(err, AdviceError::UnknownPolicy(name) if name == "Shortest Job First"));
    }

    #[test]
    fn rejects_text_without_object() {
        assert!(matches!(parse_recommendation("use greedy"), Err(AdviceError::NoJsonObject)));
        assert!(matches!(parse_recommendation("} backwards {"), Err(AdviceError::NoJsonObject)));
        assert!(matches!(parse_recommendation("{ not json }"), Err(AdviceError::Json(_))));
    }

    #[test]
    fn chat_envelope() {
        let body = r#"{"choices":[{"message":{"role":"assistant","content":"{\"algorithm\":\"Least Work Left\",\"explanation\":\"variable times\"}"}}]}"#;
        let rec = parse_chat_response(body).unwrap();
        assert_eq!(rec.policy, Policy::LeastWorkLeft);
        assert_eq!(rec.explanation, "variable times");

        assert!(matches!(parse_chat_response(r#"{"choices":[]}"#), Err(AdviceError::MissingContent)));
    }

    struct Offline;

    impl Recommender for Offline {
        fn recommend(&self, _scenario: &str) -> Result<Recommendation, AdviceError> {
            Err(AdviceError::Unavailable("no network".into()))
        }
    }

    #[test]
    fn failure_falls_back_to_default() {
        let rec = recommend_or_default(&Offline, "3 tellers");
        assert_eq!(rec.policy, DEFAULT_POLICY);
        assert!(!rec.succeeded);
        assert!(rec.explanation.contains("no network"));
    }

    #[test]
    fn saved_response_reads_either_format() {
        let dir = tempfile::tempdir().unwrap();

        let envelope = dir.path().join("envelope.json");
        fs::write(
            &envelope,
            r#"{"choices":[{"message":{"content":"{\"algorithm\":\"Round Robin\",\"explanation\":\"x\"}"}}]}"#,
        )
        .unwrap();
        assert_eq!(recommend_or_default(&SavedResponse::new(&envelope), "").policy, Policy::RoundRobin);

        let raw = dir.path().join("raw.txt");
        fs::write(&raw, "I suggest {\"algorithm\": \"LeastWorkLeft\", \"explanation\": \"y\"}").unwrap();
        let rec = recommend_or_default(&SavedResponse::new(&raw), "");
        assert_eq!(rec.policy, Policy::LeastWorkLeft);
        assert!(rec.succeeded);

        let missing = SavedResponse::new(dir.path().join("nope.json"));
        assert!(matches!(missing.recommend(""), Err(AdviceError::Unavailable(_))));
        assert!(!recommend_or_default(&missing, "").succeeded);
    }

    #[test]
    fn prompt_embeds_scenario() {
        let scenario = describe_scenario(&SimConfig::default());
        assert_eq!(
            scenario,
            "3 tellers, queue capacity 10, 50% chance of an arrival each tick, transaction times 1-20 units, 100 ticks."
        );
        let prompt = build_prompt(&scenario);
        assert!(prompt.contains(&scenario));
        assert!(prompt.contains("\"algorithm\": \"Greedy|Round Robin|Least Work Left\""));
    }
}
