//! End-to-end scenarios with known answers.

use jugsearch::core::{Action, JugState};
use jugsearch::report::SearchReport;
use jugsearch::search::{search, SearchConfig, SearchError, SearchOutcome, Solver};

fn descriptions(outcome: &SearchOutcome) -> Vec<String> {
    outcome.path().iter().map(Action::description).collect()
}

fn trace(outcome: &SearchOutcome) -> Vec<(Vec<u64>, Vec<u64>)> {
    outcome
        .path()
        .iter()
        .map(|a| {
            (
                a.prev_state().volumes().to_vec(),
                a.curr_state().volumes().to_vec(),
            )
        })
        .collect()
}

#[test]
fn three_and_five_measure_four() {
    let outcome = search(&[3, 5], 4).unwrap();

    assert!(outcome.found());
    assert_eq!(
        descriptions(&outcome),
        vec![
            "Fill jug 0 to its capacity of 3 liters",
            "Transfer 3 liters from jug 0 to jug 1",
            "Fill jug 0 to its capacity of 3 liters",
            "Transfer 2 liters from jug 0 to jug 1",
            "Empty jug 1, discarding 5 liters",
            "Transfer 1 liters from jug 0 to jug 1",
            "Fill jug 0 to its capacity of 3 liters",
        ]
    );
    assert_eq!(
        trace(&outcome),
        vec![
            (vec![0, 0], vec![3, 0]),
            (vec![3, 0], vec![0, 3]),
            (vec![0, 3], vec![3, 3]),
            (vec![3, 3], vec![1, 5]),
            (vec![1, 5], vec![1, 0]),
            (vec![1, 0], vec![0, 1]),
            (vec![0, 1], vec![3, 1]),
        ]
    );
}

#[test]
fn single_jug_filled_to_capacity() {
    let outcome = search(&[2], 2).unwrap();
    assert_eq!(
        descriptions(&outcome),
        vec!["Fill jug 0 to its capacity of 2 liters"]
    );
    assert_eq!(outcome.path()[0].curr_state(), &JugState::from(vec![2]));
}

#[test]
fn single_jug_cannot_hold_half() {
    let (found, path) = search(&[2], 1).unwrap().into_parts();
    assert!(!found);
    assert!(path.is_empty());
}

#[test]
fn target_beyond_total_is_invalid() {
    let error = search(&[4, 3], 10).unwrap_err();
    assert_eq!(error, SearchError::InvalidTarget { sum: 7, target: 10 });
    assert!(error.to_string().contains("(7)"));
    assert!(error.to_string().contains("10"));
}

#[test]
fn zero_capacity_zero_target_needs_no_moves() {
    let outcome = search(&[0], 0).unwrap();
    assert!(outcome.found());
    assert!(outcome.path().is_empty());
}

#[test]
fn three_and_five_measure_two() {
    let outcome = search(&[3, 5], 2).unwrap();
    assert_eq!(
        descriptions(&outcome),
        vec![
            "Fill jug 1 to its capacity of 5 liters",
            "Transfer 3 liters from jug 1 to jug 0",
            "Empty jug 0, discarding 3 liters",
        ]
    );
}

#[test]
fn four_and_nine_measure_six() {
    let outcome = search(&[4, 9], 6).unwrap();
    assert_eq!(
        trace(&outcome),
        vec![
            (vec![0, 0], vec![0, 9]),
            (vec![0, 9], vec![4, 5]),
            (vec![4, 5], vec![0, 5]),
            (vec![0, 5], vec![4, 1]),
            (vec![4, 1], vec![0, 1]),
            (vec![0, 1], vec![1, 0]),
            (vec![1, 0], vec![1, 9]),
            (vec![1, 9], vec![4, 6]),
            (vec![4, 6], vec![0, 6]),
        ]
    );
}

#[test]
fn three_jugs_measure_eleven() {
    let outcome = search(&[3, 5, 7], 11).unwrap();
    assert_eq!(
        descriptions(&outcome),
        vec![
            "Fill jug 0 to its capacity of 3 liters",
            "Fill jug 1 to its capacity of 5 liters",
            "Transfer 3 liters from jug 0 to jug 2",
            "Fill jug 0 to its capacity of 3 liters",
        ]
    );
}

#[test]
fn even_jugs_never_measure_odd() {
    assert_eq!(search(&[2, 4], 3).unwrap(), SearchOutcome::Unreachable);
    assert!(search(&[2, 4], 6).unwrap().found());
}

#[test]
fn repeated_runs_are_identical() {
    let solver = Solver::default();
    let first = solver.run(&[4, 9], 6).unwrap();
    let second = solver.run(&[4, 9], 6).unwrap();

    assert_eq!(first.outcome, second.outcome);
    assert_eq!(first.stats.states_expanded, second.stats.states_expanded);
    assert_eq!(first.stats.entries_enqueued, second.stats.entries_enqueued);
}

#[test]
fn limits_from_json_config() {
    let config = SearchConfig::from_json(r#"{"max_expansions": 2}"#).unwrap();
    let solver = Solver::new(config).unwrap();

    assert_eq!(
        solver.run(&[4, 9], 6),
        Err(SearchError::ExpansionLimitReached { limit: 2 })
    );
    assert!(solver.run(&[2], 2).unwrap().outcome.found());
}

#[test]
fn report_roundtrips_a_solution() {
    let run = Solver::default().run(&[4, 9], 6).unwrap();
    let report = SearchReport::new(&[4, 9], 6, &run);

    let restored = SearchReport::from_bytes(&report.to_bytes().unwrap()).unwrap();
    assert_eq!(restored.outcome(), run.outcome);
    assert_eq!(restored.stats, run.stats);
}

#[test]
fn queue_limit_caps_large_unreachable_search() {
    let config = SearchConfig::builder()
        .max_expansions(200_000)
        .max_queue_len(1_000)
        .build();
    let solver = Solver::new(config).unwrap();

    assert_eq!(
        solver.run(&[100, 98, 96, 94, 92, 90, 88, 86], 103),
        Err(SearchError::QueueLimitReached { limit: 1_000 })
    );
}
