//! Fixed instances with oracles computed by enumerating every tour.

mod common;

use std::sync::atomic::AtomicBool;
use std::sync::Arc;

use common::{all_tours, brute_force_bottleneck, init_logging, is_valid_tour};
use u_minimax::search::{HeuristicMode, SearchConfig, SearchRunner, Strategy, UNREACHABLE};
use u_minimax::table::DistanceTable;
use u_minimax::MinimaxError;

fn cities() -> Vec<&'static str> {
    vec!["A", "B", "C", "D"]
}

#[test]
fn test_brute_force_helper() {
    assert_eq!(all_tours(4).len(), 6);
    assert_eq!(all_tours(2), vec![vec![0, 1, 0]]);
    assert!(all_tours(5).iter().all(|t| is_valid_tour(t, 5)));
}

#[test]
fn test_informed_reference_instance() {
    init_logging();
    let table = DistanceTable::build(
        cities(),
        &[[0, 10, 15, 20], [10, 0, 35, 40], [15, 35, 0, 30], [20, 40, 30, 0]],
    )
    .unwrap();

    // Every 4-city cycle uses B-C (35) or B-D (40); A-B-C-D-A is the best.
    assert_eq!(brute_force_bottleneck(&table), 35);

    for strategy in Strategy::ALL {
        let result = strategy.solve(&table);
        assert_eq!(result.best_bottleneck, 35, "{strategy}");
        let tour = table.labels(result.best.as_deref().unwrap());
        let forward = vec![&"A", &"B", &"C", &"D", &"A"];
        let backward = vec![&"A", &"D", &"C", &"B", &"A"];
        assert!(tour == forward || tour == backward, "{strategy}: {tour:?}");
    }
}

#[test]
fn test_breadth_first_reference_instance() {
    init_logging();
    let table = DistanceTable::build(
        cities(),
        &[[0, 1, 4, 5], [1, 0, 2, 6], [4, 2, 0, 3], [5, 6, 3, 0]],
    )
    .unwrap();
    assert_eq!(brute_force_bottleneck(&table), 5);

    let result = Strategy::BreadthFirst.solve(&table);
    assert_eq!(result.best_bottleneck, 5);
    assert_eq!(result.best, Some(vec![0, 1, 2, 3, 0]));
}

#[test]
fn test_uniform_cost_reference_instance() {
    init_logging();
    let table = DistanceTable::build(
        cities(),
        &[[0, 10, 15, 20], [10, 0, 35, 25], [15, 35, 0, 30], [20, 25, 30, 0]],
    )
    .unwrap();
    assert_eq!(brute_force_bottleneck(&table), 30);

    let result = Strategy::UniformCost.solve(&table);
    assert_eq!(result.best_bottleneck, 30);
    assert_eq!(
        table.labels(result.best.as_deref().unwrap()),
        vec![&"A", &"B", &"D", &"C", &"A"]
    );
}

#[test]
fn test_all_equal_weights() {
    init_logging();
    let matrix = vec![vec![7i64; 5]; 5];
    let table = DistanceTable::indexed(&matrix).unwrap();
    for (strategy, result) in SearchRunner::run_all(&table, &SearchConfig::default()).unwrap() {
        assert_eq!(result.best_bottleneck, 7, "{strategy}");
        assert_eq!(result.cost_history, vec![7], "{strategy}");
    }
}

#[test]
fn test_asymmetric_two_locations() {
    let table = DistanceTable::build(vec!["x", "y"], &[[0, 2], [11, 0]]).unwrap();
    for strategy in Strategy::ALL {
        let result = strategy.solve(&table);
        assert_eq!(result.best_bottleneck, 11);
        assert_eq!(result.best, Some(vec![0, 1, 0]));
    }
}

#[test]
fn test_single_location() {
    let table = DistanceTable::build(vec!["solo"], &[[0]]).unwrap();
    let result = Strategy::Informed.solve(&table);
    assert_eq!(result.best, Some(vec![0, 0]));
    assert_eq!(result.best_bottleneck, 0);
}

#[test]
fn test_malformed_inputs() {
    let not_square = DistanceTable::build(cities(), &[vec![0, 1, 2, 3], vec![1, 0, 2]]);
    assert!(matches!(not_square, Err(MinimaxError::MalformedInput(_))));

    let wrong_count = DistanceTable::build(vec!["A", "B"], &[[0, 1, 2], [1, 0, 2], [2, 2, 0]]);
    assert!(matches!(wrong_count, Err(MinimaxError::MalformedInput(_))));

    let negative = DistanceTable::build(vec!["A", "B"], &[[0, 3], [-3, 0]]);
    assert!(matches!(negative, Err(MinimaxError::MalformedInput(_))));
}

#[test]
fn test_heuristic_modes_agree() {
    init_logging();
    let table = DistanceTable::indexed(&[
        [0, 12, 3, 23, 1, 5],
        [12, 0, 9, 18, 3, 41],
        [3, 9, 0, 89, 56, 21],
        [23, 18, 89, 0, 87, 46],
        [1, 3, 56, 87, 0, 55],
        [5, 41, 21, 46, 55, 0],
    ])
    .unwrap();
    let oracle = brute_force_bottleneck(&table);

    for mode in [HeuristicMode::Additive, HeuristicMode::Bottleneck] {
        let config = SearchConfig::default().with_heuristic(mode);
        let result = SearchRunner::run(&table, Strategy::Informed, &config).unwrap();
        assert_eq!(result.best_bottleneck, oracle, "{mode:?}");
    }
}

#[test]
fn test_cutoff_returns_best_so_far() {
    init_logging();
    let table = DistanceTable::indexed(&[
        [0, 4, 8, 3, 6, 2, 7],
        [4, 0, 5, 9, 1, 3, 6],
        [8, 5, 0, 2, 7, 4, 9],
        [3, 9, 2, 0, 5, 8, 1],
        [6, 1, 7, 5, 0, 2, 4],
        [2, 3, 4, 8, 2, 0, 5],
        [7, 6, 9, 1, 4, 5, 0],
    ])
    .unwrap();
    let oracle = brute_force_bottleneck(&table);

    let full = SearchRunner::run(&table, Strategy::UniformCost, &SearchConfig::default()).unwrap();
    assert!(full.exhausted);
    assert_eq!(full.best_bottleneck, oracle);

    // Only the seed is expanded; its six children are all partial paths.
    let config = SearchConfig::default().with_max_expansions(1);
    let result = SearchRunner::run(&table, Strategy::UniformCost, &config).unwrap();
    assert_eq!(result.expansions, 1);
    assert!(!result.exhausted);
    assert_eq!(result.goals_reached, 0);
    assert_eq!(result.best, None);
    assert_eq!(result.best_bottleneck, UNREACHABLE);

    // A budget covering the whole run changes nothing.
    let config = SearchConfig::default().with_max_expansions(full.expansions);
    let result = SearchRunner::run(&table, Strategy::UniformCost, &config).unwrap();
    assert!(result.exhausted);
    assert_eq!(result, full);
}

#[test]
fn test_cancellation_flag() {
    let table = DistanceTable::indexed(&[[0, 1, 2], [1, 0, 3], [2, 3, 0]]).unwrap();
    let flag = Arc::new(AtomicBool::new(true));
    let result = SearchRunner::run_with_cancel(
        &table,
        Strategy::BreadthFirst,
        &SearchConfig::default(),
        Some(flag),
    )
    .unwrap();
    assert!(result.cancelled);
    assert!(!result.is_found());
}
