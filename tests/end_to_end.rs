//! End-to-end runs of each optimizer through the public API.

use combopt::ga::{solve_tsp, GaConfig, GaRunner, TspProblem};
use combopt::random::create_rng;
use combopt::sa::{optimize_route, SaConfig};
use combopt::search::{apply_moves, solve, solve_with, Board, SearchConfig, SearchError};
use combopt::{CostMatrix, Location, Locations, OptError};

fn unit_square() -> Vec<Location> {
    vec![
        Location::new(0.0, 0.0),
        Location::new(1.0, 0.0),
        Location::new(1.0, 1.0),
        Location::new(0.0, 1.0),
    ]
}

#[test]
fn bfs_solution_replays_to_goal() {
    let mut rng = create_rng(2024);
    for _ in 0..5 {
        let start = Board::random_solvable(&mut rng);
        let solution = solve(&start).unwrap();
        assert_eq!(apply_moves(start, &solution.moves), Some(Board::goal()));

        let last = solution.playback().last().map(|s| s.board).unwrap_or(start);
        assert!(last.is_goal());
    }
}

#[test]
fn bfs_known_optimum() {
    let start: Board = "413726580".parse().unwrap();
    assert_eq!(solve(&start).unwrap().len(), 8);
}

#[test]
fn bfs_rejects_unsolvable_board() {
    let start = Board::parse("123456870").unwrap();
    assert!(matches!(solve(&start), Err(SearchError::Unsolvable(_))));
}

#[test]
fn bfs_node_limit() {
    let start = Board::parse("413726580").unwrap();
    let config = SearchConfig::default().with_max_expanded(3);
    assert!(matches!(
        solve_with(&start, &config),
        Err(SearchError::NodeLimit { limit: 3 })
    ));
}

#[test]
fn ga_unit_square_finds_perimeter() {
    let config = GaConfig::default()
        .with_population_size(20)
        .with_elite_size(4)
        .with_generations(50)
        .with_seed(42);
    let result = solve_tsp(unit_square(), &config).unwrap();

    assert!((result.best_cost - 4.0).abs() < 1e-9, "got {}", result.best_cost);
    assert_eq!(result.cost_history.len(), 51);
    let mut stops = result.best.stops().to_vec();
    stops.sort_unstable();
    assert_eq!(stops, vec![0, 1, 2, 3]);
}

#[test]
fn ga_runner_matches_solve_tsp() {
    let config = GaConfig::default()
        .with_population_size(30)
        .with_elite_size(6)
        .with_generations(20)
        .with_seed(9);
    let problem = TspProblem::new(unit_square()).unwrap();
    let a = GaRunner::run(&problem, &config).unwrap();
    let b = solve_tsp(unit_square(), &config).unwrap();
    assert_eq!(a.best, b.best);
    assert_eq!(a.cost_history, b.cost_history);
}

#[test]
fn ga_coincident_points_report_zero_cost() {
    let points = vec![Location::new(2.0, 2.0); 3];
    let config = GaConfig::default()
        .with_population_size(4)
        .with_elite_size(1)
        .with_generations(1)
        .with_seed(1);
    assert!(matches!(
        solve_tsp(points, &config),
        Err(OptError::ZeroCostTour { .. })
    ));
}

#[test]
fn sa_unit_square_route_finds_perimeter() {
    let matrix = CostMatrix::euclidean(&Locations::new(unit_square()).unwrap());
    let config = SaConfig::default().with_seed(42);
    let result = optimize_route(matrix, vec![0, 2, 1, 3, 0], &config).unwrap();

    assert!((result.initial_cost - (2.0 + 2.0 * 2f64.sqrt())).abs() < 1e-9);
    assert!((result.best_cost - 4.0).abs() < 1e-9, "got {}", result.best_cost);
    assert_eq!(result.best.stops().first(), Some(&0));
    assert_eq!(result.best.stops().last(), Some(&0));
    assert!(result.improvement_percent() > 0.0);
    for w in result.cost_history.windows(2) {
        assert!(w[1] <= w[0]);
    }
}

#[test]
fn sa_asymmetric_matrix() {
    // Clockwise 0->1->2->3->0 costs 1 per leg, everything else costs 10.
    let mut rows = vec![vec![10.0; 4]; 4];
    for i in 0..4 {
        rows[i][i] = 0.0;
        rows[i][(i + 1) % 4] = 1.0;
    }
    let matrix = CostMatrix::from_rows(rows).unwrap();
    let config = SaConfig::default().with_seed(3);
    let result = optimize_route(matrix, vec![0, 3, 2, 1, 0], &config).unwrap();
    assert_eq!(result.best.stops(), &[0, 1, 2, 3, 0]);
    assert_eq!(result.best_cost, 4.0);
}

#[test]
fn sa_rejects_bad_route() {
    let matrix = CostMatrix::euclidean(&Locations::new(unit_square()).unwrap());
    let config = SaConfig::default().with_seed(1);
    assert!(matches!(
        optimize_route(matrix, vec![0, 1, 2, 3], &config),
        Err(OptError::InvalidRoute(_))
    ));
}

#[cfg(feature = "serde")]
#[test]
fn configs_and_results_serialize() {
    let config = GaConfig::default().with_seed(5);
    let json = serde_json::to_string(&config).unwrap();
    let back: GaConfig = serde_json::from_str(&json).unwrap();
    assert_eq!(back, config);

    let solution = solve(&Board::parse("123456078").unwrap()).unwrap();
    let json = serde_json::to_string(&solution).unwrap();
    let back: combopt::search::Solution = serde_json::from_str(&json).unwrap();
    assert_eq!(back, solution);
}

#[cfg(feature = "serde")]
#[test]
fn deserialization_validates_like_constructors() {
    let board: Board = serde_json::from_str("[4,1,3,7,2,6,5,8,0]").unwrap();
    assert_eq!(board, Board::parse("413726580").unwrap());
    assert_eq!(serde_json::to_string(&board).unwrap(), "[4,1,3,7,2,6,5,8,0]");
    assert!(serde_json::from_str::<Board>("[1,1,1,1,1,1,1,1,1]").is_err());
    assert!(serde_json::from_str::<Board>("[1,2,3,4,5,6,7,8,9]").is_err());
    assert!(serde_json::from_str::<Board>(r#"{"cells":[1,2,3,4,5,6,7,8,0],"blank":200}"#).is_err());

    let matrix: CostMatrix = serde_json::from_str("[[0.0,2.0],[3.0,0.0]]").unwrap();
    assert_eq!(matrix, CostMatrix::from_rows(vec![vec![0.0, 2.0], vec![3.0, 0.0]]).unwrap());
    assert!(serde_json::from_str::<CostMatrix>("[[-1.0,2.0],[3.0,0.0]]").is_err());
    assert!(serde_json::from_str::<CostMatrix>("[[0.0,2.0],[3.0]]").is_err());
    assert!(serde_json::from_str::<CostMatrix>(r#"{"n":3,"data":[-1.0,2.0]}"#).is_err());

    // Tours serialize with their cost but are only rebuilt from stops.
    let locations = Locations::new(unit_square()).unwrap();
    let tour = combopt::Tour::cycle(vec![0, 1, 2, 3], &locations);
    let json = serde_json::to_value(&tour).unwrap();
    assert_eq!(json["stops"], serde_json::json!([0, 1, 2, 3]));
    assert_eq!(json["cost"], serde_json::json!(4.0));
}
