use grid_snake::game::{
    Coordinate, Direction, Food, FoodSpawnPolicy, GameConfig, GridSpace, ReversalPolicy,
    RoundState, SimulationEngine, Snake,
};
use rand::rngs::SmallRng;
use rand::{Rng, SeedableRng};

fn scenario_engine(seed: u64) -> SimulationEngine {
    let snake = Snake::new(Coordinate::new(5, 5), Direction::Right, 3);
    SimulationEngine::with_snake(&GameConfig::small(), snake, SmallRng::seed_from_u64(seed))
        .expect("10x10 scenario is valid")
}

fn coords(cells: &[(i32, i32)]) -> Vec<Coordinate> {
    cells.iter().copied().map(Coordinate::from).collect()
}

#[test]
fn scenario_eating_food_grows_head_first() {
    let mut engine = scenario_engine(1);
    engine.place_food(Coordinate::new(6, 5));

    let result = engine.tick();

    assert!(result.info.ate_food);
    assert_eq!(
        engine.snake().segments(),
        coords(&[(6, 5), (5, 5), (4, 5), (3, 5)]).as_slice()
    );
    let food = engine.food();
    assert!(food.is_visible());
    assert_ne!(food.position(), Coordinate::new(6, 5));
    assert!(engine.grid().contains(food.position()));
}

#[test]
fn scenario_plain_move_shifts_body() {
    let mut engine = scenario_engine(2);
    engine.place_food(Coordinate::new(1, 8));

    engine.tick();

    assert_eq!(
        engine.snake().segments(),
        coords(&[(6, 5), (5, 5), (4, 5)]).as_slice()
    );
}

#[test]
fn scenario_force_food_grows_anywhere() {
    let mut engine = scenario_engine(3);
    engine.place_food(Coordinate::new(1, 8));
    engine.request_food();

    let result = engine.tick();

    assert!(result.info.forced_growth);
    assert_eq!(
        engine.snake().segments(),
        coords(&[(6, 5), (5, 5), (4, 5), (3, 5)]).as_slice()
    );
}

#[test]
fn wall_freezes_head_without_game_over() {
    let mut engine = scenario_engine(4);
    let wall_x = engine.grid().up_bound().x - 2;

    // Drive right until the head reaches the last playable column
    for _ in 0..20 {
        engine.tick();
    }
    assert_eq!(engine.snake().head().x, wall_x);

    for _ in 0..50 {
        let result = engine.tick();
        assert!(result.info.blocked);
        assert_eq!(engine.snake().head().x, wall_x);
        assert_eq!(engine.state(), RoundState::Running);
    }
}

#[test]
fn self_collision_ends_round_on_matching_tick() {
    let snake = Snake::new(Coordinate::new(5, 5), Direction::Right, 4);
    let mut engine =
        SimulationEngine::with_snake(&GameConfig::small(), snake, SmallRng::seed_from_u64(5))
            .unwrap();
    engine.place_food(Coordinate::new(8, 8));

    engine.tick();
    engine.set_direction(Direction::Down).unwrap();
    engine.tick();
    engine.set_direction(Direction::Left).unwrap();
    engine.tick();
    assert_eq!(engine.state(), RoundState::Running);

    engine.set_direction(Direction::Up).unwrap();
    let result = engine.tick();

    assert!(result.info.self_collision);
    assert_eq!(engine.state(), RoundState::GameOver);
    assert!(!engine.snapshot().is_running());
}

#[test]
fn food_refresh_stays_in_interior() {
    let grid = GridSpace::new(72, 20).unwrap();
    let mut rng = SmallRng::seed_from_u64(0xF00D);
    let mut food = Food::hidden();

    for _ in 0..10_000 {
        food.refresh(&grid, &mut rng);
        let pos = food.position();
        assert!((1..=70).contains(&pos.x), "x out of range: {pos:?}");
        assert!((1..=18).contains(&pos.y), "y out of range: {pos:?}");
    }
}

#[test]
fn same_seed_same_food_sequence() {
    let config = GameConfig::default().with_seed(42);
    let mut a = SimulationEngine::new(&config).unwrap();
    let mut b = SimulationEngine::new(&config).unwrap();

    for _ in 0..10 {
        assert_eq!(a.food(), b.food());
        a.request_food();
        b.request_food();
        a.tick();
        b.tick();
    }
}

/// Random walks under every policy combination keep the length and step invariants.
#[test]
fn random_walks_keep_invariants() {
    let mut driver = SmallRng::seed_from_u64(0xC0FFEE);

    for (reversal, spawn) in [
        (ReversalPolicy::Reject, FoodSpawnPolicy::AvoidSnake),
        (ReversalPolicy::Allow, FoodSpawnPolicy::Anywhere),
    ] {
        for seed in 0..20 {
            let mut config = GameConfig::new(16, 12).with_seed(seed);
            config.reversal_policy = reversal;
            config.food_spawn = spawn;
            let mut engine = SimulationEngine::new(&config).unwrap();

            for _ in 0..300 {
                if !engine.is_running() {
                    break;
                }

                let dir = Direction::ALL[driver.gen_range(0..4)];
                let _ = engine.set_direction(dir);
                if driver.gen_bool(0.05) {
                    engine.request_food();
                }

                let len_before = engine.snake().len();
                let head_before = engine.snake().head();
                let result = engine.tick();
                let head_after = engine.snake().head();

                assert!(engine.snake().len() >= len_before);
                assert_eq!(engine.snake().len(), 3 + engine.score() as usize);
                if result.info.blocked {
                    assert_eq!(head_after, head_before);
                } else {
                    assert_eq!(head_before.manhattan_distance(head_after), 1);
                    assert!(engine.grid().contains(head_after));
                }

                if engine.is_running() {
                    let segments = engine.snake().segments();
                    for (i, a) in segments.iter().enumerate() {
                        assert!(!segments[i + 1..].contains(a), "duplicate segment {a:?}");
                    }
                }
            }
        }
    }
}

#[test]
fn reset_starts_a_fresh_round() {
    let mut config = GameConfig::small().with_seed(8);
    config.reversal_policy = ReversalPolicy::Allow;
    let mut engine = SimulationEngine::new(&config).unwrap();
    let start = engine.snake().clone();

    engine.set_direction(Direction::Left).unwrap();
    engine.tick();
    assert_eq!(engine.state(), RoundState::GameOver);

    engine.reset();

    assert_eq!(engine.state(), RoundState::Running);
    assert_eq!(engine.snake(), &start);
    assert_eq!(engine.snake().direction(), Direction::Right);
    assert!(engine.food().is_visible());
}
