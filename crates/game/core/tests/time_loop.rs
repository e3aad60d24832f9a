//! End-to-end rules over several turns and loops, driven only through
//! `GameEngine`.

use tactics_core::{
    ActionResult, GameConfig, GameEngine, GameEnv, GameState, KnowledgeCategory, Position,
    Scenario, UnitId,
};

struct Fixture {
    config: GameConfig,
    scenario: Scenario,
    state: GameState,
}

impl Fixture {
    fn new() -> Self {
        Self::with_config(GameConfig::default())
    }

    fn with_config(config: GameConfig) -> Self {
        let scenario = Scenario::default();
        let state = GameState::from_scenario(&scenario, &config);
        Self {
            config,
            scenario,
            state,
        }
    }

    fn engine(&mut self) -> (GameEngine<'_>, GameEnv<'_>) {
        (
            GameEngine::new(&mut self.state),
            GameEnv::new(&self.config, &self.scenario),
        )
    }

    /// Walks the player from (1, 7) to (6, 2), adjacent to Shadow.
    fn walk_to_shadow(&mut self) {
        let (mut engine, env) = self.engine();
        for step in [(2, 6), (3, 5), (4, 4), (5, 3), (6, 2)] {
            engine.select_unit(env, UnitId::PLAYER).unwrap();
            engine
                .move_unit(env, Position::new(step.0, step.1))
                .unwrap();
            engine.end_turn(env).unwrap();
        }
    }
}

#[test]
fn attack_from_the_start_is_a_no_op() {
    let mut fixture = Fixture::new();
    let before = fixture.state.clone();

    let (mut engine, env) = fixture.engine();
    let err = engine.attack(env).unwrap_err();

    assert!(err.is_rejection());
    assert_eq!(fixture.state, before);
}

#[test]
fn second_move_in_a_turn_is_rejected() {
    let mut fixture = Fixture::new();
    let (mut engine, env) = fixture.engine();

    engine.select_unit(env, UnitId::PLAYER).unwrap();
    engine.move_unit(env, Position::new(1, 6)).unwrap();
    let err = engine.move_unit(env, Position::new(1, 5)).unwrap_err();

    assert!(err.is_rejection());
    assert_eq!(fixture.state.player.position, Position::new(1, 6));
    assert_eq!(fixture.state.action_history.current().len(), 1);
}

#[test]
fn repeated_attacks_evolve_shadow_at_loop_end() {
    let mut fixture = Fixture::new();
    fixture.walk_to_shadow();

    let (mut engine, env) = fixture.engine();
    for expected_hp in [50, 40, 30, 20] {
        let outcome = engine.attack(env).unwrap();
        match outcome.result {
            ActionResult::Attacked(attack) => assert_eq!(attack.hp_after, expected_hp),
            other => panic!("unexpected result {other:?}"),
        }
    }

    let outcome = engine.complete_loop(env).unwrap();
    let summary = match outcome.result {
        ActionResult::LoopCompleted(summary) => summary,
        other => panic!("unexpected result {other:?}"),
    };
    assert_eq!(summary.evolved.len(), 1);
    assert_eq!(summary.evolved[0].name, "Shadow");

    let state = &fixture.state;
    let shadow = state.enemy(UnitId(1)).unwrap();
    assert_eq!(shadow.evolution_level, 1);
    assert_eq!(shadow.unit.max_hp, 80);
    assert_eq!(shadow.unit.hp, 80);
    assert_eq!(shadow.unit.attack, 15);
    assert_eq!(shadow.unit.defense, 7);
    assert_eq!(shadow.unit.position, Position::new(6, 1));

    let sentinel = state.enemy(UnitId(2)).unwrap();
    assert_eq!(sentinel.evolution_level, 0);
    assert_eq!(state.player.position, Position::new(1, 7));
}

#[test]
fn defeated_enemy_returns_next_loop_unevolved() {
    let mut fixture = Fixture::new();
    fixture.walk_to_shadow();

    let (mut engine, env) = fixture.engine();
    for _ in 0..6 {
        engine.attack(env).unwrap();
    }
    assert!(fixture.state.enemy(UnitId(1)).is_none());
    assert_eq!(fixture.state.knowledge.len(), 1);

    let (mut engine, env) = fixture.engine();
    engine.complete_loop(env).unwrap();

    let state = &fixture.state;
    let shadow = state.enemy(UnitId(1)).unwrap();
    assert_eq!(shadow.evolution_level, 0);
    assert_eq!(shadow.unit.hp, 60);
    assert_eq!(shadow.unit.position, Position::new(6, 1));

    let descriptions: Vec<_> = state
        .knowledge
        .iter()
        .map(|entry| entry.description.as_str())
        .collect();
    assert_eq!(
        descriptions,
        [
            "Defeated Shadow. They will remember this in the next loop.",
            "Loop 1 completed. Enemies have adapted to your strategies.",
        ]
    );
    assert!(
        state
            .knowledge
            .iter()
            .all(|entry| entry.category == KnowledgeCategory::EnemyPattern)
    );
}

#[test]
fn loop_completion_appends_exactly_one_log_and_entry() {
    let mut fixture = Fixture::new();
    let (mut engine, env) = fixture.engine();

    engine.complete_loop(env).unwrap();
    engine.complete_loop(env).unwrap();

    let state = &fixture.state;
    assert_eq!(state.current_loop, 3);
    assert_eq!(state.action_history.loop_count(), 3);
    assert_eq!(state.knowledge.len(), 2);
    assert_eq!(state.knowledge.entries()[1].loop_discovered, 2);
}

#[test]
fn draining_the_clock_exhausts_the_loop() {
    let mut fixture = Fixture::with_config(GameConfig::with_loop_duration(5));
    let (mut engine, env) = fixture.engine();

    let mut expiries = 0;
    for _ in 0..5 {
        if engine.tick(env).unwrap().result.is_expired_tick() {
            expiries += 1;
        }
    }
    assert_eq!(expiries, 1);
    assert!(engine.tick(env).unwrap_err().is_rejection());

    engine.complete_loop(env).unwrap();
    assert_eq!(fixture.state.time_remaining, 5);
    assert_eq!(fixture.state.current_loop, 2);
}

#[test]
fn countdown_view_tracks_ticks() {
    let mut fixture = Fixture::new();
    let (mut engine, env) = fixture.engine();
    engine.tick(env).unwrap();

    let view = fixture.state.countdown(&fixture.config);
    assert_eq!(view.to_string(), "29:59");
    assert!(!view.critical);
}
