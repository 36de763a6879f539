#[cfg(test)]
mod tests {
    use glam::Vec2;
    use rand::SeedableRng;
    use rand_chacha::ChaCha8Rng;

    use arena_core::enums::*;
    use arena_core::events::DirectorEvent;
    use arena_core::state::ArenaSnapshot;
    use arena_core::types::{EnemyId, PlayerId};
    use arena_core::waves::{EnemySpawnDescriptor, LevelDefinition, WaveDefinition};
    use arena_core::ConfigError;
    use arena_director::EncounterError;

    use crate::engine::{ArenaEngine, SimConfig};
    use crate::error::EngineError;
    use crate::systems;
    use crate::world_setup;
    use crate::GameMode;

    fn engine() -> ArenaEngine {
        ArenaEngine::new(SimConfig::default()).unwrap()
    }

    fn walker_wave(count: usize, at: Vec2) -> WaveDefinition {
        WaveDefinition::uniform(EnemySpawnDescriptor::new(EnemyKind::Walker, at), count)
    }

    fn live_ids(engine: &ArenaEngine) -> Vec<EnemyId> {
        engine.snapshot().enemies.iter().map(|e| e.id).collect()
    }

    /// Kill enemies of the active wave until it completes.
    fn clear_wave(engine: &mut ArenaEngine) {
        for id in live_ids(engine) {
            if engine.director().state().runner.phase() != RunnerPhase::WaveActive {
                break;
            }
            if !engine.director().state().runner.is_tracking(id) {
                continue;
            }
            engine.damage_enemy(id, 10_000, Some(PlayerId(0))).unwrap();
        }
    }

    fn has(snapshot: &ArenaSnapshot, pred: impl Fn(&DirectorEvent) -> bool) -> bool {
        snapshot.events.iter().any(pred)
    }

    // ---- Spawning ----

    #[test]
    fn test_enemies_spawn_from_descriptors() {
        let mut engine = engine();
        let wave = WaveDefinition::new(vec![
            EnemySpawnDescriptor::new(EnemyKind::Walker, Vec2::new(200.0, 200.0)),
            EnemySpawnDescriptor::new(EnemyKind::Fast, Vec2::new(300.0, 200.0)).with_health(50),
        ]);
        engine.start(GameMode::Scripted(LevelDefinition::new(vec![
            wave,
            walker_wave(3, Vec2::new(100.0, 100.0)),
        ])));

        let snapshot = engine.tick(0);
        assert_eq!(snapshot.enemies.len(), 2);
        assert_eq!(snapshot.enemies[0].kind, EnemyKind::Walker);
        assert_eq!(snapshot.enemies[0].max_health, 300);
        assert_eq!(snapshot.enemies[1].max_health, 50);
        assert!(has(&snapshot, |e| matches!(
            e,
            DirectorEvent::Announcement { text, .. } if text == "Wave 1"
        )));
    }

    #[test]
    fn test_enemy_ids_round_trip() {
        let mut engine = engine();
        engine.start(GameMode::Scripted(LevelDefinition::new(vec![walker_wave(
            5,
            Vec2::new(100.0, 100.0),
        )])));
        for id in live_ids(&engine) {
            let entity = world_setup::enemy_entity(id).unwrap();
            assert_eq!(world_setup::enemy_id(entity), id);
            assert!(engine.director().state().runner.is_tracking(id));
        }
    }

    #[test]
    fn test_invalid_descriptor_is_written_off() {
        let mut engine = engine();
        let mut wave = walker_wave(4, Vec2::new(100.0, 100.0));
        wave.enemies
            .push(EnemySpawnDescriptor::new(EnemyKind::Fast, Vec2::new(f32::NAN, 0.0)));
        wave.enemies
            .push(EnemySpawnDescriptor::new(EnemyKind::Walker, Vec2::ZERO).with_health(0));
        engine.start(GameMode::Scripted(LevelDefinition::new(vec![
            wave,
            walker_wave(1, Vec2::ZERO),
        ])));

        let snapshot = engine.tick(0);
        assert_eq!(snapshot.enemies.len(), 4);
        let failures = snapshot
            .events
            .iter()
            .filter(|e| matches!(e, DirectorEvent::SpawnFailed { .. }))
            .count();
        assert_eq!(failures, 2);
        assert_eq!(snapshot.encounter.runner.total_in_wave, 6);
        assert_eq!(snapshot.encounter.runner.enemies_remaining, 4);
    }

    // ---- Movement ----

    #[test]
    fn test_enemies_chase_nearest_player() {
        let mut engine = engine();
        let start = Vec2::new(100.0, 600.0);
        engine.start(GameMode::Scripted(LevelDefinition::new(vec![walker_wave(
            2, start,
        )])));
        let player = engine.snapshot().players[0].position;

        let snapshot = engine.tick(1000);
        let moved = snapshot.enemies[0].position;
        let before = start.distance(player);
        let after = moved.distance(player);
        assert!((before - after - 75.0).abs() < 1e-3);
    }

    #[test]
    fn test_enemies_stop_at_contact_distance() {
        let mut engine = engine();
        engine.start(GameMode::Scripted(LevelDefinition::new(vec![walker_wave(
            2,
            Vec2::new(700.0, 600.0),
        )])));
        let player = engine.snapshot().players[0].position;

        let snapshot = engine.tick(5000);
        let distance = snapshot.enemies[0].position.distance(player);
        assert!((distance - arena_core::constants::CHASE_STOP_DISTANCE).abs() < 1e-3);
    }

    #[test]
    fn test_move_player() {
        let mut engine = engine();
        engine
            .move_player(PlayerId(0), Vec2::new(10.0, 20.0))
            .unwrap();
        assert_eq!(engine.snapshot().players[0].position, Vec2::new(10.0, 20.0));
        assert!(matches!(
            engine.move_player(PlayerId(9), Vec2::ZERO),
            Err(EngineError::UnknownPlayer(PlayerId(9)))
        ));
    }

    // ---- Damage and rewards ----

    #[test]
    fn test_kill_notifies_director_and_credits_experience() {
        let mut engine = engine();
        engine.start(GameMode::Scripted(LevelDefinition::new(vec![
            walker_wave(20, Vec2::new(100.0, 100.0)),
            walker_wave(20, Vec2::new(100.0, 100.0)),
        ])));

        let ids = live_ids(&engine);
        let hit = engine.damage_enemy(ids[0], 100, None).unwrap();
        assert_eq!(hit.current, 200);
        assert!(!hit.depleted);

        for id in &ids[..10] {
            engine.damage_enemy(*id, 300, Some(PlayerId(0))).unwrap();
        }
        assert_eq!(engine.director().state().runner.enemies_remaining(), 10);
        assert_eq!(engine.experience().progress(PlayerId(0)).level, 2);

        let snapshot = engine.tick(0);
        assert_eq!(snapshot.enemies.len(), 10);
        assert_eq!(snapshot.players[0].experience, 100);
        assert!(has(&snapshot, |e| *e
            == DirectorEvent::LevelUp {
                player: PlayerId(0),
                level: 2
            }));
    }

    #[test]
    fn test_damage_to_unknown_enemy_is_an_error() {
        let mut engine = engine();
        engine.start(GameMode::Scripted(LevelDefinition::new(vec![walker_wave(
            3,
            Vec2::new(100.0, 100.0),
        )])));
        let id = live_ids(&engine)[0];
        engine.damage_enemy(id, 10_000, None).unwrap();

        assert!(matches!(
            engine.damage_enemy(id, 1, None),
            Err(EngineError::UnknownEnemy(_))
        ));
        assert!(matches!(
            engine.damage_enemy(EnemyId(0), 1, None),
            Err(EngineError::UnknownEnemy(_))
        ));
    }

    #[test]
    fn test_drop_rate_and_kinds() {
        let mut rng = ChaCha8Rng::seed_from_u64(17);
        let drops: Vec<PowerupKind> = (0..2000)
            .filter_map(|_| systems::damage::roll_drop(&mut rng, EnemyKind::Walker, Vec2::ZERO))
            .map(|event| match event {
                DirectorEvent::PowerupDropped { kind, .. } => kind,
                other => panic!("unexpected event {other:?}"),
            })
            .collect();
        assert!((300..500).contains(&drops.len()), "got {} drops", drops.len());
        for kind in PowerupKind::ALL {
            assert!(drops.contains(&kind), "{kind:?} never dropped");
        }
    }

    // ---- Full encounter ----

    #[test]
    fn test_opening_level_ends_in_one_full_health_boss() {
        let mut engine = engine();
        engine.start_opening_level();

        for wave in 0..3 {
            assert_eq!(engine.director().state().runner.wave_index(), wave);
            clear_wave(&mut engine);
            if wave < 2 {
                engine.tick(2000);
            }
        }
        let snapshot = engine.tick(2999);
        assert!(snapshot.encounter.boss.is_none());
        assert!(has(&snapshot, |e| matches!(e, DirectorEvent::BossWarning { .. })));

        let snapshot = engine.tick(1);
        let boss = snapshot.encounter.boss.expect("boss spawned");
        assert!(boss.parts.iter().all(|p| p.health == 6000 && p.max_health == 6000));
        assert!(!boss.defeated);
    }

    #[test]
    fn test_boss_head_fires_at_player() {
        let mut engine = engine();
        engine.start(GameMode::Scripted(LevelDefinition::default()));
        engine.tick(3000);
        assert!(engine.director().boss().is_some());
        let player = engine.snapshot().players[0].position;

        // Fire frame is entered at 5000; the shot leaves 500 ms later.
        let first = engine.tick(1000);
        assert!(first.projectiles.is_empty());
        let second = engine.tick(1000);
        assert!(has(&second, |e| matches!(e, DirectorEvent::TelegraphStarted { .. })));
        assert!(!has(&second, |e| matches!(e, DirectorEvent::ProjectileFired { .. })));
        assert!(second.projectiles.is_empty());

        let third = engine.tick(1000);
        assert!(has(&third, |e| matches!(e, DirectorEvent::ProjectileFired { .. })));
        assert_eq!(third.projectiles.len(), 1);
        let shot = third.projectiles[0];
        assert_eq!(shot.target, player);
        assert_eq!(shot.origin, engine.director().boss().unwrap().layout().muzzle);
        assert!((shot.velocity.length() - 350.0).abs() < 1e-2);

        // Drained: the next snapshot starts empty.
        assert!(engine.tick(0).projectiles.is_empty());
    }

    #[test]
    fn test_telegraph_window_independent_of_tick_length() {
        let warning = SimConfig::default().director.telegraph_warning_ms;
        for dt in [10, 50, 250, 500] {
            let mut engine = engine();
            engine.start(GameMode::Scripted(LevelDefinition::default()));
            let mut started_at = None;
            let mut fired_at = None;
            while fired_at.is_none() && engine.director().now() < 10_000 {
                let snapshot = engine.tick(dt);
                let now = snapshot.encounter.now_ms;
                if started_at.is_none()
                    && has(&snapshot, |e| matches!(e, DirectorEvent::TelegraphStarted { .. }))
                {
                    started_at = Some(now);
                }
                if has(&snapshot, |e| matches!(e, DirectorEvent::ProjectileFired { .. })) {
                    fired_at = Some(now);
                }
            }
            assert_eq!(started_at, Some(5000), "dt={dt}");
            assert_eq!(fired_at, Some(5000 + warning), "dt={dt}");
        }
    }

    #[test]
    fn test_boss_defeat_through_engine() {
        let mut engine = engine();
        assert!(matches!(
            engine.damage_boss_part(BossPartId::EyeLeft, 10),
            Err(EngineError::Encounter(EncounterError::NoActiveBoss))
        ));

        engine.start(GameMode::Scripted(LevelDefinition::default()));
        engine.tick(3000);
        engine.damage_boss_part(BossPartId::EyeLeft, 6000).unwrap();
        let hit = engine.damage_boss_part(BossPartId::EyeRight, 6000).unwrap();
        assert!(hit.defeated);

        let snapshot = engine.tick(16);
        assert!(has(&snapshot, |e| *e == DirectorEvent::BossDefeated));
        assert!(has(&snapshot, |e| *e == DirectorEvent::EncounterComplete));
        assert!(snapshot.encounter.boss.unwrap().defeated);
    }

    #[test]
    fn test_facing_tracks_player() {
        let mut engine = engine();
        engine.start(GameMode::Scripted(LevelDefinition::default()));
        engine.tick(3000);

        engine.move_player(PlayerId(0), Vec2::new(0.0, 1100.0)).unwrap();
        let snapshot = engine.tick(16);
        let boss = snapshot.encounter.boss.unwrap();
        assert_eq!(boss.head_frame, FacingFrame::LookLeft);
        let right_eye = boss.parts.iter().find(|p| p.part == BossPartId::EyeRight).unwrap();
        assert_eq!(right_eye.frame, FacingFrame::LookLeft);

        engine.move_player(PlayerId(0), Vec2::new(800.0, 1100.0)).unwrap();
        let boss = engine.tick(16).encounter.boss.unwrap();
        assert_eq!(boss.head_frame, FacingFrame::LookDown);
    }

    // ---- Determinism and config ----

    #[test]
    fn test_same_seed_same_snapshots() {
        let run = |seed: u64| {
            let mut engine = ArenaEngine::new(SimConfig {
                seed,
                ..SimConfig::default()
            })
            .unwrap();
            engine.start(GameMode::Campaign { start_level: 2 });
            let mut out = Vec::new();
            for _ in 0..20 {
                if let Some(id) = live_ids(&engine).first().copied() {
                    engine.damage_enemy(id, 10_000, None).unwrap();
                }
                out.push(serde_json::to_string(&engine.tick(250)).unwrap());
            }
            out
        };
        assert_eq!(run(9), run(9));
        assert_ne!(run(9), run(10));
    }

    #[test]
    fn test_config_from_json() {
        let config =
            SimConfig::from_json(r#"{"seed": 5, "director": {"stagger_step": 500}}"#).unwrap();
        assert_eq!(config.seed, 5);
        assert_eq!(config.players, 1);
        assert_eq!(config.director.stagger_step, 500);
        assert_eq!(config.director.pre_boss_delay_ms, 3000);

        assert!(matches!(
            SimConfig::from_json(r#"{"director": {"stagger_step": 0}}"#),
            Err(EngineError::Config(ConfigError::ZeroStaggerStep))
        ));
        assert!(matches!(
            SimConfig::from_json("not json"),
            Err(EngineError::Config(ConfigError::Json(_)))
        ));
    }

    #[test]
    fn test_players_spawn_around_centre() {
        let engine = ArenaEngine::new(SimConfig {
            players: 3,
            ..SimConfig::default()
        })
        .unwrap();
        let players = engine.snapshot().players;
        assert_eq!(players.len(), 3);
        assert_eq!(players[1].position, Vec2::new(800.0, 600.0));
        assert_eq!(players[0].position.x + players[2].position.x, 1600.0);
    }
}
