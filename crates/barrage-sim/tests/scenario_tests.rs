use barrage_sim::assets::{AssetCache, StaticAssets};
use barrage_sim::core::commands::PlayerCommand;
use barrage_sim::core::components::Battery;
use barrage_sim::core::config::GameConfig;
use barrage_sim::core::constants::DT;
use barrage_sim::core::enums::*;
use barrage_sim::core::error::GameError;
use barrage_sim::core::events::GameEvent;
use barrage_sim::core::state::GameStateSnapshot;
use barrage_sim::core::types::SceneHandle;
use barrage_sim::layout::TheatreLayout;
use barrage_sim::systems::heat;
use barrage_sim::SimulationEngine;
use glam::Vec3;

/// Contacts are reported by hand, as a host physics engine would.
fn host_physics_config() -> GameConfig {
    GameConfig {
        builtin_physics: false,
        battery_selection: BatterySelection::RoundRobin,
        ..Default::default()
    }
}

fn start(config: GameConfig, layout: TheatreLayout) -> SimulationEngine {
    let assets = AssetCache::load(&StaticAssets::complete()).unwrap();
    let mut engine = SimulationEngine::new(config, assets, layout).unwrap();
    engine.queue_command(PlayerCommand::StartSession);
    engine.tick(DT);
    engine
}

fn spawned(snapshot: &GameStateSnapshot, kind: EntityKind) -> Vec<SceneHandle> {
    snapshot
        .events
        .iter()
        .filter_map(|e| match e {
            GameEvent::Spawned { handle, kind: k, .. } if *k == kind => Some(*handle),
            _ => None,
        })
        .collect()
}

fn projectile_state(snapshot: &GameStateSnapshot, handle: SceneHandle) -> Option<ProjectileState> {
    snapshot
        .projectiles
        .iter()
        .find(|p| p.handle == handle)
        .map(|p| p.state)
}

#[test]
fn five_instant_shots_fire_and_the_sixth_misfires() {
    let layout = TheatreLayout {
        batteries: vec![Vec3::new(0.0, 0.5, 0.0)],
        ..TheatreLayout::default_theatre()
    };
    let mut engine = start(host_physics_config(), layout);
    let target = Vec3::new(-5.0, 5.0, 0.0);

    let results: Vec<bool> = (0..6).map(|_| engine.fire_at(target).is_some()).collect();
    assert_eq!(results, vec![true, true, true, true, true, false]);

    let snap = engine.tick(DT);
    assert_eq!(snap.projectiles.len(), 5);
    assert!(snap.batteries[0].overheated);
    assert_eq!(snap.score.misfires, 1);
}

#[test]
fn five_seconds_of_cooling_clears_an_overheated_battery() {
    let config = GameConfig::default();
    let mut battery = Battery::default();
    for _ in 0..5 {
        heat::try_fire(&mut battery, &config).unwrap();
    }
    assert!(matches!(
        heat::try_fire(&mut battery, &config),
        Err(GameError::Overheated { .. })
    ));
    assert!(battery.overheated);

    for _ in 0..5 {
        heat::cool(&mut battery, 1.0, &config);
    }
    assert_eq!(battery.heat, 0.0);
    assert!(!battery.overheated);
}

#[test]
fn enemy_missile_hitting_a_house_costs_ten_points() {
    let config = GameConfig {
        enemy_fire_interval: 0.25,
        ..host_physics_config()
    };
    let mut engine = start(config, TheatreLayout::default_theatre());

    let mut enemy = None;
    let mut houses = Vec::new();
    for _ in 0..60 {
        let snap = engine.tick(DT);
        houses = snap.buildings.clone();
        enemy = snap.events.iter().find_map(|e| match e {
            GameEvent::Launched {
                handle,
                owner: Owner::Enemy,
                ..
            } => Some(*handle),
            _ => None,
        });
        if enemy.is_some() {
            break;
        }
    }
    let enemy = enemy.expect("enemy should launch within a second");
    let house = houses[3].clone();

    assert!(engine.report_contact(enemy, house.handle));
    let snap = engine.tick(DT);

    assert_eq!(snap.score.score, -10);
    assert!(snap.buildings.iter().all(|b| b.handle != house.handle));
    assert_eq!(projectile_state(&snap, enemy), Some(ProjectileState::Exploding));
}

#[test]
fn player_missile_reaching_its_marker_keeps_score() {
    let mut engine = start(host_physics_config(), TheatreLayout::default_theatre());
    let missile = engine.fire_at(Vec3::new(-3.0, 6.0, 2.0)).unwrap();
    let snap = engine.tick(DT);
    let marker = spawned(&snap, EntityKind::TargetMarker)[0];

    engine.report_contact(missile, marker);
    let snap = engine.tick(DT);

    assert_eq!(projectile_state(&snap, missile), Some(ProjectileState::Exploding));
    assert!(snap
        .events
        .contains(&GameEvent::Despawned { handle: marker }));
    assert_eq!(snap.score.score, 0);

    // A repeat report for the exploding missile changes nothing.
    assert!(!engine.report_contact(missile, marker));
    let snap = engine.tick(DT);
    assert!(!snap
        .events
        .iter()
        .any(|e| matches!(e, GameEvent::Explosion { .. } | GameEvent::ScoreChanged { .. })));
}

#[test]
fn projectile_states_only_move_forward() {
    let config = GameConfig {
        seed: 9,
        enemy_fire_interval: 0.5,
        ..Default::default()
    };
    let mut engine = start(config, TheatreLayout::default_theatre());
    let order = |s: ProjectileState| match s {
        ProjectileState::InFlight => 0,
        ProjectileState::Exploding => 1,
        ProjectileState::Finished => 2,
    };

    let mut seen: std::collections::HashMap<SceneHandle, u8> = Default::default();
    for i in 0..(15 * 60) {
        if i % 25 == 0 {
            let z = (i % 11) as f32 - 5.0;
            engine.fire_at(Vec3::new(-6.0, 5.0, z));
        }
        let snap = engine.tick(DT);
        for p in &snap.projectiles {
            let now = order(p.state);
            if let Some(prev) = seen.insert(p.handle, now) {
                assert!(now >= prev, "{} went from {prev} to {now}", p.handle);
            }
        }
    }
    assert!(!seen.is_empty());
}

#[test]
fn heat_stays_within_bounds_under_random_fire() {
    use rand::{Rng, SeedableRng};
    let mut rng = rand_chacha::ChaCha8Rng::seed_from_u64(77);
    let mut engine = start(GameConfig::default(), TheatreLayout::default_theatre());
    let max_temp = engine.config().max_temp;

    for _ in 0..(20 * 60) {
        for _ in 0..rng.gen_range(0..3) {
            let target = Vec3::new(rng.gen_range(-10.0..0.0), rng.gen_range(1.0..8.0), 0.0);
            engine.fire_at(target);
        }
        let snap = engine.tick(DT);
        for battery in &snap.batteries {
            assert!(battery.heat >= 0.0);
            assert!(battery.heat <= max_temp);
            if battery.heat == 0.0 {
                assert!(!battery.overheated);
            }
        }
    }
}
