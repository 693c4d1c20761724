use glam::Vec3;

use crate::commands::PlayerCommand;
use crate::config::GameConfig;
use crate::enums::*;
use crate::error::GameError;
use crate::events::GameEvent;
use crate::state::GameStateSnapshot;
use crate::types::{Position, SceneHandle, SimTime, Velocity};

// ---- Enums ----

#[test]
fn test_projectile_state_only_moves_forward() {
    use ProjectileState::*;
    assert!(InFlight.can_advance_to(Exploding));
    assert!(Exploding.can_advance_to(Finished));

    assert!(!InFlight.can_advance_to(Finished), "must not skip Exploding");
    assert!(!Exploding.can_advance_to(InFlight));
    assert!(!Finished.can_advance_to(Exploding));
    assert!(!Finished.can_advance_to(InFlight));
    assert!(!Exploding.can_advance_to(Exploding));
}

#[test]
fn test_collision_category_bits_are_distinct() {
    let all = [
        CollisionCategory::Floor,
        CollisionCategory::PlayerMissile,
        CollisionCategory::EnemyMissile,
        CollisionCategory::Building,
        CollisionCategory::TargetMarker,
        CollisionCategory::ExplosionVolume,
        CollisionCategory::TargetPane,
    ];
    let mut seen = 0u32;
    for c in all {
        assert_eq!(c.bit().count_ones(), 1);
        assert_eq!(seen & c.bit(), 0, "{c:?} reuses a bit");
        seen |= c.bit();
    }
    assert_eq!(CollisionCategory::EnemyMissile.bit(), 4);
    assert_eq!(CollisionCategory::ExplosionVolume.bit(), 32);
}

#[test]
fn test_battery_selection_serde_snake_case() {
    let json = serde_json::to_string(&BatterySelection::RoundRobin).unwrap();
    assert_eq!(json, "\"round_robin\"");
    let back: BatterySelection = serde_json::from_str("\"random\"").unwrap();
    assert_eq!(back, BatterySelection::Random);
}

// ---- Types ----

#[test]
fn test_position_helpers() {
    let a = Position::new(0.0, 0.0, 0.0);
    let b = Position::new(3.0, 4.0, 0.0);
    assert!((a.range_to(&b) - 5.0).abs() < 1e-6);

    let dir = a.direction_to(&b);
    assert!((dir.length() - 1.0).abs() < 1e-6);
    assert_eq!(a.direction_to(&a), Vec3::ZERO);

    let v = Velocity::towards(&a, &b, 10.0);
    assert!((v.speed() - 10.0).abs() < 1e-5);
    assert!((v.0.x - 6.0).abs() < 1e-5);
}

#[test]
fn test_sim_time_advance() {
    let mut t = SimTime::default();
    t.advance(0.25);
    t.advance(0.25);
    assert_eq!(t.tick, 2);
    assert!((t.elapsed_secs - 0.5).abs() < 1e-12);
}

#[test]
fn test_scene_handle_display() {
    assert_eq!(SceneHandle(17).to_string(), "N17");
}

// ---- Commands / events ----

#[test]
fn test_player_command_tagged_json() {
    let cmd = PlayerCommand::FireAt {
        target: Vec3::new(1.0, 2.0, 3.0),
    };
    let json = serde_json::to_string(&cmd).unwrap();
    assert!(json.contains("\"type\":\"FireAt\""));

    let back: PlayerCommand = serde_json::from_str(&json).unwrap();
    match back {
        PlayerCommand::FireAt { target } => assert_eq!(target, Vec3::new(1.0, 2.0, 3.0)),
        other => panic!("unexpected command {other:?}"),
    }

    let start: PlayerCommand = serde_json::from_str(r#"{"type":"StartSession"}"#).unwrap();
    assert!(matches!(start, PlayerCommand::StartSession));

    let confirm: PlayerCommand = serde_json::from_str(r#"{"type":"ConfirmPlacement"}"#).unwrap();
    assert!(matches!(confirm, PlayerCommand::ConfirmPlacement));
}

#[test]
fn test_snapshot_serializes_with_events() {
    let snap = GameStateSnapshot {
        events: vec![GameEvent::ScoreChanged {
            delta: -10,
            total: -10,
        }],
        ..Default::default()
    };
    let json = serde_json::to_string(&snap).unwrap();
    assert!(json.contains("ScoreChanged"));
    let back: GameStateSnapshot = serde_json::from_str(&json).unwrap();
    assert_eq!(back.events, snap.events);
    assert_eq!(back.phase, GamePhase::MainMenu);
}

// ---- Config ----

#[test]
fn test_default_config_is_valid() {
    let config = GameConfig::default();
    assert!(config.validate().is_ok());
    assert_eq!(config.max_temp, 5.0);
    assert_eq!(config.heat_per_missile, 1.0);
    assert!(config.builtin_physics);
}

#[test]
fn test_partial_toml_overrides_only_given_keys() {
    let config = GameConfig::from_toml_str(
        r#"
        max_temp = 3.0
        battery_selection = "round_robin"

        [minimap]
        width = 800.0
        "#,
    )
    .unwrap();

    assert_eq!(config.max_temp, 3.0);
    assert_eq!(config.battery_selection, BatterySelection::RoundRobin);
    assert_eq!(config.minimap.width, 800.0);
    assert_eq!(config.minimap.height, 200.0);
    assert_eq!(config.heat_per_missile, 1.0);
    assert_eq!(config.seed, GameConfig::default().seed);
}

#[test]
fn test_invalid_config_rejected() {
    let err = GameConfig::from_toml_str("heat_per_missile = 0.0").unwrap_err();
    assert!(matches!(err, GameError::Config(_)));

    let err = GameConfig::from_toml_str(
        "explosion_radius_start = 2.0\nexplosion_radius_end = 1.0",
    )
    .unwrap_err();
    assert!(matches!(err, GameError::Config(_)));

    let err = GameConfig::from_toml_str("max_temp = 1.0\nheat_per_missile = 2.0").unwrap_err();
    assert!(matches!(err, GameError::Config(_)));
    // A single shot may use the whole budget.
    assert!(GameConfig::from_toml_str("max_temp = 2.0\nheat_per_missile = 2.0").is_ok());

    let err = GameConfig::from_toml_str("max_temp = \"hot\"").unwrap_err();
    assert!(matches!(err, GameError::Config(_)));
}

#[test]
fn test_error_messages() {
    assert_eq!(
        GameError::Overheated { battery: 2 }.to_string(),
        "battery 2 is overheated"
    );
    assert_eq!(
        GameError::AssetMissing {
            name: "missile".into()
        }
        .to_string(),
        "required asset 'missile' is missing"
    );
}
