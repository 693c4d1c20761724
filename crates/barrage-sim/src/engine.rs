//! Simulation engine, the core of the game.
//!
//! `SimulationEngine` owns the hecs ECS world, processes player commands and
//! host contact reports, runs all systems, and produces `GameStateSnapshot`s.
//! Completely headless, enabling deterministic testing.

use std::collections::VecDeque;

use glam::{Vec2, Vec3};
use hecs::{Entity, World};
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;

use barrage_core::commands::PlayerCommand;
use barrage_core::components::Building;
use barrage_core::config::GameConfig;
use barrage_core::enums::GamePhase;
use barrage_core::error::Result;
use barrage_core::state::GameStateSnapshot;
use barrage_core::types::{SceneHandle, SimTime};

use crate::assets::AssetCache;
use crate::bridge::SceneBridge;
use crate::input::TransformProvider;
use crate::layout::TheatreLayout;
use crate::score::ScoreState;
use crate::systems;
use crate::systems::contact::Contact;
use crate::systems::enemy_fire::EnemyFireState;
use crate::systems::fire_control::BatterySelector;
use crate::systems::placement::PendingPlacement;
use crate::world_setup;

/// The simulation engine. Owns the ECS world and all sim state.
pub struct SimulationEngine {
    config: GameConfig,
    layout: TheatreLayout,
    world: World,
    time: SimTime,
    phase: GamePhase,
    rng: ChaCha8Rng,
    bridge: SceneBridge,
    command_queue: VecDeque<PlayerCommand>,
    contact_queue: Vec<Contact>,
    despawn_buffer: Vec<Entity>,

    batteries: Vec<Entity>,
    selector: BatterySelector,
    enemy: EnemyFireState,
    score: ScoreState,
    placement: PendingPlacement,
}

impl SimulationEngine {
    /// Create an engine. The asset cache must already be loaded; the config
    /// and layout are validated here.
    pub fn new(config: GameConfig, assets: AssetCache, layout: TheatreLayout) -> Result<Self> {
        config.validate()?;
        layout.validate()?;
        Ok(Self {
            rng: ChaCha8Rng::seed_from_u64(config.seed),
            selector: BatterySelector::new(config.battery_selection),
            config,
            layout,
            world: World::new(),
            time: SimTime::default(),
            phase: GamePhase::default(),
            bridge: SceneBridge::new(assets),
            command_queue: VecDeque::new(),
            contact_queue: Vec::new(),
            despawn_buffer: Vec::new(),
            batteries: Vec::new(),
            enemy: EnemyFireState::default(),
            score: ScoreState::default(),
            placement: PendingPlacement::default(),
        })
    }

    /// Queue a player command for processing at the next tick boundary.
    pub fn queue_command(&mut self, command: PlayerCommand) {
        self.command_queue.push_back(command);
    }

    /// Queue multiple commands.
    pub fn queue_commands(&mut self, commands: impl IntoIterator<Item = PlayerCommand>) {
        self.command_queue.extend(commands);
    }

    /// Record a contact reported by the host's physics. It is resolved during
    /// the next tick. Returns `false` if either handle is unknown.
    pub fn report_contact(&mut self, a: SceneHandle, b: SceneHandle) -> bool {
        match (self.bridge.entity(a), self.bridge.entity(b)) {
            (Some(a), Some(b)) => {
                self.contact_queue.push(Contact { a, b });
                true
            }
            _ => {
                log::debug!("dropping contact {a}/{b}: handle not live");
                false
            }
        }
    }

    /// Fire immediately at `target`. Only works while a session is active.
    pub fn fire_at(&mut self, target: Vec3) -> Option<SceneHandle> {
        if self.phase != GamePhase::Active {
            return None;
        }
        systems::fire_control::fire_at(
            &mut self.world,
            &mut self.bridge,
            &self.batteries,
            &mut self.selector,
            &mut self.rng,
            &mut self.score,
            &self.config,
            target,
        )
    }

    /// Turn a screen tap into a fire command. Taps that miss the target pane
    /// are ignored.
    pub fn handle_tap(&mut self, screen: Vec2, transform: &dyn TransformProvider) -> bool {
        match transform.screen_to_world(screen) {
            Some(target) => {
                self.queue_command(PlayerCommand::FireAt { target });
                true
            }
            None => false,
        }
    }

    /// Advance the simulation by `dt` seconds and return the resulting snapshot.
    pub fn tick(&mut self, dt: f64) -> GameStateSnapshot {
        self.process_commands();

        if self.phase == GamePhase::Active {
            self.time.advance(dt);
            self.run_systems(dt);
            self.check_game_over();
        } else {
            // Contacts reported while frozen refer to a stale frame.
            self.contact_queue.clear();
        }

        let events = self.bridge.drain_events();
        systems::snapshot::build_snapshot(
            &self.world,
            &self.config,
            &self.time,
            self.phase,
            self.selector.policy,
            &self.score,
            self.placement.cell(),
            events,
        )
    }

    pub fn phase(&self) -> GamePhase {
        self.phase
    }

    pub fn time(&self) -> SimTime {
        self.time
    }

    pub fn config(&self) -> &GameConfig {
        &self.config
    }

    /// Get a read-only reference to the ECS world.
    pub fn world(&self) -> &World {
        &self.world
    }

    pub fn score(&self) -> &ScoreState {
        &self.score
    }

    /// Battery entities in layout order.
    pub fn batteries(&self) -> &[Entity] {
        &self.batteries
    }

    /// Entity behind a host handle, if it is still alive.
    pub fn entity(&self, handle: SceneHandle) -> Option<Entity> {
        self.bridge.entity(handle)
    }

    /// Launch an enemy missile directly (for tests driving contacts by hand).
    #[cfg(test)]
    pub(crate) fn spawn_enemy_missile(&mut self, origin: Vec3, target: Vec3) -> SceneHandle {
        world_setup::spawn_enemy_missile(&mut self.world, &mut self.bridge, &self.config, origin, target).1
    }

    /// Process all queued commands.
    fn process_commands(&mut self) {
        while let Some(command) = self.command_queue.pop_front() {
            self.handle_command(command);
        }
    }

    /// Handle a single player command.
    fn handle_command(&mut self, command: PlayerCommand) {
        match command {
            PlayerCommand::StartSession => {
                if matches!(self.phase, GamePhase::MainMenu | GamePhase::GameOver) {
                    self.start_session();
                }
            }
            PlayerCommand::Pause => {
                if self.phase == GamePhase::Active {
                    self.phase = GamePhase::Paused;
                    log::info!("paused at {:.2}s", self.time.elapsed_secs);
                }
            }
            PlayerCommand::Resume => {
                if self.phase == GamePhase::Paused {
                    self.phase = GamePhase::Active;
                    log::info!("resumed");
                }
            }
            PlayerCommand::ReturnToMenu => {
                if self.phase != GamePhase::MainMenu {
                    self.teardown();
                    self.phase = GamePhase::MainMenu;
                    log::info!("returned to menu");
                }
            }
            PlayerCommand::FireAt { target } => {
                self.fire_at(target);
            }
            PlayerCommand::SetBatterySelection { policy } => {
                self.selector = BatterySelector::new(policy);
            }
            PlayerCommand::PlaceBuilding { position } => {
                if self.can_edit() {
                    systems::placement::place_building(
                        &mut self.world,
                        &mut self.bridge,
                        &self.config,
                        position,
                    );
                }
            }
            PlayerCommand::BeginPlacement { position } => {
                if self.can_edit() {
                    let cell = self.placement.begin(&self.config, position);
                    log::debug!("placement ghost at {cell}");
                }
            }
            PlayerCommand::ConfirmPlacement => {
                if self.can_edit()
                    && self
                        .placement
                        .confirm(&mut self.world, &mut self.bridge, &self.config)
                        .is_none()
                {
                    log::warn!("confirm without a pending placement");
                }
            }
            PlayerCommand::CancelPlacement => {
                self.placement.cancel();
            }
        }
    }

    fn can_edit(&self) -> bool {
        matches!(self.phase, GamePhase::Active | GamePhase::Paused)
    }

    fn start_session(&mut self) {
        self.teardown();
        self.batteries =
            world_setup::setup_theatre(&mut self.world, &mut self.bridge, &self.layout, &self.config);
        self.score = ScoreState::default();
        self.enemy.reset();
        self.time = SimTime::default();
        self.phase = GamePhase::Active;
        log::info!("session started");
    }

    fn teardown(&mut self) {
        self.bridge.despawn_all(&mut self.world);
        self.world.clear();
        self.batteries.clear();
        self.contact_queue.clear();
        self.placement.cancel();
    }

    /// Run all systems in order.
    fn run_systems(&mut self, dt: f64) {
        let now = self.time.elapsed_secs;
        // 1. Enemy launches
        systems::enemy_fire::run(
            &mut self.world,
            &mut self.bridge,
            &mut self.rng,
            &mut self.enemy,
            &self.layout.enemy_spawn,
            &self.config,
            now,
        );
        // 2. Battery cooling
        systems::heat::run(&mut self.world, dt, &self.config);
        // 3. Built-in physics stand-in
        if self.config.builtin_physics {
            systems::movement::run(&mut self.world, dt);
            systems::contact::run(&self.world, &mut self.contact_queue);
        }
        // 4. Collision router
        systems::collision::run(
            &mut self.world,
            &mut self.bridge,
            &mut self.score,
            &self.config,
            &mut self.contact_queue,
            now,
        );
        // 5. Explosion growth and expiry
        systems::explosion::run(&mut self.world, &self.config, now);
        // 6. Cleanup (finished, destroyed, out of bounds)
        systems::cleanup::run(
            &mut self.world,
            &mut self.bridge,
            &self.config,
            &mut self.despawn_buffer,
        );
    }

    fn check_game_over(&mut self) {
        if self.score.buildings_lost == 0 {
            return;
        }
        let standing = self
            .world
            .query::<&Building>()
            .iter()
            .filter(|(_, b)| b.alive)
            .count();
        if standing == 0 {
            self.phase = GamePhase::GameOver;
            log::info!(
                "game over at {:.2}s, score {}",
                self.time.elapsed_secs,
                self.score.score
            );
        }
    }
}
