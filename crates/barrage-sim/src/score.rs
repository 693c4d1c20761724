//! Running score state tracked by the engine.

use barrage_core::constants::{SCORE_BUILDING_LOST, SCORE_ENEMY_DESTROYED};
use barrage_core::events::GameEvent;
use barrage_core::state::ScoreView;

use crate::bridge::SceneBridge;

#[derive(Debug, Clone, Default)]
pub struct ScoreState {
    pub score: i64,
    pub enemy_missiles_destroyed: u32,
    pub buildings_lost: u32,
    pub player_missiles_fired: u32,
    pub misfires: u32,
}

impl ScoreState {
    pub fn enemy_destroyed(&mut self, bridge: &mut SceneBridge) {
        self.enemy_missiles_destroyed += 1;
        self.apply(SCORE_ENEMY_DESTROYED, bridge);
    }

    pub fn building_lost(&mut self, bridge: &mut SceneBridge) {
        self.buildings_lost += 1;
        self.apply(SCORE_BUILDING_LOST, bridge);
    }

    fn apply(&mut self, delta: i64, bridge: &mut SceneBridge) {
        self.score += delta;
        bridge.emit(GameEvent::ScoreChanged {
            delta,
            total: self.score,
        });
    }

    pub fn view(&self, buildings_remaining: u32) -> ScoreView {
        ScoreView {
            score: self.score,
            enemy_missiles_destroyed: self.enemy_missiles_destroyed,
            buildings_lost: self.buildings_lost,
            buildings_remaining,
            player_missiles_fired: self.player_missiles_fired,
            misfires: self.misfires,
        }
    }
}
