//! Player commands sent from the host to the simulation.
//!
//! Commands are queued and processed at the next tick boundary.

use glam::Vec3;
use serde::{Deserialize, Serialize};

use crate::enums::BatterySelection;

/// All possible player actions.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum PlayerCommand {
    // --- Session ---
    /// Load the theatre layout and start playing.
    StartSession,
    /// Pause the simulation.
    Pause,
    /// Resume the simulation.
    Resume,
    /// Tear the theatre down and go back to the menu.
    ReturnToMenu,

    // --- Fire control ---
    /// Launch a player missile at a world-space point.
    FireAt { target: Vec3 },
    /// Switch how the launching battery is chosen.
    SetBatterySelection { policy: BatterySelection },

    // --- Edit mode ---
    /// Place a new house at once; the position is snapped to the floor grid.
    PlaceBuilding { position: Vec3 },
    /// Show a ghost house at the grid cell containing `position`. Replaces
    /// any ghost already shown.
    BeginPlacement { position: Vec3 },
    /// Build a house where the ghost stands.
    ConfirmPlacement,
    /// Drop the ghost without building.
    CancelPlacement,
}
