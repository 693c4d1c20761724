//! Heat model: per-battery fire throttling.
//!
//! Each shot costs `heat_per_missile`. A shot that would push a battery above
//! `max_temp` is refused and latches the battery as overheated; the latch
//! clears only once the battery has cooled all the way back to zero. Cooling
//! runs at `heat_per_missile` per second.

use hecs::World;

use barrage_core::components::Battery;
use barrage_core::config::GameConfig;
use barrage_core::error::{GameError, Result};

/// Try to take one shot's worth of heat.
pub fn try_fire(battery: &mut Battery, config: &GameConfig) -> Result<()> {
    if battery.overheated {
        return Err(GameError::Overheated {
            battery: battery.index,
        });
    }
    let heat = battery.heat + config.heat_per_missile;
    if heat > config.max_temp {
        battery.overheated = true;
        log::debug!(
            "battery {} overheated at {:.2} (shot would reach {:.2})",
            battery.index,
            battery.heat,
            heat
        );
        return Err(GameError::Overheated {
            battery: battery.index,
        });
    }
    battery.heat = heat;
    Ok(())
}

/// Cool one battery by `dt` seconds.
pub fn cool(battery: &mut Battery, dt: f64, config: &GameConfig) {
    if battery.heat <= 0.0 {
        battery.heat = 0.0;
        battery.overheated = false;
        return;
    }
    battery.heat = (battery.heat - config.heat_per_missile * dt as f32).max(0.0);
    if battery.heat == 0.0 && battery.overheated {
        battery.overheated = false;
        log::debug!("battery {} ready", battery.index);
    }
}

/// Cool every battery in the world.
pub fn run(world: &mut World, dt: f64, config: &GameConfig) {
    for (_entity, battery) in world.query_mut::<&mut Battery>() {
        cool(battery, dt, config);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn battery() -> Battery {
        Battery {
            index: 0,
            heat: 0.0,
            overheated: false,
        }
    }

    #[test]
    fn five_shots_then_refused() {
        let config = GameConfig::default();
        let mut b = battery();
        for shot in 1..=5 {
            assert!(try_fire(&mut b, &config).is_ok(), "shot {shot} should fire");
        }
        assert_eq!(b.heat, 5.0);
        assert!(!b.overheated);

        assert_eq!(
            try_fire(&mut b, &config),
            Err(GameError::Overheated { battery: 0 })
        );
        assert!(b.overheated);
        assert_eq!(b.heat, 5.0);

        // Stays refused while latched.
        assert!(try_fire(&mut b, &config).is_err());
    }

    #[test]
    fn cools_back_to_zero_in_five_seconds() {
        let config = GameConfig::default();
        let mut b = battery();
        for _ in 0..6 {
            let _ = try_fire(&mut b, &config);
        }
        assert!(b.overheated);

        for _ in 0..5 {
            cool(&mut b, 1.0, &config);
        }
        assert_eq!(b.heat, 0.0);
        assert!(!b.overheated);
        assert!(try_fire(&mut b, &config).is_ok());
    }

    #[test]
    fn latch_holds_until_exactly_zero() {
        let config = GameConfig::default();
        let mut b = battery();
        for _ in 0..6 {
            let _ = try_fire(&mut b, &config);
        }
        cool(&mut b, 4.5, &config);
        assert!(b.heat > 0.0);
        assert!(b.overheated, "partially cooled battery stays latched");
        assert!(try_fire(&mut b, &config).is_err());

        cool(&mut b, 10.0, &config);
        assert_eq!(b.heat, 0.0);
        assert!(!b.overheated);
    }

    #[test]
    fn partial_heat_refuses_oversized_shot() {
        let config = GameConfig {
            heat_per_missile: 2.0,
            ..Default::default()
        };
        let mut b = battery();
        assert!(try_fire(&mut b, &config).is_ok());
        assert!(try_fire(&mut b, &config).is_ok());
        assert_eq!(b.heat, 4.0);
        assert!(try_fire(&mut b, &config).is_err());
        assert!(b.overheated);
    }

    #[test]
    fn heat_never_exceeds_max_under_fire_and_cool() {
        let config = GameConfig::default();
        let mut b = battery();
        for step in 0..500 {
            let _ = try_fire(&mut b, &config);
            if step % 3 == 0 {
                cool(&mut b, 0.37, &config);
            }
            assert!(b.heat >= 0.0);
            assert!(b.heat <= config.max_temp, "heat {} at step {step}", b.heat);
        }
    }

    #[test]
    fn run_cools_every_battery() {
        let config = GameConfig::default();
        let mut world = World::new();
        let a = world.spawn((Battery {
            index: 0,
            heat: 2.0,
            overheated: false,
        },));
        let b = world.spawn((Battery {
            index: 1,
            heat: 0.5,
            overheated: false,
        },));
        run(&mut world, 1.0, &config);
        assert_eq!(world.get::<&Battery>(a).unwrap().heat, 1.0);
        assert_eq!(world.get::<&Battery>(b).unwrap().heat, 0.0);
    }
}
