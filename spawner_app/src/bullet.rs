//! Pooled game objects used by the demo

use std::cell::RefCell;
use std::rc::Rc;

use frame_core::config::TimerSettings;
use frame_core::pooling::Poolable;
use frame_core::timing::TemporalTimer;
use rand::rngs::StdRng;
use rand::Rng;

/// Shared random source for lifetime jitter
pub type SharedRng = Rc<RefCell<StdRng>>;

/// Projectile with a countdown lifetime
pub struct Bullet {
    /// Distance travelled since spawn
    pub distance: f32,
    /// Units per tick
    pub speed: f32,
    /// Whether the bullet is drawn and collides
    pub visible: bool,
    /// Remaining lifetime; the bullet despawns when it ends
    pub lifetime: TemporalTimer<f32>,
}

impl Bullet {
    /// Build a bullet whose lifetime step wobbles by up to `jitter`
    pub fn new(lifetime: &TimerSettings<f32>, jitter: f32, rng: SharedRng) -> Self {
        let mut timer = TemporalTimer::from_settings(lifetime);
        let base_step = lifetime.step;
        timer.set_step_provider(move || {
            if jitter > 0.0 {
                base_step + rng.borrow_mut().gen_range(-jitter..=jitter)
            } else {
                base_step
            }
        });
        timer.stop();

        Self {
            distance: 0.0,
            speed: 0.5,
            visible: true,
            lifetime: timer,
        }
    }

    /// Move one tick; returns `true` when the bullet's lifetime ran out
    pub fn update(&mut self) -> bool {
        self.distance += self.speed;
        self.lifetime.advance().ended_cycle()
    }
}

impl Poolable for Bullet {
    fn on_spawn(&mut self) {
        self.distance = 0.0;
        self.lifetime.reset(false);
        self.lifetime.resume();
    }

    fn on_despawn(&mut self) {
        log::trace!("Bullet despawned after {:.1} units", self.distance);
        self.lifetime.stop();
    }

    fn set_active(&mut self, active: bool) {
        self.visible = active;
    }
}

/// One-tick muzzle flash effect
#[derive(Debug, Default)]
pub struct MuzzleFlash {
    /// Times this flash has been shown
    pub shown: u32,
    /// Whether the flash is drawn
    pub visible: bool,
}

impl Poolable for MuzzleFlash {
    fn on_spawn(&mut self) {
        self.shown += 1;
    }

    fn on_despawn(&mut self) {}

    fn set_active(&mut self, active: bool) {
        self.visible = active;
    }
}
