//! Stats bundles
//!
//! The numeric capability bundle carried by parts, and summed additively into
//! a spacecraft's aggregate. Construction is validated so content errors
//! surface at load time instead of producing NaN hulls mid-battle.

use thiserror::Error;

/// Stats validation failure
#[derive(Debug, Error)]
pub enum StatsError {
    /// A stat that must be non-negative was negative
    #[error("stat `{field}` must not be negative (got {value})")]
    Negative {
        /// Offending field name
        field: &'static str,
        /// Offending value
        value: f32,
    },

    /// A current value exceeds its configured maximum
    #[error("stat `{field}` exceeds its maximum ({value} > {max})")]
    AboveMax {
        /// Offending field name
        field: &'static str,
        /// Offending value
        value: f32,
        /// Configured maximum
        max: f32,
    },
}

/// Numeric capability bundle of a part or a whole spacecraft
#[derive(Debug, Clone, PartialEq)]
pub struct Stats {
    /// Maximum hit points
    pub hp_max: f32,
    /// Current hit points
    pub hp: f32,
    /// Hit points regenerated per second
    pub hp_regen: f32,
    /// Maximum shield
    pub shield_max: f32,
    /// Current shield
    pub shield: f32,
    /// Damage dealt per shot
    pub attack: f32,
    /// Seconds until this weapon may fire again
    pub attack_cooldown: f32,
    /// Cooldown imposed after each shot
    pub attack_cooldown_max: f32,
    /// Projectile speed
    pub attack_speed: f32,
    /// Projectile time to live
    pub attack_ttl: f32,
    /// Turn rate in radians per second
    pub rotation_speed: f32,
    /// Linear acceleration
    pub acceleration: f32,
    /// Speed clamp
    pub speed_max: f32,
}

impl Stats {
    /// The additive identity: every stat zero
    pub fn zeroed() -> Self {
        Self {
            hp_max: 0.0,
            hp: 0.0,
            hp_regen: 0.0,
            shield_max: 0.0,
            shield: 0.0,
            attack: 0.0,
            attack_cooldown: 0.0,
            attack_cooldown_max: 0.0,
            attack_speed: 0.0,
            attack_ttl: 0.0,
            rotation_speed: 0.0,
            acceleration: 0.0,
            speed_max: 0.0,
        }
    }

    /// Validate the bundle, rejecting negative values and over-maximum
    /// current values
    pub fn validate(&self) -> Result<(), StatsError> {
        let non_negative = [
            ("hp_max", self.hp_max),
            ("hp", self.hp),
            ("hp_regen", self.hp_regen),
            ("shield_max", self.shield_max),
            ("shield", self.shield),
            ("attack", self.attack),
            ("attack_cooldown", self.attack_cooldown),
            ("attack_cooldown_max", self.attack_cooldown_max),
            ("attack_speed", self.attack_speed),
            ("attack_ttl", self.attack_ttl),
            ("rotation_speed", self.rotation_speed),
            ("acceleration", self.acceleration),
            ("speed_max", self.speed_max),
        ];
        for (field, value) in non_negative {
            if value < 0.0 {
                return Err(StatsError::Negative { field, value });
            }
        }
        if self.hp > self.hp_max {
            return Err(StatsError::AboveMax {
                field: "hp",
                value: self.hp,
                max: self.hp_max,
            });
        }
        if self.shield > self.shield_max {
            return Err(StatsError::AboveMax {
                field: "shield",
                value: self.shield,
                max: self.shield_max,
            });
        }
        Ok(())
    }

    /// Validating constructor form, for building content inline
    pub fn validated(self) -> Result<Self, StatsError> {
        self.validate()?;
        Ok(self)
    }

    /// Add another bundle into this one, field by field
    pub fn combine(&mut self, other: &Self) {
        self.hp_max += other.hp_max;
        self.hp += other.hp;
        self.hp_regen += other.hp_regen;
        self.shield_max += other.shield_max;
        self.shield += other.shield;
        self.attack += other.attack;
        self.attack_cooldown += other.attack_cooldown;
        self.attack_cooldown_max += other.attack_cooldown_max;
        self.attack_speed += other.attack_speed;
        self.attack_ttl += other.attack_ttl;
        self.rotation_speed += other.rotation_speed;
        self.acceleration += other.acceleration;
        self.speed_max += other.speed_max;
    }

    /// Take damage, shield first, overflow into the hull
    ///
    /// Hit points may go negative; the destruction sweep treats anything at
    /// or below zero as dead.
    pub fn apply_damage(&mut self, amount: f32) {
        let absorbed = amount.min(self.shield);
        self.shield -= absorbed;
        self.hp -= amount - absorbed;
    }

    /// Regenerate hull, clamped at the maximum
    pub fn regenerate(&mut self, dt: f32) {
        if self.hp_regen > 0.0 {
            self.hp = (self.hp + self.hp_regen * dt).min(self.hp_max);
        }
    }

    /// Decay the weapon cooldown, clamping at zero
    pub fn tick_cooldown(&mut self, dt: f32) {
        self.attack_cooldown = (self.attack_cooldown - dt).max(0.0);
    }

    /// Whether this bundle describes a weapon that is ready to fire
    pub fn can_fire(&self) -> bool {
        self.attack > 0.0 && self.attack_cooldown <= 0.0
    }

    /// Reset the cooldown to its configured maximum
    pub fn reset_cooldown(&mut self) {
        self.attack_cooldown = self.attack_cooldown_max;
    }

    /// Whether the hull is gone
    pub fn is_destroyed(&self) -> bool {
        self.hp <= 0.0
    }

    /// Hull fraction for HUD display, clamped to [0, 1]
    pub fn hull_ratio(&self) -> f32 {
        if self.hp_max > 0.0 {
            (self.hp / self.hp_max).clamp(0.0, 1.0)
        } else {
            0.0
        }
    }

    /// Shield fraction for HUD display, clamped to [0, 1]
    pub fn shield_ratio(&self) -> f32 {
        if self.shield_max > 0.0 {
            (self.shield / self.shield_max).clamp(0.0, 1.0)
        } else {
            0.0
        }
    }
}
