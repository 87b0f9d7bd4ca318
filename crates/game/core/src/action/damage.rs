//! Bullet impacts on enemies and explosive props.

use crate::action::{ActionCtx, ActionTransition, Rejection};
use crate::effects::{AiSignal, Effect, MontageKind, SoundKind};
use crate::engine::ExecuteError;
use crate::env::{GameEnv, compute_seed};
use crate::math::Vec3;
use crate::sched::TimerKind;
use crate::state::{EnemyId, ExplosiveId, ShooterState};

/// Applies `amount` damage to an enemy. A lethal hit emits the death
/// effects and removes the enemy from the world; pending timers that still
/// name it expire as dropped actions. Returns true if the enemy died.
fn damage_enemy(
    state: &mut ShooterState,
    ctx: &mut ActionCtx,
    enemy: EnemyId,
    amount: u32,
) -> bool {
    let Some(entry) = state.enemy_mut(enemy) else {
        return false;
    };
    entry.health = (entry.health - amount as f32).max(0.0);
    if entry.health > 0.0 {
        return false;
    }

    if let Some(handle) = entry.health_bar_timer.take() {
        ctx.timers.cancel(handle);
    }
    ctx.emit(Effect::HideHealthBar { enemy });
    ctx.emit(Effect::PlayMontage {
        montage: MontageKind::Death,
        section: "DeathA".into(),
    });
    ctx.emit(Effect::Ai(AiSignal::SetFlag {
        enemy,
        key: "Dead",
        value: true,
    }));
    ctx.emit(Effect::DespawnEnemy { enemy });
    state.remove_enemy(enemy);
    true
}

/// A shot hit an enemy. Damage comes from the equipped weapon, doubled up
/// to the headshot figure when the hit bone matches the head.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct EnemyHit {
    pub enemy: EnemyId,
    pub location: Vec3,
    pub headshot: bool,
}

impl ActionTransition for EnemyHit {
    fn pre_validate(&self, state: &ShooterState, _env: &GameEnv) -> Result<(), Rejection> {
        if state.enemy(self.enemy).is_none() {
            return Err(Rejection::MissingTarget);
        }
        if state.equipped_weapon().is_none() {
            return Err(Rejection::NoWeapon);
        }
        Ok(())
    }

    fn apply(
        &self,
        state: &mut ShooterState,
        env: &GameEnv,
        ctx: &mut ActionCtx,
    ) -> Result<(), ExecuteError> {
        let config = env.config()?;
        let rng = env.rng()?;

        let weapon = state
            .equipped_weapon()
            .ok_or(ExecuteError::NoEquippedWeapon)?;
        let damage = if self.headshot {
            weapon.headshot_damage
        } else {
            weapon.damage
        };

        ctx.emit(Effect::PlaySound {
            sound: SoundKind::EnemyImpact,
        });
        ctx.emit(Effect::SpawnImpact {
            location: self.location,
            damage,
            headshot: self.headshot,
        });

        // First blood pulls the enemy's attention to the player.
        let entry = state
            .enemy_mut(self.enemy)
            .ok_or(ExecuteError::MissingEnemy(self.enemy))?;
        if entry.health >= entry.max_health {
            ctx.emit(Effect::Ai(AiSignal::TargetAcquired { enemy: self.enemy }));
        }

        // Restart the health bar display window.
        if let Some(handle) = entry.health_bar_timer.take() {
            ctx.timers.cancel(handle);
        }
        ctx.emit(Effect::ShowHealthBar { enemy: self.enemy });
        let handle = ctx.schedule_in(
            config.health_bar_display_time,
            TimerKind::HideHealthBar(self.enemy),
        );
        let entry = state
            .enemy_mut(self.enemy)
            .ok_or(ExecuteError::MissingEnemy(self.enemy))?;
        entry.health_bar_timer = Some(handle);

        // Hit reacts are rate limited by a random-delay timer so sustained
        // fire does not restart the montage every frame.
        if entry.can_hit_react {
            entry.can_hit_react = false;
            ctx.emit(Effect::PlayMontage {
                montage: MontageKind::HitReact,
                section: "HitReactFront".into(),
            });
            let seed = compute_seed(state.game_seed, state.nonce, self.enemy.0, 1);
            let delay = rng.range_f32(seed, config.hit_react_delay_min, config.hit_react_delay_max);
            ctx.schedule_in(delay, TimerKind::HitReactReset(self.enemy));
        }

        damage_enemy(state, ctx, self.enemy, damage);
        Ok(())
    }
}

/// Hit-react cooldown expiry.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct HitReactReset {
    pub enemy: EnemyId,
}

impl ActionTransition for HitReactReset {
    fn pre_validate(&self, state: &ShooterState, _env: &GameEnv) -> Result<(), Rejection> {
        state
            .enemy(self.enemy)
            .map(|_| ())
            .ok_or(Rejection::MissingTarget)
    }

    fn apply(
        &self,
        state: &mut ShooterState,
        _env: &GameEnv,
        _ctx: &mut ActionCtx,
    ) -> Result<(), ExecuteError> {
        let entry = state
            .enemy_mut(self.enemy)
            .ok_or(ExecuteError::MissingEnemy(self.enemy))?;
        entry.can_hit_react = true;
        Ok(())
    }
}

/// Health bar display window expiry.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct HideHealthBar {
    pub enemy: EnemyId,
}

impl ActionTransition for HideHealthBar {
    fn pre_validate(&self, state: &ShooterState, _env: &GameEnv) -> Result<(), Rejection> {
        state
            .enemy(self.enemy)
            .map(|_| ())
            .ok_or(Rejection::MissingTarget)
    }

    fn apply(
        &self,
        state: &mut ShooterState,
        _env: &GameEnv,
        ctx: &mut ActionCtx,
    ) -> Result<(), ExecuteError> {
        let entry = state
            .enemy_mut(self.enemy)
            .ok_or(ExecuteError::MissingEnemy(self.enemy))?;
        entry.health_bar_timer = None;
        ctx.emit(Effect::HideHealthBar { enemy: self.enemy });
        Ok(())
    }
}

/// A shot hit an explosive prop: it detonates, damaging every enemy inside
/// the blast radius, and despawns.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ExplosiveHit {
    pub explosive: ExplosiveId,
}

impl ActionTransition for ExplosiveHit {
    fn pre_validate(&self, state: &ShooterState, _env: &GameEnv) -> Result<(), Rejection> {
        state
            .explosive(self.explosive)
            .map(|_| ())
            .ok_or(Rejection::MissingTarget)
    }

    fn apply(
        &self,
        state: &mut ShooterState,
        _env: &GameEnv,
        ctx: &mut ActionCtx,
    ) -> Result<(), ExecuteError> {
        let explosive = state
            .remove_explosive(self.explosive)
            .ok_or(ExecuteError::MissingExplosive(self.explosive))?;

        ctx.emit(Effect::PlaySound {
            sound: SoundKind::Explosion,
        });
        ctx.emit(Effect::RadialDamage {
            center: explosive.location,
            radius: explosive.radius,
            damage: explosive.damage,
        });

        let caught: Vec<EnemyId> = state
            .enemies
            .iter()
            .filter(|enemy| {
                let offset = Vec3::new(
                    enemy.location.x - explosive.location.x,
                    enemy.location.y - explosive.location.y,
                    enemy.location.z - explosive.location.z,
                );
                offset.length() <= explosive.radius
            })
            .map(|enemy| enemy.id)
            .collect();
        for enemy in caught {
            damage_enemy(state, ctx, enemy, explosive.damage);
        }

        ctx.emit(Effect::DespawnExplosive {
            explosive: self.explosive,
        });
        Ok(())
    }
}
