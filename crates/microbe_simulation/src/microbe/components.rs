//! Microbe — клетка (основной компонент microbe stage)
//!
//! Два внешних update с разной частотой:
//! - process(delta, body) — каждый кадр: движение → импульс → поглощение → venting gate
//! - integrate_forces(body) — каждый physics step: только поворот к look-at точке
//!
//! Жизненный цикл: new → init(cloud) → ready() → apply_species(species) → updates.
//! Update до init/ready — MicrobeError, а не тихий no-op.

use std::sync::Arc;

use bevy::prelude::*;

use super::capabilities::{AiControllable, ProcessParticipant, SpawnedEntity, TweakedProcess};
use super::error::MicrobeError;
use super::species::MicrobeSpecies;
use crate::cloud::{absorb_nearby, CloudHandle};
use crate::compounds::{AbsorbedTally, CompoundBag};
use crate::config::MicrobeConfig;
use crate::constants::{DEFAULT_LOOK_AT_POINT, ROTATION_UP};
use crate::logger::{log, log_warning};
use crate::physics::{compute_movement_force, smoothed_rotation, MicrobeBody, MovementForce};

/// Решение venting gate за кадр
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum VentingOutcome {
    /// Process system ещё ни разу не пометил compounds полезными
    Skipped,
    /// Venting разрешён (сам сброс веществ пока не делается)
    Eligible,
}

/// Что произошло за один process()
#[derive(Debug, Clone, PartialEq)]
pub struct FrameReport {
    /// None — движения не было (нулевое направление, ATP не тратился)
    pub movement: Option<MovementForce>,
    /// Импульс в мировых координатах (уже умножен на delta)
    pub impulse: Option<Vec3>,
    /// Поглощено за этот кадр
    pub absorbed: AbsorbedTally,
    pub venting: VentingOutcome,
}

#[derive(Component, Debug)]
pub struct Microbe {
    /// Вещества клетки (эксклюзивно)
    pub compounds: CompoundBag,
    /// Точка, к которой клетка поворачивается (пишет AI/input)
    pub look_at_point: Vec3,
    /// Направление движения, не нормализуется (длина = скорость)
    pub movement_direction: Vec3,

    species: Option<Arc<MicrobeSpecies>>,
    total_absorbed: AbsorbedTally,
    despawn_radius_sqr: i32,
    time_until_next_ai_update: f32,
    // TODO: заполнять из species, когда появится process list
    active_processes: Vec<TweakedProcess>,

    config: MicrobeConfig,
    cloud: Option<CloudHandle>,
    ready: bool,
    /// Прошлый кадр был с нехваткой ATP (для логов переходов)
    starved: bool,
}

impl Default for Microbe {
    fn default() -> Self {
        Self::new(MicrobeConfig::default())
    }
}

impl Microbe {
    pub fn new(config: MicrobeConfig) -> Self {
        Self {
            // capacity выставляется в ready()
            compounds: CompoundBag::new(0.0),
            look_at_point: DEFAULT_LOOK_AT_POINT,
            movement_direction: Vec3::ZERO,
            species: None,
            total_absorbed: AbsorbedTally::new(),
            despawn_radius_sqr: 0,
            time_until_next_ai_update: 0.0,
            active_processes: Vec::new(),
            config,
            cloud: None,
            ready: false,
            starved: false,
        }
    }

    /// Подключить систему облаков. Обязательно до ready()
    pub fn init(&mut self, cloud: CloudHandle) {
        self.cloud = Some(cloud);
    }

    /// Активация клетки
    pub fn ready(&mut self) -> Result<(), MicrobeError> {
        if self.cloud.is_none() {
            return Err(MicrobeError::NotInitialized);
        }

        self.config.validate()?;

        // TODO: считать capacity из органелл
        self.compounds.set_capacity(self.config.compound_capacity);
        self.ready = true;
        Ok(())
    }

    pub fn is_ready(&self) -> bool {
        self.ready
    }

    pub fn config(&self) -> &MicrobeConfig {
        &self.config
    }

    pub fn species(&self) -> Option<&Arc<MicrobeSpecies>> {
        self.species.as_ref()
    }

    /// Применить species (при spawn): layout + стартовые compounds
    pub fn apply_species(&mut self, species: Arc<MicrobeSpecies>) {
        log(&format!("Microbe: applying species '{}'", species.name));

        self.species = Some(species);
        self.reset_organelle_layout();
        self.set_initial_compounds();
    }

    /// Пересобрать body plan из species
    pub fn reset_organelle_layout(&mut self) {
        // Membrane hexes пока не передаются, размер клетки фиксирован (hex_count)
    }

    /// Сбросить compounds к стартовому набору species
    pub fn set_initial_compounds(&mut self) {
        self.compounds.clear_compounds();

        let Some(species) = &self.species else {
            return;
        };

        for (compound, amount) in &species.initial_compounds {
            self.compounds.add_compound(compound, *amount);
        }
    }

    /// Размер клетки в hex
    pub fn hex_count(&self) -> u32 {
        // TODO: считать из organelle layout и кешировать
        1
    }

    pub fn total_absorbed(&self) -> &AbsorbedTally {
        &self.total_absorbed
    }

    /// Последний кадр шёл с движением без полного ATP (стоянка сбрасывает)
    pub fn is_starved(&self) -> bool {
        self.starved
    }

    fn ensure_active(&self) -> Result<(), MicrobeError> {
        if self.cloud.is_none() {
            return Err(MicrobeError::NotInitialized);
        }
        if !self.ready {
            return Err(MicrobeError::NotReady);
        }
        Ok(())
    }

    /// Frame update (переменный шаг)
    pub fn process(&mut self, delta: f32, body: &mut impl MicrobeBody) -> Result<FrameReport, MicrobeError> {
        self.ensure_active()?;

        let is_bacteria = self
            .species
            .as_ref()
            .ok_or(MicrobeError::MissingSpecies)?
            .is_bacteria;

        // Позиция берётся один раз на весь кадр
        let transform = body.transform();
        let delta = delta.max(0.0);

        let mut movement = None;
        let mut impulse = None;

        if self.movement_direction != Vec3::ZERO {
            let force = self.base_movement_force(delta);
            let world_force = force.to_world(transform.rotation);

            impulse = self.apply_movement_impulse(world_force, delta, body);
            movement = Some(force);
        } else {
            // Стоим на месте: ATP не тратится, значит и голодания нет
            self.starved = false;
        }

        let absorbed = self.handle_compound_absorbing(transform.translation, is_bacteria)?;
        let venting = self.handle_compound_venting();

        Ok(FrameReport {
            movement,
            impulse,
            absorbed,
            venting,
        })
    }

    /// Physics step: перезаписываем только rotation, translation ведут импульсы
    pub fn integrate_forces(&self, state: &mut impl MicrobeBody) -> Result<(), MicrobeError> {
        self.ensure_active()?;

        let transform = state.transform();
        let rotation = smoothed_rotation(
            transform.rotation,
            transform.translation,
            self.look_at_point,
            ROTATION_UP,
            self.config.rotation_slerp_factor,
        );

        state.set_transform(Transform { rotation, ..transform });
        Ok(())
    }

    fn base_movement_force(&mut self, delta: f32) -> MovementForce {
        let force = compute_movement_force(
            self.movement_direction,
            delta,
            self.hex_count(),
            self.config.base_movement_atp_cost,
            self.config.cell_base_thrust,
            &self.config.movement_compound,
            &mut self.compounds,
        );

        let starved = force.is_starved();
        if starved && !self.starved {
            log_warning(&format!(
                "Microbe: out of {} (needed {:.3}, got {:.3}), moving at half thrust",
                self.config.movement_compound, force.cost, force.obtained
            ));
        } else if !starved && self.starved {
            log(&format!("Microbe: {} restored, full thrust", self.config.movement_compound));
        }
        self.starved = starved;

        force
    }

    /// Движение идёт в плоскости XZ: без X/Z компоненты импульс не нужен
    fn apply_movement_impulse(&self, movement: Vec3, delta: f32, body: &mut impl MicrobeBody) -> Option<Vec3> {
        if movement.x == 0.0 && movement.z == 0.0 {
            return None;
        }

        let impulse = movement * delta;
        body.apply_central_impulse(impulse);
        Some(impulse)
    }

    fn handle_compound_absorbing(&mut self, position: Vec3, is_bacteria: bool) -> Result<AbsorbedTally, MicrobeError> {
        let cloud = self.cloud.as_ref().ok_or(MicrobeError::NotInitialized)?;
        let mut cloud = cloud.lock().map_err(|_| MicrobeError::CloudPoisoned)?;

        let mut absorbed = AbsorbedTally::new();
        absorb_nearby(
            position,
            &self.config,
            is_bacteria,
            &mut *cloud,
            &mut self.compounds,
            &mut absorbed,
        );

        self.total_absorbed.merge(&absorbed);
        Ok(absorbed)
    }

    /// Venting (сброс ненужных compounds)
    ///
    /// Пока process system не отработал ни разу, неизвестно что полезно → skip.
    fn handle_compound_venting(&self) -> VentingOutcome {
        if !self.compounds.has_any_been_set_useful() {
            return VentingOutcome::Skipped;
        }

        VentingOutcome::Eligible
    }
}

impl SpawnedEntity for Microbe {
    fn despawn_radius_sqr(&self) -> i32 {
        self.despawn_radius_sqr
    }

    fn set_despawn_radius_sqr(&mut self, radius_sqr: i32) {
        self.despawn_radius_sqr = radius_sqr;
    }
}

impl ProcessParticipant for Microbe {
    fn active_processes(&self) -> &[TweakedProcess] {
        &self.active_processes
    }

    fn process_compound_storage(&mut self) -> &mut CompoundBag {
        &mut self.compounds
    }
}

impl AiControllable for Microbe {
    fn look_at_point(&self) -> Vec3 {
        self.look_at_point
    }

    fn set_look_at_point(&mut self, point: Vec3) {
        self.look_at_point = point;
    }

    fn movement_direction(&self) -> Vec3 {
        self.movement_direction
    }

    fn set_movement_direction(&mut self, direction: Vec3) {
        self.movement_direction = direction;
    }

    fn time_until_next_ai_update(&self) -> f32 {
        self.time_until_next_ai_update
    }

    fn set_time_until_next_ai_update(&mut self, seconds: f32) {
        self.time_until_next_ai_update = seconds;
    }

    fn total_absorbed_compounds(&self) -> &AbsorbedTally {
        &self.total_absorbed
    }
}
