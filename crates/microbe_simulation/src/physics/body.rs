//! MicrobeBody — узкий интерфейс к rigid body
//!
//! Клетке от физики нужно только:
//! - apply_central_impulse (толчок от движения)
//! - текущий Transform (basis + origin), чтение и запись
//!
//! Реализации:
//! - RapierMicrobeBody — Bevy Transform + Rapier ExternalImpulse
//! - HeadlessBody — plain struct для тестов и headless прогонов

use bevy::prelude::*;
use bevy_rapier3d::prelude::ExternalImpulse;

pub trait MicrobeBody {
    fn apply_central_impulse(&mut self, impulse: Vec3);

    fn transform(&self) -> Transform;

    fn set_transform(&mut self, transform: Transform);
}

/// Rapier-backed тело клетки (собирается системой из компонентов entity)
pub struct RapierMicrobeBody<'a> {
    pub transform: &'a mut Transform,
    pub impulse: &'a mut ExternalImpulse,
}

impl MicrobeBody for RapierMicrobeBody<'_> {
    fn apply_central_impulse(&mut self, impulse: Vec3) {
        // Rapier сбрасывает ExternalImpulse после step, копим в пределах кадра
        self.impulse.impulse += impulse;
    }

    fn transform(&self) -> Transform {
        *self.transform
    }

    fn set_transform(&mut self, transform: Transform) {
        *self.transform = transform;
    }
}

/// Тело без физического движка
///
/// Импульсы накапливаются в `accumulated_impulse`, Transform меняется
/// только через set_transform.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct HeadlessBody {
    pub transform: Transform,
    pub accumulated_impulse: Vec3,
    pub impulse_count: u32,
}

impl HeadlessBody {
    pub fn at(position: Vec3) -> Self {
        Self {
            transform: Transform::from_translation(position),
            ..default()
        }
    }
}

impl MicrobeBody for HeadlessBody {
    fn apply_central_impulse(&mut self, impulse: Vec3) {
        self.accumulated_impulse += impulse;
        self.impulse_count += 1;
    }

    fn transform(&self) -> Transform {
        self.transform
    }

    fn set_transform(&mut self, transform: Transform) {
        self.transform = transform;
    }
}
