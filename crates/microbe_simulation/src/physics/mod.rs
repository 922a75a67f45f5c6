//! Physics module
//!
//! Movement force (ATP-charged thrust), smoothed rotation и интерфейс
//! к rigid body. Интеграцию делает Rapier (или любой MicrobeBody).

pub mod body;
pub mod movement;
pub mod orientation;

// Re-export основных типов
pub use body::{HeadlessBody, MicrobeBody, RapierMicrobeBody};
pub use movement::{compute_movement_force, MovementForce};
pub use orientation::smoothed_rotation;
