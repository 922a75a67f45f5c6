use thiserror::Error;

use crate::config::ConfigError;

/// Ошибки инициализации клетки
///
/// Все фатальные для конкретной клетки: update не идёт дальше.
/// Нехватка ATP и переполнение bag ошибками не являются.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum MicrobeError {
    /// Не вызван init(cloud) до ready/update
    #[error("microbe not initialized: compound cloud system is not attached")]
    NotInitialized,

    /// MicrobeConfig не прошёл validate() на ready()
    #[error("invalid microbe config: {0}")]
    InvalidConfig(#[from] ConfigError),

    /// Update до ready()
    #[error("microbe is not ready: call ready() before frame or physics updates")]
    NotReady,

    /// Frame update без species
    #[error("microbe has no species applied")]
    MissingSpecies,

    /// Другая клетка запаниковала с залоченным облаком
    #[error("compound cloud system lock is poisoned")]
    CloudPoisoned,
}
