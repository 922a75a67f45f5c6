use std::borrow::Cow;
use std::fmt;

use serde::{Deserialize, Serialize};

/// Идентификатор вещества
///
/// Встроенные compounds — `&'static str` без аллокаций,
/// compounds из конфигов/species — owned строки.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Compound(Cow<'static, str>);

impl Compound {
    /// Энергия для движения
    pub const ATP: Compound = Compound(Cow::Borrowed("atp"));
    pub const GLUCOSE: Compound = Compound(Cow::Borrowed("glucose"));
    pub const AMMONIA: Compound = Compound(Cow::Borrowed("ammonia"));

    pub fn new(name: impl Into<String>) -> Self {
        Self(Cow::Owned(name.into()))
    }

    pub fn name(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for Compound {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl From<&'static str> for Compound {
    fn from(name: &'static str) -> Self {
        Self(Cow::Borrowed(name))
    }
}
