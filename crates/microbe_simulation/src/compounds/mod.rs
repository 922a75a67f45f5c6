//! Compounds domain — хранение и учёт веществ клетки
//!
//! Содержит:
//! - Compound (имя вещества, "atp", "glucose", ...)
//! - CompoundBag (bounded storage с общей capacity)
//! - AbsorbedTally (сколько всего поглощено за жизнь клетки)

pub mod bag;
pub mod compound;
pub mod tally;


pub use bag::CompoundBag;
pub use compound::Compound;
pub use tally::AbsorbedTally;
