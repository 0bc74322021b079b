//! Domain types for type effectiveness

mod effectiveness;
mod pokemon_type;
mod relations;

pub use effectiveness::{Effectiveness, Factor};
pub use pokemon_type::{TYPE_CHART, Type, TypePair};
pub use relations::TypeRelations;
