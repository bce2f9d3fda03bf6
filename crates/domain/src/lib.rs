//! Rucksack domain: the player aggregate, the item kinds it carries, and the
//! pure rules for using an item.

pub mod aggregates;
pub mod entities;
pub mod error;
pub mod ids;
pub mod value_objects;

pub use aggregates::Player;
pub use entities::{Item, ItemAttributes, ItemKind, SpecialEffect};
pub use error::DomainError;
pub use ids::{ItemId, PlayerId};
pub use value_objects::{
    ItemDelta, ItemName, Stats, UseEffect, UsePlan, UseRejection, Username, DEFAULT_DAMAGE,
};
