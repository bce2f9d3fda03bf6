//! Neo4j deserialization helpers for row conversion functions.
//!
//! This module provides extension traits and helper functions to reduce
//! boilerplate when converting Neo4j nodes to domain values.

use neo4rs::{Node, Query};
use rucksack_domain::{
    Item, ItemAttributes, ItemId, ItemKind, ItemName, Player, PlayerId, SpecialEffect, Stats,
    Username,
};

use crate::infrastructure::ports::RepoError;

/// Extension trait for Neo4j Node to simplify common deserialization patterns.
pub trait NodeExt {
    /// Get an optional i64 field, returning None if missing or null.
    fn get_optional_i64(&self, field: &str) -> Option<i64>;

    /// Get an optional string field, returning None if empty or missing.
    fn get_optional_string(&self, field: &str) -> Option<String>;

    /// Get a required string field with strict error handling (fail-fast).
    fn get_string_strict(&self, field: &str) -> Result<String, RepoError>;

    /// Get a required i64 field with strict error handling (fail-fast).
    fn get_i64_strict(&self, field: &str) -> Result<i64, RepoError>;
}

impl NodeExt for Node {
    fn get_optional_i64(&self, field: &str) -> Option<i64> {
        self.get::<i64>(field).ok()
    }

    fn get_optional_string(&self, field: &str) -> Option<String> {
        self.get::<String>(field)
            .ok()
            .filter(|s| !s.trim().is_empty())
    }

    fn get_string_strict(&self, field: &str) -> Result<String, RepoError> {
        self.get(field).map_err(|e| {
            RepoError::serialization(format!("Missing required field '{}': {}", field, e))
        })
    }

    fn get_i64_strict(&self, field: &str) -> Result<i64, RepoError> {
        self.get(field).map_err(|e| {
            RepoError::serialization(format!("Missing required field '{}': {}", field, e))
        })
    }
}

// =============================================================================
// Row Conversion
// =============================================================================

/// Convert a `:Player` node (without inventory) to a domain player.
pub(super) fn node_to_player(node: &Node) -> Result<Player, RepoError> {
    let id = PlayerId::new(node.get_string_strict("id")?).map_err(RepoError::serialization)?;
    let username =
        Username::new(node.get_string_strict("username")?).map_err(RepoError::serialization)?;
    let stats = Stats::new(
        node.get_i64_strict("hp")?,
        node.get_i64_strict("max_hp")?,
        node.get_i64_strict("energy")?,
    );
    Ok(Player::new(id, username, stats))
}

/// Convert an `:Item` node to a domain item.
pub(super) fn node_to_item(node: &Node) -> Result<Item, RepoError> {
    let id = ItemId::new(node.get_string_strict("id")?).map_err(RepoError::serialization)?;
    let name = ItemName::new(node.get_string_strict("name")?).map_err(RepoError::serialization)?;
    let special_effect = node
        .get_optional_string("special_effect")
        .map(|s| s.parse::<SpecialEffect>())
        .transpose()
        .map_err(RepoError::serialization)?
        .unwrap_or_default();
    let kind = ItemKind::from_attributes(
        &node.get_string_strict("type")?,
        ItemAttributes {
            damage: node.get_optional_i64("damage"),
            heal_amount: node.get_optional_i64("heal_amount"),
            quantity: node.get_optional_i64("quantity"),
            durability: node.get_optional_i64("durability"),
            special_effect,
        },
    )
    .map_err(RepoError::serialization)?;
    Ok(Item::new(id, name, kind))
}

// =============================================================================
// Parameter Binding
// =============================================================================

/// Bind an optional counter as a `$field` value plus a `$has_field` flag.
///
/// Queries write the property with `CASE WHEN $has_field THEN $field END`, so an
/// absent counter stays absent on the node instead of being stored as zero.
pub(super) fn bind_optional(q: Query, field: &str, value: Option<i64>) -> Query {
    q.param(&format!("has_{field}"), value.is_some())
        .param(field, value.unwrap_or_default())
}

/// Bind every attribute of `item` used by the item-creation queries.
pub(super) fn bind_item(q: Query, item: &Item) -> Query {
    let special_effect = item.kind.special_effect();
    let q = q
        .param("item_id", item.id.to_string())
        .param("name", item.name.to_string())
        .param("type", item.kind.tag())
        .param("special_effect", special_effect.to_string())
        .param("has_special_effect", !special_effect.is_none());
    let q = bind_optional(q, "damage", item.kind.damage());
    let q = bind_optional(q, "heal_amount", item.kind.heal_amount());
    let q = bind_optional(q, "quantity", item.kind.quantity());
    bind_optional(q, "durability", item.kind.durability())
}

/// Property assignments for an `:Item` node bound with [`bind_item`].
pub(super) const ITEM_PROPERTIES: &str = "i.damage = CASE WHEN $has_damage THEN $damage END,
    i.heal_amount = CASE WHEN $has_heal_amount THEN $heal_amount END,
    i.quantity = CASE WHEN $has_quantity THEN $quantity END,
    i.durability = CASE WHEN $has_durability THEN $durability END,
    i.special_effect = CASE WHEN $has_special_effect THEN $special_effect END";
