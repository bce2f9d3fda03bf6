//! Neo4j player repository implementation.
//!
//! Graph model:
//! `(:Player {id, username, hp, max_hp, energy})-[:POSSESSES {slot}]->(:Item {...})`
//!
//! Every `:Item` node belongs to exactly one player. `slot` keeps inventory
//! order; item-scoped writes act on the lowest slot carrying the item id, and
//! each of them is a single Cypher statement so the match and the write are
//! atomic.

use async_trait::async_trait;
use neo4rs::{query, Graph, Node, Query};
use rucksack_domain::{Item, ItemDelta, ItemId, Player, PlayerId};

use super::helpers::{bind_item, node_to_item, node_to_player, ITEM_PROPERTIES};
use crate::infrastructure::ports::{PlayerRepo, RepoError, WriteOutcome};

pub struct Neo4jPlayerRepo {
    graph: Graph,
}

impl Neo4jPlayerRepo {
    pub fn new(graph: Graph) -> Self {
        Self { graph }
    }

    /// Run a player-with-inventory query returning `p` and `i` per row.
    async fn load_player(
        &self,
        q: Query,
        operation: &'static str,
    ) -> Result<Option<Player>, RepoError> {
        let mut result = self
            .graph
            .execute(q)
            .await
            .map_err(|e| RepoError::database(operation, e))?;

        let mut player: Option<Player> = None;
        while let Some(row) = result
            .next()
            .await
            .map_err(|e| RepoError::database(operation, e))?
        {
            if player.is_none() {
                let node: Node = row
                    .get("p")
                    .map_err(|e| RepoError::serialization(format!("Missing player node: {e}")))?;
                player = Some(node_to_player(&node)?);
            }
            // OPTIONAL MATCH yields a null `i` for an empty inventory.
            if let (Some(player), Ok(node)) = (player.as_mut(), row.get::<Node>("i")) {
                player.push_item(node_to_item(&node)?);
            }
        }
        Ok(player)
    }

    /// Run a write query returning a single `matched` count.
    async fn write_counted(
        &self,
        q: Query,
        operation: &'static str,
    ) -> Result<WriteOutcome, RepoError> {
        let mut result = self
            .graph
            .execute(q)
            .await
            .map_err(|e| RepoError::database(operation, e))?;

        let matched = match result
            .next()
            .await
            .map_err(|e| RepoError::database(operation, e))?
        {
            Some(row) => row.get::<i64>("matched").unwrap_or(0),
            None => 0,
        };
        Ok(WriteOutcome::from_matched(matched))
    }
}

#[async_trait]
impl PlayerRepo for Neo4jPlayerRepo {
    async fn get(&self, id: &PlayerId) -> Result<Option<Player>, RepoError> {
        let q = query(
            "MATCH (p:Player {id: $id})
            OPTIONAL MATCH (p)-[r:POSSESSES]->(i:Item)
            RETURN p, i
            ORDER BY r.slot",
        )
        .param("id", id.to_string());

        self.load_player(q, "get_player").await
    }

    async fn get_with_item(
        &self,
        id: &PlayerId,
        item_id: &ItemId,
    ) -> Result<Option<Player>, RepoError> {
        let q = query(
            "MATCH (p:Player {id: $id})
            WHERE EXISTS { (p)-[:POSSESSES]->(:Item {id: $item_id}) }
            OPTIONAL MATCH (p)-[r:POSSESSES]->(i:Item)
            RETURN p, i
            ORDER BY r.slot",
        )
        .param("id", id.to_string())
        .param("item_id", item_id.to_string());

        self.load_player(q, "get_player_with_item").await
    }

    async fn increment_item(
        &self,
        id: &PlayerId,
        item_id: &ItemId,
        delta: &ItemDelta,
    ) -> Result<WriteOutcome, RepoError> {
        // Counters missing on the node stay missing: null + n is null.
        let q = query(
            "MATCH (p:Player {id: $id})-[r:POSSESSES]->(i:Item {id: $item_id})
            WITH p, i, r ORDER BY r.slot LIMIT 1
            SET p.hp = p.hp + $stats_hp,
                i.quantity = i.quantity + $quantity,
                i.durability = i.durability + $durability
            RETURN count(i) AS matched",
        )
        .param("id", id.to_string())
        .param("item_id", item_id.to_string())
        .param("stats_hp", delta.stats_hp.unwrap_or(0))
        .param("quantity", delta.quantity.unwrap_or(0))
        .param("durability", delta.durability.unwrap_or(0));

        let outcome = self.write_counted(q, "increment_item").await?;
        tracing::debug!(player_id = %id, item_id = %item_id, ?delta, ?outcome, "Incremented item");
        Ok(outcome)
    }

    async fn remove_item(
        &self,
        id: &PlayerId,
        item_id: &ItemId,
    ) -> Result<WriteOutcome, RepoError> {
        let q = query(
            "MATCH (p:Player {id: $id})-[r:POSSESSES]->(i:Item {id: $item_id})
            WITH i, r ORDER BY r.slot LIMIT 1
            DETACH DELETE i
            RETURN count(*) AS matched",
        )
        .param("id", id.to_string())
        .param("item_id", item_id.to_string());

        let outcome = self.write_counted(q, "remove_item").await?;
        tracing::debug!(player_id = %id, item_id = %item_id, ?outcome, "Removed item");
        Ok(outcome)
    }

    async fn append_item(&self, id: &PlayerId, item: &Item) -> Result<WriteOutcome, RepoError> {
        // The player node is write-locked before the slot aggregate so
        // concurrent appends serialize and never share a slot.
        let q = query(&format!(
            "MATCH (p:Player {{id: $id}})
            SET p.revision = coalesce(p.revision, 0) + 1
            WITH p
            OPTIONAL MATCH (p)-[r:POSSESSES]->(:Item)
            WITH p, coalesce(max(r.slot), -1) + 1 AS slot
            CREATE (p)-[:POSSESSES {{slot: slot}}]->(i:Item {{id: $item_id, name: $name, type: $type}})
            SET {ITEM_PROPERTIES}
            RETURN count(i) AS matched"
        ))
        .param("id", id.to_string());

        let outcome = self
            .write_counted(bind_item(q, item), "append_item")
            .await?;
        tracing::debug!(player_id = %id, item_id = %item.id, ?outcome, "Appended item");
        Ok(outcome)
    }

    async fn replace(&self, player: &Player) -> Result<(), RepoError> {
        let mut txn = self
            .graph
            .start_txn()
            .await
            .map_err(|e| RepoError::database("replace_player", e))?;

        let delete_q = query(
            "MATCH (p:Player {id: $id})
            OPTIONAL MATCH (p)-[:POSSESSES]->(i:Item)
            DETACH DELETE i, p",
        )
        .param("id", player.id().to_string());

        let create_q = query(
            "CREATE (:Player {id: $id, username: $username, hp: $hp, max_hp: $max_hp, energy: $energy})",
        )
        .param("id", player.id().to_string())
        .param("username", player.username().to_string())
        .param("hp", player.stats().hp)
        .param("max_hp", player.stats().max_hp)
        .param("energy", player.stats().energy);

        let mut queries = vec![delete_q, create_q];
        for (slot, item) in player.inventory().iter().enumerate() {
            let q = query(&format!(
                "MATCH (p:Player {{id: $id}})
                CREATE (p)-[:POSSESSES {{slot: $slot}}]->(i:Item {{id: $item_id, name: $name, type: $type}})
                SET {ITEM_PROPERTIES}"
            ))
            .param("id", player.id().to_string())
            .param("slot", slot as i64);
            queries.push(bind_item(q, item));
        }

        txn.run_queries(queries)
            .await
            .map_err(|e| RepoError::database("replace_player", e))?;
        txn.commit()
            .await
            .map_err(|e| RepoError::database("replace_player", e))?;

        tracing::info!(
            player_id = %player.id(),
            items = player.inventory().len(),
            "Replaced player"
        );
        Ok(())
    }
}
