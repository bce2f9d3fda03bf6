//! Neo4j schema initialization - constraints and indexes.

use neo4rs::{query, Graph};

/// Initialize Neo4j schema with required constraints and indexes.
///
/// This should be called once on startup. Constraints are created with
/// IF NOT EXISTS to be idempotent.
pub async fn ensure_schema(graph: &Graph) -> Result<(), neo4rs::Error> {
    // One player node per id; every store operation is keyed on it.
    graph
        .run(query(
            "CREATE CONSTRAINT player_id_unique IF NOT EXISTS
             FOR (p:Player) REQUIRE p.id IS UNIQUE",
        ))
        .await?;

    // Item ids repeat across players, so this is an index and not a constraint.
    graph
        .run(query(
            "CREATE INDEX item_id IF NOT EXISTS
             FOR (i:Item) ON (i.id)",
        ))
        .await?;

    tracing::info!("Neo4j schema initialized (constraints and indexes ensured)");
    Ok(())
}
