//! Neo4j player store tests against a real database via testcontainers.

use neo4rs::query;
use rucksack_domain::ItemDelta;

use super::test_harness::Neo4jTestHarness;
use super::Neo4jPlayerRepo;
use crate::infrastructure::ports::{PlayerRepo, WriteOutcome};
use crate::test_fixtures::{items, players};

async fn seeded_repo() -> (Neo4jTestHarness, Neo4jPlayerRepo) {
    let harness = Neo4jTestHarness::start()
        .await
        .expect("Failed to start Neo4j harness");
    let repo = Neo4jPlayerRepo::new(harness.graph_clone());
    repo.replace(&players::tony()).await.expect("seed player");
    (harness, repo)
}

#[tokio::test]
#[ignore = "requires docker (testcontainers)"]
async fn replace_then_get_round_trips_inventory_in_order() {
    let (_harness, repo) = seeded_repo().await;
    let tony = players::tony();

    let loaded = repo.get(tony.id()).await.unwrap().expect("player exists");

    assert_eq!(loaded, tony);
}

#[tokio::test]
#[ignore = "requires docker (testcontainers)"]
async fn get_with_item_requires_item_presence() {
    let (_harness, repo) = seeded_repo().await;
    let id = players::id("Agent_46");

    assert!(repo
        .get_with_item(&id, &items::id("w_1"))
        .await
        .unwrap()
        .is_some());
    assert!(repo
        .get_with_item(&id, &items::id("nope"))
        .await
        .unwrap()
        .is_none());
}

#[tokio::test]
#[ignore = "requires docker (testcontainers)"]
async fn increment_item_updates_counter_and_hp_atomically() {
    let (_harness, repo) = seeded_repo().await;
    let id = players::id("Agent_46");
    let potion = items::id("c_1");

    let outcome = repo
        .increment_item(
            &id,
            &potion,
            &ItemDelta::new().with_stats_hp(50).with_quantity(-1),
        )
        .await
        .unwrap();

    assert_eq!(outcome, WriteOutcome::Applied);
    let player = repo.get(&id).await.unwrap().unwrap();
    assert_eq!(player.stats().hp, 100);
    assert_eq!(player.find_item(&potion).unwrap().kind.quantity(), Some(4));
}

#[tokio::test]
#[ignore = "requires docker (testcontainers)"]
async fn increment_leaves_absent_counters_absent() {
    let (_harness, repo) = seeded_repo().await;
    let id = players::id("Agent_46");
    let elixir = items::id("c_2");

    repo.increment_item(
        &id,
        &elixir,
        &ItemDelta::new().with_stats_hp(100).with_quantity(-1),
    )
    .await
    .unwrap();

    let player = repo.get(&id).await.unwrap().unwrap();
    assert_eq!(player.find_item(&elixir).unwrap().kind.quantity(), None);
}

#[tokio::test]
#[ignore = "requires docker (testcontainers)"]
async fn writes_on_missing_item_do_not_match() {
    let (_harness, repo) = seeded_repo().await;
    let id = players::id("Agent_46");
    let missing = items::id("nope");

    let increment = repo
        .increment_item(&id, &missing, &ItemDelta::new().with_stats_hp(10))
        .await
        .unwrap();
    let remove = repo.remove_item(&id, &missing).await.unwrap();

    assert_eq!(increment, WriteOutcome::NoMatch);
    assert_eq!(remove, WriteOutcome::NoMatch);
    assert_eq!(repo.get(&id).await.unwrap().unwrap().stats().hp, 50);
}

#[tokio::test]
#[ignore = "requires docker (testcontainers)"]
async fn remove_item_removes_only_first_duplicate() {
    let (_harness, repo) = seeded_repo().await;
    let id = players::id("Agent_46");
    let duplicate = items::weapon("w_1", Some(1), Some(9));
    repo.append_item(&id, &duplicate).await.unwrap();

    let outcome = repo.remove_item(&id, &items::id("w_1")).await.unwrap();

    assert_eq!(outcome, WriteOutcome::Applied);
    let player = repo.get(&id).await.unwrap().unwrap();
    let remaining = player.find_item(&items::id("w_1")).unwrap();
    assert_eq!(remaining.kind.durability(), Some(9));
    assert_eq!(player.inventory().last().unwrap().id.as_str(), "w_1");
}

#[tokio::test]
#[ignore = "requires docker (testcontainers)"]
async fn append_item_to_unknown_player_does_not_match() {
    let (_harness, repo) = seeded_repo().await;

    let outcome = repo
        .append_item(
            &players::id("ghost"),
            &items::quest_item("q_9", Some(1)),
        )
        .await
        .unwrap();

    assert_eq!(outcome, WriteOutcome::NoMatch);
    assert!(repo.get(&players::id("ghost")).await.unwrap().is_none());
}

#[tokio::test(flavor = "multi_thread", worker_threads = 4)]
#[ignore = "requires docker (testcontainers)"]
async fn concurrent_appends_get_distinct_slots() {
    let (harness, repo) = seeded_repo().await;
    let id = players::id("Agent_46");
    let before = players::tony().inventory().len();

    let first = items::quest_item("q_10", Some(1));
    let second = items::quest_item("q_11", Some(1));
    let third = items::quest_item("q_12", Some(1));
    let fourth = items::quest_item("q_13", Some(1));
    let (a, b, c, d) = tokio::join!(
        repo.append_item(&id, &first),
        repo.append_item(&id, &second),
        repo.append_item(&id, &third),
        repo.append_item(&id, &fourth),
    );
    for outcome in [a, b, c, d] {
        assert_eq!(outcome.unwrap(), WriteOutcome::Applied);
    }

    let player = repo.get(&id).await.unwrap().expect("player exists");
    assert_eq!(player.inventory().len(), before + 4);
    let appended: Vec<&str> = player.inventory()[before..]
        .iter()
        .map(|item| item.id.as_str())
        .collect();
    for item_id in ["q_10", "q_11", "q_12", "q_13"] {
        assert_eq!(appended.iter().filter(|id| **id == item_id).count(), 1);
    }

    let q = query(
        "MATCH (:Player {id: $id})-[r:POSSESSES]->(:Item)
        RETURN count(r) AS total, count(DISTINCT r.slot) AS slots",
    )
    .param("id", "Agent_46");
    let mut rows = harness.graph_clone().execute(q).await.unwrap();
    let row = rows.next().await.unwrap().expect("one row");
    assert_eq!(row.get::<i64>("total").unwrap(), row.get::<i64>("slots").unwrap());
}

#[tokio::test]
#[ignore = "requires docker (testcontainers)"]
async fn replace_discards_previous_state() {
    let (_harness, repo) = seeded_repo().await;
    let id = players::id("Agent_46");
    repo.remove_item(&id, &items::id("w_1")).await.unwrap();
    repo.append_item(&id, &items::intoxicating("c_9", -5, 1))
        .await
        .unwrap();

    repo.replace(&players::tony()).await.unwrap();

    assert_eq!(repo.get(&id).await.unwrap().unwrap(), players::tony());
}
