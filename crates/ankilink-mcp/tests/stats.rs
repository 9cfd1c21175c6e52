//! Tests for the combined statistics handler.

mod common;

use ankilink_mcp::handlers::stats::{StatsRequest, get_stats};
use common::*;
use serde_json::json;

fn request(stat_type: &str) -> StatsRequest {
    StatsRequest {
        stat_type: stat_type.to_string(),
        deck_name: None,
        include_cards: false,
    }
}

#[tokio::test]
async fn reviews_section_lists_the_raw_series() {
    let server = setup_mock_server().await;
    let client = client_for_mock(&server);

    mock_action(
        &server,
        "getNumCardsReviewedByDay",
        mock_anki_response(json!([["2024-01-01", 50], ["2024-01-02", 75]])),
    )
    .await;

    let blocks = get_stats(&client, &request("reviews")).await;

    assert_eq!(
        blocks,
        vec!["Cards reviewed by day:\n2024-01-01: 50 cards\n2024-01-02: 75 cards".to_string()]
    );
}

#[tokio::test]
async fn difficulty_section_averages_ease_factors() {
    let server = setup_mock_server().await;
    let client = client_for_mock(&server);

    mock_action(&server, "findNotes", mock_anki_response(json!([101, 102]))).await;
    mock_action(
        &server,
        "notesInfo",
        mock_anki_response(json!([
            {"noteId": 101, "modelName": "Basic", "cards": [2001, 2002]},
            {"noteId": 102, "modelName": "Basic", "cards": [2003]}
        ])),
    )
    .await;
    mock_action(
        &server,
        "getEaseFactors",
        mock_anki_response(json!([2500, 2300, 2400])),
    )
    .await;

    let blocks = get_stats(&client, &request("difficulty")).await;

    assert_eq!(blocks, vec!["Average ease factor: 2400.00\n".to_string()]);
}

#[tokio::test]
async fn difficulty_lists_per_card_factors_when_requested() {
    let server = setup_mock_server().await;
    let client = client_for_mock(&server);

    mock_action(&server, "findNotes", mock_anki_response(json!([101]))).await;
    mock_action(
        &server,
        "notesInfo",
        mock_anki_response(json!([
            {"noteId": 101, "modelName": "Basic", "cards": [2001, 2002]}
        ])),
    )
    .await;
    mock_action(
        &server,
        "getEaseFactors",
        mock_anki_response(json!([2500, 2300])),
    )
    .await;

    let mut req = request("difficulty");
    req.include_cards = true;
    let blocks = get_stats(&client, &req).await;

    assert_eq!(
        blocks,
        vec![
            "Average ease factor: 2400.00\nIndividual card ease factors:\nCard 2001: 2500\nCard 2002: 2300"
                .to_string()
        ]
    );
}

#[tokio::test]
async fn due_section_requires_a_deck_name() {
    let server = setup_mock_server().await;
    let client = client_for_mock(&server);
    // No mocks mounted: without a deck the section makes no remote call.

    let blocks = get_stats(&client, &request("due")).await;

    assert_eq!(
        blocks,
        vec!["No statistics available for the requested parameters.".to_string()]
    );
}

#[tokio::test]
async fn due_section_reports_per_deck_counters() {
    let server = setup_mock_server().await;
    let client = client_for_mock(&server);

    mock_action(
        &server,
        "getDeckStats",
        mock_anki_response(json!([
            {"name": "TestDeck", "new_count": 10, "learn_count": 5, "review_count": 25}
        ])),
    )
    .await;

    let mut req = request("due");
    req.deck_name = Some("TestDeck".to_string());
    let blocks = get_stats(&client, &req).await;

    assert_eq!(
        blocks,
        vec!["Due cards in TestDeck:\nNew: 10\nLearning: 5\nReview: 25\n".to_string()]
    );
}

#[tokio::test]
async fn retention_section_is_a_static_notice() {
    let server = setup_mock_server().await;
    let client = client_for_mock(&server);

    let blocks = get_stats(&client, &request("retention")).await;

    assert_eq!(
        blocks,
        vec![
            "Retention statistics are not directly available through the AnkiConnect API."
                .to_string()
        ]
    );
}

#[tokio::test]
async fn failing_sections_are_collected_not_fatal() {
    let server = setup_mock_server().await;
    let client = client_for_mock(&server);

    mock_action(
        &server,
        "getNumCardsReviewedByDay",
        mock_anki_response(json!([["2024-01-01", 50]])),
    )
    .await;
    // Difficulty finds nothing; due is skipped with no deck filter.
    mock_action(&server, "findNotes", mock_anki_response(json!([]))).await;

    let blocks = get_stats(&client, &request("all")).await;

    assert_eq!(blocks.len(), 1);
    assert_eq!(
        blocks[0],
        "Cards reviewed by day:\n2024-01-01: 50 cards\n\n\
         Retention statistics are not directly available through the AnkiConnect API.\n\n\
         Errors encountered:\n\
         Failed to find notes or no notes found: No notes found"
    );
}

#[tokio::test]
async fn all_sections_failing_still_yields_one_block() {
    let server = setup_mock_server().await;
    let client = client_for_mock(&server);

    mock_action(
        &server,
        "getNumCardsReviewedByDay",
        mock_anki_error("database locked"),
    )
    .await;

    let blocks = get_stats(&client, &request("reviews")).await;

    assert_eq!(
        blocks,
        vec![
            "No statistics available for the requested parameters.\n\n\
             Errors encountered:\n\
             Failed to retrieve review statistics: AnkiConnect error: database locked"
                .to_string()
        ]
    );
}

#[tokio::test]
async fn deck_filter_scopes_the_difficulty_search() {
    let server = setup_mock_server().await;
    let client = client_for_mock(&server);

    mock_action_with_params(
        &server,
        "findNotes",
        json!({"query": "deck:Japanese"}),
        mock_anki_response(json!([301])),
    )
    .await;
    mock_action(
        &server,
        "notesInfo",
        mock_anki_response(json!([
            {"noteId": 301, "modelName": "Basic", "cards": [4001]}
        ])),
    )
    .await;
    mock_action(&server, "getEaseFactors", mock_anki_response(json!([2100]))).await;

    let mut req = request("difficulty");
    req.deck_name = Some("Japanese".to_string());
    let blocks = get_stats(&client, &req).await;

    assert_eq!(blocks, vec!["Average ease factor: 2100.00\n".to_string()]);
}
