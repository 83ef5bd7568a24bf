//! API integration tests
//!
//! These run against a live server backed by a migrated database:
//! `cargo test -- --ignored`

use chrono::{Duration, Local, NaiveDate};
use reqwest::{Client, StatusCode};
use serde_json::{json, Value};

const BASE_URL: &str = "http://localhost:8080/api/v1";

/// First seeded equipment type
async fn first_type_id(client: &Client) -> i64 {
    let types: Value = client
        .get(format!("{}/equipment/types", BASE_URL))
        .send()
        .await
        .expect("Failed to send request")
        .json()
        .await
        .expect("Failed to parse response");
    types[0]["id"].as_i64().expect("No equipment type seeded")
}

async fn create_equipment(client: &Client, body: Value) -> reqwest::Response {
    client
        .post(format!("{}/equipment", BASE_URL))
        .json(&body)
        .send()
        .await
        .expect("Failed to send request")
}

fn days_ago(n: i64) -> NaiveDate {
    Local::now().date_naive() - Duration::days(n)
}

#[tokio::test]
#[ignore] // Run with: cargo test -- --ignored
async fn test_health_check() {
    let client = Client::new();

    let response = client
        .get(format!("{}/health", BASE_URL))
        .send()
        .await
        .expect("Failed to send request");

    assert!(response.status().is_success());

    let body: Value = response.json().await.expect("Failed to parse response");
    assert_eq!(body["status"], "healthy");
}

#[tokio::test]
#[ignore]
async fn test_create_inactive_without_date() {
    let client = Client::new();
    let type_id = first_type_id(&client).await;

    let response = create_equipment(
        &client,
        json!({ "name": "Mixer-1", "typeId": type_id, "status": "INACTIVE", "lastCleanedDate": null }),
    )
    .await;

    assert_eq!(response.status(), StatusCode::CREATED);
    let body: Value = response.json().await.expect("Failed to parse response");
    assert_eq!(body["status"], "INACTIVE");
    assert!(body["lastCleanedDate"].is_null());
}

#[tokio::test]
#[ignore]
async fn test_create_active_without_date_is_rejected() {
    let client = Client::new();
    let type_id = first_type_id(&client).await;

    let response = create_equipment(
        &client,
        json!({ "name": "Mixer-2", "typeId": type_id, "status": "ACTIVE", "lastCleanedDate": null }),
    )
    .await;

    assert_eq!(response.status(), StatusCode::UNPROCESSABLE_ENTITY);
}

#[tokio::test]
#[ignore]
async fn test_active_cleaning_window_boundary() {
    let client = Client::new();
    let type_id = first_type_id(&client).await;

    let stale = create_equipment(
        &client,
        json!({ "name": "Pump-31", "typeId": type_id, "status": "ACTIVE", "lastCleanedDate": days_ago(31) }),
    )
    .await;
    assert_eq!(stale.status(), StatusCode::UNPROCESSABLE_ENTITY);

    let boundary = create_equipment(
        &client,
        json!({ "name": "Pump-30", "typeId": type_id, "status": "ACTIVE", "lastCleanedDate": days_ago(30) }),
    )
    .await;
    assert_eq!(boundary.status(), StatusCode::CREATED);
}

#[tokio::test]
#[ignore]
async fn test_unknown_type_is_not_found() {
    let client = Client::new();

    let response = create_equipment(
        &client,
        json!({ "name": "Ghost", "typeId": i64::MAX, "status": "INACTIVE" }),
    )
    .await;

    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}

#[tokio::test]
#[ignore]
async fn test_maintenance_reactivates_equipment() {
    let client = Client::new();
    let type_id = first_type_id(&client).await;

    let created: Value = create_equipment(
        &client,
        json!({ "name": "Mixer-1", "typeId": type_id, "status": "INACTIVE" }),
    )
    .await
    .json()
    .await
    .expect("Failed to parse response");
    let id = created["id"].as_i64().expect("No id");

    let mut log_ids = Vec::new();
    for (date, notes) in [
        ("2024-01-01", "cleaned"),
        ("2024-02-01", "deep clean"),
        ("2024-01-15", "check"),
        ("2024-02-01", "second pass"),
    ] {
        let response = client
            .post(format!("{}/maintenance", BASE_URL))
            .json(&json!({
                "equipmentId": id,
                "maintenanceDate": date,
                "notes": notes,
                "performedBy": "Alice"
            }))
            .send()
            .await
            .expect("Failed to send request");
        assert_eq!(response.status(), StatusCode::CREATED);
        let log: Value = response.json().await.expect("Failed to parse response");
        log_ids.push(log["id"].as_i64().expect("No id"));
    }

    let equipment: Value = client
        .get(format!("{}/equipment/{}", BASE_URL, id))
        .send()
        .await
        .expect("Failed to send request")
        .json()
        .await
        .expect("Failed to parse response");
    assert_eq!(equipment["status"], "ACTIVE");
    assert_eq!(equipment["lastCleanedDate"], "2024-02-01");

    let history: Value = client
        .get(format!("{}/equipment/{}/maintenance", BASE_URL, id))
        .send()
        .await
        .expect("Failed to send request")
        .json()
        .await
        .expect("Failed to parse response");
    let entries: Vec<(&str, i64)> = history
        .as_array()
        .expect("History is not an array")
        .iter()
        .filter_map(|log| Some((log["maintenanceDate"].as_str()?, log["id"].as_i64()?)))
        .collect();

    // Same-day entries: the later insert comes first
    assert_eq!(
        entries,
        vec![
            ("2024-02-01", log_ids[3]),
            ("2024-02-01", log_ids[1]),
            ("2024-01-15", log_ids[2]),
            ("2024-01-01", log_ids[0]),
        ]
    );
}

#[tokio::test]
#[ignore]
async fn test_latest_logged_date_wins_even_if_older() {
    let client = Client::new();
    let type_id = first_type_id(&client).await;

    let created: Value = create_equipment(
        &client,
        json!({ "name": "Mixer-9", "typeId": type_id, "status": "MAINTENANCE" }),
    )
    .await
    .json()
    .await
    .expect("Failed to parse response");
    let id = created["id"].as_i64().expect("No id");

    for date in ["2024-02-01", "2024-01-15"] {
        let response = client
            .post(format!("{}/maintenance", BASE_URL))
            .json(&json!({ "equipmentId": id, "maintenanceDate": date }))
            .send()
            .await
            .expect("Failed to send request");
        assert_eq!(response.status(), StatusCode::CREATED);
    }

    let equipment: Value = client
        .get(format!("{}/equipment/{}", BASE_URL, id))
        .send()
        .await
        .expect("Failed to send request")
        .json()
        .await
        .expect("Failed to parse response");
    assert_eq!(equipment["status"], "ACTIVE");
    assert_eq!(equipment["lastCleanedDate"], "2024-01-15");
}

#[tokio::test]
#[ignore]
async fn test_search_treats_wildcards_literally() {
    let client = Client::new();
    let type_id = first_type_id(&client).await;

    for name in ["Tank 100% duty", "Tank 1000 duty", "Tank a_b", "Tank axb"] {
        let response = create_equipment(
            &client,
            json!({ "name": name, "typeId": type_id, "status": "INACTIVE" }),
        )
        .await;
        assert_eq!(response.status(), StatusCode::CREATED);
    }

    for (search, expected) in [("100%", "Tank 100% duty"), ("a_b", "Tank a_b")] {
        let list: Value = client
            .get(format!("{}/equipment", BASE_URL))
            .query(&[("search", search)])
            .send()
            .await
            .expect("Failed to send request")
            .json()
            .await
            .expect("Failed to parse response");
        let names: Vec<&str> = list
            .as_array()
            .expect("List is not an array")
            .iter()
            .filter_map(|e| e["name"].as_str())
            .collect();
        assert!(names.contains(&expected));
        assert!(names.iter().all(|n| n.contains(search)), "{:?}", names);
    }
}

#[tokio::test]
#[ignore]
async fn test_delete_equipment() {
    let client = Client::new();
    let type_id = first_type_id(&client).await;

    let created: Value = create_equipment(
        &client,
        json!({ "name": "Valve-X", "typeId": type_id, "status": "MAINTENANCE" }),
    )
    .await
    .json()
    .await
    .expect("Failed to parse response");
    let id = created["id"].as_i64().expect("No id");

    let response = client
        .delete(format!("{}/equipment/{}", BASE_URL, id))
        .send()
        .await
        .expect("Failed to send request");
    assert_eq!(response.status(), StatusCode::NO_CONTENT);

    let again = client
        .delete(format!("{}/equipment/{}", BASE_URL, id))
        .send()
        .await
        .expect("Failed to send request");
    assert_eq!(again.status(), StatusCode::NOT_FOUND);

    let list: Value = client
        .get(format!("{}/equipment", BASE_URL))
        .send()
        .await
        .expect("Failed to send request")
        .json()
        .await
        .expect("Failed to parse response");
    assert!(list
        .as_array()
        .expect("List is not an array")
        .iter()
        .all(|e| e["id"].as_i64() != Some(id)));

    let history = client
        .get(format!("{}/equipment/{}/maintenance", BASE_URL, id))
        .send()
        .await
        .expect("Failed to send request");
    assert_eq!(history.status(), StatusCode::NOT_FOUND);
}

#[tokio::test]
#[ignore]
async fn test_list_with_unknown_status() {
    let client = Client::new();

    let response = client
        .get(format!("{}/equipment?status=bogus", BASE_URL))
        .send()
        .await
        .expect("Failed to send request");

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
}

#[tokio::test]
#[ignore]
async fn test_list_with_status_filter() {
    let client = Client::new();

    let response = client
        .get(format!("{}/equipment?status=inactive", BASE_URL))
        .send()
        .await
        .expect("Failed to send request");

    assert!(response.status().is_success());
    let body: Value = response.json().await.expect("Failed to parse response");
    let items = body.as_array().expect("List is not an array");
    assert!(items.iter().all(|e| e["status"] == "INACTIVE"));

    let ids: Vec<i64> = items.iter().filter_map(|e| e["id"].as_i64()).collect();
    assert!(ids.windows(2).all(|w| w[0] > w[1]));
}
