// tests/api_tests.rs

use std::sync::Arc;

use trivia_api::routes;
use trivia_api::service::QueryService;
use trivia_api::state::AppState;
use trivia_api::store::memory::{MemoryCategoryStore, MemoryQuestionStore};

/// Helper function to spawn the app on a random port for testing.
/// Returns the base URL (e.g., "http://127.0.0.1:12345").
///
/// The app runs on the in-memory stores, so each test gets its own fully
/// isolated dataset; the passed-in question store handle stays shared with
/// the test for seeding and inspection.
async fn spawn_app(questions: MemoryQuestionStore) -> String {
    let categories = MemoryCategoryStore::with_default_categories();
    let service = QueryService::new(Arc::new(questions), Arc::new(categories));
    let state = AppState { service };

    let app = routes::create_router(state);

    // Bind to port 0 to get a random available port
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0")
        .await
        .expect("Failed to bind random port");

    let port = listener.local_addr().unwrap().port();
    let address = format!("http://127.0.0.1:{}", port);

    // Spawn the server in the background
    tokio::spawn(async move {
        axum::serve(listener, app).await.unwrap();
    });

    address
}

/// Seeds `count` questions in category 1 and returns the store.
fn store_with_questions(count: usize) -> MemoryQuestionStore {
    let store = MemoryQuestionStore::new();
    for i in 1..=count {
        store.seed_raw(&format!("Question {}", i), &format!("Answer {}", i), Some("1"), 1);
    }
    store
}

#[tokio::test]
async fn categories_come_back_as_id_label_map() {
    let address = spawn_app(MemoryQuestionStore::new()).await;
    let client = reqwest::Client::new();

    let body: serde_json::Value = client
        .get(format!("{}/categories", address))
        .send()
        .await
        .expect("Failed to execute request")
        .json()
        .await
        .expect("Failed to parse json");

    assert_eq!(body["success"], true);
    assert_eq!(body["categories"]["1"], "Science");
    assert_eq!(body["categories"]["6"], "Sports");
    assert_eq!(body["categories"].as_object().unwrap().len(), 6);
}

#[tokio::test]
async fn first_page_holds_ten_questions() {
    let address = spawn_app(store_with_questions(15)).await;
    let client = reqwest::Client::new();

    let body: serde_json::Value = client
        .get(format!("{}/questions", address))
        .send()
        .await
        .expect("Failed to execute request")
        .json()
        .await
        .expect("Failed to parse json");

    assert_eq!(body["success"], true);
    assert_eq!(body["questions"].as_array().unwrap().len(), 10);
    assert_eq!(body["numOfQuestions"], 15);
    assert_eq!(body["categories"], 6);
    assert_eq!(body["current_category"], serde_json::Value::Null);
}

#[tokio::test]
async fn second_page_holds_the_remainder() {
    let address = spawn_app(store_with_questions(15)).await;
    let client = reqwest::Client::new();

    let body: serde_json::Value = client
        .get(format!("{}/questions?page=2", address))
        .send()
        .await
        .expect("Failed to execute request")
        .json()
        .await
        .expect("Failed to parse json");

    let questions = body["questions"].as_array().unwrap();
    assert_eq!(questions.len(), 5);
    // Ordering is stable: page 2 starts right after page 1.
    assert_eq!(questions[0]["id"], 11);
}

#[tokio::test]
async fn page_past_the_end_is_404() {
    let address = spawn_app(store_with_questions(15)).await;
    let client = reqwest::Client::new();

    let response = client
        .get(format!("{}/questions?page=9", address))
        .send()
        .await
        .expect("Failed to execute request");

    assert_eq!(response.status().as_u16(), 404);
    let body: serde_json::Value = response.json().await.unwrap();
    assert_eq!(body["success"], false);
    assert_eq!(body["error"], 404);
}

#[tokio::test]
async fn page_one_of_an_empty_store_is_404() {
    let address = spawn_app(MemoryQuestionStore::new()).await;
    let client = reqwest::Client::new();

    let response = client
        .get(format!("{}/questions", address))
        .send()
        .await
        .expect("Failed to execute request");

    assert_eq!(response.status().as_u16(), 404);
}

#[tokio::test]
async fn search_is_case_insensitive() {
    let store = MemoryQuestionStore::new();
    store.seed_raw("What is the title of the book?", "Moby Dick", Some("2"), 2);
    store.seed_raw("Who painted it?", "Vermeer", Some("2"), 3);
    let address = spawn_app(store).await;
    let client = reqwest::Client::new();

    let mut results = Vec::new();
    for term in ["TITLE", "title"] {
        let body: serde_json::Value = client
            .post(format!("{}/questions/search", address))
            .json(&serde_json::json!({ "searchTerm": term }))
            .send()
            .await
            .expect("Failed to execute request")
            .json()
            .await
            .expect("Failed to parse json");

        assert_eq!(body["success"], true);
        assert_eq!(body["total_questions"], 1);
        results.push(body["questions"].clone());
    }

    assert_eq!(results[0], results[1]);
    assert_eq!(results[0][0]["id"], 1);
}

#[tokio::test]
async fn search_without_a_term_is_400() {
    let address = spawn_app(store_with_questions(3)).await;
    let client = reqwest::Client::new();

    for body in [
        serde_json::json!({}),
        serde_json::json!({ "searchTerm": "" }),
        serde_json::json!({ "searchTerm": "   " }),
    ] {
        let response = client
            .post(format!("{}/questions/search", address))
            .json(&body)
            .send()
            .await
            .expect("Failed to execute request");

        assert_eq!(response.status().as_u16(), 400, "body: {}", body);
    }
}

#[tokio::test]
async fn search_with_no_matches_is_an_empty_success() {
    let address = spawn_app(store_with_questions(3)).await;
    let client = reqwest::Client::new();

    let body: serde_json::Value = client
        .post(format!("{}/questions/search", address))
        .json(&serde_json::json!({ "searchTerm": "zebra" }))
        .send()
        .await
        .expect("Failed to execute request")
        .json()
        .await
        .expect("Failed to parse json");

    assert_eq!(body["success"], true);
    assert_eq!(body["total_questions"], 0);
}

#[tokio::test]
async fn creating_a_question_returns_the_record() {
    let address = spawn_app(MemoryQuestionStore::new()).await;
    let client = reqwest::Client::new();

    let response = client
        .post(format!("{}/questions", address))
        .json(&serde_json::json!({
            "question": "What boxer's original name is Cassius Clay?",
            "answer": "Muhammad Ali",
            "difficulty": 1,
            "category": 4
        }))
        .send()
        .await
        .expect("Failed to execute request");

    assert_eq!(response.status().as_u16(), 201);
    let body: serde_json::Value = response.json().await.unwrap();
    assert_eq!(body["success"], true);
    assert_eq!(body["numOfQuestions"], 1);
    assert_eq!(body["question"]["category"], 4);

    // The new question shows up in the listing.
    let listing: serde_json::Value = client
        .get(format!("{}/questions", address))
        .send()
        .await
        .unwrap()
        .json()
        .await
        .unwrap();
    assert_eq!(
        listing["questions"][0]["question"],
        "What boxer's original name is Cassius Clay?"
    );
}

#[tokio::test]
async fn creating_a_question_accepts_a_string_category() {
    let address = spawn_app(MemoryQuestionStore::new()).await;
    let client = reqwest::Client::new();

    let response = client
        .post(format!("{}/questions", address))
        .json(&serde_json::json!({
            "question": "Which dung beetle was worshipped by the ancient Egyptians?",
            "answer": "Scarab",
            "category": "4"
        }))
        .send()
        .await
        .expect("Failed to execute request");

    assert_eq!(response.status().as_u16(), 201);
    let body: serde_json::Value = response.json().await.unwrap();
    assert_eq!(body["question"]["category"], 4);
    // difficulty defaults to 0 when omitted
    assert_eq!(body["question"]["difficulty"], 0);
}

#[tokio::test]
async fn creating_a_question_with_missing_fields_is_400() {
    let address = spawn_app(MemoryQuestionStore::new()).await;
    let client = reqwest::Client::new();

    for body in [
        serde_json::json!({ "answer": "Muhammad Ali" }),
        serde_json::json!({ "question": "Who?", "answer": "" }),
        serde_json::json!({ "question": "", "answer": "Muhammad Ali" }),
    ] {
        let response = client
            .post(format!("{}/questions", address))
            .json(&body)
            .send()
            .await
            .expect("Failed to execute request");

        // Validation failure, not the original's 405.
        assert_eq!(response.status().as_u16(), 400, "body: {}", body);
    }
}

#[tokio::test]
async fn creating_a_question_with_an_unknown_category_is_400() {
    let address = spawn_app(MemoryQuestionStore::new()).await;
    let client = reqwest::Client::new();

    let response = client
        .post(format!("{}/questions", address))
        .json(&serde_json::json!({
            "question": "Who?",
            "answer": "Nobody",
            "category": 99
        }))
        .send()
        .await
        .expect("Failed to execute request");

    assert_eq!(response.status().as_u16(), 400);
}

#[tokio::test]
async fn deleting_twice_distinguishes_not_found() {
    let store = MemoryQuestionStore::new();
    let id = store.seed_raw("Doomed question", "Gone", Some("1"), 1);
    let address = spawn_app(store).await;
    let client = reqwest::Client::new();

    let first = client
        .delete(format!("{}/questions/{}", address, id))
        .send()
        .await
        .expect("Failed to execute request");
    assert_eq!(first.status().as_u16(), 200);
    let body: serde_json::Value = first.json().await.unwrap();
    assert_eq!(body["success"], true);
    assert_eq!(body["question_id"], id);
    assert_eq!(body["numOfQuestions"], 0);

    // Second delete of the same id: already gone, a distinct 404.
    let second = client
        .delete(format!("{}/questions/{}", address, id))
        .send()
        .await
        .expect("Failed to execute request");
    assert_eq!(second.status().as_u16(), 404);
    let body: serde_json::Value = second.json().await.unwrap();
    assert_eq!(body["success"], false);
}

#[tokio::test]
async fn questions_by_category_filters_on_the_category() {
    let store = MemoryQuestionStore::new();
    store.seed_raw("Science question", "Atoms", Some("1"), 1);
    store.seed_raw("Art question", "Cubism", Some("2"), 2);
    store.seed_raw("Another science question", "Cells", Some("1"), 3);
    let address = spawn_app(store).await;
    let client = reqwest::Client::new();

    let body: serde_json::Value = client
        .get(format!("{}/categories/1/questions", address))
        .send()
        .await
        .expect("Failed to execute request")
        .json()
        .await
        .expect("Failed to parse json");

    assert_eq!(body["success"], true);
    assert_eq!(body["category"], 1);
    assert_eq!(body["numOfQuestions"], 2);
    for question in body["questions"].as_array().unwrap() {
        assert_eq!(question["category"], 1);
    }
}

#[tokio::test]
async fn a_category_with_no_questions_is_an_empty_success() {
    let address = spawn_app(store_with_questions(3)).await;
    let client = reqwest::Client::new();

    let response = client
        .get(format!("{}/categories/42/questions", address))
        .send()
        .await
        .expect("Failed to execute request");

    assert_eq!(response.status().as_u16(), 200);
    let body: serde_json::Value = response.json().await.unwrap();
    assert_eq!(body["numOfQuestions"], 0);
}

#[tokio::test]
async fn quiz_draw_skips_previously_served_questions() {
    let address = spawn_app(store_with_questions(3)).await;
    let client = reqwest::Client::new();

    // Ids 1 and 2 are served; only 3 remains, whatever the rng says.
    for _ in 0..10 {
        let body: serde_json::Value = client
            .post(format!("{}/quizzes", address))
            .json(&serde_json::json!({
                "previous_questions": [1, 2],
                "quiz_category": { "id": 0 }
            }))
            .send()
            .await
            .expect("Failed to execute request")
            .json()
            .await
            .expect("Failed to parse json");

        assert_eq!(body["success"], true);
        assert_eq!(body["question"]["id"], 3);
    }
}

#[tokio::test]
async fn quiz_draw_reports_exhaustion_with_a_null_question() {
    let address = spawn_app(store_with_questions(3)).await;
    let client = reqwest::Client::new();

    let body: serde_json::Value = client
        .post(format!("{}/quizzes", address))
        .json(&serde_json::json!({
            "previous_questions": [1, 2, 3],
            "quiz_category": { "id": 0 }
        }))
        .send()
        .await
        .expect("Failed to execute request")
        .json()
        .await
        .expect("Failed to parse json");

    assert_eq!(body["success"], true);
    assert_eq!(body["question"], serde_json::Value::Null);
}

#[tokio::test]
async fn quiz_draw_scopes_the_pool_to_the_category() {
    let store = MemoryQuestionStore::new();
    store.seed_raw("Science question", "Atoms", Some("1"), 1);
    store.seed_raw("Art question", "Cubism", Some("2"), 2);
    let address = spawn_app(store).await;
    let client = reqwest::Client::new();

    for _ in 0..10 {
        let body: serde_json::Value = client
            .post(format!("{}/quizzes", address))
            .json(&serde_json::json!({
                "previous_questions": [],
                "quiz_category": { "id": 2 }
            }))
            .send()
            .await
            .expect("Failed to execute request")
            .json()
            .await
            .expect("Failed to parse json");

        assert_eq!(body["question"]["category"], 2);
    }
}

#[tokio::test]
async fn quiz_draw_without_a_category_selector_is_400() {
    let address = spawn_app(store_with_questions(3)).await;
    let client = reqwest::Client::new();

    for body in [
        serde_json::json!({ "previous_questions": [] }),
        serde_json::json!({ "previous_questions": [], "quiz_category": { "id": null } }),
        serde_json::json!({ "previous_questions": [], "quiz_category": { "id": -2 } }),
    ] {
        let response = client
            .post(format!("{}/quizzes", address))
            .json(&body)
            .send()
            .await
            .expect("Failed to execute request");

        assert_eq!(response.status().as_u16(), 400, "body: {}", body);
    }
}

#[tokio::test]
async fn quiz_draw_accepts_a_string_category_id() {
    let address = spawn_app(store_with_questions(1)).await;
    let client = reqwest::Client::new();

    let body: serde_json::Value = client
        .post(format!("{}/quizzes", address))
        .json(&serde_json::json!({
            "previous_questions": [],
            "quiz_category": { "id": "0" }
        }))
        .send()
        .await
        .expect("Failed to execute request")
        .json()
        .await
        .expect("Failed to parse json");

    assert_eq!(body["success"], true);
    assert_eq!(body["question"]["id"], 1);
}
