// tests/end_to_end.rs
// Router + SQLite store + Gemini client against a fake upstream


use std::sync::Arc;

use axum::http::StatusCode;
use daily_prompt::api::{AppState, create_router};
use daily_prompt::llm::GeminiClient;
use daily_prompt::prompt::tables::FALLBACK_PROMPTS;
use daily_prompt::store::{PromptStore, SqlitePromptStore};
use daily_prompt::{Calendar, DailyPromptService, FixedClock, PromptGenerator};

use test_helpers::{gemini_body, june, send, spawn_upstream};

async fn sqlite_store(dir: &tempfile::TempDir) -> Arc<SqlitePromptStore> {
    let url = format!("sqlite://{}", dir.path().join("daily.db").display());
    Arc::new(SqlitePromptStore::connect(&url).await.unwrap())
}

fn service(store: Arc<SqlitePromptStore>, base_url: &str, clock: Arc<FixedClock>) -> Arc<DailyPromptService> {
    let gemini = GeminiClient::with_model("test-key".into(), "gemini-test".into()).with_base_url(base_url);
    let generator = PromptGenerator::new(Arc::new(gemini));
    let calendar = Calendar::new(clock, chrono_tz::America::New_York);
    Arc::new(DailyPromptService::new(store, generator, calendar))
}

#[tokio::test]
async fn test_generated_prompt_is_cached_in_sqlite() {
    let dir = tempfile::tempdir().unwrap();
    let store = sqlite_store(&dir).await;
    let (base_url, upstream) = spawn_upstream(StatusCode::OK, &gemini_body("Your wifi router on its day off."), None).await;
    let clock = Arc::new(FixedClock::new(june(2, 16)));
    let app = create_router(AppState::new(service(store.clone(), &base_url, clock.clone())));

    let (status, first) = send(&app, "GET", "/daily-prompt").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(first["prompt"], "Your wifi router on its day off.");
    assert_eq!(first["date"], "6/2/2024");

    let (_, second) = send(&app, "GET", "/daily-prompt").await;
    assert_eq!(second, first);
    assert_eq!(upstream.seen.lock().await.len(), 1);

    // Next day regenerates
    clock.set(june(3, 16));
    let (_, third) = send(&app, "GET", "/daily-prompt").await;
    assert_eq!(third["date"], "6/3/2024");
    assert_eq!(upstream.seen.lock().await.len(), 2);

    let stored = store.get().await.unwrap().unwrap();
    assert_eq!(stored.date, "6/3/2024");
}

#[tokio::test]
async fn test_upstream_outage_falls_back_and_persists() {
    let dir = tempfile::tempdir().unwrap();
    let store = sqlite_store(&dir).await;
    let (base_url, _) = spawn_upstream(StatusCode::SERVICE_UNAVAILABLE, "unavailable", None).await;
    let clock = Arc::new(FixedClock::new(june(2, 16)));
    let app = create_router(AppState::new(service(store.clone(), &base_url, clock)));

    let (status, body) = send(&app, "POST", "/daily-prompt").await;

    assert_eq!(status, StatusCode::OK);
    let prompt = body["prompt"].as_str().unwrap();
    assert!(FALLBACK_PROMPTS.contains(&prompt));
    assert_eq!(store.get().await.unwrap().unwrap().prompt, prompt);
}
