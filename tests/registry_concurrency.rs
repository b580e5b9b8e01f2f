mod common;

use std::collections::HashSet;
use std::sync::Arc;

use shorturl::application::services::RegistryError;
use shorturl::domain::repositories::MappingRepository;
use shorturl::infrastructure::persistence::MemoryMappingRepository;

#[tokio::test(flavor = "multi_thread", worker_threads = 4)]
async fn test_concurrent_distinct_urls_get_distinct_codes() {
    let repository = Arc::new(MemoryMappingRepository::new());
    let state = common::create_test_state_with(repository.clone());

    let tasks: Vec<_> = (0..50)
        .map(|i| {
            let state = state.clone();
            tokio::spawn(async move {
                let url = state
                    .validator
                    .validate(&format!("https://example.com/page/{i}"))
                    .await
                    .unwrap();
                state.registry.register(url).await.unwrap()
            })
        })
        .collect();

    let mut codes = HashSet::new();
    for task in tasks {
        let mapping = task.await.unwrap();
        assert!(mapping.short_code > 0);
        assert!(codes.insert(mapping.short_code));
    }

    assert_eq!(codes, (1..=50).collect::<HashSet<i64>>());
    assert_eq!(repository.count().await.unwrap(), 50);
}

#[tokio::test(flavor = "multi_thread", worker_threads = 4)]
async fn test_concurrent_same_url_registers_once() {
    let repository = Arc::new(MemoryMappingRepository::new());
    let state = common::create_test_state_with(repository.clone());

    let tasks: Vec<_> = (0..20)
        .map(|_| {
            let state = state.clone();
            tokio::spawn(async move {
                let url = state
                    .validator
                    .validate("https://example.com/shared")
                    .await
                    .unwrap();
                state.registry.register(url).await.unwrap().short_code
            })
        })
        .collect();

    for task in tasks {
        assert_eq!(task.await.unwrap(), 1);
    }
    assert_eq!(repository.count().await.unwrap(), 1);
}

#[tokio::test]
async fn test_round_trip_is_byte_for_byte() {
    let state = common::create_test_state();

    for raw in [
        "https://example.com/a",
        "HTTPS://example.com/Mixed/Case",
        "http://example.org:8080/?x=%20y",
    ] {
        let url = state.validator.validate(raw).await.unwrap();
        let mapping = state.registry.register(url).await.unwrap();

        let resolved = state
            .registry
            .resolve(&mapping.short_code.to_string())
            .await
            .unwrap();
        assert_eq!(resolved.original_url, raw);
        assert_eq!(resolved.short_code, mapping.short_code);
    }
}

#[tokio::test]
async fn test_register_is_idempotent() {
    let state = common::create_test_state();

    let first = state
        .registry
        .register(state.validator.validate("https://example.com/a").await.unwrap())
        .await
        .unwrap();
    let second = state
        .registry
        .register(state.validator.validate("https://example.com/a").await.unwrap())
        .await
        .unwrap();

    assert_eq!(first, second);
    assert_eq!(state.registry.count().await.unwrap(), 1);
}

#[tokio::test]
async fn test_resolve_misses() {
    let state = common::create_test_state();

    assert!(matches!(
        state.registry.resolve("999999").await,
        Err(RegistryError::NotFound)
    ));
    assert!(matches!(
        state.registry.resolve("abc").await,
        Err(RegistryError::NotFound)
    ));
}
