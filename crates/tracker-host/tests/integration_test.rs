use chrono::{DateTime, Duration, TimeZone, Utc};
use std::sync::Arc;
use tracker_core::{OrderRecord, StepKey, VisualState};
use tracker_host::{FixedClock, HostError, JsonSource, OrderId, TrackerConfig, TrackerSystem};

fn start() -> DateTime<Utc> {
    Utc.with_ymd_and_hms(2024, 6, 10, 9, 0, 0).unwrap()
}

fn system(clock: &FixedClock) -> TrackerSystem {
    TrackerSystem::with_config(&TrackerConfig::default(), Arc::new(clock.clone()))
        .expect("default config is valid")
}

/// Full round trip through a real actor: the view follows record replacements.
#[tokio::test]
async fn test_render_follows_record_updates() {
    let clock = FixedClock::new(start());
    let system = system(&clock);
    let id = OrderId::from("ord_1");

    let previous = system
        .client
        .upsert(id.clone(), OrderRecord::new("processing", "card"))
        .await
        .unwrap();
    assert!(previous.is_none());

    let view = system.client.render(id.clone()).await.unwrap();
    assert_eq!(view.current_index, Some(0));
    assert_eq!(view.steps[0].state, VisualState::Current);

    let previous = system
        .client
        .upsert(id.clone(), OrderRecord::new("out_for_delivery", "card"))
        .await
        .unwrap();
    assert_eq!(previous.unwrap().status.as_str(), "processing");

    let view = system.client.render(id.clone()).await.unwrap();
    assert_eq!(view.current_index, Some(3));
    assert!(view.steps[..=3].iter().all(|s| s.state.is_completed()));
    assert_eq!(view.steps[4].state, VisualState::Upcoming);

    let stopped: Result<(), HostError> = system.shutdown().await;
    assert!(stopped.is_ok());
}

#[tokio::test]
async fn test_annotations_use_injected_clock() {
    let clock = FixedClock::new(start());
    let system = system(&clock);
    let id = OrderId::from("ord_2");
    let record = OrderRecord::new("packed", "cod").with_timestamp("packed", start());
    system.client.upsert(id.clone(), record).await.unwrap();

    let annotation = |view: tracker_core::TrackerView| {
        view.step(StepKey::Packed).unwrap().annotation.clone()
    };

    let view = system.client.render(id.clone()).await.unwrap();
    assert_eq!(annotation(view).as_deref(), Some("Just now"));

    clock.advance(Duration::minutes(90));
    let view = system.client.render(id.clone()).await.unwrap();
    assert_eq!(annotation(view).as_deref(), Some("1 hr ago"));

    clock.advance(Duration::hours(30));
    let view = system.client.render(id.clone()).await.unwrap();
    assert_eq!(annotation(view).as_deref(), Some("Yesterday"));

    clock.set(start() + Duration::days(8));
    let view = system.client.render(id).await.unwrap();
    assert_eq!(annotation(view).as_deref(), Some("Jun 10, 09:00"));

    system.shutdown().await.unwrap();
}

#[tokio::test]
async fn test_configured_date_format_reaches_the_projection() {
    let clock = FixedClock::new(start() + Duration::days(30));
    let config = TrackerConfig {
        absolute_format: "%Y-%m-%d".to_string(),
        ..TrackerConfig::default()
    };
    let system = TrackerSystem::with_config(&config, Arc::new(clock)).unwrap();
    let id = OrderId::from("ord_3");
    system
        .client
        .upsert(id.clone(), OrderRecord::new("shipped", "card").with_timestamp("shipped", start()))
        .await
        .unwrap();

    let view = system.client.render(id).await.unwrap();
    assert_eq!(view.steps[2].annotation.as_deref(), Some("2024-06-10"));

    system.shutdown().await.unwrap();
}

#[tokio::test]
async fn test_unknown_order_is_not_found() {
    let clock = FixedClock::new(start());
    let system = system(&clock);

    match system.client.render(OrderId::from("ghost")).await {
        Err(HostError::NotFound(id)) => assert_eq!(id.0, "ghost"),
        other => panic!("Expected NotFound, got {other:?}"),
    }
    assert!(matches!(
        system.client.remove(OrderId::from("ghost")).await,
        Err(HostError::NotFound(_))
    ));
    assert!(system.client.get(OrderId::from("ghost")).await.unwrap().is_none());

    system.shutdown().await.unwrap();
}

#[tokio::test]
async fn test_remove_forgets_the_order() {
    let clock = FixedClock::new(start());
    let system = system(&clock);
    let id = OrderId::from("ord_4");

    system
        .client
        .upsert(id.clone(), OrderRecord::new("delivered", "card"))
        .await
        .unwrap();
    system.client.remove(id.clone()).await.unwrap();

    assert!(system.client.get(id.clone()).await.unwrap().is_none());
    assert!(matches!(
        system.client.render(id).await,
        Err(HostError::NotFound(_))
    ));

    system.shutdown().await.unwrap();
}

#[tokio::test]
async fn test_load_and_snapshot() {
    let clock = FixedClock::new(start());
    let system = system(&clock);
    let source = JsonSource::new(
        r#"{
            "b": { "status": "cancelled", "paymentMethod": "cod",
                   "cancelInfo": { "reason": "Fraud check", "cancelledByRole": "admin" } },
            "a": { "status": "delivered", "paymentMethod": "card",
                   "returnRequest": { "status": "refunded" } },
            "c": { "status": "lost_in_transit", "paymentMethod": "card" }
        }"#,
    );

    let loaded = system.load_from(&source).await.unwrap();
    assert_eq!(loaded, 3);

    let snapshot = system.client.snapshot().await.unwrap();
    let ids: Vec<&str> = snapshot.iter().map(|(id, _)| id.0.as_str()).collect();
    assert_eq!(ids, vec!["a", "b", "c"]);

    let (_, delivered) = &snapshot[0];
    assert_eq!(delivered.steps.len(), 6);
    assert_eq!(delivered.steps[5].state, VisualState::Finalized);

    let (_, cancelled) = &snapshot[1];
    assert_eq!(cancelled.steps.len(), 2);
    assert_eq!(
        cancelled.cancellation.as_ref().and_then(|n| n.reason.as_deref()),
        Some("Fraud check")
    );

    let (_, unknown) = &snapshot[2];
    assert_eq!(unknown.current_index, None);

    system.shutdown().await.unwrap();
}

#[tokio::test]
async fn test_bundled_sample_loads() {
    let clock = FixedClock::new(start());
    let system = system(&clock);
    let source = JsonSource::new(include_str!("../demos/orders.json"));

    assert_eq!(system.load_from(&source).await.unwrap(), 5);

    system.shutdown().await.unwrap();
}

#[tokio::test]
async fn test_concurrent_clients_share_one_store() {
    let clock = FixedClock::new(start());
    let system = system(&clock);

    let mut handles = Vec::new();
    for n in 0..10 {
        let client = system.client.clone();
        handles.push(tokio::spawn(async move {
            client
                .upsert(OrderId(format!("ord_{n:02}")), OrderRecord::new("packed", "cod"))
                .await
        }));
    }
    for handle in handles {
        handle.await.unwrap().unwrap();
    }

    assert_eq!(system.client.snapshot().await.unwrap().len(), 10);
    system.shutdown().await.unwrap();
}
