use axum::{extract::State, response::IntoResponse};
use buyit_storefront::{
    routes::events::stream_events,
    state::AppState,
    storage::{MemoryStore, StorageBackend},
};
use futures_util::StreamExt;

async fn next_frame(body: &mut axum::body::BodyDataStream) -> String {
    let chunk = body
        .next()
        .await
        .expect("stream still open")
        .expect("frame bytes");
    String::from_utf8(chunk.to_vec()).expect("utf-8 frame")
}

#[tokio::test]
async fn cart_changes_arrive_as_named_frames() {
    let state = AppState::in_memory();
    let sse = stream_events(State(state.clone())).await;
    assert_eq!(state.storefront.events().subscriber_count(), 1);
    let mut body = sse.into_response().into_body().into_data_stream();

    state.storefront.add_to_cart("p1").await.unwrap();

    let frame = next_frame(&mut body).await;
    assert!(frame.contains("event: cart-changed\n"), "{frame}");
    assert!(frame.contains("data: {\"type\":\"cart-changed\""), "{frame}");
    assert!(frame.contains("\"id\":\"p1\""), "{frame}");
    assert!(frame.contains("\"quantity\":1"), "{frame}");
}

#[tokio::test]
async fn catalog_changes_are_named_separately() {
    let state = AppState::in_memory();
    let mut body = stream_events(State(state.clone()))
        .await
        .into_response()
        .into_body()
        .into_data_stream();

    state.storefront.catalog().delete_product("p8").await.unwrap();

    let frame = next_frame(&mut body).await;
    assert!(frame.contains("event: catalog-changed\n"), "{frame}");
    assert!(!frame.contains("\"id\":\"p8\""), "{frame}");
}

#[tokio::test]
async fn lagging_subscriber_skips_to_the_latest_snapshot() {
    let state = AppState::new(StorageBackend::Memory(MemoryStore::new()), 1);
    let mut body = stream_events(State(state.clone()))
        .await
        .into_response()
        .into_body()
        .into_data_stream();

    for _ in 0..3 {
        state.storefront.add_to_cart("p2").await.unwrap();
    }

    let frame = next_frame(&mut body).await;
    assert!(frame.contains("event: cart-changed\n"), "{frame}");
    assert!(frame.contains("\"quantity\":3"), "{frame}");
}
