//! Integration tests for `ApiClient` against an in-process stub backend
//!
//! The stub mirrors the billing backend's route table and duck-typed
//! responses: JSON arrays for lists, `201`/`200`/`204` for mutations,
//! `400` for topping lookups on unknown pizzas, and `null` for empty
//! collections. A raw TCP responder covers the malformed-body cases a
//! well-formed framework server will not produce.

use std::collections::HashMap;
use std::net::SocketAddr;
use std::sync::{Arc, Mutex};

use axum::{
    Json, Router,
    extract::{Path, State},
    http::StatusCode,
    routing::{get, put},
};
use serde_json::{Value, json};
use tokio::io::{AsyncReadExt, AsyncWriteExt};

use console_client::ApiClient;
use console_model::{Beverage, PizzaType, Resource, Topping};

// ============================================================================
// Stub backend
// ============================================================================

type Store = Arc<Mutex<Vec<Value>>>;

#[derive(Clone, Default)]
struct StubBackend {
    pizzas: Store,
    toppings: Store,
    beverages: Store,
    pizza_toppings: Arc<Mutex<HashMap<String, Vec<String>>>>,
}

impl StubBackend {
    fn seed_pizza_toppings(&self, pizza_type_id: &str, names: &[&str]) {
        self.pizza_toppings.lock().unwrap().insert(
            pizza_type_id.to_string(),
            names.iter().map(|n| n.to_string()).collect(),
        );
    }
}

fn list_of(store: &Store) -> Json<Value> {
    let items = store.lock().unwrap();
    if items.is_empty() {
        // The real backend serializes an empty collection as `null`
        Json(Value::Null)
    } else {
        Json(Value::Array(items.clone()))
    }
}

fn insert(store: &Store, item: Value) {
    store.lock().unwrap().push(item);
}

fn replace(store: &Store, id_field: &str, id: &str, item: Value) -> bool {
    let mut items = store.lock().unwrap();
    for slot in items.iter_mut() {
        if slot[id_field] == id {
            *slot = item;
            return true;
        }
    }
    false
}

fn remove(store: &Store, id_field: &str, id: &str) -> bool {
    let mut items = store.lock().unwrap();
    let before = items.len();
    items.retain(|item| item[id_field] != id);
    items.len() < before
}

async fn list_pizzas(State(s): State<StubBackend>) -> Json<Value> {
    list_of(&s.pizzas)
}

async fn create_pizza(State(s): State<StubBackend>, Json(body): Json<Value>) -> StatusCode {
    insert(&s.pizzas, body);
    StatusCode::CREATED
}

async fn update_pizza(
    State(s): State<StubBackend>,
    Path(id): Path<String>,
    Json(body): Json<Value>,
) -> StatusCode {
    if replace(&s.pizzas, "pizza_type_id", &id, body) {
        StatusCode::OK
    } else {
        StatusCode::NOT_FOUND
    }
}

async fn delete_pizza(State(s): State<StubBackend>, Path(id): Path<String>) -> StatusCode {
    if remove(&s.pizzas, "pizza_type_id", &id) {
        StatusCode::NO_CONTENT
    } else {
        StatusCode::NOT_FOUND
    }
}

async fn pizza_toppings(
    State(s): State<StubBackend>,
    Path(id): Path<String>,
) -> Result<Json<Vec<String>>, StatusCode> {
    s.pizza_toppings
        .lock()
        .unwrap()
        .get(&id)
        .cloned()
        .map(Json)
        .ok_or(StatusCode::BAD_REQUEST)
}

async fn list_toppings(State(s): State<StubBackend>) -> Json<Value> {
    list_of(&s.toppings)
}

async fn create_topping(State(s): State<StubBackend>, Json(body): Json<Value>) -> StatusCode {
    insert(&s.toppings, body);
    StatusCode::CREATED
}

async fn update_topping(
    State(s): State<StubBackend>,
    Path(id): Path<String>,
    Json(body): Json<Value>,
) -> StatusCode {
    if replace(&s.toppings, "topping_id", &id, body) {
        StatusCode::OK
    } else {
        StatusCode::NOT_FOUND
    }
}

async fn delete_topping(State(s): State<StubBackend>, Path(id): Path<String>) -> StatusCode {
    if remove(&s.toppings, "topping_id", &id) {
        StatusCode::NO_CONTENT
    } else {
        StatusCode::NOT_FOUND
    }
}

async fn list_beverages(State(s): State<StubBackend>) -> Json<Value> {
    list_of(&s.beverages)
}

async fn create_beverage(State(s): State<StubBackend>, Json(body): Json<Value>) -> StatusCode {
    insert(&s.beverages, body);
    StatusCode::OK
}

async fn update_beverage(
    State(s): State<StubBackend>,
    Path(id): Path<String>,
    Json(body): Json<Value>,
) -> StatusCode {
    if replace(&s.beverages, "beverage_id", &id, body) {
        StatusCode::NO_CONTENT
    } else {
        StatusCode::NOT_FOUND
    }
}

async fn delete_beverage(State(s): State<StubBackend>, Path(id): Path<String>) -> StatusCode {
    if remove(&s.beverages, "beverage_id", &id) {
        StatusCode::OK
    } else {
        StatusCode::NOT_FOUND
    }
}

fn stub_router(state: StubBackend) -> Router {
    Router::new()
        .route("/pizzas", get(list_pizzas).post(create_pizza))
        .route("/pizzas/{id}", put(update_pizza).delete(delete_pizza))
        .route("/pizzas/{id}/toppings", get(pizza_toppings))
        .route("/toppings", get(list_toppings).post(create_topping))
        .route("/toppings/{id}", put(update_topping).delete(delete_topping))
        .route("/beverages", get(list_beverages).post(create_beverage))
        .route(
            "/beverages/{id}",
            put(update_beverage).delete(delete_beverage),
        )
        .with_state(state)
}

/// Spawn the stub backend on an ephemeral port and return a client for it
async fn start_backend(state: StubBackend) -> ApiClient {
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    tokio::spawn(async move {
        axum::serve(listener, stub_router(state)).await.unwrap();
    });
    ApiClient::with_base_url(format!("http://{}", addr))
}

/// Spawn a server whose mutation routes always answer 500
async fn start_failing_backend() -> ApiClient {
    let app = Router::new()
        .route(
            "/toppings",
            get(|| async { StatusCode::INTERNAL_SERVER_ERROR })
                .post(|| async { StatusCode::INTERNAL_SERVER_ERROR }),
        )
        .route(
            "/toppings/{id}",
            put(|| async { StatusCode::INTERNAL_SERVER_ERROR })
                .delete(|| async { StatusCode::INTERNAL_SERVER_ERROR }),
        );
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    tokio::spawn(async move {
        axum::serve(listener, app).await.unwrap();
    });
    ApiClient::with_base_url(format!("http://{}", addr))
}

/// Spawn a raw TCP responder that answers every request with a fixed
/// 200 body, for shapes a framework server will not produce
async fn start_raw_responder(body: &'static str) -> SocketAddr {
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    tokio::spawn(async move {
        while let Ok((mut socket, _)) = listener.accept().await {
            tokio::spawn(async move {
                let mut buf = [0u8; 4096];
                let _ = socket.read(&mut buf).await;
                let response = format!(
                    "HTTP/1.1 200 OK\r\nContent-Type: application/json\r\nContent-Length: {}\r\nConnection: close\r\n\r\n{}",
                    body.len(),
                    body
                );
                let _ = socket.write_all(response.as_bytes()).await;
                let _ = socket.shutdown().await;
            });
        }
    });
    addr
}

/// An address nothing is listening on
async fn unreachable_addr() -> SocketAddr {
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    drop(listener);
    addr
}

// ============================================================================
// Tests
// ============================================================================

#[tokio::test]
async fn test_topping_create_then_list() {
    let client = start_backend(StubBackend::default()).await;

    let toppings = client.list::<Topping>().await.unwrap();
    assert!(toppings.is_empty());

    client
        .create(&Topping::new("T1", "Cheese", 1.5))
        .await
        .unwrap();

    let toppings = client.list::<Topping>().await.unwrap();
    assert_eq!(toppings.len(), 1);
    assert_eq!(toppings[0].topping_id, "T1");
    assert_eq!(toppings[0].name, "Cheese");
    assert_eq!(toppings[0].price, 1.5);
}

#[tokio::test]
async fn test_topping_update_then_list() {
    let state = StubBackend::default();
    insert(
        &state.toppings,
        json!({"topping_id": "T1", "name": "Cheese", "price": 1.5}),
    );
    let client = start_backend(state).await;

    client
        .update("T1", &Topping::new("T1", "Extra Cheese", 2.0))
        .await
        .unwrap();

    let toppings = client.list::<Topping>().await.unwrap();
    assert_eq!(toppings.len(), 1);
    assert_eq!(toppings[0].topping_id, "T1");
    assert_eq!(toppings[0].name, "Extra Cheese");
    assert_eq!(toppings[0].price, 2.0);
}

#[tokio::test]
async fn test_topping_delete_then_list() {
    let state = StubBackend::default();
    insert(
        &state.toppings,
        json!({"topping_id": "T1", "name": "Cheese", "price": 1.5}),
    );
    insert(
        &state.toppings,
        json!({"topping_id": "T2", "name": "Olives", "price": 0.75}),
    );
    let client = start_backend(state).await;

    client.delete::<Topping>("T1").await.unwrap();

    let toppings = client.list::<Topping>().await.unwrap();
    assert_eq!(toppings.len(), 1);
    assert!(toppings.iter().all(|t| t.topping_id != "T1"));
}

#[tokio::test]
async fn test_pizza_crud_lifecycle() {
    use console_core::PizzaSize;

    let client = start_backend(StubBackend::default()).await;

    let pizza = PizzaType::new("P1", "Margherita", PizzaSize::Medium, 8.0)
        .with_description("Tomato and mozzarella");
    client.create(&pizza).await.unwrap();

    let pizzas = client.list::<PizzaType>().await.unwrap();
    assert_eq!(pizzas.len(), 1);
    assert_eq!(pizzas[0].size, PizzaSize::Medium);

    let updated = PizzaType::new("P1", "Margherita", PizzaSize::Large, 10.0)
        .with_description("Tomato and mozzarella");
    client.update("P1", &updated).await.unwrap();

    let pizzas = client.list::<PizzaType>().await.unwrap();
    assert_eq!(pizzas[0].pizza_type_id, "P1");
    assert_eq!(pizzas[0].size, PizzaSize::Large);
    assert_eq!(pizzas[0].base_price, 10.0);

    client.delete::<PizzaType>("P1").await.unwrap();
    assert!(client.list::<PizzaType>().await.unwrap().is_empty());
}

#[tokio::test]
async fn test_beverage_alternate_success_codes() {
    // The stub answers 200 for create and 204 for update; both are success
    let state = StubBackend::default();
    insert(
        &state.beverages,
        json!({"beverage_id": "B1", "name": "Cola", "price": 2.0}),
    );
    let client = start_backend(state).await;

    client
        .create(&Beverage::new("B2", "Lemonade", 2.5))
        .await
        .unwrap();
    client
        .update("B1", &Beverage::new("B1", "Diet Cola", 2.0))
        .await
        .unwrap();

    let beverages = client.list::<Beverage>().await.unwrap();
    assert_eq!(beverages.len(), 2);
}

#[tokio::test]
async fn test_pizza_toppings_lookup() {
    let state = StubBackend::default();
    state.seed_pizza_toppings("P1", &["Cheese", "Olives"]);
    let client = start_backend(state).await;

    let names = client.pizza_toppings("P1").await.unwrap();
    assert_eq!(names, vec!["Cheese".to_string(), "Olives".to_string()]);
}

#[tokio::test]
async fn test_pizza_toppings_unknown_pizza_is_fetch_error() {
    let client = start_backend(StubBackend::default()).await;

    let err = client.pizza_toppings("ghost").await.unwrap_err();
    assert!(err.is_fetch());
}

#[tokio::test]
async fn test_create_non_2xx_is_save_error() {
    let client = start_failing_backend().await;

    let err = client
        .create(&Topping::new("T1", "Cheese", 1.5))
        .await
        .unwrap_err();
    assert!(err.is_save());
    assert!(err.is_retryable());
}

#[tokio::test]
async fn test_update_non_2xx_is_save_error() {
    let client = start_failing_backend().await;

    let err = client
        .update("T1", &Topping::new("T1", "Cheese", 1.5))
        .await
        .unwrap_err();
    assert!(err.is_save());
}

#[tokio::test]
async fn test_delete_non_2xx_is_delete_error() {
    let client = start_failing_backend().await;

    let err = client.delete::<Topping>("T1").await.unwrap_err();
    assert!(err.is_delete());
}

#[tokio::test]
async fn test_list_non_2xx_is_fetch_error() {
    let client = start_failing_backend().await;

    let err = client.list::<Topping>().await.unwrap_err();
    assert!(err.is_fetch());
}

#[tokio::test]
async fn test_list_unreachable_is_fetch_error() {
    let addr = unreachable_addr().await;
    let client = ApiClient::with_base_url(format!("http://{}", addr));

    let err = client.list::<Topping>().await.unwrap_err();
    assert!(err.is_fetch());
}

#[tokio::test]
async fn test_list_object_body_decodes_empty() {
    let addr = start_raw_responder(r#"{"message": "not an array"}"#).await;
    let client = ApiClient::with_base_url(format!("http://{}", addr));

    let toppings = client.list::<Topping>().await.unwrap();
    assert!(toppings.is_empty());
}

#[tokio::test]
async fn test_list_garbage_body_decodes_empty() {
    let addr = start_raw_responder("<html>bad gateway</html>").await;
    let client = ApiClient::with_base_url(format!("http://{}", addr));

    let beverages = client.list::<Beverage>().await.unwrap();
    assert!(beverages.is_empty());
}

#[tokio::test]
async fn test_collection_paths() {
    // The route table is part of the external contract
    assert_eq!(PizzaType::COLLECTION, "pizzas");
    assert_eq!(Topping::COLLECTION, "toppings");
    assert_eq!(Beverage::COLLECTION, "beverages");
}
