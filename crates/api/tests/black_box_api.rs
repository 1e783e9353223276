use std::sync::Arc;

use reqwest::StatusCode;
use serde_json::json;

use wareflow_api::app::{AppState, build_app};
use wareflow_catalog::{Company, Employee, Product};
use wareflow_core::{Gcp, Gtin, ProductId, WarehouseId};
use wareflow_inbound::PlannerConfig;
use wareflow_infra::InMemoryWarehouse;
use wareflow_outbound::PackerConfig;

struct TestServer {
    base_url: String,
    handle: tokio::task::JoinHandle<()>,
}

impl TestServer {
    async fn spawn(warehouse: Arc<InMemoryWarehouse>) -> Self {
        // Build app (same router as prod), but bind to an ephemeral port.
        let state = Arc::new(AppState::new(
            warehouse.clone(),
            warehouse,
            PlannerConfig::default(),
            PackerConfig::default(),
        ));
        let app = build_app(state);
        let listener = tokio::net::TcpListener::bind("127.0.0.1:0")
            .await
            .expect("failed to bind ephemeral port");
        let addr = listener.local_addr().unwrap();
        let base_url = format!("http://{}", addr);

        let handle = tokio::spawn(async move {
            axum::serve(listener, app).await.unwrap();
        });

        Self { base_url, handle }
    }
}

impl Drop for TestServer {
    fn drop(&mut self) {
        self.handle.abort();
    }
}

const WAREHOUSE: u32 = 1;

fn seeded_warehouse() -> Arc<InMemoryWarehouse> {
    let warehouse = Arc::new(InMemoryWarehouse::new());

    warehouse.register_company(Company::new("0583", "Fitness Supplies Ltd"));
    warehouse.register_operations_manager(Employee {
        name: "Gemma Ashford".to_string(),
        warehouse_id: WarehouseId::new(WAREHOUSE),
        email: Some("gemma@example.com".to_string()),
    });
    warehouse.register_product(Product {
        id: ProductId::new(1),
        gtin: Gtin::new("0000"),
        gcp: Gcp::new("0583"),
        name: "2.5kg Dumbbell".to_string(),
        unit_weight_grams: 2_500,
        minimum_order_quantity: 5,
        discontinued: false,
    });
    warehouse.register_product(Product {
        id: ProductId::new(2),
        gtin: Gtin::new("0001"),
        gcp: Gcp::new("0583"),
        name: "Squat Rack".to_string(),
        unit_weight_grams: 2_000_000,
        minimum_order_quantity: 1,
        discontinued: false,
    });

    warehouse
}

#[tokio::test]
async fn health_endpoint_responds() {
    let srv = TestServer::spawn(seeded_warehouse()).await;

    let res = reqwest::get(format!("{}/health", srv.base_url)).await.unwrap();
    assert_eq!(res.status(), StatusCode::OK);
}

#[tokio::test]
async fn replenishment_report_lists_products_below_threshold() {
    let warehouse = seeded_warehouse();
    // threshold=10, held=4, min=5 -> order quantity 26.
    warehouse.put_stock(WarehouseId::new(WAREHOUSE), ProductId::new(1), 4, 10);

    let srv = TestServer::spawn(warehouse).await;
    let res = reqwest::get(format!("{}/warehouses/{}/replenishment", srv.base_url, WAREHOUSE))
        .await
        .unwrap();
    assert_eq!(res.status(), StatusCode::OK);

    let body: serde_json::Value = res.json().await.unwrap();
    assert_eq!(body["warehouse_id"], WAREHOUSE);
    assert_eq!(body["operations_manager"]["name"], "Gemma Ashford");

    let batches = body["batches"].as_array().unwrap();
    assert_eq!(batches.len(), 1);
    assert_eq!(batches[0]["company"]["gcp"], "0583");
    assert_eq!(batches[0]["lines"][0]["gtin"], "0000");
    assert_eq!(batches[0]["lines"][0]["quantity"], 26);
}

#[tokio::test]
async fn inbound_manifest_adds_stock() {
    let warehouse = seeded_warehouse();
    warehouse.put_stock(WarehouseId::new(WAREHOUSE), ProductId::new(1), 4, 10);

    let srv = TestServer::spawn(warehouse.clone()).await;
    let client = reqwest::Client::new();

    let res = client
        .post(format!("{}/inbound/manifests", srv.base_url))
        .json(&json!({
            "warehouse_id": WAREHOUSE,
            "gcp": "0583",
            "order_lines": [{ "gtin": "0000", "quantity": 26 }],
        }))
        .send()
        .await
        .unwrap();
    assert_eq!(res.status(), StatusCode::OK);

    let levels = wareflow_stock::StockLedger::stock_levels(
        warehouse.as_ref(),
        WarehouseId::new(WAREHOUSE),
        &[ProductId::new(1)],
    );
    assert_eq!(levels[&ProductId::new(1)], 30);
}

#[tokio::test]
async fn inbound_manifest_with_wrong_gcp_is_rejected() {
    let srv = TestServer::spawn(seeded_warehouse()).await;
    let client = reqwest::Client::new();

    let res = client
        .post(format!("{}/inbound/manifests", srv.base_url))
        .json(&json!({
            "warehouse_id": WAREHOUSE,
            "gcp": "9999",
            "order_lines": [{ "gtin": "0000", "quantity": 10 }],
        }))
        .send()
        .await
        .unwrap();

    assert_eq!(res.status(), StatusCode::BAD_REQUEST);
    let body: serde_json::Value = res.json().await.unwrap();
    assert_eq!(body["error"], "validation_error");
    assert!(body["message"].as_str().unwrap().contains("does not match"));
}

#[tokio::test]
async fn outbound_order_packs_trucks_and_deducts_stock() {
    let warehouse = seeded_warehouse();
    // Three squat racks: each fills a whole truck.
    warehouse.put_stock(WarehouseId::new(WAREHOUSE), ProductId::new(2), 3, 0);

    let srv = TestServer::spawn(warehouse.clone()).await;
    let client = reqwest::Client::new();

    let res = client
        .post(format!("{}/outbound/orders", srv.base_url))
        .json(&json!({
            "warehouse_id": WAREHOUSE,
            "order_lines": [{ "gtin": "0001", "quantity": 3 }],
        }))
        .send()
        .await
        .unwrap();
    assert_eq!(res.status(), StatusCode::OK);

    let body: serde_json::Value = res.json().await.unwrap();
    let trucks = body["trucks"].as_array().unwrap();
    assert_eq!(trucks.len(), 3);
    for truck in trucks {
        assert_eq!(truck["total_weight_grams"], 2_000_000);
        assert_eq!(truck["contents"]["2"], 1);
    }

    let levels = wareflow_stock::StockLedger::stock_levels(
        warehouse.as_ref(),
        WarehouseId::new(WAREHOUSE),
        &[ProductId::new(2)],
    );
    assert_eq!(levels[&ProductId::new(2)], 0);
}

#[tokio::test]
async fn outbound_order_for_unknown_gtin_mutates_nothing() {
    let warehouse = seeded_warehouse();
    warehouse.put_stock(WarehouseId::new(WAREHOUSE), ProductId::new(1), 10, 0);

    let srv = TestServer::spawn(warehouse.clone()).await;
    let client = reqwest::Client::new();

    let res = client
        .post(format!("{}/outbound/orders", srv.base_url))
        .json(&json!({
            "warehouse_id": WAREHOUSE,
            "order_lines": [
                { "gtin": "0000", "quantity": 5 },
                { "gtin": "9999", "quantity": 1 },
            ],
        }))
        .send()
        .await
        .unwrap();

    assert_eq!(res.status(), StatusCode::NOT_FOUND);
    let body: serde_json::Value = res.json().await.unwrap();
    assert_eq!(body["error"], "no_such_entity");
    assert!(body["message"].as_str().unwrap().contains("9999"));

    // No partial deduction happened.
    let levels = wareflow_stock::StockLedger::stock_levels(
        warehouse.as_ref(),
        WarehouseId::new(WAREHOUSE),
        &[ProductId::new(1)],
    );
    assert_eq!(levels[&ProductId::new(1)], 10);
}

#[tokio::test]
async fn outbound_order_beyond_held_stock_is_a_conflict() {
    let warehouse = seeded_warehouse();
    warehouse.put_stock(WarehouseId::new(WAREHOUSE), ProductId::new(1), 10, 0);

    let srv = TestServer::spawn(warehouse).await;
    let client = reqwest::Client::new();

    let res = client
        .post(format!("{}/outbound/orders", srv.base_url))
        .json(&json!({
            "warehouse_id": WAREHOUSE,
            "order_lines": [{ "gtin": "0000", "quantity": 11 }],
        }))
        .send()
        .await
        .unwrap();

    assert_eq!(res.status(), StatusCode::CONFLICT);
    let body: serde_json::Value = res.json().await.unwrap();
    assert_eq!(body["error"], "insufficient_stock");
    assert!(body["message"].as_str().unwrap().contains("stock held 10"));
}

#[tokio::test]
async fn overweight_product_is_unprocessable_and_leaves_stock_alone() {
    let warehouse = seeded_warehouse();
    warehouse.register_product(Product {
        id: ProductId::new(3),
        gtin: Gtin::new("0002"),
        gcp: Gcp::new("0583"),
        name: "Cast Iron Safe".to_string(),
        unit_weight_grams: 2_000_001,
        minimum_order_quantity: 1,
        discontinued: false,
    });
    warehouse.put_stock(WarehouseId::new(WAREHOUSE), ProductId::new(3), 5, 0);

    let srv = TestServer::spawn(warehouse.clone()).await;
    let client = reqwest::Client::new();

    let res = client
        .post(format!("{}/outbound/orders", srv.base_url))
        .json(&json!({
            "warehouse_id": WAREHOUSE,
            "order_lines": [{ "gtin": "0002", "quantity": 1 }],
        }))
        .send()
        .await
        .unwrap();

    assert_eq!(res.status(), StatusCode::UNPROCESSABLE_ENTITY);
    let body: serde_json::Value = res.json().await.unwrap();
    assert_eq!(body["error"], "capacity_violation");

    let levels = wareflow_stock::StockLedger::stock_levels(
        warehouse.as_ref(),
        WarehouseId::new(WAREHOUSE),
        &[ProductId::new(3)],
    );
    assert_eq!(levels[&ProductId::new(3)], 5);
}
