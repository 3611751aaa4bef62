//! Local stub of the storefront API for adapter tests.

use poem::listener::TcpAcceptor;
use poem::{Route, Server};

use business::domain::shared::value_objects::SessionId;

use crate::client::StorefrontClient;

/// Serves `app` on an ephemeral local port and returns its base URL.
pub async fn serve(app: Route) -> String {
    let listener = std::net::TcpListener::bind("127.0.0.1:0").unwrap();
    listener.set_nonblocking(true).unwrap();
    let addr = listener.local_addr().unwrap();
    let acceptor = TcpAcceptor::from_std(listener).unwrap();
    tokio::spawn(async move {
        let _ = Server::new_with_acceptor(acceptor).run(app).await;
    });
    format!("http://{}", addr)
}

/// Base URL of a port nothing listens on.
pub fn unreachable_base_url() -> String {
    let listener = std::net::TcpListener::bind("127.0.0.1:0").unwrap();
    let addr = listener.local_addr().unwrap();
    drop(listener);
    format!("http://{}", addr)
}

/// Client for session `s1` that talks to `base_url` directly.
pub fn client_for(base_url: &str) -> StorefrontClient {
    StorefrontClient {
        client: reqwest::Client::builder().no_proxy().build().unwrap(),
        base_url: base_url.to_string(),
        session_id: SessionId::new("s1"),
    }
}

pub fn cart_json(product_id: &str, quantity: u32, revision: u64) -> serde_json::Value {
    serde_json::json!({
        "items": [{
            "product_id": product_id,
            "slug": product_id,
            "name": format!("Product {}", product_id),
            "image": "",
            "price": "12.50",
            "quantity": quantity,
        }],
        "items_price": "12.50",
        "tax_price": "1.88",
        "shipping_price": "10.00",
        "total_price": "24.38",
        "revision": revision,
    })
}

pub fn product_json(id: &str, name: &str) -> serde_json::Value {
    serde_json::json!({
        "id": id,
        "slug": id,
        "name": name,
        "category": "Shirts",
        "image": "",
        "price": "70.00",
        "rating": "4.5",
        "num_reviews": 10,
        "count_in_stock": 3,
        "created_at": "2026-01-10T09:00:00Z",
    })
}
