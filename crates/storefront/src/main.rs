//! # Storefront demo
//!
//! Seeds a user and two products, fills a cart, checks out and prints the order back.
//!
//! ```bash
//! DATABASE_URL=sqlite://storefront.db RUST_LOG=info cargo run -p storefront
//! ```

use chrono::Utc;
use store_framework::tracing::setup_tracing;
use storefront::config::StorefrontConfig;
use storefront::lifecycle::Storefront;
use storefront::model::{Money, ProductCreate, UserCreate};
use tracing::{error, info, Instrument};

#[tokio::main]
async fn main() -> Result<(), String> {
    setup_tracing();

    let config = StorefrontConfig::from_env().map_err(|e| e.to_string())?;
    let store = Storefront::start(&config).await.map_err(|e| e.to_string())?;

    let span = tracing::info_span!("seeding");
    let (user_id, lamp, desk) = async {
        let user_id = store
            .user_client
            .register(UserCreate {
                name: "Alice".to_string(),
                email: format!("alice+{}@example.com", Utc::now().timestamp_millis()),
            })
            .await
            .map_err(|e| e.to_string())?;
        let lamp = store
            .product_client
            .create_product(ProductCreate {
                name: "Desk Lamp".to_string(),
                price: Money::from_cents(2_450),
                stock: 10,
            })
            .await
            .map_err(|e| e.to_string())?;
        let desk = store
            .product_client
            .create_product(ProductCreate {
                name: "Standing Desk".to_string(),
                price: Money::from_cents(31_900),
                stock: 1,
            })
            .await
            .map_err(|e| e.to_string())?;
        Ok::<_, String>((user_id, lamp, desk))
    }
    .instrument(span)
    .await?;

    info!(%user_id, %lamp, %desk, "Seeded");

    let span = tracing::info_span!("shopping", %user_id);
    async {
        store.cart_client.add_item(user_id, lamp).await?;
        store.cart_client.add_item(user_id, lamp).await?;
        store.cart_client.add_item(user_id, desk).await?;
        let cart = store.cart_client.view(user_id).await?;
        info!(lines = cart.lines.len(), total = %cart.total, "Cart ready");
        Ok::<_, storefront::cart::CartError>(())
    }
    .instrument(span)
    .await
    .map_err(|e| e.to_string())?;

    let identity = store
        .user_client
        .resolve(Some(user_id))
        .await
        .map_err(|e| e.to_string())?;
    let view = store
        .order_client
        .checkout(&identity)
        .instrument(tracing::info_span!("checkout"))
        .await;
    info!(location = %view.location(), "Checkout finished");

    match store.order_client.history(user_id).await {
        Ok(orders) => {
            for order in orders {
                info!(order_id = %order.id, total = %order.total_amount, created_at = %order.created_at, "Order");
                if let Ok(detail) = store.order_client.detail(user_id, order.id).await {
                    for line in detail.lines {
                        info!(
                            product = line.product_name.as_deref().unwrap_or("(removed)"),
                            quantity = line.quantity,
                            price = %line.price,
                            "  line"
                        );
                    }
                }
            }
        }
        Err(e) => error!(error = %e, "Could not load order history"),
    }

    store.shutdown().await;
    info!("Demo completed");
    Ok(())
}
