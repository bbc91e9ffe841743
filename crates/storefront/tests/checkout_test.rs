mod support;

use store_framework::StoreClient;
use storefront::identity::Identity;
use storefront::model::{Money, ProductUpdate};
use storefront::order::{CheckoutView, OrderError, PlacementError};
use support::TestStore;

#[tokio::test]
async fn test_two_product_cart_is_placed() {
    let store = TestStore::start().await;
    let alice = store.user("Alice").await;
    let a = store.product("A", 1000, 5).await;
    let b = store.product("B", 2000, 1).await;
    store.put_in_cart(alice, a, 2).await;
    store.put_in_cart(alice, b, 1).await;

    let order_id = store.order_client.place_order(alice).await.unwrap();

    let detail = store.order_client.detail(alice, order_id).await.unwrap();
    assert_eq!(detail.order.total_amount, Money(4000));
    assert_eq!(detail.lines.len(), 2);
    assert_eq!(store.stock(a).await, 3);
    assert_eq!(store.stock(b).await, 0);
    assert_eq!(store.count("payments").await, 1);
    assert!(store.cart_client.view(alice).await.unwrap().is_empty());

    let payment = detail.payment.unwrap();
    assert_eq!(payment.payment_method, "COD");
    assert_eq!(payment.transaction_id, alice.0.to_string());
}

#[tokio::test]
async fn test_out_of_stock_product_is_rejected() {
    let store = TestStore::start().await;
    let alice = store.user("Alice").await;
    let c = store.product("C", 500, 0).await;
    store.put_in_cart(alice, c, 1).await;

    let result = store.order_client.place_order(alice).await;

    assert!(matches!(result, Err(PlacementError::InsufficientStock(name)) if name == "C"));
    assert_eq!(store.count("orders").await, 0);
    assert_eq!(store.count("order_items").await, 0);
    assert_eq!(store.count("payments").await, 0);
    assert_eq!(store.stock(c).await, 0);
    // The cart is kept so the user can fix it.
    assert_eq!(store.cart_client.entries(alice).await.unwrap().len(), 1);
}

#[tokio::test]
async fn test_empty_cart_has_no_side_effects() {
    let store = TestStore::start().await;
    let alice = store.user("Alice").await;
    store.product("A", 1000, 5).await;

    let result = store.order_client.place_order(alice).await;

    assert!(matches!(result, Err(PlacementError::EmptyCart)));
    assert_eq!(store.count("orders").await, 0);
    assert_eq!(store.count("payments").await, 0);
}

#[tokio::test]
async fn test_price_change_does_not_touch_past_orders() {
    let store = TestStore::start().await;
    let alice = store.user("Alice").await;
    let lamp = store.product("Lamp", 1250, 10).await;
    store.put_in_cart(alice, lamp, 2).await;
    let order_id = store.order_client.place_order(alice).await.unwrap();

    store
        .product_client
        .update_product(
            lamp,
            ProductUpdate {
                price: Some(Money(9999)),
                name: Some("Fancy Lamp".into()),
                ..Default::default()
            },
        )
        .await
        .unwrap();

    let detail = store.order_client.detail(alice, order_id).await.unwrap();
    assert_eq!(detail.lines[0].price, Money(1250));
    assert_eq!(detail.order.total_amount, Money(2500));
    assert_eq!(detail.lines[0].product_name.as_deref(), Some("Fancy Lamp"));
}

#[tokio::test]
async fn test_deleted_product_keeps_order_lines() {
    let store = TestStore::start().await;
    let alice = store.user("Alice").await;
    let lamp = store.product("Lamp", 1250, 10).await;
    store.put_in_cart(alice, lamp, 1).await;
    let order_id = store.order_client.place_order(alice).await.unwrap();

    store.product_client.delete(lamp).await.unwrap();

    let detail = store.order_client.detail(alice, order_id).await.unwrap();
    assert_eq!(detail.lines.len(), 1);
    assert_eq!(detail.lines[0].product_name, None);
    assert_eq!(detail.lines[0].price, Money(1250));
}

#[tokio::test]
async fn test_only_the_buyers_cart_is_cleared() {
    let store = TestStore::start().await;
    let alice = store.user("Alice").await;
    let bob = store.user("Bob").await;
    let lamp = store.product("Lamp", 1250, 10).await;
    let desk = store.product("Desk", 8000, 10).await;
    store.put_in_cart(alice, lamp, 1).await;
    store.put_in_cart(bob, lamp, 3).await;
    store.put_in_cart(bob, desk, 1).await;

    store.order_client.place_order(alice).await.unwrap();

    assert!(store.cart_client.entries(alice).await.unwrap().is_empty());
    let bobs = store.cart_client.entries(bob).await.unwrap();
    assert_eq!(bobs.len(), 2);
    assert_eq!(bobs[0].quantity, 3);

    // A second checkout by the same user finds nothing to buy.
    assert!(matches!(
        store.order_client.place_order(alice).await,
        Err(PlacementError::EmptyCart)
    ));
    assert_eq!(store.count("orders").await, 1);
}

#[tokio::test]
async fn test_totals_match_line_items() {
    let store = TestStore::start().await;
    let alice = store.user("Alice").await;
    let products = [
        store.product("Pen", 199, 100).await,
        store.product("Notebook", 549, 100).await,
        store.product("Stapler", 1275, 100).await,
    ];

    for (round, quantity) in [3, 1, 7].into_iter().enumerate() {
        for product in &products[..=round] {
            store.put_in_cart(alice, *product, quantity).await;
        }
        store.order_client.place_order(alice).await.unwrap();
    }

    let orders = store.order_client.history(alice).await.unwrap();
    assert_eq!(orders.len(), 3);
    for order in orders {
        let detail = store.order_client.detail(alice, order.id).await.unwrap();
        let sum = detail
            .lines
            .iter()
            .map(|line| line.line_total().unwrap())
            .fold(Money::ZERO, |acc, m| acc.checked_add(m).unwrap());
        assert_eq!(order.total_amount, sum);
    }
}

#[tokio::test]
async fn test_history_is_newest_first_and_scoped_to_user() {
    let store = TestStore::start().await;
    let alice = store.user("Alice").await;
    let bob = store.user("Bob").await;
    let lamp = store.product("Lamp", 1250, 10).await;

    store.put_in_cart(alice, lamp, 1).await;
    let first = store.order_client.place_order(alice).await.unwrap();
    store.put_in_cart(alice, lamp, 1).await;
    let second = store.order_client.place_order(alice).await.unwrap();
    store.put_in_cart(bob, lamp, 1).await;
    let bobs = store.order_client.place_order(bob).await.unwrap();

    let ids: Vec<_> = store
        .order_client
        .history(alice)
        .await
        .unwrap()
        .into_iter()
        .map(|order| order.id)
        .collect();
    assert_eq!(ids, vec![second, first]);

    // Bob's order is invisible to Alice.
    assert!(matches!(
        store.order_client.detail(alice, bobs).await,
        Err(OrderError::NotFound(_))
    ));
}

#[tokio::test]
async fn test_checkout_views() {
    let store = TestStore::start().await;
    let alice = store.user("Alice").await;
    let lamp = store.product("Lamp", 1250, 1).await;

    // Anonymous callers never reach the transaction.
    let anonymous = store.user_client.resolve(None).await.unwrap();
    assert_eq!(anonymous, Identity::Anonymous);
    let view = store.order_client.checkout(&anonymous).await;
    assert_eq!(view.location(), "/auth/login?next=/cart");

    let identity = store.user_client.resolve(Some(alice)).await.unwrap();

    let view = store.order_client.checkout(&identity).await;
    assert_eq!(view, CheckoutView::Cart { error: None });

    store.put_in_cart(alice, lamp, 2).await;
    let view = store.order_client.checkout(&identity).await;
    assert_eq!(view.location(), "/cart");
    assert_eq!(view.error(), Some("Insufficient stock for Lamp"));

    store.cart_client.set_quantity(alice, lamp, 1).await.unwrap();
    let view = store.order_client.checkout(&identity).await;
    let CheckoutView::OrderConfirmation(order_id) = view.clone() else {
        panic!("expected a confirmation, got {view:?}");
    };
    assert_eq!(view.location(), format!("/order/{}", order_id.0));
}
