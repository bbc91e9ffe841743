use crate::model::OrderId;
use crate::order::PlacementError;
use serde::Serialize;

/// What the caller should show after a checkout request.
///
/// Carries no HTTP types; [`CheckoutView::location`] is the path a web layer would
/// redirect to.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub enum CheckoutView {
    /// The order was placed.
    OrderConfirmation(OrderId),
    /// Back to the cart, optionally with a message for the user.
    Cart { error: Option<String> },
    /// Not logged in; `next` is where to return afterwards.
    Login { next: String },
}

impl CheckoutView {
    pub fn login() -> Self {
        CheckoutView::Login {
            next: "/cart".to_string(),
        }
    }

    pub fn location(&self) -> String {
        match self {
            CheckoutView::OrderConfirmation(id) => format!("/order/{}", id.0),
            CheckoutView::Cart { .. } => "/cart".to_string(),
            CheckoutView::Login { next } => format!("/auth/login?next={next}"),
        }
    }

    pub fn error(&self) -> Option<&str> {
        match self {
            CheckoutView::Cart { error } => error.as_deref(),
            _ => None,
        }
    }
}

impl From<Result<OrderId, PlacementError>> for CheckoutView {
    fn from(result: Result<OrderId, PlacementError>) -> Self {
        match result {
            Ok(id) => CheckoutView::OrderConfirmation(id),
            Err(e @ PlacementError::InsufficientStock(_)) => CheckoutView::Cart {
                error: Some(e.to_string()),
            },
            // Empty cart and store failures both land on the cart page without a message.
            Err(_) => CheckoutView::Cart { error: None },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_locations() {
        assert_eq!(CheckoutView::OrderConfirmation(OrderId(7)).location(), "/order/7");
        assert_eq!(CheckoutView::Cart { error: None }.location(), "/cart");
        assert_eq!(CheckoutView::login().location(), "/auth/login?next=/cart");
    }

    #[test]
    fn test_placement_results_map_to_views() {
        let view = CheckoutView::from(Err::<OrderId, _>(PlacementError::InsufficientStock("Lamp".into())));
        assert_eq!(view.error(), Some("Insufficient stock for Lamp"));

        let view = CheckoutView::from(Err::<OrderId, _>(PlacementError::EmptyCart));
        assert_eq!(view, CheckoutView::Cart { error: None });

        let view = CheckoutView::from(Err::<OrderId, _>(PlacementError::StoreFailure(sqlx::Error::RowNotFound)));
        assert_eq!(view, CheckoutView::Cart { error: None });

        let view = CheckoutView::from(Ok(OrderId(3)));
        assert_eq!(view, CheckoutView::OrderConfirmation(OrderId(3)));
    }
}
