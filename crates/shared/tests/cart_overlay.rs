mod support;

use shared::abstract_trait::CartServiceTrait;
use shared::domain::requests::AddToCartRequest;
use shared::errors::{RepositoryError, ServiceError};
use shared::service::CartService;
use std::sync::Arc;
use support::{MockCart, MockProducts, product};

fn service(products: &Arc<MockProducts>, cart: &Arc<MockCart>) -> CartService {
    CartService::new(cart.clone(), products.clone())
}

fn add(product_id: i32, quantity: i32) -> AddToCartRequest {
    AddToCartRequest {
        product_id,
        quantity,
    }
}

#[tokio::test]
async fn overlay_lists_items_with_money_formatting() {
    let products = MockProducts::new();
    products.seed(product(1, 1, "Wildflower Honey", 20, 12.5));
    products.seed(product(2, 1, "Calamansi Soap", 20, 3.0));
    let cart = MockCart::new(products.clone());
    let svc = service(&products, &cart);

    svc.add_item(1, &add(1, 2)).await.unwrap();
    svc.add_item(1, &add(2, 1)).await.unwrap();

    let html = svc.render_overlay(1).await.unwrap();

    assert!(html.contains("Wildflower Honey"));
    assert!(html.contains("x2"));
    assert!(html.contains("12.50"));
    assert!(html.contains("25.00"));
    assert!(html.contains("Calamansi Soap"));
    assert!(html.contains("3.00"));
    assert!(html.contains("28.00"));
}

#[tokio::test]
async fn empty_cart_shows_the_empty_state() {
    let products = MockProducts::new();
    let cart = MockCart::new(products.clone());
    let svc = service(&products, &cart);

    let html = svc.render_overlay(1).await.unwrap();

    assert!(html.contains("Your cart is empty"));
}

#[tokio::test]
async fn overlay_only_shows_your_items() {
    let products = MockProducts::new();
    products.seed(product(1, 1, "Wildflower Honey", 20, 12.5));
    let cart = MockCart::new(products.clone());
    let svc = service(&products, &cart);

    svc.add_item(1, &add(1, 1)).await.unwrap();

    let html = svc.render_overlay(2).await.unwrap();

    assert!(html.contains("Your cart is empty"));
    assert!(!html.contains("Wildflower Honey"));
}

#[tokio::test]
async fn repeat_adds_cap_at_available_stock() {
    let products = MockProducts::new();
    products.seed(product(1, 1, "Wildflower Honey", 5, 12.5));
    let cart = MockCart::new(products.clone());
    let svc = service(&products, &cart);

    svc.add_item(1, &add(1, 3)).await.unwrap();
    let response = svc.add_item(1, &add(1, 4)).await.unwrap();

    assert_eq!(response.message.as_deref(), Some("Added to cart"));
    assert_eq!(response.data.count, 1);
    assert_eq!(cart.quantity_of(1, 1), 5);
}

#[tokio::test]
async fn out_of_stock_products_cannot_be_added() {
    let products = MockProducts::new();
    products.seed(product(1, 1, "Wildflower Honey", 0, 12.5));
    let cart = MockCart::new(products.clone());
    let svc = service(&products, &cart);

    let err = svc.add_item(1, &add(1, 2)).await.unwrap_err();

    match err {
        ServiceError::InsufficientStock {
            requested,
            available,
        } => {
            assert_eq!(requested, 2);
            assert_eq!(available, 0);
        }
        other => panic!("expected insufficient stock, got {other:?}"),
    }
    assert_eq!(cart.quantity_of(1, 1), 0);
}

#[tokio::test]
async fn unknown_products_cannot_be_added() {
    let products = MockProducts::new();
    let cart = MockCart::new(products.clone());
    let svc = service(&products, &cart);

    let err = svc.add_item(1, &add(42, 1)).await.unwrap_err();

    assert!(matches!(err, ServiceError::Repo(RepositoryError::NotFound)));
}

#[tokio::test]
async fn zero_quantity_fails_validation() {
    let products = MockProducts::new();
    products.seed(product(1, 1, "Wildflower Honey", 20, 12.5));
    let cart = MockCart::new(products.clone());
    let svc = service(&products, &cart);

    let err = svc.add_item(1, &add(1, 0)).await.unwrap_err();

    match err {
        ServiceError::Validation(messages) => {
            assert!(messages.iter().any(|m| m.contains("Quantity must be at least 1")));
        }
        other => panic!("expected a validation error, got {other:?}"),
    }
}

#[tokio::test]
async fn badge_counts_distinct_products_not_quantities() {
    let products = MockProducts::new();
    products.seed(product(1, 1, "Wildflower Honey", 20, 12.5));
    products.seed(product(2, 1, "Calamansi Soap", 20, 3.0));
    let cart = MockCart::new(products.clone());
    let svc = service(&products, &cart);

    svc.add_item(1, &add(1, 3)).await.unwrap();
    svc.add_item(1, &add(2, 1)).await.unwrap();
    svc.add_item(1, &add(1, 2)).await.unwrap();

    let response = svc.count(1).await.unwrap();

    assert_eq!(response.data.count, 2);
}
