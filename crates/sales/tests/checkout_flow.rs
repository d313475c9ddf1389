//! End-to-end checkout scenarios through the public API.

use checkout_core::{AggregateRoot, DomainError, Money};
use checkout_parties::Customer;
use checkout_products::{Product, SharedProduct};
use checkout_sales::{
    Cart, CreditCardPayment, Order, OrderProcessor, OrderStatus, PayPalPayment, ProcessOutcome,
};

fn tomato() -> SharedProduct {
    SharedProduct::new(Product::new("Tomato", Money::new(29, 50), 10).unwrap())
}

fn movie() -> SharedProduct {
    SharedProduct::new(Product::digital("Back to the Future", Money::new(49, 50), 2048))
}

fn ivan() -> Customer {
    Customer::new("Ivan Ivanov", "ivan@example.com", "Moscow, Lenin Ave, 1")
}

#[test]
fn tomato_scenario_totals_and_commits() {
    let product = tomato();
    let mut cart = Cart::new();
    cart.add_item(&product, 2).unwrap();

    assert_eq!(cart.get_total(), Money::new(59, 0));

    cart.apply_stock_changes().unwrap();
    assert_eq!(product.stock(), 8);
}

#[test]
fn full_checkout_with_credit_card() {
    let product = tomato();
    let film = movie();
    let mut customer = ivan();

    let mut cart = Cart::new();
    cart.add_item(&product, 2).unwrap();
    cart.add_one(&film).unwrap();

    let mut order = Order::new(&customer, cart);
    customer.add_order(&order);

    let outcome = OrderProcessor::new().process_order(
        &mut order,
        Box::new(CreditCardPayment::new("1234567890123456")),
    );

    assert!(outcome.is_success());
    assert_eq!(order.status(), OrderStatus::Processed);
    assert_eq!(order.total(), Money::new(108, 50));
    assert_eq!(product.stock(), 8);
    assert_eq!(film.stock(), 0);
    assert_eq!(customer.orders(), &[order.id_typed()]);
    assert_eq!(order.version(), 2);
}

#[test]
fn full_checkout_with_paypal() {
    let product = tomato();
    let mut cart = Cart::new();
    cart.add_item(&product, 3).unwrap();
    let mut order = Order::new(&ivan(), cart);

    let outcome = OrderProcessor::new()
        .process_order(&mut order, Box::new(PayPalPayment::new("ivan@example.com")));

    assert_eq!(outcome, ProcessOutcome::Processed);
    assert_eq!(order.summary().payment_method.as_deref(), Some("paypal"));
    assert_eq!(product.stock(), 7);
}

#[test]
fn shared_product_oversold_by_two_carts() {
    let product = tomato();

    let mut first_cart = Cart::new();
    first_cart.add_item(&product, 6).unwrap();
    let mut second_cart = Cart::new();
    second_cart.add_item(&product, 6).unwrap();

    let mut first = Order::new(&ivan(), first_cart);
    let mut second = Order::new(&ivan(), second_cart);
    let processor = OrderProcessor::new();

    let outcome = processor.process_order(&mut first, Box::new(CreditCardPayment::new("1111")));
    assert!(outcome.is_success());
    assert_eq!(product.stock(), 4);

    let outcome = processor.process_order(&mut second, Box::new(CreditCardPayment::new("2222")));
    assert!(matches!(outcome, ProcessOutcome::Failed(DomainError::Validation(_))));
    assert_eq!(second.status(), OrderStatus::Created);
    assert_eq!(product.stock(), 4);
}

#[test]
fn direct_process_without_payment_is_a_precondition_error() {
    let mut cart = Cart::new();
    cart.add_item(&tomato(), 1).unwrap();
    let mut order = Order::new(&ivan(), cart);

    let err = order.process().unwrap_err();
    assert!(err.is_precondition());
    assert_eq!(order.status(), OrderStatus::Created);
}

#[test]
fn cart_can_be_edited_through_the_order_before_processing() {
    let product = tomato();
    let film = movie();
    let mut cart = Cart::new();
    cart.add_item(&product, 2).unwrap();
    cart.add_one(&film).unwrap();
    let mut order = Order::new(&ivan(), cart);

    order.cart_mut().remove_item(film.id());
    assert_eq!(order.total(), Money::new(59, 0));

    let outcome = OrderProcessor::new()
        .process_order(&mut order, Box::new(CreditCardPayment::new("1234567890123456")));
    assert!(outcome.is_success());
    assert_eq!(film.stock(), 1);
}
