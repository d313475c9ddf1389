//! Console demonstration of the checkout flow.

mod config;

use checkout_core::Money;
use checkout_parties::Customer;
use checkout_products::{Product, SharedProduct};
use checkout_sales::{Cart, Order, OrderProcessor};

use crate::config::DemoConfig;

fn main() -> anyhow::Result<()> {
    checkout_observability::init();

    let config = DemoConfig::from_env();
    tracing::info!(payment = ?config.payment, "starting checkout demo");

    let tomato = SharedProduct::new(Product::new("Tomato", Money::new(29, 50), 10)?);
    let film = SharedProduct::new(Product::digital(
        "Movie 'Back to the Future'",
        Money::new(49, 50),
        2048,
    ));

    let mut cart = Cart::new();
    cart.add_item(&tomato, 2)?;
    cart.add_one(&film)?;

    tracing::info!("{tomato}");
    tracing::info!("{film}");
    tracing::info!("{cart}");

    let mut customer = Customer::new(
        "Ivan Ivanov",
        "ivan@example.com",
        "Moscow, Lenin Ave, 1",
    );
    tracing::info!("{customer}");

    let mut order = Order::new(&customer, cart);
    customer.add_order(&order);

    let outcome = OrderProcessor::new().process_order(&mut order, config.payment_method());
    tracing::info!(success = outcome.is_success(), "{outcome}");
    tracing::info!("{order}");
    tracing::info!(summary = %serde_json::to_string(&order.summary())?, "order summary");

    tracing::info!("stock after order: {tomato}");
    Ok(())
}
