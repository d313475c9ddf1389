use std::cell::RefCell;
use std::rc::Rc;

use serde::{Deserialize, Serialize};

use checkout_core::{DomainError, DomainResult, Entity, Money, ProductId};

/// What kind of inventory unit a product is.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "lowercase")]
pub enum ProductKind {
    Physical,
    /// Downloadable product. The file size is informational only.
    Digital { file_size_mb: u64 },
}

/// Entity: Product.
///
/// Stock is never negative: construction and [`Product::set_stock`] both
/// reject negative values.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Product {
    id: ProductId,
    name: String,
    price: Money,
    stock: i64,
    kind: ProductKind,
}

impl Product {
    pub fn new(name: impl Into<String>, price: Money, stock: i64) -> DomainResult<Self> {
        Self::with_id(ProductId::new(), name, price, stock)
    }

    pub fn with_id(
        id: ProductId,
        name: impl Into<String>,
        price: Money,
        stock: i64,
    ) -> DomainResult<Self> {
        if stock < 0 {
            return Err(DomainError::validation("stock cannot be negative"));
        }
        Ok(Self {
            id,
            name: name.into(),
            price,
            stock,
            kind: ProductKind::Physical,
        })
    }

    /// Digital products always start with a stock of exactly one.
    pub fn digital(name: impl Into<String>, price: Money, file_size_mb: u64) -> Self {
        Self {
            id: ProductId::new(),
            name: name.into(),
            price,
            stock: 1,
            kind: ProductKind::Digital { file_size_mb },
        }
    }

    pub fn id_typed(&self) -> ProductId {
        self.id
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn price(&self) -> Money {
        self.price
    }

    pub fn stock(&self) -> i64 {
        self.stock
    }

    pub fn kind(&self) -> ProductKind {
        self.kind
    }

    pub fn is_digital(&self) -> bool {
        matches!(self.kind, ProductKind::Digital { .. })
    }

    pub fn file_size_mb(&self) -> Option<u64> {
        match self.kind {
            ProductKind::Digital { file_size_mb } => Some(file_size_mb),
            ProductKind::Physical => None,
        }
    }

    /// Replace the stock count. Fails without touching stock if `value` is negative.
    pub fn set_stock(&mut self, value: i64) -> DomainResult<()> {
        if value < 0 {
            return Err(DomainError::validation(format!(
                "stock for '{}' cannot be negative (requested {value})",
                self.name
            )));
        }
        tracing::debug!(product_id = %self.id, from = self.stock, to = value, "stock updated");
        self.stock = value;
        Ok(())
    }
}

impl Entity for Product {
    type Id = ProductId;

    fn id(&self) -> &Self::Id {
        &self.id
    }
}

impl core::fmt::Display for Product {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self.kind {
            ProductKind::Physical => write!(
                f,
                "Product: {}, price = {}, stock = {}",
                self.name, self.price, self.stock
            ),
            ProductKind::Digital { file_size_mb } => write!(
                f,
                "Digital product: {}, price = {}, file size = {} MB",
                self.name, self.price, file_size_mb
            ),
        }
    }
}

/// Shared, single-threaded handle to a product.
///
/// Several carts may reference the same product; a stock change made through
/// one handle is visible through every clone. Not `Send`: the check-then-commit
/// sequence in carts is unsynchronised.
#[derive(Debug, Clone)]
pub struct SharedProduct(Rc<RefCell<Product>>);

impl SharedProduct {
    pub fn new(product: Product) -> Self {
        Self(Rc::new(RefCell::new(product)))
    }

    pub fn id(&self) -> ProductId {
        *self.0.borrow().id()
    }

    pub fn name(&self) -> String {
        self.0.borrow().name().to_owned()
    }

    pub fn price(&self) -> Money {
        self.0.borrow().price()
    }

    pub fn stock(&self) -> i64 {
        self.0.borrow().stock()
    }

    pub fn set_stock(&self, value: i64) -> DomainResult<()> {
        self.0.borrow_mut().set_stock(value)
    }

    /// Whether both handles point at the same product instance.
    pub fn ptr_eq(&self, other: &SharedProduct) -> bool {
        Rc::ptr_eq(&self.0, &other.0)
    }
}

impl core::fmt::Display for SharedProduct {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        core::fmt::Display::fmt(&*self.0.borrow(), f)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn tomato() -> Product {
        Product::new("Tomato", Money::new(29, 50), 10).unwrap()
    }

    #[test]
    fn new_product_exposes_its_fields() {
        let product = tomato();
        assert_eq!(product.name(), "Tomato");
        assert_eq!(product.price(), Money::new(29, 50));
        assert_eq!(product.stock(), 10);
        assert!(!product.is_digital());
        assert_eq!(product.file_size_mb(), None);
    }

    #[test]
    fn new_product_rejects_negative_stock() {
        let err = Product::new("Tomato", Money::new(1, 0), -1).unwrap_err();
        assert!(err.is_validation());
    }

    #[test]
    fn set_stock_replaces_value() {
        let mut product = tomato();
        product.set_stock(5).unwrap();
        assert_eq!(product.stock(), 5);
        product.set_stock(0).unwrap();
        assert_eq!(product.stock(), 0);
    }

    #[test]
    fn set_stock_rejects_negative_value() {
        let mut product = tomato();
        let err = product.set_stock(-1).unwrap_err();
        match err {
            DomainError::Validation(msg) if msg.contains("cannot be negative") => {}
            other => panic!("expected Validation error, got {other:?}"),
        }
        assert_eq!(product.stock(), 10);
    }

    #[test]
    fn identity_survives_stock_changes() {
        let original = tomato();
        let mut changed = original.clone();
        changed.set_stock(2).unwrap();

        assert_ne!(original, changed);
        assert_eq!(original.id(), changed.id());
        assert_ne!(original.id(), tomato().id());
    }

    #[test]
    fn digital_product_has_stock_of_one() {
        let movie = Product::digital("Movie", Money::new(49, 50), 2048);
        assert_eq!(movie.stock(), 1);
        assert_eq!(movie.file_size_mb(), Some(2048));
        assert!(movie.is_digital());
        assert_eq!(movie.price(), Money::new(49, 50));
    }

    #[test]
    fn display_strings() {
        assert_eq!(
            tomato().to_string(),
            "Product: Tomato, price = 29.50, stock = 10"
        );
        assert_eq!(
            Product::digital("Movie", Money::new(49, 50), 2048).to_string(),
            "Digital product: Movie, price = 49.50, file size = 2048 MB"
        );
    }

    #[test]
    fn kind_serializes_with_tag() {
        let json = serde_json::to_value(ProductKind::Digital { file_size_mb: 7 }).unwrap();
        assert_eq!(json, serde_json::json!({ "kind": "digital", "file_size_mb": 7 }));
    }

    #[test]
    fn shared_handles_observe_the_same_stock() {
        let a = SharedProduct::new(tomato());
        let b = a.clone();
        a.set_stock(3).unwrap();
        assert_eq!(b.stock(), 3);
        assert!(a.ptr_eq(&b));
        assert_eq!(a.id(), b.id());

        let other = SharedProduct::new(tomato());
        assert!(!a.ptr_eq(&other));
    }

    mod proptest_tests {
        use super::*;
        use proptest::prelude::*;

        proptest! {
            /// Property: negative stock is always rejected and leaves stock unchanged.
            #[test]
            fn negative_stock_is_always_rejected(
                initial in 0i64..10_000,
                value in i64::MIN..0
            ) {
                let mut product = Product::new("Widget", Money::new(1, 0), initial).unwrap();
                let result = product.set_stock(value);
                prop_assert!(matches!(result, Err(DomainError::Validation(_))));
                prop_assert_eq!(product.stock(), initial);
            }

            /// Property: digital products ignore the file size for inventory purposes.
            #[test]
            fn digital_stock_is_one_for_any_file_size(file_size in any::<u64>()) {
                let product = Product::digital("File", Money::new(1, 0), file_size);
                prop_assert_eq!(product.stock(), 1);
            }
        }
    }
}
