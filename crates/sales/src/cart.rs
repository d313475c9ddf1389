use checkout_core::{DomainError, DomainResult, Money, ProductId};
use checkout_products::SharedProduct;

/// Cart line: a referenced product and the requested quantity.
#[derive(Debug, Clone)]
pub struct CartLine {
    product: SharedProduct,
    quantity: i64,
}

impl CartLine {
    pub fn product(&self) -> &SharedProduct {
        &self.product
    }

    pub fn quantity(&self) -> i64 {
        self.quantity
    }

    /// Current unit price times quantity.
    pub fn line_total(&self) -> Money {
        self.product.price().times(self.quantity.unsigned_abs())
    }
}

/// Shopping cart.
///
/// Holds at most one line per product, in the order products were first added.
/// Quantities are checked against stock when added but nothing is reserved:
/// stock may change before [`Cart::apply_stock_changes`] commits the cart.
#[derive(Debug, Clone, Default)]
pub struct Cart {
    lines: Vec<CartLine>,
}

impl Cart {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn items(&self) -> &[CartLine] {
        &self.lines
    }

    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }

    pub fn len(&self) -> usize {
        self.lines.len()
    }

    pub fn quantity_of(&self, product_id: ProductId) -> Option<i64> {
        self.lines
            .iter()
            .find(|line| line.product.id() == product_id)
            .map(|line| line.quantity)
    }

    pub fn add_one(&mut self, product: &SharedProduct) -> DomainResult<()> {
        self.add_item(product, 1)
    }

    /// Add `quantity` units of `product`, accumulating onto an existing line.
    ///
    /// Only the requested quantity is compared with the product's current
    /// stock; units already sitting in this cart are not counted, so repeated
    /// adds can exceed stock in total. Adds whose quantity or cart total would
    /// overflow are rejected, so [`Cart::get_total`] always fits in `Money`.
    pub fn add_item(&mut self, product: &SharedProduct, quantity: i64) -> DomainResult<()> {
        if quantity <= 0 {
            return Err(DomainError::validation("quantity must be positive"));
        }
        let available = product.stock();
        if quantity > available {
            return Err(DomainError::validation(format!(
                "insufficient stock for product '{}': requested {quantity}, available {available}",
                product.name()
            )));
        }

        let product_id = product.id();
        let new_quantity = self
            .quantity_of(product_id)
            .unwrap_or(0)
            .checked_add(quantity)
            .ok_or_else(|| {
                DomainError::validation(format!(
                    "quantity overflow for product '{}'",
                    product.name()
                ))
            })?;
        self.ensure_total_fits(product_id, product.price(), new_quantity)?;

        match self.lines.iter_mut().find(|line| line.product.id() == product_id) {
            Some(line) => line.quantity = new_quantity,
            None => self.lines.push(CartLine {
                product: product.clone(),
                quantity,
            }),
        }
        tracing::debug!(product_id = %product_id, quantity, "item added to cart");
        Ok(())
    }

    /// Check that the cart total still fits once `product_id`'s line holds
    /// `quantity` units at `price`.
    fn ensure_total_fits(
        &self,
        product_id: ProductId,
        price: Money,
        quantity: i64,
    ) -> DomainResult<()> {
        let others: Money = self
            .lines
            .iter()
            .filter(|line| line.product.id() != product_id)
            .map(CartLine::line_total)
            .sum();
        price
            .checked_times(quantity.unsigned_abs())
            .and_then(|line_total| others.checked_add(line_total))
            .map(|_| ())
            .ok_or_else(|| DomainError::validation("cart total exceeds the representable amount"))
    }

    /// Remove the line for `product_id`. No-op if absent.
    pub fn remove_item(&mut self, product_id: ProductId) {
        self.lines.retain(|line| line.product.id() != product_id);
    }

    pub fn clear(&mut self) {
        self.lines.clear();
    }

    pub fn get_total(&self) -> Money {
        self.lines.iter().map(CartLine::line_total).sum()
    }

    /// Commit the cart: deduct each line's quantity from its product's stock.
    ///
    /// Not idempotent, a second call deducts again. Not atomic either: if a
    /// product no longer has enough stock the call fails at that line and
    /// lines before it stay deducted.
    pub fn apply_stock_changes(&self) -> DomainResult<()> {
        for line in &self.lines {
            let remaining = line.product.stock() - line.quantity;
            line.product.set_stock(remaining)?;
        }
        Ok(())
    }
}

impl core::fmt::Display for Cart {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        if self.lines.is_empty() {
            return write!(f, "Cart is empty");
        }
        writeln!(f, "Cart:")?;
        for line in &self.lines {
            writeln!(
                f,
                "{} x {} = {}",
                line.product.name(),
                line.quantity,
                line.line_total()
            )?;
        }
        write!(f, "Total: {}", self.get_total())
    }
}
