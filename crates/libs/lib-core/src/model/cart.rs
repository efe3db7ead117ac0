use super::product::{Product, ProductId};

/// One cart entry: a snapshot of the product and how many of it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CartLine {
    pub product: Product,
    pub quantity: u32,
}

impl CartLine {
    pub fn product_id(&self) -> ProductId {
        self.product.id
    }

    pub fn line_total(&self) -> u64 {
        self.product.price.saturating_mul(u64::from(self.quantity))
    }
}

/// Shopping cart holding at most one line per product id.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Cart {
    lines: Vec<CartLine>,
}

impl Cart {
    pub fn new() -> Self {
        Self::default()
    }

    /// Lines in the order products were first added.
    pub fn lines(&self) -> &[CartLine] {
        &self.lines
    }

    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }

    /// Number of distinct products in the cart.
    pub fn line_count(&self) -> usize {
        self.lines.len()
    }

    /// Sum of quantities across all lines.
    pub fn total_quantity(&self) -> u64 {
        self.lines.iter().map(|line| u64::from(line.quantity)).sum()
    }

    pub fn quantity_of(&self, id: ProductId) -> u32 {
        self.line(id).map(|line| line.quantity).unwrap_or(0)
    }

    pub fn line(&self, id: ProductId) -> Option<&CartLine> {
        self.lines.iter().find(|line| line.product_id() == id)
    }

    /// Add `quantity` of `product`.
    ///
    /// An existing line for the same id grows in place; otherwise a new line is
    /// appended. A zero quantity leaves the cart unchanged.
    pub fn add(&mut self, product: &Product, quantity: u32) {
        if quantity == 0 {
            return;
        }

        match self.lines.iter_mut().find(|line| line.product_id() == product.id) {
            Some(line) => line.quantity = line.quantity.saturating_add(quantity),
            None => self.lines.push(CartLine {
                product: product.clone(),
                quantity,
            }),
        }
    }

    /// Remove the line for `id`, returning it when present.
    pub fn remove(&mut self, id: ProductId) -> Option<CartLine> {
        let index = self.lines.iter().position(|line| line.product_id() == id)?;
        Some(self.lines.remove(index))
    }

    pub fn clear(&mut self) {
        self.lines.clear();
    }

    pub fn total(&self) -> u64 {
        cart_total(&self.lines)
    }
}

/// Sum of price × quantity over `lines`.
pub fn cart_total<'a>(lines: impl IntoIterator<Item = &'a CartLine>) -> u64 {
    lines
        .into_iter()
        .fold(0u64, |total, line| total.saturating_add(line.line_total()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::product::ProductForCreate;

    fn product(id: u64, price: u64) -> Product {
        ProductForCreate::new(format!("Item {id}"), "Electronics", price).into_product(ProductId(id))
    }

    // ========== Merge Rule Tests ==========

    #[test]
    fn test_add_existing_line_accumulates() {
        let laptop = product(3, 500);
        let mut cart = Cart::new();
        cart.add(&laptop, 1);
        cart.add(&laptop, 2);
        cart.add(&laptop, 4);

        assert_eq!(cart.line_count(), 1);
        assert_eq!(cart.quantity_of(laptop.id), 7);
    }

    #[test]
    fn test_add_absent_product_appends_one_line() {
        let mut cart = Cart::new();
        cart.add(&product(1, 10), 1);
        cart.add(&product(2, 20), 3);

        assert_eq!(cart.line_count(), 2);
        assert_eq!(cart.lines()[1].product_id(), ProductId(2));
        assert_eq!(cart.lines()[1].quantity, 3);
        assert_eq!(cart.total_quantity(), 4);
    }

    #[test]
    fn test_add_zero_quantity_is_ignored() {
        let mut cart = Cart::new();
        cart.add(&product(1, 10), 0);
        assert!(cart.is_empty());
    }

    #[test]
    fn test_remove_and_clear() {
        let mut cart = Cart::new();
        cart.add(&product(1, 10), 1);
        cart.add(&product(2, 20), 1);

        let removed = cart.remove(ProductId(1)).expect("line should exist");
        assert_eq!(removed.product_id(), ProductId(1));
        assert!(cart.remove(ProductId(1)).is_none());
        assert_eq!(cart.line_count(), 1);

        cart.clear();
        assert!(cart.is_empty());
        assert_eq!(cart.total(), 0);
    }

    // ========== Totals Tests ==========

    #[test]
    fn test_cart_total() {
        let lines = vec![
            CartLine { product: product(1, 10), quantity: 2 },
            CartLine { product: product(2, 5), quantity: 3 },
        ];
        assert_eq!(cart_total(&lines), 35);
        assert_eq!(cart_total(&Vec::<CartLine>::new()), 0);
    }

    #[test]
    fn test_line_total_saturates() {
        let line = CartLine { product: product(1, u64::MAX), quantity: 2 };
        assert_eq!(line.line_total(), u64::MAX);
    }
}
