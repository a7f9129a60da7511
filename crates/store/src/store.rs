use shopfront_core::{DomainError, DomainResult, Entity, ProductId};
use shopfront_products::Product;

use crate::order::OrderLine;

/// Aggregate root: Store.
///
/// Insertion order is the enumeration order every view preserves; the shell
/// numbers products by it.
#[derive(Debug, Clone, Default)]
pub struct Store {
    products: Vec<Product>,
}

impl Store {
    pub fn new(products: Vec<Product>) -> Self {
        Self { products }
    }

    /// Append a product. No duplicate check.
    pub fn add_product(&mut self, product: Product) -> ProductId {
        let id = product.id_typed();
        self.products.push(product);
        id
    }

    /// Remove the first product structurally equal to `product`.
    ///
    /// Returns the removed product, or `None` when nothing matched.
    pub fn remove_product(&mut self, product: &Product) -> Option<Product> {
        let index = self.products.iter().position(|p| p == product)?;
        Some(self.products.remove(index))
    }

    /// Every product held, active or not, in insertion order.
    pub fn products(&self) -> &[Product] {
        &self.products
    }

    /// Look a product up by identity.
    pub fn product(&self, id: ProductId) -> Option<&Product> {
        self.products.iter().find(|p| p.id() == &id)
    }

    pub fn product_mut(&mut self, id: ProductId) -> Option<&mut Product> {
        self.products.iter_mut().find(|p| p.id() == &id)
    }

    /// Units in stock across the whole catalog, inactive products included.
    ///
    /// Widened to `i128` so any number of valid `i64` stock levels sums
    /// without overflow.
    pub fn total_quantity(&self) -> i128 {
        self.products.iter().map(|p| i128::from(p.quantity())).sum()
    }

    /// Products open for listing and ordering, in insertion order.
    pub fn active_products(&self) -> Vec<&Product> {
        self.products.iter().filter(|p| p.is_active()).collect()
    }

    /// Validate and then execute a multi-line order, returning the total charged.
    ///
    /// Every line is checked against current stock before any product is
    /// touched, so a missing product or an oversized line rejects the whole
    /// order with nothing bought. Lines are checked one at a time against the
    /// pre-order stock: the same product listed twice can pass validation and
    /// then fail with `InsufficientStock` midway through execution, after
    /// earlier lines were already bought.
    pub fn order(&mut self, lines: &[OrderLine]) -> DomainResult<f64> {
        self.validate_order(lines)?;

        let mut total = 0.0;
        for line in lines {
            let product = self
                .product_mut(line.product_id)
                .ok_or_else(|| DomainError::product_not_found(line.product_id.to_string()))?;
            total += product.buy(line.quantity)?;
        }
        Ok(total)
    }

    fn validate_order(&self, lines: &[OrderLine]) -> DomainResult<()> {
        for line in lines {
            let product = self
                .product(line.product_id)
                .ok_or_else(|| DomainError::product_not_found(line.product_id.to_string()))?;

            if line.quantity > product.quantity() {
                return Err(DomainError::insufficient_stock(
                    product.name(),
                    line.quantity,
                    product.quantity(),
                ));
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn product(name: &str, price: f64, quantity: i64) -> Product {
        Product::new(name, price, quantity).unwrap()
    }

    fn quantities(store: &Store) -> Vec<i64> {
        store.products().iter().map(Product::quantity).collect()
    }

    #[test]
    fn empty_store_has_nothing_to_offer() {
        let store = Store::default();
        assert_eq!(store.total_quantity(), 0);
        assert!(store.active_products().is_empty());
    }

    #[test]
    fn add_product_appends_and_returns_identity() {
        let mut store = Store::new(vec![product("A", 1.0, 1)]);
        let id = store.add_product(product("B", 2.0, 2));

        let names: Vec<&str> = store.products().iter().map(Product::name).collect();
        assert_eq!(names, ["A", "B"]);
        assert_eq!(store.product(id).map(Product::name), Some("B"));
    }

    #[test]
    fn add_product_accepts_structural_duplicates() {
        let mut store = Store::default();
        store.add_product(product("Twin", 1.0, 1));
        store.add_product(product("Twin", 1.0, 1));
        assert_eq!(store.products().len(), 2);
    }

    #[test]
    fn remove_product_drops_first_structural_match() {
        let first = product("Twin", 1.0, 1);
        let second = product("Twin", 1.0, 1);
        let second_id = second.id_typed();
        let mut store = Store::new(vec![first.clone(), second, product("Other", 1.0, 1)]);

        let removed = store.remove_product(&product("Twin", 1.0, 1)).unwrap();
        assert!(removed.is_same_entity(&first));
        assert_eq!(store.products().len(), 2);
        assert!(store.product(second_id).is_some());
    }

    #[test]
    fn remove_missing_product_is_a_no_op() {
        let mut store = Store::new(vec![product("A", 1.0, 1)]);
        assert!(store.remove_product(&product("B", 1.0, 1)).is_none());
        assert_eq!(store.products().len(), 1);
    }

    #[test]
    fn total_quantity_counts_inactive_products() {
        let store = Store::new(vec![product("A", 1.0, 5), product("B", 1.0, 0)]);
        assert_eq!(store.total_quantity(), 5);

        let mut store = Store::new(vec![product("A", 1.0, 5), product("B", 1.0, 3)]);
        let b = store.products()[1].id_typed();
        let b = store.product_mut(b).unwrap();
        b.set_quantity(0).unwrap();
        b.set_quantity(4).unwrap();
        assert!(!b.is_active());
        assert_eq!(store.total_quantity(), 9);
    }

    #[test]
    fn total_quantity_does_not_overflow_at_i64_max() {
        let store = Store::new(vec![
            product("A", 1.0, i64::MAX),
            product("B", 1.0, 1),
            product("C", 1.0, i64::MAX),
        ]);
        assert_eq!(
            store.total_quantity(),
            2 * i128::from(i64::MAX) + 1
        );
    }

    #[test]
    fn active_products_hides_depleted_products_until_reactivated() {
        let mut store = Store::new(vec![
            product("A", 1.0, 5),
            product("B", 1.0, 5),
            product("C", 1.0, 5),
        ]);
        let b = store.products()[1].id_typed();

        store.product_mut(b).unwrap().set_quantity(0).unwrap();
        store.product_mut(b).unwrap().set_quantity(8).unwrap();
        let names: Vec<&str> = store.active_products().into_iter().map(Product::name).collect();
        assert_eq!(names, ["A", "C"]);

        store.product_mut(b).unwrap().activate();
        let names: Vec<&str> = store.active_products().into_iter().map(Product::name).collect();
        assert_eq!(names, ["A", "B", "C"]);
    }

    #[test]
    fn order_charges_every_line_and_decrements_stock() {
        let p1 = product("P1", 5.0, 10);
        let p2 = product("P2", 2.0, 10);
        let (id1, id2) = (p1.id_typed(), p2.id_typed());
        let mut store = Store::new(vec![p1, p2]);

        let total = store
            .order(&[OrderLine::new(id1, 2), OrderLine::new(id2, 3)])
            .unwrap();

        assert_eq!(total, 16.0);
        assert_eq!(quantities(&store), [8, 7]);
    }

    #[test]
    fn empty_order_costs_nothing() {
        let mut store = Store::new(vec![product("A", 1.0, 1)]);
        assert_eq!(store.order(&[]).unwrap(), 0.0);
        assert_eq!(quantities(&store), [1]);
    }

    #[test]
    fn order_rejects_lookalike_product_from_outside_the_store() {
        let inside = product("Same", 1.0, 10);
        let outside = product("Same", 1.0, 10);
        let inside_id = inside.id_typed();
        let mut store = Store::new(vec![inside]);

        let err = store
            .order(&[
                OrderLine::new(inside_id, 1),
                OrderLine::new(outside.id_typed(), 1),
            ])
            .unwrap_err();

        assert_eq!(
            err,
            DomainError::product_not_found(outside.id_typed().to_string())
        );
        assert_eq!(quantities(&store), [10]);
    }

    #[test]
    fn order_rejects_oversized_line_without_touching_any_product() {
        let p1 = product("P1", 5.0, 10);
        let p2 = product("P2", 2.0, 3);
        let (id1, id2) = (p1.id_typed(), p2.id_typed());
        let mut store = Store::new(vec![p1, p2]);

        let err = store
            .order(&[OrderLine::new(id1, 2), OrderLine::new(id2, 4)])
            .unwrap_err();

        assert_eq!(err, DomainError::insufficient_stock("P2", 4, 3));
        assert_eq!(quantities(&store), [10, 3]);
    }

    #[test]
    fn order_reports_first_failing_line() {
        let p1 = product("P1", 1.0, 1);
        let id1 = p1.id_typed();
        let stranger = ProductId::new();
        let mut store = Store::new(vec![p1]);

        let err = store
            .order(&[OrderLine::new(id1, 5), OrderLine::new(stranger, 1)])
            .unwrap_err();
        assert!(matches!(err, DomainError::InsufficientStock { .. }));
    }

    #[test]
    fn duplicate_lines_can_fail_after_partial_execution() {
        let p = product("P", 1.0, 10);
        let id = p.id_typed();
        let mut store = Store::new(vec![p]);

        let err = store
            .order(&[OrderLine::new(id, 6), OrderLine::new(id, 6)])
            .unwrap_err();

        assert_eq!(err, DomainError::insufficient_stock("P", 6, 4));
        assert_eq!(store.product(id).unwrap().quantity(), 4);
    }

    #[test]
    fn non_positive_line_fails_during_execution() {
        let p1 = product("P1", 1.0, 10);
        let p2 = product("P2", 1.0, 10);
        let (id1, id2) = (p1.id_typed(), p2.id_typed());
        let mut store = Store::new(vec![p1, p2]);

        let err = store
            .order(&[OrderLine::new(id1, 2), OrderLine::new(id2, 0)])
            .unwrap_err();

        assert!(matches!(err, DomainError::InvalidQuantity(_)));
        assert_eq!(quantities(&store), [8, 10]);
    }

    #[test]
    fn order_that_empties_a_product_removes_it_from_active_view() {
        let p = product("Last", 3.0, 2);
        let id = p.id_typed();
        let mut store = Store::new(vec![p]);

        assert_eq!(store.order(&[OrderLine::from((id, 2))]).unwrap(), 6.0);
        assert!(store.active_products().is_empty());
        assert_eq!(store.total_quantity(), 0);
    }

    #[cfg(test)]
    mod proptest_tests {
        use super::*;
        use proptest::prelude::*;

        proptest! {
            #![proptest_config(ProptestConfig {
                cases: 500,
                ..ProptestConfig::default()
            })]

            /// Property: with each product listed at most once, an order either
            /// succeeds in full or leaves every stock level as it was.
            #[test]
            fn single_occurrence_orders_are_all_or_nothing(
                catalog in proptest::collection::vec((0u32..100, 0i64..50), 1..8),
                requests in proptest::collection::vec(1i64..60, 1..8)
            ) {
                let mut store = Store::new(
                    catalog
                        .iter()
                        .enumerate()
                        .map(|(i, (price, qty))| product(&format!("P{i}"), f64::from(*price), *qty))
                        .collect(),
                );
                let before = quantities(&store);
                let lines: Vec<OrderLine> = store
                    .products()
                    .iter()
                    .zip(&requests)
                    .map(|(p, q)| OrderLine::new(p.id_typed(), *q))
                    .collect();

                let expected: f64 = store
                    .products()
                    .iter()
                    .zip(&requests)
                    .map(|(p, q)| *q as f64 * p.price())
                    .sum();
                let fits = store
                    .products()
                    .iter()
                    .zip(&requests)
                    .all(|(p, q)| *q <= p.quantity());

                match store.order(&lines) {
                    Ok(total) => {
                        prop_assert!(fits);
                        prop_assert_eq!(total, expected);
                        for (line, old) in lines.iter().zip(&before) {
                            prop_assert_eq!(
                                store.product(line.product_id).unwrap().quantity(),
                                old - line.quantity
                            );
                        }
                    }
                    Err(err) => {
                        prop_assert!(!fits);
                        let is_stock_error = matches!(err, DomainError::InsufficientStock { .. });
                        prop_assert!(is_stock_error);
                        prop_assert_eq!(quantities(&store), before);
                    }
                }
            }

            /// Property: total quantity is the plain sum, whatever the active flags say.
            #[test]
            fn total_quantity_ignores_active_flag(
                stock in proptest::collection::vec(0i64..1_000, 0..10),
                deplete in proptest::collection::vec(any::<bool>(), 0..10)
            ) {
                let mut store = Store::new(
                    stock.iter().map(|q| product("P", 1.0, *q)).collect(),
                );
                let ids: Vec<ProductId> = store.products().iter().map(Product::id_typed).collect();
                let mut expected: i128 = stock.iter().map(|q| i128::from(*q)).sum();

                for (id, flag) in ids.iter().zip(&deplete) {
                    if *flag {
                        let p = store.product_mut(*id).unwrap();
                        expected -= i128::from(p.quantity());
                        p.set_quantity(0).unwrap();
                    }
                }

                prop_assert_eq!(store.total_quantity(), expected);
            }
        }
    }
}
