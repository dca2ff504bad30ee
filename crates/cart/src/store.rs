//! The cart store: authoritative line-item state for one shopping session.

use medibay_core::{LineItem, ProductRef, ProductSnapshot};
use rust_decimal::Decimal;
use tracing::{debug, error, warn};

use crate::error::CartError;
use crate::notify::Notifier;
use crate::slot::CartSlot;

/// In-memory cart, durably mirrored into a [`CartSlot`] on every mutation.
///
/// The store is created once per shopping session and handed by reference to
/// whatever needs it (header badge, cart drawer, checkout). Mutations are
/// synchronous: each one completes its persistence write before returning,
/// so a later read always observes the earlier mutation.
///
/// Persistence failures never surface as errors to callers. The in-memory
/// state stays authoritative, the failure is logged, and the notifier
/// carries a non-blocking notice, so shopping continues uninterrupted.
pub struct CartStore<S, N> {
    items: Vec<LineItem>,
    is_open: bool,
    slot: S,
    notifier: N,
}

impl<S: CartSlot, N: Notifier> CartStore<S, N> {
    /// Open a cart, hydrating it from the slot.
    ///
    /// An absent slot yields an empty cart. A malformed payload is discarded
    /// with a warning and the cart starts empty; the next mutation's write
    /// replaces it.
    #[must_use]
    pub fn open(slot: S, notifier: N) -> Self {
        let items = match slot.load() {
            Ok(Some(items)) => items,
            Ok(None) => Vec::new(),
            Err(e) => {
                warn!(error = %e, "discarding unreadable cart payload");
                Vec::new()
            }
        };

        Self {
            items,
            is_open: false,
            slot,
            notifier,
        }
    }

    // =========================================================================
    // Mutations
    // =========================================================================

    /// Add `quantity` units of a product.
    ///
    /// If the product is already in the cart its quantity is incremented;
    /// otherwise a new line is appended, so the cart never holds two lines
    /// for the same product.
    ///
    /// # Errors
    ///
    /// Returns [`CartError::InvalidQuantity`] if `quantity` is zero; the
    /// cart and the slot are left untouched.
    pub fn add_to_cart(
        &mut self,
        snapshot: ProductSnapshot,
        quantity: u32,
    ) -> Result<(), CartError> {
        if quantity == 0 {
            return Err(CartError::InvalidQuantity);
        }

        let name = snapshot.name.clone();
        let product_ref = snapshot.product_ref.clone();

        match self
            .items
            .iter_mut()
            .find(|line| *line.product_ref() == product_ref)
        {
            Some(line) => line.quantity = line.quantity.saturating_add(quantity),
            None => self.items.push(LineItem::new(snapshot, quantity)),
        }

        debug!(%product_ref, quantity, "added to cart");
        self.persist();
        self.notifier.success(&format!("{name} added to cart"));
        Ok(())
    }

    /// Remove the line for `product_ref`, if present.
    ///
    /// Removing a product that is not in the cart is a no-op, not an error,
    /// so calling this twice has the same effect as calling it once.
    pub fn remove_from_cart(&mut self, product_ref: &ProductRef) {
        let Some(position) = self
            .items
            .iter()
            .position(|line| line.product_ref() == product_ref)
        else {
            return;
        };

        let line = self.items.remove(position);

        debug!(%product_ref, "removed from cart");
        self.persist();
        self.notifier
            .info(&format!("{} removed from cart", line.snapshot.name));
    }

    /// Set the quantity of the line for `product_ref`.
    ///
    /// A quantity of zero removes the line instead of storing it. Unknown
    /// refs are a no-op.
    pub fn update_quantity(&mut self, product_ref: &ProductRef, quantity: u32) {
        if quantity == 0 {
            self.remove_from_cart(product_ref);
            return;
        }

        let Some(line) = self
            .items
            .iter_mut()
            .find(|line| line.product_ref() == product_ref)
        else {
            return;
        };
        line.quantity = quantity;

        debug!(%product_ref, quantity, "updated quantity");
        self.persist();
    }

    /// Empty the cart and delete the persisted slot.
    pub fn clear_cart(&mut self) {
        self.items.clear();

        if let Err(e) = self.slot.clear() {
            error!(error = %e, "failed to clear cart slot");
            self.notifier.error("Your cart could not be saved");
        }

        debug!("cart cleared");
        self.notifier.info("Cart cleared");
    }

    /// Flip the cart drawer's visibility flag.
    ///
    /// Display state only; never persisted.
    pub fn toggle_cart(&mut self) {
        self.is_open = !self.is_open;
    }

    // =========================================================================
    // Derived values
    // =========================================================================

    /// Sum of `unit_price × quantity` over all lines.
    #[must_use]
    pub fn total_price(&self) -> Decimal {
        self.items.iter().map(LineItem::line_total).sum()
    }

    /// Total number of units across all lines.
    #[must_use]
    pub fn item_count(&self) -> u32 {
        self.items.iter().map(|line| line.quantity).sum()
    }

    // =========================================================================
    // Read access
    // =========================================================================

    /// Current line items, in insertion order.
    #[must_use]
    pub fn items(&self) -> &[LineItem] {
        &self.items
    }

    /// Line for `product_ref`, if present.
    #[must_use]
    pub fn get(&self, product_ref: &ProductRef) -> Option<&LineItem> {
        self.items
            .iter()
            .find(|line| line.product_ref() == product_ref)
    }

    /// Number of distinct lines.
    #[must_use]
    pub fn len(&self) -> usize {
        self.items.len()
    }

    /// Whether the cart holds no lines.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Whether the cart drawer is open.
    #[must_use]
    pub const fn is_open(&self) -> bool {
        self.is_open
    }

    /// The slot this store mirrors into.
    #[must_use]
    pub fn slot(&self) -> &S {
        &self.slot
    }

    /// The notifier this store delivers acknowledgments to.
    #[must_use]
    pub fn notifier(&self) -> &N {
        &self.notifier
    }

    /// Mirror the in-memory items into the slot.
    ///
    /// Failures are terminal here: logged, surfaced as a non-blocking
    /// notice, and otherwise swallowed so the mutation still succeeds.
    fn persist(&mut self) {
        if let Err(e) = self.slot.save(&self.items) {
            error!(error = %e, "failed to persist cart");
            self.notifier.error("Your cart could not be saved");
        }
    }
}
