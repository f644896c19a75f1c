//! Cart module: primitive mutations, rule-carrying actions, getters.

use fakestore_commerce::cart::{Cart, LineItem};
use fakestore_commerce::catalog::Product;
use fakestore_commerce::{CommerceError, Money, ProductId};

use super::{ActionContext, Module, Named};

/// Namespace marker for the cart module.
#[derive(Debug, Clone, Copy)]
pub struct CartModule;

/// State changes the cart module accepts. Each does exactly one thing.
#[derive(Debug, Clone, PartialEq)]
pub enum CartMutation {
    /// Append a new line item.
    AddToCart(LineItem),
    /// Overwrite the quantity of the line at `index`.
    UpdateCartItemQuantity { index: usize, quantity: u32 },
    /// Remove the line at `index`.
    RemoveCartItem(usize),
    /// Remove every line.
    ClearCart,
}

impl Named for CartMutation {
    fn name(&self) -> &'static str {
        match self {
            CartMutation::AddToCart(_) => "addToCart",
            CartMutation::UpdateCartItemQuantity { .. } => "updateCartItemQuantity",
            CartMutation::RemoveCartItem(_) => "removeCartItem",
            CartMutation::ClearCart => "clearCart",
        }
    }
}

impl Module for CartModule {
    const NAMESPACE: &'static str = "cart";
    type State = Cart;
    type Mutation = CartMutation;
    type Error = CommerceError;

    fn apply(cart: &mut Cart, mutation: CartMutation) -> Result<(), CommerceError> {
        match mutation {
            CartMutation::AddToCart(item) => cart.push_line(item),
            CartMutation::UpdateCartItemQuantity { index, quantity } => {
                cart.set_quantity(index, quantity)
            }
            CartMutation::RemoveCartItem(index) => cart.remove_at(index).map(|_| ()),
            CartMutation::ClearCart => {
                cart.clear();
                Ok(())
            }
        }
    }
}

/// Actions addressed to the cart module.
#[derive(Debug, Clone, PartialEq)]
pub enum CartAction {
    /// Add one unit of a product.
    AddToCart(Product),
    /// Remove one unit of a product.
    RemoveFromCart(ProductId),
    /// Remove a product's line whatever its quantity.
    ClearCart(ProductId),
    /// Empty the cart.
    ClearAllCart,
}

impl Named for CartAction {
    fn name(&self) -> &'static str {
        match self {
            CartAction::AddToCart(_) => "addToCart",
            CartAction::RemoveFromCart(_) => "removeFromCart",
            CartAction::ClearCart(_) => "clearCart",
            CartAction::ClearAllCart => "clearAllCart",
        }
    }
}

/// Run a cart action.
///
/// Mutations are built from the state the action just read, so they never
/// reject in practice; an error means the journal and state disagree.
pub fn run(ctx: &mut ActionContext<'_, CartModule>, action: CartAction) -> Result<(), CommerceError> {
    match action {
        CartAction::AddToCart(product) => add_to_cart(ctx, product),
        CartAction::RemoveFromCart(id) => remove_from_cart(ctx, id),
        CartAction::ClearCart(id) => clear_cart(ctx, id),
        CartAction::ClearAllCart => ctx.commit(CartMutation::ClearCart),
    }
}

fn add_to_cart(ctx: &mut ActionContext<'_, CartModule>, product: Product) -> Result<(), CommerceError> {
    match ctx.state().position(product.id) {
        Some(index) => {
            let quantity = ctx.state().items()[index].quantity.saturating_add(1);
            ctx.commit(CartMutation::UpdateCartItemQuantity { index, quantity })
        }
        None => ctx.commit(CartMutation::AddToCart(LineItem::new(product))),
    }
}

fn remove_from_cart(ctx: &mut ActionContext<'_, CartModule>, id: ProductId) -> Result<(), CommerceError> {
    let Some(index) = ctx.state().position(id) else {
        return Ok(());
    };
    let quantity = ctx.state().items()[index].quantity;
    if quantity > 1 {
        ctx.commit(CartMutation::UpdateCartItemQuantity {
            index,
            quantity: quantity - 1,
        })
    } else {
        ctx.commit(CartMutation::RemoveCartItem(index))
    }
}

fn clear_cart(ctx: &mut ActionContext<'_, CartModule>, id: ProductId) -> Result<(), CommerceError> {
    match ctx.state().position(id) {
        Some(index) => ctx.commit(CartMutation::RemoveCartItem(index)),
        None => Ok(()),
    }
}

/// Line items in insertion order.
pub fn items(cart: &Cart) -> &[LineItem] {
    cart.items()
}

/// Sum of all quantities.
pub fn item_count(cart: &Cart) -> u64 {
    cart.item_count()
}

/// Sum of `price * quantity`.
pub fn total(cart: &Cart) -> Money {
    cart.total()
}

#[cfg(test)]
mod tests {
    use super::*;
    use fakestore_commerce::Currency;

    #[test]
    fn test_mutations_are_primitive() {
        let mut cart = Cart::new(Currency::USD);
        CartModule::apply(&mut cart, CartMutation::AddToCart(LineItem::new(Product::new(1, "a", 2.0)))).unwrap();
        CartModule::apply(&mut cart, CartMutation::UpdateCartItemQuantity { index: 0, quantity: 4 }).unwrap();

        assert_eq!(item_count(&cart), 4);
        assert_eq!(total(&cart).amount_cents, 800);

        CartModule::apply(&mut cart, CartMutation::RemoveCartItem(0)).unwrap();
        assert!(items(&cart).is_empty());
    }

    #[test]
    fn test_mutation_rejects_stale_index() {
        let mut cart = Cart::new(Currency::USD);
        let err = CartModule::apply(&mut cart, CartMutation::RemoveCartItem(0)).unwrap_err();
        assert_eq!(err, CommerceError::LineIndexOutOfRange { index: 0, len: 0 });
    }

    #[test]
    fn test_names() {
        assert_eq!(CartMutation::ClearCart.name(), "clearCart");
        assert_eq!(CartAction::ClearAllCart.name(), "clearAllCart");
    }
}
