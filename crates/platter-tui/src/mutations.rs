//! Cross-slice state mutations.
//!
//! Overlays and key handlers describe changes to the cart and favorites
//! with these values; the main reducer applies them in order.

use platter_core::catalog::ItemId;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StateMutation {
    AddToCart(ItemId),
    ToggleFavorite(ItemId),
    ClearCart,
    ClearFavorites,
}
