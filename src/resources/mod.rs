//! Typed records exchanged with the jewelry backend.
//!
//! The client does not validate these records beyond JSON decoding; optional
//! and defaulted fields keep decoding tolerant of partial responses.
//!
//! - Catalog: [`Product`], [`ProductImage`], [`Category`],
//!   [`CategoryWithSubcategories`], [`ProductFilters`]
//! - Cart: [`Cart`], [`CartItem`], [`NewCartItem`], [`CartItemUpdate`], [`CartAck`]
//! - Orders: [`Order`], [`OrderItem`], [`OrderStatus`], [`NewOrder`]
//! - Designs: [`DesignOptions`], [`Design`], [`DesignRequest`],
//!   [`DesignRequestStatus`], [`NewDesignRequest`], [`Jeweler`]

mod cart;
mod design;
mod order;
mod product;
pub mod timestamp;

pub use cart::{Cart, CartAck, CartItem, CartItemUpdate, NewCartItem};
pub use design::{
    Design, DesignOptions, DesignRequest, DesignRequestStatus, Jeweler, NewDesignRequest,
};
pub use order::{NewOrder, Order, OrderItem, OrderStatus};
pub use product::{Category, CategoryWithSubcategories, Product, ProductFilters, ProductImage};
