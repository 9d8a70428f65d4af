//! Cart endpoints.

use super::client::{json_request, AuthOutcome, StoreClient};
use crate::clients::{ApiError, HttpMethod, HttpRequest, HttpResponse};
use crate::resources::{Cart, CartAck, CartItemUpdate, NewCartItem};

const CART_PATH: &str = "/api/cart/";
const CART_ITEMS_PATH: &str = "/api/cart/items";

impl StoreClient {
    /// Fetches the cart. Without a stored token no request is sent.
    ///
    /// # Errors
    ///
    /// Returns [`ApiError`] on network failure, a non-2xx status other than
    /// `401`, or an unexpected body.
    pub async fn get_cart(&self) -> Result<AuthOutcome<Cart>, ApiError> {
        if !self.session().is_authenticated() {
            return Ok(AuthOutcome::Unauthenticated);
        }
        let request = HttpRequest::builder(HttpMethod::Get, CART_PATH).build()?;
        self.request_typed(request).await
    }

    /// Adds `quantity` units of a product to the cart.
    ///
    /// Without a stored token this navigates to the login page and returns
    /// [`AuthOutcome::Unauthenticated`] without sending a request.
    ///
    /// # Errors
    ///
    /// Returns [`ApiError`] on network failure, a non-2xx status other than
    /// `401`, or an unexpected body.
    pub async fn add_item(
        &self,
        product_id: u64,
        quantity: u32,
    ) -> Result<AuthOutcome<CartAck>, ApiError> {
        if !self.session().is_authenticated() {
            self.session().redirect_to_login();
            return Ok(AuthOutcome::Unauthenticated);
        }
        let payload = NewCartItem {
            product_id,
            quantity,
        };
        let request = json_request(HttpMethod::Post, CART_ITEMS_PATH, &payload)?;
        self.request_typed(request).await
    }

    /// Sets the quantity of a cart line.
    ///
    /// # Errors
    ///
    /// Returns [`ApiError`] on network failure, a non-2xx status other than
    /// `401`, or an unexpected body.
    pub async fn update_item(
        &self,
        item_id: u64,
        quantity: u32,
    ) -> Result<AuthOutcome<CartAck>, ApiError> {
        let request = json_request(
            HttpMethod::Put,
            &format!("{CART_ITEMS_PATH}/{item_id}"),
            &CartItemUpdate { quantity },
        )?;
        self.request_typed(request).await
    }

    /// Removes a cart line. The raw response is returned for the caller to
    /// inspect.
    ///
    /// # Errors
    ///
    /// Returns [`ApiError`] on network failure.
    pub async fn remove_item(&self, item_id: u64) -> Result<AuthOutcome<HttpResponse>, ApiError> {
        let request =
            HttpRequest::builder(HttpMethod::Delete, format!("{CART_ITEMS_PATH}/{item_id}"))
                .build()?;
        self.request(request).await
    }

    /// Empties the cart. The raw response is returned for the caller to
    /// inspect.
    ///
    /// # Errors
    ///
    /// Returns [`ApiError`] on network failure.
    pub async fn clear_cart(&self) -> Result<AuthOutcome<HttpResponse>, ApiError> {
        let request = HttpRequest::builder(HttpMethod::Delete, CART_PATH).build()?;
        self.request(request).await
    }
}
