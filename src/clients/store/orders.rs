//! Order endpoints.

use super::client::{json_request, AuthOutcome, StoreClient};
use crate::clients::{ApiError, HttpMethod, HttpRequest};
use crate::resources::{NewOrder, Order};

const ORDERS_PATH: &str = "/api/orders/";

impl StoreClient {
    /// Lists the user's orders.
    ///
    /// Always yields a list: without a session, or after a `401`, it is
    /// empty.
    ///
    /// # Errors
    ///
    /// Returns [`ApiError`] on network failure, a non-2xx status other than
    /// `401`, or an unexpected body.
    pub async fn list_orders(&self) -> Result<Vec<Order>, ApiError> {
        self.request_list(ORDERS_PATH).await
    }

    /// Fetches a single order.
    ///
    /// # Errors
    ///
    /// Returns [`ApiError::Response`] with status 404 for an unknown order.
    pub async fn get_order(&self, order_id: u64) -> Result<AuthOutcome<Order>, ApiError> {
        let request =
            HttpRequest::builder(HttpMethod::Get, format!("{ORDERS_PATH}{order_id}")).build()?;
        self.request_typed(request).await
    }

    /// Places an order from the current cart.
    ///
    /// # Errors
    ///
    /// Returns [`ApiError`] on network failure, a non-2xx status other than
    /// `401` (e.g. an empty cart), or an unexpected body.
    pub async fn create_order(&self, order: &NewOrder) -> Result<AuthOutcome<Order>, ApiError> {
        let request = json_request(HttpMethod::Post, ORDERS_PATH, order)?;
        self.request_typed(request).await
    }
}
