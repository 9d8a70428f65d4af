//! AI design generation and custom design requests.

use super::client::{json_request, AuthOutcome, StoreClient};
use crate::clients::{ApiError, HttpMethod, HttpRequest};
use crate::resources::{Design, DesignOptions, DesignRequest, NewDesignRequest};

const GENERATE_PATH: &str = "/api/ai/generate-design";
const DESIGNS_PATH: &str = "/api/ai/designs";
const DESIGN_REQUESTS_PATH: &str = "/api/ai/design-requests";

impl StoreClient {
    /// Generates a design image from `options`.
    ///
    /// # Errors
    ///
    /// Returns [`ApiError`] on network failure, a non-2xx status other than
    /// `401`, or an unexpected body.
    pub async fn generate_design(
        &self,
        options: &DesignOptions,
    ) -> Result<AuthOutcome<Design>, ApiError> {
        let request = json_request(HttpMethod::Post, GENERATE_PATH, options)?;
        self.request_typed(request).await
    }

    /// Lists the user's generated designs; empty without a session.
    ///
    /// # Errors
    ///
    /// Returns [`ApiError`] on network failure, a non-2xx status other than
    /// `401`, or an unexpected body.
    pub async fn list_user_designs(&self) -> Result<Vec<Design>, ApiError> {
        self.request_list(DESIGNS_PATH).await
    }

    /// Fetches one of the user's designs.
    ///
    /// # Errors
    ///
    /// Returns [`ApiError::Response`] with status 404 for an unknown design.
    pub async fn get_design(&self, design_id: u64) -> Result<AuthOutcome<Design>, ApiError> {
        let request =
            HttpRequest::builder(HttpMethod::Get, format!("{DESIGNS_PATH}/{design_id}")).build()?;
        self.request_typed(request).await
    }

    /// Asks a jeweler to produce a custom piece.
    ///
    /// # Errors
    ///
    /// Returns [`ApiError`] on network failure, a non-2xx status other than
    /// `401`, or an unexpected body.
    pub async fn create_design_request(
        &self,
        design_request: &NewDesignRequest,
    ) -> Result<AuthOutcome<DesignRequest>, ApiError> {
        let request = json_request(HttpMethod::Post, DESIGN_REQUESTS_PATH, design_request)?;
        self.request_typed(request).await
    }

    /// Lists the user's design requests; empty without a session.
    ///
    /// # Errors
    ///
    /// Returns [`ApiError`] on network failure, a non-2xx status other than
    /// `401`, or an unexpected body.
    pub async fn list_design_requests(&self) -> Result<Vec<DesignRequest>, ApiError> {
        self.request_list(DESIGN_REQUESTS_PATH).await
    }
}
