//! AI design records, custom design requests, and jewelers.

use std::collections::HashMap;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::timestamp;

/// Options sent to `POST /api/ai/generate-design`.
///
/// `gemstone_type` of `"None"` asks for a piece without stones.
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq, Eq)]
pub struct DesignOptions {
    /// Piece type (e.g. "Ring", "Necklace").
    #[serde(rename = "type")]
    pub kind: String,
    /// Dominant color.
    pub color: String,
    /// Overall shape.
    pub shape: String,
    /// Metal.
    pub material: String,
    /// Metal purity (e.g. "18K").
    pub karat: String,
    /// Stone type, or "None".
    pub gemstone_type: String,
    /// Stone color.
    pub gemstone_color: String,
}

/// An AI-generated design.
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq)]
pub struct Design {
    /// The design ID.
    pub id: u64,

    /// The options the design was generated from.
    #[serde(default)]
    pub selected_options: HashMap<String, serde_json::Value>,

    /// Where the generated image is served.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub generated_image_url: Option<String>,

    /// When the design was generated.
    #[serde(
        default,
        skip_serializing_if = "Option::is_none",
        with = "timestamp::option"
    )]
    pub created_at: Option<DateTime<Utc>>,

    /// The owning user; absent for anonymous designs.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub user_id: Option<u64>,
}

/// Progress of a custom design request.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Default)]
#[serde(rename_all = "lowercase")]
pub enum DesignRequestStatus {
    /// Submitted, not yet seen.
    #[default]
    Pending,
    /// Seen by the jeweler.
    Reviewed,
    /// The jeweler made a price offer.
    Quoted,
    /// The customer accepted the offer.
    Accepted,
    /// Declined.
    Rejected,
    /// The piece was made.
    Completed,
}

/// A request for a jeweler to produce a custom piece.
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq)]
pub struct DesignRequest {
    /// The request ID.
    pub id: u64,

    /// The requesting user.
    #[serde(default)]
    pub user_id: u64,

    /// The jeweler asked, if one was chosen.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub jeweler_id: Option<u64>,

    /// The AI design to base the piece on, if any.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub generated_design_id: Option<u64>,

    /// What the customer wants.
    pub description: String,

    /// Reference attachment.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub attachment_url: Option<String>,

    /// Customer budget in USD.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub estimated_budget: Option<f64>,

    /// The jeweler's quote in USD.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub jeweler_price_offer: Option<f64>,

    /// Current state.
    #[serde(default)]
    pub status: DesignRequestStatus,

    /// When the request was submitted.
    #[serde(
        default,
        skip_serializing_if = "Option::is_none",
        with = "timestamp::option"
    )]
    pub request_date: Option<DateTime<Utc>>,
}

/// Body of `POST /api/ai/design-requests`.
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq)]
pub struct NewDesignRequest {
    /// The jeweler to ask.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub jeweler_id: Option<u64>,

    /// The AI design to base the piece on.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub generated_design_id: Option<u64>,

    /// What the customer wants.
    pub description: String,

    /// Reference attachment.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub attachment_url: Option<String>,

    /// Customer budget in USD.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub estimated_budget: Option<f64>,
}

/// A jeweler as listed by `GET /api/ai/jewelers`.
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq)]
pub struct Jeweler {
    /// The jeweler ID.
    pub id: u64,
    /// The jeweler's name.
    pub name: String,
    /// The shop's trading name.
    #[serde(default)]
    pub shop_name: String,
    /// Average customer rating.
    #[serde(default)]
    pub rating: f64,
}
