//! Wire DTOs for the backend HTTP API.
//!
//! DESIGN
//! ======
//! Field names follow the backend's OpenAPI schema (camelCase, Mongo-style
//! `_id`). Optional response fields default so a backend adding or omitting
//! fields does not break decoding on the client.

#[cfg(test)]
#[path = "schema_test.rs"]
mod schema_test;

use serde::{Deserialize, Serialize};

/// A user record as stored by the backend.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UserRecord {
    /// Backend identifier.
    #[serde(rename = "_id", alias = "id", default)]
    pub id: String,
    /// Identity-provider user id.
    #[serde(rename = "firebaseUID")]
    pub firebase_uid: String,
    pub email: String,
    #[serde(default)]
    pub first_name: Option<String>,
    #[serde(default)]
    pub last_name: Option<String>,
    /// Backend role string (`student`, `teacher`, ...), if assigned.
    #[serde(default)]
    pub role: Option<String>,
}

impl UserRecord {
    /// First and last name joined, skipping missing parts.
    #[must_use]
    pub fn display_name(&self) -> String {
        [self.first_name.as_deref(), self.last_name.as_deref()]
            .into_iter()
            .flatten()
            .filter(|part| !part.is_empty())
            .collect::<Vec<_>>()
            .join(" ")
    }
}

/// Response of `POST /auth/verify`.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct TokenVerificationResponse {
    #[serde(default)]
    pub message: Option<String>,
    #[serde(default)]
    pub user: Option<UserRecord>,
}

/// Body of `POST /auth/signup`.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SignUpBody {
    pub email: String,
    pub password: String,
    pub first_name: String,
    pub last_name: String,
}

/// Body of `POST /auth/signup/verify`, sent after a provider (OAuth) sign-up.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct VerifySignUpProviderBody {
    pub first_name: String,
    pub last_name: String,
}

/// Response of both sign-up endpoints: the created user.
pub type SignUpResponse = UserRecord;

/// Body of `PATCH /auth/change-password`.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ChangePasswordBody {
    pub new_password: String,
    pub new_password_confirm: String,
}

/// Response of `PATCH /auth/change-password`.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChangePasswordResponse {
    #[serde(default)]
    pub success: bool,
    #[serde(default)]
    pub message: String,
}

/// Response of `GET /users/firebase/{firebaseUID}`.
pub type UserByFirebaseUidResponse = UserRecord;

// =============================================================================
// Question render views
// =============================================================================

/// Node `Buffer` serialized as JSON, used by the backend for object ids.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct BufferId {
    pub buffer: BufferData,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct BufferData {
    /// Always `"Buffer"`.
    #[serde(rename = "type")]
    pub kind: String,
    pub data: Vec<u8>,
}

/// One selectable or orderable item of a lot-style question.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct LotItem {
    pub text: String,
    #[serde(rename = "_id")]
    pub id: BufferId,
}

/// Fields shared by every question variant.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct QuestionBase {
    #[serde(rename = "_id")]
    pub id: BufferId,
    #[serde(default)]
    pub is_parameterized: bool,
    pub text: String,
    #[serde(default)]
    pub hint: String,
    #[serde(default)]
    pub points: f64,
    #[serde(default)]
    pub time_limit_seconds: u32,
    #[serde(default)]
    pub parameter_map: serde_json::Map<String, serde_json::Value>,
}

/// A question as rendered to a student, discriminated by its `type` field.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum QuestionRenderView {
    #[serde(rename = "DESCRIPTIVE")]
    Descriptive {
        #[serde(flatten)]
        base: QuestionBase,
    },
    #[serde(rename = "SELECT_ONE_IN_LOT")]
    SelectOneInLot {
        #[serde(flatten)]
        base: QuestionBase,
        #[serde(rename = "lotItems")]
        lot_items: Vec<LotItem>,
    },
    #[serde(rename = "SELECT_MANY_IN_LOT")]
    SelectManyInLot {
        #[serde(flatten)]
        base: QuestionBase,
        #[serde(rename = "lotItems")]
        lot_items: Vec<LotItem>,
    },
    #[serde(rename = "ORDER_THE_LOTS")]
    OrderTheLots {
        #[serde(flatten)]
        base: QuestionBase,
        #[serde(rename = "lotItems")]
        lot_items: Vec<LotItem>,
    },
    #[serde(rename = "NUMERIC_ANSWER_TYPE")]
    NumericAnswer {
        #[serde(flatten)]
        base: QuestionBase,
        #[serde(rename = "decimalPrecision")]
        decimal_precision: u32,
        expression: String,
    },
}

impl QuestionRenderView {
    #[must_use]
    pub fn base(&self) -> &QuestionBase {
        match self {
            Self::Descriptive { base }
            | Self::SelectOneInLot { base, .. }
            | Self::SelectManyInLot { base, .. }
            | Self::OrderTheLots { base, .. }
            | Self::NumericAnswer { base, .. } => base,
        }
    }

    /// The wire discriminant.
    #[must_use]
    pub fn kind(&self) -> &'static str {
        match self {
            Self::Descriptive { .. } => "DESCRIPTIVE",
            Self::SelectOneInLot { .. } => "SELECT_ONE_IN_LOT",
            Self::SelectManyInLot { .. } => "SELECT_MANY_IN_LOT",
            Self::OrderTheLots { .. } => "ORDER_THE_LOTS",
            Self::NumericAnswer { .. } => "NUMERIC_ANSWER_TYPE",
        }
    }

    /// Lot items for the lot-based variants, `None` otherwise.
    #[must_use]
    pub fn lot_items(&self) -> Option<&[LotItem]> {
        match self {
            Self::SelectOneInLot { lot_items, .. }
            | Self::SelectManyInLot { lot_items, .. }
            | Self::OrderTheLots { lot_items, .. } => Some(lot_items),
            Self::Descriptive { .. } | Self::NumericAnswer { .. } => None,
        }
    }
}
