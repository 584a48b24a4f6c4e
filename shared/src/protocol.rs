use crate::{
    DateRange, DivinationRecord, DivinationResponse, DivinationType, FortuneRecord, UserProfile,
};
use serde::de::IgnoredAny;
use serde::{Deserialize, Deserializer, Serialize, de::DeserializeOwned};

/// HTTP Methods for API Requests
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum HttpMethod {
    Get,
    Post,
    Put,
    Delete,
}

impl HttpMethod {
    pub fn as_str(&self) -> &'static str {
        match self {
            HttpMethod::Get => "GET",
            HttpMethod::Post => "POST",
            HttpMethod::Put => "PUT",
            HttpMethod::Delete => "DELETE",
        }
    }

    /// GET 请求不携带请求体
    pub fn carries_body(&self) -> bool {
        !matches!(self, HttpMethod::Get)
    }
}

/// A trait that defines the request-response relationship and metadata for an API endpoint.
pub trait ApiRequest: Serialize {
    /// The response type returned by this request.
    type Response: DeserializeOwned;
    /// The URL path.
    const PATH: &'static str;
    /// The HTTP method.
    const METHOD: HttpMethod;
}

/// Opaque success: the body (if any) is ignored.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Ack;

impl<'de> Deserialize<'de> for Ack {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        IgnoredAny::deserialize(deserializer).map(|_| Ack)
    }
}

// =========================================================
// 用户
// =========================================================

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct LoginRequest {
    pub username: String,
    pub password: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Default, Deserialize)]
pub struct LoginResponse {
    #[serde(default, deserialize_with = "crate::serde_helper::lenient_text")]
    pub token: Option<String>,
}

impl ApiRequest for LoginRequest {
    type Response = LoginResponse;
    const PATH: &'static str = "/api/user/login";
    const METHOD: HttpMethod = HttpMethod::Post;
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RegisterRequest {
    pub username: String,
    pub nickname: String,
    pub email: String,
    pub password: String,
    #[serde(rename = "confirmPassword")]
    pub confirm_password: String,
}

impl ApiRequest for RegisterRequest {
    type Response = Ack;
    const PATH: &'static str = "/api/user/register";
    const METHOD: HttpMethod = HttpMethod::Post;
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct UserInfoRequest;

impl ApiRequest for UserInfoRequest {
    type Response = UserProfile;
    const PATH: &'static str = "/api/user/info";
    const METHOD: HttpMethod = HttpMethod::Get;
}

/// 占卜历史
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct ListHistoryRequest;

impl ApiRequest for ListHistoryRequest {
    type Response = Vec<DivinationRecord>;
    const PATH: &'static str = "/api/user/records";
    const METHOD: HttpMethod = HttpMethod::Get;
}

/// 我的收藏
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct ListFavoritesRequest;

impl ApiRequest for ListFavoritesRequest {
    type Response = Vec<DivinationRecord>;
    const PATH: &'static str = "/api/user/favorites";
    const METHOD: HttpMethod = HttpMethod::Get;
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct UpdatePasswordRequest {
    #[serde(rename = "oldPassword")]
    pub old_password: String,
    #[serde(rename = "newPassword")]
    pub new_password: String,
    #[serde(rename = "confirmPassword")]
    pub confirm_password: String,
}

impl ApiRequest for UpdatePasswordRequest {
    type Response = Ack;
    const PATH: &'static str = "/api/user/password";
    const METHOD: HttpMethod = HttpMethod::Put;
}

// =========================================================
// 占卜
// =========================================================

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DivinationRequest {
    #[serde(rename = "type")]
    pub kind: DivinationType,
    pub question: String,
}

impl ApiRequest for DivinationRequest {
    type Response = DivinationResponse;
    const PATH: &'static str = "/api/divination";
    const METHOD: HttpMethod = HttpMethod::Post;
}

// =========================================================
// 运势
// =========================================================

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct AnalyzeFortuneRequest(pub DateRange);

impl ApiRequest for AnalyzeFortuneRequest {
    type Response = crate::AnalyzeFortuneResponse;
    const PATH: &'static str = "/api/fortune/analyze";
    const METHOD: HttpMethod = HttpMethod::Post;
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct ListFortuneRecordsRequest;

impl ApiRequest for ListFortuneRecordsRequest {
    type Response = Vec<FortuneRecord>;
    const PATH: &'static str = "/api/fortune/records";
    const METHOD: HttpMethod = HttpMethod::Get;
}
