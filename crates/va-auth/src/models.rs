use serde::{Deserialize, Serialize};

/// Credential login request body
#[derive(Clone, Serialize)]
pub struct LoginRequest<'a> {
    #[serde(rename = "type")]
    pub kind: &'static str,
    pub username: &'a str,
    pub password: &'a str,
    pub remember: bool,
}

/// Multifactor code submission body
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct MultifactorRequest<'a> {
    #[serde(rename = "type")]
    pub kind: &'static str,
    pub code: &'a str,
    pub remember_device: bool,
}

/// Response of the login and multifactor endpoints
#[derive(Debug, Clone, Deserialize)]
pub struct AuthResponse {
    #[serde(rename = "type", default)]
    pub kind: String,
    #[serde(default)]
    pub error: Option<String>,
    #[serde(default)]
    pub country: Option<String>,
    #[serde(rename = "session-cookie", default)]
    pub session_cookie: Option<String>,
    #[serde(default)]
    pub multifactor: Option<MultifactorInfo>,
}

impl AuthResponse {
    pub fn is_multifactor(&self) -> bool {
        self.kind == "multifactor"
    }

    /// Provider error message, if any
    pub fn error_message(&self) -> Option<&str> {
        self.error.as_deref().filter(|e| !e.is_empty())
    }
}

/// Details of a pending multifactor challenge
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct MultifactorInfo {
    #[serde(default)]
    pub email: String,
    #[serde(default)]
    pub method: String,
    #[serde(default)]
    pub methods: Vec<MultifactorMethod>,
    #[serde(default)]
    pub multi_factor_code_length: u32,
    #[serde(default)]
    pub mfa_version: String,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct MultifactorMethod {
    #[serde(default)]
    pub email: String,
    #[serde(default)]
    pub method: String,
}

/// Client-credentials exchange body for the entitlements service
#[derive(Debug, Clone, Serialize)]
pub struct EntitlementsRequest<'a> {
    pub client_id: &'a str,
    pub client_secret: &'a str,
    pub grant_type: &'static str,
}

#[derive(Debug, Clone, Deserialize)]
pub struct EntitlementsResponse {
    pub entitlements_token: String,
}

/// Raw `/userinfo` response
#[derive(Debug, Clone, Deserialize)]
pub struct UserInfoResponse {
    #[serde(default)]
    pub country: Option<String>,
    #[serde(default)]
    pub sub: Option<String>,
    #[serde(default)]
    pub preferred_username: Option<String>,
    #[serde(default)]
    pub acct: Option<UserAccount>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct UserAccount {
    #[serde(default)]
    pub game_name: Option<String>,
    #[serde(default)]
    pub tag_line: Option<String>,
}

/// Account summary of the authenticated player
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct UserInfo {
    pub country: String,
    /// Player UUID
    pub puuid: String,
    pub username: Option<String>,
    /// `game_name#tag_line`, empty when the account has no Riot ID
    pub tag_name: String,
}

impl From<UserInfoResponse> for UserInfo {
    fn from(raw: UserInfoResponse) -> Self {
        let tag_name = match raw.acct {
            Some(UserAccount {
                game_name: Some(name),
                tag_line,
            }) if !name.is_empty() => format!("{}#{}", name, tag_line.unwrap_or_default()),
            _ => String::new(),
        };

        Self {
            country: raw.country.unwrap_or_default(),
            puuid: raw.sub.unwrap_or_default(),
            username: raw.preferred_username,
            tag_name,
        }
    }
}
