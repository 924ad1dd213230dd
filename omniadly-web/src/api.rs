use std::rc::Rc;

use async_trait::async_trait;
use once_cell::unsync::OnceCell;
use reqwest::{Client, RequestBuilder, Response};
use serde::Serialize;
use serde::de::DeserializeOwned;
use shared::auth::{AuthBackend, SessionStore};
use shared::endpoints::{self, UserSearch};
use shared::models::{
    AdminUser, ApiResponse, Brand, BrandListing, LoginRequest, LoginResponse, PaginatedResponse,
    Payment, Profile, SocialAccount, SocialAccountRecord, Subscription, Team, User, UserDetail,
};
use shared::{ApiError, ApiResult};
use tracing::{debug, warn};

use crate::config::AdminConfig;
use crate::session::{self, BrowserSessionStore};

const PROFILE_HEADER: &str = "X-Profile-Id";

thread_local! {
    static SHARED_CLIENT: OnceCell<AdminClient> = const { OnceCell::new() };
}

/// Client for the OmniAdly REST API.
///
/// Adds the stored bearer token to every request and unwraps the response
/// envelope.
#[derive(Clone)]
pub struct AdminClient {
    base_url: String,
    client: Client,
    session: Rc<dyn SessionStore>,
}

impl std::fmt::Debug for AdminClient {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("AdminClient")
            .field("base_url", &self.base_url)
            .finish_non_exhaustive()
    }
}

impl AdminClient {
    pub fn new(base_url: &str, session: Rc<dyn SessionStore>) -> Self {
        Self {
            base_url: base_url.trim_end_matches('/').to_string(),
            client: Client::new(),
            session,
        }
    }

    /// Client bound to the browser session and the configured base URL.
    pub fn shared() -> Self {
        SHARED_CLIENT.with(|cell| {
            cell.get_or_init(|| {
                Self::new(
                    AdminConfig::new().api_base_url(),
                    Rc::new(BrowserSessionStore),
                )
            })
            .clone()
        })
    }

    pub fn session(&self) -> Rc<dyn SessionStore> {
        Rc::clone(&self.session)
    }

    pub(crate) fn api_url(&self, path: &str) -> String {
        format!("{}/{}", self.base_url, path.trim_start_matches('/'))
    }

    /// Bearer token plus the profile context header. `profile_id` overrides
    /// the stored active profile.
    fn authorize(&self, request: RequestBuilder, profile_id: Option<&str>) -> RequestBuilder {
        let request = match self.session.access_token() {
            Some(token) => request.bearer_auth(token),
            None => request,
        };
        match profile_id.map(str::to_string).or_else(session::active_profile_id) {
            Some(profile_id) => request.header(PROFILE_HEADER, profile_id),
            None => request,
        }
    }

    async fn send(&self, request: RequestBuilder, path: &str) -> ApiResult<Response> {
        let response = request
            .send()
            .await
            .map_err(|err| transport_error(&err))?;
        let status = response.status();
        if status.is_success() {
            return Ok(response);
        }
        let body = response.text().await.unwrap_or_default();
        warn!(path, status = status.as_u16(), "request failed");
        Err(ApiError::Status {
            status: status.as_u16(),
            body,
        })
    }

    async fn envelope<T: DeserializeOwned>(
        &self,
        request: RequestBuilder,
        path: &str,
    ) -> ApiResult<ApiResponse<T>> {
        let response = self.send(request, path).await?;
        let text = response.text().await.map_err(|err| transport_error(&err))?;
        decode_envelope(&text)
    }

    /// `GET` a path and unwrap its payload.
    ///
    /// # Errors
    /// Transport, HTTP status, decoding or envelope rejection failures.
    pub async fn get<T: DeserializeOwned>(&self, path: &str) -> ApiResult<T> {
        debug!(path, "GET");
        let request = self.authorize(self.client.get(self.api_url(path)), None);
        self.envelope(request, path).await?.into_data()
    }

    /// `POST` a JSON body and unwrap the payload.
    ///
    /// # Errors
    /// Transport, HTTP status, decoding or envelope rejection failures.
    pub async fn post<B, T>(&self, path: &str, body: &B, fallback: &str) -> ApiResult<T>
    where
        B: Serialize + ?Sized,
        T: DeserializeOwned,
    {
        debug!(path, "POST");
        let request = self.authorize(self.client.post(self.api_url(path)), None).json(body);
        self.envelope(request, path).await?.into_data_or(fallback)
    }

    /// First page of the user directory, up to 100 rows.
    ///
    /// # Errors
    /// See [`AdminClient::get`].
    pub async fn users(&self) -> ApiResult<Vec<User>> {
        let path = endpoints::user_search(&UserSearch {
            page: Some(1),
            page_size: Some(100),
            ..UserSearch::default()
        });
        let page: PaginatedResponse<User> = self.get(&path).await?;
        Ok(page.data)
    }

    /// # Errors
    /// See [`AdminClient::get`].
    pub async fn user(&self, user_id: &str) -> ApiResult<UserDetail> {
        self.get(&endpoints::user_by_id(user_id)).await
    }

    /// # Errors
    /// See [`AdminClient::get`].
    pub async fn payments(&self) -> ApiResult<Vec<Payment>> {
        self.get(endpoints::PAYMENTS).await
    }

    /// Payments made by one user.
    ///
    /// # Errors
    /// See [`AdminClient::get`].
    pub async fn user_payments(&self, user_id: &str) -> ApiResult<Vec<Payment>> {
        self.get(&endpoints::user_payments(user_id)).await
    }

    /// # Errors
    /// See [`AdminClient::get`].
    pub async fn subscriptions(&self) -> ApiResult<Vec<Subscription>> {
        self.get(endpoints::SUBSCRIPTIONS).await
    }

    /// # Errors
    /// See [`AdminClient::get`].
    pub async fn profiles(&self, user_id: &str) -> ApiResult<Vec<Profile>> {
        self.get(&endpoints::profiles_by_user(user_id, None, None))
            .await
    }

    /// Brands of `profile_id`. The API scopes brands by the `X-Profile-Id`
    /// header; the stored active profile is left untouched.
    ///
    /// # Errors
    /// See [`AdminClient::get`].
    pub async fn brands(&self, profile_id: &str) -> ApiResult<Vec<Brand>> {
        debug!(profile_id, "GET brands");
        let request = self.authorize(
            self.client.get(self.api_url(endpoints::BRANDS)),
            Some(profile_id),
        );
        let listing: BrandListing = self.envelope(request, endpoints::BRANDS).await?.into_data()?;
        Ok(listing.into_brands())
    }

    /// # Errors
    /// See [`AdminClient::get`].
    pub async fn social_accounts(&self, profile_id: &str) -> ApiResult<Vec<SocialAccount>> {
        let records: Vec<SocialAccountRecord> = self
            .get(&endpoints::social_accounts_by_profile(profile_id))
            .await?;
        Ok(records.into_iter().map(SocialAccount::from).collect())
    }

    /// Teams visible to the signed-in account.
    ///
    /// # Errors
    /// See [`AdminClient::get`].
    pub async fn teams(&self) -> ApiResult<Vec<Team>> {
        self.get(endpoints::USER_TEAMS).await
    }
}

#[async_trait(?Send)]
impl AuthBackend for AdminClient {
    async fn current_profile(&self) -> ApiResult<AdminUser> {
        self.get(endpoints::CURRENT_PROFILE).await
    }

    async fn login(&self, request: &LoginRequest) -> ApiResult<LoginResponse> {
        self.post(endpoints::LOGIN, request, "Login failed").await
    }
}

pub(crate) fn transport_error(err: &reqwest::Error) -> ApiError {
    if err.is_decode() {
        ApiError::Decode(err.to_string())
    } else {
        ApiError::Network(err.to_string())
    }
}

pub(crate) fn decode_envelope<T: DeserializeOwned>(text: &str) -> ApiResult<ApiResponse<T>> {
    serde_json::from_str(text).map_err(|err| ApiError::Decode(err.to_string()))
}

/// Collapse a failed page load to an empty list, logging why.
pub fn or_empty<T>(result: ApiResult<Vec<T>>, what: &str) -> Vec<T> {
    result.unwrap_or_else(|err| {
        warn!(what, error = %err, "load failed, showing empty list");
        Vec::new()
    })
}
