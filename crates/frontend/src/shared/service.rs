use super::api_utils::api_base;
use contracts::domain::common::{ListQuery, Paginated};
use contracts::error::ApiError;
use gloo_net::http::{Request, Response};
use serde::de::DeserializeOwned;
use serde::Serialize;

/// REST client for one resource collection.
///
/// Implements the backend contract
/// `GET/POST /api/{resource}`, `GET/PUT/DELETE /api/{resource}/{id}`,
/// `GET /api/{resource}/stats`. No automatic retries: administrative
/// mutations must not be silently duplicated, re-initiation is up to the
/// user.
#[derive(Clone, Copy)]
pub struct ResourceService {
    collection: &'static str,
}

impl ResourceService {
    pub const fn new(collection: &'static str) -> Self {
        Self { collection }
    }

    pub fn collection(&self) -> &'static str {
        self.collection
    }

    fn collection_url(&self) -> String {
        format!("{}/api/{}", api_base(), self.collection)
    }

    fn item_url(&self, id: &str) -> String {
        format!("{}/{}", self.collection_url(), urlencoding::encode(id))
    }

    /// `GET /api/{resource}?search=&status=&page=&per_page=`
    pub async fn list<T: DeserializeOwned>(
        &self,
        query: &ListQuery,
    ) -> Result<Paginated<T>, ApiError> {
        if !query.is_valid() {
            return Err(ApiError::validation(
                "page",
                "Parámetros de paginación inválidos",
            ));
        }
        let qs = serde_qs::to_string(query)
            .map_err(|e| ApiError::Transport(format!("query string: {}", e)))?;
        // cache buster defeats intermediary HTTP caches, not our own
        let url = format!(
            "{}?{}&_ts={}",
            self.collection_url(),
            qs,
            js_sys::Date::now() as i64
        );
        let response = Request::get(&url)
            .header("Accept", "application/json")
            .send()
            .await
            .map_err(|e| ApiError::Transport(e.to_string()))?;
        Self::decode(response).await
    }

    /// `GET /api/{resource}/{id}`
    pub async fn get<T: DeserializeOwned>(&self, id: &str) -> Result<T, ApiError> {
        let response = Request::get(&self.item_url(id))
            .header("Accept", "application/json")
            .send()
            .await
            .map_err(|e| ApiError::Transport(e.to_string()))?;
        Self::decode(response).await
    }

    /// `POST /api/{resource}`
    pub async fn create<P: Serialize, T: DeserializeOwned>(
        &self,
        payload: &P,
    ) -> Result<T, ApiError> {
        let response = Request::post(&self.collection_url())
            .json(payload)
            .map_err(|e| ApiError::Transport(e.to_string()))?
            .send()
            .await
            .map_err(|e| ApiError::Transport(e.to_string()))?;
        Self::decode(response).await
    }

    /// `PUT /api/{resource}/{id}`
    pub async fn update<P: Serialize, T: DeserializeOwned>(
        &self,
        id: &str,
        payload: &P,
    ) -> Result<T, ApiError> {
        let response = Request::put(&self.item_url(id))
            .json(payload)
            .map_err(|e| ApiError::Transport(e.to_string()))?
            .send()
            .await
            .map_err(|e| ApiError::Transport(e.to_string()))?;
        Self::decode(response).await
    }

    /// `DELETE /api/{resource}/{id}`
    pub async fn delete(&self, id: &str) -> Result<(), ApiError> {
        let response = Request::delete(&self.item_url(id))
            .send()
            .await
            .map_err(|e| ApiError::Transport(e.to_string()))?;
        Self::check_status(&response).await
    }

    /// `GET /api/{resource}/stats`
    pub async fn stats<S: DeserializeOwned>(&self) -> Result<S, ApiError> {
        let url = format!("{}/stats?_ts={}", self.collection_url(), js_sys::Date::now() as i64);
        let response = Request::get(&url)
            .header("Accept", "application/json")
            .send()
            .await
            .map_err(|e| ApiError::Transport(e.to_string()))?;
        Self::decode(response).await
    }

    async fn check_status(response: &Response) -> Result<(), ApiError> {
        match response.status() {
            404 => Err(ApiError::NotFound),
            status if !response.ok() => Err(ApiError::Server {
                status,
                message: response.text().await.unwrap_or_default(),
            }),
            _ => Ok(()),
        }
    }

    async fn decode<T: DeserializeOwned>(response: Response) -> Result<T, ApiError> {
        Self::check_status(&response).await?;
        let status = response.status();
        response.json::<T>().await.map_err(|e| ApiError::Server {
            status,
            message: format!("respuesta inválida: {}", e),
        })
    }
}
