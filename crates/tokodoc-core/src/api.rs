//! Backend REST client
//!
//! Thin typed wrapper over the document backend's JSON endpoints. Every
//! response uses an `{ok, ...}` envelope; `ok: false` and non-2xx statuses
//! both surface as [`Error::Api`] carrying the server's message when one is
//! present.

use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};
use crate::models::{Session, StoreDocument};
use crate::reconciler::FilePayload;

/// Full document payload for create and update calls.
#[derive(Debug, Clone, Serialize)]
pub struct SaveDocument {
    #[serde(rename = "kode_toko")]
    pub store_code: String,
    #[serde(rename = "nama_toko")]
    pub store_name: String,
    #[serde(rename = "cabang")]
    pub branch: String,
    #[serde(rename = "luas_sales")]
    pub sales_area: String,
    #[serde(rename = "luas_parkir")]
    pub parking_area: String,
    #[serde(rename = "luas_gudang")]
    pub warehouse_area: String,
    pub files: Vec<FilePayload>,
}

#[derive(Debug, Deserialize)]
struct LoginEnvelope {
    #[serde(default)]
    ok: bool,
    user: Option<Session>,
    detail: Option<String>,
}

#[derive(Debug, Deserialize)]
struct ItemsEnvelope {
    #[serde(default)]
    ok: bool,
    items: Option<Vec<StoreDocument>>,
    message: Option<String>,
}

#[derive(Debug, Deserialize)]
struct DataEnvelope {
    #[serde(default)]
    ok: bool,
    data: Option<StoreDocument>,
    message: Option<String>,
}

#[derive(Debug, Deserialize)]
struct SaveEnvelope {
    #[serde(default)]
    ok: bool,
    message: Option<String>,
}

/// Client for the document backend.
#[derive(Debug, Clone)]
pub struct ApiClient {
    base_url: String,
    client: reqwest::Client,
}

impl ApiClient {
    /// Build a client for a backend base URL.
    pub fn new(base_url: impl AsRef<str>) -> Result<Self> {
        let base_url = base_url.as_ref().trim().trim_end_matches('/').to_string();
        if !base_url.starts_with("http://") && !base_url.starts_with("https://") {
            return Err(Error::InvalidInput(
                "API base URL must include http:// or https://".to_string(),
            ));
        }
        Ok(Self {
            base_url,
            client: reqwest::Client::builder().build()?,
        })
    }

    #[must_use]
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// `POST /auth/login`. Credentials are normalized the way the backend
    /// matches them: username trimmed and lowercased, password trimmed and
    /// uppercased.
    pub async fn login(&self, username: &str, password: &str) -> Result<Session> {
        let payload = serde_json::json!({
            "username": username.trim().to_lowercase(),
            "password": password.trim().to_uppercase(),
        });
        let response = self
            .client
            .post(format!("{}/auth/login", self.base_url))
            .json(&payload)
            .send()
            .await?;

        let envelope: LoginEnvelope = read_envelope(response).await?;
        if !envelope.ok {
            return Err(Error::Api(
                envelope.detail.unwrap_or_else(|| "Login failed".to_string()),
            ));
        }
        envelope
            .user
            .ok_or_else(|| Error::Api("Login response did not include a user".to_string()))
    }

    /// `GET /documents`, optionally filtered to one branch.
    pub async fn documents(&self, branch: Option<&str>) -> Result<Vec<StoreDocument>> {
        let url = match branch {
            Some(branch) => format!(
                "{}/documents?cabang={}",
                self.base_url,
                urlencoding::encode(branch)
            ),
            None => format!("{}/documents", self.base_url),
        };
        let response = self.client.get(url).send().await?;
        let envelope: ItemsEnvelope = read_envelope(response).await?;
        if !envelope.ok {
            return Err(Error::Api(
                envelope
                    .message
                    .unwrap_or_else(|| "Failed to list documents".to_string()),
            ));
        }
        Ok(envelope.items.unwrap_or_default())
    }

    /// List documents visible to a session: admins and head office see all
    /// branches, everyone else only their own.
    pub async fn documents_for(&self, session: &Session) -> Result<Vec<StoreDocument>> {
        if session.sees_all_branches() {
            self.documents(None).await
        } else {
            self.documents(Some(&session.branch)).await
        }
    }

    /// `GET /document/{store_code}`.
    pub async fn document(&self, store_code: &str) -> Result<StoreDocument> {
        let response = self
            .client
            .get(format!("{}/document/{store_code}", self.base_url))
            .send()
            .await?;
        let envelope: DataEnvelope = read_envelope(response).await?;
        if !envelope.ok {
            return Err(Error::Api(
                envelope
                    .message
                    .unwrap_or_else(|| format!("Document {store_code} not found")),
            ));
        }
        envelope
            .data
            .ok_or_else(|| Error::Api("Document response did not include data".to_string()))
    }

    /// `POST /save-document-base64/`. Returns the server's success message.
    pub async fn create_document(&self, payload: &SaveDocument) -> Result<String> {
        let response = self
            .client
            .post(format!("{}/save-document-base64/", self.base_url))
            .json(payload)
            .send()
            .await?;
        save_result(response, "Document saved").await
    }

    /// `PUT /document/{store_code}`, same body as create.
    pub async fn update_document(&self, store_code: &str, payload: &SaveDocument) -> Result<String> {
        let response = self
            .client
            .put(format!("{}/document/{store_code}", self.base_url))
            .json(payload)
            .send()
            .await?;
        save_result(response, "Document updated").await
    }

    /// `DELETE /document/{store_code}`.
    pub async fn delete_document(&self, store_code: &str) -> Result<()> {
        let response = self
            .client
            .delete(format!("{}/document/{store_code}", self.base_url))
            .send()
            .await?;
        save_result(response, "Document deleted").await.map(|_| ())
    }
}

async fn save_result(response: reqwest::Response, fallback: &str) -> Result<String> {
    let envelope: SaveEnvelope = read_envelope(response).await?;
    if envelope.ok {
        Ok(envelope.message.unwrap_or_else(|| fallback.to_string()))
    } else {
        Err(Error::Api(
            envelope
                .message
                .unwrap_or_else(|| "The server rejected the document".to_string()),
        ))
    }
}

/// Parse a JSON envelope, converting non-2xx statuses into [`Error::Api`]
/// with the server's `detail`/`message` text when the body carries one.
async fn read_envelope<T: DeserializeOwned>(response: reqwest::Response) -> Result<T> {
    let status = response.status();
    if status.is_success() {
        return Ok(response.json().await?);
    }

    tracing::warn!("Request failed with HTTP {}", status.as_u16());
    let body = response.text().await.unwrap_or_default();
    let message = serde_json::from_str::<serde_json::Value>(&body)
        .ok()
        .and_then(|value| {
            value
                .get("detail")
                .or_else(|| value.get("message"))
                .and_then(serde_json::Value::as_str)
                .map(str::to_string)
        })
        .unwrap_or_else(|| format!("Server returned HTTP {}", status.as_u16()));
    Err(Error::Api(message))
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn base_url_is_normalized_and_validated() {
        let client = ApiClient::new("https://api.example.com/ ").unwrap();
        assert_eq!(client.base_url(), "https://api.example.com");
        assert!(ApiClient::new("api.example.com").is_err());
    }

    #[test]
    fn save_payload_uses_backend_field_names() {
        let payload = SaveDocument {
            store_code: "AB12".to_string(),
            store_name: "ALFAMART SUDIRMAN".to_string(),
            branch: "BANDUNG".to_string(),
            sales_area: "120,50".to_string(),
            parking_area: "80,00".to_string(),
            warehouse_area: "30,25".to_string(),
            files: Vec::new(),
        };
        let json = serde_json::to_value(&payload).unwrap();
        assert_eq!(json["kode_toko"], "AB12");
        assert_eq!(json["luas_gudang"], "30,25");
        assert!(json["files"].as_array().unwrap().is_empty());
    }

    #[test]
    fn envelope_shapes_parse() {
        let login: LoginEnvelope = serde_json::from_str(
            r#"{"ok":true,"user":{"email":"a@b.c","nama":"ANDI","jabatan":"X","cabang":"BANDUNG"}}"#,
        )
        .unwrap();
        assert!(login.ok);
        assert_eq!(login.user.unwrap().branch, "BANDUNG");

        let items: ItemsEnvelope =
            serde_json::from_str(r#"{"ok":true,"items":[{"kode_toko":"AB12"}]}"#).unwrap();
        assert_eq!(items.items.unwrap().len(), 1);

        let save: SaveEnvelope = serde_json::from_str(r#"{"ok":false,"message":"duplicate"}"#).unwrap();
        assert!(!save.ok);
        assert_eq!(save.message.as_deref(), Some("duplicate"));
    }
}
