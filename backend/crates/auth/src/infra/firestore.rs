//! Profile Store REST Adapter
//!
//! Implements the profile store contract against a document database's
//! REST surface (`users` collection keyed by subject id). HTTP statuses
//! are translated into the tri-state lookup/create outcomes at this
//! boundary; no status code crosses into the core.

use chrono::Utc;
use reqwest::StatusCode;
use serde::Deserialize;
use serde_json::json;

use crate::application::config::StoreConfig;
use crate::domain::entity::user_profile::UserProfile;
use crate::domain::repository::{ProfileCreate, ProfileLookup, ProfileStore};
use crate::domain::value_object::{email::Email, subject_id::SubjectId};

#[derive(Debug, Deserialize)]
struct FieldValue {
    #[serde(rename = "stringValue", default)]
    string_value: Option<String>,
    #[serde(rename = "timestampValue", default)]
    timestamp_value: Option<String>,
}

#[derive(Debug, Deserialize)]
struct Document {
    #[serde(default)]
    fields: std::collections::HashMap<String, FieldValue>,
}

/// Profile store client backed by a document-database REST surface
pub struct RestProfileStore {
    http: reqwest::Client,
    api_base: String,
    project_id: String,
}

impl RestProfileStore {
    pub fn new(config: &StoreConfig) -> Self {
        Self {
            http: reqwest::Client::new(),
            api_base: config.api_base.trim_end_matches('/').to_string(),
            project_id: config.project_id.clone(),
        }
    }

    fn collection_url(&self) -> String {
        format!(
            "{}/v1/projects/{}/databases/(default)/documents/users",
            self.api_base, self.project_id
        )
    }

    fn document_url(&self, uid: &SubjectId) -> String {
        format!("{}/{}", self.collection_url(), uid.as_str())
    }

    fn profile_from_document(uid: &SubjectId, doc: Document) -> UserProfile {
        let field = |name: &str| {
            doc.fields
                .get(name)
                .and_then(|f| f.string_value.clone())
                .unwrap_or_default()
        };

        let created_at = doc
            .fields
            .get("createdAt")
            .and_then(|f| f.timestamp_value.as_deref())
            .and_then(|s| s.parse().ok())
            .unwrap_or_else(Utc::now);

        UserProfile {
            uid: uid.clone(),
            name: field("name"),
            // Validated when the record was written
            email: Email::from_trusted(field("email")),
            created_at,
        }
    }
}

impl ProfileStore for RestProfileStore {
    async fn find_by_uid(&self, uid: &SubjectId) -> ProfileLookup {
        let response = match self.http.get(self.document_url(uid)).send().await {
            Ok(response) => response,
            Err(e) => {
                tracing::warn!(error = %e, "Profile store request failed");
                return ProfileLookup::Unavailable;
            }
        };

        match response.status() {
            StatusCode::NOT_FOUND => ProfileLookup::Missing,
            status if status.is_success() => match response.json::<Document>().await {
                Ok(doc) => ProfileLookup::Found(Self::profile_from_document(uid, doc)),
                Err(e) => {
                    tracing::warn!(error = %e, "Profile document could not be decoded");
                    ProfileLookup::Unavailable
                }
            },
            status => {
                tracing::warn!(%status, "Profile store returned unexpected status");
                ProfileLookup::Unavailable
            }
        }
    }

    async fn create_if_absent(&self, profile: &UserProfile) -> ProfileCreate {
        let body = json!({
            "fields": {
                "name": { "stringValue": profile.name },
                "email": { "stringValue": profile.email.as_str() },
                "createdAt": { "timestampValue": profile.created_at.to_rfc3339() },
            }
        });

        let response = match self
            .http
            .post(self.collection_url())
            .query(&[("documentId", profile.uid.as_str())])
            .json(&body)
            .send()
            .await
        {
            Ok(response) => response,
            Err(e) => {
                tracing::warn!(error = %e, "Profile store request failed");
                return ProfileCreate::Unavailable;
            }
        };

        match response.status() {
            status if status.is_success() => ProfileCreate::Created,
            // Lost the race with a concurrent registration for this uid
            StatusCode::CONFLICT => ProfileCreate::AlreadyExists,
            status => {
                tracing::warn!(%status, "Profile store returned unexpected status");
                ProfileCreate::Unavailable
            }
        }
    }
}
