//! Hypixel and Mojang API client
//!
//! Fetches profile payloads for [`ProfileData`]. Every failure here is
//! returned to the caller; a payload whose `success` flag is false never
//! reaches the stat extractors.

pub mod cache;
pub mod error;
pub mod transport;

use std::collections::BTreeMap;

use serde_json::Value;

use crate::config::Config;
use crate::profile::ProfileData;

pub use cache::UuidCache;
pub use error::ApiError;
pub use transport::{Transport, UreqTransport};

pub struct HypixelClient<T: Transport = UreqTransport> {
    transport: T,
    config: Config,
    uuid_cache: UuidCache,
}

impl HypixelClient<UreqTransport> {
    /// Client over HTTP, with the timeout from `config`
    pub fn new(config: Config) -> Self {
        let transport = UreqTransport::new(config.timeout());
        Self::with_transport(config, transport)
    }
}

impl<T: Transport> HypixelClient<T> {
    pub fn with_transport(config: Config, transport: T) -> Self {
        Self { transport, config, uuid_cache: UuidCache::new() }
    }

    pub fn config(&self) -> &Config {
        &self.config
    }

    /// Resolve a Minecraft username to an undashed uuid.
    ///
    /// `Ok(None)` means the player does not exist. Resolved names are cached
    /// for the lifetime of the client.
    pub fn resolve_uuid(&self, name: &str) -> Result<Option<String>, ApiError> {
        self.uuid_cache.get_or_try_fetch(name, || {
            let url = format!("{}/{}", self.config.mojang_url.trim_end_matches('/'), name);
            match self.transport.get_json(&url, &[], &[]) {
                Ok(data) => match data.get("id").and_then(Value::as_str) {
                    Some(id) => Ok(Some(id.to_string())),
                    None => {
                        log::warn!("UUID not found for player: {}", name);
                        Ok(None)
                    }
                },
                Err(ApiError::NotFound) => {
                    log::warn!("UUID not found for player: {}", name);
                    Ok(None)
                }
                Err(e) => {
                    log::error!("Failed to fetch UUID for {}: {}", name, e);
                    Err(e)
                }
            }
        })
    }

    /// SkyBlock profiles of a player, as `cute_name -> profile_id`
    pub fn profile_ids(&self, uuid: &str) -> Result<BTreeMap<String, String>, ApiError> {
        let data = self.hypixel_get(&self.config.profiles_url, &[("uuid", uuid)])?;

        // A player who never joined SkyBlock has `"profiles": null`
        let profiles: &[Value] = match data.get("profiles") {
            Some(Value::Array(profiles)) => profiles.as_slice(),
            Some(Value::Null) => &[],
            _ => return Err(ApiError::MissingField("profiles")),
        };

        let mut names = BTreeMap::new();
        for profile in profiles {
            let name = profile.get("cute_name").and_then(Value::as_str);
            let id = profile.get("profile_id").and_then(Value::as_str);
            match (name, id) {
                (Some(name), Some(id)) => {
                    names.insert(name.to_string(), id.to_string());
                }
                _ => log::warn!("Skipping malformed profile entry for {}", uuid),
            }
        }
        Ok(names)
    }

    /// Fetch one SkyBlock profile, viewed from the member `uuid`
    pub fn fetch_profile(&self, uuid: &str, profile_id: &str) -> Result<ProfileData, ApiError> {
        let data = self.hypixel_get(
            &self.config.profile_url,
            &[("uuid", uuid), ("profile", profile_id)],
        )?;
        Ok(ProfileData::new(data, uuid))
    }

    fn hypixel_get(&self, url: &str, query: &[(&str, &str)]) -> Result<Value, ApiError> {
        let key = self.config.api_key.as_deref().ok_or(ApiError::MissingApiKey)?;
        let data = self.transport.get_json(url, query, &[("API-Key", key)])?;
        check_success(data)
    }
}

/// Reject responses whose `success` flag is not true
fn check_success(data: Value) -> Result<Value, ApiError> {
    match data.get("success").and_then(Value::as_bool) {
        Some(true) => Ok(data),
        Some(false) => {
            let cause = data
                .get("cause")
                .and_then(Value::as_str)
                .unwrap_or("Unknown error")
                .to_string();
            Err(ApiError::Api { cause })
        }
        None => Err(ApiError::MissingField("success")),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::profile::fixtures::{error_payload, full_payload, profiles_payload, MEMBER_ID};
    use parking_lot::Mutex;
    use serde_json::json;
    use std::collections::HashMap;
    use std::sync::atomic::{AtomicUsize, Ordering};

    /// Serves canned responses by URL and records the headers it saw
    #[derive(Default)]
    struct MockTransport {
        routes: HashMap<String, Result<Value, ApiError>>,
        calls: AtomicUsize,
        last_headers: Mutex<Vec<(String, String)>>,
    }

    impl MockTransport {
        fn route(mut self, url: &str, response: Result<Value, ApiError>) -> Self {
            self.routes.insert(url.to_string(), response);
            self
        }
    }

    impl Transport for MockTransport {
        fn get_json(
            &self,
            url: &str,
            _query: &[(&str, &str)],
            headers: &[(&str, &str)],
        ) -> Result<Value, ApiError> {
            self.calls.fetch_add(1, Ordering::SeqCst);
            *self.last_headers.lock() = headers
                .iter()
                .map(|(k, v)| (k.to_string(), v.to_string()))
                .collect();
            self.routes
                .get(url)
                .cloned()
                .unwrap_or_else(|| Err(ApiError::Transport(format!("no route for {}", url))))
        }
    }

    fn config() -> Config {
        Config {
            api_key: Some("test-key".to_string()),
            profile_url: "mock://profile".to_string(),
            profiles_url: "mock://profiles".to_string(),
            mojang_url: "mock://mojang/".to_string(),
            ..Config::default()
        }
    }

    #[test]
    fn test_resolve_uuid_is_cached() {
        let transport = MockTransport::default()
            .route("mock://mojang/Technoblade", Ok(json!({ "id": MEMBER_ID, "name": "Technoblade" })));
        let client = HypixelClient::with_transport(config(), transport);

        assert_eq!(client.resolve_uuid("Technoblade"), Ok(Some(MEMBER_ID.to_string())));
        assert_eq!(client.resolve_uuid("Technoblade"), Ok(Some(MEMBER_ID.to_string())));
        assert_eq!(client.transport.calls.load(Ordering::SeqCst), 1);
    }

    #[test]
    fn test_unknown_player() {
        let transport = MockTransport::default()
            .route("mock://mojang/ghost", Err(ApiError::NotFound))
            .route("mock://mojang/empty", Ok(Value::Null));
        let client = HypixelClient::with_transport(config(), transport);
        assert_eq!(client.resolve_uuid("ghost"), Ok(None));
        assert_eq!(client.resolve_uuid("empty"), Ok(None));
    }

    #[test]
    fn test_resolve_uuid_propagates_transport_errors() {
        let client = HypixelClient::with_transport(config(), MockTransport::default());
        assert!(matches!(client.resolve_uuid("anyone"), Err(ApiError::Transport(_))));
    }

    #[test]
    fn test_profile_ids() {
        let transport = MockTransport::default().route("mock://profiles", Ok(profiles_payload()));
        let client = HypixelClient::with_transport(config(), transport);

        let ids = client.profile_ids(MEMBER_ID).unwrap();
        assert_eq!(ids.len(), 3);
        assert_eq!(ids["Peach"], "f5791b0c-caf1-4701-aea3-d727ea53a901");
        assert_eq!(ids.keys().next().map(String::as_str), Some("Kiwi"));
        assert_eq!(
            *client.transport.last_headers.lock(),
            vec![("API-Key".to_string(), "test-key".to_string())]
        );
    }

    #[test]
    fn test_profile_ids_without_skyblock() {
        let transport = MockTransport::default()
            .route("mock://profiles", Ok(json!({ "success": true, "profiles": null })));
        let client = HypixelClient::with_transport(config(), transport);
        assert!(client.profile_ids(MEMBER_ID).unwrap().is_empty());
    }

    #[test]
    fn test_fetch_profile() {
        let transport = MockTransport::default().route("mock://profile", Ok(full_payload()));
        let client = HypixelClient::with_transport(config(), transport);

        let profile = client.fetch_profile(MEMBER_ID, "eca19e2e-713d-49a9-8582-320229f696ed").unwrap();
        assert_eq!(profile.catacombs_level(), 24);
        assert_eq!(profile.collection("LOG"), 77_760);
    }

    #[test]
    fn test_api_failure_is_an_error() {
        let transport = MockTransport::default()
            .route("mock://profile", Ok(error_payload("Invalid API key")))
            .route("mock://profiles", Ok(error_payload("Key throttle")));
        let client = HypixelClient::with_transport(config(), transport);

        assert_eq!(
            client.fetch_profile(MEMBER_ID, "x").unwrap_err(),
            ApiError::Api { cause: "Invalid API key".to_string() }
        );
        assert_eq!(
            client.profile_ids(MEMBER_ID).unwrap_err(),
            ApiError::Api { cause: "Key throttle".to_string() }
        );
    }

    #[test]
    fn test_failure_without_cause() {
        assert_eq!(
            check_success(json!({ "success": false })),
            Err(ApiError::Api { cause: "Unknown error".to_string() })
        );
        assert_eq!(check_success(json!({})), Err(ApiError::MissingField("success")));
    }

    #[test]
    fn test_missing_api_key() {
        let transport = MockTransport::default().route("mock://profile", Ok(full_payload()));
        let client = HypixelClient::with_transport(Config { api_key: None, ..config() }, transport);
        assert_eq!(client.fetch_profile(MEMBER_ID, "x").unwrap_err(), ApiError::MissingApiKey);
        assert_eq!(client.transport.calls.load(Ordering::SeqCst), 0);
    }
}
