use serde::Deserialize;

/// Sample connection profile shown in the configuration modal and copied verbatim.
pub const SAMPLE_PROFILE: &str = r#"{
  "v": "2",
  "ps": "AHMED VPN - Tokyo",
  "add": "192.0.2.1",
  "port": "443",
  "id": "5c4a2b8d-1e90-4f3c-b3c0-1a5a3f7b9c0d",
  "aid": "0",
  "scy": "none",
  "net": "tcp",
  "type": "none",
  "host": "vpn.ahmed.com",
  "path": "/",
  "tls": "tls",
  "sni": "vpn.ahmed.com",
  "alpn": "http/1.1"
}"#;

/// The fields of a share-link style profile the modal summarises.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct ConnectionProfile {
    #[serde(rename = "ps")]
    pub label: String,
    #[serde(rename = "add")]
    pub address: String,
    pub port: String,
    pub id: String,
    #[serde(rename = "net")]
    pub transport: String,
    #[serde(default)]
    pub tls: String,
    #[serde(default)]
    pub sni: String,
}

impl ConnectionProfile {
    pub fn parse(text: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(text)
    }

    pub fn sample() -> Option<Self> {
        match Self::parse(SAMPLE_PROFILE) {
            Ok(profile) => Some(profile),
            Err(e) => {
                log::warn!("sample profile does not parse: {}", e);
                None
            }
        }
    }

    pub fn uses_tls(&self) -> bool {
        self.tls == "tls"
    }

    /// One-line summary, e.g. `AHMED VPN - Tokyo · 192.0.2.1:443 · tcp + TLS`.
    pub fn summary(&self) -> String {
        let security = if self.uses_tls() { " + TLS" } else { "" };
        format!(
            "{} · {}:{} · {}{}",
            self.label, self.address, self.port, self.transport, security
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn sample_profile_parses() {
        let profile = ConnectionProfile::sample().expect("sample profile is valid JSON");
        assert_eq!(profile.label, "AHMED VPN - Tokyo");
        assert_eq!(profile.address, "192.0.2.1");
        assert_eq!(profile.port, "443");
        assert_eq!(profile.transport, "tcp");
        assert_eq!(profile.sni, "vpn.ahmed.com");
        assert!(profile.uses_tls());
    }

    #[test]
    fn summary_mentions_endpoint_and_security() {
        let profile = ConnectionProfile::sample().unwrap();
        assert_eq!(
            profile.summary(),
            "AHMED VPN - Tokyo · 192.0.2.1:443 · tcp + TLS"
        );
    }

    #[test]
    fn plain_profile_has_no_tls_suffix() {
        let profile = ConnectionProfile::parse(
            r#"{"ps":"Lab","add":"10.0.0.1","port":"80","id":"x","net":"ws"}"#,
        )
        .unwrap();
        assert!(!profile.uses_tls());
        assert_eq!(profile.summary(), "Lab · 10.0.0.1:80 · ws");
    }

    #[test]
    fn missing_address_is_an_error() {
        assert!(ConnectionProfile::parse(r#"{"ps":"Lab","port":"80"}"#).is_err());
    }

    #[test]
    fn payload_is_pretty_printed_json_object() {
        assert!(SAMPLE_PROFILE.starts_with("{\n  \"v\": \"2\","));
        assert!(SAMPLE_PROFILE.ends_with("\"alpn\": \"http/1.1\"\n}"));
        let value: serde_json::Value = serde_json::from_str(SAMPLE_PROFILE).unwrap();
        assert_eq!(value.as_object().map(|o| o.len()), Some(14));
    }
}
