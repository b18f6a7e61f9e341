//! Readiness descriptor

use serde::{Deserialize, Serialize};

/// Name reported by [`status`]
pub const SERVICE_NAME: &str = "Word Document Split Service";

/// Readiness flag
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Readiness {
    /// Accepting split requests
    Ready,
    /// Not accepting split requests
    NotReady,
}

/// Static description of the split service
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ServiceStatus {
    /// Service name
    pub service: String,
    /// Readiness flag
    pub status: Readiness,
}

impl ServiceStatus {
    /// Whether the service reports itself ready
    pub fn is_ready(&self) -> bool {
        self.status == Readiness::Ready
    }
}

/// Report readiness; the engine keeps no state between calls, so it is always ready
pub fn status() -> ServiceStatus {
    ServiceStatus {
        service: SERVICE_NAME.to_string(),
        status: Readiness::Ready,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_is_ready() {
        let status = status();
        assert!(status.is_ready());
        assert_eq!(status.service, SERVICE_NAME);
    }

    #[test]
    fn test_status_serialization() {
        let json = serde_json::to_value(status()).unwrap();
        assert_eq!(
            json,
            serde_json::json!({
                "service": "Word Document Split Service",
                "status": "ready"
            })
        );

        let not_ready = serde_json::to_value(Readiness::NotReady).unwrap();
        assert_eq!(not_ready, "not_ready");
    }
}
