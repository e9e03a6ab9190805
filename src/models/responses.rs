use serde::Serialize;

#[derive(Debug, Serialize)]
pub struct NormalizeResponse {
    pub status: String,
    pub normalized: String,
    pub original_length: usize,
    pub normalized_length: usize,
}

impl NormalizeResponse {
    pub fn success(original: &str, normalized: String) -> Self {
        Self {
            status: "success".to_string(),
            original_length: original.chars().count(),
            normalized_length: normalized.chars().count(),
            normalized,
        }
    }
}

#[derive(Debug, Serialize)]
pub struct UnitsResponse {
    pub units: Vec<String>,
}

#[derive(Debug, Serialize)]
pub struct HealthResponse {
    pub status: String,
    pub version: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_normalize_response_serialization() {
        let response = NormalizeResponse::success("5元", "五元".to_string());

        let json = serde_json::to_string(&response).unwrap();

        assert!(json.contains("\"status\":\"success\""));
        assert!(json.contains("\"normalized\":\"五元\""));
        assert!(json.contains("\"original_length\":2"));
        assert!(json.contains("\"normalized_length\":2"));
    }

    #[test]
    fn test_units_response_serialization() {
        let response = UnitsResponse {
            units: vec!["元".to_string(), "米".to_string()],
        };

        let json = serde_json::to_string(&response).unwrap();

        assert_eq!(json, r#"{"units":["元","米"]}"#);
    }

    #[test]
    fn test_health_response_serialization() {
        let response = HealthResponse {
            status: "ok".to_string(),
            version: "0.1.0".to_string(),
        };

        let json = serde_json::to_string(&response).unwrap();

        assert!(json.contains("\"status\":\"ok\""));
        assert!(json.contains("\"version\":\"0.1.0\""));
    }
}
