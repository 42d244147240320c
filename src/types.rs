use crate::error::CheckError;
use serde::Serialize;
use serde_json::Value;

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ParkingCheckRequest {
    pub license_plate: String,
    pub lot_name: String,
    pub user_type: String,
    /// ISO-8601 UTC, millisecond precision.
    pub time: String,
}

/// A `/check_parking` response after validation.
///
/// Only a `status` of exactly `"allowed"` is treated as allowed. Anything
/// else, including a missing status, is `NotAllowed` and must carry a list of
/// alternatives.
#[derive(Debug, Clone, PartialEq)]
pub enum ParkingCheckResult {
    Allowed {
        message: String,
    },
    NotAllowed {
        status: Option<String>,
        message: String,
        alternatives: Vec<String>,
    },
}

impl ParkingCheckResult {
    pub fn is_allowed(&self) -> bool {
        matches!(self, ParkingCheckResult::Allowed { .. })
    }

    pub fn message(&self) -> &str {
        match self {
            ParkingCheckResult::Allowed { message } => message,
            ParkingCheckResult::NotAllowed { message, .. } => message,
        }
    }

    pub fn from_json(value: &Value) -> Result<Self, CheckError> {
        let object = value.as_object().ok_or_else(|| {
            CheckError::MalformedResult(format!("Expected a JSON object, got {}", value))
        })?;
        let status = object.get("status").and_then(Value::as_str);
        let message = object
            .get("message")
            .and_then(Value::as_str)
            .ok_or_else(|| CheckError::MalformedResult("Missing message field".to_string()))?
            .to_string();
        if status == Some("allowed") {
            return Ok(ParkingCheckResult::Allowed { message });
        }
        let alternatives = object
            .get("alternatives")
            .ok_or_else(|| CheckError::MalformedResult("Missing alternatives field".to_string()))
            .and_then(string_list)?;
        Ok(ParkingCheckResult::NotAllowed {
            status: status.map(str::to_string),
            message,
            alternatives,
        })
    }
}

/// Parses a JSON array whose every element is a string.
pub fn string_list(value: &Value) -> Result<Vec<String>, CheckError> {
    let items = value.as_array().ok_or_else(|| {
        CheckError::MalformedResult(format!("Expected an array of strings, got {}", value))
    })?;
    items
        .iter()
        .map(|item| {
            item.as_str().map(str::to_string).ok_or_else(|| {
                CheckError::MalformedResult(format!("Expected a string, got {}", item))
            })
        })
        .collect()
}
