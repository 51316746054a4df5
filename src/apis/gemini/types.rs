/// Google Gemini API request/response types
///
/// These types match the generateContent REST format exactly.
/// API Documentation: https://ai.google.dev/api/rest
use serde::{Deserialize, Serialize};

// ============================================================================
// REQUEST TYPES
// ============================================================================

/// Gemini generateContent request
#[derive(Debug, Clone, Serialize)]
pub struct GeminiRequest {
    /// Array of content parts in the conversation
    pub contents: Vec<GeminiContent>,

    /// Generation configuration
    #[serde(skip_serializing_if = "Option::is_none")]
    #[serde(rename = "generationConfig")]
    pub generation_config: Option<GeminiGenerationConfig>,
}

/// Content in Gemini format (user message)
#[derive(Debug, Clone, Serialize)]
pub struct GeminiContent {
    /// Array of parts (text only here)
    pub parts: Vec<GeminiPart>,

    /// Role: "user" or "model"
    #[serde(skip_serializing_if = "Option::is_none")]
    pub role: Option<String>,
}

/// A single part of content (text)
#[derive(Debug, Clone, Serialize)]
pub struct GeminiPart {
    pub text: String,
}

/// Generation configuration
#[derive(Debug, Clone, Serialize)]
pub struct GeminiGenerationConfig {
    /// Response MIME type (for JSON mode)
    #[serde(skip_serializing_if = "Option::is_none")]
    #[serde(rename = "responseMimeType")]
    pub response_mime_type: Option<String>,

    /// Sampling temperature
    #[serde(skip_serializing_if = "Option::is_none")]
    pub temperature: Option<f64>,

    /// Structured-output schema constraining the model's JSON
    #[serde(skip_serializing_if = "Option::is_none")]
    #[serde(rename = "responseSchema")]
    pub response_schema: Option<serde_json::Value>,
}

/// Schema forcing the model to emit a verdict/analysis/score object
pub fn analysis_response_schema() -> serde_json::Value {
    serde_json::json!({
        "type": "OBJECT",
        "properties": {
            "verdict": {"type": "STRING"},
            "analysis": {"type": "STRING"},
            "score": {"type": "NUMBER"}
        },
        "required": ["verdict", "analysis", "score"]
    })
}

// ============================================================================
// RESPONSE TYPES
// ============================================================================

/// Gemini generateContent response
///
/// Every field is optional; a blocked prompt returns no candidates at all.
#[derive(Debug, Clone, Deserialize)]
pub struct GeminiResponse {
    pub candidates: Option<Vec<GeminiCandidate>>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct GeminiCandidate {
    pub content: Option<GeminiResponseContent>,

    #[serde(rename = "finishReason")]
    pub finish_reason: Option<String>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct GeminiResponseContent {
    pub parts: Option<Vec<GeminiResponsePart>>,
    pub role: Option<String>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct GeminiResponsePart {
    pub text: Option<String>,
}

impl GeminiResponse {
    /// Text of the first candidate part, if the model produced any
    pub fn first_text(&self) -> Option<&str> {
        self.candidates
            .as_ref()?
            .first()?
            .content
            .as_ref()?
            .parts
            .as_ref()?
            .first()?
            .text
            .as_deref()
    }
}

// ============================================================================
// ANALYSIS RESULT
// ============================================================================

/// Verdict returned for a token, either from the model or synthesized locally
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TokenAnalysis {
    pub verdict: String,
    pub analysis: String,
    pub score: f64,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_request_uses_wire_field_names() {
        let request = GeminiRequest {
            contents: vec![GeminiContent {
                parts: vec![GeminiPart {
                    text: "hello".to_string(),
                }],
                role: Some("user".to_string()),
            }],
            generation_config: Some(GeminiGenerationConfig {
                response_mime_type: Some("application/json".to_string()),
                temperature: Some(0.9),
                response_schema: Some(analysis_response_schema()),
            }),
        };

        let json = serde_json::to_string(&request).unwrap();
        assert!(json.contains("\"generationConfig\""));
        assert!(json.contains("\"responseMimeType\""));
        assert!(json.contains("\"responseSchema\""));
        assert!(!json.contains("response_mime_type"));
    }

    #[test]
    fn test_schema_requires_all_fields() {
        let schema = analysis_response_schema();
        let required = schema["required"].as_array().unwrap();
        assert_eq!(required.len(), 3);
        assert_eq!(schema["properties"]["score"]["type"], "NUMBER");
    }

    #[test]
    fn test_first_text_walks_candidates() {
        let json = r#"{
            "candidates": [{
                "content": {
                    "parts": [{"text": "{\"verdict\":\"SEND IT\",\"analysis\":\"pumping\",\"score\":88}"}],
                    "role": "model"
                },
                "finishReason": "STOP"
            }]
        }"#;
        let response: GeminiResponse = serde_json::from_str(json).unwrap();
        let text = response.first_text().unwrap();

        let analysis: TokenAnalysis = serde_json::from_str(text).unwrap();
        assert_eq!(analysis.verdict, "SEND IT");
        assert_eq!(analysis.score, 88.0);
    }

    #[test]
    fn test_first_text_none_when_blocked() {
        let response: GeminiResponse = serde_json::from_str("{}").unwrap();
        assert!(response.first_text().is_none());

        let response: GeminiResponse = serde_json::from_str(r#"{"candidates": []}"#).unwrap();
        assert!(response.first_text().is_none());
    }
}
