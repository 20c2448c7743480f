//! Wire types for the `generateContent` endpoint.

use serde::Serialize;

/// Request body for a `generateContent` call.
#[derive(Debug, Serialize)]
pub struct GenerateContentRequest {
    pub contents: Vec<Content>,
}

/// One conversation turn.
#[derive(Debug, Serialize)]
pub struct Content {
    pub role: &'static str,
    pub parts: Vec<Part>,
}

/// A single content part: either text or inline base64 data.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Part {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub text: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub inline_data: Option<InlineData>,
}

/// Inline base64-encoded binary payload.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct InlineData {
    pub mime_type: &'static str,
    pub data: String,
}

impl Part {
    /// Text part.
    #[must_use]
    pub fn text(text: &str) -> Self {
        Self {
            text: Some(text.to_string()),
            inline_data: None,
        }
    }

    /// Inline JPEG image part.
    #[must_use]
    pub fn jpeg(data: &str) -> Self {
        Self {
            text: None,
            inline_data: Some(InlineData {
                mime_type: "image/jpeg",
                data: data.to_string(),
            }),
        }
    }
}

impl GenerateContentRequest {
    /// Build the try-on request: instruction text followed by the person
    /// image and then the garment image. The model relies on that ordering
    /// to tell "Modelo" from "Roupa".
    #[must_use]
    pub fn try_on(prompt: &str, user_image: &str, cloth_image: &str) -> Self {
        Self {
            contents: vec![Content {
                role: "user",
                parts: vec![
                    Part::text(prompt),
                    Part::jpeg(user_image),
                    Part::jpeg(cloth_image),
                ],
            }],
        }
    }
}

/// Pull the first inline image out of a raw `generateContent` response.
///
/// Walks `candidates[0].content.parts` and returns the first part carrying
/// `inlineData.data`. Returns `None` for text-only or malformed responses.
#[must_use]
pub fn extract_inline_image(response: &serde_json::Value) -> Option<&str> {
    response
        .get("candidates")?
        .get(0)?
        .get("content")?
        .get("parts")?
        .as_array()?
        .iter()
        .find_map(|part| part.get("inlineData")?.get("data")?.as_str())
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_try_on_request_shape() {
        let request = GenerateContentRequest::try_on("describe", "USERB64", "CLOTHB64");
        let value = serde_json::to_value(&request).unwrap();

        let parts = &value["contents"][0]["parts"];
        assert_eq!(value["contents"][0]["role"], "user");
        assert_eq!(parts[0]["text"], "describe");
        assert_eq!(parts[1]["inlineData"]["mimeType"], "image/jpeg");
        assert_eq!(parts[1]["inlineData"]["data"], "USERB64");
        assert_eq!(parts[2]["inlineData"]["data"], "CLOTHB64");

        // Text parts must not serialize an empty inlineData key and vice versa.
        assert!(parts[0].get("inlineData").is_none());
        assert!(parts[1].get("text").is_none());
    }

    #[test]
    fn test_extract_inline_image_finds_first_image_part() {
        let response = json!({
            "candidates": [{
                "content": {
                    "parts": [
                        { "text": "Here is your image" },
                        { "inlineData": { "mimeType": "image/png", "data": "RESULT" } }
                    ]
                }
            }]
        });

        assert_eq!(extract_inline_image(&response), Some("RESULT"));
    }

    #[test]
    fn test_extract_inline_image_none_for_text_only() {
        let response = json!({
            "candidates": [{ "content": { "parts": [{ "text": "no image" }] } }]
        });

        assert_eq!(extract_inline_image(&response), None);
        assert_eq!(extract_inline_image(&json!({})), None);
    }
}
