use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TranslationResult {
    pub original: String,
    pub translated: String,
    pub source_language: String,
    pub target_language: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DetectionResult {
    pub text: String,
    pub detected_language: String,
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn translation_result_uses_camel_case_fields() {
        let result = TranslationResult {
            original: "olá".to_string(),
            translated: "hello".to_string(),
            source_language: "português".to_string(),
            target_language: "inglês".to_string(),
        };
        assert_eq!(
            serde_json::to_value(&result).unwrap(),
            json!({
                "original": "olá",
                "translated": "hello",
                "sourceLanguage": "português",
                "targetLanguage": "inglês"
            })
        );
    }

    #[test]
    fn detection_result_uses_camel_case_fields() {
        let result = DetectionResult {
            text: "hello".to_string(),
            detected_language: "inglês".to_string(),
        };
        assert_eq!(
            serde_json::to_value(&result).unwrap(),
            json!({"text": "hello", "detectedLanguage": "inglês"})
        );
    }
}
