use tracing::{debug, error};

use super::interface::{DetectionResult, TranslationResult};
use super::languages::language_name;
use super::prompts::{detection_prompt, translation_prompt};
use crate::error::ServiceError;
use crate::llm::StatelessLLMInterface;

/// Translate `text` between the two languages named by `lang_pair`
/// (`"{source}-{target}"`, split on the first `-`).
///
/// `text` is expected to be already percent-decoded; it is used as-is.
pub async fn translate(
    llm: &dyn StatelessLLMInterface,
    lang_pair: &str,
    text: &str,
) -> Result<TranslationResult, ServiceError> {
    let Some((source_code, target_code)) = lang_pair.split_once('-') else {
        debug!("Rejected language pair without separator: {:?}", lang_pair);
        return Err(ServiceError::InvalidFormat);
    };

    let (Some(source_language), Some(target_language)) =
        (language_name(source_code), language_name(target_code))
    else {
        debug!("Rejected language pair: {:?}", lang_pair);
        return Err(ServiceError::InvalidFormat);
    };

    let prompt = translation_prompt(text, source_language, target_language);
    let translated = llm.generate_completion(&prompt).await.map_err(|e| {
        error!("Erro ao traduzir: {:#}", e);
        ServiceError::TranslationFailed(e)
    })?;

    Ok(TranslationResult {
        original: text.to_string(),
        translated: translated.trim().to_string(),
        source_language: source_language.to_string(),
        target_language: target_language.to_string(),
    })
}

/// Ask the model which language `text` is written in.
pub async fn detect_language(
    llm: &dyn StatelessLLMInterface,
    text: &str,
) -> Result<DetectionResult, ServiceError> {
    if text.is_empty() {
        debug!("Rejected empty text for language detection");
        return Err(ServiceError::MissingText);
    }

    let prompt = detection_prompt(text);
    let language = llm.generate_completion(&prompt).await.map_err(|e| {
        error!("Erro ao detectar idioma: {:#}", e);
        ServiceError::DetectionFailed(e)
    })?;

    Ok(DetectionResult {
        text: text.to_string(),
        detected_language: language.trim().to_string(),
    })
}
