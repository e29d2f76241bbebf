pub fn translation_prompt(text: &str, source_language: &str, target_language: &str) -> String {
    format!(
        "Traduza o seguinte texto do {source_language} para {target_language}:\n\n\"{text}\"\n\nApenas retorne o texto traduzido, sem explicações adicionais."
    )
}

pub fn detection_prompt(text: &str) -> String {
    format!(
        "Qual é o idioma do seguinte texto? Responda apenas com o nome do idioma em português:\n\n\"{text}\""
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn translation_prompt_embeds_text_and_languages() {
        let prompt = translation_prompt("olá mundo", "português", "inglês");
        assert!(prompt.starts_with("Traduza o seguinte texto do português para inglês:"));
        assert!(prompt.contains("\"olá mundo\""));
        assert!(prompt.ends_with("sem explicações adicionais."));
    }

    #[test]
    fn detection_prompt_asks_for_portuguese_name() {
        let prompt = detection_prompt("hello world");
        assert!(prompt.contains("nome do idioma em português"));
        assert!(prompt.ends_with("\"hello world\""));
    }
}
