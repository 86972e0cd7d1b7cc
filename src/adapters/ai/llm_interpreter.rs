//! LLM-backed TextInterpreter implementation

use async_trait::async_trait;
use std::sync::Arc;

use crate::domain::profile::{ProfileField, UNSPECIFIED_LABEL};
use crate::ports::{
    AIProvider, CompletionRequest, Extraction, InterpreterError, MessageRole, PromptRequest,
    RequestMetadata, TextInterpreter,
};

/// Persona the bot speaks with when phrasing questions.
const BOT_PERSONALITY: &str = "Você é GG, um mascote e assistente gamer gente boa, amigável, um pouco divertido, mas principalmente natural e prestativo. Use uma linguagem informal e clara, como se estivesse conversando com um amigo sobre jogos. Use emojis com moderação para dar um toque amigável (😊, 👍, 😉, 🎉, 🤔). Evite gírias muito específicas ou em excesso. Mantenha as perguntas e comentários curtos (uma ou duas frases) e diretos. NÃO repita saudações. Se o usuário der uma resposta, faça um breve comentário de reconhecimento (ex: 'Entendi!', 'Legal!') ANTES da próxima pergunta. Se não entender ou a extração for 'Não especificado', peça para repetir ou ofereça opções.";

/// Lower-cased phrases the model uses to say it found nothing.
const NOTHING_FOUND_MARKERS: [&str; 2] = ["não especificado", "não identificar"];

/// Label the model sometimes prefixes generated questions with.
const GENERATED_QUESTION_LABEL: &str = "pergunta gerada:";

/// Text interpreter that asks an LLM to extract answers and phrase questions.
pub struct LlmTextInterpreter {
    ai_provider: Arc<dyn AIProvider>,
}

impl LlmTextInterpreter {
    pub fn new(ai_provider: Arc<dyn AIProvider>) -> Self {
        Self { ai_provider }
    }

    fn create_extraction_prompt(text: &str, field: ProfileField) -> String {
        let description = field.description();
        let mut prompt = format!("Do texto: \"{}\", extraia APENAS: '{}'.", text, description);

        match field.categories() {
            Some(categories) => prompt.push_str(&format!(
                "\nCategorias: [{}]. Se não claro/encaixar, retorne '{}'.",
                categories.join(", "),
                UNSPECIFIED_LABEL
            )),
            None => prompt.push_str(&format!(
                "\nRetorne conciso. Se não claro, '{}'.",
                UNSPECIFIED_LABEL
            )),
        }

        prompt.push_str(&format!("\nRetorne APENAS o valor para '{}':", description));
        prompt
    }

    fn create_question_prompt(request: &PromptRequest) -> String {
        let description = request.field.description();

        if request.is_first {
            return format!(
                "Esta é a primeira pergunta após a saudação. Formule a pergunta para: '{}'. Ideia: \"{}\". Pergunta:",
                description, request.suggestion
            );
        }

        let mut lines = Vec::new();
        if let Some(previous) = request.previous_answer.as_deref().filter(|p| !p.is_empty()) {
            lines.push(format!("User: \"{}\". Comente brevemente e então,", previous));
        }

        let mut context = String::new();
        if let Some(name) = &request.display_name {
            context.push_str(&format!(" (nome: {})", name));
        }
        if request.field != ProfileField::PrimaryGame {
            if let Some(game) = &request.primary_game {
                context.push_str(&format!(" (joga: {})", game));
            }
        }
        let context = if context.is_empty() {
            String::new()
        } else {
            format!("Considerando{}", context)
        };

        lines.push(format!(
            "{}, formule a pergunta para: '{}'. Ideia: \"{}\". Pergunta Gerada:",
            context, description, request.suggestion
        ));
        lines.join("\n")
    }

    /// Strips a leading "<Field label>:" the model may echo back.
    fn strip_field_label(raw: &str, field: ProfileField) -> String {
        let trimmed = raw.trim();
        let first_word = field
            .description()
            .split_whitespace()
            .next()
            .unwrap_or_default()
            .to_lowercase();

        match trimmed.split_once(':') {
            Some((_, value)) if trimmed.to_lowercase().starts_with(&first_word) => {
                value.trim().to_string()
            }
            _ => trimmed.to_string(),
        }
    }

    fn interpret_extraction(raw: &str, field: ProfileField) -> Extraction {
        let value = Self::strip_field_label(raw, field);
        let lowered = value.to_lowercase();

        if value.is_empty() || NOTHING_FOUND_MARKERS.iter().any(|m| lowered.contains(m)) {
            Extraction::Unspecified
        } else {
            Extraction::Value(value)
        }
    }

    fn clean_question(raw: &str) -> String {
        let trimmed = raw.trim();
        if trimmed.to_lowercase().starts_with(GENERATED_QUESTION_LABEL) {
            trimmed
                .split_once(':')
                .map(|(_, rest)| rest.trim().to_string())
                .unwrap_or_default()
        } else {
            trimmed.to_string()
        }
    }
}

#[async_trait]
impl TextInterpreter for LlmTextInterpreter {
    async fn extract(&self, text: &str, field: ProfileField) -> Result<Extraction, InterpreterError> {
        let request = CompletionRequest::new(RequestMetadata::new(None, "extract"))
            .with_message(MessageRole::User, Self::create_extraction_prompt(text, field))
            .with_temperature(0.0);

        let response = self.ai_provider.complete(request).await?;
        let extraction = Self::interpret_extraction(&response.content, field);

        tracing::debug!(field = %field, extraction = ?extraction, "Extracted profile answer");
        Ok(extraction)
    }

    async fn generate_prompt(&self, request: &PromptRequest) -> Result<String, InterpreterError> {
        let completion = CompletionRequest::new(RequestMetadata::new(None, "prompt"))
            .with_system_prompt(BOT_PERSONALITY)
            .with_message(MessageRole::User, Self::create_question_prompt(request));

        let response = self.ai_provider.complete(completion).await?;
        let question = Self::clean_question(&response.content);

        if question.is_empty() {
            return Err(InterpreterError::EmptyResponse);
        }
        Ok(question)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::adapters::ai::{MockAIProvider, MockError};

    fn interpreter(provider: MockAIProvider) -> LlmTextInterpreter {
        LlmTextInterpreter::new(Arc::new(provider))
    }

    fn prompt_request(is_first: bool) -> PromptRequest {
        PromptRequest {
            field: ProfileField::SkillLevel,
            suggestion: "entendi! No Valorant, você se considera...".to_string(),
            display_name: Some("Lulu".to_string()),
            primary_game: Some("Valorant".to_string()),
            previous_answer: Some("valorant com certeza".to_string()),
            is_first,
        }
    }

    #[test]
    fn extraction_prompt_lists_categories_when_present() {
        let prompt = LlmTextInterpreter::create_extraction_prompt("sou mulher", ProfileField::Gender);
        assert!(prompt.contains("Do texto: \"sou mulher\""));
        assert!(prompt.contains("Categorias: [Mulher, Homem"));

        let free = LlmTextInterpreter::create_extraction_prompt("à noite", ProfileField::Availability);
        assert!(free.contains("Retorne conciso."));
    }

    #[test]
    fn question_prompt_carries_context() {
        let prompt = LlmTextInterpreter::create_question_prompt(&prompt_request(false));
        assert!(prompt.starts_with("User: \"valorant com certeza\""));
        assert!(prompt.contains("Considerando (nome: Lulu) (joga: Valorant)"));

        let first = LlmTextInterpreter::create_question_prompt(&prompt_request(true));
        assert!(first.starts_with("Esta é a primeira pergunta"));
    }

    #[test]
    fn field_label_echo_is_stripped() {
        let value = LlmTextInterpreter::strip_field_label(
            "Nome de display ou apelido do jogador: Lulu",
            ProfileField::DisplayName,
        );
        assert_eq!(value, "Lulu");

        let untouched =
            LlmTextInterpreter::strip_field_label("Noites: depois das 20h", ProfileField::Availability);
        assert_eq!(untouched, "Noites: depois das 20h");
    }

    #[test]
    fn nothing_found_phrases_become_unspecified() {
        assert_eq!(
            LlmTextInterpreter::interpret_extraction("Não especificado.", ProfileField::Gender),
            Extraction::Unspecified
        );
        assert_eq!(
            LlmTextInterpreter::interpret_extraction(
                "Não consigo identificar o jogo",
                ProfileField::PrimaryGame
            ),
            Extraction::Value("Não consigo identificar o jogo".to_string())
        );
        assert_eq!(
            LlmTextInterpreter::interpret_extraction("Não foi possível não identificar", ProfileField::PrimaryGame),
            Extraction::Unspecified
        );
        assert_eq!(
            LlmTextInterpreter::interpret_extraction("  ", ProfileField::PrimaryGame),
            Extraction::Unspecified
        );
    }

    #[tokio::test]
    async fn extract_uses_provider_output() {
        let provider = MockAIProvider::new().with_response(" Avançado \n");
        let interpreter = interpreter(provider.clone());

        let extraction = interpreter
            .extract("jogo bem, sou avançado", ProfileField::SkillLevel)
            .await
            .unwrap();

        assert_eq!(extraction, Extraction::Value("Avançado".to_string()));
        assert_eq!(provider.call_count(), 1);
    }

    #[tokio::test]
    async fn extract_propagates_provider_errors() {
        let provider = MockAIProvider::new().with_error(MockError::Unavailable {
            message: "down".to_string(),
        });

        let result = interpreter(provider).extract("oi", ProfileField::DisplayName).await;

        assert!(matches!(result, Err(InterpreterError::Provider(_))));
    }

    #[tokio::test]
    async fn generated_question_label_is_removed() {
        let provider = MockAIProvider::new().with_response("Pergunta Gerada: E aí, qual seu nível?");

        let question = interpreter(provider)
            .generate_prompt(&prompt_request(false))
            .await
            .unwrap();

        assert_eq!(question, "E aí, qual seu nível?");
    }

    #[tokio::test]
    async fn empty_generated_question_is_an_error() {
        let provider = MockAIProvider::new().with_response("   ");

        let result = interpreter(provider).generate_prompt(&prompt_request(false)).await;

        assert!(matches!(result, Err(InterpreterError::EmptyResponse)));
    }
}
