//! Scripted bot lines used when no generated prompt is available.

use crate::domain::profile::ProfileField;

/// Opening line, sent once at the start of a session.
pub const GREETING: &str = "E aí! Sou o GG, seu guia gente boa pra montar um perfil gamer daora e achar seu squad perfeito! Para começar,";

/// Name used in the closing message when nothing better is known.
pub const DEFAULT_PLAYER_NAME: &str = "Jogador(a)";

const NAME_PLACEHOLDER: &str = "{nome}";
const GAME_PLACEHOLDER: &str = "{jogo}";
const NAME_FALLBACK: &str = "jogador(a)";
const GAME_FALLBACK: &str = "seu jogo";

/// What the script knows about the player so far.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ScriptContext {
    pub display_name: Option<String>,
    pub primary_game: Option<String>,
}

/// Fixed question templates for the profile dialogue.
#[derive(Debug, Clone, Copy, Default)]
pub struct QuestionScript;

impl QuestionScript {
    /// Raw template for a field, with `{nome}` and `{jogo}` placeholders.
    pub fn template(&self, field: ProfileField) -> &'static str {
        match field {
            ProfileField::DisplayName => {
                "como a galera te chama nas partidas, ou qual seu nick preferido?"
            }
            ProfileField::PrimaryGame => {
                "show de bola, {nome}! E qual é O JOGO que tá na sua mira agora, aquele que você mais quer encontrar uma galera pra fechar time?"
            }
            ProfileField::SkillLevel => {
                "entendi! No {jogo}, você se considera mais tranquilo(a), pegando as manhas, ou já é praticamente uma lenda viva?"
            }
            ProfileField::PlayStyle => {
                "massa! E no {jogo}, qual é a sua pegada? Mais pra se divertir e dar umas boas risadas, pra competir valendo e subir no ranking, ou focado em zerar o game e fazer todas as missões?"
            }
            ProfileField::Availability => {
                "daora! E falando em jogatina, quando é que geralmente pinta aquele seu tempo livre pra detonar nos games?"
            }
            ProfileField::Gender => {
                "pra gente se conhecer um pouquinho melhor e ajudar a encontrar o pessoal certo pra você, como você se identifica em termos de gênero? (Ex: Mulher, Homem, Não-binário, etc. Fique à vontade pra responder como se sentir melhor!)"
            }
            ProfileField::CommunicationStyle => {
                "e pra fechar com chave de ouro: durante a partida, como você curte a comunicação? Mais na concentração total no game, só o essencial pra estratégia, uma resenha de boa com a galera, ou aquele caos divertido com música e muita zoeira?"
            }
        }
    }

    /// Template for a field with the placeholders filled in.
    pub fn question(&self, field: ProfileField, context: &ScriptContext) -> String {
        fill(self.template(field), context)
    }

    /// Prefixes the greeting to the first question of a session.
    pub fn with_greeting(&self, question: &str) -> String {
        format!("{} {}", GREETING, question.trim())
    }

    pub fn closing(&self, name: &str) -> String {
        format!(
            "Aí sim, {}! Seu perfil gamer tá completíssimo e no jeito! GG WP! Agora é só partir pro abraço e encontrar seus novos parceiros de jogatina!",
            name
        )
    }
}

fn fill(template: &str, context: &ScriptContext) -> String {
    let name = stated(&context.display_name).unwrap_or(NAME_FALLBACK);
    let game = stated(&context.primary_game).unwrap_or(GAME_FALLBACK);
    template
        .replace(NAME_PLACEHOLDER, name)
        .replace(GAME_PLACEHOLDER, game)
}

fn stated(value: &Option<String>) -> Option<&str> {
    value.as_deref().map(str::trim).filter(|v| !v.is_empty())
}
