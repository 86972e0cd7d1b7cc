//! Drives a new player from first message to matches, likes and messaging.

use std::sync::Arc;

use gg_matchmaker::adapters::ai::{LlmTextInterpreter, MockAIProvider, MockError};
use gg_matchmaker::adapters::memory::{
    InMemoryAccountDirectory, InMemoryLikeRepository, InMemoryProfileRepository,
    InMemoryRatingRepository,
};
use gg_matchmaker::adapters::storage::InMemoryDialogueSessionStore;
use gg_matchmaker::application::{
    AuthorizeMessageCommand, AuthorizeMessageHandler, DialogueStep, FindMatchesHandler,
    FindMatchesQuery, ListMutualMatchesHandler, ListMutualMatchesQuery, ProfileDialogueHandler,
    RatePlayerCommand, RatePlayerHandler, RecordLikeCommand, RecordLikeHandler,
    SendDialogueMessageCommand,
};
use gg_matchmaker::domain::dialogue::{QuestionScript, ScriptContext, GREETING};
use gg_matchmaker::domain::foundation::UserId;
use gg_matchmaker::domain::matching::MatchRanker;
use gg_matchmaker::domain::profile::{PlayerProfile, ProfileField};
use gg_matchmaker::ports::{ProfileRepository, TextInterpreter};

fn id(s: &str) -> UserId {
    UserId::new(s).unwrap()
}

fn veteran(user: &str, name: &str, game: &str) -> PlayerProfile {
    PlayerProfile::new(id(user))
        .with_field(ProfileField::DisplayName, name)
        .with_field(ProfileField::PrimaryGame, game)
        .with_field(ProfileField::SkillLevel, "Intermediário")
        .with_field(ProfileField::PlayStyle, "Competitivo")
        .with_field(ProfileField::Availability, "Noites e fins de semana")
        .with_field(ProfileField::Gender, "Prefiro não dizer")
        .with_field(ProfileField::CommunicationStyle, "Só o necessário (calls estratégicas)")
        .completed()
}

async fn chat(
    handler: &ProfileDialogueHandler,
    user: &UserId,
    messages: &[&str],
) -> Vec<DialogueStep> {
    let mut steps = Vec::new();
    for message in messages {
        steps.push(
            handler
                .handle(SendDialogueMessageCommand::new(user.clone(), *message))
                .await
                .unwrap(),
        );
    }
    steps
}

#[tokio::test]
async fn scripted_dialogue_then_matches_and_messaging() {
    let profiles = Arc::new(InMemoryProfileRepository::with_profiles(vec![
        veteran("bia", "Bia", "valorant"),
        veteran("caio", "Caio", "League of Legends"),
    ]));
    let likes = Arc::new(InMemoryLikeRepository::new());
    let ratings = Arc::new(InMemoryRatingRepository::new());
    let accounts = Arc::new(InMemoryAccountDirectory::new());
    accounts.register(id("bia"), "bia_gg").await;

    let dialogue = ProfileDialogueHandler::new(
        Arc::new(InMemoryDialogueSessionStore::default()),
        profiles.clone(),
        accounts.clone(),
        None,
    );
    let lulu = id("lulu");
    let steps = chat(
        &dialogue,
        &lulu,
        &[
            "",
            "Lulu",
            "Valorant",
            "Avançado",
            "Competitivo",
            "Noites",
            "Mulher",
            "Conversa casual e social",
        ],
    )
    .await;

    for (index, field) in ProfileField::SEQUENCE.into_iter().enumerate() {
        let context = ScriptContext {
            display_name: (index >= 1).then(|| "Lulu".to_string()),
            primary_game: (index >= 2).then(|| "Valorant".to_string()),
        };
        let scripted = QuestionScript.question(field, &context);
        let expected = if index == 0 {
            QuestionScript.with_greeting(&scripted)
        } else {
            scripted
        };
        assert_eq!(steps[index].text(), expected, "prompt for {:?}", field);
    }
    assert!(steps[1..].iter().all(|s| !s.text().contains(GREETING)));
    assert!(steps[7].is_complete());
    assert!(profiles.find_by_user(&lulu).await.unwrap().unwrap().complete);

    let ratings_handler = RatePlayerHandler::new(ratings.clone(), accounts.clone());
    ratings_handler
        .handle(RatePlayerCommand {
            rater: id("caio"),
            rated: id("bia"),
            stars: 5,
            game: Some("Valorant".to_string()),
        })
        .await
        .unwrap();

    let found = FindMatchesHandler::new(profiles.clone(), ratings, MatchRanker::default())
        .handle(FindMatchesQuery {
            user_id: lulu.clone(),
        })
        .await
        .unwrap();
    let matches = found.outcome.matches();
    assert_eq!(matches.len(), 1);
    assert_eq!(matches[0].display_name, "Bia");
    assert!(matches[0].rationale.starts_with("Mesmo jogo (valorant)"));
    assert!(matches[0].rationale.contains("Bem avaliado"));

    let gate = AuthorizeMessageHandler::new(likes.clone());
    let hello = || AuthorizeMessageCommand {
        sender: lulu.clone(),
        recipient: id("bia"),
        content: "bora um x1?".to_string(),
    };
    assert!(gate.handle(hello()).await.is_err());

    let like_handler = RecordLikeHandler::new(likes.clone(), profiles.clone());
    like_handler
        .handle(RecordLikeCommand {
            liker: lulu.clone(),
            liked: id("bia"),
        })
        .await
        .unwrap();
    let back = like_handler
        .handle(RecordLikeCommand {
            liker: id("bia"),
            liked: lulu.clone(),
        })
        .await
        .unwrap();
    assert_eq!(back.mutual_with.as_deref(), Some("Lulu"));

    let mutual = ListMutualMatchesHandler::new(likes, profiles)
        .handle(ListMutualMatchesQuery {
            user_id: lulu.clone(),
        })
        .await
        .unwrap();
    assert_eq!(mutual[0].primary_game, "valorant");
    assert!(gate.handle(hello()).await.is_ok());
}

#[tokio::test]
async fn interpreter_outage_mid_dialogue_falls_back_to_raw_answers() {
    // One queue serves both calls: opening prompt, extraction, prompt, extraction, ...
    let provider = MockAIProvider::new()
        .with_response("Qual é o seu nick?")
        .with_error(MockError::Unavailable {
            message: "maintenance".to_string(),
        })
        .with_response("E o jogo?")
        .with_response("Counter-Strike 2");
    let interpreter: Arc<dyn TextInterpreter> =
        Arc::new(LlmTextInterpreter::new(Arc::new(provider.clone())));
    let profiles = Arc::new(InMemoryProfileRepository::new());

    let dialogue = ProfileDialogueHandler::new(
        Arc::new(InMemoryDialogueSessionStore::default()),
        profiles.clone(),
        Arc::new(InMemoryAccountDirectory::new()),
        Some(interpreter),
    );
    let lulu = id("lulu");
    let steps = chat(
        &dialogue,
        &lulu,
        &["", "Lulu", "jogo CS2 demais", "", "", "", "", ""],
    )
    .await;

    assert_eq!(steps[0].text(), format!("{} Qual é o seu nick?", GREETING));
    assert_eq!(steps[1].text(), "E o jogo?");
    assert!(steps[7].is_complete());
    assert!(steps[7].text().starts_with("Aí sim, Lulu!"));

    let profile = profiles.find_by_user(&lulu).await.unwrap().unwrap();
    assert!(profile.is_fully_populated());
    assert_eq!(profile.text(ProfileField::DisplayName), "Lulu");
    assert_eq!(profile.text(ProfileField::PrimaryGame), "Counter-Strike 2");
    assert_eq!(profile.text(ProfileField::SkillLevel), "Não especificado");
    // Empty answers never reach the provider: 1 opening + 6 prompts + 2 extractions
    assert_eq!(provider.call_count(), 9);
}
