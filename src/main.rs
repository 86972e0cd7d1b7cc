//! Terminal driver: chat through the profile dialogue, then list matches.

use std::sync::Arc;
use std::time::Duration;

use tokio::io::{AsyncBufReadExt, BufReader};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use gg_matchmaker::adapters::ai::{GeminiConfig, GeminiProvider, LlmTextInterpreter};
use gg_matchmaker::adapters::memory::{
    InMemoryAccountDirectory, InMemoryProfileRepository, InMemoryRatingRepository,
};
use gg_matchmaker::adapters::storage::{FileProfileRepository, InMemoryDialogueSessionStore};
use gg_matchmaker::application::{
    DialogueSettings, DialogueStep, FindMatchesHandler, FindMatchesQuery, ProfileDialogueHandler,
    SendDialogueMessageCommand,
};
use gg_matchmaker::config::{AiConfig, AppConfig, LogFormat, RuntimeConfig};
use gg_matchmaker::domain::foundation::UserId;
use gg_matchmaker::domain::matching::{CompatibilityScorer, MatchRanker};
use gg_matchmaker::ports::{ProfileRepository, TextInterpreter};

const PURGE_INTERVAL: Duration = Duration::from_secs(60);
const QUIT_COMMAND: &str = "/sair";

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let config = AppConfig::load()?;
    config.validate()?;
    init_tracing(&config.runtime);

    let username = std::env::var("USER").unwrap_or_else(|_| "jogador".to_string());
    let user_id = UserId::new(format!("terminal-{}", username))?;

    let profiles: Arc<dyn ProfileRepository> = match &config.runtime.data_dir {
        Some(dir) => Arc::new(FileProfileRepository::new(dir.join("profiles"))),
        None => Arc::new(InMemoryProfileRepository::new()),
    };
    let accounts = Arc::new(InMemoryAccountDirectory::new());
    accounts.register(user_id.clone(), username).await;

    let dialogue = Arc::new(
        ProfileDialogueHandler::new(
            Arc::new(InMemoryDialogueSessionStore::new(config.dialogue.session_ttl_secs)),
            profiles.clone(),
            accounts,
            build_interpreter(&config.ai)?,
        )
        .with_settings(DialogueSettings {
            interpreter_timeout: config.ai.interpreter_timeout(),
            max_extracted_len: config.dialogue.max_extracted_len,
        }),
    );
    spawn_session_purge(dialogue.clone());

    if !run_dialogue(&dialogue, &user_id).await? {
        return Ok(());
    }

    let ranker = MatchRanker::new(
        CompatibilityScorer::new(config.matching.weights),
        config.matching.result_limit,
    );
    let matches = FindMatchesHandler::new(profiles, Arc::new(InMemoryRatingRepository::new()), ranker)
        .handle(FindMatchesQuery { user_id })
        .await?;

    println!("\n{}", matches.message);
    for candidate in matches.outcome.matches() {
        println!(
            "  [{}] {} ({}) {:.1} - {}",
            candidate.initial, candidate.display_name, candidate.game, candidate.score, candidate.rationale
        );
    }
    Ok(())
}

/// Runs the dialogue on stdin/stdout. Returns false when the player quits early.
async fn run_dialogue(
    dialogue: &ProfileDialogueHandler,
    user_id: &UserId,
) -> Result<bool, Box<dyn std::error::Error>> {
    let mut lines = BufReader::new(tokio::io::stdin()).lines();
    let mut message = String::new();

    loop {
        match dialogue
            .handle(SendDialogueMessageCommand::new(user_id.clone(), message.as_str()))
            .await
        {
            Ok(DialogueStep::Prompt { text, .. }) => println!("GG: {}", text),
            Ok(DialogueStep::Completed { text, .. }) => {
                println!("GG: {}", text);
                return Ok(true);
            }
            Err(err) => {
                tracing::error!(error = %err, "Dialogue step failed");
                println!("GG: Ops, algo deu errado. Tenta de novo?");
            }
        }

        match lines.next_line().await? {
            Some(line) if line.trim() == QUIT_COMMAND => return Ok(false),
            Some(line) => message = line,
            None => return Ok(false),
        }
    }
}

fn build_interpreter(
    ai: &AiConfig,
) -> Result<Option<Arc<dyn TextInterpreter>>, Box<dyn std::error::Error>> {
    let Some(api_key) = ai.gemini_api_key.as_ref().filter(|_| ai.has_gemini()) else {
        tracing::info!("No Gemini API key, using scripted questions");
        return Ok(None);
    };

    let provider = GeminiProvider::new(
        GeminiConfig::new(api_key.as_str())
            .with_model(&ai.model)
            .with_base_url(&ai.base_url)
            .with_timeout(ai.request_timeout()),
    )?;
    tracing::info!(model = %ai.model, "Gemini interpreter enabled");
    Ok(Some(Arc::new(LlmTextInterpreter::new(Arc::new(provider)))))
}

fn spawn_session_purge(dialogue: Arc<ProfileDialogueHandler>) {
    tokio::spawn(async move {
        let mut interval = tokio::time::interval(PURGE_INTERVAL);
        loop {
            interval.tick().await;
            if let Err(err) = dialogue.purge_expired_sessions().await {
                tracing::warn!(error = %err, "Session purge failed");
            }
        }
    });
}

fn init_tracing(runtime: &RuntimeConfig) {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(&runtime.log_level));
    let registry = tracing_subscriber::registry().with(filter);

    match runtime.log_format {
        LogFormat::Json => registry
            .with(tracing_subscriber::fmt::layer().json().with_writer(std::io::stderr))
            .init(),
        LogFormat::Pretty => registry
            .with(tracing_subscriber::fmt::layer().with_target(false).with_writer(std::io::stderr))
            .init(),
    }
}
