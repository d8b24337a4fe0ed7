pub mod challenge;
pub mod guild;
pub mod play;
pub mod session;
pub mod status;

use std::path::PathBuf;

use chrono::Utc;
use lr_core::{ChallengeId, Player};
use lr_guild::{AdvisorConfig, GeminiAdvisor};
use lr_progression::{EngineConfig, EngineError, JsonFileStore, ProgressionEngine};

/// File holding the last batch of quest suggestions between commands.
const QUEST_BOARD_FILE: &str = "quest-board.json";

/// Settings shared by every command.
pub struct Context {
    pub data_dir: PathBuf,
    pub config: EngineConfig,
}

impl Context {
    /// Resolve the data directory, falling back to the platform default.
    pub fn new(data_dir: Option<PathBuf>, config: EngineConfig) -> Result<Self, String> {
        let data_dir = data_dir
            .or_else(|| dirs::data_dir().map(|d| d.join("liferpg")))
            .ok_or("could not determine a data directory; pass --data-dir")?;
        Ok(Self { data_dir, config })
    }

    pub fn quest_board_path(&self) -> PathBuf {
        self.data_dir.join(QUEST_BOARD_FILE)
    }

    /// A fresh engine over the profile store; nothing is loaded yet.
    pub fn engine(&self) -> ProgressionEngine<JsonFileStore> {
        let store = JsonFileStore::new(&self.data_dir, &self.config.storage_key);
        ProgressionEngine::new(store, self.config.clone())
    }

    /// An engine with the stored profile resumed and the daily reset applied.
    pub fn session(&self) -> Result<ProgressionEngine<JsonFileStore>, String> {
        let mut engine = self.engine();
        match engine.resume(Utc::now()) {
            Ok(Some(_)) => Ok(engine),
            Ok(None) => Err("no adventurer found. Create one with `liferpg register <name>`".into()),
            Err(e) => Err(describe_engine_error(&e)),
        }
    }

    pub fn advisor(&self) -> Result<GeminiAdvisor, String> {
        GeminiAdvisor::new(AdvisorConfig::from_env())
            .map_err(|e| format!("failed to set up advisor: {e}"))
    }
}

pub fn describe_engine_error(e: &EngineError) -> String {
    match e {
        EngineError::CorruptSnapshot(inner) => format!(
            "saved profile is unreadable ({inner}). Run `liferpg register <name>` to start over"
        ),
        other => other.to_string(),
    }
}

/// Resolve a 1-based list number or a unique id prefix.
pub fn resolve_challenge(player: &Player, reference: &str) -> Option<ChallengeId> {
    let reference = reference.trim();
    if let Ok(n) = reference.parse::<usize>()
        && let Some(challenge) = n.checked_sub(1).and_then(|i| player.challenges.get(i))
    {
        return Some(challenge.id);
    }
    player.find_by_prefix(reference).map(|c| c.id)
}

/// Runtime for advisor calls made outside the console.
pub fn runtime() -> Result<tokio::runtime::Runtime, String> {
    tokio::runtime::Runtime::new().map_err(|e| format!("failed to start async runtime: {e}"))
}
