//! Interactive console.
//!
//! Engine commands run synchronously on the input thread. Suggestion and
//! coaching requests are spawned onto the runtime and post their results to
//! a shared [`AdviceBoard`], so the player can keep completing challenges
//! while the Guild thinks. `wait` blocks until every outstanding request
//! has landed.

use std::io::{self, BufRead, Write};
use std::sync::Arc;

use chrono::Utc;
use colored::Colorize;
use lr_core::{Attribute, ChallengeDraft, Difficulty, Player};
use lr_guild::{AdviceBoard, Advisor, SuggestionBatch};
use lr_progression::{ProgressionEngine, SnapshotStore};
use tokio::runtime::Handle;
use tokio::sync::Mutex;
use tokio::task::JoinHandle;

use crate::commands::{describe_engine_error, resolve_challenge};
use crate::render;

const HELP: &str = "\
  register <name>             Create an adventurer
  status                      Show your character sheet
  list                        List challenges
  add [attr] [diff] <title>   Add a challenge (default: discipline, easy)
  done <n|id>                 Complete a challenge for today
  remove <n|id>               Remove a challenge
  suggest [attr]              Ask the Guild for quests (default: weakest attribute)
  quests                      Show suggested quests
  accept <n|title>            Accept a suggested quest
  coach                       Ask the Guild Master for advice
  advice                      Show the latest advice
  wait                        Wait for pending Guild requests
  logout                      Sign out and delete your profile
  quit                        Leave the console";

const PROMPT: &str = "> ";

/// A console session over an engine and an advisor.
pub struct Console<S, A> {
    engine: ProgressionEngine<S>,
    advisor: A,
    board: Arc<Mutex<AdviceBoard>>,
    runtime: Handle,
    pending: Vec<JoinHandle<()>>,
    finished: bool,
}

impl<S, A> Console<S, A>
where
    S: SnapshotStore,
    A: Advisor + Clone + Send + Sync + 'static,
{
    pub fn new(engine: ProgressionEngine<S>, advisor: A, runtime: Handle) -> Self {
        Self {
            engine,
            advisor,
            board: Arc::new(Mutex::new(AdviceBoard::new())),
            runtime,
            pending: Vec::new(),
            finished: false,
        }
    }

    /// Resume the stored profile and return a greeting.
    pub fn start(&mut self) -> String {
        match self.engine.resume(Utc::now()) {
            Ok(Some(player)) => format!(
                "  Welcome back, {} (level {}).",
                player.name, player.stats.level
            ),
            Ok(None) => "  No adventurer yet. Type 'register <name>' to begin.".to_string(),
            Err(e) => format!("  {}", describe_engine_error(&e)),
        }
    }

    /// Read commands from `input` until `quit` or end of input, writing
    /// every reply to `output`.
    pub fn run(&mut self, input: impl BufRead, mut output: impl Write) -> io::Result<()> {
        writeln!(output, "  {} LifeRPG", "Starting".bold())?;
        writeln!(output, "{}", self.start())?;
        writeln!(output, "  Type 'help' for commands, 'quit' to exit.\n")?;

        let mut lines = input.lines();
        while !self.finished {
            write!(output, "{PROMPT}")?;
            output.flush()?;
            let Some(line) = lines.next() else {
                break;
            };
            let line = line?;
            if line.trim().is_empty() {
                continue;
            }
            match self.process(&line) {
                Ok(reply) if reply.is_empty() => {}
                Ok(reply) => writeln!(output, "{reply}\n")?,
                Err(e) => writeln!(output, "{}\n", e.yellow())?,
            }
        }

        let pending = self.pending();
        if pending > 0 {
            writeln!(output, "  Leaving {pending} Guild request(s) unanswered.")?;
        }
        Ok(())
    }

    /// Handle one line of input.
    pub fn process(&mut self, input: &str) -> Result<String, String> {
        let input = input.trim();
        let (command, args) = match input.split_once(char::is_whitespace) {
            Some((command, args)) => (command, args.trim()),
            None => (input, ""),
        };

        match command.to_lowercase().as_str() {
            "help" | "?" => Ok(HELP.to_string()),
            "register" => self.register(args),
            "status" | "s" => Ok(render::status(self.player()?)),
            "list" | "ls" => Ok(render::challenges(self.player()?)),
            "add" => self.add(args),
            "done" | "complete" => self.complete(args),
            "remove" | "rm" => self.remove(args),
            "suggest" => self.suggest(args),
            "quests" => Ok(self.quests()),
            "accept" => self.accept(args),
            "coach" => self.coach(),
            "advice" => Ok(self.advice()),
            "wait" => Ok(self.wait()),
            "logout" => self.logout(),
            "quit" | "q" | "exit" => {
                self.finished = true;
                Ok("  Farewell, adventurer.".to_string())
            }
            other => Err(format!(
                "unknown command '{other}'. Type 'help' for commands."
            )),
        }
    }

    /// Number of Guild requests still running.
    pub fn pending(&mut self) -> usize {
        self.pending.retain(|h| !h.is_finished());
        self.pending.len()
    }

    fn player(&self) -> Result<&Player, String> {
        self.engine
            .player()
            .ok_or_else(|| "No adventurer signed in. Use 'register <name>'.".to_string())
    }

    fn register(&mut self, name: &str) -> Result<String, String> {
        if name.is_empty() {
            return Err("usage: register <name>".into());
        }
        let player = self
            .engine
            .register(name, Utc::now())
            .map_err(|e| describe_engine_error(&e))?;
        Ok(format!("  Welcome, {}!\n\n{}", player.name, render::status(player)))
    }

    fn add(&mut self, args: &str) -> Result<String, String> {
        let mut words = args.split_whitespace().peekable();
        let mut attribute = Attribute::Discipline;
        let mut difficulty = Difficulty::Easy;
        if let Some(a) = words.peek().and_then(|w| Attribute::parse(w)) {
            attribute = a;
            words.next();
        }
        if let Some(word) = words.peek()
            && Difficulty::ALL
                .iter()
                .any(|d| d.name().eq_ignore_ascii_case(word))
        {
            difficulty = Difficulty::parse_lenient(word);
            words.next();
        }
        let title = words.collect::<Vec<_>>().join(" ");
        if title.is_empty() {
            return Err("usage: add [attribute] [difficulty] <title>".into());
        }

        let draft = ChallengeDraft::new(title, attribute, difficulty);
        match self
            .engine
            .add_challenge(draft)
            .map_err(|e| describe_engine_error(&e))?
        {
            Some(id) => Ok(format!("  Added {id} ({attribute}, {difficulty}).")),
            None => Ok("  Nothing added.".to_string()),
        }
    }

    fn complete(&mut self, args: &str) -> Result<String, String> {
        let Some(id) = resolve_challenge(self.player()?, args) else {
            return Ok(format!("  No challenge matches '{args}'."));
        };
        let completion = self
            .engine
            .complete(id)
            .map_err(|e| describe_engine_error(&e))?;
        Ok(render::completion(self.player()?, &completion))
    }

    fn remove(&mut self, args: &str) -> Result<String, String> {
        let Some(id) = resolve_challenge(self.player()?, args) else {
            return Ok(format!("  No challenge matches '{args}'."));
        };
        self.engine
            .remove_challenge(id)
            .map_err(|e| describe_engine_error(&e))?;
        Ok("  Removed.".to_string())
    }

    fn suggest(&mut self, args: &str) -> Result<String, String> {
        let stats = self.player()?.stats.clone();
        let focus = if args.is_empty() {
            stats.attributes.weakest()
        } else {
            Attribute::parse(args).ok_or_else(|| format!("unknown attribute '{args}'"))?
        };

        let advisor = self.advisor.clone();
        let board = Arc::clone(&self.board);
        self.pending.push(self.runtime.spawn(async move {
            let proposals = advisor.suggest_challenges(stats.level, focus).await;
            board
                .lock()
                .await
                .post_suggestions(SuggestionBatch { focus, proposals });
        }));
        Ok(format!(
            "  The Guild is preparing quests for {focus}. Type 'quests' to see them."
        ))
    }

    fn quests(&self) -> String {
        let board = self.board.blocking_lock();
        match board.suggestions() {
            Some(batch) => render::suggestions(batch),
            None if !self.pending.iter().all(|h| h.is_finished()) => {
                "  The Guild is still thinking...".to_string()
            }
            None => "  No quests on the board. Try 'suggest'.".to_string(),
        }
    }

    fn accept(&mut self, args: &str) -> Result<String, String> {
        if args.is_empty() {
            return Err("usage: accept <number|title>".into());
        }
        self.player()?;

        let taken = {
            let mut board = self.board.blocking_lock();
            match args.parse::<usize>().ok().and_then(|n| n.checked_sub(1)) {
                Some(index) => board.take_proposal_at(index),
                None => board.take_proposal(args),
            }
        };
        let Some((proposal, focus)) = taken else {
            return Ok(format!("  No suggested quest matches '{args}'."));
        };

        match self
            .engine
            .accept_proposal(&proposal, focus)
            .map_err(|e| describe_engine_error(&e))?
        {
            Some(_) => Ok(format!("  Accepted {} ({focus}).", proposal.title)),
            None => Ok("  That quest has no title; skipped.".to_string()),
        }
    }

    fn coach(&mut self) -> Result<String, String> {
        let attributes = self.player()?.stats.attributes;
        let advisor = self.advisor.clone();
        let board = Arc::clone(&self.board);
        self.pending.push(self.runtime.spawn(async move {
            let advice = advisor.coaching_advice(attributes).await;
            board.lock().await.post_advice(advice);
        }));
        Ok("  The Guild Master is pondering. Type 'advice' to hear it.".to_string())
    }

    fn advice(&self) -> String {
        match self.board.blocking_lock().advice() {
            Some(text) => render::advice(text),
            None => "  The Guild Master has nothing to say yet. Try 'coach'.".to_string(),
        }
    }

    fn wait(&mut self) -> String {
        let handles = std::mem::take(&mut self.pending);
        let count = handles.len();
        self.runtime.block_on(async {
            for handle in handles {
                if let Err(e) = handle.await {
                    tracing::error!("guild request task failed: {e}");
                }
            }
        });
        format!("  {count} request(s) finished.")
    }

    fn logout(&mut self) -> Result<String, String> {
        self.engine
            .logout()
            .map_err(|e| describe_engine_error(&e))?;
        self.board.blocking_lock().clear();
        Ok("  Logged out. Your profile has been deleted.".to_string())
    }
}
