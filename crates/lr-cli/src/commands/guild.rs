use std::fs;
use std::io::ErrorKind;

use colored::Colorize;
use lr_core::Attribute;
use lr_guild::{AdviceBoard, Advisor, SuggestionBatch, suggest_for};

use super::{Context, describe_engine_error, runtime};
use crate::render;

pub fn suggest(ctx: &Context, focus: Option<Attribute>) -> Result<(), String> {
    let engine = ctx.session()?;
    let player = engine.player().ok_or("no adventurer signed in")?;
    let advisor = ctx.advisor()?;
    let rt = runtime()?;

    println!("  Consulting the Guild...");
    let batch = match focus {
        Some(focus) => SuggestionBatch {
            focus,
            proposals: rt.block_on(advisor.suggest_challenges(player.stats.level, focus)),
        },
        None => rt.block_on(suggest_for(&advisor, &player.stats)),
    };

    println!("{}", render::suggestions(&batch));
    if !batch.proposals.is_empty() {
        println!();
        println!("  Accept with `liferpg accept <number or title>`.");
    }
    save_board(ctx, &batch)
}

pub fn accept(ctx: &Context, quests: &[String]) -> Result<(), String> {
    let mut engine = ctx.session()?;
    let mut board = load_board(ctx)?;

    // Numbers refer to the listing as printed, so map them to titles first.
    let titles: Vec<String> = {
        let listed = board
            .suggestions()
            .map(|b| b.proposals.as_slice())
            .unwrap_or_default();
        quests
            .iter()
            .map(|q| {
                q.trim()
                    .parse::<usize>()
                    .ok()
                    .and_then(|n| n.checked_sub(1))
                    .and_then(|i| listed.get(i))
                    .map(|p| p.title.clone())
                    .unwrap_or_else(|| q.clone())
            })
            .collect()
    };

    for title in &titles {
        let Some((proposal, focus)) = board.take_proposal(title) else {
            println!("  No suggested quest matches '{title}'.");
            continue;
        };
        match engine
            .accept_proposal(&proposal, focus)
            .map_err(|e| describe_engine_error(&e))?
        {
            Some(_) => println!(
                "  {} {} ({focus})",
                "Accepted".green().bold(),
                proposal.title
            ),
            None => println!("  Skipped a quest without a title."),
        }
    }

    match board.suggestions() {
        Some(batch) => save_board(ctx, batch),
        None => Ok(()),
    }
}

pub fn coach(ctx: &Context) -> Result<(), String> {
    let engine = ctx.session()?;
    let player = engine.player().ok_or("no adventurer signed in")?;
    let advisor = ctx.advisor()?;
    let rt = runtime()?;

    let advice = rt.block_on(advisor.coaching_advice(player.stats.attributes));
    println!("{}", render::advice(&advice));
    Ok(())
}

fn save_board(ctx: &Context, batch: &SuggestionBatch) -> Result<(), String> {
    let path = ctx.quest_board_path();
    let json = serde_json::to_string_pretty(batch)
        .map_err(|e| format!("failed to encode suggestions: {e}"))?;
    fs::create_dir_all(&ctx.data_dir)
        .and_then(|()| fs::write(&path, json))
        .map_err(|e| format!("failed to write {}: {e}", path.display()))
}

fn load_board(ctx: &Context) -> Result<AdviceBoard, String> {
    let path = ctx.quest_board_path();
    let json = match fs::read_to_string(&path) {
        Ok(json) => json,
        Err(e) if e.kind() == ErrorKind::NotFound => {
            return Err("no suggestions yet. Run `liferpg suggest` first".into());
        }
        Err(e) => return Err(format!("failed to read {}: {e}", path.display())),
    };
    let batch: SuggestionBatch = serde_json::from_str(&json)
        .map_err(|e| format!("quest board is unreadable, run `liferpg suggest` again: {e}"))?;

    let mut board = AdviceBoard::new();
    board.post_suggestions(batch);
    Ok(board)
}
