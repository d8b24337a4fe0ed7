use colored::Colorize;
use lr_core::{Attribute, ChallengeDraft, Difficulty};

use super::{Context, describe_engine_error, resolve_challenge};
use crate::render;

pub fn add(
    ctx: &Context,
    title: &str,
    attribute: Attribute,
    difficulty: &str,
    description: Option<&str>,
) -> Result<(), String> {
    let mut engine = ctx.session()?;
    let mut draft = ChallengeDraft::new(title, attribute, Difficulty::parse_lenient(difficulty));
    if let Some(desc) = description {
        draft = draft.with_description(desc);
    }

    match engine
        .add_challenge(draft)
        .map_err(|e| describe_engine_error(&e))?
    {
        Some(id) => {
            let title = engine
                .player()
                .and_then(|p| p.challenge(id))
                .map(|c| c.title.clone())
                .unwrap_or_default();
            println!("  {} {title} ({id})", "Added".green().bold());
        }
        None => println!("  Nothing added: a challenge needs a title."),
    }
    Ok(())
}

pub fn complete(ctx: &Context, reference: &str) -> Result<(), String> {
    let mut engine = ctx.session()?;
    let player = engine.player().ok_or("no adventurer signed in")?;
    let Some(id) = resolve_challenge(player, reference) else {
        println!("  No challenge matches '{reference}'.");
        return Ok(());
    };

    let completion = engine.complete(id).map_err(|e| describe_engine_error(&e))?;
    let player = engine.player().ok_or("no adventurer signed in")?;
    println!("{}", render::completion(player, &completion));
    Ok(())
}

pub fn remove(ctx: &Context, reference: &str) -> Result<(), String> {
    let mut engine = ctx.session()?;
    let player = engine.player().ok_or("no adventurer signed in")?;
    let Some(id) = resolve_challenge(player, reference) else {
        println!("  No challenge matches '{reference}'.");
        return Ok(());
    };
    let title = player
        .challenge(id)
        .map(|c| c.title.clone())
        .unwrap_or_default();

    if engine
        .remove_challenge(id)
        .map_err(|e| describe_engine_error(&e))?
    {
        println!("  {} {title}", "Removed".red().bold());
    }
    Ok(())
}
