use std::fs;

use chrono::Utc;
use colored::Colorize;
use lr_progression::EngineError;

use super::{Context, describe_engine_error};
use crate::render;

pub fn register(ctx: &Context, name: &str) -> Result<(), String> {
    let mut engine = ctx.engine();
    match engine.resume(Utc::now()) {
        Ok(Some(existing)) => {
            return Err(format!(
                "already playing as '{}'. Run `liferpg logout` first",
                existing.name
            ));
        }
        Ok(None) => {}
        Err(EngineError::CorruptSnapshot(e)) => {
            tracing::warn!("replacing unreadable profile: {e}");
        }
        Err(e) => return Err(describe_engine_error(&e)),
    }

    let player = engine
        .register(name, Utc::now())
        .map_err(|e| describe_engine_error(&e))?;
    println!("  {} Welcome, {}!", "Registered.".green().bold(), player.name);
    println!();
    println!("{}", render::status(player));
    Ok(())
}

pub fn logout(ctx: &Context) -> Result<(), String> {
    let mut engine = ctx.engine();
    let name = match engine.resume(Utc::now()) {
        Ok(Some(player)) => Some(player.name.clone()),
        Ok(None) => None,
        Err(EngineError::CorruptSnapshot(_)) => None,
        Err(e) => return Err(describe_engine_error(&e)),
    };

    engine.logout().map_err(|e| describe_engine_error(&e))?;
    match fs::remove_file(ctx.quest_board_path()) {
        Ok(()) => {}
        Err(e) if e.kind() == std::io::ErrorKind::NotFound => {}
        Err(e) => tracing::warn!("could not remove quest board: {e}"),
    }

    match name {
        Some(name) => println!("  Farewell, {name}. Your profile has been deleted."),
        None => println!("  No adventurer was signed in."),
    }
    Ok(())
}
