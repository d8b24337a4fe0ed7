use super::Context;
use crate::render;

pub fn status(ctx: &Context) -> Result<(), String> {
    let engine = ctx.session()?;
    let player = engine.player().ok_or("no adventurer signed in")?;
    println!("{}", render::status(player));
    Ok(())
}

pub fn list(ctx: &Context) -> Result<(), String> {
    let engine = ctx.session()?;
    let player = engine.player().ok_or("no adventurer signed in")?;
    println!("{}", render::challenges(player));
    if !player.challenges.is_empty() {
        println!();
        println!(
            "  {}/{} done today",
            player.completed_today(),
            player.challenges.len()
        );
    }
    Ok(())
}
