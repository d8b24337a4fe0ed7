use std::io;

use super::{Context, runtime};
use crate::console::Console;

pub fn run(ctx: &Context) -> Result<(), String> {
    let rt = runtime()?;
    let advisor = ctx.advisor()?;
    let mut console = Console::new(ctx.engine(), advisor, rt.handle().clone());
    console
        .run(io::stdin().lock(), io::stdout())
        .map_err(|e| e.to_string())
}
