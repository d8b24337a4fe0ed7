//! Text rendering shared by the one-shot commands and the console.

use colored::Colorize;
use comfy_table::{ContentArrangement, Table};
use lr_core::{Difficulty, Player, PlayerStats, QuestProposal};
use lr_guild::SuggestionBatch;
use lr_progression::{Completion, SkipReason};

const BAR_WIDTH: usize = 20;

/// A fixed-width progress bar, e.g. `[#####---------------]`.
pub fn bar(fraction: f64) -> String {
    let filled = (fraction.clamp(0.0, 1.0) * BAR_WIDTH as f64).round() as usize;
    format!("[{}{}]", "#".repeat(filled), "-".repeat(BAR_WIDTH - filled))
}

fn hp_fraction(stats: &PlayerStats) -> f64 {
    if stats.max_hp == 0 {
        return 0.0;
    }
    f64::from(stats.hp) / f64::from(stats.max_hp)
}

/// Character sheet: name, level, bars, coins, and attributes.
pub fn status(player: &Player) -> String {
    let s = &player.stats;
    let mut out = String::new();
    out.push_str(&format!(
        "  {} (level {})\n",
        player.name.bold(),
        s.level
    ));
    out.push_str(&format!(
        "  HP   {} {}/{}\n",
        bar(hp_fraction(s)).red(),
        s.hp,
        s.max_hp
    ));
    out.push_str(&format!(
        "  EXP  {} {}/{}\n",
        bar(s.exp_fraction()).cyan(),
        s.exp,
        s.max_exp
    ));
    out.push_str(&format!("  Coins: {}\n", s.coins.to_string().yellow()));
    out.push('\n');
    for (attribute, value) in s.attributes.iter() {
        out.push_str(&format!("  {:<13}{value}\n", attribute.name()));
    }
    out.push_str(&format!(
        "\n  Today: {}/{} challenges done",
        player.completed_today(),
        player.challenges.len()
    ));
    out
}

fn difficulty_label(difficulty: Difficulty) -> String {
    match difficulty {
        Difficulty::Easy => difficulty.name().green().to_string(),
        Difficulty::Medium => difficulty.name().yellow().to_string(),
        Difficulty::Hard => difficulty.name().red().to_string(),
    }
}

/// Numbered challenge table, or a hint if there are none.
pub fn challenges(player: &Player) -> String {
    if player.challenges.is_empty() {
        return "  No challenges yet. Add one with `add`.".to_string();
    }

    let mut table = Table::new();
    table.set_content_arrangement(ContentArrangement::Dynamic);
    table.set_header(vec!["#", "Id", "Challenge", "Attr", "Difficulty", "Streak", "Today"]);

    for (i, c) in player.challenges.iter().enumerate() {
        let title = match &c.description {
            Some(desc) => format!("{}\n{}", c.title, desc.dimmed()),
            None => c.title.clone(),
        };
        let done = if c.completed_today { "done" } else { "" };
        table.add_row(vec![
            (i + 1).to_string(),
            c.id.to_string(),
            title,
            c.attribute.abbreviation().to_string(),
            difficulty_label(c.difficulty),
            c.streak.to_string(),
            done.to_string(),
        ]);
    }

    table.to_string()
}

/// One line per outcome of a completion.
pub fn completion(player: &Player, completion: &Completion) -> String {
    match completion {
        Completion::Applied {
            challenge,
            reward,
            levels_gained,
        } => {
            let title = player
                .challenge(*challenge)
                .map(|c| c.title.as_str())
                .unwrap_or("challenge");
            let mut out = format!("  {} {title}: {reward}", "Completed".green().bold());
            for level in levels_gained {
                out.push_str(&format!(
                    "\n  {} You reached level {level}!",
                    "LEVEL UP!".yellow().bold()
                ));
            }
            out
        }
        Completion::Skipped(SkipReason::AlreadyCompleted) => {
            "  Already completed today. Come back tomorrow.".to_string()
        }
        Completion::Skipped(SkipReason::UnknownChallenge) => "  No such challenge.".to_string(),
    }
}

fn proposal_line(index: usize, proposal: &QuestProposal) -> String {
    let mut line = format!(
        "  {}. {} [{}]",
        index + 1,
        proposal.title.bold(),
        difficulty_label(proposal.difficulty)
    );
    if !proposal.description.is_empty() {
        line.push_str(&format!("\n     {}", proposal.description));
    }
    line
}

/// Numbered suggestions with their focus attribute.
pub fn suggestions(batch: &SuggestionBatch) -> String {
    if batch.proposals.is_empty() {
        return "  The Guild has no quests for you right now.".to_string();
    }
    let mut out = format!("  Quests for {}:\n", batch.focus.to_string().bold());
    let lines: Vec<String> = batch
        .proposals
        .iter()
        .enumerate()
        .map(|(i, p)| proposal_line(i, p))
        .collect();
    out.push_str(&lines.join("\n"));
    out
}

/// Guild Master advice.
pub fn advice(text: &str) -> String {
    format!("  {} \"{text}\"", "Guild Master:".bold())
}

#[cfg(test)]
mod tests {
    use chrono::Utc;
    use lr_core::Attribute;

    use super::*;

    #[test]
    fn bar_bounds() {
        assert_eq!(bar(0.0), format!("[{}]", "-".repeat(20)));
        assert_eq!(bar(1.0), format!("[{}]", "#".repeat(20)));
        assert_eq!(bar(0.5).matches('#').count(), 10);
        assert_eq!(bar(7.0), bar(1.0));
    }

    #[test]
    fn status_shows_every_attribute() {
        let player = Player::new("aria", Utc::now());
        let text = status(&player);
        for attribute in Attribute::ALL {
            assert!(text.contains(attribute.name()));
        }
        assert!(text.contains("100/100"));
        assert!(text.contains("0/0 challenges done"));
    }

    #[test]
    fn empty_suggestions_message() {
        let batch = SuggestionBatch {
            focus: Attribute::Social,
            proposals: Vec::new(),
        };
        assert!(suggestions(&batch).contains("no quests"));
    }
}
