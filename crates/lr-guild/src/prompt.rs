//! Prompt text and response schemas sent to the text service.

use lr_core::{Attribute, AttributeScores};
use serde_json::{Value, json};

/// Prompt asking for three daily habits training `focus` at `level`.
pub fn suggestion_prompt(level: u32, focus: Attribute) -> String {
    format!(
        "Generate 3 specific, actionable daily RPG-style habits (quests) to improve the \
         attribute \"{focus}\" for a level {level} player. Give each one a short title, a \
         one-sentence description, and a difficulty of Easy, Medium, or Hard."
    )
}

/// Prompt asking a guild master for two sentences of advice.
pub fn coaching_prompt(attributes: &AttributeScores) -> String {
    let scores = attributes
        .iter()
        .map(|(attr, value)| format!("{attr}: {value}"))
        .collect::<Vec<_>>()
        .join(", ");
    format!(
        "Act as a wise RPG Guild Master. The player's attributes are {scores}. \
         Give them 2 sentences of motivating advice on what to focus on next."
    )
}

/// JSON schema constraining suggestion replies to an array of quests.
pub fn suggestion_schema() -> Value {
    json!({
        "type": "ARRAY",
        "items": {
            "type": "OBJECT",
            "properties": {
                "title": { "type": "STRING" },
                "description": { "type": "STRING" },
                "difficulty": {
                    "type": "STRING",
                    "enum": ["Easy", "Medium", "Hard"]
                }
            },
            "required": ["title", "description", "difficulty"]
        }
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn suggestion_prompt_names_focus_and_level() {
        let prompt = suggestion_prompt(4, Attribute::Discipline);
        assert!(prompt.contains("\"Discipline\""));
        assert!(prompt.contains("level 4"));
        assert!(prompt.contains("3"));
    }

    #[test]
    fn coaching_prompt_lists_every_attribute() {
        let mut scores = AttributeScores::default();
        scores.set(Attribute::Social, 7);
        let prompt = coaching_prompt(&scores);
        for attr in Attribute::ALL {
            assert!(prompt.contains(attr.name()), "missing {attr}");
        }
        assert!(prompt.contains("Social: 7"));
    }

    #[test]
    fn schema_requires_all_fields() {
        let schema = suggestion_schema();
        assert_eq!(schema["type"], "ARRAY");
        assert_eq!(schema["items"]["required"].as_array().map(Vec::len), Some(3));
    }
}
