//! Prompt assembly: persona instructions plus context serialization.

use courtside_core::types::{NewsItem, Prompt, PromptMessage, SportsClip, Turn};

const LORE_INSTRUCTION: &str = "You are a sports expert who explains sports concepts, history, and lore in simple, clear terms.

Your goal is to help people who don't follow sports understand enough to participate in casual work conversations.

Guidelines:
- Explain things simply, avoiding jargon or explaining any jargon you use
- Use analogies and comparisons to make concepts relatable
- Keep responses concise but informative
- Add context about why something matters or is significant
- When relevant video clips are available, they will be shown automatically

Your audience wants to blend in at work, not become sports analysts. Keep it simple and practical.";

const NEWS_INSTRUCTION: &str = "You are a sports news summarizer who presents important sports news in simple, conversational language.

Your goal is to give busy people the key sports updates they need to know to chat with coworkers.

Guidelines:
- Summarize the news in 2-3 sentences per item
- Explain WHY it matters (playoffs implications, rivalry, historic achievement, etc.)
- Avoid technical jargon; use everyday language
- Focus on what someone would actually talk about at work
- For playoff news, explain what's at stake
- For local team news, add local context

Keep it brief, relatable, and conversational.";

/// Which voice answers the turn.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Persona {
    /// Explains sports history and lore.
    Lore,
    /// Summarizes filtered news items.
    News,
}

impl Persona {
    pub fn instruction(&self) -> &'static str {
        match self {
            Persona::Lore => LORE_INSTRUCTION,
            Persona::News => NEWS_INSTRUCTION,
        }
    }
}

/// Assemble the provider prompt for one turn.
///
/// The history window is serialized oldest-first as role/content pairs.
/// The lore persona sends the user's message; the news persona sends a
/// summarize request grounded in the filtered items. Matched clips append
/// a directive to the final user message. Deterministic for identical
/// inputs.
pub fn assemble(
    persona: Persona,
    user_text: &str,
    history: &[Turn],
    clips: &[SportsClip],
    news: &[NewsItem],
) -> Prompt {
    let mut messages: Vec<PromptMessage> = history
        .iter()
        .map(|turn| PromptMessage::new(turn.role.as_str(), turn.content.clone()))
        .collect();

    let mut content = match persona {
        Persona::Lore => user_text.to_string(),
        Persona::News => format!(
            "Please summarize this sports news in a friendly, easy-to-understand way:\n\n{}",
            news_block(news)
        ),
    };
    if !clips.is_empty() {
        content.push_str(&clip_directive(clips));
    }
    messages.push(PromptMessage::new("user", content));

    Prompt {
        system: persona.instruction().to_string(),
        messages,
    }
}

/// Grounding block for the news persona: one section per item.
fn news_block(news: &[NewsItem]) -> String {
    let mut block = String::from("Here are the latest important sports updates:\n\n");
    for item in news {
        block.push_str(&format!(
            "**{}** ({}) - {}\n",
            item.team,
            item.sport.to_uppercase(),
            item.importance.as_str().to_uppercase()
        ));
        block.push_str(&format!("Headline: {}\n", item.title));
        if !item.description.is_empty() {
            block.push_str(&format!("Details: {}\n", item.description));
        }
        block.push('\n');
    }
    block
}

/// Directive naming the clips that will be shown alongside the response.
fn clip_directive(clips: &[SportsClip]) -> String {
    let titles: Vec<String> = clips
        .iter()
        .map(|clip| format!("\"{}\"", clip.title))
        .collect();
    format!(
        "\n\n[Note: These video clips will be shown to the user automatically: {}. \
         Acknowledge them briefly; do not invent details beyond their descriptions.]",
        titles.join(", ")
    )
}
