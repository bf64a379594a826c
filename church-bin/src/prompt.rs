use reedline::{Prompt, PromptEditMode, PromptHistorySearch};
use std::borrow::Cow;

pub static PROMPT_INDICATOR: &str = "λ> ";

// Width of the indicator in columns, for pointing into the echoed input
pub const PROMPT_WIDTH: usize = 3;

// The same indicator in every edit mode; statements are single lines.
#[derive(Default)]
pub struct ChurchPrompt {}

impl Prompt for ChurchPrompt {
    fn render_prompt_left(&self) -> Cow<str> {
        Cow::Borrowed("")
    }

    fn render_prompt_right(&self) -> Cow<str> {
        Cow::Borrowed("")
    }

    fn render_prompt_indicator(&self, _: PromptEditMode) -> Cow<str> {
        Cow::Borrowed(PROMPT_INDICATOR)
    }

    fn render_prompt_multiline_indicator(&self) -> Cow<str> {
        Cow::Borrowed(PROMPT_INDICATOR)
    }

    fn render_prompt_history_search_indicator(
        &self,
        history_search: PromptHistorySearch
    ) -> Cow<str> {
        Cow::Owned(format!("(search: {})", history_search.term))
    }
}
