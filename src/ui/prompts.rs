//! Interactive prompts.

use console::{style, Term};
use dialoguer::theme::{ColorfulTheme, SimpleTheme, Theme};
use dialoguer::{MultiSelect, Select};

use crate::error::{Result, YugoError};

use super::{Prompt, PromptOption, PromptResult, PromptType};

/// Convert dialoguer errors to YugoError.
fn map_dialoguer_err(e: dialoguer::Error) -> YugoError {
    YugoError::Io(e.into())
}

/// Dialoguer theme without the default yellow `?` prefix.
fn prompt_theme() -> ColorfulTheme {
    ColorfulTheme {
        prompt_prefix: style("".to_string()),
        ..ColorfulTheme::default()
    }
}

/// Pick the dialoguer theme. Accessible mode uses undecorated prompts.
fn theme_for(accessible: bool) -> Box<dyn Theme> {
    if accessible {
        Box::new(SimpleTheme)
    } else {
        Box::new(prompt_theme())
    }
}

/// Prompt the user for input.
pub fn prompt_user(prompt: &Prompt, term: &Term, accessible: bool) -> Result<PromptResult> {
    let theme = theme_for(accessible);
    match &prompt.prompt_type {
        PromptType::Select { options } => prompt_select(prompt, options, term, theme.as_ref()),
        PromptType::MultiSelect { options } => {
            prompt_multiselect(prompt, options, term, theme.as_ref())
        }
    }
}

fn prompt_select(
    prompt: &Prompt,
    options: &[PromptOption],
    term: &Term,
    theme: &dyn Theme,
) -> Result<PromptResult> {
    if options.is_empty() {
        return Err(YugoError::SelectionRequired {
            what: prompt.key.clone(),
        });
    }

    let labels: Vec<_> = options.iter().map(|o| o.label.as_str()).collect();

    let default_idx = prompt
        .default
        .as_ref()
        .and_then(|d| options.iter().position(|o| o.value == *d))
        .unwrap_or(0);

    let selection = Select::with_theme(theme)
        .with_prompt(&prompt.question)
        .items(&labels)
        .default(default_idx)
        .interact_on(term)
        .map_err(map_dialoguer_err)?;

    Ok(PromptResult::String(options[selection].value.clone()))
}

fn prompt_multiselect(
    prompt: &Prompt,
    options: &[PromptOption],
    term: &Term,
    theme: &dyn Theme,
) -> Result<PromptResult> {
    let labels: Vec<_> = options.iter().map(|o| o.label.as_str()).collect();

    let default_values: Vec<&str> = prompt
        .default
        .as_deref()
        .map(|d| d.split(',').collect())
        .unwrap_or_default();
    let defaults: Vec<bool> = options
        .iter()
        .map(|o| default_values.contains(&o.value.as_str()))
        .collect();

    let selections = MultiSelect::with_theme(theme)
        .with_prompt(&prompt.question)
        .items(&labels)
        .defaults(&defaults)
        .interact_on(term)
        .map_err(map_dialoguer_err)?;

    let values: Vec<String> = selections
        .iter()
        .map(|&i| options[i].value.clone())
        .collect();

    Ok(PromptResult::Strings(values))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn select_without_options_is_an_error() {
        let prompt = Prompt::select("manager", "Choose", &[]);
        let err = prompt_user(&prompt, &Term::stdout(), true).unwrap_err();
        assert!(matches!(err, YugoError::SelectionRequired { .. }));
    }
}
