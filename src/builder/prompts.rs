use inquire::{Confirm, CustomType, Select, Text};
use miette::Diagnostic;
use thiserror::Error;

use crate::builder::session::MenuAction;
use crate::survey::{AnswerKind, Number, SliderConfig};

#[derive(Debug, Diagnostic, Error)]
#[error("Prompt failed.")]
#[diagnostic(code(surveyor::builder::prompt))]
pub struct PromptError(#[source] pub inquire::InquireError);

/// Helper module holding useful functions.
mod helpers {
  use std::process;

  use crossterm::style::Stylize;
  use inquire::formatter::StringFormatter;
  use inquire::ui::{Color, RenderConfig, StyleSheet, Styled};
  use inquire::InquireError;

  use super::PromptError;

  /// Returns configured theme.
  pub fn theme<'r>() -> RenderConfig<'r> {
    let default = RenderConfig::default();
    let stylesheet = StyleSheet::default();

    let prompt_prefix = Styled::new("?").with_fg(Color::LightYellow);
    let answered_prefix = Styled::new("✓").with_fg(Color::LightGreen);

    default
      .with_prompt_prefix(prompt_prefix)
      .with_answered_prompt_prefix(answered_prefix)
      .with_default_value(stylesheet.with_fg(Color::DarkGrey))
  }

  /// Returns a formatter that shows `<empty>` if the input is empty.
  pub fn empty_formatter<'s>() -> StringFormatter<'s> {
    &|input| {
      if input.is_empty() {
        "<empty>".dark_grey().to_string()
      } else {
        input.to_string()
      }
    }
  }

  /// Handles interruption/cancelation events by exiting the process, and
  /// wraps everything else into a diagnostic.
  pub fn interrupt(err: InquireError) -> miette::Report {
    match err {
      | InquireError::OperationCanceled => {
        process::exit(0);
      },
      | InquireError::OperationInterrupted => {
        println!("{}", "<interrupted>".red());
        process::exit(0);
      },
      | err => PromptError(err).into(),
    }
  }
}

/// Asks whether to enter the builder at all (the welcome screen button).
pub fn start() -> miette::Result<bool> {
  let prompt = Confirm::new("Start building your survey?")
    .with_default(true)
    .with_render_config(helpers::theme());

  prompt.prompt().map_err(helpers::interrupt)
}

/// Asks what to do next.
pub fn menu() -> miette::Result<MenuAction> {
  let prompt = Select::new("What next?", MenuAction::ALL.to_vec())
    .with_render_config(helpers::theme());

  prompt.prompt().map_err(helpers::interrupt)
}

/// Asks for the question prompt. Requires non-blank input.
pub fn question_text() -> miette::Result<String> {
  let prompt = Text::new("Question:")
    .with_help_message("The prompt shown to respondents.")
    .with_validator(inquire::required!("This field is required."))
    .with_render_config(helpers::theme());

  prompt.prompt().map_err(helpers::interrupt)
}

/// Asks for the expected answer type.
pub fn answer_kind() -> miette::Result<AnswerKind> {
  let options = AnswerKind::ALL.map(|kind| kind.label()).to_vec();

  let prompt = Select::new("Answer type:", options).with_render_config(helpers::theme());

  match prompt.raw_prompt() {
    | Ok(option) => Ok(AnswerKind::ALL[option.index]),
    | Err(err) => Err(helpers::interrupt(err)),
  }
}

/// Asks for an optional sample text answer.
pub fn sample_text() -> miette::Result<Option<String>> {
  let prompt = Text::new("Sample answer:")
    .with_help_message("Leave empty to skip.")
    .with_formatter(helpers::empty_formatter())
    .with_render_config(helpers::theme());

  let value = prompt.prompt().map_err(helpers::interrupt)?;

  Ok(Some(value).filter(|value| !value.is_empty()))
}

/// Asks for an optional sample numeric answer.
pub fn sample_number() -> miette::Result<Option<Number>> {
  use inquire::validator::Validation;

  let prompt = Text::new("Sample answer:")
    .with_help_message("Leave empty to skip.")
    .with_formatter(helpers::empty_formatter())
    .with_validator(|input: &str| {
      if input.trim().is_empty() || input.trim().parse::<Number>().is_ok() {
        Ok(Validation::Valid)
      } else {
        Ok(Validation::Invalid("Expected a number.".into()))
      }
    })
    .with_render_config(helpers::theme());

  let value = prompt.prompt().map_err(helpers::interrupt)?;

  Ok(value.trim().parse::<Number>().ok())
}

/// Asks for slider bounds, step and default. None of the informal numeric
/// invariants are enforced here.
pub fn slider_config() -> miette::Result<SliderConfig> {
  let defaults = SliderConfig::default();

  Ok(SliderConfig {
    min: slider_field("Min value:", defaults.min)?,
    max: slider_field("Max value:", defaults.max)?,
    step: slider_field("Step:", defaults.step)?,
    default: slider_field("Default value:", defaults.default)?,
  })
}

fn slider_field(hint: &str, default: Number) -> miette::Result<Number> {
  let prompt = CustomType::<Number>::new(hint)
    .with_default(default)
    .with_error_message("Expected a number.")
    .with_render_config(helpers::theme());

  prompt.prompt().map_err(helpers::interrupt)
}

/// Asks which of the given question rows to remove, returning its index.
pub fn pick_question(rows: Vec<String>) -> miette::Result<usize> {
  let prompt = Select::new("Remove which question?", rows).with_render_config(helpers::theme());

  match prompt.raw_prompt() {
    | Ok(option) => Ok(option.index),
    | Err(err) => Err(helpers::interrupt(err)),
  }
}
