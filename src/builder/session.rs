use std::fmt::{self, Display};

use crossterm::style::Stylize;
use unindent::Unindent;

use crate::builder::prompts;
use crate::launcher;
use crate::spinner::Spinner;
use crate::survey::transcript;
use crate::survey::{Answer, AnswerKind, MailtoLink, Question, SliderConfig, Survey};

/// Width of the textual slider track, marker included.
const TRACK_WIDTH: usize = 24;

/// Options collected from the CLI.
#[derive(Debug, Default)]
pub struct BuilderOptions {
  /// Overrides the default mailto subject.
  pub subject: Option<String>,
  /// Print the mailto link to stdout instead of opening the mail client.
  pub print: bool,
  /// Skip the welcome screen.
  pub skip_welcome: bool,
}

/// What the builder menu offers between questions.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum MenuAction {
  Add,
  Preview,
  Remove,
  Send,
  Quit,
}

impl MenuAction {
  pub const ALL: [Self; 5] = [
    Self::Add,
    Self::Preview,
    Self::Remove,
    Self::Send,
    Self::Quit,
  ];
}

impl Display for MenuAction {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    match self {
      | Self::Add => write!(f, "Add a question"),
      | Self::Preview => write!(f, "Preview questions"),
      | Self::Remove => write!(f, "Remove a question"),
      | Self::Send => write!(f, "Send the survey"),
      | Self::Quit => write!(f, "Quit"),
    }
  }
}

/// An interactive survey-building session. Owns the question list for its
/// lifetime; nothing survives the process.
#[derive(Debug)]
pub struct Session {
  survey: Survey,
  options: BuilderOptions,
}

impl Session {
  pub fn new(options: BuilderOptions) -> Self {
    Self {
      survey: Survey::new(),
      options,
    }
  }

  /// Shows the welcome screen, then loops over the builder menu until the
  /// user quits.
  pub async fn run(mut self) -> miette::Result<()> {
    if !self.options.skip_welcome {
      welcome();

      if !prompts::start()? {
        return Ok(());
      }

      println!();
    }

    loop {
      match prompts::menu()? {
        | MenuAction::Add => self.add().await?,
        | MenuAction::Preview => self.preview(),
        | MenuAction::Remove => self.remove()?,
        | MenuAction::Send => self.send().await?,
        | MenuAction::Quit => break,
      }

      println!();
    }

    Ok(())
  }

  /// Asks for a prompt and type-specific details, then appends the question.
  async fn add(&mut self) -> miette::Result<()> {
    let text = prompts::question_text()?;
    let kind = prompts::answer_kind()?;

    let answer = match kind {
      | AnswerKind::Text => Answer::Text(prompts::sample_text()?),
      | AnswerKind::Number => Answer::Number(prompts::sample_number()?),
      | AnswerKind::Slider => {
        let config = prompts::slider_config()?;
        println!("{}", slider_track(&config).dark_grey());
        Answer::Slider(config)
      },
    };

    // The text prompt already requires non-blank input, so this only guards
    // against whitespace-only prompts.
    if let Some(question) = Question::new(text, answer) {
      self.survey.add(question);
    }

    Ok(())
  }

  fn preview(&self) {
    if self.survey.is_empty() {
      println!("{}", "No questions yet.".dark_grey());
      return;
    }

    for row in rows(&self.survey) {
      println!("{row}");
    }
  }

  fn remove(&mut self) -> miette::Result<()> {
    if self.survey.is_empty() {
      println!("{}", "Nothing to remove.".dark_grey());
      return Ok(());
    }

    let index = prompts::pick_question(rows(&self.survey))?;

    if let Some(question) = self.survey.remove(index) {
      println!("Removed {}.", question.text.green());
    }

    Ok(())
  }

  /// Folds the survey into a transcript and hands the mailto link to the OS.
  /// Fire-and-forget: there is no delivery signal to wait for.
  async fn send(&self) -> miette::Result<()> {
    if self.survey.is_empty() {
      println!("{}", "Nothing to send yet.".dark_grey());
      return Ok(());
    }

    let body = transcript::render(&self.survey);

    let link = match &self.options.subject {
      | Some(subject) => MailtoLink::new(subject, body),
      | None => MailtoLink::with_body(body),
    };

    if self.options.print {
      println!("{link}");
      return Ok(());
    }

    let spinner = Spinner::start("Handing the survey over to your mail client...");

    if let Err(err) = launcher::open(&link.to_string()) {
      spinner.clear();
      return Err(err.into());
    }

    spinner.stop("Survey handed over to your mail client.".green().to_string());

    Ok(())
  }
}

/// Preview rows in the `<n>. <prompt> (<kind>)` shape.
fn rows(survey: &Survey) -> Vec<String> {
  survey
    .questions()
    .iter()
    .enumerate()
    .map(|(index, question)| format!("{}. {} ({})", index + 1, question.text, question.kind()))
    .collect()
}

/// Textual stand-in for a slider preview: a track with the default value
/// marker placed proportionally between the bounds.
fn slider_track(config: &SliderConfig) -> String {
  let span = config.max.as_f64() - config.min.as_f64();

  let ratio = if span > 0.0 {
    ((config.default.as_f64() - config.min.as_f64()) / span).clamp(0.0, 1.0)
  } else {
    0.0
  };

  let marker = (ratio * (TRACK_WIDTH - 1) as f64).round() as usize;

  let track: String = (0..TRACK_WIDTH)
    .map(|cell| if cell == marker { '●' } else { '─' })
    .collect();

  format!("{} {} {}", config.min, track, config.max)
}

fn welcome() {
  let blurb = "
    Easily create and share surveys with our intuitive survey builder.
    Get started now!
  ";

  println!("{}\n", "Create Your Survey".bold());
  println!("{}\n", blurb.trim().unindent());
}

#[cfg(test)]
mod tests {
  use super::*;
  use crate::survey::Number;

  fn survey(texts: &[&str]) -> Survey {
    let mut survey = Survey::new();

    for text in texts {
      survey.add(Question::new(*text, Answer::Text(None)).unwrap());
    }

    survey
  }

  #[test]
  fn rows_are_numbered() {
    let survey = survey(&["Q1", "Q2"]);

    assert_eq!(rows(&survey), vec!["1. Q1 (text)", "2. Q2 (text)"]);
  }

  #[test]
  fn track_has_single_marker() {
    let track = slider_track(&SliderConfig::default());

    assert_eq!(track.chars().filter(|char| *char == '●').count(), 1);
    assert!(track.starts_with("0 "));
    assert!(track.ends_with(" 100"));
  }

  #[test]
  fn track_clamps_marker() {
    let config = SliderConfig {
      min: Number::Integer(0),
      max: Number::Integer(10),
      step: Number::Integer(1),
      default: Number::Integer(9000),
    };

    let track = slider_track(&config);

    assert!(track.contains(&format!("{}●", "─".repeat(TRACK_WIDTH - 1))));
  }

  #[test]
  fn track_degenerate_span() {
    let config = SliderConfig {
      min: Number::Integer(5),
      max: Number::Integer(5),
      step: Number::Integer(1),
      default: Number::Integer(5),
    };

    let track = slider_track(&config);

    assert!(track.contains(&format!("●{}", "─".repeat(TRACK_WIDTH - 1))));
  }
}
