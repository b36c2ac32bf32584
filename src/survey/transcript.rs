use itertools::Itertools;

use crate::survey::question::{Answer, Question, Survey};

/// Renders the whole survey as a plain-text transcript: one numbered entry
/// per question, entries separated by a blank line. This is the text that
/// ends up as the mailto body.
pub fn render(survey: &Survey) -> String {
  survey
    .questions()
    .iter()
    .enumerate()
    .map(|(index, question)| entry(index, question))
    .join("\n\n")
}

/// Renders a single entry: `<n>. <prompt> (<kind>)` followed by the answer
/// details on the next line.
fn entry(index: usize, question: &Question) -> String {
  format!(
    "{}. {} ({})\n{}",
    index + 1,
    question.text,
    question.kind(),
    details(&question.answer)
  )
}

fn details(answer: &Answer) -> String {
  match answer {
    | Answer::Text(sample) => {
      format!("Answer: {}", sample.as_deref().unwrap_or_default())
    },
    | Answer::Number(sample) => {
      let sample = sample.map(|number| number.to_string());
      format!("Answer: {}", sample.unwrap_or_default())
    },
    | Answer::Slider(config) => {
      format!(
        "Slider range: {} to {}, Step: {}, Default: {}",
        config.min, config.max, config.step, config.default
      )
    },
  }
}

#[cfg(test)]
mod tests {
  use super::*;
  use crate::survey::value::Number;
  use crate::survey::SliderConfig;

  fn survey(questions: Vec<Question>) -> Survey {
    let mut survey = Survey::new();

    for question in questions {
      survey.add(question);
    }

    survey
  }

  #[test]
  fn render_empty() {
    assert_eq!(render(&Survey::new()), "");
  }

  #[test]
  fn render_numeric_answer() {
    let survey = survey(vec![Question::new(
      "Age",
      Answer::Number(Some(Number::Integer(30))),
    )
    .unwrap()]);

    assert_eq!(render(&survey), "1. Age (number)\nAnswer: 30");
  }

  #[test]
  fn render_missing_answer() {
    let survey = survey(vec![Question::new("Name", Answer::Text(None)).unwrap()]);

    assert_eq!(render(&survey), "1. Name (text)\nAnswer: ");
  }

  #[test]
  fn render_slider_summary() {
    let config = SliderConfig {
      min: Number::Integer(0),
      max: Number::Integer(100),
      step: Number::Integer(5),
      default: Number::Integer(50),
    };

    let survey = survey(vec![
      Question::new("Satisfaction", Answer::Slider(config)).unwrap()
    ]);

    assert!(render(&survey).contains("Slider range: 0 to 100, Step: 5, Default: 50"));
  }

  #[test]
  fn render_joins_with_blank_lines() {
    let survey = survey(vec![
      Question::new("Name", Answer::Text(Some("Ada".to_string()))).unwrap(),
      Question::new("Age", Answer::Number(Some(Number::Integer(30)))).unwrap(),
    ]);

    assert_eq!(
      render(&survey),
      "1. Name (text)\nAnswer: Ada\n\n2. Age (number)\nAnswer: 30"
    );
  }
}
