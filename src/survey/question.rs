use std::fmt::{self, Display};

use crate::survey::value::Number;

/// Slider bounds and defaults. The informal `min <= default <= max` and
/// `step > 0` invariants are left to the survey author.
#[derive(Clone, Debug, PartialEq)]
pub struct SliderConfig {
  pub min: Number,
  pub max: Number,
  pub step: Number,
  pub default: Number,
}

impl Default for SliderConfig {
  fn default() -> Self {
    Self {
      min: Number::Integer(0),
      max: Number::Integer(100),
      step: Number::Integer(1),
      default: Number::Integer(50),
    }
  }
}

/// Expected answer for a question, with an optional sample answer for the
/// plain text and numeric variants.
#[derive(Clone, Debug, PartialEq)]
pub enum Answer {
  /// Free-form text, with an optional sample answer.
  Text(Option<String>),
  /// Numeric, with an optional sample answer.
  Number(Option<Number>),
  /// Bounded slider.
  Slider(SliderConfig),
}

impl Answer {
  pub fn kind(&self) -> AnswerKind {
    match self {
      | Self::Text(..) => AnswerKind::Text,
      | Self::Number(..) => AnswerKind::Number,
      | Self::Slider(..) => AnswerKind::Slider,
    }
  }
}

/// Bare answer type discriminant, as it appears in transcripts.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum AnswerKind {
  Text,
  Number,
  Slider,
}

impl AnswerKind {
  pub const ALL: [Self; 3] = [Self::Text, Self::Number, Self::Slider];

  /// Human-friendly label for pickers.
  pub fn label(&self) -> &'static str {
    match self {
      | Self::Text => "Plain Text",
      | Self::Number => "Numeric",
      | Self::Slider => "Slider",
    }
  }
}

impl Display for AnswerKind {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    match self {
      | Self::Text => write!(f, "text"),
      | Self::Number => write!(f, "number"),
      | Self::Slider => write!(f, "slider"),
    }
  }
}

/// One survey item: a prompt plus its expected answer.
#[derive(Clone, Debug, PartialEq)]
pub struct Question {
  /// The prompt shown to respondents. Stored as entered, presence-checked
  /// against the trimmed form.
  pub text: String,
  /// Expected answer variant with its configuration.
  pub answer: Answer,
}

impl Question {
  /// Creates a question. Blank and whitespace-only prompts yield [None].
  pub fn new<S: Into<String>>(text: S, answer: Answer) -> Option<Self> {
    let text = text.into();

    if text.trim().is_empty() {
      return None;
    }

    Some(Self { text, answer })
  }

  pub fn kind(&self) -> AnswerKind {
    self.answer.kind()
  }
}

/// Ordered list of questions. Lives only in memory for the duration of a
/// builder session.
#[derive(Debug, Default)]
pub struct Survey {
  questions: Vec<Question>,
}

impl Survey {
  pub fn new() -> Self {
    Self { questions: Vec::new() }
  }

  /// Appends a question at the end.
  pub fn add(&mut self, question: Question) {
    self.questions.push(question);
  }

  /// Removes the question at `index`, preserving the order of the rest.
  /// Returns [None] when the index is out of bounds.
  pub fn remove(&mut self, index: usize) -> Option<Question> {
    (index < self.questions.len()).then(|| self.questions.remove(index))
  }

  pub fn questions(&self) -> &[Question] {
    &self.questions
  }

  pub fn len(&self) -> usize {
    self.questions.len()
  }

  pub fn is_empty(&self) -> bool {
    self.questions.is_empty()
  }
}

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn reject_blank_prompts() {
    let cases = ["", " ", "   \t  "];

    for text in cases {
      assert_eq!(Question::new(text, Answer::Text(None)), None);
    }
  }

  #[test]
  fn keep_prompt_as_entered() {
    let question = Question::new(" Q1 ", Answer::Text(None)).unwrap();

    assert_eq!(question.text, " Q1 ");
  }

  #[test]
  fn append_in_order() {
    let mut survey = Survey::new();

    survey.add(Question::new("Q1", Answer::Text(None)).unwrap());
    survey.add(Question::new("Q2", Answer::Number(None)).unwrap());

    assert_eq!(survey.len(), 2);
    assert_eq!(survey.questions()[0].text, "Q1");
    assert_eq!(survey.questions()[1].text, "Q2");
  }

  #[test]
  fn remove_preserves_order() {
    let mut survey = Survey::new();

    for text in ["Q1", "Q2", "Q3"] {
      survey.add(Question::new(text, Answer::Text(None)).unwrap());
    }

    let removed = survey.remove(1);

    assert_eq!(removed.map(|question| question.text), Some("Q2".to_string()));

    let remaining: Vec<_> = survey
      .questions()
      .iter()
      .map(|question| question.text.as_str())
      .collect();

    assert_eq!(remaining, vec!["Q1", "Q3"]);
  }

  #[test]
  fn remove_out_of_bounds() {
    let mut survey = Survey::new();

    survey.add(Question::new("Q1", Answer::Text(None)).unwrap());

    assert_eq!(survey.remove(1), None);
    assert_eq!(survey.len(), 1);
  }

  #[test]
  fn answer_kinds() {
    let cases = [
      (Answer::Text(None), AnswerKind::Text, "text"),
      (Answer::Number(None), AnswerKind::Number, "number"),
      (
        Answer::Slider(SliderConfig::default()),
        AnswerKind::Slider,
        "slider",
      ),
    ];

    for (answer, kind, display) in cases {
      assert_eq!(answer.kind(), kind);
      assert_eq!(kind.to_string(), display);
    }
  }
}
