use std::fmt::{self, Display};

/// Subject used when none is given.
pub const DEFAULT_SUBJECT: &str = "New Survey";

/// A `mailto:` link carrying the survey transcript. Rendering percent-encodes
/// the subject and body. Nothing here verifies delivery: once the link is
/// handed to the OS, the mail client owns the rest.
#[derive(Clone, Debug, PartialEq)]
pub struct MailtoLink {
  subject: String,
  body: String,
}

impl MailtoLink {
  pub fn new<S, B>(subject: S, body: B) -> Self
  where
    S: Into<String>,
    B: Into<String>,
  {
    Self {
      subject: subject.into(),
      body: body.into(),
    }
  }

  /// Creates a link with the default subject.
  pub fn with_body<B: Into<String>>(body: B) -> Self {
    Self::new(DEFAULT_SUBJECT, body)
  }
}

impl Display for MailtoLink {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    write!(
      f,
      "mailto:?subject={}&body={}",
      urlencoding::encode(&self.subject),
      urlencoding::encode(&self.body)
    )
  }
}
