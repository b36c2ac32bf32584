use std::time::Duration;

use indicatif::{ProgressBar, ProgressStyle};

/// Small wrapper around the `indicatif` spinner.
pub struct Spinner {
  spinner: ProgressBar,
}

impl Spinner {
  /// Creates a spinner and starts ticking with the given message.
  pub fn start<S>(message: S) -> Self
  where
    S: Into<String> + AsRef<str>,
  {
    let style = ProgressStyle::default_spinner().tick_chars("⣾⣽⣻⢿⡿⣟⣯⣷·");
    let spinner = ProgressBar::new_spinner();

    spinner.set_style(style);
    spinner.set_message(message.into());
    spinner.enable_steady_tick(Duration::from_millis(80));

    Self { spinner }
  }

  /// Stops the spinner, replacing its message.
  pub fn stop<S>(self, message: S)
  where
    S: Into<String> + AsRef<str>,
  {
    self.spinner.finish_with_message(message.into());
  }

  /// Stops the spinner and clears its line, leaving nothing behind for
  /// subsequent output to print over.
  pub fn clear(self) {
    self.spinner.finish_and_clear();
  }
}

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn clear_finishes_the_bar() {
    let spinner = Spinner::start("working");
    let bar = spinner.spinner.clone();

    spinner.clear();

    assert!(bar.is_finished());
  }
}
