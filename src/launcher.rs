use std::io;
use std::process::Command;

use miette::Diagnostic;
use thiserror::Error;

#[derive(Debug, Diagnostic, Error)]
pub enum LaunchError {
  #[error("Failed to launch `{command}`.")]
  #[diagnostic(code(surveyor::launcher::spawn))]
  Spawn {
    command: String,
    #[source]
    source: io::Error,
  },
}

/// Escapes cmd.exe metacharacters with a caret. Percent-encoding leaves `&`
/// untouched, and a bare `&` splits the `cmd /C` line into two commands.
fn escape_cmd(uri: &str) -> String {
  let mut escaped = String::with_capacity(uri.len());

  for char in uri.chars() {
    if matches!(char, '&' | '^' | '|' | '<' | '>') {
      escaped.push('^');
    }

    escaped.push(char);
  }

  escaped
}

/// Picks the platform opener for a URI.
fn opener(uri: &str) -> (&'static str, Vec<String>) {
  if cfg!(target_os = "windows") {
    // `start` treats the first quoted argument as a window title, hence the
    // empty string before the URI.
    let args = ["/C".to_string(), "start".to_string(), String::new(), escape_cmd(uri)];
    ("cmd", args.to_vec())
  } else if cfg!(target_os = "macos") {
    ("open", vec![uri.to_string()])
  } else {
    ("xdg-open", vec![uri.to_string()])
  }
}

/// Hands a URI to the OS default handler, e.g. the mail client for `mailto:`
/// links. A successful spawn says nothing about what the handler does next.
pub fn open(uri: &str) -> Result<(), LaunchError> {
  let (program, args) = opener(uri);

  Command::new(program)
    .args(&args)
    .spawn()
    .map_err(|source| {
      LaunchError::Spawn {
        command: program.to_string(),
        source,
      }
    })?;

  Ok(())
}

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn opener_carries_uri() {
    let (program, args) = opener("mailto:?subject=hi");

    assert!(!program.is_empty());
    assert_eq!(args.last().map(String::as_str), Some("mailto:?subject=hi"));
  }

  #[test]
  fn escape_survives_query_separator() {
    assert_eq!(
      escape_cmd("mailto:?subject=New%20Survey&body=x"),
      "mailto:?subject=New%20Survey^&body=x"
    );
  }

  #[test]
  fn escape_doubles_up() {
    let cases = [("a^b", "a^^b"), ("a|b", "a^|b"), ("a<b>c", "a^<b^>c")];

    for (input, expected) in cases {
      assert_eq!(escape_cmd(input), expected);
    }
  }
}
