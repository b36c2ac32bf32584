use clap::Parser;

use crate::builder::{BuilderOptions, Session};

#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
pub struct Cli {
  /// Subject line for the generated mailto link.
  #[arg(short, long)]
  pub subject: Option<String>,

  /// Print the mailto link instead of opening the mail client.
  #[arg(short, long)]
  pub print: bool,

  /// Skip the welcome screen and jump straight into the builder.
  #[arg(short = 'y', long)]
  pub yes: bool,
}

#[derive(Debug)]
pub struct App {
  cli: Cli,
}

impl App {
  pub fn new() -> Self {
    Self { cli: Cli::parse() }
  }

  pub async fn run(self) -> miette::Result<()> {
    let options = BuilderOptions {
      subject: self.cli.subject,
      print: self.cli.print,
      skip_welcome: self.cli.yes,
    };

    let session = Session::new(options);
    session.run().await
  }
}

impl Default for App {
  fn default() -> Self {
    Self::new()
  }
}
