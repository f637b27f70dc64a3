mod commands;
mod core;
mod files;
mod release;
mod ui;

use clap::{CommandFactory, Parser};
use crate::core::context::Context;
use crate::core::error::{ExitCode, SyncError, print_error};

/// Sync the app version across its manifests and maintain the updater's latest.json
#[derive(Parser)]
#[command(name = "release-sync")]
#[command(version, about, long_about = None)]
#[command(styles = get_styles())]
#[command(after_help = "Examples:\n  release-sync -v 2.1.3\n  release-sync -l\n  release-sync -la")]
struct Cli {
  /// Simple version update: write VERSION into every target file and latest.json
  #[arg(short = 'v', long = "set-version", value_name = "VERSION", conflicts_with = "latest")]
  set_version: Option<String>,

  /// Full release: build latest.json with changelog and notice
  #[arg(short = 'l', long)]
  latest: bool,

  /// With -l: append changelog entries to the existing latest.json
  #[arg(short = 'a', long, requires = "latest")]
  append: bool,
}

/// The one flow selected by the flags
enum Mode {
  Bump(String),
  Latest,
  Append,
}

impl Cli {
  fn mode(self) -> Option<Mode> {
    match (self.set_version, self.latest, self.append) {
      (Some(version), _, _) => Some(Mode::Bump(version)),
      (None, true, true) => Some(Mode::Append),
      (None, true, false) => Some(Mode::Latest),
      (None, false, _) => None,
    }
  }
}

fn get_styles() -> clap::builder::Styles {
  clap::builder::Styles::styled()
    .usage(
      anstyle::Style::new()
        .bold()
        .underline()
        .fg_color(Some(anstyle::Color::Ansi(anstyle::AnsiColor::Yellow))),
    )
    .header(
      anstyle::Style::new()
        .bold()
        .underline()
        .fg_color(Some(anstyle::Color::Ansi(anstyle::AnsiColor::Yellow))),
    )
    .literal(anstyle::Style::new().fg_color(Some(anstyle::Color::Ansi(anstyle::AnsiColor::Green))))
    .invalid(
      anstyle::Style::new()
        .bold()
        .fg_color(Some(anstyle::Color::Ansi(anstyle::AnsiColor::Red))),
    )
    .error(
      anstyle::Style::new()
        .bold()
        .fg_color(Some(anstyle::Color::Ansi(anstyle::AnsiColor::Red))),
    )
    .valid(
      anstyle::Style::new()
        .bold()
        .underline()
        .fg_color(Some(anstyle::Color::Ansi(anstyle::AnsiColor::Green))),
    )
    .placeholder(anstyle::Style::new().fg_color(Some(anstyle::Color::Ansi(anstyle::AnsiColor::White))))
}

fn main() {
  let cli = match Cli::try_parse() {
    Ok(cli) => cli,
    // --help / --version
    Err(e) if !e.use_stderr() => e.exit(),
    Err(e) => {
      print!("{}", e);
      std::process::exit(ExitCode::Failure.as_i32());
    }
  };

  let Some(mode) = cli.mode() else {
    print_usage();
    std::process::exit(ExitCode::Failure.as_i32());
  };

  let root = match std::env::current_dir() {
    Ok(dir) => dir,
    Err(e) => handle_error(SyncError::message(format!("Failed to get current directory: {}", e))),
  };

  let ctx = match Context::build(&root) {
    Ok(ctx) => ctx,
    Err(e) => handle_error(e),
  };

  let mut prompt = ui::Terminal::stdio();
  let result = match mode {
    Mode::Bump(version) => commands::run_bump(&ctx, &version, &mut prompt),
    Mode::Latest => commands::run_latest(&ctx, &mut prompt),
    Mode::Append => commands::run_append(&ctx, &mut prompt),
  };

  let code = match result {
    Ok(()) => ExitCode::Success,
    Err(err) => {
      print_error(&err);
      err.exit_code()
    }
  };
  std::process::exit(code.as_i32());
}

fn print_usage() {
  if let Err(e) = Cli::command().print_help() {
    eprintln!("Error: Failed to print usage: {}", e);
  }
}

fn handle_error(err: SyncError) -> ! {
  print_error(&err);
  std::process::exit(err.exit_code().as_i32());
}
