//! Bistro Menu - Nissa La Bella's multilingual menu viewer for the COSMIC desktop
//!
//! Entry point for the application. Handles CLI argument parsing,
//! logging initialization, and application bootstrap.

mod app;
mod catalog;
mod clipboard;
mod config;
mod error;
mod message;
mod search;
mod state;
mod ui;
mod utils;
mod watcher;

// Menu and keyboard shortcuts
mod menu;

// Internationalization
mod i18n;

use app::{BistroMenu, Flags};
use config::{MIN_WINDOW_HEIGHT, MIN_WINDOW_WIDTH};
use i18n::Language;
use std::path::PathBuf;

/// Application name for logging
const APP_NAME: &str = "bistro-menu";

/// What the command line asked for
#[derive(Debug, PartialEq)]
enum CliAction {
    Run(Flags),
    Help,
    Version,
}

fn main() -> cosmic::iced::Result {
    // Initialize logging
    init_logging();

    // Parse command line arguments
    let flags = match parse_args_from(std::env::args().skip(1)) {
        Ok(CliAction::Run(flags)) => flags,
        Ok(CliAction::Help) => {
            print_help();
            std::process::exit(0);
        }
        Ok(CliAction::Version) => {
            print_version();
            std::process::exit(0);
        }
        Err(e) => {
            eprintln!("Error: {}", e);
            eprintln!("Use --help for usage information");
            std::process::exit(1);
        }
    };

    log::info!("Starting Bistro Menu");

    // Note: Don't use .size() with cosmic apps - it can cause Wayland protocol errors
    // The window size is managed by the compositor
    cosmic::app::run::<BistroMenu>(
        cosmic::app::Settings::default().size_limits(
            cosmic::iced::Limits::NONE
                .min_width(MIN_WINDOW_WIDTH)
                .min_height(MIN_WINDOW_HEIGHT),
        ),
        flags,
    )
}

/// Initialize the logging system
fn init_logging() {
    // Set default log level if not specified
    if std::env::var("RUST_LOG").is_err() {
        std::env::set_var("RUST_LOG", "info,bistro_menu=debug");
    }

    env_logger::Builder::from_default_env()
        .format_timestamp_millis()
        .init();
}

/// Parse command line arguments (without the program name)
fn parse_args_from<I>(args: I) -> Result<CliAction, String>
where
    I: IntoIterator<Item = String>,
{
    let mut flags = Flags::default();
    let mut args = args.into_iter();

    while let Some(arg) = args.next() {
        match arg.as_str() {
            "-h" | "--help" => return Ok(CliAction::Help),
            "-v" | "--version" => return Ok(CliAction::Version),
            "-m" | "--menu" => {
                let path = args
                    .next()
                    .ok_or_else(|| format!("{} requires a path argument", arg))?;
                flags.menu_path = Some(PathBuf::from(path));
            }
            "-l" | "--lang" => {
                let code = args
                    .next()
                    .ok_or_else(|| format!("{} requires a language code", arg))?;
                let lang = Language::from_code(&code)
                    .ok_or_else(|| format!("Unknown language '{}' (expected en, fr or zh-hk)", code))?;
                flags.language = Some(lang);
            }
            "--no-watch" => flags.no_watch = true,
            other if other.starts_with('-') => return Err(format!("Unknown option: {}", other)),
            // A bare argument is the menu file
            path => flags.menu_path = Some(PathBuf::from(path)),
        }
    }

    Ok(CliAction::Run(flags))
}

/// Print help message
fn print_help() {
    println!(
        r#"Bistro Menu - Nissa La Bella's multilingual menu viewer

USAGE:
    bistro-menu [OPTIONS] [MENU_FILE]

OPTIONS:
    -h, --help          Show this help message
    -v, --version       Show version information
    -m, --menu PATH     Menu document to show (default: ./menu.json)
    -l, --lang CODE     Start in language en, fr or zh-hk
        --no-watch      Do not reload the menu when the file changes

EXAMPLES:
    bistro-menu                         Show ./menu.json
    bistro-menu -m ~/bistro/carte.json  Show a specific menu
    bistro-menu --lang zh-hk            Start in Cantonese

KEYBOARD SHORTCUTS:
    Ctrl+R              Reload menu
    Ctrl+L              Next language
    Ctrl+1..4           Entrée, Plats, Accompagnement, Dessert
    Ctrl+B              Toggle sidebar
    Escape              Clear search
    Ctrl+Q              Quit
"#
    );
}

/// Print version information
fn print_version() {
    println!("{} {}", APP_NAME, env!("CARGO_PKG_VERSION"));
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse(args: &[&str]) -> Result<CliAction, String> {
        parse_args_from(args.iter().map(|s| s.to_string()))
    }

    #[test]
    fn test_no_args_runs_with_defaults() {
        assert_eq!(parse(&[]), Ok(CliAction::Run(Flags::default())));
    }

    #[test]
    fn test_menu_and_language_flags() {
        let action = parse(&["--menu", "carte.json", "-l", "FR", "--no-watch"]).unwrap();
        assert_eq!(
            action,
            CliAction::Run(Flags {
                menu_path: Some(PathBuf::from("carte.json")),
                language: Some(Language::French),
                no_watch: true,
            })
        );
    }

    #[test]
    fn test_bare_argument_is_menu_file() {
        let Ok(CliAction::Run(flags)) = parse(&["menu.json"]) else {
            panic!("expected run");
        };
        assert_eq!(flags.menu_path, Some(PathBuf::from("menu.json")));
    }

    #[test]
    fn test_help_and_version() {
        assert_eq!(parse(&["-h"]), Ok(CliAction::Help));
        assert_eq!(parse(&["--version", "--bogus"]), Ok(CliAction::Version));
    }

    #[test]
    fn test_bad_arguments() {
        assert!(parse(&["--menu"]).is_err());
        assert!(parse(&["--lang", "de"]).is_err());
        assert!(parse(&["--colour"]).is_err());
    }
}
