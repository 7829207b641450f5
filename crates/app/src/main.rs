use std::fmt;
use std::io;
use std::sync::Arc;

use dioxus::LaunchBuilder;
use dioxus::desktop::{Config as DesktopConfig, WindowBuilder};
use memory_core::model::{DeckOutline, PresenterSettings, PresenterSettingsDraft};
use tracing::{Level, info};
use tracing_subscriber::EnvFilter;
use ui::{App, UiApp, build_app_context};

const ENV_SLIDE: &str = "MEMORY_DECK_SLIDE";
const ENV_TITLE: &str = "MEMORY_DECK_TITLE";
const ENV_TIME_SCALE: &str = "MEMORY_DECK_TIME_SCALE";

#[derive(Debug, PartialEq)]
enum ArgsError {
    MissingValue { flag: &'static str },
    UnknownArg(String),
    InvalidNumber { source: &'static str, raw: String },
}

impl fmt::Display for ArgsError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ArgsError::MissingValue { flag } => write!(f, "{flag} requires a value"),
            ArgsError::UnknownArg(arg) => write!(f, "unknown argument: {arg}"),
            ArgsError::InvalidNumber { source, raw } => {
                write!(f, "invalid {source} value: {raw}")
            }
        }
    }
}

impl std::error::Error for ArgsError {}

fn require_value(
    args: &mut impl Iterator<Item = String>,
    flag: &'static str,
) -> Result<String, ArgsError> {
    args.next().ok_or(ArgsError::MissingValue { flag })
}

fn parse_number<T: std::str::FromStr>(source: &'static str, raw: String) -> Result<T, ArgsError> {
    raw.trim()
        .parse()
        .map_err(|_| ArgsError::InvalidNumber { source, raw })
}

fn write_usage(out: &mut impl io::Write) -> io::Result<()> {
    writeln!(out, "Usage:")?;
    writeln!(
        out,
        "  cargo run -p app -- [--slide <n>] [--title <text>] [--time-scale <factor>]"
    )?;
    writeln!(out)?;
    writeln!(out, "Defaults:")?;
    writeln!(out, "  --slide 1")?;
    writeln!(out, "  --title \"Memory & Learning\"")?;
    writeln!(out, "  --time-scale 1.0   (0.1 to 10; scales every game timer)")?;
    writeln!(out)?;
    writeln!(out, "Environment:")?;
    writeln!(out, "  {ENV_SLIDE}, {ENV_TITLE}, {ENV_TIME_SCALE}, RUST_LOG")
}

/// The error line once, followed by usage when the arguments were at fault.
fn report_failure(
    out: &mut impl io::Write,
    err: &(dyn std::error::Error + 'static),
) -> io::Result<()> {
    writeln!(out, "{err}")?;
    if err.is::<ArgsError>() {
        writeln!(out)?;
        write_usage(out)?;
    }
    Ok(())
}

#[derive(Debug, PartialEq)]
enum Command {
    Launch(PresenterSettingsDraft),
    Help,
}

/// Flags override the environment; `env` looks a variable up by name.
fn parse_args(
    args: &mut impl Iterator<Item = String>,
    env: impl Fn(&str) -> Option<String>,
) -> Result<Command, ArgsError> {
    let mut draft = PresenterSettingsDraft::new();
    if let Some(raw) = env(ENV_SLIDE) {
        draft.start_slide = Some(parse_number(ENV_SLIDE, raw)?);
    }
    draft.window_title = env(ENV_TITLE);
    if let Some(raw) = env(ENV_TIME_SCALE) {
        draft.time_scale = Some(parse_number(ENV_TIME_SCALE, raw)?);
    }

    while let Some(arg) = args.next() {
        match arg.as_str() {
            "--slide" => {
                let value = require_value(args, "--slide")?;
                draft.start_slide = Some(parse_number("--slide", value)?);
            }
            "--title" => {
                draft.window_title = Some(require_value(args, "--title")?);
            }
            "--time-scale" => {
                let value = require_value(args, "--time-scale")?;
                draft.time_scale = Some(parse_number("--time-scale", value)?);
            }
            "--help" | "-h" => return Ok(Command::Help),
            _ => return Err(ArgsError::UnknownArg(arg)),
        }
    }

    Ok(Command::Launch(draft))
}

/// The shipped lecture plus settings validated against it.
fn load_deck(
    draft: PresenterSettingsDraft,
) -> Result<(DeckOutline, PresenterSettings), memory_core::Error> {
    let outline = DeckOutline::memory_lecture();
    let settings = draft.validate(outline.len())?;
    Ok((outline, settings))
}

struct PresenterApp {
    outline: DeckOutline,
    settings: PresenterSettings,
}

impl UiApp for PresenterApp {
    fn outline(&self) -> DeckOutline {
        self.outline.clone()
    }

    fn settings(&self) -> PresenterSettings {
        self.settings.clone()
    }
}

fn run() -> Result<(), Box<dyn std::error::Error>> {
    let mut args = std::env::args().skip(1);
    let command = parse_args(&mut args, |name| std::env::var(name).ok())?;
    let draft = match command {
        Command::Help => {
            write_usage(&mut io::stderr())?;
            return Ok(());
        }
        Command::Launch(draft) => draft,
    };

    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env().add_directive(Level::INFO.into()))
        .with_writer(io::stderr)
        .with_target(false)
        .with_ansi(false)
        .init();

    let (outline, settings) = load_deck(draft)?;
    info!(
        slides = outline.len(),
        start_slide = settings.start_slide() + 1,
        time_scale = settings.time_scale(),
        "launching memory deck"
    );

    let title = settings.window_title().to_owned();
    let app: Arc<dyn UiApp> = Arc::new(PresenterApp { outline, settings });
    let context = build_app_context(&app);

    // Some dev setups default the window to always-on-top; turn it off explicitly.
    let desktop_cfg = DesktopConfig::new().with_window(
        WindowBuilder::new()
            .with_title(title)
            .with_always_on_top(false),
    );

    LaunchBuilder::desktop()
        .with_cfg(desktop_cfg)
        .with_context(context)
        .launch(App);
    Ok(())
}

fn main() {
    if let Err(err) = run() {
        let _ = report_failure(&mut io::stderr(), err.as_ref());
        std::process::exit(2);
    }
}

#[cfg(test)]
mod tests {
    use std::collections::HashMap;

    use super::*;

    fn parse(args: &[&str], env: &[(&str, &str)]) -> Result<Command, ArgsError> {
        let env: HashMap<String, String> = env
            .iter()
            .map(|(key, value)| ((*key).to_string(), (*value).to_string()))
            .collect();
        let mut args = args.iter().map(|arg| (*arg).to_string());
        parse_args(&mut args, |name| env.get(name).cloned())
    }

    fn draft(command: Command) -> PresenterSettingsDraft {
        match command {
            Command::Launch(draft) => draft,
            Command::Help => panic!("expected launch"),
        }
    }

    #[test]
    fn no_arguments_leave_defaults() {
        let draft = draft(parse(&[], &[]).unwrap());
        assert_eq!(draft, PresenterSettingsDraft::new());
    }

    #[test]
    fn flags_override_environment() {
        let draft = draft(
            parse(
                &["--slide", "9", "--time-scale", "0.5"],
                &[(ENV_SLIDE, "3"), (ENV_TITLE, "Lecture"), (ENV_TIME_SCALE, "2")],
            )
            .unwrap(),
        );
        assert_eq!(draft.start_slide, Some(9));
        assert_eq!(draft.window_title.as_deref(), Some("Lecture"));
        assert_eq!(draft.time_scale, Some(0.5));
    }

    #[test]
    fn help_short_circuits() {
        assert_eq!(parse(&["--help", "--bogus"], &[]).unwrap(), Command::Help);
        assert_eq!(parse(&["-h"], &[]).unwrap(), Command::Help);
    }

    #[test]
    fn reports_bad_arguments() {
        assert_eq!(
            parse(&["--slide"], &[]).unwrap_err(),
            ArgsError::MissingValue { flag: "--slide" }
        );
        assert_eq!(
            parse(&["--fast"], &[]).unwrap_err(),
            ArgsError::UnknownArg("--fast".to_string())
        );
        assert_eq!(
            parse(&["--slide", "nine"], &[]).unwrap_err(),
            ArgsError::InvalidNumber {
                source: "--slide",
                raw: "nine".to_string()
            }
        );
        assert_eq!(
            parse(&[], &[(ENV_TIME_SCALE, "fast")]).unwrap_err(),
            ArgsError::InvalidNumber {
                source: ENV_TIME_SCALE,
                raw: "fast".to_string()
            }
        );
    }

    #[test]
    fn parsed_draft_validates_against_the_lecture() {
        let (outline, settings) =
            load_deck(draft(parse(&["--slide", "14", "--title", "  "], &[]).unwrap())).unwrap();
        assert_eq!(outline.len(), 14);
        assert_eq!(settings.start_slide(), 13);
        assert_eq!(settings.window_title(), "Memory & Learning");

        let err = load_deck(draft(parse(&["--slide", "15"], &[]).unwrap())).unwrap_err();
        assert_eq!(
            err.to_string(),
            "start slide must be between 1 and 14, got 15"
        );
    }

    #[test]
    fn failure_report_prints_the_error_once() {
        let err = parse(&["--fast"], &[]).unwrap_err();
        let mut out = Vec::new();
        report_failure(&mut out, &err).unwrap();
        let text = String::from_utf8(out).unwrap();
        assert_eq!(text.matches("unknown argument: --fast").count(), 1);
        assert!(text.starts_with("unknown argument: --fast\n"));
        assert!(text.contains("Usage:"));

        let err = load_deck(draft(parse(&["--slide", "15"], &[]).unwrap())).unwrap_err();
        let mut out = Vec::new();
        report_failure(&mut out, &err).unwrap();
        let text = String::from_utf8(out).unwrap();
        assert_eq!(text, "start slide must be between 1 and 14, got 15\n");
    }
}
