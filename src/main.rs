use anyhow::{Context, Result};
use rte::cli::{self, CliCommand};
use rte::config::RteConfig;
use rte::document::SELECTION_TAG;
use rte::position::TextIndex;
use rte::session::EditorSession;

/// Parse arguments, set up logging and config, then run one subcommand against an
/// `EditorSession` the way a UI shell would drive it.
fn main() -> Result<()> {
    let cli_args = match cli::parse_args() {
        Ok(args) => args,
        Err(e) => e.exit(),
    };

    // Initialize logger (set RUST_LOG env var to control verbosity)
    env_logger::Builder::from_default_env()
        .filter_level(log::LevelFilter::Info)
        .init();

    let config = RteConfig::load(cli_args.config.as_deref()).context("Failed to load config")?;
    let mut session = EditorSession::from_config(&config);

    match cli_args.command {
        CliCommand::Catalog => print_catalog(&session),
        CliCommand::Show { file } => {
            let file = config.resolve(&file);
            session
                .open(&file)
                .with_context(|| format!("Failed to open '{}'", file.display()))?;
            print_document(&session);
        }
        CliCommand::New { file, text } => {
            let file = config.resolve(&file);
            session.type_text(TextIndex::START, &text);
            let written = session
                .save(Some(file.as_path()))
                .with_context(|| format!("Failed to save '{}'", file.display()))?;
            println!("{}", written.display());
        }
        CliCommand::Toggle {
            file,
            tag,
            start,
            end,
        } => {
            let file = config.resolve(&file);
            session
                .open(&file)
                .with_context(|| format!("Failed to open '{}'", file.display()))?;
            session.select(start, end);
            let outcome = session
                .toggle_tag(&tag)
                .with_context(|| format!("Cannot toggle '{}'", tag))?;
            session.clear_selection();
            let written = session.save(None).context("Failed to save")?;
            println!("{:?} {} on {}..{} in {}", outcome, tag, start, end, written.display());
        }
    }

    Ok(())
}

fn print_catalog(session: &EditorSession) {
    for entry in session.catalog.entries() {
        let directive = &entry.directive;
        let mut parts = Vec::new();
        if let Some(font) = directive.font_spec() {
            parts.push(format!("font={}", font));
        }
        if let Some(fg) = &directive.foreground {
            parts.push(format!("foreground={}", fg));
        }
        if let Some(bg) = &directive.background {
            parts.push(format!("background={}", bg));
        }
        println!("{:<16} {:<16} {}", entry.name, entry.key, parts.join(" "));
    }
}

fn print_document(session: &EditorSession) {
    println!("{}", session.window_title());
    println!("{}", session.surface.text());
    println!("---");
    for name in session.surface.tag_names() {
        if name == SELECTION_TAG {
            continue;
        }
        let ranges = session.surface.tag_ranges(name);
        if ranges.is_empty() {
            continue;
        }
        let spans: Vec<String> = ranges
            .iter()
            .map(|(start, end)| format!("{}-{}", start, end))
            .collect();
        let note = if session.catalog.contains(name) {
            ""
        } else {
            " (not in catalog)"
        };
        println!("{}{}: {}", name, note, spans.join(", "));
    }
}
