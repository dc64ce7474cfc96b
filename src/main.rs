use std::io::Read;

use anyhow::{Context, Result};
use clap::Parser;

use emojipass::cli::{CliArgs, CliCommand, StartupConfig};
use emojipass::editable::{render, RenderMode};
use emojipass::levenshtein;
use emojipass::metrics::{has_min_emojis, PasswordMetrics};
use emojipass::palette::EmojiPalette;
use emojipass::recent_emojis::RecentEmojis;
use emojipass::{Session, StudyConfig};

fn main() -> Result<()> {
    let startup = CliArgs::parse()
        .into_config()
        .map_err(|e| anyhow::anyhow!(e))?;

    emojipass::tracing::init();

    let config = StudyConfig::load();
    tracing::debug!(?config, "loaded study config");

    match &startup.command {
        CliCommand::Render { text, masked } => {
            let mode = if *masked {
                RenderMode::Masked
            } else {
                RenderMode::Plaintext
            };
            let options = startup.editor_options(&config);
            println!("{}", render(text, mode, options.effective_mask()));
        }
        CliCommand::Metrics {
            password,
            creation_time,
            copy,
        } => run_metrics(&config, password, *creation_time, *copy)?,
        CliCommand::Distance { target, attempts } => run_distance(target, attempts),
        CliCommand::Palette { recent } => run_palette(*recent),
        CliCommand::Session { .. } => run_session(&startup, &config)?,
    }

    Ok(())
}

fn run_metrics(config: &StudyConfig, password: &str, creation_time: f64, copy: bool) -> Result<()> {
    let metrics = PasswordMetrics::new(password, creation_time);
    let json = metrics.to_json().context("Failed to serialize metrics")?;
    println!("{}", json);
    eprintln!(
        "strength: {} ({}), time to crack: {}",
        metrics.password_strength,
        metrics.strength_label(),
        metrics.time_to_crack()
    );
    if !has_min_emojis(password, config.min_emojis) {
        eprintln!("note: emoji passwords need at least {} emojis", config.min_emojis);
    }

    if copy {
        let mut clipboard = arboard::Clipboard::new().context("Failed to open clipboard")?;
        clipboard
            .set_text(json)
            .context("Failed to copy metrics to clipboard")?;
        eprintln!("Metrics copied to clipboard");
    }
    Ok(())
}

fn run_distance(target: &str, attempts: &[String]) {
    for attempt in attempts {
        println!(
            "{}\t{}%\t{}",
            levenshtein::distance(target, attempt),
            levenshtein::similarity(target, attempt),
            attempt
        );
    }
    if let Some(min) = levenshtein::min_distance(target, attempts) {
        println!("min\t{}", min);
    }
}

fn run_palette(recent_only: bool) {
    let palette = EmojiPalette::new(RecentEmojis::load());
    if recent_only {
        println!("{}", palette.recent().symbols().collect::<Vec<_>>().join(" "));
        return;
    }
    if !palette.recent().is_empty() {
        println!("Recent: {}", palette.recent().symbols().collect::<Vec<_>>().join(" "));
    }
    for category in palette.categories() {
        println!("{}: {}", category.name, category.symbols.join(" "));
    }
}

fn run_session(startup: &StartupConfig, config: &StudyConfig) -> Result<()> {
    let script = match &startup.command {
        CliCommand::Session {
            script: Some(path),
        } => std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read script {}", path.display()))?,
        _ => {
            let mut buf = String::new();
            std::io::stdin()
                .read_to_string(&mut buf)
                .context("Failed to read script from stdin")?;
            buf
        }
    };

    let options = startup.editor_options(config);
    let track_recent = !options.suppress_recent;
    let mut session = Session::new(options, RecentEmojis::load());

    for line in session.run_script(&script)? {
        println!("{}", line);
    }
    println!("{}", session.describe());

    if track_recent {
        if let Err(e) = session.into_recent().save() {
            tracing::warn!("Failed to save recent emojis: {}", e);
        }
    }
    Ok(())
}
