use anyhow::{Context, Result, bail};
use chat_entities_config::Config;
use chat_entities_engine::{Extractor, LinkDetector, RelaxedUrlDetector, Vocabulary, walk};
use clap::Parser;
use std::io::{self, BufRead, Write};

mod cli;

use cli::Cli;

fn main() -> Result<()> {
    env_logger::Builder::from_default_env()
        .filter_level(log::LevelFilter::Info)
        .parse_default_env()
        .init();

    let cli = Cli::parse();
    let mut config = load_config(&cli)?;
    config.emotes.extend(cli.emotes.iter().cloned());
    config.nicks.extend(cli.nicks.iter().cloned());

    let values = config
        .vocabulary_values()
        .context("Failed to build vocabulary")?;
    let vocabulary = Vocabulary::new(values);
    log::info!(
        "Loaded {} emotes and {} nicks (links {})",
        vocabulary.emote_count(),
        vocabulary.nick_count(),
        if config.detect_links { "on" } else { "off" }
    );

    let detector = config.detect_links.then(RelaxedUrlDetector::new);
    let extractor = Extractor::new(&vocabulary, detector).with_max_depth(config.max_depth);

    let stdout = io::stdout();
    let mut out = stdout.lock();

    if cli.messages.is_empty() {
        for line in io::stdin().lock().lines() {
            let line = line.context("Failed to read message from stdin")?;
            run_message(&extractor, &line, cli.tree, &mut out)?;
        }
    } else {
        for message in &cli.messages {
            run_message(&extractor, message, cli.tree, &mut out)?;
        }
    }

    Ok(())
}

fn load_config(cli: &Cli) -> Result<Config> {
    if let Some(path) = &cli.config {
        log::info!("Config path: {}", path.display());
        return match Config::load_from_path(path)? {
            Some(config) => Ok(config),
            None => bail!("Config file not found at {}", path.display()),
        };
    }

    let config_path = Config::config_path();
    log::info!("Config path: {}", config_path.display());
    match Config::load()? {
        Some(config) => Ok(config),
        None => {
            log::info!("No config file found, using defaults");
            Ok(Config::default())
        }
    }
}

/// Extract one message and write its result line. Extraction failures are
/// logged and skipped; only write errors are returned.
fn run_message<D: LinkDetector, W: Write>(
    extractor: &Extractor<'_, D>,
    message: &str,
    show_tree: bool,
    out: &mut W,
) -> Result<()> {
    log::debug!("Processing {} byte message", message.len());

    let result = extractor.merged_tree(message).and_then(|tree| {
        let entities = walk(&tree, message.len(), extractor.max_depth())?;
        Ok((tree, entities))
    });

    match result {
        Ok((tree, entities)) => {
            log::debug!("Found {} entities", entities.len());
            writeln!(out, "{message:?} {}", serde_json::to_string(&entities)?)?;
            if show_tree {
                write!(out, "{tree}")?;
            }
        }
        Err(e) => log::warn!("Skipping message {message:?}: {e}"),
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use chat_entities_engine::{Bounds, NoLinks, VocabularyValues};
    use pretty_assertions::assert_eq;
    use tempfile::TempDir;

    fn vocabulary() -> Vocabulary {
        Vocabulary::new(VocabularyValues {
            emotes: vec!["Kappa".into()],
            nicks: vec!["alice".into()],
            ..Default::default()
        })
    }

    fn output<D: LinkDetector>(extractor: &Extractor<'_, D>, message: &str, tree: bool) -> String {
        let mut out = Vec::new();
        run_message(extractor, message, tree, &mut out).unwrap();
        String::from_utf8(out).unwrap()
    }

    #[test]
    fn prints_quoted_message_and_json() {
        let vocab = vocabulary();
        let extractor = Extractor::new(&vocab, RelaxedUrlDetector::new());

        assert_eq!(
            output(&extractor, "alice Kappa", false),
            "\"alice Kappa\" {\"emotes\":[{\"bounds\":[6,11],\"name\":\"Kappa\"}],\"mentions\":[{\"bounds\":[0,5],\"nick\":\"alice\"}]}\n"
        );
    }

    #[test]
    fn prints_empty_model_for_plain_text() {
        let vocab = vocabulary();
        let extractor = Extractor::new(&vocab, NoLinks);

        assert_eq!(output(&extractor, "hello world", false), "\"hello world\" {}\n");
    }

    #[test]
    fn tree_follows_result_line() {
        let vocab = vocabulary();
        let extractor = Extractor::new(&vocab, RelaxedUrlDetector::new());

        assert_eq!(
            output(&extractor, "||a.com||", true),
            "\"||a.com||\" {\"links\":[{\"bounds\":[2,7],\"url\":\"a.com\"}],\"spoiler\":[{\"bounds\":[0,9]}]}\nMessage@0..9\n  Spoiler@0..9\n    Link@2..7 \"a.com\"\n"
        );
    }

    #[test]
    fn failed_message_is_skipped() {
        let vocab = vocabulary();
        let extractor = Extractor::new(&vocab, vec![Bounds::new(3, 99)]);

        assert_eq!(output(&extractor, "a.com", false), "");
    }

    #[test]
    fn explicit_missing_config_is_an_error() {
        let temp_dir = TempDir::new().unwrap();
        let cli = Cli::parse_from([
            "chat-entities",
            "--config",
            temp_dir.path().join("missing.toml").to_str().unwrap(),
        ]);

        assert!(load_config(&cli).is_err());
    }

    #[test]
    fn explicit_config_is_loaded() {
        let temp_dir = TempDir::new().unwrap();
        let config_file = temp_dir.path().join("config.toml");
        std::fs::write(&config_file, "emotes = [\"PEPE\"]\ndetect_links = false\n").unwrap();
        let cli = Cli::parse_from(["chat-entities", "--config", config_file.to_str().unwrap()]);

        let config = load_config(&cli).unwrap();
        assert_eq!(config.emotes, vec!["PEPE"]);
        assert!(!config.detect_links);
    }
}
