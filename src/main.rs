// Module-specific lints configuration
#![allow(clippy::uninlined_format_args)]

use anyhow::{anyhow, Result};
use clap::{Parser, ValueEnum};
use log::{info, Level, LevelFilter, Log, Metadata, Record, SetLoggerError};
use std::io::Write;

use yartt::app_config::RttConfig;
use yartt::language_utils::{language_name, SUPPORTED_LANGUAGES};
use yartt::providers::TranslateClient;
use yartt::translation::{LibreTranslateRtt, RoundTripTranslator};

/// CLI Wrapper for log levels to implement ValueEnum
#[derive(Debug, Clone, ValueEnum)]
enum CliLogLevel {
    Error,
    Warn,
    Info,
    Debug,
    Trace,
}

impl From<CliLogLevel> for LevelFilter {
    fn from(cli_level: CliLogLevel) -> Self {
        match cli_level {
            CliLogLevel::Error => LevelFilter::Error,
            CliLogLevel::Warn => LevelFilter::Warn,
            CliLogLevel::Info => LevelFilter::Info,
            CliLogLevel::Debug => LevelFilter::Debug,
            CliLogLevel::Trace => LevelFilter::Trace,
        }
    }
}

/// yartt - Yet Another Round-Trip Translator
///
/// Translates a text to a target language and back again via a
/// LibreTranslate server, printing the resulting paraphrase.
#[derive(Parser, Debug)]
#[command(name = "yartt")]
#[command(version = "0.1.0")]
#[command(about = "Round-trip translation via LibreTranslate")]
#[command(long_about = "yartt translates a text to a target language and straight back, producing
a paraphrase of the input.

EXAMPLES:
    yartt -t fr 'Hello, world!'                      # en -> fr -> en, endpoint from LT_ENDPOINT
    yartt -t de -s es 'Hola mundo'                   # es -> de -> es
    yartt -t fr -u http://localhost:5000 'Hello'     # explicit endpoint
    yartt -t fr --test-connection                    # probe the endpoint and exit
    yartt --list-languages                           # show the supported language codes

CONFIGURATION:
    The endpoint and API key default to the LT_ENDPOINT and LT_API_KEY
    environment variables. Note that LibreTranslate only translates between
    English and another supported language.")]
struct CommandLineOptions {
    /// Text to round-trip translate
    #[arg(value_name = "TEXT")]
    text: Option<String>,

    /// Target language code (e.g., 'fr', 'de', 'ja')
    #[arg(short, long, required_unless_present = "list_languages")]
    target_language: Option<String>,

    /// Source language code
    #[arg(short, long, default_value = "en")]
    source_language: String,

    /// LibreTranslate endpoint URL
    #[arg(short, long, env = "LT_ENDPOINT")]
    url: Option<String>,

    /// API key for the LibreTranslate server
    #[arg(short = 'k', long, env = "LT_API_KEY")]
    api_key: Option<String>,

    /// Set logging level
    #[arg(short, long, value_enum)]
    log_level: Option<CliLogLevel>,

    /// List the supported language codes and exit
    #[arg(long)]
    list_languages: bool,

    /// Probe the endpoint's languages route and exit
    #[arg(long)]
    test_connection: bool,
}

// @struct: Custom logger implementation
struct CustomLogger {
    level: LevelFilter,
}

impl CustomLogger {
    // @creates: New logger with specified level
    fn new(level: LevelFilter) -> Self {
        CustomLogger { level }
    }

    // @initializes: Global logger
    fn init(level: LevelFilter) -> Result<(), SetLoggerError> {
        let logger = Box::new(CustomLogger::new(level));
        log::set_boxed_logger(logger)?;
        log::set_max_level(level);
        Ok(())
    }

    // @returns: ANSI color code for log level
    fn color_for_level(level: Level) -> &'static str {
        match level {
            Level::Error => "\x1B[1;31m",
            Level::Warn => "\x1B[1;33m",
            Level::Info => "\x1B[1;32m",
            Level::Debug => "\x1B[1;36m",
            Level::Trace => "\x1B[1;35m",
        }
    }
}

impl Log for CustomLogger {
    fn enabled(&self, metadata: &Metadata) -> bool {
        metadata.level() <= self.level
    }

    fn log(&self, record: &Record) {
        if self.enabled(record.metadata()) {
            let now = chrono::Local::now().format("%H:%M:%S%.3f");
            let color = Self::color_for_level(record.level());

            let mut stderr = std::io::stderr();
            let _ = writeln!(
                stderr,
                "{}{} {} {}\x1B[0m",
                color,
                now,
                record.level(),
                record.args()
            );
        }
    }

    fn flush(&self) {
        let _ = std::io::stderr().flush();
    }
}

#[tokio::main]
async fn main() -> Result<()> {
    // Initialize the logger once with info level by default
    CustomLogger::init(LevelFilter::Info)?;

    let cli = CommandLineOptions::parse();

    // If log level is set via command line, apply it immediately
    if let Some(cmd_log_level) = &cli.log_level {
        log::set_max_level(cmd_log_level.clone().into());
    }

    if cli.list_languages {
        for code in SUPPORTED_LANGUAGES {
            match language_name(code) {
                Some(name) => println!("{}  {}", code, name),
                None => println!("{}", code),
            }
        }
        return Ok(());
    }

    let target_language = cli
        .target_language
        .ok_or_else(|| anyhow!("--target-language is required"))?;

    let mut config =
        RttConfig::new(&target_language).with_source_language(&cli.source_language);
    if let Some(url) = &cli.url {
        config = config.with_endpoint(url);
    }
    if let Some(api_key) = &cli.api_key {
        config = config.with_api_key(api_key);
    }

    let translator = LibreTranslateRtt::with_config(config)?;

    if cli.test_connection {
        translator.client().test_connection().await?;
        info!("Connection OK");
        return Ok(());
    }

    let text = cli
        .text
        .ok_or_else(|| anyhow!("TEXT is required unless --list-languages or --test-connection is given"))?;

    info!(
        "Round-trip translating {} -> {} -> {}",
        translator.source_lang(),
        translator.target_lang(),
        translator.source_lang()
    );

    let result = translator.rtt(&text).await?;
    println!("{}", result);

    Ok(())
}
