use clap::{Arg, ArgMatches, Command};
use polyread::translation::{
    GoogleTranslateProvider, MockMode, MockTranslator, TranslationProvider, TranslationSession,
    split_into_chunks,
};
use polyread::weather::WeatherClient;
use std::sync::Arc;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let matches = Command::new("polyread")
        .version("0.1.0")
        .about("Translation and weather lookup CLI for polyread")
        .subcommand_required(true)
        .subcommand(
            Command::new("translate")
                .about("Translate text, chunking long inputs on sentence boundaries")
                .arg(
                    Arg::new("text")
                        .help("Text to translate")
                        .required(true)
                        .index(1),
                )
                .arg(
                    Arg::new("target-lang")
                        .help("Target language code (e.g., fr, es, de)")
                        .required(true)
                        .index(2),
                )
                .arg(
                    Arg::new("source-lang")
                        .long("source")
                        .short('s')
                        .help("Source language code (default: auto-detect)")
                        .default_value("auto"),
                )
                .arg(
                    Arg::new("mock")
                        .long("mock")
                        .short('m')
                        .help("Use mock translator instead of Google Translate")
                        .action(clap::ArgAction::SetTrue),
                )
                .arg(
                    Arg::new("verbose")
                        .long("verbose")
                        .short('v')
                        .help("Show chunking details")
                        .action(clap::ArgAction::SetTrue),
                ),
        )
        .subcommand(
            Command::new("weather")
                .about("Look up current weather for a city")
                .arg(Arg::new("city").help("City name").required(true).index(1)),
        )
        .get_matches();

    match matches.subcommand() {
        Some(("translate", sub)) => run_translate(sub).await,
        Some(("weather", sub)) => run_weather(sub).await,
        _ => unreachable!("subcommand is required"),
    }
}

async fn run_translate(matches: &ArgMatches) -> Result<(), Box<dyn std::error::Error>> {
    let text = matches.get_one::<String>("text").expect("required arg");
    let target_lang = matches
        .get_one::<String>("target-lang")
        .expect("required arg");
    let source_lang = matches
        .get_one::<String>("source-lang")
        .expect("defaulted arg");
    let use_mock = matches.get_flag("mock");
    let verbose = matches.get_flag("verbose");

    let provider: Arc<dyn TranslationProvider> = if use_mock {
        Arc::new(MockTranslator::new(MockMode::Suffix))
    } else {
        Arc::new(GoogleTranslateProvider::new()?)
    };

    if verbose {
        let chunks = split_into_chunks(text);
        println!("📝 Source: \"{}\"", text);
        println!("🌍 {} → {}", source_lang, target_lang);
        println!("🔌 Provider: {}", provider.provider_name());
        println!("📦 {} chunk(s)", chunks.len());
        for (i, chunk) in chunks.iter().enumerate() {
            println!("   [{}] {} chars", i, chunk.chars().count());
        }
        println!();
    }

    let mut session = TranslationSession::new(provider);
    session
        .translate(text, target_lang, Some(source_lang))
        .await;

    if let Some(error) = session.error() {
        eprintln!("❌ {}", error);
        return Err(error.into());
    }

    println!("{}", session.translated_text());
    Ok(())
}

async fn run_weather(matches: &ArgMatches) -> Result<(), Box<dyn std::error::Error>> {
    let city = matches.get_one::<String>("city").expect("required arg");

    let client = WeatherClient::new()?;
    match client.fetch_by_city(city).await {
        Ok(data) => {
            println!(
                "🌤 {}: {}°C, {}, wind {} km/h",
                data.city, data.temperature, data.description, data.wind_speed
            );
            Ok(())
        }
        Err(e) => {
            eprintln!("❌ {}", e);
            Err(e.into())
        }
    }
}
