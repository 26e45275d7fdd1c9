mod compose;
mod config;
mod constants;
mod provider;

use anyhow::{Context, Result};
use std::env;
use std::io::Read;
use tracing_subscriber::{EnvFilter, layer::SubscriberExt, util::SubscriberInitExt};

use crate::compose::{RandomChooser, Tone};
use crate::config::{Config, ProviderKind};
use crate::constants::SIGNATURE_PLACEHOLDER;
use crate::provider::Provider;

fn setup_logging() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));

    tracing_subscriber::registry()
        .with(filter)
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();
}

fn print_usage() {
    eprintln!(
        r#"mailsmith - turn rough support notes into polished customer emails

Usage: mailsmith [options] [notes...]
       mailsmith <command>

Notes are taken from the command line, or from stdin when omitted.

Options:
    --tone <id>         formal | warm | concise | technical | apologetic | proactive
    --reply-to <file>   file containing the customer email being replied to
    --provider <name>   template | gemini | groq
    --plain             rewrite [text](url) links as text (url) for pasting

Commands:
    tones       List the available tones
    setup       Configure provider, API keys, and signature
    help        Show this help message

Configuration file: ~/.config/mailsmith/config.toml
"#
    );
}

fn print_tones() {
    println!("Available tones:\n");
    for tone in Tone::ALL {
        println!("    {:<12} {:<12} {}", tone.id(), tone.label(), tone.description());
    }
}

/// Parsed command-line options for a compose run
struct ComposeArgs {
    notes: String,
    reply_context: String,
    tone: Option<Tone>,
    provider: Option<ProviderKind>,
    plain: bool,
}

fn parse_compose_args(args: &[String]) -> Result<ComposeArgs> {
    let mut notes_words: Vec<&str> = Vec::new();
    let mut reply_context = String::new();
    let mut tone = None;
    let mut provider = None;
    let mut plain = false;

    let mut iter = args.iter();
    while let Some(arg) = iter.next() {
        match arg.as_str() {
            "--tone" => {
                let value = iter.next().context("--tone requires a value")?;
                tone = Some(value.parse()?);
            }
            "--reply-to" => {
                let path = iter.next().context("--reply-to requires a file path")?;
                reply_context = std::fs::read_to_string(path)
                    .with_context(|| format!("Failed to read reply file: {}", path))?;
            }
            "--provider" => {
                let value = iter.next().context("--provider requires a value")?;
                provider = Some(ProviderKind::parse(value)?);
            }
            "--plain" => plain = true,
            flag if flag.starts_with("--") => {
                anyhow::bail!("Unknown option: {}", flag);
            }
            word => notes_words.push(word),
        }
    }

    // Fall back to stdin when no notes were given on the command line
    let notes = if notes_words.is_empty() {
        let mut buf = String::new();
        std::io::stdin()
            .read_to_string(&mut buf)
            .context("Failed to read notes from stdin")?;
        buf
    } else {
        notes_words.join(" ")
    };

    Ok(ComposeArgs {
        notes,
        reply_context,
        tone,
        provider,
        plain,
    })
}

async fn run_compose(args: ComposeArgs) -> Result<()> {
    let config = Config::load()?;

    let tone = args.tone.unwrap_or(config.compose.default_tone);
    let kind = args.provider.unwrap_or(config.provider.default);

    if args.notes.trim().is_empty() {
        anyhow::bail!("No notes provided. Pass them as arguments or pipe them via stdin.");
    }

    let mut email = match kind {
        ProviderKind::Template => {
            let mut chooser = RandomChooser;
            compose::generate(&args.notes, &args.reply_context, tone, &mut chooser)?
        }
        ProviderKind::Gemini => {
            let gemini = &config.provider.gemini;
            let client = provider::GeminiClient::new(
                config.gemini_api_key()?,
                gemini.model.clone(),
                gemini.temperature,
                gemini.max_output_tokens,
            );
            remote_generate(Provider::Gemini(client), &args, tone).await?
        }
        ProviderKind::Groq => {
            let groq = &config.provider.groq;
            let client = provider::GroqClient::new(
                config.groq_api_key()?,
                groq.model.clone(),
                groq.temperature,
                groq.max_tokens,
            );
            remote_generate(Provider::Groq(client), &args, tone).await?
        }
    };

    if let Some(signature) = &config.compose.signature {
        email = email.replace(SIGNATURE_PLACEHOLDER, signature);
    }

    if args.plain {
        email = compose::links_to_plain(&email);
    }

    println!("{}", email);
    Ok(())
}

/// Compose via a remote provider: detect topics locally, build the
/// prompt, and send it with retries.
async fn remote_generate(provider: Provider, args: &ComposeArgs, tone: Tone) -> Result<String> {
    let combined = if args.reply_context.trim().is_empty() {
        args.notes.clone()
    } else {
        format!("{} {}", args.notes, args.reply_context)
    };
    let topics = compose::detect_topics(&combined);

    let prompt = provider::build_user_prompt(&args.notes, &args.reply_context, tone, &topics);
    tracing::debug!(provider = provider.name(), topics = topics.len(), "sending prompt");

    provider.generate(&prompt).await
}

fn run_setup() -> Result<()> {
    use std::io::{self, Write};

    println!("Mailsmith Setup");
    println!("===============\n");

    let config_path = Config::config_path()?;
    if config_path.exists() {
        print!("Configuration already exists. Overwrite? [y/N]: ");
        io::stdout().flush()?;
        let mut input = String::new();
        io::stdin().read_line(&mut input)?;
        if !input.trim().eq_ignore_ascii_case("y") {
            println!("Setup cancelled.");
            return Ok(());
        }
    }

    // Default provider
    let kind = loop {
        print!("Default provider (template/gemini/groq) [template]: ");
        io::stdout().flush()?;
        let mut input = String::new();
        io::stdin().read_line(&mut input)?;
        let input = input.trim();
        if input.is_empty() {
            break ProviderKind::Template;
        }
        match ProviderKind::parse(input) {
            Ok(kind) => break kind,
            Err(e) => println!("{}", e),
        }
    };

    let mut config = Config::default();
    config.provider.default = kind;

    // API key for the chosen remote provider
    match kind {
        ProviderKind::Gemini => {
            print!("Gemini API key (leave empty to use GEMINI_API_KEY): ");
            io::stdout().flush()?;
            let mut key = String::new();
            io::stdin().read_line(&mut key)?;
            let key = key.trim();
            if !key.is_empty() {
                config.provider.gemini.api_key = Some(key.to_string());
            }
        }
        ProviderKind::Groq => {
            print!("Groq API key (leave empty to use GROQ_API_KEY): ");
            io::stdout().flush()?;
            let mut key = String::new();
            io::stdin().read_line(&mut key)?;
            let key = key.trim();
            if !key.is_empty() {
                config.provider.groq.api_key = Some(key.to_string());
            }
        }
        ProviderKind::Template => {}
    }

    // Signature
    print!("Signature name (optional, replaces \"[Your Name]\"): ");
    io::stdout().flush()?;
    let mut signature = String::new();
    io::stdin().read_line(&mut signature)?;
    let signature = signature.trim();
    if !signature.is_empty() {
        config.compose.signature = Some(signature.to_string());
    }

    // Default tone
    let tone = loop {
        print!("Default tone [formal]: ");
        io::stdout().flush()?;
        let mut input = String::new();
        io::stdin().read_line(&mut input)?;
        let input = input.trim();
        if input.is_empty() {
            break Tone::Formal;
        }
        match input.parse::<Tone>() {
            Ok(tone) => break tone,
            Err(e) => println!("{}", e),
        }
    };
    config.compose.default_tone = tone;

    config.save()?;
    println!("\nConfiguration saved to {}", config_path.display());
    println!("Run 'mailsmith <your notes>' to compose an email.");
    Ok(())
}

#[tokio::main]
async fn main() -> Result<()> {
    let args: Vec<String> = env::args().skip(1).collect();

    match args.first().map(|s| s.as_str()) {
        Some("help") | Some("--help") | Some("-h") => {
            print_usage();
            Ok(())
        }
        Some("tones") => {
            print_tones();
            Ok(())
        }
        Some("setup") => run_setup(),
        _ => {
            setup_logging();
            let compose_args = parse_compose_args(&args)?;
            run_compose(compose_args).await
        }
    }
}
