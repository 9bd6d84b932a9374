//! DeepScout CLI — the main entry point.
//!
//! Usage:
//!   deepscout "What are the benefits of meditation?"
//!   deepscout --interactive
//!   deepscout "Your topic" --max-iterations 10 --model gpt-4o

use clap::Parser;
use deepscout_agent::ResearchLoop;
use deepscout_config::ResearchConfig;
use deepscout_providers::{OpenAiCompatClient, TavilyClient};
use std::sync::Arc;

mod output;

#[derive(Parser)]
#[command(
    name = "deepscout",
    about = "DeepScout — iterative web-research agent",
    version,
    author
)]
struct Cli {
    /// The research topic or question
    topic: Option<String>,

    /// LLM model to use
    #[arg(short, long)]
    model: Option<String>,

    /// Maximum research iterations
    #[arg(short = 'n', long)]
    max_iterations: Option<u32>,

    /// Run in interactive mode
    #[arg(short, long)]
    interactive: bool,

    /// Enable verbose logging
    #[arg(short, long)]
    verbose: bool,
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Pick up .env before anything reads the environment
    let _ = dotenvy::dotenv();

    let cli = Cli::parse();

    // Initialize tracing
    let filter = if cli.verbose { "debug" } else { "warn" };
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(filter)),
        )
        .with_target(false)
        .init();

    let mut config = ResearchConfig::load().map_err(|e| format!("Failed to load config: {e}"))?;

    // CLI flags win over config file and environment
    if let Some(model) = cli.model {
        config.model_name = model;
    }
    if let Some(n) = cli.max_iterations {
        config.max_iterations = n;
    }
    config.validate()?;

    // Check credentials early — give a clear error before any round runs
    if config.openai_api_key.is_none() || config.tavily_api_key.is_none() {
        eprintln!();
        eprintln!("  ERROR: Missing API credentials!");
        eprintln!();
        eprintln!("  Set these environment variables (or put them in .env):");
        eprintln!("    OPENAI_API_KEY = 'sk-...'     (or DEEPSCOUT_API_KEY)");
        eprintln!("    TAVILY_API_KEY = 'tvly-...'");
        eprintln!();
        eprintln!("  Or add them to your config file:");
        eprintln!(
            "    {}",
            ResearchConfig::config_dir().join("config.toml").display()
        );
        eprintln!();
        eprintln!("  Get a Tavily key at: https://tavily.com");
        eprintln!();
        return Err("Missing API credentials. See above for setup instructions.".into());
    }

    let agent = build_agent(&config)?;

    if cli.interactive {
        run_interactive(&agent, &config).await
    } else if let Some(topic) = cli.topic {
        run_single_topic(&agent, &config, &topic).await
    } else {
        use clap::CommandFactory;
        Cli::command().print_help()?;
        Ok(())
    }
}

/// Wire providers from config and assemble the research loop.
fn build_agent(config: &ResearchConfig) -> Result<ResearchLoop, Box<dyn std::error::Error>> {
    let llm_key = config.require_openai_key()?;
    let tavily_key = config.require_tavily_key()?;

    let llm: Arc<dyn deepscout_core::LanguageModel> = match &config.openai_base_url {
        Some(base_url) => Arc::new(OpenAiCompatClient::new(
            "custom",
            base_url,
            llm_key,
            &config.model_name,
            config.temperature,
        )),
        None => Arc::new(OpenAiCompatClient::openai(
            llm_key,
            &config.model_name,
            config.temperature,
        )),
    };
    let search = Arc::new(TavilyClient::new(tavily_key));

    Ok(ResearchLoop::from_config(llm, search, config))
}

/// Run a single research topic and print the report.
async fn run_single_topic(
    agent: &ResearchLoop,
    config: &ResearchConfig,
    topic: &str,
) -> Result<(), Box<dyn std::error::Error>> {
    println!("{}", output::banner(topic, config));
    println!("Researching... This may take a minute or two.\n");

    let state = agent.run(topic).await?;

    println!("{}", output::report_block(&state));
    println!("{}", output::stats_line(&state));
    Ok(())
}

/// Prompt for topics on stdin until the user exits.
async fn run_interactive(
    agent: &ResearchLoop,
    config: &ResearchConfig,
) -> Result<(), Box<dyn std::error::Error>> {
    println!();
    println!("  DeepScout — Interactive Mode");
    println!("  Model: {}", config.model_name);
    println!("  Max iterations: {}", config.max_iterations);
    println!();
    println!("  Enter a research topic, or 'exit' to quit.");
    println!();

    let stdin = std::io::stdin();
    loop {
        print!("  Topic > ");
        use std::io::Write;
        std::io::stdout().flush()?;

        let mut line = String::new();
        if stdin.read_line(&mut line)? == 0 {
            break; // EOF
        }
        let topic = line.trim();

        if topic.is_empty() {
            continue;
        }
        if topic.eq_ignore_ascii_case("exit") || topic.eq_ignore_ascii_case("quit") {
            break;
        }

        match agent.run(topic).await {
            Ok(state) => {
                println!("{}", output::report_block(&state));
                println!("{}", output::stats_line(&state));
            }
            Err(e) => eprintln!("  Error during research: {e}"),
        }
        println!();
    }

    Ok(())
}
