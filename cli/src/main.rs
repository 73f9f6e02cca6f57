//! Herograph CLI — seed the game knowledge graph and ask questions of it

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use colored::Colorize;
use std::io::Write;

use herograph::{
    GameData, GraphConfig, GraphStore, LlmConfig, Neo4jStore, QueryTranslator,
    ResponseGenerator, SeedConfig, Seeder, GRAPH_SCHEMA,
};

#[derive(Parser)]
#[command(name = "herograph", version, about = "Game knowledge graph over Neo4j")]
struct Cli {
    /// Neo4j Bolt URI
    #[arg(long, default_value = "bolt://localhost:7687", global = true, env = "HEROGRAPH_DB_URI")]
    db_uri: String,

    /// Neo4j user
    #[arg(long, default_value = "neo4j", global = true, env = "HEROGRAPH_DB_USER")]
    db_user: String,

    /// Neo4j password
    #[arg(long, default_value = "password", global = true, env = "HEROGRAPH_DB_PASSWORD")]
    db_password: String,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Clone, clap::ValueEnum)]
enum Provider {
    Openai,
    Ollama,
}

#[derive(Subcommand)]
enum Commands {
    /// Rebuild the graph from a directory of JSON datasets
    Seed {
        /// Directory containing heroes.json, abilities.json, items.json
        /// and hero_abilities.json
        #[arg(default_value = "data")]
        dir: String,

        /// Zero-based ability slot treated as the ultimate
        #[arg(long, default_value_t = 5)]
        ultimate_slot: usize,
    },
    /// Interactive natural-language Q&A shell
    Ask {
        /// LLM provider
        #[arg(long, value_enum, default_value = "openai")]
        provider: Provider,

        /// Model name
        #[arg(long, default_value = "llama-4-scout", env = "HEROGRAPH_LLM_MODEL")]
        model: String,

        /// API key (optional for local endpoints)
        #[arg(long, env = "HEROGRAPH_LLM_API_KEY")]
        api_key: Option<String>,

        /// API base URL override
        #[arg(long, env = "HEROGRAPH_LLM_BASE_URL")]
        api_base_url: Option<String>,

        /// Read the schema summary from a file instead of the built-in one
        #[arg(long)]
        schema_file: Option<String>,
    },
    /// Show node and edge counts
    Status,
}

#[tokio::main]
async fn main() {
    tracing_subscriber::fmt::init();

    let cli = Cli::parse();
    let graph_config = GraphConfig {
        uri: cli.db_uri,
        user: cli.db_user,
        password: cli.db_password,
    };

    let result = match cli.command {
        Commands::Seed { dir, ultimate_slot } => {
            run_seed(&graph_config, &dir, ultimate_slot).await
        }
        Commands::Ask {
            provider,
            model,
            api_key,
            api_base_url,
            schema_file,
        } => {
            let llm_config = LlmConfig {
                provider: match provider {
                    Provider::Openai => herograph::LlmProvider::OpenAi,
                    Provider::Ollama => herograph::LlmProvider::Ollama,
                },
                model,
                api_key,
                api_base_url,
            };
            run_ask(&graph_config, &llm_config, schema_file.as_deref()).await
        }
        Commands::Status => run_status(&graph_config).await,
    };

    if let Err(e) = result {
        eprintln!("{} {:#}", "Error:".red().bold(), e);
        std::process::exit(1);
    }
}

async fn run_seed(graph_config: &GraphConfig, dir: &str, ultimate_slot: usize) -> Result<()> {
    println!("{}", "Loading JSON datasets ....".yellow());
    let data = GameData::load_dir(dir).context("loading datasets")?;

    let store = Neo4jStore::connect(graph_config)
        .await
        .context("connecting to Neo4j")?;

    println!("{}", "Rebuilding graph ....".yellow());
    let seeder = Seeder::new(&store, SeedConfig { ultimate_slot });
    let stats = seeder.run(&data).await.context("seeding graph")?;

    println!(
        "{} {} nodes, {} relationships",
        "Done!".green().bold(),
        stats.nodes,
        stats.edges
    );
    Ok(())
}

async fn run_status(graph_config: &GraphConfig) -> Result<()> {
    let store = Neo4jStore::connect(graph_config)
        .await
        .context("connecting to Neo4j")?;
    let stats = store.stats().await?;
    println!("Nodes: {}", stats.nodes);
    println!("Edges: {}", stats.edges);
    Ok(())
}

async fn run_ask(
    graph_config: &GraphConfig,
    llm_config: &LlmConfig,
    schema_file: Option<&str>,
) -> Result<()> {
    let schema = match schema_file {
        Some(path) => std::fs::read_to_string(path)
            .with_context(|| format!("reading schema file {path}"))?
            .trim()
            .to_string(),
        None => GRAPH_SCHEMA.to_string(),
    };

    let store = Neo4jStore::connect(graph_config)
        .await
        .context("connecting to Neo4j")?;

    println!("{}", "Preparing text-to-Cypher pipeline ....".yellow());
    let translator = QueryTranslator::new(llm_config, schema.clone())?;

    println!("{}", "Preparing response generator pipeline ....".yellow());
    let generator = ResponseGenerator::new(llm_config, schema)?;

    println!("{}", "(Interrupt to stop.)".cyan());

    let stdin = std::io::stdin();
    let mut line = String::new();
    loop {
        print!("{}", "Question: ".green().bold());
        std::io::stdout().flush()?;

        line.clear();
        if stdin.read_line(&mut line)? == 0 {
            println!();
            break; // EOF
        }
        let question = line.trim();
        if question.is_empty() {
            continue;
        }

        if let Err(e) = answer(&store, &translator, &generator, question).await {
            // A bad generated query should not end the session.
            eprintln!("{} {:#}", "Error:".red().bold(), e);
        }
        println!("{}", "-".repeat(50));
    }

    println!("{}", "(Stopped.)".red());
    Ok(())
}

async fn answer(
    store: &Neo4jStore,
    translator: &QueryTranslator,
    generator: &ResponseGenerator,
    question: &str,
) -> Result<()> {
    println!("{}", "Generating Cypher query ....".yellow());
    let Some(query) = translator.translate(question).await? else {
        println!(
            "{}",
            "Question is irrelevant to the database context.".red()
        );
        return Ok(());
    };
    println!("{}\n{}", "Cypher Query:".magenta(), query.magenta());

    println!("{}", "Executing Cypher query ....".yellow());
    let rows = store.execute_readonly(&query).await?;
    let result_text = if rows.is_empty() {
        "(no result)".to_string()
    } else {
        rows.join("\n")
    };
    println!("{}\n{}", "Database Result:".blue(), result_text.blue());

    println!("{}", "Generating response ....".yellow());
    let response = generator.explain(question, &query, &result_text).await?;
    println!("{}\n{}", "Answer:".white().bold(), response.white().bold());

    Ok(())
}
