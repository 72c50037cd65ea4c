// NlpChat console entry point
// Reads lines from stdin, one turn per line, slash commands for session control.

use anyhow::Context;
use nlpchat_core::agent::ConversationAgent;
use nlpchat_core::brain::AnalysisResult;
use nlpchat_core::config::{AgentConfig, RECOMMENDED_MODELS};
use nlpchat_core::error::AppError;
use nlpchat_core::logging::{self, LogFormat};
use std::io::Write;
use std::process::ExitCode;
use tokio::io::{AsyncBufReadExt, BufReader};
use tracing::{error, info};

enum Command {
    Stats,
    ToggleAnalysis,
    Clear,
    Info,
    Model,
    Quit,
    Unknown(String),
}

impl Command {
    fn parse(line: &str) -> Option<Self> {
        if !line.starts_with('/') {
            return None;
        }
        Some(match line {
            "/stats" => Command::Stats,
            "/analyze" => Command::ToggleAnalysis,
            "/clear" => Command::Clear,
            "/info" => Command::Info,
            "/model" => Command::Model,
            "/quit" | "/exit" => Command::Quit,
            other => Command::Unknown(other.to_string()),
        })
    }
}

fn print_banner(config: &AgentConfig) {
    println!("{}", "=".repeat(60));
    println!(" NLPCHAT - assistant local (Ollama)");
    println!("{}", "=".repeat(60));
    println!("\nCommandes:");
    println!("  /stats    - Afficher les statistiques");
    println!("  /analyze  - Activer/désactiver l'analyse NLP");
    println!("  /clear    - Effacer la mémoire");
    println!("  /model    - Changer de modèle");
    println!("  /info     - Informations sur le modèle");
    println!("  /quit     - Quitter");
    println!("\nModèles recommandés:");
    for (name, description) in RECOMMENDED_MODELS {
        println!("  {:<12} {}", name, description);
    }
    println!("\nModèle actuel: {} (OLLAMA_MODEL pour changer)\n", config.model);
}

fn print_analysis(analysis: &AnalysisResult) {
    println!("\n Analyse:");
    println!(
        "  Sentiment: {} ({:.2})",
        analysis.sentiment.label, analysis.sentiment.score
    );
    println!("  Intention: {}", analysis.intent);
    if !analysis.entities.is_empty() {
        let entities = analysis
            .entities
            .iter()
            .map(|e| format!("{} ({})", e.text, e.label))
            .collect::<Vec<_>>()
            .join(", ");
        println!("  Entités: {}", entities);
    }
}

async fn run_console(mut agent: ConversationAgent) -> anyhow::Result<()> {
    let mut show_analysis = false;
    let mut lines = BufReader::new(tokio::io::stdin()).lines();

    println!("Prêt ! Commencez à parler...\n");

    loop {
        print!("Vous: ");
        std::io::stdout().flush().context("failed to flush stdout")?;

        let Some(line) = lines.next_line().await.context("failed to read stdin")? else {
            println!("\nAu revoir !");
            break;
        };
        let line = line.trim();
        if line.is_empty() {
            continue;
        }

        if let Some(command) = Command::parse(line) {
            match command {
                Command::Quit => {
                    println!("\nAu revoir !");
                    break;
                }
                Command::Stats => {
                    let stats = agent.get_stats();
                    println!("\n Statistiques:");
                    println!("  Messages: {}", stats.total_messages);
                    println!("  Sentiments: {}", serde_json::to_string(&stats.sentiment_counts)?);
                    println!("  Intentions: {}\n", serde_json::to_string(&stats.intent_counts)?);
                }
                Command::ToggleAnalysis => {
                    show_analysis = !show_analysis;
                    let status = if show_analysis { "activée" } else { "désactivée" };
                    println!("\n Analyse NLP {}\n", status);
                }
                Command::Clear => {
                    agent.clear_memory();
                    println!("\n Mémoire effacée\n");
                }
                Command::Info => {
                    let info = agent.get_model_info();
                    println!("\n Informations:");
                    println!("  Modèle: {}", info.model);
                    println!("  Type: {}", info.kind);
                    println!("  Coût: {}", info.cost);
                    println!("  Confidentialité: {}\n", info.privacy);
                }
                Command::Model => {
                    println!("\n Pour changer de modèle, relancez le programme avec OLLAMA_MODEL=<nom>");
                    println!(" ou utilisez: ollama run <nom_modèle>\n");
                }
                Command::Unknown(other) => {
                    println!("\n Commande inconnue: {}\n", other);
                }
            }
            continue;
        }

        let result = agent.generate_response(line, show_analysis).await;
        if let Some(analysis) = &result.analysis {
            print_analysis(analysis);
        }
        println!("\nBot: {}\n", result.response);
    }

    Ok(())
}

#[tokio::main]
async fn main() -> anyhow::Result<ExitCode> {
    dotenv::dotenv().ok();
    logging::init(LogFormat::from_env()).context("failed to initialize logging")?;

    let config = AgentConfig::from_env()?;
    print_banner(&config);

    let agent = match ConversationAgent::connect(config).await {
        Ok(agent) => agent,
        Err(AppError::ModelUnavailable(e)) => {
            error!("Cannot start: {}", e);
            eprintln!("\nImpossible de démarrer: {}", e);
            eprintln!("\nÀ vérifier:");
            for (i, step) in e.remediation().iter().enumerate() {
                eprintln!("  {}. {}", i + 1, step);
            }
            return Ok(ExitCode::FAILURE);
        }
        Err(e) => return Err(e.into()),
    };

    info!("Session {} started", agent.session_id());
    run_console(agent).await?;
    Ok(ExitCode::SUCCESS)
}
