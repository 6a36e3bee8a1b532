use clap::{Parser, Subcommand};
use std::path::PathBuf;

const EXIT_SUCCESS: i32 = 0;
const EXIT_RUNTIME: i32 = 1;
const EXIT_CONFIG: i32 = 4;

#[derive(Subcommand, Debug)]
enum Commands {
    /// Play a round in the terminal (default if no subcommand)
    Play {
        /// Seed the shuffle for a reproducible starting order
        #[arg(long)]
        seed: Option<u64>,
    },
    /// Print the scoring rules for the current game
    Rules,
}

#[derive(Parser, Debug)]
#[command(name = "listl")]
#[command(about = "Order the list, submit, get scored", long_about = None)]
#[command(version)]
struct Cli {
    /// Path to a custom game file (defaults to ~/.config/listl/game.yaml)
    #[arg(short, long, global = true)]
    config: Option<String>,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[tokio::main]
async fn main() {
    let cli = Cli::parse();
    let command = cli.command.unwrap_or(Commands::Play { seed: None });

    // Load the game definition (built-in planets unless a file overrides it)
    let game_path = cli.config.map(PathBuf::from);
    let def = match listl::config::load_definition(game_path) {
        Ok(d) => d,
        Err(e) => {
            eprintln!("Game file error: {}", e);
            std::process::exit(EXIT_CONFIG);
        }
    };

    // Validate the definition at startup
    match listl::scoring::validate_definition(&def) {
        Ok(report) => {
            for advisory in &report.advisories {
                eprintln!("Warning: {}", advisory);
            }
        }
        Err(report) => {
            eprintln!("Game definition errors:");
            for error in &report.errors {
                eprintln!("  - {}", error);
            }
            std::process::exit(EXIT_CONFIG);
        }
    }

    let use_colors = listl::output::should_use_colors();

    match command {
        Commands::Play { seed } => {
            let app = listl::tui::App::new(def, seed);
            match listl::tui::run_tui(app).await {
                Ok(app) => {
                    // Reprint the last result now that the terminal is back
                    if let Some(report) = &app.last_report {
                        println!(
                            "{}",
                            listl::output::format_report(report, &app.stats, &app.def, use_colors)
                        );
                    }
                }
                Err(e) => {
                    eprintln!("Terminal error: {}", e);
                    std::process::exit(EXIT_RUNTIME);
                }
            }
        }
        Commands::Rules => {
            println!("{}", listl::output::format_rules(&def, use_colors));
        }
    }

    std::process::exit(EXIT_SUCCESS);
}
