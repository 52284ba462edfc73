//! Drives the command-line program.

use crate::reddit::Subreddit;
use crate::view::Viewable;
use clap::{Parser, Subcommand};
use clap_verbosity_flag::Verbosity;
use std::process;

/// Prints `message` to standard error and exits with `error_code`.
pub fn die(error_code: i32, message: &str) -> ! {
    eprintln!("{}", message);
    process::exit(error_code);
}

/// Program configuration.
#[derive(Debug, Parser)]
#[command(version)]
#[command(about = "Answers the eternal question, \"What's hot on Reddit right now?\"", long_about = None)]
pub struct Config {
    #[command(flatten)]
    verbosity: Verbosity,

    #[command(subcommand)]
    command: Command,
}

impl Config {
    pub fn verbosity(&self) -> Verbosity {
        self.verbosity
    }

    pub fn subreddit(&self) -> String {
        String::from(self.command.subreddit())
    }
}

#[derive(Debug, Subcommand)]
enum Command {
    /// Show how many accounts subscribe to a subreddit
    #[clap(alias = "subs")]
    Subscribers {
        /// Subreddit name, without the /r/ prefix
        subreddit: String,
    },

    /// Print the titles of the first ten hot posts in a subreddit
    #[clap(alias = "t")]
    Top {
        /// Subreddit name, without the /r/ prefix
        subreddit: String,
    },

    /// Print the titles of every hot post in a subreddit
    Titles {
        /// Subreddit name, without the /r/ prefix
        subreddit: String,
    },

    /// Count keyword occurrences in the titles of a subreddit's hot posts
    #[clap(alias = "c")]
    Count {
        /// Subreddit name, without the /r/ prefix
        subreddit: String,

        /// Keywords to count, matched case-insensitively against whole words
        keywords: Vec<String>,
    },
}

impl Command {
    pub fn subreddit(&self) -> &str {
        match &self {
            Command::Subscribers { subreddit } => subreddit,
            Command::Top { subreddit } => subreddit,
            Command::Titles { subreddit } => subreddit,
            Command::Count { subreddit, .. } => subreddit,
        }
    }
}

/// Sets up logging and runs the command-line program.
pub async fn run(config: Config) {
    env_logger::Builder::new()
        .filter_level(config.verbosity().log_level_filter())
        .init();
    Runner::new(config).run().await
}

/// Runs the command-line program.
#[derive(Debug)]
pub struct Runner {
    config: Config,
}

impl Runner {
    /// Create a new program runner using the given `config`.
    pub fn new(config: Config) -> Runner {
        Self { config }
    }

    /// Run the command-line program using its stored configuration options.
    pub async fn run(&self) {
        match &self.config.command {
            Command::Subscribers { subreddit } => self.run_subscribers(subreddit).await,
            Command::Top { subreddit } => self.run_top(subreddit).await,
            Command::Titles { subreddit } => self.run_titles(subreddit).await,
            Command::Count {
                subreddit,
                keywords,
            } => self.run_count(subreddit, keywords).await,
        }
    }

    async fn run_subscribers(&self, subreddit: &str) {
        // 0 doubles as the error value here, matching the lookup contract.
        let count = Subreddit::new(subreddit).subscribers().await;
        println!("{count}");
    }

    async fn run_top(&self, subreddit: &str) {
        match Subreddit::new(subreddit).top_ten().await {
            Some(titles) => println!("{}", titles.view()),
            None => die(1, &format!("could not retrieve hot posts for r/{subreddit}")),
        }
    }

    async fn run_titles(&self, subreddit: &str) {
        match Subreddit::new(subreddit).hot_titles().await {
            Some(titles) => println!("{}", titles.view()),
            None => die(1, &format!("could not retrieve hot posts for r/{subreddit}")),
        }
    }

    async fn run_count(&self, subreddit: &str, keywords: &[String]) {
        match Subreddit::new(subreddit).count_keywords(keywords).await {
            Some(counter) => {
                let report = counter.report();
                if !report.is_empty() {
                    println!("{}", report.view());
                }
            }
            None => die(1, &format!("could not retrieve hot posts for r/{subreddit}")),
        }
    }
}
