use clap::Parser;

pub const DEFAULT_BASE_URL: &str = "http://localhost:3000";

#[derive(Parser, Debug, Clone)]
#[command(name = "todolist")]
#[command(about = "Keep a todo list in sync with a json-server style store")]
pub struct Config {
    /// Base URL of the store; `/todos` is appended to it.
    #[arg(long, env = "TODO_API_URL", default_value = DEFAULT_BASE_URL)]
    pub base_url: String,
}
