use clap::Subcommand;

#[derive(Subcommand)]
pub enum Commands {
    /// Run the HTTP server (web UI, /health and /api/chat)
    Serve {
        #[arg(long, default_value = "0.0.0.0")]
        host: String,

        #[arg(short, long, env = "PORT", default_value = "8080")]
        port: u16,

        /// DNS label the deployment is published under (e.g. "team1")
        #[arg(long, env = "MENTORBOT_SUBDOMAIN")]
        subdomain: Option<String>,

        /// Parent domain for --subdomain, used to log the public URL
        #[arg(long, env = "MENTORBOT_DOMAIN", requires = "subdomain")]
        domain: Option<String>,
    },

    /// Send a single message through validation, sanitization and the model
    Ask {
        message: String,

        #[arg(long)]
        max_tokens: Option<u32>,
    },
}
