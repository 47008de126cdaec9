use {clap::Parser, url::Url};

#[derive(Parser)]
pub struct Arguments {
    /// The Ethereum node URL to deploy through.
    #[clap(long, env, default_value = "http://localhost:8545")]
    pub node_url: Url,

    /// Hex encoded private key of the account paying for the deployment.
    #[clap(long, env, hide_env_values = true)]
    pub account: String,

    /// Filter directives for the tracing subscriber.
    #[clap(long, env, default_value = "warn,deployer=debug,contracts=debug")]
    pub log_filter: String,
}

impl std::fmt::Display for Arguments {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        writeln!(f, "node_url: {}", self.node_url)?;
        writeln!(f, "account: SECRET")?;
        writeln!(f, "log_filter: {}", self.log_filter)?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display_redacts_the_account_key() {
        let args = Arguments::parse_from([
            "deploy",
            "--account",
            "4c0883a69102937d6231471b5dbb6204fe512961708279feb1be6ae5538da033",
        ]);
        let formatted = args.to_string();
        assert!(formatted.contains("account: SECRET"));
        assert!(!formatted.contains("4c0883a6"));
    }
}
