pub mod arguments;
pub mod deploy;

use {
    crate::deploy::Deployer,
    alloy::{
        network::EthereumWallet,
        providers::{Provider, ProviderBuilder},
        rpc::client::ClientBuilder,
        signers::local::PrivateKeySigner,
    },
    anyhow::{Context, Result},
};

/// Name of the contract this binary deploys.
pub const CONTRACT_NAME: &str = "OptimismPass";

pub async fn run(args: arguments::Arguments) -> Result<()> {
    let signer: PrivateKeySigner = args
        .account
        .parse()
        .context("could not parse deployment account private key")?;
    tracing::info!(account = ?signer.address(), "deploying from account");

    let rpc = ClientBuilder::default().http(args.node_url.clone());
    let provider = ProviderBuilder::new()
        .wallet(EthereumWallet::from(signer))
        .connect_client(rpc)
        .erased();

    let deployer = Deployer::new(provider);
    let address = deploy::run_deployment(&deployer, CONTRACT_NAME).await?;
    println!("{}", deploy::deployment_report(CONTRACT_NAME, &address));
    Ok(())
}
