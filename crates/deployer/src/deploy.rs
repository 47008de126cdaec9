//! The deployment sequence and its seam to the Ethereum network.

use {
    alloy::{
        network::TransactionBuilder,
        primitives::Address,
        providers::{DynProvider, Provider},
        rpc::types::TransactionRequest,
    },
    anyhow::{Context, Result},
    contracts::ContractFactory,
};

/// Submits creation transactions and waits for the network to confirm them.
///
/// Abstracted as a trait so the deployment sequence can be tested with a
/// mocked network.
#[cfg_attr(test, mockall::automock)]
#[async_trait::async_trait]
pub trait Deploying: Send + Sync + 'static {
    /// Submits the creation transaction for the factory's contract and
    /// returns the deployed address once the transaction is confirmed.
    async fn deploy(&self, factory: &ContractFactory) -> Result<Address>;
}

/// Deployment backend talking to a real node through an alloy provider.
///
/// The provider is expected to carry the wallet of the deploying account so
/// creation transactions get signed and filled before submission.
pub struct Deployer {
    provider: DynProvider,
}

impl Deployer {
    pub fn new(provider: DynProvider) -> Self {
        Self { provider }
    }
}

#[async_trait::async_trait]
impl Deploying for Deployer {
    async fn deploy(&self, factory: &ContractFactory) -> Result<Address> {
        let tx = TransactionRequest::default().with_deploy_code(factory.creation_code().clone());
        let pending = self
            .provider
            .send_transaction(tx)
            .await
            .context("failed to submit creation transaction")?;
        tracing::debug!(
            contract = factory.name(),
            tx = ?pending.tx_hash(),
            "submitted creation transaction"
        );
        let receipt = pending
            .get_receipt()
            .await
            .context("creation transaction was not confirmed")?;
        receipt
            .contract_address
            .context("confirmed creation transaction has no contract address")
    }
}

/// Runs the deployment sequence for the named contract: resolve the factory,
/// submit the creation transaction and wait for its confirmation.
///
/// Resolution happens before anything is constructed, so an unknown name
/// never reaches the network.
pub async fn run_deployment(deployer: &dyn Deploying, name: &str) -> Result<Address> {
    let factory = contracts::factory(name)?;
    tracing::debug!(contract = name, "resolved contract factory");
    let address = deployer.deploy(&factory).await?;
    tracing::info!(contract = name, ?address, "deployment confirmed");
    Ok(address)
}

/// The single line reported on stdout after a successful deployment.
pub fn deployment_report(name: &str, address: &Address) -> String {
    format!("{name} deployed to: {address}")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn deploys_through_the_resolved_factory() {
        let deployed = Address::repeat_byte(0xab);
        let mut deployer = MockDeploying::new();
        deployer
            .expect_deploy()
            .times(1)
            .withf(|factory| {
                factory.name() == "OptimismPass" && !factory.creation_code().is_empty()
            })
            .returning(move |_| Ok(deployed));

        let address = run_deployment(&deployer, "OptimismPass").await.unwrap();
        assert_eq!(address, deployed);
    }

    #[tokio::test]
    async fn unknown_contract_submits_no_transaction() {
        let mut deployer = MockDeploying::new();
        deployer.expect_deploy().times(0);

        let err = run_deployment(&deployer, "SettlementPass")
            .await
            .unwrap_err();
        assert!(err.to_string().contains("contract not found"));
    }

    #[tokio::test]
    async fn confirmation_failure_propagates() {
        let mut deployer = MockDeploying::new();
        deployer
            .expect_deploy()
            .times(1)
            .returning(|_| Err(anyhow::anyhow!("transaction was not mined within 5 blocks")));

        let err = run_deployment(&deployer, "OptimismPass").await.unwrap_err();
        assert!(err.to_string().contains("not mined"));
    }

    #[test]
    fn formats_the_deployment_report() {
        let report = deployment_report("OptimismPass", &Address::ZERO);
        assert_eq!(
            report,
            "OptimismPass deployed to: 0x0000000000000000000000000000000000000000"
        );
    }
}
