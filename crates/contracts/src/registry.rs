//! Resolution of contract names to factories for the vendored artifacts.

use {
    alloy::primitives::Bytes,
    anyhow::{Result, bail},
};

/// Capability to construct creation transactions for one contract type.
///
/// The handle is passive: it carries the creation bytecode and leaves
/// submission to the caller.
#[derive(Clone, Debug)]
pub struct ContractFactory {
    name: &'static str,
    creation_code: Bytes,
}

impl ContractFactory {
    pub fn name(&self) -> &'static str {
        self.name
    }

    /// The creation bytecode sent as the calldata of a deployment
    /// transaction with no `to` address.
    pub fn creation_code(&self) -> &Bytes {
        &self.creation_code
    }
}

/// Resolves a contract name to the factory for its vendored artifact.
///
/// Performs no network I/O.
pub fn factory(name: &str) -> Result<ContractFactory> {
    match name {
        "OptimismPass" => Ok(ContractFactory {
            name: "OptimismPass",
            creation_code: crate::OptimismPass::BYTECODE.clone(),
        }),
        _ => bail!("contract not found: {name}"),
    }
}
