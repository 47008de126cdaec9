//! Build artifacts of the contracts this workspace can deploy, exposed as
//! `alloy` bindings generated from the vendored artifact JSON.

mod registry;

pub use registry::{ContractFactory, factory};

alloy::sol!(
    #[allow(missing_docs)]
    #[sol(rpc)]
    OptimismPass,
    "artifacts/OptimismPass.json"
);
