//! Common helper functions for the deployment scripts and node tests

use std::fmt::Debug;
use std::path::{Path, PathBuf};

use alloy::{
    network::TransactionBuilder,
    primitives::{Address, Bytes, U256},
    providers::Provider,
    rpc::types::TransactionRequest,
    sol,
};
use anyhow::Context;
use thiserror::Error;

sol! {
    #[allow(missing_docs)]
    #[sol(rpc)]
    contract PkfToken {
        event Transfer(address indexed from, address indexed to, uint256 value);
        event Approval(address indexed owner, address indexed spender, uint256 value);

        constructor(address admin);

        function name() external view returns (string memory);
        function symbol() external view returns (string memory);
        function decimals() external view returns (uint8);
        function totalSupply() external view returns (uint256);
        function balanceOf(address account) external view returns (uint256);
        function allowance(address owner, address spender) external view returns (uint256);
        function transfer(address to, uint256 amount) external returns (bool);
        function approve(address spender, uint256 amount) external returns (bool);
        function transferFrom(address from, address to, uint256 amount) external returns (bool);
        function burn(uint256 amount) external;
        function burnFrom(address account, uint256 amount) external;
    }

    #[allow(missing_docs)]
    #[sol(rpc)]
    contract SeedSwap {
        constructor(address admin, address token);

        function distributeAll(uint256 batchSize, uint256 offset) external;
    }
}

pub const TOKEN_NAME: &str = "PolkaFoundry";
pub const TOKEN_SYMBOL: &str = "PKF";
pub const TOKEN_DECIMALS: u8 = 18;

/// Total PKF supply minted at construction: 200M whole tokens.
pub fn total_supply() -> U256 {
    tokens(200_000_000)
}

/// Convert a whole-token count into base units (18 decimals).
pub fn tokens(amount: u64) -> U256 {
    U256::from(amount) * U256::from(10).pow(U256::from(18))
}

/// Gas price scalar in wei for an `n` gwei fee rate.
pub fn gwei(amount: u64) -> u128 {
    amount as u128 * 1_000_000_000
}

/// Read a solc `.bin` artifact (hex text, `0x` prefix optional) into creation bytecode.
pub fn load_bytecode(path: impl AsRef<Path>) -> anyhow::Result<Bytes> {
    let path = path.as_ref();
    let raw = std::fs::read_to_string(path)
        .with_context(|| format!("failed to read bytecode artifact {}", path.display()))?;
    let hex_str = raw.trim().trim_start_matches("0x");
    let bytes = alloy::hex::decode(hex_str)
        .with_context(|| format!("artifact {} is not valid hex", path.display()))?;
    Ok(Bytes::from(bytes))
}

/// Errors surfaced while acquiring a contract handle.
///
/// Nothing here is retried: deployment and attachment failures propagate to
/// the calling script unmodified, and the script aborts.
#[derive(Debug, Error)]
pub enum ResolveError {
    /// The network rejected the deployment transaction, or the receipt
    /// carried no contract address.
    #[error("deployment transaction rejected")]
    Deployment(#[source] anyhow::Error),
    /// The configured address has no contract code to attach to.
    #[error("no contract code at {0}, cannot attach")]
    Binding(Address),
    /// Transport failure on a read call.
    #[error("rpc transport failure")]
    Rpc(#[source] anyhow::Error),
}

/// How to construct a new on-chain instance when no address is configured.
pub struct DeployParams {
    /// Path to the compiled creation bytecode. Only read on the deploy path.
    pub bytecode_path: PathBuf,
    /// ABI-encoded constructor arguments, appended to the bytecode.
    pub constructor_args: Vec<u8>,
    /// Fee rate attached to the deployment transaction.
    pub gas_price: u128,
}

/// A contract address along with how it was acquired.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Resolved {
    /// A fresh instance was created on-chain.
    Deployed(Address),
    /// An existing instance was bound without sending a transaction.
    Attached(Address),
}

impl Resolved {
    pub fn address(&self) -> Address {
        match self {
            Resolved::Deployed(address) | Resolved::Attached(address) => *address,
        }
    }
}

/// Deploy a new contract instance, or attach to `existing` when it is set.
///
/// The deploy path consumes gas and is irreversible; the attach path sends
/// no transaction at all.
pub async fn resolve_contract<P: Provider>(
    provider: &P,
    existing: Option<Address>,
    params: DeployParams,
) -> Result<Resolved, ResolveError> {
    match existing {
        Some(address) => attach(provider, address).await,
        None => deploy(provider, params).await,
    }
}

/// Bind to a contract already deployed at `address`.
///
/// Fails with [`ResolveError::Binding`] when no code lives at the address,
/// which is the usual symptom of a stale or mistyped constant.
pub async fn attach<P: Provider>(
    provider: &P,
    address: Address,
) -> Result<Resolved, ResolveError> {
    let code = provider
        .get_code_at(address)
        .await
        .map_err(|e| ResolveError::Rpc(e.into()))?;
    if code.is_empty() {
        return Err(ResolveError::Binding(address));
    }
    Ok(Resolved::Attached(address))
}

async fn deploy<P: Provider>(
    provider: &P,
    params: DeployParams,
) -> Result<Resolved, ResolveError> {
    let bytecode = load_bytecode(&params.bytecode_path).map_err(ResolveError::Deployment)?;

    let mut code = bytecode.to_vec();
    code.extend_from_slice(&params.constructor_args);

    let request = TransactionRequest::default()
        .with_deploy_code(code)
        .with_gas_price(params.gas_price);

    let receipt = provider
        .send_transaction(request)
        .await
        .map_err(|e| ResolveError::Deployment(e.into()))?
        .get_receipt()
        .await
        .map_err(|e| ResolveError::Deployment(e.into()))?;

    let address = receipt.contract_address.ok_or_else(|| {
        ResolveError::Deployment(anyhow::anyhow!("receipt carries no contract address"))
    })?;
    Ok(Resolved::Deployed(address))
}

/// Compare an expected and an actual on-chain value, failing the current
/// test case with `message` on mismatch.
#[track_caller]
pub fn assert_equal<T, U>(expected: T, actual: U, message: &str)
where
    T: PartialEq<U> + Debug,
    U: Debug,
{
    if expected != actual {
        panic!("{message}: expected {expected:?}, got {actual:?}");
    }
}
