use helpers::{gwei, resolve_contract, tokens, DeployParams, PkfToken, Resolved};

use alloy::{
    primitives::Address,
    providers::ProviderBuilder,
    signers::local::PrivateKeySigner,
    sol_types::SolValue,
};

const RPC_URL: &str = "http://127.0.0.1:8545";

// Anvil dev account #0. Swap in the real deployer key before a mainnet run.
const DEPLOYER_KEY: &str = "0xac0974bec39a17e36ba4a6b4d238ff944bacb478cbed5efcae784d7bf4f2ff80";

// Set after the first run to keep interacting with the same instance.
const TOKEN_ADDRESS: Option<Address> = None;

const TOKEN_BYTECODE_PATH: &str = "artifacts/PkfToken.bin";

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let signer: PrivateKeySigner = DEPLOYER_KEY.parse()?;
    let deployer = signer.address();
    let provider = ProviderBuilder::new()
        .wallet(signer)
        .connect_http(RPC_URL.parse()?);

    println!("Deployer address at {deployer}");

    let gas_price = gwei(2);
    println!(
        "Sending transactions with gas price: {gas_price} ({} gweis)",
        gas_price / 1_000_000_000
    );

    let params = DeployParams {
        bytecode_path: TOKEN_BYTECODE_PATH.into(),
        constructor_args: deployer.abi_encode(),
        gas_price,
    };
    let token_address = match resolve_contract(&provider, TOKEN_ADDRESS, params).await? {
        Resolved::Deployed(address) => {
            println!("Deployed pkf token at {address}");
            address
        }
        Resolved::Attached(address) => {
            println!("Interacting pkf token at {address}");
            address
        }
    };
    let token = PkfToken::new(token_address, provider.clone());

    println!(
        "PKF token balance: {}",
        token.balanceOf(deployer).call().await?
    );

    token
        .burn(tokens(1))
        .gas_price(gas_price)
        .send()
        .await?
        .get_receipt()
        .await?;

    println!(
        "PKF token balance: {}",
        token.balanceOf(deployer).call().await?
    );

    Ok(())
}
