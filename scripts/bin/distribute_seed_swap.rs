use helpers::{gwei, resolve_contract, DeployParams, Resolved, SeedSwap};

use alloy::{
    primitives::{address, Address, U256},
    providers::ProviderBuilder,
    signers::local::PrivateKeySigner,
    sol_types::SolValue,
};

const RPC_URL: &str = "http://127.0.0.1:8545";

// Anvil dev account #0. Swap in the real deployer key before a mainnet run.
const DEPLOYER_KEY: &str = "0xac0974bec39a17e36ba4a6b4d238ff944bacb478cbed5efcae784d7bf4f2ff80";

// Unset either address to deploy a fresh instance instead of attaching.
const TOKEN_ADDRESS: Option<Address> =
    Some(address!("0xea067670cef5e72578bc5001dd73d73e02bf6e5e"));
const SEED_SWAP_ADDRESS: Option<Address> =
    Some(address!("0xddb866a373c2a4ccfa7c9c7227ab7eb22fe44878"));

const TOKEN_BYTECODE_PATH: &str = "artifacts/PkfToken.bin";
const SEED_SWAP_BYTECODE_PATH: &str = "artifacts/SeedSwap.bin";

const DISTRIBUTE_BATCH_SIZE: u64 = 50;
const DISTRIBUTE_OFFSET: u64 = 0;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let signer: PrivateKeySigner = DEPLOYER_KEY.parse()?;
    let deployer = signer.address();
    let provider = ProviderBuilder::new()
        .wallet(signer)
        .connect_http(RPC_URL.parse()?);

    println!("Deployer address at {deployer}");

    let gas_price = gwei(20);
    println!(
        "Sending transactions with gas price: {gas_price} ({} gweis)",
        gas_price / 1_000_000_000
    );

    let token_params = DeployParams {
        bytecode_path: TOKEN_BYTECODE_PATH.into(),
        constructor_args: deployer.abi_encode(),
        gas_price,
    };
    let token_address = match resolve_contract(&provider, TOKEN_ADDRESS, token_params).await? {
        Resolved::Deployed(address) => {
            println!("Deployed tea token at {address}");
            address
        }
        Resolved::Attached(address) => {
            println!("Interacting tea token at {address}");
            address
        }
    };

    let swap_params = DeployParams {
        bytecode_path: SEED_SWAP_BYTECODE_PATH.into(),
        constructor_args: (deployer, token_address).abi_encode(),
        gas_price,
    };
    let seed_swap_address =
        match resolve_contract(&provider, SEED_SWAP_ADDRESS, swap_params).await? {
            Resolved::Deployed(address) => {
                println!("Deployed seed swap at {address}");
                address
            }
            Resolved::Attached(address) => {
                println!("Interacting seed swap at {address}");
                address
            }
        };
    let seed_swap = SeedSwap::new(seed_swap_address, provider.clone());

    seed_swap
        .distributeAll(
            U256::from(DISTRIBUTE_BATCH_SIZE),
            U256::from(DISTRIBUTE_OFFSET),
        )
        .gas_price(gas_price)
        .send()
        .await?
        .get_receipt()
        .await?;

    seed_swap
        .distributeAll(
            U256::from(DISTRIBUTE_BATCH_SIZE),
            U256::from(DISTRIBUTE_OFFSET),
        )
        .gas_price(gas_price)
        .send()
        .await?
        .get_receipt()
        .await?;

    Ok(())
}
