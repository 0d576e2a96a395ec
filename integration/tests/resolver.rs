use std::io::Write;

use alloy::{primitives::U256, providers::mock::Asserter};
use helpers::{
    assert_equal, gwei, load_bytecode, resolve_contract, tokens, total_supply, DeployParams,
    ResolveError, Resolved,
};
use integration::{mocked_provider, push_code, TOKEN};

#[tokio::test]
async fn attach_rejects_codeless_address() -> anyhow::Result<()> {
    let asserter = Asserter::new();
    let provider = mocked_provider(&asserter);

    push_code(&asserter, &[]);
    let params = DeployParams {
        bytecode_path: "does-not-exist.bin".into(),
        constructor_args: vec![],
        gas_price: gwei(2),
    };
    let err = resolve_contract(&provider, Some(TOKEN), params)
        .await
        .unwrap_err();
    assert!(matches!(err, ResolveError::Binding(address) if address == TOKEN));
    Ok(())
}

#[tokio::test]
async fn configured_address_never_triggers_a_deploy() -> anyhow::Result<()> {
    let asserter = Asserter::new();
    let provider = mocked_provider(&asserter);

    // The artifact path is bogus on purpose: the deploy path would fail on it,
    // so a successful attach proves no deploy transaction was attempted.
    push_code(&asserter, &[0x60, 0x80]);
    let params = DeployParams {
        bytecode_path: "does-not-exist.bin".into(),
        constructor_args: vec![],
        gas_price: gwei(2),
    };
    let resolved = resolve_contract(&provider, Some(TOKEN), params).await?;
    assert_eq!(resolved, Resolved::Attached(TOKEN));
    Ok(())
}

#[tokio::test]
async fn missing_artifact_fails_the_deploy_path() {
    let asserter = Asserter::new();
    let provider = mocked_provider(&asserter);

    let params = DeployParams {
        bytecode_path: "does-not-exist.bin".into(),
        constructor_args: vec![],
        gas_price: gwei(2),
    };
    let err = resolve_contract(&provider, None, params).await.unwrap_err();
    assert!(matches!(err, ResolveError::Deployment(_)));
}

#[test]
fn load_bytecode_accepts_prefixed_hex() -> anyhow::Result<()> {
    let mut file = tempfile::NamedTempFile::new()?;
    writeln!(file, "0x6080604052")?;
    let code = load_bytecode(file.path())?;
    assert_eq!(code.as_ref(), &[0x60, 0x80, 0x60, 0x40, 0x52]);
    Ok(())
}

#[test]
fn load_bytecode_accepts_bare_hex() -> anyhow::Result<()> {
    let mut file = tempfile::NamedTempFile::new()?;
    write!(file, "6080604052")?;
    let code = load_bytecode(file.path())?;
    assert_eq!(code.as_ref(), &[0x60, 0x80, 0x60, 0x40, 0x52]);
    Ok(())
}

#[test]
fn load_bytecode_rejects_invalid_hex() -> anyhow::Result<()> {
    let mut file = tempfile::NamedTempFile::new()?;
    write!(file, "not bytecode")?;
    assert!(load_bytecode(file.path()).is_err());
    Ok(())
}

#[test]
fn token_amounts_use_base_units() {
    assert_eq!(tokens(1), U256::from(10).pow(U256::from(18)));
    assert_eq!(
        total_supply(),
        U256::from(200_000_000u64) * U256::from(10).pow(U256::from(18)),
    );
    assert_eq!(gwei(20), 20_000_000_000u128);
}

#[test]
fn assert_equal_passes_on_match() {
    assert_equal(tokens(3), tokens(3), "amounts differ");
    assert_equal("PKF", "PKF".to_string(), "symbols differ");
}

#[test]
#[should_panic(expected = "wrong total supply")]
fn assert_equal_panics_with_the_message() {
    assert_equal(tokens(1), tokens(2), "wrong total supply");
}
