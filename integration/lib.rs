//! Shared fixtures for tests that run against a mocked JSON-RPC transport.
//!
//! The mock transport answers each request with the next queued response, so
//! tests queue responses in the exact order the calls are made.

use alloy::{
    primitives::{address, Address, Bytes, U256},
    providers::{mock::Asserter, Provider, ProviderBuilder},
    sol_types::SolValue,
};

/// Address the mocked token is bound to. Never dereferenced by the mock
/// transport, so any non-zero address works.
pub const TOKEN: Address = address!("0xb95fa86b07475ba55c0719085d5cae91c2af48cb");

pub const ADMIN: Address = address!("0xc783df8a850f42e7f7e57013759c285caa701eb6");
pub const USER: Address = address!("0xead9c93b79ae7c1591b1fb5323bd777e86e150d4");

/// A provider whose transport replays the responses queued on `asserter`.
pub fn mocked_provider(asserter: &Asserter) -> impl Provider + Clone {
    ProviderBuilder::new().connect_mocked_client(asserter.clone())
}

/// Queue the ABI-encoded word returned by the next numeric `eth_call`.
///
/// Also covers narrower return types (`uint8` decimals): the encoding is the
/// same 32-byte word.
pub fn push_uint(asserter: &Asserter, value: U256) {
    asserter.push_success(&Bytes::from(value.abi_encode()));
}

/// Queue the ABI-encoded string returned by the next `eth_call`.
pub fn push_string(asserter: &Asserter, value: &str) {
    asserter.push_success(&Bytes::from(value.to_string().abi_encode()));
}

/// Queue the code blob returned by the next `eth_getCode`.
pub fn push_code(asserter: &Asserter, code: &'static [u8]) {
    asserter.push_success(&Bytes::from_static(code));
}
