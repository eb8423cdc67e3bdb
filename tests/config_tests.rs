// tests/config_tests.rs - Loading deployment configuration

use alloy_primitives::Address;
use simple_token::config::{ENV_BURN_AUTHORITY, ENV_OWNER, ENV_REINITIALIZE};
use simple_token::{BurnAuthority, ReinitializePolicy, TokenConfig, TokenContract, U256};

#[test]
fn test_config_deserializes_from_json() {
    let config: TokenConfig = serde_json::from_str(
        r#"{
            "owner": "0x0202020202020202020202020202020202020202",
            "reinitialize": "reject",
            "burn_authority": "holder-or-owner"
        }"#,
    )
    .unwrap();

    assert_eq!(config.owner, Address::from([2u8; 20]));
    assert_eq!(config.reinitialize, ReinitializePolicy::Reject);
    assert_eq!(config.burn_authority, BurnAuthority::HolderOrOwner);
}

#[test]
fn test_config_policies_default_when_omitted() {
    let config: TokenConfig =
        serde_json::from_str(r#"{ "owner": "0x0202020202020202020202020202020202020202" }"#)
            .unwrap();

    assert_eq!(config, TokenConfig::new(Address::from([2u8; 20])));
}

// The only test in this binary that touches the process environment.
#[test]
fn test_config_from_env_drives_contract() {
    std::env::set_var(ENV_OWNER, "0x0303030303030303030303030303030303030303");
    std::env::set_var(ENV_REINITIALIZE, "reject");
    std::env::set_var(ENV_BURN_AUTHORITY, "holder");

    let config = TokenConfig::from_env().unwrap();
    let owner = Address::from([3u8; 20]);
    assert_eq!(config.owner, owner);

    let mut token = TokenContract::new(config);
    assert_eq!(token.initialize(owner, U256::from(10u64)), Ok(true));
    assert!(token.initialize(owner, U256::from(20u64)).is_err());
    assert_eq!(token.get_total_supply(), U256::from(10u64));

    std::env::remove_var(ENV_OWNER);
    std::env::remove_var(ENV_REINITIALIZE);
    std::env::remove_var(ENV_BURN_AUTHORITY);
}
