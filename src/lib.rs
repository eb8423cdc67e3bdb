// src/lib.rs - Simple Token ledger core
//
// A deterministic, owner-gated fungible token: per-account balances with six
// implied decimals, a checked total-supply counter, caller-gated transfers and
// an independent deposit registry. Every operation runs to completion or fails
// without side effects; hosts serialize concurrent callers.

extern crate alloc;

pub mod access;
pub mod config;
pub mod contract;
pub mod deposits;
pub mod errors;
pub mod events;
pub mod ledger;

pub use access::AccessControl;
pub use config::{BurnAuthority, ConfigError, ReinitializePolicy, TokenConfig};
pub use contract::{TokenContract, DECIMALS, NAME, SYMBOL};
pub use deposits::{DepositRecord, DepositRegistry};
pub use errors::{ErrorCode, TokenError, TokenResult};
pub use events::EventLog;
pub use ledger::Ledger;

/// Re-exported so callers need not depend on `alloy-primitives` directly.
pub use alloy_primitives::{Address, U256};
