// src/deposits.rs - External-value deposit registry
//
// Tracks deposits separately from token balances. Each caller keeps only its
// most recent deposit; the running total accumulates every deposit.

use std::collections::HashMap;

use alloy_primitives::{Address, U256};
use serde::{Deserialize, Serialize};

use crate::errors::{TokenError, TokenResult};

/// Last deposit recorded for a caller.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct DepositRecord {
    pub amount: U256,
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DepositRegistry {
    deposits: HashMap<Address, DepositRecord>,
    total_deposits: U256,
}

impl DepositRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Records a deposit of `amount` by `caller`, overwriting its previous
    /// record.
    pub fn deposit(&mut self, caller: Address, amount: U256) -> TokenResult<()> {
        if amount == U256::ZERO {
            return Err(TokenError::InvalidAmount);
        }

        let new_total = self
            .total_deposits
            .checked_add(amount)
            .ok_or(TokenError::InvalidAmount)?;

        self.deposits.insert(caller, DepositRecord { amount });
        self.total_deposits = new_total;
        Ok(())
    }

    pub fn total_deposits(&self) -> U256 {
        self.total_deposits
    }

    /// Returns the caller's last deposit, or `None` if it never deposited.
    pub fn deposit_of(&self, caller: Address) -> Option<DepositRecord> {
        self.deposits.get(&caller).copied()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn addr(n: u8) -> Address {
        Address::from([n; 20])
    }

    #[test]
    fn test_deposit_records_amount() {
        let mut registry = DepositRegistry::new();
        registry.deposit(addr(2), U256::from(1000u64)).unwrap();

        assert_eq!(registry.total_deposits(), U256::from(1000u64));
        assert_eq!(
            registry.deposit_of(addr(2)),
            Some(DepositRecord {
                amount: U256::from(1000u64)
            })
        );
        assert_eq!(registry.deposit_of(addr(3)), None);
    }

    #[test]
    fn test_zero_deposit_is_invalid() {
        let mut registry = DepositRegistry::new();
        assert_eq!(
            registry.deposit(addr(2), U256::ZERO),
            Err(TokenError::InvalidAmount)
        );
        assert_eq!(registry, DepositRegistry::new());
    }

    #[test]
    fn test_repeat_deposit_overwrites_record_but_accumulates_total() {
        let mut registry = DepositRegistry::new();
        registry.deposit(addr(2), U256::from(1000u64)).unwrap();
        registry.deposit(addr(2), U256::from(250u64)).unwrap();
        registry.deposit(addr(3), U256::from(5u64)).unwrap();

        assert_eq!(
            registry.deposit_of(addr(2)).map(|r| r.amount),
            Some(U256::from(250u64))
        );
        assert_eq!(registry.total_deposits(), U256::from(1255u64));
    }

    #[test]
    fn test_total_overflow_fails_closed() {
        let mut registry = DepositRegistry::new();
        registry.deposit(addr(2), U256::MAX).unwrap();
        let before = registry.clone();

        assert_eq!(
            registry.deposit(addr(3), U256::from(1u64)),
            Err(TokenError::InvalidAmount)
        );
        assert_eq!(registry, before);
    }
}
