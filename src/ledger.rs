// src/ledger.rs - Balance table and total supply
//
// Every mutation computes all new values with checked arithmetic before the
// first write, so a failed call leaves the ledger untouched. Callers are
// expected to have authorized the request already.

use std::collections::HashMap;

use alloy_primitives::{Address, U256};

use crate::errors::{TokenError, TokenResult};

/// Authoritative store of token balances.
///
/// Invariant: the sum of all balances equals `total_supply`.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Ledger {
    balances: HashMap<Address, U256>,
    total_supply: U256,
    initialized: bool,
}

impl Ledger {
    pub fn new() -> Self {
        Self::default()
    }

    // ========================================================================
    // QUERIES
    // ========================================================================

    /// Returns the balance of `account`, zero when it was never credited.
    pub fn balance_of(&self, account: Address) -> U256 {
        self.balances.get(&account).copied().unwrap_or(U256::ZERO)
    }

    pub fn total_supply(&self) -> U256 {
        self.total_supply
    }

    pub fn is_initialized(&self) -> bool {
        self.initialized
    }

    /// Iterates over every account that has ever been credited, including
    /// drained ones.
    pub fn holders(&self) -> impl Iterator<Item = (&Address, &U256)> {
        self.balances.iter()
    }

    /// Sums all balances, or `None` if the sum does not fit in a `U256`.
    pub fn sum_of_balances(&self) -> Option<U256> {
        self.balances
            .values()
            .try_fold(U256::ZERO, |acc, balance| acc.checked_add(*balance))
    }

    // ========================================================================
    // MUTATIONS
    // ========================================================================

    /// Replaces the ledger with a fresh state where `owner` holds the whole
    /// supply.
    pub fn initialize(&mut self, owner: Address, total_supply: U256) {
        self.balances.clear();
        if total_supply > U256::ZERO {
            self.balances.insert(owner, total_supply);
        }
        self.total_supply = total_supply;
        self.initialized = true;
    }

    /// Moves `amount` from `sender` to `recipient`.
    pub fn transfer(
        &mut self,
        sender: Address,
        recipient: Address,
        amount: U256,
    ) -> TokenResult<()> {
        let sender_balance = self.balance_of(sender);
        let new_sender_balance = self.checked_debit(sender_balance, amount)?;

        if sender == recipient {
            return Ok(());
        }

        let new_recipient_balance = self
            .balance_of(recipient)
            .checked_add(amount)
            .ok_or(TokenError::InvalidAmount)?;

        self.balances.insert(sender, new_sender_balance);
        self.balances.insert(recipient, new_recipient_balance);
        Ok(())
    }

    /// Credits `amount` to `recipient` and grows the supply by the same
    /// amount.
    pub fn mint(&mut self, recipient: Address, amount: U256) -> TokenResult<()> {
        let new_supply = self
            .total_supply
            .checked_add(amount)
            .ok_or(TokenError::InvalidAmount)?;
        // cannot fail once the supply fits, but stays checked
        let new_balance = self
            .balance_of(recipient)
            .checked_add(amount)
            .ok_or(TokenError::InvalidAmount)?;

        self.balances.insert(recipient, new_balance);
        self.total_supply = new_supply;
        Ok(())
    }

    /// Debits `amount` from `holder` and shrinks the supply by the same
    /// amount.
    pub fn burn(&mut self, holder: Address, amount: U256) -> TokenResult<()> {
        let new_balance = self.checked_debit(self.balance_of(holder), amount)?;
        let new_supply = self
            .total_supply
            .checked_sub(amount)
            .ok_or(TokenError::InvalidAmount)?;

        if self.balances.contains_key(&holder) {
            self.balances.insert(holder, new_balance);
        }
        self.total_supply = new_supply;
        Ok(())
    }

    fn checked_debit(&self, balance: U256, amount: U256) -> TokenResult<U256> {
        balance
            .checked_sub(amount)
            .ok_or(TokenError::InsufficientBalance {
                balance,
                required: amount,
            })
    }
}
