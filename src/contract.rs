// src/contract.rs - Public entry surface of the token
//
// Validation order for every mutating call: amount, then authorization, then
// balance. Nothing is written and no event is emitted until all checks pass.

use alloc::string::String;

use alloy_primitives::{Address, U256};
use tracing::debug;

use crate::access::AccessControl;
use crate::config::{ReinitializePolicy, TokenConfig};
use crate::deposits::{DepositRecord, DepositRegistry};
use crate::errors::{TokenError, TokenResult};
use crate::events::EventLog;
use crate::ledger::Ledger;

// ============================================================================
// TOKEN METADATA
// ============================================================================

pub const NAME: &str = "Simple Token";
pub const SYMBOL: &str = "SIMPLE";
pub const DECIMALS: u8 = 6;

/// The token contract: ledger, deposit registry and their audit log behind a
/// single owner-configured surface.
#[derive(Debug, Clone)]
pub struct TokenContract {
    config: TokenConfig,
    access: AccessControl,
    ledger: Ledger,
    deposits: DepositRegistry,
    events: EventLog,
}

impl TokenContract {
    pub fn new(config: TokenConfig) -> Self {
        Self {
            access: AccessControl::new(config.owner),
            config,
            ledger: Ledger::new(),
            deposits: DepositRegistry::new(),
            events: EventLog::new(),
        }
    }

    /// Deploys with default policies for `owner`.
    pub fn with_owner(owner: Address) -> Self {
        Self::new(TokenConfig::new(owner))
    }

    pub fn config(&self) -> &TokenConfig {
        &self.config
    }

    // ========================================================================
    // INITIALIZATION
    // ========================================================================

    /// Sets the total supply and credits all of it to the owner.
    ///
    /// Under [`ReinitializePolicy::Overwrite`] a second call replaces the
    /// ledger with a fresh state; under [`ReinitializePolicy::Reject`] it
    /// fails with `AlreadyInitialized`.
    pub fn initialize(&mut self, caller: Address, total_supply: U256) -> TokenResult<bool> {
        self.access
            .only_owner(caller)
            .inspect_err(|err| rejected("initialize", caller, err))?;

        if self.ledger.is_initialized() && self.config.reinitialize == ReinitializePolicy::Reject {
            let err = TokenError::AlreadyInitialized;
            rejected("initialize", caller, &err);
            return Err(err);
        }

        self.ledger.initialize(caller, total_supply);
        self.events.initialized(caller, total_supply);
        if total_supply > U256::ZERO {
            self.events.transfer(Address::ZERO, caller, total_supply);
        }

        debug!(%caller, %total_supply, "ledger initialized");
        Ok(true)
    }

    // ========================================================================
    // TOKEN OPERATIONS
    // ========================================================================

    /// Moves `amount` from `sender` to `recipient`. Only `sender` itself may
    /// initiate the move. The memo is recorded in the event log and has no
    /// effect on balances.
    pub fn transfer(
        &mut self,
        caller: Address,
        amount: U256,
        sender: Address,
        recipient: Address,
        memo: Option<&[u8]>,
    ) -> TokenResult<bool> {
        if amount == U256::ZERO {
            let err = TokenError::InvalidAmount;
            rejected("transfer", caller, &err);
            return Err(err);
        }

        self.access
            .only_holder(caller, sender)
            .inspect_err(|err| rejected("transfer", caller, err))?;

        self.ledger
            .transfer(sender, recipient, amount)
            .inspect_err(|err| rejected("transfer", caller, err))?;

        self.events.transfer(sender, recipient, amount);
        if let Some(memo) = memo {
            self.events.memo(sender, memo);
            debug!(%sender, memo = %hex::encode(memo), "transfer memo");
        }

        debug!(%sender, %recipient, %amount, "transfer committed");
        Ok(true)
    }

    /// Creates `amount` new tokens for `recipient`. Owner only.
    pub fn mint(&mut self, caller: Address, amount: U256, recipient: Address) -> TokenResult<bool> {
        self.access
            .only_owner(caller)
            .inspect_err(|err| rejected("mint", caller, err))?;

        if amount == U256::ZERO {
            return Ok(true);
        }

        self.ledger
            .mint(recipient, amount)
            .inspect_err(|err| rejected("mint", caller, err))?;
        self.events.transfer(Address::ZERO, recipient, amount);

        debug!(%recipient, %amount, total_supply = %self.ledger.total_supply(), "mint committed");
        Ok(true)
    }

    /// Destroys `amount` tokens held by `holder`. Who may burn is governed
    /// by the configured [`BurnAuthority`](crate::config::BurnAuthority).
    pub fn burn(&mut self, caller: Address, amount: U256, holder: Address) -> TokenResult<bool> {
        self.access
            .may_burn(caller, holder, self.config.burn_authority)
            .inspect_err(|err| rejected("burn", caller, err))?;

        if amount == U256::ZERO {
            return Ok(true);
        }

        self.ledger
            .burn(holder, amount)
            .inspect_err(|err| rejected("burn", caller, err))?;
        self.events.transfer(holder, Address::ZERO, amount);

        debug!(%holder, %amount, total_supply = %self.ledger.total_supply(), "burn committed");
        Ok(true)
    }

    // ========================================================================
    // DEPOSITS
    // ========================================================================

    /// Records a deposit for `caller`. Available whether or not the ledger
    /// is initialized.
    pub fn deposit(&mut self, caller: Address, amount: U256) -> TokenResult<bool> {
        self.deposits
            .deposit(caller, amount)
            .inspect_err(|err| rejected("deposit", caller, err))?;
        self.events.deposit(caller, amount);

        debug!(%caller, %amount, total_deposits = %self.deposits.total_deposits(), "deposit recorded");
        Ok(true)
    }

    // ========================================================================
    // QUERIES
    // ========================================================================

    pub fn get_total_supply(&self) -> U256 {
        self.ledger.total_supply()
    }

    pub fn get_balance(&self, account: Address) -> U256 {
        self.ledger.balance_of(account)
    }

    pub fn get_total_deposits(&self) -> U256 {
        self.deposits.total_deposits()
    }

    /// Returns the last deposit made by `caller`. There is no way to look up
    /// another account's deposit.
    pub fn get_balance_by_caller(&self, caller: Address) -> Option<DepositRecord> {
        self.deposits.deposit_of(caller)
    }

    pub fn get_name(&self) -> String {
        NAME.into()
    }

    pub fn get_symbol(&self) -> String {
        SYMBOL.into()
    }

    pub fn get_decimals(&self) -> u8 {
        DECIMALS
    }

    /// Always `None`; the token publishes no metadata URI.
    pub fn get_token_uri(&self) -> Option<String> {
        None
    }

    pub fn owner(&self) -> Address {
        self.access.owner()
    }

    pub fn is_initialized(&self) -> bool {
        self.ledger.is_initialized()
    }

    pub fn ledger(&self) -> &Ledger {
        &self.ledger
    }

    pub fn deposits(&self) -> &DepositRegistry {
        &self.deposits
    }

    pub fn events(&self) -> &EventLog {
        &self.events
    }
}

fn rejected(operation: &'static str, caller: Address, err: &TokenError) {
    debug!(operation, %caller, code = err.code().as_u32(), error = %err, "call rejected");
}
