// src/events.rs - Audit events emitted by committed operations
//
// Events are ABI-encoded the same way an EVM contract would log them, so an
// indexer can consume them unchanged. Rejected calls never append an event.

use alloc::vec::Vec;

use alloy_primitives::{Address, Bytes, LogData, U256};
use alloy_sol_types::{sol, SolEvent};

sol! {
    event Initialized(address indexed owner, uint256 totalSupply);

    // Mints use the zero address as `from`, burns use it as `to`.
    event Transfer(address indexed from, address indexed to, uint256 amount);

    event TransferMemo(address indexed from, bytes memo);

    event Deposit(address indexed depositor, uint256 amount);
}

/// Append-only log of encoded events.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct EventLog {
    entries: Vec<LogData>,
}

impl EventLog {
    pub fn new() -> Self {
        Self::default()
    }

    /// Encodes and appends an event.
    pub fn emit<E: SolEvent>(&mut self, event: &E) {
        self.entries.push(event.encode_log_data());
    }

    pub fn entries(&self) -> &[LogData] {
        &self.entries
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Decodes every entry whose signature matches `E`, skipping the rest.
    pub fn decode_all<E: SolEvent>(&self) -> Vec<E> {
        self.entries
            .iter()
            .filter(|log| log.topics().first() == Some(&E::SIGNATURE_HASH))
            .filter_map(|log| E::decode_log_data(log, true).ok())
            .collect()
    }

    pub(crate) fn initialized(&mut self, owner: Address, total_supply: U256) {
        self.emit(&Initialized {
            owner,
            totalSupply: total_supply,
        });
    }

    pub(crate) fn transfer(&mut self, from: Address, to: Address, amount: U256) {
        self.emit(&Transfer { from, to, amount });
    }

    pub(crate) fn memo(&mut self, from: Address, memo: &[u8]) {
        self.emit(&TransferMemo {
            from,
            memo: Bytes::copy_from_slice(memo),
        });
    }

    pub(crate) fn deposit(&mut self, depositor: Address, amount: U256) {
        self.emit(&Deposit { depositor, amount });
    }
}
