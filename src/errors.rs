// src/errors.rs - Error taxonomy for the token ledger
//
// Every mutating operation fails with exactly one of these kinds. The numeric
// codes are part of the public interface and must never be renumbered.

use alloc::vec::Vec;

use alloy_primitives::{Address, U256};
use alloy_sol_types::SolError;
use thiserror::Error;

/// Solidity ABI counterparts of [`TokenError`], used to build revert data for
/// EVM-facing callers.
pub mod abi {
    use alloy_sol_types::sol;

    sol! {
        error OwnerOnly(address caller);
        error NotTokenOwner(address caller, address holder);
        error InsufficientBalance(uint256 balance, uint256 required);
        error InvalidAmount();
        error AlreadyInitialized();
    }
}

/// Stable numeric identifiers expected by existing callers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[repr(u32)]
pub enum ErrorCode {
    /// Caller is not the contract owner.
    OwnerOnly = 100,
    /// Caller does not hold the account it tried to move funds from.
    NotTokenOwner = 101,
    /// Debited account holds less than the requested amount.
    InsufficientBalance = 102,
    /// Amount is zero where a positive amount is required, or a credit would overflow.
    InvalidAmount = 103,
    /// Ledger was already initialized and the policy forbids a second run.
    AlreadyInitialized = 104,
}

impl ErrorCode {
    /// Returns the wire value of this code.
    pub const fn as_u32(self) -> u32 {
        self as u32
    }

    /// Parses a wire value back into a code.
    pub const fn from_u32(value: u32) -> Option<Self> {
        match value {
            100 => Some(Self::OwnerOnly),
            101 => Some(Self::NotTokenOwner),
            102 => Some(Self::InsufficientBalance),
            103 => Some(Self::InvalidAmount),
            104 => Some(Self::AlreadyInitialized),
            _ => None,
        }
    }
}

/// Failure returned by a rejected ledger or registry operation.
///
/// A rejected operation never mutates state, so every variant is
/// recoverable by retrying with a corrected amount or a different caller.
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum TokenError {
    #[error("caller {caller} is not the contract owner")]
    OwnerOnly { caller: Address },

    #[error("caller {caller} may not move funds held by {holder}")]
    NotTokenOwner { caller: Address, holder: Address },

    #[error("insufficient balance: have {balance}, need {required}")]
    InsufficientBalance { balance: U256, required: U256 },

    #[error("invalid amount")]
    InvalidAmount,

    #[error("ledger already initialized")]
    AlreadyInitialized,
}

impl TokenError {
    /// Returns the stable code for this error.
    pub const fn code(&self) -> ErrorCode {
        match self {
            Self::OwnerOnly { .. } => ErrorCode::OwnerOnly,
            Self::NotTokenOwner { .. } => ErrorCode::NotTokenOwner,
            Self::InsufficientBalance { .. } => ErrorCode::InsufficientBalance,
            Self::InvalidAmount => ErrorCode::InvalidAmount,
            Self::AlreadyInitialized => ErrorCode::AlreadyInitialized,
        }
    }

    /// Encodes the error as Solidity revert data (selector followed by the
    /// ABI-encoded fields).
    pub fn abi_encode(&self) -> Vec<u8> {
        match *self {
            Self::OwnerOnly { caller } => abi::OwnerOnly { caller }.abi_encode(),
            Self::NotTokenOwner { caller, holder } => {
                abi::NotTokenOwner { caller, holder }.abi_encode()
            }
            Self::InsufficientBalance { balance, required } => {
                abi::InsufficientBalance { balance, required }.abi_encode()
            }
            Self::InvalidAmount => abi::InvalidAmount {}.abi_encode(),
            Self::AlreadyInitialized => abi::AlreadyInitialized {}.abi_encode(),
        }
    }
}

/// Result type for token operations.
pub type TokenResult<T> = Result<T, TokenError>;
