// src/access.rs - Authorization predicates
//
// Checks here only read the fixed owner identity; they never touch balances,
// so a rejected caller learns nothing about ledger state.

use alloy_primitives::Address;

use crate::config::BurnAuthority;
use crate::errors::{TokenError, TokenResult};

/// Decides which callers may run owner-restricted or holder-restricted
/// operations.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AccessControl {
    owner: Address,
}

impl AccessControl {
    pub fn new(owner: Address) -> Self {
        Self { owner }
    }

    pub fn owner(&self) -> Address {
        self.owner
    }

    pub fn is_owner(&self, caller: Address) -> bool {
        caller == self.owner
    }

    pub fn is_holder(&self, caller: Address, account: Address) -> bool {
        caller == account
    }

    /// Fails with `OwnerOnly` unless `caller` is the owner.
    pub fn only_owner(&self, caller: Address) -> TokenResult<()> {
        if !self.is_owner(caller) {
            return Err(TokenError::OwnerOnly { caller });
        }
        Ok(())
    }

    /// Fails with `NotTokenOwner` unless `caller` holds `account`.
    pub fn only_holder(&self, caller: Address, account: Address) -> TokenResult<()> {
        if !self.is_holder(caller, account) {
            return Err(TokenError::NotTokenOwner {
                caller,
                holder: account,
            });
        }
        Ok(())
    }

    /// Applies the configured burn scope.
    pub fn may_burn(
        &self,
        caller: Address,
        holder: Address,
        authority: BurnAuthority,
    ) -> TokenResult<()> {
        match authority {
            BurnAuthority::Holder => self.only_holder(caller, holder),
            BurnAuthority::HolderOrOwner if self.is_owner(caller) => Ok(()),
            BurnAuthority::HolderOrOwner => self.only_holder(caller, holder),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn addr(n: u8) -> Address {
        Address::from([n; 20])
    }

    #[test]
    fn test_owner_predicates() {
        let access = AccessControl::new(addr(1));
        assert!(access.is_owner(addr(1)));
        assert!(!access.is_owner(addr(2)));
        assert!(access.only_owner(addr(1)).is_ok());
        assert_eq!(
            access.only_owner(addr(2)),
            Err(TokenError::OwnerOnly { caller: addr(2) })
        );
    }

    #[test]
    fn test_holder_predicates() {
        let access = AccessControl::new(addr(1));
        assert!(access.is_holder(addr(3), addr(3)));
        // the owner gets no bypass on other holders' funds
        assert!(!access.is_holder(addr(1), addr(3)));
        assert_eq!(
            access.only_holder(addr(1), addr(3)),
            Err(TokenError::NotTokenOwner {
                caller: addr(1),
                holder: addr(3),
            })
        );
    }

    #[test]
    fn test_burn_scope() {
        let access = AccessControl::new(addr(1));

        assert!(access.may_burn(addr(3), addr(3), BurnAuthority::Holder).is_ok());
        assert!(access.may_burn(addr(1), addr(3), BurnAuthority::Holder).is_err());

        assert!(access
            .may_burn(addr(1), addr(3), BurnAuthority::HolderOrOwner)
            .is_ok());
        assert!(access
            .may_burn(addr(2), addr(3), BurnAuthority::HolderOrOwner)
            .is_err());
    }
}
