multiversx_sc::imports!();

use crate::math;
use crate::{ERR_DEPOSIT_TOO_SMALL, ERR_EMPTY_POOL, ERR_ZERO_AMOUNT};

// ============================================================
// Value ledger
//
// Holders own shares; the pool owns `totalValue` tokens.
// One share is worth totalValue / totalShares. Rounding always
// favors the pool: mints and payouts round down, burns round up.
// ============================================================

#[multiversx_sc::module]
pub trait LedgerModule {
    /// Credits `holder` with shares for `amount` at the current rate.
    /// Returns the minted shares (never zero).
    fn credit_deposit(&self, holder: &ManagedAddress, amount: &BigUint) -> BigUint {
        let shares = math::shares_for_deposit(
            amount,
            &self.total_value().get(),
            &self.total_shares().get(),
        );
        require!(shares > 0u64, ERR_DEPOSIT_TOO_SMALL);

        self.shares(holder).update(|s| *s += &shares);
        self.total_shares().update(|ts| *ts += &shares);
        self.total_value().update(|tv| *tv += amount);
        shares
    }

    /// Raises the pool value without minting: every holder appreciates.
    fn credit_reward(&self, amount: &BigUint) {
        require!(self.total_shares().get() > 0u64, ERR_EMPTY_POOL);

        self.total_value().update(|tv| *tv += amount);
        self.undistributed_rewards().update(|r| *r += amount);
    }

    /// Mints shares without adding value: a pure transfer of ownership from
    /// every other holder to `holder`.
    fn mint_diluting_shares(&self, holder: &ManagedAddress, shares: &BigUint) {
        self.shares(holder).update(|s| *s += shares);
        self.total_shares().update(|ts| *ts += shares);
    }

    /// Takes `value` out of `holder`'s position. The caller has already checked
    /// `value <= value_of(holder)`. Returns the burned shares.
    fn debit_value(&self, holder: &ManagedAddress, value: &BigUint) -> BigUint {
        let total_value = self.total_value().get();
        let total_shares = self.total_shares().get();
        let held = self.shares(holder).get();

        let mut burned = math::shares_for_removal(value, &total_value, &total_shares);
        if burned > held {
            burned = held;
        }

        self.burn_shares(holder, &burned);
        self.remove_value(&total_value, value);
        burned
    }

    /// Burns `shares` of `holder` and returns the value they were worth.
    fn redeem_shares(&self, holder: &ManagedAddress, shares: &BigUint) -> BigUint {
        let total_value = self.total_value().get();
        let payout = math::value_of_shares(shares, &total_value, &self.total_shares().get());
        require!(payout > 0u64, ERR_ZERO_AMOUNT);

        self.burn_shares(holder, shares);
        self.remove_value(&total_value, &payout);
        payout
    }

    fn burn_shares(&self, holder: &ManagedAddress, shares: &BigUint) {
        self.shares(holder).update(|s| *s -= shares);
        self.total_shares().update(|ts| *ts -= shares);
    }

    /// Lowers the pool by `removed`. Undistributed rewards shrink in the
    /// same proportion: value that left the pool carries its rewards along.
    fn remove_value(&self, total_value: &BigUint, removed: &BigUint) {
        let remaining = total_value - removed;
        let rewards = self.undistributed_rewards().get();
        if rewards > 0u64 {
            self.undistributed_rewards()
                .set(math::mul_div_floor(&rewards, &remaining, total_value));
        }

        self.total_value().set(remaining);
        self.settle_empty_pool();
    }

    /// Without shares there is nobody left to own residual value; it stays
    /// with the contract and the ledger restarts at 1:1.
    fn settle_empty_pool(&self) {
        if self.total_shares().get() == 0u64 {
            self.total_value().set(BigUint::zero());
            self.undistributed_rewards().clear();
        }
    }

    fn value_of(&self, holder: &ManagedAddress) -> BigUint {
        math::value_of_shares(
            &self.shares(holder).get(),
            &self.total_value().get(),
            &self.total_shares().get(),
        )
    }

    // ========================================================
    // VIEWS
    // ========================================================

    #[view(getTotalValue)]
    fn get_total_value(&self) -> BigUint {
        self.total_value().get()
    }

    #[view(getTotalShares)]
    fn get_total_shares(&self) -> BigUint {
        self.total_shares().get()
    }

    #[view(getStakeholderValue)]
    fn get_stakeholder_value(&self, holder: &ManagedAddress) -> BigUint {
        self.value_of(holder)
    }

    #[view(getStakeholderShares)]
    fn get_stakeholder_shares(&self, holder: &ManagedAddress) -> BigUint {
        self.shares(holder).get()
    }

    #[view(getUndistributedRewards)]
    fn get_undistributed_rewards(&self) -> BigUint {
        self.undistributed_rewards().get()
    }

    // ========================================================
    // STORAGE
    // ========================================================

    #[storage_mapper("totalValue")]
    fn total_value(&self) -> SingleValueMapper<BigUint>;

    #[storage_mapper("totalShares")]
    fn total_shares(&self) -> SingleValueMapper<BigUint>;

    #[storage_mapper("shares")]
    fn shares(&self, holder: &ManagedAddress) -> SingleValueMapper<BigUint>;

    #[storage_mapper("undistributedRewards")]
    fn undistributed_rewards(&self) -> SingleValueMapper<BigUint>;
}
