multiversx_sc::imports!();

use crate::math;
use crate::{ERR_EMPTY_POOL, ERR_FEE_TOO_SMALL, ERR_INVALID_FEE};

/// Operator compensation. Fees never move tokens: the operator is paid in
/// freshly minted shares that dilute every other holder.
#[multiversx_sc::module]
pub trait FeesModule:
    crate::ledger::LedgerModule + crate::roles::RolesModule + crate::events::EventsModule
{
    fn init_fees(&self, fee_ratio: &BigUint, management_fee: &BigUint) {
        let one = math::precision::<Self::Api>();
        require!(*fee_ratio <= one, ERR_INVALID_FEE);
        require!(*management_fee < one, ERR_INVALID_FEE);

        self.fee_ratio().set(fee_ratio);
        self.management_fee().set(management_fee);
    }

    // ========================================================
    // ENDPOINT: distributeManagementFee
    // A fixed slice of total value, charged once per call.
    // ========================================================

    #[endpoint(distributeManagementFee)]
    fn distribute_management_fee(&self) -> BigUint {
        let operator = self.require_active_operator();

        let total_value = self.total_value().get();
        require!(total_value > 0u64, ERR_EMPTY_POOL);

        let fee = math::apply_rate(&total_value, &self.management_fee().get());
        let shares = self.mint_fee(&operator, &fee);

        self.management_fee_distributed_event(&operator, &fee, &shares);
        shares
    }

    // ========================================================
    // ENDPOINT: distributePerformanceFee
    // A slice of the rewards received since the last call.
    // ========================================================

    #[endpoint(distributePerformanceFee)]
    fn distribute_performance_fee(&self) -> BigUint {
        let operator = self.require_active_operator();

        require!(self.total_value().get() > 0u64, ERR_EMPTY_POOL);

        let rewards = self.undistributed_rewards().get();
        let fee = math::apply_rate(&rewards, &self.fee_ratio().get());
        let shares = self.mint_fee(&operator, &fee);
        self.undistributed_rewards().clear();

        self.performance_fee_distributed_event(&operator, &fee, &shares);
        shares
    }

    /// Mints shares worth exactly `fee` at the post-mint rate.
    fn mint_fee(&self, operator: &ManagedAddress, fee: &BigUint) -> BigUint {
        require!(*fee > 0u64, ERR_FEE_TOO_SMALL);

        let shares = math::fee_shares(
            fee,
            &self.total_value().get(),
            &self.total_shares().get(),
        );
        require!(shares > 0u64, ERR_FEE_TOO_SMALL);

        self.mint_diluting_shares(operator, &shares);
        shares
    }

    #[view(getFeeRatio)]
    fn get_fee_ratio(&self) -> BigUint {
        self.fee_ratio().get()
    }

    #[view(getManagementFee)]
    fn get_management_fee(&self) -> BigUint {
        self.management_fee().get()
    }

    #[storage_mapper("feeRatio")]
    fn fee_ratio(&self) -> SingleValueMapper<BigUint>;

    #[storage_mapper("managementFee")]
    fn management_fee(&self) -> SingleValueMapper<BigUint>;
}
