multiversx_sc::imports!();

use crate::math;
use crate::types::RatioType;
use crate::{
    ERR_INVALID_RATIO, ERR_PUNISHMENT_DISALLOWED, ERR_PUNISHMENT_EXCEEDS_STAKE,
    ERR_RATIO_NOT_INVERTIBLE, ERR_ZERO_AMOUNT,
};

// ============================================================
// Punishment engine
//
// The ratio type picks the cost function once, at init.
// Punishing more than the staker holds is rejected, never clamped.
// ============================================================

#[multiversx_sc::module]
pub trait PunishmentModule:
    crate::ledger::LedgerModule
    + crate::roles::RolesModule
    + crate::token::TokenModule
    + crate::events::EventsModule
{
    fn init_ratio(&self, ratio: &BigUint, ratio_type: RatioType) {
        require!(ratio_type.accepts_ratio(ratio), ERR_INVALID_RATIO);

        self.ratio().set(ratio);
        self.ratio_type().set(ratio_type);
    }

    /// Cost of `punishment` under this agreement's ratio.
    fn cost_of(&self, punishment: &BigUint) -> BigUint {
        match math::punishment_cost(self.ratio_type().get(), punishment, &self.ratio().get()) {
            Some(cost) => cost,
            None => sc_panic!(ERR_PUNISHMENT_DISALLOWED),
        }
    }

    /// Validates, collects the cost from the punisher, then strips
    /// `punishment` of value from the staker. Both amounts are burned.
    fn settle_punishment(
        &self,
        punisher: &ManagedAddress,
        punishment: &BigUint,
        message: &ManagedBuffer,
    ) -> BigUint {
        require!(*punishment > 0u64, ERR_ZERO_AMOUNT);

        let cost = self.cost_of(punishment);
        let staker = self.staker().get();
        require!(
            *punishment <= self.value_of(&staker),
            ERR_PUNISHMENT_EXCEEDS_STAKE
        );
        self.require_exact_payment(&cost);

        self.debit_value(&staker, punishment);
        self.burn_tokens(&cost);
        self.burn_tokens(punishment);

        self.griefed_event(punisher, &staker, punishment, &cost, message);
        cost
    }

    // ========================================================
    // VIEWS
    // ========================================================

    #[view(getRatio)]
    fn get_ratio(&self) -> MultiValue2<BigUint, RatioType> {
        (self.ratio().get(), self.ratio_type().get()).into()
    }

    #[view(getCost)]
    fn get_cost(&self, punishment: BigUint) -> BigUint {
        self.cost_of(&punishment)
    }

    #[view(getPunishment)]
    fn get_punishment(&self, cost: BigUint) -> BigUint {
        match math::punishment_for_cost(self.ratio_type().get(), &cost, &self.ratio().get()) {
            Some(punishment) => punishment,
            None => sc_panic!(ERR_RATIO_NOT_INVERTIBLE),
        }
    }

    // ========================================================
    // STORAGE
    // ========================================================

    #[storage_mapper("ratio")]
    fn ratio(&self) -> SingleValueMapper<BigUint>;

    #[storage_mapper("ratioType")]
    fn ratio_type(&self) -> SingleValueMapper<RatioType>;
}
