multiversx_sc::imports!();

use crate::types::RatioType;

#[multiversx_sc::module]
pub trait EventsModule {
    #[event("agreementInitialized")]
    fn agreement_initialized_event(
        &self,
        #[indexed] operator: &ManagedAddress,
        #[indexed] staker: &ManagedAddress,
        #[indexed] counterparty: &ManagedAddress,
        #[indexed] token: &TokenIdentifier,
        #[indexed] ratio: &BigUint,
        #[indexed] ratio_type: RatioType,
        metadata: &ManagedBuffer,
    );

    #[event("operatorUpdated")]
    fn operator_updated_event(&self, #[indexed] operator: &ManagedAddress);

    #[event("metadataSet")]
    fn metadata_set_event(&self, metadata: &ManagedBuffer);

    /// Emitted for deposits (shares > 0) and rewards (shares == 0).
    #[event("depositIncreased")]
    fn deposit_increased_event(
        &self,
        #[indexed] token: &TokenIdentifier,
        #[indexed] user: &ManagedAddress,
        #[indexed] amount: &BigUint,
        shares: &BigUint,
    );

    #[event("depositDecreased")]
    fn deposit_decreased_event(
        &self,
        #[indexed] token: &TokenIdentifier,
        #[indexed] user: &ManagedAddress,
        #[indexed] amount: &BigUint,
        shares: &BigUint,
    );

    #[event("managementFeeDistributed")]
    fn management_fee_distributed_event(
        &self,
        #[indexed] operator: &ManagedAddress,
        #[indexed] fee: &BigUint,
        shares: &BigUint,
    );

    #[event("performanceFeeDistributed")]
    fn performance_fee_distributed_event(
        &self,
        #[indexed] operator: &ManagedAddress,
        #[indexed] fee: &BigUint,
        shares: &BigUint,
    );

    #[event("griefed")]
    fn griefed_event(
        &self,
        #[indexed] punisher: &ManagedAddress,
        #[indexed] staker: &ManagedAddress,
        #[indexed] punishment: &BigUint,
        #[indexed] cost: &BigUint,
        message: &ManagedBuffer,
    );
}
