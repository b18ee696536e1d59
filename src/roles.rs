multiversx_sc::imports!();

use crate::types::{AgreementState, Role};
use crate::{
    ERR_INVALID_ADDRESS, ERR_ONLY_COUNTERPARTY_OR_OPERATOR, ERR_ONLY_OPERATOR,
    ERR_ONLY_STAKER_OR_OPERATOR,
};

/// Staker, counterparty and operator identities. The operator can hand its
/// seat over or give it up; once given up, nobody gets it back.
#[multiversx_sc::module]
pub trait RolesModule: crate::events::EventsModule {
    // ========================================================
    // ENDPOINT: setOperator
    // ========================================================

    #[endpoint(setOperator)]
    fn set_operator(&self, new_operator: ManagedAddress) {
        self.require_active_operator();
        self.require_distinct_operator(&new_operator);

        self.operator().set(&new_operator);
        self.operator_updated_event(&new_operator);
    }

    // ========================================================
    // ENDPOINT: renounceOperator
    // One-way: the mapper stays empty for the rest of the instance.
    // ========================================================

    #[endpoint(renounceOperator)]
    fn renounce_operator(&self) {
        self.require_active_operator();

        self.operator().clear();
        self.operator_updated_event(&ManagedAddress::zero());
    }

    // ========================================================
    // ENDPOINT: setMetadata
    // ========================================================

    #[endpoint(setMetadata)]
    fn set_metadata(&self, metadata: ManagedBuffer) {
        self.require_active_operator();

        self.metadata().set(&metadata);
        self.metadata_set_event(&metadata);
    }

    // ========================================================
    // INTERNAL: role resolution and authorization
    // ========================================================

    fn init_roles(
        &self,
        operator: &ManagedAddress,
        staker: &ManagedAddress,
        counterparty: &ManagedAddress,
    ) {
        require!(!staker.is_zero(), ERR_INVALID_ADDRESS);
        require!(!counterparty.is_zero(), ERR_INVALID_ADDRESS);
        require!(staker != counterparty, ERR_INVALID_ADDRESS);

        self.staker().set(staker);
        self.counterparty().set(counterparty);
        self.require_distinct_operator(operator);
        self.operator().set(operator);
    }

    /// Operator must be a real address held by neither party, so a caller
    /// always resolves to exactly one role.
    fn require_distinct_operator(&self, operator: &ManagedAddress) {
        require!(!operator.is_zero(), ERR_INVALID_ADDRESS);
        require!(
            *operator != self.staker().get() && *operator != self.counterparty().get(),
            ERR_INVALID_ADDRESS
        );
    }

    fn role_of(&self, address: &ManagedAddress) -> Role {
        if self.is_active_operator(address) {
            Role::Operator
        } else if *address == self.staker().get() {
            Role::Staker
        } else if *address == self.counterparty().get() {
            Role::Counterparty
        } else {
            Role::Other
        }
    }

    fn caller_role(&self) -> Role {
        let caller = self.blockchain().get_caller();
        self.role_of(&caller)
    }

    fn require_active_operator(&self) -> ManagedAddress {
        let caller = self.blockchain().get_caller();
        require!(self.role_of(&caller) == Role::Operator, ERR_ONLY_OPERATOR);
        caller
    }

    fn require_staker_or_operator(&self) -> Role {
        let role = self.caller_role();
        require!(
            matches!(role, Role::Staker | Role::Operator),
            ERR_ONLY_STAKER_OR_OPERATOR
        );
        role
    }

    fn require_counterparty_or_operator(&self) -> Role {
        let role = self.caller_role();
        require!(
            matches!(role, Role::Counterparty | Role::Operator),
            ERR_ONLY_COUNTERPARTY_OR_OPERATOR
        );
        role
    }

    // ========================================================
    // VIEWS
    // ========================================================

    #[view(getStaker)]
    fn get_staker(&self) -> ManagedAddress {
        self.staker().get()
    }

    #[view(getCounterparty)]
    fn get_counterparty(&self) -> ManagedAddress {
        self.counterparty().get()
    }

    /// Zero address once renounced.
    #[view(getOperator)]
    fn get_operator(&self) -> ManagedAddress {
        if self.operator().is_empty() {
            ManagedAddress::zero()
        } else {
            self.operator().get()
        }
    }

    #[view(hasActiveOperator)]
    fn has_active_operator(&self) -> bool {
        !self.operator().is_empty()
    }

    #[view(isActiveOperator)]
    fn is_active_operator(&self, address: &ManagedAddress) -> bool {
        !self.operator().is_empty() && self.operator().get() == *address
    }

    #[view(getAgreementState)]
    fn get_agreement_state(&self) -> AgreementState {
        if self.has_active_operator() {
            AgreementState::Created
        } else {
            AgreementState::OperatorRenounced
        }
    }

    #[view(getMetadata)]
    fn get_metadata(&self) -> ManagedBuffer {
        self.metadata().get()
    }

    // ========================================================
    // STORAGE
    // ========================================================

    #[storage_mapper("staker")]
    fn staker(&self) -> SingleValueMapper<ManagedAddress>;

    #[storage_mapper("counterparty")]
    fn counterparty(&self) -> SingleValueMapper<ManagedAddress>;

    #[storage_mapper("operator")]
    fn operator(&self) -> SingleValueMapper<ManagedAddress>;

    #[storage_mapper("metadata")]
    fn metadata(&self) -> SingleValueMapper<ManagedBuffer>;
}
