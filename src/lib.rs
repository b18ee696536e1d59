#![no_std]

multiversx_sc::imports!();

pub mod events;
pub mod fees;
pub mod ledger;
pub mod math;
pub mod punishment;
pub mod roles;
pub mod token;
pub mod types;

use types::{AgreementState, RatioType};

// ============================================================
// Errors
// ============================================================

pub const ERR_ALREADY_INITIALIZED: &str = "ERR_ALREADY_INITIALIZED";
pub const ERR_INVALID_ADDRESS: &str = "ERR_INVALID_ADDRESS";
pub const ERR_INVALID_TOKEN: &str = "ERR_INVALID_TOKEN";
pub const ERR_INVALID_RATIO: &str = "ERR_INVALID_RATIO";
pub const ERR_INVALID_FEE: &str = "ERR_INVALID_FEE";
pub const ERR_ONLY_OPERATOR: &str = "ERR_ONLY_OPERATOR";
pub const ERR_ONLY_STAKER_OR_OPERATOR: &str = "ERR_ONLY_STAKER_OR_OPERATOR";
pub const ERR_ONLY_COUNTERPARTY_OR_OPERATOR: &str = "ERR_ONLY_COUNTERPARTY_OR_OPERATOR";
pub const ERR_STAKER_CANNOT_WITHDRAW: &str = "ERR_STAKER_CANNOT_WITHDRAW";
pub const ERR_WRONG_TOKEN: &str = "ERR_WRONG_TOKEN";
pub const ERR_WRONG_PAYMENT: &str = "ERR_WRONG_PAYMENT";
pub const ERR_ZERO_AMOUNT: &str = "ERR_ZERO_AMOUNT";
pub const ERR_DEPOSIT_TOO_SMALL: &str = "ERR_DEPOSIT_TOO_SMALL";
pub const ERR_FEE_TOO_SMALL: &str = "ERR_FEE_TOO_SMALL";
pub const ERR_EMPTY_POOL: &str = "ERR_EMPTY_POOL";
pub const ERR_AMOUNT_EXCEEDS_STAKE: &str = "ERR_AMOUNT_EXCEEDS_STAKE";
pub const ERR_PUNISHMENT_EXCEEDS_STAKE: &str = "ERR_PUNISHMENT_EXCEEDS_STAKE";
pub const ERR_PUNISHMENT_DISALLOWED: &str = "ERR_PUNISHMENT_DISALLOWED";
pub const ERR_RATIO_NOT_INVERTIBLE: &str = "ERR_RATIO_NOT_INVERTIBLE";
pub const ERR_INSUFFICIENT_SHARES: &str = "ERR_INSUFFICIENT_SHARES";

// ============================================================
// Contract
// ============================================================

#[multiversx_sc::contract]
pub trait GriefingAgreement:
    events::EventsModule
    + roles::RolesModule
    + token::TokenModule
    + ledger::LedgerModule
    + fees::FeesModule
    + punishment::PunishmentModule
{
    // ========================================================
    // Init / Upgrade
    // Runs once, from the deploying factory.
    // ========================================================

    #[init]
    fn init(
        &self,
        operator: ManagedAddress,
        staker: ManagedAddress,
        counterparty: ManagedAddress,
        token: TokenIdentifier,
        ratio: BigUint,
        ratio_type: RatioType,
        fee_ratio: BigUint,
        management_fee: BigUint,
        metadata: ManagedBuffer,
    ) {
        require!(!self.initialized().get(), ERR_ALREADY_INITIALIZED);
        self.initialized().set(true);

        self.init_roles(&operator, &staker, &counterparty);
        self.init_token(&token);
        self.init_ratio(&ratio, ratio_type);
        self.init_fees(&fee_ratio, &management_fee);
        self.metadata().set(&metadata);

        self.total_value().set(BigUint::zero());
        self.total_shares().set(BigUint::zero());

        self.agreement_initialized_event(
            &operator,
            &staker,
            &counterparty,
            &token,
            &ratio,
            ratio_type,
            &metadata,
        );
    }

    #[upgrade]
    fn upgrade(&self) {}

    // ========================================================
    // ENDPOINT: deposit
    // Staker or active operator. Shares always land on the staker.
    // ========================================================

    #[endpoint(deposit)]
    #[payable("*")]
    fn deposit(&self) -> BigUint {
        self.require_staker_or_operator();
        let amount = self.received_amount();

        let staker = self.staker().get();
        let shares = self.credit_deposit(&staker, &amount);

        self.deposit_increased_event(&self.token().get(), &staker, &amount, &shares);
        shares
    }

    // ========================================================
    // ENDPOINT: reward
    // Counterparty or active operator. Appreciates every share.
    // ========================================================

    #[endpoint(reward)]
    #[payable("*")]
    fn reward(&self) {
        self.require_counterparty_or_operator();
        let amount = self.received_amount();

        self.credit_reward(&amount);

        self.deposit_increased_event(
            &self.token().get(),
            &self.staker().get(),
            &amount,
            &BigUint::zero(),
        );
    }

    // ========================================================
    // ENDPOINT: punish
    // Counterparty or active operator. Attach exactly getCost(punishment).
    // ========================================================

    #[endpoint(punish)]
    #[payable("*")]
    fn punish(&self, punishment: BigUint, message: ManagedBuffer) -> BigUint {
        self.require_counterparty_or_operator();
        let punisher = self.blockchain().get_caller();

        self.settle_punishment(&punisher, &punishment, &message)
    }

    // ========================================================
    // ENDPOINT: releaseStake
    // Counterparty or active operator hands stake back to the staker.
    // ========================================================

    #[endpoint(releaseStake)]
    fn release_stake(&self, amount: BigUint) -> BigUint {
        self.require_counterparty_or_operator();
        require!(amount > 0u64, ERR_ZERO_AMOUNT);

        let staker = self.staker().get();
        require!(amount <= self.value_of(&staker), ERR_AMOUNT_EXCEEDS_STAKE);

        let burned = self.debit_value(&staker, &amount);
        self.send_tokens(&staker, &amount);

        self.deposit_decreased_event(&self.token().get(), &staker, &amount, &burned);
        burned
    }

    // ========================================================
    // ENDPOINT: withdraw
    // Fee shares only. The staker's collateral leaves through
    // releaseStake, never on the staker's own initiative.
    // ========================================================

    #[endpoint(withdraw)]
    fn withdraw(&self, share_amount: BigUint) -> BigUint {
        let caller = self.blockchain().get_caller();
        require!(caller != self.staker().get(), ERR_STAKER_CANNOT_WITHDRAW);
        require!(share_amount > 0u64, ERR_ZERO_AMOUNT);
        require!(
            share_amount <= self.shares(&caller).get(),
            ERR_INSUFFICIENT_SHARES
        );

        let payout = self.redeem_shares(&caller, &share_amount);
        self.send_tokens(&caller, &payout);

        self.deposit_decreased_event(&self.token().get(), &caller, &payout, &share_amount);
        payout
    }

    // ========================================================
    // VIEWS
    // ========================================================

    /// (total value, total shares, staker value, undistributed rewards, state)
    #[view(getAgreementStats)]
    fn get_agreement_stats(
        &self,
    ) -> MultiValue5<BigUint, BigUint, BigUint, BigUint, AgreementState> {
        let staker_value = self.value_of(&self.staker().get());
        (
            self.total_value().get(),
            self.total_shares().get(),
            staker_value,
            self.undistributed_rewards().get(),
            self.get_agreement_state(),
        )
            .into()
    }

    #[storage_mapper("initialized")]
    fn initialized(&self) -> SingleValueMapper<bool>;
}
