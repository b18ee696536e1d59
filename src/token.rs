multiversx_sc::imports!();

use crate::{ERR_INVALID_TOKEN, ERR_WRONG_PAYMENT, ERR_WRONG_TOKEN, ERR_ZERO_AMOUNT};

/// Thin gateway to the ESDT ledger: attached payments in, direct transfers
/// out, local burns for punished value and punishment costs.
#[multiversx_sc::module]
pub trait TokenModule {
    fn init_token(&self, token: &TokenIdentifier) {
        require!(token.is_valid_esdt_identifier(), ERR_INVALID_TOKEN);
        self.token().set(token);
    }

    /// Amount of the agreement token attached to the call. Exactly one
    /// payment, in the agreement token, with a non-zero amount.
    fn received_amount(&self) -> BigUint {
        require!(
            self.call_value().egld_value().clone_value() == 0u64,
            ERR_WRONG_TOKEN
        );
        let payments = self.call_value().all_esdt_transfers().clone_value();
        require!(!payments.is_empty(), ERR_ZERO_AMOUNT);
        require!(payments.len() == 1, ERR_WRONG_PAYMENT);

        let payment = payments.get(0);
        require!(
            payment.token_identifier == self.token().get() && payment.token_nonce == 0,
            ERR_WRONG_TOKEN
        );
        require!(payment.amount > 0u64, ERR_ZERO_AMOUNT);
        payment.amount.clone()
    }

    /// The caller must attach exactly `expected`, or nothing when `expected`
    /// is zero.
    fn require_exact_payment(&self, expected: &BigUint) {
        if *expected == 0u64 {
            require!(
                self.call_value().egld_value().clone_value() == 0u64
                    && self.call_value().all_esdt_transfers().is_empty(),
                ERR_WRONG_PAYMENT
            );
            return;
        }

        let payments = self.call_value().all_esdt_transfers().clone_value();
        require!(payments.len() == 1, ERR_WRONG_PAYMENT);
        let payment = payments.get(0);
        require!(
            payment.token_identifier == self.token().get() && payment.token_nonce == 0,
            ERR_WRONG_TOKEN
        );
        require!(payment.amount == *expected, ERR_WRONG_PAYMENT);
        require!(
            self.call_value().egld_value().clone_value() == 0u64,
            ERR_WRONG_TOKEN
        );
    }

    fn send_tokens(&self, to: &ManagedAddress, amount: &BigUint) {
        if *amount > 0u64 {
            self.send().direct_esdt(to, &self.token().get(), 0, amount);
        }
    }

    fn burn_tokens(&self, amount: &BigUint) {
        if *amount > 0u64 {
            self.send().esdt_local_burn(&self.token().get(), 0, amount);
        }
    }

    #[view(getToken)]
    fn get_token(&self) -> TokenIdentifier {
        self.token().get()
    }

    #[storage_mapper("token")]
    fn token(&self) -> SingleValueMapper<TokenIdentifier>;
}
