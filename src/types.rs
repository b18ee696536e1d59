multiversx_sc::imports!();
multiversx_sc::derive_imports!();

// ============================================================
// Ratio Type: how a punisher pays for a punishment
// ============================================================

#[type_abi]
#[derive(TopEncode, TopDecode, NestedEncode, NestedDecode, Clone, Copy, PartialEq, Eq, Debug)]
pub enum RatioType {
    /// Punishment is disallowed. Ratio must be zero.
    NaN,
    /// Punishment is free. Ratio must be zero.
    Inf,
    /// Cost = punishment * ratio / 1e18.
    Dec,
    /// Cost = ratio, whatever the punishment size.
    Flat,
}

impl RatioType {
    /// Inf and NaN carry no ratio; Dec and Flat need one.
    pub fn accepts_ratio<M: ManagedTypeApi>(self, ratio: &BigUint<M>) -> bool {
        match self {
            RatioType::NaN | RatioType::Inf => *ratio == 0u64,
            RatioType::Dec | RatioType::Flat => *ratio > 0u64,
        }
    }
}

// ============================================================
// Role: the caller's standing in this agreement
// ============================================================

#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum Role {
    Staker,
    Counterparty,
    /// Only while the operator has not renounced.
    Operator,
    /// Anybody else, including a renounced or replaced operator.
    Other,
}

// ============================================================
// Agreement State: lifecycle
// ============================================================

#[type_abi]
#[derive(TopEncode, TopDecode, NestedEncode, NestedDecode, Clone, Copy, PartialEq, Eq, Debug)]
pub enum AgreementState {
    /// Operator active. Every endpoint is reachable.
    Created,
    /// Operator gone for good. Metadata, operator transfer and fees are closed.
    OperatorRenounced,
}
