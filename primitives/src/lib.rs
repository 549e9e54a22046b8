//! Shared types for the Hyra pallets.
//!
//! Everything the token ledger, the reward pool and the upgrade governor have to agree
//! on lives here: the fixed-point balance unit, the role vocabulary, the canonical bill
//! digest that off-chain signers sign, and the capability traits through which the
//! pallets reach the role registry and signature recovery.

#![cfg_attr(not(feature = "std"), no_std)]

extern crate alloc;

use alloc::vec::Vec;
use codec::{Decode, DecodeWithMemTracking, Encode, MaxEncodedLen};
use scale_info::TypeInfo;
use serde::{Deserialize, Serialize};
use sp_core::{ecdsa, ConstU32};
use sp_io::hashing::keccak_256;
use sp_runtime::{
    traits::IdentifyAccount, AccountId32, BoundedVec, DispatchResult, MultiSigner, RuntimeDebug,
};

/// Token amounts: 18-decimal fixed point stored as an integer.
pub type Balance = u128;

pub const DECIMALS: u8 = 18;
pub const UNIT: Balance = 1_000_000_000_000_000_000;

/// Credited to the initiator when the ledger is initialized.
pub const INITIAL_SUPPLY: Balance = 1_000_000_000 * UNIT;
/// Hard cap on `total_supply`.
pub const MAX_SUPPLY: Balance = 48_500_000_000 * UNIT;

pub const INITIATOR_POOL_NAME: &[u8] = b"Initiator";
pub const MAX_POOL_NAME_LEN: u32 = 64;
pub type PoolName = BoundedVec<u8, ConstU32<MAX_POOL_NAME_LEN>>;

pub const MAX_NONCE_LEN: u32 = 64;
/// Off-chain bill nonce. The signing service issues these as decimal strings.
pub type BillNonce = BoundedVec<u8, ConstU32<MAX_NONCE_LEN>>;

pub const SECONDS_PER_DAY: u64 = 86_400;

pub const MIN_PAYMENT_AMOUNT: Balance = 10 * UNIT;
pub const MAX_PAYMENT_AMOUNT: Balance = 10_000 * UNIT;
pub const MAX_DAILY_PAYMENT_AMOUNT: Balance = 1_000 * UNIT;
pub const MIN_DISTRIBUTION_AMOUNT: Balance = UNIT;
pub const MAX_DISTRIBUTION_AMOUNT: Balance = 5_000 * UNIT;
/// Minimum spacing between two pool distributions, in seconds.
pub const DISTRIBUTION_INTERVAL: u64 = SECONDS_PER_DAY;

pub const UPGRADE_DELAY: u64 = 3 * SECONDS_PER_DAY;
pub const REQUIRED_UPGRADE_APPROVALS: u32 = 2;

const ETH_SIGNED_MESSAGE_PREFIX: &[u8] = b"\x19Ethereum Signed Message:\n32";

/// Named capabilities held by accounts in the role registry.
#[derive(
    Encode,
    Decode,
    DecodeWithMemTracking,
    MaxEncodedLen,
    TypeInfo,
    Serialize,
    Deserialize,
    Clone,
    Copy,
    PartialEq,
    Eq,
    PartialOrd,
    Ord,
    RuntimeDebug,
)]
pub enum Role {
    Admin,
    Manager,
    Minter,
    Verifier,
    Distributor,
    /// Holder of the key that signs reward bills off-chain.
    Signer,
    /// Submits signed bills for delivery.
    Deliverer,
    Cto,
    Finance,
    Chairman,
}

impl Role {
    /// Upgrade signers are fixed when the governor is initialized and never change.
    pub fn is_governance_signer(&self) -> bool {
        matches!(self, Role::Cto | Role::Finance | Role::Chairman)
    }

    pub const GOVERNANCE_SIGNERS: [Role; 3] = [Role::Cto, Role::Finance, Role::Chairman];
}

/// Inclusive `[min, max]` bound on a single amount.
#[derive(
    Encode, Decode, DecodeWithMemTracking, MaxEncodedLen, TypeInfo, Clone, Copy, PartialEq, Eq,
    RuntimeDebug,
)]
pub struct AmountRange {
    pub min: Balance,
    pub max: Balance,
}

impl AmountRange {
    pub const fn new(min: Balance, max: Balance) -> Self {
        Self { min, max }
    }

    pub fn contains(&self, amount: Balance) -> bool {
        amount >= self.min && amount <= self.max
    }
}

/// Read side of the role registry.
pub trait RoleInspect<AccountId> {
    fn has_role(role: Role, who: &AccountId) -> bool;

    fn has_any_role(roles: &[Role], who: &AccountId) -> bool {
        roles.iter().any(|role| Self::has_role(*role, who))
    }
}

/// Role registry as seen by the one-time initialization paths of other pallets.
pub trait RoleRegistry<AccountId>: RoleInspect<AccountId> {
    /// Adds `who` to `role` without an admin check.
    ///
    /// Governance signer roles accept exactly one assignment; any later attempt fails.
    fn assign_role(role: Role, who: &AccountId) -> DispatchResult;
}

/// Recovers the identity that produced a signature over a 32-byte digest.
pub trait RecoverSigner<AccountId> {
    type Signature;

    fn recover(digest: &[u8; 32], signature: &Self::Signature) -> Option<AccountId>;
}

/// Digest a reward bill is signed over.
///
/// Packs `recipient ‖ amount ‖ nonce` with the amount widened to a 32-byte big-endian
/// word, hashes it with keccak-256 and wraps the result in the EIP-191 personal-message
/// envelope, which is what wallet `signMessage` APIs produce.
pub fn bill_digest<AccountId: Encode>(
    recipient: &AccountId,
    amount: Balance,
    nonce: &[u8],
) -> [u8; 32] {
    let mut packed = Vec::with_capacity(32 + 32 + nonce.len());
    recipient.encode_to(&mut packed);
    packed.extend_from_slice(&[0u8; 16]);
    packed.extend_from_slice(&amount.to_be_bytes());
    packed.extend_from_slice(nonce);
    let message = keccak_256(&packed);

    let mut envelope = Vec::with_capacity(ETH_SIGNED_MESSAGE_PREFIX.len() + message.len());
    envelope.extend_from_slice(ETH_SIGNED_MESSAGE_PREFIX);
    envelope.extend_from_slice(&message);
    keccak_256(&envelope)
}

/// secp256k1 recovery mapping the recovered key to its Substrate account.
pub struct EcdsaRecovery;

impl RecoverSigner<AccountId32> for EcdsaRecovery {
    type Signature = ecdsa::Signature;

    fn recover(digest: &[u8; 32], signature: &ecdsa::Signature) -> Option<AccountId32> {
        let raw: [u8; 65] = AsRef::<[u8]>::as_ref(signature).try_into().ok()?;
        let public = sp_io::crypto::secp256k1_ecdsa_recover_compressed(&raw, digest).ok()?;
        Some(MultiSigner::from(ecdsa::Public::from_raw(public)).into_account())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use sp_core::Pair;

    #[test]
    fn supply_constants() {
        assert_eq!(INITIAL_SUPPLY, 1_000_000_000u128 * 10u128.pow(18));
        assert_eq!(MAX_SUPPLY, 48_500_000_000u128 * 10u128.pow(18));
        assert!(INITIAL_SUPPLY < MAX_SUPPLY);
    }

    #[test]
    fn governance_signer_roles() {
        for role in Role::GOVERNANCE_SIGNERS {
            assert!(role.is_governance_signer());
        }
        assert!(!Role::Admin.is_governance_signer());
        assert!(!Role::Signer.is_governance_signer());
    }

    #[test]
    fn amount_range_bounds_are_inclusive() {
        let range = AmountRange::new(10, 20);
        assert!(!range.contains(9));
        assert!(range.contains(10));
        assert!(range.contains(20));
        assert!(!range.contains(21));

        // An inverted range admits nothing.
        assert!(!AmountRange::new(20, 10).contains(15));
    }

    #[test]
    fn bill_digest_binds_every_field() {
        sp_io::TestExternalities::default().execute_with(|| {
            let base = bill_digest(&7u64, 100 * UNIT, b"1700000000");
            assert_eq!(base, bill_digest(&7u64, 100 * UNIT, b"1700000000"));
            assert_ne!(base, bill_digest(&8u64, 100 * UNIT, b"1700000000"));
            assert_ne!(base, bill_digest(&7u64, 101 * UNIT, b"1700000000"));
            assert_ne!(base, bill_digest(&7u64, 100 * UNIT, b"1700000001"));
        });
    }

    #[test]
    fn ecdsa_recovery_returns_signing_account() {
        sp_io::TestExternalities::default().execute_with(|| {
            let signer = ecdsa::Pair::from_seed(&[7u8; 32]);
            let other = ecdsa::Pair::from_seed(&[9u8; 32]);
            let expected: AccountId32 = MultiSigner::from(signer.public()).into_account();

            let digest = bill_digest(&expected, 100 * UNIT, b"42");
            let signature = signer.sign_prehashed(&digest);
            assert_eq!(EcdsaRecovery::recover(&digest, &signature), Some(expected.clone()));

            let forged = other.sign_prehashed(&digest);
            assert_ne!(EcdsaRecovery::recover(&digest, &forged), Some(expected.clone()));

            // Same signature over a different bill recovers someone else.
            let tampered = bill_digest(&expected, 200 * UNIT, b"42");
            assert_ne!(EcdsaRecovery::recover(&tampered, &signature), Some(expected));
        });
    }
}
