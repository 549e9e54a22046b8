//! # Hyra role registry
//!
//! Holds role membership for every other Hyra pallet and answers their authorization
//! checks through [`hyra_primitives::RoleInspect`]. Only this pallet mutates membership.
//!
//! - `Admin` holders grant and revoke every role except the governance signer roles
//!   (`Cto`, `Finance`, `Chairman`).
//! - Governance signer roles are written once, at genesis or through
//!   [`RoleRegistry::assign_role`] during the governor's one-time initialization, and
//!   are immutable afterwards.

#![cfg_attr(not(feature = "std"), no_std)]

use frame_support::{dispatch::DispatchResult, ensure, pallet_prelude::*};
use frame_system::{ensure_signed, pallet_prelude::*};
use hyra_primitives::{Role, RoleInspect, RoleRegistry};
use sp_std::prelude::*;

pub use pallet::*;

pub mod weights;
pub use weights::WeightInfo;

#[cfg(test)]
mod mock;


#[cfg(feature = "runtime-benchmarks")]
mod benchmarking;

const LOG_TARGET: &str = "runtime::hyra-roles";

#[frame_support::pallet]
pub mod pallet {
    use super::*;

    #[pallet::config]
    pub trait Config: frame_system::Config {
        type RuntimeEvent: From<Event<Self>> + IsType<<Self as frame_system::Config>::RuntimeEvent>;
        type WeightInfo: WeightInfo;
    }

    #[pallet::pallet]
    pub struct Pallet<T>(_);

    /// Role membership; a present key means the account holds the role.
    #[pallet::storage]
    pub type Members<T: Config> = StorageDoubleMap<
        _,
        Twox64Concat,
        Role,
        Blake2_128Concat,
        T::AccountId,
        (),
        OptionQuery,
    >;

    #[pallet::event]
    #[pallet::generate_deposit(pub(super) fn deposit_event)]
    pub enum Event<T: Config> {
        /// An admin granted a role
        RoleGranted { role: Role, account: T::AccountId, sender: T::AccountId },
        /// A role was revoked by an admin or renounced by its holder
        RoleRevoked { role: Role, account: T::AccountId, sender: T::AccountId },
        /// A role was assigned by a pallet's one-time initialization
        RoleAssigned { role: Role, account: T::AccountId },
    }

    #[pallet::error]
    pub enum Error<T> {
        /// The caller does not hold the role required for this operation.
        Unauthorized,
        /// Governance signer roles cannot change once assigned.
        NotAuthorized,
    }

    #[pallet::call]
    impl<T: Config> Pallet<T> {
        #[pallet::call_index(0)]
        #[pallet::weight(T::WeightInfo::grant_role())]
        pub fn grant_role(origin: OriginFor<T>, role: Role, account: T::AccountId) -> DispatchResult {
            let sender = ensure_signed(origin)?;
            ensure!(!role.is_governance_signer(), Error::<T>::NotAuthorized);
            ensure!(Self::has_role(Role::Admin, &sender), Error::<T>::Unauthorized);

            if Members::<T>::contains_key(role, &account) {
                return Ok(());
            }
            Members::<T>::insert(role, &account, ());
            Self::deposit_event(Event::RoleGranted { role, account, sender });
            Ok(())
        }

        #[pallet::call_index(1)]
        #[pallet::weight(T::WeightInfo::revoke_role())]
        pub fn revoke_role(origin: OriginFor<T>, role: Role, account: T::AccountId) -> DispatchResult {
            let sender = ensure_signed(origin)?;
            ensure!(!role.is_governance_signer(), Error::<T>::NotAuthorized);
            ensure!(Self::has_role(Role::Admin, &sender), Error::<T>::Unauthorized);

            Self::remove_member(role, account, sender);
            Ok(())
        }

        /// Drop a role the caller holds.
        #[pallet::call_index(2)]
        #[pallet::weight(T::WeightInfo::renounce_role())]
        pub fn renounce_role(origin: OriginFor<T>, role: Role) -> DispatchResult {
            let sender = ensure_signed(origin)?;
            ensure!(!role.is_governance_signer(), Error::<T>::NotAuthorized);

            Self::remove_member(role, sender.clone(), sender);
            Ok(())
        }
    }

    #[pallet::genesis_config]
    #[derive(frame_support::DefaultNoBound)]
    pub struct GenesisConfig<T: Config> {
        /// Initial role members, governance signers included
        pub members: Vec<(Role, T::AccountId)>,
    }

    #[pallet::genesis_build]
    impl<T: Config> BuildGenesisConfig for GenesisConfig<T> {
        fn build(&self) {
            for (role, account) in &self.members {
                Members::<T>::insert(role, account, ());
            }
        }
    }
}

impl<T: Config> Pallet<T> {
    pub fn has_role(role: Role, account: &T::AccountId) -> bool {
        Members::<T>::contains_key(role, account)
    }

    pub fn members_of(role: Role) -> Vec<T::AccountId> {
        Members::<T>::iter_key_prefix(role).collect()
    }

    fn remove_member(role: Role, account: T::AccountId, sender: T::AccountId) {
        if Members::<T>::take(role, &account).is_some() {
            Self::deposit_event(Event::RoleRevoked { role, account, sender });
        }
    }
}

impl<T: Config> RoleInspect<T::AccountId> for Pallet<T> {
    fn has_role(role: Role, who: &T::AccountId) -> bool {
        Members::<T>::contains_key(role, who)
    }
}

impl<T: Config> RoleRegistry<T::AccountId> for Pallet<T> {
    fn assign_role(role: Role, who: &T::AccountId) -> DispatchResult {
        if role.is_governance_signer() {
            ensure!(
                Members::<T>::iter_key_prefix(role).next().is_none(),
                Error::<T>::NotAuthorized
            );
        }
        if Members::<T>::contains_key(role, who) {
            return Ok(());
        }

        Members::<T>::insert(role, who, ());
        log::debug!(target: LOG_TARGET, "assigned {role:?} to {who:?}");
        Self::deposit_event(Event::RoleAssigned { role, account: who.clone() });
        Ok(())
    }
}
