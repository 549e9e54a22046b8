#![cfg_attr(not(feature = "std"), no_std)]

//! # Upgrade governor
//!
//! Time-locked, multi-signer gate in front of runtime code upgrades.
//!
//! An admin proposes the hash of the new runtime code. The governance signers (the
//! holders of `Cto`, `Finance` and `Chairman`, fixed once by [`Pallet::initialize`]) approve
//! it, and once [`Config::UpgradeDelay`] seconds have passed and
//! [`Config::RequiredApprovals`] signers have approved, anyone may execute it. Execution
//! bumps the version and authorizes exactly that code hash for enactment; the runtime
//! wires [`GovernedSetCode`] as `frame_system`'s `OnSetCode`, so code that was not
//! authorized this way is rejected with [`Error::UpgradeNotAuthorized`].
//!
//! A proposal can be cancelled by an admin until its activation time. Proposing while
//! another upgrade is pending replaces it and discards its approvals.

use codec::{Decode, Encode, MaxEncodedLen};
use core::marker::PhantomData;
use frame_support::{
    dispatch::DispatchResult,
    ensure,
    pallet_prelude::*,
    traits::{ConstU32, UnixTime},
};
use frame_system::{ensure_root, ensure_signed, pallet_prelude::*};
use hyra_primitives::{Role, RoleInspect, RoleRegistry};
use scale_info::TypeInfo;
use sp_runtime::{traits::Hash, RuntimeDebug};
use sp_std::prelude::*;

pub use pallet::*;

pub mod weights;
pub use weights::WeightInfo;

#[cfg(test)]
mod mock;


#[cfg(feature = "runtime-benchmarks")]
mod benchmarking;

const LOG_TARGET: &str = "runtime::upgrade-governor";

/// Upper bound on approvals per proposal; one per governance signer role.
pub type MaxApprovals = ConstU32<3>;

/// The upgrade waiting for approvals and its activation time.
#[derive(Encode, Decode, MaxEncodedLen, TypeInfo, Clone, PartialEq, Eq, RuntimeDebug)]
pub struct PendingUpgrade<AccountId, CodeHash> {
    /// Hash of the proposed runtime code.
    pub new_implementation: CodeHash,
    /// Unix time, in seconds.
    pub proposed_at: u64,
    /// Earliest execution time, in seconds.
    pub activation_time: u64,
    pub approvals: BoundedVec<AccountId, MaxApprovals>,
}

#[frame_support::pallet]
pub mod pallet {
    use super::*;

    #[pallet::config]
    pub trait Config: frame_system::Config {
        type RuntimeEvent: From<Event<Self>> + IsType<<Self as frame_system::Config>::RuntimeEvent>;

        type Roles: RoleRegistry<Self::AccountId>;

        type UnixTime: UnixTime;

        /// Seconds between a proposal and its earliest execution.
        #[pallet::constant]
        type UpgradeDelay: Get<u64>;

        /// Distinct signer approvals needed to execute.
        #[pallet::constant]
        type RequiredApprovals: Get<u32>;

        type WeightInfo: WeightInfo;
    }

    #[pallet::pallet]
    pub struct Pallet<T>(_);

    #[pallet::type_value]
    pub fn DefaultVersion() -> u32 {
        1
    }

    #[pallet::storage]
    pub type Pending<T: Config> =
        StorageValue<_, PendingUpgrade<T::AccountId, T::Hash>, OptionQuery>;

    /// Code hash of the last executed upgrade
    #[pallet::storage]
    pub type CurrentImplementation<T: Config> = StorageValue<_, T::Hash, OptionQuery>;

    /// Incremented by every executed upgrade
    #[pallet::storage]
    pub type Version<T> = StorageValue<_, u32, ValueQuery, DefaultVersion>;

    /// Code hash cleared for enactment by `execute_upgrade`
    #[pallet::storage]
    pub type AuthorizedCode<T: Config> = StorageValue<_, T::Hash, OptionQuery>;

    #[pallet::storage]
    pub type Initialized<T> = StorageValue<_, bool, ValueQuery>;

    #[pallet::event]
    #[pallet::generate_deposit(pub(super) fn deposit_event)]
    pub enum Event<T: Config> {
        /// Governance signers fixed
        Initialized { cto: T::AccountId, finance: T::AccountId, chairman: T::AccountId },
        UpgradeProposed { new_implementation: T::Hash, activation_time: u64 },
        UpgradeApproved { signer: T::AccountId, new_implementation: T::Hash },
        /// Upgrade executed and its code authorized
        Upgraded { new_implementation: T::Hash, version: u32 },
        UpgradeCanceled { new_implementation: T::Hash },
        /// Authorized code written to storage
        CodeEnacted { code_hash: T::Hash },
    }

    #[pallet::error]
    pub enum Error<T> {
        /// The caller does not hold the role required for this operation.
        Unauthorized,
        InvalidInitialization,
        /// The caller is not a governance signer.
        NotAuthorized,
        /// No upgrade is pending.
        UpgradeNotScheduled,
        /// The signer already approved the pending upgrade.
        AlreadyApproved,
        TooManyApprovals,
        ActivationTimeNotReached,
        MinimumApprovalsNotReached,
        /// A pending upgrade can no longer be cancelled once its activation time is reached.
        ActivationTimePassed,
        /// Runtime code was set without an executed upgrade for its hash.
        UpgradeNotAuthorized,
    }

    #[pallet::call]
    impl<T: Config> Pallet<T> {
        /// Fix the governance signers. Can only happen once.
        #[pallet::call_index(0)]
        #[pallet::weight(T::WeightInfo::initialize())]
        pub fn initialize(
            origin: OriginFor<T>,
            cto: T::AccountId,
            finance: T::AccountId,
            chairman: T::AccountId,
        ) -> DispatchResult {
            ensure_root(origin)?;
            Self::do_initialize(cto, finance, chairman)
        }

        #[pallet::call_index(1)]
        #[pallet::weight(T::WeightInfo::propose_upgrade())]
        pub fn propose_upgrade(origin: OriginFor<T>, new_implementation: T::Hash) -> DispatchResult {
            let who = ensure_signed(origin)?;
            ensure!(T::Roles::has_role(Role::Admin, &who), Error::<T>::Unauthorized);

            let now = Self::now();
            let activation_time = now.saturating_add(T::UpgradeDelay::get());
            if let Some(replaced) = Pending::<T>::get() {
                log::info!(
                    target: LOG_TARGET,
                    "proposal {:?} replaced before execution",
                    replaced.new_implementation
                );
            }
            Pending::<T>::put(PendingUpgrade {
                new_implementation,
                proposed_at: now,
                activation_time,
                approvals: BoundedVec::new(),
            });

            log::info!(target: LOG_TARGET, "upgrade to {new_implementation:?} proposed, active at {activation_time}");
            Self::deposit_event(Event::UpgradeProposed { new_implementation, activation_time });
            Ok(())
        }

        #[pallet::call_index(2)]
        #[pallet::weight(T::WeightInfo::approve_upgrade())]
        pub fn approve_upgrade(origin: OriginFor<T>) -> DispatchResult {
            let signer = ensure_signed(origin)?;
            ensure!(
                T::Roles::has_any_role(&Role::GOVERNANCE_SIGNERS, &signer),
                Error::<T>::NotAuthorized
            );

            let new_implementation = Pending::<T>::try_mutate(|maybe_pending| {
                let pending = maybe_pending.as_mut().ok_or(Error::<T>::UpgradeNotScheduled)?;
                ensure!(!pending.approvals.contains(&signer), Error::<T>::AlreadyApproved);
                pending
                    .approvals
                    .try_push(signer.clone())
                    .map_err(|_| Error::<T>::TooManyApprovals)?;
                Ok::<_, Error<T>>(pending.new_implementation)
            })?;

            Self::deposit_event(Event::UpgradeApproved { signer, new_implementation });
            Ok(())
        }

        /// Execute the pending upgrade once it is both active and approved.
        #[pallet::call_index(3)]
        #[pallet::weight(T::WeightInfo::execute_upgrade())]
        pub fn execute_upgrade(origin: OriginFor<T>) -> DispatchResult {
            ensure_signed(origin)?;

            let pending = Pending::<T>::get().ok_or(Error::<T>::UpgradeNotScheduled)?;
            ensure!(Self::now() >= pending.activation_time, Error::<T>::ActivationTimeNotReached);
            ensure!(
                pending.approvals.len() as u32 >= T::RequiredApprovals::get(),
                Error::<T>::MinimumApprovalsNotReached
            );

            let new_implementation = pending.new_implementation;
            let version = Version::<T>::get().saturating_add(1);
            Version::<T>::put(version);
            CurrentImplementation::<T>::put(new_implementation);
            AuthorizedCode::<T>::put(new_implementation);
            Pending::<T>::kill();

            log::info!(target: LOG_TARGET, "upgraded to {new_implementation:?}, version {version}");
            Self::deposit_event(Event::Upgraded { new_implementation, version });
            Ok(())
        }

        #[pallet::call_index(4)]
        #[pallet::weight(T::WeightInfo::cancel_upgrade())]
        pub fn cancel_upgrade(origin: OriginFor<T>) -> DispatchResult {
            let who = ensure_signed(origin)?;
            ensure!(T::Roles::has_role(Role::Admin, &who), Error::<T>::Unauthorized);

            let pending = Pending::<T>::get().ok_or(Error::<T>::UpgradeNotScheduled)?;
            ensure!(Self::now() < pending.activation_time, Error::<T>::ActivationTimePassed);
            Pending::<T>::kill();

            log::info!(target: LOG_TARGET, "upgrade to {:?} cancelled", pending.new_implementation);
            Self::deposit_event(Event::UpgradeCanceled {
                new_implementation: pending.new_implementation,
            });
            Ok(())
        }
    }

    #[pallet::genesis_config]
    #[derive(frame_support::DefaultNoBound)]
    pub struct GenesisConfig<T: Config> {
        pub cto: Option<T::AccountId>,
        pub finance: Option<T::AccountId>,
        pub chairman: Option<T::AccountId>,
    }

    #[pallet::genesis_build]
    impl<T: Config> BuildGenesisConfig for GenesisConfig<T> {
        fn build(&self) {
            match (&self.cto, &self.finance, &self.chairman) {
                (Some(cto), Some(finance), Some(chairman)) => {
                    Pallet::<T>::do_initialize(cto.clone(), finance.clone(), chairman.clone())
                        .expect("Invalid upgrade governor genesis");
                }
                (None, None, None) => {}
                _ => panic!("Upgrade governor genesis needs all three signers or none"),
            }
        }
    }
}

impl<T: Config> Pallet<T> {
    pub fn pending_upgrade() -> Option<PendingUpgrade<T::AccountId, T::Hash>> {
        Pending::<T>::get()
    }

    /// Proposed code hash, or the zero hash when nothing is pending.
    pub fn pending_implementation() -> T::Hash {
        Pending::<T>::get().map(|p| p.new_implementation).unwrap_or_default()
    }

    pub fn get_version() -> u32 {
        Version::<T>::get()
    }

    pub fn current_implementation() -> Option<T::Hash> {
        CurrentImplementation::<T>::get()
    }

    fn now() -> u64 {
        T::UnixTime::now().as_secs()
    }

    pub(crate) fn do_initialize(
        cto: T::AccountId,
        finance: T::AccountId,
        chairman: T::AccountId,
    ) -> DispatchResult {
        ensure!(!Initialized::<T>::get(), Error::<T>::InvalidInitialization);

        T::Roles::assign_role(Role::Cto, &cto)?;
        T::Roles::assign_role(Role::Finance, &finance)?;
        T::Roles::assign_role(Role::Chairman, &chairman)?;
        Initialized::<T>::put(true);

        Self::deposit_event(Event::Initialized { cto, finance, chairman });
        Ok(())
    }
}

/// `OnSetCode` hook that only lets through code authorized by an executed upgrade.
pub struct GovernedSetCode<T>(PhantomData<T>);

impl<T: Config> frame_system::SetCode<T> for GovernedSetCode<T> {
    fn set_code(code: Vec<u8>) -> DispatchResult {
        let code_hash = T::Hashing::hash(&code);
        ensure!(
            AuthorizedCode::<T>::get() == Some(code_hash),
            Error::<T>::UpgradeNotAuthorized
        );

        AuthorizedCode::<T>::kill();
        frame_system::Pallet::<T>::update_code_in_storage(&code);

        log::info!(target: LOG_TARGET, "enacted runtime code {code_hash:?}");
        Pallet::<T>::deposit_event(Event::CodeEnacted { code_hash });
        Ok(())
    }
}
