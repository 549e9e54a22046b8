#![cfg_attr(not(feature = "std"), no_std)]
#![allow(clippy::let_unit_value)]

//! # HYRA token ledger
//!
//! Balances and total supply of the HYRA token. New tokens only enter circulation by
//! being minted into a registered pool, and only while the pool is both valid (enabled
//! by an admin) and verified (checked by a verifier). Total supply never exceeds
//! [`Config::MaxSupply`].
//!
//! The ledger is initialized exactly once, either from genesis or through
//! [`Pallet::initialize`], which credits the initial supply to the initiator's
//! "Initiator" pool and hands out the founding roles.

use codec::{Decode, Encode, MaxEncodedLen};
use frame_support::{dispatch::DispatchResult, ensure, pallet_prelude::*};
use frame_system::{ensure_root, ensure_signed, pallet_prelude::*};
use hyra_primitives::{Balance, PoolName, Role, RoleInspect, RoleRegistry, DECIMALS, INITIATOR_POOL_NAME};
use scale_info::TypeInfo;
use sp_runtime::RuntimeDebug;
use sp_std::prelude::*;

pub use pallet::*;

pub mod weights;
pub use weights::WeightInfo;

#[cfg(test)]
mod mock;


#[cfg(feature = "runtime-benchmarks")]
mod benchmarking;

const LOG_TARGET: &str = "runtime::hyra-token";

/// The current storage version.
const STORAGE_VERSION: StorageVersion = StorageVersion::new(1);

/// A named recipient of minted tokens.
#[derive(Encode, Decode, MaxEncodedLen, TypeInfo, Clone, PartialEq, Eq, RuntimeDebug)]
pub struct Pool<AccountId> {
    pub name: PoolName,
    pub address: AccountId,
    /// Cleared by `disable_pool`; a disabled pool cannot receive mints.
    pub is_valid: bool,
    pub is_verified: bool,
    /// Lifetime amount minted into this pool.
    pub received: Balance,
}

impl<AccountId> Pool<AccountId> {
    pub fn can_receive(&self) -> bool {
        self.is_valid && self.is_verified
    }
}

#[frame_support::pallet]
pub mod pallet {
    use super::*;

    #[pallet::config]
    pub trait Config: frame_system::Config {
        type RuntimeEvent: From<Event<Self>> + IsType<<Self as frame_system::Config>::RuntimeEvent>;

        /// Role registry consulted for every privileged call.
        type Roles: RoleRegistry<Self::AccountId>;

        /// Hard cap on total supply.
        #[pallet::constant]
        type MaxSupply: Get<Balance>;

        /// Credited to the initiator on initialization.
        #[pallet::constant]
        type InitialSupply: Get<Balance>;

        type WeightInfo: WeightInfo;
    }

    #[pallet::pallet]
    #[pallet::storage_version(STORAGE_VERSION)]
    pub struct Pallet<T>(_);

    /// Total token supply
    #[pallet::storage]
    pub type TotalSupply<T> = StorageValue<_, Balance, ValueQuery>;

    /// Account balances
    #[pallet::storage]
    pub type Balances<T: Config> = StorageMap<_, Blake2_128Concat, T::AccountId, Balance, ValueQuery>;

    /// Registered pools, at most one per address
    #[pallet::storage]
    pub type Pools<T: Config> =
        StorageMap<_, Blake2_128Concat, T::AccountId, Pool<T::AccountId>, OptionQuery>;

    /// Set once the ledger has been initialized
    #[pallet::storage]
    pub type Initialized<T> = StorageValue<_, bool, ValueQuery>;

    #[pallet::event]
    #[pallet::generate_deposit(pub(super) fn deposit_event)]
    pub enum Event<T: Config> {
        /// Ledger initialized and the initial supply credited to the initiator
        Initialized { initiator: T::AccountId, initial_supply: Balance },
        /// New pool registered
        PoolAdded { name: PoolName, address: T::AccountId },
        /// Pool re-enabled
        PoolEnabled { address: T::AccountId },
        /// Pool disabled
        PoolDisabled { address: T::AccountId },
        /// Pool verified
        PoolVerified { address: T::AccountId, verifier: T::AccountId },
        /// New tokens minted into a pool
        Minted { pool: T::AccountId, amount: Balance, minter: T::AccountId },
        /// Tokens burned from the holder's balance
        Burned { who: T::AccountId, amount: Balance },
        /// Tokens transferred from one account to another
        Transferred { from: T::AccountId, to: T::AccountId, amount: Balance },
    }

    #[pallet::error]
    pub enum Error<T> {
        /// The caller does not hold the role required for this operation.
        Unauthorized,
        /// The ledger has already been initialized.
        InvalidInitialization,
        PoolNotFound,
        PoolAlreadyExists,
        /// Pool is disabled or not yet verified.
        PoolNotVerified,
        PoolNameTooLong,
        /// Minting would take total supply above the cap.
        ExceedsMaxSupply,
        InsufficientBalance,
    }

    #[pallet::call]
    impl<T: Config> Pallet<T> {
        /// One-time initialization with the founding identities.
        #[pallet::call_index(0)]
        #[pallet::weight(T::WeightInfo::initialize())]
        pub fn initialize(
            origin: OriginFor<T>,
            initiator: T::AccountId,
            manager: T::AccountId,
            minter: T::AccountId,
            verifier: T::AccountId,
        ) -> DispatchResult {
            ensure_root(origin)?;
            Self::do_initialize(initiator, manager, minter, verifier)
        }

        #[pallet::call_index(1)]
        #[pallet::weight(T::WeightInfo::add_pool())]
        pub fn add_pool(origin: OriginFor<T>, name: Vec<u8>, address: T::AccountId) -> DispatchResult {
            let who = ensure_signed(origin)?;
            Self::ensure_role(Role::Admin, &who)?;
            ensure!(!Pools::<T>::contains_key(&address), Error::<T>::PoolAlreadyExists);
            let name: PoolName = name.try_into().map_err(|_| Error::<T>::PoolNameTooLong)?;

            Pools::<T>::insert(
                &address,
                Pool {
                    name: name.clone(),
                    address: address.clone(),
                    is_valid: true,
                    is_verified: false,
                    received: 0,
                },
            );
            Self::deposit_event(Event::PoolAdded { name, address });
            Ok(())
        }

        #[pallet::call_index(2)]
        #[pallet::weight(T::WeightInfo::enable_pool())]
        pub fn enable_pool(origin: OriginFor<T>, address: T::AccountId) -> DispatchResult {
            let who = ensure_signed(origin)?;
            Self::ensure_role(Role::Admin, &who)?;
            Self::mutate_pool(&address, |pool| pool.is_valid = true)?;
            Self::deposit_event(Event::PoolEnabled { address });
            Ok(())
        }

        #[pallet::call_index(3)]
        #[pallet::weight(T::WeightInfo::disable_pool())]
        pub fn disable_pool(origin: OriginFor<T>, address: T::AccountId) -> DispatchResult {
            let who = ensure_signed(origin)?;
            Self::ensure_role(Role::Admin, &who)?;
            Self::mutate_pool(&address, |pool| pool.is_valid = false)?;
            Self::deposit_event(Event::PoolDisabled { address });
            Ok(())
        }

        #[pallet::call_index(4)]
        #[pallet::weight(T::WeightInfo::verify_pool())]
        pub fn verify_pool(origin: OriginFor<T>, address: T::AccountId) -> DispatchResult {
            let verifier = ensure_signed(origin)?;
            Self::ensure_role(Role::Verifier, &verifier)?;
            Self::mutate_pool(&address, |pool| pool.is_verified = true)?;
            Self::deposit_event(Event::PoolVerified { address, verifier });
            Ok(())
        }

        /// Mint `amount` into a valid, verified pool.
        #[pallet::call_index(5)]
        #[pallet::weight(T::WeightInfo::mint())]
        pub fn mint(origin: OriginFor<T>, pool: T::AccountId, amount: Balance) -> DispatchResult {
            let minter = ensure_signed(origin)?;
            Self::ensure_role(Role::Minter, &minter)?;

            let mut info = Pools::<T>::get(&pool).ok_or(Error::<T>::PoolNotFound)?;
            ensure!(info.can_receive(), Error::<T>::PoolNotVerified);

            let new_supply = TotalSupply::<T>::get()
                .checked_add(amount)
                .filter(|supply| *supply <= T::MaxSupply::get())
                .ok_or(Error::<T>::ExceedsMaxSupply)?;

            // Every balance and pool total is bounded by total supply, which was checked above.
            TotalSupply::<T>::put(new_supply);
            info.received = info.received.saturating_add(amount);
            Pools::<T>::insert(&pool, info);
            Balances::<T>::mutate(&pool, |bal| *bal = bal.saturating_add(amount));

            log::debug!(target: LOG_TARGET, "minted {amount} into {pool:?}, supply {new_supply}");
            Self::deposit_event(Event::Minted { pool, amount, minter });
            Ok(())
        }

        /// Irreversibly destroy `amount` of the caller's tokens.
        #[pallet::call_index(6)]
        #[pallet::weight(T::WeightInfo::burn())]
        pub fn burn(origin: OriginFor<T>, amount: Balance) -> DispatchResult {
            let who = ensure_signed(origin)?;
            let balance = Balances::<T>::get(&who);
            ensure!(balance >= amount, Error::<T>::InsufficientBalance);

            Balances::<T>::insert(&who, balance - amount);
            TotalSupply::<T>::mutate(|supply| *supply = supply.saturating_sub(amount));
            Self::deposit_event(Event::Burned { who, amount });
            Ok(())
        }

        #[pallet::call_index(7)]
        #[pallet::weight(T::WeightInfo::transfer())]
        pub fn transfer(origin: OriginFor<T>, to: T::AccountId, amount: Balance) -> DispatchResult {
            let from = ensure_signed(origin)?;
            ensure!(Balances::<T>::get(&from) >= amount, Error::<T>::InsufficientBalance);

            Balances::<T>::mutate(&from, |bal| *bal -= amount);
            Balances::<T>::mutate(&to, |bal| *bal = bal.saturating_add(amount));
            Self::deposit_event(Event::Transferred { from, to, amount });
            Ok(())
        }
    }

    #[pallet::genesis_config]
    #[derive(frame_support::DefaultNoBound)]
    pub struct GenesisConfig<T: Config> {
        /// Receives the initial supply and the admin role
        pub initiator: Option<T::AccountId>,
        /// Admin and manager
        pub manager: Option<T::AccountId>,
        pub minter: Option<T::AccountId>,
        pub verifier: Option<T::AccountId>,
    }

    #[pallet::genesis_build]
    impl<T: Config> BuildGenesisConfig for GenesisConfig<T> {
        fn build(&self) {
            match (&self.initiator, &self.manager, &self.minter, &self.verifier) {
                (Some(initiator), Some(manager), Some(minter), Some(verifier)) => {
                    Pallet::<T>::do_initialize(
                        initiator.clone(),
                        manager.clone(),
                        minter.clone(),
                        verifier.clone(),
                    )
                    .expect("Invalid HYRA token genesis");
                }
                (None, None, None, None) => {}
                _ => panic!("HYRA token genesis needs all four founders or none"),
            }
        }
    }
}

impl<T: Config> Pallet<T> {
    pub fn balance_of(who: &T::AccountId) -> Balance {
        Balances::<T>::get(who)
    }

    pub fn total_supply() -> Balance {
        TotalSupply::<T>::get()
    }

    pub fn max_supply() -> Balance {
        T::MaxSupply::get()
    }

    pub fn decimals() -> u8 {
        DECIMALS
    }

    pub fn get_pool(address: &T::AccountId) -> Option<Pool<T::AccountId>> {
        Pools::<T>::get(address)
    }

    pub fn is_initialized() -> bool {
        Initialized::<T>::get()
    }

    pub(crate) fn do_initialize(
        initiator: T::AccountId,
        manager: T::AccountId,
        minter: T::AccountId,
        verifier: T::AccountId,
    ) -> DispatchResult {
        ensure!(!Initialized::<T>::get(), Error::<T>::InvalidInitialization);

        T::Roles::assign_role(Role::Admin, &initiator)?;
        T::Roles::assign_role(Role::Admin, &manager)?;
        T::Roles::assign_role(Role::Manager, &manager)?;
        T::Roles::assign_role(Role::Minter, &minter)?;
        T::Roles::assign_role(Role::Verifier, &verifier)?;

        let initial_supply = T::InitialSupply::get();
        ensure!(initial_supply <= T::MaxSupply::get(), Error::<T>::ExceedsMaxSupply);
        let name: PoolName =
            INITIATOR_POOL_NAME.to_vec().try_into().map_err(|_| Error::<T>::PoolNameTooLong)?;

        Pools::<T>::insert(
            &initiator,
            Pool {
                name,
                address: initiator.clone(),
                is_valid: true,
                is_verified: true,
                received: initial_supply,
            },
        );
        Balances::<T>::mutate(&initiator, |bal| *bal = bal.saturating_add(initial_supply));
        TotalSupply::<T>::put(initial_supply);
        Initialized::<T>::put(true);

        log::info!(target: LOG_TARGET, "ledger initialized, {initial_supply} credited to {initiator:?}");
        Self::deposit_event(Event::Initialized { initiator, initial_supply });
        Ok(())
    }

    fn ensure_role(role: Role, who: &T::AccountId) -> DispatchResult {
        ensure!(T::Roles::has_role(role, who), Error::<T>::Unauthorized);
        Ok(())
    }

    fn mutate_pool(
        address: &T::AccountId,
        f: impl FnOnce(&mut Pool<T::AccountId>),
    ) -> DispatchResult {
        Pools::<T>::try_mutate(address, |maybe_pool| {
            let pool = maybe_pool.as_mut().ok_or(Error::<T>::PoolNotFound)?;
            f(pool);
            Ok(())
        })
    }
}
