#![cfg_attr(not(feature = "std"), no_std)]

//! # Reward pool
//!
//! Pays out rewards along two independent paths that share one ledger.
//!
//! ## Signed bills
//!
//! A bill is `(recipient, uid, amount, nonce)`. A verifier first approves the
//! `(recipient, nonce)` pair with [`Pallet::verify_user_bill`]; a deliverer then submits the
//! bill together with a signature produced off-chain by the designated bill signer over
//! [`hyra_primitives::bill_digest`]. Delivery credits the recipient's reward total and
//! consumes the nonce, so every `(recipient, nonce)` pair is delivered at most once.
//! Deliveries are bounded per bill by [`PaymentRange`] and per UTC day, across all
//! recipients, by [`MaxDailyPayment`].
//!
//! ## Native distribution
//!
//! The pallet custodies native currency in its pot account. Distributors pay from it with
//! [`Pallet::distribute_reward`], bounded by [`DistributionRange`] and spaced at least
//! [`Config::DistributionInterval`] seconds apart. Managers approved by another admin may
//! withdraw from the pot with [`Pallet::withdraw_native`].

use codec::{Decode, Encode, MaxEncodedLen};
use frame_support::{
    dispatch::DispatchResult,
    ensure,
    pallet_prelude::*,
    traits::{
        fungible::{Inspect, Mutate},
        tokens::{Fortitude, Preservation},
        UnixTime,
    },
    PalletId, Parameter,
};
use frame_system::{ensure_root, ensure_signed, pallet_prelude::*};
use hyra_primitives::{
    bill_digest, AmountRange, Balance, BillNonce, RecoverSigner, Role, RoleInspect, RoleRegistry,
    MAX_DAILY_PAYMENT_AMOUNT, MAX_DISTRIBUTION_AMOUNT, MAX_PAYMENT_AMOUNT,
    MIN_DISTRIBUTION_AMOUNT, MIN_PAYMENT_AMOUNT, SECONDS_PER_DAY,
};
use scale_info::TypeInfo;
use sp_runtime::{traits::AccountIdConversion, RuntimeDebug};
use sp_std::prelude::*;

pub use pallet::*;

pub mod weights;
pub use weights::WeightInfo;

#[cfg(test)]
mod mock;


#[cfg(feature = "runtime-benchmarks")]
mod benchmarking;

const LOG_TARGET: &str = "runtime::reward-pool";

/// Approval and delivery state of one `(recipient, nonce)` bill.
#[derive(Encode, Decode, MaxEncodedLen, TypeInfo, Clone, PartialEq, Eq, Default, RuntimeDebug)]
pub struct UserBill {
    pub verified: bool,
    pub delivered: bool,
    /// Amount paid on delivery; zero until delivered.
    pub amount: Balance,
}

/// Produces signed bills for benchmarks, where the signature type is opaque to the pallet.
#[cfg(feature = "runtime-benchmarks")]
pub trait BenchmarkHelper<AccountId, Signature> {
    /// A signer account and its signature over `digest`.
    fn sign_bill(digest: &[u8; 32]) -> (AccountId, Signature);
}

/// Amount delivered during one UTC day.
#[derive(Encode, Decode, MaxEncodedLen, TypeInfo, Clone, PartialEq, Eq, Default, RuntimeDebug)]
pub struct DailyPayout {
    pub day: u64,
    pub total: Balance,
}

#[frame_support::pallet]
pub mod pallet {
    use super::*;

    #[pallet::config]
    pub trait Config: frame_system::Config {
        type RuntimeEvent: From<Event<Self>> + IsType<<Self as frame_system::Config>::RuntimeEvent>;

        type Roles: RoleRegistry<Self::AccountId>;

        /// Native currency held in the pot.
        type NativeCurrency: Mutate<Self::AccountId, Balance = Balance>;

        type UnixTime: UnixTime;

        /// Signature attached to a delivered bill.
        type BillSignature: Parameter;

        /// Recovers the account that signed a bill digest.
        type SignatureRecovery: RecoverSigner<Self::AccountId, Signature = Self::BillSignature>;

        /// Derives the pot account.
        #[pallet::constant]
        type PalletId: Get<PalletId>;

        /// Minimum number of seconds between two distributions.
        #[pallet::constant]
        type DistributionInterval: Get<u64>;

        type WeightInfo: WeightInfo;

        #[cfg(feature = "runtime-benchmarks")]
        type BenchmarkHelper: BenchmarkHelper<Self::AccountId, Self::BillSignature>;
    }

    #[pallet::pallet]
    pub struct Pallet<T>(_);

    #[pallet::type_value]
    pub fn DefaultPaymentRange() -> AmountRange {
        AmountRange::new(MIN_PAYMENT_AMOUNT, MAX_PAYMENT_AMOUNT)
    }

    #[pallet::type_value]
    pub fn DefaultDistributionRange() -> AmountRange {
        AmountRange::new(MIN_DISTRIBUTION_AMOUNT, MAX_DISTRIBUTION_AMOUNT)
    }

    #[pallet::type_value]
    pub fn DefaultMaxDailyPayment() -> Balance {
        MAX_DAILY_PAYMENT_AMOUNT
    }

    /// Account whose signature authorizes bill deliveries
    #[pallet::storage]
    pub type BillSigner<T: Config> = StorageValue<_, T::AccountId, OptionQuery>;

    #[pallet::storage]
    pub type PoolManager<T: Config> = StorageValue<_, T::AccountId, OptionQuery>;

    #[pallet::storage]
    pub type BillVerifier<T: Config> = StorageValue<_, T::AccountId, OptionQuery>;

    #[pallet::storage]
    pub type BillDeliverer<T: Config> = StorageValue<_, T::AccountId, OptionQuery>;

    #[pallet::storage]
    pub type UserBills<T: Config> = StorageDoubleMap<
        _,
        Blake2_128Concat,
        T::AccountId,
        Blake2_128Concat,
        BillNonce,
        UserBill,
        OptionQuery,
    >;

    /// Lifetime rewards delivered per recipient
    #[pallet::storage]
    pub type TotalRewardByAddress<T: Config> =
        StorageMap<_, Blake2_128Concat, T::AccountId, Balance, ValueQuery>;

    /// Distinct bill recipients, indexed by order of first delivery
    #[pallet::storage]
    pub type Receivers<T: Config> =
        CountedStorageMap<_, Twox64Concat, u32, T::AccountId, OptionQuery>;

    /// Lifetime rewards delivered across all recipients
    #[pallet::storage]
    pub type TotalRewards<T> = StorageValue<_, Balance, ValueQuery>;

    #[pallet::storage]
    pub type DailyPayouts<T> = StorageValue<_, DailyPayout, ValueQuery>;

    /// Bounds on a single delivered bill
    #[pallet::storage]
    pub type PaymentRange<T> = StorageValue<_, AmountRange, ValueQuery, DefaultPaymentRange>;

    /// Ceiling on the amount delivered per UTC day
    #[pallet::storage]
    pub type MaxDailyPayment<T> = StorageValue<_, Balance, ValueQuery, DefaultMaxDailyPayment>;

    /// Bounds on a single distribution
    #[pallet::storage]
    pub type DistributionRange<T> =
        StorageValue<_, AmountRange, ValueQuery, DefaultDistributionRange>;

    /// Unix time (seconds) of the last distribution
    #[pallet::storage]
    pub type LastDistribution<T> = StorageValue<_, u64, OptionQuery>;

    /// Accounts an admin allowed to withdraw from the pot
    #[pallet::storage]
    pub type ApprovedAddresses<T: Config> =
        StorageMap<_, Blake2_128Concat, T::AccountId, bool, ValueQuery>;

    #[pallet::storage]
    pub type Initialized<T> = StorageValue<_, bool, ValueQuery>;

    #[pallet::event]
    #[pallet::generate_deposit(pub(super) fn deposit_event)]
    pub enum Event<T: Config> {
        Initialized { signer: T::AccountId },
        /// A verifier approved a bill
        UserBillVerified { recipient: T::AccountId, nonce: BillNonce, verifier: T::AccountId },
        /// A signed bill was delivered
        RewardsDelivered { recipient: T::AccountId, uid: u64, amount: Balance, nonce: BillNonce },
        /// Native reward paid from the pot
        RewardDistributed { receiver: T::AccountId, amount: Balance, distributor: T::AccountId },
        AddressApproved { account: T::AccountId },
        AddressApprovalRevoked { account: T::AccountId },
        NativeWithdrawn { to: T::AccountId, amount: Balance },
        /// Native currency deposited into the pot
        Funded { from: T::AccountId, amount: Balance },
        PaymentRangeUpdated { min: Balance, max: Balance },
        DistributionRangeUpdated { min: Balance, max: Balance },
        MaxDailyPaymentUpdated { amount: Balance },
    }

    #[pallet::error]
    pub enum Error<T> {
        /// The caller does not hold the role required for this operation.
        Unauthorized,
        InvalidInitialization,
        /// The bill was not verified for this recipient and nonce.
        UserBillNotApproved,
        /// The signature does not recover to the bill signer.
        InvalidSigner,
        /// The bill was already delivered.
        InvalidNonce,
        BelowMinPaymentAmount,
        ExceedMaxPaymentAmount,
        /// Delivery would take today's total above the daily ceiling.
        ExceedMaxDailyPaymentAmount,
        DistributionIntervalNotReached,
        DistributionAmountOutOfRange,
        /// The pot holds less than the requested amount.
        InsufficientContractBalance,
        AddressNotApproved,
    }

    #[pallet::call]
    impl<T: Config> Pallet<T> {
        #[pallet::call_index(0)]
        #[pallet::weight(T::WeightInfo::initialize())]
        pub fn initialize(
            origin: OriginFor<T>,
            manager: T::AccountId,
            signer: T::AccountId,
            verifier: T::AccountId,
            deliverer: T::AccountId,
        ) -> DispatchResult {
            ensure_root(origin)?;
            Self::do_initialize(manager, signer, verifier, deliverer)
        }

        /// Approve the bill identified by `(recipient, nonce)` for delivery.
        #[pallet::call_index(1)]
        #[pallet::weight(T::WeightInfo::verify_user_bill())]
        pub fn verify_user_bill(
            origin: OriginFor<T>,
            recipient: T::AccountId,
            nonce: BillNonce,
        ) -> DispatchResult {
            let verifier = ensure_signed(origin)?;
            Self::ensure_role(Role::Verifier, &verifier)?;

            UserBills::<T>::mutate(&recipient, &nonce, |bill| {
                bill.get_or_insert_with(Default::default).verified = true;
            });
            Self::deposit_event(Event::UserBillVerified { recipient, nonce, verifier });
            Ok(())
        }

        /// Deliver a verified bill signed by the bill signer.
        #[pallet::call_index(2)]
        #[pallet::weight(T::WeightInfo::deliver_rewards())]
        pub fn deliver_rewards(
            origin: OriginFor<T>,
            recipient: T::AccountId,
            uid: u64,
            amount: Balance,
            nonce: BillNonce,
            signature: T::BillSignature,
        ) -> DispatchResult {
            let deliverer = ensure_signed(origin)?;
            Self::ensure_role(Role::Deliverer, &deliverer)?;

            let mut bill = UserBills::<T>::get(&recipient, &nonce)
                .filter(|bill| bill.verified)
                .ok_or(Error::<T>::UserBillNotApproved)?;

            let digest = bill_digest(&recipient, amount, &nonce);
            let recovered = T::SignatureRecovery::recover(&digest, &signature);
            ensure!(
                recovered.is_some() && recovered == BillSigner::<T>::get(),
                Error::<T>::InvalidSigner
            );

            ensure!(!bill.delivered, Error::<T>::InvalidNonce);

            let range = PaymentRange::<T>::get();
            ensure!(amount >= range.min, Error::<T>::BelowMinPaymentAmount);
            ensure!(amount <= range.max, Error::<T>::ExceedMaxPaymentAmount);

            let today = Self::today();
            let delivered_today = Self::delivered_on(today);
            let new_daily_total = delivered_today
                .checked_add(amount)
                .filter(|total| *total <= MaxDailyPayment::<T>::get())
                .ok_or(Error::<T>::ExceedMaxDailyPaymentAmount)?;

            if !TotalRewardByAddress::<T>::contains_key(&recipient) {
                Receivers::<T>::insert(Receivers::<T>::count(), &recipient);
            }

            TotalRewardByAddress::<T>::insert(
                &recipient,
                TotalRewardByAddress::<T>::get(&recipient).saturating_add(amount),
            );
            TotalRewards::<T>::mutate(|total| *total = total.saturating_add(amount));
            DailyPayouts::<T>::put(DailyPayout { day: today, total: new_daily_total });
            bill.delivered = true;
            bill.amount = amount;
            UserBills::<T>::insert(&recipient, &nonce, bill);

            log::debug!(target: LOG_TARGET, "delivered {amount} to {recipient:?}, day total {new_daily_total}");
            Self::deposit_event(Event::RewardsDelivered { recipient, uid, amount, nonce });
            Ok(())
        }

        /// Pay `amount` of native currency from the pot to `receiver`.
        #[pallet::call_index(3)]
        #[pallet::weight(T::WeightInfo::distribute_reward())]
        pub fn distribute_reward(
            origin: OriginFor<T>,
            receiver: T::AccountId,
            amount: Balance,
        ) -> DispatchResult {
            let distributor = ensure_signed(origin)?;
            Self::ensure_role(Role::Distributor, &distributor)?;

            ensure!(Self::pot_balance() >= amount, Error::<T>::InsufficientContractBalance);
            ensure!(
                DistributionRange::<T>::get().contains(amount),
                Error::<T>::DistributionAmountOutOfRange
            );
            let now = T::UnixTime::now().as_secs();
            if let Some(last) = LastDistribution::<T>::get() {
                ensure!(
                    now.saturating_sub(last) >= T::DistributionInterval::get(),
                    Error::<T>::DistributionIntervalNotReached
                );
            }

            LastDistribution::<T>::put(now);
            T::NativeCurrency::transfer(
                &Self::pot_account(),
                &receiver,
                amount,
                Preservation::Expendable,
            )?;

            Self::deposit_event(Event::RewardDistributed { receiver, amount, distributor });
            Ok(())
        }

        /// Allow `account` to withdraw from the pot. An admin cannot approve itself, so every
        /// withdrawal needs a second party.
        #[pallet::call_index(4)]
        #[pallet::weight(T::WeightInfo::approve_address())]
        pub fn approve_address(origin: OriginFor<T>, account: T::AccountId) -> DispatchResult {
            let who = ensure_signed(origin)?;
            Self::ensure_role(Role::Admin, &who)?;
            ensure!(who != account, Error::<T>::Unauthorized);

            ApprovedAddresses::<T>::insert(&account, true);
            Self::deposit_event(Event::AddressApproved { account });
            Ok(())
        }

        #[pallet::call_index(5)]
        #[pallet::weight(T::WeightInfo::revoke_address_approval())]
        pub fn revoke_address_approval(origin: OriginFor<T>, account: T::AccountId) -> DispatchResult {
            let who = ensure_signed(origin)?;
            Self::ensure_role(Role::Admin, &who)?;

            ApprovedAddresses::<T>::remove(&account);
            Self::deposit_event(Event::AddressApprovalRevoked { account });
            Ok(())
        }

        /// Withdraw native currency from the pot to the caller. No daily cap applies.
        #[pallet::call_index(6)]
        #[pallet::weight(T::WeightInfo::withdraw_native())]
        pub fn withdraw_native(origin: OriginFor<T>, amount: Balance) -> DispatchResult {
            let who = ensure_signed(origin)?;
            Self::ensure_role(Role::Manager, &who)?;
            ensure!(ApprovedAddresses::<T>::get(&who), Error::<T>::AddressNotApproved);
            ensure!(Self::pot_balance() >= amount, Error::<T>::InsufficientContractBalance);

            T::NativeCurrency::transfer(&Self::pot_account(), &who, amount, Preservation::Expendable)?;

            log::info!(target: LOG_TARGET, "{who:?} withdrew {amount} from the pot");
            Self::deposit_event(Event::NativeWithdrawn { to: who, amount });
            Ok(())
        }

        /// Deposit native currency into the pot.
        #[pallet::call_index(7)]
        #[pallet::weight(T::WeightInfo::fund())]
        pub fn fund(origin: OriginFor<T>, amount: Balance) -> DispatchResult {
            let from = ensure_signed(origin)?;
            T::NativeCurrency::transfer(&from, &Self::pot_account(), amount, Preservation::Preserve)?;
            Self::deposit_event(Event::Funded { from, amount });
            Ok(())
        }

        /// Bounds are stored as given; `min > max` rejects every amount.
        #[pallet::call_index(8)]
        #[pallet::weight(T::WeightInfo::set_range())]
        pub fn set_distribution_amount_range(
            origin: OriginFor<T>,
            min: Balance,
            max: Balance,
        ) -> DispatchResult {
            let who = ensure_signed(origin)?;
            Self::ensure_role(Role::Admin, &who)?;

            DistributionRange::<T>::put(AmountRange::new(min, max));
            Self::deposit_event(Event::DistributionRangeUpdated { min, max });
            Ok(())
        }

        #[pallet::call_index(9)]
        #[pallet::weight(T::WeightInfo::set_range())]
        pub fn set_payment_amount_range(
            origin: OriginFor<T>,
            min: Balance,
            max: Balance,
        ) -> DispatchResult {
            let who = ensure_signed(origin)?;
            Self::ensure_role(Role::Admin, &who)?;

            PaymentRange::<T>::put(AmountRange::new(min, max));
            Self::deposit_event(Event::PaymentRangeUpdated { min, max });
            Ok(())
        }

        #[pallet::call_index(10)]
        #[pallet::weight(T::WeightInfo::set_range())]
        pub fn set_max_daily_payment(origin: OriginFor<T>, amount: Balance) -> DispatchResult {
            let who = ensure_signed(origin)?;
            Self::ensure_role(Role::Admin, &who)?;

            MaxDailyPayment::<T>::put(amount);
            Self::deposit_event(Event::MaxDailyPaymentUpdated { amount });
            Ok(())
        }
    }

    #[pallet::genesis_config]
    #[derive(frame_support::DefaultNoBound)]
    pub struct GenesisConfig<T: Config> {
        pub manager: Option<T::AccountId>,
        /// Bill signer
        pub signer: Option<T::AccountId>,
        pub verifier: Option<T::AccountId>,
        pub deliverer: Option<T::AccountId>,
    }

    #[pallet::genesis_build]
    impl<T: Config> BuildGenesisConfig for GenesisConfig<T> {
        fn build(&self) {
            match (&self.manager, &self.signer, &self.verifier, &self.deliverer) {
                (Some(manager), Some(signer), Some(verifier), Some(deliverer)) => {
                    Pallet::<T>::do_initialize(
                        manager.clone(),
                        signer.clone(),
                        verifier.clone(),
                        deliverer.clone(),
                    )
                    .expect("Invalid reward pool genesis");
                }
                (None, None, None, None) => {}
                _ => panic!("Reward pool genesis needs all four operators or none"),
            }
        }
    }
}

impl<T: Config> Pallet<T> {
    /// Account holding the pallet's native currency.
    pub fn pot_account() -> T::AccountId {
        T::PalletId::get().into_account_truncating()
    }

    pub fn pot_balance() -> Balance {
        T::NativeCurrency::reducible_balance(
            &Self::pot_account(),
            Preservation::Expendable,
            Fortitude::Polite,
        )
    }

    pub fn total_reward_by_address(who: &T::AccountId) -> Balance {
        TotalRewardByAddress::<T>::get(who)
    }

    /// Distinct bill recipients in order of first delivery.
    pub fn get_receivers() -> Vec<T::AccountId> {
        (0..Receivers::<T>::count()).filter_map(|index| Receivers::<T>::get(index)).collect()
    }

    pub fn total_rewards() -> Balance {
        TotalRewards::<T>::get()
    }

    pub fn user_bill(recipient: &T::AccountId, nonce: &BillNonce) -> Option<UserBill> {
        UserBills::<T>::get(recipient, nonce)
    }

    pub fn manager() -> Option<T::AccountId> {
        PoolManager::<T>::get()
    }

    pub fn signer() -> Option<T::AccountId> {
        BillSigner::<T>::get()
    }

    pub fn verifier() -> Option<T::AccountId> {
        BillVerifier::<T>::get()
    }

    pub fn deliverer() -> Option<T::AccountId> {
        BillDeliverer::<T>::get()
    }

    pub fn is_approved(who: &T::AccountId) -> bool {
        ApprovedAddresses::<T>::get(who)
    }

    pub fn payment_range() -> AmountRange {
        PaymentRange::<T>::get()
    }

    pub fn distribution_range() -> AmountRange {
        DistributionRange::<T>::get()
    }

    /// Amount delivered so far during the current UTC day.
    pub fn daily_distributed() -> Balance {
        Self::delivered_on(Self::today())
    }

    fn today() -> u64 {
        T::UnixTime::now().as_secs() / SECONDS_PER_DAY
    }

    fn delivered_on(day: u64) -> Balance {
        let payout = DailyPayouts::<T>::get();
        if payout.day == day {
            payout.total
        } else {
            0
        }
    }

    pub(crate) fn do_initialize(
        manager: T::AccountId,
        signer: T::AccountId,
        verifier: T::AccountId,
        deliverer: T::AccountId,
    ) -> DispatchResult {
        ensure!(!Initialized::<T>::get(), Error::<T>::InvalidInitialization);

        T::Roles::assign_role(Role::Manager, &manager)?;
        T::Roles::assign_role(Role::Signer, &signer)?;
        T::Roles::assign_role(Role::Verifier, &verifier)?;
        T::Roles::assign_role(Role::Deliverer, &deliverer)?;
        PoolManager::<T>::put(manager);
        BillSigner::<T>::put(&signer);
        BillVerifier::<T>::put(verifier);
        BillDeliverer::<T>::put(deliverer);
        Initialized::<T>::put(true);

        log::info!(target: LOG_TARGET, "reward pool initialized, bill signer {signer:?}");
        Self::deposit_event(Event::Initialized { signer });
        Ok(())
    }

    fn ensure_role(role: Role, who: &T::AccountId) -> DispatchResult {
        ensure!(T::Roles::has_role(role, who), Error::<T>::Unauthorized);
        Ok(())
    }
}
