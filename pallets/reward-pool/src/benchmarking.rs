//! Benchmarking setup for pallet-reward-pool

use super::*;

#[allow(unused)]
use crate::Pallet as RewardPool;
use frame_benchmarking::v2::*;
use frame_system::RawOrigin;
use hyra_primitives::{MAX_NONCE_LEN, UNIT};

fn with_role<T: Config>(role: Role, name: &'static str) -> T::AccountId {
    let who: T::AccountId = account(name, 0, 0);
    T::Roles::assign_role(role, &who).expect("operational roles can always be assigned");
    who
}

fn longest_nonce() -> BillNonce {
    sp_std::vec![b'n'; MAX_NONCE_LEN as usize].try_into().expect("nonce fits")
}

fn fill_pot<T: Config>(amount: Balance) {
    T::NativeCurrency::set_balance(&RewardPool::<T>::pot_account(), amount);
}

#[benchmarks]
mod benchmarks {
    use super::*;

    #[benchmark]
    fn initialize() {
        Initialized::<T>::kill();
        let manager: T::AccountId = account("manager", 0, 0);
        let signer: T::AccountId = account("signer", 0, 0);
        let verifier: T::AccountId = account("verifier", 0, 0);
        let deliverer: T::AccountId = account("deliverer", 0, 0);

        #[extrinsic_call]
        _(RawOrigin::Root, manager, signer.clone(), verifier, deliverer);

        assert_eq!(BillSigner::<T>::get(), Some(signer));
    }

    #[benchmark]
    fn verify_user_bill() {
        let verifier = with_role::<T>(Role::Verifier, "verifier");
        let recipient: T::AccountId = account("recipient", 0, 0);
        let nonce = longest_nonce();

        #[extrinsic_call]
        _(RawOrigin::Signed(verifier), recipient.clone(), nonce.clone());

        assert!(UserBills::<T>::get(&recipient, &nonce).map_or(false, |bill| bill.verified));
    }

    #[benchmark]
    fn deliver_rewards() {
        let deliverer = with_role::<T>(Role::Deliverer, "deliverer");
        let recipient: T::AccountId = account("recipient", 0, 0);
        let nonce = longest_nonce();
        let amount = PaymentRange::<T>::get().min;
        UserBills::<T>::insert(&recipient, &nonce, UserBill { verified: true, ..Default::default() });
        let (signer, signature) =
            T::BenchmarkHelper::sign_bill(&bill_digest(&recipient, amount, &nonce));
        BillSigner::<T>::put(signer);

        #[extrinsic_call]
        _(RawOrigin::Signed(deliverer), recipient.clone(), 1, amount, nonce.clone(), signature);

        assert!(UserBills::<T>::get(&recipient, &nonce).map_or(false, |bill| bill.delivered));
        assert_eq!(TotalRewardByAddress::<T>::get(&recipient), amount);
    }

    #[benchmark]
    fn distribute_reward() {
        let distributor = with_role::<T>(Role::Distributor, "distributor");
        let receiver: T::AccountId = account("receiver", 0, 0);
        let amount = DistributionRange::<T>::get().min.max(UNIT);
        fill_pot::<T>(amount.saturating_mul(2));
        LastDistribution::<T>::kill();

        #[extrinsic_call]
        _(RawOrigin::Signed(distributor), receiver.clone(), amount);

        assert_eq!(T::NativeCurrency::balance(&receiver), amount);
    }

    #[benchmark]
    fn approve_address() {
        let admin = with_role::<T>(Role::Admin, "admin");
        let account: T::AccountId = account("manager", 0, 0);

        #[extrinsic_call]
        _(RawOrigin::Signed(admin), account.clone());

        assert!(ApprovedAddresses::<T>::get(&account));
    }

    #[benchmark]
    fn revoke_address_approval() {
        let admin = with_role::<T>(Role::Admin, "admin");
        let account: T::AccountId = account("manager", 0, 0);
        ApprovedAddresses::<T>::insert(&account, true);

        #[extrinsic_call]
        _(RawOrigin::Signed(admin), account.clone());

        assert!(!ApprovedAddresses::<T>::get(&account));
    }

    #[benchmark]
    fn withdraw_native() {
        let manager = with_role::<T>(Role::Manager, "manager");
        ApprovedAddresses::<T>::insert(&manager, true);
        fill_pot::<T>(10 * UNIT);

        #[extrinsic_call]
        _(RawOrigin::Signed(manager.clone()), UNIT);

        assert_eq!(T::NativeCurrency::balance(&manager), UNIT);
    }

    #[benchmark]
    fn fund() {
        let caller: T::AccountId = whitelisted_caller();
        T::NativeCurrency::set_balance(&caller, 10 * UNIT);

        #[extrinsic_call]
        _(RawOrigin::Signed(caller), UNIT);

        assert_eq!(RewardPool::<T>::pot_balance(), UNIT);
    }

    #[benchmark]
    fn set_range() {
        let admin = with_role::<T>(Role::Admin, "admin");

        #[extrinsic_call]
        set_payment_amount_range(RawOrigin::Signed(admin), UNIT, 100 * UNIT);

        assert_eq!(PaymentRange::<T>::get(), AmountRange::new(UNIT, 100 * UNIT));
    }

    impl_benchmark_test_suite!(RewardPool, crate::mock::new_test_ext(), crate::mock::Test);
}
