//! Benchmarking setup for pallet-hyra-roles

use super::*;

#[allow(unused)]
use crate::Pallet as Roles;
use frame_benchmarking::v2::*;
use frame_system::RawOrigin;

fn admin<T: Config>() -> T::AccountId {
    let admin: T::AccountId = account("admin", 0, 0);
    Members::<T>::insert(Role::Admin, &admin, ());
    admin
}

#[benchmarks]
mod benchmarks {
    use super::*;

    #[benchmark]
    fn grant_role() {
        let admin = admin::<T>();
        let account: T::AccountId = account("member", 0, 0);

        #[extrinsic_call]
        _(RawOrigin::Signed(admin), Role::Minter, account.clone());

        assert!(Members::<T>::contains_key(Role::Minter, &account));
    }

    #[benchmark]
    fn revoke_role() {
        let admin = admin::<T>();
        let account: T::AccountId = account("member", 0, 0);
        Members::<T>::insert(Role::Minter, &account, ());

        #[extrinsic_call]
        _(RawOrigin::Signed(admin), Role::Minter, account.clone());

        assert!(!Members::<T>::contains_key(Role::Minter, &account));
    }

    #[benchmark]
    fn renounce_role() {
        let caller: T::AccountId = whitelisted_caller();
        Members::<T>::insert(Role::Distributor, &caller, ());

        #[extrinsic_call]
        _(RawOrigin::Signed(caller.clone()), Role::Distributor);

        assert!(!Members::<T>::contains_key(Role::Distributor, &caller));
    }

    impl_benchmark_test_suite!(Roles, crate::mock::new_test_ext(), crate::mock::Test);
}
