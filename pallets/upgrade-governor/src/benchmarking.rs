//! Benchmarking setup for pallet-upgrade-governor
//!
//! Governance seats can only be filled once, so these benchmarks expect a chain whose
//! governor was not initialized at genesis.

use super::*;

#[allow(unused)]
use crate::Pallet as UpgradeGovernor;
use frame_benchmarking::v2::*;
use frame_system::RawOrigin;

fn admin<T: Config>() -> T::AccountId {
    let admin: T::AccountId = account("admin", 0, 0);
    T::Roles::assign_role(Role::Admin, &admin).expect("admin can always be assigned");
    admin
}

fn signers<T: Config>() -> [T::AccountId; 3] {
    let signers: [T::AccountId; 3] =
        [account("cto", 0, 0), account("finance", 0, 0), account("chairman", 0, 0)];
    if !Initialized::<T>::get() {
        Pallet::<T>::do_initialize(signers[0].clone(), signers[1].clone(), signers[2].clone())
            .expect("governance seats are free");
    }
    signers
}

fn schedule<T: Config>(activation_time: u64, approvals: Vec<T::AccountId>) -> T::Hash {
    let new_implementation = T::Hashing::hash(b"hyra runtime");
    Pending::<T>::put(PendingUpgrade {
        new_implementation,
        proposed_at: 0,
        activation_time,
        approvals: BoundedVec::truncate_from(approvals),
    });
    new_implementation
}

#[benchmarks]
mod benchmarks {
    use super::*;

    #[benchmark]
    fn initialize() {
        let cto: T::AccountId = account("cto", 0, 0);
        let finance: T::AccountId = account("finance", 0, 0);
        let chairman: T::AccountId = account("chairman", 0, 0);

        #[extrinsic_call]
        _(RawOrigin::Root, cto, finance, chairman);

        assert!(Initialized::<T>::get());
    }

    #[benchmark]
    fn propose_upgrade() {
        let admin = admin::<T>();
        let [cto, finance, _] = signers::<T>();
        // Worst case replaces an approved proposal
        schedule::<T>(u64::MAX, sp_std::vec![cto, finance]);
        let new_implementation = T::Hashing::hash(b"hyra runtime v2");

        #[extrinsic_call]
        _(RawOrigin::Signed(admin), new_implementation);

        assert_eq!(Pallet::<T>::pending_implementation(), new_implementation);
    }

    #[benchmark]
    fn approve_upgrade() {
        let [cto, finance, _] = signers::<T>();
        schedule::<T>(u64::MAX, sp_std::vec![finance]);

        #[extrinsic_call]
        _(RawOrigin::Signed(cto));

        assert_eq!(Pending::<T>::get().map(|p| p.approvals.len()), Some(2));
    }

    #[benchmark]
    fn execute_upgrade() {
        let [cto, finance, chairman] = signers::<T>();
        let new_implementation = schedule::<T>(0, sp_std::vec![cto, finance, chairman]);
        let caller: T::AccountId = whitelisted_caller();

        #[extrinsic_call]
        _(RawOrigin::Signed(caller));

        assert_eq!(AuthorizedCode::<T>::get(), Some(new_implementation));
        assert!(Pending::<T>::get().is_none());
    }

    #[benchmark]
    fn cancel_upgrade() {
        let admin = admin::<T>();
        let [cto, _, _] = signers::<T>();
        schedule::<T>(u64::MAX, sp_std::vec![cto]);

        #[extrinsic_call]
        _(RawOrigin::Signed(admin));

        assert!(Pending::<T>::get().is_none());
    }

    impl_benchmark_test_suite!(
        UpgradeGovernor,
        crate::mock::new_uninitialized_ext(),
        crate::mock::Test
    );
}
