//! Benchmarking setup for pallet-hyra-token

use super::*;

#[allow(unused)]
use crate::Pallet as HyraToken;
use frame_benchmarking::v2::*;
use frame_system::RawOrigin;

fn with_role<T: Config>(role: Role, name: &'static str) -> T::AccountId {
    let who: T::AccountId = account(name, 0, 0);
    T::Roles::assign_role(role, &who).expect("operational roles can always be assigned");
    who
}

fn insert_pool<T: Config>(address: &T::AccountId, is_verified: bool) {
    Pools::<T>::insert(
        address,
        Pool {
            name: b"bench".to_vec().try_into().expect("short name"),
            address: address.clone(),
            is_valid: true,
            is_verified,
            received: 0,
        },
    );
}

#[benchmarks]
mod benchmarks {
    use super::*;

    #[benchmark]
    fn initialize() {
        Initialized::<T>::kill();
        let initiator: T::AccountId = account("initiator", 0, 0);
        let manager: T::AccountId = account("manager", 0, 0);
        let minter: T::AccountId = account("minter", 0, 0);
        let verifier: T::AccountId = account("verifier", 0, 0);

        #[extrinsic_call]
        _(RawOrigin::Root, initiator.clone(), manager, minter, verifier);

        assert!(Initialized::<T>::get());
        assert!(Pools::<T>::contains_key(&initiator));
    }

    #[benchmark]
    fn add_pool() {
        let admin = with_role::<T>(Role::Admin, "admin");
        let pool: T::AccountId = account("pool", 0, 0);
        let name = sp_std::vec![b'p'; hyra_primitives::MAX_POOL_NAME_LEN as usize];

        #[extrinsic_call]
        _(RawOrigin::Signed(admin), name, pool.clone());

        assert!(Pools::<T>::contains_key(&pool));
    }

    #[benchmark]
    fn enable_pool() {
        let admin = with_role::<T>(Role::Admin, "admin");
        let pool: T::AccountId = account("pool", 0, 0);
        insert_pool::<T>(&pool, false);
        Pools::<T>::mutate(&pool, |p| {
            if let Some(p) = p {
                p.is_valid = false;
            }
        });

        #[extrinsic_call]
        _(RawOrigin::Signed(admin), pool.clone());

        assert!(Pools::<T>::get(&pool).map_or(false, |p| p.is_valid));
    }

    #[benchmark]
    fn disable_pool() {
        let admin = with_role::<T>(Role::Admin, "admin");
        let pool: T::AccountId = account("pool", 0, 0);
        insert_pool::<T>(&pool, true);

        #[extrinsic_call]
        _(RawOrigin::Signed(admin), pool.clone());

        assert!(Pools::<T>::get(&pool).map_or(false, |p| !p.is_valid));
    }

    #[benchmark]
    fn verify_pool() {
        let verifier = with_role::<T>(Role::Verifier, "verifier");
        let pool: T::AccountId = account("pool", 0, 0);
        insert_pool::<T>(&pool, false);

        #[extrinsic_call]
        _(RawOrigin::Signed(verifier), pool.clone());

        assert!(Pools::<T>::get(&pool).map_or(false, |p| p.is_verified));
    }

    #[benchmark]
    fn mint() {
        let minter = with_role::<T>(Role::Minter, "minter");
        let pool: T::AccountId = account("pool", 0, 0);
        insert_pool::<T>(&pool, true);
        let amount: Balance = 1_000;

        #[extrinsic_call]
        _(RawOrigin::Signed(minter), pool.clone(), amount);

        assert_eq!(Balances::<T>::get(&pool), amount);
    }

    #[benchmark]
    fn burn() {
        let caller: T::AccountId = whitelisted_caller();
        Balances::<T>::insert(&caller, 10_000);
        TotalSupply::<T>::mutate(|s| *s = s.saturating_add(10_000));

        #[extrinsic_call]
        _(RawOrigin::Signed(caller.clone()), 1_000);

        assert_eq!(Balances::<T>::get(&caller), 9_000);
    }

    #[benchmark]
    fn transfer() {
        let caller: T::AccountId = whitelisted_caller();
        let recipient: T::AccountId = account("recipient", 0, 0);
        Balances::<T>::insert(&caller, 10_000);

        #[extrinsic_call]
        _(RawOrigin::Signed(caller.clone()), recipient.clone(), 1_000);

        assert_eq!(Balances::<T>::get(&recipient), 1_000);
    }

    impl_benchmark_test_suite!(HyraToken, crate::mock::new_test_ext(), crate::mock::Test);
}
