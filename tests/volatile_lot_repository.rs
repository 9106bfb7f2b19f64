//! Behaviour of the volatile lot store as seen by a caller.
#![allow(clippy::unwrap_used)]

use mercadofacil::domain::entities::{Lot, Product};
use mercadofacil::domain::value_objects::{LotId, Price, ProductId};
use mercadofacil::infrastructure::persistence::Repository;
use mercadofacil::infrastructure::persistence::in_memory::VolatileLotRepository;
use proptest::prelude::*;
use rust_decimal::Decimal;
use std::collections::HashSet;

struct Fixture {
    repo: VolatileLotRepository,
    product: Product,
    lot: Lot,
}

impl Fixture {
    fn new() -> Self {
        let product = Product::builder(ProductId::new(1))
            .name("Produto Base")
            .barcode("123456789")
            .manufacturer("Fabricante Base")
            .price(Price::from_decimal(Decimal::new(12536, 2)))
            .build();
        let lot = Lot::builder(LotId::new(1), product.clone())
            .item_count(100)
            .build();
        Self {
            repo: VolatileLotRepository::new(),
            product,
            lot,
        }
    }
}

fn create_lot(id: u64) -> Lot {
    let product = Product::builder(ProductId::new(3))
        .name("cafeteira")
        .barcode("91662593")
        .manufacturer("extra rap")
        .price(Price::from_decimal(Decimal::new(60, 0)))
        .build();
    Lot::builder(LotId::new(id), product).item_count(5).build()
}

#[test]
fn saving_the_first_lot() {
    let f = Fixture::new();

    let saved = f.repo.save(f.lot.clone()).unwrap();

    assert_eq!(f.repo.find_all().unwrap().len(), 1);
    assert_eq!(saved.id(), f.lot.id());
    assert_eq!(saved.product(), &f.product);
}

#[test]
fn saving_a_second_lot() {
    let f = Fixture::new();
    let extra_product = Product::builder(ProductId::new(2))
        .name("Produto Extra")
        .barcode("987654321")
        .manufacturer("Fabricante Extra")
        .price(Price::from_decimal(Decimal::new(12536, 2)))
        .build();
    let extra_lot = Lot::builder(LotId::new(2), extra_product.clone())
        .item_count(100)
        .build();
    f.repo.save(f.lot.clone()).unwrap();

    let saved = f.repo.save(extra_lot.clone()).unwrap();

    assert_eq!(f.repo.find_all().unwrap().len(), 2);
    assert_eq!(saved.id(), extra_lot.id());
    assert_eq!(saved.product(), &extra_product);
    let found = f.repo.find(&LotId::new(2)).unwrap().unwrap();
    assert_eq!(found.product().name(), "Produto Extra");
}

#[test]
fn finding_a_lot_by_id() {
    let f = Fixture::new();
    let lot = create_lot(3);

    f.repo.save(lot.clone()).unwrap();

    assert_eq!(f.repo.find(&LotId::new(3)).unwrap(), Some(lot));
    assert_eq!(f.repo.find(&LotId::new(100)).unwrap(), None);
}

#[test]
fn finding_all_lots() {
    let f = Fixture::new();

    f.repo.save(create_lot(3)).unwrap();
    assert_eq!(f.repo.find_all().unwrap().len(), 1);

    f.repo.save(f.lot.clone()).unwrap();
    assert_eq!(f.repo.find_all().unwrap().len(), 2);
}

#[test]
fn updating_a_lot() {
    let mut f = Fixture::new();
    f.repo.save(create_lot(3)).unwrap();
    f.repo.save(f.lot.clone()).unwrap();
    assert_eq!(f.repo.find_all().unwrap().len(), 2);
    assert_eq!(f.lot.product().name(), "Produto Base");

    f.lot.product_mut().set_name("máquina de café expresso");
    f.repo.update(f.lot.clone()).unwrap();

    let updated = f.repo.find(&f.lot.id()).unwrap().unwrap();
    assert_eq!(updated.product().name(), "máquina de café expresso");
    assert_eq!(f.repo.find_all().unwrap().len(), 2);

    let unsaved = create_lot(8);
    assert!(f.repo.update(unsaved).unwrap().is_none());
    assert_eq!(f.repo.find_all().unwrap().len(), 2);
}

#[test]
fn mutating_without_update_leaves_store_unchanged() {
    let mut f = Fixture::new();
    f.repo.save(f.lot.clone()).unwrap();

    f.lot.product_mut().set_name("máquina de café expresso");

    let stored = f.repo.find(&f.lot.id()).unwrap().unwrap();
    assert_eq!(stored.product().name(), "Produto Base");
}

#[test]
fn deleting_one_lot() {
    let f = Fixture::new();
    let lot1 = create_lot(1);
    let lot2 = create_lot(2);
    f.repo.save(lot1.clone()).unwrap();
    f.repo.save(lot2).unwrap();
    assert_eq!(f.repo.find_all().unwrap().len(), 2);

    f.repo.delete(&lot1).unwrap();

    assert_eq!(f.repo.find_all().unwrap().len(), 1);
    assert!(f.repo.find(&LotId::new(1)).unwrap().is_none());
    assert!(f.repo.find(&LotId::new(2)).unwrap().is_some());
}

#[test]
fn deleting_all_lots() {
    let f = Fixture::new();
    f.repo.save(create_lot(1)).unwrap();
    f.repo.save(create_lot(2)).unwrap();
    assert_eq!(f.repo.find_all().unwrap().len(), 2);

    f.repo.delete_all().unwrap();

    assert_eq!(f.repo.find_all().unwrap().len(), 0);
}

fn distinct_ids() -> impl Strategy<Value = HashSet<u64>> {
    prop::collection::hash_set(0u64..10_000, 0..64)
}

proptest! {
    #[test]
    fn save_then_find_returns_equal_value(id in any::<u64>(), count in any::<u32>()) {
        let repo = VolatileLotRepository::new();
        let mut lot = create_lot(id);
        lot.set_item_count(count);

        repo.save(lot.clone()).unwrap();

        prop_assert_eq!(repo.find(&LotId::new(id)).unwrap(), Some(lot));
    }

    #[test]
    fn find_all_size_matches_distinct_saves(ids in distinct_ids()) {
        let repo = VolatileLotRepository::new();
        for id in &ids {
            repo.save(create_lot(*id)).unwrap();
        }

        prop_assert_eq!(repo.find_all().unwrap().len(), ids.len());
    }

    #[test]
    fn update_never_changes_store_size(ids in distinct_ids(), probe in 0u64..10_000) {
        let repo = VolatileLotRepository::new();
        for id in &ids {
            repo.save(create_lot(*id)).unwrap();
        }

        let mut lot = create_lot(probe);
        lot.set_item_count(42);
        let result = repo.update(lot.clone()).unwrap();

        prop_assert_eq!(repo.find_all().unwrap().len(), ids.len());
        if ids.contains(&probe) {
            prop_assert_eq!(result, Some(lot.clone()));
            prop_assert_eq!(repo.find(&LotId::new(probe)).unwrap(), Some(lot));
        } else {
            prop_assert!(result.is_none());
            prop_assert!(repo.find(&LotId::new(probe)).unwrap().is_none());
        }
    }

    #[test]
    fn delete_removes_exactly_one_entry(ids in distinct_ids()) {
        prop_assume!(!ids.is_empty());
        let repo = VolatileLotRepository::new();
        for id in &ids {
            repo.save(create_lot(*id)).unwrap();
        }
        let victim = *ids.iter().next().unwrap();

        repo.delete(&create_lot(victim)).unwrap();

        prop_assert_eq!(repo.find_all().unwrap().len(), ids.len() - 1);
        prop_assert!(repo.find(&LotId::new(victim)).unwrap().is_none());
        for id in ids.iter().filter(|id| **id != victim) {
            prop_assert!(repo.find(&LotId::new(*id)).unwrap().is_some());
        }
    }

    #[test]
    fn delete_all_always_empties(ids in distinct_ids()) {
        let repo = VolatileLotRepository::new();
        for id in &ids {
            repo.save(create_lot(*id)).unwrap();
        }

        repo.delete_all().unwrap();

        prop_assert_eq!(repo.find_all().unwrap().len(), 0);
    }
}
