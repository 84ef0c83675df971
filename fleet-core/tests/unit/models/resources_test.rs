use super::*;

#[test]
fn can_return_resources_sorted_by_id() {
    let registry = Registry::new(
        vec![Driver::new(3, "c"), Driver::new(1, "a"), Driver::new(2, "b")],
        vec![Truck::new(2, "B", 5), Truck::new(1, "A", 10)],
        vec![Customer::new(2, "second"), Customer::new(1, "first")],
        vec![Location::new(5, "hub"), Location::new(4, "store")],
    );

    assert_eq!(registry.drivers().iter().map(|driver| driver.id).collect::<Vec<_>>(), vec![1, 2, 3]);
    assert_eq!(registry.trucks().iter().map(|truck| truck.id).collect::<Vec<_>>(), vec![1, 2]);
    assert_eq!(registry.customers().iter().map(|customer| customer.id).collect::<Vec<_>>(), vec![1, 2]);
    assert_eq!(registry.locations().iter().map(|location| location.id).collect::<Vec<_>>(), vec![4, 5]);
}

#[test]
fn can_lookup_entities_by_id() {
    let registry = Registry::new(
        vec![Driver::new(1, "John Doe")],
        vec![Truck::new(7, "ABC-123", 10)],
        vec![Customer::new(1, "Acme")],
        vec![Location::new(1, "Hub")],
    );

    assert_eq!(registry.driver(1).map(|driver| driver.name), Some("John Doe".to_string()));
    assert!(registry.driver(2).is_none());
    assert_eq!(registry.truck(7).map(|truck| truck.license_plate), Some("ABC-123".to_string()));
    assert!(registry.truck(1).is_none());
    assert_eq!(registry.customer(1).map(|customer| customer.name), Some("Acme".to_string()));
    assert!(registry.location(2).is_none());
}

#[test]
fn can_create_resources_with_defaults() {
    let driver = Driver::new(1, "John Doe");
    let truck = Truck::new(1, "ABC-123", 10);

    assert_eq!(driver.status, DriverStatus::Available);
    assert_eq!(driver.rating, 5.);
    assert_eq!(truck.status, TruckStatus::Available);
    assert!(!truck.is_in_maintenance());
    assert!(Truck { status: TruckStatus::Maintenance, ..truck }.is_in_maintenance());
}
