#[cfg(test)]
#[path = "../../tests/unit/validation/resources_test.rs"]
mod resources_test;

use super::*;

const DUPLICATE_ID_KIND: &str = "DuplicateId";

fn check_duplicates(code: &str, entities: &str, ids: impl Iterator<Item = u64>) -> Result<(), FormatError> {
    get_duplicates(ids).map_or(Ok(()), |ids| {
        Err(FormatError::new_with_code(code, DUPLICATE_ID_KIND, format!("duplicated {entities} ids: {}", join(&ids))))
    })
}

/// Checks that drivers have unique ids.
fn check_e1001_no_drivers_with_duplicate_ids(ctx: &ValidationContext) -> Result<(), FormatError> {
    check_duplicates("E1001", "driver", ctx.drivers().map(|driver| driver.id))
}

/// Checks that trucks have unique ids.
fn check_e1002_no_trucks_with_duplicate_ids(ctx: &ValidationContext) -> Result<(), FormatError> {
    check_duplicates("E1002", "truck", ctx.trucks().map(|truck| truck.id))
}

/// Checks that customers have unique ids.
fn check_e1003_no_customers_with_duplicate_ids(ctx: &ValidationContext) -> Result<(), FormatError> {
    check_duplicates("E1003", "customer", ctx.customers().map(|customer| customer.id))
}

/// Checks that locations have unique ids.
fn check_e1004_no_locations_with_duplicate_ids(ctx: &ValidationContext) -> Result<(), FormatError> {
    check_duplicates("E1004", "location", ctx.locations().map(|location| location.id))
}

/// Validates drivers, trucks and reference data.
pub fn validate_resources(ctx: &ValidationContext) -> Result<(), Vec<FormatError>> {
    combine_error_results(&[
        check_e1001_no_drivers_with_duplicate_ids(ctx),
        check_e1002_no_trucks_with_duplicate_ids(ctx),
        check_e1003_no_customers_with_duplicate_ids(ctx),
        check_e1004_no_locations_with_duplicate_ids(ctx),
    ])
}
