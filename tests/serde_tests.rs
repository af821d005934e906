#![cfg(feature = "serde")]

//! Integration tests for serde support on the model types.

use std::collections::BTreeMap;

use optikon::model::{Address, Company, Db, Employee, NetworkResult, Street};
use optikon::optics::Lens;
use rstest::rstest;

fn employee() -> Employee {
    Employee::new(
        "John Doe",
        Company::new(
            "Kategory",
            Address::new("Functional city", Street::new(42, "lambda street")),
        ),
    )
}

#[rstest]
fn test_employee_json_roundtrip() {
    let original = employee();
    let json = serde_json::to_string(&original).unwrap();
    let restored: Employee = serde_json::from_str(&json).unwrap();
    assert_eq!(restored, original);
}

#[rstest]
fn test_employee_json_shape() {
    let value = serde_json::to_value(employee()).unwrap();
    assert_eq!(value["company"]["address"]["street"]["number"], 42);
    assert_eq!(value["company"]["address"]["street"]["name"], "lambda street");
}

#[rstest]
fn test_lens_update_survives_roundtrip() {
    let updated = Employee::company_street_name_lens().set(employee(), "Monad Avenue".to_string());
    let json = serde_json::to_string(&updated).unwrap();
    let restored: Employee = serde_json::from_str(&json).unwrap();
    assert_eq!(
        Employee::company_street_name_lens().get(&restored),
        "Monad Avenue"
    );
}

#[rstest]
fn test_db_json_roundtrip() {
    let db = Db::new(BTreeMap::from([(1, "one".to_string()), (2, "two".to_string())]));
    let json = serde_json::to_string(&db).unwrap();
    let restored: Db = serde_json::from_str(&json).unwrap();
    assert_eq!(restored, db);
}

#[rstest]
#[case(NetworkResult::success("ok"))]
#[case(NetworkResult::http_error("404"))]
#[case(NetworkResult::timeout())]
fn test_network_result_json_roundtrip(#[case] result: NetworkResult) {
    let json = serde_json::to_string(&result).unwrap();
    let restored: NetworkResult = serde_json::from_str(&json).unwrap();
    assert_eq!(restored, result);
}
