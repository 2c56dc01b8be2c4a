//! Employee repository and population tests against a real MongoDB container.
//!
//! Run with `cargo test -p domain_employees -- --ignored` (requires Docker).

use domain_departments::{CreateDepartment, DepartmentRepository, MongoDepartmentRepository};
use domain_employees::*;
use test_utils::{
    TestMongo,
    assertions::{assert_some, assert_uuid_eq},
};

fn service(mongo: &TestMongo) -> EmployeeService<MongoEmployeeRepository, MongoDepartmentRepository> {
    let db = mongo.database("companyDB");
    EmployeeService::new(
        MongoEmployeeRepository::new(db.clone()),
        MongoDepartmentRepository::new(db),
    )
}

#[tokio::test]
#[ignore] // Requires Docker
async fn test_stored_document_uses_camel_case_fields() {
    let mongo = TestMongo::new().await;
    let repo = MongoEmployeeRepository::new(mongo.database("companyDB"));

    let created = repo
        .create(CreateEmployee::new("John", "Doe", "IT"))
        .await
        .unwrap();

    let filter = EmployeeFilter {
        first_name: Some("John".to_string()),
        ..Default::default()
    };
    let found = assert_some(repo.find_one(filter).await.unwrap(), "employee");
    assert_eq!(found, created);
}

#[tokio::test]
#[ignore] // Requires Docker
async fn test_reads_populate_department_ids() {
    let mongo = TestMongo::new().await;
    let departments = MongoDepartmentRepository::new(mongo.database("companyDB"));
    let service = service(&mongo);

    let management = departments
        .create(CreateDepartment::named("Management"))
        .await
        .unwrap();

    let linked = service
        .create_employee(CreateEmployee::new("John", "Doe", management.id.to_string()))
        .await
        .unwrap();
    service
        .create_employee(CreateEmployee::new("Jane", "Roe", "Sales"))
        .await
        .unwrap();

    let one = service.get_employee(linked.id).await.unwrap();
    assert_eq!(one.department, DepartmentRef::Populated(management.clone()));

    let all = service
        .list_employees(EmployeeFilter::default())
        .await
        .unwrap();
    assert_eq!(all.len(), 2);
    assert_eq!(all[0].department, DepartmentRef::Populated(management));
    assert_eq!(all[1].department, DepartmentRef::Raw("Sales".to_string()));
}

#[tokio::test]
#[ignore] // Requires Docker
async fn test_deleted_department_falls_back_to_raw_id() {
    let mongo = TestMongo::new().await;
    let departments = MongoDepartmentRepository::new(mongo.database("companyDB"));
    let service = service(&mongo);

    let legal = departments
        .create(CreateDepartment::named("Legal"))
        .await
        .unwrap();
    let employee = service
        .create_employee(CreateEmployee::new("John", "Doe", legal.id.to_string()))
        .await
        .unwrap();

    departments.delete(legal.id).await.unwrap();

    let read = service.get_employee(employee.id).await.unwrap();
    assert_uuid_eq(read.id, employee.id, "employee");
    assert_eq!(read.department, DepartmentRef::Raw(legal.id.to_string()));
}

#[tokio::test]
#[ignore] // Requires Docker
async fn test_update_and_delete_round() {
    let mongo = TestMongo::new().await;
    let service = service(&mongo);

    let created = service
        .create_employee(CreateEmployee::new("John", "Doe", "IT"))
        .await
        .unwrap();

    let updated = service
        .update_employee(created.id, UpdateEmployee::with_first_name("Amanda"))
        .await
        .unwrap();
    assert_eq!(updated.first_name, "Amanda");
    assert_eq!(updated.last_name, "Doe");
    assert!(updated.updated_at >= created.updated_at);

    let removed = service.delete_employee(created.id).await.unwrap();
    assert_eq!(removed.id, created.id);
    assert!(matches!(
        service.get_employee(created.id).await,
        Err(EmployeeError::NotFound)
    ));
}

#[tokio::test]
#[ignore] // Requires Docker
async fn test_bulk_update_and_delete() {
    let mongo = TestMongo::new().await;
    let repo = MongoEmployeeRepository::new(mongo.database("companyDB"));

    for first_name in ["Ann", "Bob", "Cid"] {
        repo.create(CreateEmployee::new(first_name, "Doe", "IT"))
            .await
            .unwrap();
    }

    let modified = repo
        .update_many(UpdateEmployee::with_department("Operations"))
        .await
        .unwrap();
    assert_eq!(modified, 3);

    let filter = EmployeeFilter {
        department: Some("Operations".to_string()),
        ..Default::default()
    };
    assert_eq!(repo.list(filter).await.unwrap().len(), 3);

    assert_eq!(repo.delete_many().await.unwrap(), 3);
    assert_eq!(repo.count().await.unwrap(), 0);
}
