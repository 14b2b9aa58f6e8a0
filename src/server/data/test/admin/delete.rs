use super::*;

/// Tests looking up and deleting a record by id.
///
/// Expected: Ok(true) for the existing course, then not found
#[tokio::test]
async fn deletes_record_by_id() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_all_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let course = factory::courses::create_course(db).await?;

    let repo = AdminRepository::<Courses>::new(db);
    assert!(repo.find_by_id(course.id).await?.is_some());

    assert!(repo.delete(course.id).await?);
    assert!(repo.find_by_id(course.id).await?.is_none());
    assert!(!repo.delete(course.id).await?);

    Ok(())
}
