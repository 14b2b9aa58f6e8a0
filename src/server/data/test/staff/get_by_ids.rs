use super::*;

/// Tests loading supervisors by id.
///
/// Expected: Ok with the requested staff member only, unknown ids skipped
#[tokio::test]
async fn loads_requested_staff_with_users() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_staff_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let (user, staff) = factory::helpers::create_staff_with_user(db).await?;
    factory::helpers::create_staff_with_user(db).await?;

    let rows = StaffRepository::new(db)
        .get_by_ids(vec![staff.id, staff.id + 100])
        .await?;

    assert_eq!(rows.len(), 1);
    assert_eq!(rows[0].0.id, staff.id);
    assert_eq!(rows[0].1.last_name, user.last_name);

    Ok(())
}

/// Tests that no query is needed for an empty id list.
///
/// Expected: Ok with empty list
#[tokio::test]
async fn returns_empty_for_no_ids() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_staff_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let rows = StaffRepository::new(db).get_by_ids(Vec::new()).await?;

    assert!(rows.is_empty());

    Ok(())
}
