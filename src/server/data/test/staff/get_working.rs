use super::*;

/// Tests that former staff are excluded from the department list.
///
/// Expected: Ok with the two working staff members and their users
#[tokio::test]
async fn excludes_staff_no_longer_working() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_staff_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let (first_user, first) = factory::helpers::create_staff_with_user(db).await?;
    let (_, second) = factory::helpers::create_staff_with_user(db).await?;
    let retired_user = factory::users::create_user(db).await?;
    factory::staff::StaffFactory::new(db, retired_user.id)
        .still_working(false)
        .build()
        .await?;

    let staff = StaffRepository::new(db).get_working(None).await?;

    let ids: Vec<i32> = staff.iter().map(|(s, _)| s.id).collect();
    assert_eq!(ids, vec![first.id, second.id]);
    assert_eq!(staff[0].1.id, first_user.id);

    Ok(())
}

/// Tests limiting the number of staff members returned.
///
/// Expected: Ok with the first 6 of 8 working staff members
#[tokio::test]
async fn limits_number_of_staff() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_staff_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    for _ in 0..8 {
        factory::helpers::create_staff_with_user(db).await?;
    }

    let staff = StaffRepository::new(db).get_working(Some(6)).await?;

    assert_eq!(staff.len(), 6);

    Ok(())
}
