use super::*;

/// Tests resolving the staff record of a user.
///
/// Expected: Ok(Some) for a staff user, Ok(None) for a user without staff record
#[tokio::test]
async fn finds_staff_of_user() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_staff_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let (user, staff) = factory::helpers::create_staff_with_user(db).await?;
    let plain_user = factory::users::create_user(db).await?;

    let repo = StaffRepository::new(db);

    assert_eq!(repo.find_by_user_id(user.id).await?.map(|s| s.id), Some(staff.id));
    assert!(repo.find_by_user_id(plain_user.id).await?.is_none());

    Ok(())
}
