use super::*;

/// Tests finding a supervisor's account by last name.
///
/// Expected: Ok(Some) with the first matching user, Ok(None) for an unknown name
#[tokio::test]
async fn finds_first_user_with_last_name() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_staff_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let first = factory::users::UserFactory::new(db)
        .last_name("Терехов")
        .build()
        .await?;
    factory::users::UserFactory::new(db)
        .last_name("Терехов")
        .build()
        .await?;

    let repo = UserRepository::new(db);

    assert_eq!(
        repo.find_by_last_name("Терехов").await?.map(|u| u.id),
        Some(first.id)
    );
    assert!(repo.find_by_last_name("Литвинов").await?.is_none());

    Ok(())
}
