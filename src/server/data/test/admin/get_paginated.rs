use super::*;

/// Tests listing records of any entity page by page.
///
/// Expected: Ok with 20 then 5 courses ordered by id, total 25
#[tokio::test]
async fn lists_records_by_page() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_all_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    for _ in 0..25 {
        factory::courses::create_course(db).await?;
    }

    let repo = AdminRepository::<Courses>::new(db);
    let (first, total) = repo.get_paginated(0, 20).await?;
    let (second, _) = repo.get_paginated(1, 20).await?;

    assert_eq!(total, 25);
    assert_eq!(first.len(), 20);
    assert_eq!(second.len(), 5);
    assert!(first.windows(2).all(|pair| pair[0].id < pair[1].id));

    Ok(())
}
