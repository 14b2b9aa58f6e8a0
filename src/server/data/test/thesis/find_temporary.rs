use super::*;

/// Tests that moderation lookups only see temporary theses.
///
/// Expected: Ok(Some) for the temporary thesis, Ok(None) for the published one
#[tokio::test]
async fn finds_only_temporary_theses() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_thesis_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let (staff, worktype, course, published) =
        factory::helpers::create_thesis_with_dependencies(db).await?;
    let temporary = factory::thesis::ThesisFactory::new(db, worktype.id, course.id, staff.id)
        .temporary(true)
        .build()
        .await?;

    let repo = ThesisRepository::new(db);

    assert!(repo.find_temporary(temporary.id).await?.is_some());
    assert!(repo.find_temporary(published.id).await?.is_none());

    let listed = repo.get_temporary().await?;
    assert_eq!(listed.len(), 1);
    assert_eq!(listed[0].id, temporary.id);

    Ok(())
}
