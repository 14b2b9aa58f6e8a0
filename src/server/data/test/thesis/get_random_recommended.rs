use super::*;

/// Tests that only recommended published theses are picked, up to the limit.
///
/// Expected: Ok with 4 of the 5 recommended theses
#[tokio::test]
async fn picks_recommended_theses_up_to_limit() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_thesis_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let (staff, worktype, course, _) =
        factory::helpers::create_thesis_with_dependencies(db).await?;
    for _ in 0..5 {
        factory::thesis::ThesisFactory::new(db, worktype.id, course.id, staff.id)
            .recomended(true)
            .build()
            .await?;
    }
    factory::thesis::ThesisFactory::new(db, worktype.id, course.id, staff.id)
        .recomended(true)
        .temporary(true)
        .build()
        .await?;

    let theses = ThesisRepository::new(db).get_random_recommended(4).await?;

    assert_eq!(theses.len(), 4);
    assert!(theses.iter().all(|t| t.recomended && !t.temporary));

    Ok(())
}

/// Tests the recommendation pick without recommended theses.
///
/// Expected: Ok with empty list
#[tokio::test]
async fn returns_empty_without_recommended_theses() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_thesis_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    factory::helpers::create_thesis_with_dependencies(db).await?;

    let theses = ThesisRepository::new(db).get_random_recommended(4).await?;

    assert!(theses.is_empty());

    Ok(())
}
