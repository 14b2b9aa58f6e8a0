use super::*;

/// Tests that publication years are distinct and newest first.
///
/// Verifies that duplicate years collapse and temporary theses do not contribute
/// their years.
///
/// Expected: Ok with [2021, 2019]
#[tokio::test]
async fn returns_distinct_years_of_published_theses() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_thesis_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let (staff, worktype, course, _) =
        factory::helpers::create_thesis_with_dependencies(db).await?;
    for (year, temporary) in [(2019, false), (2019, false), (2015, true)] {
        factory::thesis::ThesisFactory::new(db, worktype.id, course.id, staff.id)
            .publish_year(year)
            .temporary(temporary)
            .build()
            .await?;
    }

    let years = ThesisRepository::new(db).get_publish_years().await?;

    assert_eq!(years, vec![2021, 2019]);

    Ok(())
}

/// Tests publication years of an empty directory.
///
/// Expected: Ok with no years
#[tokio::test]
async fn returns_no_years_without_theses() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_thesis_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let years = ThesisRepository::new(db).get_publish_years().await?;

    assert!(years.is_empty());

    Ok(())
}
