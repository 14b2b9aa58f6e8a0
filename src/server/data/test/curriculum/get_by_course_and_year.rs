use super::*;

/// Tests loading one study year of a course ordered by discipline block.
///
/// Verifies that other years and other courses are excluded.
///
/// Expected: Ok with the two disciplines of year 1, block "A" first
#[tokio::test]
async fn returns_year_ordered_by_block() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_all_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let course = factory::courses::create_course(db).await?;
    let other_course = factory::courses::create_course(db).await?;
    factory::curriculum::CurriculumFactory::new(db, course.id)
        .study_year(1)
        .kind("B")
        .discipline("Алгебра")
        .build()
        .await?;
    factory::curriculum::CurriculumFactory::new(db, course.id)
        .study_year(1)
        .kind("A")
        .discipline("Программирование")
        .build()
        .await?;
    factory::curriculum::CurriculumFactory::new(db, course.id)
        .study_year(2)
        .build()
        .await?;
    factory::curriculum::CurriculumFactory::new(db, other_course.id)
        .study_year(1)
        .build()
        .await?;

    let entries = CurriculumRepository::new(db)
        .get_by_course_and_year(course.id, 1)
        .await?;

    let disciplines: Vec<&str> = entries.iter().map(|e| e.discipline.as_str()).collect();
    assert_eq!(disciplines, vec!["Программирование", "Алгебра"]);

    Ok(())
}
