use super::*;

/// Tests inserting an uploaded thesis.
///
/// Verifies that the thesis is flagged temporary, not recommended, and keeps the
/// stored file names.
///
/// Expected: Ok with the inserted thesis
#[tokio::test]
async fn inserts_temporary_thesis() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_thesis_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let (staff, worktype, course, _) =
        factory::helpers::create_thesis_with_dependencies(db).await?;

    let thesis = ThesisRepository::new(db)
        .create_temporary(CreateTemporaryThesisParam {
            name_ru: "Статический анализ".to_string(),
            author: "Иван Петров".to_string(),
            text_uri: "Ivan_Petrov_Bachelor_Thesis_2021_text.pdf".to_string(),
            presentation_uri: Some("Ivan_Petrov_Bachelor_Thesis_2021_slides.pdf".to_string()),
            supervisor_review_uri: None,
            reviewer_review_uri: None,
            source_uri: Some("https://github.com/example/repo".to_string()),
            publish_year: 2021,
            type_id: worktype.id,
            course_id: course.id,
            supervisor_id: staff.id,
            reviewer_id: None,
        })
        .await?;

    assert!(thesis.temporary);
    assert!(!thesis.recomended);
    assert_eq!(
        thesis.text_uri.as_deref(),
        Some("Ivan_Petrov_Bachelor_Thesis_2021_text.pdf")
    );
    assert_eq!(thesis.reviewer_id, None);

    Ok(())
}

/// Tests that a second thesis with the same text file name is rejected.
///
/// Expected: Err from the unique constraint on text_uri
#[tokio::test]
async fn rejects_duplicate_text_uri() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_thesis_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let (staff, worktype, course, existing) =
        factory::helpers::create_thesis_with_dependencies(db).await?;

    let result = ThesisRepository::new(db)
        .create_temporary(CreateTemporaryThesisParam {
            name_ru: "Дубликат".to_string(),
            author: "Author".to_string(),
            text_uri: existing.text_uri.clone().unwrap(),
            presentation_uri: None,
            supervisor_review_uri: None,
            reviewer_review_uri: None,
            source_uri: None,
            publish_year: 2021,
            type_id: worktype.id,
            course_id: course.id,
            supervisor_id: staff.id,
            reviewer_id: None,
        })
        .await;

    assert!(result.is_err());

    Ok(())
}
