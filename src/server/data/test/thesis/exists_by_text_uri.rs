use super::*;

/// Tests duplicate detection by stored text file name.
///
/// Expected: Ok(true) for the stored name, Ok(false) for another one
#[tokio::test]
async fn detects_existing_text_uri() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_thesis_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let (staff, worktype, course, _) =
        factory::helpers::create_thesis_with_dependencies(db).await?;
    factory::thesis::ThesisFactory::new(db, worktype.id, course.id, staff.id)
        .text_uri(Some("Ivan_Petrov_Bachelor_Thesis_2021_text.pdf"))
        .build()
        .await?;

    let repo = ThesisRepository::new(db);

    assert!(
        repo.exists_by_text_uri("Ivan_Petrov_Bachelor_Thesis_2021_text.pdf")
            .await?
    );
    assert!(
        !repo
            .exists_by_text_uri("Ivan_Petrov_Master_Thesis_2021_text.pdf")
            .await?
    );

    Ok(())
}
