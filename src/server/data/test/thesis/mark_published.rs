use super::*;

/// Tests publishing a temporary thesis.
///
/// Expected: Ok with the flag cleared in the database
#[tokio::test]
async fn clears_temporary_flag() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_thesis_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let (staff, worktype, course, _) =
        factory::helpers::create_thesis_with_dependencies(db).await?;
    let thesis = factory::thesis::ThesisFactory::new(db, worktype.id, course.id, staff.id)
        .temporary(true)
        .build()
        .await?;

    ThesisRepository::new(db).mark_published(thesis.clone()).await?;

    let stored = entity::prelude::Thesis::find_by_id(thesis.id)
        .one(db)
        .await?
        .unwrap();
    assert!(!stored.temporary);

    Ok(())
}
