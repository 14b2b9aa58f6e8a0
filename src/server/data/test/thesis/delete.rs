use super::*;

/// Tests deleting a thesis.
///
/// Expected: Ok(true) on first delete, Ok(false) once it is gone
#[tokio::test]
async fn deletes_thesis() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_thesis_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let (_, _, _, thesis) = factory::helpers::create_thesis_with_dependencies(db).await?;

    let repo = ThesisRepository::new(db);

    assert!(repo.delete(thesis.id).await?);
    assert!(!repo.delete(thesis.id).await?);
    assert!(entity::prelude::Thesis::find_by_id(thesis.id)
        .one(db)
        .await?
        .is_none());

    Ok(())
}
