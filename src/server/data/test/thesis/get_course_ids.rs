use super::*;

/// Tests that course ids in use are reported once each.
///
/// Expected: Ok with both course ids, and `course_in_use` false for an unused course
#[tokio::test]
async fn returns_distinct_course_ids() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_thesis_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let (staff, worktype, first_course, _) =
        factory::helpers::create_thesis_with_dependencies(db).await?;
    let second_course = factory::courses::create_course(db).await?;
    let unused_course = factory::courses::create_course(db).await?;
    factory::thesis::create_thesis(db, worktype.id, second_course.id, staff.id).await?;
    factory::thesis::create_thesis(db, worktype.id, second_course.id, staff.id).await?;

    let repo = ThesisRepository::new(db);
    let mut ids = repo.get_course_ids().await?;
    ids.sort_unstable();

    assert_eq!(ids, vec![first_course.id, second_course.id]);
    assert!(repo.course_in_use(second_course.id).await?);
    assert!(!repo.course_in_use(unused_course.id).await?);

    Ok(())
}

/// Tests that supervisor ids in use are reported once each.
///
/// Expected: Ok with the single supervisor id
#[tokio::test]
async fn returns_distinct_supervisor_ids() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_thesis_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let (staff, worktype, course, _) =
        factory::helpers::create_thesis_with_dependencies(db).await?;
    factory::thesis::create_thesis(db, worktype.id, course.id, staff.id).await?;

    let repo = ThesisRepository::new(db);
    let ids = repo.get_supervisor_ids().await?;

    assert_eq!(ids, vec![staff.id]);
    assert!(repo.supervisor_in_use(staff.id).await?);
    assert!(!repo.supervisor_in_use(staff.id + 100).await?);

    Ok(())
}
