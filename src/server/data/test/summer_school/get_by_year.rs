use super::*;

/// Tests that only projects of the requested edition are returned.
///
/// Expected: Ok with the 2021 projects in insertion order, other years excluded
#[tokio::test]
async fn returns_projects_of_year() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::SummerSchool)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let first = factory::summer_school::SummerSchoolFactory::new(db)
        .project_name("REAL.NET")
        .build()
        .await?;
    factory::summer_school::SummerSchoolFactory::new(db)
        .year(2020)
        .build()
        .await?;
    let second = factory::create_project(db).await?;

    let projects = SummerSchoolRepository::new(db).get_by_year(2021).await?;

    let ids: Vec<i32> = projects.iter().map(|p| p.id).collect();
    assert_eq!(ids, vec![first.id, second.id]);
    assert_eq!(projects[0].project_name, "REAL.NET");

    Ok(())
}

/// Tests a year without projects.
///
/// Expected: Ok with an empty list
#[tokio::test]
async fn returns_empty_for_year_without_projects() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::SummerSchool)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    factory::create_project(db).await?;

    let projects = SummerSchoolRepository::new(db).get_by_year(2019).await?;

    assert!(projects.is_empty());

    Ok(())
}
