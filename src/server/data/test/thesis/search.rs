use super::*;

fn all_years() -> ThesisQueryParam {
    ThesisQueryParam {
        start_year: 2000,
        end_year: 2100,
        course_id: None,
        supervisor_id: None,
        type_id: None,
    }
}

/// Tests that search excludes temporary theses and orders by year descending.
///
/// Expected: Ok with the two published theses, newest first
#[tokio::test]
async fn returns_published_theses_newest_first() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_thesis_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let (staff, worktype, course, newest) =
        factory::helpers::create_thesis_with_dependencies(db).await?;
    let older = factory::thesis::ThesisFactory::new(db, worktype.id, course.id, staff.id)
        .publish_year(2018)
        .build()
        .await?;
    factory::thesis::ThesisFactory::new(db, worktype.id, course.id, staff.id)
        .temporary(true)
        .build()
        .await?;

    let (theses, total) = ThesisRepository::new(db).search(all_years(), 0, 10).await?;

    assert_eq!(total, 2);
    let ids: Vec<i32> = theses.iter().map(|t| t.id).collect();
    assert_eq!(ids, vec![newest.id, older.id]);

    Ok(())
}

/// Tests that the year range is inclusive on both ends.
///
/// Expected: Ok with the theses from 2019 and 2020 only
#[tokio::test]
async fn filters_by_inclusive_year_range() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_thesis_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let (staff, worktype, course, _) =
        factory::helpers::create_thesis_with_dependencies(db).await?;
    for year in [2018, 2019, 2020] {
        factory::thesis::ThesisFactory::new(db, worktype.id, course.id, staff.id)
            .publish_year(year)
            .build()
            .await?;
    }

    let param = ThesisQueryParam {
        start_year: 2019,
        end_year: 2020,
        ..all_years()
    };
    let (theses, total) = ThesisRepository::new(db).search(param, 0, 10).await?;

    assert_eq!(total, 2);
    assert!(theses.iter().all(|t| (2019..=2020).contains(&t.publish_year)));

    Ok(())
}

/// Tests course, supervisor and worktype constraints together.
///
/// Expected: Ok with only the thesis matching every constraint
#[tokio::test]
async fn applies_optional_constraints() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_thesis_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let (staff, worktype, course, _) =
        factory::helpers::create_thesis_with_dependencies(db).await?;
    let (_, other_staff) = factory::helpers::create_staff_with_user(db).await?;
    let other_worktype = factory::worktype::create_worktype(db).await?;
    let target =
        factory::thesis::create_thesis(db, other_worktype.id, course.id, other_staff.id).await?;
    factory::thesis::create_thesis(db, worktype.id, course.id, other_staff.id).await?;
    factory::thesis::create_thesis(db, other_worktype.id, course.id, staff.id).await?;

    let param = ThesisQueryParam {
        course_id: Some(course.id),
        supervisor_id: Some(other_staff.id),
        type_id: Some(other_worktype.id),
        ..all_years()
    };
    let (theses, total) = ThesisRepository::new(db).search(param, 0, 10).await?;

    assert_eq!(total, 1);
    assert_eq!(theses[0].id, target.id);

    Ok(())
}

/// Tests paging through results and past the last page.
///
/// Expected: Ok with 10, then 2, then 0 theses, total always 12
#[tokio::test]
async fn paginates_results() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_thesis_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let (staff, worktype, course, _) =
        factory::helpers::create_thesis_with_dependencies(db).await?;
    for _ in 0..11 {
        factory::thesis::create_thesis(db, worktype.id, course.id, staff.id).await?;
    }

    let repo = ThesisRepository::new(db);
    let (first, total) = repo.search(all_years(), 0, 10).await?;
    let (second, _) = repo.search(all_years(), 1, 10).await?;
    let (beyond, _) = repo.search(all_years(), 5, 10).await?;

    assert_eq!(total, 12);
    assert_eq!(first.len(), 10);
    assert_eq!(second.len(), 2);
    assert!(beyond.is_empty());

    Ok(())
}
