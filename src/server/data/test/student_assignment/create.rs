use super::*;

/// Tests seating several students with one call.
///
/// Verifies that rows come back in input order and share a timestamp.
///
/// Expected: Ok with one assignment per pair
#[tokio::test]
async fn creates_many_in_order() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_classroom_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let (classroom, desks) = factory::helpers::create_classroom_with_desks(db, 2).await?;
    let students = factory::helpers::create_students(db, 2).await?;
    let pairs = vec![(students[1].id, desks[0].id), (students[0].id, desks[1].id)];

    let repo = StudentAssignmentRepository::new(db);
    let now = Utc::now();
    let created = repo.create_many(classroom.id, &pairs, now).await?;

    let created_pairs: Vec<(i32, i32)> = created
        .iter()
        .map(|a| (a.student_id, a.desk_object_id))
        .collect();
    assert_eq!(created_pairs, pairs);
    assert!(created.iter().all(|a| a.classroom_id == classroom.id));
    assert!(created.iter().all(|a| a.assigned_at == now));

    Ok(())
}

/// Tests seating a second student at an occupied desk.
///
/// Verifies that the unique index on the desk rejects the row.
///
/// Expected: Err with a unique constraint violation
#[tokio::test]
async fn rejects_second_student_at_desk() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_classroom_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let (classroom, desks) = factory::helpers::create_classroom_with_desks(db, 1).await?;
    let students = factory::helpers::create_students(db, 2).await?;

    let repo = StudentAssignmentRepository::new(db);
    repo.create(classroom.id, students[0].id, desks[0].id, Utc::now())
        .await?;
    let result = repo
        .create(classroom.id, students[1].id, desks[0].id, Utc::now())
        .await;

    let err = result.unwrap_err();
    assert!(matches!(
        err.sql_err(),
        Some(sea_orm::SqlErr::UniqueConstraintViolation(_))
    ));

    Ok(())
}

/// Tests that a write losing the race for a desk maps to a conflict.
///
/// Verifies that the desk unique index surfaces through `AppError::from_write`.
///
/// Expected: Err(AppError::Conflict)
#[tokio::test]
async fn occupied_desk_maps_to_conflict() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_classroom_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let (classroom, desks) = factory::helpers::create_classroom_with_desks(db, 1).await?;
    let students = factory::helpers::create_students(db, 2).await?;

    let repo = StudentAssignmentRepository::new(db);
    repo.create(classroom.id, students[0].id, desks[0].id, Utc::now())
        .await?;
    let result = repo
        .create(classroom.id, students[1].id, desks[0].id, Utc::now())
        .await
        .map_err(AppError::from_write);

    assert!(matches!(result, Err(AppError::Conflict(_))));
    assert_eq!(StudentAssignment::find().all(db).await?.len(), 1);

    Ok(())
}

/// Tests seating one student at two desks of the same classroom.
///
/// Verifies that the classroom/student unique index rejects the second row and that
/// the rejection maps to a conflict.
///
/// Expected: Err(AppError::Conflict)
#[tokio::test]
async fn student_seated_twice_in_classroom_maps_to_conflict() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_classroom_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let (classroom, desks) = factory::helpers::create_classroom_with_desks(db, 2).await?;
    let student = factory::create_student(db).await?;

    let repo = StudentAssignmentRepository::new(db);
    repo.create(classroom.id, student.id, desks[0].id, Utc::now())
        .await?;
    let result = repo
        .create(classroom.id, student.id, desks[1].id, Utc::now())
        .await
        .map_err(AppError::from_write);

    assert!(matches!(result, Err(AppError::Conflict(_))));
    assert_eq!(StudentAssignment::find().all(db).await?.len(), 1);

    Ok(())
}

/// Tests seating one student in two different classrooms.
///
/// Verifies that the classroom/student index is scoped to the classroom.
///
/// Expected: Ok for both rows
#[tokio::test]
async fn allows_student_in_two_classrooms() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_classroom_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let (first, first_desks) = factory::helpers::create_classroom_with_desks(db, 1).await?;
    let (second, second_desks) = factory::helpers::create_classroom_with_desks(db, 1).await?;
    let student = factory::create_student(db).await?;

    let repo = StudentAssignmentRepository::new(db);
    repo.create(first.id, student.id, first_desks[0].id, Utc::now())
        .await?;
    repo.create(second.id, student.id, second_desks[0].id, Utc::now())
        .await?;

    assert_eq!(StudentAssignment::find().all(db).await?.len(), 2);

    Ok(())
}
