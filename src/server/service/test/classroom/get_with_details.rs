use super::*;

/// Tests composing a classroom with objects and assignments.
///
/// Creates a classroom with two desks and a whiteboard and seats one student. Verifies
/// that all objects are listed and the assignment carries its student and desk.
///
/// Expected: Ok with 3 objects and 1 enriched assignment
#[tokio::test]
async fn joins_assignments_with_student_and_desk() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_classroom_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let (classroom, desks) = factory::helpers::create_classroom_with_desks(db, 2).await?;
    factory::create_object(
        db,
        classroom.id,
        entity::sea_orm_active_enums::ClassroomObjectType::Whiteboard,
    )
    .await?;
    let student = factory::create_student(db).await?;
    factory::create_assignment(db, classroom.id, student.id, desks[1].id).await?;

    let details = ClassroomService::new(db).get_with_details(classroom.id).await?;

    assert_eq!(details.classroom.id, classroom.id);
    assert_eq!(details.objects.len(), 3);
    assert_eq!(details.assignments.len(), 1);
    let seated = &details.assignments[0];
    assert_eq!(seated.student.id, student.id);
    assert_eq!(seated.student.name, student.name);
    assert_eq!(seated.desk_object.id, desks[1].id);
    assert_eq!(seated.assignment.classroom_id, classroom.id);

    Ok(())
}

/// Tests that assignments in other classrooms are not included.
///
/// Expected: Ok with no assignments for the empty classroom
#[tokio::test]
async fn excludes_other_classrooms() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_classroom_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let (busy, desks) = factory::helpers::create_classroom_with_desks(db, 1).await?;
    let empty = factory::create_classroom(db).await?;
    let student = factory::create_student(db).await?;
    factory::create_assignment(db, busy.id, student.id, desks[0].id).await?;

    let details = ClassroomService::new(db).get_with_details(empty.id).await?;

    assert!(details.objects.is_empty());
    assert!(details.assignments.is_empty());

    Ok(())
}

/// Tests fetching a classroom that doesn't exist.
///
/// Verifies that the lookup fails without creating anything.
///
/// Expected: Err(NotFound) and no classrooms stored
#[tokio::test]
async fn missing_classroom_is_not_found() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_classroom_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let result = ClassroomService::new(db).get_with_details(12).await;

    assert!(matches!(result, Err(AppError::NotFound(_))));
    assert_eq!(Classroom::find().count(db).await?, 0);

    Ok(())
}
