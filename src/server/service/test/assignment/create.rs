use super::*;

/// Tests seating a student at a free desk.
///
/// Expected: Ok with the assignment stored
#[tokio::test]
async fn seats_student_at_free_desk() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_classroom_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let (classroom, desks) = factory::helpers::create_classroom_with_desks(db, 1).await?;
    let student = factory::create_student(db).await?;

    let assignment = AssignmentService::new(db)
        .create(CreateStudentAssignmentParams {
            classroom_id: classroom.id,
            student_id: student.id,
            desk_object_id: desks[0].id,
        })
        .await?;

    assert!(assignment.id > 0);
    assert_eq!(assignment.student_id, student.id);
    assert_eq!(assignment.desk_object_id, desks[0].id);

    Ok(())
}

/// Tests seating a student at an occupied desk.
///
/// Verifies that the previous occupant's assignment is replaced.
///
/// Expected: Ok with only the new assignment left
#[tokio::test]
async fn replaces_previous_occupant() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_classroom_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let (classroom, desks) = factory::helpers::create_classroom_with_desks(db, 1).await?;
    let students = factory::helpers::create_students(db, 2).await?;
    factory::create_assignment(db, classroom.id, students[0].id, desks[0].id).await?;

    let assignment = AssignmentService::new(db)
        .create(CreateStudentAssignmentParams {
            classroom_id: classroom.id,
            student_id: students[1].id,
            desk_object_id: desks[0].id,
        })
        .await?;

    let rows = StudentAssignment::find().all(db).await?;
    assert_eq!(rows.len(), 1);
    assert_eq!(rows[0].id, assignment.id);
    assert_eq!(rows[0].student_id, students[1].id);

    Ok(())
}

/// Tests moving a seated student to another desk.
///
/// Verifies that the student's old seat in the classroom is released.
///
/// Expected: Ok with the student at the new desk only
#[tokio::test]
async fn moves_student_to_new_desk() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_classroom_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let (classroom, desks) = factory::helpers::create_classroom_with_desks(db, 2).await?;
    let student = factory::create_student(db).await?;
    factory::create_assignment(db, classroom.id, student.id, desks[0].id).await?;

    AssignmentService::new(db)
        .create(CreateStudentAssignmentParams {
            classroom_id: classroom.id,
            student_id: student.id,
            desk_object_id: desks[1].id,
        })
        .await?;

    let rows = StudentAssignment::find().all(db).await?;
    assert_eq!(rows.len(), 1);
    assert_eq!(rows[0].desk_object_id, desks[1].id);

    Ok(())
}

/// Tests seating a student who doesn't exist.
///
/// Expected: Err(NotFound)
#[tokio::test]
async fn missing_student_is_not_found() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_classroom_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let (classroom, desks) = factory::helpers::create_classroom_with_desks(db, 1).await?;

    let result = AssignmentService::new(db)
        .create(CreateStudentAssignmentParams {
            classroom_id: classroom.id,
            student_id: 404,
            desk_object_id: desks[0].id,
        })
        .await;

    assert!(matches!(result, Err(AppError::NotFound(_))));

    Ok(())
}

/// Tests deleting an assignment twice.
///
/// Expected: Ok then Err(NotFound)
#[tokio::test]
async fn second_delete_is_not_found() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_classroom_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let (classroom, desks) = factory::helpers::create_classroom_with_desks(db, 1).await?;
    let student = factory::create_student(db).await?;
    let assignment =
        factory::create_assignment(db, classroom.id, student.id, desks[0].id).await?;

    let service = AssignmentService::new(db);
    service.delete(assignment.id).await?;

    assert!(matches!(
        service.delete(assignment.id).await,
        Err(AppError::NotFound(_))
    ));

    Ok(())
}
