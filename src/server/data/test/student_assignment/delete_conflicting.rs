use super::*;

/// Tests clearing assignments that collide on either desk or student.
///
/// Seats three students, then clears conflicts for desk 0 and student 1. Verifies that
/// only the third assignment survives.
///
/// Expected: Ok(2) with one assignment left
#[tokio::test]
async fn deletes_by_desk_or_student() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_classroom_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let (classroom, desks) = factory::helpers::create_classroom_with_desks(db, 3).await?;
    let students = factory::helpers::create_students(db, 3).await?;
    for (student, desk) in students.iter().zip(&desks) {
        factory::create_assignment(db, classroom.id, student.id, desk.id).await?;
    }

    let repo = StudentAssignmentRepository::new(db);
    let removed = repo
        .delete_conflicting(classroom.id, &[students[1].id], &[desks[0].id])
        .await?;

    assert_eq!(removed, 2);
    let remaining = repo.get_by_classroom_id(classroom.id).await?;
    assert_eq!(remaining.len(), 1);
    assert_eq!(remaining[0].student_id, students[2].id);

    Ok(())
}

/// Tests that clearing conflicts is scoped to one classroom.
///
/// Verifies that the same student seated in another classroom keeps that seat.
///
/// Expected: Ok(1) with the other classroom untouched
#[tokio::test]
async fn leaves_other_classrooms_untouched() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_classroom_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let (first, first_desks) = factory::helpers::create_classroom_with_desks(db, 1).await?;
    let (second, second_desks) = factory::helpers::create_classroom_with_desks(db, 1).await?;
    let student = factory::create_student(db).await?;
    factory::create_assignment(db, first.id, student.id, first_desks[0].id).await?;
    factory::create_assignment(db, second.id, student.id, second_desks[0].id).await?;

    let repo = StudentAssignmentRepository::new(db);
    let removed = repo.delete_conflicting(first.id, &[student.id], &[]).await?;

    assert_eq!(removed, 1);
    assert_eq!(StudentAssignment::find().all(db).await?.len(), 1);
    assert_eq!(repo.get_by_classroom_id(second.id).await?.len(), 1);

    Ok(())
}

/// Tests clearing conflicts with both lists empty.
///
/// Expected: Ok(0) with nothing removed
#[tokio::test]
async fn empty_lists_remove_nothing() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_classroom_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let (classroom, desks) = factory::helpers::create_classroom_with_desks(db, 1).await?;
    let student = factory::create_student(db).await?;
    factory::create_assignment(db, classroom.id, student.id, desks[0].id).await?;

    let repo = StudentAssignmentRepository::new(db);

    assert_eq!(repo.delete_conflicting(classroom.id, &[], &[]).await?, 0);
    assert_eq!(repo.get_by_classroom_id(classroom.id).await?.len(), 1);

    Ok(())
}
