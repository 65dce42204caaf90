use super::*;

/// Tests deleting a classroom with objects and assignments.
///
/// Verifies that the foreign key cascade removes the classroom's objects and
/// assignments but keeps the students.
///
/// Expected: Ok(true) with dependent rows removed
#[tokio::test]
async fn deletes_classroom_and_cascades() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_classroom_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let (classroom, desks) = factory::helpers::create_classroom_with_desks(db, 2).await?;
    let students = factory::helpers::create_students(db, 2).await?;
    for (student, desk) in students.iter().zip(&desks) {
        factory::create_assignment(db, classroom.id, student.id, desk.id).await?;
    }

    let repo = ClassroomRepository::new(db);
    assert!(repo.delete(classroom.id).await?);

    assert_eq!(ClassroomObject::find().count(db).await?, 0);
    assert_eq!(StudentAssignment::find().count(db).await?, 0);
    assert_eq!(Student::find().count(db).await?, 2);

    Ok(())
}

/// Tests deleting the same classroom twice.
///
/// Expected: Ok(true) then Ok(false)
#[tokio::test]
async fn second_delete_reports_missing() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_classroom_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let classroom = factory::create_classroom(db).await?;

    let repo = ClassroomRepository::new(db);
    assert!(repo.delete(classroom.id).await?);
    assert!(!repo.delete(classroom.id).await?);

    Ok(())
}
