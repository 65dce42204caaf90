use super::*;

/// Tests deleting a seated student.
///
/// Verifies that the student's assignment is removed by the foreign key cascade.
///
/// Expected: Ok(true) and no assignments left
#[tokio::test]
async fn deletes_student_and_cascades_assignment() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_classroom_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let (classroom, desks) = factory::helpers::create_classroom_with_desks(db, 1).await?;
    let student = factory::create_student(db).await?;
    factory::create_assignment(db, classroom.id, student.id, desks[0].id).await?;

    let repo = StudentRepository::new(db);
    let deleted = repo.delete(student.id).await?;

    assert!(deleted);
    let remaining = entity::prelude::StudentAssignment::find().all(db).await?;
    assert!(remaining.is_empty());

    Ok(())
}

/// Tests deleting a student that doesn't exist.
///
/// Expected: Ok(false)
#[tokio::test]
async fn returns_false_for_missing_student() -> Result<(), AppError> {
    let test = TestBuilder::new().with_table(Student).build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = StudentRepository::new(db);
    let deleted = repo.delete(42).await?;

    assert!(!deleted);

    Ok(())
}
