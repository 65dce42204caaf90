use super::*;

/// Tests deleting an occupied desk.
///
/// Verifies that the assignment at the desk is removed by the foreign key cascade while
/// the other desk's assignment survives.
///
/// Expected: Ok(true) with one assignment left
#[tokio::test]
async fn deletes_desk_and_its_assignment() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_classroom_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let (classroom, desks) = factory::helpers::create_classroom_with_desks(db, 2).await?;
    let students = factory::helpers::create_students(db, 2).await?;
    factory::create_assignment(db, classroom.id, students[0].id, desks[0].id).await?;
    let kept = factory::create_assignment(db, classroom.id, students[1].id, desks[1].id).await?;

    let repo = ClassroomObjectRepository::new(db);
    assert!(repo.delete(desks[0].id).await?);

    let remaining = StudentAssignment::find().all(db).await?;
    assert_eq!(remaining, vec![kept]);

    Ok(())
}

/// Tests deleting an object that doesn't exist.
///
/// Expected: Ok(false)
#[tokio::test]
async fn returns_false_for_missing_object() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_classroom_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = ClassroomObjectRepository::new(db);

    assert!(!repo.delete(5).await?);

    Ok(())
}
