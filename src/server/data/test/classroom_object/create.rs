use super::*;

/// Tests placing an object in a classroom.
///
/// Verifies that every attribute is stored and the object is listed with its classroom.
///
/// Expected: Ok with object created
#[tokio::test]
async fn creates_object() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_table(Classroom)
        .with_table(ClassroomObject)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let classroom = factory::create_classroom(db).await?;

    let repo = ClassroomObjectRepository::new(db);
    let object = repo
        .create(CreateClassroomObjectParams {
            classroom_id: classroom.id,
            attributes: whiteboard(),
        })
        .await?;

    assert!(object.id > 0);
    assert_eq!(object.classroom_id, classroom.id);
    assert_eq!(object.attributes, whiteboard());

    let listed = repo.get_by_classroom_id(classroom.id).await?;
    assert_eq!(listed, vec![object]);

    Ok(())
}

/// Tests placing an object in a classroom that doesn't exist.
///
/// Verifies that the foreign key rejects the row.
///
/// Expected: Err
#[tokio::test]
async fn fails_for_missing_classroom() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_table(Classroom)
        .with_table(ClassroomObject)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = ClassroomObjectRepository::new(db);
    let result = repo
        .create(CreateClassroomObjectParams {
            classroom_id: 404,
            attributes: whiteboard(),
        })
        .await;

    assert!(result.is_err());
    assert_eq!(ClassroomObject::find().count(db).await?, 0);

    Ok(())
}
