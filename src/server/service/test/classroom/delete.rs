use super::*;

/// Tests deleting a classroom twice.
///
/// Verifies that the first delete removes the classroom with its objects and the
/// second reports it missing.
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

    let (classroom, _) = factory::helpers::create_classroom_with_desks(db, 2).await?;

    let service = ClassroomService::new(db);
    service.delete(classroom.id).await?;

    assert_eq!(ClassroomObject::find().count(db).await?, 0);
    assert!(matches!(
        service.delete(classroom.id).await,
        Err(AppError::NotFound(_))
    ));
    assert!(matches!(
        service.get_with_details(classroom.id).await,
        Err(AppError::NotFound(_))
    ));

    Ok(())
}
