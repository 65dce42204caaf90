use super::*;

/// Tests updating a classroom with a negative canvas width.
///
/// Verifies that validation fails and the stored width is unchanged.
///
/// Expected: Err(Validation(NonPositiveDimension))
#[tokio::test]
async fn rejects_negative_canvas() -> Result<(), AppError> {
    let test = TestBuilder::new().with_table(Classroom).build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let classroom = factory::create_classroom(db).await?;

    let result = ClassroomService::new(db)
        .update(UpdateClassroomParams {
            id: classroom.id,
            canvas_width: Some(-10.0),
            ..Default::default()
        })
        .await;

    assert!(matches!(
        result,
        Err(AppError::Validation(ValidationError::NonPositiveDimension {
            field: "canvas_width",
            ..
        }))
    ));
    let stored = Classroom::find_by_id(classroom.id).one(db).await?.unwrap();
    assert_eq!(stored.canvas_width, classroom.canvas_width);

    Ok(())
}

/// Tests updating a classroom that doesn't exist.
///
/// Expected: Err(NotFound)
#[tokio::test]
async fn missing_classroom_is_not_found() -> Result<(), AppError> {
    let test = TestBuilder::new().with_table(Classroom).build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let result = ClassroomService::new(db)
        .update(UpdateClassroomParams {
            id: 77,
            name: Some("Nowhere".to_string()),
            ..Default::default()
        })
        .await;

    assert!(matches!(result, Err(AppError::NotFound(_))));

    Ok(())
}
