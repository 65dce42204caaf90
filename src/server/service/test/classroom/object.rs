use super::*;

fn desk_attributes(width: f64) -> ObjectAttributes {
    ObjectAttributes {
        object_type: ClassroomObjectType::Desk,
        name: "Desk".to_string(),
        position_x: 10.0,
        position_y: 10.0,
        rotation: 0.0,
        width,
        height: 30.0,
        color: None,
        is_assignable: true,
    }
}

/// Tests placing an object with zero width.
///
/// Verifies that validation fails before any row is written.
///
/// Expected: Err(Validation) and no objects stored
#[tokio::test]
async fn rejects_zero_width() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_table(Classroom)
        .with_table(ClassroomObject)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let classroom = factory::create_classroom(db).await?;

    let result = ClassroomObjectService::new(db)
        .create(CreateClassroomObjectParams {
            classroom_id: classroom.id,
            attributes: desk_attributes(0.0),
        })
        .await;

    assert!(matches!(
        result,
        Err(AppError::Validation(ValidationError::NonPositiveDimension {
            field: "width",
            ..
        }))
    ));
    assert_eq!(ClassroomObject::find().count(db).await?, 0);

    Ok(())
}

/// Tests placing an object in a classroom that doesn't exist.
///
/// Expected: Err(NotFound)
#[tokio::test]
async fn missing_classroom_is_not_found() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_table(Classroom)
        .with_table(ClassroomObject)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let result = ClassroomObjectService::new(db)
        .create(CreateClassroomObjectParams {
            classroom_id: 8,
            attributes: desk_attributes(50.0),
        })
        .await;

    assert!(matches!(result, Err(AppError::NotFound(_))));

    Ok(())
}

/// Tests renaming an object to a blank name.
///
/// Expected: Err(Validation(EmptyField))
#[tokio::test]
async fn rejects_blank_name_update() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_table(Classroom)
        .with_table(ClassroomObject)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let classroom = factory::create_classroom(db).await?;
    let desk = factory::create_desk(db, classroom.id).await?;

    let result = ClassroomObjectService::new(db)
        .update(UpdateClassroomObjectParams {
            id: desk.id,
            name: Some(String::new()),
            ..Default::default()
        })
        .await;

    assert!(matches!(
        result,
        Err(AppError::Validation(ValidationError::EmptyField("name")))
    ));

    Ok(())
}

/// Tests deleting an object twice.
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

    let classroom = factory::create_classroom(db).await?;
    let desk = factory::create_desk(db, classroom.id).await?;

    let service = ClassroomObjectService::new(db);
    service.delete(desk.id).await?;

    assert!(matches!(
        service.delete(desk.id).await,
        Err(AppError::NotFound(_))
    ));

    Ok(())
}
