use super::*;

/// Tests moving and recoloring a desk.
///
/// Verifies that supplied fields change while size, type and assignability are kept.
///
/// Expected: Ok with updated position and color
#[tokio::test]
async fn updates_supplied_fields() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_table(Classroom)
        .with_table(ClassroomObject)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let classroom = factory::create_classroom(db).await?;
    let desk = factory::create_desk(db, classroom.id).await?;

    let repo = ClassroomObjectRepository::new(db);
    let updated = repo
        .update(UpdateClassroomObjectParams {
            id: desk.id,
            position_x: Some(-15.0),
            position_y: Some(42.0),
            color: Some(Some("#123456".to_string())),
            ..Default::default()
        })
        .await?
        .unwrap();

    assert_eq!(updated.attributes.position_x, -15.0);
    assert_eq!(updated.attributes.position_y, 42.0);
    assert_eq!(updated.attributes.color.as_deref(), Some("#123456"));
    assert_eq!(updated.attributes.width, desk.width);
    assert_eq!(updated.attributes.object_type, ClassroomObjectType::Desk);
    assert!(updated.attributes.is_assignable);

    Ok(())
}

/// Tests clearing an object's color with an explicit null.
///
/// Expected: Ok with color removed
#[tokio::test]
async fn clears_color() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_table(Classroom)
        .with_table(ClassroomObject)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let classroom = factory::create_classroom(db).await?;
    let desk = factory::classroom_object::ClassroomObjectFactory::new(db, classroom.id)
        .color(Some("#ff0000".to_string()))
        .build()
        .await?;

    let repo = ClassroomObjectRepository::new(db);
    let updated = repo
        .update(UpdateClassroomObjectParams {
            id: desk.id,
            color: Some(None),
            ..Default::default()
        })
        .await?
        .unwrap();

    assert_eq!(updated.attributes.color, None);

    Ok(())
}

/// Tests an update without any fields.
///
/// Expected: Ok with the stored object returned unchanged
#[tokio::test]
async fn empty_update_returns_stored_object() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_table(Classroom)
        .with_table(ClassroomObject)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let classroom = factory::create_classroom(db).await?;
    let desk = factory::create_desk(db, classroom.id).await?;

    let repo = ClassroomObjectRepository::new(db);
    let updated = repo
        .update(UpdateClassroomObjectParams {
            id: desk.id,
            ..Default::default()
        })
        .await?
        .unwrap();

    assert_eq!(updated.id, desk.id);
    assert_eq!(updated.attributes.name, desk.name);

    Ok(())
}

/// Tests updating an object that doesn't exist.
///
/// Expected: Ok(None)
#[tokio::test]
async fn returns_none_for_missing_object() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_table(Classroom)
        .with_table(ClassroomObject)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = ClassroomObjectRepository::new(db);
    let updated = repo
        .update(UpdateClassroomObjectParams {
            id: 99,
            rotation: Some(180.0),
            ..Default::default()
        })
        .await?;

    assert!(updated.is_none());

    Ok(())
}
