use super::*;

/// Tests loading a four-object template into a classroom that already has a desk.
///
/// Verifies that four new objects are created in template order with identical
/// attributes and that the existing desk is kept.
///
/// Expected: Ok with 4 new objects and 5 objects total
#[tokio::test]
async fn copies_objects_and_keeps_existing() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_all_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let classroom = factory::create_classroom(db).await?;
    let existing = factory::create_desk(db, classroom.id).await?;
    let (template, blueprints) = factory::helpers::create_template_with_objects(db, 3).await?;
    let board = factory::layout_template_object::LayoutTemplateObjectFactory::new(db, template.id)
        .object_type(entity::sea_orm_active_enums::ClassroomObjectType::Whiteboard)
        .color(Some("#eeeeee".to_string()))
        .rotation(180.0)
        .assignable(false)
        .build()
        .await?;

    let created = LayoutTemplateService::new(db)
        .load_into_classroom(template.id, classroom.id)
        .await?;

    assert_eq!(created.len(), 4);
    assert!(created.iter().all(|o| o.classroom_id == classroom.id));
    assert!(created.iter().all(|o| o.id != existing.id));

    let all_blueprints: Vec<_> = blueprints.into_iter().chain(std::iter::once(board)).collect();
    for (object, blueprint) in created.iter().zip(&all_blueprints) {
        assert_eq!(
            object.attributes,
            ObjectAttributes::from_template_object(blueprint.clone())
        );
    }

    assert_eq!(ClassroomObject::find().count(db).await?, 5);

    Ok(())
}

/// Tests loading a template into a classroom that doesn't exist.
///
/// Verifies that nothing is inserted.
///
/// Expected: Err(NotFound) and no classroom objects
#[tokio::test]
async fn missing_classroom_is_not_found() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_all_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let (template, _) = factory::helpers::create_template_with_objects(db, 2).await?;

    let result = LayoutTemplateService::new(db)
        .load_into_classroom(template.id, 55)
        .await;

    assert!(matches!(result, Err(AppError::NotFound(_))));
    assert_eq!(ClassroomObject::find().count(db).await?, 0);

    Ok(())
}

/// Tests loading a template that doesn't exist.
///
/// Expected: Err(NotFound)
#[tokio::test]
async fn missing_template_is_not_found() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_all_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let classroom = factory::create_classroom(db).await?;

    let result = LayoutTemplateService::new(db)
        .load_into_classroom(99, classroom.id)
        .await;

    assert!(matches!(result, Err(AppError::NotFound(_))));

    Ok(())
}
