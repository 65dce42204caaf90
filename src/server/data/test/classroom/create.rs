use super::*;

/// Tests creating a classroom.
///
/// Verifies that all fields are stored and both timestamps start out equal.
///
/// Expected: Ok with classroom created
#[tokio::test]
async fn creates_classroom() -> Result<(), AppError> {
    let test = TestBuilder::new().with_table(Classroom).build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = ClassroomRepository::new(db);
    let classroom = repo
        .create(CreateClassroomParams {
            name: "Physics Lab".to_string(),
            description: Some("Second floor".to_string()),
            teacher_name: "Mr. Feynman".to_string(),
            canvas_width: 1024.0,
            canvas_height: 768.0,
        })
        .await?;

    assert!(classroom.id > 0);
    assert_eq!(classroom.name, "Physics Lab");
    assert_eq!(classroom.description.as_deref(), Some("Second floor"));
    assert_eq!(classroom.canvas_width, 1024.0);
    assert_eq!(classroom.canvas_height, 768.0);
    assert_eq!(classroom.created_at, classroom.updated_at);

    Ok(())
}

/// Tests listing classrooms.
///
/// Verifies that classrooms are returned in ID order.
///
/// Expected: Ok with classrooms ordered by ID
#[tokio::test]
async fn lists_classrooms_in_id_order() -> Result<(), AppError> {
    let test = TestBuilder::new().with_table(Classroom).build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let first = factory::create_classroom(db).await?;
    let second = factory::create_classroom(db).await?;

    let repo = ClassroomRepository::new(db);
    let classrooms = repo.get_all().await?;

    let ids: Vec<i32> = classrooms.iter().map(|c| c.id).collect();
    assert_eq!(ids, vec![first.id, second.id]);

    Ok(())
}
