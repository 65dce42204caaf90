use super::*;

/// Tests randomizing three students onto three desks.
///
/// Verifies that exactly three assignments are created, each student and desk appears
/// once, and all rows belong to the classroom.
///
/// Expected: Ok with a full bijection
#[tokio::test]
async fn seats_every_student_when_counts_match() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_classroom_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let (classroom, desks) = factory::helpers::create_classroom_with_desks(db, 3).await?;
    let students = factory::helpers::create_students(db, 3).await?;
    let student_ids: Vec<i32> = students.iter().map(|s| s.id).collect();
    let desk_ids: Vec<i32> = desks.iter().map(|d| d.id).collect();

    let assignments = AssignmentService::new(db)
        .randomize(RandomizeAssignmentsParams {
            classroom_id: classroom.id,
            student_ids: student_ids.clone(),
            desk_object_ids: desk_ids.clone(),
        })
        .await?;

    assert_eq!(assignments.len(), 3);
    assert!(assignments.iter().all(|a| a.classroom_id == classroom.id));
    let seated: HashSet<i32> = assignments.iter().map(|a| a.student_id).collect();
    let used: HashSet<i32> = assignments.iter().map(|a| a.desk_object_id).collect();
    assert_eq!(seated, student_ids.into_iter().collect());
    assert_eq!(used, desk_ids.into_iter().collect());

    Ok(())
}

/// Tests randomizing five students onto three desks.
///
/// Expected: Ok with exactly 3 assignments
#[tokio::test]
async fn leaves_surplus_students_unseated() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_classroom_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let (classroom, desks) = factory::helpers::create_classroom_with_desks(db, 3).await?;
    let students = factory::helpers::create_students(db, 5).await?;

    let assignments = AssignmentService::new(db)
        .randomize(RandomizeAssignmentsParams {
            classroom_id: classroom.id,
            student_ids: students.iter().map(|s| s.id).collect(),
            desk_object_ids: desks.iter().map(|d| d.id).collect(),
        })
        .await?;

    assert_eq!(assignments.len(), 3);
    let seated: HashSet<i32> = assignments.iter().map(|a| a.student_id).collect();
    assert_eq!(seated.len(), 3);

    Ok(())
}

/// Tests two randomize calls over overlapping desks.
///
/// Verifies that the second call replaces the first call's assignments on shared desks
/// so every desk ends up with at most one assignment and no student is seated twice.
///
/// Expected: Ok with the invariant held after both calls
#[tokio::test]
async fn overlapping_calls_keep_one_student_per_desk() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_classroom_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let (classroom, desks) = factory::helpers::create_classroom_with_desks(db, 4).await?;
    let students = factory::helpers::create_students(db, 4).await?;
    let service = AssignmentService::new(db);

    service
        .randomize(RandomizeAssignmentsParams {
            classroom_id: classroom.id,
            student_ids: vec![students[0].id, students[1].id, students[2].id],
            desk_object_ids: vec![desks[0].id, desks[1].id, desks[2].id],
        })
        .await?;
    service
        .randomize(RandomizeAssignmentsParams {
            classroom_id: classroom.id,
            student_ids: vec![students[2].id, students[3].id],
            desk_object_ids: vec![desks[2].id, desks[3].id],
        })
        .await?;

    let rows = StudentAssignment::find()
        .filter(entity::student_assignment::Column::ClassroomId.eq(classroom.id))
        .all(db)
        .await?;
    let desks_used: HashSet<i32> = rows.iter().map(|a| a.desk_object_id).collect();
    let students_seated: HashSet<i32> = rows.iter().map(|a| a.student_id).collect();
    assert_eq!(desks_used.len(), rows.len());
    assert_eq!(students_seated.len(), rows.len());
    assert!(students_seated.contains(&students[2].id));
    assert!(students_seated.contains(&students[3].id));

    Ok(())
}

/// Tests randomizing with a desk from another classroom.
///
/// Verifies that validation fails and existing assignments are untouched.
///
/// Expected: Err(Validation(DeskNotInClassroom)) with no mutation
#[tokio::test]
async fn rejects_desk_from_other_classroom() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_classroom_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let (classroom, desks) = factory::helpers::create_classroom_with_desks(db, 1).await?;
    let (_, foreign_desks) = factory::helpers::create_classroom_with_desks(db, 1).await?;
    let students = factory::helpers::create_students(db, 2).await?;
    let existing =
        factory::create_assignment(db, classroom.id, students[0].id, desks[0].id).await?;

    let result = AssignmentService::new(db)
        .randomize(RandomizeAssignmentsParams {
            classroom_id: classroom.id,
            student_ids: vec![students[0].id, students[1].id],
            desk_object_ids: vec![desks[0].id, foreign_desks[0].id],
        })
        .await;

    assert!(matches!(
        result,
        Err(AppError::Validation(ValidationError::DeskNotInClassroom { .. }))
    ));
    assert_eq!(StudentAssignment::find().all(db).await?, vec![existing]);

    Ok(())
}

/// Tests randomizing with a non-assignable object.
///
/// Expected: Err(Validation(DeskNotAssignable))
#[tokio::test]
async fn rejects_unassignable_object() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_classroom_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let classroom = factory::create_classroom(db).await?;
    let plant = factory::create_object(
        db,
        classroom.id,
        entity::sea_orm_active_enums::ClassroomObjectType::Plant,
    )
    .await?;
    let student = factory::create_student(db).await?;

    let result = AssignmentService::new(db)
        .randomize(RandomizeAssignmentsParams {
            classroom_id: classroom.id,
            student_ids: vec![student.id],
            desk_object_ids: vec![plant.id],
        })
        .await;

    assert!(matches!(
        result,
        Err(AppError::Validation(ValidationError::DeskNotAssignable(id))) if id == plant.id
    ));

    Ok(())
}

/// Tests randomizing with unknown student IDs.
///
/// Verifies that every missing ID is reported.
///
/// Expected: Err(Validation(UnknownStudents)) listing both IDs
#[tokio::test]
async fn reports_all_unknown_students() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_classroom_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let (classroom, desks) = factory::helpers::create_classroom_with_desks(db, 3).await?;
    let student = factory::create_student(db).await?;

    let result = AssignmentService::new(db)
        .randomize(RandomizeAssignmentsParams {
            classroom_id: classroom.id,
            student_ids: vec![900, student.id, 901],
            desk_object_ids: desks.iter().map(|d| d.id).collect(),
        })
        .await;

    match result {
        Err(AppError::Validation(ValidationError::UnknownStudents(ids))) => {
            assert_eq!(ids, vec![900, 901]);
        }
        other => panic!("expected UnknownStudents, got {:?}", other),
    }
    assert!(StudentAssignment::find().all(db).await?.is_empty());

    Ok(())
}

/// Tests randomizing with a repeated student ID.
///
/// Expected: Err(Validation(DuplicateId))
#[tokio::test]
async fn rejects_duplicate_student_ids() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_classroom_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let (classroom, desks) = factory::helpers::create_classroom_with_desks(db, 2).await?;
    let student = factory::create_student(db).await?;

    let result = AssignmentService::new(db)
        .randomize(RandomizeAssignmentsParams {
            classroom_id: classroom.id,
            student_ids: vec![student.id, student.id],
            desk_object_ids: desks.iter().map(|d| d.id).collect(),
        })
        .await;

    assert!(matches!(
        result,
        Err(AppError::Validation(ValidationError::DuplicateId {
            field: "student_ids",
            ..
        }))
    ));

    Ok(())
}

/// Tests randomizing in a classroom that doesn't exist.
///
/// Expected: Err(NotFound)
#[tokio::test]
async fn missing_classroom_is_not_found() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_classroom_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let result = AssignmentService::new(db)
        .randomize(RandomizeAssignmentsParams {
            classroom_id: 31,
            student_ids: vec![],
            desk_object_ids: vec![],
        })
        .await;

    assert!(matches!(result, Err(AppError::NotFound(_))));

    Ok(())
}
