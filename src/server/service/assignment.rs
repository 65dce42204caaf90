//! Seating students at desks, one at a time or by random allocation.
//!
//! Both entry points keep the seating invariant (one student per desk, one desk per
//! student in a classroom) by replacement: conflicting assignments are removed in the
//! same transaction that inserts the new ones. The classroom row is locked for the
//! duration of the transaction so concurrent seating changes to one classroom are
//! applied one after another.

use std::collections::HashSet;

use chrono::Utc;
use rand::{seq::SliceRandom, Rng};
use sea_orm::{DatabaseConnection, DatabaseTransaction, TransactionTrait};

use crate::server::{
    data::{
        classroom::ClassroomRepository, classroom_object::ClassroomObjectRepository,
        student::StudentRepository, student_assignment::StudentAssignmentRepository,
    },
    error::{validation::ValidationError, AppError},
    model::{
        assignment::{
            CreateStudentAssignmentParams, RandomizeAssignmentsParams, StudentAssignment,
        },
        classroom_object::ClassroomObject,
    },
};

pub struct AssignmentService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> AssignmentService<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Seats one student at one desk, replacing conflicting assignments.
    ///
    /// Any assignment in the classroom that occupies the desk or seats the student is
    /// removed before the new one is inserted.
    ///
    /// # Arguments
    /// - `params` - Classroom, student and desk IDs
    ///
    /// # Returns
    /// - `Ok(StudentAssignment)` - The new assignment
    /// - `Err(AppError::NotFound)` - Classroom, student or desk doesn't exist
    /// - `Err(AppError::Validation)` - Desk belongs to another classroom or isn't assignable
    /// - `Err(AppError::Conflict)` - A concurrent write claimed the desk or student
    pub async fn create(
        &self,
        params: CreateStudentAssignmentParams,
    ) -> Result<StudentAssignment, AppError> {
        let txn = self.db.begin().await?;

        lock_classroom(&txn, params.classroom_id).await?;

        StudentRepository::new(&txn)
            .find_by_id(params.student_id)
            .await?
            .ok_or_else(|| AppError::not_found("Student", params.student_id))?;

        let desk = ClassroomObjectRepository::new(&txn)
            .find_by_id(params.desk_object_id)
            .await?
            .ok_or_else(|| AppError::not_found("Classroom object", params.desk_object_id))?;
        check_desk(&desk, params.classroom_id)?;

        let assignment_repo = StudentAssignmentRepository::new(&txn);
        assignment_repo
            .delete_conflicting(
                params.classroom_id,
                &[params.student_id],
                &[params.desk_object_id],
            )
            .await?;
        let assignment = assignment_repo
            .create(
                params.classroom_id,
                params.student_id,
                params.desk_object_id,
                Utc::now(),
            )
            .await
            .map_err(AppError::from_write)?;

        txn.commit().await?;

        Ok(assignment)
    }

    /// Replaces part of a classroom's seating with a random pairing.
    ///
    /// Pairs `min(students, desks)` entries; the surplus on the longer side is left
    /// without a seat. Every existing assignment in the classroom touching one of the
    /// given desks or students is removed first.
    ///
    /// # Arguments
    /// - `params` - Classroom ID plus the students and desks to pair
    ///
    /// # Returns
    /// - `Ok(Vec<StudentAssignment>)` - The newly created assignments
    /// - `Err(AppError::Validation)` - Duplicate, unknown, foreign or unassignable IDs
    /// - `Err(AppError::NotFound)` - Classroom doesn't exist
    /// - `Err(AppError::Conflict)` - A concurrent write claimed a desk or student
    pub async fn randomize(
        &self,
        params: RandomizeAssignmentsParams,
    ) -> Result<Vec<StudentAssignment>, AppError> {
        params.validate()?;

        let txn = self.db.begin().await?;

        lock_classroom(&txn, params.classroom_id).await?;

        let students = StudentRepository::new(&txn)
            .find_by_ids(&params.student_ids)
            .await?;
        let missing = missing_ids(&params.student_ids, students.iter().map(|s| s.id));
        if !missing.is_empty() {
            return Err(ValidationError::UnknownStudents(missing).into());
        }

        let desks = ClassroomObjectRepository::new(&txn)
            .find_by_ids(&params.desk_object_ids)
            .await?;
        let missing = missing_ids(&params.desk_object_ids, desks.iter().map(|d| d.id));
        if !missing.is_empty() {
            return Err(ValidationError::UnknownDesks(missing).into());
        }
        for desk in &desks {
            check_desk(desk, params.classroom_id)?;
        }

        let pairs = pair_randomly(
            &params.student_ids,
            &params.desk_object_ids,
            &mut rand::rng(),
        );

        let assignment_repo = StudentAssignmentRepository::new(&txn);
        let removed = assignment_repo
            .delete_conflicting(
                params.classroom_id,
                &params.student_ids,
                &params.desk_object_ids,
            )
            .await?;
        let assignments = assignment_repo
            .create_many(params.classroom_id, &pairs, Utc::now())
            .await
            .map_err(AppError::from_write)?;

        txn.commit().await?;

        tracing::info!(
            "Randomized seating in classroom {}: {} assigned, {} replaced",
            params.classroom_id,
            assignments.len(),
            removed
        );

        Ok(assignments)
    }

    /// Removes a single assignment
    pub async fn delete(&self, id: i32) -> Result<(), AppError> {
        if !StudentAssignmentRepository::new(self.db).delete(id).await? {
            return Err(AppError::not_found("Student assignment", id));
        }

        Ok(())
    }
}

/// Shuffles both lists independently and pairs them positionally.
///
/// The result has `min(students, desks)` pairs of `(student_id, desk_object_id)`.
/// Every student and desk appears at most once, provided the inputs hold no duplicates.
pub fn pair_randomly<R: Rng + ?Sized>(
    student_ids: &[i32],
    desk_object_ids: &[i32],
    rng: &mut R,
) -> Vec<(i32, i32)> {
    let mut students = student_ids.to_vec();
    let mut desks = desk_object_ids.to_vec();
    students.shuffle(rng);
    desks.shuffle(rng);

    students.into_iter().zip(desks).collect()
}

/// Locks the classroom row for the rest of the transaction, failing when it's absent.
async fn lock_classroom(txn: &DatabaseTransaction, classroom_id: i32) -> Result<(), AppError> {
    ClassroomRepository::new(txn)
        .find_by_id_for_update(classroom_id)
        .await?
        .ok_or_else(|| AppError::not_found("Classroom", classroom_id))?;

    Ok(())
}

/// Requires that a desk sits in the given classroom and can hold a student.
fn check_desk(desk: &ClassroomObject, classroom_id: i32) -> Result<(), ValidationError> {
    if desk.classroom_id != classroom_id {
        return Err(ValidationError::DeskNotInClassroom {
            desk_id: desk.id,
            classroom_id,
        });
    }
    if !desk.attributes.is_assignable {
        return Err(ValidationError::DeskNotAssignable(desk.id));
    }

    Ok(())
}

/// Returns the requested IDs absent from `found`, in request order.
fn missing_ids(requested: &[i32], found: impl Iterator<Item = i32>) -> Vec<i32> {
    let found: HashSet<i32> = found.collect();
    requested
        .iter()
        .copied()
        .filter(|id| !found.contains(id))
        .collect()
}
