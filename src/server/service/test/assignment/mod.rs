mod create;
mod randomize;

use std::collections::HashSet;

use crate::server::{
    error::{validation::ValidationError, AppError},
    model::assignment::{CreateStudentAssignmentParams, RandomizeAssignmentsParams},
    service::assignment::AssignmentService,
};
use entity::prelude::*;
use sea_orm::{ColumnTrait, EntityTrait, QueryFilter};
use test_utils::{builder::TestBuilder, factory};
