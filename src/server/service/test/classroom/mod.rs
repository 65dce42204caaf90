mod delete;
mod get_with_details;
mod object;
mod update;

use crate::{
    model::classroom_object::ClassroomObjectType,
    server::{
        error::{validation::ValidationError, AppError},
        model::{
            classroom::UpdateClassroomParams,
            classroom_object::{
                CreateClassroomObjectParams, ObjectAttributes, UpdateClassroomObjectParams,
            },
        },
        service::{classroom::ClassroomService, classroom_object::ClassroomObjectService},
    },
};
use entity::prelude::*;
use sea_orm::{EntityTrait, PaginatorTrait};
use test_utils::{builder::TestBuilder, factory};
