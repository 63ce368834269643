use super::*;
use crate::data::sla_threshold::SlaThresholdRepository;
use entity::prelude::SlaThreshold;
use sea_orm::DbErr;
use test_utils::factory::sla_threshold::SlaThresholdFactory;

mod get_allowed_seconds;
