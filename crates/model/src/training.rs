use std::ops::RangeInclusive;

use chrono::{NaiveTime, Timelike as _};
use serde::{Deserialize, Serialize};

use crate::{
    errors::ValidationError,
    ids::{GroupTypeId, RoomId, TrainerId, TrainingId},
};

/// A label shared by all sessions of the same recurring group class.
#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct GroupTrainingType {
    pub id: GroupTypeId,
    pub name: String,
}

impl GroupTrainingType {
    pub fn new(name: String) -> GroupTrainingType {
        GroupTrainingType {
            id: GroupTypeId::new(),
            name,
        }
    }
}

#[derive(Debug, Serialize, Deserialize, Clone, Copy, PartialEq, Eq, strum::Display)]
pub enum TrainingType {
    Group,
    Personal,
    Free,
}

impl TrainingType {
    pub fn is_group(&self) -> bool {
        matches!(self, TrainingType::Group)
    }

    pub fn is_personal(&self) -> bool {
        matches!(self, TrainingType::Personal)
    }

    pub fn is_free(&self) -> bool {
        matches!(self, TrainingType::Free)
    }
}

/// A scheduled session in a room. The daily time window repeats;
/// bookings are matched against it by time of day.
#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct Training {
    pub id: TrainingId,
    pub trainer: Option<TrainerId>,
    pub room: RoomId,
    pub training_type: TrainingType,
    pub group_type: Option<GroupTypeId>,
    pub start_time: NaiveTime,
    pub end_time: NaiveTime,
}

impl Training {
    pub fn group(
        room: RoomId,
        trainer: TrainerId,
        group_type: GroupTypeId,
        start_time: NaiveTime,
        end_time: NaiveTime,
    ) -> Training {
        Training {
            id: TrainingId::new(),
            trainer: Some(trainer),
            room,
            training_type: TrainingType::Group,
            group_type: Some(group_type),
            start_time,
            end_time,
        }
    }

    pub fn personal(
        room: RoomId,
        trainer: TrainerId,
        start_time: NaiveTime,
        end_time: NaiveTime,
    ) -> Training {
        Training {
            id: TrainingId::new(),
            trainer: Some(trainer),
            room,
            training_type: TrainingType::Personal,
            group_type: None,
            start_time,
            end_time,
        }
    }

    pub fn free(room: RoomId, start_time: NaiveTime, end_time: NaiveTime) -> Training {
        Training {
            id: TrainingId::new(),
            trainer: None,
            room,
            training_type: TrainingType::Free,
            group_type: None,
            start_time,
            end_time,
        }
    }

    /// The hour bucket existing bookings are counted against.
    /// Hour granularity, inclusive on both ends.
    pub fn hour_range(&self) -> RangeInclusive<u32> {
        self.start_time.hour()..=self.end_time.hour()
    }

    pub fn in_hour_range(&self, at: NaiveTime) -> bool {
        self.hour_range().contains(&at.hour())
    }

    /// Exact interval check, inclusive on both ends.
    pub fn window_contains(&self, at: NaiveTime) -> bool {
        self.start_time <= at && at <= self.end_time
    }

    /// This session's window fully contains the other session's window.
    pub fn covers(&self, other: &Training) -> bool {
        self.start_time <= other.start_time && self.end_time >= other.end_time
    }

    /// Structural rules that need no other records: group-type presence and
    /// the trainer/free incompatibility. The room authorization rule is
    /// checked where the trainer record is at hand.
    pub fn validate(&self) -> Result<(), ValidationError> {
        if self.training_type.is_group() && self.group_type.is_none() {
            return Err(ValidationError::GroupTypeRequired);
        }
        if !self.training_type.is_group() && self.group_type.is_some() {
            return Err(ValidationError::GroupTypeNotAllowed);
        }
        if self.training_type.is_free() && self.trainer.is_some() {
            return Err(ValidationError::FreeTrainingWithTrainer);
        }
        Ok(())
    }
}
