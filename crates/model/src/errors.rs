use thiserror::Error;

/// Structural and booking rules checked before anything is persisted.
/// Every variant carries the reason shown to the administrator.
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum ValidationError {
    #[error("group trainings must have a group training type")]
    GroupTypeRequired,
    #[error("a group training type is only allowed for group trainings")]
    GroupTypeNotAllowed,
    #[error("the trainer does not work in the selected room")]
    TrainerNotInRoom,
    #[error("a free training cannot have an assigned trainer")]
    FreeTrainingWithTrainer,
    #[error("start time must be before end time")]
    TimeOrder,
    #[error("break start must be before break end")]
    BreakOrder,
    #[error("the break cannot cover the whole work window")]
    BreakCoversWork,
    #[error("phone number must be in the format +76XXXXXXXXX or +77XXXXXXXXX")]
    InvalidPhone,
    #[error("only clients can book trainings")]
    NotClient,
    #[error("a booking already exists at this time or the trainer is not available")]
    NotBookable,
}
