use chrono::{Local, NaiveTime, Utc};
use dotenv::dotenv;
use eyre::{bail, eyre, Context as _, Result};
use log::info;
use model::{
    rooms::{Room, RoomCategory},
    schedule::WorkSchedule,
    training::{GroupTrainingType, Training},
    user::{Role, User},
};

fn t(hour: u32, min: u32) -> NaiveTime {
    NaiveTime::from_hms_opt(hour, min, 0).unwrap_or_default()
}

fn main() -> Result<()> {
    if let Err(err) = dotenv() {
        info!("Failed to load .env file: {}", err);
    }
    pretty_env_logger::init();
    color_eyre::install()?;

    let storage = storage::Storage::new();
    let club = club::Club::new(storage.clone());

    info!("seeding demo data");
    let hall = Room::new("Main hall".into(), RoomCategory::GroupFitness, 12);
    let studio = Room::new("Studio".into(), RoomCategory::Yoga, 1);
    club.rooms.add(hall.clone());
    club.rooms.add(studio.clone());

    let coach = club
        .users
        .create(User::new(
            "coach".into(),
            "Olga".into(),
            "Kim".into(),
            Role::Trainer,
        ))
        .context("Failed to create trainer user")?;
    let trainer = club
        .trainers
        .get_by_user(coach.id)
        .ok_or_else(|| eyre!("trainer profile missing after save"))?;

    let schedule = WorkSchedule::new(t(8, 0), t(17, 0), t(12, 0), t(13, 0));
    club.schedules.add(schedule)?;
    club.trainers.assign_schedule(trainer.id, schedule.id)?;
    club.trainers.add_room(trainer.id, hall.id)?;
    club.trainers.add_room(trainer.id, studio.id)?;

    let yoga = GroupTrainingType::new("Yoga".into());
    club.calendar.add_group_type(yoga.clone());
    let slot = Training::group(hall.id, trainer.id, yoga.id, t(9, 0), t(12, 0));
    let class = Training::group(hall.id, trainer.id, yoga.id, t(10, 0), t(11, 0));
    let personal = Training::personal(studio.id, trainer.id, t(14, 0), t(15, 0));
    let open_gym = Training::free(hall.id, t(15, 0), t(16, 0));
    for training in [&slot, &class, &personal, &open_gym] {
        club.calendar.add_training(training)?;
    }

    let client = club
        .users
        .create(User::new(
            "ivan".into(),
            "Ivan".into(),
            "Petrov".into(),
            Role::Client,
        ))
        .context("Failed to create client user")?;

    for training in club.calendar.available_trainings(t(0, 0)) {
        info!(
            "open for booking: {} {}-{} in room {}",
            training.training_type, training.start_time, training.end_time, training.room
        );
    }

    let when = Local::now()
        .with_time(t(10, 30))
        .single()
        .ok_or_else(|| eyre!("ambiguous local time"))?
        .with_timezone(&Utc);
    let booking = club.book_at(client.id, class.id, when)?;
    info!("booked: {} at {}", booking.id, booking.booking_time);
    match club.book_at(client.id, class.id, when) {
        Ok(_) => bail!("double booking must be rejected"),
        Err(err) => info!("second attempt rejected: {}", err),
    }
    info!(
        "seats left in {}: {}",
        hall.name,
        club.rooms.available_seats(hall.id)?
    );

    println!("{}", serde_json::to_string_pretty(&storage.snapshot())?);
    Ok(())
}
