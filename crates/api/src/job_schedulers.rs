use crate::reminder::send_reminders::SendRemindersUseCase;
use crate::shared::usecase::execute;
use actix_web::rt::time::{interval, sleep_until, Instant};
use bursdag_infra::BursdagContext;
use std::time::Duration;

const SECS_PER_DAY: i64 = 60 * 60 * 24;

/// Seconds until the next occurrence of `job_hour_utc` o'clock UTC
pub fn get_start_delay(now_ts_millis: i64, job_hour_utc: u32) -> u64 {
    let secs_into_day = (now_ts_millis / 1000) % SECS_PER_DAY;
    let target = i64::from(job_hour_utc) * 60 * 60;
    if target > secs_into_day {
        (target - secs_into_day) as u64
    } else {
        (target + SECS_PER_DAY - secs_into_day) as u64
    }
}

/// Fires one reminder run per day at the configured UTC hour. Manual
/// triggers through the api in between are safe, the reminder log keeps
/// the deliveries idempotent.
pub fn start_send_reminders_job(ctx: BursdagContext) {
    actix_web::rt::spawn(async move {
        let now = ctx.sys.get_timestamp_millis();
        let secs_to_next_run = get_start_delay(now, ctx.config.reminders_job_hour_utc);
        let start = Instant::now() + Duration::from_secs(secs_to_next_run);

        sleep_until(start).await;
        let mut daily_interval = interval(Duration::from_secs(SECS_PER_DAY as u64));
        loop {
            daily_interval.tick().await;

            let usecase = SendRemindersUseCase {};
            let _ = execute(usecase, &ctx).await;
        }
    });
}
