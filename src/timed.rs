#[macro_export]
macro_rules! timed {
    ($msg:expr, $($args:expr),+; $closure:expr) => {{
        let msg = format!($msg, $($args),+);
        timed!(msg.as_str(); $closure)
    }};
    ($msg:expr; $closure:expr) => {{
        use time::OffsetDateTime;
        let msg: &str = $msg;

        let start_time = OffsetDateTime::now_utc();
        info!("Start: {}", msg);

        let out = $closure();

        info!("End:   {}: {}", msg, OffsetDateTime::now_utc() - start_time);

        out
    }};
}
