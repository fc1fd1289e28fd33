
fn init_tracing() {
    use tracing::Level;
    use tracing_subscriber::fmt::Subscriber;
    let _ = Subscriber::builder()
        .with_max_level(Level::TRACE)
        .try_init();
}
