use super::*;

#[test]
fn health_indicator_pending_probe() {
    assert_eq!(health_indicator(None), ("header__status--checking", "checking"));
}

#[test]
fn health_indicator_online_and_offline() {
    assert_eq!(health_indicator(Some(true)).1, "online");
    assert_eq!(health_indicator(Some(false)), ("header__status--offline", "offline"));
}
