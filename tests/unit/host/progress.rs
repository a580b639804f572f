use super::*;
use std::cell::Cell;

fn counter(source: &ManualProgressSource) -> (SubscriptionHandle, Rc<Cell<u32>>, Rc<Cell<f64>>) {
    let calls = Rc::new(Cell::new(0));
    let last = Rc::new(Cell::new(f64::NAN));
    let (c, l) = (calls.clone(), last.clone());
    let h = source.subscribe(Box::new(move |p| {
        c.set(c.get() + 1);
        l.set(p);
    }));
    (h, calls, last)
}

#[test]
fn publish_reaches_every_listener() {
    let s = ManualProgressSource::new();
    let (_, a, a_last) = counter(&s);
    let (_, b, _) = counter(&s);
    s.publish(0.25);
    s.publish(0.25);
    assert_eq!(a.get(), 2);
    assert_eq!(b.get(), 2);
    assert_eq!(a_last.get(), 0.25);
    assert_eq!(s.listener_count(), 2);
}

#[test]
fn unsubscribe_stops_delivery() {
    let s = ManualProgressSource::new();
    let (h, calls, _) = counter(&s);
    s.publish(0.1);
    s.unsubscribe(h);
    s.unsubscribe(h);
    s.publish(0.2);
    assert_eq!(calls.get(), 1);
    assert_eq!(s.listener_count(), 0);
}

#[test]
fn listener_removed_mid_publish_is_skipped() {
    let s = ManualProgressSource::new();
    let victim = Rc::new(Cell::new(None::<SubscriptionHandle>));
    let s2 = s.clone();
    let v2 = victim.clone();
    s.subscribe(Box::new(move |_| {
        if let Some(h) = v2.get() {
            s2.unsubscribe(h);
        }
    }));
    let (h, calls, _) = counter(&s);
    victim.set(Some(h));

    s.publish(0.5);
    assert_eq!(calls.get(), 0);
    assert_eq!(s.listener_count(), 1);
}

#[test]
fn handles_are_unique() {
    let s = ManualProgressSource::new();
    let a = s.subscribe(Box::new(|_| {}));
    let b = s.subscribe(Box::new(|_| {}));
    assert_ne!(a, b);
}

#[test]
fn scroll_pin_maps_offsets_to_progress() {
    let vp = ViewportSize::new(1280.0, 800.0).unwrap();
    let pin = ScrollPin::new(800.0, vp, &PinConfig::default()).unwrap();
    assert_eq!(pin.length(), 8000.0);
    assert_eq!(pin.progress_at(0.0), 0.0);
    assert_eq!(pin.progress_at(800.0), 0.0);
    assert_eq!(pin.progress_at(4800.0), 0.5);
    assert_eq!(pin.progress_at(8800.0), 1.0);
    assert_eq!(pin.progress_at(9200.0), 1.05);
    assert_eq!(pin.progress_at(1.0e9), 1.05);
}

#[test]
fn scroll_pin_publishes_through_its_source() {
    let vp = ViewportSize::new(1280.0, 800.0).unwrap();
    let pin = ScrollPin::new(0.0, vp, &PinConfig::default()).unwrap();
    let (_, calls, last) = counter(pin.source());
    pin.scroll_to(2000.0);
    pin.scroll_to(f64::NAN);
    assert_eq!(calls.get(), 1);
    assert_eq!(last.get(), 0.25);
}

#[test]
fn scroll_pin_rejects_bad_geometry() {
    let vp = ViewportSize::new(1280.0, 800.0).unwrap();
    let pin = PinConfig {
        length_viewports: 0.0,
        overscroll: 0.0,
    };
    assert!(ScrollPin::new(0.0, vp, &pin).is_err());
    assert!(ScrollPin::new(f64::NAN, vp, &PinConfig::default()).is_err());
}
