#![cfg(all(
    feature = "framework-attributes",
    feature = "framework-getters",
    feature = "framework-setters",
    feature = "framework-signals",
    feature = "framework-resets"
))]

use std::{cell::RefCell, ops::Range, rc::Rc, time::Duration};

use property_helpers::{
    Mutability, ReactiveObject, Registrable, Signal, TypeCatalog, Version,
    apply_pending_registrations, auto_register, enum_class, impl_read_by_reference,
    naming::{self, Conventions},
    reactive_object,
};

#[derive(Clone, Debug, Default, PartialEq)]
pub struct Track {
    pub title: String,
    pub seconds: u32,
}

impl_read_by_reference!(Track);

enum_class! {
    pub enum Repeat {
        Off,
        One,
        All,
    }
}

mod player {
    use super::{Repeat, Track};

    property_helpers::reactive_object! {
        #[derive(Debug)]
        pub struct Player {
            writable count: i32 = 0,
            writable current: Track,
            writable repeat: Repeat,
            read_only position: u32,
            constant backend: &'static str = "alsa",
        }
    }

    impl Player {
        pub fn tick(&mut self) -> bool {
            let next = self.position() + 1;
            self.set_position(next)
        }

        pub fn stop(&mut self) -> bool {
            self.reset_position()
        }
    }
}

use player::Player;

reactive_object! {
    struct Gauge {
        constant depth: u16 = 9,
    }
}

auto_register!(Player, "Media.Playback", 1, 0);
auto_register!(Gauge, "Media.Playback", 1, 1, "DepthGauge");

fn record<T: Clone + 'static>(signal: &Signal<T>) -> Rc<RefCell<Vec<T>>> {
    let seen = Rc::new(RefCell::new(Vec::new()));
    let sink = Rc::clone(&seen);
    signal.connect(move |value: &T| sink.borrow_mut().push(value.clone()));
    seen
}

reactive_object! {
    struct Viewport {
        writable origin: (f32, f32),
        writable rgba: [u8; 4],
        writable timeout: Duration = Duration::from_millis(500),
        writable(by_ref) rows: Range<usize> = 0..25,
        list layers: Track,
    }
}

#[test]
fn foreign_types_are_properties() {
    let mut viewport = Viewport::new();

    assert!(viewport.set_origin((3.0, 4.0)));
    assert_eq!(viewport.origin(), &(3.0, 4.0));
    assert!(viewport.set_rgba([1, 2, 3, 4]));
    assert_eq!(viewport.rgba()[2], 3);
    let timeout: Duration = viewport.timeout();
    assert_eq!(timeout, Duration::from_millis(500));

    let rows = record(viewport.rows_changed());
    assert_eq!(viewport.rows(), &(0..25));
    assert!(viewport.set_rows(25..50));
    assert_eq!(*rows.borrow(), vec![25..50]);

    viewport.layers_mut().append(Track::default());
    assert_eq!(viewport.layers().len(), 1);
}

#[test]
fn count_scenario() {
    let mut player = Player::new();
    let seen = record(player.count_changed());

    assert!(player.set_count(5));
    assert_eq!(player.count(), 5);
    assert_eq!(*seen.borrow(), vec![5]);

    assert!(!player.set_count(5));
    assert_eq!(*seen.borrow(), vec![5]);

    assert!(player.set_count(0));
    assert_eq!(player.count(), 0);
    assert_eq!(*seen.borrow(), vec![5, 0]);
}

#[test]
fn custom_types_are_read_by_reference() {
    let mut player = Player::new();
    let track = Track {
        title: "Intro".to_owned(),
        seconds: 61,
    };

    assert!(player.set_current(track.clone()));
    let current: &Track = player.current();
    assert_eq!(current, &track);
    assert!(!player.set_current(track));
}

#[test]
fn enum_classes_are_read_by_value() {
    let mut player = Player::new();
    let seen = record(player.repeat_changed());

    let repeat: Repeat = player.repeat();
    assert_eq!(repeat, Repeat::Off);
    assert!(player.set_repeat(Repeat::All));
    assert!(player.reset_repeat());
    assert_eq!(*seen.borrow(), vec![Repeat::All, Repeat::Off]);
}

#[test]
fn read_only_changes_from_inside_its_module() {
    let mut player = Player::new();
    let seen = record(player.position_changed());

    assert!(player.tick());
    assert!(player.tick());
    assert_eq!(player.position(), 2);
    assert!(player.stop());
    assert!(!player.stop());
    assert_eq!(*seen.borrow(), vec![1, 2, 0]);
}

#[test]
fn constants_are_fixed() {
    let player = Player::new();
    assert_eq!(player.backend(), "alsa");

    let backend = Player::property("backend").unwrap();
    assert_eq!(backend.mutability, Mutability::Constant);
    assert_eq!(backend.write, None);
    assert_eq!(backend.notify, None);
}

#[test]
fn build_uses_framework_names() {
    assert_eq!(naming::ACTIVE, Conventions::FRAMEWORK);

    let count = Player::property("count").unwrap();
    assert_eq!(count.read, "count");
    assert_eq!(count.write, Some("set_count"));
    assert_eq!(count.notify, Some("count_changed"));
    assert_eq!(count.reset, Some("reset_count"));
}

#[test]
fn explicit_and_default_registration_names() {
    let mut catalog = TypeCatalog::new();
    Player::register(&mut catalog, "Media", 1, 0, None);
    Player::register(&mut catalog, "Media", 1, 0, Some("AudioPlayer"));
    Repeat::register(&mut catalog, "Media", 1, 0, None);

    assert!(catalog.resolve("Media", Version::new(1, 0), "Player").is_some());
    assert!(catalog.resolve("Media", Version::new(1, 0), "AudioPlayer").is_some());

    let created = catalog
        .create_as::<Player>("Media", Version::new(1, 0), "AudioPlayer")
        .unwrap();
    assert_eq!(created.backend(), "alsa");
    assert!(catalog.create("Media", Version::new(1, 0), "Repeat").is_err());
}

#[test]
fn auto_registration_from_another_crate() {
    let mut catalog = TypeCatalog::new();
    apply_pending_registrations(&mut catalog);

    let player = catalog
        .resolve("Media.Playback", Version::new(1, 3), "Player")
        .unwrap();
    assert_eq!(player.properties.len(), 5);

    let gauge = catalog
        .resolve("Media.Playback", Version::new(1, 1), "DepthGauge")
        .unwrap();
    assert_eq!(gauge.type_name, "Gauge");
    assert!(catalog.resolve("Media.Playback", Version::new(1, 0), "DepthGauge").is_none());
}
