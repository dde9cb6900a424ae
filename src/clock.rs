use jiff::Timestamp;

/// Source of "now" for everything the repository stamps.
pub trait Clock: Send + Sync {
    fn now(&self) -> Timestamp;
}

/// Wall clock, used outside of tests
#[derive(Debug, Default, Clone, Copy)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn now(&self) -> Timestamp {
        Timestamp::now()
    }
}

#[cfg(test)]
pub mod testing {
    use jiff::Timestamp;
    use parking_lot::Mutex;

    use super::Clock;

    /// Always returns the same instant
    pub struct FixedClock(pub Timestamp);

    impl Clock for FixedClock {
        fn now(&self) -> Timestamp {
            self.0
        }
    }

    /// Hands out a preset list of instants, repeating the last one once exhausted
    pub struct ScriptedClock {
        instants: Mutex<Vec<Timestamp>>,
    }

    impl ScriptedClock {
        pub fn new(mut instants: Vec<Timestamp>) -> Self {
            instants.reverse();
            Self {
                instants: Mutex::new(instants),
            }
        }

        pub fn from_seconds(seconds: &[i64]) -> Self {
            Self::new(
                seconds
                    .iter()
                    .map(|s| Timestamp::from_second(*s).unwrap())
                    .collect(),
            )
        }
    }

    impl Clock for ScriptedClock {
        fn now(&self) -> Timestamp {
            let mut instants = self.instants.lock();
            if instants.len() > 1 {
                instants.pop().unwrap()
            } else {
                instants.last().copied().unwrap_or(Timestamp::UNIX_EPOCH)
            }
        }
    }

    #[test]
    fn test_scripted_clock_repeats_last_instant() {
        let clock = ScriptedClock::from_seconds(&[1, 3]);
        assert_eq!(clock.now().as_second(), 1);
        assert_eq!(clock.now().as_second(), 3);
        assert_eq!(clock.now().as_second(), 3);
    }
}
