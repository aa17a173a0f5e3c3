//! Core State trait for cyclic signal states.
//!
//! States describe a position in a machine and know their own successor,
//! so the machine advances by asking the current state rather than by
//! consulting an external table of conditionals.

use serde::{Deserialize, Serialize};
use std::fmt::Debug;

/// Trait for states of a self-advancing machine.
///
/// All methods are pure - no side effects. States are small immutable
/// values; advancing returns a new value instead of mutating in place.
///
/// # Required Traits
///
/// - `Copy`: States are plain tags, cheap to hand to observers
/// - `PartialEq`: States must be comparable for transition logic
/// - `Debug`: States must be debuggable for diagnostics
/// - `Serialize` + `Deserialize`: States appear in serialized events
///
/// # Example
///
/// ```rust
/// use crossway::core::State;
/// use serde::{Deserialize, Serialize};
///
/// #[derive(Clone, Copy, PartialEq, Debug, Serialize, Deserialize)]
/// enum Beacon {
///     On,
///     Off,
/// }
///
/// impl State for Beacon {
///     fn name(&self) -> &'static str {
///         match self {
///             Self::On => "On",
///             Self::Off => "Off",
///         }
///     }
///
///     fn next(&self) -> Self {
///         match self {
///             Self::On => Self::Off,
///             Self::Off => Self::On,
///         }
///     }
/// }
///
/// assert_eq!(Beacon::On.next().next(), Beacon::On);
/// ```
pub trait State:
    Copy + PartialEq + Debug + Serialize + for<'de> Deserialize<'de> + Send + Sync
{
    /// Get the state's name for display/logging.
    fn name(&self) -> &'static str;

    /// The state this one advances to.
    fn next(&self) -> Self;

    /// Check if this is a final (terminal) state.
    ///
    /// Default implementation returns `false`; cyclic machines never stop
    /// on their own.
    fn is_final(&self) -> bool {
        false
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Clone, Copy, PartialEq, Debug, Serialize, Deserialize)]
    enum TestState {
        Red,
        Amber,
        Green,
    }

    impl State for TestState {
        fn name(&self) -> &'static str {
            match self {
                Self::Red => "Red",
                Self::Amber => "Amber",
                Self::Green => "Green",
            }
        }

        fn next(&self) -> Self {
            match self {
                Self::Red => Self::Green,
                Self::Green => Self::Amber,
                Self::Amber => Self::Red,
            }
        }
    }

    #[test]
    fn state_name_returns_correct_value() {
        assert_eq!(TestState::Red.name(), "Red");
        assert_eq!(TestState::Amber.name(), "Amber");
        assert_eq!(TestState::Green.name(), "Green");
    }

    #[test]
    fn next_follows_the_cycle() {
        let mut state = TestState::Red;
        let mut path = vec![state];
        for _ in 0..3 {
            state = state.next();
            path.push(state);
        }

        assert_eq!(
            path,
            vec![
                TestState::Red,
                TestState::Green,
                TestState::Amber,
                TestState::Red
            ]
        );
    }

    #[test]
    fn default_is_not_final() {
        assert!(!TestState::Red.is_final());
        assert!(!TestState::Green.is_final());
    }

    #[test]
    fn state_serializes_correctly() {
        let state = TestState::Amber;
        let json = serde_json::to_string(&state).unwrap();
        let deserialized: TestState = serde_json::from_str(&json).unwrap();
        assert_eq!(state, deserialized);
    }
}
