use crate::{SetError, INITIAL_CAPACITY};

/// Sizing of an [`OpenAddressSet`](crate::OpenAddressSet).
///
/// `max_capacity` is where doubling stops: the first resize that would go past
/// it lands exactly on it, and the set refuses to grow after that. `None`
/// means the largest table the element type allows.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub struct SetConfig {
    pub initial_capacity: usize,
    pub max_capacity: Option<usize>,
}

impl SetConfig {
    pub fn with_initial_capacity(self, initial_capacity: usize) -> Self {
        SetConfig {
            initial_capacity,
            ..self
        }
    }

    pub fn with_max_capacity(self, max_capacity: usize) -> Self {
        SetConfig {
            max_capacity: Some(max_capacity),
            ..self
        }
    }

    pub fn validate(&self) -> Result<(), SetError> {
        if !self.initial_capacity.is_power_of_two() {
            return Err(SetError::InvalidConfig(
                "initial capacity must be a nonzero power of two",
            ));
        }
        match self.max_capacity {
            Some(max) if max < self.initial_capacity => Err(SetError::InvalidConfig(
                "max capacity is below the initial capacity",
            )),
            _ => Ok(()),
        }
    }
}

impl Default for SetConfig {
    fn default() -> Self {
        SetConfig {
            initial_capacity: INITIAL_CAPACITY,
            max_capacity: None,
        }
    }
}
