//! Dual-compartment loads and truck capacity.
//!
//! Sizes and limits are `u32`; compartment totals are `u64` with saturating
//! sums.

use std::ops::{Add, AddAssign};

use super::{Container, Temperature};

/// Cargo carried by one truck, split by compartment.
///
/// # Examples
///
/// ```
/// use u_dispatch::models::{Load, Temperature};
///
/// let mut load = Load::default();
/// load.add_units(Temperature::Ambient, 3);
/// load.add_units(Temperature::Refrigerated, 2);
/// assert_eq!(load.ambient(), 3);
/// assert_eq!(load.get(Temperature::Refrigerated), 2);
/// ```
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Load {
    ambient: u64,
    refrigerated: u64,
}

impl Load {
    /// Creates a load from compartment totals.
    pub fn new(ambient: u64, refrigerated: u64) -> Self {
        Self {
            ambient,
            refrigerated,
        }
    }

    /// Load of a single container.
    pub fn of(container: &Container) -> Self {
        let mut load = Self::default();
        load.add_units(container.temperature(), container.size());
        load
    }

    /// Ambient compartment total.
    pub fn ambient(&self) -> u64 {
        self.ambient
    }

    /// Refrigerated compartment total.
    pub fn refrigerated(&self) -> u64 {
        self.refrigerated
    }

    /// Total for the given compartment.
    pub fn get(&self, temperature: Temperature) -> u64 {
        match temperature {
            Temperature::Ambient => self.ambient,
            Temperature::Refrigerated => self.refrigerated,
        }
    }

    /// Adds `size` units to the given compartment.
    pub fn add_units(&mut self, temperature: Temperature, size: u32) {
        let slot = match temperature {
            Temperature::Ambient => &mut self.ambient,
            Temperature::Refrigerated => &mut self.refrigerated,
        };
        *slot = slot.saturating_add(u64::from(size));
    }

    /// Returns `true` if nothing is loaded.
    pub fn is_empty(&self) -> bool {
        self.ambient == 0 && self.refrigerated == 0
    }
}

impl Add for Load {
    type Output = Load;

    fn add(self, rhs: Load) -> Load {
        Load {
            ambient: self.ambient.saturating_add(rhs.ambient),
            refrigerated: self.refrigerated.saturating_add(rhs.refrigerated),
        }
    }
}

impl AddAssign for Load {
    fn add_assign(&mut self, rhs: Load) {
        *self = *self + rhs;
    }
}

/// Per-truck compartment limits, shared by the whole fleet.
///
/// # Examples
///
/// ```
/// use u_dispatch::models::{Container, Load, Temperature, TruckCapacity};
///
/// let cap = TruckCapacity::new(10, 5).unwrap();
/// let c = Container::new("c", 0, 1, 4, Temperature::Refrigerated);
/// assert!(cap.can_add(&Load::new(10, 1), &c));
/// assert!(!cap.can_add(&Load::new(0, 2), &c));
/// assert!(TruckCapacity::new(0, 5).is_none());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TruckCapacity {
    ambient: u32,
    refrigerated: u32,
}

impl TruckCapacity {
    /// Creates a capacity. Returns `None` unless both compartments are positive.
    pub fn new(ambient: u32, refrigerated: u32) -> Option<Self> {
        if ambient == 0 || refrigerated == 0 {
            return None;
        }
        Some(Self {
            ambient,
            refrigerated,
        })
    }

    /// Ambient compartment limit.
    pub fn ambient(&self) -> u32 {
        self.ambient
    }

    /// Refrigerated compartment limit.
    pub fn refrigerated(&self) -> u32 {
        self.refrigerated
    }

    /// Limit of the given compartment.
    pub fn get(&self, temperature: Temperature) -> u32 {
        match temperature {
            Temperature::Ambient => self.ambient,
            Temperature::Refrigerated => self.refrigerated,
        }
    }

    /// Returns `true` if `load` fits in both compartments.
    pub fn fits(&self, load: &Load) -> bool {
        load.ambient <= u64::from(self.ambient)
            && load.refrigerated <= u64::from(self.refrigerated)
    }

    /// Returns `true` if `container` can be added on top of `load`.
    pub fn can_add(&self, load: &Load, container: &Container) -> bool {
        let t = container.temperature();
        load.get(t).saturating_add(u64::from(container.size())) <= u64::from(self.get(t))
    }

    /// Returns `true` if an empty truck could carry `container`.
    pub fn can_carry(&self, container: &Container) -> bool {
        container.size() <= self.get(container.temperature())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_load_add_ops() {
        let a = Load::new(1, 2);
        let mut b = Load::new(3, 4);
        assert_eq!(a + b, Load::new(4, 6));
        b += a;
        assert_eq!(b, Load::new(4, 6));
        assert!(Load::default().is_empty());
    }

    #[test]
    fn test_load_of_container() {
        let c = Container::new("c", 0, 1, 3, Temperature::Refrigerated);
        assert_eq!(Load::of(&c), Load::new(0, 3));
    }

    #[test]
    fn test_compartments_independent() {
        let cap = TruckCapacity::new(10, 6).expect("valid");
        assert!(cap.fits(&Load::new(10, 6)));
        assert!(!cap.fits(&Load::new(11, 0)));
        assert!(!cap.fits(&Load::new(0, 7)));
        let am = Container::new("a", 0, 1, 5, Temperature::Ambient);
        assert!(cap.can_add(&Load::new(5, 6), &am));
        assert!(!cap.can_add(&Load::new(6, 0), &am));
    }

    #[test]
    fn test_large_sizes_do_not_wrap() {
        let big = 3_000_000_000;
        let cap = TruckCapacity::new(4_000_000_000, 1).expect("valid");
        let c = Container::new("a", 0, 1, big, Temperature::Ambient);
        let one = Load::of(&c);
        assert!(cap.can_add(&Load::default(), &c));
        assert!(!cap.can_add(&one, &c));
        let two = one + one;
        assert_eq!(two.ambient(), 6_000_000_000);
        assert!(!cap.fits(&two));

        let mut full = Load::new(u64::MAX, 0);
        full += one;
        assert_eq!(full.ambient(), u64::MAX);
        assert!(!cap.can_add(&full, &c));
    }

    #[test]
    fn test_can_carry() {
        let cap = TruckCapacity::new(3, 5).expect("valid");
        assert!(!cap.can_carry(&Container::new("a", 0, 1, 4, Temperature::Ambient)));
        assert!(cap.can_carry(&Container::new("r", 0, 1, 4, Temperature::Refrigerated)));
    }
}
