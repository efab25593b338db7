use std::ops::{Add, Mul};

use serde::{Deserialize, Serialize};

/// Grid coordinate, `Dims(x, y)` where x is the column and y the row.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct Dims(pub i32, pub i32);

impl Dims {
    pub fn all_non_negative(self) -> bool {
        self.0 >= 0 && self.1 >= 0
    }

    /// Whether both coordinates are odd, i.e. the position lies on the room lattice.
    pub fn all_odd(self) -> bool {
        self.0 % 2 == 1 && self.1 % 2 == 1
    }
}

impl Add for Dims {
    type Output = Dims;

    fn add(self, other: Dims) -> Dims {
        Dims(self.0 + other.0, self.1 + other.1)
    }
}

impl Mul<i32> for Dims {
    type Output = Dims;

    fn mul(self, other: i32) -> Dims {
        Dims(self.0 * other, self.1 * other)
    }
}

#[cfg(test)]
mod tests {
    use super::Dims;

    #[test]
    fn arithmetic() {
        assert_eq!(Dims(1, 1) + Dims(2, 0), Dims(3, 1));
        assert_eq!(Dims(0, -1) * 2, Dims(0, -2));
        assert_eq!(Dims(1, 1) + Dims(-1, 0) * 2, Dims(-1, 1));
    }

    #[test]
    fn room_lattice() {
        assert!(Dims(1, 3).all_odd());
        assert!(!Dims(2, 3).all_odd());
        assert!(!Dims(0, 0).all_odd());
        assert!(!Dims(-1, 1).all_non_negative());
    }
}
